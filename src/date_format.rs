//! Parsing of loosely formatted U.S. checkout dates.
//! Customers enter dates like `9/3/15`, `09/03/15` or `9/3/2015`; all of
//! them must resolve to the same calendar date. Receipts always print
//! dates as `MM/dd/yy`.

use chrono::NaiveDate;
use thiserror::Error;

/// Error type related to checkout date parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DateFormatError {
    #[error("'{0}' could not be read as a month/day/year date.")]
    UnrecognizedFormat(String),
}

/// Format used for dates on printed receipts
pub const RECEIPT_DATE_FORMAT: &str = "%m/%d/%y";

/// Accepted input patterns, tried in order until one parses.
/// chrono's numeric specifiers accept one- or two-digit month and day, so
/// two patterns cover all padded and unpadded month/day/year variants.
/// The two-digit year pattern comes first so that `6/12/23` resolves via
/// chrono's century pivot instead of as the year 23.
const CHECKOUT_DATE_PATTERNS: [&str; 2] = ["%m/%d/%y", "%m/%d/%Y"];

/// Parse a checkout date, accepting any of the supported patterns
pub fn parse_checkout_date(text: &str) -> Result<NaiveDate, DateFormatError> {
    for pattern in &CHECKOUT_DATE_PATTERNS {
        if let Ok(date) = NaiveDate::parse_from_str(text, pattern) {
            return Ok(date);
        }
    }
    Err(DateFormatError::UnrecognizedFormat(text.to_string()))
}

/// Render a date the way receipts print it, as `MM/dd/yy`
pub fn format_receipt_date(date: NaiveDate) -> String {
    date.format(RECEIPT_DATE_FORMAT).to_string()
}
