//! Checkout of rental tools.
//! Validates the rental request, resolves the tool against the catalog,
//! counts chargeable days and computes the discounted charge, producing
//! an immutable [`RentalAgreement`].

use std::fmt;

use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{CatalogError, ToolCatalog, ToolDefinition};
use crate::charge_days::{count_charge_days, ChargeRules};
use crate::date_format::{parse_checkout_date, DateFormatError};
use crate::receipt;

/// Error type related to a tool checkout.
/// Request parameters are validated in a fixed order (tool code, checkout
/// date, day count, discount), so the first violation reported is
/// deterministic when several parameters are bad.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckoutError {
    #[error("A tool code is required to check out a tool.")]
    MissingToolCode,
    #[error("A checkout date is required to check out a tool.")]
    MissingCheckoutDate,
    #[error("Rental day count of {0} is invalid. Please have at least one day for tool rental.")]
    InvalidRentalDayCount(i32),
    #[error("Discount of {0:.1} is invalid. Please input a discount between 0 and 100 inclusively.")]
    DiscountOutOfBounds(f64),
    #[error("{0}")]
    UnknownTool(#[from] CatalogError),
    #[error("{0}")]
    DateFormat(#[from] DateFormatError),
}

/// Parameters of a single checkout, as entered at the counter
#[derive(Debug, Clone)]
pub struct RentalRequest {
    pub tool_code: String,
    pub checkout_date_text: String,
    pub rental_day_count: i32,
    pub discount_percent: f64,
}

/// The finished pricing agreement for one rental.
/// Monetary fields hold amounts in USD; `discount_amount` and
/// `final_charge` are rounded to whole cents, half up.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RentalAgreement {
    pub tool: ToolDefinition,
    pub checkout_date: NaiveDate,
    pub due_date: NaiveDate,
    pub rental_day_count: i32,
    pub discount_percent: f64,
    pub charge_day_count: u32,
    pub pre_discount_charge: f64,
    pub discount_amount: f64,
    pub final_charge: f64,
}

impl RentalAgreement {
    /// Render the agreement in the fixed receipt layout
    pub fn receipt(&self) -> String {
        receipt::render(self)
    }
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.receipt())
    }
}

/// Computes rental agreements against an injected, read-only catalog
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: ToolCatalog,
}

impl PricingEngine {
    pub fn new(catalog: ToolCatalog) -> PricingEngine {
        PricingEngine { catalog }
    }

    /// Check out a tool, producing the priced rental agreement.
    /// Fails fast with the first violated precondition; no partial
    /// agreement is ever returned.
    pub fn checkout(&self, request: RentalRequest) -> Result<RentalAgreement, CheckoutError> {
        if request.tool_code.is_empty() {
            return Err(CheckoutError::MissingToolCode);
        }
        if request.checkout_date_text.is_empty() {
            return Err(CheckoutError::MissingCheckoutDate);
        }
        if request.rental_day_count < 1 {
            return Err(CheckoutError::InvalidRentalDayCount(request.rental_day_count));
        }
        if !(0.0..=100.0).contains(&request.discount_percent) {
            return Err(CheckoutError::DiscountOutOfBounds(request.discount_percent));
        }

        let tool = self.catalog.lookup(&request.tool_code)?.clone();
        let checkout_date = parse_checkout_date(&request.checkout_date_text)?;
        let due_date = checkout_date + Duration::days(request.rental_day_count as i64);
        let charge_day_count = count_charge_days(
            checkout_date,
            request.rental_day_count,
            ChargeRules::from(&tool),
        );

        let pre_discount_charge = charge_day_count as f64 * tool.daily_rate;
        let discount_amount =
            round_to_cents(pre_discount_charge * request.discount_percent / 100.0);
        let final_charge = round_to_cents(pre_discount_charge - discount_amount);
        debug!(
            "checkout of {} for {} days from {}: {} charge days, final charge {:.2}",
            tool.code, request.rental_day_count, checkout_date, charge_day_count, final_charge
        );

        Ok(RentalAgreement {
            tool,
            checkout_date,
            due_date,
            rental_day_count: request.rental_day_count,
            discount_percent: request.discount_percent,
            charge_day_count,
            pre_discount_charge,
            discount_amount,
            final_charge,
        })
    }

    /// Convenience entry point taking the four counter inputs directly
    pub fn checkout_tool(
        &self,
        tool_code: &str,
        checkout_date_text: &str,
        rental_day_count: i32,
        discount_percent: f64,
    ) -> Result<RentalAgreement, CheckoutError> {
        self.checkout(RentalRequest {
            tool_code: tool_code.to_string(),
            checkout_date_text: checkout_date_text.to_string(),
            rental_day_count,
            discount_percent,
        })
    }
}

/// Round a non-negative USD amount to whole cents, half up
fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
