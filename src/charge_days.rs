//! Counting of billable days within a rental period.
//! The checkout day itself is never billed; every following day up to and
//! including the due date is a billing candidate and is counted at most
//! once, under the first matching charge rule.

use chrono::{Duration, NaiveDate};
use log::trace;

use crate::calendar::{is_independence_day_observed, is_weekend, observed_holiday};
use crate::catalog::ToolDefinition;

/// Which kinds of days a tool bills for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeRules {
    pub charges_weekday: bool,
    pub charges_weekend: bool,
    pub charges_holiday: bool,
}

impl From<&ToolDefinition> for ChargeRules {
    fn from(tool: &ToolDefinition) -> ChargeRules {
        ChargeRules {
            charges_weekday: tool.charges_weekday,
            charges_weekend: tool.charges_weekend,
            charges_holiday: tool.charges_holiday,
        }
    }
}

/// Count the chargeable days of a rental starting the day after
/// `checkout_date` and running for `day_count` days.
///
/// Rules are applied per date in fixed precedence:
/// 1. holiday rate, if the tool bills holidays and the date is an
///    observed holiday;
/// 2. weekend rate, if the tool bills weekends and the date is a Saturday
///    or Sunday that is not the observed Independence Day;
/// 3. weekday rate, if the tool bills weekdays and the date is a
///    Monday to Friday that is not an observed holiday.
///
/// An observed holiday on a weekday is therefore billed only under the
/// holiday rate, and tools without a holiday rate skip it entirely.
pub fn count_charge_days(checkout_date: NaiveDate, day_count: i32, rules: ChargeRules) -> u32 {
    let mut chargeable = 0;
    for i in 1..=day_count as i64 {
        let date = checkout_date + Duration::days(i);
        let holiday = observed_holiday(date);

        if rules.charges_holiday && holiday.is_some() {
            chargeable += 1;
            continue;
        }
        if is_weekend(date) {
            if rules.charges_weekend && !is_independence_day_observed(date) {
                chargeable += 1;
            }
            continue;
        }
        if rules.charges_weekday && holiday.is_none() {
            chargeable += 1;
        } else {
            trace!("skipping {}: no applicable charge rule", date);
        }
    }
    chargeable
}
