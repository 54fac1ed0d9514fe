//! Rendering of rental agreements into the fixed receipt layout.
//! Twelve lines joined by `\n` with no trailing newline; dates print as
//! `MM/dd/yy`, amounts with two decimals and the discount percent with
//! one. Monetary values are rounded here, at the presentation boundary.

use crate::checkout::RentalAgreement;
use crate::date_format::format_receipt_date;

/// Render the receipt text for a rental agreement
pub fn render(agreement: &RentalAgreement) -> String {
    let lines = [
        format!("Tool Code: {}", agreement.tool.code),
        format!("Tool Type: {}", agreement.tool.tool_type),
        format!("Tool Brand: {}", agreement.tool.brand),
        format!("Rental days: {}", agreement.rental_day_count),
        format!("Checkout date: {}", format_receipt_date(agreement.checkout_date)),
        format!("Due date: {}", format_receipt_date(agreement.due_date)),
        format!("Daily rental rate: ${:.2}", agreement.tool.daily_rate),
        format!("Charge days: {}", agreement.charge_day_count),
        format!("Pre-discount cost: ${:.2}", agreement.pre_discount_charge),
        format!("Discount percent: {:.1}%", agreement.discount_percent),
        format!("Discount amount: ${:.2}", agreement.discount_amount),
        format!("Final Charge: ${:.2}", agreement.final_charge),
    ];
    lines.join("\n")
}
