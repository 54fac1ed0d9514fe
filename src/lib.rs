//! # rentql
//!
//! A small pricing library for tool rentals. Given a tool code, a
//! checkout date, a rental duration and a discount percentage, it
//! determines which days of the rental period are billable under the
//! tool's charge rules (weekday, weekend and holiday rates, with U.S.
//! Independence Day and Labor Day observance), computes the discounted
//! charge and renders a fixed-format receipt.
//!
//! The usual entry point is [`PricingEngine::checkout_tool`] with the
//! standard catalog:
//!
//! ```
//! use rentql::{PricingEngine, ToolCatalog};
//!
//! let engine = PricingEngine::new(ToolCatalog::standard());
//! let agreement = engine.checkout_tool("LADW", "7/2/20", 3, 10.0)?;
//! println!("{}", agreement.receipt());
//! # Ok::<(), rentql::CheckoutError>(())
//! ```

// module exports
pub mod calendar;
pub mod catalog;
pub mod charge_days;
pub mod checkout;
pub mod date_format;
pub mod receipt;

pub use catalog::{CatalogError, ToolBrand, ToolCatalog, ToolDefinition, ToolType};
pub use checkout::{CheckoutError, PricingEngine, RentalAgreement, RentalRequest};
pub use date_format::DateFormatError;
