//! Checkout-level discount application to checkout lines.

pub mod pricing;
pub mod types;

pub use pricing::apply_discount_to_lines;
pub use types::{CheckoutLine, PricedCheckoutLine};
