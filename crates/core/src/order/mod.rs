//! Order-level discount application to order lines.

pub mod pricing;
pub mod types;

pub use pricing::apply_discount_to_lines;
pub use types::{OrderLine, PricedOrderLine};
