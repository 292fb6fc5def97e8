//! Proportional discount allocation with exact-sum rounding.

pub mod allocation;
pub mod apply;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use allocation::{DiscountAllocator, allocate_proportional};
pub use apply::discounted_unit_price;
pub use error::DiscountError;
pub use types::{LineDiscount, LineItem};
