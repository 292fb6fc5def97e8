//! Discount allocation error types.

use rust_decimal::Decimal;
use thiserror::Error;
use vendra_shared::{Currency, MoneyError};

/// Errors raised when a discount cannot be allocated.
///
/// Every variant is a caller-side contract violation: the computation is
/// deterministic, so failures are never retried and no partial result is
/// returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// The allocation was invoked with no line items.
    #[error("Cannot allocate a discount over an empty set of lines")]
    EmptyLines,

    /// All line totals are zero but a non-zero discount must be prorated.
    #[error("Cannot prorate a non-zero discount when all line totals are zero")]
    ZeroTotalPrice,

    /// A line's currency differs from the discount currency.
    #[error("Line currency {found} does not match discount currency {expected}")]
    CurrencyMismatch {
        /// Currency of the discount being allocated.
        expected: Currency,
        /// Currency found on a line.
        found: Currency,
    },

    /// The total discount amount is negative.
    #[error("Total discount must not be negative, got {amount}")]
    NegativeDiscount {
        /// The offending amount.
        amount: Decimal,
    },

    /// A line has a zero quantity.
    #[error("Line quantity must be at least 1")]
    ZeroQuantity,

    /// Underlying money arithmetic failure.
    #[error(transparent)]
    Money(#[from] MoneyError),
}
