//! Input and output types for discount allocation.

use serde::{Deserialize, Serialize};
use vendra_shared::Money;

/// A priced line item to allocate a discount over.
///
/// Generic over the ID type so checkout lines and order lines keep their
/// typed identifiers through the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem<Id> {
    /// Identity of the line; returned unchanged in the allocation result.
    pub id: Id,
    /// Pre-discount unit price of the line.
    pub unit_price: Money,
    /// Number of units on the line. Must be at least 1.
    pub quantity: u32,
}

impl<Id> LineItem<Id> {
    /// The line total: unit price times quantity.
    #[must_use]
    pub fn total(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The discount amount allocated to one line.
///
/// Results are returned in input order; the last line in that order is the
/// one that absorbs rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiscount<Id> {
    /// Identity of the line the amount belongs to.
    pub line_id: Id,
    /// Allocated discount, quantized to currency precision.
    pub amount: Money,
}
