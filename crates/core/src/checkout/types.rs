//! Checkout line types as seen by the pricing pipeline.

use serde::{Deserialize, Serialize};
use vendra_shared::Money;
use vendra_shared::types::CheckoutLineId;

/// A checkout line ready for voucher discount application.
///
/// The unit price must already include channel listing and sale discounts;
/// the voucher discount is prorated on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutLine {
    /// Identity of the checkout line.
    pub id: CheckoutLineId,
    /// Unit price with upstream discounts already applied.
    pub base_unit_price: Money,
    /// Number of units. Must be at least 1.
    pub quantity: u32,
}

/// A checkout line after voucher discount application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedCheckoutLine {
    /// Identity of the checkout line.
    pub id: CheckoutLineId,
    /// Final unit price, quantized to currency precision.
    pub unit_price: Money,
    /// The voucher discount allocated to this line (zero when the gate
    /// skipped proration).
    pub discount_amount: Money,
}
