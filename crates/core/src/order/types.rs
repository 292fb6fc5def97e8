//! Order line types as seen by the pricing pipeline.

use serde::{Deserialize, Serialize};
use vendra_shared::Money;
use vendra_shared::types::OrderLineId;

/// An order line ready for voucher discount application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Identity of the order line.
    pub id: OrderLineId,
    /// Unit price at order placement, before the voucher discount.
    pub base_unit_price: Money,
    /// Number of units. Must be at least 1.
    pub quantity: u32,
}

/// An order line after voucher discount application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricedOrderLine {
    /// Identity of the order line.
    pub id: OrderLineId,
    /// Final unit price, quantized to currency precision.
    pub unit_price: Money,
    /// The voucher discount allocated to this line (zero when the gate
    /// skipped proration).
    pub discount_amount: Money,
}
