//! Voucher discount proration over order lines.

use vendra_shared::Money;
use vendra_shared::types::OrderLineId;

use super::types::{OrderLine, PricedOrderLine};
use crate::discount::{DiscountAllocator, DiscountError, LineItem, discounted_unit_price};
use crate::voucher::{VoucherType, discount_applies_to_lines};

/// Apply an order-level voucher discount to order lines.
///
/// `total_discount` must already exclude any shipping discount; the caller
/// sums the order's discounts excluding shipping before invoking this.
/// When the voucher is absent or shipping-only, lines pass through
/// unchanged with a zero discount. Otherwise the discount is prorated
/// across lines by line total and each line's unit price becomes
/// `quantize((line_total - allocated) / quantity)`.
///
/// Results are returned in input order; the last line absorbs rounding
/// drift, so callers should keep line ordering stable between
/// recalculations.
///
/// # Errors
///
/// Fails with [`DiscountError`] when the allocator's preconditions are
/// violated (empty lines, currency mismatch, negative discount, zero
/// quantity, all lines free with a non-zero discount).
pub fn apply_discount_to_lines(
    lines: &[OrderLine],
    voucher: Option<VoucherType>,
    total_discount: Money,
) -> Result<Vec<PricedOrderLine>, DiscountError> {
    if !discount_applies_to_lines(voucher) {
        tracing::debug!(?voucher, "voucher does not discount lines, skipping proration");
        return Ok(lines
            .iter()
            .map(|line| PricedOrderLine {
                id: line.id,
                unit_price: line.base_unit_price,
                discount_amount: Money::zero(line.base_unit_price.currency),
            })
            .collect());
    }

    tracing::debug!(
        lines = lines.len(),
        discount = %total_discount,
        "prorating order discount across lines"
    );

    let items: Vec<LineItem<OrderLineId>> = lines
        .iter()
        .map(|line| LineItem {
            id: line.id,
            unit_price: line.base_unit_price,
            quantity: line.quantity,
        })
        .collect();
    let allocated = DiscountAllocator::allocate(&items, total_discount)?;

    lines
        .iter()
        .zip(allocated)
        .map(|(line, discount)| {
            Ok(PricedOrderLine {
                id: line.id,
                unit_price: discounted_unit_price(
                    line.base_unit_price,
                    line.quantity,
                    discount.amount,
                )?,
                discount_amount: discount.amount,
            })
        })
        .collect()
}
