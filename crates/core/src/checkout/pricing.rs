//! Voucher discount proration over checkout lines.

use vendra_shared::Money;
use vendra_shared::types::CheckoutLineId;

use super::types::{CheckoutLine, PricedCheckoutLine};
use crate::discount::{DiscountAllocator, DiscountError, LineItem, discounted_unit_price};
use crate::voucher::{VoucherType, discount_applies_to_lines};

/// Apply a checkout-level voucher discount to checkout lines.
///
/// When the voucher is absent or shipping-only, lines pass through with
/// their base unit prices and a zero discount. Otherwise the checkout's
/// total discount is prorated across lines by line total, and each line's
/// unit price becomes `quantize((line_total - allocated) / quantity)`.
///
/// Results are returned in input order; the last line absorbs rounding
/// drift.
///
/// # Errors
///
/// Fails with [`DiscountError`] when the allocator's preconditions are
/// violated (empty lines, currency mismatch, negative discount, zero
/// quantity, all lines free with a non-zero discount).
pub fn apply_discount_to_lines(
    lines: &[CheckoutLine],
    voucher: Option<VoucherType>,
    total_discount: Money,
) -> Result<Vec<PricedCheckoutLine>, DiscountError> {
    if !discount_applies_to_lines(voucher) {
        tracing::debug!(?voucher, "voucher does not discount lines, skipping proration");
        return Ok(lines
            .iter()
            .map(|line| PricedCheckoutLine {
                id: line.id,
                unit_price: line.base_unit_price,
                discount_amount: Money::zero(line.base_unit_price.currency),
            })
            .collect());
    }

    tracing::debug!(
        lines = lines.len(),
        discount = %total_discount,
        "prorating checkout discount across lines"
    );

    let items: Vec<LineItem<CheckoutLineId>> = lines
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
            Ok(PricedCheckoutLine {
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
