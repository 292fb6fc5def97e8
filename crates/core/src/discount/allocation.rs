//! Discount allocation using the last-element remainder method.
//!
//! This module provides functions for splitting a total discount across
//! priced lines while ensuring the sum exactly equals the original total
//! (no cents lost).
//!
//! The last-element remainder method works by:
//! 1. Calculate each non-last share proportionally to its weight
//! 2. Round each share to currency precision (round half up)
//! 3. Assign the last share as `total - sum(rounded shares)`
//!
//! This concentrates all rounding drift on the last element: with many
//! lines the last share may deviate further from its exact proportional
//! value. That trade-off is accepted; callers control which line is last
//! by controlling input order.

use rust_decimal::{Decimal, RoundingStrategy};
use vendra_shared::Money;

use super::error::DiscountError;
use super::types::{LineDiscount, LineItem};

/// Allocate a total proportionally to weights, exact-sum.
///
/// Non-last shares are rounded half up to `decimal_places`; the last share
/// is the remainder, so the returned values always sum to `total` (itself
/// rounded to `decimal_places` first).
///
/// # Errors
///
/// Returns [`DiscountError::EmptyLines`] for an empty weight slice, and
/// [`DiscountError::ZeroTotalPrice`] when the weights sum to zero while a
/// non-zero total must be split.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use vendra_core::discount::allocate_proportional;
///
/// // 5.00 split over weights 10/20/30, last element absorbs the remainder
/// let shares = allocate_proportional(dec!(5.00), &[dec!(10), dec!(20), dec!(30)], 2).unwrap();
/// assert_eq!(shares, vec![dec!(0.83), dec!(1.67), dec!(2.50)]);
/// assert_eq!(shares.iter().sum::<rust_decimal::Decimal>(), dec!(5.00));
/// ```
pub fn allocate_proportional(
    total: Decimal,
    weights: &[Decimal],
    decimal_places: u32,
) -> Result<Vec<Decimal>, DiscountError> {
    if weights.is_empty() {
        return Err(DiscountError::EmptyLines);
    }

    // Round total to target precision first so the remainder is exact at
    // that precision too.
    let total_rounded =
        total.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);

    // A single recipient absorbs the whole total, no proration needed.
    if weights.len() == 1 {
        return Ok(vec![total_rounded]);
    }

    if total_rounded.is_zero() {
        return Ok(vec![Decimal::ZERO; weights.len()]);
    }

    let weight_sum: Decimal = weights.iter().copied().sum();
    if weight_sum.is_zero() {
        return Err(DiscountError::ZeroTotalPrice);
    }

    // Phase 1: every share except the last, rounded independently.
    let mut shares = Vec::with_capacity(weights.len());
    let mut allocated = Decimal::ZERO;
    for weight in &weights[..weights.len() - 1] {
        let share = (weight / weight_sum * total_rounded)
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
        allocated += share;
        shares.push(share);
    }

    // Phase 2: the last share is the remainder, guaranteeing exact sum.
    shares.push(total_rounded - allocated);

    Ok(shares)
}

/// Allocator for prorating a monetary discount across priced lines.
///
/// Wraps [`allocate_proportional`] with currency checking: all lines and
/// the discount must share one currency, and the rounding precision is the
/// currency's decimal places.
pub struct DiscountAllocator;

impl DiscountAllocator {
    /// Prorate `total_discount` across `lines` by line total.
    ///
    /// Returns one [`LineDiscount`] per line, in input order. The sum of
    /// the returned amounts equals `total_discount` exactly; the last line
    /// in input order absorbs rounding drift.
    ///
    /// # Errors
    ///
    /// Fails with [`DiscountError`] when `lines` is empty, a quantity is
    /// zero, currencies mismatch, the discount is negative, or all line
    /// totals are zero while a non-zero discount must be prorated.
    pub fn allocate<Id: Copy>(
        lines: &[LineItem<Id>],
        total_discount: Money,
    ) -> Result<Vec<LineDiscount<Id>>, DiscountError> {
        if lines.is_empty() {
            return Err(DiscountError::EmptyLines);
        }
        if total_discount.is_negative() {
            return Err(DiscountError::NegativeDiscount {
                amount: total_discount.amount,
            });
        }

        let currency = total_discount.currency;
        for line in lines {
            if line.quantity == 0 {
                return Err(DiscountError::ZeroQuantity);
            }
            if line.unit_price.currency != currency {
                return Err(DiscountError::CurrencyMismatch {
                    expected: currency,
                    found: line.unit_price.currency,
                });
            }
        }

        let weights: Vec<Decimal> = lines.iter().map(|line| line.total().amount).collect();
        let amounts =
            allocate_proportional(total_discount.amount, &weights, currency.decimal_places())?;

        Ok(lines
            .iter()
            .zip(amounts)
            .map(|(line, amount)| LineDiscount {
                line_id: line.id,
                amount: Money::new(amount, currency),
            })
            .collect())
    }
}
