//! Property-based tests for discount allocation.
//!
//! - Sum exactness: allocations always sum to the rounded total
//! - Proportionality: non-last shares stay within half a rounding unit
//! - Order sensitivity: reordering moves the drift, never the sum

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::allocation::{DiscountAllocator, allocate_proportional};
use super::types::LineItem;
use vendra_shared::{Currency, Money};

/// Strategy to generate a non-negative discount (0.00 to 10,000.00).
fn discount_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate line weights (cents), at least one non-zero.
fn line_weights() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0i64..1_000_000i64, 2..8)
        .prop_filter("weights must not all be zero", |v| v.iter().sum::<i64>() > 0)
        .prop_map(|v| v.into_iter().map(|cents| Decimal::new(cents, 2)).collect())
}

/// Strategy to generate priced lines (unit price cents, quantity).
fn priced_lines() -> impl Strategy<Value = Vec<(i64, u32)>> {
    prop::collection::vec((1i64..100_000i64, 1u32..10), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* valid weights and discount, the allocated shares SHALL
    /// sum to the total exactly.
    #[test]
    fn prop_sum_exactness(total in discount_amount(), weights in line_weights()) {
        let shares = allocate_proportional(total, &weights, 2).unwrap();
        let sum: Decimal = shares.iter().copied().sum();
        prop_assert_eq!(sum, total, "shares {:?} must sum to {}", shares, total);
    }

    /// *For any* valid input, each non-last share SHALL be within half a
    /// rounding unit of its exact proportional value.
    #[test]
    fn prop_non_last_shares_proportional(total in discount_amount(), weights in line_weights()) {
        let shares = allocate_proportional(total, &weights, 2).unwrap();
        let weight_sum: Decimal = weights.iter().copied().sum();
        let half_unit = Decimal::new(5, 3); // 0.005

        for (weight, share) in weights.iter().zip(&shares).take(weights.len() - 1) {
            let exact = weight / weight_sum * total;
            let drift = (*share - exact).abs();
            prop_assert!(
                drift <= half_unit,
                "share {} drifts {} from exact {}",
                share, drift, exact
            );
        }
    }

    /// *For any* rotation of the lines, the sum of allocations SHALL be
    /// unchanged; only which line absorbs the drift moves.
    #[test]
    fn prop_rotation_preserves_sum(total in discount_amount(), weights in line_weights()) {
        let baseline: Decimal = allocate_proportional(total, &weights, 2)
            .unwrap()
            .iter()
            .copied()
            .sum();

        let mut rotated = weights.clone();
        rotated.rotate_left(1);
        let rotated_sum: Decimal = allocate_proportional(total, &rotated, 2)
            .unwrap()
            .iter()
            .copied()
            .sum();

        prop_assert_eq!(baseline, rotated_sum);
    }

    /// *For any* lines, allocating through the Money-typed allocator SHALL
    /// preserve the total and the input order.
    #[test]
    fn prop_allocator_sum_and_order(total in discount_amount(), specs in priced_lines()) {
        let lines: Vec<LineItem<usize>> = specs
            .iter()
            .enumerate()
            .map(|(i, (cents, quantity))| LineItem {
                id: i,
                unit_price: Money::new(Decimal::new(*cents, 2), Currency::Usd),
                quantity: *quantity,
            })
            .collect();

        let discount = Money::new(total, Currency::Usd);
        let allocated = DiscountAllocator::allocate(&lines, discount).unwrap();

        let sum: Decimal = allocated.iter().map(|a| a.amount.amount).sum();
        prop_assert_eq!(sum, total);
        for (i, entry) in allocated.iter().enumerate() {
            prop_assert_eq!(entry.line_id, i);
        }
    }

    /// *For any* lines, a zero discount SHALL allocate zero everywhere.
    #[test]
    fn prop_zero_discount_all_zero(specs in priced_lines()) {
        let lines: Vec<LineItem<usize>> = specs
            .iter()
            .enumerate()
            .map(|(i, (cents, quantity))| LineItem {
                id: i,
                unit_price: Money::new(Decimal::new(*cents, 2), Currency::Usd),
                quantity: *quantity,
            })
            .collect();

        let allocated =
            DiscountAllocator::allocate(&lines, Money::zero(Currency::Usd)).unwrap();
        prop_assert!(allocated.iter().all(|a| a.amount.is_zero()));
    }
}
