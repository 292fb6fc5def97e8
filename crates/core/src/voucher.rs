//! Voucher types and the line-discount gate.
//!
//! Whether a voucher's discount is prorated over lines is caller policy:
//! the gate lives here, next to the voucher taxonomy, and is evaluated by
//! the checkout and order pipelines before the allocator runs. The
//! allocator itself carries no voucher knowledge.

use serde::{Deserialize, Serialize};

/// The kind of discount a voucher grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoucherType {
    /// Discount on the entire checkout or order value.
    EntireOrder,
    /// Discount on specific products only.
    SpecificProduct,
    /// Discount on shipping cost only.
    Shipping,
}

impl VoucherType {
    /// Whether this voucher's discount applies to line prices.
    ///
    /// Shipping vouchers discount the shipping cost, never the lines.
    #[must_use]
    pub const fn applies_to_lines(self) -> bool {
        !matches!(self, Self::Shipping)
    }
}

/// Gate for line-level discount proration.
///
/// Proration is skipped when there is no voucher at all or the voucher is
/// shipping-only.
#[must_use]
pub fn discount_applies_to_lines(voucher: Option<VoucherType>) -> bool {
    voucher.is_some_and(VoucherType::applies_to_lines)
}
