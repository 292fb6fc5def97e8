//! Applying an allocated discount back to a unit price.

use vendra_shared::Money;

use super::error::DiscountError;

/// Compute the discounted unit price for a line.
///
/// Subtracts the line's allocated discount from its total, divides by the
/// quantity, and quantizes to currency precision:
/// `quantize((unit_price * quantity - allocated) / quantity)`.
///
/// # Errors
///
/// Fails with [`DiscountError::ZeroQuantity`] for a zero quantity, or a
/// currency mismatch between the price and the allocated discount.
pub fn discounted_unit_price(
    base_unit_price: Money,
    quantity: u32,
    allocated: Money,
) -> Result<Money, DiscountError> {
    if quantity == 0 {
        return Err(DiscountError::ZeroQuantity);
    }
    let discounted_total = base_unit_price.times(quantity).checked_sub(allocated)?;
    Ok(discounted_total.per_unit(quantity)?)
}
