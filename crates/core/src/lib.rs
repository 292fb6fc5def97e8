//! Core pricing logic for Vendra.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All pricing types, validation rules, and calculations live
//! here.
//!
//! # Modules
//!
//! - `discount` - Proportional discount allocation with exact-sum rounding
//! - `voucher` - Voucher types and the line-discount gate
//! - `checkout` - Checkout-level discount application to checkout lines
//! - `order` - Order-level discount application to order lines

pub mod checkout;
pub mod discount;
pub mod order;
pub mod voucher;
