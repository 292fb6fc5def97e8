//! Shared types for Vendra pricing.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision and currency-aware rounding
//! - Typed IDs for type-safe entity references

pub mod types;

pub use types::money::{Currency, Money, MoneyError};
