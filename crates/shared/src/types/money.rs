//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.
//!
//! Arithmetic between two `Money` values is only defined for matching
//! currencies; mixing currencies is a caller contract violation and is
//! reported through [`MoneyError::CurrencyMismatch`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for money arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    /// Arithmetic attempted between two different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency on the left-hand side.
        left: Currency,
        /// Currency on the right-hand side.
        right: Currency,
    },

    /// Division by a zero quantity.
    #[error("Cannot divide a monetary amount by zero")]
    DivisionByZero,
}

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount, at arbitrary scale until quantized.
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "USD", "IDR").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Indonesian Rupiah
    Idr,
    /// Euro
    Eur,
    /// Singapore Dollar
    Sgd,
    /// Japanese Yen
    Jpy,
}

impl Currency {
    /// Number of decimal places in the currency's minor unit.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Usd | Self::Idr | Self::Eur | Self::Sgd => 2,
            Self::Jpy => 0,
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds the amount to the currency's decimal places.
    ///
    /// Uses round half up (`MidpointAwayFromZero`), the canonical rule for
    /// customer-facing prices: 0.005 rounds to 0.01.
    #[must_use]
    pub fn quantized(self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.decimal_places(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }

    /// Adds two amounts of the same currency.
    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts an amount of the same currency.
    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Scales the amount by an item quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency)
    }

    /// Divides the amount by an item quantity, quantized to currency
    /// precision.
    pub fn per_unit(self, quantity: u32) -> Result<Self, MoneyError> {
        if quantity == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self::new(self.amount / Decimal::from(quantity), self.currency).quantized())
    }

    fn require_same_currency(self, other: Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Idr => write!(f, "IDR"),
            Self::Eur => write!(f, "EUR"),
            Self::Sgd => write!(f, "SGD"),
            Self::Jpy => write!(f, "JPY"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "IDR" => Ok(Self::Idr),
            "EUR" => Ok(Self::Eur),
            "SGD" => Ok(Self::Sgd),
            "JPY" => Ok(Self::Jpy),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
