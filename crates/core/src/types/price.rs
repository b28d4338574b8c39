//! Type-safe price representation using decimal arithmetic.
//!
//! The storefront sells in a single fixed currency (new shekel), so a price
//! is a bare decimal amount rendered with the `₪` symbol. Decimal arithmetic
//! keeps line totals exact: dividing a stored total by its quantity recovers
//! the unit price without drift, which the cart relies on when scaling a
//! line to a new quantity.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in the storefront's fixed currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "₪";

    /// Zero shekels.
    pub const ZERO: Self = Self::shekels(0);

    /// A whole-shekel price.
    #[must_use]
    pub const fn shekels(units: u32) -> Self {
        Self(Decimal::from_parts(units, 0, 0, false, 0))
    }

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Scale by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Divide evenly by a quantity.
    ///
    /// Quantities in the cart are always at least 1; a zero divisor yields
    /// zero rather than panicking.
    #[must_use]
    pub fn divided_by(self, quantity: u32) -> Self {
        if quantity == 0 {
            Self::ZERO
        } else {
            Self(self.0 / Decimal::from(quantity))
        }
    }

    /// Round to the given number of decimal places.
    #[must_use]
    pub fn round_dp(self, dp: u32) -> Self {
        Self(self.0.round_dp(dp))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::SYMBOL, self.0.normalize())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
