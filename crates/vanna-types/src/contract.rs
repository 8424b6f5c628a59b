use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Option type — call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionKind {
    Call,
    Put,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// Contract terms for a single European option.
///
/// Created once by the caller per instrument and never mutated; the pricing
/// functions borrow it read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// Call or put.
    pub kind: OptionKind,
    /// Strike price.
    pub strike: Decimal,
    /// Time to expiry in years.
    pub maturity: f64,
}

impl OptionContract {
    pub fn new(kind: OptionKind, strike: Decimal, maturity: f64) -> Self {
        Self {
            kind,
            strike,
            maturity,
        }
    }

    /// Build a contract from an expiration timestamp, measuring maturity
    /// from `as_of`. Maturity clamps to 0 for an already-expired contract.
    pub fn from_expiration(
        kind: OptionKind,
        strike: Decimal,
        expiration: DateTime<Utc>,
        as_of: DateTime<Utc>,
    ) -> Self {
        let secs = (expiration - as_of).num_seconds();
        let maturity = if secs <= 0 {
            0.0
        } else {
            secs as f64 / (365.25 * 86400.0)
        };
        Self::new(kind, strike, maturity)
    }

    /// Intrinsic value given the current underlying price.
    pub fn intrinsic_value(&self, spot: Decimal) -> Decimal {
        let iv = match self.kind {
            OptionKind::Call => spot - self.strike,
            OptionKind::Put => self.strike - spot,
        };
        if iv > Decimal::ZERO {
            iv
        } else {
            Decimal::ZERO
        }
    }

    /// True when the option is in-the-money.
    pub fn is_itm(&self, spot: Decimal) -> bool {
        self.intrinsic_value(spot) > Decimal::ZERO
    }

    /// True when at-the-money (strike == spot, within tolerance).
    pub fn is_atm(&self, spot: Decimal, tolerance: Decimal) -> bool {
        (self.strike - spot).abs() <= tolerance
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({:.4}y)", self.strike, self.kind, self.maturity)
    }
}
