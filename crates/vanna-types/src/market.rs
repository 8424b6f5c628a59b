use serde::{Deserialize, Serialize};

/// Market inputs for Black-Scholes with a continuous dividend yield.
///
/// Immutable per pricing query. Callers wanting a variant of a snapshot
/// build a new one with the `with_*` constructors rather than mutating in
/// place; the implied-volatility solver relies on this for its trial
/// volatilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Current underlying spot price.
    pub spot: f64,
    /// Annualised risk-free rate, continuously compounded (e.g. 0.05 = 5 %).
    pub rate: f64,
    /// Continuous dividend yield (e.g. 0.02 = 2 %).
    pub dividend_yield: f64,
    /// Annualised volatility (e.g. 0.20 = 20 %).
    pub volatility: f64,
}

impl MarketSnapshot {
    /// Snapshot with no dividend yield and a 20 % starting volatility.
    pub fn new(spot: f64, rate: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield: 0.0,
            volatility: 0.2,
        }
    }

    /// Copy of this snapshot with only the volatility replaced.
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Copy of this snapshot with only the dividend yield replaced.
    pub fn with_dividend_yield(self, dividend_yield: f64) -> Self {
        Self {
            dividend_yield,
            ..self
        }
    }
}
