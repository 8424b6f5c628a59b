//! Analytic first-order sensitivities for European options.
//!
//! Every greek is differentiated from the same d1/d2 and discount factors
//! the price formula uses, so the two can never drift apart.

use serde::{Deserialize, Serialize};

use vanna_types::{MarketSnapshot, OptionContract, OptionKind, VannaResult};

use crate::pricing::BsFactors;
use crate::stats::{norm_cdf, norm_pdf};

/// Option greeks computed from the Black-Scholes model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Greeks {
    /// Rate of change of option price w.r.t. underlying price.
    pub delta: f64,
    /// Rate of change of delta w.r.t. underlying price.
    pub gamma: f64,
    /// Rate of change of option price w.r.t. time, per year. Divide by 365
    /// for per-calendar-day decay.
    pub theta: f64,
    /// Rate of change of option price w.r.t. volatility, per unit of vol.
    pub vega: f64,
    /// Rate of change of option price w.r.t. the risk-free rate, per unit
    /// of rate.
    pub rho: f64,
}

impl Greeks {
    pub fn zero() -> Self {
        Self {
            delta: 0.0,
            gamma: 0.0,
            theta: 0.0,
            vega: 0.0,
            rho: 0.0,
        }
    }
}

fn delta_from(f: &BsFactors, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => f.disc_q * norm_cdf(f.d1),
        OptionKind::Put => f.disc_q * (norm_cdf(f.d1) - 1.0),
    }
}

// Gamma and vega are kind-independent.
fn gamma_from(f: &BsFactors) -> f64 {
    f.disc_q * norm_pdf(f.d1) / (f.spot * f.volatility * f.sqrt_t)
}

fn vega_from(f: &BsFactors) -> f64 {
    f.spot * f.disc_q * norm_pdf(f.d1) * f.sqrt_t
}

fn theta_from(f: &BsFactors, kind: OptionKind) -> f64 {
    let decay = -(f.spot * f.disc_q * norm_pdf(f.d1) * f.volatility) / (2.0 * f.sqrt_t);
    match kind {
        OptionKind::Call => {
            decay - f.rate * f.strike * f.disc_r * norm_cdf(f.d2)
                + f.dividend_yield * f.spot * f.disc_q * norm_cdf(f.d1)
        }
        OptionKind::Put => {
            decay + f.rate * f.strike * f.disc_r * norm_cdf(-f.d2)
                - f.dividend_yield * f.spot * f.disc_q * norm_cdf(-f.d1)
        }
    }
}

fn rho_from(f: &BsFactors, kind: OptionKind) -> f64 {
    match kind {
        OptionKind::Call => f.strike * f.maturity * f.disc_r * norm_cdf(f.d2),
        OptionKind::Put => -f.strike * f.maturity * f.disc_r * norm_cdf(-f.d2),
    }
}

/// Sensitivity of the option price to the underlying spot.
pub fn delta(contract: &OptionContract, market: &MarketSnapshot) -> VannaResult<f64> {
    let f = BsFactors::derive(contract, market)?;
    Ok(delta_from(&f, contract.kind))
}

/// Sensitivity of delta to the underlying spot. Identical for calls and puts.
pub fn gamma(contract: &OptionContract, market: &MarketSnapshot) -> VannaResult<f64> {
    let f = BsFactors::derive(contract, market)?;
    Ok(gamma_from(&f))
}

/// Sensitivity of the option price to volatility, per unit of vol.
/// Identical for calls and puts.
pub fn vega(contract: &OptionContract, market: &MarketSnapshot) -> VannaResult<f64> {
    let f = BsFactors::derive(contract, market)?;
    Ok(vega_from(&f))
}

/// Time decay of the option price, per year.
pub fn theta(contract: &OptionContract, market: &MarketSnapshot) -> VannaResult<f64> {
    let f = BsFactors::derive(contract, market)?;
    Ok(theta_from(&f, contract.kind))
}

/// Sensitivity of the option price to the risk-free rate, per unit of rate.
pub fn rho(contract: &OptionContract, market: &MarketSnapshot) -> VannaResult<f64> {
    let f = BsFactors::derive(contract, market)?;
    Ok(rho_from(&f, contract.kind))
}

/// All five greeks in a single pass over the shared intermediates.
pub fn greeks(contract: &OptionContract, market: &MarketSnapshot) -> VannaResult<Greeks> {
    let f = BsFactors::derive(contract, market)?;
    Ok(Greeks {
        delta: delta_from(&f, contract.kind),
        gamma: gamma_from(&f),
        theta: theta_from(&f, contract.kind),
        vega: vega_from(&f),
        rho: rho_from(&f, contract.kind),
    })
}
