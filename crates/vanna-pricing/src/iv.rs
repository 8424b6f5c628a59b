//! Implied volatility via bisection on the Black-Scholes price.

use serde::{Deserialize, Serialize};
use tracing::debug;

use vanna_types::{MarketSnapshot, OptionContract, VannaError, VannaResult};

use crate::pricing::black_scholes_price;

/// Search parameters for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IvParams {
    /// Volatility search interval (low, high), in decimals.
    pub bracket: (f64, f64),
    /// Absolute price tolerance for early termination.
    pub tolerance: f64,
    /// Bisection iteration cap.
    pub max_iterations: u32,
}

impl Default for IvParams {
    fn default() -> Self {
        Self {
            bracket: (1e-6, 5.0),
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

/// Find the volatility that reproduces `target_price` under Black-Scholes,
/// using the default bracket (1e-6, 5.0), tolerance 1e-8, and 100
/// iterations.
pub fn implied_volatility(
    contract: &OptionContract,
    market: &MarketSnapshot,
    target_price: f64,
) -> VannaResult<f64> {
    implied_volatility_with(contract, market, target_price, &IvParams::default())
}

/// Find the volatility that reproduces `target_price` under Black-Scholes
/// by bisection over `params.bracket`.
///
/// Each trial price is computed on a fresh snapshot with only the
/// volatility replaced; the caller's snapshot is never touched.
///
/// The bracket check assumes the price is non-decreasing in volatility over
/// the interval. That assumption can fail for some deep in-the-money puts;
/// the interval is usually still wide enough, and no correction is applied
/// beyond checking that the target lies between the endpoint prices.
///
/// When the iteration cap is hit, the midpoint of the final interval is
/// returned as a best-effort answer rather than an error. Callers needing a
/// convergence guarantee should re-price the result against the target.
pub fn implied_volatility_with(
    contract: &OptionContract,
    market: &MarketSnapshot,
    target_price: f64,
    params: &IvParams,
) -> VannaResult<f64> {
    if target_price <= 0.0 {
        return Err(VannaError::InvalidInput(format!(
            "target price must be > 0, got {target_price}"
        )));
    }

    let (mut low, mut high) = params.bracket;
    let price_at = |sigma: f64| black_scholes_price(contract, &market.with_volatility(sigma));

    let p_low = price_at(low)?;
    let p_high = price_at(high)?;
    if target_price < p_low || target_price > p_high {
        return Err(VannaError::NotBracketed { low, high });
    }

    for iteration in 0..params.max_iterations {
        let mid = 0.5 * (low + high);
        let p_mid = price_at(mid)?;
        if (p_mid - target_price).abs() < params.tolerance {
            debug!(sigma = mid, iteration, "implied volatility converged");
            return Ok(mid);
        }
        if p_mid < target_price {
            low = mid;
        } else {
            high = mid;
        }
    }

    let mid = 0.5 * (low + high);
    debug!(
        sigma = mid,
        max_iterations = params.max_iterations,
        "iteration cap hit, returning interval midpoint"
    );
    Ok(mid)
}
