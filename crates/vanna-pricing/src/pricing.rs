//! Black-Scholes pricing for European options with continuous dividend yield.

use rust_decimal::prelude::ToPrimitive;

use vanna_types::{MarketSnapshot, OptionContract, OptionKind, VannaError, VannaResult};

use crate::stats::norm_cdf;

/// Intermediate quantities shared by the price and every greek.
///
/// Derived once per call through [`BsFactors::derive`]; the sensitivity
/// engine reads the same d1/d2 and discount factors the price uses.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BsFactors {
    pub spot: f64,
    pub strike: f64,
    pub maturity: f64,
    pub rate: f64,
    pub dividend_yield: f64,
    pub volatility: f64,
    pub sqrt_t: f64,
    pub d1: f64,
    pub d2: f64,
    /// exp(-r·T)
    pub disc_r: f64,
    /// exp(-q·T)
    pub disc_q: f64,
}

impl BsFactors {
    /// Validate the pricing preconditions and derive d1/d2 and the discount
    /// factors. Spot, strike, maturity, and volatility must all be positive;
    /// the rate and dividend yield may be any real.
    pub(crate) fn derive(
        contract: &OptionContract,
        market: &MarketSnapshot,
    ) -> VannaResult<Self> {
        let s = market.spot;
        let k = contract.strike.to_f64().unwrap_or(0.0);
        let t = contract.maturity;
        let r = market.rate;
        let q = market.dividend_yield;
        let sigma = market.volatility;

        if s <= 0.0 {
            return Err(VannaError::InvalidInput(format!(
                "spot must be > 0, got {s}"
            )));
        }
        if k <= 0.0 {
            return Err(VannaError::InvalidInput(format!(
                "strike must be > 0, got {}",
                contract.strike
            )));
        }
        if t <= 0.0 {
            return Err(VannaError::InvalidInput(format!(
                "maturity must be > 0 years, got {t}"
            )));
        }
        if sigma <= 0.0 {
            return Err(VannaError::InvalidInput(format!(
                "volatility must be > 0, got {sigma}"
            )));
        }

        let sqrt_t = t.sqrt();
        let d1 = ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
        let d2 = d1 - sigma * sqrt_t;

        Ok(Self {
            spot: s,
            strike: k,
            maturity: t,
            rate: r,
            dividend_yield: q,
            volatility: sigma,
            sqrt_t,
            d1,
            d2,
            disc_r: (-r * t).exp(),
            disc_q: (-q * t).exp(),
        })
    }
}

/// Price a European option under Black-Scholes-Merton.
///
/// Call: S·e^{-qT}·Φ(d1) − K·e^{-rT}·Φ(d2)
/// Put : K·e^{-rT}·Φ(−d2) − S·e^{-qT}·Φ(−d1)
///
/// Fails with `InvalidInput` when spot, strike, maturity, or volatility is
/// non-positive.
pub fn black_scholes_price(
    contract: &OptionContract,
    market: &MarketSnapshot,
) -> VannaResult<f64> {
    let f = BsFactors::derive(contract, market)?;
    let price = match contract.kind {
        OptionKind::Call => {
            f.spot * f.disc_q * norm_cdf(f.d1) - f.strike * f.disc_r * norm_cdf(f.d2)
        }
        OptionKind::Put => {
            f.strike * f.disc_r * norm_cdf(-f.d2) - f.spot * f.disc_q * norm_cdf(-f.d1)
        }
    };
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn atm_call() -> OptionContract {
        OptionContract::new(OptionKind::Call, dec!(100), 1.0)
    }

    fn atm_put() -> OptionContract {
        OptionContract::new(OptionKind::Put, dec!(100), 1.0)
    }

    fn base_market() -> MarketSnapshot {
        MarketSnapshot::new(100.0, 0.05)
    }

    #[test]
    fn test_atm_call_known_value() {
        // S = K = 100, T = 1, r = 5 %, q = 0, sigma = 20 %
        let price = black_scholes_price(&atm_call(), &base_market()).unwrap();
        assert!((price - 10.4506).abs() < 1e-3, "price = {price}");
    }

    #[test]
    fn test_put_call_parity() {
        let m = base_market().with_dividend_yield(0.02);
        let c = black_scholes_price(&atm_call(), &m).unwrap();
        let p = black_scholes_price(&atm_put(), &m).unwrap();
        // C - P = S e^{-qT} - K e^{-rT}
        let rhs = m.spot * (-m.dividend_yield).exp() - 100.0 * (-m.rate).exp();
        assert!((c - p - rhs).abs() < 1e-6, "lhs = {}, rhs = {rhs}", c - p);
    }

    #[test]
    fn test_itm_call_exceeds_intrinsic() {
        let c = OptionContract::new(OptionKind::Call, dec!(90), 0.5);
        let price = black_scholes_price(&c, &base_market()).unwrap();
        assert!(price > 10.0, "price = {price}");
    }

    #[test]
    fn test_negative_rate_and_yield_are_valid() {
        let m = MarketSnapshot::new(100.0, -0.01).with_dividend_yield(-0.005);
        let price = black_scholes_price(&atm_call(), &m).unwrap();
        assert!(price > 0.0);
    }

    #[test]
    fn test_rejects_non_positive_spot() {
        let m = MarketSnapshot {
            spot: 0.0,
            ..base_market()
        };
        assert!(matches!(
            black_scholes_price(&atm_call(), &m),
            Err(VannaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_strike() {
        let c = OptionContract::new(OptionKind::Call, dec!(0), 1.0);
        assert!(matches!(
            black_scholes_price(&c, &base_market()),
            Err(VannaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_maturity() {
        let c = OptionContract::new(OptionKind::Call, dec!(100), 0.0);
        assert!(matches!(
            black_scholes_price(&c, &base_market()),
            Err(VannaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_non_positive_volatility() {
        let m = base_market().with_volatility(0.0);
        assert!(matches!(
            black_scholes_price(&atm_call(), &m),
            Err(VannaError::InvalidInput(_))
        ));
    }
}
