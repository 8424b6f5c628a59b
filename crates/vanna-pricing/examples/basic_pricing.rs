//! Example: price a European option, inspect its greeks, and recover the
//! implied volatility from an observed price.
//!
//! Run with: cargo run --example basic_pricing

use anyhow::Result;
use rust_decimal_macros::dec;

use vanna_pricing::{black_scholes_price, greeks, implied_volatility};
use vanna_types::{MarketSnapshot, OptionContract, OptionKind};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let call = OptionContract::new(OptionKind::Call, dec!(100), 1.0);
    let put = OptionContract::new(OptionKind::Put, dec!(100), 1.0);
    let market = MarketSnapshot::new(100.0, 0.05);

    println!("=== Black-Scholes Pricing ===\n");
    println!("Contract: {call}");
    println!("Spot:     ${:.2}", market.spot);
    println!("Rate:     {:.1}%", market.rate * 100.0);
    println!("Vol:      {:.1}%\n", market.volatility * 100.0);

    let call_price = black_scholes_price(&call, &market)?;
    let put_price = black_scholes_price(&put, &market)?;
    println!("Call price: ${call_price:.4}");
    println!("Put price:  ${put_price:.4}");

    // C - P = S*e^(-qT) - K*e^(-rT)
    let parity = market.spot * (-market.dividend_yield * call.maturity).exp()
        - 100.0 * (-market.rate * call.maturity).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.6}", call_price - put_price);
    println!("  S*e^(-qT) - K*e^(-rT) = {parity:.6}");

    println!("\n=== Greeks (Call) ===\n");
    let g = greeks(&call, &market)?;
    println!("Delta: {:.4}", g.delta);
    println!("Gamma: {:.4}", g.gamma);
    println!("Theta: {:.4} per year ({:.4} per day)", g.theta, g.theta / 365.0);
    println!("Vega:  {:.4}", g.vega);
    println!("Rho:   {:.4}", g.rho);

    println!("\n=== Implied Volatility ===\n");
    let observed = call_price + 0.75; // simulated market price above model
    let iv = implied_volatility(&call, &market, observed)?;
    println!(
        "Market price ${observed:.4} implies vol: {:.2}%",
        iv * 100.0
    );

    Ok(())
}
