//! Demo 1: Spot Price Board
//!
//! Showcases: unauthenticated data endpoints (prices, exchange rates, time)
//!
//! Run: cargo run --bin spot_prices
//! Logs: RUST_LOG=coinbase_rest=debug cargo run --bin spot_prices

use chrono::{Duration, Utc};
use coinbase_rest::CoinbaseClient;
use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

const PAIRS: [&str; 4] = ["BTC-USD", "ETH-USD", "SOL-USD", "LTC-USD"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  SPOT PRICE BOARD".cyan().bold());
    println!("{}", "  Coinbase v2 Data API".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = CoinbaseClient::new()?;

    let time = client.time().get_time().await?;
    println!("{} Server time: {}\n", "✓".green(), time.iso);

    let yesterday = (Utc::now() - Duration::days(1)).date_naive();

    println!(
        "  {:<10} {:>14} {:>14} {:>14} {:>10}",
        "PAIR".white().bold(),
        "BUY".white().bold(),
        "SELL".white().bold(),
        "SPOT".white().bold(),
        "24H".white().bold()
    );
    println!("  {}", "─".repeat(66));

    for pair in PAIRS {
        let prices = client.prices();
        let (buy, sell, spot, previous) = match tokio::try_join!(
            prices.get_buy_price(pair),
            prices.get_sell_price(pair),
            prices.get_spot_price(pair, None),
            prices.get_spot_price(pair, Some(yesterday)),
        ) {
            Ok(quotes) => quotes,
            Err(e) => {
                println!("  {:<10} {}", pair.cyan(), e.to_string().red());
                continue;
            }
        };

        let change = if previous.amount.is_zero() {
            Decimal::ZERO
        } else {
            (spot.amount - previous.amount) / previous.amount * Decimal::ONE_HUNDRED
        };
        let change = format!("{:+.2}%", change);
        let change = if change.starts_with('-') {
            change.red()
        } else {
            change.green()
        };

        println!(
            "  {:<10} {:>14} {:>14} {:>14} {:>10}",
            pair.cyan(),
            format!("{:.2}", buy.amount),
            format!("{:.2}", sell.amount),
            format!("{:.2}", spot.amount).bold(),
            change
        );
    }

    println!();
    let rates = client.exchange_rates().get_exchange_rates(None).await?;
    println!("{}", format!("  1 {} buys:", rates.currency).white().bold());
    for code in ["BTC", "ETH", "EUR", "GBP", "JPY"] {
        match rates.rate(code) {
            Some(rate) => println!("    {:<5} {}", code.cyan(), rate.normalize()),
            None => println!("    {:<5} {}", code.cyan(), "n/a".dimmed()),
        }
    }

    Ok(())
}
