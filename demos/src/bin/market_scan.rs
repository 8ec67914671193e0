//! Demo 2: Market Scanner
//!
//! Showcases: ranked market listing, price-change horizons, global dominance,
//! exchange tickers for the top mover
//!
//! Run: cargo run --bin market_scan -- 25

use colored::*;
use gecko_rest::{ClientConfig, CoinGeckoClient, CoinTickersRequest, CoinsMarketsRequest};
use gecko_types::{MarketListing, PriceChangeWindow, TickerOrder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let count: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(20);

    let client = CoinGeckoClient::with_config(ClientConfig::from_env()?)?;

    println!("{}", "═".repeat(78).cyan());
    println!("{}", "  MARKET SCANNER".cyan().bold());
    println!("{}", "  CoinGecko Demo - top coins by market cap".cyan());
    println!("{}", "═".repeat(78).cyan());
    println!();

    let global = client.global().await?;
    println!(
        "  Active coins: {}   Markets: {}   BTC dominance: {}   ETH dominance: {}",
        global.active_cryptocurrencies,
        global.markets,
        fmt_pct(global.dominance("btc")),
        fmt_pct(global.dominance("eth")),
    );
    println!();

    let request = CoinsMarketsRequest::new("usd")
        .with_per_page(count)
        .with_price_change(PriceChangeWindow::H1)
        .with_price_change(PriceChangeWindow::H24)
        .with_price_change(PriceChangeWindow::D7);
    let rows = client.coins_markets(&request).await?;

    println!(
        "  {:>4}  {:<20} {:>14} {:>9} {:>9} {:>9}",
        "#".white().bold(),
        "COIN".white().bold(),
        "PRICE".white().bold(),
        "1H".white().bold(),
        "24H".white().bold(),
        "7D".white().bold()
    );
    println!("  {}", "─".repeat(72));

    for row in &rows {
        println!(
            "  {:>4}  {:<20} {:>14} {:>9} {:>9} {:>9}",
            row.market_cap_rank.map(|r| r.to_string()).unwrap_or_default(),
            truncate(&row.name, 20),
            row.current_price.map(|p| format!("{:.4}", p)).unwrap_or_default(),
            colored_pct(row.price_change_percentage_1h_in_currency),
            colored_pct(row.price_change_percentage_24h_in_currency),
            colored_pct(row.price_change_percentage_7d_in_currency),
        );
    }
    println!();

    let Some(mover) = top_mover(&rows) else {
        return Ok(());
    };

    println!(
        "  {} {} ({}) moved {} in 24h, most trusted markets:",
        "▶".yellow(),
        mover.name.bold(),
        mover.symbol.to_uppercase(),
        colored_pct(mover.price_change_percentage_24h_in_currency)
    );

    let tickers = client
        .coin_tickers(&CoinTickersRequest::new(mover.id.as_str()).with_order(TickerOrder::TrustScoreDesc))
        .await?;

    for ticker in tickers.tickers.iter().filter(|t| t.is_usable()).take(5) {
        println!(
            "      {:<18} {:<14} last {:>14}  vol ${:>16}",
            ticker.market.name,
            ticker.pair(),
            ticker.last.map(|l| format!("{:.4}", l)).unwrap_or_default(),
            ticker.converted_volume.usd.map(|v| format!("{:.0}", v)).unwrap_or_default(),
        );
    }

    Ok(())
}

/// Largest absolute 24h change
fn top_mover(rows: &[MarketListing]) -> Option<&MarketListing> {
    rows.iter()
        .filter(|r| r.price_change_percentage_24h_in_currency.is_some())
        .max_by(|a, b| {
            let a = a.price_change_percentage_24h_in_currency.unwrap_or_default().abs();
            let b = b.price_change_percentage_24h_in_currency.unwrap_or_default().abs();
            a.total_cmp(&b)
        })
}

fn fmt_pct(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}%", v)).unwrap_or_else(|| "n/a".into())
}

fn colored_pct(value: Option<f64>) -> ColoredString {
    match value {
        Some(v) if v >= 0.0 => format!("{:+.2}%", v).green(),
        Some(v) => format!("{:+.2}%", v).red(),
        None => "n/a".dimmed(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max - 1).collect();
        out.push('…');
        out
    }
}
