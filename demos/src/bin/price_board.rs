//! Demo 1: Live Price Board
//!
//! Showcases: simple prices, shared rate limiting, cancellation on Ctrl+C
//!
//! Run: cargo run --bin price_board -- bitcoin ethereum solana

use colored::*;
use gecko_rest::{CallContext, CancelSource, ClientConfig, CoinGeckoClient, RestError};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const CURRENCIES: [&str; 3] = ["usd", "eur", "btc"];
const REFRESH: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut ids: Vec<String> = std::env::args().skip(1).collect();
    if ids.is_empty() {
        ids = vec!["bitcoin".into(), "ethereum".into(), "solana".into()];
    }
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    let client = CoinGeckoClient::with_config(ClientConfig::from_env()?)?;

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  LIVE PRICE BOARD".cyan().bold());
    println!("{}", "  CoinGecko Demo - /simple/price every 15s, Ctrl+C to stop".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let source = CancelSource::new();
    let ctx = source.context();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            source.cancel();
        }
    });

    let mut previous: HashMap<String, Decimal> = HashMap::new();

    loop {
        let prices = match client
            .with_context(ctx.clone().with_timeout(Duration::from_secs(20)))
            .simple()
            .price(&id_refs, &CURRENCIES)
            .await
        {
            Ok(prices) => prices,
            Err(RestError::Cancelled(_)) if ctx.is_cancelled() => break,
            Err(e) if e.is_retryable() => {
                println!("  {} {}", "retrying:".yellow(), e);
                if wait_or_cancel(&ctx, REFRESH).await {
                    break;
                }
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        println!(
            "  {:<14} {:>16} {:>16} {:>14}  {}",
            "COIN".white().bold(),
            "USD".white().bold(),
            "EUR".white().bold(),
            "BTC".white().bold(),
            chrono::Local::now().format("%H:%M:%S").to_string().dimmed()
        );
        println!("  {}", "─".repeat(72));

        for id in &id_refs {
            let usd = prices.get(id, "usd");
            let arrow = match (usd, previous.get(*id)) {
                (Some(now), Some(before)) if now > *before => "▲".green(),
                (Some(now), Some(before)) if now < *before => "▼".red(),
                _ => "·".dimmed(),
            };
            if let Some(usd) = usd {
                previous.insert(id.to_string(), usd);
            }

            println!(
                "  {:<14} {:>16} {:>16} {:>14}  {}",
                id,
                fmt_price(usd),
                fmt_price(prices.get(id, "eur")),
                fmt_price(prices.get(id, "btc")),
                arrow
            );
        }
        println!();

        if wait_or_cancel(&ctx, REFRESH).await {
            break;
        }
    }

    println!("{} Stopped", "✓".green());
    Ok(())
}

fn fmt_price(price: Option<Decimal>) -> String {
    match price {
        Some(p) => p.round_dp(6).normalize().to_string(),
        None => "n/a".to_string(),
    }
}

/// Sleep for `delay`; true if the context fired first
async fn wait_or_cancel(ctx: &CallContext, delay: Duration) -> bool {
    tokio::select! {
        _ = ctx.done() => true,
        _ = tokio::time::sleep(delay) => false,
    }
}
