use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marketpulse::config::Config;
use marketpulse::history::{HistoryRecord, HistoryStore};
use marketpulse::market::{rank, MarketClient};
use marketpulse::momentum;
use marketpulse::report::{render, TelegramNotifier};

fn init_tracing() {
    // Console layer with compact formatting
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("📊 Market Pulse - Daily Movers Report");

    let config = Config::from_env();

    let market = MarketClient::new(&config.markets_url);
    let snapshot = market.fetch_snapshot().await;
    if snapshot.is_empty() {
        warn!("Empty market snapshot, nothing to report this run");
        return Ok(());
    }

    let ranked = rank(&snapshot);

    // Momentum is computed against prior runs only, then today's gainers
    // are appended before saving.
    let store = HistoryStore::new(&config.history_path);
    let mut history = store.load();
    let flagged = momentum::tally(&history, &ranked.gainers);

    history.push(HistoryRecord {
        date: Utc::now().format("%Y-%m-%d").to_string(),
        gainers: ranked.gainers.iter().map(|a| a.symbol.clone()).collect(),
    });
    if let Err(e) = store.save(history) {
        warn!(error = %e, "Failed to persist gainer history");
    }

    let message = render(&ranked, &flagged, Utc::now());
    let notifier = TelegramNotifier::new(&config);
    if let Err(e) = notifier.send(&message).await {
        warn!(error = %e, "Report dispatch failed");
    }

    info!("👋 Run complete");
    Ok(())
}
