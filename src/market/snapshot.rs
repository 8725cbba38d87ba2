/// CoinGecko markets API client for daily snapshot retrieval

use std::time::Duration;
use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, warn};

const API_TIMEOUT_SECS: u64 = 10;

/// Stablecoin, quote-currency and wrapped-asset tickers excluded from
/// ranking. Their 24h change is either pegged noise or a duplicate of the
/// underlying asset.
const SYMBOL_DENYLIST: &[&str] = &[
    "USDT", "USDC", "DAI", "BUSD", "TUSD", "FDUSD", "USDE", "USDS", "PYUSD",
    "USDD", "WBTC", "WETH", "WSTETH", "WEETH", "WBETH", "CBBTC", "STETH",
];

/// One row of the `/coins/markets` response. CoinGecko reports null for
/// assets it has no fresh data on, so every numeric field is optional.
#[derive(Debug, Clone, Deserialize)]
struct MarketRow {
    symbol: String,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    total_volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetSnapshot {
    pub symbol: String,
    pub price: f64,
    pub change_pct_24h: f64,
    pub volume_24h: f64,
}

pub struct MarketClient {
    client: Client,
    markets_url: String,
}

impl MarketClient {
    pub fn new(markets_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(API_TIMEOUT_SECS))
                .build()
                .expect("Failed to create market data HTTP client"),
            markets_url: markets_url.to_string(),
        }
    }

    /// Fetches the current market snapshot. Every failure collapses to an
    /// empty list after logging, so the caller skips the run instead of
    /// crashing an unattended job.
    pub async fn fetch_snapshot(&self) -> Vec<AssetSnapshot> {
        match self.fetch_markets().await {
            Ok(rows) => {
                let snapshot = build_snapshot(rows);
                info!(assets = snapshot.len(), "Market snapshot fetched");
                snapshot
            }
            Err(e) => {
                error!(error = %e, "Market snapshot fetch failed, skipping this run");
                Vec::new()
            }
        }
    }

    async fn fetch_markets(&self) -> Result<Vec<MarketRow>> {
        let response = self
            .client
            .get(&self.markets_url)
            .query(&[
                ("vs_currency", "usd"),
                ("order", "market_cap_desc"),
                ("per_page", "250"),
                ("page", "1"),
                ("sparkline", "false"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Market data API error: {}",
                response.status()
            ));
        }

        Ok(response.json().await?)
    }
}

/// Normalizes raw rows into snapshots, preserving provider order.
fn build_snapshot(rows: Vec<MarketRow>) -> Vec<AssetSnapshot> {
    rows.into_iter()
        .filter_map(|row| {
            let symbol = row.symbol.to_uppercase();
            if SYMBOL_DENYLIST.contains(&symbol.as_str()) {
                return None;
            }
            match (
                row.current_price,
                row.price_change_percentage_24h,
                row.total_volume,
            ) {
                (Some(price), Some(change), Some(volume)) => Some(AssetSnapshot {
                    symbol,
                    price,
                    change_pct_24h: change,
                    volume_24h: volume,
                }),
                _ => {
                    warn!(symbol = %symbol, "Skipping asset with missing market fields");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_rows(json: &str) -> Vec<MarketRow> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_build_snapshot_uppercases_symbols() {
        let rows = parse_rows(
            r#"[{"symbol":"btc","current_price":97000.0,"price_change_percentage_24h":2.1,"total_volume":30000000000.0}]"#,
        );
        let snapshot = build_snapshot(rows);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].symbol, "BTC");
        assert_eq!(snapshot[0].price, 97000.0);
    }

    #[test]
    fn test_build_snapshot_excludes_denylisted() {
        let rows = parse_rows(
            r#"[
                {"symbol":"usdt","current_price":1.0,"price_change_percentage_24h":0.01,"total_volume":90000000000.0},
                {"symbol":"wbtc","current_price":97000.0,"price_change_percentage_24h":2.0,"total_volume":500000000.0},
                {"symbol":"sol","current_price":150.0,"price_change_percentage_24h":-3.0,"total_volume":4000000000.0}
            ]"#,
        );
        let snapshot = build_snapshot(rows);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].symbol, "SOL");
    }

    #[test]
    fn test_build_snapshot_skips_null_fields() {
        let rows = parse_rows(
            r#"[
                {"symbol":"new","current_price":null,"price_change_percentage_24h":null,"total_volume":null},
                {"symbol":"eth","current_price":3500.0,"price_change_percentage_24h":null,"total_volume":15000000000.0},
                {"symbol":"ada","current_price":0.9,"price_change_percentage_24h":1.5,"total_volume":800000000.0}
            ]"#,
        );
        let snapshot = build_snapshot(rows);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].symbol, "ADA");
    }

    #[test]
    fn test_build_snapshot_preserves_provider_order() {
        let rows = parse_rows(
            r#"[
                {"symbol":"btc","current_price":97000.0,"price_change_percentage_24h":1.0,"total_volume":1.0},
                {"symbol":"eth","current_price":3500.0,"price_change_percentage_24h":1.0,"total_volume":1.0}
            ]"#,
        );
        let snapshot = build_snapshot(rows);
        assert_eq!(snapshot[0].symbol, "BTC");
        assert_eq!(snapshot[1].symbol, "ETH");
    }
}
