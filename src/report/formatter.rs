/// Renders the daily movers report as a Telegram Markdown message

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::history::HISTORY_CAP;
use crate::market::RankedSet;

/// Abbreviates a quote-currency notional into M$/K$ units.
pub fn format_volume(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.2}M$", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.2}K$", value / 1_000.0)
    } else {
        format!("{:.2}$", value)
    }
}

pub fn render(
    ranked: &RankedSet,
    momentum: &HashMap<String, u32>,
    now: DateTime<Utc>,
) -> String {
    let mut message = format!(
        "📊 **DAILY MARKET REPORT** ({})\n\n",
        now.format("%d-%m-%Y %H:%M")
    );

    message.push_str("🚀 **TOP 5 GAINERS**\n");
    for asset in &ranked.gainers {
        message.push_str(&format!("🔹 *{}*\n", asset.symbol));
        message.push_str(&format!("   Price: {}$\n", asset.price));
        message.push_str(&format!("   Change: {:+.2}% 🟢\n", asset.change_pct_24h));
        message.push_str(&format!("   Volume: {}\n", format_volume(asset.volume_24h)));
        if let Some(count) = momentum.get(&asset.symbol) {
            message.push_str(&format!(
                "   Momentum: 🔥 {}x top gainer in the last {} runs\n",
                count, HISTORY_CAP
            ));
        }
    }

    message.push_str(&format!("\n{}\n\n", "-".repeat(20)));

    message.push_str("🩸 **TOP 5 LOSERS**\n");
    for asset in &ranked.losers {
        message.push_str(&format!("🔸 *{}*\n", asset.symbol));
        message.push_str(&format!("   Price: {}$\n", asset.price));
        message.push_str(&format!("   Change: {:+.2}% 🔴\n", asset.change_pct_24h));
        message.push_str(&format!("   Volume: {}\n", format_volume(asset.volume_24h)));
    }

    message
}
