/// Recurrence analysis of today's gainers against the retained history

use std::collections::HashMap;

use crate::history::HistoryRecord;
use crate::market::AssetSnapshot;

/// Minimum recurrence count for a symbol to be flagged.
pub const MOMENTUM_THRESHOLD: u32 = 2;

/// Counts how often each of today's gainers appeared as a gainer across the
/// history window, today inclusive. Appearances need not be on consecutive
/// days; any occurrence in the window counts. Only symbols at or above the
/// threshold are returned.
pub fn tally(
    history: &[HistoryRecord],
    todays_gainers: &[AssetSnapshot],
) -> HashMap<String, u32> {
    let mut flagged = HashMap::new();

    for asset in todays_gainers {
        let prior = history
            .iter()
            .filter(|rec| rec.gainers.iter().any(|s| s == &asset.symbol))
            .count() as u32;

        let count = prior + 1;
        if count >= MOMENTUM_THRESHOLD {
            flagged.insert(asset.symbol.clone(), count);
        }
    }

    flagged
}
