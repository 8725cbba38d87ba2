/// Top-N mover ranking over a market snapshot

use std::cmp::Ordering;

use super::snapshot::AssetSnapshot;

/// Number of assets kept per side of the report.
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct RankedSet {
    pub gainers: Vec<AssetSnapshot>,
    pub losers: Vec<AssetSnapshot>,
}

impl RankedSet {
    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty()
    }
}

/// Splits a snapshot into top gainers and top losers by 24h percent change.
/// Pure and deterministic: stable sorts keep the provider's relative order
/// for equal changes, and inputs shorter than TOP_N yield shorter sides
/// without padding.
pub fn rank(snapshot: &[AssetSnapshot]) -> RankedSet {
    let mut gainers = snapshot.to_vec();
    gainers.sort_by(|a, b| {
        b.change_pct_24h
            .partial_cmp(&a.change_pct_24h)
            .unwrap_or(Ordering::Equal)
    });
    gainers.truncate(TOP_N);

    let mut losers = snapshot.to_vec();
    losers.sort_by(|a, b| {
        a.change_pct_24h
            .partial_cmp(&b.change_pct_24h)
            .unwrap_or(Ordering::Equal)
    });
    losers.truncate(TOP_N);

    RankedSet { gainers, losers }
}
