pub mod ranker;
pub mod snapshot;

pub use ranker::{rank, RankedSet, TOP_N};
pub use snapshot::{AssetSnapshot, MarketClient};
