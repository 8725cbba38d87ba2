// Runtime configuration
pub mod config;

// Market snapshot retrieval and ranking
pub mod market;

// Rolling gainer history and momentum analysis
pub mod history;
pub mod momentum;

// Report rendering and Telegram delivery
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use market::{AssetSnapshot, RankedSet};
