/// Rolling on-disk history of daily top-gainer symbols

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of daily records retained. Trimming is FIFO by insertion order,
/// not by date comparison, so out-of-order runs can leave non-chronological
/// entries in the window. Known limitation.
pub const HISTORY_CAP: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: String,
    pub gainers: Vec<String>,
}

pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads prior records, oldest first. An absent, unreadable or corrupt
    /// file collapses to an empty history after logging.
    pub fn load(&self) -> Vec<HistoryRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "No readable history file, starting fresh");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed history file, starting fresh");
                Vec::new()
            }
        }
    }

    /// Persists records, keeping only the newest HISTORY_CAP entries.
    /// Written to a sibling temp file and renamed into place so a crash
    /// mid-write leaves the previous file intact.
    pub fn save(&self, mut records: Vec<HistoryRecord>) -> Result<()> {
        if records.len() > HISTORY_CAP {
            records.drain(..records.len() - HISTORY_CAP);
        }

        let json = serde_json::to_string_pretty(&records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
