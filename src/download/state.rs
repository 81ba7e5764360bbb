//! Download statistics.

use std::path::PathBuf;

/// Per-mix download state.
#[derive(Debug, Default)]
pub struct MixState {
    pub mix_id: u64,
    pub name: String,
    pub folder: PathBuf,

    // Statistics
    pub tracks_downloaded: u64,
    pub tracks_skipped: u64,
    pub seconds_listened: f64,
}

impl MixState {
    /// Create a new state for a mix.
    pub fn new(mix_id: u64, name: String, folder: PathBuf) -> Self {
        Self {
            mix_id,
            name,
            folder,
            ..Default::default()
        }
    }

    /// Count a downloaded track.
    pub fn record_download(&mut self, play_length: f64) {
        self.tracks_downloaded += 1;
        self.seconds_listened += play_length.max(0.0);
    }

    /// Count a skipped track.
    pub fn record_skip(&mut self) {
        self.tracks_skipped += 1;
    }
}

/// Statistics across the whole run.
#[derive(Debug, Default)]
pub struct RunState {
    pub mixes_discovered: u64,
    /// Mixes not in the ledger at start, in discovery order.
    pub pending: Vec<u64>,
    pub mixes_completed: u64,
    pub tracks_downloaded: u64,
    pub tracks_skipped: u64,
    pub seconds_listened: f64,
}

impl RunState {
    /// Add a completed mix.
    pub fn add_mix_stats(&mut self, state: &MixState) {
        self.mixes_completed += 1;
        self.tracks_downloaded += state.tracks_downloaded;
        self.tracks_skipped += state.tracks_skipped;
        self.seconds_listened += state.seconds_listened;
    }
}
