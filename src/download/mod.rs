//! Download module for playing and keeping mixes.
//!
//! This module provides:
//! - Download statistics
//! - Track file downloading
//! - Listening pace and play reports
//! - Playlist writing
//! - The per-mix track loop
//! - The whole collection sync

pub mod mix;
pub mod pacing;
pub mod pipeline;
pub mod playlist;
pub mod state;
pub mod track;

pub use mix::{play_mix, MixContext};
pub use pacing::{listen, remaining_wait};
pub use pipeline::sync_collection;
pub use playlist::Playlist;
pub use state::{MixState, RunState};
pub use track::{download_track, DownloadedTrack};
