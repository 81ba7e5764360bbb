//! eighttracks-shuffle - keep the mixes of a followed 8tracks collection.
//!
//! This library logs in as a bot account, finds the mixes in a followed user's
//! collection and plays each one through the service's track cursor, saving
//! every track as it goes.
//!
//! # Features
//!
//! - Liked or named collections
//! - Real-time play reports after 30 seconds, the rest of a track at double speed
//! - Tracks that cannot be fetched are skipped
//! - Extended M3U playlist per mix, in play order
//! - Ledger of completed mixes so re-runs only fetch new ones
//! - Cached play token
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use eighttracks_shuffle::{sync_collection, Config, EighttracksApi, TagProbe};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = EighttracksApi::new(&config)?;
//!
//!     let state = sync_collection(&api, &TagProbe, &config, false).await?;
//!     println!("{} mixes downloaded", state.mixes_completed);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod ledger;
pub mod media;
pub mod output;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use api::{EighttracksApi, MixService, Session};
pub use config::{Collection, Config};
pub use download::{play_mix, sync_collection, MixState, RunState};
pub use error::{Error, Result};
pub use ledger::Ledger;
pub use media::{AudioFormat, PlayLengthProbe, TagProbe};
