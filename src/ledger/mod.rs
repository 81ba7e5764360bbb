//! Downloaded-mixes ledger.
//!
//! Provides:
//! - Loading the ledger file
//! - Computing which discovered mixes still need downloading
//! - Appending completed mixes

pub mod tracker;

pub use tracker::{download_set, Ledger};
