//! Media module.
//!
//! Provides:
//! - Audio format recognition from the served URL
//! - Play length probing through the file's tags

pub mod format;
pub mod length;

pub use format::{extension_from_url, AudioFormat};
pub use length::{PlayLengthProbe, TagProbe};
