//! 8tracks API module.
//!
//! This module provides:
//! - HTTP client for the 8tracks REST API
//! - The `MixService` trait the downloader is written against
//! - Session establishment and the play token cache
//! - API response types

pub mod client;
pub mod service;
pub mod session;
pub mod types;

pub use client::{EighttracksApi, MIX_SET_PAGE_SIZE};
pub use service::{AudioResponse, ByteStream, MixService};
pub use session::{establish_session, play_token, Session};
pub use types::*;
