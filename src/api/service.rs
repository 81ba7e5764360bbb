//! The operations the downloader needs from the service.

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::BoxStream;

use crate::api::types::{CursorAction, MixDetails, Track, TrackSet};
use crate::config::Collection;
use crate::error::Result;

/// Streamed body of an audio download.
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// An audio file being fetched.
pub struct AudioResponse {
    /// URL the body was served from, after redirects.
    pub final_url: String,
    /// Body size if the server announced it.
    pub content_length: Option<u64>,
    pub body: ByteStream,
}

/// Remote mix service.
///
/// Implemented over HTTP by [`crate::api::EighttracksApi`]; the download loop only
/// talks to this trait.
#[async_trait]
pub trait MixService: Send + Sync {
    /// Log in with the configured credentials and return the user id.
    async fn login(&self) -> Result<u64>;

    /// Request a fresh play token.
    async fn new_play_token(&self) -> Result<String>;

    /// Ids of the mixes in a user's collection, in service order.
    ///
    /// Fails with [`crate::Error::CollectionNotFound`] when the service rejects the
    /// collection.
    async fn mix_ids(&self, user_id: u64, collection: &Collection) -> Result<Vec<u64>>;

    /// Name and track count of a mix.
    async fn mix_details(&self, mix_id: u64) -> Result<MixDetails>;

    /// Move the track cursor of a mix.
    async fn track_cursor(
        &self,
        play_token: &str,
        mix_id: u64,
        action: CursorAction,
    ) -> Result<TrackSet>;

    /// Start fetching a track's audio.
    ///
    /// Fails with [`crate::Error::TrackUnavailable`] on an HTTP error status.
    async fn fetch_audio(&self, track: &Track) -> Result<AudioResponse>;

    /// Tell the service a track was listened to.
    async fn report_played(&self, play_token: &str, mix_id: u64, track_id: u64) -> Result<()>;
}
