//! API response type definitions.

use serde::{Deserialize, Deserializer};

/// Response of the session endpoint.
#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub notices: serde_json::Value,
}

/// The logged-in user.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionUser {
    pub id: u64,
}

/// Response of the new play token endpoint.
#[derive(Debug, Deserialize)]
pub struct PlayTokenResponse {
    pub play_token: String,
}

/// Mix set wrapper.
#[derive(Debug, Deserialize)]
pub struct MixSetResponse {
    pub mix_set: MixSet,
}

/// A page of a user's collection.
#[derive(Debug, Deserialize)]
pub struct MixSet {
    #[serde(default)]
    pub mixes: Vec<MixSummary>,
}

/// A mix as listed in a mix set.
#[derive(Debug, Clone, Deserialize)]
pub struct MixSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Mix wrapper for the mix details endpoint.
#[derive(Debug, Deserialize)]
pub struct MixResponse {
    pub mix: MixDetails,
}

/// Mix metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MixDetails {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub tracks_count: u32,
}

/// Track cursor wrapper.
#[derive(Debug, Deserialize)]
pub struct TrackSetResponse {
    pub set: TrackSet,
}

/// One step of the track cursor: the current track and whether the mix is over.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackSet {
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub at_end: bool,
}

/// A track handed out by the track cursor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Track {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub performer: String,
    #[serde(default)]
    pub release_name: Option<String>,
    pub track_file_stream_url: String,
}

/// Text fields the service sends as `null` when unknown.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Direction of the track cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// Start the mix.
    Play,
    /// Advance after a track was listened to.
    Next,
    /// Advance past a track that could not be fetched.
    Skip,
}

impl CursorAction {
    /// Path segment of the cursor endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorAction::Play => "play",
            CursorAction::Next => "next",
            CursorAction::Skip => "skip",
        }
    }
}
