//! Scripted stand-ins for the remote service and the tag reader.

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use tokio::time::Instant;

use crate::api::{AudioResponse, CursorAction, MixDetails, MixService, Track, TrackSet};
use crate::config::Collection;
use crate::error::{Error, Result};
use crate::media::{AudioFormat, PlayLengthProbe};

/// A cursor, fetch or report request seen by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Cursor { mix_id: u64, action: CursorAction },
    Fetch { track_id: u64 },
    Report { mix_id: u64, track_id: u64 },
}

enum Audio {
    Served { final_url: String, body: Vec<u8> },
    Broken(u16),
}

/// In-memory service replaying scripted track cursors.
///
/// `play` rewinds a mix to the start of its script; once the script is used up
/// the cursor reports the end of the mix. Audio not registered with
/// `with_audio` is served from the stream URL with body `audio:<track id>`.
pub struct ScriptedService {
    user_id: u64,
    play_token: String,
    collection: Option<Vec<u64>>,
    mixes: HashMap<u64, MixDetails>,
    scripts: HashMap<u64, Vec<TrackSet>>,
    cursors: Mutex<HashMap<u64, VecDeque<TrackSet>>>,
    audio: HashMap<String, Audio>,
    calls: Mutex<Vec<Call>>,
    report_times: Mutex<Vec<Instant>>,
    logins: AtomicUsize,
    play_token_requests: AtomicUsize,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self {
            user_id: 1,
            play_token: "play-token".to_string(),
            collection: Some(Vec::new()),
            mixes: HashMap::new(),
            scripts: HashMap::new(),
            cursors: Mutex::new(HashMap::new()),
            audio: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            report_times: Mutex::new(Vec::new()),
            logins: AtomicUsize::new(0),
            play_token_requests: AtomicUsize::new(0),
        }
    }

    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_play_token(mut self, token: &str) -> Self {
        self.play_token = token.to_string();
        self
    }

    pub fn with_collection(mut self, mix_ids: Vec<u64>) -> Self {
        self.collection = Some(mix_ids);
        self
    }

    pub fn with_missing_collection(mut self) -> Self {
        self.collection = None;
        self
    }

    pub fn with_mix(mut self, mix_id: u64, name: &str, steps: Vec<TrackSet>) -> Self {
        let tracks_count = steps.iter().filter(|s| s.track.is_some()).count() as u32;
        self.mixes.insert(
            mix_id,
            MixDetails {
                name: name.to_string(),
                tracks_count,
            },
        );
        self.scripts.insert(mix_id, steps);
        self
    }

    pub fn with_audio(mut self, url: &str, final_url: &str, body: &[u8]) -> Self {
        self.audio.insert(
            url.to_string(),
            Audio::Served {
                final_url: final_url.to_string(),
                body: body.to_vec(),
            },
        );
        self
    }

    pub fn with_broken_audio(mut self, url: &str, status: u16) -> Self {
        self.audio.insert(url.to_string(), Audio::Broken(status));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn report_times(&self) -> Vec<Instant> {
        self.report_times.lock().unwrap().clone()
    }

    pub fn logins(&self) -> usize {
        self.logins.load(Ordering::SeqCst)
    }

    pub fn play_token_requests(&self) -> usize {
        self.play_token_requests.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MixService for ScriptedService {
    async fn login(&self) -> Result<u64> {
        self.logins.fetch_add(1, Ordering::SeqCst);
        Ok(self.user_id)
    }

    async fn new_play_token(&self) -> Result<String> {
        self.play_token_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.play_token.clone())
    }

    async fn mix_ids(&self, user_id: u64, collection: &Collection) -> Result<Vec<u64>> {
        self.collection
            .clone()
            .ok_or_else(|| Error::CollectionNotFound {
                user_id,
                collection: collection.to_string(),
            })
    }

    async fn mix_details(&self, mix_id: u64) -> Result<MixDetails> {
        Ok(self.mixes.get(&mix_id).cloned().unwrap_or(MixDetails {
            name: format!("Mix {}", mix_id),
            tracks_count: 0,
        }))
    }

    async fn track_cursor(
        &self,
        _play_token: &str,
        mix_id: u64,
        action: CursorAction,
    ) -> Result<TrackSet> {
        self.record(Call::Cursor { mix_id, action });

        let mut cursors = self.cursors.lock().unwrap();
        if action == CursorAction::Play {
            let script = self.scripts.get(&mix_id).cloned().unwrap_or_default();
            cursors.insert(mix_id, script.into());
        }

        let next = cursors.get_mut(&mix_id).and_then(|steps| steps.pop_front());
        Ok(next.unwrap_or(TrackSet {
            track: None,
            at_end: true,
        }))
    }

    async fn fetch_audio(&self, track: &Track) -> Result<AudioResponse> {
        self.record(Call::Fetch { track_id: track.id });

        let (final_url, body) = match self.audio.get(&track.track_file_stream_url) {
            Some(Audio::Broken(status)) => {
                return Err(Error::TrackUnavailable { status: *status });
            }
            Some(Audio::Served { final_url, body }) => (final_url.clone(), body.clone()),
            None => (
                track.track_file_stream_url.clone(),
                format!("audio:{}", track.id).into_bytes(),
            ),
        };

        Ok(AudioResponse {
            final_url,
            content_length: Some(body.len() as u64),
            body: futures::stream::iter(vec![Ok(Bytes::from(body))]).boxed(),
        })
    }

    async fn report_played(&self, _play_token: &str, mix_id: u64, track_id: u64) -> Result<()> {
        self.record(Call::Report { mix_id, track_id });
        self.report_times.lock().unwrap().push(Instant::now());
        Ok(())
    }
}

/// Probe answering with scripted play lengths, then 45 seconds.
pub struct FixedProbe {
    lengths: Mutex<VecDeque<f64>>,
}

impl FixedProbe {
    pub fn new(lengths: Vec<f64>) -> Self {
        Self {
            lengths: Mutex::new(lengths.into()),
        }
    }
}

impl PlayLengthProbe for FixedProbe {
    fn play_length(&self, path: &Path, _format: AudioFormat) -> Result<f64> {
        assert!(path.is_file(), "probed a missing file: {}", path.display());
        Ok(self.lengths.lock().unwrap().pop_front().unwrap_or(45.0))
    }
}

/// A track of album "Album".
pub fn track(id: u64, name: &str, performer: &str, url: &str) -> Track {
    Track {
        id,
        name: name.to_string(),
        performer: performer.to_string(),
        release_name: Some("Album".to_string()),
        track_file_stream_url: url.to_string(),
    }
}

/// Cursor step handing out `track`.
pub fn playing(track: Track) -> TrackSet {
    TrackSet {
        track: Some(track),
        at_end: false,
    }
}

/// Cursor step marking the end of the mix.
pub fn at_end() -> TrackSet {
    TrackSet {
        track: None,
        at_end: true,
    }
}
