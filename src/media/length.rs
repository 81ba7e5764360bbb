//! Play length probing.

use std::path::Path;

use lofty::file::{AudioFile, FileType};
use lofty::probe::Probe;

use crate::error::Result;
use crate::media::format::AudioFormat;

/// Reads the play length of a downloaded track.
pub trait PlayLengthProbe: Send + Sync {
    /// Play length in seconds.
    fn play_length(&self, path: &Path, format: AudioFormat) -> Result<f64>;
}

/// Reads the play length from the audio file's properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagProbe;

impl PlayLengthProbe for TagProbe {
    fn play_length(&self, path: &Path, format: AudioFormat) -> Result<f64> {
        let file_type = match format {
            AudioFormat::Mp3 => FileType::Mpeg,
            AudioFormat::M4a => FileType::Mp4,
        };

        let tagged = Probe::open(path)?.set_file_type(file_type).read()?;
        let play_length = tagged.properties().duration().as_secs_f64();

        tracing::debug!("Play length {}", play_length);
        Ok(play_length)
    }
}
