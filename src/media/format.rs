//! Audio format recognition.

use std::fmt;
use std::path::Path;

use url::Url;

use crate::error::Result;

/// Audio formats whose play length can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Mp3,
    M4a,
}

impl AudioFormat {
    /// Recognize a format from a file extension (without dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "m4a" => Some(AudioFormat::M4a),
            _ => None,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioFormat::Mp3 => write!(f, "mp3"),
            AudioFormat::M4a => write!(f, "m4a"),
        }
    }
}

/// Extension (without dot) of the last path segment of a URL.
///
/// Query strings and fragments are ignored. Returns an empty string when the
/// file name has no extension.
pub fn extension_from_url(url: &str) -> Result<String> {
    let url = Url::parse(url)?;
    let file_name = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");

    Ok(Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_string())
}
