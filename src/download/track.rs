//! Track file downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::{MixService, Track};
use crate::error::Result;
use crate::fs::track_file_name;
use crate::media::extension_from_url;
use crate::output::create_download_bar;

/// Minimum file size to show progress bar (5 MB).
const PROGRESS_THRESHOLD: u64 = 5 * 1024 * 1024;

/// A track saved to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedTrack {
    pub path: PathBuf,
    pub file_name: String,
    /// Extension of the served file, without dot.
    pub extension: String,
}

impl DownloadedTrack {
    /// Title used in the playlist: the file name without its extension.
    pub fn title(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.file_name)
    }
}

/// Download a track's audio into `target_dir`.
///
/// An existing file of the same name is overwritten. HTTP failures surface as
/// [`crate::Error::TrackUnavailable`].
pub async fn download_track<S: MixService + ?Sized>(
    service: &S,
    track: &Track,
    target_dir: &Path,
    show_progress: bool,
) -> Result<DownloadedTrack> {
    let response = service.fetch_audio(track).await?;

    let extension = extension_from_url(&response.final_url)?;
    let file_name = track_file_name(track, &extension);
    let output_path = target_dir.join(&file_name);

    let show_progress = show_progress
        && response
            .content_length
            .map(|l| l > PROGRESS_THRESHOLD)
            .unwrap_or(false);

    let progress = if show_progress {
        Some(create_download_bar(response.content_length.unwrap_or(0)))
    } else {
        None
    };

    // Stream to file
    let mut file = File::create(&output_path).await?;
    let mut stream = response.body;
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = progress {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    tracing::debug!("Saved {} ({} bytes)", output_path.display(), downloaded);

    Ok(DownloadedTrack {
        path: output_path,
        file_name,
        extension,
    })
}
