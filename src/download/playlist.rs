//! Extended M3U playlist writer.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Header line of an extended M3U file.
pub const M3U_HEADER: &str = "#EXTM3U";

/// Playlist of a mix, kept in the mix folder so tracks import in mix order.
#[derive(Debug, Clone)]
pub struct Playlist {
    path: PathBuf,
}

impl Playlist {
    /// Playlist `<name>.m3u` in `folder`.
    pub fn new(folder: &Path, name: &str) -> Self {
        Self {
            path: folder.join(format!("{}.m3u", name)),
        }
    }

    /// Location of the playlist file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry, creating the file with its header first if needed.
    ///
    /// The duration is truncated to whole seconds.
    pub async fn append(&self, play_length: f64, title: &str, file_name: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut entry = String::new();
        if file.metadata().await?.len() == 0 {
            entry.push_str(M3U_HEADER);
            entry.push('\n');
        }
        entry.push_str(&format!(
            "#EXTINF:{},{}\n{}\n",
            play_length.max(0.0) as u64,
            title,
            file_name
        ));

        file.write_all(entry.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
