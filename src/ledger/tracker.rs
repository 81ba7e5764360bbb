//! Ledger of mixes that were downloaded completely.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Append-only set of completed mix ids, one per line on disk.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
    mixes: HashSet<u64>,
    // File ends without a newline; the next append must start a fresh line.
    unterminated: bool,
}

impl Ledger {
    /// Load the ledger. A missing file is an empty ledger.
    pub fn load(path: &Path) -> Result<Self> {
        let (mixes, unterminated) = match std::fs::read_to_string(path) {
            Ok(content) => (
                parse_ledger(&content)?,
                !content.is_empty() && !content.ends_with('\n'),
            ),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No ledger at {}, starting empty", path.display());
                (HashSet::new(), false)
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path: path.to_path_buf(),
            mixes,
            unterminated,
        })
    }

    /// Check if a mix was already downloaded.
    pub fn contains(&self, mix_id: u64) -> bool {
        self.mixes.contains(&mix_id)
    }

    /// Number of downloaded mixes.
    pub fn len(&self) -> usize {
        self.mixes.len()
    }

    /// Check if no mix was downloaded yet.
    pub fn is_empty(&self) -> bool {
        self.mixes.is_empty()
    }

    /// Discovered mixes not in the ledger, in discovery order.
    pub fn pending(&self, discovered: &[u64]) -> Vec<u64> {
        download_set(discovered, &self.mixes)
    }

    /// Mark a mix as downloaded, appending it to the file immediately.
    ///
    /// Recording a mix that is already present is a no-op.
    pub fn record(&mut self, mix_id: u64) -> Result<()> {
        if !self.mixes.insert(mix_id) {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if self.unterminated {
            writeln!(file)?;
            self.unterminated = false;
        }
        writeln!(file, "{}", mix_id)?;
        file.flush()?;

        tracing::info!("Added mix {} to {}", mix_id, self.path.display());
        Ok(())
    }
}

/// Mixes of `discovered` that are not in `downloaded`, order preserved.
pub fn download_set(discovered: &[u64], downloaded: &HashSet<u64>) -> Vec<u64> {
    discovered
        .iter()
        .copied()
        .filter(|id| !downloaded.contains(id))
        .collect()
}

fn parse_ledger(content: &str) -> Result<HashSet<u64>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, content)| {
            content.parse::<u64>().map_err(|_| Error::Ledger {
                line,
                content: content.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_set_preserves_order() {
        let downloaded: HashSet<u64> = [5, 1].into_iter().collect();
        assert_eq!(download_set(&[9, 5, 3, 1, 7], &downloaded), vec![9, 3, 7]);
    }

    #[test]
    fn test_download_set_with_empty_ledger() {
        let discovered = vec![4, 2, 8];
        assert_eq!(download_set(&discovered, &HashSet::new()), discovered);
    }

    #[test]
    fn test_missing_ledger_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = Ledger::load(&dir.path().join("downloadedmixes")).unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.pending(&[3, 2, 1]), vec![3, 2, 1]);
    }

    #[test]
    fn test_load_existing_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downloadedmixes");
        std::fs::write(&path, "1234\n  5678 \n\n").unwrap();

        let ledger = Ledger::load(&path).unwrap();
        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains(5678));
        assert_eq!(ledger.pending(&[1234, 42, 5678]), vec![42]);
    }

    #[test]
    fn test_invalid_line_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downloadedmixes");
        std::fs::write(&path, "1234\nnot-a-mix\n").unwrap();

        match Ledger::load(&path) {
            Err(Error::Ledger { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "not-a-mix");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_record_appends_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downloadedmixes");
        std::fs::write(&path, "1\n").unwrap();

        let mut ledger = Ledger::load(&path).unwrap();
        ledger.record(2).unwrap();
        ledger.record(2).unwrap();
        ledger.record(1).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2\n");

        let reloaded = Ledger::load(&path).unwrap();
        assert!(reloaded.contains(2));
        assert_eq!(reloaded.pending(&[1, 2, 3]), vec![3]);
    }

    #[test]
    fn test_record_after_unterminated_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("downloadedmixes");
        std::fs::write(&path, "1").unwrap();

        let mut ledger = Ledger::load(&path).unwrap();
        ledger.record(2).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n2\n");
    }
}
