//! Configuration structures and loading logic.

use crate::config::collection::Collection;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub follow: FollowConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Credentials of the account that logs in and plays the mixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Developer API key, sent as `X-Api-Key`.
    #[serde(default)]
    pub api_key: String,

    /// API version, sent as `X-Api-Version`.
    #[serde(default = "default_api_version")]
    pub api_version: u32,

    /// Login name of the bot account.
    #[serde(default)]
    pub login: String,

    /// Password of the bot account.
    #[serde(default)]
    pub password: String,
}

/// The user and collection to mirror.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowConfig {
    /// Numeric id of the followed user.
    #[serde(default)]
    pub user_id: u64,

    /// Collection of the followed user.
    #[serde(default)]
    pub collection: Collection,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for mix folders and local state.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Downloaded-mixes ledger file.
    #[serde(default = "default_ledger_file")]
    pub ledger_file: PathBuf,

    /// Play token cache file.
    #[serde(default = "default_play_token_file")]
    pub play_token_file: PathBuf,

    /// Service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: None,
            ledger_file: default_ledger_file(),
            play_token_file: default_play_token_file(),
            base_url: default_base_url(),
            show_downloads: true,
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_version: default_api_version(),
            login: String::new(),
            password: String::new(),
        }
    }
}

fn default_api_version() -> u32 {
    3
}

fn default_ledger_file() -> PathBuf {
    PathBuf::from("downloadedmixes")
}

fn default_play_token_file() -> PathBuf {
    PathBuf::from("playtoken")
}

fn default_base_url() -> String {
    "https://8tracks.com".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Location of the downloaded-mixes ledger.
    pub fn ledger_path(&self) -> PathBuf {
        self.download_directory().join(&self.options.ledger_file)
    }

    /// Location of the play token cache.
    pub fn play_token_path(&self) -> PathBuf {
        self.download_directory().join(&self.options.play_token_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [account]
            api_key = "abc123"
            login = "bot"
            password = "hunter2"

            [follow]
            user_id = 111111
            collection = "ipod-shuffle"

            [options]
            download_directory = "/music"
            "#,
        )
        .unwrap();

        assert_eq!(config.account.api_version, 3);
        assert_eq!(config.follow.user_id, 111111);
        assert_eq!(
            config.follow.collection,
            Collection::Named("ipod-shuffle".into())
        );
        assert_eq!(
            config.ledger_path(),
            PathBuf::from("/music/downloadedmixes")
        );
        assert_eq!(config.play_token_path(), PathBuf::from("/music/playtoken"));
        assert!(config.options.show_downloads);
    }

    #[test]
    fn test_collection_defaults_to_liked() {
        let config: Config = toml::from_str("[follow]\nuser_id = 7\n").unwrap();
        assert_eq!(config.follow.collection, Collection::Liked);
        assert_eq!(config.options.base_url, "https://8tracks.com");
    }

    #[test]
    fn test_absolute_state_files_are_kept() {
        let mut config = Config::default();
        config.options.download_directory = Some(PathBuf::from("/music"));
        config.options.ledger_file = PathBuf::from("/var/lib/ledger");
        assert_eq!(config.ledger_path(), PathBuf::from("/var/lib/ledger"));
    }
}
