//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Collection, Config};

/// 8tracks collection mirroring CLI.
#[derive(Parser, Debug)]
#[command(
    name = "eighttracks-shuffle",
    version,
    about = "Play through a followed 8tracks collection and keep the tracks",
    long_about = "Logs in as a bot account, finds the mixes in a followed user's collection and \
                  plays each one that has not been downloaded yet.\n\n\
                  Every track is saved next to an extended M3U playlist in a folder per mix."
)]
pub struct Args {
    /// Numeric id of the user whose collection to follow.
    #[arg(short, long)]
    pub user_id: Option<u64>,

    /// Collection to follow ("liked" or a collection slug).
    #[arg(short = 'C', long)]
    pub collection: Option<Collection>,

    /// Base directory for mix folders, the ledger and the play token cache.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// 8tracks API key.
    #[arg(short = 'k', long = "api-key", env = "EIGHTTRACKS_API_KEY")]
    pub api_key: Option<String>,

    /// Login of the bot account.
    #[arg(short, long, env = "EIGHTTRACKS_LOGIN")]
    pub login: Option<String>,

    /// Password of the bot account.
    #[arg(short, long, env = "EIGHTTRACKS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Only list the mixes that would be downloaded.
    #[arg(long)]
    pub dry_run: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(user_id) = self.user_id {
            config.follow.user_id = user_id;
        }

        if let Some(collection) = &self.collection {
            config.follow.collection = collection.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        if let Some(api_key) = &self.api_key {
            config.account.api_key = api_key.clone();
        }

        if let Some(login) = &self.login {
            config.account.login = login.clone();
        }

        if let Some(password) = &self.password {
            config.account.password = password.clone();
        }

        if self.quiet {
            config.options.show_downloads = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides() {
        let args = Args::parse_from([
            "eighttracks-shuffle",
            "--user-id",
            "42",
            "--collection",
            "ipod-shuffle",
            "--directory",
            "/music",
            "--quiet",
        ]);

        let mut config = Config::default();
        config.follow.user_id = 7;
        args.merge_into_config(&mut config);

        assert_eq!(config.follow.user_id, 42);
        assert_eq!(
            config.follow.collection,
            Collection::Named("ipod-shuffle".into())
        );
        assert_eq!(
            config.options.download_directory,
            Some(PathBuf::from("/music"))
        );
        assert!(!config.options.show_downloads);
    }

    #[test]
    fn test_merge_keeps_unset_values() {
        let args = Args::parse_from(["eighttracks-shuffle", "--config", "other.toml"]);

        let mut config = Config::default();
        config.follow.user_id = 7;
        config.follow.collection = Collection::Named("road-trip".into());
        args.merge_into_config(&mut config);

        assert_eq!(config.follow.user_id, 7);
        assert_eq!(config.follow.collection, Collection::Named("road-trip".into()));
        assert_eq!(args.config, PathBuf::from("other.toml"));
        assert!(config.options.show_downloads);
    }
}
