//! Error types for the eighttracks-shuffle application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Cannot find collection '{collection}' for user {user_id}")]
    CollectionNotFound { user_id: u64, collection: String },

    // Download errors
    #[error("Cannot download track, server returned HTTP {status}")]
    TrackUnavailable { status: u16 },

    #[error("Download failed: {0}")]
    Download(String),

    // Ledger errors
    #[error("Ledger line {line} is not a mix id: '{content}'")]
    Ledger { line: usize, content: String },

    // Media errors
    #[error("Cannot get play length for format '{0}'")]
    UnsupportedFormat(String),

    #[error("Tag reading error: {0}")]
    Tag(#[from] lofty::error::LoftyError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}
