//! Configuration validation logic.

use crate::config::collection::Collection;
use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Values shipped in example configs that must be replaced.
const PLACEHOLDERS: &[&str] = &["replaceme", "your_api_key", "username", "password"];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_secret("api_key", &config.account.api_key)?;
    validate_secret("login", &config.account.login)?;
    validate_secret("password", &config.account.password)?;
    validate_api_version(config.account.api_version)?;
    validate_user_id(config.follow.user_id)?;
    validate_collection(&config.follow.collection)?;
    validate_base_url(&config.options.base_url)?;

    Ok(())
}

/// Validate a credential value.
pub fn validate_secret(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    let lower = value.to_lowercase();
    if PLACEHOLDERS.contains(&lower.as_str()) {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "'{}' appears to be a placeholder. Please provide your actual value.",
                value
            ),
        });
    }

    Ok(())
}

/// Validate the API version header value.
pub fn validate_api_version(version: u32) -> Result<()> {
    if version == 0 {
        return Err(Error::ConfigValidation {
            field: "api_version".to_string(),
            message: "API version must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate the followed user id.
pub fn validate_user_id(user_id: u64) -> Result<()> {
    if user_id == 0 {
        return Err(Error::MissingConfig(
            "user_id (numeric id of the user to follow)".to_string(),
        ));
    }

    Ok(())
}

/// Validate a named collection slug.
pub fn validate_collection(collection: &Collection) -> Result<()> {
    let Collection::Named(name) = collection else {
        return Ok(());
    };

    // Slugs are used verbatim in the mix set path.
    let slug_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap();
    if !slug_pattern.is_match(name) {
        return Err(Error::ConfigValidation {
            field: "collection".to_string(),
            message: format!(
                "Collection '{}' is not a valid slug. Only alphanumeric, hyphens, and underscores allowed.",
                name
            ),
        });
    }

    Ok(())
}

/// Validate the service base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(())
}
