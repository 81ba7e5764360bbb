//! Session establishment and the play token cache.

use std::io::ErrorKind;
use std::path::Path;

use crate::api::service::MixService;
use crate::error::Result;

/// Credentials held for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Id of the logged-in bot account.
    pub user_id: u64,
    /// Token keying the track cursors.
    pub play_token: String,
}

/// Log in and obtain a play token.
pub async fn establish_session<S: MixService + ?Sized>(
    service: &S,
    token_cache: &Path,
) -> Result<Session> {
    let user_id = service.login().await?;
    tracing::info!("Logged in as user {}", user_id);

    let play_token = play_token(service, token_cache).await?;

    Ok(Session {
        user_id,
        play_token,
    })
}

/// Return the cached play token, requesting and caching a new one if there is none.
///
/// A cached token is used as-is; it is never checked for expiry.
pub async fn play_token<S: MixService + ?Sized>(service: &S, cache: &Path) -> Result<String> {
    if let Some(token) = read_cached_token(cache).await? {
        tracing::debug!("Using cached play token from {}", cache.display());
        return Ok(token);
    }

    let token = service.new_play_token().await?;

    if let Some(parent) = cache.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(cache, &token).await?;
    tracing::debug!("Cached new play token in {}", cache.display());

    Ok(token)
}

/// First line of the cache file, or `None` if the file is missing or blank.
async fn read_cached_token(cache: &Path) -> Result<Option<String>> {
    let content = match tokio::fs::read_to_string(cache).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let token = content.lines().next().unwrap_or("").trim();
    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(token.to_string()))
    }
}
