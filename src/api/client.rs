//! 8tracks API HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{header, Client, Response};
use serde::de::DeserializeOwned;

use crate::api::service::{AudioResponse, MixService};
use crate::api::types::*;
use crate::config::{AccountConfig, Collection, Config};
use crate::error::{Error, Result};

/// Maximum mixes requested from a mix set.
pub const MIX_SET_PAGE_SIZE: u32 = 500;

/// Timeout of the played-report call.
const REPORT_TIMEOUT: Duration = Duration::from_secs(10);

/// 8tracks API client.
pub struct EighttracksApi {
    client: Client,
    base_url: String,
    login: String,
    password: String,
    report_timeout: Duration,
}

impl EighttracksApi {
    /// Create a new API client from the account and service settings.
    pub fn new(config: &Config) -> Result<Self> {
        let headers = build_headers(&config.account)?;

        let client = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.options.base_url.trim_end_matches('/').to_string(),
            login: config.account.login.clone(),
            password: config.account.password.clone(),
            report_timeout: REPORT_TIMEOUT,
        })
    }

    #[cfg(test)]
    fn with_report_timeout(mut self, timeout: Duration) -> Self {
        self.report_timeout = timeout;
        self
    }

    /// Make a GET request against the service.
    async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        Ok(response)
    }

    /// Read a JSON body, logging the raw text when it does not parse.
    async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        let text = response.text().await?;
        tracing::debug!("{} response: {}", what, text);

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                "Failed to parse {}: {} - Response: {}",
                what,
                e,
                text.chars().take(500).collect::<String>()
            );
            Error::Json(e)
        })
    }
}

/// Headers sent with every request.
fn build_headers(account: &AccountConfig) -> Result<header::HeaderMap> {
    let mut headers = header::HeaderMap::new();

    let api_key = header::HeaderValue::from_str(&account.api_key).map_err(|_| {
        Error::ConfigValidation {
            field: "api_key".to_string(),
            message: "API key contains characters not allowed in a header".to_string(),
        }
    })?;

    headers.insert("x-api-key", api_key);
    headers.insert("x-api-version", header::HeaderValue::from(account.api_version));

    Ok(headers)
}

#[async_trait]
impl MixService for EighttracksApi {
    async fn login(&self) -> Result<u64> {
        let url = format!("{}/sessions.json", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[("login", &self.login), ("password", &self.password)])
            .send()
            .await?;

        let session: SessionResponse = Self::parse(response, "session").await?;
        let user = session.user.ok_or_else(|| {
            Error::Authentication(format!("No user in response: {}", session.notices))
        })?;

        tracing::debug!("{}, id {}", session.notices, user.id);
        Ok(user.id)
    }

    async fn new_play_token(&self) -> Result<String> {
        let response = self.get("/sets/new.json").await?;
        let token: PlayTokenResponse = Self::parse(response, "play token").await?;
        Ok(token.play_token)
    }

    async fn mix_ids(&self, user_id: u64, collection: &Collection) -> Result<Vec<u64>> {
        let path = format!(
            "/mix_sets/{}.json?include=mixes&per_page={}",
            collection.mix_set_key(user_id),
            MIX_SET_PAGE_SIZE
        );

        let response = self.get(&path).await?;
        if response.status().as_u16() >= 400 {
            tracing::error!("Cannot find collection {}", collection);
            return Err(Error::CollectionNotFound {
                user_id,
                collection: collection.to_string(),
            });
        }

        let set: MixSetResponse = Self::parse(response, "mix set").await?;
        let ids = set
            .mix_set
            .mixes
            .into_iter()
            .map(|mix| {
                tracing::debug!("{} ({})", mix.name, mix.id);
                mix.id
            })
            .collect();

        Ok(ids)
    }

    async fn mix_details(&self, mix_id: u64) -> Result<MixDetails> {
        let response = self.get(&format!("/mixes/{}.json", mix_id)).await?;
        let mix: MixResponse = Self::parse(response, "mix").await?;
        Ok(mix.mix)
    }

    async fn track_cursor(
        &self,
        play_token: &str,
        mix_id: u64,
        action: CursorAction,
    ) -> Result<TrackSet> {
        let path = format!(
            "/sets/{}/{}.json?mix_id={}",
            play_token,
            action.as_str(),
            mix_id
        );

        let response = self.get(&path).await?;
        let set: TrackSetResponse = Self::parse(response, "track set").await?;
        Ok(set.set)
    }

    async fn fetch_audio(&self, track: &Track) -> Result<AudioResponse> {
        tracing::debug!("GET {}", track.track_file_stream_url);

        let response = self.client.get(&track.track_file_stream_url).send().await?;

        let status = response.status();
        if status.as_u16() >= 400 {
            tracing::error!("Cannot get track, server returned {}", status);
            return Err(Error::TrackUnavailable {
                status: status.as_u16(),
            });
        }

        Ok(AudioResponse {
            final_url: response.url().to_string(),
            content_length: response.content_length(),
            body: response
                .bytes_stream()
                .map(|chunk| chunk.map_err(|e| Error::Download(format!("Stream error: {}", e))))
                .boxed(),
        })
    }

    async fn report_played(&self, play_token: &str, mix_id: u64, track_id: u64) -> Result<()> {
        let url = format!(
            "{}/sets/{}/report.json?track_id={}&mix_id={}",
            self.base_url, play_token, track_id, mix_id
        );
        tracing::debug!("GET {}", url);

        match self.client.get(&url).timeout(self.report_timeout).send().await {
            Ok(response) => {
                tracing::debug!("Report status: {}", response.status());
                Ok(())
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!("Play report for track {} timed out", track_id);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
