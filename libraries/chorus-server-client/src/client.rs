//! Main Chorus API client.

use crate::auth::AuthClient;
use crate::error::{ApiClientError, Result};
use crate::history::{AuditLogger, HistoryClient};
use crate::playlists::PlaylistsClient;
use crate::songs::SongsClient;
use crate::types::ApiConfig;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the Chorus backend API.
///
/// Authentication is session-based: a successful login sets a cookie that
/// the underlying HTTP client stores and replays on every request, so
/// there is no token to thread through individual calls.
///
/// # Example
///
/// ```ignore
/// use chorus_server_client::{ApiClient, ApiConfig};
///
/// let client = ApiClient::new(ApiConfig::from_env())?;
///
/// client.auth().login("ada@example.com", "hunter2").await?;
/// let tracks = client.songs().list().await?;
/// println!("Found {} tracks", tracks.len());
/// ```
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ApiClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Chorus/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Song catalog operations.
    pub fn songs(&self) -> SongsClient<'_> {
        SongsClient::new(&self.http, &self.base_url)
    }

    /// Play history operations.
    pub fn history(&self) -> HistoryClient<'_> {
        HistoryClient::new(&self.http, &self.base_url)
    }

    /// Playlist operations.
    pub fn playlists(&self) -> PlaylistsClient<'_> {
        PlaylistsClient::new(&self.http, &self.base_url)
    }

    /// Authentication and account operations.
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url)
    }

    /// Detached play-event logger for fire-and-forget auditing.
    ///
    /// The logger shares this client's HTTP session and can outlive
    /// individual requests; see [`AuditLogger`].
    pub fn audit_logger(&self) -> AuditLogger {
        AuditLogger::new(self.http.clone(), self.base_url.clone())
    }
}

/// Map connection-level failures to `ServerUnreachable`.
pub(crate) fn send_error(err: reqwest::Error) -> ApiClientError {
    if err.is_connect() || err.is_timeout() {
        ApiClientError::ServerUnreachable(err.to_string())
    } else {
        ApiClientError::Request(err)
    }
}

/// Reject error statuses, mapping 401 to `AuthRequired`.
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status.as_u16() == 401 {
        return Err(ApiClientError::AuthRequired);
    }
    let message = response.text().await.unwrap_or_default();
    Err(ApiClientError::ServerError {
        status: status.as_u16(),
        message,
    })
}

/// Deserialize a checked response body.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| ApiClientError::ParseError(format!("Failed to parse {what}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(ApiClient::new(ApiConfig::new("https://music.example.com/api")).is_ok());
        assert!(ApiClient::new(ApiConfig::new("http://localhost:8000/api")).is_ok());

        assert!(ApiClient::new(ApiConfig::new("")).is_err());
        assert!(ApiClient::new(ApiConfig::new("music.example.com")).is_err());
        assert!(ApiClient::new(ApiConfig::new("ftp://music.example.com")).is_err());
    }

    #[test]
    fn url_normalization_strips_trailing_slashes() {
        let client = ApiClient::new(ApiConfig::new("https://music.example.com/api///"))
            .expect("valid url");
        assert_eq!(client.base_url(), "https://music.example.com/api");
    }
}
