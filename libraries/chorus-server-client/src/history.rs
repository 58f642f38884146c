//! Play history operations and the fire-and-forget audit logger.

use crate::client::{check_status, parse_json, send_error};
use crate::error::Result;
use crate::types::RecordPlayRequest;
use chorus_core::{PlayAudit, PlayHistoryEntry, TrackId};
use reqwest::Client;
use tracing::{debug, warn};

/// Client for the play history endpoints.
pub struct HistoryClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> HistoryClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Record that a song started playing.
    pub async fn record_play(&self, track_id: TrackId) -> Result<()> {
        record_play(self.http, self.base_url, track_id).await
    }

    /// Fetch the listening history, most recent first.
    pub async fn list(&self) -> Result<Vec<PlayHistoryEntry>> {
        let url = format!("{}/history/", self.base_url);
        debug!(url = %url, "Fetching play history");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "play history").await
    }
}

async fn record_play(http: &Client, base_url: &str, track_id: TrackId) -> Result<()> {
    let url = format!("{base_url}/history/");
    debug!(url = %url, song_id = %track_id, "Recording play event");

    let request = RecordPlayRequest {
        song: track_id.value(),
    };
    let response = http
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(send_error)?;
    check_status(response).await?;
    Ok(())
}

/// Detached play-event logger.
///
/// Implements [`PlayAudit`] by spawning the HTTP call onto the ambient
/// Tokio runtime, so recording never blocks playback. Failures are logged
/// and swallowed; the completion callback runs only when the backend
/// acknowledged the event.
#[derive(Clone)]
pub struct AuditLogger {
    http: Client,
    base_url: String,
}

impl AuditLogger {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

impl PlayAudit for AuditLogger {
    fn record_play(&self, track_id: TrackId, on_logged: Box<dyn FnOnce() + Send>) {
        // Callers are synchronous; without an ambient runtime the event is
        // dropped rather than panicking out of the playback path.
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(song_id = %track_id, "no async runtime available, skipping play event");
            return;
        };

        let http = self.http.clone();
        let base_url = self.base_url.clone();
        handle.spawn(async move {
            match record_play(&http, &base_url, track_id).await {
                Ok(()) => on_logged(),
                Err(err) => {
                    // Auditing is best-effort; playback must not notice.
                    warn!(song_id = %track_id, error = %err, "failed to record play event");
                }
            }
        });
    }
}
