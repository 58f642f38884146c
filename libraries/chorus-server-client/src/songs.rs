//! Song catalog operations.

use crate::client::{check_status, parse_json, send_error};
use crate::error::{ApiClientError, Result};
use chorus_core::{Track, TrackId, TrackPatch, TrackUpload};
use reqwest::Client;
use tracing::debug;

/// Client for the song catalog endpoints.
pub struct SongsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> SongsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch every song, in the backend's canonical order.
    pub async fn list(&self) -> Result<Vec<Track>> {
        let url = format!("{}/songs/", self.base_url);
        debug!(url = %url, "Fetching song list");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;
        let tracks: Vec<Track> = parse_json(response, "song list").await?;

        debug!(tracks = tracks.len(), "Fetched song list");
        Ok(tracks)
    }

    /// Fetch a single song by id.
    pub async fn get(&self, id: TrackId) -> Result<Track> {
        let url = format!("{}/songs/{}/", self.base_url, id);
        debug!(url = %url, "Fetching song");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        if response.status().as_u16() == 404 {
            return Err(ApiClientError::ServerError {
                status: 404,
                message: format!("Song not found: {id}"),
            });
        }
        let response = check_status(response).await?;
        parse_json(response, "song").await
    }

    /// Register a new song, returning the created record.
    pub async fn create(&self, upload: &TrackUpload) -> Result<Track> {
        let url = format!("{}/songs/", self.base_url);
        debug!(url = %url, title = %upload.title, "Creating song");

        let response = self
            .http
            .post(&url)
            .json(upload)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "created song").await
    }

    /// Update a song's metadata, returning the updated record.
    pub async fn update(&self, id: TrackId, patch: &TrackPatch) -> Result<Track> {
        let url = format!("{}/songs/{}/", self.base_url, id);
        debug!(url = %url, "Updating song");

        let response = self
            .http
            .put(&url)
            .json(patch)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "updated song").await
    }

    /// Delete a song.
    ///
    /// Deleting a song that no longer exists succeeds.
    pub async fn delete(&self, id: TrackId) -> Result<()> {
        let url = format!("{}/songs/{}/", self.base_url, id);
        debug!(url = %url, "Deleting song");

        let response = self.http.delete(&url).send().await.map_err(send_error)?;
        if response.status().as_u16() == 404 {
            // Already gone
            return Ok(());
        }
        check_status(response).await?;
        debug!(song_id = %id, "Song deleted");
        Ok(())
    }

    /// Search songs by free-text query.
    pub async fn search(&self, query: &str) -> Result<Vec<Track>> {
        let encoded: String = url::form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let url = format!("{}/songs/search/?q={}", self.base_url, encoded);
        debug!(url = %url, query = %query, "Searching songs");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;
        let tracks: Vec<Track> = parse_json(response, "search results").await?;

        debug!(results = tracks.len(), "Search complete");
        Ok(tracks)
    }
}
