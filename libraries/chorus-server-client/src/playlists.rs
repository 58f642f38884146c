//! Playlist operations.

use crate::client::{check_status, parse_json, send_error};
use crate::error::Result;
use crate::types::PlaylistSongRef;
use chorus_core::{Playlist, PlaylistId, PlaylistPatch, TrackId};
use reqwest::Client;
use tracing::debug;

/// Client for the playlist endpoints.
pub struct PlaylistsClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> PlaylistsClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Fetch all playlists visible to the current user.
    pub async fn list(&self) -> Result<Vec<Playlist>> {
        let url = format!("{}/playlists/", self.base_url);
        debug!(url = %url, "Fetching playlists");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;
        let playlists: Vec<Playlist> = parse_json(response, "playlists").await?;

        debug!(playlists = playlists.len(), "Fetched playlists");
        Ok(playlists)
    }

    /// Fetch a single playlist with its songs.
    pub async fn get(&self, id: PlaylistId) -> Result<Playlist> {
        let url = format!("{}/playlists/{}/", self.base_url, id);
        debug!(url = %url, "Fetching playlist");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "playlist").await
    }

    /// Create a playlist, returning the created record.
    pub async fn create(&self, payload: &PlaylistPatch) -> Result<Playlist> {
        let url = format!("{}/playlists/", self.base_url);
        debug!(url = %url, "Creating playlist");

        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "created playlist").await
    }

    /// Apply a partial update, returning the updated record.
    pub async fn update(&self, id: PlaylistId, patch: &PlaylistPatch) -> Result<Playlist> {
        let url = format!("{}/playlists/{}/", self.base_url, id);
        debug!(url = %url, "Updating playlist");

        let response = self
            .http
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "updated playlist").await
    }

    /// Delete a playlist.
    ///
    /// Deleting a playlist that no longer exists succeeds.
    pub async fn delete(&self, id: PlaylistId) -> Result<()> {
        let url = format!("{}/playlists/{}/", self.base_url, id);
        debug!(url = %url, "Deleting playlist");

        let response = self.http.delete(&url).send().await.map_err(send_error)?;
        if response.status().as_u16() == 404 {
            return Ok(());
        }
        check_status(response).await?;
        Ok(())
    }

    /// Add a song to a playlist, returning the updated playlist.
    pub async fn add_song(&self, id: PlaylistId, track_id: TrackId) -> Result<Playlist> {
        let url = format!("{}/playlists/{}/add_song/", self.base_url, id);
        debug!(url = %url, song_id = %track_id, "Adding song to playlist");

        let request = PlaylistSongRef {
            song_id: track_id.value(),
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "updated playlist").await
    }

    /// Remove a song from a playlist, returning the updated playlist.
    pub async fn remove_song(&self, id: PlaylistId, track_id: TrackId) -> Result<Playlist> {
        let url = format!("{}/playlists/{}/delete_song/", self.base_url, id);
        debug!(url = %url, song_id = %track_id, "Removing song from playlist");

        let request = PlaylistSongRef {
            song_id: track_id.value(),
        };
        let response = self
            .http
            .delete(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "updated playlist").await
    }
}
