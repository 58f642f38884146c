//! Repository bindings onto the core traits.

use crate::client::ApiClient;
use chorus_core::{Track, TrackRepository};

impl TrackRepository for ApiClient {
    async fn list_tracks(&self) -> chorus_core::Result<Vec<Track>> {
        let tracks = self.songs().list().await?;
        Ok(tracks)
    }
}
