//! Collaborator traits for Chorus

use crate::error::Result;
use crate::types::{Track, TrackId};

/// Source of the authoritative track list
///
/// Implemented by the server client; the library synchronizer is generic
/// over this so playback logic never touches HTTP directly.
#[allow(async_fn_in_trait)]
pub trait TrackRepository {
    /// Fetch the full track list, in server order
    async fn list_tracks(&self) -> Result<Vec<Track>>;
}

/// Fire-and-forget play auditing
///
/// `record_play` must return immediately; the implementation performs the
/// network call on a detached task. `on_logged` runs only if the call
/// succeeds, and may run after the session has moved on to another track,
/// so it must not carry any assumption about the current track.
pub trait PlayAudit: Send + Sync {
    /// Record that a track started playing
    ///
    /// Failures are logged by the implementation and never surfaced.
    fn record_play(&self, track_id: TrackId, on_logged: Box<dyn FnOnce() + Send>);
}
