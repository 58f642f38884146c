//! Playback events
//!
//! Event-based communication for UI synchronization. The session queues
//! events as its state changes; the embedding view drains them with
//! `PlaybackSession::take_events` and re-renders from the new state.

use crate::types::SessionState;
use chorus_core::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Session state changed (loading, playing, paused)
    StateChanged {
        /// The new state
        state: SessionState,
    },

    /// A different track became current
    TrackChanged {
        /// Id of the new current track
        track_id: TrackId,
        /// Id of the previous track, if any
        previous_track_id: Option<TrackId>,
    },

    /// The current track played to its end
    TrackFinished {
        /// Id of the finished track
        track_id: TrackId,
    },

    /// Periodic position update from the engine
    PositionUpdate {
        /// Current playback offset in milliseconds
        position_ms: u64,
        /// Effective track duration in milliseconds
        duration_ms: u64,
    },

    /// A non-fatal failure the UI may want to surface
    Error {
        /// Human-readable message
        message: String,
    },
}
