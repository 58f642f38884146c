//! Core types for the playback session

use serde::{Deserialize, Serialize};

/// Playback session state
///
/// `Idle` means no track has ever been selected. Once a track is current
/// the session only moves between `Loading`, `Playing`, and `Paused`;
/// end-of-track always advances to the next track's `Loading` rather than
/// settling anywhere terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No current track
    Idle,

    /// A track is selected and the engine is fetching/decoding it
    Loading,

    /// Engine is playing the current track
    Playing,

    /// Current track is loaded but paused
    Paused,
}

impl SessionState {
    /// Whether the engine is busy loading, during which transport
    /// commands are ignored
    pub fn is_loading(self) -> bool {
        self == SessionState::Loading
    }
}
