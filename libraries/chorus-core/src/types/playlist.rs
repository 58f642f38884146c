//! Playlist domain types

use crate::types::{PlaylistId, Track, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist with its ordered tracks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist title
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Whether the playlist is visible to other users
    pub is_public: bool,

    /// Owning user
    pub owner: UserId,

    /// Tracks in playlist order
    #[serde(default)]
    pub songs: Vec<PlaylistSong>,
}

/// A playlist membership entry
///
/// The entry id identifies the membership itself, not the track; the same
/// track can appear in many playlists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistSong {
    /// Membership entry id
    pub id: i64,

    /// Position within the playlist
    pub order: u32,

    /// When the track was added
    pub added_at: DateTime<Utc>,

    /// The track itself
    pub song: Track,
}

/// Payload for creating or updating a playlist (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New visibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}
