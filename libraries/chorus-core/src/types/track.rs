//! Track domain types

use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Audio track as known to the backend.
///
/// `file_url` is an opaque locator the audio engine can load; it is fixed
/// once the track is created (a re-upload produces a new locator).
/// `duration` is the nominal length in seconds from upload metadata; the
/// engine's own reported duration supersedes it once a track has loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier, assigned by the backend
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Locator for the encoded audio
    pub file_url: String,

    /// Locator for cover art, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,

    /// Nominal duration in seconds
    pub duration: f64,
}

impl Track {
    /// Get the nominal duration as a `Duration`
    ///
    /// Negative or non-finite metadata is treated as zero.
    pub fn duration(&self) -> Duration {
        if self.duration.is_finite() && self.duration > 0.0 {
            Duration::from_secs_f64(self.duration)
        } else {
            Duration::ZERO
        }
    }
}

/// Payload for creating a new track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackUpload {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Locator for the uploaded audio
    pub file_url: String,

    /// Locator for cover art, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,

    /// Duration in seconds
    pub duration: f64,
}

/// Payload for updating a track (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPatch {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New artist name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// New cover art locator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_art_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_track() -> Track {
        Track {
            id: TrackId::new(1),
            title: "Test Song".to_string(),
            artist: "Test Artist".to_string(),
            album: None,
            file_url: "https://cdn.example.com/audio/1.mp3".to_string(),
            cover_art_url: None,
            duration: 180.0,
        }
    }

    #[test]
    fn duration_conversion() {
        let track = sample_track();
        assert_eq!(track.duration(), Duration::from_secs(180));
    }

    #[test]
    fn zero_metadata_duration_is_zero() {
        let mut track = sample_track();
        track.duration = 0.0;
        assert_eq!(track.duration(), Duration::ZERO);

        track.duration = -3.0;
        assert_eq!(track.duration(), Duration::ZERO);
    }

    #[test]
    fn wire_field_names() {
        let json = r#"{
            "id": 5,
            "title": "Song",
            "artist": "Artist",
            "file_url": "https://cdn.example.com/5.mp3",
            "duration": 217.4
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, TrackId::new(5));
        assert!(track.album.is_none());
        assert!(track.cover_art_url.is_none());
        assert_eq!(track.duration, 217.4);
    }
}
