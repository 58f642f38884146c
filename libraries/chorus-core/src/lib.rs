//! Chorus Core
//!
//! Shared types, traits, and error handling for the Chorus music client.
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `UserProfile`, id newtypes
//! - **Collaborator Traits**: `TrackRepository`, `PlayAudit`
//! - **Error Handling**: Unified `ChorusError` and `Result` types
//!
//! All persistence and business rules live in the backend API; these types
//! mirror what the API returns and what the playback layer needs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ChorusError, Result};
pub use traits::{PlayAudit, TrackRepository};

pub use types::{
    PlayHistoryEntry, Playlist, PlaylistId, PlaylistPatch, PlaylistSong, Track, TrackId,
    TrackPatch, TrackUpload, UserId, UserProfile,
};
