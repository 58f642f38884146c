//! Domain types for Chorus

mod history;
mod ids;
mod playlist;
mod track;
mod user;

pub use history::PlayHistoryEntry;
pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::{Playlist, PlaylistPatch, PlaylistSong};
pub use track::{Track, TrackPatch, TrackUpload};
pub use user::UserProfile;
