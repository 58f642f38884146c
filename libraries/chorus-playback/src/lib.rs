//! Chorus - Playback Management
//!
//! Platform-agnostic playback management for Chorus clients.
//!
//! This crate provides:
//! - Library snapshot and synchronization against a track repository
//! - The playback session state machine (select, toggle, next/previous)
//! - Scrub tracking for the seek control
//! - Event queue for UI synchronization
//!
//! # Architecture
//!
//! `chorus-playback` never touches the network or an audio device
//! directly. The backend is reached through the `TrackRepository` and
//! `PlayAudit` traits from `chorus-core`, and audio output through the
//! [`AudioEngine`] trait, so the same session logic runs against any
//! decode/output technology.
//!
//! # Example
//!
//! ```rust,no_run
//! use chorus_playback::{Library, PlaybackSession};
//! # fn engine() -> Box<dyn chorus_playback::AudioEngine> { unimplemented!() }
//! # fn tracks() -> Vec<chorus_core::Track> { vec![] }
//!
//! let library = Library::from_tracks(tracks());
//! let mut session = PlaybackSession::new(engine());
//!
//! if let Some(track) = library.get(0) {
//!     session.select_track(track);
//! }
//! session.play_next(&library);
//!
//! for event in session.take_events() {
//!     println!("{event:?}");
//! }
//! ```

pub mod engine;
pub mod error;
pub mod events;
pub mod library;
pub mod progress;
pub mod session;
pub mod types;

pub use engine::AudioEngine;
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use library::{Library, LibrarySynchronizer};
pub use progress::ScrubTracker;
pub use session::PlaybackSession;
pub use types::SessionState;
