//! Property-based tests for the playback session
//!
//! Uses proptest to verify navigation invariants across many random
//! library shapes and starting points.

use chorus_core::{Track, TrackId};
use chorus_playback::{AudioEngine, Library, PlaybackSession};
use proptest::prelude::*;
use std::time::Duration;

// ===== Helpers =====

/// Engine that accepts everything; navigation properties only care about
/// which track ends up current.
struct PermissiveEngine {
    playing: bool,
}

impl AudioEngine for PermissiveEngine {
    fn load(&mut self, _url: &str, autoplay: bool) -> chorus_playback::Result<()> {
        self.playing = autoplay;
        Ok(())
    }

    fn play(&mut self) -> chorus_playback::Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> chorus_playback::Result<()> {
        self.playing = false;
        Ok(())
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, _position: Duration) -> chorus_playback::Result<()> {
        Ok(())
    }

    fn position(&self) -> Duration {
        Duration::ZERO
    }

    fn duration(&self) -> Option<Duration> {
        None
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

fn session() -> PlaybackSession {
    PlaybackSession::new(Box::new(PermissiveEngine { playing: false }))
}

fn library_of(len: usize) -> Library {
    let tracks = (0..len as i64)
        .map(|i| Track {
            id: TrackId::new(i + 1),
            title: format!("Track {}", i + 1),
            artist: "Artist".to_string(),
            album: None,
            file_url: format!("https://cdn.example.com/{}.mp3", i + 1),
            cover_art_url: None,
            duration: 200.0,
        })
        .collect();
    Library::from_tracks(tracks)
}

fn current_index(session: &PlaybackSession, library: &Library) -> Option<usize> {
    session
        .current_track()
        .and_then(|t| library.index_of(t.id))
}

// ===== Property Tests =====

proptest! {
    /// Property: next always lands on (start + 1) mod len
    #[test]
    fn next_is_successor_modulo_length(len in 1usize..40, start in 0usize..40) {
        let library = library_of(len);
        let start = start % len;
        let mut session = session();
        session.select_track(library.get(start).unwrap());

        session.play_next(&library);
        prop_assert_eq!(current_index(&session, &library), Some((start + 1) % len));
    }

    /// Property: previous always lands on (start - 1) mod len
    #[test]
    fn previous_is_predecessor_modulo_length(len in 1usize..40, start in 0usize..40) {
        let library = library_of(len);
        let start = start % len;
        let mut session = session();
        session.select_track(library.get(start).unwrap());

        session.play_previous(&library);
        prop_assert_eq!(current_index(&session, &library), Some((len + start - 1) % len));
    }

    /// Property: next then previous returns to the starting track
    #[test]
    fn next_then_previous_is_identity(len in 1usize..40, start in 0usize..40) {
        let library = library_of(len);
        let start = start % len;
        let mut session = session();
        session.select_track(library.get(start).unwrap());

        session.play_next(&library);
        session.play_previous(&library);
        prop_assert_eq!(current_index(&session, &library), Some(start));
    }

    /// Property: any navigation sequence keeps the current track inside
    /// the library and never clears it
    #[test]
    fn navigation_never_escapes_the_library(
        len in 1usize..40,
        steps in prop::collection::vec(any::<bool>(), 1..60),
    ) {
        let library = library_of(len);
        let mut session = session();

        for forward in steps {
            if forward {
                session.play_next(&library);
            } else {
                session.play_previous(&library);
            }
            prop_assert!(current_index(&session, &library).is_some());
        }
    }
}
