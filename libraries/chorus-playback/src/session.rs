//! Playback session - core state machine
//!
//! Holds at most one current track, mediates transport commands against
//! the audio engine, and computes next/previous against the library
//! snapshot. There is one session per process (one audio output, one
//! "now playing"), but it is constructed explicitly and passed by
//! reference so tests can build isolated instances.
//!
//! All operations run synchronously to the point of issuing their engine
//! command; the engine's asynchronous completions come back through the
//! `notify_*` methods and are checked against the current track id, so a
//! late callback from an abandoned load is ignored rather than applied.

use crate::{
    engine::AudioEngine,
    events::PlaybackEvent,
    library::Library,
    progress::ScrubTracker,
    types::SessionState,
};
use chorus_core::{PlayAudit, Track, TrackId};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The playback session
pub struct PlaybackSession {
    engine: Box<dyn AudioEngine>,
    audit: Option<Arc<dyn PlayAudit>>,

    state: SessionState,
    current_track: Option<Track>,
    position: Duration,
    scrub: ScrubTracker,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackSession {
    /// Create a session driving the given engine
    pub fn new(engine: Box<dyn AudioEngine>) -> Self {
        Self {
            engine,
            audit: None,
            state: SessionState::Idle,
            current_track: None,
            position: Duration::ZERO,
            scrub: ScrubTracker::new(),
            pending_events: Vec::new(),
        }
    }

    /// Attach a play-audit sink
    ///
    /// Each successful track selection is reported through it,
    /// fire-and-forget.
    pub fn with_audit(mut self, audit: Arc<dyn PlayAudit>) -> Self {
        self.audit = Some(audit);
        self
    }

    // ===== Track selection =====

    /// Select a track
    ///
    /// Re-selecting the current track toggles transport instead of
    /// reloading, so clicking the active row acts as play/pause. Selecting
    /// a different track stops the engine, resets the position to zero,
    /// and loads the new source with autoplay; a play event is then
    /// recorded against the backend without blocking or rolling back
    /// playback if it fails.
    pub fn select_track(&mut self, track: &Track) {
        self.select_track_inner(track, None);
    }

    /// Select a track and run `on_logged` once the play event is recorded
    ///
    /// The callback is skipped if the audit call fails, and may fire after
    /// the session has already moved on to another track.
    pub fn select_track_then(
        &mut self,
        track: &Track,
        on_logged: impl FnOnce() + Send + 'static,
    ) {
        self.select_track_inner(track, Some(Box::new(on_logged)));
    }

    fn select_track_inner(&mut self, track: &Track, on_logged: Option<Box<dyn FnOnce() + Send>>) {
        if let Some(current) = &self.current_track {
            if current.id == track.id {
                self.toggle_transport();
                return;
            }
        }

        let previous_track_id = self.current_track.as_ref().map(|t| t.id);

        self.engine.stop();
        self.current_track = Some(track.clone());
        self.position = Duration::ZERO;
        self.scrub.reset();
        self.set_state(SessionState::Loading);
        self.emit(PlaybackEvent::TrackChanged {
            track_id: track.id,
            previous_track_id,
        });

        if let Err(err) = self.engine.load(&track.file_url, true) {
            // Recoverable: the track stays current so the user sees what
            // was attempted, and selecting another track still works.
            warn!(track_id = %track.id, error = %err, "engine failed to load track");
            self.set_state(SessionState::Paused);
            self.emit(PlaybackEvent::Error {
                message: format!("Could not load \"{}\"", track.title),
            });
        }

        if let Some(audit) = &self.audit {
            debug!(track_id = %track.id, "recording play event");
            audit.record_play(track.id, on_logged.unwrap_or_else(|| Box::new(|| {})));
        }
    }

    fn toggle_transport(&mut self) {
        match self.state {
            SessionState::Playing => self.pause(),
            SessionState::Paused => self.play(),
            // Commands are ignored while the engine is still loading
            SessionState::Loading | SessionState::Idle => {}
        }
    }

    // ===== Transport =====

    /// Resume playback; no-op without a current track or while loading
    pub fn play(&mut self) {
        if self.current_track.is_none() || self.state.is_loading() {
            return;
        }
        match self.engine.play() {
            Ok(()) => self.set_state(SessionState::Playing),
            Err(err) => warn!(error = %err, "engine play failed"),
        }
    }

    /// Pause playback; no-op without a current track or while loading
    pub fn pause(&mut self) {
        if self.current_track.is_none() || self.state.is_loading() {
            return;
        }
        match self.engine.pause() {
            Ok(()) => self.set_state(SessionState::Paused),
            Err(err) => warn!(error = %err, "engine pause failed"),
        }
    }

    /// Jump to a position in the current track
    ///
    /// The session position is updated optimistically rather than waiting
    /// for the engine's next progress tick. No-op unless a track is
    /// current and its effective duration is known and non-zero.
    pub fn seek(&mut self, position: Duration) {
        let Some(duration) = self.effective_duration() else {
            return;
        };
        if duration.is_zero() {
            return;
        }

        let position = position.min(duration);
        match self.engine.seek(position) {
            Ok(()) => self.position = position,
            Err(err) => warn!(error = %err, "engine seek failed"),
        }
    }

    // ===== Next / previous =====

    /// Advance to the next library track, wrapping past the end
    ///
    /// If the current track is no longer in the snapshot it counts as
    /// "before the first track", so the next track is index 0. No-op on an
    /// empty library.
    pub fn play_next(&mut self, library: &Library) {
        if library.is_empty() {
            return;
        }
        let index = self.current_index(library);
        let target = match index {
            Some(i) if i + 1 < library.len() => i + 1,
            _ => 0,
        };
        if let Some(track) = library.get(target) {
            self.select_track(track);
        }
    }

    /// Go back to the previous library track, wrapping before the start
    ///
    /// A current track missing from the snapshot wraps to the last track.
    /// No-op on an empty library.
    pub fn play_previous(&mut self, library: &Library) {
        if library.is_empty() {
            return;
        }
        let index = self.current_index(library);
        let target = match index {
            Some(i) if i > 0 => i - 1,
            _ => library.len() - 1,
        };
        if let Some(track) = library.get(target) {
            self.select_track(track);
        }
    }

    fn current_index(&self, library: &Library) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        library.index_of(current.id)
    }

    // ===== Engine notifications =====

    /// Engine finished loading the selected source
    ///
    /// Stale readiness from an abandoned load (user already switched
    /// tracks) is ignored.
    pub fn notify_loaded(&mut self, track_id: TrackId) {
        if self.current_track.as_ref().map(|t| t.id) != Some(track_id) {
            debug!(%track_id, "ignoring stale load completion");
            return;
        }
        if self.state.is_loading() {
            // Loaded with autoplay
            self.set_state(SessionState::Playing);
        }
    }

    /// Engine could not load the selected source
    ///
    /// The track stays current, loading clears, and the session remains
    /// fully operable.
    pub fn notify_load_failed(&mut self, track_id: TrackId, message: &str) {
        if self.current_track.as_ref().map(|t| t.id) != Some(track_id) {
            debug!(%track_id, "ignoring stale load failure");
            return;
        }
        warn!(%track_id, message, "track load failed");
        self.set_state(SessionState::Paused);
        self.emit(PlaybackEvent::Error {
            message: message.to_string(),
        });
    }

    /// Engine reached the end of the current track
    ///
    /// Always advances with wraparound, exactly as `play_next` would.
    /// On a one-track library the wraparound resolves to the current
    /// track, and because the transport is already stopped the same-id
    /// branch resumes it, so the track loops.
    pub fn notify_ended(&mut self, library: &Library) {
        if let Some(current) = &self.current_track {
            self.pending_events.push(PlaybackEvent::TrackFinished {
                track_id: current.id,
            });
        }
        // The engine stopped with the end of the stream; no pause command
        // is needed, only the session's view of the transport changes.
        if self.state == SessionState::Playing {
            self.set_state(SessionState::Paused);
        }
        self.play_next(library);
    }

    // ===== Progress =====

    /// Republish the engine's position
    ///
    /// Call periodically (timer or per-frame). While a scrub is in
    /// progress the locally-held position takes precedence and engine
    /// ticks are dropped.
    pub fn tick(&mut self) {
        if self.current_track.is_none() || self.scrub.is_active() {
            return;
        }
        self.position = self.engine.position();
        let duration = self.effective_duration().unwrap_or(Duration::ZERO);
        self.emit(PlaybackEvent::PositionUpdate {
            position_ms: self.position.as_millis() as u64,
            duration_ms: duration.as_millis() as u64,
        });
    }

    /// Start dragging the seek control
    pub fn begin_scrub(&mut self) {
        self.scrub.begin(self.position);
    }

    /// Move the drag target
    pub fn scrub_to(&mut self, position: Duration) {
        self.scrub.update(position);
    }

    /// Release the drag, committing the held position with one seek
    pub fn end_scrub(&mut self) {
        if let Some(target) = self.scrub.finish() {
            self.seek(target);
        }
    }

    // ===== Library reconciliation =====

    /// Apply a refreshed library snapshot to the current track
    ///
    /// If the current id survives, its metadata is updated in place so
    /// edits become visible. If it is gone, the stale record is kept:
    /// next/previous recover via the not-found wraparound policy rather
    /// than the session clearing itself.
    pub fn reconcile(&mut self, library: &Library) {
        let Some(current) = &self.current_track else {
            return;
        };
        if let Some(updated) = library.track_by_id(current.id) {
            if updated != current {
                self.current_track = Some(updated.clone());
            }
        }
    }

    // ===== State queries =====

    /// Current session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The current track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether the engine is playing the current track
    pub fn is_playing(&self) -> bool {
        self.state == SessionState::Playing
    }

    /// Whether a selected track is still loading
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Displayed playback position
    ///
    /// The scrub position while a drag is in progress, the last engine
    /// position otherwise.
    pub fn position(&self) -> Duration {
        self.scrub.position().unwrap_or(self.position)
    }

    /// Effective duration of the current track
    ///
    /// The larger of the engine-reported duration and the stored metadata
    /// duration; stored metadata can be stale or zero while the engine has
    /// already determined the real value.
    pub fn effective_duration(&self) -> Option<Duration> {
        let track = self.current_track.as_ref()?;
        let engine = self.engine.duration().unwrap_or(Duration::ZERO);
        Some(engine.max(track.duration()))
    }

    /// Drain queued events for the UI
    pub fn take_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internal =====

    fn set_state(&mut self, state: SessionState) {
        if self.state != state {
            self.state = state;
            self.emit(PlaybackEvent::StateChanged { state });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}
