//! Audio engine capability
//!
//! Abstracts the decode/output technology behind a trait so the session
//! never depends on a concrete audio backend.

use crate::error::Result;
use std::time::Duration;

/// The external audio engine driven by the playback session.
///
/// The session is the engine's exclusive owner; no other component calls
/// transport methods directly. Load completion, load failure, and end of
/// track are asynchronous on real engines and are delivered back to the
/// session through its `notify_*` methods.
pub trait AudioEngine: Send {
    /// Ask the engine to fetch and decode a source
    ///
    /// With `autoplay` set, playback starts as soon as the source is ready.
    fn load(&mut self, url: &str, autoplay: bool) -> Result<()>;

    /// Start or resume playback of the loaded source
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the loaded source and position
    fn pause(&mut self) -> Result<()>;

    /// Stop playback and discard the loaded source
    fn stop(&mut self);

    /// Jump to a position in the loaded source
    fn seek(&mut self, position: Duration) -> Result<()>;

    /// Current playback offset
    fn position(&self) -> Duration;

    /// Duration the engine determined from the encoded audio, once known
    ///
    /// This supersedes stored track metadata, which can be stale or zero.
    fn duration(&self) -> Option<Duration>;

    /// Whether the engine is currently producing output
    fn is_playing(&self) -> bool;
}

/// Silent engine for unit tests: tracks transport state, never errors
#[cfg(test)]
pub struct DummyEngine {
    loaded: Option<String>,
    playing: bool,
    position: Duration,
    duration: Duration,
}

#[cfg(test)]
impl DummyEngine {
    pub fn new(duration: Duration) -> Self {
        Self {
            loaded: None,
            playing: false,
            position: Duration::ZERO,
            duration,
        }
    }
}

#[cfg(test)]
impl AudioEngine for DummyEngine {
    fn load(&mut self, url: &str, autoplay: bool) -> Result<()> {
        self.loaded = Some(url.to_string());
        self.position = Duration::ZERO;
        self.playing = autoplay;
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            return Err(crate::error::PlaybackError::NoTrackLoaded);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        Ok(())
    }

    fn stop(&mut self) {
        self.loaded = None;
        self.playing = false;
        self.position = Duration::ZERO;
    }

    fn seek(&mut self, position: Duration) -> Result<()> {
        if position > self.duration {
            return Err(crate::error::PlaybackError::InvalidSeekPosition(position));
        }
        self.position = position;
        Ok(())
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn duration(&self) -> Option<Duration> {
        self.loaded.as_ref().map(|_| self.duration)
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
