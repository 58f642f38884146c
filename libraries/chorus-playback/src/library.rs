//! Library state and synchronization
//!
//! The `Library` is the single in-memory source of truth for what tracks
//! exist and in what order. It is rebuilt wholesale on each refresh, never
//! diffed in place, and the order is the server-returned order. Position
//! is always recomputed from a track id with `index_of` rather than held
//! as a raw index, so a refresh can never leave a stale index behind.

use chorus_core::{Result, Track, TrackId, TrackRepository};
use tracing::debug;

/// Insertion-ordered snapshot of the known tracks
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: Vec<Track>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library from a track list, in the given order
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let mut library = Self::new();
        library.replace_all(tracks);
        library
    }

    /// Replace the entire snapshot
    ///
    /// Track ids are unique within a snapshot (backend invariant).
    pub fn replace_all(&mut self, tracks: Vec<Track>) {
        debug_assert!(
            {
                let mut ids: Vec<_> = tracks.iter().map(|t| t.id).collect();
                ids.sort_unstable_by_key(|id| id.value());
                ids.windows(2).all(|w| w[0] != w[1])
            },
            "duplicate track ids in library snapshot"
        );
        self.tracks = tracks;
    }

    /// Position of a track id within the snapshot
    pub fn index_of(&self, id: TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == id)
    }

    /// Look up a track by id
    pub fn track_by_id(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Track at a position
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Number of tracks in the snapshot
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// All tracks, in library order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over tracks in library order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}

/// Maintains the library snapshot against the backend
///
/// `refresh` replaces the snapshot atomically: readers see either the old
/// snapshot or the new one, never a partial state, and a failed fetch
/// leaves the previous snapshot untouched.
#[derive(Debug, Default)]
pub struct LibrarySynchronizer {
    library: Library,
}

impl LibrarySynchronizer {
    /// Create a synchronizer with an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Fetch the track list and replace the snapshot
    ///
    /// On failure the error is returned to the caller and the previous
    /// snapshot is retained unchanged; there is no automatic retry.
    pub async fn refresh<R: TrackRepository>(&mut self, repo: &R) -> Result<()> {
        let tracks = repo.list_tracks().await?;
        debug!(tracks = tracks.len(), "library refreshed");
        self.library.replace_all(tracks);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chorus_core::ChorusError;

    fn track(id: i64, title: &str) -> Track {
        Track {
            id: TrackId::new(id),
            title: title.to_string(),
            artist: "Artist".to_string(),
            album: None,
            file_url: format!("https://cdn.example.com/{id}.mp3"),
            cover_art_url: None,
            duration: 120.0,
        }
    }

    struct StaticRepo(Vec<Track>);

    impl TrackRepository for StaticRepo {
        async fn list_tracks(&self) -> Result<Vec<Track>> {
            Ok(self.0.clone())
        }
    }

    struct FailingRepo;

    impl TrackRepository for FailingRepo {
        async fn list_tracks(&self) -> Result<Vec<Track>> {
            Err(ChorusError::network("connection refused"))
        }
    }

    #[test]
    fn index_of_finds_position_in_server_order() {
        let library = Library::from_tracks(vec![track(3, "c"), track(1, "a"), track(2, "b")]);
        assert_eq!(library.index_of(TrackId::new(3)), Some(0));
        assert_eq!(library.index_of(TrackId::new(2)), Some(2));
        assert_eq!(library.index_of(TrackId::new(9)), None);
    }

    #[tokio::test]
    async fn refresh_replaces_snapshot_wholesale() {
        let mut sync = LibrarySynchronizer::new();
        sync.refresh(&StaticRepo(vec![track(1, "a"), track(2, "b")]))
            .await
            .unwrap();
        assert_eq!(sync.library().len(), 2);

        // A second refresh with different membership replaces, not merges
        sync.refresh(&StaticRepo(vec![track(2, "b renamed")]))
            .await
            .unwrap();
        assert_eq!(sync.library().len(), 1);
        assert_eq!(sync.library().get(0).unwrap().title, "b renamed");
        assert_eq!(sync.library().index_of(TrackId::new(1)), None);
    }

    #[tokio::test]
    async fn failed_refresh_retains_previous_snapshot() {
        let mut sync = LibrarySynchronizer::new();
        sync.refresh(&StaticRepo(vec![track(1, "a")])).await.unwrap();

        let err = sync.refresh(&FailingRepo).await.unwrap_err();
        assert!(matches!(err, ChorusError::Network(_)));
        assert_eq!(sync.library().len(), 1);
        assert_eq!(sync.library().index_of(TrackId::new(1)), Some(0));
    }
}
