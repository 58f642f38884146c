//! Play history types

use crate::types::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in the play history, newest first as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayHistoryEntry {
    /// The track that was played
    pub song: Track,

    /// When the play was recorded
    pub played_at: DateTime<Utc>,
}
