//! User profile type

use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Profile of the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub username: String,

    /// Account email
    pub email: String,

    /// Avatar locator, if set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}
