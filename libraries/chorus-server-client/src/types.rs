//! Types for Chorus API requests.
//!
//! Response bodies deserialize directly into the `chorus-core` domain
//! types; only request payloads live here.

use serde::Serialize;

/// Configuration for connecting to a Chorus backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://music.example.com/api")
    pub base_url: String,
}

impl ApiConfig {
    /// Create a config with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from `CHORUS_API_BASE_URL`, falling back to the
    /// local development server.
    pub fn from_env() -> Self {
        let base_url = std::env::var("CHORUS_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string());
        Self::new(base_url)
    }
}

// =============================================================================
// Authentication Payloads
// =============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for account registration.
///
/// The backend validates that both password fields match.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password1: String,
    pub password2: String,
}

/// Request body for starting a password reset.
#[derive(Debug, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Request body for completing a password reset from an emailed link.
#[derive(Debug, Serialize)]
pub struct PasswordResetConfirmRequest {
    pub uid: String,
    pub token: String,
    pub new_password1: String,
    pub new_password2: String,
}

/// Partial profile update.
#[derive(Debug, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

// =============================================================================
// Playback Payloads
// =============================================================================

/// Request body for recording a play event.
#[derive(Debug, Serialize)]
pub struct RecordPlayRequest {
    pub song: i64,
}

/// Request body for playlist membership changes.
#[derive(Debug, Serialize)]
pub struct PlaylistSongRef {
    pub song_id: i64,
}
