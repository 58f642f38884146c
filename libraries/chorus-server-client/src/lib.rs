//! Chorus Server Client
//!
//! HTTP client library for the Chorus backend API.
//!
//! # Features
//!
//! - **Authentication**: cookie-session login, registration, password reset
//! - **Song catalog**: list, fetch, create, update, delete, search
//! - **Play history**: listening history and fire-and-forget play auditing
//! - **Playlists**: CRUD plus song membership
//!
//! # Example
//!
//! ```ignore
//! use chorus_server_client::{ApiClient, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiConfig::from_env())?;
//!
//!     client.auth().login("ada@example.com", "hunter2").await?;
//!
//!     let tracks = client.songs().list().await?;
//!     println!("Found {} tracks", tracks.len());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod history;
mod playlists;
mod repository;
mod songs;
mod types;

// Re-export main types
pub use client::ApiClient;
pub use error::{ApiClientError, Result};
pub use types::{
    ApiConfig, LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest, PlaylistSongRef,
    ProfilePatch, RecordPlayRequest, RegisterRequest,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use history::{AuditLogger, HistoryClient};
pub use playlists::PlaylistsClient;
pub use songs::SongsClient;
