//! Authentication and account operations.
//!
//! The backend uses session cookies: login establishes the session on the
//! shared HTTP client and every later request carries it automatically.

use crate::client::{check_status, parse_json, send_error};
use crate::error::{ApiClientError, Result};
use crate::types::{
    LoginRequest, PasswordResetConfirmRequest, PasswordResetRequest, ProfilePatch, RegisterRequest,
};
use chorus_core::UserProfile;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Client for the authentication endpoints.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Login with email and password, establishing the session cookie.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let url = format!("{}/auth/login/", self.base_url);
        debug!(url = %url, email = %email, "Attempting login");

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        if status.is_success() {
            info!(email = %email, "Login successful");
            return Ok(());
        }
        if status.as_u16() == 401 || status.as_u16() == 400 {
            warn!(status = %status, "Login failed: invalid credentials");
            return Err(ApiClientError::AuthFailed(
                "Invalid email or password".to_string(),
            ));
        }
        let message = response.text().await.unwrap_or_default();
        Err(ApiClientError::ServerError {
            status: status.as_u16(),
            message,
        })
    }

    /// End the session.
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/auth/logout/", self.base_url);
        debug!(url = %url, "Logging out");

        let response = self.http.post(&url).send().await.map_err(send_error)?;
        check_status(response).await?;
        info!("Logged out");
        Ok(())
    }

    /// Register a new account.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
        password_confirm: &str,
    ) -> Result<()> {
        let url = format!("{}/auth/register/", self.base_url);
        debug!(url = %url, username = %username, "Registering account");

        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password1: password.to_string(),
            password2: password_confirm.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;
        check_status(response).await?;
        info!(username = %username, "Account registered");
        Ok(())
    }

    /// Fetch the logged-in user's profile.
    pub async fn me(&self) -> Result<UserProfile> {
        let url = format!("{}/auth/user/", self.base_url);
        debug!(url = %url, "Fetching current user");

        let response = self.http.get(&url).send().await.map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "user profile").await
    }

    /// Apply a partial profile update, returning the updated profile.
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<UserProfile> {
        let url = format!("{}/auth/user/", self.base_url);
        debug!(url = %url, "Updating profile");

        let response = self
            .http
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(send_error)?;
        let response = check_status(response).await?;
        parse_json(response, "user profile").await
    }

    /// Start a password reset; the backend emails a confirmation link.
    pub async fn request_password_reset(&self, email: &str) -> Result<()> {
        let url = format!("{}/auth/password/reset/", self.base_url);
        debug!(url = %url, "Requesting password reset");

        let request = PasswordResetRequest {
            email: email.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;
        check_status(response).await?;
        Ok(())
    }

    /// Complete a password reset with the uid and token from the link.
    pub async fn confirm_password_reset(
        &self,
        uid: &str,
        token: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> Result<()> {
        let url = format!("{}/auth/password/reset/confirm/", self.base_url);
        debug!(url = %url, "Confirming password reset");

        let request = PasswordResetConfirmRequest {
            uid: uid.to_string(),
            token: token.to_string(),
            new_password1: new_password.to_string(),
            new_password2: new_password_confirm.to_string(),
        };
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;
        check_status(response).await?;
        info!("Password reset complete");
        Ok(())
    }
}
