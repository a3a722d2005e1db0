//! Remote auth API seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues and verifies tokens; this crate only describes the four
//! calls the client makes. `client` implements [`AuthApi`] with `gloo-net`,
//! `authctl` with `reqwest`, and tests with an in-memory mock.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's
//! `{"error": ...}` message when one is present.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::types::{LoginRequest, RegisterRequest, TokenResponse, UserListing};

/// Fallback API base URL when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const ADMIN_USERS_PATH: &str = "/admin/dashboard";
pub const ADMIN_REGISTER_PATH: &str = "/admin/register";

/// Calls the client makes against the remote auth API.
///
/// Futures are not required to be `Send`: browser HTTP futures are bound to
/// the UI thread.
#[async_trait::async_trait(?Send)]
pub trait AuthApi {
    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError>;

    /// Create a regular account and receive its bearer token.
    async fn register(&self, user: &RegisterRequest) -> Result<TokenResponse, ApiError>;

    /// Fetch the user listing. Requires an admin token.
    async fn list_users(&self, token: &str) -> Result<UserListing, ApiError>;

    /// Provision a new admin account. Requires an admin token.
    async fn register_admin(&self, token: &str, admin: &RegisterRequest) -> Result<(), ApiError>;
}

/// Where the remote API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ApiConfig {
    /// Use `base_url` when set and non-blank, else [`DEFAULT_API_BASE_URL`].
    /// Trailing slashes are trimmed.
    #[must_use]
    pub fn new(base_url: Option<&str>) -> Self {
        let raw = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { base_url: raw.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for an API path such as [`LOGIN_PATH`].
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Human-readable message for a failed response.
#[must_use]
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .or_else(|| json.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}

/// Build the error for a non-2xx response.
#[must_use]
pub fn status_error(status: u16, body: &str) -> ApiError {
    ApiError::Status { status, message: error_message(status, body) }
}
