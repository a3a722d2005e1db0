//! Error taxonomy for token handling, API calls and session operations.

use crate::env::Notice;

/// Why a bearer token could not be read. Callers treat every variant as
/// "no session".
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token must have three dot-separated segments, found {0}")]
    Segments(usize),
    #[error("token payload is not valid base64url: {0}")]
    Base64(String),
    #[error("token payload is not valid JSON: {0}")]
    Json(String),
}

/// Failure talking to the remote auth API.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// HTTP is not available in this environment (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Client-side form validation failure. No request is made.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Passwords don't match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Notice shown when a form is rejected before any request.
    #[must_use]
    pub fn notice(self) -> Notice {
        match self {
            Self::PasswordMismatch => Notice::error("Passwords don't match", "Please check your passwords."),
            Self::MissingField(_) => Notice::error("Missing information", self.to_string()),
        }
    }
}

/// Failure of a session manager or admin operation.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The API issued a token this client cannot decode.
    #[error("received a malformed token")]
    MalformedToken,
    /// The API issued a token whose `exp` has already passed.
    #[error("received an expired token")]
    ExpiredToken,
    /// An authenticated call was attempted without a stored token.
    #[error("not signed in")]
    NotAuthenticated,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
