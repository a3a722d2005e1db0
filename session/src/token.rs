//! Bearer-token payload decoding.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never verifies signatures: it trusts the transport and the
//! issuing backend, and reads claims only to drive UI state. Every failure
//! path is fail-closed, so a token that cannot be read counts as expired and
//! yields no user.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::TokenError;
use crate::types::{Role, User};

/// Claims read from a token payload. Only structural extraction is done.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Account id; JSON number or numeric string. Any other subject, such as
    /// an email address, reads as `None`.
    #[serde(default, deserialize_with = "deserialize_subject")]
    pub sub: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry, seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub exp: Option<i64>,
    /// Issued-at, seconds since the Unix epoch.
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub iat: Option<i64>,
}

impl Claims {
    /// Expired iff `exp` is strictly before `now`. A missing `exp` is expired.
    ///
    /// Both sides are whole seconds, so a token whose `exp` equals `now` is
    /// still valid. Browser clocks floor the millisecond time, so the verdict
    /// can lag a fractional-second comparison by up to one second.
    #[must_use]
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp.is_none_or(|exp| exp < now)
    }

    /// Build the client-side user. The password is never populated.
    #[must_use]
    pub fn to_user(&self) -> User {
        User {
            id: self.sub.unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            role: Role::from_claim(self.role.as_deref()),
            password: String::new(),
        }
    }
}

/// The only claim expiry depends on.
#[derive(Deserialize)]
struct Expiry {
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    exp: Option<i64>,
}

/// Parse the payload segment of a three-part token.
///
/// # Errors
///
/// Returns a [`TokenError`] when the token is not three segments, the payload
/// is not base64url, or the decoded bytes are not a claims object.
pub fn decode_claims(token: &str) -> Result<Claims, TokenError> {
    decode_payload(token)
}

/// `true` unless the token parses and its `exp` is at or after `now`.
#[must_use]
pub fn is_expired(token: &str, now: i64) -> bool {
    match decode_payload::<Expiry>(token) {
        Ok(expiry) => expiry.exp.is_none_or(|exp| exp < now),
        Err(e) => {
            tracing::debug!(error = %e, "treating unreadable token as expired");
            true
        }
    }
}

/// Decode the user carried by `token`, or `None` on any parse failure.
#[must_use]
pub fn decode_user(token: &str) -> Option<User> {
    decode_claims(token).ok().map(|claims| claims.to_user())
}

/// The token's `exp` claim, if readable.
#[must_use]
pub fn expires_at(token: &str) -> Option<i64> {
    decode_payload::<Expiry>(token).ok().and_then(|expiry| expiry.exp)
}

fn decode_payload<T: DeserializeOwned>(token: &str) -> Result<T, TokenError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::Segments(segments.len()));
    }
    let payload = decode_segment(segments[1])?;
    serde_json::from_slice(&payload).map_err(|e| TokenError::Json(e.to_string()))
}

/// Tokens are base64url without padding, but some issuers keep the `=`.
fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| TokenError::Base64(e.to_string()))
}

fn deserialize_subject<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| D::Error::custom("expected integer subject")),
        serde_json::Value::String(raw) => Ok(raw.trim().parse::<i64>().ok()),
        _ => Err(D::Error::custom("expected number or string subject")),
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(Some(float.floor() as i64));
            }
            Err(D::Error::custom("expected integer-compatible timestamp"))
        }
        _ => Err(D::Error::custom("expected numeric timestamp")),
    }
}
