//! Remaining-session math for the profile's expiry display.
//!
//! The window is the token's own lifetime (`exp - iat`). Tokens without a
//! usable `iat` fall back to the backend's default 24 hour lifetime.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::token::Claims;

/// Token lifetime assumed when `iat` is missing.
pub const DEFAULT_SESSION_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Coarse health of the remaining session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Warning,
    Expiring,
}

impl SessionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Warning => "Warning",
            Self::Expiring => "Expiring",
        }
    }

    /// CSS modifier used by the profile badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Warning => "warning",
            Self::Expiring => "expiring",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionProgress {
    /// Share of the window still remaining, 0.0..=100.0.
    pub percent: f64,
    pub remaining_secs: i64,
    /// Remaining time rounded up to whole minutes.
    pub minutes_left: i64,
    pub status: SessionStatus,
}

/// Progress of the session described by `claims` at `now`.
#[must_use]
pub fn session_progress(claims: &Claims, now: i64) -> SessionProgress {
    let exp = claims.exp.unwrap_or(now);
    let window = match claims.iat {
        Some(iat) if iat > 0 && exp > iat => exp.saturating_sub(iat),
        _ => DEFAULT_SESSION_WINDOW_SECS,
    };
    let remaining_secs = exp.saturating_sub(now).max(0);

    #[allow(clippy::cast_precision_loss)]
    let percent = (remaining_secs as f64 * 100.0 / window as f64).clamp(0.0, 100.0);
    let status = if percent > 50.0 {
        SessionStatus::Active
    } else if percent > 20.0 {
        SessionStatus::Warning
    } else {
        SessionStatus::Expiring
    };

    SessionProgress {
        percent,
        remaining_secs,
        minutes_left: remaining_secs.saturating_add(59) / 60,
        status,
    }
}

/// Progress for a raw token; `None` when it cannot be decoded.
#[must_use]
pub fn token_progress(token: &str, now: i64) -> Option<SessionProgress> {
    crate::token::decode_claims(token)
        .ok()
        .map(|claims| session_progress(&claims, now))
}
