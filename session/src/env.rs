//! Injected side-effect capabilities: notifications, navigation, wall clock.
//!
//! The browser app backs these with toasts, the router and `Date.now()`;
//! `authctl` backs them with stderr and the system clock.

use serde::{Deserialize, Serialize};

/// Visual weight of a user-facing notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A user-facing notification (toast).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: NoticeVariant::Default }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: NoticeVariant::Destructive }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

/// Surfaces notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Moves the user to another route.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Source of "now" in whole seconds since the Unix epoch.
pub trait Clock {
    fn now_secs(&self) -> i64;
}

/// Wall clock backed by `SystemTime`. Not usable on `wasm32-unknown-unknown`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

#[cfg(not(target_arch = "wasm32"))]
impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .ok()
            .and_then(|d| i64::try_from(d.as_secs()).ok())
            .unwrap_or_default()
    }
}
