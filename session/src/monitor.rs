//! Periodic session-expiry monitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs only while a user is signed in. The owning view starts it when the
//! session becomes authenticated and cancels its [`MonitorHandle`] on unmount;
//! the loop also exits by itself as soon as the user is gone.
//!
//! The loop is generic over its sleep function so the browser drives it with
//! `gloo-timers`, `authctl` with `tokio::time`, and tests with a fake clock.

#[cfg(test)]
#[path = "monitor_test.rs"]
mod monitor_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::manager::SessionManager;

/// Interval between expiry checks.
pub const MONITOR_INTERVAL: Duration = Duration::from_secs(60);

/// Cancellation flag shared between a running monitor and its owner.
#[derive(Clone, Debug)]
pub struct MonitorHandle {
    alive: Arc<AtomicBool>,
}

impl Default for MonitorHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorHandle {
    #[must_use]
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Why a monitor loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorExit {
    /// The handle was cancelled by its owner.
    Cancelled,
    /// The user signed out by other means.
    SignedOut,
    /// The token lapsed and the monitor expired the session.
    Expired,
}

/// Check immediately, then once per `interval`, until the session ends or
/// `handle` is cancelled. Expires the session at most once.
pub async fn run<S, F>(manager: &SessionManager, handle: MonitorHandle, interval: Duration, sleep: S) -> MonitorExit
where
    S: Fn(Duration) -> F,
    F: Future<Output = ()>,
{
    tracing::debug!(interval_secs = interval.as_secs(), "session monitor started");
    let exit = loop {
        if !handle.is_active() {
            break MonitorExit::Cancelled;
        }
        if !manager.is_authenticated() {
            break MonitorExit::SignedOut;
        }
        if manager.check_expiry() {
            break MonitorExit::Expired;
        }
        sleep(interval).await;
    };
    tracing::debug!(?exit, "session monitor stopped");
    exit
}
