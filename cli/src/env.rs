//! Terminal implementations of the session's notifier and navigator.

use session::{Navigator, Notice, Notifier};

/// Prints notices to stderr, keeping stdout for command output.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", render_notice(&notice));
    }
}

/// There are no routes in a terminal; navigation is only traced.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        tracing::debug!(path, "navigate");
    }
}

pub fn render_notice(notice: &Notice) -> String {
    let marker = if notice.is_error() { "!" } else { "*" };
    if notice.description.is_empty() {
        format!("{marker} {}", notice.title)
    } else {
        format!("{marker} {}: {}", notice.title, notice.description)
    }
}
