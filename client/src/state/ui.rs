//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of the auth session so the theme toggle
//! can evolve independently of login state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar and the page shells.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}

impl UiState {
    /// Theme name persisted for the current mode.
    #[must_use]
    pub fn theme_name(&self) -> &'static str {
        if self.dark_mode { "dark" } else { "light" }
    }
}
