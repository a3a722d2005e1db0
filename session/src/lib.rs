//! Client-side session core shared by the browser app and `authctl`.
//!
//! This crate owns everything about the bearer-token lifecycle that does not
//! depend on a UI framework or an HTTP stack: decoding token claims, the
//! single-slot token store, the auth session state machine, the expiry
//! monitor loop, route-guard decisions, and admin form validation.
//!
//! Browser storage, HTTP, navigation, notifications and the wall clock are
//! injected through the traits in [`storage`], [`api`] and [`env`], so every
//! state transition can be exercised natively in tests.

pub mod admin;
pub mod api;
pub mod env;
pub mod error;
pub mod guard;
pub mod manager;
pub mod monitor;
pub mod progress;
pub mod storage;
pub mod token;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{ApiConfig, AuthApi};
pub use env::{Clock, Navigator, Notice, NoticeVariant, Notifier};
pub use error::{ApiError, SessionError, TokenError, ValidationError};
pub use manager::{AuthState, SessionManager, SessionPhase};
pub use storage::{KeyValueStore, MemoryStore, TOKEN_KEY, TokenStorage};
pub use types::{LoginRequest, RegisterRequest, Role, TokenResponse, User, UserListing, UserSummary};

/// Route of the login view.
pub const LOGIN_ROUTE: &str = "/login";
/// Route of the registration view.
pub const REGISTER_ROUTE: &str = "/register";
/// Route of the signed-in landing view.
pub const PROFILE_ROUTE: &str = "/profile";
/// Route of the admin-only dashboard.
pub const ADMIN_ROUTE: &str = "/admin/dashboard";
