//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates session logic to
//! the `session` crate through the `Session` context.

pub mod admin_dashboard;
pub mod login;
pub mod profile;
pub mod register;
