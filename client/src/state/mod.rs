//! Shared client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These `RwSignal` payloads are provided via Leptos context from `App`.
//! `auth` mirrors the session manager; `toast` and `ui` are view-local chrome.

pub mod auth;
pub mod toast;
pub mod ui;
