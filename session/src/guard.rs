//! Route-guard and role-gate decisions.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::LOGIN_ROUTE;
use crate::manager::AuthState;
use crate::types::{Role, User};

/// What a protected route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// The startup check or an auth operation is still running.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Render iff a user exists; never redirect while loading.
#[must_use]
pub fn guard(state: &AuthState) -> GuardDecision {
    if state.user.is_some() {
        GuardDecision::Render
    } else if state.loading() {
        GuardDecision::Pending
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Outcome of a role-gated view check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied,
}

#[must_use]
pub fn role_gate(user: Option<&User>, required: Role) -> Access {
    match user {
        Some(user) if user.role == required => Access::Granted,
        _ => Access::Denied,
    }
}
