use super::*;
use crate::manager::SessionPhase;

fn user(role: Role) -> User {
    User {
        id: 1,
        email: "a@example.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        role,
        password: String::new(),
    }
}

#[test]
fn guard_waits_during_startup() {
    let state = AuthState { user: None, phase: SessionPhase::Uninitialized };
    assert_eq!(guard(&state), GuardDecision::Pending);
}

#[test]
fn guard_waits_while_operation_in_flight() {
    let state = AuthState { user: None, phase: SessionPhase::Loading };
    assert_eq!(guard(&state), GuardDecision::Pending);
}

#[test]
fn guard_redirects_anonymous_to_login() {
    let state = AuthState { user: None, phase: SessionPhase::Anonymous };
    assert_eq!(guard(&state), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_renders_for_signed_in_user() {
    let state = AuthState { user: Some(user(Role::User)), phase: SessionPhase::Authenticated };
    assert_eq!(guard(&state), GuardDecision::Render);
}

#[test]
fn guard_keeps_rendering_during_reauth() {
    let state = AuthState { user: Some(user(Role::User)), phase: SessionPhase::Loading };
    assert_eq!(guard(&state), GuardDecision::Render);
}

#[test]
fn role_gate_grants_matching_role() {
    assert_eq!(role_gate(Some(&user(Role::Admin)), Role::Admin), Access::Granted);
}

#[test]
fn role_gate_denies_other_roles_and_anonymous() {
    assert_eq!(role_gate(Some(&user(Role::User)), Role::Admin), Access::Denied);
    assert_eq!(role_gate(None, Role::Admin), Access::Denied);
}
