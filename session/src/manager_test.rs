use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::error::ApiError;
use crate::storage::{KeyValueStore, TOKEN_KEY};
use crate::test_support::{NOW, admin_token, harness, make_token, user_token};
use crate::types::Role;

fn credentials() -> LoginRequest {
    LoginRequest { email: "user@example.com".to_owned(), password: "password".to_owned() }
}

fn registration() -> RegisterRequest {
    RegisterRequest {
        first_name: "King".to_owned(),
        last_name: "Joshua".to_owned(),
        email: "user@example.com".to_owned(),
        password: "password".to_owned(),
        confirm_password: "password".to_owned(),
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_uninitialized_and_loading() {
    let state = AuthState::default();
    assert_eq!(state.phase, SessionPhase::Uninitialized);
    assert!(state.loading());
    assert!(!state.is_authenticated());
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_without_token_is_anonymous() {
    let h = harness();
    h.manager.initialize();
    let state = h.manager.state();
    assert_eq!(state.phase, SessionPhase::Anonymous);
    assert!(state.user.is_none());
    assert!(!state.loading());
}

#[test]
fn initialize_restores_unexpired_token() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &user_token(NOW + 600));
    h.manager.initialize();
    let state = h.manager.state();
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.user.expect("user").email, "user@example.com");
}

#[test]
fn initialize_clears_expired_token() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &user_token(NOW - 1));
    h.manager.initialize();
    assert_eq!(h.manager.state().phase, SessionPhase::Anonymous);
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
}

#[test]
fn initialize_clears_malformed_token() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, "garbage");
    h.manager.initialize();
    assert!(h.manager.user().is_none());
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
}

#[test]
fn initialize_does_not_notify_or_navigate() {
    let h = harness();
    h.manager.initialize();
    assert!(h.notifier.notices.borrow().is_empty());
    assert!(h.navigator.paths.borrow().is_empty());
}

// =============================================================
// login
// =============================================================

#[tokio::test]
async fn login_success_scenario() {
    let h = harness();
    h.manager.initialize();
    let issued = user_token(NOW + 3600);
    h.api.issue(&issued);

    let user = h.manager.login(credentials()).await.expect("login");

    assert_eq!(h.store.get_item(TOKEN_KEY).as_deref(), Some(issued.as_str()));
    assert_eq!(Some(user.clone()), crate::token::decode_user(&issued));
    assert_eq!(h.manager.user(), Some(user));
    assert_eq!(h.manager.state().phase, SessionPhase::Authenticated);
    assert_eq!(h.navigator.last().as_deref(), Some("/profile"));
    assert_eq!(h.notifier.titles(), vec!["Welcome back!"]);
    assert_eq!(h.api.calls(), vec!["login user@example.com"]);
}

#[tokio::test]
async fn login_failure_stays_anonymous_and_returns_error() {
    let h = harness();
    h.manager.initialize();
    h.api.fail_with(ApiError::Status { status: 401, message: "Invalid credentials".to_owned() });

    let err = h.manager.login(credentials()).await.unwrap_err();

    assert_eq!(err, SessionError::Api(ApiError::Status { status: 401, message: "Invalid credentials".to_owned() }));
    assert_eq!(h.manager.state().phase, SessionPhase::Anonymous);
    assert!(h.manager.user().is_none());
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert!(h.navigator.paths.borrow().is_empty());
    let notices = h.notifier.notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].title, "Login Failed");
    assert_eq!(notices[0].description, "Invalid credentials");
    assert!(notices[0].is_error());
}

#[tokio::test]
async fn login_failure_keeps_previous_session() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &admin_token(NOW + 600));
    h.manager.initialize();
    h.api.fail_with(ApiError::Network("offline".to_owned()));

    assert!(h.manager.login(credentials()).await.is_err());

    assert_eq!(h.manager.state().phase, SessionPhase::Authenticated);
    assert_eq!(h.manager.user().expect("user").role, Role::Admin);
}

#[tokio::test]
async fn login_with_undecodable_token_fails_without_storing() {
    let h = harness();
    h.manager.initialize();
    h.api.issue("not-a-jwt");

    let err = h.manager.login(credentials()).await.unwrap_err();

    assert_eq!(err, SessionError::MalformedToken);
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert_eq!(h.manager.state().phase, SessionPhase::Anonymous);
}

#[tokio::test]
async fn login_with_email_subject_signs_in() {
    let h = harness();
    h.manager.initialize();
    let issued = make_token(&serde_json::json!({
        "sub": "user@example.com",
        "role": "Admin",
        "exp": NOW + 3600,
    }));
    h.api.issue(&issued);

    let user = h.manager.login(credentials()).await.expect("login");

    assert_eq!(user.id, 0);
    assert_eq!(user.role, Role::Admin);
    assert_eq!(h.store.get_item(TOKEN_KEY).as_deref(), Some(issued.as_str()));
    assert_eq!(h.manager.state().phase, SessionPhase::Authenticated);
    assert_eq!(h.notifier.titles(), vec!["Welcome back!"]);
}

#[tokio::test]
async fn login_with_expired_token_fails_without_storing() {
    let h = harness();
    h.manager.initialize();
    h.api.issue(&user_token(NOW - 10));

    let err = h.manager.login(credentials()).await.unwrap_err();

    assert_eq!(err, SessionError::ExpiredToken);
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert_eq!(h.manager.state().phase, SessionPhase::Anonymous);
    assert!(h.manager.user().is_none());
    assert!(h.navigator.paths.borrow().is_empty());
    assert_eq!(h.notifier.titles(), vec!["Login Failed"]);
}

#[tokio::test]
async fn register_with_expired_token_fails_without_storing() {
    let h = harness();
    h.manager.initialize();
    h.api.issue(&user_token(NOW - 10));

    let err = h.manager.register(registration()).await.unwrap_err();

    assert_eq!(err, SessionError::ExpiredToken);
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert!(!h.manager.is_authenticated());
    assert_eq!(h.notifier.titles(), vec!["Registration Failed"]);
}

#[tokio::test]
async fn login_passes_through_loading_phase() {
    let h = harness();
    h.manager.initialize();
    h.api.issue(&user_token(NOW + 3600));
    let phases = Rc::new(RefCell::new(Vec::new()));
    let seen = phases.clone();
    h.manager.subscribe(move |state| seen.borrow_mut().push(state.phase));

    h.manager.login(credentials()).await.expect("login");

    assert_eq!(*phases.borrow(), vec![SessionPhase::Loading, SessionPhase::Authenticated]);
}

// =============================================================
// register
// =============================================================

#[tokio::test]
async fn register_success_signs_in() {
    let h = harness();
    h.manager.initialize();
    h.api.issue(&user_token(NOW + 3600));

    h.manager.register(registration()).await.expect("register");

    assert!(h.manager.is_authenticated());
    assert_eq!(h.navigator.last().as_deref(), Some("/profile"));
    assert_eq!(h.notifier.titles(), vec!["Account Created"]);
    assert_eq!(h.api.calls(), vec!["register user@example.com"]);
}

#[tokio::test]
async fn register_failure_surfaces_notice() {
    let h = harness();
    h.manager.initialize();
    h.api.fail_with(ApiError::Status { status: 400, message: "User already exists".to_owned() });

    assert!(h.manager.register(registration()).await.is_err());

    assert_eq!(h.notifier.titles(), vec!["Registration Failed"]);
    assert!(!h.manager.is_authenticated());
}

// =============================================================
// logout
// =============================================================

#[tokio::test]
async fn logout_clears_token_and_user() {
    let h = harness();
    h.manager.initialize();
    h.api.issue(&user_token(NOW + 3600));
    h.manager.login(credentials()).await.expect("login");

    h.manager.logout();

    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert!(h.manager.user().is_none());
    assert_eq!(h.manager.state().phase, SessionPhase::Anonymous);
    assert_eq!(h.navigator.last().as_deref(), Some("/login"));
    assert_eq!(h.notifier.titles().last().map(String::as_str), Some("Logged Out"));
}

#[test]
fn logout_is_idempotent_from_any_state() {
    let h = harness();
    h.manager.logout();
    h.manager.logout();
    assert!(h.manager.user().is_none());
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert_eq!(h.navigator.paths.borrow().len(), 2);
}

// =============================================================
// check_expiry
// =============================================================

#[test]
fn check_expiry_keeps_valid_session() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &user_token(NOW + 60));
    h.manager.initialize();
    assert!(!h.manager.check_expiry());
    assert!(h.manager.is_authenticated());
}

#[test]
fn check_expiry_expires_once_token_lapses() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &user_token(NOW + 60));
    h.manager.initialize();
    h.clock.advance(std::time::Duration::from_secs(61));

    assert!(h.manager.check_expiry());

    assert!(!h.manager.is_authenticated());
    assert_eq!(h.store.get_item(TOKEN_KEY), None);
    assert_eq!(h.notifier.titles(), vec!["Logged Out", "Session Expired"]);
    assert!(h.notifier.notices.borrow()[1].is_error());
}

#[test]
fn check_expiry_treats_missing_token_as_expired() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &user_token(NOW + 60));
    h.manager.initialize();
    h.store.remove_item(TOKEN_KEY);
    assert!(h.manager.check_expiry());
    assert!(!h.manager.is_authenticated());
}

#[test]
fn check_expiry_is_noop_when_signed_out() {
    let h = harness();
    h.manager.initialize();
    assert!(!h.manager.check_expiry());
    assert!(h.notifier.notices.borrow().is_empty());
}

#[test]
fn listeners_observe_logout() {
    let h = harness();
    h.store.set_item(TOKEN_KEY, &user_token(NOW + 60));
    h.manager.initialize();
    let last = Rc::new(RefCell::new(None));
    let seen = last.clone();
    h.manager.subscribe(move |state| *seen.borrow_mut() = Some(state.clone()));

    h.manager.logout();

    let observed = last.borrow().clone().expect("state");
    assert!(observed.user.is_none());
    assert_eq!(observed.phase, SessionPhase::Anonymous);
}
