//! In-memory doubles for the injected capabilities.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::api::AuthApi;
use crate::env::{Clock, Navigator, Notice, Notifier};
use crate::error::ApiError;
use crate::manager::SessionManager;
use crate::storage::{MemoryStore, TokenStorage};
use crate::types::{LoginRequest, RegisterRequest, TokenResponse, UserListing};

pub const NOW: i64 = 1_700_000_000;

/// Unsigned three-part token carrying `payload`.
pub fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

pub fn user_token(exp: i64) -> String {
    make_token(&serde_json::json!({
        "sub": 2,
        "email": "user@example.com",
        "first_name": "King",
        "last_name": "Joshua",
        "role": "User",
        "iat": exp - 86_400,
        "exp": exp
    }))
}

pub fn admin_token(exp: i64) -> String {
    make_token(&serde_json::json!({
        "sub": 1,
        "email": "admin@example.com",
        "first_name": "Nyengka",
        "last_name": "Prosper",
        "role": "Admin",
        "exp": exp
    }))
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub notices: Rc<RefCell<Vec<Notice>>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub paths: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<String> {
        self.paths.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

#[derive(Clone)]
pub struct FakeClock {
    pub now: Rc<Cell<i64>>,
}

impl FakeClock {
    pub fn at(now: i64) -> Self {
        Self { now: Rc::new(Cell::new(now)) }
    }

    pub fn advance(&self, by: Duration) {
        let secs = i64::try_from(by.as_secs()).unwrap();
        self.now.set(self.now.get() + secs);
    }
}

impl Clock for FakeClock {
    fn now_secs(&self) -> i64 {
        self.now.get()
    }
}

/// Scripted API. Every call is recorded as `"<op> <bearer-or-email>"`.
#[derive(Clone)]
pub struct MockApi {
    pub issued: Rc<RefCell<Result<TokenResponse, ApiError>>>,
    pub listing: Rc<RefCell<Result<UserListing, ApiError>>>,
    pub admin_result: Rc<RefCell<Result<(), ApiError>>>,
    pub calls: Rc<RefCell<Vec<String>>>,
}

impl Default for MockApi {
    fn default() -> Self {
        Self {
            issued: Rc::new(RefCell::new(Err(ApiError::Network("not scripted".to_owned())))),
            listing: Rc::new(RefCell::new(Ok(UserListing::default()))),
            admin_result: Rc::new(RefCell::new(Ok(()))),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl MockApi {
    pub fn issue(&self, token: &str) {
        *self.issued.borrow_mut() = Ok(TokenResponse {
            access_token: token.to_owned(),
            token_type: Some("Bearer".to_owned()),
            message: None,
        });
    }

    pub fn fail_with(&self, err: ApiError) {
        *self.issued.borrow_mut() = Err(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl AuthApi for MockApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.calls.borrow_mut().push(format!("login {}", credentials.email));
        self.issued.borrow().clone()
    }

    async fn register(&self, user: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.calls.borrow_mut().push(format!("register {}", user.email));
        self.issued.borrow().clone()
    }

    async fn list_users(&self, token: &str) -> Result<UserListing, ApiError> {
        self.calls.borrow_mut().push(format!("list_users {token}"));
        self.listing.borrow().clone()
    }

    async fn register_admin(&self, token: &str, _admin: &RegisterRequest) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("register_admin {token}"));
        self.admin_result.borrow().clone()
    }
}

pub struct Harness {
    pub manager: SessionManager,
    pub store: MemoryStore,
    pub api: MockApi,
    pub notifier: RecordingNotifier,
    pub navigator: RecordingNavigator,
    pub clock: FakeClock,
}

pub fn harness() -> Harness {
    let store = MemoryStore::new();
    let api = MockApi::default();
    let notifier = RecordingNotifier::default();
    let navigator = RecordingNavigator::default();
    let clock = FakeClock::at(NOW);
    let manager = SessionManager::new(
        TokenStorage::new(store.clone()),
        api.clone(),
        notifier.clone(),
        navigator.clone(),
        clock.clone(),
    );
    Harness { manager, store, api, notifier, navigator, clock }
}
