//! Auth session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionManager` is constructed per app instance and shared with the
//! view tree. It is the only component that writes the token slot on
//! login/register and the only one that clears it.
//!
//! DESIGN
//! ======
//! Phases move `Uninitialized -> Loading -> {Authenticated, Anonymous}`. The
//! in-memory user is always the decoded form of the stored token; nothing
//! else is kept as a source of truth. Within one operation the storage write
//! happens before the state update, which happens before navigation.
//!
//! Concurrent `login`/`register` calls are not serialized; the last one to
//! resolve wins.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::cell::RefCell;

use crate::api::AuthApi;
use crate::env::{Clock, Navigator, Notice, Notifier};
use crate::error::SessionError;
use crate::storage::TokenStorage;
use crate::token;
use crate::types::{LoginRequest, RegisterRequest, User};
use crate::{LOGIN_ROUTE, PROFILE_ROUTE};

/// Lifecycle phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// The stored token has not been inspected yet.
    #[default]
    Uninitialized,
    /// An auth operation is in flight.
    Loading,
    Authenticated,
    Anonymous,
}

/// Snapshot of the session observed by views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub phase: SessionPhase,
}

impl AuthState {
    /// `true` until the startup check finishes and while an operation runs.
    #[must_use]
    pub fn loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Uninitialized | SessionPhase::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

type Listener = Box<dyn Fn(&AuthState)>;

/// Owns the current session and its side effects.
pub struct SessionManager {
    pub(crate) tokens: TokenStorage,
    pub(crate) api: Box<dyn AuthApi>,
    pub(crate) notifier: Box<dyn Notifier>,
    navigator: Box<dyn Navigator>,
    clock: Box<dyn Clock>,
    state: RefCell<AuthState>,
    listeners: RefCell<Vec<Listener>>,
}

impl SessionManager {
    pub fn new(
        tokens: TokenStorage,
        api: impl AuthApi + 'static,
        notifier: impl Notifier + 'static,
        navigator: impl Navigator + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            tokens,
            api: Box::new(api),
            notifier: Box::new(notifier),
            navigator: Box::new(navigator),
            clock: Box::new(clock),
            state: RefCell::new(AuthState::default()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    #[must_use]
    pub fn tokens(&self) -> &TokenStorage {
        &self.tokens
    }

    #[must_use]
    pub fn now(&self) -> i64 {
        self.clock.now_secs()
    }

    /// Register an observer called after every state change.
    ///
    /// Listeners must not subscribe further listeners from inside the callback.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Startup check: adopt a stored, unexpired token or clear the slot.
    pub fn initialize(&self) {
        let now = self.now();
        let user = self
            .tokens
            .get()
            .filter(|stored| !token::is_expired(stored, now))
            .and_then(|stored| token::decode_user(&stored));

        match user {
            Some(user) => {
                tracing::info!(user_id = user.id, role = %user.role, "restored session from stored token");
                self.update(|s| {
                    s.user = Some(user);
                    s.phase = SessionPhase::Authenticated;
                });
            }
            None => {
                self.tokens.clear();
                self.update(|s| {
                    s.user = None;
                    s.phase = SessionPhase::Anonymous;
                });
            }
        }
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns the API failure, [`SessionError::MalformedToken`] when the
    /// issued token cannot be decoded, or [`SessionError::ExpiredToken`] when
    /// it has already expired. A "Login Failed" notice is raised first.
    pub async fn login(&self, credentials: LoginRequest) -> Result<User, SessionError> {
        tracing::info!(email = %credentials.email, "login requested");
        self.begin_loading();
        let result = match self.api.login(&credentials).await {
            Ok(resp) => self.adopt_token(&resp.access_token),
            Err(e) => Err(e.into()),
        };
        self.finish(
            result,
            Notice::info("Welcome back!", "You have been successfully logged in."),
            "Login Failed",
        )
    }

    /// Create an account and sign in with the issued token.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::login`], with a "Registration Failed" notice.
    pub async fn register(&self, user_data: RegisterRequest) -> Result<User, SessionError> {
        tracing::info!(email = %user_data.email, "registration requested");
        self.begin_loading();
        let result = match self.api.register(&user_data).await {
            Ok(resp) => self.adopt_token(&resp.access_token),
            Err(e) => Err(e.into()),
        };
        self.finish(
            result,
            Notice::info("Account Created", "Your account has been created successfully!"),
            "Registration Failed",
        )
    }

    /// Drop the session. Safe to call from any state, any number of times.
    pub fn logout(&self) {
        self.clear_session();
        self.notifier
            .notify(Notice::info("Logged Out", "You have been successfully logged out."));
        self.navigator.navigate(LOGIN_ROUTE);
    }

    /// Logout triggered by the expiry monitor.
    pub fn expire(&self) {
        tracing::info!("session expired");
        self.logout();
        self.notifier.notify(Notice::error(
            "Session Expired",
            "Your session has expired. Please log in again.",
        ));
    }

    /// Re-read the stored token and expire the session if it is no longer
    /// valid. Returns `true` when the session was expired by this call.
    pub fn check_expiry(&self) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        let expired = self
            .tokens
            .get()
            .is_none_or(|stored| token::is_expired(&stored, self.now()));
        if expired {
            self.expire();
        }
        expired
    }

    fn begin_loading(&self) {
        self.update(|s| s.phase = SessionPhase::Loading);
    }

    /// Persist an issued token and derive the user from it. Nothing is stored
    /// unless the token decodes and is still live.
    fn adopt_token(&self, issued: &str) -> Result<User, SessionError> {
        let user = token::decode_user(issued).ok_or(SessionError::MalformedToken)?;
        if token::is_expired(issued, self.now()) {
            return Err(SessionError::ExpiredToken);
        }
        self.tokens.set(issued);
        self.update(|s| {
            s.user = Some(user.clone());
            s.phase = SessionPhase::Authenticated;
        });
        Ok(user)
    }

    fn finish(
        &self,
        result: Result<User, SessionError>,
        success: Notice,
        failure_title: &str,
    ) -> Result<User, SessionError> {
        match result {
            Ok(user) => {
                tracing::info!(user_id = user.id, role = %user.role, "signed in");
                self.notifier.notify(success);
                self.navigator.navigate(PROFILE_ROUTE);
                Ok(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, operation = failure_title, "auth operation failed");
                self.update(|s| {
                    s.phase = if s.user.is_some() {
                        SessionPhase::Authenticated
                    } else {
                        SessionPhase::Anonymous
                    };
                });
                self.notifier.notify(Notice::error(failure_title, e.to_string()));
                Err(e)
            }
        }
    }

    fn clear_session(&self) {
        self.tokens.clear();
        self.update(|s| {
            s.user = None;
            s.phase = SessionPhase::Anonymous;
        });
    }

    fn update(&self, f: impl FnOnce(&mut AuthState)) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            f(&mut state);
            state.clone()
        };
        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
    }
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("tokens", &self.tokens)
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}
