//! Auth-session wiring for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` builds the single `SessionManager` for this app instance,
//! mirrors its state into the `RwSignal<AuthState>` provided by `App`, runs
//! the startup token check, and owns the expiry monitor while a user is
//! signed in. Pages reach the manager through the [`Session`] context.
//!
//! DESIGN
//! ======
//! The manager holds `RefCell` state and boxed trait objects, so it lives in
//! local (non-`Send`) arena storage; [`Session`] is the `Copy` handle views
//! capture.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{AuthState, SessionManager, TokenStorage, api::ApiConfig};

use crate::net::api::HttpAuthApi;
use crate::state::toast::ToastState;
use crate::util::env::{BrowserClock, RouterNavigator, ToastNotifier};
use crate::util::storage::BrowserStorage;

/// Context handle to the app's session manager.
#[derive(Clone, Copy)]
pub struct Session(StoredValue<Rc<SessionManager>, LocalStorage>);

impl Session {
    pub fn new(manager: SessionManager) -> Self {
        Self(StoredValue::new_local(Rc::new(manager)))
    }

    /// The shared manager. Hold the `Rc` across awaits, never the handle.
    pub fn manager(&self) -> Rc<SessionManager> {
        self.0.get_value()
    }
}

/// Build the session manager, provide it, and start session checks.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let manager = SessionManager::new(
        TokenStorage::new(BrowserStorage),
        HttpAuthApi::new(ApiConfig::new(option_env!("API_BASE_URL"))),
        ToastNotifier::new(toasts),
        RouterNavigator::new(use_navigate()),
        BrowserClock,
    );
    manager.subscribe(move |state| auth.set(state.clone()));
    let session = Session::new(manager);
    provide_context(session);

    // Effects only run after hydration, so the stored token is read in the
    // browser and never during SSR.
    Effect::new(move || {
        session.manager().initialize();
    });

    #[cfg(feature = "hydrate")]
    install_monitor(session, auth);

    children()
}

/// Run the expiry monitor whenever a user is signed in.
///
/// A fresh monitor starts on each sign-in; the previous one is cancelled when
/// the user goes away or the provider unmounts.
#[cfg(feature = "hydrate")]
fn install_monitor(session: Session, auth: RwSignal<AuthState>) {
    use session::monitor::{self, MONITOR_INTERVAL, MonitorHandle};
    use std::sync::{Arc, Mutex};

    let current: Arc<Mutex<Option<MonitorHandle>>> = Arc::new(Mutex::new(None));
    let signed_in = Memo::new(move |_| auth.with(AuthState::is_authenticated));

    let effect_slot = current.clone();
    Effect::new(move || {
        let Ok(mut slot) = effect_slot.lock() else {
            return;
        };
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        if !signed_in.get() {
            return;
        }
        let handle = MonitorHandle::new();
        *slot = Some(handle.clone());
        let manager = session.manager();
        leptos::task::spawn_local(async move {
            monitor::run(&manager, handle, MONITOR_INTERVAL, gloo_timers::future::sleep).await;
        });
    });

    on_cleanup(move || {
        if let Ok(mut slot) = current.lock() {
            if let Some(handle) = slot.take() {
                handle.cancel();
            }
        }
    });
}
