//! Browser implementations of the session's side-effect capabilities.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionProvider` wires these into the `SessionManager`: notices become
//! toasts, navigation goes through `leptos_router`, and "now" comes from
//! `Date.now()` in the browser.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{Clock, Navigator, Notice, Notifier};

use crate::state::toast::ToastState;

/// Pushes notices onto the toast stack and schedules their dismissal.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        tracing::debug!(title = %notice.title, error = notice.is_error(), "toast");
        let mut id = 0;
        self.toasts.update(|state| id = state.push(notice));

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::state::toast::TOAST_DURATION).await;
                toasts.try_update(|state| state.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

/// Navigates with the router's `navigate` function.
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// `Date.now()` in the browser, the system clock during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_secs(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            #[allow(clippy::cast_possible_truncation)]
            let secs = (js_sys::Date::now() / 1000.0).floor() as i64;
            secs
        }
        #[cfg(not(feature = "hydrate"))]
        {
            session::env::SystemClock.now_secs()
        }
    }
}
