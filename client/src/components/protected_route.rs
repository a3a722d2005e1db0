//! Route guard wrapper for signed-in views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Waits for the startup token check before deciding, so a restored session
//! never flashes the login page.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::AuthState;
use session::guard::{GuardDecision, guard};

/// Render `children` only while a user is signed in.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = Memo::new(move |_| auth.with(guard));

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Pending => view! {
            <div class="route-pending" aria-busy="true">"Loading..."</div>
        }
        .into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
