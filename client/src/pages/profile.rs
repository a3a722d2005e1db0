//! Profile page: identity details, session expiry, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute`; everything shown is decoded from the
//! stored token, so no profile request is made.

use leptos::prelude::*;
use session::{AuthState, User};

use crate::components::session_status::SessionStatusCard;
use crate::state::auth::Session;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<Session>();

    let current = Memo::new(move |_| auth.with(|s| s.user.clone()));
    let on_sign_out = move |_| session.manager().logout();

    move || {
        let Some(user) = current.get() else {
            return view! { <div class="route-pending">"Loading..."</div> }.into_any();
        };
        view! {
            <div class="profile-page">
                <header class="profile-page__header">
                    <h1>{format!("Welcome, {}!", user.display_name())}</h1>
                    <p class="profile-page__subtitle">"Manage your account and session"</p>
                </header>
                <SessionStatusCard/>
                <ProfileDetails user=user/>
                <button class="auth-button auth-button--danger" aria-label="Sign out securely" on:click=on_sign_out>
                    "Sign Out Securely"
                </button>
            </div>
        }
        .into_any()
    }
}

#[component]
fn ProfileDetails(user: User) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card__title">"Profile Information"</h2>
            <p class="card__subtitle">"Your account details and information"</p>
            <ReadOnlyField label="Full Name" value=user.full_name()/>
            <ReadOnlyField label="Email Address" value=user.email.clone()/>
            <ReadOnlyField label="User ID" value=user.id.to_string()/>
            <ReadOnlyField label="Role" value=user.role.to_string()/>
        </section>
    }
}

#[component]
fn ReadOnlyField(label: &'static str, value: String) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input class="field__input" type="text" readonly=true prop:value=value/>
        </label>
    }
}
