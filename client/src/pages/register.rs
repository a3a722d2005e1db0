//! Self-service registration page.

use leptos::prelude::*;
use session::admin::validate_registration;
use session::{LOGIN_ROUTE, Notifier, RegisterRequest};

use crate::state::auth::Session;
use crate::state::toast::ToastState;
use crate::util::env::ToastNotifier;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(RegisterRequest::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user_data = match validate_registration(&form.get()) {
            Ok(user_data) => user_data,
            Err(e) => {
                ToastNotifier::new(toasts).notify(e.notice());
                return;
            }
        };
        busy.set(true);

        let manager = session.manager();
        leptos::task::spawn_local(async move {
            let _ = manager.register(user_data).await;
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join us today and start your journey"</p>
                <form class="auth-form" on:submit=on_submit aria-label="Register form">
                    <RegisterFields form=form/>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating Account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href=LOGIN_ROUTE>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

/// The five registration inputs bound to `form`. Shared with the admin form.
#[component]
pub fn RegisterFields(form: RwSignal<RegisterRequest>) -> impl IntoView {
    view! {
        <div class="auth-row">
            <div class="auth-field">
                <label class="auth-label" for="first_name">"First Name"</label>
                <input
                    id="first_name"
                    class="auth-input"
                    type="text"
                    placeholder="First name"
                    prop:value=move || form.with(|f| f.first_name.clone())
                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                />
            </div>
            <div class="auth-field">
                <label class="auth-label" for="last_name">"Last Name"</label>
                <input
                    id="last_name"
                    class="auth-input"
                    type="text"
                    placeholder="Last name"
                    prop:value=move || form.with(|f| f.last_name.clone())
                    on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                />
            </div>
        </div>
        <label class="auth-label" for="email">"Email"</label>
        <input
            id="email"
            class="auth-input"
            type="email"
            autocomplete="email"
            placeholder="you@example.com"
            prop:value=move || form.with(|f| f.email.clone())
            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
        />
        <div class="auth-row">
            <div class="auth-field">
                <label class="auth-label" for="password">"Password"</label>
                <input
                    id="password"
                    class="auth-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </div>
            <div class="auth-field">
                <label class="auth-label" for="confirm_password">"Confirm Password"</label>
                <input
                    id="confirm_password"
                    class="auth-input"
                    type="password"
                    autocomplete="new-password"
                    placeholder="Confirm password"
                    prop:value=move || form.with(|f| f.confirm_password.clone())
                    on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                />
            </div>
        </div>
    }
}
