//! Top navigation bar with route links and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reacts to the auth signal: the admin link appears only for admin users.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use session::{ADMIN_ROUTE, AuthState, PROFILE_ROUTE, User};

use crate::state::ui::UiState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let pathname = location.pathname;

    let show_admin = move || auth.with(|s| shows_admin_link(s.user.as_ref()));
    let greeting = move || auth.with(|s| s.user.as_ref().map(|u| u.display_name().to_owned()));

    let on_toggle_theme = move |_| {
        let next = crate::util::theme::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__links">
                <a href=PROFILE_ROUTE class=move || link_class(&pathname.get(), PROFILE_ROUTE)>
                    "Profile"
                </a>
                <Show when=show_admin>
                    <a href=ADMIN_ROUTE class=move || link_class(&pathname.get(), ADMIN_ROUTE)>
                        "Admin Dashboard"
                    </a>
                </Show>
            </div>
            <div class="navbar__actions">
                {move || greeting().map(|name| view! { <span class="navbar__user">{name}</span> })}
                <button
                    class="navbar__theme"
                    aria-label="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
                </button>
            </div>
        </nav>
    }
}

fn shows_admin_link(user: Option<&User>) -> bool {
    user.is_some_and(User::is_admin)
}

fn link_class(current: &str, target: &str) -> &'static str {
    if current == target { "navbar__link navbar__link--active" } else { "navbar__link" }
}
