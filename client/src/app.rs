//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toaster::Toaster;
use crate::pages::{
    admin_dashboard::AdminDashboardPage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::auth::SessionProvider;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use session::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state signals, then builds the session manager inside
/// the router so it can navigate.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(ui);

    // Apply the stored theme once hydrated.
    Effect::new(move || {
        let dark = crate::util::theme::read_preference();
        crate::util::theme::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Title text="Auth Portal"/>

        <Router>
            <SessionProvider>
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <Redirect path="/login"/> }>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("profile")
                            view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("admin"), StaticSegment("dashboard"))
                            view=|| view! { <ProtectedRoute><AdminDashboardPage/></ProtectedRoute> }
                        />
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/profile"/> }/>
                    </Routes>
                </main>
            </SessionProvider>
        </Router>
        <Toaster/>
    }
}
