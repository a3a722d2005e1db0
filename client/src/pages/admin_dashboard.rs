//! Admin dashboard: user listing and admin provisioning.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute` and gated on the Admin role. Non-admins
//! get an access-denied card and no listing request is made. The backend
//! still enforces the role on both endpoints.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;
use session::guard::{Access, role_gate};
use session::{AuthState, RegisterRequest, Role, UserListing, UserSummary};

use crate::pages::register::RegisterFields;
use crate::state::auth::Session;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let access = Memo::new(move |_| auth.with(|s| role_gate(s.user.as_ref(), Role::Admin)));

    move || match access.get() {
        Access::Granted => view! { <AdminPanels/> }.into_any(),
        Access::Denied => view! { <AccessDenied/> }.into_any(),
    }
}

#[component]
fn AccessDenied() -> impl IntoView {
    view! {
        <div class="admin-page">
            <section class="card card--centered">
                <h2 class="card__title">"Admin Access Required"</h2>
                <p>"You do not have permission to view this page."</p>
            </section>
        </div>
    }
}

#[component]
fn AdminPanels() -> impl IntoView {
    let session = expect_context::<Session>();
    let listing = RwSignal::new(None::<UserListing>);
    let loading = RwSignal::new(true);

    let fetch_users = move || {
        loading.set(true);
        let manager = session.manager();
        leptos::task::spawn_local(async move {
            // Errors surface as an "Error" toast; the table stays as it was.
            if let Ok(fetched) = manager.list_users().await {
                listing.set(Some(fetched));
            }
            loading.set(false);
        });
    };

    Effect::new(move || fetch_users());

    view! {
        <div class="admin-page">
            <section class="card">
                <h2 class="card__title">"User Stats"</h2>
                {move || {
                    if loading.get() && listing.with(Option::is_none) {
                        return view! { <p class="card__subtitle">"Loading users..."</p> }.into_any();
                    }
                    let (total, users) = listing.with(|l| {
                        l.as_ref().map_or((0, Vec::new()), |l| (l.total(), l.users.clone()))
                    });
                    view! {
                        <p class="admin-page__total">{format!("Total Users: {total}")}</p>
                        <UserTable users=users/>
                    }
                    .into_any()
                }}
            </section>
            <RegisterAdminForm on_registered=Callback::new(move |()| fetch_users())/>
        </div>
    }
}

#[component]
fn UserTable(users: Vec<UserSummary>) -> impl IntoView {
    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                </tr>
            </thead>
            <tbody>
                {users
                    .into_iter()
                    .map(|u| {
                        let name = u.full_name();
                        view! {
                            <tr class=row_class(u.role)>
                                <td>{u.id}</td>
                                <td>{name}</td>
                                <td>{u.email}</td>
                                <td>{u.role.as_str()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn RegisterAdminForm(on_registered: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();
    let form = RwSignal::new(RegisterRequest::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        let submitted = form.get();
        let manager = session.manager();
        leptos::task::spawn_local(async move {
            if manager.register_admin(&submitted).await.is_ok() {
                form.set(RegisterRequest::default());
                on_registered.run(());
            }
            busy.set(false);
        });
    };

    view! {
        <section class="card">
            <h2 class="card__title">"Register New Admin"</h2>
            <form class="auth-form" on:submit=on_submit aria-label="Register admin form">
                <RegisterFields form=form/>
                <button class="auth-button" type="submit" disabled=move || busy.get() aria-busy=move || busy.get().to_string()>
                    {move || if busy.get() { "Registering..." } else { "Register Admin" }}
                </button>
            </form>
        </section>
    }
}

fn row_class(role: Role) -> &'static str {
    match role {
        Role::Admin => "user-table__row user-table__row--admin",
        Role::User => "user-table__row",
    }
}
