//! Session expiry card for the profile page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Recomputes remaining session time from the stored token once per second
//! while mounted; the ticker stops on unmount.

#[cfg(test)]
#[path = "session_status_test.rs"]
mod session_status_test;

use leptos::prelude::*;
use session::progress::{SessionProgress, token_progress};

use crate::state::auth::Session;

/// How often the card refreshes.
pub const PROGRESS_TICK: std::time::Duration = std::time::Duration::from_secs(1);

#[component]
pub fn SessionStatusCard() -> impl IntoView {
    let session = expect_context::<Session>();
    let progress = RwSignal::new(None::<SessionProgress>);

    let refresh = move || {
        let manager = session.manager();
        let current = manager.tokens().get().and_then(|t| token_progress(&t, manager.now()));
        progress.set(current);
    };

    Effect::new(move || refresh());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(PROGRESS_TICK).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh();
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="card session-status">
            <h2 class="card__title">"Session Status"</h2>
            <p class="card__subtitle">"Your session will expire automatically for security"</p>
            {move || match progress.get() {
                Some(p) => view! {
                    <div class="session-status__header">
                        <span>"Session Progress"</span>
                        <span class=badge_class(&p)>{p.status.label()}</span>
                    </div>
                    <div class="progress">
                        <div class="progress__bar" style=bar_style(&p)></div>
                    </div>
                    <p class="session-status__remaining">{remaining_text(&p)}</p>
                }
                .into_any(),
                None => view! { <p class="session-status__remaining">"Session details unavailable"</p> }
                    .into_any(),
            }}
        </section>
    }
}

fn badge_class(progress: &SessionProgress) -> String {
    format!("badge badge--{}", progress.status.css_modifier())
}

fn bar_style(progress: &SessionProgress) -> String {
    format!("width: {:.1}%", progress.percent)
}

fn remaining_text(progress: &SessionProgress) -> String {
    match progress.minutes_left {
        0 => "Session has expired".to_owned(),
        1 => "Session expires in approximately 1 minute".to_owned(),
        n => format!("Session expires in approximately {n} minutes"),
    }
}
