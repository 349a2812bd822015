//! Navigation Bar Component
//!
//! Section links plus the logout button while signed in.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::use_app_context;
use crate::router::{Route, Section};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let logout = move |_| {
        log::info!("[NAV] Logout");
        ctx.sign_out();
        ctx.navigate(Route::Login { from: None });
    };

    view! {
        <div class="nav">
            <div class="links">
                {Section::ALL.into_iter().map(move |section| {
                    let active = Signal::derive(move || ctx.route.with(|r| r.section() == Some(section)));
                    view! {
                        <Link route=section.route() active=active>
                            {section.label()}
                        </Link>
                    }
                }).collect_view()}
            </div>
            <div>
                <Show when=move || ctx.is_authenticated()>
                    <button class="button secondary" on:click=logout>"Logout"</button>
                </Show>
            </div>
        </div>
    }
}
