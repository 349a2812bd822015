//! Call QA Console App
//!
//! Root component: session/route state, auth guard and view switch.

use leptos::ev;
use leptos::prelude::*;

use crate::browser;
use crate::components::NavBar;
use crate::config;
use crate::context::AppContext;
use crate::pages::{CallDetailPage, CallsPage, DashboardPage, LoginPage, ProjectsPage};
use crate::router::Route;
use crate::store::AppState;
use reactive_stores::Store;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (path, query) = browser::current_location();
    let initial = Route::resolve(&path, &query);
    let route = signal(initial.route.clone());
    let token = signal(browser::load_item(config::TOKEN_STORAGE_KEY));
    let store = Store::new(AppState::default());

    // Provide context to all children
    let ctx = AppContext::new(route, token, store);
    provide_context(store);
    provide_context(ctx);

    if initial.redirected {
        ctx.replace(initial.route);
    }

    // Back/forward buttons
    let _popstate = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());

    // Auth guard: protected views need a token
    Effect::new(move |_| {
        let current = ctx.route.get();
        if current.requires_auth() && !ctx.is_authenticated() {
            log::info!("[APP] {} requires sign-in", current.to_path());
            ctx.replace(current.login_redirect());
        }
    });

    let view_for_route = move || {
        let current = ctx.route.get();
        if current.requires_auth() && !ctx.is_authenticated() {
            return ().into_any();
        }
        match current {
            Route::Login { from } => view! { <LoginPage from=from /> }.into_any(),
            Route::Projects => view! { <ProjectsPage /> }.into_any(),
            Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            Route::Calls => view! { <CallsPage /> }.into_any(),
            Route::CallDetail(id) => view! { <CallDetailPage call_id=id /> }.into_any(),
        }
    };

    view! {
        <NavBar />
        <div class="container">
            {view_for_route}
        </div>
    }
}
