//! Application Context
//!
//! Session and navigation state shared via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::config;
use crate::router::Route;
use crate::store::{store_clear, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Bearer token, mirrored in localStorage
    pub token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
    store: AppStore,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        token: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        store: AppStore,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            token: token.0,
            set_token: token.1,
            store,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Navigate, adding a history entry
    pub fn navigate(&self, route: Route) {
        browser::push_path(&route.to_path());
        self.set_route.set(route);
    }

    /// Navigate, replacing the current history entry
    pub fn replace(&self, route: Route) {
        browser::replace_path(&route.to_path());
        self.set_route.set(route);
    }

    /// Sync from the address bar (initial load, back/forward)
    pub fn sync_from_location(&self) {
        let (path, query) = browser::current_location();
        let resolved = Route::resolve(&path, &query);
        if resolved.redirected {
            self.replace(resolved.route);
        } else {
            self.set_route.set(resolved.route);
        }
    }

    /// Store a freshly issued token
    pub fn sign_in(&self, token: String) {
        if let Err(e) = browser::store_item(config::TOKEN_STORAGE_KEY, &token) {
            log::warn!("[SESSION] Token not persisted: {}", e);
        }
        self.set_token.set(Some(token));
    }

    pub fn sign_out(&self) {
        browser::remove_item(config::TOKEN_STORAGE_KEY);
        self.set_token.set(None);
        store_clear(&self.store);
    }

    /// Session expired or was rejected: drop the token and go to login
    pub fn handle_unauthorized(&self) {
        log::warn!("[SESSION] API rejected the token, signing out");
        self.sign_out();
        if let Some(target) = self.route.with_untracked(Route::after_unauthorized) {
            self.replace(target);
        }
    }

    /// API client for the current session
    pub fn api(&self) -> ApiClient {
        let ctx = *self;
        ApiClient::new(config::api_base_url())
            .with_token(self.token.get_untracked())
            .on_unauthorized(move || ctx.handle_unauthorized())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
