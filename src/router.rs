//! Client-side Routing
//!
//! Maps browser paths to views and back, and decides where the auth guard
//! sends unauthenticated visitors.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left readable in the `from` query value
const FROM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'/').remove(b'-').remove(b'_').remove(b'.');

/// Application views
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `from` is where to go after signing in
    Login { from: Option<String> },
    Projects,
    Dashboard,
    Calls,
    CallDetail(u32),
}

/// Top-level navigation sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Projects,
    Calls,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Projects, Section::Calls];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Projects => "Projects",
            Section::Calls => "Calls",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Section::Dashboard => Route::Dashboard,
            Section::Projects => Route::Projects,
            Section::Calls => Route::Calls,
        }
    }
}

/// Outcome of resolving a browser location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub route: Route,
    /// The address bar must be rewritten to `route.to_path()`
    pub redirected: bool,
}

impl Route {
    /// Exact match of a path (and query) to a route
    pub fn parse(path: &str, query: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Some(Route::Login { from: from_param(query) }),
            ["projects"] => Some(Route::Projects),
            ["dashboard"] => Some(Route::Dashboard),
            ["calls"] => Some(Route::Calls),
            ["calls", id] => id.parse().ok().map(Route::CallDetail),
            _ => None,
        }
    }

    /// `/` and unknown paths land on the dashboard
    pub fn resolve(path: &str, query: &str) -> Resolved {
        match Route::parse(path, query) {
            Some(route) => Resolved { route, redirected: false },
            None => Resolved { route: Route::Dashboard, redirected: true },
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Login { from: Some(from) } => {
                format!("/login?from={}", utf8_percent_encode(from, FROM_ENCODE_SET))
            }
            Route::Login { from: None } => "/login".to_string(),
            Route::Projects => "/projects".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Calls => "/calls".to_string(),
            Route::CallDetail(id) => format!("/calls/{}", id),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login { .. })
    }

    /// Where the guard sends a visitor without a token
    pub fn login_redirect(&self) -> Route {
        match self {
            Route::Login { .. } => self.clone(),
            _ => Route::Login { from: Some(self.to_path()) },
        }
    }

    /// Where to go once the API rejects the session token; `None` stays put
    pub fn after_unauthorized(&self) -> Option<Route> {
        self.requires_auth().then(|| self.login_redirect())
    }

    /// Destination after a successful login
    pub fn after_login(from: Option<&str>) -> Route {
        from.and_then(|f| {
            let (path, query) = f.split_once('?').unwrap_or((f, ""));
            Route::parse(path, query)
        })
        .filter(Route::requires_auth)
        .unwrap_or(Route::Dashboard)
    }

    /// Nav section highlighted for this route
    pub fn section(&self) -> Option<Section> {
        match self {
            Route::Login { .. } => None,
            Route::Projects => Some(Section::Projects),
            Route::Dashboard => Some(Section::Dashboard),
            Route::Calls | Route::CallDetail(_) => Some(Section::Calls),
        }
    }
}

fn from_param(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "from")
        .and_then(|(_, value)| percent_decode_str(value).decode_utf8().ok())
        .map(|value| value.into_owned())
        .filter(|value| value.starts_with('/'))
}
