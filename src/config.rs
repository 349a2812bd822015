//! Build-time Configuration
//!
//! The API location is baked in at compile time from `CALLQA_API_BASE_URL`
//! (trunk forwards the environment to rustc).

/// Used when `CALLQA_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Model requested when triggering analysis
pub const DEFAULT_ANALYSIS_MODEL: &str = "gpt-4o";

/// Maximum rows requested by the call list
pub const CALL_LIST_LIMIT: u32 = 100;

/// localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Delay before the upload modal closes itself after success
pub const UPLOAD_CLOSE_DELAY_MS: u32 = 800;

/// Largest recording the upload modal accepts; the file is buffered in memory before the PUT
pub const MAX_UPLOAD_BYTES: u64 = 512 * 1024 * 1024;

/// Prefilled login email
pub const DEFAULT_LOGIN_EMAIL: &str = "admin@example.com";

/// API base URL without trailing slash
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("CALLQA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// Debug builds log requests, release builds only lifecycle events and failures
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
