//! API Client
//!
//! Bindings to the call QA REST API, organized by resource.

mod auth;
mod calls;
mod dashboard;
mod error;
mod projects;
pub mod query;

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

pub use calls::content_type_or_default;
pub use error::{extract_detail, ApiError, Result};
pub use query::{CallFilter, DashboardFilter};

type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client for the API.
///
/// Attaches the bearer token to every API request and runs the
/// unauthorized hook whenever the API answers 401.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            http: reqwest::Client::new(),
            on_unauthorized: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    /// Called on every 401 before the error is returned
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request against the API with the bearer token attached
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Send and map non-success statuses to `ApiError`
    async fn send(&self, builder: RequestBuilder, label: &str) -> Result<Response> {
        log::debug!("[API] {}", label);
        let response = builder.send().await.map_err(|e| {
            log::error!("[API] {} failed: {}", label, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("[API] {} -> {}", label, status);
        if status == StatusCode::UNAUTHORIZED {
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }
        Err(ApiError::from_response(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder, label: &str) -> Result<T> {
        let response = self.send(builder, label).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_bytes(&self, builder: RequestBuilder, label: &str) -> Result<Vec<u8>> {
        let response = self.send(builder, label).await?;
        let bytes = response.bytes().await.map_err(ApiError::from)?;
        Ok(bytes.to_vec())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
