//! Call Endpoints
//!
//! Listing, export, upload and analysis of recorded calls.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;

use super::{ApiClient, ApiError, CallFilter, Result};
use crate::models::{Call, QaReport, UploadTicket};

/// Content type sent when the browser could not tell the file's type
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub fn content_type_or_default(mime: &str) -> &str {
    if mime.trim().is_empty() {
        FALLBACK_CONTENT_TYPE
    } else {
        mime
    }
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct UploadRequest<'a> {
    filename: &'a str,
    content_type: &'a str,
}

// ========================
// Endpoints
// ========================

impl ApiClient {
    pub async fn calls(&self, filter: &CallFilter, limit: u32) -> Result<Vec<Call>> {
        let builder = self.request(Method::GET, "/calls/").query(&filter.list_query(limit));
        self.send_json(builder, "GET /calls/").await
    }

    /// CSV bytes generated by the server
    pub async fn export_calls(&self, filter: &CallFilter) -> Result<Vec<u8>> {
        let builder = self.request(Method::GET, "/calls/export").query(&filter.export_query());
        self.send_bytes(builder, "GET /calls/export").await
    }

    pub async fn call(&self, call_id: u32) -> Result<Call> {
        let path = format!("/calls/{}", call_id);
        let builder = self.request(Method::GET, &path);
        self.send_json(builder, &format!("GET {}", path)).await
    }

    /// Report for a call; `None` while no report exists yet (404)
    pub async fn call_report(&self, call_id: u32) -> Result<Option<QaReport>> {
        let path = format!("/calls/{}/report", call_id);
        let builder = self.request(Method::GET, &path);
        match self.send_json(builder, &format!("GET {}", path)).await {
            Ok(report) => Ok(Some(report)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Register a call and get a pre-signed URL to upload its audio to
    pub async fn create_upload_url(&self, project_id: u32, filename: &str, content_type: &str) -> Result<UploadTicket> {
        let builder = self
            .request(Method::POST, "/calls/upload-url")
            .query(&[("project_id", project_id)])
            .json(&UploadRequest { filename, content_type });
        self.send_json(builder, "POST /calls/upload-url").await
    }

    /// PUT the file body straight to object storage.
    ///
    /// The URL is absolute and already signed: no base URL, no bearer token.
    pub async fn upload_to_presigned_url(&self, url: &str, content_type: &str, body: Vec<u8>) -> Result<u16> {
        log::debug!("[API] PUT <pre-signed> ({} bytes)", body.len());
        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, content_type_or_default(content_type))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            log::error!("[API] pre-signed upload -> {}", status);
            Err(ApiError::Status { status: status.as_u16(), detail: None })
        }
    }

    /// Queue AI analysis of an uploaded call
    pub async fn analyze_call(&self, call_id: u32, model: &str) -> Result<()> {
        let path = format!("/calls/{}/analyze", call_id);
        let builder = self.request(Method::POST, &path).query(&[("model", model)]);
        self.send(builder, &format!("POST {}", path)).await?;
        Ok(())
    }
}
