//! API Error Types

use serde_json::Value;
use thiserror::Error;

/// Result alias for API and browser glue operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors surfaced to views
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from the API; the session hook has already run
    #[error("Not authenticated")]
    Unauthorized { detail: Option<String> },

    /// Any other non-success status
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// A browser API (storage, file read, blob URL) failed
    #[error("Browser error: {0}")]
    Browser(String),
}

impl ApiError {
    /// Build from a non-success response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let detail = extract_detail(body);
        if status == 401 {
            ApiError::Unauthorized { detail }
        } else {
            ApiError::Status { status, detail }
        }
    }

    /// Server-provided detail message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Server detail, falling back to the view's message
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().map(str::to_string).unwrap_or_else(|| fallback.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Pull `detail` out of a FastAPI-style error body.
///
/// `detail` is either a string or a list of validation errors carrying `msg`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                None
            } else {
                Some(msgs.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_string_detail() {
        assert_eq!(extract_detail(r#"{"detail":"Call not found"}"#).as_deref(), Some("Call not found"));
    }

    #[test]
    fn test_extract_validation_detail() {
        let body = r#"{"detail":[
            {"loc":["query","project_id"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","filename"],"msg":"str type expected","type":"type_error.str"}
        ]}"#;
        assert_eq!(extract_detail(body).as_deref(), Some("field required; str type expected"));
    }

    #[test]
    fn test_extract_detail_absent() {
        assert_eq!(extract_detail("Internal Server Error"), None);
        assert_eq!(extract_detail(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_detail(r#"{"detail":""}"#), None);
        assert_eq!(extract_detail(r#"{"detail":[]}"#), None);
    }

    #[test]
    fn test_from_response_maps_401() {
        let err = ApiError::from_response(401, r#"{"detail":"Incorrect username or password"}"#);
        assert_eq!(err, ApiError::Unauthorized { detail: Some("Incorrect username or password".into()) });
        assert_eq!(err.detail_or("Login failed"), "Incorrect username or password");
    }

    #[test]
    fn test_detail_or_falls_back() {
        let err = ApiError::from_response(500, "");
        assert_eq!(err.detail_or("Failed to load calls"), "Failed to load calls");
        assert_eq!(ApiError::Network("offline".into()).detail_or("Failed to load projects"), "Failed to load projects");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::from_response(404, r#"{"detail":"Report not found"}"#).is_not_found());
        assert!(!ApiError::from_response(500, "").is_not_found());
    }
}
