//! Frontend Models
//!
//! Read-only projections of API entities. Timestamps are kept as the server
//! sent them and only parsed for display (see `format`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Project (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub company_id: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    pub is_active: bool,
}

/// Processing state of a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallStatus {
    Uploaded,
    Processing,
    Completed,
    Failed,
    /// Anything a newer backend may report
    #[serde(other)]
    Unknown,
}

impl CallStatus {
    /// Statuses offered by the call list filter
    pub const FILTERABLE: [CallStatus; 4] = [
        CallStatus::Uploaded,
        CallStatus::Processing,
        CallStatus::Completed,
        CallStatus::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CallStatus::Uploaded => "uploaded",
            CallStatus::Processing => "processing",
            CallStatus::Completed => "completed",
            CallStatus::Failed => "failed",
            CallStatus::Unknown => "unknown",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CallStatus::Uploaded => "Uploaded",
            CallStatus::Processing => "Processing",
            CallStatus::Completed => "Completed",
            CallStatus::Failed => "Failed",
            CallStatus::Unknown => "Unknown",
        }
    }

    /// Parse a filter value; empty or unrecognised means "all"
    pub fn from_filter(value: &str) -> Option<CallStatus> {
        Self::FILTERABLE.into_iter().find(|s| s.as_str() == value)
    }

    /// Analysis can be (re)started only before processing or after a failure
    pub fn can_analyze(self) -> bool {
        matches!(self, CallStatus::Uploaded | CallStatus::Failed)
    }
}

/// Recorded call (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: u32,
    pub project_id: u32,
    pub filename: String,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub s3_key: String,
    #[serde(default)]
    pub s3_output_key: Option<String>,
    #[serde(default)]
    pub transcription_job_name: Option<String>,
    pub status: CallStatus,
    #[serde(default)]
    pub call_duration: Option<f64>,
    pub uploaded_at: String,
    #[serde(default)]
    pub processed_at: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// QA report produced by analysis (matches API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaReport {
    pub id: u32,
    pub call_id: u32,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub corrected_transcript: Option<String>,
    #[serde(default)]
    pub agent_summary: Option<String>,
    /// Free-form rubric scores, in server order
    #[serde(default)]
    pub qa_scores: Option<Map<String, Value>>,
    #[serde(default)]
    pub qa_feedback: Option<String>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub positive_count: u32,
    #[serde(default)]
    pub negative_count: u32,
    #[serde(default)]
    pub neutral_count: u32,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub processing_time_seconds: Option<f64>,
    pub created_at: String,
}

/// Aggregate counters for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_calls: u64,
    pub processed_calls: u64,
    pub pending_calls: u64,
    pub failed_calls: u64,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub total_processing_time: Option<f64>,
}

/// One row of the agent performance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub agent_name: String,
    pub total_calls: u64,
    #[serde(default)]
    pub average_score: Option<f64>,
    #[serde(default)]
    pub recent_calls: u64,
}

/// Pre-signed upload target returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadTicket {
    pub upload_url: String,
    pub s3_key: String,
    pub call_id: u32,
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
