//! ApiClient behaviour against a mock API server

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::models::CallStatus;

fn call_json(id: u32, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "project_id": 3,
        "filename": format!("call-{}.wav", id),
        "agent_name": "Dana",
        "s3_key": format!("projects/3/{}.wav", id),
        "status": status,
        "uploaded_at": "2024-05-01T09:30:00"
    })
}

#[tokio::test]
async fn test_login_posts_password_grant_form() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=admin%40example.com"))
        .and(body_string_contains("grant_type=password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let token = client.login("admin@example.com", "secret").await.unwrap();
    assert_eq!(token, "tok-123");
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Retail Support", "description": null, "company_id": 1, "is_active": true},
            {"id": 2, "name": "Collections", "company_id": 1, "is_active": false}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri())).with_token(Some("tok-123".into()));
    let projects = client.projects().await.unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1].name, "Collections");
    assert!(!projects[1].is_active);
}

#[tokio::test]
async fn test_unauthorized_runs_hook_and_keeps_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Could not validate credentials"})))
        .mount(&server)
        .await;

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let client = ApiClient::new(server.uri())
        .with_token(Some("expired".into()))
        .on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

    let err = client.projects().await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized { detail: Some("Could not validate credentials".into()) });
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_calls_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calls/"))
        .and(query_param("project_id", "3"))
        .and(query_param("status", "failed"))
        .and(query_param("start_date", "2024-05-01T00:00:00Z"))
        .and(query_param("limit", "100"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([call_json(9, "failed")])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = CallFilter {
        project_id: Some(3),
        status: Some(CallStatus::Failed),
        from: "2024-05-01".into(),
        ..Default::default()
    };
    let calls = ApiClient::new(server.uri()).calls(&filter, 100).await.unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].status, CallStatus::Failed);
}

#[tokio::test]
async fn test_export_calls_returns_raw_bytes() {
    let server = MockServer::start().await;
    let csv = "id,filename,status\n9,call-9.wav,failed\n";
    Mock::given(method("GET"))
        .and(path("/calls/export"))
        .and(query_param_is_missing("limit"))
        .respond_with(ResponseTemplate::new(200).set_body_string(csv))
        .mount(&server)
        .await;

    let filter = CallFilter { project_id: Some(3), ..Default::default() };
    let bytes = ApiClient::new(server.uri()).export_calls(&filter).await.unwrap();
    assert_eq!(bytes, csv.as_bytes());
}

#[tokio::test]
async fn test_missing_report_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calls/9/report"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Report not found"})))
        .mount(&server)
        .await;

    let report = ApiClient::new(server.uri()).call_report(9).await.unwrap();
    assert!(report.is_none());
}

#[tokio::test]
async fn test_report_server_error_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calls/9/report"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).call_report(9).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, detail: None });
}

#[tokio::test]
async fn test_call_not_found_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/calls/77"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Call not found"})))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).call(77).await.unwrap_err();
    assert_eq!(err.detail_or("Failed to load call"), "Call not found");
}

#[tokio::test]
async fn test_upload_flow_requests() {
    let server = MockServer::start().await;
    let upload_url = format!("{}/bucket/projects/3/abc.wav?X-Amz-Signature=sig", server.uri());

    Mock::given(method("POST"))
        .and(path("/calls/upload-url"))
        .and(query_param("project_id", "3"))
        .and(header("authorization", "Bearer tok"))
        .and(body_string_contains("\"filename\":\"abc.wav\""))
        .and(body_string_contains("\"content_type\":\"audio/wav\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "upload_url": upload_url,
            "s3_key": "projects/3/abc.wav",
            "call_id": 55
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/bucket/projects/3/abc.wav"))
        .and(header("content-type", "audio/wav"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/calls/55/analyze"))
        .and(query_param("model", "gpt-4o"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Analysis started"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some("tok".into()));
    let ticket = client.create_upload_url(3, "abc.wav", "audio/wav").await.unwrap();
    assert_eq!(ticket.call_id, 55);

    let status = client
        .upload_to_presigned_url(&ticket.upload_url, "audio/wav", b"RIFF....WAVE".to_vec())
        .await
        .unwrap();
    assert_eq!(status, 200);

    client.analyze_call(ticket.call_id, "gpt-4o").await.unwrap();
}

#[tokio::test]
async fn test_presigned_upload_skips_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/bucket/key"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/bucket/key"))
        .and(header("content-type", "application/octet-stream"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri()).with_token(Some("tok".into()));
    let status = client
        .upload_to_presigned_url(&format!("{}/bucket/key", server.uri()), "", vec![1, 2, 3])
        .await
        .unwrap();
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_dashboard_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dashboard/stats"))
        .and(query_param("project_id", "2"))
        .and(query_param_is_missing("agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_calls": 40,
            "processed_calls": 31,
            "pending_calls": 6,
            "failed_calls": 3,
            "average_score": 7.456,
            "total_processing_time": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dashboard/agent-performance"))
        .and(query_param("agent", "Dana"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"agent_name": "Dana", "total_calls": 12, "average_score": 8.1, "recent_calls": 4}
        ])))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let filter = DashboardFilter { project_id: Some(2), agent: "Dana".into(), ..Default::default() };
    let stats = client.dashboard_stats(&filter).await.unwrap();
    assert_eq!(stats.total_calls, 40);
    assert_eq!(stats.total_processing_time, None);

    let agents = client.agent_performance(&filter).await.unwrap();
    assert_eq!(agents[0].recent_calls, 4);
}

#[tokio::test]
async fn test_unexpected_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy login</html>"))
        .mount(&server)
        .await;

    let err = ApiClient::new(server.uri()).projects().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
