//! Upload Modal Component
//!
//! Registers a call, PUTs its audio to the pre-signed URL, then starts analysis.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement};

use crate::api::{content_type_or_default, ApiClient, ApiError, Result};
use crate::browser;
use crate::components::{ErrorText, ProjectSelect};
use crate::config;
use crate::context::use_app_context;
use crate::models::Project;

/// Steps of the upload flow, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadStage {
    RequestingUrl,
    Uploading,
    StartingAnalysis,
    Done,
}

impl UploadStage {
    fn message(self) -> &'static str {
        match self {
            UploadStage::RequestingUrl => "Requesting upload URL...",
            UploadStage::Uploading => "Uploading to storage...",
            UploadStage::StartingAnalysis => "Starting analysis...",
            UploadStage::Done => "Upload and analysis started",
        }
    }
}

/// Server detail first, then transport/browser failures, then a generic message
fn upload_error_message(err: &ApiError) -> String {
    match err {
        _ if err.detail().is_some() => err.detail_or("Upload failed"),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::Browser(_) => err.to_string(),
        _ => "Upload failed".to_string(),
    }
}

/// Reject recordings too large to buffer before anything is created server-side
fn check_upload_size(size_bytes: f64) -> Result<()> {
    if size_bytes > config::MAX_UPLOAD_BYTES as f64 {
        let mib = config::MAX_UPLOAD_BYTES / (1024 * 1024);
        return Err(ApiError::Browser(format!("File is larger than {} MiB", mib)));
    }
    Ok(())
}

async fn run_upload(
    api: &ApiClient,
    project_id: u32,
    file: &File,
    on_stage: impl Fn(UploadStage),
) -> Result<u32> {
    let mime = file.type_();
    let content_type = content_type_or_default(&mime);

    check_upload_size(file.size())?;

    on_stage(UploadStage::RequestingUrl);
    let ticket = api.create_upload_url(project_id, &file.name(), content_type).await?;

    on_stage(UploadStage::Uploading);
    let bytes = browser::read_file_bytes(file).await?;
    api.upload_to_presigned_url(&ticket.upload_url, content_type, bytes).await?;

    on_stage(UploadStage::StartingAnalysis);
    api.analyze_call(ticket.call_id, config::DEFAULT_ANALYSIS_MODEL).await?;

    on_stage(UploadStage::Done);
    Ok(ticket.call_id)
}

#[component]
pub fn UploadModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] projects: Signal<Vec<Project>>,
    #[prop(into)] default_project: Signal<Option<u32>>,
    /// Receives the new call id
    #[prop(into)]
    on_uploaded: Callback<u32>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (project, set_project) = signal::<Option<u32>>(None);
    let (file, set_file) = signal_local::<Option<File>>(None);
    let (status, set_status) = signal::<Option<String>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);
    // Bumped on every open so a pending auto-close cannot close a later session
    let session = StoredValue::new(0u32);

    // Reset each time the modal opens
    Effect::new(move |_| {
        if open.get() {
            session.update_value(|s| *s += 1);
            set_project.set(default_project.get_untracked());
            set_file.set(None);
            set_status.set(None);
            set_error.set(None);
            set_busy.set(false);
        }
    });

    let start_upload = move |_| {
        let (Some(project_id), Some(selected_file)) = (project.get_untracked(), file.get_untracked()) else {
            set_error.set(Some("Select project and file".to_string()));
            return;
        };
        set_busy.set(true);
        set_error.set(None);
        let opened_in = session.get_value();
        log::info!("[UPLOAD] {} -> project {}", selected_file.name(), project_id);

        spawn_local(async move {
            let api = ctx.api();
            let outcome = run_upload(&api, project_id, &selected_file, |stage| {
                set_status.set(Some(stage.message().to_string()));
            })
            .await;
            set_busy.set(false);

            match outcome {
                Ok(call_id) => {
                    log::info!("[UPLOAD] Call {} uploaded, analysis queued", call_id);
                    on_uploaded.run(call_id);
                    TimeoutFuture::new(config::UPLOAD_CLOSE_DELAY_MS).await;
                    if session.get_value() == opened_in && open.get_untracked() {
                        on_close.run(());
                    }
                }
                Err(e) => {
                    log::error!("[UPLOAD] Failed: {}", e);
                    set_error.set(Some(upload_error_message(&e)));
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <h2>"Upload Call"</h2>
                    <div class="field">
                        <label>"Project"</label>
                        <ProjectSelect
                            projects=projects
                            selected=project
                            on_change={move |id: Option<u32>| set_project.set(id)}
                            placeholder="Select project"
                        />
                    </div>
                    <div class="field">
                        <label>"Audio File"</label>
                        <input
                            type="file"
                            accept="audio/*"
                            on:change=move |ev| {
                                let input: HtmlInputElement = event_target(&ev);
                                set_file.set(input.files().and_then(|files| files.get(0)));
                            }
                        />
                    </div>
                    {move || status.get().map(|s| view! { <div class="status-text">{s}</div> })}
                    {move || error.get().map(|e| view! { <ErrorText message=e /> })}
                    <div class="actions">
                        <button class="button" disabled=move || busy.get() on:click=start_upload>
                            {move || if busy.get() { "Working..." } else { "Upload & Analyze" }}
                        </button>
                        <button class="button secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_messages_follow_flow() {
        let stages = [
            UploadStage::RequestingUrl,
            UploadStage::Uploading,
            UploadStage::StartingAnalysis,
            UploadStage::Done,
        ];
        let messages: Vec<&str> = stages.iter().map(|s| s.message()).collect();
        assert_eq!(
            messages,
            vec![
                "Requesting upload URL...",
                "Uploading to storage...",
                "Starting analysis...",
                "Upload and analysis started",
            ]
        );
    }

    #[test]
    fn test_upload_error_message() {
        let with_detail = ApiError::Status { status: 400, detail: Some("Unsupported audio format".into()) };
        assert_eq!(upload_error_message(&with_detail), "Unsupported audio format");

        let storage_rejected = ApiError::Status { status: 403, detail: None };
        assert_eq!(upload_error_message(&storage_rejected), "Upload failed");

        let offline = ApiError::Network("connection refused".into());
        assert_eq!(upload_error_message(&offline), "Network error: connection refused");
    }

    #[test]
    fn test_check_upload_size() {
        let limit = config::MAX_UPLOAD_BYTES as f64;
        assert!(check_upload_size(0.0).is_ok());
        assert!(check_upload_size(limit).is_ok());

        let err = check_upload_size(limit + 1.0).unwrap_err();
        assert!(matches!(err, ApiError::Browser(_)));
        assert_eq!(upload_error_message(&err), "Browser error: File is larger than 512 MiB");
    }
}
