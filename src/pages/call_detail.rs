//! Call Detail View
//!
//! Call metadata, analysis trigger and the QA report.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorText, Link};
use crate::config;
use crate::context::use_app_context;
use crate::format;
use crate::models::{Call, QaReport};
use crate::router::Route;

#[component]
pub fn CallDetailPage(call_id: u32) -> impl IntoView {
    let ctx = use_app_context();

    let (call, set_call) = signal::<Option<Call>>(None);
    let (report, set_report) = signal::<Option<QaReport>>(None);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let api = ctx.api();
            match api.call(call_id).await {
                Ok(loaded) => {
                    set_call.set(Some(loaded));
                    // A report only exists once analysis finished
                    let loaded_report = api.call_report(call_id).await.unwrap_or_else(|e| {
                        log::warn!("[CallDetail] Report for call {} unavailable: {}", call_id, e);
                        None
                    });
                    set_report.set(loaded_report);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.detail_or("Failed to load call"))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let start_analysis = move |_| {
        set_busy.set(true);
        spawn_local(async move {
            match ctx.api().analyze_call(call_id, config::DEFAULT_ANALYSIS_MODEL).await {
                Ok(()) => {
                    log::info!("[CallDetail] Analysis started for call {}", call_id);
                    load();
                }
                Err(e) => set_error.set(Some(e.detail_or("Failed to start analysis"))),
            }
            set_busy.set(false);
        });
    };

    move || {
        if loading.get() {
            return view! { <div>"Loading..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <ErrorText message=e /> }.into_any();
        }
        let Some(c) = call.get() else {
            return view! { <div>"Not found"</div> }.into_any();
        };
        let can_analyze = c.status.can_analyze();

        view! {
            <div>
                <div class="page-header">
                    <h1>"Call Detail"</h1>
                    <Link route=Route::Calls class="button secondary">"Back to Calls"</Link>
                </div>

                <div class="card section">
                    <h2>"Metadata"</h2>
                    <div class="grid-3">
                        <Field label="Filename" value=c.filename.clone() />
                        <Field label="Status" value=c.status.as_str() />
                        <Field label="Agent" value=format::or_dash(c.agent_name.as_deref()) />
                        <Field label="Uploaded" value=format::timestamp(&c.uploaded_at) />
                        <Field label="Processed" value=format::opt_timestamp(c.processed_at.as_deref()) />
                        <Field label="Duration" value=format::duration(c.call_duration) />
                    </div>
                    <div class="actions">
                        <Show when=move || can_analyze>
                            <button class="button" disabled=move || busy.get() on:click=start_analysis>
                                {move || if busy.get() { "Starting..." } else { "Start Analysis" }}
                            </button>
                        </Show>
                        <button class="button secondary" on:click=move |_| load()>"Refresh"</button>
                    </div>
                    {c.error_message.clone().map(|msg| view! { <ErrorText message=format!("Error: {}", msg) /> })}
                </div>

                <div class="card">
                    <h2>"QA Report"</h2>
                    {move || match report.get() {
                        Some(r) => view! { <ReportBody report=r /> }.into_any(),
                        None => view! { <div class="muted">"No report yet."</div> }.into_any(),
                    }}
                </div>
            </div>
        }
        .into_any()
    }
}

/// Labelled value in a metadata grid
#[component]
fn Field(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div>
            <label>{label}</label>
            <div>{value}</div>
        </div>
    }
}

#[component]
fn ReportBody(report: QaReport) -> impl IntoView {
    let QaReport {
        overall_score,
        positive_count,
        negative_count,
        neutral_count,
        agent_summary,
        qa_feedback,
        qa_scores,
        corrected_transcript,
        model_used,
        processing_time_seconds,
        ..
    } = report;

    view! {
        <div class="grid-4">
            <div>
                <label>"Overall Score"</label>
                <div class="score">{format::plain_number(overall_score)}</div>
            </div>
            <Field label="Positive" value=positive_count.to_string() />
            <Field label="Negative" value=negative_count.to_string() />
            <Field label="Neutral" value=neutral_count.to_string() />
        </div>
        {agent_summary.map(|text| view! {
            <div class="section">
                <label>"Agent Summary"</label>
                <div class="pre-wrap">{text}</div>
            </div>
        })}
        {qa_feedback.map(|text| view! {
            <div class="section">
                <label>"QA Feedback"</label>
                <div class="pre-wrap">{text}</div>
            </div>
        })}
        {qa_scores.map(|scores| view! {
            <div class="section">
                <label>"QA Scores"</label>
                <table>
                    <tbody>
                        {scores.iter().map(|(name, value)| view! {
                            <tr>
                                <td class="left score-name">{name.clone()}</td>
                                <td>{format::score_value(value)}</td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        })}
        {corrected_transcript.map(|text| view! {
            <div class="section">
                <label>"Corrected Transcript"</label>
                <div class="pre-wrap transcript">{text}</div>
            </div>
        })}
        {(model_used.is_some() || processing_time_seconds.is_some()).then(|| view! {
            <div class="section muted">
                {format!(
                    "Model: {} · Processing time: {}",
                    format::or_dash(model_used.as_deref()),
                    format::seconds(processing_time_seconds),
                )}
            </div>
        })}
    }
}
