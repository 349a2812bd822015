//! Calls View
//!
//! Filterable call list with CSV export and the upload entry point.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CallFilter;
use crate::browser;
use crate::components::{ErrorText, ProjectSelect, UploadModal};
use crate::config;
use crate::context::use_app_context;
use crate::format;
use crate::latest::Latest;
use crate::models::{Call, CallStatus};
use crate::router::Route;
use crate::store::{store_set_projects, use_app_store, AppStateStoreFields};

#[component]
pub fn CallsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Filters
    let (status, set_status) = signal::<Option<CallStatus>>(None);
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (agent, set_agent) = signal(String::new());
    let (search, set_search) = signal(String::new());
    let (refresh, set_refresh) = signal(0u32);

    // Data
    let (calls, set_calls) = signal(Vec::<Call>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_upload, set_show_upload) = signal(false);
    let latest = Latest::new();

    let current_filter = move || CallFilter {
        project_id: store.selected_project().get(),
        status: status.get(),
        from: date_from.get(),
        to: date_to.get(),
        agent: agent.get(),
        q: search.get(),
    };

    // Load projects on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().projects().await {
                Ok(loaded) => store_set_projects(&store, loaded),
                Err(e) => {
                    set_error.set(Some(e.detail_or("Failed to load projects")));
                    set_loading.set(false);
                }
            }
        });
    });

    // Reload whenever a filter changes
    Effect::new(move |_| {
        let _ = refresh.get();
        if !store.projects_loaded().get() {
            return;
        }
        let filter = current_filter();
        let ticket = latest.begin();
        if filter.project_id.is_none() {
            show_empty_list(set_calls, set_error, set_loading);
            return;
        }
        set_loading.set(true);

        spawn_local(async move {
            let result = ctx.api().calls(&filter, config::CALL_LIST_LIMIT).await;
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok(loaded) => {
                    log::debug!("[Calls] Loaded {} calls", loaded.len());
                    set_calls.set(loaded);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.detail_or("Failed to load calls"))),
            }
            set_loading.set(false);
        });
    });

    let export_csv = move |_| {
        let filter = untrack(current_filter);
        if filter.project_id.is_none() {
            return;
        }
        spawn_local(async move {
            let exported = ctx.api().export_calls(&filter).await.and_then(|bytes| {
                let name = format::export_file_name("calls", format::today_utc());
                browser::download_bytes(&bytes, &name, "text/csv")
            });
            if let Err(e) = exported {
                log::error!("[Calls] Export failed: {}", e);
            }
        });
    };

    let table = move || {
        if loading.get() {
            return view! { <div>"Loading calls..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <ErrorText message=e /> }.into_any();
        }
        view! {
            <div class="card">
                <table>
                    <thead>
                        <tr>
                            <th class="left">"Filename"</th>
                            <th>"Agent"</th>
                            <th>"Status"</th>
                            <th>"Uploaded"</th>
                            <th>"Processed"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || calls.get()
                            key=|c| c.id
                            children=move |c| {
                                let id = c.id;
                                view! {
                                    <tr>
                                        <td class="left">{c.filename.clone()}</td>
                                        <td>{format::or_dash(c.agent_name.as_deref())}</td>
                                        <td>{c.status.as_str()}</td>
                                        <td>{format::timestamp(&c.uploaded_at)}</td>
                                        <td>{format::opt_timestamp(c.processed_at.as_deref())}</td>
                                        <td class="right">
                                            <button
                                                class="button secondary"
                                                on:click=move |_| ctx.navigate(Route::CallDetail(id))
                                            >
                                                "View"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                        <Show when=move || calls.with(Vec::is_empty)>
                            <tr><td colspan="6" class="empty">"No calls"</td></tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <div>
            <h1>"Calls"</h1>
            <div class="card section filters">
                <div>
                    <label>"Project"</label>
                    <ProjectSelect
                        projects=Signal::derive(move || store.projects().get())
                        selected=Signal::derive(move || store.selected_project().get())
                        on_change={move |id: Option<u32>| store.selected_project().set(id)}
                        placeholder="Select project"
                    />
                </div>
                <div>
                    <label>"Status"</label>
                    <select
                        prop:value=move || status.get().map(CallStatus::as_str).unwrap_or_default()
                        on:change=move |ev| set_status.set(CallStatus::from_filter(&event_target_value(&ev)))
                    >
                        <option value="">"All"</option>
                        {CallStatus::FILTERABLE.into_iter().map(|s| view! {
                            <option value=s.as_str()>{s.label()}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div>
                    <label>"From"</label>
                    <input type="date" prop:value=move || date_from.get() on:input=move |ev| set_date_from.set(event_target_value(&ev)) />
                </div>
                <div>
                    <label>"To"</label>
                    <input type="date" prop:value=move || date_to.get() on:input=move |ev| set_date_to.set(event_target_value(&ev)) />
                </div>
                <div>
                    <label>"Agent"</label>
                    <input
                        type="text"
                        placeholder="Agent name"
                        prop:value=move || agent.get()
                        on:input=move |ev| set_agent.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"Search"</label>
                    <input
                        type="text"
                        placeholder="Filename, customer..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <div>
                    <label>"\u{a0}"</label>
                    <button class="button secondary" on:click=move |_| set_refresh.update(|n| *n += 1)>"Refresh"</button>
                </div>
                <div class="right">
                    <label>"\u{a0}"</label>
                    <div class="actions">
                        <button class="button secondary" on:click=export_csv>"Export CSV"</button>
                        <button class="button" on:click=move |_| set_show_upload.set(true)>"Upload Call"</button>
                    </div>
                </div>
            </div>

            {table}

            <UploadModal
                open=show_upload
                on_close=move |_: ()| set_show_upload.set(false)
                projects=Signal::derive(move || store.projects().get())
                default_project=Signal::derive(move || store.selected_project().get())
                on_uploaded=move |_: u32| set_refresh.update(|n| *n += 1)
            />
        </div>
    }
}

/// Nothing to list without a project; any earlier load error no longer applies
fn show_empty_list(
    set_calls: WriteSignal<Vec<Call>>,
    set_error: WriteSignal<Option<String>>,
    set_loading: WriteSignal<bool>,
) {
    set_calls.set(Vec::new());
    set_error.set(None);
    set_loading.set(false);
}
