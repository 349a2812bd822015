//! Dashboard View
//!
//! Aggregate call counters and per-agent performance for a project.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::DashboardFilter;
use crate::browser;
use crate::components::{ErrorText, ProjectSelect, StatCard};
use crate::context::use_app_context;
use crate::format;
use crate::latest::Latest;
use crate::models::{AgentPerformance, DashboardStats};
use crate::store::{store_set_projects, use_app_store, AppStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Filters
    let (date_from, set_date_from) = signal(String::new());
    let (date_to, set_date_to) = signal(String::new());
    let (agent, set_agent) = signal(String::new());
    let (refresh, set_refresh) = signal(0u32);

    // Data
    let (stats, set_stats) = signal(DashboardStats::default());
    let (agents, set_agents) = signal(Vec::<AgentPerformance>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let latest = Latest::new();

    let current_filter = move || DashboardFilter {
        project_id: store.selected_project().get(),
        from: date_from.get(),
        to: date_to.get(),
        agent: agent.get(),
    };

    // Load projects on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().projects().await {
                Ok(loaded) => store_set_projects(&store, loaded),
                Err(e) => {
                    set_error.set(Some(e.detail_or("Failed to load initial data")));
                    set_loading.set(false);
                }
            }
        });
    });

    // Reload whenever projects arrive or a filter changes
    Effect::new(move |_| {
        let _ = refresh.get();
        if !store.projects_loaded().get() {
            return;
        }
        let filter = current_filter();
        let ticket = latest.begin();
        set_loading.set(true);

        spawn_local(async move {
            let api = ctx.api();
            let result = futures::try_join!(api.dashboard_stats(&filter), api.agent_performance(&filter));
            if !latest.is_current(ticket) {
                return;
            }
            match result {
                Ok((loaded_stats, loaded_agents)) => {
                    log::debug!("[Dashboard] {} calls, {} agents", loaded_stats.total_calls, loaded_agents.len());
                    set_stats.set(loaded_stats);
                    set_agents.set(loaded_agents);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e.detail_or("Failed to load dashboard"))),
            }
            set_loading.set(false);
        });
    });

    let export_csv = move |_| {
        let filter = untrack(current_filter);
        spawn_local(async move {
            let exported = ctx.api().export_agent_performance(&filter).await.and_then(|bytes| {
                let name = format::export_file_name("agent_performance", format::today_utc());
                browser::download_bytes(&bytes, &name, "text/csv")
            });
            if let Err(e) = exported {
                log::error!("[Dashboard] Export failed: {}", e);
            }
        });
    };

    let content = move || {
        if loading.get() {
            return view! { <div>"Loading..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <ErrorText message=e /> }.into_any();
        }
        let s = stats.get();
        view! {
            <div class="card-grid">
                <StatCard title="Total Calls" value=s.total_calls.to_string() />
                <StatCard title="Processed" value=s.processed_calls.to_string() />
                <StatCard title="Pending" value=s.pending_calls.to_string() />
                <StatCard title="Failed" value=s.failed_calls.to_string() />
                <StatCard title="Average Score" value=format::score(s.average_score) />
                <StatCard title="Total Proc. Time" value=format::seconds(s.total_processing_time) />
            </div>

            <div class="card section">
                <h2>"Agent Performance"</h2>
                <table>
                    <thead>
                        <tr>
                            <th class="left">"Agent"</th>
                            <th>"Total Calls"</th>
                            <th>"Avg Score"</th>
                            <th>"Recent Calls"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || agents.get()
                            key=|a| a.agent_name.clone()
                            children=|a| view! {
                                <tr>
                                    <td class="left">{a.agent_name.clone()}</td>
                                    <td>{a.total_calls.to_string()}</td>
                                    <td>{format::score(a.average_score)}</td>
                                    <td>{a.recent_calls.to_string()}</td>
                                </tr>
                            }
                        />
                        <Show when=move || agents.with(Vec::is_empty)>
                            <tr><td colspan="4" class="empty">"No data"</td></tr>
                        </Show>
                    </tbody>
                </table>
            </div>
        }
        .into_any()
    };

    view! {
        <div>
            <h1>"Dashboard"</h1>
            <div class="card section filters">
                <div>
                    <label>"Project"</label>
                    <ProjectSelect
                        projects=Signal::derive(move || store.projects().get())
                        selected=Signal::derive(move || store.selected_project().get())
                        on_change={move |id: Option<u32>| store.selected_project().set(id)}
                    />
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
                    <label>"\u{a0}"</label>
                    <div class="actions">
                        <button class="button secondary" on:click=move |_| set_refresh.update(|n| *n += 1)>"Refresh"</button>
                        <button class="button" on:click=export_csv>"Export CSV"</button>
                    </div>
                </div>
            </div>
            {content}
        </div>
    }
}
