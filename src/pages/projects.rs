//! Projects View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorText;
use crate::context::use_app_context;
use crate::format;
use crate::store::{store_set_projects, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    // Load on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().projects().await {
                Ok(loaded) => {
                    log::debug!("[Projects] Loaded {} projects", loaded.len());
                    store_set_projects(&store, loaded);
                }
                Err(e) => set_error.set(Some(e.detail_or("Failed to load projects"))),
            }
            set_loading.set(false);
        });
    });

    move || {
        if loading.get() {
            return view! { <div>"Loading projects..."</div> }.into_any();
        }
        if let Some(e) = error.get() {
            return view! { <ErrorText message=e /> }.into_any();
        }
        view! {
            <div>
                <h1>"Projects"</h1>
                <div class="card">
                    <table>
                        <thead>
                            <tr>
                                <th class="left">"Name"</th>
                                <th>"Description"</th>
                                <th>"Active"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || store.projects().get()
                                key=|p| p.id
                                children=|p| view! {
                                    <tr>
                                        <td class="left">{p.name.clone()}</td>
                                        <td>{format::or_dash(p.description.as_deref())}</td>
                                        <td>{format::yes_no(p.is_active)}</td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        }
        .into_any()
    }
}
