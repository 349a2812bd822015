//! Project Select Component

use leptos::prelude::*;

use crate::models::Project;

/// `<select>` over projects. With `placeholder`, an empty option maps to `None`.
#[component]
pub fn ProjectSelect(
    #[prop(into)] projects: Signal<Vec<Project>>,
    #[prop(into)] selected: Signal<Option<u32>>,
    #[prop(into)] on_change: Callback<Option<u32>>,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    view! {
        <select
            prop:value=move || selected.get().map(|id| id.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.run(event_target_value(&ev).parse::<u32>().ok())
        >
            {placeholder.map(|label| view! { <option value="">{label}</option> })}
            <For
                each=move || projects.get()
                key=|p| p.id
                children=move |p| {
                    let id = p.id;
                    view! {
                        <option value=id.to_string() selected=move || selected.get() == Some(id)>
                            {p.name}
                        </option>
                    }
                }
            />
        </select>
    }
}
