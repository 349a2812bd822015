//! Dashboard Stat Card

use leptos::prelude::*;

#[component]
pub fn StatCard(title: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="card">
            <h2>{title}</h2>
            <div class="stat-value">{value}</div>
        </div>
    }
}
