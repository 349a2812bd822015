//! Error Text Component

use leptos::prelude::*;

/// Danger-colored message block
#[component]
pub fn ErrorText(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-text">{message}</div> }
}
