//! In-app Link Component
//!
//! Anchor that navigates through the History API instead of reloading.

use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::context::use_app_context;
use crate::router::Route;

/// Plain clicks navigate in-app; modified clicks (new tab etc.) are left to the browser
#[component]
pub fn Link(
    route: Route,
    #[prop(optional, into)] class: String,
    /// Adds the `active` class while true
    #[prop(optional)]
    active: Option<Signal<bool>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.to_path();

    let on_click = move |ev: MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a
            href=href
            class=class
            class:active=move || active.map(|a| a.get()).unwrap_or(false)
            on:click=on_click
        >
            {children()}
        </a>
    }
}
