//! Login View

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ErrorText;
use crate::config;
use crate::context::use_app_context;
use crate::router::Route;

#[component]
pub fn LoginPage(from: Option<String>) -> impl IntoView {
    let ctx = use_app_context();

    let (email, set_email) = signal(config::DEFAULT_LOGIN_EMAIL.to_string());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let destination = StoredValue::new(Route::after_login(from.as_deref()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_loading.set(true);
        let username = email.get_untracked();
        let secret = password.get_untracked();

        spawn_local(async move {
            match ctx.api().login(&username, &secret).await {
                Ok(token) => {
                    log::info!("[LOGIN] Signed in as {}", username);
                    // Signing in re-renders the route, read local state first
                    let target = destination.get_value();
                    set_loading.set(false);
                    ctx.sign_in(token);
                    ctx.replace(target);
                }
                Err(e) => {
                    log::warn!("[LOGIN] Failed: {}", e);
                    set_error.set(Some(e.detail_or("Login failed")));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="form">
            <h1>"Sign in"</h1>
            <form on:submit=on_submit>
                <div>
                    <label>"Email"</label>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="••••••••"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                {move || error.get().map(|e| view! { <ErrorText message=e /> })}
                <div class="actions">
                    <button class="button" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
