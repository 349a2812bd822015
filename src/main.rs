//! Call QA Console Entry Point

use callqa_ui::{app::App, config};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("[MAIN] API base URL: {}", config::api_base_url());
    mount_to_body(App);
}
