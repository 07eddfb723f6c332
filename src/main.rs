//! Tag Admin Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod form;
mod models;
mod pages;
mod view_state;

use app::App;
use config::AppConfig;
use context::AppContext;
use leptos::prelude::*;
use leptos_query_cache::{QueryClient, QueryClientProvider};
use tracing::{info, warn};
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("[APP] logger not installed: {e}").into());
    }
    info!(api = %config.api_base_url, "starting tag admin");

    let client = QueryClient::new();
    let context = AppContext::new(&config);
    let app = move || {
        view! {
            <QueryClientProvider client=client>
                <App context=context />
            </QueryClientProvider>
        }
    };

    let root = document()
        .get_element_by_id("root")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match root {
        Some(root) => leptos::mount::mount_to(root, app).forget(),
        None => {
            warn!("no #root element, mounting to body");
            mount_to_body(app);
        }
    }
}
