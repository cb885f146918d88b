use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod global_state;
pub mod infrastructure;
pub mod macros;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

/// Wire the browser logger, clock and panic hook.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = if cfg!(debug_assertions) {
        infrastructure::ConsoleLogger::new_development()
    } else {
        infrastructure::ConsoleLogger::new_production()
    };
    domain::logging::init_logger(Box::new(console_logger));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider));

    crate::log_info!(LogComponent::Presentation("Initialize"), "dashboard runtime initialized");
}

/// Mount the Leptos terminal view on `<body>`.
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(api_key: Option<String>, config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => config::DashboardConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => config::DashboardConfig::default(),
    };
    let api_key = api_key.unwrap_or_default();
    leptos::mount_to_body(move || {
        use app::App;
        leptos::view! { <App api_key=api_key config=config /> }
    });
    Ok(())
}
