//! WASM bridge for the link statistics dashboard
//! Binds the widget layer to the browser: document, Chart.js, jsVectorMap,
//! Notify, Alpine.js and the navigator share/clipboard APIs.

use wasm_bindgen::prelude::*;

pub mod alpine;
pub mod app;
pub mod chartjs;
pub mod config;
pub mod dom;
pub mod flash_host;
pub mod listeners;
pub mod platform;
pub mod scheduler;
pub mod toast;

use app::Dashboard;
use linkstats_shared::DashboardResult;

/// Entry point run when the module is instantiated
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Already initialized when the module is instantiated twice
    let _ = console_log::init_with_level(log::Level::Info);

    wire_dashboard().map_err(JsValue::from)
}

fn wire_dashboard() -> DashboardResult<()> {
    let document = dom::document()?;
    let app = Dashboard::new(document.clone(), config::load_config(&document));

    listeners::on_notifications(&app)?;
    listeners::on_actions(&app)?;
    listeners::on_after_swap(&app)?;
    listeners::expose_globals(&app)?;
    listeners::on_ready(&app)?;

    log::info!("Dashboard bridge ready");
    Ok(())
}
