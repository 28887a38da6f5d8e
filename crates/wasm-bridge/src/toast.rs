//! Toasts through the page's `Notify` library

use linkstats_config::ToastConfig;
use linkstats_integration::ToastOptions;
use linkstats_shared::events::ToastEvent;
use linkstats_shared::{DashboardError, DashboardResult};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    type Notify;

    #[wasm_bindgen(constructor, catch)]
    fn new(options: &JsValue) -> Result<Notify, JsValue>;
}

pub fn show_toast(event: &ToastEvent, config: &ToastConfig) -> DashboardResult<()> {
    let options = ToastOptions::new(event, config)
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| DashboardError::JsInterop {
            message: e.to_string(),
        })?;

    Notify::new(&options)?;
    Ok(())
}
