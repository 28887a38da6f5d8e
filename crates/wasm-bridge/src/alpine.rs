//! Alpine.js components: `dashboardData` and `qrCodeModal`
//!
//! Alpine wraps component objects in a reactive proxy and calls their methods
//! and getters with that proxy as `this`, so every method reads and writes its
//! state through the receiver it is given.

use js_sys::{Function, Object, Reflect};
use linkstats_config::{QrConfig, QrSize};
use linkstats_integration::{DashboardFilter, QrCodeModal};
use linkstats_shared::DashboardError;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use crate::config::page_config;
use crate::dom::document;

#[wasm_bindgen(inline_js = "export function withReceiver(f) { return function (...args) { return f(this, ...args); }; }")]
extern "C" {
    /// Wrap `f(receiver, ...args)` into a function that passes its `this` as `receiver`
    #[wasm_bindgen(js_name = withReceiver)]
    fn with_receiver(f: &JsValue) -> Function;
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from(DashboardError::JsInterop { message: e.to_string() }))
}

fn key(name: &str) -> JsValue {
    JsValue::from_str(name)
}

/// Register the dashboard components on an Alpine instance before `Alpine.start()`
#[wasm_bindgen(js_name = registerComponents)]
pub fn register_components(alpine: &JsValue) -> Result<(), JsValue> {
    let config = page_config();
    let data: Function = Reflect::get(alpine, &key("data"))?.dyn_into()?;

    let dashboard_data = Closure::<dyn Fn() -> JsValue>::new(|| {
        to_js(&DashboardFilter::default()).unwrap_or(JsValue::UNDEFINED)
    });
    data.call2(alpine, &key("dashboardData"), &dashboard_data.into_js_value())?;

    let qr = config.qr;
    let qr_modal = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |initial_url: JsValue| {
        let initial_url = initial_url.as_string().unwrap_or_default();
        match qr_component(&initial_url, &qr) {
            Ok(component) => component.into(),
            Err(err) => {
                log::error!("Failed to build qrCodeModal: {err:?}");
                JsValue::UNDEFINED
            }
        }
    });
    data.call2(alpine, &key("qrCodeModal"), &qr_modal.into_js_value())?;

    log::debug!("Alpine components registered");
    Ok(())
}

fn read_modal(receiver: &JsValue) -> QrCodeModal {
    let string = |name: &str| {
        Reflect::get(receiver, &key(name))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    };

    QrCodeModal {
        open: Reflect::get(receiver, &key("open"))
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or(false),
        url: string("url"),
        qr_size: QrSize::parse(&string("qrSize")),
        qr_color: string("qrColor"),
    }
}

fn qr_component(initial_url: &str, config: &QrConfig) -> Result<Object, JsValue> {
    let component: Object = to_js(&QrCodeModal::new(initial_url, config))?.dyn_into()?;

    let show_modal = Closure::<dyn Fn(JsValue, JsValue)>::new(|receiver: JsValue, url: JsValue| {
        let _ = Reflect::set(&receiver, &key("url"), &url);
        let _ = Reflect::set(&receiver, &key("open"), &JsValue::TRUE);
    });
    Reflect::set(
        &component,
        &key("showModal"),
        &with_receiver(&show_modal.into_js_value()),
    )?;

    let service_url = config.service_url.clone();
    let qr_code_url = Closure::<dyn Fn(JsValue) -> JsValue>::new(move |receiver: JsValue| {
        match read_modal(&receiver).qr_code_url(&service_url) {
            Ok(url) => JsValue::from_str(&url),
            Err(err) => {
                log::error!("{err}");
                JsValue::from_str("")
            }
        }
    });
    let getter = Object::new();
    Reflect::set(&getter, &key("get"), &with_receiver(&qr_code_url.into_js_value()))?;
    Reflect::set(&getter, &key("enumerable"), &JsValue::FALSE)?;
    Object::define_property(&component, &key("qrCodeUrl"), &getter);

    let service_url = config.service_url.clone();
    let download = Closure::<dyn Fn(JsValue)>::new(move |receiver: JsValue| {
        if let Err(err) = download_qr_code(&read_modal(&receiver), &service_url) {
            log::error!("QR code download failed: {err:?}");
        }
    });
    Reflect::set(
        &component,
        &key("downloadQRCode"),
        &with_receiver(&download.into_js_value()),
    )?;

    Ok(component)
}

/// Click a transient anchor pointing at the QR image
fn download_qr_code(modal: &QrCodeModal, service_url: &str) -> Result<(), JsValue> {
    let link = modal.download_link(service_url)?;
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from(DashboardError::ElementNotFound { id: "body".to_string() }))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&link.href);
    anchor.set_download(&link.file_name);
    anchor.set_target(link.target);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_qr_component_methods_use_receiver() {
        let component = qr_component("https://sho.rt/abc", &QrConfig::default()).unwrap();

        let show: Function = Reflect::get(&component, &key("showModal"))
            .unwrap()
            .dyn_into()
            .unwrap();
        show.call1(&component, &key("https://sho.rt/xyz")).unwrap();

        assert_eq!(
            Reflect::get(&component, &key("open")).unwrap().as_bool(),
            Some(true)
        );
        let url = Reflect::get(&component, &key("qrCodeUrl"))
            .unwrap()
            .as_string()
            .unwrap();
        assert!(url.contains("data=https%3A%2F%2Fsho.rt%2Fxyz"));
        assert!(url.contains("size=200x200"));
    }
}
