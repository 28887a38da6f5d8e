//! Web Share and async clipboard through `navigator`

use js_sys::{Function, Object, Promise, Reflect};
use linkstats_integration::{ShareOutcome, SharePlatform};
use linkstats_shared::{DashboardError, DashboardResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::dom::window;

pub struct BrowserPlatform;

fn navigator() -> DashboardResult<JsValue> {
    Ok(window()?.navigator().into())
}

/// Call `target[name](...args)` and await the returned promise
async fn call_async(target: &JsValue, name: &str, args: &[&JsValue]) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &JsValue::from_str(name))?.dyn_into()?;
    let result = match args {
        [] => method.call0(target)?,
        [a] => method.call1(target, a)?,
        [a, b, ..] => method.call2(target, a, b)?,
    };
    JsFuture::from(Promise::resolve(&result)).await
}

fn error_name(err: &JsValue) -> Option<String> {
    Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
}

impl SharePlatform for BrowserPlatform {
    fn can_share(&self) -> bool {
        navigator()
            .and_then(|nav| Ok(Reflect::has(&nav, &JsValue::from_str("share"))?))
            .unwrap_or(false)
    }

    async fn share(&self, title: &str, url: &str) -> ShareOutcome {
        let data = Object::new();
        let _ = Reflect::set(&data, &JsValue::from_str("title"), &JsValue::from_str(title));
        let _ = Reflect::set(&data, &JsValue::from_str("url"), &JsValue::from_str(url));

        let nav = match navigator() {
            Ok(nav) => nav,
            Err(err) => return ShareOutcome::Failed(err.to_string()),
        };

        match call_async(&nav, "share", &[&data]).await {
            Ok(_) => ShareOutcome::Shared,
            Err(err) if error_name(&err).as_deref() == Some("AbortError") => ShareOutcome::Cancelled,
            Err(err) => ShareOutcome::Failed(DashboardError::from(err).to_string()),
        }
    }

    async fn write_clipboard(&self, text: &str) -> DashboardResult<()> {
        let clipboard = Reflect::get(&navigator()?, &JsValue::from_str("clipboard"))?;
        if clipboard.is_undefined() {
            return Err(DashboardError::Clipboard {
                message: "Clipboard API unavailable".to_string(),
            });
        }

        call_async(&clipboard, "writeText", &[&JsValue::from_str(text)])
            .await
            .map(|_| ())
            .map_err(|err| DashboardError::Clipboard {
                message: DashboardError::from(err).to_string(),
            })
    }
}
