//! Document listeners and the window functions legacy templates call

use js_sys::{Reflect, JSON};
use linkstats_integration::{resolve_action, ActionRequest, CopyFeedback, Notification};
use linkstats_shared::events::{
    DataAction, FlashKind, AFTER_SWAP_EVENT, MAKE_TOAST_EVENT, SHOW_MESSAGE_EVENT,
};
use linkstats_shared::DashboardResult;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CustomEvent, Element, Event, EventTarget};

use crate::app::SharedDashboard;
use crate::dom::{window, SubtreeScope};
use crate::toast::show_toast;

fn listen<F>(target: &EventTarget, event: &str, handler: F) -> DashboardResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Let JS manage the closure
    closure.forget();
    Ok(())
}

/// Initialize the widgets of the whole page once the document is parsed
pub fn on_ready(app: &SharedDashboard) -> DashboardResult<()> {
    let document = app.page().document().clone();

    if document.ready_state() != "loading" {
        initialize_page(app);
        return Ok(());
    }

    let app = app.clone();
    listen(&document, "DOMContentLoaded", move |_| initialize_page(&app))
}

fn initialize_page(app: &SharedDashboard) {
    let report = app.initialize(app.page());
    log::debug!("Initial scan: {report:?}");
}

/// Initialize widgets inside fragments htmx swaps in
pub fn on_after_swap(app: &SharedDashboard) -> DashboardResult<()> {
    let document = app.page().document().clone();
    let app = app.clone();

    listen(&document, AFTER_SWAP_EVENT, move |event| {
        let Some(root) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        app.initialize(&SubtreeScope::new(root));
    })
}

fn event_detail(event: &Event) -> Option<String> {
    let detail = event.dyn_ref::<CustomEvent>()?.detail();
    JSON::stringify(&detail).ok()?.as_string()
}

/// `showMessage` and `makeToast` dispatched on the body
pub fn on_notifications(app: &SharedDashboard) -> DashboardResult<()> {
    let document = app.page().document();
    let target: EventTarget = match document.body() {
        Some(body) => body.into(),
        None => document.clone().into(),
    };

    for name in [SHOW_MESSAGE_EVENT, MAKE_TOAST_EVENT] {
        let app = app.clone();
        listen(&target, name, move |event| {
            let Some(detail) = event_detail(&event) else {
                return;
            };

            match Notification::from_event(name, &detail) {
                Some(Notification::Flash { kind, message }) => app.show_flash(kind, &message),
                Some(Notification::Toast(toast)) => {
                    if let Err(err) = show_toast(&toast, &app.config().toast) {
                        log::error!("Failed to show toast: {err}");
                    }
                }
                None => {}
            }
        })?;
    }

    Ok(())
}

/// Delegated `[data-action]` clicks
pub fn on_actions(app: &SharedDashboard) -> DashboardResult<()> {
    let document = app.page().document().clone();
    let app = app.clone();
    let selector = format!("[{}]", DataAction::ATTRIBUTE);

    listen(&document, "click", move |event| {
        let trigger = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|element| element.closest(&selector).ok().flatten());
        let Some(trigger) = trigger else {
            return;
        };

        let request = resolve_action(
            trigger.get_attribute(DataAction::ATTRIBUTE).as_deref(),
            trigger.get_attribute(DataAction::VALUE_ATTRIBUTE).as_deref(),
        );

        if let Some(ActionRequest::Copy(text)) = request {
            let app = app.clone();
            spawn_local(async move {
                app.copy(text).await;
            });
            event.prevent_default();
            event.stop_propagation();
        }
    })
}

fn set_global(name: &str, function: JsValue) -> DashboardResult<()> {
    let window: web_sys::Window = window()?;
    Reflect::set(&window, &JsValue::from_str(name), &function)?;
    Ok(())
}

/// `updateChart`, `copyToClipboard`, `shareOrCopy`, `showFlashMessage` and `copyContent` on `window`
pub fn expose_globals(app: &SharedDashboard) -> DashboardResult<()> {
    let dashboard = app.clone();
    let update_chart = Closure::<dyn Fn()>::new(move || {
        if let Err(err) = dashboard.refresh_main_chart() {
            log::error!("Failed to refresh main chart: {err}");
        }
    });
    set_global("updateChart", update_chart.into_js_value())?;

    let dashboard = app.clone();
    let copy = Closure::<dyn Fn(String)>::new(move |text: String| {
        let dashboard = dashboard.clone();
        spawn_local(async move {
            dashboard.copy(text).await;
        });
    });
    set_global("copyToClipboard", copy.into_js_value())?;

    let dashboard = app.clone();
    let share = Closure::<dyn Fn(String)>::new(move |text: String| {
        let dashboard = dashboard.clone();
        spawn_local(async move {
            dashboard.share_or_copy(text).await;
        });
    });
    set_global("shareOrCopy", share.into_js_value())?;

    let dashboard = app.clone();
    let show_flash = Closure::<dyn Fn(String, JsValue)>::new(move |message: String, kind: JsValue| {
        let kind = kind
            .as_string()
            .map(|kind| FlashKind::parse(&kind))
            .unwrap_or_default();
        dashboard.show_flash(kind, &message);
    });
    set_global("showFlashMessage", show_flash.into_js_value())?;

    let dashboard = app.clone();
    let copy_content = Closure::<dyn Fn(String, String, String)>::new(
        move |content_id: String, copy_icon: String, done_icon: String| {
            let feedback = CopyFeedback::new(&copy_icon, &done_icon);
            spawn_local(dashboard.clone().copy_content(content_id, feedback));
        },
    );
    set_global("copyContent", copy_content.into_js_value())?;

    Ok(())
}
