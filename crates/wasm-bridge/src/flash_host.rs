//! Flash banners rendered into the page

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Array;
use linkstats_config::FlashConfig;
use linkstats_integration::flash::classes;
use linkstats_integration::{FlashHost, FlashId, FlashMessage, FlashStack, FlashTimer, Scheduled};
use linkstats_shared::events::FlashKind;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::scheduler::set_timeout;

pub struct DomFlashHost {
    document: Document,
}

impl DomFlashHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn class_list(names: &[&str]) -> Array {
    names.iter().map(|name| JsValue::from_str(name)).collect()
}

impl FlashHost for DomFlashHost {
    type Node = Element;

    fn append(&mut self, container_id: &str, message: &FlashMessage) -> Option<Element> {
        let container = self.document.get_element_by_id(container_id)?;
        let node = self.document.create_element("div").ok()?;

        node.set_class_name(&message.classes());
        node.set_inner_html(&message.inner_html());
        container.append_child(&node).ok()?;

        Some(node)
    }

    fn reveal(&mut self, node: &Element) {
        let list = node.class_list();
        let _ = list.add(&class_list(&classes::REVEAL_ADD));
        let _ = list.remove(&class_list(&classes::REVEAL_REMOVE));
    }

    fn begin_leave(&mut self, node: &Element) {
        let _ = node.class_list().add(&class_list(&classes::LEAVE_ADD));
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.parent_node().is_some()
    }

    fn detach(&mut self, node: &Element) {
        if let Some(parent) = node.parent_node() {
            let _ = parent.remove_child(node);
        }
    }
}

/// Click listener of one banner's close button
struct CloseListener {
    button: Element,
    on_click: Closure<dyn FnMut()>,
}

impl CloseListener {
    fn release(self) {
        let _ = self
            .button
            .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
    }
}

/// Shared handle to the page's flash stack.
///
/// Close listeners live until their banner is detached.
#[derive(Clone)]
pub struct Flashes {
    stack: Rc<RefCell<FlashStack<DomFlashHost>>>,
    close_listeners: Rc<RefCell<HashMap<FlashId, CloseListener>>>,
}

impl Flashes {
    pub fn new(document: Document, config: FlashConfig) -> Self {
        Self {
            stack: Rc::new(RefCell::new(FlashStack::new(DomFlashHost::new(document), config))),
            close_listeners: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn show(&self, kind: FlashKind, message: &str) -> Option<FlashId> {
        let shown = self.stack.borrow_mut().show(kind, message)?;

        self.wire_close_button(shown.id);
        for timer in shown.timers {
            self.schedule(timer);
        }
        Some(shown.id)
    }

    pub fn dismiss(&self, id: FlashId) {
        let detach = self.stack.borrow_mut().dismiss(id);
        if let Some(detach) = detach {
            self.schedule(detach);
        }
    }

    /// Run an elapsed timer and schedule its follow-up
    pub fn fire(&self, timer: FlashTimer) {
        let next = self.stack.borrow_mut().fire(timer);
        if let FlashTimer::Detach(id) = timer {
            let listener = self.close_listeners.borrow_mut().remove(&id);
            if let Some(listener) = listener {
                listener.release();
            }
        }
        if let Some(next) = next {
            self.schedule(next);
        }
    }

    fn schedule(&self, timer: Scheduled<FlashTimer>) {
        let flashes = self.clone();
        set_timeout(timer.delay_ms, move || flashes.fire(timer.task));
    }

    fn wire_close_button(&self, id: FlashId) {
        let button = {
            let stack = self.stack.borrow();
            stack
                .node(id)
                .and_then(|node| node.query_selector(&format!(".{}", classes::CLOSE_BUTTON)).ok())
                .flatten()
        };
        let Some(button) = button else {
            return;
        };

        let flashes = self.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || flashes.dismiss(id));
        if let Err(err) = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::error!("Failed to wire close button of {id}: {err:?}");
            return;
        }
        self.close_listeners
            .borrow_mut()
            .insert(id, CloseListener { button, on_click });
    }
}
