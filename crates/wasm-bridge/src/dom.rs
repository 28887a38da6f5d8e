//! Document access for the data adapter and the widget scan

use linkstats_data::DataSource;
use linkstats_integration::ElementScope;
use linkstats_shared::{DashboardError, DashboardResult};
use web_sys::{Document, Element, Window};

pub fn window() -> DashboardResult<Window> {
    web_sys::window().ok_or_else(|| DashboardError::JsInterop {
        message: "No global window".to_string(),
    })
}

pub fn document() -> DashboardResult<Document> {
    window()?.document().ok_or_else(|| DashboardError::JsInterop {
        message: "Window has no document".to_string(),
    })
}

/// Attribute selector matching an id verbatim, without CSS escaping
pub fn id_selector(element_id: &str) -> String {
    format!("[id=\"{}\"]", element_id.replace('\\', "\\\\").replace('"', "\\\""))
}

/// The whole page
#[derive(Clone)]
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, element_id: &str) -> Option<Element> {
        self.document.get_element_by_id(element_id)
    }
}

impl DataSource for BrowserDocument {
    fn text_content(&self, element_id: &str) -> Option<String> {
        // an element with no text node still counts as present
        self.element(element_id)
            .map(|element| element.text_content().unwrap_or_default())
    }

    fn contains(&self, element_id: &str) -> bool {
        self.element(element_id).is_some()
    }
}

impl ElementScope for BrowserDocument {
    fn contains(&self, element_id: &str) -> bool {
        self.element(element_id).is_some()
    }
}

/// A swapped-in fragment: its root and everything below it
pub struct SubtreeScope {
    root: Element,
}

impl SubtreeScope {
    pub fn new(root: Element) -> Self {
        Self { root }
    }
}

impl ElementScope for SubtreeScope {
    fn contains(&self, element_id: &str) -> bool {
        if self.root.id() == element_id {
            return true;
        }

        matches!(self.root.query_selector(&id_selector(element_id)), Ok(Some(_)))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_subtree_scope() {
        let document = document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(r#"<section><canvas id="mainChart"></canvas></section>"#);

        let scope = SubtreeScope::new(root);
        assert!(scope.contains("mainChart"));
        assert!(!scope.contains("referrerChart"));
    }

    #[wasm_bindgen_test]
    fn test_subtree_scope_matches_root() {
        let document = document().unwrap();
        let root = document.create_element("canvas").unwrap();
        root.set_id("referrerChart");

        let scope = SubtreeScope::new(root);
        assert!(scope.contains("referrerChart"));
        assert!(!scope.contains("mainChart"));
    }

    #[wasm_bindgen_test]
    fn test_document_text_content() {
        let document = document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_id("visitOverTimeTest");
        script.set_text_content(Some("null"));
        document.body().unwrap().append_child(&script).unwrap();

        let page = BrowserDocument::new(document);
        assert_eq!(page.text_content("visitOverTimeTest").as_deref(), Some("null"));
        assert_eq!(page.text_content("absentElement"), None);

        script.remove();
    }
}
