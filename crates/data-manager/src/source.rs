//! Access to embedded data elements

use std::collections::HashMap;

/// Anything that can hand out the text content of an element by id.
///
/// The browser document is the production implementation; [`StaticSource`]
/// stands in for it in tests and when series are prepared ahead of time.
pub trait DataSource {
    /// Text content of the element with this id, `None` when it does not exist
    fn text_content(&self, element_id: &str) -> Option<String>;

    fn contains(&self, element_id: &str) -> bool {
        self.text_content(element_id).is_some()
    }
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn text_content(&self, element_id: &str) -> Option<String> {
        (**self).text_content(element_id)
    }

    fn contains(&self, element_id: &str) -> bool {
        (**self).contains(element_id)
    }
}

impl<T: DataSource + ?Sized> DataSource for std::rc::Rc<T> {
    fn text_content(&self, element_id: &str) -> Option<String> {
        (**self).text_content(element_id)
    }

    fn contains(&self, element_id: &str) -> bool {
        (**self).contains(element_id)
    }
}

/// In-memory set of elements keyed by id
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    elements: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element_id: &str, text: &str) -> Self {
        self.insert(element_id, text);
        self
    }

    pub fn insert(&mut self, element_id: &str, text: &str) {
        self.elements
            .insert(element_id.to_string(), text.to_string());
    }

    pub fn remove(&mut self, element_id: &str) -> Option<String> {
        self.elements.remove(element_id)
    }
}

impl DataSource for StaticSource {
    fn text_content(&self, element_id: &str) -> Option<String> {
        self.elements.get(element_id).cloned()
    }

    fn contains(&self, element_id: &str) -> bool {
        self.elements.contains_key(element_id)
    }
}
