//! Page-level configuration overrides

use linkstats_config::{DashboardConfig, CONFIG_ELEMENT_ID};
use web_sys::Document;

use crate::dom::document;

/// Configuration from the `dashboard-config` element, defaults when absent or invalid
pub fn load_config(document: &Document) -> DashboardConfig {
    let content = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());

    DashboardConfig::from_json_or_default(content.as_deref())
}

/// [`load_config`] on the current document
pub fn page_config() -> DashboardConfig {
    document()
        .map(|document| load_config(&document))
        .unwrap_or_default()
}
