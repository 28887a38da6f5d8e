//! Payloads of the document events the dashboard listens to

use serde::{Deserialize, Serialize};

/// Custom event carrying a [`FlashEvent`]
pub const SHOW_MESSAGE_EVENT: &str = "showMessage";
/// Custom event carrying a [`ToastEvent`]
pub const MAKE_TOAST_EVENT: &str = "makeToast";
/// Fired by htmx once a swapped fragment is in the document
pub const AFTER_SWAP_EVENT: &str = "htmx:afterSwap";

/// Level value marking a `showMessage` event as a flash message
pub const FLASH_LEVEL: &str = "flash";

/// Visual category of a flash message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    #[default]
    Error,
    Success,
    #[serde(other)]
    Info,
}

impl FlashKind {
    /// Parse the loose `type` strings templates pass around; unknown kinds are informational
    pub fn parse(kind: &str) -> FlashKind {
        match kind {
            "error" => FlashKind::Error,
            "success" => FlashKind::Success,
            _ => FlashKind::Info,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FlashKind::Error)
    }
}

/// Detail of a `showMessage` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashEvent {
    #[serde(default)]
    pub level: Option<String>,
    pub message: String,
    #[serde(rename = "type", default)]
    pub kind: FlashKind,
}

impl FlashEvent {
    pub fn is_flash(&self) -> bool {
        self.level.as_deref() == Some(FLASH_LEVEL)
    }
}

/// Severity of a toast notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

/// Detail of a `makeToast` event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastEvent {
    #[serde(default)]
    pub level: ToastLevel,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "customWrapper", default, skip_serializing_if = "Option::is_none")]
    pub custom_wrapper: Option<String>,
}

/// Declarative click actions carried by a `data-action` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataAction {
    Copy,
}

impl DataAction {
    pub const ATTRIBUTE: &'static str = "data-action";
    pub const VALUE_ATTRIBUTE: &'static str = "data-value";

    pub fn parse(action: &str) -> Option<DataAction> {
        match action {
            "copy" => Some(DataAction::Copy),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_event_defaults_to_error() {
        let event: FlashEvent =
            serde_json::from_str(r#"{"level":"flash","message":"Saved"}"#).unwrap();

        assert!(event.is_flash());
        assert_eq!(event.kind, FlashKind::Error);
    }

    #[test]
    fn test_flash_event_unknown_type() {
        let event: FlashEvent =
            serde_json::from_str(r#"{"level":"flash","message":"Hi","type":"notice"}"#).unwrap();

        assert_eq!(event.kind, FlashKind::Info);
        assert_eq!(FlashKind::parse("success"), FlashKind::Success);
    }

    #[test]
    fn test_toast_event() {
        let event: ToastEvent = serde_json::from_str(
            r#"{"level":"warning","title":"Quota","message":"Almost there","customWrapper":""}"#,
        )
        .unwrap();

        assert_eq!(event.level, ToastLevel::Warning);
        assert_eq!(event.title, "Quota");
    }

    #[test]
    fn test_data_action_parse() {
        assert_eq!(DataAction::parse("copy"), Some(DataAction::Copy));
        assert_eq!(DataAction::parse("delete"), None);
    }
}
