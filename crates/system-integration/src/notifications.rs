//! Decoding of the notification events dispatched on the page body

use linkstats_config::ToastConfig;
use linkstats_shared::events::{
    FlashEvent, FlashKind, ToastEvent, ToastLevel, MAKE_TOAST_EVENT, SHOW_MESSAGE_EVENT,
};
use log::{debug, error};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Flash { kind: FlashKind, message: String },
    Toast(ToastEvent),
}

impl Notification {
    /// Decode the JSON detail of a body event.
    ///
    /// Unknown events, `showMessage` events of another level and malformed
    /// details yield `None`.
    pub fn from_event(event_name: &str, detail: &str) -> Option<Notification> {
        match event_name {
            SHOW_MESSAGE_EVENT => {
                let event: FlashEvent = decode(event_name, detail)?;
                if !event.is_flash() {
                    debug!("Ignoring {event_name} with level {:?}", event.level);
                    return None;
                }
                Some(Notification::Flash {
                    kind: event.kind,
                    message: event.message,
                })
            }
            MAKE_TOAST_EVENT => decode(event_name, detail).map(Notification::Toast),
            _ => None,
        }
    }
}

/// Details must be JSON objects; serde would otherwise accept positional arrays
fn decode<T: serde::de::DeserializeOwned>(event_name: &str, detail: &str) -> Option<T> {
    let value = match serde_json::from_str::<Value>(detail) {
        Ok(value @ Value::Object(_)) => value,
        Ok(other) => {
            error!("Malformed {event_name} detail: expected an object, got {other}");
            return None;
        }
        Err(err) => {
            error!("Malformed {event_name} detail: {err}");
            return None;
        }
    };

    match serde_json::from_value(value) {
        Ok(event) => Some(event),
        Err(err) => {
            error!("Malformed {event_name} detail: {err}");
            None
        }
    }
}

/// Constructor argument of the toast library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToastOptions<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub status: ToastLevel,
    #[serde(rename = "customWrapper", skip_serializing_if = "Option::is_none")]
    pub custom_wrapper: Option<&'a str>,
    #[serde(flatten)]
    pub config: &'a ToastConfig,
}

impl<'a> ToastOptions<'a> {
    pub fn new(event: &'a ToastEvent, config: &'a ToastConfig) -> Self {
        Self {
            title: &event.title,
            text: &event.message,
            status: event.level,
            custom_wrapper: event.custom_wrapper.as_deref(),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_level_required() {
        let shown = Notification::from_event(
            "showMessage",
            r#"{"level":"flash","message":"Link deleted","type":"success"}"#,
        );
        assert_eq!(
            shown,
            Some(Notification::Flash {
                kind: FlashKind::Success,
                message: "Link deleted".to_string()
            })
        );

        let other = Notification::from_event(
            "showMessage",
            r#"{"level":"banner","message":"Link deleted"}"#,
        );
        assert_eq!(other, None);
    }

    #[test]
    fn test_flash_type_defaults_to_error() {
        let shown = Notification::from_event("showMessage", r#"{"level":"flash","message":"Nope"}"#);

        assert!(matches!(
            shown,
            Some(Notification::Flash { kind: FlashKind::Error, .. })
        ));
    }

    #[test]
    fn test_malformed_detail_is_ignored() {
        assert_eq!(Notification::from_event("showMessage", "{level:"), None);
        assert_eq!(Notification::from_event("makeToast", "[]"), None);
        assert_eq!(Notification::from_event("somethingElse", "{}"), None);
    }

    #[test]
    fn test_positional_detail_is_ignored() {
        assert_eq!(Notification::from_event("showMessage", r#"["flash","hi"]"#), None);
        assert_eq!(Notification::from_event("makeToast", r#"["info","Title","Body"]"#), None);
        assert_eq!(Notification::from_event("makeToast", "null"), None);
    }

    #[test]
    fn test_toast_options() {
        let Some(Notification::Toast(event)) = Notification::from_event(
            "makeToast",
            r#"{"level":"warning","title":"Heads up","message":"Quota almost reached"}"#,
        ) else {
            panic!("expected a toast");
        };
        let config = ToastConfig::default();
        let options = serde_json::to_value(ToastOptions::new(&event, &config)).unwrap();

        assert_eq!(options["title"], "Heads up");
        assert_eq!(options["text"], "Quota almost reached");
        assert_eq!(options["status"], "warning");
        assert_eq!(options["autotimeout"], 3000);
        assert_eq!(options["position"], "right bottom");
        assert_eq!(options["type"], "outline");
        assert!(options.get("customWrapper").is_none());
    }
}
