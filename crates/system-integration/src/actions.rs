//! Declarative `data-action` click handling

use linkstats_shared::events::DataAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    Copy(String),
}

/// Resolve the `data-action` / `data-value` pair of a clicked element.
///
/// `None` means the click is not ours and should proceed normally.
pub fn resolve_action(action: Option<&str>, value: Option<&str>) -> Option<ActionRequest> {
    let value = value.filter(|v| !v.is_empty())?;

    match DataAction::parse(action?)? {
        DataAction::Copy => Some(ActionRequest::Copy(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_action() {
        assert_eq!(
            resolve_action(Some("copy"), Some("https://sho.rt/abc")),
            Some(ActionRequest::Copy("https://sho.rt/abc".to_string()))
        );
    }

    #[test]
    fn test_ignored_clicks() {
        assert_eq!(resolve_action(Some("copy"), Some("")), None);
        assert_eq!(resolve_action(Some("copy"), None), None);
        assert_eq!(resolve_action(Some("delete"), Some("1")), None);
        assert_eq!(resolve_action(None, Some("1")), None);
    }
}
