//! Configuration system for the link statistics dashboard
//! Timings, notification options, QR service settings and chart presets

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod presets;
pub mod validation;

pub use presets::ChartPresets;
pub use validation::ConfigValidator;

/// Id of the optional `<script type="application/json">` element carrying overrides
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Config validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub flash: FlashConfig,
    pub toast: ToastConfig,
    pub share: ShareConfig,
    pub qr: QrConfig,
    pub copy_feedback: CopyFeedbackConfig,
}

impl DashboardConfig {
    /// Parse and validate a JSON document; absent fields keep their defaults
    pub fn from_json(content: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("JSON parse error: {}", e)))?;

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Like [`DashboardConfig::from_json`], falling back to the defaults on any error
    pub fn from_json_or_default(content: Option<&str>) -> Self {
        let Some(content) = content.filter(|c| !c.trim().is_empty()) else {
            return Self::default();
        };

        match Self::from_json(content) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Ignoring dashboard configuration: {err}");
                Self::default()
            }
        }
    }
}

/// Flash banner behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlashConfig {
    pub container_id: String,
    pub reveal_delay_ms: u32,
    pub auto_dismiss_ms: u32,
    pub transition_ms: u32,
    pub copy_success_message: String,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            container_id: "flash-messages".to_string(),
            reveal_delay_ms: 10,
            auto_dismiss_ms: 5000,
            transition_ms: 300,
            copy_success_message: "URL copied to clipboard!".to_string(),
        }
    }
}

/// Options handed to the toast library.
///
/// Serialized field names are the ones the library expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastConfig {
    pub show_icon: bool,
    pub show_close_button: bool,
    pub autoclose: bool,
    #[serde(rename = "autotimeout")]
    pub auto_timeout_ms: u32,
    pub gap: u32,
    pub distance: u32,
    #[serde(rename = "type")]
    pub style: String,
    pub position: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            show_icon: true,
            show_close_button: true,
            autoclose: true,
            auto_timeout_ms: 3000,
            gap: 20,
            distance: 20,
            style: "outline".to_string(),
            position: "right bottom".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareConfig {
    pub title: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            title: "Check out this link".to_string(),
        }
    }
}

/// Size tiers offered by the QR modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl QrSize {
    pub fn pixels(&self) -> u32 {
        match self {
            QrSize::Small => 150,
            QrSize::Medium => 200,
            QrSize::Large => 300,
        }
    }

    /// `WxH` as the image service expects it
    pub fn dimensions(&self) -> String {
        let px = self.pixels();
        format!("{px}x{px}")
    }

    /// Unknown names fall back to the largest tier
    pub fn parse(name: &str) -> QrSize {
        match name {
            "small" => QrSize::Small,
            "medium" => QrSize::Medium,
            _ => QrSize::Large,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QrSize::Small => "small",
            QrSize::Medium => "medium",
            QrSize::Large => "large",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrConfig {
    pub service_url: String,
    pub default_size: QrSize,
    pub default_color: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            service_url: "https://api.qrserver.com/v1/create-qr-code/".to_string(),
            default_size: QrSize::Medium,
            default_color: "#000000".to_string(),
        }
    }
}

/// Copy/done icon swap after copying an element's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CopyFeedbackConfig {
    pub reset_ms: u32,
}

impl Default for CopyFeedbackConfig {
    fn default() -> Self {
        Self { reset_ms: 1000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config =
            DashboardConfig::from_json(r#"{"flash":{"autoDismissMs":8000},"share":{"title":"Hi"}}"#)
                .unwrap();

        assert_eq!(config.flash.auto_dismiss_ms, 8000);
        assert_eq!(config.flash.transition_ms, 300);
        assert_eq!(config.flash.container_id, "flash-messages");
        assert_eq!(config.share.title, "Hi");
        assert_eq!(config.qr, QrConfig::default());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        let config = DashboardConfig::from_json_or_default(Some("{flash:"));
        assert_eq!(config, DashboardConfig::default());

        let config = DashboardConfig::from_json_or_default(None);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_qr_size_tiers() {
        assert_eq!(QrSize::Small.dimensions(), "150x150");
        assert_eq!(QrSize::Medium.dimensions(), "200x200");
        assert_eq!(QrSize::Large.dimensions(), "300x300");
        assert_eq!(QrSize::parse("huge"), QrSize::Large);
    }

    #[test]
    fn test_toast_options_use_library_names() {
        let json = serde_json::to_value(ToastConfig::default()).unwrap();

        assert_eq!(json["autotimeout"], 3000);
        assert_eq!(json["type"], "outline");
        assert_eq!(json["showCloseButton"], true);
    }
}
