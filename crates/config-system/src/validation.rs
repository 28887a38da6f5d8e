//! Configuration validation utilities

use url::Url;

use crate::{ConfigError, DashboardConfig, Result};

/// Longest auto-dismiss delay accepted for flash banners
const MAX_AUTO_DISMISS_MS: u32 = 60_000;

/// Longest CSS transition accepted before detaching a banner
const MAX_TRANSITION_MS: u32 = 5_000;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &DashboardConfig) -> Result<()> {
        Self::validate_flash(&config.flash)?;
        Self::validate_toast(&config.toast)?;
        Self::validate_qr(&config.qr)?;

        if config.copy_feedback.reset_ms == 0 {
            return Err(ConfigError::Validation(
                "copyFeedback.resetMs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_flash(flash: &crate::FlashConfig) -> Result<()> {
        if flash.container_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "flash.containerId cannot be empty".to_string(),
            ));
        }

        if flash.auto_dismiss_ms == 0 || flash.auto_dismiss_ms > MAX_AUTO_DISMISS_MS {
            return Err(ConfigError::Validation(format!(
                "Invalid flash.autoDismissMs: {}. Must be between 1 and {}",
                flash.auto_dismiss_ms, MAX_AUTO_DISMISS_MS
            )));
        }

        if flash.transition_ms > MAX_TRANSITION_MS {
            return Err(ConfigError::Validation(format!(
                "Invalid flash.transitionMs: {}. Must be at most {}",
                flash.transition_ms, MAX_TRANSITION_MS
            )));
        }

        if flash.reveal_delay_ms >= flash.auto_dismiss_ms {
            return Err(ConfigError::Validation(format!(
                "flash.revealDelayMs ({}) must be shorter than flash.autoDismissMs ({})",
                flash.reveal_delay_ms, flash.auto_dismiss_ms
            )));
        }

        Ok(())
    }

    fn validate_toast(toast: &crate::ToastConfig) -> Result<()> {
        if toast.autoclose && toast.auto_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "toast.autotimeout must be greater than 0 when autoclose is set".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_qr(qr: &crate::QrConfig) -> Result<()> {
        let service = Url::parse(&qr.service_url).map_err(|e| {
            ConfigError::Validation(format!("Invalid qr.serviceUrl {}: {}", qr.service_url, e))
        })?;

        if !matches!(service.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "qr.serviceUrl must be http(s), got {}",
                service.scheme()
            )));
        }

        if !Self::is_hex_color(&qr.default_color) {
            return Err(ConfigError::Validation(format!(
                "Invalid qr.defaultColor: {}. Expected #rgb or #rrggbb",
                qr.default_color
            )));
        }

        Ok(())
    }

    /// `#rgb` or `#rrggbb`
    pub fn is_hex_color(value: &str) -> bool {
        let Some(digits) = value.strip_prefix('#') else {
            return false;
        };

        matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
    }
}
