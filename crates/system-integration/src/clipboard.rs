//! Share and clipboard policies
//!
//! The platform calls are asynchronous in the browser; the policies here only
//! decide what to try next and what the user should see.

use linkstats_config::{FlashConfig, ShareConfig};
use linkstats_shared::events::FlashKind;
use linkstats_shared::DashboardError;
use log::{debug, error};

/// Result of asking the platform share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the sheet
    Cancelled,
    Failed(String),
}

/// Native share sheet and clipboard
#[allow(async_fn_in_trait)]
pub trait SharePlatform {
    fn can_share(&self) -> bool;

    async fn share(&self, title: &str, url: &str) -> ShareOutcome;

    async fn write_clipboard(&self, text: &str) -> Result<(), DashboardError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Shared,
    Cancelled,
    Copied,
    CopyFailed(DashboardError),
}

impl ActionOutcome {
    /// Flash message the user should see for this outcome
    pub fn flash(&self, config: &FlashConfig) -> Option<(FlashKind, String)> {
        match self {
            ActionOutcome::Copied => Some((FlashKind::Success, config.copy_success_message.clone())),
            _ => None,
        }
    }
}

pub async fn copy_to_clipboard<P: SharePlatform>(platform: &P, text: &str) -> ActionOutcome {
    match platform.write_clipboard(text).await {
        Ok(()) => ActionOutcome::Copied,
        Err(err) => {
            error!("Failed to copy: {err}");
            ActionOutcome::CopyFailed(err)
        }
    }
}

/// Share `url` when the platform can, copy it otherwise.
///
/// A dismissed share sheet ends the action; any other share failure falls
/// back to copying.
pub async fn share_or_copy<P: SharePlatform>(
    platform: &P,
    config: &ShareConfig,
    url: &str,
) -> ActionOutcome {
    if !platform.can_share() {
        debug!("Share unavailable, copying instead");
        return copy_to_clipboard(platform, url).await;
    }

    match platform.share(&config.title, url).await {
        ShareOutcome::Shared => ActionOutcome::Shared,
        ShareOutcome::Cancelled => ActionOutcome::Cancelled,
        ShareOutcome::Failed(message) => {
            error!("Error sharing: {message}");
            copy_to_clipboard(platform, url).await
        }
    }
}
