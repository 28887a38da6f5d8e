//! Widget integration layer for the link statistics dashboard
//!
//! Ties the data adapter, the configuration and the host seams together:
//! which widgets exist, how they are built and initialized, and the page
//! behaviours around them (flash messages, toasts, clipboard and share,
//! QR codes, declarative click actions).
//!
//! Nothing here touches the browser directly. The host implements the traits
//! in [`host`], [`flash::FlashHost`] and [`clipboard::SharePlatform`] and
//! executes the [`Scheduled`] requests this crate hands back.

pub mod actions;
pub mod clipboard;
pub mod controller;
pub mod copy_feedback;
pub mod filter;
pub mod flash;
pub mod host;
pub mod notifications;
pub mod qr;
pub mod registry;
pub mod widgets;

pub use actions::{resolve_action, ActionRequest};
pub use clipboard::{copy_to_clipboard, share_or_copy, ActionOutcome, ShareOutcome, SharePlatform};
pub use controller::{DashboardController, InitReport};
pub use copy_feedback::{CopyFeedback, IconSwap};
pub use filter::DashboardFilter;
pub use flash::{FlashHost, FlashId, FlashMessage, FlashStack, FlashTimer, ShownFlash};
pub use host::{ChartEngine, ElementScope, IdScope};
pub use notifications::{Notification, ToastOptions};
pub use qr::{DownloadLink, QrCodeModal};
pub use registry::{RegistryEntry, WidgetRegistry};
pub use widgets::{WidgetGroup, WidgetKind, WidgetSpec};

/// Work the host must run after `delay_ms` milliseconds.
///
/// Timers are never cancelled; the state machine that issued one treats a
/// late firing as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<T> {
    pub delay_ms: u32,
    pub task: T,
}

impl<T> Scheduled<T> {
    pub fn after(delay_ms: u32, task: T) -> Self {
        Self { delay_ms, task }
    }
}
