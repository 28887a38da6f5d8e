//! Stack of transient flash banners
//!
//! [`FlashStack`] tracks every banner from insertion to detachment. The host
//! does the DOM work through [`FlashHost`] and runs the timers it is handed
//! back, feeding them to [`FlashStack::fire`] when they elapse. A timer for a
//! banner that is already leaving or gone does nothing.

use std::fmt;

use linkstats_config::FlashConfig;
use linkstats_shared::events::FlashKind;
use log::{debug, warn};

use crate::Scheduled;

/// Tailwind classes applied over a banner's lifetime
pub mod classes {
    pub const BASE: &str = "relative mb-4 p-4 rounded-md shadow-md transform transition-all duration-300 ease-in-out translate-y-0 opacity-0";
    pub const ERROR: &str = "bg-red-50 border border-red-200 text-red-700";
    pub const SUCCESS: &str = "bg-green-50 border border-green-200 text-green-700";

    pub const ERROR_ICON: &str = "fa-circle-exclamation";
    pub const SUCCESS_ICON: &str = "fa-circle-check";

    pub const CLOSE_BUTTON: &str = "close-flash";

    pub const REVEAL_ADD: [&str; 2] = ["translate-y-0", "opacity-100"];
    pub const REVEAL_REMOVE: [&str; 1] = ["opacity-0"];
    pub const LEAVE_ADD: [&str; 2] = ["opacity-0", "-translate-y-2"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlashId(u64);

impl FlashId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FlashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flash-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTimer {
    Reveal(FlashId),
    AutoDismiss(FlashId),
    Detach(FlashId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub id: FlashId,
    pub kind: FlashKind,
    pub message: String,
}

impl FlashMessage {
    pub fn classes(&self) -> String {
        let palette = if self.kind.is_error() {
            classes::ERROR
        } else {
            classes::SUCCESS
        };
        format!("{} {}", classes::BASE, palette)
    }

    pub fn icon(&self) -> &'static str {
        if self.kind.is_error() {
            classes::ERROR_ICON
        } else {
            classes::SUCCESS_ICON
        }
    }

    /// Banner body; the message text is escaped
    pub fn inner_html(&self) -> String {
        format!(
            concat!(
                r#"<div class="flex items-center">"#,
                r#"<div class="flex-shrink-0"><i class="fas {icon} text-lg"></i></div>"#,
                r#"<div class="ml-3"><p class="text-sm font-medium">{message}</p></div>"#,
                r#"<div class="ml-auto pl-3"><div class="-mx-1.5 -my-1.5">"#,
                r#"<button type="button" class="{close} inline-flex rounded-md p-1.5 focus:outline-none focus:ring-2 focus:ring-offset-2">"#,
                r#"<span class="sr-only">Dismiss</span><i class="fas fa-times"></i>"#,
                r#"</button></div></div></div>"#
            ),
            icon = self.icon(),
            message = escape_html(&self.message),
            close = classes::CLOSE_BUTTON,
        )
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// DOM operations the stack needs
pub trait FlashHost {
    type Node;

    /// Insert the banner at the end of the container.
    ///
    /// `None` when the container is not on the page.
    fn append(&mut self, container_id: &str, message: &FlashMessage) -> Option<Self::Node>;

    /// Apply [`classes::REVEAL_ADD`] / [`classes::REVEAL_REMOVE`]
    fn reveal(&mut self, node: &Self::Node);

    /// Apply [`classes::LEAVE_ADD`]
    fn begin_leave(&mut self, node: &Self::Node);

    fn is_attached(&self, node: &Self::Node) -> bool;

    fn detach(&mut self, node: &Self::Node);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering,
    Visible,
    Leaving,
}

struct Entry<N> {
    id: FlashId,
    node: N,
    phase: Phase,
}

/// A banner that was shown and the timers the host must start for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownFlash {
    pub id: FlashId,
    pub timers: Vec<Scheduled<FlashTimer>>,
}

pub struct FlashStack<H: FlashHost> {
    host: H,
    config: FlashConfig,
    entries: Vec<Entry<H::Node>>,
    next_id: u64,
}

impl<H: FlashHost> FlashStack<H> {
    pub fn new(host: H, config: FlashConfig) -> Self {
        Self {
            host,
            config,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Banners currently tracked, oldest first
    pub fn ids(&self) -> Vec<FlashId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    /// Node of a tracked banner
    pub fn node(&self, id: FlashId) -> Option<&H::Node> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn show(&mut self, kind: FlashKind, message: &str) -> Option<ShownFlash> {
        self.next_id += 1;
        let flash = FlashMessage {
            id: FlashId(self.next_id),
            kind,
            message: message.to_string(),
        };

        let Some(node) = self.host.append(&self.config.container_id, &flash) else {
            warn!(
                "Flash container #{} not found, dropping message: {}",
                self.config.container_id, message
            );
            return None;
        };

        self.entries.push(Entry {
            id: flash.id,
            node,
            phase: Phase::Entering,
        });

        Some(ShownFlash {
            id: flash.id,
            timers: vec![
                Scheduled::after(self.config.reveal_delay_ms, FlashTimer::Reveal(flash.id)),
                Scheduled::after(self.config.auto_dismiss_ms, FlashTimer::AutoDismiss(flash.id)),
            ],
        })
    }

    /// Start the leave transition of a banner.
    ///
    /// Returns the detach timer, or `None` when the banner is already leaving or gone.
    pub fn dismiss(&mut self, id: FlashId) -> Option<Scheduled<FlashTimer>> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id && e.phase != Phase::Leaving)?;

        entry.phase = Phase::Leaving;
        self.host.begin_leave(&entry.node);

        Some(Scheduled::after(self.config.transition_ms, FlashTimer::Detach(id)))
    }

    /// Handle an elapsed timer; may return a follow-up timer
    pub fn fire(&mut self, timer: FlashTimer) -> Option<Scheduled<FlashTimer>> {
        match timer {
            FlashTimer::Reveal(id) => {
                if let Some(entry) = self
                    .entries
                    .iter_mut()
                    .find(|e| e.id == id && e.phase == Phase::Entering)
                {
                    entry.phase = Phase::Visible;
                    self.host.reveal(&entry.node);
                }
                None
            }
            FlashTimer::AutoDismiss(id) => self.dismiss(id),
            FlashTimer::Detach(id) => {
                self.detach(id);
                None
            }
        }
    }

    fn detach(&mut self, id: FlashId) {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            debug!("{id} already removed");
            return;
        };

        let entry = self.entries.remove(index);
        if self.host.is_attached(&entry.node) {
            self.host.detach(&entry.node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeHost {
        container_present: bool,
        attached: Vec<u64>,
        revealed: Vec<u64>,
        leaving: Vec<u64>,
        html: Vec<String>,
    }

    impl FlashHost for FakeHost {
        type Node = u64;

        fn append(&mut self, _container_id: &str, message: &FlashMessage) -> Option<u64> {
            if !self.container_present {
                return None;
            }
            self.attached.push(message.id.0);
            self.html.push(message.inner_html());
            Some(message.id.0)
        }

        fn reveal(&mut self, node: &u64) {
            self.revealed.push(*node);
        }

        fn begin_leave(&mut self, node: &u64) {
            self.leaving.push(*node);
        }

        fn is_attached(&self, node: &u64) -> bool {
            self.attached.contains(node)
        }

        fn detach(&mut self, node: &u64) {
            self.attached.retain(|n| n != node);
        }
    }

    fn stack() -> FlashStack<FakeHost> {
        let host = FakeHost {
            container_present: true,
            ..Default::default()
        };
        FlashStack::new(host, FlashConfig::default())
    }

    #[test]
    fn test_show_schedules_reveal_and_auto_dismiss() {
        let mut stack = stack();
        let shown = stack.show(FlashKind::Success, "Saved").unwrap();

        assert_eq!(
            shown.timers,
            vec![
                Scheduled::after(10, FlashTimer::Reveal(shown.id)),
                Scheduled::after(5000, FlashTimer::AutoDismiss(shown.id)),
            ]
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_missing_container() {
        let mut stack = FlashStack::new(FakeHost::default(), FlashConfig::default());

        assert!(stack.show(FlashKind::Error, "Oops").is_none());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_auto_dismiss_detaches_after_transition() {
        let mut stack = stack();
        let shown = stack.show(FlashKind::Success, "Saved").unwrap();

        assert_eq!(stack.fire(FlashTimer::Reveal(shown.id)), None);
        let detach = stack.fire(FlashTimer::AutoDismiss(shown.id)).unwrap();
        assert_eq!(detach, Scheduled::after(300, FlashTimer::Detach(shown.id)));

        // still attached while fading out
        assert!(stack.host().is_attached(&1));
        stack.fire(detach.task);
        assert!(!stack.host().is_attached(&1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_timer_after_manual_dismiss_is_noop() {
        let mut stack = stack();
        let shown = stack.show(FlashKind::Error, "Oops").unwrap();

        let detach = stack.dismiss(shown.id).unwrap();
        stack.fire(detach.task);

        assert_eq!(stack.fire(FlashTimer::AutoDismiss(shown.id)), None);
        assert_eq!(stack.fire(FlashTimer::Reveal(shown.id)), None);
        assert_eq!(stack.fire(FlashTimer::Detach(shown.id)), None);
        assert_eq!(stack.host().leaving, vec![1]);
        assert!(stack.host().revealed.is_empty());
    }

    #[test]
    fn test_double_dismiss_while_leaving() {
        let mut stack = stack();
        let shown = stack.show(FlashKind::Error, "Oops").unwrap();

        assert!(stack.dismiss(shown.id).is_some());
        assert!(stack.dismiss(shown.id).is_none());
        assert_eq!(stack.fire(FlashTimer::AutoDismiss(shown.id)), None);
    }

    #[test]
    fn test_banners_stack_in_order() {
        let mut stack = stack();
        let first = stack.show(FlashKind::Success, "one").unwrap().id;
        let second = stack.show(FlashKind::Success, "two").unwrap().id;

        assert_eq!(stack.ids(), vec![first, second]);
    }

    #[test]
    fn test_styling() {
        let error = FlashMessage {
            id: FlashId(1),
            kind: FlashKind::Error,
            message: "Bad".to_string(),
        };
        let info = FlashMessage {
            kind: FlashKind::Info,
            ..error.clone()
        };

        assert!(error.classes().contains("bg-red-50"));
        assert!(error.classes().ends_with("text-red-700"));
        assert!(error.inner_html().contains("fa-circle-exclamation"));
        assert!(info.classes().contains("bg-green-50"));
        assert!(info.inner_html().contains("fa-circle-check"));
        assert!(info.inner_html().contains("close-flash"));
    }

    #[test]
    fn test_message_is_escaped() {
        let mut stack = stack();
        stack.show(FlashKind::Error, "<img src=x onerror=alert(1)>");

        let html = &stack.host().html[0];
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
    }
}
