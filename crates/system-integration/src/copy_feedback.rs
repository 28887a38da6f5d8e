//! Copy/done icon swap shown after copying an element's content

use linkstats_config::CopyFeedbackConfig;

use crate::Scheduled;

const SHOWN: &str = "opacity-100";
const HIDDEN: &str = "opacity-0";

/// Class change on one icon element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSwap {
    pub element_id: String,
    pub add: &'static str,
    pub remove: &'static str,
}

impl IconSwap {
    fn show(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            add: SHOWN,
            remove: HIDDEN,
        }
    }

    fn hide(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
            add: HIDDEN,
            remove: SHOWN,
        }
    }
}

/// Pair of icons next to a copyable element.
///
/// The host applies the swaps to whichever icons still exist; a missing icon
/// is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    copy_icon_id: String,
    done_icon_id: String,
}

impl CopyFeedback {
    pub fn new(copy_icon_id: &str, done_icon_id: &str) -> Self {
        Self {
            copy_icon_id: copy_icon_id.to_string(),
            done_icon_id: done_icon_id.to_string(),
        }
    }

    /// Swaps to apply right after a successful copy, and the delayed reset
    pub fn on_copied(&self, config: &CopyFeedbackConfig) -> (Vec<IconSwap>, Scheduled<Vec<IconSwap>>) {
        let copied = vec![IconSwap::hide(&self.copy_icon_id), IconSwap::show(&self.done_icon_id)];
        let reset = vec![IconSwap::show(&self.copy_icon_id), IconSwap::hide(&self.done_icon_id)];

        (copied, Scheduled::after(config.reset_ms, reset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_and_reset() {
        let feedback = CopyFeedback::new("copy-icon", "done-icon");
        let (now, later) = feedback.on_copied(&CopyFeedbackConfig::default());

        assert_eq!(now[0].element_id, "copy-icon");
        assert_eq!((now[0].add, now[0].remove), ("opacity-0", "opacity-100"));
        assert_eq!((now[1].add, now[1].remove), ("opacity-100", "opacity-0"));

        assert_eq!(later.delay_ms, 1000);
        assert_eq!(later.task[0], IconSwap::show("copy-icon"));
        assert_eq!(later.task[1], IconSwap::hide("done-icon"));
    }
}
