//! The dashboard context shared by every listener

use std::cell::RefCell;
use std::rc::Rc;

use linkstats_config::DashboardConfig;
use linkstats_integration::{
    copy_to_clipboard, share_or_copy, ActionOutcome, CopyFeedback, DashboardController,
    ElementScope, IconSwap, InitReport,
};
use linkstats_shared::events::FlashKind;
use linkstats_shared::DashboardResult;
use web_sys::Document;

use crate::chartjs::ChartJsEngine;
use crate::dom::BrowserDocument;
use crate::flash_host::Flashes;
use crate::platform::BrowserPlatform;
use crate::scheduler::set_timeout;

pub type SharedDashboard = Rc<Dashboard>;

pub struct Dashboard {
    config: DashboardConfig,
    page: BrowserDocument,
    controller: RefCell<DashboardController<ChartJsEngine, BrowserDocument>>,
    flashes: Flashes,
    platform: BrowserPlatform,
}

impl Dashboard {
    pub fn new(document: Document, config: DashboardConfig) -> SharedDashboard {
        let page = BrowserDocument::new(document.clone());
        let controller = DashboardController::new(ChartJsEngine::new(page.clone()), page.clone());

        Rc::new(Self {
            flashes: Flashes::new(document, config.flash.clone()),
            config,
            page,
            controller: RefCell::new(controller),
            platform: BrowserPlatform,
        })
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn page(&self) -> &BrowserDocument {
        &self.page
    }

    pub fn initialize<S: ElementScope + ?Sized>(&self, scope: &S) -> InitReport {
        self.controller.borrow_mut().initialize(scope)
    }

    pub fn refresh_main_chart(&self) -> DashboardResult<bool> {
        self.controller.borrow_mut().refresh_main_chart()
    }

    pub fn show_flash(&self, kind: FlashKind, message: &str) {
        self.flashes.show(kind, message);
    }

    fn report(&self, outcome: &ActionOutcome) {
        if let Some((kind, message)) = outcome.flash(&self.config.flash) {
            self.show_flash(kind, &message);
        }
    }

    pub async fn copy(self: Rc<Self>, text: String) -> ActionOutcome {
        let outcome = copy_to_clipboard(&self.platform, &text).await;
        self.report(&outcome);
        outcome
    }

    pub async fn share_or_copy(self: Rc<Self>, text: String) -> ActionOutcome {
        let outcome = share_or_copy(&self.platform, &self.config.share, &text).await;
        self.report(&outcome);
        outcome
    }

    /// Copy the markup of `content_id` and flip the icon pair for a moment
    pub async fn copy_content(self: Rc<Self>, content_id: String, feedback: CopyFeedback) {
        let Some(content) = self.page.element(&content_id) else {
            log::warn!("Nothing to copy: #{content_id} not found");
            return;
        };

        let text = content.inner_html();
        if let ActionOutcome::CopyFailed(_) = copy_to_clipboard(&self.platform, &text).await {
            return;
        }

        let (now, reset) = feedback.on_copied(&self.config.copy_feedback);
        apply_swaps(&self.page, &now);

        let page = self.page.clone();
        set_timeout(reset.delay_ms, move || apply_swaps(&page, &reset.task));
    }
}

/// Icons that left the page are skipped
fn apply_swaps(page: &BrowserDocument, swaps: &[IconSwap]) {
    for swap in swaps {
        let Some(icon) = page.element(&swap.element_id) else {
            continue;
        };
        let list = icon.class_list();
        let _ = list.remove_1(swap.remove);
        let _ = list.add_1(swap.add);
    }
}
