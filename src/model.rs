//! Page-level UI state folded from viewport samples and nav clicks.

use std::rc::Rc;
use yew::Reducible;

use crate::config::PageConfig;
use crate::state::{
    drawer::{columns_from_tops, layout_columns},
    progress::scroll_progress,
    scrollspy::pick_active,
    RevealGate, ScrollSpy, SectionMark, Viewport,
};

/// One animation-frame worth of geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub viewport_width: f64,
    pub document_height: f64,
    /// Absolute tops, document order.
    pub sections: Vec<SectionMark>,
    /// Viewport-relative top of the reveal target.
    pub about_top: Option<f64>,
    /// Viewport-relative tops of the project cards.
    pub card_tops: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub progress: f64,
    pub spy: ScrollSpy,
    pub about: RevealGate,
    pub columns: usize,
    pub settings: Rc<PageConfig>,
}

#[derive(Clone, Debug)]
pub enum PageAction {
    Sample { metrics: PageMetrics, now_ms: f64 },
    NavClicked { id: String, now_ms: f64 },
    RevealNow,
}

impl PageState {
    pub fn new(settings: Rc<PageConfig>) -> Self {
        Self {
            progress: 0.0,
            spy: ScrollSpy::default(),
            about: RevealGate::default(),
            columns: 1,
            settings,
        }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            PageAction::Sample { metrics, now_ms } => {
                let cfg = &new.settings;
                let vp = Viewport {
                    scroll_y: metrics.scroll_y,
                    height: metrics.viewport_height,
                    document_height: metrics.document_height,
                };
                new.progress = scroll_progress(vp.scroll_y, vp.height, vp.document_height);
                let computed = pick_active(
                    &metrics.sections,
                    &vp,
                    cfg.spy_offset_px,
                    cfg.bottom_slack_px,
                );
                new.spy.observe(computed, now_ms);
                new.about
                    .observe(metrics.about_top, metrics.viewport_height, cfg.reveal_ratio);
                new.columns = layout_columns(
                    metrics.viewport_width,
                    cfg.drawer_breakpoint_px,
                    columns_from_tops(&metrics.card_tops),
                );
            }
            PageAction::NavClicked { id, now_ms } => {
                let lock_ms = new.settings.nav_lock_ms;
                new.spy.lock_to(&id, now_ms, lock_ms);
            }
            PageAction::RevealNow => {
                new.about.force();
            }
        }
        // Unchanged state keeps the same Rc so the page does not re-render.
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}
