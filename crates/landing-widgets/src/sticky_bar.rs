//! Navbar "scrolled" state.

use std::time::{Duration, Instant};

use landing_common::NodeId;
use landing_config::{MountsConfig, StickyConfig};
use landing_view::{Throttle, View};
use tracing::debug;

pub const SCROLLED_CLASS: &str = "scrolled";

#[derive(Debug)]
pub struct StickyBar {
    navbar: NodeId,
    threshold: f64,
    throttle: Throttle,
    /// Last state written to the view.
    scrolled: Option<bool>,
}

impl StickyBar {
    pub fn mount<V: View + ?Sized>(
        view: &mut V,
        mounts: &MountsConfig,
        config: &StickyConfig,
    ) -> Option<Self> {
        let Some(navbar) = view.by_id(&mounts.navbar) else {
            debug!(id = %mounts.navbar, "navbar not found; sticky bar disabled");
            return None;
        };
        let mut bar = Self {
            navbar,
            threshold: f64::from(config.threshold),
            throttle: Throttle::new(Duration::from_millis(config.throttle_ms)),
            scrolled: None,
        };
        // A reload can restore a scrolled position before any scroll event.
        bar.evaluate(view);
        Some(bar)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled == Some(true)
    }

    pub fn handle_scroll<V: View + ?Sized>(&mut self, view: &mut V, now: Instant) {
        if self.throttle.ready(now) {
            self.evaluate(view);
        }
    }

    fn evaluate<V: View + ?Sized>(&mut self, view: &mut V) {
        let scrolled = view.scroll_y() > self.threshold;
        if self.scrolled != Some(scrolled) {
            view.toggle_class(self.navbar, SCROLLED_CLASS, scrolled);
            self.scrolled = Some(scrolled);
        }
    }
}
