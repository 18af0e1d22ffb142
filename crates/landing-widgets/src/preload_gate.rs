//! Loading overlay that fades out once the page has loaded.

use std::time::{Duration, Instant};

use landing_common::NodeId;
use landing_config::{MountsConfig, PreloadConfig};
use landing_view::View;
use tracing::debug;

#[derive(Debug)]
pub struct PreloadGate {
    overlay: NodeId,
    fade_class: String,
    delay: Duration,
    remove_at: Option<Instant>,
    removed: bool,
}

impl PreloadGate {
    pub fn mount<V: View + ?Sized>(
        view: &V,
        mounts: &MountsConfig,
        config: &PreloadConfig,
    ) -> Option<Self> {
        let Some(overlay) = view.by_id(&mounts.preloader) else {
            debug!(id = %mounts.preloader, "no preloader overlay");
            return None;
        };
        Some(Self {
            overlay,
            fade_class: config.fade_class.clone(),
            delay: Duration::from_millis(config.remove_delay_ms),
            remove_at: None,
            removed: false,
        })
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Start the fade and schedule removal. Repeated load events are ignored.
    pub fn handle_load<V: View + ?Sized>(&mut self, view: &mut V, now: Instant) {
        if self.removed || self.remove_at.is_some() {
            return;
        }
        view.add_class(self.overlay, &self.fade_class);
        self.remove_at = Some(now + self.delay);
    }

    /// Remove the overlay once its fade delay has passed.
    pub fn poll<V: View + ?Sized>(&mut self, view: &mut V, now: Instant) {
        match self.remove_at {
            Some(at) if now >= at => {
                view.remove(self.overlay);
                self.remove_at = None;
                self.removed = true;
                debug!("preloader removed");
            }
            _ => {}
        }
    }
}
