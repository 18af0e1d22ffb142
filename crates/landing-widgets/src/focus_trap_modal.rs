//! Scheduling dialog with keyboard focus containment (Closed ⇄ Open).

use landing_common::NodeId;
use landing_config::{ModalConfig, MountsConfig};
use landing_view::{ScrollLease, ScrollLock, View};
use tracing::{debug, info};

/// Class that makes the modal visible.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug)]
pub struct FocusTrapModal {
    modal: NodeId,
    frame: Option<NodeId>,
    trigger_class: String,
    close_class: String,
    embed_url: String,
    is_open: bool,
    /// Set on the first open; never reset.
    iframe_loaded: bool,
    /// Trap members, re-derived on every open.
    focusable: Vec<NodeId>,
    last_focused: Option<NodeId>,
    lease: ScrollLease,
}

impl FocusTrapModal {
    /// Bind to the modal container. Returns `None` if the container or
    /// every trigger is missing. A missing frame only skips the lazy load.
    pub fn mount<V: View + ?Sized>(
        view: &mut V,
        mounts: &MountsConfig,
        config: &ModalConfig,
        lock: &ScrollLock,
    ) -> Option<Self> {
        let Some(modal) = view.by_id(&mounts.modal) else {
            debug!(id = %mounts.modal, "modal container not found; scheduling modal disabled");
            return None;
        };
        if view.by_class(&mounts.modal_trigger_class).is_empty() {
            debug!(class = %mounts.modal_trigger_class, "no modal triggers; scheduling modal disabled");
            return None;
        }
        let frame = view.by_id(&mounts.modal_frame);
        if frame.is_none() {
            debug!(id = %mounts.modal_frame, "modal frame not found; embed will not load");
        }

        view.set_attribute(modal, "aria-hidden", "true");
        Some(Self {
            modal,
            frame,
            trigger_class: mounts.modal_trigger_class.clone(),
            close_class: mounts.modal_close_class.clone(),
            embed_url: config.embed_url.clone(),
            is_open: false,
            iframe_loaded: false,
            focusable: Vec::new(),
            last_focused: None,
            lease: lock.lease(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn iframe_loaded(&self) -> bool {
        self.iframe_loaded
    }

    pub fn focusable(&self) -> &[NodeId] {
        &self.focusable
    }

    /// Show the modal and move focus into it.
    ///
    /// `trigger` is the element that requested the open; it receives focus
    /// on close if nothing else was focused beforehand.
    pub fn open<V: View + ?Sized>(&mut self, view: &mut V, trigger: Option<NodeId>) {
        if !self.iframe_loaded {
            if let Some(frame) = self.frame {
                view.set_attribute(frame, "src", &self.embed_url);
                self.iframe_loaded = true;
                info!(url = %self.embed_url, "scheduling embed loaded");
            }
        }

        // Reopening while open must not record an element inside the trap.
        if !self.is_open {
            self.last_focused = view.active_element().or(trigger);
        }

        self.focusable = view.focusable_within(self.modal);
        self.is_open = true;
        view.add_class(self.modal, ACTIVE_CLASS);
        view.set_attribute(self.modal, "aria-hidden", "false");
        self.lease.acquire(view);

        if let Some(&first) = self.focusable.first() {
            view.focus(first);
        }
        debug!(focusable = self.focusable.len(), "modal opened");
    }

    /// Hide the modal and restore focus to where it was before opening.
    pub fn close<V: View + ?Sized>(&mut self, view: &mut V) {
        let was_open = self.is_open;
        self.is_open = false;
        view.set_attribute(self.modal, "aria-hidden", "true");
        view.remove_class(self.modal, ACTIVE_CLASS);
        self.lease.release(view);

        if was_open {
            if let Some(previous) = self.last_focused.take() {
                view.focus(previous);
            }
            debug!("modal closed");
        }
    }

    /// Route a document click. Returns true if the default action should be
    /// suppressed (triggers are often `#` links).
    pub fn handle_click<V: View + ?Sized>(&mut self, view: &mut V, target: NodeId) -> bool {
        if let Some(trigger) = view.closest_class(target, &self.trigger_class) {
            self.open(view, Some(trigger));
            return true;
        }
        if self.is_open
            && (target == self.modal || view.closest_class(target, &self.close_class).is_some())
        {
            self.close(view);
        }
        false
    }

    /// Enforce Escape-to-close and Tab wrapping while open. Returns true if
    /// the browser's default focus movement must be suppressed.
    pub fn handle_key<V: View + ?Sized>(&mut self, view: &mut V, key: &str, shift: bool) -> bool {
        if !self.is_open {
            return false;
        }
        match key {
            "Escape" => {
                self.close(view);
                false
            }
            "Tab" => self.wrap_focus(view, shift),
            _ => false,
        }
    }

    fn wrap_focus<V: View + ?Sized>(&mut self, view: &mut V, backwards: bool) -> bool {
        let (Some(&first), Some(&last)) = (self.focusable.first(), self.focusable.last()) else {
            return false;
        };
        let active = view.active_element();

        let target = match active {
            Some(a) if !self.focusable.contains(&a) => {
                if backwards {
                    last
                } else {
                    first
                }
            }
            None if backwards => last,
            None => first,
            Some(a) if backwards && a == first => last,
            Some(a) if !backwards && a == last => first,
            Some(_) => return false,
        };
        view.focus(target);
        true
    }
}
