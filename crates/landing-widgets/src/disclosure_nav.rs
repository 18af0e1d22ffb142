//! Mobile navigation menu (Closed ⇄ Open).

use landing_common::NodeId;
use landing_config::{MountsConfig, NavConfig};
use landing_view::{ScrollLease, ScrollLock, View};
use tracing::debug;

/// Class that reveals the menu panel.
pub const OPEN_CLASS: &str = "open";

/// Open/close state machine for the collapsible navigation panel.
///
/// The toggle's `aria-expanded`, the panel's `open` class and the scroll
/// lease always follow `is_open`.
#[derive(Debug)]
pub struct DisclosureNav {
    toggle: NodeId,
    menu: NodeId,
    mobile_breakpoint: f64,
    is_open: bool,
    lease: ScrollLease,
}

impl DisclosureNav {
    /// Bind to the toggle and menu. Returns `None` if either is missing.
    pub fn mount<V: View + ?Sized>(
        view: &mut V,
        mounts: &MountsConfig,
        config: &NavConfig,
        lock: &ScrollLock,
    ) -> Option<Self> {
        let Some(toggle) = view.by_id(&mounts.nav_toggle) else {
            debug!(id = %mounts.nav_toggle, "nav toggle not found; mobile nav disabled");
            return None;
        };
        let Some(menu) = view.by_id(&mounts.nav_menu) else {
            debug!(id = %mounts.nav_menu, "nav menu not found; mobile nav disabled");
            return None;
        };

        view.set_attribute(toggle, "aria-expanded", "false");
        Some(Self {
            toggle,
            menu,
            mobile_breakpoint: f64::from(config.mobile_breakpoint),
            is_open: false,
            lease: lock.lease(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open<V: View + ?Sized>(&mut self, view: &mut V) {
        self.is_open = true;
        view.set_attribute(self.toggle, "aria-expanded", "true");
        view.add_class(self.toggle, "active");
        view.add_class(self.menu, OPEN_CLASS);
        self.lease.acquire(view);
        debug!("mobile nav opened");
    }

    /// Close the menu and hand focus back to the toggle.
    ///
    /// Closing an already-closed menu reapplies the closed attributes but
    /// leaves focus where it is.
    pub fn close<V: View + ?Sized>(&mut self, view: &mut V) {
        let was_open = self.is_open;
        self.is_open = false;
        view.set_attribute(self.toggle, "aria-expanded", "false");
        view.remove_class(self.toggle, "active");
        view.remove_class(self.menu, OPEN_CLASS);
        self.lease.release(view);
        if was_open {
            view.focus(self.toggle);
            debug!("mobile nav closed");
        }
    }

    pub fn toggle<V: View + ?Sized>(&mut self, view: &mut V) {
        if self.is_open {
            self.close(view);
        } else {
            self.open(view);
        }
    }

    /// Route a document click.
    ///
    /// The toggle flips the menu. While open, a click outside both toggle
    /// and panel dismisses it, and so does following a link inside the
    /// panel on a mobile-width viewport.
    pub fn handle_click<V: View + ?Sized>(&mut self, view: &mut V, target: NodeId) {
        if view.contains(self.toggle, target) {
            self.toggle(view);
            return;
        }
        if !self.is_open {
            return;
        }
        if !view.contains(self.menu, target) {
            self.close(view);
            return;
        }
        let on_link = view
            .closest_tag(target, "a")
            .is_some_and(|link| view.contains(self.menu, link));
        if on_link && self.is_mobile(&*view) {
            self.close(view);
        }
    }

    pub fn handle_key<V: View + ?Sized>(&mut self, view: &mut V, key: &str) {
        if key == "Escape" && self.is_open {
            self.close(view);
        }
    }

    /// Close a menu left open when the viewport grows past the breakpoint.
    pub fn handle_resize<V: View + ?Sized>(&mut self, view: &mut V) {
        if self.is_open && !self.is_mobile(&*view) {
            self.close(view);
        }
    }

    fn is_mobile<V: View + ?Sized>(&self, view: &V) -> bool {
        view.viewport_width() <= self.mobile_breakpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{landing_page, node, DESKTOP_WIDTH, MOBILE_WIDTH};
    use landing_view::{FocusTarget, MemoryDom, ViewTree, SCROLL_LOCK_CLASS};

    fn mounted(width: f64) -> (MemoryDom, DisclosureNav, ScrollLock) {
        let mut dom = landing_page(width);
        let lock = ScrollLock::new();
        let nav = DisclosureNav::mount(
            &mut dom,
            &MountsConfig::default(),
            &NavConfig::default(),
            &lock,
        )
        .unwrap();
        (dom, nav, lock)
    }

    fn assert_in_sync(dom: &MemoryDom, nav: &DisclosureNav) {
        let toggle = node(dom, "nav-toggle");
        let menu = node(dom, "nav-menu");
        let expected = if nav.is_open() { "true" } else { "false" };
        assert_eq!(dom.attribute(toggle, "aria-expanded").as_deref(), Some(expected));
        assert_eq!(dom.has_class(menu, OPEN_CLASS), nav.is_open());
    }

    #[test]
    fn mounts_closed_with_attributes_synced() {
        let (dom, nav, _) = mounted(MOBILE_WIDTH);
        assert!(!nav.is_open());
        assert_in_sync(&dom, &nav);
    }

    #[test]
    fn missing_menu_disables_component() {
        let mut dom = MemoryDom::new(MOBILE_WIDTH, 800.0);
        let body = dom.body();
        dom.append(body, &landing_view::ElementSpec::new("button").id("nav-toggle"));
        let nav = DisclosureNav::mount(
            &mut dom,
            &MountsConfig::default(),
            &NavConfig::default(),
            &ScrollLock::new(),
        );
        assert!(nav.is_none());
    }

    #[test]
    fn open_close_sequences_end_in_last_state() {
        let (mut dom, mut nav, lock) = mounted(MOBILE_WIDTH);
        nav.open(&mut dom);
        nav.close(&mut dom);
        nav.open(&mut dom);
        assert!(nav.is_open());
        assert_in_sync(&dom, &nav);
        assert!(lock.is_locked());

        nav.open(&mut dom);
        assert_eq!(lock.holders(), 1, "redundant open must not double count");

        nav.close(&mut dom);
        nav.close(&mut dom);
        assert!(!nav.is_open());
        assert_in_sync(&dom, &nav);
        assert!(!dom.has_class(dom.body(), SCROLL_LOCK_CLASS));
    }

    #[test]
    fn toggle_click_flips_state() {
        let (mut dom, mut nav, _) = mounted(MOBILE_WIDTH);
        let toggle = node(&dom, "nav-toggle");
        nav.handle_click(&mut dom, toggle);
        assert!(nav.is_open());
        nav.handle_click(&mut dom, toggle);
        assert!(!nav.is_open());
        assert_eq!(dom.active_element(), Some(toggle));
    }

    #[test]
    fn outside_click_closes_and_returns_focus() {
        let (mut dom, mut nav, _) = mounted(MOBILE_WIDTH);
        nav.open(&mut dom);
        let footer = node(&dom, "footer");
        nav.handle_click(&mut dom, footer);
        assert!(!nav.is_open());
        assert_eq!(dom.active_element(), Some(node(&dom, "nav-toggle")));
    }

    #[test]
    fn click_inside_panel_off_link_keeps_open() {
        let (mut dom, mut nav, _) = mounted(MOBILE_WIDTH);
        nav.open(&mut dom);
        let menu = node(&dom, "nav-menu");
        nav.handle_click(&mut dom, menu);
        assert!(nav.is_open());
    }

    #[test]
    fn link_click_closes_on_mobile() {
        let (mut dom, mut nav, _) = mounted(MOBILE_WIDTH);
        nav.open(&mut dom);
        // Click lands on the label inside the link.
        let label = node(&dom, "link-contact-label");
        nav.handle_click(&mut dom, label);
        assert!(!nav.is_open());
    }

    #[test]
    fn link_click_keeps_open_on_desktop() {
        let (mut dom, mut nav, _) = mounted(DESKTOP_WIDTH);
        nav.open(&mut dom);
        let link = node(&dom, "link-services");
        nav.handle_click(&mut dom, link);
        assert!(nav.is_open());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let (mut dom, mut nav, _) = mounted(767.0);
        nav.open(&mut dom);
        let link = node(&dom, "link-home");
        nav.handle_click(&mut dom, link);
        assert!(!nav.is_open());
    }

    #[test]
    fn escape_closes_only_when_open() {
        let (mut dom, mut nav, _) = mounted(MOBILE_WIDTH);
        let cta = node(&dom, "hero-cta");
        dom.place_focus(Some(cta));

        nav.handle_key(&mut dom, "Escape");
        assert_eq!(dom.active_element(), Some(cta), "closed menu must not steal focus");

        nav.open(&mut dom);
        nav.handle_key(&mut dom, "Enter");
        assert!(nav.is_open());
        nav.handle_key(&mut dom, "Escape");
        assert!(!nav.is_open());
    }

    #[test]
    fn resize_to_desktop_closes() {
        let (mut dom, mut nav, _) = mounted(MOBILE_WIDTH);
        nav.open(&mut dom);
        nav.handle_resize(&mut dom);
        assert!(nav.is_open());

        dom.set_viewport(DESKTOP_WIDTH, 800.0);
        nav.handle_resize(&mut dom);
        assert!(!nav.is_open());
    }
}
