//! Active-section highlighting and smooth in-page anchor scrolling.

use landing_common::{IntersectionEntry, NodeId, RootMargin, ScrollBehavior};
use landing_config::{MountsConfig, ScrollSpyConfig};
use landing_view::View;
use tracing::debug;

/// Class marking the navigation link of the section in view.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug)]
pub struct ScrollSpy {
    navbar: Option<NodeId>,
    /// Observed sections and their fragment ids, in document order.
    sections: Vec<(NodeId, String)>,
    links: Vec<NodeId>,
    active: Option<NodeId>,
    top_padding: f64,
    bottom_percent: f64,
    scroll_offset: f64,
}

impl ScrollSpy {
    /// Collect sections and links and start observing.
    ///
    /// Always mounts: anchor scrolling works even on a page without
    /// observable sections. A missing navbar counts as zero height.
    pub fn mount<V: View + ?Sized>(
        view: &mut V,
        mounts: &MountsConfig,
        config: &ScrollSpyConfig,
    ) -> Self {
        let sections: Vec<(NodeId, String)> = view
            .by_tag("section")
            .into_iter()
            .filter_map(|n| {
                view.attribute(n, "id")
                    .filter(|id| !id.is_empty())
                    .map(|id| (n, id))
            })
            .collect();
        let links = view.by_class(&mounts.nav_link_class);

        let spy = Self {
            navbar: view.by_id(&mounts.navbar),
            sections,
            links,
            active: None,
            top_padding: f64::from(config.top_padding),
            bottom_percent: f64::from(config.bottom_margin_percent),
            scroll_offset: f64::from(config.scroll_offset),
        };
        if spy.sections.is_empty() {
            debug!("no identified sections; scroll spy highlighting disabled");
        } else {
            spy.observe(view);
        }
        spy
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// Observer margin: the active zone starts below the navbar and ends
    /// `bottom_percent` of the viewport above the bottom edge.
    pub fn root_margin<V: View + ?Sized>(&self, view: &V) -> RootMargin {
        RootMargin {
            top_px: self.navbar_height(view) + self.top_padding,
            bottom_percent: self.bottom_percent,
        }
    }

    /// Apply one observer batch.
    ///
    /// Entries are processed in delivery order, so when several sections
    /// enter the zone in the same batch the last one wins.
    pub fn handle_intersections<V: View + ?Sized>(
        &mut self,
        view: &mut V,
        entries: &[IntersectionEntry],
    ) {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let Some((_, id)) = self.sections.iter().find(|(n, _)| *n == entry.target) else {
                continue;
            };
            let fragment = format!("#{id}");

            for &link in &self.links {
                view.remove_class(link, ACTIVE_CLASS);
            }
            self.active = self
                .links
                .iter()
                .copied()
                .find(|&link| view.attribute(link, "href").as_deref() == Some(fragment.as_str()));
            if let Some(link) = self.active {
                view.add_class(link, ACTIVE_CLASS);
            }
            debug!(section = %id, "active section changed");
        }
    }

    /// Intercept clicks on `#fragment` links whose target exists and scroll
    /// to it smoothly, leaving room for the navbar. Returns true when the
    /// default jump must be suppressed.
    pub fn handle_click<V: View + ?Sized>(&mut self, view: &mut V, target: NodeId) -> bool {
        let Some(anchor) = view.closest_tag(target, "a") else {
            return false;
        };
        let Some(href) = view.attribute(anchor, "href") else {
            return false;
        };
        let Some(fragment) = href.strip_prefix('#').filter(|f| !f.is_empty()) else {
            return false;
        };
        let Some(destination) = view.by_id(fragment) else {
            return false;
        };

        let y = (view.offset_top(destination) - self.navbar_height(&*view) - self.scroll_offset)
            .max(0.0);
        view.scroll_to(y, ScrollBehavior::Smooth);
        true
    }

    /// Re-register the observer after a resize, since the navbar height
    /// (and so the margin) may have changed.
    pub fn handle_resize<V: View + ?Sized>(&mut self, view: &mut V) {
        if !self.sections.is_empty() {
            self.observe(view);
        }
    }

    fn observe<V: View + ?Sized>(&self, view: &mut V) {
        let targets: Vec<NodeId> = self.sections.iter().map(|(n, _)| *n).collect();
        let margin = self.root_margin(&*view);
        debug!(sections = targets.len(), margin = %margin.to_css(), "observing sections");
        view.observe(&targets, margin);
    }

    fn navbar_height<V: View + ?Sized>(&self, view: &V) -> f64 {
        self.navbar.map_or(0.0, |n| view.offset_height(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{landing_page, node, DESKTOP_WIDTH};
    use landing_view::{MemoryDom, ViewTree, Viewport};

    fn mounted() -> (MemoryDom, ScrollSpy) {
        let mut dom = landing_page(DESKTOP_WIDTH);
        let spy = ScrollSpy::mount(&mut dom, &MountsConfig::default(), &ScrollSpyConfig::default());
        (dom, spy)
    }

    fn active_links(dom: &MemoryDom) -> Vec<NodeId> {
        dom.by_class("nav-link")
            .into_iter()
            .filter(|&l| dom.has_class(l, ACTIVE_CLASS))
            .collect()
    }

    #[test]
    fn observes_sections_below_navbar() {
        let (dom, _) = mounted();
        assert_eq!(dom.observed().len(), 3);
        // 70px navbar + 20px padding, upper half of the viewport.
        assert_eq!(
            dom.root_margin(),
            RootMargin {
                top_px: 90.0,
                bottom_percent: 50.0
            }
        );
    }

    #[test]
    fn only_first_section_intersecting_activates_its_link() {
        let (mut dom, mut spy) = mounted();
        let entries = dom.take_intersections();
        spy.handle_intersections(&mut dom, &entries);

        let home_link = node(&dom, "link-home");
        assert_eq!(active_links(&dom), vec![home_link]);
        assert_eq!(spy.active(), Some(home_link));
    }

    #[test]
    fn scrolling_moves_highlight() {
        let (mut dom, mut spy) = mounted();
        let entries = dom.take_intersections();
        spy.handle_intersections(&mut dom, &entries);

        // Zone becomes [1590, 1900): only #contact is inside.
        dom.set_scroll_y(1500.0);
        let entries = dom.take_intersections();
        spy.handle_intersections(&mut dom, &entries);

        assert_eq!(active_links(&dom), vec![node(&dom, "link-contact")]);
    }

    #[test]
    fn last_intersecting_entry_in_batch_wins() {
        let (mut dom, mut spy) = mounted();
        let home = node(&dom, "home");
        let services = node(&dom, "services");
        let batch = [
            IntersectionEntry {
                target: services,
                is_intersecting: true,
            },
            IntersectionEntry {
                target: home,
                is_intersecting: true,
            },
        ];
        spy.handle_intersections(&mut dom, &batch);
        assert_eq!(active_links(&dom), vec![node(&dom, "link-home")]);
    }

    #[test]
    fn leaving_entries_do_not_clear_highlight() {
        let (mut dom, mut spy) = mounted();
        let home = node(&dom, "home");
        spy.handle_intersections(
            &mut dom,
            &[IntersectionEntry {
                target: home,
                is_intersecting: true,
            }],
        );
        spy.handle_intersections(
            &mut dom,
            &[IntersectionEntry {
                target: home,
                is_intersecting: false,
            }],
        );
        assert_eq!(active_links(&dom), vec![node(&dom, "link-home")]);
    }

    #[test]
    fn anchor_click_scrolls_below_navbar() {
        let (mut dom, mut spy) = mounted();
        let link = node(&dom, "link-services");
        assert!(spy.handle_click(&mut dom, link));
        // 700 - 70 - 20
        assert_eq!(dom.scroll_y(), 610.0);
    }

    #[test]
    fn anchor_scroll_clamps_at_top() {
        let (mut dom, mut spy) = mounted();
        dom.set_scroll_y(900.0);
        let label = node(&dom, "link-home");
        assert!(spy.handle_click(&mut dom, label));
        assert_eq!(dom.scroll_y(), 0.0);
    }

    #[test]
    fn unresolvable_anchors_fall_through() {
        let (mut dom, mut spy) = mounted();
        dom.take_commands();
        let bare = node(&dom, "bare-anchor");
        let dead = node(&dom, "dead-anchor");
        let plain = node(&dom, "hero-cta");
        assert!(!spy.handle_click(&mut dom, bare));
        assert!(!spy.handle_click(&mut dom, dead));
        assert!(!spy.handle_click(&mut dom, plain));
        assert!(dom.commands().is_empty());
    }

    #[test]
    fn resize_reobserves_with_new_navbar_height() {
        let (mut dom, mut spy) = mounted();
        dom.take_commands();
        spy.handle_resize(&mut dom);
        assert_eq!(dom.commands().len(), 1);
    }
}
