//! Capability traits describing what the controllers may ask of a document.

use landing_common::{NodeId, RootMargin, ScrollBehavior};

/// Structural queries and mutations on the document.
///
/// Lookups return nodes in document order. Mutating a node that no longer
/// exists is a silent no-op, matching how the DOM ignores writes to
/// detached elements.
pub trait ViewTree {
    fn body(&self) -> NodeId;
    fn by_id(&self, id: &str) -> Option<NodeId>;
    fn by_class(&self, class: &str) -> Vec<NodeId>;
    fn by_tag(&self, tag: &str) -> Vec<NodeId>;
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    /// All descendants of `node` in document order, excluding `node` itself.
    fn descendants(&self, node: NodeId) -> Vec<NodeId>;
    /// Lowercase tag name, or `None` if the node does not exist.
    fn tag(&self, node: NodeId) -> Option<&str>;

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);
    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Current value of a form control (empty for other elements).
    fn value(&self, node: NodeId) -> String;
    fn set_value(&mut self, node: NodeId, value: &str);
    fn text(&self, node: NodeId) -> String;
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Detach `node` and its subtree from the document.
    fn remove(&mut self, node: NodeId);

    /// Show a blocking notice to the user.
    fn alert(&mut self, message: &str);

    fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Whether `node` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    /// Nearest inclusive ancestor with the given tag.
    fn closest_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.tag(n) == Some(tag) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// Nearest inclusive ancestor carrying the given class.
    fn closest_class(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.has_class(n, class) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }
}

/// Keyboard focus.
pub trait FocusTarget {
    fn active_element(&self) -> Option<NodeId>;
    fn focus(&mut self, node: NodeId);
    /// Focusable descendants of `container` in tab order (document order).
    fn focusable_within(&self, container: NodeId) -> Vec<NodeId>;
}

/// Scroll position and element geometry, in CSS pixels.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn viewport_width(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Distance from the top of the document to the top of `node`.
    fn offset_top(&self, node: NodeId) -> f64;
    fn offset_height(&self, node: NodeId) -> f64;
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior);
}

/// Asynchronous visibility observation.
///
/// Registering targets replaces any previous registration. Crossings are
/// delivered later as `UiEvent::Intersection` batches.
pub trait VisibilityObserver {
    fn observe(&mut self, targets: &[NodeId], margin: RootMargin);
}

/// Everything a controller may need from the document.
pub trait View: ViewTree + FocusTarget + Viewport + VisibilityObserver {}

impl<T: ViewTree + FocusTarget + Viewport + VisibilityObserver> View for T {}

/// Whether `node` accepts keyboard focus through tabbing.
///
/// Buttons, links with an `href`, non-hidden inputs, selects, textareas and
/// anything with an explicit `tabindex` qualify. A `tabindex` of `-1` or a
/// `disabled` attribute always excludes the element.
pub fn is_focusable<V: ViewTree + ?Sized>(view: &V, node: NodeId) -> bool {
    let Some(tag) = view.tag(node) else {
        return false;
    };
    if view.has_attribute(node, "disabled") {
        return false;
    }
    if let Some(tabindex) = view.attribute(node, "tabindex") {
        return tabindex.trim() != "-1";
    }
    match tag {
        "button" | "select" | "textarea" => true,
        "a" => view.has_attribute(node, "href"),
        "input" => view
            .attribute(node, "type")
            .map_or(true, |t| !t.eq_ignore_ascii_case("hidden")),
        _ => false,
    }
}
