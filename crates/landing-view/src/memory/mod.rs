//! In-memory document implementing every view capability.
//!
//! Used as the fake view tree in tests and as the host-side mirror in the
//! bridge. Each mutation is applied locally and also appended to a journal
//! of [`ViewCommand`]s so the host can replay it.

mod element;


pub use element::{ElementSpec, Snapshot};

use std::collections::{BTreeMap, HashMap};

use landing_common::{IntersectionEntry, NodeId, RootMargin, ScrollBehavior};

use crate::command::ViewCommand;
use crate::tree::{is_focusable, FocusTarget, ViewTree, Viewport, VisibilityObserver};

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    value: String,
    text: String,
    top: f64,
    height: f64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    removed: bool,
}

impl Element {
    fn from_spec(spec: &ElementSpec, parent: Option<NodeId>) -> Self {
        let mut attributes = spec.attributes.clone();
        if let Some(id) = &spec.id {
            attributes.insert("id".into(), id.clone());
        }
        Self {
            tag: spec.tag.to_ascii_lowercase(),
            classes: spec.classes.clone(),
            attributes,
            value: spec.value.clone(),
            text: spec.text.clone(),
            top: spec.top,
            height: spec.height,
            parent,
            children: Vec::new(),
            removed: false,
        }
    }
}

/// A document held entirely in memory.
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Element>,
    active: Option<NodeId>,
    scroll_y: f64,
    width: f64,
    height: f64,
    observed: Vec<NodeId>,
    margin: RootMargin,
    /// Last intersection state reported per observed target.
    reported: HashMap<NodeId, bool>,
    journal: Vec<ViewCommand>,
    alerts: Vec<String>,
}

impl MemoryDom {
    /// Create an empty document (just `<body>`) with the given viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        let body = Element::from_spec(&ElementSpec::new("body"), None);
        Self {
            nodes: vec![body],
            active: None,
            scroll_y: 0.0,
            width,
            height,
            observed: Vec::new(),
            margin: RootMargin::default(),
            reported: HashMap::new(),
            journal: Vec::new(),
            alerts: Vec::new(),
        }
    }

    /// Build a document from a serialized snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut dom = Self::new(snapshot.width, snapshot.height);
        dom.scroll_y = snapshot.scroll_y;
        let body = dom.body();
        for spec in &snapshot.body {
            dom.append(body, spec);
        }
        dom
    }

    /// Append `spec` (and its subtree) as the last child of `parent`.
    ///
    /// Returns the new element's id. Appending is setup, not a controller
    /// mutation, so it is not journaled.
    pub fn append(&mut self, parent: NodeId, spec: &ElementSpec) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Element::from_spec(spec, Some(parent)));
        if let Some(p) = self.nodes.get_mut(parent.0 as usize) {
            p.children.push(id);
        }
        for child in &spec.children {
            self.append(id, child);
        }
        id
    }

    /// Whether `node` exists and is still attached.
    pub fn exists(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    /// Simulate the user scrolling (not journaled).
    pub fn set_scroll_y(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    /// Simulate a window resize (not journaled).
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Simulate the user typing into a field (not journaled).
    pub fn type_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.get_mut(node) {
            el.value = value.to_string();
        }
    }

    /// Simulate the user moving focus (not journaled).
    pub fn place_focus(&mut self, node: Option<NodeId>) {
        self.active = node.filter(|n| self.exists(*n));
    }

    pub fn commands(&self) -> &[ViewCommand] {
        &self.journal
    }

    /// Drain the mutation journal.
    pub fn take_commands(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.journal)
    }

    /// Every notice shown through [`ViewTree::alert`], oldest first.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn observed(&self) -> &[NodeId] {
        &self.observed
    }

    pub fn root_margin(&self) -> RootMargin {
        self.margin
    }

    /// Compute the intersection batch the observer would deliver now.
    ///
    /// Only targets whose state changed since the last call are reported;
    /// the first call after [`VisibilityObserver::observe`] reports every
    /// target. Entries come back in registration order.
    pub fn take_intersections(&mut self) -> Vec<IntersectionEntry> {
        let zone_top = self.scroll_y + self.margin.top_px;
        let zone_bottom =
            self.scroll_y + self.height * (1.0 - self.margin.bottom_percent / 100.0);

        let mut entries = Vec::new();
        for &target in &self.observed {
            let Some(el) = self.get(target) else {
                continue;
            };
            let is_intersecting = el.top < zone_bottom && el.top + el.height > zone_top;
            if self.reported.get(&target) != Some(&is_intersecting) {
                entries.push(IntersectionEntry {
                    target,
                    is_intersecting,
                });
            }
        }
        for entry in &entries {
            self.reported.insert(entry.target, entry.is_intersecting);
        }
        entries
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0 as usize).filter(|el| !el.removed)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes
            .get_mut(node.0 as usize)
            .filter(|el| !el.removed)
    }

    fn walk(&self, node: NodeId, out: &mut Vec<NodeId>) {
        if let Some(el) = self.get(node) {
            for &child in &el.children {
                if self.exists(child) {
                    out.push(child);
                    self.walk(child, out);
                }
            }
        }
    }

    fn all_nodes(&self) -> Vec<NodeId> {
        let body = self.body();
        let mut out = vec![body];
        self.walk(body, &mut out);
        out
    }

    fn record(&mut self, command: ViewCommand) {
        self.journal.push(command);
    }
}

impl ViewTree for MemoryDom {
    fn body(&self) -> NodeId {
        NodeId(0)
    }

    fn by_id(&self, id: &str) -> Option<NodeId> {
        self.all_nodes()
            .into_iter()
            .find(|&n| self.attribute(n, "id").as_deref() == Some(id))
    }

    fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.all_nodes()
            .into_iter()
            .filter(|&n| self.has_class(n, class))
            .collect()
    }

    fn by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.all_nodes()
            .into_iter()
            .filter(|&n| self.tag(n) == Some(tag))
            .collect()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|el| el.parent)
    }

    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk(node, &mut out);
        out
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|el| el.tag.as_str())
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.get(node).and_then(|el| el.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(el) = self.get_mut(node) {
            el.attributes.insert(name.to_string(), value.to_string());
            self.record(ViewCommand::SetAttribute {
                node,
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.get_mut(node) {
            el.attributes.remove(name);
            self.record(ViewCommand::RemoveAttribute {
                node,
                name: name.to_string(),
            });
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.get_mut(node) {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
            self.record(ViewCommand::AddClass {
                node,
                class: class.to_string(),
            });
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.get_mut(node) {
            el.classes.retain(|c| c != class);
            self.record(ViewCommand::RemoveClass {
                node,
                class: class.to_string(),
            });
        }
    }

    fn value(&self, node: NodeId) -> String {
        self.get(node).map(|el| el.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.get_mut(node) {
            el.value = value.to_string();
            self.record(ViewCommand::SetValue {
                node,
                value: value.to_string(),
            });
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.get(node).map(|el| el.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(el) = self.get_mut(node) {
            el.text = text.to_string();
            self.record(ViewCommand::SetText {
                node,
                text: text.to_string(),
            });
        }
    }

    fn remove(&mut self, node: NodeId) {
        if node == self.body() || !self.exists(node) {
            return;
        }
        let mut subtree = vec![node];
        self.walk(node, &mut subtree);

        if let Some(parent) = self.parent(node) {
            if let Some(p) = self.get_mut(parent) {
                p.children.retain(|&c| c != node);
            }
        }
        for n in &subtree {
            if let Some(el) = self.nodes.get_mut(n.0 as usize) {
                el.removed = true;
            }
        }
        if self.active.is_some_and(|a| subtree.contains(&a)) {
            self.active = None;
        }
        self.record(ViewCommand::Remove { node });
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
        self.record(ViewCommand::Alert {
            message: message.to_string(),
        });
    }
}

impl FocusTarget for MemoryDom {
    fn active_element(&self) -> Option<NodeId> {
        self.active.filter(|&n| self.exists(n))
    }

    fn focus(&mut self, node: NodeId) {
        if self.exists(node) {
            self.active = Some(node);
            self.record(ViewCommand::Focus { node });
        }
    }

    fn focusable_within(&self, container: NodeId) -> Vec<NodeId> {
        self.descendants(container)
            .into_iter()
            .filter(|&n| is_focusable(self, n))
            .collect()
    }
}

impl Viewport for MemoryDom {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn viewport_height(&self) -> f64 {
        self.height
    }

    fn offset_top(&self, node: NodeId) -> f64 {
        self.get(node).map_or(0.0, |el| el.top)
    }

    fn offset_height(&self, node: NodeId) -> f64 {
        self.get(node).map_or(0.0, |el| el.height)
    }

    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        self.scroll_y = y.max(0.0);
        self.record(ViewCommand::ScrollTo { y, behavior });
    }
}

impl VisibilityObserver for MemoryDom {
    fn observe(&mut self, targets: &[NodeId], margin: RootMargin) {
        self.observed = targets.to_vec();
        self.margin = margin;
        self.reported.clear();
        self.record(ViewCommand::Observe {
            targets: targets.to_vec(),
            margin,
        });
    }
}
