use serde::{Deserialize, Serialize};

use crate::types::NodeId;

/// A visibility crossing reported by the intersection observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
}

/// Input delivered to the page controllers.
///
/// Mirrors the document's event streams; every variant is handled on the
/// single UI thread in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiEvent {
    /// The window `load` event (all resources fetched).
    Load,
    Click {
        target: NodeId,
    },
    KeyDown {
        key: String,
        #[serde(default)]
        shift: bool,
    },
    Scroll,
    Resize,
    Intersection(Vec<IntersectionEntry>),
    /// The contact form's submit event.
    Submit,
    /// Timer heartbeat; lets deferred work (overlay removal, debounced
    /// resize) run without an input event.
    Tick,
    #[serde(other)]
    Unknown,
}

impl UiEvent {
    pub fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    pub fn key(key: impl Into<String>) -> Self {
        Self::KeyDown {
            key: key.into(),
            shift: false,
        }
    }

    pub fn shift_key(key: impl Into<String>) -> Self {
        Self::KeyDown {
            key: key.into(),
            shift: true,
        }
    }
}
