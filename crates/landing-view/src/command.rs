//! Serializable record of every mutation a controller made to the view.

use landing_common::{NodeId, RootMargin, ScrollBehavior};
use serde::{Deserialize, Serialize};

/// One mutation, in the order it was applied.
///
/// Hosts replay these against the real document after each dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ViewCommand {
    SetAttribute {
        node: NodeId,
        name: String,
        value: String,
    },
    RemoveAttribute {
        node: NodeId,
        name: String,
    },
    AddClass {
        node: NodeId,
        class: String,
    },
    RemoveClass {
        node: NodeId,
        class: String,
    },
    SetValue {
        node: NodeId,
        value: String,
    },
    SetText {
        node: NodeId,
        text: String,
    },
    Focus {
        node: NodeId,
    },
    ScrollTo {
        y: f64,
        behavior: ScrollBehavior,
    },
    Remove {
        node: NodeId,
    },
    Observe {
        targets: Vec<NodeId>,
        margin: RootMargin,
    },
    Alert {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_tagged_by_op() {
        let cmd = ViewCommand::AddClass {
            node: NodeId(4),
            class: "open".into(),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"op":"add_class","node":4,"class":"open"}"#);
    }

    #[test]
    fn scroll_to_deserializes() {
        let json = r#"{"op":"scroll_to","y":120.0,"behavior":"smooth"}"#;
        let cmd: ViewCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            ViewCommand::ScrollTo {
                y: 120.0,
                behavior: ScrollBehavior::Smooth
            }
        );
    }
}
