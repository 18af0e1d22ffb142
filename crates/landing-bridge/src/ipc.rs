//! Message protocol between the host document and the controllers.
//!
//! Messages flow in both directions:
//! - **Host -> Rust**: the page posts `{"kind": ..., "payload": ...}` JSON,
//!   parsed into an [`IpcMessage`].
//! - **Rust -> Host**: each handled message yields a [`HostReply`] whose
//!   `script` replays the controllers' mutations against the real document.

use landing_common::{BridgeError, NodeId, UiEvent};
use landing_view::{Snapshot, ViewCommand};
use serde::{Deserialize, Serialize};

use crate::script::render_commands;

/// A raw message from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type.
    pub kind: String,
    /// Kind-specific payload (arbitrary JSON).
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Host viewport state, sent whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

/// The user changed a field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputChange {
    pub node: NodeId,
    pub value: String,
}

/// The host moved focus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusChange {
    pub node: Option<NodeId>,
}

/// A decoded message.
#[derive(Debug, Clone)]
pub enum HostMessage {
    /// Replace the mirror with a fresh document and mount the page.
    Snapshot(Snapshot),
    Viewport(ViewportState),
    Input(InputChange),
    Focus(FocusChange),
    /// A user or lifecycle event to route to the controllers.
    Event(UiEvent),
}

impl IpcMessage {
    /// Parse a message from a raw JSON string (from the host's postMessage).
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::InvalidMessage(e.to_string()))
    }

    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Decode the payload according to `kind`.
    pub fn decode(self) -> Result<HostMessage, BridgeError> {
        fn payload<T: serde::de::DeserializeOwned>(
            kind: &str,
            value: serde_json::Value,
        ) -> Result<T, BridgeError> {
            serde_json::from_value(value)
                .map_err(|e| BridgeError::InvalidMessage(format!("{kind}: {e}")))
        }

        match self.kind.as_str() {
            "snapshot" => serde_json::from_value(self.payload)
                .map(HostMessage::Snapshot)
                .map_err(|e| BridgeError::Snapshot(e.to_string())),
            "viewport" => payload(&self.kind, self.payload).map(HostMessage::Viewport),
            "input" => payload(&self.kind, self.payload).map(HostMessage::Input),
            "focus" => payload(&self.kind, self.payload).map(HostMessage::Focus),
            "event" => payload(&self.kind, self.payload).map(HostMessage::Event),
            _ => Err(BridgeError::UnknownKind(self.kind)),
        }
    }
}

/// What the host must do after a message was handled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostReply {
    /// Suppress the browser's default action for the event.
    pub prevent_default: bool,
    /// Mutations in application order.
    pub commands: Vec<ViewCommand>,
    /// `commands` rendered as JavaScript.
    pub script: String,
}

impl HostReply {
    pub fn new(prevent_default: bool, commands: Vec<ViewCommand>) -> Self {
        let script = render_commands(&commands);
        Self {
            prevent_default,
            commands,
            script,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.prevent_default && self.commands.is_empty()
    }
}

/// Host-side bootstrap, injected before the page's own scripts.
///
/// Tags every element with `data-node` in the same pre-order the mirror uses
/// and exposes `window.landing.send` plus the observer hook the rendered
/// scripts call.
pub const HOST_INIT_SCRIPT: &str = r#"
(function() {
    var next = 0;
    (function tag(el) {
        el.setAttribute('data-node', String(next++));
        for (var i = 0; i < el.children.length; i++) tag(el.children[i]);
    })(document.body);

    window.landing = window.landing || {};
    window.landing.send = function(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload || null }));
    };
    window.landing.observe = function(targets, rootMargin) {
        if (window.landing._observer) window.landing._observer.disconnect();
        var observer = new IntersectionObserver(function(entries) {
            window.landing.send('event', {
                type: 'Intersection',
                data: entries.map(function(e) {
                    return {
                        target: Number(e.target.getAttribute('data-node')),
                        is_intersecting: e.isIntersecting
                    };
                })
            });
        }, { rootMargin: rootMargin, threshold: 0 });
        targets.forEach(function(n) {
            var el = document.querySelector('[data-node="' + n + '"]');
            if (el) observer.observe(el);
        });
        window.landing._observer = observer;
    };
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_event_message() {
        let msg = IpcMessage::from_json(
            r#"{"kind":"event","payload":{"type":"Click","data":{"target":7}}}"#,
        )
        .unwrap();
        match msg.decode().unwrap() {
            HostMessage::Event(UiEvent::Click { target }) => assert_eq!(target, NodeId(7)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn payload_defaults_to_null() {
        let msg = IpcMessage::from_json(r#"{"kind":"snapshot"}"#).unwrap();
        assert!(msg.payload.is_null());
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = IpcMessage::from_json("not json").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidMessage(_)));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = IpcMessage::new("teleport", json!({})).decode().unwrap_err();
        assert!(matches!(err, BridgeError::UnknownKind(k) if k == "teleport"));
    }

    #[test]
    fn malformed_snapshot_is_snapshot_error() {
        let err = IpcMessage::new("snapshot", json!({"body": "nope"}))
            .decode()
            .unwrap_err();
        assert!(matches!(err, BridgeError::Snapshot(_)));
    }

    #[test]
    fn malformed_payload_names_kind() {
        let err = IpcMessage::new("viewport", json!({"width": "wide"}))
            .decode()
            .unwrap_err();
        assert!(matches!(err, BridgeError::InvalidMessage(m) if m.starts_with("viewport")));
    }

    #[test]
    fn decodes_state_sync_messages() {
        let msg = IpcMessage::new("viewport", json!({"width": 375.0, "height": 700.0}));
        match msg.decode().unwrap() {
            HostMessage::Viewport(v) => {
                assert_eq!(v.width, 375.0);
                assert_eq!(v.scroll_y, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }

        let msg = IpcMessage::new("focus", json!({"node": null}));
        assert!(matches!(
            msg.decode().unwrap(),
            HostMessage::Focus(FocusChange { node: None })
        ));
    }

    #[test]
    fn empty_reply_has_empty_script() {
        let reply = HostReply::new(false, Vec::new());
        assert!(reply.is_empty());
        assert!(reply.script.is_empty());
    }
}
