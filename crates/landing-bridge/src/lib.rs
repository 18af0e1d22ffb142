//! Host bridge for the landing page controllers.
//!
//! Provides:
//! - A JSON message protocol (host -> Rust) with state-sync and event kinds
//! - A document mirror that the controllers mutate
//! - Replay of those mutations as JavaScript (Rust -> host)

pub mod ipc;
pub mod script;
pub mod session;


pub use ipc::{HostMessage, HostReply, IpcMessage, ViewportState, HOST_INIT_SCRIPT};
pub use script::{render_command, render_commands};
pub use session::BridgeSession;
