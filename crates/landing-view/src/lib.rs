//! View tree capabilities for the page controllers.
//!
//! Controllers never talk to a rendering engine directly. They see the
//! document through the traits in [`tree`], which lets the same state
//! machines run against a browser bridge or the in-memory [`MemoryDom`].
//!
//! Also home to the small shared utilities the controllers lean on:
//! - [`ScrollLock`]: reference-counted body scroll lock
//! - [`Throttle`] / [`Debounce`]: rate limiting for scroll and resize

pub mod command;
pub mod memory;
pub mod scroll_lock;
pub mod throttle;
pub mod tree;

pub use command::ViewCommand;
pub use memory::{ElementSpec, MemoryDom, Snapshot};
pub use scroll_lock::{ScrollLease, ScrollLock, SCROLL_LOCK_CLASS};
pub use throttle::{Debounce, Throttle};
pub use tree::{is_focusable, FocusTarget, View, ViewTree, Viewport, VisibilityObserver};
