//! Page controllers.
//!
//! Each controller owns one region of the document and its state machine:
//! - [`PreloadGate`]: fades and removes the loading overlay
//! - [`StickyBar`]: marks the navbar once the page is scrolled
//! - [`DisclosureNav`]: mobile menu open/close
//! - [`ScrollSpy`]: active-section highlighting and anchor scrolling
//! - [`OptionSelector`]: business-type card group
//! - [`SubmitFlow`]: contact form validation and submission
//! - [`FocusTrapModal`]: scheduling dialog with focus containment
//!
//! [`Page`] mounts them all against a [`landing_view::View`] and routes
//! events to them.

pub mod disclosure_nav;
pub mod focus_trap_modal;
pub mod option_selector;
pub mod page;
pub mod preload_gate;
pub mod scroll_spy;
pub mod sticky_bar;
pub mod submit_flow;

#[cfg(test)]
pub(crate) mod fixtures;

pub use disclosure_nav::DisclosureNav;
pub use focus_trap_modal::FocusTrapModal;
pub use option_selector::OptionSelector;
pub use page::{Dispatch, Page};
pub use preload_gate::PreloadGate;
pub use scroll_spy::ScrollSpy;
pub use sticky_bar::StickyBar;
pub use submit_flow::{
    FormPayload, FormTransport, HttpTransport, PendingSubmit, SubmitFlow, SubmitOutcome,
    SubmitStart, SubmitState,
};
