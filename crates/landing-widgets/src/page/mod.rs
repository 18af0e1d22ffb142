//! Composition root: mounts every controller and routes events to them.


use std::sync::Arc;
use std::time::{Duration, Instant};

use landing_common::{NodeId, SubmitError, UiEvent};
use landing_config::LandingConfig;
use landing_view::{Debounce, ScrollLock, View};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::{
    DisclosureNav, FocusTrapModal, FormTransport, OptionSelector, PendingSubmit, PreloadGate,
    ScrollSpy, StickyBar, SubmitFlow, SubmitOutcome, SubmitStart,
};

/// Result of routing one event.
#[derive(Debug, Default)]
pub struct Dispatch {
    /// The host must suppress the browser's default action.
    pub prevent_default: bool,
    /// Set when the event started a submission that settled immediately
    /// (ignored, abandoned, invalid or missing an endpoint). A submission
    /// that goes to the network reports through `settled` instead.
    pub submission: Option<SubmitOutcome>,
    /// An in-flight submission whose request completed before this event.
    pub settled: Option<SubmitOutcome>,
}

/// A request running on its own task while the page keeps handling events.
struct InFlight {
    pending: PendingSubmit,
    task: JoinHandle<Result<u16, SubmitError>>,
}

/// Every controller of the landing page, each independently optional.
///
/// Form requests run on a spawned tokio task, so `dispatch` must be called
/// from within a runtime.
pub struct Page<T: FormTransport + 'static> {
    preload: Option<PreloadGate>,
    sticky: Option<StickyBar>,
    nav: Option<DisclosureNav>,
    spy: ScrollSpy,
    selector: Option<OptionSelector>,
    form: Option<SubmitFlow>,
    modal: Option<FocusTrapModal>,
    resize: Debounce,
    scroll_lock: ScrollLock,
    transport: Arc<T>,
    in_flight: Option<InFlight>,
}

impl<T: FormTransport + 'static> Page<T> {
    /// Mount every controller. A missing mount point disables only the
    /// controller that needs it.
    pub fn mount<V: View + ?Sized>(view: &mut V, config: &LandingConfig, transport: T) -> Self {
        let mounts = &config.mounts;
        let scroll_lock = ScrollLock::new();

        let page = Self {
            preload: PreloadGate::mount(&*view, mounts, &config.preload),
            sticky: StickyBar::mount(view, mounts, &config.sticky),
            nav: DisclosureNav::mount(view, mounts, &config.nav, &scroll_lock),
            spy: ScrollSpy::mount(view, mounts, &config.scroll_spy),
            selector: OptionSelector::mount(view, mounts, &config.form),
            form: SubmitFlow::mount(&*view, mounts, &config.form),
            modal: FocusTrapModal::mount(view, mounts, &config.modal, &scroll_lock),
            resize: Debounce::new(Duration::from_millis(config.nav.resize_debounce_ms)),
            scroll_lock,
            transport: Arc::new(transport),
            in_flight: None,
        };

        info!(
            preload = page.preload.is_some(),
            sticky = page.sticky.is_some(),
            nav = page.nav.is_some(),
            selector = page.selector.is_some(),
            form = page.form.is_some(),
            modal = page.modal.is_some(),
            "landing page mounted"
        );
        page
    }

    pub fn nav(&self) -> Option<&DisclosureNav> {
        self.nav.as_ref()
    }

    pub fn modal(&self) -> Option<&FocusTrapModal> {
        self.modal.as_ref()
    }

    pub fn selector(&self) -> Option<&OptionSelector> {
        self.selector.as_ref()
    }

    pub fn form(&self) -> Option<&SubmitFlow> {
        self.form.as_ref()
    }

    pub fn spy(&self) -> &ScrollSpy {
        &self.spy
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }

    /// A form request is on the network.
    pub fn submission_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Wait for the in-flight request, if any, and settle the form with its
    /// answer. A success also resets the business-type selection.
    ///
    /// Cancel safe: dropping the returned future leaves the request in flight.
    pub async fn settle_submission<V: View + ?Sized>(
        &mut self,
        view: &mut V,
    ) -> Option<SubmitOutcome> {
        let in_flight = self.in_flight.as_mut()?;
        let result = match (&mut in_flight.task).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "submission task did not complete");
                Err(SubmitError::Transport(format!("request aborted: {e}")))
            }
        };
        let InFlight { pending, .. } = self.in_flight.take()?;
        let form = self.form.as_mut()?;

        let outcome = form.finish(view, pending, result);
        if outcome.is_success() {
            if let Some(selector) = &mut self.selector {
                selector.reset(view);
            }
        }
        Some(outcome)
    }

    /// Route one event, then run any timers that have come due by `now`.
    pub async fn dispatch<V: View + ?Sized>(
        &mut self,
        view: &mut V,
        event: UiEvent,
        now: Instant,
    ) -> Dispatch {
        let mut out = Dispatch::default();

        if self
            .in_flight
            .as_ref()
            .is_some_and(|f| f.task.is_finished())
        {
            out.settled = self.settle_submission(view).await;
        }

        match event {
            UiEvent::Load => {
                if let Some(preload) = &mut self.preload {
                    preload.handle_load(view, now);
                }
            }
            UiEvent::Click { target } => {
                out.prevent_default = self.route_click(view, target);
            }
            UiEvent::KeyDown { key, shift } => {
                out.prevent_default = self.route_key(view, &key, shift);
            }
            UiEvent::Scroll => {
                if let Some(sticky) = &mut self.sticky {
                    sticky.handle_scroll(view, now);
                }
            }
            UiEvent::Resize => self.resize.trigger(now),
            UiEvent::Intersection(entries) => self.spy.handle_intersections(view, &entries),
            UiEvent::Submit => {
                if let Some(form) = &mut self.form {
                    out.prevent_default = true;
                    match form.begin(view) {
                        SubmitStart::Send(pending) => {
                            let transport = Arc::clone(&self.transport);
                            let endpoint = pending.endpoint().to_string();
                            let payload = pending.payload().clone();
                            let task = tokio::spawn(async move {
                                transport.send(&endpoint, &payload).await
                            });
                            debug!(attempt = pending.attempt(), "form request dispatched");
                            self.in_flight = Some(InFlight { pending, task });
                        }
                        SubmitStart::Done(outcome) => out.submission = Some(outcome),
                    }
                }
            }
            UiEvent::Tick => {}
            UiEvent::Unknown => debug!("ignoring unknown event"),
        }

        self.run_timers(view, now);
        out
    }

    fn route_click<V: View + ?Sized>(&mut self, view: &mut V, target: NodeId) -> bool {
        let mut prevent = false;
        if let Some(nav) = &mut self.nav {
            nav.handle_click(view, target);
        }
        if let Some(selector) = &mut self.selector {
            selector.handle_click(view, target);
        }
        prevent |= self.spy.handle_click(view, target);
        if let Some(modal) = &mut self.modal {
            prevent |= modal.handle_click(view, target);
        }
        prevent
    }

    fn route_key<V: View + ?Sized>(&mut self, view: &mut V, key: &str, shift: bool) -> bool {
        let mut prevent = false;
        if let Some(modal) = &mut self.modal {
            prevent = modal.handle_key(view, key, shift);
        }
        if let Some(nav) = &mut self.nav {
            nav.handle_key(view, key);
        }
        prevent
    }

    fn run_timers<V: View + ?Sized>(&mut self, view: &mut V, now: Instant) {
        if let Some(preload) = &mut self.preload {
            preload.poll(view, now);
        }
        if self.resize.fire(now) {
            debug!("viewport resized");
            if let Some(nav) = &mut self.nav {
                nav.handle_resize(view);
            }
            self.spy.handle_resize(view);
        }
    }
}
