//! A host connection: document mirror plus mounted page.

use std::time::Instant;

use landing_common::{BridgeError, UiEvent};
use landing_config::LandingConfig;
use landing_view::{MemoryDom, Snapshot, ViewTree};
use landing_widgets::{FormTransport, Page, SubmitOutcome};
use tracing::{debug, info, warn};

use crate::ipc::{HostMessage, HostReply, IpcMessage};

struct Mounted<T: FormTransport + 'static> {
    dom: MemoryDom,
    page: Page<T>,
}

impl<T: FormTransport + 'static> Mounted<T> {
    /// Drain the mirror's journal into a reply.
    fn reply(&mut self, prevent_default: bool) -> HostReply {
        HostReply::new(prevent_default, self.dom.take_commands())
    }
}

/// Mirrors the host document and drives the controllers against it.
///
/// Created empty; a `snapshot` message mounts the page. Every later message
/// is applied to the mirror and answered with the mutations to replay.
///
/// A form request does not hold up the session: the `Submit` reply carries
/// the pending state, and the settled state arrives either with a later
/// message or from [`BridgeSession::settle`].
pub struct BridgeSession<T: FormTransport + Clone + 'static> {
    config: LandingConfig,
    transport: T,
    simulate_observer: bool,
    mounted: Option<Mounted<T>>,
}

impl<T: FormTransport + Clone + 'static> BridgeSession<T> {
    pub fn new(config: LandingConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            simulate_observer: false,
            mounted: None,
        }
    }

    /// Compute intersection batches from the mirror instead of waiting for
    /// the host's observer. Used when replaying without a browser.
    pub fn with_simulated_observer(mut self, enabled: bool) -> Self {
        self.simulate_observer = enabled;
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// The mirror, once mounted.
    pub fn document(&self) -> Option<&MemoryDom> {
        self.mounted.as_ref().map(|m| &m.dom)
    }

    pub fn page(&self) -> Option<&Page<T>> {
        self.mounted.as_ref().map(|m| &m.page)
    }

    /// A form request is on the network.
    pub fn submission_pending(&self) -> bool {
        self.page().is_some_and(|p| p.submission_pending())
    }

    /// Wait for the in-flight form request and reply with the settled form
    /// state. `None` when nothing is pending.
    ///
    /// Cancel safe, so it can race incoming messages in `tokio::select!`.
    pub async fn settle(&mut self) -> Option<HostReply> {
        let mounted = self.mounted.as_mut()?;
        let outcome = mounted.page.settle_submission(&mut mounted.dom).await?;
        log_submission(&outcome);
        Some(mounted.reply(false))
    }

    /// Handle one raw JSON message.
    pub async fn handle(&mut self, raw: &str) -> Result<HostReply, BridgeError> {
        self.handle_at(raw, Instant::now()).await
    }

    pub async fn handle_at(&mut self, raw: &str, now: Instant) -> Result<HostReply, BridgeError> {
        let message = IpcMessage::from_json(raw)?.decode()?;
        self.apply(message, now).await
    }

    pub async fn apply(
        &mut self,
        message: HostMessage,
        now: Instant,
    ) -> Result<HostReply, BridgeError> {
        let simulate_observer = self.simulate_observer;
        match message {
            HostMessage::Snapshot(snapshot) => Ok(self.mount(&snapshot)),
            HostMessage::Viewport(state) => {
                let mounted = self.mounted_mut()?;
                mounted.dom.set_viewport(state.width, state.height);
                mounted.dom.set_scroll_y(state.scroll_y);
                Ok(mounted.reply(false))
            }
            HostMessage::Input(change) => {
                let mounted = self.mounted_mut()?;
                mounted.dom.type_value(change.node, &change.value);
                Ok(mounted.reply(false))
            }
            HostMessage::Focus(change) => {
                let mounted = self.mounted_mut()?;
                mounted.dom.place_focus(change.node);
                Ok(mounted.reply(false))
            }
            HostMessage::Event(event) => {
                let mounted = self.mounted_mut()?;
                let dispatch = mounted.page.dispatch(&mut mounted.dom, event, now).await;
                for outcome in dispatch.settled.iter().chain(&dispatch.submission) {
                    log_submission(outcome);
                }
                if simulate_observer {
                    let entries = mounted.dom.take_intersections();
                    if !entries.is_empty() {
                        mounted
                            .page
                            .dispatch(&mut mounted.dom, UiEvent::Intersection(entries), now)
                            .await;
                    }
                }
                Ok(mounted.reply(dispatch.prevent_default))
            }
        }
    }

    fn mounted_mut(&mut self) -> Result<&mut Mounted<T>, BridgeError> {
        self.mounted.as_mut().ok_or(BridgeError::NotMounted)
    }

    fn mount(&mut self, snapshot: &Snapshot) -> HostReply {
        if self.mounted.is_some() {
            warn!("replacing mounted document with a new snapshot");
        }
        let mut dom = MemoryDom::from_snapshot(snapshot);
        let page = Page::mount(&mut dom, &self.config, self.transport.clone());
        info!(
            elements = dom.descendants(dom.body()).len(),
            width = snapshot.width,
            "document mounted"
        );

        let mut mounted = Mounted { dom, page };
        let reply = mounted.reply(false);
        self.mounted = Some(mounted);
        reply
    }
}

fn log_submission(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Succeeded => info!("form submission delivered"),
        SubmitOutcome::Failed(e) => warn!(error = %e, "form submission failed"),
        SubmitOutcome::Ignored => debug!("form submission already pending"),
        other => debug!(outcome = ?other, "form submission not sent"),
    }
}
