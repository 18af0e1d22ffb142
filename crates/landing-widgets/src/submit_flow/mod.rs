//! Contact form submission (Idle → Validating → Pending → Succeeded | Failed → Idle).

mod transport;
mod validate;


pub use transport::{FormPayload, FormTransport, HttpTransport};
pub use validate::{is_valid_email, validate_fields, ERROR_CLASS};

use landing_common::{new_attempt_id, NodeId, SubmitError};
use landing_config::{FormConfig, MountsConfig};
use landing_view::View;
use tracing::{debug, info, warn};

/// Class that reveals the success banner.
pub const VISIBLE_CLASS: &str = "visible";

/// Input types whose value is never cleared or submitted as user data.
const CONTROL_TYPES: &[&str] = &["submit", "button", "reset"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Pending,
    Succeeded,
    Failed,
}

/// How a submission attempt ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// A submission was already in flight.
    Ignored,
    /// The honeypot was filled; dropped without any feedback.
    Abandoned,
    /// Validation failed on these fields; nothing was sent.
    Invalid(Vec<NodeId>),
    Succeeded,
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// A validated attempt waiting on the network.
#[derive(Debug)]
pub struct PendingSubmit {
    attempt: String,
    endpoint: String,
    payload: FormPayload,
    label: Option<String>,
}

impl PendingSubmit {
    pub fn attempt(&self) -> &str {
        &self.attempt
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn payload(&self) -> &FormPayload {
        &self.payload
    }
}

/// What [`SubmitFlow::begin`] decided.
#[derive(Debug)]
pub enum SubmitStart {
    /// The flow is Pending; deliver the request and hand the result to
    /// [`SubmitFlow::finish`].
    Send(PendingSubmit),
    /// Settled without a request.
    Done(SubmitOutcome),
}

#[derive(Debug)]
pub struct SubmitFlow {
    form: NodeId,
    submit_button: Option<NodeId>,
    success_banner: Option<NodeId>,
    honeypot_name: String,
    fallback_endpoint: Option<String>,
    busy_label: String,
    error_message: String,
    state: SubmitState,
}

impl SubmitFlow {
    /// Bind to the contact form. The submit control and success banner are
    /// optional.
    pub fn mount<V: View + ?Sized>(
        view: &V,
        mounts: &MountsConfig,
        config: &FormConfig,
    ) -> Option<Self> {
        let Some(form) = view.by_id(&mounts.contact_form) else {
            debug!(id = %mounts.contact_form, "contact form not found; submission disabled");
            return None;
        };
        Some(Self {
            form,
            submit_button: view.by_id(&mounts.submit_button),
            success_banner: view.by_id(&mounts.success_banner),
            honeypot_name: mounts.honeypot_field.clone(),
            fallback_endpoint: config.endpoint.clone().filter(|e| !e.is_empty()),
            busy_label: config.busy_label.clone(),
            error_message: config.error_message.clone(),
            state: SubmitState::Idle,
        })
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Validate and, if the form is fit to send, enter Pending: the submit
    /// control is disabled and shows the busy label until [`Self::finish`].
    ///
    /// Returns [`SubmitStart::Send`] with the request to deliver, or
    /// [`SubmitStart::Done`] when the attempt settled without one.
    pub fn begin<V: View + ?Sized>(&mut self, view: &mut V) -> SubmitStart {
        if self.state == SubmitState::Pending {
            debug!("submission already in flight; ignoring");
            return SubmitStart::Done(SubmitOutcome::Ignored);
        }

        let attempt = new_attempt_id();
        let fields = self.fields(&*view);

        if self.honeypot_filled(&*view, &fields) {
            info!(attempt = %attempt, "honeypot filled; submission dropped");
            return SubmitStart::Done(SubmitOutcome::Abandoned);
        }

        self.state = SubmitState::Validating;
        let invalid = validate_fields(view, &fields);
        if !invalid.is_empty() {
            debug!(attempt = %attempt, invalid = invalid.len(), "form failed validation");
            self.state = SubmitState::Idle;
            return SubmitStart::Done(SubmitOutcome::Invalid(invalid));
        }

        let Some(endpoint) = self.endpoint(&*view) else {
            let outcome = self.fail(view, &attempt, SubmitError::MissingEndpoint);
            self.state = SubmitState::Idle;
            return SubmitStart::Done(outcome);
        };
        let payload = FormPayload {
            fields: fields
                .iter()
                .filter(|&&f| !is_control(&*view, f))
                .filter_map(|&f| {
                    view.attribute(f, "name")
                        .filter(|n| !n.is_empty())
                        .map(|n| (n, view.value(f)))
                })
                .collect(),
        };

        let label = self.begin_pending(view);
        info!(attempt = %attempt, endpoint = %endpoint, "submitting contact form");
        SubmitStart::Send(PendingSubmit {
            attempt,
            endpoint,
            payload,
            label,
        })
    }

    /// Apply the transport's answer to a pending attempt and return to Idle.
    pub fn finish<V: View + ?Sized>(
        &mut self,
        view: &mut V,
        pending: PendingSubmit,
        result: Result<u16, SubmitError>,
    ) -> SubmitOutcome {
        let attempt = pending.attempt.as_str();
        let outcome = match result {
            Ok(status) if (200..300).contains(&status) => {
                let fields = self.fields(&*view);
                self.succeed(view, &fields);
                info!(attempt = %attempt, status, "contact form submitted");
                SubmitOutcome::Succeeded
            }
            Ok(status) => self.fail(view, attempt, SubmitError::Status(status)),
            Err(e) => self.fail(view, attempt, e),
        };

        self.end_pending(view, pending.label);
        outcome
    }

    /// Run one attempt to completion, awaiting the transport in place.
    pub async fn submit<V, T>(&mut self, view: &mut V, transport: &T) -> SubmitOutcome
    where
        V: View + ?Sized,
        T: FormTransport + ?Sized,
    {
        match self.begin(view) {
            SubmitStart::Done(outcome) => outcome,
            SubmitStart::Send(pending) => {
                let result = transport.send(pending.endpoint(), pending.payload()).await;
                self.finish(view, pending, result)
            }
        }
    }

    /// Form controls in document order.
    fn fields<V: View + ?Sized>(&self, view: &V) -> Vec<NodeId> {
        view.descendants(self.form)
            .into_iter()
            .filter(|&n| matches!(view.tag(n), Some("input" | "textarea" | "select")))
            .collect()
    }

    fn honeypot_filled<V: View + ?Sized>(&self, view: &V, fields: &[NodeId]) -> bool {
        fields.iter().any(|&f| {
            view.attribute(f, "name").as_deref() == Some(self.honeypot_name.as_str())
                && !view.value(f).trim().is_empty()
        })
    }

    fn endpoint<V: View + ?Sized>(&self, view: &V) -> Option<String> {
        view.attribute(self.form, "action")
            .filter(|a| !a.trim().is_empty())
            .or_else(|| self.fallback_endpoint.clone())
    }

    /// Disable the submit control and show the busy label. Returns the
    /// label to restore.
    fn begin_pending<V: View + ?Sized>(&mut self, view: &mut V) -> Option<String> {
        self.state = SubmitState::Pending;
        let button = self.submit_button?;
        let label = view.text(button);
        view.set_attribute(button, "disabled", "");
        view.set_text(button, &self.busy_label);
        Some(label)
    }

    fn end_pending<V: View + ?Sized>(&mut self, view: &mut V, label: Option<String>) {
        if let Some(button) = self.submit_button {
            view.remove_attribute(button, "disabled");
            if let Some(label) = label {
                view.set_text(button, &label);
            }
        }
        self.state = SubmitState::Idle;
    }

    fn succeed<V: View + ?Sized>(&mut self, view: &mut V, fields: &[NodeId]) {
        self.state = SubmitState::Succeeded;
        if let Some(banner) = self.success_banner {
            view.remove_attribute(banner, "hidden");
            view.add_class(banner, VISIBLE_CLASS);
        }
        for &field in fields {
            let hidden = view.attribute(field, "type").as_deref() == Some("hidden");
            if !hidden && !is_control(&*view, field) {
                view.set_value(field, "");
            }
        }
    }

    fn fail<V: View + ?Sized>(
        &mut self,
        view: &mut V,
        attempt: &str,
        error: SubmitError,
    ) -> SubmitOutcome {
        self.state = SubmitState::Failed;
        warn!(attempt = %attempt, error = %error, "contact form submission failed");
        view.alert(&self.error_message);
        SubmitOutcome::Failed(error)
    }
}

fn is_control<V: View + ?Sized>(view: &V, field: NodeId) -> bool {
    view.attribute(field, "type")
        .is_some_and(|t| CONTROL_TYPES.contains(&t.as_str()))
}
