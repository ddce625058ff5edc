use super::gateway::{ContactGateway, SubmissionResult};
use super::state::{transition, Effect, Field, FormEvent, FormState, SubmissionOutcome};

/// Drives one form-fill session against a transport gateway.
///
/// Every interaction funnels through the state machine in `state.rs`; the
/// network round trip inside `submit` is the only await point.
pub struct FormController<G> {
    state: FormState,
    gateway: G
}

impl<G: ContactGateway> FormController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            state: FormState::default(),
            gateway
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.apply(FormEvent::Edited {
            field,
            value: value.into()
        });
    }

    // "send another message"
    pub fn start_over(&mut self) {
        self.apply(FormEvent::StartOver);
    }

    /// Submits whatever is currently in the fields and awaits the outcome.
    /// A no-op unless the state machine lets a submission start, so at most
    /// one request is in flight per session.
    pub async fn submit(&mut self) -> &FormState {
        if let Some(Effect::Dispatch(fields)) = self.apply(FormEvent::SubmitPressed) {
            let outcome = match self.gateway.submit(&fields).await {
                Ok(SubmissionResult::Accepted) => SubmissionOutcome::Accepted,
                Ok(SubmissionResult::Rejected { reason }) => {
                    SubmissionOutcome::Rejected { reason }
                }
                Err(error) => {
                    tracing::warn!("Contact submission failed in transit: {:?}", error);
                    SubmissionOutcome::TransportFailed
                }
            };
            self.apply(FormEvent::Resolved(outcome));
        }
        &self.state
    }

    fn apply(&mut self, event: FormEvent) -> Option<Effect> {
        let (next, effect) = transition(std::mem::take(&mut self.state), event);
        self.state = next;
        effect
    }
}
