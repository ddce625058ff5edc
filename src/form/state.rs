/// The four field values owned by one form session. Serialized as-is as the
/// wire payload of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String
}

impl FormFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message
}

/// How one submission attempt ended, as seen by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Rejected { reason: String },
    TransportFailed
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edited { field: Field, value: String },
    SubmitPressed,
    Resolved(SubmissionOutcome),
    StartOver
}

/// The single side effect the state machine can request: send this snapshot
/// of the fields to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Dispatch(FormFields)
}

/// Shown when the request itself failed (network error, unreadable
/// response) rather than the server rejecting the submission.
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// One form-fill session. `error_message` is `Some` exactly when `status`
/// is `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub fields: FormFields,
    pub status: FormStatus,
    pub error_message: Option<String>
}

impl FormState {
    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Company => &mut self.fields.company,
            Field::Message => &mut self.fields.message
        }
    }
}

/// Advances one form session by one event.
///
/// Submission is single-flight: a `SubmitPressed` while a request is in
/// flight emits no effect, so the transport is never invoked twice for one
/// transition into `Submitting`. Field values survive a failure and are
/// cleared only on acceptance.
pub fn transition(mut state: FormState, event: FormEvent) -> (FormState, Option<Effect>) {
    use FormStatus::*;

    match (state.status, event) {
        (Idle | Failed, FormEvent::Edited { field, value }) => {
            *state.field_mut(field) = value;
            (state, None)
        }
        (Idle | Failed, FormEvent::SubmitPressed) => {
            state.status = Submitting;
            state.error_message = None;
            let snapshot = state.fields.clone();
            (state, Some(Effect::Dispatch(snapshot)))
        }
        (Submitting, FormEvent::Resolved(outcome)) => {
            match outcome {
                SubmissionOutcome::Accepted => {
                    state.status = Succeeded;
                    state.fields.clear();
                }
                SubmissionOutcome::Rejected { reason } => {
                    state.status = Failed;
                    state.error_message = Some(reason);
                }
                SubmissionOutcome::TransportFailed => {
                    state.status = Failed;
                    state.error_message = Some(TRANSPORT_FAILURE_MESSAGE.to_string());
                }
            }
            (state, None)
        }
        (Succeeded, FormEvent::StartOver) => {
            state.status = Idle;
            (state, None)
        }
        // Everything else is a no-op: a second submit while one is in
        // flight, edits during flight or before acknowledging a success,
        // stale resolutions.
        _ => (state, None)
    }
}
