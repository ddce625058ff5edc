//! Client-side core of the contact form: a pure state machine for one
//! form-fill session, a transport gateway for the contact endpoint, and a
//! controller tying the two together. None of it depends on a rendering
//! environment.

mod controller;
mod gateway;
mod state;

pub use controller::FormController;
pub use gateway::{ContactGateway, HttpContactGateway, SubmissionResult, TransportError};
pub use state::{
    transition, Effect, Field, FormEvent, FormFields, FormState, FormStatus,
    SubmissionOutcome, TRANSPORT_FAILURE_MESSAGE
};
