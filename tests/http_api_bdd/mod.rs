//! Support modules for the HTTP API BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{ApiState, RecordedResponse, SeededRepository, send_request};
