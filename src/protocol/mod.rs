//! A2A wire contract shared by every endpoint and client.
//!
//! Requests are closed, adjacently tagged envelopes
//! (`{"operation": ..., "payload": ...}`); responses are internally tagged by
//! `status`. Unknown operations and malformed payloads decode to a
//! [`ProtocolError`] with kind [`ErrorKind::ValidationError`].

mod envelope;
mod error;
mod task;

pub use envelope::{
    A2aRequest, A2aResponse, Ack, DeregisterPayload, DiscoverPayload, InvokePayload,
    ResponsePayload,
};
pub use error::{ErrorKind, ProtocolError};
pub use task::{Part, TaskInput, TaskResult, TaskState, TaskStatus};

/// Path accepting A2A request envelopes.
pub const A2A_PATH: &str = "/a2a";

/// Path serving an endpoint's own agent card.
pub const AGENT_CARD_PATH: &str = "/.well-known/agent.json";

/// Liveness probe path.
pub const HEALTH_PATH: &str = "/health";

/// Path listing every registered card on a registry.
pub const AGENTS_PATH: &str = "/agents";
