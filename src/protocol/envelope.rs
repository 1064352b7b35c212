//! Request and response envelopes.

use super::{ProtocolError, TaskInput, TaskResult};
use crate::directory::domain::{AgentCard, AgentCardDraft, DiscoveryFilters};
use serde::{Deserialize, Serialize};

/// Payload of a `deregister` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeregisterPayload {
    /// Agent to remove.
    pub agent_id: String,
}

/// Payload of a `discover` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverPayload {
    /// Skill the caller needs.
    pub skill_id: String,
    /// Optional refinements.
    pub filters: DiscoveryFilters,
}

/// Payload of an `invoke` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvokePayload {
    /// Task handed to the endpoint's task handler.
    pub task_input: TaskInput,
}

/// Closed set of operations an A2A endpoint may receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", content = "payload", rename_all = "snake_case")]
pub enum A2aRequest {
    /// Insert or replace an agent card.
    Register(AgentCardDraft),
    /// Remove an agent card.
    Deregister(DeregisterPayload),
    /// Find the cards advertising a skill.
    Discover(DiscoverPayload),
    /// Run a task on the receiving agent.
    Invoke(InvokePayload),
}

impl A2aRequest {
    /// Decodes a request body.
    ///
    /// # Errors
    ///
    /// Returns a `validation_error` when the body is not JSON, names an
    /// unknown operation, or carries a payload of the wrong shape.
    pub fn decode(body: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(body)
            .map_err(|err| ProtocolError::validation(format!("malformed request: {err}")))
    }

    /// Returns the wire name of the operation.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Register(_) => "register",
            Self::Deregister(_) => "deregister",
            Self::Discover(_) => "discover",
            Self::Invoke(_) => "invoke",
        }
    }
}

/// Acknowledgement returned by `deregister`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    /// Always `true` on success.
    pub ok: bool,
}

/// Success payloads produced by dispatch.
///
/// Serialised untagged: the operation that produced it determines its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    /// Stored card returned by `register`.
    Card(Box<AgentCard>),
    /// Ordered cards returned by `discover`.
    Cards(Vec<AgentCard>),
    /// Acknowledgement returned by `deregister`.
    Ack(Ack),
    /// Task result returned by `invoke`.
    Task(TaskResult),
}

/// Response envelope, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum A2aResponse<T> {
    /// The operation succeeded.
    Ok {
        /// Operation-specific payload.
        result: T,
    },
    /// The operation failed.
    Error {
        /// Classified failure.
        error: ProtocolError,
    },
}

impl<T> A2aResponse<T> {
    /// Wraps a result.
    pub const fn ok(result: T) -> Self {
        Self::Ok { result }
    }

    /// Converts the envelope into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the carried [`ProtocolError`] for error envelopes.
    pub fn into_result(self) -> Result<T, ProtocolError> {
        match self {
            Self::Ok { result } => Ok(result),
            Self::Error { error } => Err(error),
        }
    }
}

impl<T> From<Result<T, ProtocolError>> for A2aResponse<T> {
    fn from(result: Result<T, ProtocolError>) -> Self {
        match result {
            Ok(value) => Self::Ok { result: value },
            Err(error) => Self::Error { error },
        }
    }
}
