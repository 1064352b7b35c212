//! Delegation failures.

use crate::directory::domain::AgentId;
use crate::protocol::{ErrorKind, ProtocolError};
use thiserror::Error;

/// Errors surfaced by [`Orchestrator::delegate`](super::Orchestrator::delegate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegationError {
    /// The goal could not be mapped to a skill.
    #[error("no skill could be resolved for the goal")]
    UnresolvedGoal,

    /// The registry could not be queried.
    #[error("discovery for skill '{skill_id}' failed: {source}")]
    Discovery {
        /// Skill being looked up.
        skill_id: String,
        /// Underlying failure.
        #[source]
        source: ProtocolError,
    },

    /// No registered agent advertises the skill.
    #[error("no agent advertises skill '{0}'")]
    NoCapableAgent(String),

    /// The chosen agent failed to run the task.
    #[error("invoking agent '{agent_id}' failed: {source}")]
    Invocation {
        /// Agent that was invoked.
        agent_id: AgentId,
        /// Underlying failure.
        #[source]
        source: ProtocolError,
    },
}

impl DelegationError {
    /// Returns the protocol error kind this failure corresponds to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnresolvedGoal => ErrorKind::ValidationError,
            Self::NoCapableAgent(_) => ErrorKind::NoCapableAgent,
            Self::Discovery { source, .. } | Self::Invocation { source, .. } => source.kind,
        }
    }
}

impl From<DelegationError> for ProtocolError {
    fn from(err: DelegationError) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}
