//! Collaborators of the delegation flow.

use crate::directory::domain::{AgentCard, AgentId, AgentUrl};
use crate::protocol::{ProtocolError, TaskInput, TaskResult};
use async_trait::async_trait;

/// Maps a goal to the one skill needed to satisfy it.
///
/// Typically backed by an external reasoning service.
#[async_trait]
pub trait SkillResolver: Send + Sync {
    /// Returns the required skill id, or `None` when no skill fits.
    async fn resolve_skill(&self, goal: &str) -> Option<String>;
}

/// Finds candidate agents for a skill.
#[async_trait]
pub trait AgentDiscovery: Send + Sync {
    /// Returns the cards advertising `skill_id`, in registry order.
    async fn discover(&self, skill_id: &str) -> Result<Vec<AgentCard>, ProtocolError>;
}

/// Delivers a task to an agent endpoint.
#[async_trait]
pub trait TaskInvoker: Send + Sync {
    /// Runs `input` on the agent at `target`.
    async fn invoke(&self, target: &AgentUrl, input: TaskInput) -> Result<TaskResult, ProtocolError>;
}

/// Chooses which discovered agent receives a task.
///
/// Implementations must be deterministic for a given input.
pub trait CandidateSelector: Send + Sync {
    /// Picks a candidate, skipping `excluded` when given.
    fn select<'a>(
        &self,
        candidates: &'a [AgentCard],
        excluded: Option<&AgentId>,
    ) -> Option<&'a AgentCard>;
}
