//! Collaborators the dispatcher routes to.

use crate::directory::{
    domain::{AgentCard, AgentCardDraft, DiscoveryFilters},
    ports::AgentDirectoryRepository,
    services::{AgentRegistryService, RegistryServiceResult},
};
use crate::protocol::{TaskInput, TaskResult};
use async_trait::async_trait;
use mockable::Clock;
use thiserror::Error;

/// Directory operations reachable over the wire.
#[async_trait]
pub trait DirectoryOperations: Send + Sync {
    /// Inserts or replaces a card.
    async fn register(&self, draft: AgentCardDraft) -> RegistryServiceResult<AgentCard>;

    /// Removes a card; returns whether one was stored.
    async fn deregister(&self, agent_id: &str) -> RegistryServiceResult<bool>;

    /// Returns the cards advertising `skill_id`, ordered by agent id.
    async fn discover(
        &self,
        skill_id: &str,
        filters: &DiscoveryFilters,
    ) -> RegistryServiceResult<Vec<AgentCard>>;

    /// Returns every stored card, ordered by agent id.
    async fn list_all(&self) -> RegistryServiceResult<Vec<AgentCard>>;
}

#[async_trait]
impl<R, C> DirectoryOperations for AgentRegistryService<R, C>
where
    R: AgentDirectoryRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    async fn register(&self, draft: AgentCardDraft) -> RegistryServiceResult<AgentCard> {
        Self::register(self, draft).await
    }

    async fn deregister(&self, agent_id: &str) -> RegistryServiceResult<bool> {
        Self::deregister(self, agent_id).await
    }

    async fn discover(
        &self,
        skill_id: &str,
        filters: &DiscoveryFilters,
    ) -> RegistryServiceResult<Vec<AgentCard>> {
        Self::discover(self, skill_id, filters).await
    }

    async fn list_all(&self) -> RegistryServiceResult<Vec<AgentCard>> {
        Self::list_all(self).await
    }
}

/// Errors a task handler may report instead of a task result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskHandlerError {
    /// The task input cannot be processed by this handler.
    #[error("invalid task input: {0}")]
    InvalidInput(String),

    /// The handler failed unexpectedly.
    #[error("task handler failed: {0}")]
    Failed(String),
}

/// Worker-side logic that answers `invoke`.
#[async_trait]
pub trait TaskHandler: Send + Sync {
    /// Runs one task to completion.
    ///
    /// A task that ran but could not achieve its goal should return a
    /// [`TaskResult`] in the failed state rather than an error.
    async fn handle(&self, input: TaskInput) -> Result<TaskResult, TaskHandlerError>;
}
