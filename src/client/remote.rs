//! Registry and agent ports backed by HTTP.

use super::A2aClient;
use crate::directory::domain::{AgentCard, AgentCardDraft, AgentUrl, DiscoveryFilters};
use crate::orchestrator::{AgentDiscovery, TaskInvoker};
use crate::protocol::{ProtocolError, TaskInput, TaskResult};
use crate::worker::RegistryLink;
use async_trait::async_trait;

/// A remote registry reached through an [`A2aClient`].
#[derive(Debug, Clone)]
pub struct RemoteDirectory {
    client: A2aClient,
    registry: AgentUrl,
    filters: DiscoveryFilters,
}

impl RemoteDirectory {
    /// Binds `client` to the registry at `registry`.
    #[must_use]
    pub const fn new(client: A2aClient, registry: AgentUrl) -> Self {
        Self {
            client,
            registry,
            filters: DiscoveryFilters::none(),
        }
    }

    /// Applies `filters` to every discovery.
    #[must_use]
    pub const fn with_filters(mut self, filters: DiscoveryFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Returns the registry address.
    #[must_use]
    pub const fn registry(&self) -> &AgentUrl {
        &self.registry
    }
}

#[async_trait]
impl AgentDiscovery for RemoteDirectory {
    async fn discover(&self, skill_id: &str) -> Result<Vec<AgentCard>, ProtocolError> {
        Ok(self
            .client
            .discover(&self.registry, skill_id, self.filters)
            .await?)
    }
}

#[async_trait]
impl RegistryLink for RemoteDirectory {
    async fn register(&self, draft: AgentCardDraft) -> Result<AgentCard, ProtocolError> {
        Ok(self.client.register(&self.registry, draft).await?)
    }

    async fn deregister(&self, agent_id: &str) -> Result<(), ProtocolError> {
        Ok(self.client.deregister(&self.registry, agent_id).await?)
    }
}

#[async_trait]
impl TaskInvoker for A2aClient {
    async fn invoke(&self, target: &AgentUrl, input: TaskInput) -> Result<TaskResult, ProtocolError> {
        Ok(Self::invoke(self, target, input).await?)
    }
}
