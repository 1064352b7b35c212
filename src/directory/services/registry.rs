//! Service layer for agent registration and skill discovery.
//!
//! Provides [`AgentRegistryService`], the single owner of directory
//! mutations. Each operation validates its input, then performs exactly one
//! repository call, so request cancellation can never leave a half-applied
//! change behind.

use crate::directory::{
    domain::{
        AgentCard, AgentCardDraft, AgentId, DirectoryDomainError, DiscoveryFilters,
        LivenessPolicy, SkillId,
    },
    ports::{AgentDirectoryRepository, DirectoryRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for registry operations.
#[derive(Debug, Error)]
pub enum RegistryServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),
}

/// Result type for registry service operations.
pub type RegistryServiceResult<T> = Result<T, RegistryServiceError>;

/// Agent registration and discovery service.
pub struct AgentRegistryService<R, C>
where
    R: AgentDirectoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for AgentRegistryService<R, C>
where
    R: AgentDirectoryRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> AgentRegistryService<R, C>
where
    R: AgentDirectoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers or re-registers an agent.
    ///
    /// A second registration with the same `agent_id` replaces the stored
    /// card, keeps its `registered_at`, and refreshes `last_seen_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when the card is malformed;
    /// the store is left unchanged. Returns
    /// [`RegistryServiceError::Repository`] when storage fails.
    pub async fn register(&self, draft: AgentCardDraft) -> RegistryServiceResult<AgentCard> {
        let card = AgentCard::from_draft(draft, &*self.clock)?;
        let outcome = self.repository.upsert(card).await?;
        let replaced = outcome.is_replacement();
        let stored = outcome.into_card();
        info!(
            agent_id = %stored.agent_id(),
            url = %stored.url(),
            skills = stored.skills().len(),
            replaced,
            "agent registered"
        );
        Ok(stored)
    }

    /// Removes an agent and its skill index entries.
    ///
    /// Returns whether a card was removed; deregistering an unknown id is not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when `agent_id` is blank, or
    /// [`RegistryServiceError::Repository`] when storage fails.
    pub async fn deregister(&self, agent_id: &str) -> RegistryServiceResult<bool> {
        let id = AgentId::new(agent_id)?;
        let removed = self.repository.remove(&id).await?.is_some();
        if removed {
            info!(agent_id = %id, "agent deregistered");
        } else {
            debug!(agent_id = %id, "deregister ignored for unknown agent");
        }
        Ok(removed)
    }

    /// Returns the cards advertising `skill_id`, ordered by agent id.
    ///
    /// An empty result means no agent currently advertises the skill.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when `skill_id` is blank, or
    /// [`RegistryServiceError::Repository`] when storage fails.
    pub async fn discover(
        &self,
        skill_id: &str,
        filters: &DiscoveryFilters,
    ) -> RegistryServiceResult<Vec<AgentCard>> {
        let skill = SkillId::new(skill_id)?;
        let candidates = self.repository.find_by_skill(&skill).await?;
        let matches = filters.apply(candidates, self.clock.utc());
        debug!(skill_id = %skill, matches = matches.len(), "discovery resolved");
        Ok(matches)
    }

    /// Finds a single card by agent id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Domain`] when `agent_id` is blank, or
    /// [`RegistryServiceError::Repository`] when storage fails.
    pub async fn find_by_id(&self, agent_id: &str) -> RegistryServiceResult<Option<AgentCard>> {
        let id = AgentId::new(agent_id)?;
        Ok(self.repository.find_by_id(&id).await?)
    }

    /// Lists every registered card, ordered by agent id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Repository`] when storage fails.
    pub async fn list_all(&self) -> RegistryServiceResult<Vec<AgentCard>> {
        Ok(self.repository.list_all().await?)
    }

    /// Removes every card not seen within the policy timeout.
    ///
    /// Returns the removed agent ids.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryServiceError::Repository`] when storage fails.
    pub async fn sweep_expired(&self, policy: &LivenessPolicy) -> RegistryServiceResult<Vec<AgentId>> {
        let cutoff = policy.cutoff(self.clock.utc());
        let removed = self.repository.remove_seen_before(cutoff).await?;
        if !removed.is_empty() {
            info!(
                expired = removed.len(),
                cutoff = %cutoff,
                "expired agents pruned"
            );
        }
        Ok(removed)
    }
}
