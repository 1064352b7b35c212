//! Repository port for the card store and its skill index.

use crate::directory::domain::{AgentCard, AgentId, SkillId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryResult<T> = Result<T, DirectoryRepositoryError>;

/// Outcome of an upsert keyed by agent id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No card existed for the id; the card was inserted.
    Inserted(AgentCard),
    /// A card existed and was replaced; `registered_at` was carried over.
    Replaced(AgentCard),
}

impl UpsertOutcome {
    /// Returns the card as stored.
    #[must_use]
    pub fn into_card(self) -> AgentCard {
        match self {
            Self::Inserted(card) | Self::Replaced(card) => card,
        }
    }

    /// Returns whether an existing card was replaced.
    #[must_use]
    pub const fn is_replacement(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }
}

/// Card store contract.
///
/// Implementations own both the `agent_id → card` store and the derived
/// `skill_id → {agent_id}` index, and must update them together so that no
/// reader observes one without the other.
#[async_trait]
pub trait AgentDirectoryRepository: Send + Sync {
    /// Inserts or replaces the card for its agent id.
    ///
    /// Index entries of a replaced card are removed before the new card's
    /// entries are added, and the replaced card's `registered_at` is kept.
    async fn upsert(&self, card: AgentCard) -> DirectoryResult<UpsertOutcome>;

    /// Removes the card for `agent_id` and its index entries.
    ///
    /// Returns the removed card, or `None` when no card was stored.
    async fn remove(&self, agent_id: &AgentId) -> DirectoryResult<Option<AgentCard>>;

    /// Finds a card by agent id.
    async fn find_by_id(&self, agent_id: &AgentId) -> DirectoryResult<Option<AgentCard>>;

    /// Returns every card advertising `skill_id`, ordered by agent id.
    async fn find_by_skill(&self, skill_id: &SkillId) -> DirectoryResult<Vec<AgentCard>>;

    /// Returns every stored card, ordered by agent id.
    async fn list_all(&self) -> DirectoryResult<Vec<AgentCard>>;

    /// Removes every card whose `last_seen_at` is strictly before `cutoff`.
    ///
    /// Returns the removed agent ids in order.
    async fn remove_seen_before(&self, cutoff: DateTime<Utc>) -> DirectoryResult<Vec<AgentId>>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// Storage-layer failure, such as a poisoned lock.
    #[error("directory storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
