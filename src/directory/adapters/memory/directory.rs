//! In-memory card store with a derived skill index.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::directory::{
    domain::{AgentCard, AgentId, SkillId},
    ports::{AgentDirectoryRepository, DirectoryRepositoryError, DirectoryResult, UpsertOutcome},
};

/// Thread-safe in-memory agent directory.
///
/// Store and index share one lock, and every mutation happens inside a
/// single write guard with no awaits, so readers never see them disagree.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAgentDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    cards: BTreeMap<AgentId, AgentCard>,
    skill_index: HashMap<SkillId, BTreeSet<AgentId>>,
}

impl DirectoryState {
    fn index(&mut self, card: &AgentCard) {
        for skill_id in card.skill_ids() {
            self.skill_index
                .entry(skill_id.clone())
                .or_default()
                .insert(card.agent_id().clone());
        }
    }

    fn unindex(&mut self, card: &AgentCard) {
        for skill_id in card.skill_ids() {
            if let Some(agents) = self.skill_index.get_mut(skill_id) {
                agents.remove(card.agent_id());
                if agents.is_empty() {
                    self.skill_index.remove(skill_id);
                }
            }
        }
    }

    fn remove(&mut self, agent_id: &AgentId) -> Option<AgentCard> {
        let removed = self.cards.remove(agent_id)?;
        self.unindex(&removed);
        Some(removed)
    }
}

impl InMemoryAgentDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DirectoryResult<RwLockReadGuard<'_, DirectoryState>> {
        self.state.read().map_err(|err| {
            DirectoryRepositoryError::storage(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> DirectoryResult<RwLockWriteGuard<'_, DirectoryState>> {
        self.state.write().map_err(|err| {
            DirectoryRepositoryError::storage(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl AgentDirectoryRepository for InMemoryAgentDirectory {
    async fn upsert(&self, card: AgentCard) -> DirectoryResult<UpsertOutcome> {
        let mut state = self.write()?;

        let outcome = match state.remove(card.agent_id()) {
            Some(previous) => UpsertOutcome::Replaced(card.carry_over_registration(&previous)),
            None => UpsertOutcome::Inserted(card),
        };

        let stored = match &outcome {
            UpsertOutcome::Inserted(stored) | UpsertOutcome::Replaced(stored) => stored.clone(),
        };
        state.index(&stored);
        state.cards.insert(stored.agent_id().clone(), stored);
        Ok(outcome)
    }

    async fn remove(&self, agent_id: &AgentId) -> DirectoryResult<Option<AgentCard>> {
        let mut state = self.write()?;
        Ok(state.remove(agent_id))
    }

    async fn find_by_id(&self, agent_id: &AgentId) -> DirectoryResult<Option<AgentCard>> {
        let state = self.read()?;
        Ok(state.cards.get(agent_id).cloned())
    }

    async fn find_by_skill(&self, skill_id: &SkillId) -> DirectoryResult<Vec<AgentCard>> {
        let state = self.read()?;
        let matches = state
            .skill_index
            .get(skill_id)
            .map(|agents| {
                agents
                    .iter()
                    .filter_map(|agent_id| state.cards.get(agent_id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }

    async fn list_all(&self) -> DirectoryResult<Vec<AgentCard>> {
        let state = self.read()?;
        Ok(state.cards.values().cloned().collect())
    }

    async fn remove_seen_before(&self, cutoff: DateTime<Utc>) -> DirectoryResult<Vec<AgentId>> {
        let mut state = self.write()?;
        let stale: Vec<AgentId> = state
            .cards
            .values()
            .filter(|card| card.last_seen_at() < cutoff)
            .map(|card| card.agent_id().clone())
            .collect();
        for agent_id in &stale {
            state.remove(agent_id);
        }
        Ok(stale)
    }
}
