//! Shared world state for agent discovery BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use switchboard::directory::{
    adapters::memory::InMemoryAgentDirectory,
    domain::{AgentCard, AgentCardDraft, SkillDraft},
    services::{AgentRegistryService, RegistryServiceResult},
};

/// Service type used by the BDD world.
pub type TestRegistryService = AgentRegistryService<InMemoryAgentDirectory, DefaultClock>;

/// Scenario world for discovery behaviour tests.
pub struct DiscoveryWorld {
    /// The registry service under test.
    pub service: TestRegistryService,
    /// Result of the last registration attempt.
    pub last_register_result: Option<RegistryServiceResult<AgentCard>>,
}

impl DiscoveryWorld {
    /// Creates a world over an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: AgentRegistryService::new(
                Arc::new(InMemoryAgentDirectory::new()),
                Arc::new(DefaultClock),
            ),
            last_register_result: None,
        }
    }
}

impl Default for DiscoveryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a worker card offering the comma-separated `skills`.
pub fn build_card(agent_id: &str, url: &str, skills: &str) -> AgentCardDraft {
    skills
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .fold(AgentCardDraft::new(agent_id, "Worker", url), |draft, skill| {
            draft.with_skill(SkillDraft::new(skill))
        })
}

/// Splits a comma-separated list of agent ids.
pub fn split_ids(ids: &str) -> Vec<String> {
    ids.split(',').map(|id| id.trim().to_owned()).collect()
}
