//! Self-description served by the registry endpoint.

use crate::directory::domain::{AgentCapabilities, AgentCardDraft, AgentUrl, SkillDraft};

/// Skill advertised by the registry for accepting registrations.
pub const REGISTER_SKILL_ID: &str = "register_agent";

/// Skill advertised by the registry for answering discovery queries.
pub const DISCOVER_SKILL_ID: &str = "discover_agents";

/// Builds the agent card the registry serves about itself.
///
/// The card is never stored in the directory it describes.
#[must_use]
pub fn registry_agent_card(url: &AgentUrl) -> AgentCardDraft {
    let json = || vec!["application/json".to_owned()];
    AgentCardDraft::new("agent-registry", "AgentDiscoveryRegistry", url.as_str())
        .with_description(
            "Central registry for discovering A2A agents by skill. Supports registration, \
             deregistration and discovery by skill id.",
        )
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_capabilities(AgentCapabilities::new())
        .with_skill(
            SkillDraft::new(REGISTER_SKILL_ID)
                .with_name("Register Agent")
                .with_description("Registers or replaces an agent card keyed by agent_id.")
                .with_modes(json(), json()),
        )
        .with_skill(
            SkillDraft::new(DISCOVER_SKILL_ID)
                .with_name("Discover Agents")
                .with_description("Returns the agent cards advertising a given skill_id.")
                .with_modes(json(), json()),
        )
}
