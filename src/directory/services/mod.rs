//! Application services for agent registration and discovery.

mod descriptor;
mod expiry;
mod registry;

pub use descriptor::{DISCOVER_SKILL_ID, REGISTER_SKILL_ID, registry_agent_card};
pub use expiry::ExpirySweeper;
pub use registry::{AgentRegistryService, RegistryServiceError, RegistryServiceResult};
