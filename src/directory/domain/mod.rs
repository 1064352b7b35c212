//! Domain model for the agent directory.
//!
//! Agent cards are validated here, on the way in, so the store and its skill
//! index only ever hold well-formed advertisements. Infrastructure concerns
//! (locking, transport) stay outside the domain boundary.

mod capabilities;
mod card;
mod draft;
mod error;
mod ids;
mod liveness;
mod query;
mod skill;
mod url;

pub use capabilities::{AgentAuthentication, AgentCapabilities};
pub use card::AgentCard;
pub use draft::{AgentCardDraft, SkillDraft};
pub use error::DirectoryDomainError;
pub use ids::{AgentId, SkillId};
pub use liveness::LivenessPolicy;
pub use query::DiscoveryFilters;
pub use skill::AgentSkill;
pub use url::AgentUrl;
