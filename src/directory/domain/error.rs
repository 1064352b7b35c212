//! Error types for agent directory domain validation.

use thiserror::Error;

/// Errors returned while constructing agent directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The agent identifier is empty after trimming.
    #[error("agent_id must not be empty")]
    EmptyAgentId,

    /// The skill identifier is empty after trimming.
    #[error("skill_id must not be empty")]
    EmptySkillId,

    /// The agent display name is empty after trimming.
    #[error("agent name must not be empty")]
    EmptyAgentName,

    /// The agent endpoint URL is empty after trimming.
    #[error("agent url must not be empty")]
    EmptyUrl,

    /// The agent endpoint URL is not an `http://` or `https://` reference
    /// with a host.
    #[error("agent url '{0}' must be an http:// or https:// endpoint with a host")]
    InvalidUrl(String),

    /// Two skills on the same card share an identifier.
    #[error("skill_id '{0}' appears more than once on the same card")]
    DuplicateSkill(String),

    /// The liveness timeout is zero or does not fit the timestamp range.
    #[error("liveness timeout must be a positive duration within range, got {0:?}")]
    InvalidLivenessTimeout(std::time::Duration),
}
