//! Port contracts for the agent directory.
//!
//! Ports define infrastructure-agnostic interfaces used by the registry
//! service.

pub mod repository;

pub use repository::{
    AgentDirectoryRepository, DirectoryRepositoryError, DirectoryResult, UpsertOutcome,
};
