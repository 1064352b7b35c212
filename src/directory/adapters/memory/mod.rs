//! In-memory adapter for the agent directory.

mod directory;

pub use directory::InMemoryAgentDirectory;
