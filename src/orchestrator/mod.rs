//! Skill resolution and task delegation.
//!
//! An [`Orchestrator`] turns a goal into a skill, asks the registry who
//! offers it, picks one candidate and invokes it directly. A failed
//! invocation is retried once against a different candidate from a fresh
//! discovery.

mod error;
mod ports;
mod resolver;
mod selector;
mod service;

pub use error::DelegationError;
pub use ports::{AgentDiscovery, CandidateSelector, SkillResolver, TaskInvoker};
pub use resolver::FixedSkill;
pub use selector::FirstCandidate;
pub use service::{Delegation, Orchestrator};
