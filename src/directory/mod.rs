//! Skill-indexed agent directory.
//!
//! Holds the `agent_id → card` store and the derived `skill_id → agents`
//! index, and exposes registration, deregistration, discovery and expiry.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
