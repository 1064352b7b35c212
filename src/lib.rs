//! Switchboard: skill-indexed discovery and delegation for A2A agents.
//!
//! Agents advertise what they can do with an agent card; a registry indexes
//! those cards by skill and answers discovery queries; orchestrators
//! discover a capable agent and invoke it directly over the same A2A
//! envelope protocol.
//!
//! # Architecture
//!
//! The directory follows hexagonal architecture principles:
//!
//! - **Domain**: validated cards, identifiers and policies
//! - **Ports**: abstract trait interfaces for storage and remote agents
//! - **Adapters**: the in-memory store and the HTTP client
//!
//! # Modules
//!
//! - [`directory`]: card store, skill index, registration and discovery
//! - [`protocol`]: request/response envelopes and the task model
//! - [`dispatch`]: routing of decoded envelopes to collaborators
//! - [`http`]: the axum endpoint shared by registries and workers
//! - [`client`]: outbound A2A calls
//! - [`orchestrator`]: skill resolution and delegation with one retry
//! - [`worker`]: registration, renewal and deregistration of workers
//! - [`config`] and [`telemetry`]: process wiring for the binaries

pub mod client;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod http;
pub mod orchestrator;
pub mod protocol;
pub mod telemetry;
pub mod worker;
