//! Outbound A2A calls.
//!
//! [`A2aClient`] posts envelopes to any endpoint; [`RemoteDirectory`] binds
//! it to one registry so orchestrators and workers can treat the registry as
//! a local port.

mod a2a;
mod error;
mod remote;

pub use a2a::A2aClient;
pub use error::ClientError;
pub use remote::RemoteDirectory;
