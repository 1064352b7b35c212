//! HTTP surface of an A2A endpoint.
//!
//! Every endpoint, registry or worker, serves the same four routes; what it
//! answers depends on the collaborators wired into its [`A2aDispatcher`].
//!
//! [`A2aDispatcher`]: crate::dispatch::A2aDispatcher

mod router;
mod server;

pub use router::{ApiError, EndpointState, status_for, router};
pub use server::{serve, shutdown_signal};
