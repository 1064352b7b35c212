//! Worker-side registry participation.
//!
//! A worker registers its card at startup with bounded retries, optionally
//! renews it so liveness expiry never prunes it, and deregisters on graceful
//! shutdown. [`EchoTaskHandler`] is a minimal task handler used by the
//! bundled echo worker.

mod echo;
mod registration;
mod session;

pub use echo::{ECHO_SKILL_ID, EchoTaskHandler, echo_agent_card};
pub use registration::{RegistrationPolicy, RegistryLink, register_with_retry};
pub use session::WorkerSession;
