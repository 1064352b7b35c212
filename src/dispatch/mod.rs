//! Request dispatch for A2A endpoints.
//!
//! Decodes envelopes, routes directory operations to a
//! [`DirectoryOperations`] implementation and `invoke` to a
//! [`TaskHandler`], and maps every failure to a [`ProtocolError`]. An
//! endpoint that lacks one of the two collaborators answers its operations
//! with `unsupported_operation`.
//!
//! [`ProtocolError`]: crate::protocol::ProtocolError

mod dispatcher;
mod ports;

pub use dispatcher::A2aDispatcher;
pub use ports::{DirectoryOperations, TaskHandler, TaskHandlerError};
