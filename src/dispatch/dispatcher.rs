//! Envelope routing.

use super::{DirectoryOperations, TaskHandler, TaskHandlerError};
use crate::directory::{domain::AgentCard, services::RegistryServiceError};
use crate::protocol::{A2aRequest, Ack, ErrorKind, ProtocolError, ResponsePayload};
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes decoded A2A requests to the endpoint's collaborators.
#[derive(Clone, Default)]
pub struct A2aDispatcher {
    directory: Option<Arc<dyn DirectoryOperations>>,
    tasks: Option<Arc<dyn TaskHandler>>,
}

impl A2aDispatcher {
    /// Creates a dispatcher that serves no operations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `register`, `deregister` and `discover` from `directory`.
    #[must_use]
    pub fn with_directory(mut self, directory: Arc<dyn DirectoryOperations>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Serves `invoke` from `handler`.
    #[must_use]
    pub fn with_task_handler(mut self, handler: Arc<dyn TaskHandler>) -> Self {
        self.tasks = Some(handler);
        self
    }

    /// Returns whether directory operations are served.
    #[must_use]
    pub const fn serves_directory(&self) -> bool {
        self.directory.is_some()
    }

    /// Decodes and dispatches a raw request body.
    ///
    /// # Errors
    ///
    /// Returns a `validation_error` for undecodable bodies, and otherwise
    /// whatever [`A2aDispatcher::dispatch`] returns.
    pub async fn dispatch_bytes(&self, body: &[u8]) -> Result<ResponsePayload, ProtocolError> {
        let request = A2aRequest::decode(body)?;
        self.dispatch(request).await
    }

    /// Dispatches a decoded request.
    ///
    /// # Errors
    ///
    /// Returns `unsupported_operation` when the endpoint lacks the required
    /// collaborator, `validation_error` for rejected input, and `internal`
    /// for storage or handler failures.
    pub async fn dispatch(&self, request: A2aRequest) -> Result<ResponsePayload, ProtocolError> {
        let operation = request.operation();
        debug!(operation, "dispatching request");
        match request {
            A2aRequest::Register(draft) => {
                let card = self.directory(operation)?.register(draft).await?;
                Ok(ResponsePayload::Card(Box::new(card)))
            }
            A2aRequest::Deregister(payload) => {
                self.directory(operation)?
                    .deregister(&payload.agent_id)
                    .await?;
                Ok(ResponsePayload::Ack(Ack { ok: true }))
            }
            A2aRequest::Discover(payload) => {
                let cards = self
                    .directory(operation)?
                    .discover(&payload.skill_id, &payload.filters)
                    .await?;
                Ok(ResponsePayload::Cards(cards))
            }
            A2aRequest::Invoke(payload) => {
                let handler = self
                    .tasks
                    .as_ref()
                    .ok_or_else(|| ProtocolError::unsupported(operation))?;
                let result = handler.handle(payload.task_input).await?;
                Ok(ResponsePayload::Task(result))
            }
        }
    }

    /// Lists every registered card.
    ///
    /// # Errors
    ///
    /// Returns `unsupported_operation` on endpoints without a directory, or
    /// `internal` when storage fails.
    pub async fn list_agents(&self) -> Result<Vec<AgentCard>, ProtocolError> {
        Ok(self.directory("list_agents")?.list_all().await?)
    }

    fn directory(&self, operation: &str) -> Result<&Arc<dyn DirectoryOperations>, ProtocolError> {
        self.directory
            .as_ref()
            .ok_or_else(|| ProtocolError::unsupported(operation))
    }
}

impl From<RegistryServiceError> for ProtocolError {
    fn from(err: RegistryServiceError) -> Self {
        match err {
            RegistryServiceError::Domain(domain) => Self::validation(domain.to_string()),
            RegistryServiceError::Repository(repository) => {
                warn!(error = %repository, "directory storage failure");
                Self::internal("directory storage failure")
            }
        }
    }
}

impl From<TaskHandlerError> for ProtocolError {
    fn from(err: TaskHandlerError) -> Self {
        match err {
            TaskHandlerError::InvalidInput(message) => Self::new(ErrorKind::ValidationError, message),
            TaskHandlerError::Failed(message) => {
                warn!(error = %message, "task handler failed");
                Self::internal(message)
            }
        }
    }
}
