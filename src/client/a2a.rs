//! Envelope transport over HTTP.

use super::ClientError;
use crate::directory::domain::{AgentCard, AgentCardDraft, AgentUrl, DiscoveryFilters};
use crate::protocol::{
    A2A_PATH, A2aRequest, A2aResponse, Ack, DeregisterPayload, DiscoverPayload, InvokePayload,
    TaskInput, TaskResult,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// HTTP client for A2A endpoints with a per-request timeout.
#[derive(Debug, Clone)]
pub struct A2aClient {
    http: reqwest::Client,
}

impl A2aClient {
    /// Creates a client whose every request gives up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Build`] when the TLS backend cannot be set up.
    pub fn new(timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self { http })
    }

    /// Posts `request` to the A2A path of `target` and decodes the result.
    ///
    /// Error envelopes are decoded whatever the HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unreachable`] on transport failure or timeout,
    /// [`ClientError::Decode`] when the body is not a response envelope, and
    /// [`ClientError::Remote`] when the endpoint answered with an error.
    pub async fn send<T>(&self, target: &AgentUrl, request: &A2aRequest) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = target.join(A2A_PATH);
        debug!(%url, operation = request.operation(), "sending request");
        let unreachable = |source| ClientError::Unreachable {
            url: url.clone(),
            source,
        };
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(unreachable)?;
        let body = response.bytes().await.map_err(unreachable)?;
        let envelope: A2aResponse<T> =
            serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
                url: url.clone(),
                source,
            })?;
        Ok(envelope.into_result()?)
    }

    /// Registers `draft` with the registry at `registry`.
    ///
    /// # Errors
    ///
    /// See [`A2aClient::send`].
    pub async fn register(
        &self,
        registry: &AgentUrl,
        draft: AgentCardDraft,
    ) -> Result<AgentCard, ClientError> {
        self.send(registry, &A2aRequest::Register(draft)).await
    }

    /// Removes `agent_id` from the registry at `registry`.
    ///
    /// # Errors
    ///
    /// See [`A2aClient::send`].
    pub async fn deregister(&self, registry: &AgentUrl, agent_id: &str) -> Result<(), ClientError> {
        let request = A2aRequest::Deregister(DeregisterPayload {
            agent_id: agent_id.to_owned(),
        });
        let _: Ack = self.send(registry, &request).await?;
        Ok(())
    }

    /// Asks the registry at `registry` for agents advertising `skill_id`.
    ///
    /// # Errors
    ///
    /// See [`A2aClient::send`].
    pub async fn discover(
        &self,
        registry: &AgentUrl,
        skill_id: &str,
        filters: DiscoveryFilters,
    ) -> Result<Vec<AgentCard>, ClientError> {
        let request = A2aRequest::Discover(DiscoverPayload {
            skill_id: skill_id.to_owned(),
            filters,
        });
        self.send(registry, &request).await
    }

    /// Runs `task_input` on the agent at `target`.
    ///
    /// # Errors
    ///
    /// See [`A2aClient::send`].
    pub async fn invoke(
        &self,
        target: &AgentUrl,
        task_input: TaskInput,
    ) -> Result<TaskResult, ClientError> {
        self.send(target, &A2aRequest::Invoke(InvokePayload { task_input }))
            .await
    }
}
