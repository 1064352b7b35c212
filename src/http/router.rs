//! Route table and handlers.

use crate::directory::{
    domain::{AgentCard, AgentCardDraft, AgentUrl},
    ports::AgentDirectoryRepository,
    services::{AgentRegistryService, registry_agent_card},
};
use crate::dispatch::{A2aDispatcher, TaskHandler};
use crate::protocol::{
    A2A_PATH, AGENT_CARD_PATH, AGENTS_PATH, A2aResponse, ErrorKind, HEALTH_PATH, ProtocolError,
    ResponsePayload,
};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use mockable::Clock;
use serde::Serialize;
use std::sync::Arc;

/// Shared state of an endpoint's router.
#[derive(Clone)]
pub struct EndpointState {
    dispatcher: A2aDispatcher,
    card: Arc<AgentCardDraft>,
}

impl EndpointState {
    /// Creates state serving `card` as the endpoint's self-description.
    #[must_use]
    pub fn new(dispatcher: A2aDispatcher, card: AgentCardDraft) -> Self {
        Self {
            dispatcher,
            card: Arc::new(card),
        }
    }

    /// State of a registry endpoint advertising itself at `public_url`.
    #[must_use]
    pub fn registry<R, C>(service: AgentRegistryService<R, C>, public_url: &AgentUrl) -> Self
    where
        R: AgentDirectoryRepository + 'static,
        C: Clock + Send + Sync + 'static,
    {
        Self::new(
            A2aDispatcher::new().with_directory(Arc::new(service)),
            registry_agent_card(public_url),
        )
    }

    /// State of a worker endpoint answering `invoke` with `handler`.
    #[must_use]
    pub fn worker(handler: Arc<dyn TaskHandler>, card: AgentCardDraft) -> Self {
        Self::new(A2aDispatcher::new().with_task_handler(handler), card)
    }
}

/// Maps an error kind to its HTTP status.
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ValidationError => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound | ErrorKind::NoCapableAgent => StatusCode::NOT_FOUND,
        ErrorKind::UnsupportedOperation => StatusCode::NOT_IMPLEMENTED,
        ErrorKind::Unreachable => StatusCode::BAD_GATEWAY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Protocol error rendered as an error envelope.
#[derive(Debug)]
pub struct ApiError(pub ProtocolError);

impl From<ProtocolError> for ApiError {
    fn from(err: ProtocolError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(error) = self;
        let status = status_for(error.kind);
        let body: A2aResponse<()> = A2aResponse::Error { error };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
struct AgentListing {
    agents: Vec<AgentCard>,
}

/// Builds the endpoint router.
#[must_use]
pub fn router(state: EndpointState) -> Router {
    Router::new()
        .route(A2A_PATH, post(handle_a2a))
        .route(HEALTH_PATH, get(health))
        .route(AGENT_CARD_PATH, get(agent_card))
        .route(AGENTS_PATH, get(list_agents))
        .with_state(state)
}

async fn handle_a2a(
    State(state): State<EndpointState>,
    body: Bytes,
) -> Result<Json<A2aResponse<ResponsePayload>>, ApiError> {
    let payload = state.dispatcher.dispatch_bytes(&body).await?;
    Ok(Json(A2aResponse::ok(payload)))
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn agent_card(State(state): State<EndpointState>) -> Json<AgentCardDraft> {
    Json(state.card.as_ref().clone())
}

async fn list_agents(State(state): State<EndpointState>) -> Result<Json<AgentListing>, ApiError> {
    let agents = state.dispatcher.list_agents().await?;
    Ok(Json(AgentListing { agents }))
}
