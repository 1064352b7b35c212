//! Runs a worker agent that echoes every task it receives.
//!
//! Usage:
//!
//! ```text
//! echo_worker [--bind-addr 127.0.0.1:8001] [--agent-id echo-worker]
//!             [--registry-url http://127.0.0.1:8000]
//!             [--renew-interval-secs <secs>]
//! ```
//!
//! The worker starts serving, then registers its card with the registry
//! (three attempts, five seconds apart, by default). A worker that cannot
//! register keeps serving direct invocations. On Ctrl-C it stops serving and
//! deregisters.

use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use switchboard::client::{A2aClient, ClientError, RemoteDirectory};
use switchboard::config::{ConfigError, WorkerArgs, WorkerConfig};
use switchboard::http::{self, EndpointState};
use switchboard::telemetry;
use switchboard::worker::{EchoTaskHandler, WorkerSession, echo_agent_card};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinError;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum WorkerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("server task failed: {0}")]
    Join(#[from] JoinError),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    telemetry::init()?;
    run(WorkerArgs::parse()).await.map_err(Into::into)
}

async fn run(args: WorkerArgs) -> Result<(), WorkerError> {
    let config = WorkerConfig::try_from(args)?;
    let card = echo_agent_card(&config.agent_id, config.public_url.as_str());

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| WorkerError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    let app = http::router(EndpointState::worker(
        Arc::new(EchoTaskHandler::new(DefaultClock)),
        card.clone(),
    ));
    let server = tokio::spawn(http::serve(listener, app, http::shutdown_signal()));

    let registry = Arc::new(RemoteDirectory::new(
        A2aClient::new(config.request_timeout)?,
        config.registry_url.clone(),
    ));
    let session =
        match WorkerSession::start(registry, card, &config.registration, config.renew_every).await
        {
            Ok(session) => {
                info!(registry = %config.registry_url, "worker registered");
                Some(session)
            }
            Err(err) => {
                warn!(error = %err, "serving without registration");
                None
            }
        };

    let served = server.await?;
    if let Some(registered) = session
        && let Err(err) = registered.stop().await
    {
        warn!(error = %err, "deregistration failed");
    }
    served.map_err(WorkerError::Serve)
}
