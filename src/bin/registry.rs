//! Runs the skill-indexed agent registry.
//!
//! Usage:
//!
//! ```text
//! registry [--bind-addr 127.0.0.1:8000] [--public-url <url>]
//!          [--liveness-timeout-secs <secs>] [--sweep-interval-secs <secs>]
//! ```
//!
//! Every flag also reads a `SWITCHBOARD_*` environment variable. Cards are
//! kept until deregistered unless a liveness timeout is configured, in which
//! case a background sweep prunes cards that stopped renewing.

use clap::Parser;
use mockable::DefaultClock;
use std::net::SocketAddr;
use std::sync::Arc;
use switchboard::config::{ConfigError, RegistryArgs, RegistryConfig};
use switchboard::directory::{
    adapters::memory::InMemoryAgentDirectory,
    services::{AgentRegistryService, ExpirySweeper},
};
use switchboard::http::{self, EndpointState};
use switchboard::telemetry;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum RegistryError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    telemetry::init()?;
    run(RegistryArgs::parse()).await.map_err(Into::into)
}

async fn run(args: RegistryArgs) -> Result<(), RegistryError> {
    let config = RegistryConfig::try_from(args)?;
    let service = AgentRegistryService::new(
        Arc::new(InMemoryAgentDirectory::new()),
        Arc::new(DefaultClock),
    );

    let sweeper = config.expiry.map(|expiry| {
        info!(
            timeout_secs = expiry.policy.timeout().num_seconds(),
            interval = ?expiry.sweep_interval,
            "liveness expiry enabled"
        );
        ExpirySweeper::spawn(service.clone(), expiry.policy, expiry.sweep_interval)
    });

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| RegistryError::Bind {
            addr: config.bind_addr,
            source,
        })?;
    let app = http::router(EndpointState::registry(service, &config.public_url));
    info!(public_url = %config.public_url, "registry ready");
    let served = http::serve(listener, app, http::shutdown_signal())
        .await
        .map_err(RegistryError::Serve);

    if let Some(running) = sweeper
        && let Err(err) = running.shutdown().await
    {
        warn!(error = %err, "expiry sweep ended abnormally");
    }
    served
}
