//! Delegates one goal to an agent offering a given skill.
//!
//! Usage:
//!
//! ```text
//! delegate --skill <skill_id> [--registry-url <url>] <goal>...
//! ```
//!
//! Discovers agents advertising the skill, invokes the first one with the
//! goal text, retries once on a different agent if that fails, and prints
//! the task result as JSON.

use clap::Parser;
use std::io::Write;
use std::sync::Arc;
use switchboard::client::{A2aClient, ClientError, RemoteDirectory};
use switchboard::config::{ConfigError, DelegateArgs, DelegateConfig};
use switchboard::orchestrator::{DelegationError, FixedSkill, Orchestrator};
use switchboard::telemetry;
use thiserror::Error;
use tracing::info;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum DelegateError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Delegation(#[from] DelegationError),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write result: {0}")]
    Output(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    telemetry::init()?;
    run(DelegateArgs::parse()).await.map_err(Into::into)
}

async fn run(args: DelegateArgs) -> Result<(), DelegateError> {
    let config = DelegateConfig::try_from(args)?;
    let client = A2aClient::new(config.request_timeout)?;
    let orchestrator = Orchestrator::new(
        Arc::new(FixedSkill::new(config.skill)),
        Arc::new(RemoteDirectory::new(client.clone(), config.registry_url)),
        Arc::new(client),
    );

    let delegation = orchestrator.delegate(&config.goal).await?;
    info!(
        skill_id = %delegation.skill_id,
        agent_id = %delegation.agent_id,
        "task delegated"
    );
    let rendered = serde_json::to_string_pretty(&delegation.result)?;
    writeln!(std::io::stdout().lock(), "{rendered}")?;
    Ok(())
}
