//! Command-line and environment configuration.
//!
//! Each binary parses a `clap` argument struct (every flag has an
//! environment fallback) and validates it into a plain config struct before
//! anything is started.

use crate::directory::domain::{AgentUrl, DirectoryDomainError, LivenessPolicy};
use crate::worker::RegistrationPolicy;
use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A URL setting is not a valid endpoint.
    #[error("invalid {setting}: {source}")]
    InvalidUrl {
        /// Name of the offending setting.
        setting: &'static str,
        /// Validation failure.
        #[source]
        source: DirectoryDomainError,
    },

    /// The liveness timeout cannot be used.
    #[error(transparent)]
    InvalidLivenessTimeout(DirectoryDomainError),

    /// An interval setting is zero.
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
}

fn endpoint(setting: &'static str, raw: &str) -> Result<AgentUrl, ConfigError> {
    AgentUrl::new(raw).map_err(|source| ConfigError::InvalidUrl { setting, source })
}

const fn positive_secs(setting: &'static str, secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::ZeroInterval(setting));
    }
    Ok(Duration::from_secs(secs))
}

/// Registry server arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "switchboard-registry", version, about = "Skill-indexed agent registry")]
pub struct RegistryArgs {
    /// Address to listen on.
    #[arg(long, env = "SWITCHBOARD_BIND_ADDR", default_value = "127.0.0.1:8000")]
    pub bind_addr: SocketAddr,

    /// URL advertised in the registry's own card; defaults to the bind
    /// address.
    #[arg(long, env = "SWITCHBOARD_PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Expire cards not renewed within this many seconds; expiry is off when
    /// unset.
    #[arg(long, env = "SWITCHBOARD_LIVENESS_TIMEOUT_SECS")]
    pub liveness_timeout_secs: Option<u64>,

    /// Seconds between expiry sweeps.
    #[arg(long, env = "SWITCHBOARD_SWEEP_INTERVAL_SECS", default_value_t = 30)]
    pub sweep_interval_secs: u64,
}

/// Liveness expiry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryConfig {
    /// Maximum age of `last_seen_at`.
    pub policy: LivenessPolicy,
    /// Pause between sweeps.
    pub sweep_interval: Duration,
}

/// Validated registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// URL advertised in the registry's own card.
    pub public_url: AgentUrl,
    /// Expiry settings; `None` keeps cards until deregistered.
    pub expiry: Option<ExpiryConfig>,
}

impl TryFrom<RegistryArgs> for RegistryConfig {
    type Error = ConfigError;

    fn try_from(args: RegistryArgs) -> Result<Self, Self::Error> {
        let public_url = match args.public_url {
            Some(raw) => endpoint("public url", &raw)?,
            None => endpoint("public url", &format!("http://{}", args.bind_addr))?,
        };
        let expiry = args
            .liveness_timeout_secs
            .map(|secs| {
                let policy = LivenessPolicy::new(Duration::from_secs(secs))
                    .map_err(ConfigError::InvalidLivenessTimeout)?;
                let sweep_interval = positive_secs("sweep interval", args.sweep_interval_secs)?;
                Ok::<_, ConfigError>(ExpiryConfig {
                    policy,
                    sweep_interval,
                })
            })
            .transpose()?;
        Ok(Self {
            bind_addr: args.bind_addr,
            public_url,
            expiry,
        })
    }
}

/// Echo worker arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "switchboard-echo-worker", version, about = "Echo worker agent")]
pub struct WorkerArgs {
    /// Address to listen on.
    #[arg(long, env = "SWITCHBOARD_WORKER_BIND_ADDR", default_value = "127.0.0.1:8001")]
    pub bind_addr: SocketAddr,

    /// URL advertised in the worker's card; defaults to the bind address.
    #[arg(long, env = "SWITCHBOARD_WORKER_PUBLIC_URL")]
    pub public_url: Option<String>,

    /// Agent id the worker registers under.
    #[arg(long, env = "SWITCHBOARD_WORKER_AGENT_ID", default_value = "echo-worker")]
    pub agent_id: String,

    /// Registry to register with.
    #[arg(long, env = "SWITCHBOARD_REGISTRY_URL", default_value = "http://127.0.0.1:8000")]
    pub registry_url: String,

    /// Registration attempts before giving up.
    #[arg(long, env = "SWITCHBOARD_WORKER_REGISTRATION_ATTEMPTS", default_value = "3")]
    pub registration_attempts: NonZeroU32,

    /// Seconds between registration attempts.
    #[arg(long, env = "SWITCHBOARD_WORKER_REGISTRATION_DELAY_SECS", default_value_t = 5)]
    pub registration_delay_secs: u64,

    /// Re-register every this many seconds; renewal is off when unset.
    #[arg(long, env = "SWITCHBOARD_WORKER_RENEW_INTERVAL_SECS")]
    pub renew_interval_secs: Option<u64>,

    /// Per-request timeout for registry calls, in seconds.
    #[arg(long, env = "SWITCHBOARD_WORKER_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

/// Validated worker configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// URL advertised in the worker's card.
    pub public_url: AgentUrl,
    /// Agent id the worker registers under.
    pub agent_id: String,
    /// Registry to register with.
    pub registry_url: AgentUrl,
    /// Startup registration retries.
    pub registration: RegistrationPolicy,
    /// Renewal cadence, if any.
    pub renew_every: Option<Duration>,
    /// Per-request timeout for registry calls.
    pub request_timeout: Duration,
}

impl TryFrom<WorkerArgs> for WorkerConfig {
    type Error = ConfigError;

    fn try_from(args: WorkerArgs) -> Result<Self, Self::Error> {
        let public_url = match args.public_url {
            Some(raw) => endpoint("worker public url", &raw)?,
            None => endpoint("worker public url", &format!("http://{}", args.bind_addr))?,
        };
        let renew_every = args
            .renew_interval_secs
            .map(|secs| positive_secs("renew interval", secs))
            .transpose()?;
        Ok(Self {
            bind_addr: args.bind_addr,
            public_url,
            agent_id: args.agent_id,
            registry_url: endpoint("registry url", &args.registry_url)?,
            registration: RegistrationPolicy::new(
                args.registration_attempts,
                Duration::from_secs(args.registration_delay_secs),
            ),
            renew_every,
            request_timeout: positive_secs("request timeout", args.request_timeout_secs)?,
        })
    }
}

/// One-shot delegation arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "switchboard-delegate", version, about = "Delegate a goal to a capable agent")]
pub struct DelegateArgs {
    /// Registry to discover agents through.
    #[arg(long, env = "SWITCHBOARD_REGISTRY_URL", default_value = "http://127.0.0.1:8000")]
    pub registry_url: String,

    /// Skill the goal requires.
    #[arg(long)]
    pub skill: String,

    /// Per-request timeout, in seconds.
    #[arg(long, env = "SWITCHBOARD_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Goal text sent to the chosen agent.
    #[arg(required = true)]
    pub goal: Vec<String>,
}

/// Validated delegation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateConfig {
    /// Registry to discover agents through.
    pub registry_url: AgentUrl,
    /// Skill the goal requires.
    pub skill: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Goal text.
    pub goal: String,
}

impl TryFrom<DelegateArgs> for DelegateConfig {
    type Error = ConfigError;

    fn try_from(args: DelegateArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            registry_url: endpoint("registry url", &args.registry_url)?,
            skill: args.skill,
            request_timeout: positive_secs("request timeout", args.request_timeout_secs)?,
            goal: args.goal.join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn registry_defaults_disable_expiry() {
        let args = RegistryArgs::try_parse_from(["registry"]).expect("defaults parse");
        let config = RegistryConfig::try_from(args).expect("valid config");
        assert_eq!(config.public_url.as_str(), "http://127.0.0.1:8000");
        assert_eq!(config.expiry, None);
    }

    #[rstest]
    fn liveness_timeout_enables_expiry() {
        let args = RegistryArgs::try_parse_from([
            "registry",
            "--liveness-timeout-secs",
            "300",
            "--sweep-interval-secs",
            "15",
        ])
        .expect("parses");
        let expiry = RegistryConfig::try_from(args)
            .expect("valid config")
            .expiry
            .expect("expiry enabled");
        assert_eq!(expiry.sweep_interval, Duration::from_secs(15));
        assert_eq!(expiry.policy.timeout().num_seconds(), 300);
    }

    #[rstest]
    #[case(&["registry", "--liveness-timeout-secs", "0"])]
    #[case(&["registry", "--liveness-timeout-secs", "60", "--sweep-interval-secs", "0"])]
    #[case(&["registry", "--public-url", "ftp://nowhere"])]
    fn invalid_registry_settings_are_rejected(#[case] argv: &[&str]) {
        let args = RegistryArgs::try_parse_from(argv).expect("parses");
        assert!(RegistryConfig::try_from(args).is_err());
    }

    #[rstest]
    fn worker_defaults_match_registration_policy() {
        let args = WorkerArgs::try_parse_from(["worker"]).expect("defaults parse");
        let config = WorkerConfig::try_from(args).expect("valid config");
        assert_eq!(config.registration, RegistrationPolicy::default());
        assert_eq!(config.renew_every, None);
        assert_eq!(config.public_url.as_str(), "http://127.0.0.1:8001");
    }

    #[rstest]
    fn zero_registration_attempts_fail_to_parse() {
        assert!(WorkerArgs::try_parse_from(["worker", "--registration-attempts", "0"]).is_err());
    }

    #[rstest]
    fn delegate_joins_goal_words() {
        let args = DelegateArgs::try_parse_from(["delegate", "--skill", "echo", "hello", "world"])
            .expect("parses");
        let config = DelegateConfig::try_from(args).expect("valid config");
        assert_eq!(config.goal, "hello world");
        assert_eq!(config.skill, "echo");
    }
}
