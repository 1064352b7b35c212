//! Startup registration with bounded retries.

use crate::directory::domain::{AgentCard, AgentCardDraft};
use crate::protocol::{ErrorKind, ProtocolError};
use async_trait::async_trait;
use std::num::NonZeroU32;
use std::time::Duration;
use tracing::{info, warn};

/// Connection from a worker to its registry.
#[async_trait]
pub trait RegistryLink: Send + Sync {
    /// Registers or renews `draft`.
    async fn register(&self, draft: AgentCardDraft) -> Result<AgentCard, ProtocolError>;

    /// Removes the card for `agent_id`.
    async fn deregister(&self, agent_id: &str) -> Result<(), ProtocolError>;
}

const DEFAULT_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(3) {
    Some(attempts) => attempts,
    None => NonZeroU32::MIN,
};

const DEFAULT_DELAY: Duration = Duration::from_secs(5);

/// How persistently a worker tries to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    attempts: NonZeroU32,
    delay: Duration,
}

impl RegistrationPolicy {
    /// Creates a policy making up to `attempts` tries, `delay` apart.
    #[must_use]
    pub const fn new(attempts: NonZeroU32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// Returns the maximum number of attempts.
    #[must_use]
    pub const fn attempts(&self) -> NonZeroU32 {
        self.attempts
    }

    /// Returns the pause between attempts.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RegistrationPolicy {
    /// Three attempts, five seconds apart.
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPTS, DEFAULT_DELAY)
    }
}

/// Registers `draft`, retrying transient failures under `policy`.
///
/// A `validation_error` is never retried: resubmitting the same card cannot
/// succeed.
///
/// # Errors
///
/// Returns the last registration error once attempts are exhausted, or the
/// first validation error.
pub async fn register_with_retry<L>(
    link: &L,
    draft: &AgentCardDraft,
    policy: &RegistrationPolicy,
) -> Result<AgentCard, ProtocolError>
where
    L: RegistryLink + ?Sized,
{
    let mut attempt = 1;
    loop {
        match link.register(draft.clone()).await {
            Ok(card) => {
                info!(agent_id = %card.agent_id(), attempt, "registered with registry");
                return Ok(card);
            }
            Err(err) if err.kind == ErrorKind::ValidationError => return Err(err),
            Err(err) if attempt >= policy.attempts.get() => {
                warn!(agent_id = %draft.agent_id, attempt, error = %err, "registration abandoned");
                return Err(err);
            }
            Err(err) => {
                warn!(agent_id = %draft.agent_id, attempt, error = %err, "registration failed, retrying");
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}
