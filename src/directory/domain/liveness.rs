//! Freshness policy for expiring cards of agents that stopped renewing.

use super::{AgentCard, DirectoryDomainError};
use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

/// Maximum age of `last_seen_at` before a card is considered stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivenessPolicy {
    timeout: TimeDelta,
}

impl LivenessPolicy {
    /// Creates a policy from a positive timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::InvalidLivenessTimeout`] when the
    /// timeout is zero or too large to represent as a timestamp offset.
    pub fn new(timeout: Duration) -> Result<Self, DirectoryDomainError> {
        if timeout.is_zero() {
            return Err(DirectoryDomainError::InvalidLivenessTimeout(timeout));
        }
        let delta = TimeDelta::from_std(timeout)
            .map_err(|_| DirectoryDomainError::InvalidLivenessTimeout(timeout))?;
        Ok(Self { timeout: delta })
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> TimeDelta {
        self.timeout
    }

    /// Returns the oldest `last_seen_at` still considered live at `now`.
    #[must_use]
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.timeout)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Returns whether `card` has not been seen within the timeout.
    #[must_use]
    pub fn is_expired(&self, card: &AgentCard, now: DateTime<Utc>) -> bool {
        card.last_seen_at() < self.cutoff(now)
    }
}
