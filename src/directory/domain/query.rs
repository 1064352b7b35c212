//! Optional refinements applied to discovery results.

use super::AgentCard;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// Filters recognised by discovery in addition to the skill match.
///
/// Filters never change result order; they only drop cards or truncate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryFilters {
    /// Only return cards seen within this many seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_secs: Option<u64>,
    /// Return at most this many cards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl DiscoveryFilters {
    /// Creates filters that accept every matching card.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_age_secs: None,
            limit: None,
        }
    }

    /// Restricts results to cards seen within `seconds`.
    #[must_use]
    pub const fn with_max_age_secs(mut self, seconds: u64) -> Self {
        self.max_age_secs = Some(seconds);
        self
    }

    /// Truncates results to `limit` cards.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Applies the filters to an ordered candidate list.
    #[must_use]
    pub fn apply(&self, candidates: Vec<AgentCard>, now: DateTime<Utc>) -> Vec<AgentCard> {
        let oldest = self.max_age_secs.map(|seconds| {
            i64::try_from(seconds)
                .ok()
                .and_then(TimeDelta::try_seconds)
                .and_then(|age| now.checked_sub_signed(age))
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        });

        let fresh = candidates
            .into_iter()
            .filter(|card| oldest.is_none_or(|cutoff| card.last_seen_at() >= cutoff));

        match self.limit {
            Some(limit) => fresh.take(limit).collect(),
            None => fresh.collect(),
        }
    }
}
