//! Protocol capability and authentication metadata carried on agent cards.

use serde::{Deserialize, Serialize};

/// Optional protocol features an agent endpoint supports.
///
/// All flags default to `false`; the registry stores them verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentCapabilities {
    streaming: bool,
    push_notifications: bool,
    state_transition_history: bool,
}

impl AgentCapabilities {
    /// Creates capabilities with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            streaming: false,
            push_notifications: false,
            state_transition_history: false,
        }
    }

    /// Sets whether streaming responses are supported.
    #[must_use]
    pub const fn with_streaming(mut self, enabled: bool) -> Self {
        self.streaming = enabled;
        self
    }

    /// Sets whether push notifications are supported.
    #[must_use]
    pub const fn with_push_notifications(mut self, enabled: bool) -> Self {
        self.push_notifications = enabled;
        self
    }

    /// Sets whether task state history is retained.
    #[must_use]
    pub const fn with_state_transition_history(mut self, enabled: bool) -> Self {
        self.state_transition_history = enabled;
        self
    }

    /// Returns whether streaming responses are supported.
    #[must_use]
    pub const fn streaming(&self) -> bool {
        self.streaming
    }

    /// Returns whether push notifications are supported.
    #[must_use]
    pub const fn push_notifications(&self) -> bool {
        self.push_notifications
    }

    /// Returns whether task state history is retained.
    #[must_use]
    pub const fn state_transition_history(&self) -> bool {
        self.state_transition_history
    }
}

/// Authentication schemes an agent endpoint accepts (e.g. `bearer`).
///
/// Advertised only; the registry does not enforce them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentAuthentication {
    schemes: Vec<String>,
}

impl AgentAuthentication {
    /// Creates an authentication descriptor from scheme names.
    #[must_use]
    pub fn new(schemes: impl IntoIterator<Item = String>) -> Self {
        Self {
            schemes: schemes.into_iter().collect(),
        }
    }

    /// Returns the advertised schemes.
    #[must_use]
    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }
}
