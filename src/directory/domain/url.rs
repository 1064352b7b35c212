//! Validated agent endpoint reference.

use super::DirectoryDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Network address at which an agent accepts task invocations.
///
/// Only `http://` and `https://` references with a non-empty host are
/// accepted. Trailing slashes are removed so endpoint paths join cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AgentUrl(String);

impl AgentUrl {
    /// Creates a validated endpoint reference.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyUrl`] when the value is blank, or
    /// [`DirectoryDomainError::InvalidUrl`] when the scheme is not HTTP(S) or
    /// the host is missing.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let raw = value.into();
        let normalized = raw.trim().trim_end_matches('/').to_owned();
        if normalized.is_empty() {
            return Err(DirectoryDomainError::EmptyUrl);
        }

        let remainder = normalized
            .strip_prefix(HTTP_PREFIX)
            .or_else(|| normalized.strip_prefix(HTTPS_PREFIX))
            .ok_or_else(|| DirectoryDomainError::InvalidUrl(raw.clone()))?;

        let host = remainder.split(['/', '?', '#']).next().unwrap_or_default();
        if host.is_empty() || host.starts_with(':') || host.chars().any(char::is_whitespace) {
            return Err(DirectoryDomainError::InvalidUrl(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the endpoint reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends `path` to the endpoint unless the endpoint already ends with
    /// it.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        let suffix = path.trim_start_matches('/');
        if self.0.ends_with(&format!("/{suffix}")) {
            return self.0.clone();
        }
        format!("{}/{suffix}", self.0)
    }
}

impl TryFrom<String> for AgentUrl {
    type Error = DirectoryDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AgentUrl> for String {
    fn from(value: AgentUrl) -> Self {
        value.0
    }
}

impl AsRef<str> for AgentUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AgentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
