//! Unvalidated agent card submissions.

use super::{AgentAuthentication, AgentCapabilities};
use serde::{Deserialize, Serialize};

/// Agent card exactly as submitted by a registering agent.
///
/// Every field is optional on the wire so that missing values surface as
/// domain validation errors rather than decoding failures. Timestamps are
/// never accepted from callers; the registry assigns them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentCardDraft {
    /// Stable identifier of the agent instance.
    pub agent_id: String,
    /// Human-readable agent name.
    pub name: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Endpoint accepting task invocations.
    pub url: String,
    /// Optional agent version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Advertised skills.
    pub skills: Vec<SkillDraft>,
    /// Protocol capability flags.
    pub capabilities: AgentCapabilities,
    /// Accepted authentication schemes.
    pub authentication: AgentAuthentication,
    /// Input modes assumed when a skill declares none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_input_modes: Vec<String>,
    /// Output modes assumed when a skill declares none.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub default_output_modes: Vec<String>,
}

impl AgentCardDraft {
    /// Creates a draft with the three identifying fields set.
    #[must_use]
    pub fn new(
        agent_id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Appends a skill.
    #[must_use]
    pub fn with_skill(mut self, skill: SkillDraft) -> Self {
        self.skills.push(skill);
        self
    }

    /// Replaces the endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the protocol capability flags.
    #[must_use]
    pub const fn with_capabilities(mut self, capabilities: AgentCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }
}

/// Skill descriptor exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillDraft {
    /// Skill identifier; must be unique within the card.
    #[serde(alias = "id")]
    pub skill_id: String,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accepted input modes.
    #[serde(alias = "inputModes", skip_serializing_if = "Vec::is_empty")]
    pub input_modes: Vec<String>,
    /// Produced output modes.
    #[serde(alias = "outputModes", skip_serializing_if = "Vec::is_empty")]
    pub output_modes: Vec<String>,
    /// Example prompts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
}

impl SkillDraft {
    /// Creates a skill draft with only its identifier.
    #[must_use]
    pub fn new(skill_id: impl Into<String>) -> Self {
        Self {
            skill_id: skill_id.into(),
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets input and output modes in one call.
    #[must_use]
    pub fn with_modes(
        mut self,
        input: impl IntoIterator<Item = String>,
        output: impl IntoIterator<Item = String>,
    ) -> Self {
        self.input_modes = input.into_iter().collect();
        self.output_modes = output.into_iter().collect();
        self
    }
}
