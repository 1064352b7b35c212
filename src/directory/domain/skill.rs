//! Skill descriptors advertised on an agent card.

use super::SkillId;
use serde::{Deserialize, Serialize};

/// A single capability an agent claims to perform.
///
/// Only `skill_id` takes part in discovery; the remaining fields are
/// free-form metadata relayed to callers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSkill {
    skill_id: SkillId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    input_modes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    output_modes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    examples: Vec<String>,
}

impl AgentSkill {
    /// Creates a skill descriptor with no metadata.
    #[must_use]
    pub const fn new(skill_id: SkillId) -> Self {
        Self {
            skill_id,
            name: None,
            description: None,
            input_modes: Vec::new(),
            output_modes: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Sets the human-readable skill name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = non_blank(&name.into());
        self
    }

    /// Sets the skill description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = non_blank(&description.into());
        self
    }

    /// Sets the accepted input modes (e.g. `text`, `application/json`).
    #[must_use]
    pub fn with_input_modes(mut self, modes: impl IntoIterator<Item = String>) -> Self {
        self.input_modes = modes.into_iter().collect();
        self
    }

    /// Sets the produced output modes.
    #[must_use]
    pub fn with_output_modes(mut self, modes: impl IntoIterator<Item = String>) -> Self {
        self.output_modes = modes.into_iter().collect();
        self
    }

    /// Sets example prompts for the skill.
    #[must_use]
    pub fn with_examples(mut self, examples: impl IntoIterator<Item = String>) -> Self {
        self.examples = examples.into_iter().collect();
        self
    }

    /// Returns the skill identifier.
    #[must_use]
    pub const fn skill_id(&self) -> &SkillId {
        &self.skill_id
    }

    /// Returns the skill name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the skill description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the accepted input modes.
    #[must_use]
    pub fn input_modes(&self) -> &[String] {
        &self.input_modes
    }

    /// Returns the produced output modes.
    #[must_use]
    pub fn output_modes(&self) -> &[String] {
        &self.output_modes
    }

    /// Returns the example prompts.
    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
