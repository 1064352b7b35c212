//! Agent card aggregate root.

use super::{
    AgentAuthentication, AgentCapabilities, AgentCardDraft, AgentId, AgentSkill, AgentUrl,
    DirectoryDomainError, SkillDraft, SkillId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Validated capability advertisement held by the directory.
///
/// Decoding runs the same validation as [`AgentCard::from_draft`] but keeps
/// the timestamps carried on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredCard")]
pub struct AgentCard {
    agent_id: AgentId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    url: AgentUrl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    #[serde(default)]
    skills: Vec<AgentSkill>,
    #[serde(default)]
    capabilities: AgentCapabilities,
    #[serde(default)]
    authentication: AgentAuthentication,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    default_input_modes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    default_output_modes: Vec<String>,
    registered_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

/// Wire form of a card: the submitted fields plus registry timestamps.
#[derive(Deserialize)]
struct StoredCard {
    #[serde(flatten)]
    draft: AgentCardDraft,
    registered_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl TryFrom<StoredCard> for AgentCard {
    type Error = DirectoryDomainError;

    fn try_from(stored: StoredCard) -> Result<Self, Self::Error> {
        Self::validate(stored.draft, stored.registered_at, stored.last_seen_at)
    }
}

impl AgentCard {
    /// Validates a submitted draft and stamps it with the current time.
    ///
    /// Both `registered_at` and `last_seen_at` are set to the clock's current
    /// time; a repository replacing an existing card carries the original
    /// `registered_at` forward with [`AgentCard::carry_over_registration`].
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError`] when the agent id, name, or URL is
    /// missing or malformed, when a skill id is blank, or when two skills
    /// share an id.
    pub fn from_draft(draft: AgentCardDraft, clock: &impl Clock) -> Result<Self, DirectoryDomainError> {
        let timestamp = clock.utc();
        Self::validate(draft, timestamp, timestamp)
    }

    fn validate(
        draft: AgentCardDraft,
        registered_at: DateTime<Utc>,
        last_seen_at: DateTime<Utc>,
    ) -> Result<Self, DirectoryDomainError> {
        let AgentCardDraft {
            agent_id: raw_id,
            name: raw_name,
            description,
            url: raw_url,
            version,
            skills: skill_drafts,
            capabilities,
            authentication,
            default_input_modes,
            default_output_modes,
        } = draft;

        let name = raw_name.trim().to_owned();
        if name.is_empty() {
            return Err(DirectoryDomainError::EmptyAgentName);
        }
        Ok(Self {
            agent_id: AgentId::new(raw_id)?,
            name,
            description: description.as_deref().and_then(non_blank),
            url: AgentUrl::new(raw_url)?,
            version: version.as_deref().and_then(non_blank),
            skills: validate_skills(skill_drafts)?,
            capabilities,
            authentication,
            default_input_modes,
            default_output_modes,
            registered_at,
            last_seen_at,
        })
    }

    /// Keeps the first-registration timestamp of the card being replaced.
    #[must_use]
    pub const fn carry_over_registration(mut self, previous: &Self) -> Self {
        self.registered_at = previous.registered_at;
        self
    }

    /// Returns the agent identifier.
    #[must_use]
    pub const fn agent_id(&self) -> &AgentId {
        &self.agent_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the invocation endpoint.
    #[must_use]
    pub const fn url(&self) -> &AgentUrl {
        &self.url
    }

    /// Returns the agent version, if any.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Returns the advertised skills in submission order.
    #[must_use]
    pub fn skills(&self) -> &[AgentSkill] {
        &self.skills
    }

    /// Iterates over the advertised skill identifiers.
    pub fn skill_ids(&self) -> impl Iterator<Item = &SkillId> {
        self.skills.iter().map(AgentSkill::skill_id)
    }

    /// Returns whether the card advertises `skill_id`.
    #[must_use]
    pub fn advertises(&self, skill_id: &SkillId) -> bool {
        self.skill_ids().any(|candidate| candidate == skill_id)
    }

    /// Returns the protocol capability flags.
    #[must_use]
    pub const fn capabilities(&self) -> &AgentCapabilities {
        &self.capabilities
    }

    /// Returns the advertised authentication schemes.
    #[must_use]
    pub const fn authentication(&self) -> &AgentAuthentication {
        &self.authentication
    }

    /// Returns the default input modes.
    #[must_use]
    pub fn default_input_modes(&self) -> &[String] {
        &self.default_input_modes
    }

    /// Returns the default output modes.
    #[must_use]
    pub fn default_output_modes(&self) -> &[String] {
        &self.default_output_modes
    }

    /// Returns when the agent first registered.
    #[must_use]
    pub const fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Returns when the agent last registered or renewed.
    #[must_use]
    pub const fn last_seen_at(&self) -> DateTime<Utc> {
        self.last_seen_at
    }

    /// Converts the card back into a submission, dropping timestamps.
    #[must_use]
    pub fn to_draft(&self) -> AgentCardDraft {
        AgentCardDraft {
            agent_id: self.agent_id.to_string(),
            name: self.name.clone(),
            description: self.description.clone(),
            url: self.url.to_string(),
            version: self.version.clone(),
            skills: self
                .skills
                .iter()
                .map(|skill| SkillDraft {
                    skill_id: skill.skill_id().to_string(),
                    name: skill.name().map(str::to_owned),
                    description: skill.description().map(str::to_owned),
                    input_modes: skill.input_modes().to_vec(),
                    output_modes: skill.output_modes().to_vec(),
                    examples: skill.examples().to_vec(),
                })
                .collect(),
            capabilities: self.capabilities,
            authentication: self.authentication.clone(),
            default_input_modes: self.default_input_modes.clone(),
            default_output_modes: self.default_output_modes.clone(),
        }
    }
}

fn validate_skills(drafts: Vec<SkillDraft>) -> Result<Vec<AgentSkill>, DirectoryDomainError> {
    let mut seen = HashSet::with_capacity(drafts.len());
    let mut skills = Vec::with_capacity(drafts.len());
    for draft in drafts {
        let skill_id = SkillId::new(draft.skill_id)?;
        if !seen.insert(skill_id.clone()) {
            return Err(DirectoryDomainError::DuplicateSkill(skill_id.to_string()));
        }
        let mut skill = AgentSkill::new(skill_id)
            .with_input_modes(draft.input_modes)
            .with_output_modes(draft.output_modes)
            .with_examples(draft.examples);
        if let Some(name) = draft.name {
            skill = skill.with_name(name);
        }
        if let Some(description) = draft.description {
            skill = skill.with_description(description);
        }
        skills.push(skill);
    }
    Ok(skills)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
