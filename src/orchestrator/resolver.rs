//! Static skill resolution.

use super::SkillResolver;
use async_trait::async_trait;

/// Resolves every goal to the same skill.
///
/// Stands in for a reasoning service when the caller already knows which
/// skill it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSkill(String);

impl FixedSkill {
    /// Creates a resolver answering `skill_id` for any goal.
    #[must_use]
    pub fn new(skill_id: impl Into<String>) -> Self {
        Self(skill_id.into())
    }
}

#[async_trait]
impl SkillResolver for FixedSkill {
    async fn resolve_skill(&self, _goal: &str) -> Option<String> {
        Some(self.0.clone())
    }
}
