//! Default candidate selection.

use super::CandidateSelector;
use crate::directory::domain::{AgentCard, AgentId};

/// Picks the first candidate in discovery order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl CandidateSelector for FirstCandidate {
    fn select<'a>(
        &self,
        candidates: &'a [AgentCard],
        excluded: Option<&AgentId>,
    ) -> Option<&'a AgentCard> {
        candidates
            .iter()
            .find(|card| excluded.is_none_or(|id| card.agent_id() != id))
    }
}
