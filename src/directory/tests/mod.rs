//! Unit tests for the agent directory.

mod domain_tests;
mod index_tests;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

use crate::directory::domain::{AgentCardDraft, SkillDraft};

/// Clock that only moves when told to.
#[derive(Debug)]
pub(super) struct SteppingClock {
    now: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub(super) fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Self {
            now: Mutex::new(start),
        }
    }

    pub(super) fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += TimeDelta::seconds(seconds);
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builds a draft advertising the given skills.
pub(super) fn worker_draft(agent_id: &str, url: &str, skills: &[&str]) -> AgentCardDraft {
    skills.iter().fold(
        AgentCardDraft::new(agent_id, format!("{agent_id} worker"), url),
        |draft, skill| draft.with_skill(SkillDraft::new(*skill)),
    )
}
