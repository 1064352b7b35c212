//! Task handler that returns its input.

use crate::directory::domain::{AgentCardDraft, SkillDraft};
use crate::dispatch::{TaskHandler, TaskHandlerError};
use crate::protocol::{TaskInput, TaskResult};
use async_trait::async_trait;
use mockable::Clock;

/// Skill advertised by the echo worker.
pub const ECHO_SKILL_ID: &str = "echo";

/// Completes every task by returning its parts as artifacts.
#[derive(Debug, Clone)]
pub struct EchoTaskHandler<C> {
    clock: C,
}

impl<C> EchoTaskHandler<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a handler stamping results with `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl<C> TaskHandler for EchoTaskHandler<C>
where
    C: Clock + Send + Sync,
{
    async fn handle(&self, input: TaskInput) -> Result<TaskResult, TaskHandlerError> {
        if input.parts.is_empty() {
            return Err(TaskHandlerError::InvalidInput(
                "task has no parts to echo".to_owned(),
            ));
        }
        let TaskInput { task_id, parts } = input;
        Ok(TaskResult::completed(task_id, parts, self.clock.utc()))
    }
}

/// Builds the card an echo worker registers.
#[must_use]
pub fn echo_agent_card(agent_id: &str, url: &str) -> AgentCardDraft {
    let text = || vec!["text".to_owned()];
    AgentCardDraft::new(agent_id, "EchoWorker", url)
        .with_description("Returns the parts of every task it receives.")
        .with_version(env!("CARGO_PKG_VERSION"))
        .with_skill(
            SkillDraft::new(ECHO_SKILL_ID)
                .with_name("Echo")
                .with_description("Echoes task parts back as artifacts.")
                .with_modes(text(), text()),
        )
}
