//! Delegation flow.

use super::{
    AgentDiscovery, CandidateSelector, DelegationError, FirstCandidate, SkillResolver,
    TaskInvoker,
};
use crate::directory::domain::{AgentCard, AgentId};
use crate::protocol::{ProtocolError, TaskInput, TaskResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of a successful delegation.
#[derive(Debug, Clone, PartialEq)]
pub struct Delegation {
    /// Skill the goal was resolved to.
    pub skill_id: String,
    /// Agent that produced the result.
    pub agent_id: AgentId,
    /// Result relayed from the agent.
    pub result: TaskResult,
}

/// Resolves goals to skills and delegates them to discovered agents.
pub struct Orchestrator<S, D, I>
where
    S: SkillResolver,
    D: AgentDiscovery,
    I: TaskInvoker,
{
    resolver: Arc<S>,
    discovery: Arc<D>,
    invoker: Arc<I>,
    selector: Arc<dyn CandidateSelector>,
}

impl<S, D, I> Clone for Orchestrator<S, D, I>
where
    S: SkillResolver,
    D: AgentDiscovery,
    I: TaskInvoker,
{
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            discovery: Arc::clone(&self.discovery),
            invoker: Arc::clone(&self.invoker),
            selector: Arc::clone(&self.selector),
        }
    }
}

impl<S, D, I> Orchestrator<S, D, I>
where
    S: SkillResolver,
    D: AgentDiscovery,
    I: TaskInvoker,
{
    /// Creates an orchestrator that picks the first discovered candidate.
    #[must_use]
    pub fn new(resolver: Arc<S>, discovery: Arc<D>, invoker: Arc<I>) -> Self {
        Self {
            resolver,
            discovery,
            invoker,
            selector: Arc::new(FirstCandidate),
        }
    }

    /// Replaces the candidate selection policy.
    #[must_use]
    pub fn with_selector(mut self, selector: Arc<dyn CandidateSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// Delegates `goal`, sending the goal text itself as the task.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::delegate_input`].
    pub async fn delegate(&self, goal: &str) -> Result<Delegation, DelegationError> {
        self.delegate_input(goal, TaskInput::text(goal)).await
    }

    /// Resolves `goal` to a skill and delegates `input` to an agent offering
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`DelegationError::UnresolvedGoal`] when no skill fits, and
    /// otherwise whatever [`Orchestrator::delegate_skill`] returns.
    pub async fn delegate_input(
        &self,
        goal: &str,
        input: TaskInput,
    ) -> Result<Delegation, DelegationError> {
        let skill_id = self
            .resolver
            .resolve_skill(goal)
            .await
            .map(|skill| skill.trim().to_owned())
            .filter(|skill| !skill.is_empty())
            .ok_or(DelegationError::UnresolvedGoal)?;
        self.delegate_skill(&skill_id, input).await
    }

    /// Delegates `input` to an agent advertising `skill_id`.
    ///
    /// When the chosen agent fails, either in transport or by reporting the
    /// task as failed, discovery runs once more and the task is retried on a
    /// different candidate, if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`DelegationError::NoCapableAgent`] when discovery is empty,
    /// [`DelegationError::Discovery`] when the first discovery fails, and
    /// [`DelegationError::Invocation`] when the last attempted agent failed.
    /// A failed rediscovery surfaces the first invocation error.
    pub async fn delegate_skill(
        &self,
        skill_id: &str,
        input: TaskInput,
    ) -> Result<Delegation, DelegationError> {
        let candidates = self.discover(skill_id).await?;
        let first = self
            .selector
            .select(&candidates, None)
            .ok_or_else(|| DelegationError::NoCapableAgent(skill_id.to_owned()))?;

        let source = match self.invoke(skill_id, first, input.clone()).await {
            Ok(delegation) => return Ok(delegation),
            Err(source) => source,
        };
        let failed = first.agent_id().clone();
        warn!(skill_id, agent_id = %failed, error = %source, "delegation failed, rediscovering");

        let retry_candidates = match self.discovery.discover(skill_id).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(skill_id, error = %err, "rediscovery failed, giving up");
                return Err(DelegationError::Invocation {
                    agent_id: failed,
                    source,
                });
            }
        };
        let Some(second) = self.selector.select(&retry_candidates, Some(&failed)) else {
            return Err(DelegationError::Invocation {
                agent_id: failed,
                source,
            });
        };
        self.invoke(skill_id, second, input)
            .await
            .map_err(|retry_source| DelegationError::Invocation {
                agent_id: second.agent_id().clone(),
                source: retry_source,
            })
    }

    async fn discover(&self, skill_id: &str) -> Result<Vec<AgentCard>, DelegationError> {
        self.discovery
            .discover(skill_id)
            .await
            .map_err(|source| DelegationError::Discovery {
                skill_id: skill_id.to_owned(),
                source,
            })
    }

    async fn invoke(
        &self,
        skill_id: &str,
        card: &AgentCard,
        input: TaskInput,
    ) -> Result<Delegation, ProtocolError> {
        info!(skill_id, agent_id = %card.agent_id(), url = %card.url(), "delegating task");
        let result = self.invoker.invoke(card.url(), input).await?;
        if !result.is_completed() {
            let reason = result
                .status
                .message
                .as_deref()
                .unwrap_or("no reason given");
            return Err(ProtocolError::internal(format!(
                "agent reported task {} as failed: {reason}",
                result.task_id
            )));
        }
        Ok(Delegation {
            skill_id: skill_id.to_owned(),
            agent_id: card.agent_id().clone(),
            result,
        })
    }
}
