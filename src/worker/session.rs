//! Registration lifetime of a running worker.

use super::{RegistrationPolicy, RegistryLink, register_with_retry};
use crate::directory::domain::{AgentCard, AgentCardDraft};
use crate::protocol::ProtocolError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// A worker's registration, kept fresh until [`WorkerSession::stop`].
#[derive(Debug)]
pub struct WorkerSession<L>
where
    L: RegistryLink + ?Sized,
{
    link: Arc<L>,
    card: AgentCard,
    renewal: Option<(oneshot::Sender<()>, JoinHandle<()>)>,
}

impl<L> WorkerSession<L>
where
    L: RegistryLink + ?Sized + 'static,
{
    /// Registers `draft` and, when `renew_every` is set, re-registers it on
    /// that cadence in the background.
    ///
    /// # Errors
    ///
    /// Returns the registration error when every attempt failed.
    pub async fn start(
        link: Arc<L>,
        draft: AgentCardDraft,
        policy: &RegistrationPolicy,
        renew_every: Option<Duration>,
    ) -> Result<Self, ProtocolError> {
        let card = register_with_retry(link.as_ref(), &draft, policy).await?;
        let renewal =
            renew_every.map(|interval| spawn_renewal(Arc::clone(&link), draft, interval));
        Ok(Self {
            link,
            card,
            renewal,
        })
    }

    /// Returns the card as first stored by the registry.
    #[must_use]
    pub const fn card(&self) -> &AgentCard {
        &self.card
    }

    /// Stops renewal and deregisters the worker.
    ///
    /// # Errors
    ///
    /// Returns the deregistration error; renewal is stopped regardless.
    pub async fn stop(self) -> Result<(), ProtocolError> {
        let Self { link, card, renewal } = self;
        if let Some((stop, task)) = renewal {
            stop_renewal(stop, task).await;
        }
        link.deregister(card.agent_id().as_str()).await?;
        info!(agent_id = %card.agent_id(), "deregistered from registry");
        Ok(())
    }
}

async fn stop_renewal(stop: oneshot::Sender<()>, task: JoinHandle<()>) {
    if stop.send(()).is_err() {
        debug!("renewal already finished");
    }
    if let Err(err) = task.await {
        warn!(error = %err, "renewal task ended abnormally");
    }
}

async fn renew<L>(link: &L, draft: &AgentCardDraft)
where
    L: RegistryLink + ?Sized,
{
    match link.register(draft.clone()).await {
        Ok(card) => debug!(agent_id = %card.agent_id(), "registration renewed"),
        Err(err) => warn!(agent_id = %draft.agent_id, error = %err, "renewal failed"),
    }
}

#[expect(
    clippy::integer_division_remainder_used,
    reason = "tokio::select! expansion uses `%` to pick a starting branch"
)]
fn spawn_renewal<L>(
    link: Arc<L>,
    draft: AgentCardDraft,
    interval: Duration,
) -> (oneshot::Sender<()>, JoinHandle<()>)
where
    L: RegistryLink + ?Sized + 'static,
{
    let (stop, mut stopped) = oneshot::channel();
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                _ = &mut stopped => break,
                _ = ticker.tick() => renew(link.as_ref(), &draft).await,
            }
        }
    });
    (stop, task)
}
