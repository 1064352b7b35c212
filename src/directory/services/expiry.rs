//! Background sweep that prunes cards of agents that stopped renewing.

use super::AgentRegistryService;
use crate::directory::{domain::LivenessPolicy, ports::AgentDirectoryRepository};
use mockable::Clock;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

/// Handle to a running expiry sweep.
///
/// The sweep runs until [`ExpirySweeper::shutdown`] is called. Dropping the
/// handle without calling it also stops the sweep, but does not wait for it.
#[derive(Debug)]
pub struct ExpirySweeper {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ExpirySweeper {
    /// Starts sweeping `service` every `interval` under `policy`.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        reason = "tokio::select! expansion uses `%` to pick a starting branch"
    )]
    pub fn spawn<R, C>(
        service: AgentRegistryService<R, C>,
        policy: LivenessPolicy,
        interval: Duration,
    ) -> Self
    where
        R: AgentDirectoryRepository + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let (stop, mut stopped) = oneshot::channel();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticker.tick() => {
                        if let Err(err) = service.sweep_expired(&policy).await {
                            warn!(error = %err, "expiry sweep failed");
                        }
                    }
                }
            }
            debug!("expiry sweep stopped");
        });
        Self { stop, task }
    }

    /// Stops the sweep and waits for the in-flight tick to finish.
    ///
    /// # Errors
    ///
    /// Returns a [`JoinError`] when the sweep task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let Self { stop, task } = self;
        if stop.send(()).is_err() {
            debug!("expiry sweep already finished");
        }
        task.await
    }
}
