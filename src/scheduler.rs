//! Timer tasks with explicit cancellation.
//!
//! Every task gets a child of the scheduler's root token, so cancelling one
//! task never touches its siblings while [`Scheduler::shutdown`] stops them all.

use std::future::Future;

use anyhow::{Context, Result};
use tokio::{
    task::JoinHandle,
    time::{self, Duration, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Default)]
pub struct Scheduler {
    root: CancellationToken,
}

/// Handle to a scheduled task.
pub struct TaskHandle {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `callback` once after `delay` unless the handle is cancelled first.
    pub fn after<F>(&self, delay: Duration, callback: F) -> TaskHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let token = self.root.child_token();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = time::sleep(delay) => callback(),
            }
        });

        TaskHandle { token, handle }
    }

    /// Run `callback` every `period`, starting immediately. Missed ticks are
    /// delayed rather than bunched up.
    pub fn every<F, Fut>(&self, period: Duration, mut callback: F) -> TaskHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = self.root.child_token();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => callback().await,
                }
            }
        });

        TaskHandle { token, handle }
    }

    /// Cancel every task spawned from this scheduler.
    pub fn shutdown(&self) {
        self.root.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.root.is_cancelled()
    }
}

impl TaskHandle {
    /// Request cancellation without waiting for the task to wind down.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the task and wait until it has exited.
    pub async fn stop(self) -> Result<()> {
        self.token.cancel();
        self.handle
            .await
            .context("scheduled task failed to join")
    }
}
