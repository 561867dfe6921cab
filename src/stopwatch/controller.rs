use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use anyhow::Result;
use log::{info, trace};
use serde::Serialize;
use tokio::{
    sync::Mutex,
    time::{Duration, Instant},
};

use crate::{
    display::Display,
    scheduler::{Scheduler, TaskHandle},
};

use super::{StopwatchState, StopwatchView};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchSnapshot {
    pub state: StopwatchState,
    pub view: StopwatchView,
}

/// Pushes the stopwatch view to the display when it changes.
struct ViewPublisher {
    display: Arc<dyn Display>,
    last: StdMutex<Option<StopwatchView>>,
}

impl ViewPublisher {
    fn publish(&self, view: StopwatchView) {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if last.as_ref() == Some(&view) {
            return;
        }
        self.display.show_stopwatch(&view);
        *last = Some(view);
    }
}

#[derive(Clone)]
pub struct StopwatchController {
    state: Arc<Mutex<StopwatchState>>,
    publisher: Arc<ViewPublisher>,
    scheduler: Scheduler,
    ticker: Arc<Mutex<Option<TaskHandle>>>,
    tick_interval: Duration,
}

impl StopwatchController {
    pub fn new(display: Arc<dyn Display>, scheduler: Scheduler) -> Self {
        Self {
            state: Arc::new(Mutex::new(StopwatchState::new())),
            publisher: Arc::new(ViewPublisher {
                display,
                last: StdMutex::new(None),
            }),
            scheduler,
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: TICK_INTERVAL,
        }
    }

    pub async fn get_snapshot(&self) -> StopwatchSnapshot {
        let mut guard = self.state.lock().await;
        guard.sync(Instant::now());
        StopwatchSnapshot {
            view: guard.view(),
            state: guard.clone(),
        }
    }

    /// Show the initial "Press Start" view.
    pub async fn publish(&self) {
        let view = {
            let mut guard = self.state.lock().await;
            guard.sync(Instant::now());
            guard.view()
        };
        self.publisher.publish(view);
    }

    pub async fn start(&self) -> Result<StopwatchSnapshot> {
        {
            let mut state = self.state.lock().await;
            state.start(Instant::now())?;
            info!("Stopwatch started at {}ms", state.elapsed_ms);
        }

        self.spawn_ticker().await;
        self.publish().await;
        Ok(self.get_snapshot().await)
    }

    pub async fn pause(&self) -> Result<StopwatchSnapshot> {
        {
            let mut state = self.state.lock().await;
            state.pause(Instant::now())?;
            info!("Stopwatch paused at {}ms", state.elapsed_ms);
        }

        self.cancel_ticker().await?;
        self.publish().await;
        Ok(self.get_snapshot().await)
    }

    /// The start/pause button.
    pub async fn toggle(&self) -> Result<StopwatchSnapshot> {
        let running = self.state.lock().await.is_running();
        if running {
            self.pause().await
        } else {
            self.start().await
        }
    }

    pub async fn reset(&self) -> Result<StopwatchSnapshot> {
        {
            let mut state = self.state.lock().await;
            state.reset()?;
            info!("Stopwatch reset");
        }

        // Paused stopwatches have no ticker; this only guards against a stale handle.
        self.cancel_ticker().await?;
        self.publish().await;
        Ok(self.get_snapshot().await)
    }

    pub async fn is_ticking(&self) -> bool {
        self.ticker
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    async fn spawn_ticker(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if let Some(handle) = ticker_guard.take() {
            handle.cancel();
        }

        let state = self.state.clone();
        let publisher = self.publisher.clone();

        let handle = self.scheduler.every(self.tick_interval, move || {
            let state = state.clone();
            let publisher = publisher.clone();
            async move {
                let view = {
                    let mut guard = state.lock().await;
                    if !guard.is_running() {
                        return;
                    }
                    guard.sync(Instant::now());
                    trace!("Stopwatch tick at {}ms", guard.elapsed_ms);
                    guard.view()
                };
                publisher.publish(view);
            }
        });

        *ticker_guard = Some(handle);
    }

    async fn cancel_ticker(&self) -> Result<()> {
        let handle = self.ticker.lock().await.take();
        match handle {
            Some(handle) => handle.stop().await,
            None => Ok(()),
        }
    }
}
