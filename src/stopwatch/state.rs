use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tokio::time::Instant;

/// Shown instead of a duration while nothing has been timed.
pub const PRESS_START: &str = "Press Start";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum StopwatchStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// What the stopwatch label and its two buttons show.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchView {
    pub text: String,
    pub running: bool,
    pub can_reset: bool,
}

impl StopwatchView {
    /// Caption for the start/pause button.
    pub fn toggle_caption(&self) -> &'static str {
        if self.running {
            "Pause"
        } else {
            "Start"
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopwatchState {
    pub status: StopwatchStatus,
    pub elapsed_ms: u64,
    /// Time accumulated from earlier running windows; combines with `running_anchor`
    /// to give the true elapsed time.
    #[serde(skip)]
    pub elapsed_ms_baseline: u64,
    #[serde(skip)]
    pub running_anchor: Option<Instant>,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.status == StopwatchStatus::Running
    }

    /// Reset is only offered while stopped with something on the clock.
    pub fn can_reset(&self) -> bool {
        !self.is_running() && self.elapsed_ms > 0
    }

    /// Elapsed time as of `now`, without mutating anything.
    pub fn elapsed_at(&self, now: Instant) -> u64 {
        match (self.status, self.running_anchor) {
            (StopwatchStatus::Running, Some(anchor)) => self
                .elapsed_ms_baseline
                .saturating_add(millis(now.saturating_duration_since(anchor).as_millis())),
            _ => self.elapsed_ms,
        }
    }

    pub fn sync(&mut self, now: Instant) {
        self.elapsed_ms = self.elapsed_at(now);
    }

    /// Start from idle or resume from paused, keeping what was accumulated.
    pub fn start(&mut self, now: Instant) -> Result<()> {
        if self.is_running() {
            bail!("stopwatch already running");
        }
        self.elapsed_ms_baseline = self.elapsed_ms;
        self.running_anchor = Some(now);
        self.status = StopwatchStatus::Running;
        Ok(())
    }

    /// Freeze the elapsed time at `now`.
    pub fn pause(&mut self, now: Instant) -> Result<()> {
        if !self.is_running() {
            bail!("stopwatch is not running");
        }
        self.sync(now);
        self.status = StopwatchStatus::Paused;
        self.running_anchor = None;
        self.elapsed_ms_baseline = self.elapsed_ms;
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        if self.is_running() {
            bail!("cannot reset a running stopwatch");
        }
        if self.elapsed_ms == 0 {
            bail!("nothing to reset");
        }
        *self = Self::default();
        Ok(())
    }

    pub fn display_text(&self) -> String {
        if self.elapsed_ms == 0 {
            PRESS_START.to_string()
        } else {
            format_elapsed(self.elapsed_ms)
        }
    }

    pub fn view(&self) -> StopwatchView {
        StopwatchView {
            text: self.display_text(),
            running: self.is_running(),
            can_reset: self.can_reset(),
        }
    }
}

fn millis(value: u128) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

/// `HH:MM:SS`, zero padded. Hours keep counting past 24.
pub fn format_elapsed(ms: u64) -> String {
    let total_seconds = ms / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
