use std::sync::Arc;

use log::{debug, info};
use tokio::time::Duration;

use crate::{
    display::{Display, FadingLabel, Label},
    scheduler::{Scheduler, TaskHandle},
};

use super::{ClockFrame, TimeSource};

const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Samples the time source and keeps the three word labels current.
pub struct ClockController {
    source: Arc<dyn TimeSource>,
    display: Arc<dyn Display>,
    scheduler: Scheduler,
    time: FadingLabel,
    date: FadingLabel,
    week: FadingLabel,
    tick_interval: Duration,
}

impl ClockController {
    pub fn new(
        source: Arc<dyn TimeSource>,
        display: Arc<dyn Display>,
        scheduler: Scheduler,
    ) -> Self {
        let label = |which| FadingLabel::new(which, display.clone(), scheduler.clone());

        Self {
            time: label(Label::Time),
            date: label(Label::Date),
            week: label(Label::Week),
            source,
            display,
            scheduler,
            tick_interval: TICK_INTERVAL,
        }
    }

    /// Sample the clock once and publish what changed.
    ///
    /// Labels fade only when their text differs from the last requested text;
    /// seconds progress and the reading are published every time.
    pub fn tick(&self) -> ClockFrame {
        let frame = ClockFrame::compose(self.source.now());

        let changed = [
            self.time.update(&frame.time),
            self.date.update(&frame.date),
            self.week.update(&frame.week),
        ];
        if changed.iter().any(|changed| *changed) {
            debug!(
                "Clock labels changed (time={}, date={}, week={}): {}",
                changed[0], changed[1], changed[2], frame.time
            );
        }

        self.display.show_seconds(frame.seconds_percent);
        self.display.show_reading(frame.reading);
        frame
    }

    /// Tick forever on the scheduler. The returned handle is only stopped at shutdown.
    pub fn spawn(self: &Arc<Self>) -> TaskHandle {
        info!("Clock ticking every {}ms", self.tick_interval.as_millis());
        let controller = Arc::clone(self);
        self.scheduler.every(self.tick_interval, move || {
            controller.tick();
            std::future::ready(())
        })
    }
}
