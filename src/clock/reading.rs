use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::narration::{narrate_date, narrate_time, week_label};

/// Hour, minute and second sampled from one instant.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Self {
            hour: now.hour(),
            minute: now.minute(),
            // Leap seconds show up as nanosecond overflow, never as second 60.
            second: now.second(),
        }
    }

    /// How far through the current minute we are, 0.0..100.0.
    pub fn seconds_percent(&self) -> f64 {
        f64::from(self.second) / 60.0 * 100.0
    }
}

/// Everything the clock shows for one tick.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClockFrame {
    pub reading: ClockReading,
    pub time: String,
    pub date: String,
    pub week: String,
    pub seconds_percent: f64,
}

impl ClockFrame {
    pub fn compose(now: NaiveDateTime) -> Self {
        let reading = ClockReading::from_datetime(now);
        let date = now.date();

        Self {
            reading,
            time: narrate_time(reading.hour, reading.minute),
            date: narrate_date(date),
            week: week_label(date),
            seconds_percent: reading.seconds_percent(),
        }
    }
}
