//! The rendering seam between the clock engine and whatever draws it.

pub mod label;
pub mod terminal;

#[cfg(test)]
pub(crate) mod recording;

pub use label::{FadingLabel, FADE_DELAY};
pub use terminal::TerminalDisplay;

use serde::Serialize;

use crate::{clock::ClockReading, settings::Settings, stopwatch::StopwatchView};

/// The three narrated labels on the clock.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Label {
    Time,
    Date,
    Week,
}

impl Label {
    pub const ALL: [Label; 3] = [Label::Time, Label::Date, Label::Week];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Time => "time",
            Label::Date => "date",
            Label::Week => "week",
        }
    }
}

/// Receives everything the clock and stopwatch publish.
///
/// Calls arrive from timer callbacks and must not block.
pub trait Display: Send + Sync {
    /// Start fading a label out ahead of a text swap.
    fn fade_out(&self, label: Label);

    /// Swap in new text and fade the label back in.
    fn show_label(&self, label: Label, text: &str);

    /// Progress through the current minute, 0..100.
    fn show_seconds(&self, percent: f64);

    fn show_stopwatch(&self, view: &StopwatchView);

    /// Latest reading, for drawing the analog face.
    fn show_reading(&self, _reading: ClockReading) {}

    fn apply_settings(&self, _settings: &Settings) {}
}
