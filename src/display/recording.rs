use std::sync::{Mutex, PoisonError};

use crate::{clock::ClockReading, settings::Settings, stopwatch::StopwatchView};

use super::{Display, Label};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    FadeOut(Label),
    Show(Label, String),
    Seconds(f64),
    Stopwatch(StopwatchView),
    Reading(ClockReading),
    Settings(Settings),
}

/// Display that remembers every call, for assertions.
#[derive(Default)]
pub(crate) struct RecordingDisplay {
    events: Mutex<Vec<Event>>,
}

impl RecordingDisplay {
    pub(crate) fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn fade_outs(&self, label: Label) -> usize {
        self.events()
            .iter()
            .filter(|event| **event == Event::FadeOut(label))
            .count()
    }

    pub(crate) fn shown(&self, label: Label) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Show(l, text) if l == label => Some(text),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn stopwatch_views(&self) -> Vec<StopwatchView> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Stopwatch(view) => Some(view),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn seconds_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, Event::Seconds(_)))
            .count()
    }

    fn push(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl Display for RecordingDisplay {
    fn fade_out(&self, label: Label) {
        self.push(Event::FadeOut(label));
    }

    fn show_label(&self, label: Label, text: &str) {
        self.push(Event::Show(label, text.to_string()));
    }

    fn show_seconds(&self, percent: f64) {
        self.push(Event::Seconds(percent));
    }

    fn show_stopwatch(&self, view: &StopwatchView) {
        self.push(Event::Stopwatch(view.clone()));
    }

    fn show_reading(&self, reading: ClockReading) {
        self.push(Event::Reading(reading));
    }

    fn apply_settings(&self, settings: &Settings) {
        self.push(Event::Settings(settings.clone()));
    }
}
