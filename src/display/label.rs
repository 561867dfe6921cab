use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use tokio::time::Duration;

use crate::scheduler::{Scheduler, TaskHandle};

use super::{Display, Label};

/// Time between fading a label out and swapping in its new text.
pub const FADE_DELAY: Duration = Duration::from_millis(1000);

struct PendingSwap {
    text: String,
    generation: u64,
    task: TaskHandle,
}

#[derive(Default)]
struct LabelState {
    rendered: Option<String>,
    pending: Option<PendingSwap>,
    generation: u64,
}

impl LabelState {
    /// The text the label is showing or about to show.
    fn target(&self) -> Option<&str> {
        self.pending
            .as_ref()
            .map(|pending| pending.text.as_str())
            .or(self.rendered.as_deref())
    }
}

/// A label that only re-renders when its text changes, fading between values.
pub struct FadingLabel {
    label: Label,
    display: Arc<dyn Display>,
    scheduler: Scheduler,
    delay: Duration,
    state: Arc<Mutex<LabelState>>,
}

impl FadingLabel {
    pub fn new(label: Label, display: Arc<dyn Display>, scheduler: Scheduler) -> Self {
        Self::with_delay(label, display, scheduler, FADE_DELAY)
    }

    pub fn with_delay(
        label: Label,
        display: Arc<dyn Display>,
        scheduler: Scheduler,
        delay: Duration,
    ) -> Self {
        Self {
            label,
            display,
            scheduler,
            delay,
            state: Arc::new(Mutex::new(LabelState::default())),
        }
    }

    /// Request `text` on the label. Returns whether a fade was started.
    ///
    /// Must be called from within a tokio runtime.
    pub fn update(&self, text: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.target() == Some(text) {
            return false;
        }

        if let Some(previous) = state.pending.take() {
            debug!(
                "{} label: superseding pending swap to {:?}",
                self.label.as_str(),
                previous.text
            );
            previous.task.cancel();
        }

        state.generation = state.generation.wrapping_add(1);
        let generation = state.generation;

        self.display.fade_out(self.label);

        let task = {
            let shared = self.state.clone();
            let display = self.display.clone();
            let label = self.label;
            let text = text.to_string();
            self.scheduler.after(self.delay, move || {
                let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
                // A newer update may have replaced us between the timer firing and now.
                if state.generation != generation {
                    return;
                }
                state.pending = None;
                display.show_label(label, &text);
                state.rendered = Some(text);
            })
        };

        state.pending = Some(PendingSwap {
            text: text.to_string(),
            generation,
            task,
        });
        true
    }

    /// Text currently on screen, if any swap has completed.
    pub fn rendered(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .rendered
            .clone()
    }

    pub fn is_fading(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pending
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use tokio::time;

    use crate::display::recording::{Event, RecordingDisplay};

    use super::*;

    fn label_with(display: &Arc<RecordingDisplay>) -> FadingLabel {
        FadingLabel::new(Label::Time, display.clone(), Scheduler::new())
    }

    #[tokio::test(start_paused = true)]
    async fn swaps_text_after_the_fade_delay() {
        let display = Arc::new(RecordingDisplay::default());
        let label = label_with(&display);

        assert!(label.update("Half Past Two In The Afternoon"));
        assert!(label.is_fading());
        assert_eq!(display.events(), vec![Event::FadeOut(Label::Time)]);

        time::sleep(Duration::from_millis(999)).await;
        assert_eq!(label.rendered(), None);

        time::sleep(Duration::from_millis(2)).await;
        assert_eq!(
            label.rendered().as_deref(),
            Some("Half Past Two In The Afternoon")
        );
        assert!(!label.is_fading());
        assert_eq!(
            display.shown(Label::Time),
            vec!["Half Past Two In The Afternoon".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unchanged_text_does_not_fade_twice() {
        let display = Arc::new(RecordingDisplay::default());
        let label = label_with(&display);

        assert!(label.update("One"));
        // Still mid-fade: the pending target counts as the current text.
        assert!(!label.update("One"));

        time::sleep(Duration::from_secs(2)).await;
        assert!(!label.update("One"));

        assert_eq!(display.fade_outs(Label::Time), 1);
        assert_eq!(display.shown(Label::Time), vec!["One".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_text_wins_over_a_pending_fade() {
        let display = Arc::new(RecordingDisplay::default());
        let label = label_with(&display);

        assert!(label.update("First"));
        time::sleep(Duration::from_millis(500)).await;
        assert!(label.update("Second"));

        time::sleep(Duration::from_secs(3)).await;

        assert_eq!(display.shown(Label::Time), vec!["Second".to_string()]);
        assert_eq!(label.rendered().as_deref(), Some("Second"));
    }

    #[tokio::test(start_paused = true)]
    async fn reverting_to_the_rendered_text_fades_again() {
        let display = Arc::new(RecordingDisplay::default());
        let label = label_with(&display);

        label.update("A");
        time::sleep(Duration::from_secs(2)).await;
        assert!(label.update("B"));
        assert!(label.update("A"));

        time::sleep(Duration::from_secs(2)).await;
        assert_eq!(
            display.shown(Label::Time),
            vec!["A".to_string(), "A".to_string()]
        );
        assert_eq!(display.fade_outs(Label::Time), 3);
    }
}
