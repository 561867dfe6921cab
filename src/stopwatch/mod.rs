pub mod controller;
pub mod state;

pub use controller::{StopwatchController, StopwatchSnapshot};
pub use state::{format_elapsed, StopwatchState, StopwatchStatus, StopwatchView, PRESS_START};
