pub mod controller;
pub mod reading;
pub mod source;

pub use controller::ClockController;
pub use reading::{ClockFrame, ClockReading};
pub use source::{LocalTimeSource, ManualTimeSource, TimeSource};
