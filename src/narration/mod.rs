//! Pure conversions from times and dates to English phrases.

pub mod date;
pub mod numbers;
pub mod time_of_day;
pub mod week;

pub use date::narrate_date;
pub use numbers::{ordinal, wordify};
pub use time_of_day::{narrate_time, DayPeriod};
pub use week::{iso_week, week_label, UNKNOWN_WEEK};
