use serde::{Deserialize, Serialize};

use super::numbers::wordify;

/// Coarse part of the day used to qualify a narrated time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    /// Period for an hour of the day (0..=23).
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=11 => DayPeriod::Morning,
            12..=16 => DayPeriod::Afternoon,
            17..=19 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayPeriod::Morning => "In The Morning",
            DayPeriod::Afternoon => "In The Afternoon",
            DayPeriod::Evening => "In The Evening",
            DayPeriod::Night => "At Night",
        }
    }
}

fn twelve_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Narrate a wall-clock time, e.g. `(14, 30)` is "Half Past Two In The Afternoon".
///
/// The exact minutes 0, 1, 59, 15, 30 and 45 are matched before the generic
/// "Minutes Past"/"Minutes To" ranges. The period always follows the current
/// hour, so 11:45 is still "In The Morning" even though it names Twelve.
///
/// # Panics
///
/// Panics if `hour > 23` or `minute > 59`.
pub fn narrate_time(hour: u32, minute: u32) -> String {
    assert!(hour < 24, "hour {hour} out of range");
    assert!(minute < 60, "minute {minute} out of range");

    let period = DayPeriod::from_hour(hour).as_str();
    let current = wordify(twelve_hour(hour));
    let next = wordify(twelve_hour(hour + 1));

    match minute {
        0 => format!("{current} O'Clock {period}"),
        1 => format!("One Minute Past {current} {period}"),
        59 => format!("One Minute To {next} {period}"),
        15 => format!("Quarter Past {current} {period}"),
        30 => format!("Half Past {current} {period}"),
        45 => format!("Quarter To {next} {period}"),
        m if m < 30 => format!("{} Minutes Past {current} {period}", wordify(m)),
        m => format!("{} Minutes To {next} {period}", wordify(60 - m)),
    }
}
