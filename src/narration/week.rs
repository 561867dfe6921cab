use chrono::{Datelike, Duration, NaiveDate};

use super::numbers::ordinal;

/// Shown when a week number has no ordinal word.
pub const UNKNOWN_WEEK: &str = "Unknown Week";

/// ISO-8601 week number (1..=53) of `date`.
///
/// The date is moved to the Thursday of its Monday-based week; that Thursday's
/// calendar year is the ISO year, and its day-of-year fixes the week.
pub fn iso_week(date: NaiveDate) -> u32 {
    let iso_weekday = i64::from(date.weekday().number_from_monday());
    let thursday = date + Duration::days(4 - iso_weekday);
    let days_since_jan_first = thursday.ordinal0();
    // ceil((days + 1) / 7)
    (days_since_jan_first + 7) / 7
}

/// "First Week" through "Fifty-Third Week" for the ISO week of `date`.
pub fn week_label(date: NaiveDate) -> String {
    label_for(iso_week(date))
}

fn label_for(week: u32) -> String {
    match ordinal(week) {
        Some(word) => format!("{word} Week"),
        None => UNKNOWN_WEEK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monday_new_year_starts_week_one() {
        assert_eq!(iso_week(date(2024, 1, 1)), 1);
    }

    #[test]
    fn sunday_new_year_belongs_to_previous_year() {
        assert_eq!(iso_week(date(2023, 1, 1)), 52);
        assert_eq!(iso_week(date(2023, 1, 2)), 1);
    }

    #[test]
    fn long_years_have_a_fifty_third_week() {
        assert_eq!(iso_week(date(2020, 12, 31)), 53);
        assert_eq!(iso_week(date(2021, 1, 3)), 53);
        assert_eq!(iso_week(date(2021, 1, 4)), 1);
        assert_eq!(iso_week(date(2015, 12, 31)), 53);
    }

    #[test]
    fn late_december_can_be_week_one() {
        // Monday 2024-12-30 is in the week of Thursday 2025-01-02.
        assert_eq!(iso_week(date(2024, 12, 30)), 1);
        assert_eq!(iso_week(date(2024, 12, 29)), 52);
    }

    #[test]
    fn labels_use_ordinal_words() {
        assert_eq!(week_label(date(2024, 1, 1)), "First Week");
        assert_eq!(week_label(date(2020, 12, 31)), "Fifty-Third Week");
        assert_eq!(week_label(date(2024, 6, 3)), "Twenty-Third Week");
    }

    #[test]
    fn out_of_table_weeks_fall_back() {
        assert_eq!(label_for(0), UNKNOWN_WEEK);
        assert_eq!(label_for(54), UNKNOWN_WEEK);
    }
}
