use chrono::{Datelike, Month, NaiveDate, Weekday};

use super::numbers::ordinal;

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or_default()
}

/// Narrate a calendar date, e.g. "Monday The Third of June, 2024".
pub fn narrate_date(date: NaiveDate) -> String {
    // Day of month is always 1..=31, which the ordinal table covers.
    let day = ordinal(date.day()).unwrap_or_default();
    format!(
        "{} The {} of {}, {}",
        weekday_name(date.weekday()),
        day,
        month_name(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrates_a_full_sentence() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        assert_eq!(narrate_date(date), "Monday The Third of June, 2024");
    }

    #[test]
    fn every_day_of_the_month_has_its_own_ordinal() {
        let expected = [
            "First", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh", "Eighth", "Ninth",
            "Tenth", "Eleventh", "Twelfth", "Thirteenth", "Fourteenth", "Fifteenth", "Sixteenth",
            "Seventeenth", "Eighteenth", "Nineteenth", "Twentieth", "Twenty-First",
            "Twenty-Second", "Twenty-Third", "Twenty-Fourth", "Twenty-Fifth", "Twenty-Sixth",
            "Twenty-Seventh", "Twenty-Eighth", "Twenty-Ninth", "Thirtieth", "Thirty-First",
        ];

        for (day, word) in (1..=31).zip(expected) {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            let sentence = narrate_date(date);
            assert!(
                sentence.contains(&format!(" The {word} of January, 2024")),
                "day {day}: {sentence}"
            );
        }
    }

    #[test]
    fn names_weekdays_and_months() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(narrate_date(date), "Friday The Thirty-First of December, 1999");

        let date = NaiveDate::from_ymd_opt(2026, 2, 22).unwrap();
        assert_eq!(narrate_date(date), "Sunday The Twenty-Second of February, 2026");
    }
}
