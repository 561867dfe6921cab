use chrono::{Datelike, Duration, NaiveDate};
use word_clock_lib::narration::{
    iso_week, narrate_date, narrate_time, week_label, wordify, DayPeriod,
};

#[test]
fn documented_phrases() {
    assert_eq!(wordify(21), "Twenty-One");
    assert_eq!(wordify(47), "Forty-Seven");

    assert_eq!(narrate_time(0, 0), "Twelve O'Clock In The Morning");
    assert_eq!(narrate_time(14, 30), "Half Past Two In The Afternoon");
    assert_eq!(narrate_time(23, 45), "Quarter To Twelve At Night");
    assert_eq!(narrate_time(9, 59), "One Minute To Ten In The Morning");
    assert_eq!(narrate_time(12, 1), "One Minute Past Twelve In The Afternoon");

    let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    assert_eq!(narrate_date(date), "Monday The Third of June, 2024");
}

#[test]
fn iso_week_matches_chrono_across_decades() {
    let mut date = NaiveDate::from_ymd_opt(1995, 12, 20).unwrap();
    let end = NaiveDate::from_ymd_opt(2035, 1, 10).unwrap();

    while date <= end {
        assert_eq!(iso_week(date), date.iso_week().week(), "{date}");
        date += Duration::days(1);
    }
}

#[test]
fn documented_iso_weeks() {
    assert_eq!(iso_week(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 1);
    assert_eq!(iso_week(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()), 52);
    assert_eq!(
        week_label(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
        "Fifty-Second Week"
    );
}

#[test]
fn narrated_hours_wrap_at_twelve() {
    for hour in 0..24 {
        let phrase = narrate_time(hour, 0);
        let expected = wordify(if hour % 12 == 0 { 12 } else { hour % 12 });
        assert!(phrase.starts_with(&format!("{expected} O'Clock")), "{phrase}");
        assert!(phrase.ends_with(DayPeriod::from_hour(hour).as_str()));
    }
}
