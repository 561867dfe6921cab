//! Number words used by the narrators.
//!
//! Cardinals cover 0..=59 (minutes and 12-hour clock hours). Ordinals cover
//! 1..=53 so the same table serves days of the month and ISO weeks.

/// Cardinal words for 0..=20. Zero reads as "Twelve" so that midnight and noon
/// wrap onto the 12-hour dial.
const CARDINALS: [&str; 21] = [
    "Twelve", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen", "Twenty",
];

/// Tens words indexed by the tens digit (2..=5 are populated).
const TENS: [&str; 6] = ["", "", "Twenty", "Thirty", "Forty", "Fifty"];

/// Ordinal words for 1..=53, index 0 is the first.
const ORDINALS: [&str; 53] = [
    "First",
    "Second",
    "Third",
    "Fourth",
    "Fifth",
    "Sixth",
    "Seventh",
    "Eighth",
    "Ninth",
    "Tenth",
    "Eleventh",
    "Twelfth",
    "Thirteenth",
    "Fourteenth",
    "Fifteenth",
    "Sixteenth",
    "Seventeenth",
    "Eighteenth",
    "Nineteenth",
    "Twentieth",
    "Twenty-First",
    "Twenty-Second",
    "Twenty-Third",
    "Twenty-Fourth",
    "Twenty-Fifth",
    "Twenty-Sixth",
    "Twenty-Seventh",
    "Twenty-Eighth",
    "Twenty-Ninth",
    "Thirtieth",
    "Thirty-First",
    "Thirty-Second",
    "Thirty-Third",
    "Thirty-Fourth",
    "Thirty-Fifth",
    "Thirty-Sixth",
    "Thirty-Seventh",
    "Thirty-Eighth",
    "Thirty-Ninth",
    "Fortieth",
    "Forty-First",
    "Forty-Second",
    "Forty-Third",
    "Forty-Fourth",
    "Forty-Fifth",
    "Forty-Sixth",
    "Forty-Seventh",
    "Forty-Eighth",
    "Forty-Ninth",
    "Fiftieth",
    "Fifty-First",
    "Fifty-Second",
    "Fifty-Third",
];

/// Spell out `n` (0..=59) as a capitalised English cardinal.
///
/// Values up to twenty and the round tens come straight from the tables; the
/// rest are hyphenated compounds, e.g. 47 is "Forty-Seven".
///
/// # Panics
///
/// Panics if `n > 59`. Callers only pass minutes and 12-hour clock hours.
pub fn wordify(n: u32) -> String {
    assert!(n < 60, "wordify called with {n}, expected 0..=59");

    let n = n as usize;
    if n < CARDINALS.len() {
        return CARDINALS[n].to_string();
    }

    let (tens, units) = (n / 10, n % 10);
    if units == 0 {
        TENS[tens].to_string()
    } else {
        format!("{}-{}", TENS[tens], CARDINALS[units])
    }
}

/// Ordinal word for `n` in 1..=53, `None` outside the table.
pub fn ordinal(n: u32) -> Option<&'static str> {
    let index = usize::try_from(n).ok()?.checked_sub(1)?;
    ORDINALS.get(index).copied()
}
