//! Deterministic word of the day.

use time::Date;

pub const WORDS: [&str; 10] = [
    "serendipity",
    "aberration",
    "ephemeral",
    "quintessential",
    "eloquent",
    "gossamer",
    "lugubrious",
    "facetious",
    "plethora",
    "zenith",
];

/// Julian day number of 0000-12-31, so that 0001-01-01 is day 1.
const ORDINAL_EPOCH_JULIAN_DAY: i64 = 1_721_425;

/// Proleptic Gregorian ordinal of `date`, with 0001-01-01 as day 1.
#[must_use]
pub fn ordinal(date: Date) -> i64 {
    i64::from(date.to_julian_day()) - ORDINAL_EPOCH_JULIAN_DAY
}

/// Word featured on `date`.
#[must_use]
pub fn for_date(date: Date) -> &'static str {
    let len = i64::try_from(WORDS.len()).unwrap_or(1);
    let index = usize::try_from(ordinal(date).rem_euclid(len)).unwrap_or(0);
    WORDS[index]
}

/// Word featured today (UTC).
#[must_use]
pub fn today() -> &'static str {
    for_date(time::OffsetDateTime::now_utc().date())
}
