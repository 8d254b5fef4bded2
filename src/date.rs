use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;

/// Picks a uniformly random instant in `[start, end]`.
///
/// A degenerate range (`end <= start`) returns `start`.
pub fn random_date_between(start: DateTime<Utc>, end: DateTime<Utc>) -> DateTime<Utc> {
    random_date_between_with_rng(&mut rand::rng(), start, end)
}

/// Same as [`random_date_between`], drawing from the provided generator.
pub fn random_date_between_with_rng(
    rng: &mut impl Rng,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DateTime<Utc> {
    if end <= start {
        return start;
    }
    let millis = rng.random_range(start.timestamp_millis()..=end.timestamp_millis());
    from_millis(millis).unwrap_or(start)
}

/// Random instant between the Unix epoch and now, formatted `MM/DD/YYYY`.
pub fn random_date() -> String {
    random_date_with_rng(&mut rand::rng())
}

/// Same as [`random_date`], drawing from the provided generator.
pub fn random_date_with_rng(rng: &mut impl Rng) -> String {
    short_date(&random_date_between_with_rng(
        rng,
        DateTime::UNIX_EPOCH,
        Utc::now(),
    ))
}

/// Milliseconds since the Unix epoch.
pub fn millis_since_epoch(date: &DateTime<Utc>) -> i64 {
    date.timestamp_millis()
}

/// Builds a date from milliseconds since the Unix epoch.
pub fn from_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

/// Formats a date as `MM/DD/YYYY`.
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Formats a date as `YY.MM.DD HH:MM`.
pub fn short_date_with_time(date: &DateTime<Utc>) -> String {
    date.format("%y.%m.%d %H:%M").to_string()
}
