use chrono::{Datelike, Local, NaiveDate};

/// Canonical `YYYY-MM-DD` key for a local calendar day. Two instants on the
/// same local day always map to the same key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Strict inverse of [`date_key`].
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_key() -> String {
    date_key(today())
}

/// Deterministic per-day seed (`year*10000 + month*100 + day`), used to pick
/// the quote of the day. Changes only at local-midnight rollover.
pub fn daily_seed(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}
