//! Sortable period keys for week, month and quarter buckets.

use chrono::Datelike;


/// Month names indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];


/// ISO-8601 week key, e.g. `2024-W07`.
///
/// The year is the ISO week-year (the year of the week's Thursday), so
/// 2024-12-30 belongs to `2025-W01`.
pub fn week_key<D: Datelike>(date: &D) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}


/// Calendar month key, e.g. `2024-02`.
pub fn month_key<D: Datelike>(date: &D) -> String {
    format!("{}-{:02}", date.year(), date.month())
}


/// Calendar quarter key, e.g. `2024-Q1`.
pub fn quarter_key<D: Datelike>(date: &D) -> String {
    format!("{}-Q{}", date.year(), (date.month() - 1) / 3 + 1)
}


/// Display name for a 1-indexed month. Out-of-range months yield `None`.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get((month as usize).checked_sub(1)?).copied()
}
