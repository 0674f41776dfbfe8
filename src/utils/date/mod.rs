// Date utility functions
// Day arithmetic and day-of-week classification for the month grid

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};

/// Milliseconds in a calendar day (fixed, independent of DST transitions)
pub const MS_PER_DAY: i64 = 86_400_000;

const DAY_NAMES: [&str; 7] = ["sun", "mon", "tue", "wed", "thu", "fri", "sat"];

/// How a day is coloured in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Sunday
    Holiday,
    Saturday,
    Weekday,
}

impl DayKind {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sun => DayKind::Holiday,
            Weekday::Sat => DayKind::Saturday,
            _ => DayKind::Weekday,
        }
    }
}

/// Header entry for one column of a week row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDayName {
    /// Day of month
    pub date: u32,
    /// Day of week, 0 = Sunday
    pub day: u32,
    pub day_name: String,
    pub is_today: bool,
}

/// Whole calendar days from `earlier` to `later` (negative when `later` is before)
pub fn difference_in_days(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Milliseconds from `start` to `end`
pub fn duration_ms(start: DateTime<Local>, end: DateTime<Local>) -> i64 {
    (end - start).num_milliseconds()
}

/// Short lowercase day name for a Sunday-based index
pub fn day_name(day_index: u32) -> Option<&'static str> {
    DAY_NAMES.get(day_index as usize).copied()
}

pub fn capitalize_day_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Column header names for one row of the date matrix
pub fn day_names(row: &[NaiveDate], today: NaiveDate) -> Vec<WeekDayName> {
    row.iter()
        .map(|day| {
            let day_index = day.weekday().num_days_from_sunday();
            WeekDayName {
                date: day.day(),
                day: day_index,
                day_name: capitalize_day_name(day_name(day_index).unwrap_or_default()),
                is_today: *day == today,
            }
        })
        .collect()
}

/// Index of `date` inside `row`, clamped to the row edges for dates outside it.
///
/// Returns `None` only for an empty row.
pub fn grid_date_index(date: NaiveDate, row: &[NaiveDate]) -> Option<usize> {
    let first = *row.first()?;
    let last_index = row.len() - 1;

    if date <= first {
        return Some(0);
    }

    Some(
        row.iter()
            .position(|d| *d == date)
            .unwrap_or(last_index),
    )
}
