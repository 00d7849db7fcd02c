use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, Utc};
use marquee_model::{ActivePeriod, EnrichedReference};

use super::tally::OrderedTally;

const NAIVE_DATETIME_FORMATS: [&str; 2] =
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// The calendar month in which the most items were saved.
///
/// Items whose `added_at` is missing or unparseable are ignored. On a tie
/// the month that first appeared while scanning `items` wins, regardless of
/// which month is earlier on the calendar.
pub fn most_active_month(items: &[EnrichedReference]) -> Option<ActivePeriod> {
    let mut tally: OrderedTally<(i32, u32), ((i32, u32), u32)> =
        OrderedTally::new();

    for item in items {
        let Some(date) = item.reference.added_at.as_deref().and_then(parse_added_at)
        else {
            continue;
        };
        let key = (date.year(), date.month());
        tally.entry_or_insert_with(key, || (key, 0)).1 += 1;
    }

    // Strictly-greater keeps the earliest bucket among equals.
    let mut best: Option<((i32, u32), u32)> = None;
    for (key, count) in tally.into_entries() {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((key, count));
        }
    }

    best.map(|((year, month), count)| ActivePeriod {
        period_key: format!("{year:04}-{month:02}"),
        year,
        count,
        display_name: display_name(year, month),
    })
}

/// Interprets a stored timestamp as a UTC calendar date.
pub(crate) fn parse_added_at(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc).date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn display_name(year: i32, month: u32) -> String {
    match u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()) {
        Some(month) => format!("{} {year}", month.name()),
        None => format!("{year}-{month:02}"),
    }
}
