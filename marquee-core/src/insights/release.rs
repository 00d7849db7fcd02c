use std::collections::BTreeMap;

use marquee_model::{EnrichedReference, ReleaseYear};

/// Titles per release year, newest year first.
///
/// The year comes from the movie release date or, failing that, the series
/// first air date. Items with neither are skipped. Rows are per exact year;
/// `decade` is only a label.
pub fn release_year_breakdown(items: &[EnrichedReference]) -> Vec<ReleaseYear> {
    let mut years: BTreeMap<i32, u32> = BTreeMap::new();

    for detail in items.iter().filter_map(|item| item.detail()) {
        let Some(year) = detail.premiere_date().and_then(leading_year) else {
            continue;
        };
        *years.entry(year).or_insert(0) += 1;
    }

    years
        .into_iter()
        .rev()
        .map(|(year, count)| ReleaseYear {
            year,
            decade: decade_label(year),
            count,
        })
        .collect()
}

fn leading_year(date: &str) -> Option<i32> {
    let digits = date.trim().get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub(crate) fn decade_label(year: i32) -> String {
    format!("{}s", year.div_euclid(10) * 10)
}
