use std::collections::HashSet;

use marquee_model::{EnrichedReference, GenreShare};

use super::tally::OrderedTally;

/// Share of each genre across the items that have details.
///
/// An item counts once toward each distinct genre it carries. Percentages
/// are relative to the total number of genre tags, so they sum to 100.
/// Ties in count keep the genre that was seen first in front.
pub fn genre_distribution(items: &[EnrichedReference]) -> Vec<GenreShare> {
    let mut tally: OrderedTally<&str, (&str, u32)> = OrderedTally::new();
    let mut total: u32 = 0;

    for detail in items.iter().filter_map(|item| item.detail()) {
        let mut seen_in_item = HashSet::new();
        for genre in &detail.genres {
            if !seen_in_item.insert(genre.name.as_str()) {
                continue;
            }
            tally
                .entry_or_insert_with(genre.name.as_str(), || {
                    (genre.name.as_str(), 0)
                })
                .1 += 1;
            total += 1;
        }
    }

    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<GenreShare> = tally
        .into_entries()
        .into_iter()
        .map(|(name, count)| GenreShare {
            name: name.to_string(),
            count,
            percentage: f64::from(count) / f64::from(total) * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// The first `limit` entries of [`genre_distribution`].
pub fn top_genres(items: &[EnrichedReference], limit: usize) -> Vec<GenreShare> {
    let mut shares = genre_distribution(items);
    shares.truncate(limit);
    shares
}
