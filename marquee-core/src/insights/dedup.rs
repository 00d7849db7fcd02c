use std::collections::HashSet;

use marquee_model::EnrichedReference;

/// Collapses enriched items that name the same catalog entry, keyed by
/// `(reference_id, media_kind)`. The first surviving occurrence wins
/// outright; later duplicates are discarded even if they were enriched
/// differently. Occurrences dropped during enrichment never reach this
/// point, so a later duplicate can stand in for one whose lookups failed.
pub fn deduplicate(items: Vec<EnrichedReference>) -> Vec<EnrichedReference> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use marquee_model::{CollectionReference, MediaKind};

    use super::*;
    use crate::insights::test_support::{detail, with_detail};

    #[test]
    fn first_occurrence_wins_and_order_is_kept() {
        let items = vec![
            with_detail(
                CollectionReference::new(1, MediaKind::Movie, "first"),
                detail(&["Drama"], None),
            ),
            with_detail(
                CollectionReference::new(2, MediaKind::Movie, "other"),
                detail(&[], None),
            ),
            with_detail(
                CollectionReference::new(1, MediaKind::Movie, "second"),
                detail(&["Comedy"], Some("2001-01-01")),
            ),
        ];

        let unique = deduplicate(items);

        let titles: Vec<&str> = unique.iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["first", "other"]);
        assert_eq!(unique[0].detail().unwrap().genres[0].name, "Drama");
    }

    #[test]
    fn same_id_different_kind_is_not_a_duplicate() {
        let items = vec![
            with_detail(
                CollectionReference::new(7, MediaKind::Movie, "movie"),
                detail(&[], None),
            ),
            with_detail(
                CollectionReference::new(7, MediaKind::Series, "series"),
                detail(&[], None),
            ),
        ];
        assert_eq!(deduplicate(items).len(), 2);
    }

    #[test]
    fn deduplicating_twice_changes_nothing() {
        let items: Vec<_> = [3, 1, 3, 2, 1]
            .into_iter()
            .map(|id| {
                with_detail(
                    CollectionReference::new(id, MediaKind::Movie, format!("#{id}")),
                    detail(&[], None),
                )
            })
            .collect();

        let once = deduplicate(items);
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);
    }
}
