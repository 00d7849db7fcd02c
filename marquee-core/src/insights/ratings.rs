use std::collections::HashMap;

use marquee_model::{
    EnrichedReference, PersonalRating, RatingComparison, ReferenceKey,
};

/// Compares the user's own scores with the catalog's average rating.
///
/// Only items with a catalog rating take part. An item without a personal
/// score contributes its catalog rating to both sides, so unrated titles
/// pull neither average away from the other while still counting toward
/// `item_count`.
pub fn rating_comparison(
    items: &[EnrichedReference],
    ratings: &[PersonalRating],
) -> RatingComparison {
    let mut by_key: HashMap<ReferenceKey, &PersonalRating> =
        HashMap::with_capacity(ratings.len());
    for rating in ratings {
        by_key.entry(rating.key()).or_insert(rating);
    }

    let mut user_sum = 0.0;
    let mut tmdb_sum = 0.0;
    let mut item_count: u32 = 0;

    for item in items {
        let Some(catalog) = item
            .detail()
            .and_then(|detail| detail.average_rating)
            .filter(|rating| rating.is_finite())
        else {
            continue;
        };

        let user = by_key
            .get(&item.key())
            .and_then(|rating| rating.mean_score())
            .unwrap_or(catalog);

        user_sum += user;
        tmdb_sum += catalog;
        item_count += 1;
    }

    if item_count == 0 {
        return RatingComparison::default();
    }

    let user_average = user_sum / f64::from(item_count);
    let tmdb_average = tmdb_sum / f64::from(item_count);
    RatingComparison {
        user_average,
        tmdb_average,
        difference: user_average - tmdb_average,
        item_count,
    }
}
