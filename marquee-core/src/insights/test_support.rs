//! Builders shared by the aggregator unit tests.

use marquee_model::{
    CastCredit, CollectionReference, CreditMetadata, CrewCredit,
    DetailMetadata, EnrichedReference, Genre, MediaKind,
};

pub(crate) fn reference(id: u64, title: &str) -> CollectionReference {
    CollectionReference::new(id, MediaKind::Movie, title)
}

pub(crate) fn detail(genres: &[&str], release_date: Option<&str>) -> DetailMetadata {
    DetailMetadata {
        genres: genres.iter().map(|name| Genre::new(*name)).collect(),
        release_date: release_date.map(str::to_string),
        first_air_date: None,
        average_rating: None,
    }
}

pub(crate) fn cast(person_id: u64, name: &str, order: u32) -> CastCredit {
    CastCredit {
        person_id,
        name: name.to_string(),
        billing_order: order,
        character: format!("{name} role"),
        profile_path: Some(format!("/{person_id}.jpg")),
    }
}

pub(crate) fn crew(person_id: u64, name: &str, job: &str) -> CrewCredit {
    CrewCredit {
        person_id,
        name: name.to_string(),
        job: job.to_string(),
        profile_path: None,
    }
}

pub(crate) fn with_detail(
    reference: CollectionReference,
    detail: DetailMetadata,
) -> EnrichedReference {
    EnrichedReference::from_parts(reference, Some(detail), None)
        .expect("detail present")
}

pub(crate) fn with_credit(
    reference: CollectionReference,
    cast: Vec<CastCredit>,
    crew: Vec<CrewCredit>,
) -> EnrichedReference {
    EnrichedReference::from_parts(
        reference,
        None,
        Some(CreditMetadata { cast, crew }),
    )
    .expect("credit present")
}
