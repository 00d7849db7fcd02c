use marquee_model::{
    CastCredit, CollectionList, CollectionReference, CreditMetadata,
    CrewCredit, DetailMetadata, Genre, ListId, MediaKind, UserId,
};

pub fn movie(id: u64, title: &str, added_at: &str) -> CollectionReference {
    CollectionReference::new(id, MediaKind::Movie, title)
        .with_added_at(added_at)
}

pub fn details(
    genres: &[&str],
    release_date: &str,
    rating: Option<f64>,
) -> DetailMetadata {
    DetailMetadata {
        genres: genres.iter().map(|name| Genre::new(*name)).collect(),
        release_date: Some(release_date.to_string()),
        first_air_date: None,
        average_rating: rating,
    }
}

pub fn credits(
    cast: &[(u64, &str)],
    director: Option<(u64, &str)>,
) -> CreditMetadata {
    CreditMetadata {
        cast: cast
            .iter()
            .enumerate()
            .map(|(order, (id, name))| CastCredit {
                person_id: *id,
                name: name.to_string(),
                billing_order: order as u32,
                character: format!("{name} character"),
                profile_path: None,
            })
            .collect(),
        crew: director
            .into_iter()
            .map(|(id, name)| CrewCredit {
                person_id: id,
                name: name.to_string(),
                job: "Director".to_string(),
                profile_path: None,
            })
            .collect(),
    }
}

pub fn list(
    owner: UserId,
    name: &str,
    items: Vec<CollectionReference>,
) -> CollectionList {
    CollectionList {
        id: ListId::new(),
        owner,
        name: name.to_string(),
        items,
    }
}
