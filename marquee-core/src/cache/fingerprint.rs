use std::collections::BTreeSet;
use std::fmt;

use marquee_model::{CollectionReference, ReferenceKey};

/// Deterministic identity of a reference set.
///
/// Built from the sorted, distinct `(reference_id, media_kind)` pairs, so
/// list order, duplicates, titles and local ids do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of<'a, I>(references: I) -> Self
    where
        I: IntoIterator<Item = &'a CollectionReference>,
    {
        let keys: BTreeSet<ReferenceKey> =
            references.into_iter().map(|r| r.key()).collect();
        Self(
            keys.iter()
                .map(ReferenceKey::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
