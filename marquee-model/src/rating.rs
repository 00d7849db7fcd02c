use crate::media_kind::MediaKind;
use crate::reference::ReferenceKey;

/// A user's own scores for a saved title. Each sub-score is optional and
/// recorded on the same 0-10 scale as the catalog rating.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalRating {
    pub reference_id: u64,
    pub media_kind: MediaKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub acting: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub story: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub visuals: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub soundtrack: Option<f64>,
}

impl PersonalRating {
    pub fn new(reference_id: u64, media_kind: MediaKind) -> Self {
        Self {
            reference_id,
            media_kind,
            acting: None,
            story: None,
            visuals: None,
            soundtrack: None,
        }
    }

    pub fn key(&self) -> ReferenceKey {
        ReferenceKey::new(self.reference_id, self.media_kind)
    }

    pub fn sub_scores(&self) -> [Option<f64>; 4] {
        [self.acting, self.story, self.visuals, self.soundtrack]
    }

    /// Mean of the sub-scores that were actually recorded. Absent scores are
    /// left out of the mean rather than counted as zero; `None` when nothing
    /// was recorded.
    pub fn mean_score(&self) -> Option<f64> {
        let (sum, count) = self
            .sub_scores()
            .into_iter()
            .flatten()
            .fold((0.0, 0u32), |(sum, count), score| (sum + score, count + 1));
        (count > 0).then(|| sum / f64::from(count))
    }
}
