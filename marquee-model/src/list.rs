use crate::ids::{ListId, UserId};
use crate::reference::CollectionReference;

/// A named user list as handed over by the collection store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionList {
    pub id: ListId,
    pub owner: UserId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<CollectionReference>,
}
