use std::collections::HashMap;
use std::hash::Hash;

/// Grouping map that remembers the order keys were first seen in.
///
/// Rankings sort the entries with a stable sort, so ties fall back to
/// first-seen order instead of whatever a hash map happens to iterate in.
#[derive(Debug)]
pub(crate) struct OrderedTally<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<V>,
}

impl<K, V> OrderedTally<K, V>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn entry_or_insert_with(
        &mut self,
        key: K,
        init: impl FnOnce() -> V,
    ) -> &mut V {
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.entries.push(init());
                self.index.insert(key, slot);
                slot
            }
        };
        &mut self.entries[slot]
    }

    pub(crate) fn into_entries(self) -> Vec<V> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::OrderedTally;

    #[test]
    fn entries_keep_first_seen_order() {
        let mut tally = OrderedTally::new();
        for word in ["b", "a", "b", "c", "a", "b"] {
            *tally.entry_or_insert_with(word, || 0u32) += 1;
        }
        assert_eq!(tally.into_entries(), vec![3, 2, 1]);
    }
}
