//! Anagram group size statistics

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::WordStore;

/// One anagram group: its key and every word sharing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    pub anagram_key: String,
    pub words: Vec<String>,
}

impl AnagramGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The group with the most members
///
/// Ties go to the lexicographically smallest key. Returns `None` for an empty
/// store.
#[must_use]
pub fn largest_group(store: &WordStore) -> Option<AnagramGroup> {
    let state = store.read();

    let (anagram_key, _) = state
        .group_sizes()
        .max_by(|(key_a, size_a), (key_b, size_b)| {
            size_a.cmp(size_b).then_with(|| key_b.cmp(key_a))
        })?;

    let words = state
        .group(anagram_key)
        .into_iter()
        .map(|record| record.word().to_owned())
        .collect();

    Some(AnagramGroup {
        anagram_key: anagram_key.to_owned(),
        words,
    })
}

/// Words of the largest anagram group, in store order
///
/// # Examples
/// ```
/// use anagram_index::stats::most_anagrams;
/// use anagram_index::store::WordStore;
///
/// let store = WordStore::with_words(["ruby", "yrub", "swift", "tswif", "wifts"]);
/// assert_eq!(most_anagrams(&store), vec!["swift", "tswif", "wifts"]);
/// ```
#[must_use]
pub fn most_anagrams(store: &WordStore) -> Vec<String> {
    largest_group(store).map(|group| group.words).unwrap_or_default()
}

/// Every anagram key whose group has at least `minimum_size` members
///
/// A `minimum_size` of zero or less returns every key.
#[must_use]
pub fn groups_of_size(store: &WordStore, minimum_size: i64) -> BTreeMap<String, usize> {
    let state = store.read();

    state
        .group_sizes()
        .filter(|&(_, size)| i64::try_from(size).map_or(true, |size| size >= minimum_size))
        .map(|(key, size)| (key.to_owned(), size))
        .collect()
}

/// How many anagram groups exist of each size
#[must_use]
pub fn group_size_distribution(store: &WordStore) -> BTreeMap<usize, usize> {
    let state = store.read();

    let mut distribution = BTreeMap::new();
    for (_, size) in state.group_sizes() {
        *distribution.entry(size).or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::canonicalize;

    const TWO_GROUPS: [&str; 9] = [
        "ruby", "yrub", "byru", "ubyr", "swift", "tswif", "ftswi", "iftsw", "wifts",
    ];

    fn two_group_store() -> WordStore {
        let store = WordStore::new();
        store.bulk_import(TWO_GROUPS, true);
        store
    }

    #[test]
    fn most_anagrams_finds_largest_group() {
        let store = two_group_store();
        let words = most_anagrams(&store);

        assert!(words.contains(&"swift".to_string()));
        assert_eq!(words.len(), 5);
    }

    #[test]
    fn largest_group_reports_key() {
        let store = two_group_store();
        let group = largest_group(&store).unwrap();

        assert_eq!(group.anagram_key, canonicalize("swift"));
        assert_eq!(group.len(), 5);
    }

    #[test]
    fn ties_go_to_smallest_key() {
        let store = WordStore::with_words(["swift", "tswif", "ruby", "yrub"]);
        // "bruy" < "fistw"
        assert_eq!(most_anagrams(&store), vec!["ruby", "yrub"]);
    }

    #[test]
    fn most_anagrams_empty_store() {
        let store = WordStore::new();
        assert!(most_anagrams(&store).is_empty());
        assert!(largest_group(&store).is_none());
    }

    #[test]
    fn groups_of_size_filters_small_groups() {
        let store = two_group_store();
        store.insert("lua").unwrap();

        let groups = groups_of_size(&store, 4);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get(&canonicalize("ruby")), Some(&4));
        assert_eq!(groups.get(&canonicalize("swift")), Some(&5));

        let groups = groups_of_size(&store, 5);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["fistw"]);
    }

    #[test]
    fn groups_of_size_non_positive_returns_everything() {
        let store = two_group_store();
        store.insert("lua").unwrap();

        for minimum in [0, -3] {
            let groups = groups_of_size(&store, minimum);
            assert_eq!(groups.len(), 3);
            assert_eq!(groups.get("alu"), Some(&1));
        }
    }

    #[test]
    fn groups_of_size_too_large_is_empty() {
        let store = two_group_store();
        assert!(groups_of_size(&store, 6).is_empty());
    }

    #[test]
    fn distribution_counts_groups_by_size() {
        let store = two_group_store();
        store.bulk_import(["lua", "go", "og"], false);

        let distribution = group_size_distribution(&store);
        assert_eq!(distribution.get(&1), Some(&1));
        assert_eq!(distribution.get(&2), Some(&1));
        assert_eq!(distribution.get(&4), Some(&1));
        assert_eq!(distribution.get(&5), Some(&1));
        assert_eq!(distribution.values().sum::<usize>(), 4);
    }
}
