//! Dictionary report command
//!
//! Gathers every statistic about the store into one snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::stats::{AnagramGroup, MetaData, group_size_distribution, largest_group, meta_data};
use crate::store::{Result, WordStore};

/// Snapshot of the store's statistics
#[derive(Debug, Clone, Serialize)]
pub struct DictionaryReport {
    pub meta: MetaData,
    pub group_count: usize,
    pub largest_group: Option<AnagramGroup>,
    /// Group size to number of groups of that size
    pub size_distribution: BTreeMap<usize, usize>,
}

impl DictionaryReport {
    /// Groups with at least two members
    #[must_use]
    pub fn anagram_group_count(&self) -> usize {
        self.size_distribution
            .iter()
            .filter(|&(&size, _)| size > 1)
            .map(|(_, &count)| count)
            .sum()
    }
}

/// Build a report over the whole store
///
/// # Errors
///
/// Returns `StoreError::EmptyCollection` when the store holds no words.
pub fn build_report(store: &WordStore) -> Result<DictionaryReport> {
    let meta = meta_data(store)?;
    let size_distribution = group_size_distribution(store);

    Ok(DictionaryReport {
        meta,
        group_count: size_distribution.values().sum(),
        largest_group: largest_group(store),
        size_distribution,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn report_collects_statistics() {
        let store = WordStore::with_words(["c", "ruby", "yrub", "byru", "ubyr"]);
        let report = build_report(&store).unwrap();

        assert_eq!(report.meta.word_count, 5);
        assert_eq!(report.group_count, 2);
        assert_eq!(report.anagram_group_count(), 1);
        assert_eq!(report.largest_group.map(|g| g.anagram_key).as_deref(), Some("bruy"));
    }

    #[test]
    fn report_on_empty_store_fails() {
        let store = WordStore::new();
        assert!(matches!(
            build_report(&store),
            Err(StoreError::EmptyCollection)
        ));
    }
}
