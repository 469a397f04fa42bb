//! Word length statistics

use rayon::prelude::*;
use serde::Serialize;

use crate::store::{Result, StoreError, WordStore};

/// Aggregate length metrics over the whole store
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetaData {
    pub word_count: usize,
    pub minimum_word_length: usize,
    pub maximum_word_length: usize,
    /// Length at index `word_count / 2` of the ascending length order; the
    /// upper median for even counts
    pub median_word_length: usize,
    pub average_word_length: f64,
}

/// Compute length statistics for every stored word
///
/// # Errors
///
/// Returns `StoreError::EmptyCollection` when the store holds no words.
///
/// # Examples
/// ```
/// use anagram_index::stats::meta_data;
/// use anagram_index::store::WordStore;
///
/// let store = WordStore::with_words(["c", "ruby", "yrub", "byru", "ubyr"]);
/// let meta = meta_data(&store).unwrap();
///
/// assert_eq!(meta.word_count, 5);
/// assert_eq!(meta.median_word_length, 4);
/// assert!((meta.average_word_length - 3.4).abs() < f64::EPSILON);
/// ```
pub fn meta_data(store: &WordStore) -> Result<MetaData> {
    let mut lengths: Vec<usize> = {
        let state = store.read();
        state
            .records()
            .par_iter()
            .map(|(_, record)| record.len())
            .collect()
    };
    lengths.par_sort_unstable();

    let word_count = lengths.len();
    let (Some(&minimum_word_length), Some(&maximum_word_length), Some(&median_word_length)) =
        (lengths.first(), lengths.last(), lengths.get(word_count / 2))
    else {
        return Err(StoreError::EmptyCollection);
    };

    let total: usize = lengths.par_iter().sum();

    Ok(MetaData {
        word_count,
        minimum_word_length,
        maximum_word_length,
        median_word_length,
        average_word_length: total as f64 / word_count as f64,
    })
}
