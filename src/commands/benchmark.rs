//! Benchmark command
//!
//! Times anagram lookups for a sample of stored words.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::seq::IndexedRandom;
use rayon::prelude::*;
use serde::Serialize;

use crate::query::{AnagramQuery, anagram_group};
use crate::store::WordStore;

/// Result of a benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub lookups: usize,
    pub total_matches: usize,
    pub average_group_size: f64,
    pub min_group_size: usize,
    pub max_group_size: usize,
    /// Group size to number of lookups that returned it
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub lookups_per_second: f64,
}

/// Pick up to `count` distinct stored words at random
#[must_use]
pub fn sample_words(store: &WordStore, count: usize) -> Vec<String> {
    let words = store.words();
    words
        .choose_multiple(&mut rand::rng(), count)
        .map(|w| w.word().to_owned())
        .collect()
}

/// Look up every target word in parallel and time the whole batch
#[must_use]
pub fn run_benchmark(
    store: &WordStore,
    targets: &[String],
    query: &AnagramQuery,
) -> BenchmarkResult {
    let start = Instant::now();
    let sizes: Vec<usize> = targets
        .par_iter()
        .map(|word| anagram_group(store, word, query).len())
        .collect();
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &size in &sizes {
        *distribution.entry(size).or_insert(0) += 1;
    }

    let lookups = sizes.len();
    let total_matches: usize = sizes.iter().sum();
    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        lookups,
        total_matches,
        average_group_size: if lookups > 0 {
            total_matches as f64 / lookups as f64
        } else {
            0.0
        },
        min_group_size: sizes.iter().copied().min().unwrap_or(0),
        max_group_size: sizes.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        lookups_per_second: if seconds > 0.0 {
            lookups as f64 / seconds
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SEED_WORDS;

    fn seed_store() -> WordStore {
        WordStore::with_words(SEED_WORDS)
    }

    #[test]
    fn sample_words_are_stored_and_distinct() {
        let store = seed_store();
        let sample = sample_words(&store, 20);

        assert_eq!(sample.len(), 20);
        assert!(sample.iter().all(|w| store.contains(w)));

        let mut unique = sample.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), sample.len());
    }

    #[test]
    fn sample_larger_than_store_returns_everything() {
        let store = WordStore::with_words(["ruby", "yrub"]);
        assert_eq!(sample_words(&store, 10).len(), 2);
    }

    #[test]
    fn benchmark_runs() {
        let store = seed_store();
        let targets = sample_words(&store, 30);
        let result = run_benchmark(&store, &targets, &AnagramQuery::new());

        assert_eq!(result.lookups, 30);
        // Every stored word matches at least itself
        assert!(result.min_group_size >= 1);
        assert!(result.average_group_size >= 1.0);
        assert!(result.average_group_size <= result.max_group_size as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let store = seed_store();
        let targets = sample_words(&store, 25);
        let result = run_benchmark(&store, &targets, &AnagramQuery::new());

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.lookups);
    }

    #[test]
    fn benchmark_empty_targets() {
        let store = seed_store();
        let result = run_benchmark(&store, &[], &AnagramQuery::new());

        assert_eq!(result.lookups, 0);
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.min_group_size, 0);
    }

    #[test]
    fn benchmark_honours_query_limit() {
        let store = seed_store();
        let targets = vec!["stale".to_string(), "spare".to_string()];
        let query = AnagramQuery::new().limit(Some(2));
        let result = run_benchmark(&store, &targets, &query);

        assert_eq!(result.max_group_size, 2);
        assert_eq!(result.total_matches, 4);
    }
}
