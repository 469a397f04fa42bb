//! Anagram group lookups
//!
//! A lookup canonicalizes the input word, pulls the matching group from the key
//! index and applies the options in [`AnagramQuery`].

use serde::Serialize;
use tracing::info;

use crate::core::{Word, canonicalize};
use crate::store::{StoreState, WordStore};

/// Options for an anagram group lookup
///
/// A plain value: build one, hand it to [`anagram_group`], reuse it freely.
///
/// # Examples
/// ```
/// use anagram_index::query::{AnagramQuery, anagram_group};
/// use anagram_index::store::WordStore;
///
/// let store = WordStore::with_words(["ruby", "yrub", "byru", "ubyr"]);
/// let query = AnagramQuery::new().exclude_self(true);
///
/// let group = anagram_group(&store, "ruby", &query);
/// assert_eq!(group.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnagramQuery {
    /// Drop records whose word equals the looked-up word exactly
    pub exclude_self: bool,
    /// Keep only records whose word starts with `a`-`z`
    pub exclude_proper_nouns: bool,
    /// Cap on the result size; zero or negative means no cap
    pub limit: Option<i64>,
}

impl AnagramQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exclude_self: false,
            exclude_proper_nouns: false,
            limit: None,
        }
    }

    #[must_use]
    pub const fn exclude_self(mut self, exclude: bool) -> Self {
        self.exclude_self = exclude;
        self
    }

    #[must_use]
    pub const fn exclude_proper_nouns(mut self, exclude: bool) -> Self {
        self.exclude_proper_nouns = exclude;
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: Option<i64>) -> Self {
        self.limit = limit;
        self
    }

    /// The cap actually applied, if any
    #[must_use]
    pub fn effective_limit(&self) -> Option<usize> {
        self.limit
            .filter(|&n| n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
    }

    fn admits(&self, word: &str, record: &Word) -> bool {
        if self.exclude_self && record.word() == word {
            return false;
        }
        !(self.exclude_proper_nouns && record.is_proper_noun())
    }
}

/// All stored anagrams of `word`, filtered by `query`
///
/// Records come back in store order (insertion order); the limit keeps the
/// first records that pass the filters. A word with no stored anagrams yields
/// an empty list.
#[must_use]
pub fn anagram_group(store: &WordStore, word: &str, query: &AnagramQuery) -> Vec<Word> {
    let state = store.read();
    select(&state, word, query).into_iter().cloned().collect()
}

/// Delete exactly the records [`anagram_group`] would return
///
/// Selection and removal happen under one write lock.
pub fn delete_anagram_group(store: &WordStore, word: &str, query: &AnagramQuery) -> usize {
    let mut state = store.write();
    let ids: Vec<u64> = select(&state, word, query)
        .into_iter()
        .map(Word::id)
        .collect();

    let removed = state.remove_all(&ids);
    info!(word, removed, "deleted anagram group");
    removed
}

fn select<'s>(state: &'s StoreState, word: &str, query: &AnagramQuery) -> Vec<&'s Word> {
    let limit = query.effective_limit().unwrap_or(usize::MAX);

    state
        .group(&canonicalize(word))
        .into_iter()
        .filter(|record| query.admits(word, record))
        .take(limit)
        .collect()
}
