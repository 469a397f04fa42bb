//! Anagram-indexed word store
//!
//! Holds every record in insertion order alongside two indexes: a unique index
//! on the word and a non-unique index on the anagram key. All mutation goes
//! through a single write lock so the uniqueness check and the insert it
//! guards can never interleave with another writer.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rustc_hash::FxHashMap;
use tracing::{debug, error, info};

use super::error::{Result, StoreError};
use crate::core::{
    Field, FieldError, TAKEN_MESSAGE, ValidationError, Word, canonicalize, check_format,
    check_pairing,
};
use crate::wordlists::WordSource;

/// Outcome of inserting one word as part of a batch
pub type InsertResult = std::result::Result<Word, ValidationError>;

/// Records and indexes guarded by the store lock
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    next_id: u64,
    records: BTreeMap<u64, Word>,
    by_word: FxHashMap<String, u64>,
    by_key: FxHashMap<String, BTreeSet<u64>>,
}

impl StoreState {
    /// Validate and persist one word
    ///
    /// The key is computed by the caller from the same `word`; validation still
    /// checks the pairing so a bad key is never written.
    fn insert(
        &mut self,
        word: &str,
        anagram_key: String,
        now: DateTime<Utc>,
    ) -> std::result::Result<Word, ValidationError> {
        let mut errors = Vec::new();
        check_format(Field::Word, word, &mut errors);
        if self.by_word.contains_key(word) {
            errors.push(FieldError::new(Field::Word, TAKEN_MESSAGE));
        }
        check_format(Field::AnagramKey, &anagram_key, &mut errors);
        check_pairing(word, &anagram_key, &mut errors);

        if !errors.is_empty() {
            let rejection = ValidationError::new(word, errors);
            if rejection.has_error_on(Field::KeyMismatch) {
                error!(word, anagram_key, "canonical key disagrees with its word");
            }
            debug!(%rejection, "word rejected");
            return Err(rejection);
        }

        let id = self.next_id;
        self.next_id += 1;

        let record = Word::new(id, word.to_owned(), anagram_key, now);
        self.by_word.insert(word.to_owned(), id);
        self.by_key
            .entry(record.anagram_key().to_owned())
            .or_default()
            .insert(id);
        self.records.insert(id, record.clone());

        Ok(record)
    }

    /// Remove the given records; unknown ids are skipped
    pub(crate) fn remove_all(&mut self, ids: &[u64]) -> usize {
        let mut removed = 0;

        for id in ids {
            let Some(record) = self.records.remove(id) else {
                continue;
            };
            self.by_word.remove(record.word());
            if let Some(group) = self.by_key.get_mut(record.anagram_key()) {
                group.remove(id);
                if group.is_empty() {
                    self.by_key.remove(record.anagram_key());
                }
            }
            removed += 1;
        }

        removed
    }

    fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.by_word.clear();
        self.by_key.clear();
        removed
    }

    /// All records in insertion order
    pub(crate) const fn records(&self) -> &BTreeMap<u64, Word> {
        &self.records
    }

    /// Records sharing `anagram_key`, in insertion order
    pub(crate) fn group(&self, anagram_key: &str) -> Vec<&Word> {
        self.by_key
            .get(anagram_key)
            .map(|ids| ids.iter().filter_map(|id| self.records.get(id)).collect())
            .unwrap_or_default()
    }

    /// Every anagram key with the size of its group
    pub(crate) fn group_sizes(&self) -> impl Iterator<Item = (&str, usize)> {
        self.by_key
            .iter()
            .map(|(key, ids)| (key.as_str(), ids.len()))
    }
}

/// In-memory word store with an anagram-key index
///
/// The store is an explicit handle: create one, pass it by reference to the
/// query and statistics functions, drop it when done. Every method takes
/// `&self`, so a store can be shared across threads behind an `Arc`.
///
/// # Examples
/// ```
/// use anagram_index::store::WordStore;
///
/// let store = WordStore::new();
/// assert!(store.insert("ruby").is_ok());
/// assert!(store.insert("ruby").is_err()); // already taken
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct WordStore {
    state: RwLock<StoreState>,
}

impl WordStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `words`, ignoring rejected entries
    #[must_use]
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let store = Self::new();
        let _ = store.bulk_import(words, false);
        store
    }

    /// Insert a single word
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the word is blank, longer than 32
    /// characters, contains anything outside `[A-Za-z-]`, or is already stored.
    /// Nothing is written in that case.
    pub fn insert(&self, word: &str) -> std::result::Result<Word, ValidationError> {
        let anagram_key = canonicalize(word);
        self.state.write().insert(word, anagram_key, Utc::now())
    }

    /// Insert many words, each independently
    ///
    /// When `purge` is set every existing record is removed first. A rejected
    /// word never affects the others, and there is no rollback: results are
    /// returned in input order with whatever was accepted left in the store.
    pub fn bulk_import<I, S>(&self, words: I, purge: bool) -> Vec<InsertResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if purge {
            self.purge_all();
        }

        let results: Vec<InsertResult> = words
            .into_iter()
            .map(|word| self.insert(word.as_ref()))
            .collect();

        let accepted = results.iter().filter(|r| r.is_ok()).count();
        info!(
            accepted,
            rejected = results.len() - accepted,
            purge,
            "bulk import finished"
        );

        results
    }

    /// Import every line of `source`
    ///
    /// The source is read in full before anything else happens, so a missing
    /// source leaves the store untouched even when `purge` is set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SourceUnavailable` if the source cannot be read.
    pub fn import_from_source<W>(&self, source: &W, purge: bool) -> Result<Vec<InsertResult>>
    where
        W: WordSource + ?Sized,
    {
        let words = source.read_words()?;
        info!(source = %source.describe(), lines = words.len(), "importing words");
        Ok(self.bulk_import(words, purge))
    }

    /// Remove every record matching `predicate`, returning how many went
    ///
    /// The predicate runs over a snapshot with no lock held, so it may read the
    /// store. Records removed concurrently in the meantime are skipped.
    pub fn delete_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Word) -> bool,
    {
        let ids: Vec<u64> = self
            .words()
            .iter()
            .filter(|record| predicate(record))
            .map(Word::id)
            .collect();

        let removed = self.state.write().remove_all(&ids);
        info!(removed, "deleted words");
        removed
    }

    /// Remove every record unconditionally
    pub fn purge_all(&self) -> usize {
        let removed = self.state.write().clear();
        info!(removed, "purged word store");
        removed
    }

    /// Look up a record by its exact (case-sensitive) word
    #[must_use]
    pub fn find(&self, word: &str) -> Option<Word> {
        let state = self.state.read();
        state
            .by_word
            .get(word)
            .and_then(|id| state.records.get(id))
            .cloned()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.state.read().by_word.contains_key(word)
    }

    /// Number of stored records
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.read().records.is_empty()
    }

    /// All records in insertion order
    #[must_use]
    pub fn words(&self) -> Vec<Word> {
        self.state.read().records.values().cloned().collect()
    }

    /// Count records matching `predicate`, evaluated over a snapshot
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Word) -> bool,
    {
        self.words()
            .iter()
            .filter(|record| predicate(record))
            .count()
    }

    /// Check every record's key against its word
    ///
    /// # Errors
    ///
    /// Returns `StoreError::KeyMismatch` for the first record whose key is not
    /// the canonical form of its word.
    pub fn verify_integrity(&self) -> Result<()> {
        let state = self.state.read();
        for record in state.records.values() {
            if canonicalize(record.word()) != record.anagram_key() {
                error!(word = record.word(), "stored anagram key is out of sync");
                return Err(StoreError::KeyMismatch {
                    word: record.word().to_owned(),
                    anagram_key: record.anagram_key().to_owned(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write()
    }
}
