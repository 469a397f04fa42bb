//! Anagram query engine
//!
//! Read-only views over the store keyed by anagram key, plus the matching
//! delete.

mod anagram;

pub use anagram::{AnagramQuery, anagram_group, delete_anagram_group};
