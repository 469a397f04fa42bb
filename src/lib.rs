//! Anagram Index
//!
//! A dictionary store indexed by anagram key: every word is saved with its
//! sorted-letter signature so all of its anagrams come back in one lookup.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_index::query::{AnagramQuery, anagram_group};
//! use anagram_index::store::WordStore;
//!
//! let store = WordStore::with_words(["ruby", "bury", "Ruby", "lua"]);
//!
//! let query = AnagramQuery::new().exclude_self(true).exclude_proper_nouns(true);
//! let words: Vec<String> = anagram_group(&store, "ruby", &query)
//!     .iter()
//!     .map(|w| w.word().to_string())
//!     .collect();
//! assert_eq!(words, ["bury"]);
//! ```

// Core domain types
pub mod core;

// Word storage
pub mod store;

// Anagram lookups
pub mod query;

// Whole-store statistics
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
