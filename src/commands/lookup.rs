//! Anagram lookup command
//!
//! Looks up the anagram group of a word with the requested filters.

use serde::Serialize;

use crate::core::{Word, canonicalize};
use crate::query::{AnagramQuery, anagram_group};
use crate::store::WordStore;

/// Result of looking up one word
#[derive(Debug, Clone, Serialize)]
pub struct AnagramLookup {
    pub word: String,
    pub anagram_key: String,
    pub query: AnagramQuery,
    pub matches: Vec<Word>,
}

impl AnagramLookup {
    /// The matched words as plain strings
    #[must_use]
    pub fn match_words(&self) -> Vec<&str> {
        self.matches.iter().map(Word::word).collect()
    }
}

/// Look up the anagrams of `word`
#[must_use]
pub fn lookup_anagrams(store: &WordStore, word: &str, query: AnagramQuery) -> AnagramLookup {
    AnagramLookup {
        word: word.to_string(),
        anagram_key: canonicalize(word),
        query,
        matches: anagram_group(store, word, &query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reports_key_and_matches() {
        let store = WordStore::with_words(["ruby", "yrub", "lua"]);
        let lookup = lookup_anagrams(&store, "bury", AnagramQuery::new());

        assert_eq!(lookup.word, "bury");
        assert_eq!(lookup.anagram_key, "bruy");
        assert_eq!(lookup.match_words(), vec!["ruby", "yrub"]);
    }

    #[test]
    fn lookup_passes_options_through() {
        let store = WordStore::with_words(["ruby", "yrub", "Bury"]);
        let query = AnagramQuery::new().exclude_self(true).exclude_proper_nouns(true);
        let lookup = lookup_anagrams(&store, "ruby", query);

        assert_eq!(lookup.match_words(), vec!["yrub"]);
        assert_eq!(lookup.query, query);
    }

    #[test]
    fn lookup_unknown_word_is_empty() {
        let store = WordStore::with_words(["ruby"]);
        let lookup = lookup_anagrams(&store, "zebra", AnagramQuery::new());
        assert!(lookup.matches.is_empty());
    }

    #[test]
    fn lookup_serializes_matches() {
        let store = WordStore::with_words(["ruby"]);
        let lookup = lookup_anagrams(&store, "ruby", AnagramQuery::new());
        let json = serde_json::to_value(&lookup).unwrap();

        assert_eq!(json["anagram_key"], "bruy");
        assert_eq!(json["matches"][0]["word"], "ruby");
        assert_eq!(json["matches"][0]["anagram_key"], "bruy");
    }
}
