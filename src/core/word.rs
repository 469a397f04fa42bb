//! Stored word representation
//!
//! A `Word` is one record of the store: the word as typed, its anagram key and
//! the store-managed timestamps. Records are only ever built by the store's
//! insert path, so the key can never drift from the word.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::anagram_key::canonicalize;

/// Longest word the store accepts, in characters
pub const MAX_WORD_LENGTH: usize = 32;

pub(crate) const BLANK_MESSAGE: &str = "can't be blank";
pub(crate) const TAKEN_MESSAGE: &str = "has already been taken";
pub(crate) const FORMAT_MESSAGE: &str =
    "Words must be between 1 and 32 alpha-grammatical characters.";

/// A word record held by the store
///
/// Fields are read-only outside the crate. Timestamps are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    id: u64,
    word: String,
    anagram_key: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Word {
    pub(crate) const fn new(
        id: u64,
        word: String,
        anagram_key: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            word,
            anagram_key,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store-assigned id; ids increase in insertion order
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// The word exactly as it was inserted
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn anagram_key(&self) -> &str {
        &self.anagram_key
    }

    #[inline]
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[inline]
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Length of the word in characters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Always false for stored records; blank words never pass validation
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Whether the word looks like a proper noun (does not start with `a`-`z`)
    #[inline]
    #[must_use]
    pub fn is_proper_noun(&self) -> bool {
        !self.word.starts_with(|c: char| c.is_ascii_lowercase())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

/// Which attribute a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Word,
    AnagramKey,
    KeyMismatch,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Word => "word",
            Self::AnagramKey => "anagram_key",
            Self::KeyMismatch => "key_mismatch",
        };
        f.write_str(name)
    }
}

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub(crate) fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Rejection of a single word by the store
///
/// Carries every field-level message found for the candidate; an insert that
/// returns this error wrote nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("'{word}' rejected: {}", join_messages(.errors))]
pub struct ValidationError {
    word: String,
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(word: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            word: word.into(),
            errors,
        }
    }

    /// The rejected input
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Check whether any message was recorded against `field`
    #[must_use]
    pub fn has_error_on(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check that a value is 1-32 characters drawn from `[A-Za-z-]`
#[must_use]
pub fn is_valid_format(value: &str) -> bool {
    !value.is_empty()
        && value.chars().count() <= MAX_WORD_LENGTH
        && value.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// Record presence and format messages for one field
pub(crate) fn check_format(field: Field, value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new(field, BLANK_MESSAGE));
    } else if !is_valid_format(value) {
        errors.push(FieldError::new(field, FORMAT_MESSAGE));
    }
}

/// Record a message when `anagram_key` is not the canonical form of `word`
pub(crate) fn check_pairing(word: &str, anagram_key: &str, errors: &mut Vec<FieldError>) {
    if !word.is_empty() && canonicalize(word) != anagram_key {
        errors.push(FieldError::new(
            Field::KeyMismatch,
            format!("Anagram key '{anagram_key}' does not pair with word '{word}'"),
        ));
    }
}
