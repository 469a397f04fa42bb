//! Core domain types for the anagram index
//!
//! The anagram key function and the stored `Word` record with its validation
//! rules. Nothing here touches the store itself.

mod anagram_key;
mod word;

pub use anagram_key::{canonicalize, is_anagram_of};
pub(crate) use word::{TAKEN_MESSAGE, check_format, check_pairing};
pub use word::{Field, FieldError, MAX_WORD_LENGTH, ValidationError, Word, is_valid_format};
