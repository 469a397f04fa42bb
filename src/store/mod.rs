//! Word storage
//!
//! The [`WordStore`] owns every record and enforces the per-word invariants on
//! insert. Query and statistics code reads it through crate-private accessors.

mod error;
mod word_store;

pub use error::{Result, StoreError};
pub use word_store::{InsertResult, WordStore};
pub(crate) use word_store::StoreState;
