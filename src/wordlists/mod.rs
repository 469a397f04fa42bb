//! Word lists for the anagram index
//!
//! Provides the embedded seed dictionary and the sources the store imports from.

mod embedded;
pub mod loader;

pub use embedded::{SEED_WORDS, SEED_WORDS_COUNT};
pub use loader::{FileSource, SliceSource, WordSource};

/// The embedded seed dictionary as an import source
#[must_use]
pub const fn seed_source() -> SliceSource<'static> {
    SliceSource::new("seed dictionary", SEED_WORDS)
}
