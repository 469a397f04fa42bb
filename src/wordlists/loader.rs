//! Word list sources
//!
//! A [`WordSource`] hands the store a line-oriented list of words. Sources do no
//! validation: blank or malformed lines are passed through and rejected by the
//! store like any other bad word.

use std::fs;
use std::path::{Path, PathBuf};

use crate::store::{Result, StoreError};

/// Something the store can import words from
pub trait WordSource {
    /// Read the complete list of words, one entry per line
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SourceUnavailable` if the source cannot be read.
    fn read_words(&self) -> Result<Vec<String>>;

    /// Short human-readable name used in logs and reports
    fn describe(&self) -> String;
}

/// Words read from a text file, one per line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn read_words(&self) -> Result<Vec<String>> {
        load_from_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Words held in a static slice, such as the embedded seed dictionary
#[derive(Debug, Clone, Copy)]
pub struct SliceSource<'a> {
    name: &'a str,
    words: &'a [&'a str],
}

impl<'a> SliceSource<'a> {
    #[must_use]
    pub const fn new(name: &'a str, words: &'a [&'a str]) -> Self {
        Self { name, words }
    }
}

impl WordSource for SliceSource<'_> {
    fn read_words(&self) -> Result<Vec<String>> {
        Ok(self.words.iter().map(|&w| w.to_owned()).collect())
    }

    fn describe(&self) -> String {
        self.name.to_owned()
    }
}

/// Load words from a file
///
/// Every line becomes one entry with trailing whitespace and line terminators
/// stripped.
///
/// # Errors
///
/// Returns `StoreError::SourceUnavailable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use anagram_index::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/seed_dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| StoreError::source_unavailable(path, e))?;

    // Undecodable bytes become U+FFFD and fail validation for that line only
    Ok(split_lines(&String::from_utf8_lossy(&bytes)))
}

/// Split text into words, one per line
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end().to_owned())
        .collect()
}
