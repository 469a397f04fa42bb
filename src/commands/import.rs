//! Dictionary import command
//!
//! Reads a word source into the store and summarises what was rejected.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;

use crate::core::ValidationError;
use crate::store::{InsertResult, Result, WordStore};
use crate::wordlists::WordSource;

/// Outcome of importing one source
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    pub source: String,
    pub total: usize,
    pub accepted: usize,
    pub rejected: Vec<ValidationError>,
    pub purged: bool,
}

impl ImportSummary {
    /// Summarise per-word results from a bulk import
    #[must_use]
    pub fn from_results(
        source: impl Into<String>,
        results: Vec<InsertResult>,
        purged: bool,
    ) -> Self {
        let total = results.len();
        let rejected: Vec<ValidationError> = results
            .into_iter()
            .filter_map(std::result::Result::err)
            .collect();

        Self {
            source: source.into(),
            total,
            accepted: total - rejected.len(),
            rejected,
            purged,
        }
    }
}

/// Import every word of `source` into `store`
///
/// The source is read completely before the store is touched. With
/// `show_progress` a progress bar is drawn on stderr while words are inserted.
///
/// # Errors
///
/// Returns `StoreError::SourceUnavailable` if the source cannot be read.
///
/// # Panics
///
/// Will not panic - the progress template is a constant known to parse.
pub fn run_import(
    store: &WordStore,
    source: &dyn WordSource,
    purge: bool,
    show_progress: bool,
) -> Result<ImportSummary> {
    let words = source.read_words()?;

    let pb = if show_progress {
        ProgressBar::new(words.len() as u64)
    } else {
        ProgressBar::with_draw_target(Some(words.len() as u64), ProgressDrawTarget::hidden())
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );
    pb.set_message(source.describe());

    let results = store.bulk_import(pb.wrap_iter(words.into_iter()), purge);
    pb.finish_with_message("Complete!");

    Ok(ImportSummary::from_results(source.describe(), results, purge))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Field;
    use crate::store::StoreError;
    use crate::wordlists::{FileSource, SliceSource};

    #[test]
    fn summary_counts_rejections() {
        let store = WordStore::new();
        let source = SliceSource::new("inline", &["ruby", "ruby", "lua5", "", "yrub"]);

        let summary = run_import(&store, &source, true, false).unwrap();

        assert_eq!(summary.source, "inline");
        assert_eq!(summary.total, 5);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.rejected.len(), 3);
        assert!(summary.rejected[0].has_error_on(Field::Word));
        assert_eq!(summary.rejected[0].word(), "ruby");
        assert!(summary.purged);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn import_appends_without_purge() {
        let store = WordStore::with_words(["lua"]);
        let source = SliceSource::new("inline", &["ruby"]);

        let summary = run_import(&store, &source, false, false).unwrap();

        assert_eq!(summary.accepted, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_source_fails_before_purge() {
        let store = WordStore::with_words(["lua"]);
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.txt"));

        let result = run_import(&store, &source, true, false);

        assert!(matches!(result, Err(StoreError::SourceUnavailable { .. })));
        assert!(store.contains("lua"));
    }
}
