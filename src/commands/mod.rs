//! Command implementations

pub mod benchmark;
pub mod import;
pub mod lookup;
pub mod report;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_words};
pub use import::{ImportSummary, run_import};
pub use lookup::{AnagramLookup, lookup_anagrams};
pub use report::{DictionaryReport, build_report};
