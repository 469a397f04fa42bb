//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_groups, print_import_summary, print_json, print_largest_group,
    print_lookup, print_report,
};
