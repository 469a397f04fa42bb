//! Formatting utilities for terminal output

use crate::query::AnagramQuery;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Describe the active query options, e.g. `exclude self, limit 5`
#[must_use]
pub fn describe_query(query: &AnagramQuery) -> String {
    let mut parts = Vec::new();
    if query.exclude_self {
        parts.push("exclude self".to_string());
    }
    if query.exclude_proper_nouns {
        parts.push("no proper nouns".to_string());
    }
    if let Some(limit) = query.effective_limit() {
        parts.push(format!("limit {limit}"));
    }

    if parts.is_empty() {
        "all anagrams".to_string()
    } else {
        parts.join(", ")
    }
}

/// Join words for a one-line listing, eliding past `max`
#[must_use]
pub fn join_words<S: AsRef<str>>(words: &[S], max: usize) -> String {
    let shown: Vec<&str> = words.iter().take(max).map(AsRef::as_ref).collect();
    let mut line = shown.join(", ");
    if words.len() > max {
        line.push_str(&format!(" … (+{})", words.len() - max));
    }
    line
}
