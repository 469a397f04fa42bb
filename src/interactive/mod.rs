//! Interactive TUI interface
//!
//! Look up anagrams, toggle query options and watch the dictionary statistics.

mod app;
mod rendering;

pub use app::{App, HistoryEntry, LIMIT_STEPS, Message, MessageStyle, run_tui};
