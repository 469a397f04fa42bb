//! TUI application state and logic

use crate::commands::{AnagramLookup, DictionaryReport, build_report, lookup_anagrams};
use crate::core::MAX_WORD_LENGTH;
use crate::output::formatters::describe_query;
use crate::query::{AnagramQuery, delete_anagram_group};
use crate::store::WordStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Limits cycled through with Ctrl+L
pub const LIMIT_STEPS: [Option<i64>; 4] = [None, Some(5), Some(10), Some(25)];

/// Application state
pub struct App<'a> {
    pub store: &'a WordStore,
    pub query: AnagramQuery,
    pub input_buffer: String,
    pub current: Option<AnagramLookup>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub report: Option<DictionaryReport>,
    pub should_quit: bool,
    limit_step: usize,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub word: String,
    pub anagram_key: String,
    pub matches: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(store: &'a WordStore) -> Self {
        let mut app = Self {
            store,
            query: AnagramQuery::new(),
            input_buffer: String::new(),
            current: None,
            history: Vec::new(),
            messages: vec![Message {
                text: "Type a word and press Enter to list its anagrams.".to_string(),
                style: MessageStyle::Info,
            }],
            report: None,
            should_quit: false,
            limit_step: 0,
        };
        app.refresh_report();
        app
    }

    /// Recompute the statistics panel; an empty store has no report
    pub fn refresh_report(&mut self) {
        self.report = build_report(self.store).ok();
    }

    /// Append a character to the input if it can be part of a word
    pub fn push_char(&mut self, c: char) -> bool {
        if (c.is_ascii_alphabetic() || c == '-') && self.input_buffer.len() < MAX_WORD_LENGTH {
            self.input_buffer.push(c);
            true
        } else {
            false
        }
    }

    /// Look up the word in the input buffer
    pub fn submit(&mut self) {
        let word = self.input_buffer.trim().to_string();
        if word.is_empty() {
            self.add_message("Enter a word first!", MessageStyle::Error);
            return;
        }

        self.run_lookup(&word);
        self.input_buffer.clear();
    }

    fn run_lookup(&mut self, word: &str) {
        let lookup = lookup_anagrams(self.store, word, self.query);
        debug!(word, matches = lookup.matches.len(), "tui lookup");

        if lookup.matches.is_empty() {
            self.add_message(
                &format!("No anagrams of '{word}' stored"),
                MessageStyle::Error,
            );
        } else {
            self.add_message(
                &format!("{} match(es) for '{word}'", lookup.matches.len()),
                MessageStyle::Success,
            );
        }

        self.history.push(HistoryEntry {
            word: word.to_string(),
            anagram_key: lookup.anagram_key.clone(),
            matches: lookup.matches.len(),
        });
        if self.history.len() > 5 {
            self.history.remove(0);
        }
        self.current = Some(lookup);
    }

    /// Re-run the current lookup, e.g. after the options changed
    fn rerun(&mut self) {
        if let Some(word) = self.current.as_ref().map(|l| l.word.clone()) {
            let lookup = lookup_anagrams(self.store, &word, self.query);
            self.current = Some(lookup);
        }
    }

    pub fn toggle_exclude_self(&mut self) {
        self.query = self.query.exclude_self(!self.query.exclude_self);
        self.options_changed();
    }

    pub fn toggle_proper_nouns(&mut self) {
        self.query = self
            .query
            .exclude_proper_nouns(!self.query.exclude_proper_nouns);
        self.options_changed();
    }

    pub fn cycle_limit(&mut self) {
        self.limit_step = (self.limit_step + 1) % LIMIT_STEPS.len();
        self.query = self.query.limit(LIMIT_STEPS[self.limit_step]);
        self.options_changed();
    }

    fn options_changed(&mut self) {
        self.rerun();
        let text = format!("Options: {}", describe_query(&self.query));
        self.add_message(&text, MessageStyle::Info);
    }

    /// Delete the words shown for the current lookup
    pub fn delete_current_group(&mut self) {
        let Some(word) = self.current.as_ref().map(|l| l.word.clone()) else {
            self.add_message("Nothing to delete!", MessageStyle::Error);
            return;
        };

        let removed = delete_anagram_group(self.store, &word, &self.query);
        self.rerun();
        self.refresh_report();
        self.add_message(
            &format!("Deleted {removed} word(s) anagrammatic to '{word}'"),
            MessageStyle::Success,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('c') if ctrl => app.should_quit = true,
                KeyCode::Char('s') if ctrl => app.toggle_exclude_self(),
                KeyCode::Char('p') if ctrl => app.toggle_proper_nouns(),
                KeyCode::Char('l') if ctrl => app.cycle_limit(),
                KeyCode::Char('d') if ctrl => app.delete_current_group(),
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('q') if app.input_buffer.is_empty() => app.should_quit = true,
                KeyCode::Char(c) => {
                    app.push_char(c);
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn new_app_has_report_for_populated_store() {
        let store = WordStore::with_words(["ruby", "yrub"]);
        let app = App::new(&store);
        assert_eq!(app.report.as_ref().map(|r| r.meta.word_count), Some(2));
    }

    #[test]
    fn new_app_has_no_report_for_empty_store() {
        let store = WordStore::new();
        let app = App::new(&store);
        assert!(app.report.is_none());
    }

    #[test]
    fn input_rejects_non_word_characters() {
        let store = WordStore::new();
        let mut app = App::new(&store);

        assert!(app.push_char('a'));
        assert!(app.push_char('-'));
        assert!(!app.push_char('1'));
        assert!(!app.push_char(' '));
        assert_eq!(app.input_buffer, "a-");

        type_word(&mut app, &"b".repeat(40));
        assert_eq!(app.input_buffer.len(), MAX_WORD_LENGTH);
    }

    #[test]
    fn submit_looks_up_and_records_history() {
        let store = WordStore::with_words(["ruby", "yrub", "lua"]);
        let mut app = App::new(&store);

        type_word(&mut app, "bury");
        app.submit();

        let current = app.current.as_ref().unwrap();
        assert_eq!(current.match_words(), vec!["ruby", "yrub"]);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].anagram_key, "bruy");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn submit_empty_input_is_an_error() {
        let store = WordStore::new();
        let mut app = App::new(&store);

        app.submit();
        assert!(app.current.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn history_keeps_last_five() {
        let store = WordStore::with_words(["ruby"]);
        let mut app = App::new(&store);

        for word in ["a", "b", "c", "d", "e", "f", "g"] {
            type_word(&mut app, word);
            app.submit();
        }

        assert_eq!(app.history.len(), 5);
        assert_eq!(app.history[0].word, "c");
    }

    #[test]
    fn toggles_rerun_current_lookup() {
        let store = WordStore::with_words(["ruby", "yrub", "Bury"]);
        let mut app = App::new(&store);

        type_word(&mut app, "ruby");
        app.submit();
        assert_eq!(app.current.as_ref().unwrap().matches.len(), 3);

        app.toggle_exclude_self();
        assert_eq!(
            app.current.as_ref().unwrap().match_words(),
            vec!["yrub", "Bury"]
        );

        app.toggle_proper_nouns();
        assert_eq!(app.current.as_ref().unwrap().match_words(), vec!["yrub"]);

        app.toggle_exclude_self();
        app.toggle_proper_nouns();
        assert_eq!(app.current.as_ref().unwrap().matches.len(), 3);
    }

    #[test]
    fn limit_cycles_and_wraps() {
        let store = WordStore::new();
        let mut app = App::new(&store);

        for expected in [Some(5), Some(10), Some(25), None] {
            app.cycle_limit();
            assert_eq!(app.query.limit, expected);
        }
    }

    #[test]
    fn delete_current_group_updates_store_and_report() {
        let store = WordStore::with_words(["ruby", "yrub", "lua"]);
        let mut app = App::new(&store);

        type_word(&mut app, "ruby");
        app.submit();
        app.delete_current_group();

        assert_eq!(store.len(), 1);
        assert!(app.current.as_ref().unwrap().matches.is_empty());
        assert_eq!(app.report.as_ref().map(|r| r.meta.word_count), Some(1));
    }

    #[test]
    fn delete_without_lookup_is_an_error() {
        let store = WordStore::with_words(["ruby"]);
        let mut app = App::new(&store);

        app.delete_current_group();
        assert_eq!(store.len(), 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }
}
