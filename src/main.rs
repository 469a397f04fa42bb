//! Anagram Index - CLI
//!
//! Explore a dictionary by anagram key from a TUI or one-shot commands.

use std::io::IsTerminal;
use std::path::PathBuf;

use anagram_index::{
    commands::{build_report, lookup_anagrams, run_benchmark, run_import, sample_words},
    logging,
    output::{
        print_benchmark_result, print_groups, print_import_summary, print_json,
        print_largest_group, print_lookup, print_report,
    },
    query::AnagramQuery,
    stats::{groups_of_size, largest_group, most_anagrams},
    store::WordStore,
    wordlists::{FileSource, WordSource, seed_source},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "anagram_index",
    about = "Dictionary store indexed by anagram key",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary to load: 'seed' (default, embedded) or path to a word-per-line file
    #[arg(
        short = 'd',
        long,
        global = true,
        env = "ANAGRAM_DICTIONARY",
        default_value = "seed"
    )]
    dictionary: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI explorer (default)
    Explore,

    /// List the anagrams of a word
    Anagrams {
        /// The word to look up
        word: String,

        /// Leave the word itself out of the results
        #[arg(long)]
        exclude_self: bool,

        /// Leave out words that start with a capital letter
        #[arg(long)]
        exclude_proper_nouns: bool,

        /// Return at most this many words (zero or negative means no limit)
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
    },

    /// Word length statistics and anagram group overview
    Stats,

    /// The words of the largest anagram group
    Most,

    /// Anagram keys whose group has at least `min` words
    Groups {
        /// Minimum group size
        #[arg(short, long, default_value = "2", allow_negative_numbers = true)]
        min: i64,
    },

    /// Validate and summarise a file against the loaded dictionary
    ///
    /// The dictionary lives in memory only, so nothing is saved on exit.
    Import {
        /// File to import
        path: PathBuf,

        /// Check against the loaded dictionary instead of an empty one
        #[arg(short, long)]
        append: bool,
    },

    /// Time anagram lookups for random stored words
    Benchmark {
        /// Number of random words to look up
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the dictionary named by the -d flag
///
/// - "seed": the embedded dictionary
/// - "<path>": a word-per-line file
fn load_store(dictionary: &str) -> Result<WordStore> {
    let store = WordStore::new();
    let results = match dictionary {
        "seed" => store.import_from_source(&seed_source(), true),
        path => store.import_from_source(&FileSource::new(path), true),
    }
    .with_context(|| format!("Failed to load dictionary '{dictionary}'"))?;

    let rejected = results.iter().filter(|r| r.is_err()).count();
    info!(
        dictionary,
        words = store.len(),
        rejected,
        "dictionary loaded"
    );
    Ok(store)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let store = load_store(&cli.dictionary)?;

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => run_explore_command(&store),
        Commands::Anagrams {
            word,
            exclude_self,
            exclude_proper_nouns,
            limit,
        } => {
            let query = AnagramQuery::new()
                .exclude_self(exclude_self)
                .exclude_proper_nouns(exclude_proper_nouns)
                .limit(limit);
            run_anagrams_command(&store, &word, query, cli.json)
        }
        Commands::Stats => run_stats_command(&store, cli.json),
        Commands::Most => run_most_command(&store, cli.json),
        Commands::Groups { min } => run_groups_command(&store, min, cli.json),
        Commands::Import { path, append } => run_import_command(&store, path, append, cli.json),
        Commands::Benchmark { count } => run_benchmark_command(&store, count, cli.json),
    }
}

fn run_explore_command(store: &WordStore) -> Result<()> {
    use anagram_index::interactive::{App, run_tui};

    let app = App::new(store);
    run_tui(app)
}

fn run_anagrams_command(
    store: &WordStore,
    word: &str,
    query: AnagramQuery,
    json: bool,
) -> Result<()> {
    let lookup = lookup_anagrams(store, word, query);
    if json {
        print_json(&lookup)?;
    } else {
        print_lookup(&lookup);
    }
    Ok(())
}

fn run_stats_command(store: &WordStore, json: bool) -> Result<()> {
    let report = build_report(store).context("Cannot compute statistics")?;
    if json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(())
}

fn run_most_command(store: &WordStore, json: bool) -> Result<()> {
    if json {
        print_json(&most_anagrams(store))?;
    } else {
        print_largest_group(largest_group(store).as_ref());
    }
    Ok(())
}

fn run_groups_command(store: &WordStore, min: i64, json: bool) -> Result<()> {
    let groups = groups_of_size(store, min);
    if json {
        print_json(&groups)?;
    } else {
        print_groups(&groups, min);
    }
    Ok(())
}

fn run_import_command(store: &WordStore, path: PathBuf, append: bool, json: bool) -> Result<()> {
    let source = FileSource::new(path);
    let show_progress = !json && std::io::stderr().is_terminal();
    let summary = run_import(store, &source, !append, show_progress)
        .with_context(|| format!("Failed to import {}", source.describe()))?;

    if json {
        print_json(&summary)?;
    } else {
        print_import_summary(&summary);
        println!(
            "\n   Dictionary would hold {} words (not saved)",
            store.len()
        );
    }
    Ok(())
}

fn run_benchmark_command(store: &WordStore, count: usize, json: bool) -> Result<()> {
    let targets = sample_words(store, count);
    if !json {
        println!("Running benchmark on {} random words...", targets.len());
    }

    let result = run_benchmark(store, &targets, &AnagramQuery::new());
    if json {
        print_json(&result)?;
    } else {
        print_benchmark_result(&result);
    }
    Ok(())
}
