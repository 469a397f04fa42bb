//! Display functions for command results

use std::collections::BTreeMap;

use colored::Colorize;
use serde::Serialize;

use super::formatters::{create_progress_bar, describe_query, join_words};
use crate::commands::{AnagramLookup, BenchmarkResult, DictionaryReport, ImportSummary};
use crate::stats::AnagramGroup;

/// Print any serializable result as pretty JSON
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print the anagrams of a word
pub fn print_lookup(lookup: &AnagramLookup) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Anagrams of {} {}",
        lookup.word.bright_yellow().bold(),
        format!("[{}]", lookup.anagram_key).bright_black()
    );
    println!("{}", "─".repeat(60).cyan());
    println!("Options: {}", describe_query(&lookup.query));

    if lookup.matches.is_empty() {
        println!("\n{}", "No anagrams stored.".yellow());
        return;
    }

    println!();
    for record in &lookup.matches {
        let text = if record.word() == lookup.word {
            record.word().bright_green().bold()
        } else if record.is_proper_noun() {
            record.word().bright_magenta()
        } else {
            record.word().normal()
        };
        println!("  • {text}");
    }
    println!(
        "\n{}",
        format!("{} match(es)", lookup.matches.len()).green().bold()
    );
}

/// Print the dictionary statistics report
pub fn print_report(report: &DictionaryReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let meta = &report.meta;
    println!("\n📊 {}", "Word lengths:".bright_cyan().bold());
    println!(
        "   Words:            {}",
        meta.word_count.to_string().bright_yellow().bold()
    );
    println!("   Shortest:         {}", meta.minimum_word_length);
    println!("   Longest:          {}", meta.maximum_word_length);
    println!("   Median:           {}", meta.median_word_length);
    println!("   Average:          {:.2}", meta.average_word_length);

    println!("\n🔤 {}", "Anagram groups:".bright_cyan().bold());
    println!("   Distinct keys:    {}", report.group_count);
    println!("   With anagrams:    {}", report.anagram_group_count());

    let max_count = report
        .size_distribution
        .values()
        .copied()
        .max()
        .unwrap_or(1);
    for (size, count) in &report.size_distribution {
        let bar = create_progress_bar(*count as f64, max_count as f64, 30);
        println!("   {size:>3}: {} {count:5}", bar.green());
    }

    print_largest_group(report.largest_group.as_ref());
}

/// Print the largest anagram group
pub fn print_largest_group(group: Option<&AnagramGroup>) {
    println!("\n🏆 {}", "Most anagrams:".bright_cyan().bold());
    match group {
        Some(group) => {
            println!(
                "   {} {}",
                format!("[{}]", group.anagram_key).bright_black(),
                format!("{} words", group.len()).bright_yellow().bold()
            );
            println!("   {}", join_words(&group.words, 20));
        }
        None => println!("   {}", "Dictionary is empty.".yellow()),
    }
}

/// Print every anagram key meeting a minimum group size
pub fn print_groups(groups: &BTreeMap<String, usize>, minimum_size: i64) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANAGRAM GROUPS OF SIZE ≥".bright_cyan().bold(),
        minimum_size.max(0).to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if groups.is_empty() {
        println!("\n{}", "No groups match.".yellow());
        return;
    }

    let max_size = groups.values().copied().max().unwrap_or(1);
    println!();
    for (key, size) in groups {
        let bar = create_progress_bar(*size as f64, max_size as f64, 20);
        println!("  {key:<32} {} {size:3}", bar.green());
    }
    println!("\n{} group(s)", groups.len());
}

/// Print the outcome of an import
pub fn print_import_summary(summary: &ImportSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "IMPORT:".bright_cyan().bold(),
        summary.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if summary.purged {
        println!("\n   Existing words were purged first");
    }
    println!("\n   Lines read:       {}", summary.total);
    println!(
        "   Accepted:         {}",
        summary.accepted.to_string().green().bold()
    );

    if summary.rejected.is_empty() {
        return;
    }

    println!(
        "   Rejected:         {}",
        summary.rejected.len().to_string().red().bold()
    );
    println!();
    for rejection in summary.rejected.iter().take(20) {
        println!("   {} {}", "✗".red(), rejection);
    }
    if summary.rejected.len() > 20 {
        println!("   … and {} more", summary.rejected.len() - 20);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Lookups:          {}", result.lookups);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_group_size)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Smallest group:   {}",
        format!("{}", result.min_group_size).green()
    );
    println!(
        "   Largest group:    {}",
        format!("{}", result.max_group_size).yellow()
    );
    println!("   Time taken:       {:.4}s", result.duration.as_secs_f64());
    println!("   Lookups/second:   {:.1}", result.lookups_per_second);

    if result.lookups == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (size, &count) in &result.distribution {
        let pct = (count as f64 / result.lookups as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {size:>3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
