//! Display functions for command results

use super::formatters::{create_progress_bar, word_columns};
use crate::commands::{BenchResult, FindResult};
use crate::wordlists::Language;
use colored::Colorize;

const LINE_WIDTH: usize = 60;

/// Print the result of a find or unscramble lookup
pub fn print_find_result(result: &FindResult) {
    let mode = if result.exact { "anagrams of" } else { "words from" };

    println!("\n{}", "─".repeat(LINE_WIDTH).cyan());
    println!(
        "{} {} [{}]",
        mode,
        result.letters.to_uppercase().bright_yellow().bold(),
        result.language.to_string().bright_black()
    );
    println!("{}", "─".repeat(LINE_WIDTH).cyan());

    if result.words.is_empty() {
        println!("\n{}\n", "No matching words.".bright_black());
        return;
    }

    println!("\n{}", word_columns(&result.words, LINE_WIDTH));
    println!(
        "\n{}\n",
        format!(
            "{} {}",
            result.words.len(),
            if result.words.len() == 1 { "word" } else { "words" }
        )
        .green()
        .bold()
    );
}

/// Print the longest word length of a language's dictionary
pub fn print_max_length(language: Language, max_length: usize) {
    println!(
        "Longest {} word: {} letters",
        language.to_string().bright_yellow(),
        max_length.to_string().bright_cyan().bold()
    );
}

/// Print the result of a benchmark run
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(LINE_WIDTH).cyan());
    println!(" {} ", "LOOKUP BENCHMARK".bright_cyan().bold());
    println!("{}", "═".repeat(LINE_WIDTH).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Queries run:      {}", result.queries);
    println!("   Total matches:    {}", result.total_matches);

    let verdict = if result.mismatches == 0 {
        "all queries agree with the full scan".green().bold()
    } else {
        format!("{} queries diverged from the full scan", result.mismatches)
            .red()
            .bold()
    };
    println!("   Cross-check:      {verdict}");

    let indexed = result.indexed_duration.as_secs_f64();
    let scan = result.scan_duration.as_secs_f64();
    let slower = indexed.max(scan).max(f64::MIN_POSITIVE);

    println!("\n⏱  {}", "Timing:".bright_cyan().bold());
    println!(
        "   Indexed:  [{}] {:.2}ms",
        create_progress_bar(indexed, slower, 30).green(),
        indexed * 1000.0
    );
    println!(
        "   Scan:     [{}] {:.2}ms",
        create_progress_bar(scan, slower, 30).yellow(),
        scan * 1000.0
    );
    println!(
        "   Speedup:  {}",
        format!("{:.1}x", result.speedup()).bright_yellow().bold()
    );
}
