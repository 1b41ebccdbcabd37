//! Word Finder - CLI
//!
//! Thin caller around the per-language letter-frequency index: find words
//! formable from letters, unscramble exact anagrams, report the longest
//! word length.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_finder::{
    commands::{run_bench, run_find, run_interactive, run_unscramble},
    core::QueryOptions,
    output::{print_bench_result, print_find_result, print_max_length},
    registry::IndexRegistry,
    wordlists::{EmbeddedLoader, FileLoader, Language},
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find words formable from a set of letters, per language",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language dictionary: en (default) or de
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    /// Directory with <language>.txt word lists (default: embedded lists)
    #[arg(short = 'w', long, global = true)]
    wordlist_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all words formable from the letters (subset matching)
    Find {
        /// The letters, plain or comma-separated (cat or c,a,t)
        letters: String,

        /// Require an exact anagram instead of subset matching
        #[arg(short, long)]
        exact: bool,

        /// Only include words of at least this length
        #[arg(long)]
        min_length: Option<usize>,

        /// Only include words of at most this length
        #[arg(long)]
        max_length: Option<usize>,
    },

    /// Find exact anagrams of the letters
    Unscramble {
        /// The letters, plain or comma-separated
        letters: String,
    },

    /// Print the longest word length in the dictionary
    MaxLength,

    /// Interactive lookup session (default)
    Interactive,

    /// Cross-check indexed lookups against a full scan and time both
    Bench {
        /// Number of random queries to run
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let language: Language = cli
        .lang
        .parse()
        .map_err(|message: String| anyhow::anyhow!(message))?;

    let registry = IndexRegistry::new();
    match &cli.wordlist_dir {
        Some(dir) => registry
            .initialize(&FileLoader::new(dir))
            .with_context(|| format!("loading word lists from {}", dir.display()))?,
        None => registry.initialize(&EmbeddedLoader)?,
    }

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    match command {
        Commands::Find {
            letters,
            exact,
            min_length,
            max_length,
        } => {
            let options = QueryOptions {
                exact,
                min_length: min_length.unwrap_or(0),
                max_length,
            };
            let result = run_find(&registry, language, &letters, options)?;
            print_find_result(&result);
            Ok(())
        }
        Commands::Unscramble { letters } => {
            let result = run_unscramble(&registry, language, &letters)?;
            print_find_result(&result);
            Ok(())
        }
        Commands::MaxLength => {
            print_max_length(language, registry.max_length(language)?);
            Ok(())
        }
        Commands::Interactive => {
            run_interactive(&registry, language).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Bench { count } => {
            let index = registry.get(language)?;
            let result = run_bench(&index, count, true);
            print_bench_result(&result);
            Ok(())
        }
    }
}
