//! Benchmark command
//!
//! Runs randomized letter queries through the indexed lookup paths and the
//! full-scan baseline, verifies both produce identical results, and times
//! them. The narrowing strategies are optimizations, not semantics, so any
//! mismatch counts as a failure.

use crate::core::{QueryOptions, WordIndex};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchResult {
    pub queries: usize,
    pub total_matches: usize,
    pub mismatches: usize,
    pub indexed_duration: Duration,
    pub scan_duration: Duration,
}

impl BenchResult {
    /// How much faster the indexed paths were than the full scan
    #[must_use]
    pub fn speedup(&self) -> f64 {
        let indexed = self.indexed_duration.as_secs_f64();
        if indexed > 0.0 {
            self.scan_duration.as_secs_f64() / indexed
        } else {
            1.0
        }
    }
}

/// Run `count` random queries against both lookup paths
///
/// Queries draw letters from the dictionary's own alphabet, alternate
/// between subset and exact mode, and vary in length. Every query is
/// answered twice, via [`WordIndex::find_containing`] and
/// [`WordIndex::scan_containing`], and the result sets are compared.
pub fn run_bench(index: &WordIndex, count: usize, show_progress: bool) -> BenchResult {
    let mut alphabet: Vec<char> = index.alphabet().collect();
    alphabet.sort_unstable();

    let mut rng = rand::rng();
    let queries: Vec<(String, QueryOptions)> = (0..count)
        .map(|i| {
            let len = rng.random_range(2..=7);
            let letters: String = (0..len)
                .filter_map(|_| alphabet.choose(&mut rng))
                .collect();
            let options = if i % 2 == 0 {
                QueryOptions::CONTAINS
            } else {
                QueryOptions::EXACT
            };
            (letters, options)
        })
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(queries.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut total_matches = 0;
    let mut mismatches = 0;
    let mut indexed_duration = Duration::ZERO;
    let mut scan_duration = Duration::ZERO;

    for (letters, options) in &queries {
        let start = Instant::now();
        let indexed = index.find_containing(letters, *options);
        indexed_duration += start.elapsed();

        let start = Instant::now();
        let scanned = index.scan_containing(letters, *options);
        scan_duration += start.elapsed();

        total_matches += indexed.len();
        if indexed != scanned {
            mismatches += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    BenchResult {
        queries: queries.len(),
        total_matches,
        mismatches,
        indexed_duration,
        scan_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index() -> WordIndex {
        WordIndex::build([
            "cat", "act", "tac", "cats", "cast", "taste", "state", "banana", "listen", "silent",
            "enlist", "speed", "straße", "äpfel",
        ])
    }

    #[test]
    fn bench_runs_the_requested_query_count() {
        let index = test_index();
        let result = run_bench(&index, 50, false);
        assert_eq!(result.queries, 50);
    }

    #[test]
    fn indexed_and_scan_paths_never_disagree() {
        let index = test_index();
        let result = run_bench(&index, 200, false);
        assert_eq!(result.mismatches, 0);
    }

    #[test]
    fn bench_on_empty_index_finds_nothing() {
        let index = WordIndex::build(Vec::<String>::new());
        let result = run_bench(&index, 10, false);
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.mismatches, 0);
    }

    #[test]
    fn speedup_is_finite_and_positive() {
        let index = test_index();
        let result = run_bench(&index, 20, false);
        assert!(result.speedup() > 0.0);
        assert!(result.speedup().is_finite());
    }
}
