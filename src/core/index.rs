//! Letter-frequency word index
//!
//! A `WordIndex` holds three derived maps over one word list, all populated
//! in a single ingestion pass, and answers subset (contains) and exact
//! (anagram) letter queries without scanning the whole dictionary.

use super::frequency::LetterCounts;
use rustc_hash::{FxHashMap, FxHashSet};

/// Options for [`WordIndex::find_containing`]
///
/// `min_length`/`max_length` are inclusive bounds on candidate word length
/// (in chars). `min_length` is implicitly raised to the query length, since
/// a word can never be shorter than the letters it must contain. In exact
/// mode both bounds collapse to the query length.
#[derive(Debug, Clone, Copy)]
pub struct QueryOptions {
    pub exact: bool,
    pub min_length: usize,
    pub max_length: Option<usize>,
}

impl QueryOptions {
    /// Subset matching, no length bounds
    pub const CONTAINS: Self = Self {
        exact: false,
        min_length: 0,
        max_length: None,
    };

    /// Exact anagram matching
    pub const EXACT: Self = Self {
        exact: true,
        min_length: 0,
        max_length: None,
    };

    /// Restrict candidates to at least `n` chars
    #[must_use]
    pub const fn with_min_length(mut self, n: usize) -> Self {
        self.min_length = n;
        self
    }

    /// Restrict candidates to at most `n` chars
    #[must_use]
    pub const fn with_max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self::CONTAINS
    }
}

/// Per-language letter-frequency index over a word list
///
/// Built once from a raw word list; read-only afterwards. The same word
/// list feeds three structures:
///
/// - `by_word`: word → its cached [`LetterCounts`]
/// - `by_length`: word length → words of exactly that length
/// - `by_letter`: character → words containing it at least once
///
/// Input is expected to be lowercase already (case-folding is the loader's
/// concern); the index treats every character literally.
pub struct WordIndex {
    by_word: FxHashMap<String, LetterCounts>,
    by_length: FxHashMap<usize, FxHashSet<String>>,
    by_letter: FxHashMap<char, FxHashSet<String>>,
    max_length: usize,
}

impl WordIndex {
    /// Build an index from raw word-list lines
    ///
    /// Each line is trimmed; empty lines are discarded. Duplicate words
    /// waste a little work but do not break any invariant. The whole build
    /// is one linear pass over the input, O(total chars).
    ///
    /// An empty input yields an empty index with `max_length() == 0`,
    /// which is a valid state, not an error.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::WordIndex;
    ///
    /// let index = WordIndex::build(["cat", "act", "tac", "cats"]);
    /// assert_eq!(index.word_count(), 4);
    /// assert_eq!(index.max_length(), 4);
    /// ```
    pub fn build<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_word: FxHashMap<String, LetterCounts> = FxHashMap::default();
        let mut by_length: FxHashMap<usize, FxHashSet<String>> = FxHashMap::default();
        let mut by_letter: FxHashMap<char, FxHashSet<String>> = FxHashMap::default();

        for line in lines {
            let word = line.as_ref().trim();
            if word.is_empty() {
                continue;
            }

            let counts = LetterCounts::of(word);

            by_length
                .entry(counts.total())
                .or_default()
                .insert(word.to_string());

            for ch in counts.chars() {
                by_letter.entry(ch).or_default().insert(word.to_string());
            }

            by_word.insert(word.to_string(), counts);
        }

        // Derived once after ingestion; the list is static afterwards.
        let max_length = by_length.keys().max().copied().unwrap_or(0);

        Self {
            by_word,
            by_length,
            by_letter,
            max_length,
        }
    }

    /// Number of distinct words indexed
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.by_word.len()
    }

    /// Length of the longest indexed word in chars (0 for an empty index)
    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// True if no words were indexed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_word.is_empty()
    }

    /// The distinct characters appearing anywhere in the dictionary
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.by_letter.keys().copied()
    }

    /// Find all words formable from (or exactly matching) `letters`
    ///
    /// Non-exact: a word matches when it contains every query letter at
    /// least as often as given; extra letters are allowed, subject to the
    /// length bounds in `options`. Exact: a word matches when its letter
    /// counts equal the query's exactly.
    ///
    /// The result has set semantics (each word once) and no defined order.
    /// Zero matches is a normal outcome. `letters` must already be
    /// lowercase; the index performs no case normalization.
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::{QueryOptions, WordIndex};
    ///
    /// let index = WordIndex::build(["cat", "act", "tac", "cats"]);
    ///
    /// let all = index.find_containing("cat", QueryOptions::CONTAINS);
    /// assert_eq!(all.len(), 4); // "cats" contains c, a, t too
    ///
    /// let exact = index.find_containing("cat", QueryOptions::EXACT);
    /// assert_eq!(exact.len(), 3); // anagrams only
    /// ```
    #[must_use]
    pub fn find_containing(&self, letters: &str, options: QueryOptions) -> FxHashSet<&str> {
        let required = LetterCounts::of(letters);
        let (min, max) = Self::effective_bounds(&required, options);

        if options.exact {
            // Anagrams all share the query's length: address that bucket.
            return match self.by_length.get(&required.total()) {
                Some(bucket) => self.filter_candidates(bucket.iter(), &required, min, max, true),
                None => FxHashSet::default(),
            };
        }

        if required.is_empty() {
            // Vacuous predicate: only the length bounds apply.
            return self.filter_candidates(self.by_word.keys(), &required, min, max, false);
        }

        // Narrow to the smallest by_letter bucket among the query letters.
        // A query letter absent from the dictionary means no word can match.
        let mut smallest: Option<&FxHashSet<String>> = None;
        for ch in required.chars() {
            match self.by_letter.get(&ch) {
                Some(bucket) => {
                    if smallest.is_none_or(|s| bucket.len() < s.len()) {
                        smallest = Some(bucket);
                    }
                }
                None => return FxHashSet::default(),
            }
        }

        match smallest {
            Some(bucket) => self.filter_candidates(bucket.iter(), &required, min, max, false),
            None => FxHashSet::default(),
        }
    }

    /// Find all exact anagrams of `letters`
    ///
    /// Delegates to [`Self::find_containing`] with exact matching; the
    /// length bounds collapse to the query length.
    #[must_use]
    pub fn find_anagrams(&self, letters: &str) -> FxHashSet<&str> {
        self.find_containing(letters, QueryOptions::EXACT)
    }

    /// Full-scan reference implementation of [`Self::find_containing`]
    ///
    /// Applies the same predicate to every indexed word without candidate
    /// narrowing. Kept public so the `bench` command can cross-check the
    /// indexed paths against it; unit tests do the same.
    #[must_use]
    pub fn scan_containing(&self, letters: &str, options: QueryOptions) -> FxHashSet<&str> {
        let required = LetterCounts::of(letters);
        let (min, max) = Self::effective_bounds(&required, options);
        self.filter_candidates(self.by_word.keys(), &required, min, max, options.exact)
    }

    /// Resolve the effective inclusive length bounds for a query
    fn effective_bounds(required: &LetterCounts, options: QueryOptions) -> (usize, usize) {
        if options.exact {
            let len = required.total();
            (len, len)
        } else {
            let min = options.min_length.max(required.total());
            let max = options.max_length.unwrap_or(usize::MAX);
            (min, max)
        }
    }

    /// Apply the per-candidate predicate over an iterator of words
    fn filter_candidates<'a>(
        &'a self,
        candidates: impl Iterator<Item = &'a String>,
        required: &LetterCounts,
        min: usize,
        max: usize,
        exact: bool,
    ) -> FxHashSet<&'a str> {
        candidates
            .filter(|word| {
                self.by_word.get(*word).is_some_and(|counts| {
                    let len = counts.total();
                    len >= min
                        && len <= max
                        && if exact {
                            counts == required
                        } else {
                            counts.covers(required)
                        }
                })
            })
            .map(String::as_str)
            .collect()
    }
}
