//! Letter lookup commands
//!
//! The find (subset) and unscramble (anagram) operations against the
//! registry, plus the input normalization the index itself refuses to do.

use crate::core::QueryOptions;
use crate::registry::{IndexRegistry, RegistryError};
use crate::wordlists::Language;

/// Result of a letter lookup, ready for display
pub struct FindResult {
    pub language: Language,
    pub letters: String,
    pub exact: bool,
    pub words: Vec<String>,
}

/// Normalize a raw letters argument
///
/// Callers may pass letters comma-separated (`c,a,t`) or as a plain string;
/// commas and whitespace are stripped and the rest is lowercased. The index
/// performs no normalization of its own, so this must happen before every
/// query.
///
/// # Examples
/// ```
/// use word_finder::commands::normalize_letters;
///
/// assert_eq!(normalize_letters("C,A,T"), "cat");
/// assert_eq!(normalize_letters("  Straße "), "straße");
/// ```
#[must_use]
pub fn normalize_letters(raw: &str) -> String {
    raw.chars()
        .filter(|ch| *ch != ',' && !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find all words formable from `raw_letters` in the given language
///
/// Results are sorted by length, then alphabetically, for stable display;
/// the underlying index guarantees only set semantics.
///
/// # Errors
/// [`RegistryError::NotFound`] if the language has no built index.
pub fn run_find(
    registry: &IndexRegistry,
    language: Language,
    raw_letters: &str,
    options: QueryOptions,
) -> Result<FindResult, RegistryError> {
    let letters = normalize_letters(raw_letters);
    let index = registry.get(language)?;

    let mut words: Vec<String> = index
        .find_containing(&letters, options)
        .into_iter()
        .map(ToString::to_string)
        .collect();
    sort_for_display(&mut words);

    Ok(FindResult {
        language,
        letters,
        exact: options.exact,
        words,
    })
}

/// Find all exact anagrams of `raw_letters` in the given language
///
/// # Errors
/// [`RegistryError::NotFound`] if the language has no built index.
pub fn run_unscramble(
    registry: &IndexRegistry,
    language: Language,
    raw_letters: &str,
) -> Result<FindResult, RegistryError> {
    run_find(registry, language, raw_letters, QueryOptions::EXACT)
}

/// Sort by char length, then alphabetically
fn sort_for_display(words: &mut [String]) {
    words.sort_unstable_by(|a, b| {
        a.chars()
            .count()
            .cmp(&b.chars().count())
            .then_with(|| a.cmp(b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordListLoader;
    use std::io;

    struct TestLoader;

    impl WordListLoader for TestLoader {
        fn load(&self, language: Language) -> io::Result<Vec<String>> {
            let words: &[&str] = match language {
                Language::English => &["cat", "act", "tac", "cats", "cast"],
                Language::German => &["tor", "rot", "ort", "wort"],
            };
            Ok(words.iter().map(ToString::to_string).collect())
        }
    }

    fn registry() -> IndexRegistry {
        let registry = IndexRegistry::new();
        registry.initialize(&TestLoader).unwrap();
        registry
    }

    #[test]
    fn normalize_strips_commas_and_case() {
        assert_eq!(normalize_letters("c,a,t"), "cat");
        assert_eq!(normalize_letters("C, A, T"), "cat");
        assert_eq!(normalize_letters("CAT"), "cat");
    }

    #[test]
    fn find_returns_sorted_supersets() {
        let result = run_find(
            &registry(),
            Language::English,
            "cat",
            QueryOptions::CONTAINS,
        )
        .unwrap();
        assert_eq!(result.words, ["act", "cat", "tac", "cast", "cats"]);
        assert!(!result.exact);
    }

    #[test]
    fn unscramble_returns_anagrams_only() {
        let result = run_unscramble(&registry(), Language::English, "t,a,c").unwrap();
        assert_eq!(result.words, ["act", "cat", "tac"]);
        assert!(result.exact);
        assert_eq!(result.letters, "tac");
    }

    #[test]
    fn german_words_resolve_independently() {
        let result = run_unscramble(&registry(), Language::German, "ort").unwrap();
        assert_eq!(result.words, ["ort", "rot", "tor"]);
    }

    #[test]
    fn no_match_is_an_empty_result_not_an_error() {
        let result = run_unscramble(&registry(), Language::English, "zzzzqqqq").unwrap();
        assert!(result.words.is_empty());
    }

    #[test]
    fn missing_index_is_not_found() {
        let empty = IndexRegistry::new();
        assert!(matches!(
            run_find(&empty, Language::English, "cat", QueryOptions::CONTAINS),
            Err(RegistryError::NotFound(Language::English))
        ));
    }
}
