//! Word lists and languages
//!
//! Provides the closed set of supported languages, embedded word lists
//! compiled into the binary, and the loader seam the registry builds from.

mod embedded;
pub mod loader;

pub use embedded::{DE_WORDS, DE_WORDS_COUNT, EN_WORDS, EN_WORDS_COUNT};
pub use loader::{EmbeddedLoader, FileLoader, WordListLoader};

use std::fmt;
use std::str::FromStr;

/// A supported dictionary language
///
/// The set is closed: every language the registry can serve is listed in
/// [`Language::ALL`]. Unknown codes are rejected at the caller boundary,
/// never inside the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
}

impl Language {
    /// All supported languages, in registry build order
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// The short code used by callers ("en", "de")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// The word-list file name for this language
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::English => "english.txt",
            Self::German => "german.txt",
        }
    }

    /// Resolve a short code, or `None` for an unsupported one
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::English),
            "de" => Some(Self::German),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported language code '{s}' (expected en or de)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_count_matches_const() {
        assert_eq!(EN_WORDS.len(), EN_WORDS_COUNT);
    }

    #[test]
    fn de_count_matches_const() {
        assert_eq!(DE_WORDS.len(), DE_WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_trimmed_lowercase() {
        for &word in EN_WORDS.iter().chain(DE_WORDS) {
            assert!(!word.is_empty());
            assert_eq!(word, word.trim());
            assert_eq!(word, word.to_lowercase(), "word '{word}' is not lowercase");
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Language::from_code("fr"), None);
        assert!("klingon".parse::<Language>().is_err());
    }
}
