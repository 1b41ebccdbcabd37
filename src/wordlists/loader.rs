//! Word list loading
//!
//! The loader is the registry's collaborator: it produces the raw lines of
//! a language's word list. Case-folding happens here, not in the index —
//! the index receives lists that are already lowercase.

use super::{DE_WORDS, EN_WORDS, Language};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Source of per-language word lists
///
/// Implementations fail with an [`io::Error`] when the backing resource
/// cannot be read; the registry surfaces that to whoever triggered the
/// load and stays retryable.
pub trait WordListLoader {
    /// Produce the word list for `language`, one word per line, lowercase
    fn load(&self, language: Language) -> io::Result<Vec<String>>;
}

/// Split raw word-list text into trimmed, lowercased lines
///
/// Empty lines are kept here and discarded during indexing, matching the
/// line-per-word external contract.
///
/// # Examples
/// ```
/// use word_finder::wordlists::loader::lines_from_str;
///
/// let lines = lines_from_str("Cat\n ACT \ntac\n");
/// assert_eq!(lines, ["cat", "act", "tac"]);
/// ```
#[must_use]
pub fn lines_from_str(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .collect()
}

/// Loads word lists from a directory of `<language>.txt` files
pub struct FileLoader {
    dir: PathBuf,
}

impl FileLoader {
    /// Create a loader reading from `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WordListLoader for FileLoader {
    fn load(&self, language: Language) -> io::Result<Vec<String>> {
        let path = self.dir.join(language.file_name());
        let content = fs::read_to_string(path)?;
        Ok(lines_from_str(&content))
    }
}

/// Serves the word lists compiled into the binary
pub struct EmbeddedLoader;

impl WordListLoader for EmbeddedLoader {
    fn load(&self, language: Language) -> io::Result<Vec<String>> {
        let words = match language {
            Language::English => EN_WORDS,
            Language::German => DE_WORDS,
        };
        Ok(words.iter().map(ToString::to_string).collect())
    }
}
