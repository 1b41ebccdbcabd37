//! Per-language index registry
//!
//! Owns one [`WordIndex`] per supported [`Language`] with an explicit
//! initialization lifecycle: built once at startup from a word-list loader,
//! read-only afterwards. Queries never mutate shared state, so after
//! initialization readers proceed without coordination beyond cloning an
//! `Arc` out of the map.

use crate::core::WordIndex;
use crate::wordlists::{Language, WordListLoader};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::io;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Error type for registry operations
#[derive(Debug)]
pub enum RegistryError {
    /// No index has been built for the language (initialization never ran,
    /// or its load failed and was not retried)
    NotFound(Language),
    /// The word-list resource for a language could not be read
    Load {
        language: Language,
        source: io::Error,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(language) => {
                write!(f, "no index built for language '{language}'")
            }
            Self::Load { language, source } => {
                write!(f, "failed to load word list for language '{language}': {source}")
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Load { source, .. } => Some(source),
        }
    }
}

/// Registry of per-language word indexes
///
/// Initialization is guarded so that at most one build is in flight at a
/// time: a caller racing an in-flight build waits on the guard, re-checks,
/// and does not re-trigger a redundant load. A failed load leaves that
/// language absent (queries answer [`RegistryError::NotFound`]) and
/// eligible for a retried initialization; languages that loaded fine are
/// kept.
pub struct IndexRegistry {
    indexes: RwLock<FxHashMap<Language, Arc<WordIndex>>>,
    init_guard: Mutex<()>,
}

impl IndexRegistry {
    /// Create an empty registry; no queries succeed until initialization
    #[must_use]
    pub fn new() -> Self {
        Self {
            indexes: RwLock::new(FxHashMap::default()),
            init_guard: Mutex::new(()),
        }
    }

    /// Load and index every supported language, replacing any prior state
    ///
    /// Repeated calls rebuild and replace; they never duplicate entries.
    /// Per-language builds run in parallel. On failure the first error is
    /// returned, languages that built successfully are still stored, and
    /// the failed ones stay absent.
    ///
    /// # Errors
    /// [`RegistryError::Load`] if any language's word list could not be
    /// read.
    pub fn initialize<L>(&self, loader: &L) -> Result<(), RegistryError>
    where
        L: WordListLoader + Sync,
    {
        let guard = self.init_guard.lock().unwrap_or_else(PoisonError::into_inner);
        self.build_languages(loader, &Language::ALL)?;
        drop(guard);
        Ok(())
    }

    /// Initialize only if some language is still missing
    ///
    /// The double-checked guard makes this safe to call from every request
    /// path: concurrent callers trigger exactly one load per language, and
    /// after a failed load the next call retries just the missing
    /// languages.
    ///
    /// # Errors
    /// [`RegistryError::Load`] if a missing language's word list could not
    /// be read.
    pub fn ensure_initialized<L>(&self, loader: &L) -> Result<(), RegistryError>
    where
        L: WordListLoader + Sync,
    {
        if self.missing_languages().is_empty() {
            return Ok(());
        }

        let guard = self.init_guard.lock().unwrap_or_else(PoisonError::into_inner);
        // Re-check: another caller may have finished the build while we
        // waited on the guard.
        let missing = self.missing_languages();
        if !missing.is_empty() {
            self.build_languages(loader, &missing)?;
        }
        drop(guard);
        Ok(())
    }

    /// Get the index for a language
    ///
    /// The returned `Arc` keeps the index alive independently of the
    /// registry lock, so queries run without blocking other readers.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] if no index has been built for
    /// `language`.
    pub fn get(&self, language: Language) -> Result<Arc<WordIndex>, RegistryError> {
        self.indexes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&language)
            .cloned()
            .ok_or(RegistryError::NotFound(language))
    }

    /// Longest word length for a language
    ///
    /// An initialized-but-empty dictionary answers `Ok(0)`; only a truly
    /// absent index is an error.
    ///
    /// # Errors
    /// [`RegistryError::NotFound`] if no index has been built for
    /// `language`.
    pub fn max_length(&self, language: Language) -> Result<usize, RegistryError> {
        Ok(self.get(language)?.max_length())
    }

    /// True once every supported language has a built index
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.missing_languages().is_empty()
    }

    fn missing_languages(&self) -> Vec<Language> {
        let indexes = self.indexes.read().unwrap_or_else(PoisonError::into_inner);
        Language::ALL
            .into_iter()
            .filter(|language| !indexes.contains_key(language))
            .collect()
    }

    /// Build the given languages and store the successful ones
    fn build_languages<L>(&self, loader: &L, languages: &[Language]) -> Result<(), RegistryError>
    where
        L: WordListLoader + Sync,
    {
        let built: Vec<Result<(Language, WordIndex), RegistryError>> = languages
            .par_iter()
            .map(|&language| {
                let lines = loader.load(language).map_err(|source| RegistryError::Load {
                    language,
                    source,
                })?;
                Ok((language, WordIndex::build(lines)))
            })
            .collect();

        let mut first_error = None;
        {
            let mut indexes = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
            for result in built {
                match result {
                    Ok((language, index)) => {
                        indexes.insert(language, Arc::new(index));
                    }
                    Err(error) => {
                        if first_error.is_none() {
                            first_error = Some(error);
                        }
                    }
                }
            }
        }

        match first_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for IndexRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::QueryOptions;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Serves fixed small lists; counts loads per call
    struct StubLoader {
        loads: AtomicUsize,
    }

    impl StubLoader {
        fn new() -> Self {
            Self {
                loads: AtomicUsize::new(0),
            }
        }

        fn load_count(&self) -> usize {
            self.loads.load(Ordering::SeqCst)
        }
    }

    impl WordListLoader for StubLoader {
        fn load(&self, language: Language) -> io::Result<Vec<String>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            let words: &[&str] = match language {
                Language::English => &["cat", "act", "tac", "cats"],
                Language::German => &["haus", "maus", "baum"],
            };
            Ok(words.iter().map(ToString::to_string).collect())
        }
    }

    /// Fails for every language, or only for German
    struct FailingLoader {
        german_only: bool,
    }

    impl WordListLoader for FailingLoader {
        fn load(&self, language: Language) -> io::Result<Vec<String>> {
            if self.german_only && language == Language::English {
                return Ok(vec!["cat".to_string()]);
            }
            Err(io::Error::new(io::ErrorKind::NotFound, "word list missing"))
        }
    }

    #[test]
    fn uninitialized_registry_answers_not_found() {
        let registry = IndexRegistry::new();
        assert!(matches!(
            registry.get(Language::English),
            Err(RegistryError::NotFound(Language::English))
        ));
        assert!(matches!(
            registry.max_length(Language::German),
            Err(RegistryError::NotFound(Language::German))
        ));
    }

    #[test]
    fn initialize_builds_every_language() {
        let registry = IndexRegistry::new();
        registry.initialize(&StubLoader::new()).unwrap();

        assert!(registry.is_initialized());
        assert_eq!(registry.get(Language::English).unwrap().word_count(), 4);
        assert_eq!(registry.get(Language::German).unwrap().word_count(), 3);
        assert_eq!(registry.max_length(Language::English).unwrap(), 4);
        assert_eq!(registry.max_length(Language::German).unwrap(), 4);
    }

    #[test]
    fn initialize_twice_answers_identically() {
        let registry = IndexRegistry::new();
        let loader = StubLoader::new();

        registry.initialize(&loader).unwrap();
        let first: Vec<String> = {
            let index = registry.get(Language::English).unwrap();
            let mut words: Vec<String> = index
                .find_containing("cat", QueryOptions::CONTAINS)
                .into_iter()
                .map(ToString::to_string)
                .collect();
            words.sort_unstable();
            words
        };

        registry.initialize(&loader).unwrap();
        let index = registry.get(Language::English).unwrap();
        let mut second: Vec<String> = index
            .find_containing("cat", QueryOptions::CONTAINS)
            .into_iter()
            .map(ToString::to_string)
            .collect();
        second.sort_unstable();

        assert_eq!(first, second);
        assert_eq!(index.word_count(), 4);
    }

    #[test]
    fn ensure_initialized_skips_redundant_loads() {
        let registry = IndexRegistry::new();
        let loader = StubLoader::new();

        registry.ensure_initialized(&loader).unwrap();
        registry.ensure_initialized(&loader).unwrap();
        registry.ensure_initialized(&loader).unwrap();

        // One load per language, ever.
        assert_eq!(loader.load_count(), Language::ALL.len());
    }

    #[test]
    fn concurrent_callers_trigger_one_load_per_language() {
        let registry = IndexRegistry::new();
        let loader = StubLoader::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| registry.ensure_initialized(&loader).unwrap());
            }
        });

        assert!(registry.is_initialized());
        assert_eq!(loader.load_count(), Language::ALL.len());
    }

    #[test]
    fn failed_load_surfaces_and_stays_retryable() {
        let registry = IndexRegistry::new();

        let err = registry
            .initialize(&FailingLoader { german_only: false })
            .unwrap_err();
        assert!(matches!(err, RegistryError::Load { .. }));
        assert!(!registry.is_initialized());
        assert!(registry.get(Language::English).is_err());

        // Retry with a working loader succeeds.
        registry.ensure_initialized(&StubLoader::new()).unwrap();
        assert!(registry.is_initialized());
    }

    #[test]
    fn partial_failure_keeps_the_built_language() {
        let registry = IndexRegistry::new();

        let err = registry
            .initialize(&FailingLoader { german_only: true })
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Load {
                language: Language::German,
                ..
            }
        ));

        // English built fine and serves queries; German stays absent.
        assert_eq!(registry.get(Language::English).unwrap().word_count(), 1);
        assert!(matches!(
            registry.get(Language::German),
            Err(RegistryError::NotFound(Language::German))
        ));

        // A later ensure_initialized only needs to fill in German.
        let loader = StubLoader::new();
        registry.ensure_initialized(&loader).unwrap();
        assert_eq!(loader.load_count(), 1);
        assert_eq!(registry.get(Language::German).unwrap().word_count(), 3);
    }

    #[test]
    fn empty_dictionary_reports_zero_max_length() {
        struct EmptyLoader;
        impl WordListLoader for EmptyLoader {
            fn load(&self, _language: Language) -> io::Result<Vec<String>> {
                Ok(Vec::new())
            }
        }

        let registry = IndexRegistry::new();
        registry.initialize(&EmptyLoader).unwrap();
        // Empty-but-initialized is distinguishable from missing.
        assert_eq!(registry.max_length(Language::English).unwrap(), 0);
    }

    #[test]
    fn embedded_lists_serve_real_queries() {
        let registry = IndexRegistry::new();
        registry
            .initialize(&crate::wordlists::EmbeddedLoader)
            .unwrap();

        let english = registry.get(Language::English).unwrap();
        let anagrams = english.find_anagrams("cat");
        assert!(anagrams.contains("cat"));
        assert!(anagrams.contains("act"));
        assert!(anagrams.contains("tac"));

        let german = registry.get(Language::German).unwrap();
        let anagrams = german.find_anagrams("tor");
        assert!(anagrams.contains("tor"));
        assert!(anagrams.contains("rot"));

        assert!(registry.max_length(Language::English).unwrap() >= 6);
        assert!(registry.max_length(Language::German).unwrap() >= 6);
    }

    #[test]
    fn error_display_names_the_language() {
        let not_found = RegistryError::NotFound(Language::German);
        assert_eq!(format!("{not_found}"), "no index built for language 'de'");

        let load = RegistryError::Load {
            language: Language::English,
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(format!("{load}").contains("'en'"));
    }
}
