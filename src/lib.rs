//! Word Finder
//!
//! A letter-frequency dictionary index answering two query types per
//! language: which words can be formed from a set of letters (each letter
//! usable up to its multiplicity), and which words are an exact anagram of
//! those letters.
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::core::{QueryOptions, WordIndex};
//!
//! let index = WordIndex::build(["cat", "act", "tac", "cats"]);
//!
//! // Subset query: longer words may use the letters too
//! let formable = index.find_containing("cat", QueryOptions::CONTAINS);
//! assert_eq!(formable.len(), 4);
//!
//! // Exact query: anagrams only
//! let anagrams = index.find_anagrams("cat");
//! assert_eq!(anagrams.len(), 3);
//! ```

// Core index structures
pub mod core;

// Per-language registry and lifecycle
pub mod registry;

// Word lists, languages, loaders
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
