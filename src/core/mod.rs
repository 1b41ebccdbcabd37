//! Core domain types for word lookup
//!
//! This module contains the fundamental index structures with no lifecycle
//! concerns. All types here are pure, testable, and have clear set-theoretic
//! properties.

mod frequency;
mod index;

pub use frequency::LetterCounts;
pub use index::{QueryOptions, WordIndex};
