//! # shears
//!
//! Sentence segmentation and character-budget chunking for English and
//! Lithuanian text.
//!
//! ## The Problem
//!
//! Downstream consumers are length-limited: translation aligners want one
//! sentence at a time, and batch processors want pieces under a character
//! budget. Splitting on periods sounds trivial—until the text pushes back:
//!
//! - "Dr. Smith went home." is one sentence, not two
//! - "3.14" and "10." contain dots that end nothing
//! - "2025 m." is a Lithuanian year notation, not a sentence end
//! - "example.com" and "file.pdf" embed dots mid-token
//! - "J. K. Rowling" is a name, not three sentences
//!
//! Distinguishing real boundaries from embedded punctuation is a heuristic
//! disambiguation problem. This crate solves it with a curated exception
//! vocabulary and a protect-then-restore placeholder pass: exception spans
//! are swapped for unique tokens, the text is split on the plain boundary
//! rule, and the tokens are swapped back byte-for-byte.
//!
//! ## Two Splitters, On Purpose
//!
//! | Splitter | Boundary rule | Protection | Use |
//! |----------|---------------|------------|-----|
//! | [`SentenceSegmenter`] | `.!?` + whitespace, or newline | full vocabulary | sentence-level output, alignment |
//! | [`BudgetChunker`]'s splitter | `.!?` + whitespace only | none | greedy packing under a char budget |
//!
//! The budget chunker's splitter is intentionally lighter: packing tolerates
//! an occasional false boundary, and the two rule sets are independent
//! design facts. Unifying them would silently move chunk boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use shears::{chunk_by_budget, segment_sentences};
//!
//! let sentences = segment_sentences("Dr. Smith went home. He left at 3.14 p.m.");
//! assert_eq!(sentences, vec!["Dr. Smith went home.", "He left at 3.14 p.m."]);
//!
//! let chunks = chunk_by_budget("One. Two. Three.", 10).unwrap();
//! assert_eq!(chunks, vec!["One. Two.", "Three."]);
//! ```
//!
//! ## Guarantees
//!
//! - Both components are pure and deterministic: no I/O, no shared mutable
//!   state, linear time in input length.
//! - The exception vocabulary compiles once per process and is shared
//!   read-only across threads; per-call state never leaks between calls.
//! - Every chunk is at most the budget, in characters, strictly.
//! - Segmentation is best-effort heuristics, not grammar: the enumeration
//!   rule famously keeps "I scored 10. Then I left." as one sentence (see
//!   [`ExceptionVocabulary`]).

mod align;
mod budget;
mod error;
mod segmenter;
mod vocabulary;

pub use align::{align, Alignment};
pub use budget::{BudgetChunker, DEFAULT_BUDGET};
pub use error::{Error, Result};
pub use segmenter::SentenceSegmenter;
pub use vocabulary::ExceptionVocabulary;

/// A text splitting strategy.
///
/// Both the segmenter and the budget chunker implement this trait, enabling
/// polymorphic usage:
///
/// ```rust
/// use shears::{BudgetChunker, SentenceSegmenter, Splitter};
///
/// fn split_document(splitter: &dyn Splitter, text: &str) -> Vec<String> {
///     splitter.split(text)
/// }
///
/// let text = "Hello world. This is a test.";
/// let sentences = split_document(&SentenceSegmenter::new(), text);
/// let chunks = split_document(&BudgetChunker::new(100).unwrap(), text);
/// ```
pub trait Splitter: Send + Sync {
    /// Split text into ordered, non-empty pieces.
    fn split(&self, text: &str) -> Vec<String>;

    /// Estimate the number of pieces for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_pieces(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}

/// Split `text` into sentences using the shared default vocabulary.
///
/// Convenience wrapper over [`SentenceSegmenter::segment`].
#[must_use]
pub fn segment_sentences(text: &str) -> Vec<String> {
    SentenceSegmenter::new().segment(text)
}

/// Split `text` into chunks of at most `max_chunk_size` characters.
///
/// Convenience wrapper over [`BudgetChunker::chunk`].
///
/// # Errors
///
/// Returns [`Error::InvalidBudget`] if `max_chunk_size == 0`.
pub fn chunk_by_budget(text: &str, max_chunk_size: usize) -> Result<Vec<String>> {
    Ok(BudgetChunker::new(max_chunk_size)?.chunk(text))
}
