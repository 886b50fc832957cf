//! Character-budget chunking with sentence-boundary preference.
//!
//! Greedy bin-packing over sentence units: sentences are appended to an
//! accumulator (joined with single spaces) until the next one would push it
//! past the budget, at which point the accumulator is emitted and a new one
//! starts. A sentence that alone exceeds the budget is hard-sliced into
//! consecutive budget-sized pieces.
//!
//! ```text
//! budget = 12
//!
//! "One. Two. Three. Supercalifragilistic."
//!
//! Chunk 0: "One. Two."              <- 9 chars, adding "Three." (+1) overflows
//! Chunk 1: "Three."
//! Chunk 2: "Supercalifra"           <- hard slice, exactly 12 chars
//! Chunk 3: "gilistic."
//! ```
//!
//! ## A Deliberately Simpler Splitter
//!
//! This module splits on `.`/`!`/`?` followed by whitespace only — no
//! newline rule and no abbreviation protection. It is a genuinely different
//! algorithm from [`SentenceSegmenter`](crate::SentenceSegmenter), not a
//! shortcut: packing tolerates the occasional false boundary, and unifying
//! the two would move observable chunk boundaries. Treat any unification as
//! a conscious compatibility break.
//!
//! ## Budget Units
//!
//! The budget counts characters, not bytes. Multi-byte text packs by what a
//! reader (or a length-limited consumer counting characters) sees.

use tracing::trace;

use crate::{Error, Result, Splitter};

/// Default chunk budget, in characters.
pub const DEFAULT_BUDGET: usize = 1500;

/// Greedy character-budget chunker.
///
/// Every emitted chunk is non-empty, trimmed, and at most `max_size`
/// characters long. Chunks appear in source order and, modulo the
/// single-space joins and per-chunk trimming, reproduce the input's
/// non-whitespace content with no loss or duplication.
///
/// ## Example
///
/// ```rust
/// use shears::BudgetChunker;
///
/// let chunker = BudgetChunker::new(10).unwrap();
/// let chunks = chunker.chunk("One. Two. Three.");
///
/// assert_eq!(chunks, vec!["One. Two.", "Three."]);
/// ```
#[derive(Debug, Clone)]
pub struct BudgetChunker {
    max_size: usize,
}

impl BudgetChunker {
    /// Create a chunker with the given character budget.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBudget`] if `max_size == 0`.
    pub fn new(max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(Error::InvalidBudget(max_size));
        }
        Ok(Self { max_size })
    }

    /// Create a chunker with the default 1500-character budget.
    #[must_use]
    pub fn with_default_budget() -> Self {
        Self {
            max_size: DEFAULT_BUDGET,
        }
    }

    /// The configured character budget.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Split `text` into chunks of at most `max_size` characters.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        let mut chunks = Vec::new();
        let mut acc = String::new();
        let mut acc_chars = 0usize;

        for sentence in split_simple(text) {
            let sentence_chars = sentence.chars().count();

            if acc_chars + sentence_chars + 1 > self.max_size {
                if !acc.is_empty() {
                    push_trimmed(&mut chunks, &acc);
                    acc.clear();
                    acc_chars = 0;
                }
                if sentence_chars > self.max_size {
                    // One sentence over budget on its own: hard slices.
                    self.hard_slice(sentence, &mut chunks);
                } else {
                    acc.push_str(sentence);
                    acc_chars = sentence_chars;
                }
            } else if acc.is_empty() {
                acc.push_str(sentence);
                acc_chars = sentence_chars;
            } else {
                acc.push(' ');
                acc.push_str(sentence);
                acc_chars += sentence_chars + 1;
            }
        }

        if !acc.is_empty() {
            push_trimmed(&mut chunks, &acc);
        }

        trace!(chunks = chunks.len(), budget = self.max_size, "packed sentences");
        chunks
    }

    /// Emit consecutive `max_size`-char slices of an oversized sentence.
    /// The last slice may be shorter; empty-after-trim slices are dropped.
    fn hard_slice(&self, sentence: &str, chunks: &mut Vec<String>) {
        let mut slice_start = 0;
        let mut count = 0usize;

        for (i, _) in sentence.char_indices() {
            if count == self.max_size {
                push_trimmed(chunks, &sentence[slice_start..i]);
                slice_start = i;
                count = 0;
            }
            count += 1;
        }
        if slice_start < sentence.len() {
            push_trimmed(chunks, &sentence[slice_start..]);
        }
    }
}

impl Default for BudgetChunker {
    fn default() -> Self {
        Self::with_default_budget()
    }
}

impl Splitter for BudgetChunker {
    fn split(&self, text: &str) -> Vec<String> {
        self.chunk(text)
    }

    fn estimate_pieces(&self, text_len: usize) -> usize {
        (text_len / self.max_size).max(1)
    }
}

/// The light splitter: boundary = `.`/`!`/`?` followed by whitespace.
///
/// Newlines are not boundaries here and nothing is protected; see the module
/// docs for why this intentionally diverges from the full segmenter.
fn split_simple(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if matches!(c, '.' | '!' | '?')
            && iter.peek().is_some_and(|&(_, next)| next.is_whitespace())
        {
            sentences.push(&text[start..i + c.len_utf8()]);
            start = i + c.len_utf8();
            while let Some(&(j, w)) = iter.peek() {
                if !w.is_whitespace() {
                    break;
                }
                start = j + w.len_utf8();
                iter.next();
            }
        }
    }
    sentences.push(&text[start..]);

    sentences
}

fn push_trimmed(chunks: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}
