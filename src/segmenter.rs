//! Abbreviation-aware sentence segmentation.
//!
//! ## The Hard Part: Dots That Don't End Sentences
//!
//! A naive splitter breaks on every `.`/`!`/`?` followed by whitespace and
//! shreds text like this:
//!
//! ```text
//! "Dr. Smith went home. He left at 3.14 p.m."
//!    ^                           ^      ^ ^
//!    none of these are boundaries — only "home." is
//! ```
//!
//! The clean fix would be a negative lookbehind over the whole exception
//! vocabulary, but variable-length lookbehind is a luxury most regex engines
//! (including the `regex` crate) don't offer. So this module uses a
//! protect-then-restore pass instead:
//!
//! 1. Replace every exception span with a unique placeholder token that
//!    contains no sentence punctuation.
//! 2. Split on the plain boundary rule: `.`/`!`/`?` + whitespace, or a bare
//!    newline.
//! 3. Substitute the placeholders back, byte-for-byte.
//!
//! The technique is engine-agnostic and strictly more portable than
//! lookbehind. Protection only suppresses boundary creation; it never drops
//! or rewrites content.

use tracing::trace;

use crate::vocabulary::ExceptionVocabulary;
use crate::Splitter;

/// Private-use sentinel that delimits placeholder tokens on both sides.
///
/// Both-side delimiting keeps tokens mutually non-substring (`\u{E000}1` is
/// never confused with `\u{E000}12`), so restoration order does not matter.
const PLACEHOLDER_SENTINEL: char = '\u{E000}';

/// An ephemeral token → original-text mapping, local to one call.
type PlaceholderMap = Vec<(String, String)>;

/// Sentence segmenter for English and Lithuanian prose.
///
/// Pure and reusable: the exception vocabulary is compiled once per process
/// and shared read-only, while every call gets its own placeholder map. The
/// segmenter is safe to share across threads.
///
/// ## Example
///
/// ```rust
/// use shears::SentenceSegmenter;
///
/// let segmenter = SentenceSegmenter::new();
/// let sentences = segmenter.segment("Dr. Smith went home. He left at 3.14 p.m.");
///
/// assert_eq!(sentences, vec!["Dr. Smith went home.", "He left at 3.14 p.m."]);
/// ```
#[derive(Debug, Clone)]
pub struct SentenceSegmenter {
    vocabulary: &'static ExceptionVocabulary,
}

impl SentenceSegmenter {
    /// Create a segmenter over the shared default vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vocabulary: ExceptionVocabulary::shared(),
        }
    }

    /// Split `text` into trimmed sentences, in source order.
    ///
    /// Boundaries are `.`/`!`/`?` followed by whitespace (the whole
    /// whitespace run is the separator) and bare newlines; spans matched by
    /// the exception vocabulary never produce boundaries. Text without any
    /// boundary yields a single sentence equal to the trimmed input; empty
    /// or whitespace-only fragments are dropped.
    #[must_use]
    pub fn segment(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return vec![];
        }

        // Tokens are drawn from a private-use codepoint; colliding input
        // would make restoration ambiguous.
        debug_assert!(
            !text.contains(PLACEHOLDER_SENTINEL),
            "input contains the placeholder sentinel U+E000"
        );

        let (protected, placeholders) = self.protect(text);
        trace!(spans = placeholders.len(), "protected exception spans");

        split_boundaries(&protected)
            .into_iter()
            .map(|fragment| restore(fragment, &placeholders))
            .map(|sentence| sentence.trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect()
    }

    /// The protection pass: one forward scan over the original text.
    ///
    /// Every protected span is replaced by a freshly numbered token and
    /// recorded in the map. The scan position only moves forward and
    /// substituted content is never re-matched.
    fn protect(&self, text: &str) -> (String, PlaceholderMap) {
        let mut protected = String::with_capacity(text.len());
        let mut placeholders = PlaceholderMap::new();
        let mut pos = 0;

        while let Some(span) = self.vocabulary.find_protected(text, pos) {
            let token = format!(
                "{PLACEHOLDER_SENTINEL}{}{PLACEHOLDER_SENTINEL}",
                placeholders.len()
            );
            protected.push_str(&text[pos..span.start]);
            protected.push_str(&token);
            placeholders.push((token, text[span.start..span.end].to_string()));
            pos = span.end;
        }
        protected.push_str(&text[pos..]);

        (protected, placeholders)
    }
}

impl Default for SentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Splitter for SentenceSegmenter {
    fn split(&self, text: &str) -> Vec<String> {
        self.segment(text)
    }

    fn estimate_pieces(&self, text_len: usize) -> usize {
        // Rough estimate: ~100 chars per sentence
        (text_len / 100).max(1)
    }
}

/// Split on sentence boundaries: `.`/`!`/`?` immediately followed by
/// whitespace (consuming the whole run), or any newline.
///
/// Newlines are always boundaries regardless of the preceding character. A
/// newline inside a post-punctuation whitespace run is part of that run, not
/// a second boundary.
fn split_boundaries(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        match c {
            '.' | '!' | '?' => {
                let punct_end = i + c.len_utf8();
                if iter.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
                    fragments.push(&text[start..punct_end]);
                    start = punct_end;
                    while let Some(&(j, w)) = iter.peek() {
                        if !w.is_whitespace() {
                            break;
                        }
                        start = j + w.len_utf8();
                        iter.next();
                    }
                }
            }
            '\n' => {
                fragments.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fragments.push(&text[start..]);

    fragments
}

/// Substitute every placeholder token back to its original text.
///
/// Tokens are mutually unique and non-overlapping, so order is irrelevant;
/// restoration is byte-exact.
fn restore(fragment: &str, placeholders: &PlaceholderMap) -> String {
    if !fragment.contains(PLACEHOLDER_SENTINEL) {
        return fragment.to_string();
    }
    let mut restored = fragment.to_string();
    for (token, original) in placeholders {
        if restored.contains(token.as_str()) {
            restored = restored.replace(token.as_str(), original);
        }
    }
    restored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> Vec<String> {
        SentenceSegmenter::new().segment(text)
    }

    #[test]
    fn basic_sentences() {
        assert_eq!(
            segment("Hello world. This is a test."),
            vec!["Hello world.", "This is a test."]
        );
    }

    #[test]
    fn abbreviations_and_decimals_do_not_split() {
        assert_eq!(
            segment("Dr. Smith went home. He left at 3.14 p.m."),
            vec!["Dr. Smith went home.", "He left at 3.14 p.m."]
        );
    }

    #[test]
    fn newline_is_a_boundary() {
        assert_eq!(segment("Line one\nLine two"), vec!["Line one", "Line two"]);
    }

    #[test]
    fn punctuation_then_newline_is_one_boundary() {
        assert_eq!(segment("First.\n\nSecond."), vec!["First.", "Second."]);
    }

    #[test]
    fn no_boundary_yields_whole_input() {
        assert_eq!(segment("  no ending punctuation here  "), vec![
            "no ending punctuation here"
        ]);
    }

    #[test]
    fn empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn whitespace_only_input() {
        assert!(segment("   \n\t  ").is_empty());
    }

    #[test]
    fn question_and_exclamation() {
        assert_eq!(
            segment("Is this working? Yes it is! Great."),
            vec!["Is this working?", "Yes it is!", "Great."]
        );
    }

    #[test]
    fn spaced_initials_do_not_split() {
        assert_eq!(
            segment("J. K. Rowling wrote it. It sold well."),
            vec!["J. K. Rowling wrote it.", "It sold well."]
        );
    }

    #[test]
    fn lithuanian_notation_does_not_split() {
        assert_eq!(
            segment("Gimė 1979 m. Vilniuje. Mokėsi ten pat, pvz. matematikos."),
            vec!["Gimė 1979 m. Vilniuje.", "Mokėsi ten pat, pvz. matematikos."]
        );
    }

    #[test]
    fn domain_token_does_not_split() {
        assert_eq!(
            segment("See example.com for details. It loads fast."),
            vec!["See example.com for details.", "It loads fast."]
        );
    }

    #[test]
    fn enumeration_suppresses_genuine_number_end() {
        // Known false-negative class: "10." is protected as an enumeration
        // marker even when the number genuinely ends the sentence.
        assert_eq!(segment("I scored 10. Then I left."), vec![
            "I scored 10. Then I left."
        ]);
    }

    #[test]
    fn trailing_abbreviation_stays_in_final_sentence() {
        assert_eq!(segment("He has a Ph.D."), vec!["He has a Ph.D."]);
    }

    #[test]
    fn protection_round_trip_is_lossless() {
        let segmenter = SentenceSegmenter::new();
        let text = "Dr. Smith, Ph.D., met J. K. Rowling at 3.14 p.m. on example.com in 2025 m.";
        let (protected, placeholders) = segmenter.protect(text);
        assert_eq!(restore(&protected, &placeholders), text);
    }

    #[test]
    fn segmentation_is_idempotent() {
        let text = "Mr. A. Jones arrived. He left at 5.30 p.m. sharp.";
        assert_eq!(segment(text), segment(text));
    }
}
