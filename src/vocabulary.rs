//! The exception vocabulary: dot spans that never end a sentence.
//!
//! Sentence-ending punctuation is ambiguous. A dot can close a sentence, or
//! it can sit inside an abbreviation ("Mr.", "pvz."), a chain of initials
//! ("J.R.R."), a decimal ("3.14"), an enumeration marker ("10."), a
//! Lithuanian year notation ("2025 m."), or a domain-like token
//! ("example.com"). The vocabulary enumerates every such span so that the
//! segmenter can protect it before splitting.
//!
//! Two kinds of entries:
//!
//! - **Literals**: exact, case-sensitive abbreviation strings for English and
//!   Lithuanian. These are escaped so their dots match literally.
//! - **Parametric rules**: regex branches for the open-ended classes (years,
//!   initials, domains, decimals, enumerations).
//!
//! Everything compiles into one alternation. Literals come first (longest
//! first), so a literal like `U.S.` is claimed whole before the more general
//! chained-initials rule can touch it. The parametric rules keep a fixed
//! relative order; in particular the decimal rule precedes the enumeration
//! rule so `3.14` is never split into `3.` + `14`.

use std::sync::LazyLock;

use regex::Regex;

/// Common abbreviations in English and Lithuanian.
///
/// Case-sensitive, matched verbatim. The `" d."` entry keeps its leading
/// space: the Lithuanian day marker only counts after a date fragment, and
/// the space keeps it from firing inside ordinary words ending in `d`.
static LITERAL_ABBREVIATIONS: &[&str] = &[
    // English
    "Mr.", "Mrs.", "Dr.", "i.e.", "e.g.", "vs.", "Prof.", "Jr.", "Sr.",
    "Inc.", "Ltd.", "Co.", "U.S.", "U.K.", "Ph.D.", "M.D.", "B.A.", "M.A.",
    "D.C.", "a.m.", "p.m.", "No.", "vol.", "pp.", "Ch.", "etc.",
    // Lithuanian
    "pvz.", "p.", "įsk.", "op.cit.", "ibid.", "plg.", "red.", "t.t.", "t.y.",
    "t. y.", "t. t.", "tūkst.", "mln.", "mlrd.", "mlr.", "val.", "sav.",
    " d.", "mėn.", "proc.",
];

/// Name of the capture group holding the protected core of the
/// single-initial rule (see [`ExceptionVocabulary::find_protected`]).
pub(crate) const INITIAL_GROUP: &str = "init";

/// Parametric rules for dot spans that are open-ended classes rather than a
/// fixed word list. Order is significant: earlier branches win ties under
/// leftmost-first alternation semantics.
static GENERAL_PATTERNS: &[&str] = &[
    // Lithuanian year notation: "2025 m.", "1979 m."
    r"\b\d{4}\sm\.",
    // Chained uppercase initials: "J.R.R.", "U.S.A."
    r"\b[A-Z](?:\.[A-Z])+\.",
    // Single uppercase initial before a capitalized word: "P. Smith".
    // The regex crate has no lookahead, so the following context is part of
    // the branch; only the named `init` core gets protected.
    r"\b(?P<init>[A-Z]\.)\s[A-Z]",
    // Domain or file extension: "example.com", "file.pdf". Very simplified.
    r"\b[A-Za-z0-9_-]+\.(?:com|lt|org|net|pdf|docx|xlsx|txt)\b",
    // Decimal/time: "3.14", "14.45"
    r"\b\d+\.\d+\b",
    // Enumeration marker: "1.", "10."
    r"\b\d+\.",
];

/// A protected span found in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ProtectedSpan {
    /// Byte offset where the protected text starts.
    pub start: usize,
    /// Byte offset one past the protected text.
    pub end: usize,
}

/// The compiled set of non-boundary dot spans.
///
/// Immutable after construction and cheap to share: the common path is the
/// process-wide instance behind [`ExceptionVocabulary::shared`], built once
/// and used read-only by every caller on every thread.
///
/// ## Known false negatives
///
/// The enumeration rule (`digits + dot`) also suppresses genuine sentence
/// ends on bare numbers: `"I scored 10. Then I left."` stays one sentence.
/// This is an accepted trade-off of the heuristic, kept deliberately.
#[derive(Debug)]
pub struct ExceptionVocabulary {
    pattern: Regex,
}

impl ExceptionVocabulary {
    /// Compile the vocabulary into a single alternation.
    fn build() -> Self {
        // Longest-first keeps leftmost-first semantics from letting a short
        // literal fragment a longer one ("t. y." must beat "p.").
        let mut literals: Vec<&str> = LITERAL_ABBREVIATIONS.to_vec();
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let branches: Vec<String> = literals
            .iter()
            .map(|lit| regex::escape(lit))
            .chain(GENERAL_PATTERNS.iter().map(|p| (*p).to_string()))
            .collect();

        let pattern =
            Regex::new(&branches.join("|")).expect("static vocabulary pattern compiles");

        Self { pattern }
    }

    /// The process-wide vocabulary instance.
    pub fn shared() -> &'static Self {
        static SHARED: LazyLock<ExceptionVocabulary> = LazyLock::new(ExceptionVocabulary::build);
        &SHARED
    }

    /// Find the next protected span at or after `from`.
    ///
    /// For most branches the whole match is protected. The single-initial
    /// branch matches its following context too (`"P. S"`), but only the
    /// `init` core (`"P."`) is protected; the caller resumes scanning right
    /// after the core so that spaced chains like `"J. K. Rowling"` are
    /// protected initial by initial.
    pub(crate) fn find_protected(&self, text: &str, from: usize) -> Option<ProtectedSpan> {
        let caps = self.pattern.captures_at(text, from)?;
        let whole = caps.get(0).expect("group 0 is the whole match");
        let m = caps.name(INITIAL_GROUP).unwrap_or(whole);
        Some(ProtectedSpan {
            start: m.start(),
            end: m.end(),
        })
    }
}
