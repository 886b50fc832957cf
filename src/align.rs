//! Parallel-text alignment over independent segmentations.
//!
//! A translation-review pipeline carries up to three variants of the same
//! text: the original plus two machine translations. Each variant is
//! segmented independently with the full abbreviation-aware segmenter, and a
//! shared run of zero-padded identifier labels is derived so downstream
//! steps can address segment slots uniformly across the variants.

use crate::SentenceSegmenter;

/// Result of segmenting up to three parallel text variants.
///
/// Field names serialize to the pipeline's wire keys
/// (`originalSegments`, `chatgptSegments`, `geminiSegments`, `chunkCount`)
/// when the `serde` feature is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alignment {
    /// Sentences of the original text.
    #[cfg_attr(feature = "serde", serde(rename = "originalSegments"))]
    pub original_segments: Vec<String>,
    /// Sentences of the first translation variant.
    #[cfg_attr(feature = "serde", serde(rename = "chatgptSegments"))]
    pub chatgpt_segments: Vec<String>,
    /// Sentences of the second translation variant.
    #[cfg_attr(feature = "serde", serde(rename = "geminiSegments"))]
    pub gemini_segments: Vec<String>,
    /// Identifier labels, one per segment slot (see [`align`]).
    #[cfg_attr(feature = "serde", serde(rename = "chunkCount"))]
    pub chunk_count: Vec<String>,
}

/// Segment three parallel texts independently and derive segment labels.
///
/// The label vector has `1 + max(segment counts)` entries, formatted
/// `{iteration:4-digit}_{index:4-digit}` with `index` starting at 1.
/// `iteration` is an opaque pass-through label: it is zero-padded to four
/// characters but never parsed, so non-numeric labels work too.
///
/// ## Example
///
/// ```rust
/// let alignment = shears::align("3", "One. Two.", "Eins. Zwei. Drei.", "Uno.");
///
/// assert_eq!(alignment.original_segments.len(), 2);
/// assert_eq!(alignment.chunk_count.first().map(String::as_str), Some("0003_0001"));
/// assert_eq!(alignment.chunk_count.len(), 4); // 1 + max(2, 3, 1)
/// ```
#[must_use]
pub fn align(iteration: &str, original: &str, chatgpt: &str, gemini: &str) -> Alignment {
    let segmenter = SentenceSegmenter::new();
    let original_segments = segmenter.segment(original);
    let chatgpt_segments = segmenter.segment(chatgpt);
    let gemini_segments = segmenter.segment(gemini);

    let slots = 1 + original_segments
        .len()
        .max(chatgpt_segments.len())
        .max(gemini_segments.len());
    let chunk_count = (1..=slots)
        .map(|index| format!("{iteration:0>4}_{index:04}"))
        .collect();

    Alignment {
        original_segments,
        chatgpt_segments,
        gemini_segments,
        chunk_count,
    }
}
