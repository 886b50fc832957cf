//! Concrete boundary and packing cases, end to end through the public API.

use shears::{align, chunk_by_budget, segment_sentences, BudgetChunker, Error};

#[test]
fn abbreviations_initials_and_decimals_do_not_split() {
    let sentences = segment_sentences("Dr. Smith went home. He left at 3.14 p.m.");
    assert_eq!(
        sentences,
        vec!["Dr. Smith went home.", "He left at 3.14 p.m."]
    );
}

#[test]
fn newline_is_always_a_boundary() {
    assert_eq!(
        segment_sentences("Line one\nLine two"),
        vec!["Line one", "Line two"]
    );
}

#[test]
fn mixed_english_and_lithuanian_vocabulary() {
    let text = "Prof. Jonas gimė 1979 m. Kaune. Jis uždirba 2 mln. eurų, t.y. daug. Eikite į example.lt dabar.";
    let sentences = segment_sentences(text);
    assert_eq!(
        sentences,
        vec![
            "Prof. Jonas gimė 1979 m. Kaune.",
            "Jis uždirba 2 mln. eurų, t.y. daug.",
            "Eikite į example.lt dabar.",
        ]
    );
}

#[test]
fn chained_initials_stay_whole() {
    let sentences = segment_sentences("J.R.R. Tolkien wrote it. U.S. readers loved it.");
    assert_eq!(
        sentences,
        vec!["J.R.R. Tolkien wrote it.", "U.S. readers loved it."]
    );
}

#[test]
fn consecutive_punctuation_produces_no_empty_sentences() {
    let sentences = segment_sentences("Wait... what?! \n\n Really?");
    assert!(sentences.iter().all(|s| !s.trim().is_empty()));
}

#[test]
fn oversized_sentence_fallback() {
    let chunks = chunk_by_budget(&"a".repeat(50), 10).unwrap();
    assert_eq!(chunks.len(), 5);
    assert!(chunks.iter().all(|c| c.len() == 10));
}

#[test]
fn chunk_budget_invariant_on_prose() {
    let text = "Mr. Brown arrived early. He read vol. 3 of the series. \
                Then he wrote notes until 11.45 p.m. and went to bed. The end.";
    for budget in [10, 25, 40, 1500] {
        let chunks = chunk_by_budget(text, budget).unwrap();
        for chunk in &chunks {
            assert!(chunk.chars().count() <= budget, "budget {budget}: {chunk:?}");
        }
    }
}

#[test]
fn zero_budget_fails_fast() {
    assert!(matches!(chunk_by_budget("text", 0), Err(Error::InvalidBudget(0))));
}

#[test]
fn empty_inputs_yield_empty_sequences() {
    assert!(segment_sentences("").is_empty());
    assert!(chunk_by_budget("", 100).unwrap().is_empty());
}

#[test]
fn default_budget_matches_reference_deployment() {
    let chunker = BudgetChunker::with_default_budget();
    assert_eq!(chunker.max_size(), 1500);
}

#[test]
fn multi_text_cardinality() {
    let alignment = align(
        "3",
        "First. Second.",
        "Uno. Dos. Tres. Cuatro. Cinco.",
        "Vienas. Du. Trys.",
    );

    assert_eq!(alignment.original_segments.len(), 2);
    assert_eq!(alignment.chatgpt_segments.len(), 5);
    assert_eq!(alignment.gemini_segments.len(), 3);

    let expected: Vec<String> = (1..=6).map(|i| format!("0003_{i:04}")).collect();
    assert_eq!(alignment.chunk_count, expected);
}

#[test]
fn segmenter_and_chunker_diverge_on_newlines() {
    // Documented design fact: the chunker's splitter has no newline rule.
    let text = "alpha\nbeta";
    assert_eq!(segment_sentences(text).len(), 2);
    assert_eq!(chunk_by_budget(text, 100).unwrap(), vec!["alpha\nbeta"]);
}
