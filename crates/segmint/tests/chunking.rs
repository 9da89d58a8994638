//! Streaming determinism: feeding text in arbitrary chunks through the
//! partial entry points yields exactly the whole-text segmentation.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use segmint::{GraphemeState, Segmenter, SentenceState, StepState, WordState};

fn check_all_engines(text: &[u8], splits: &[usize]) {
    let seg = Segmenter::default();
    assert_eq!(
        chunked(text, splits, GraphemeState::default(), grapheme_partial(seg), grapheme_full(seg)),
        whole(text, GraphemeState::default(), grapheme_full(seg)),
        "graphemes, splits {splits:?}"
    );
    assert_eq!(
        chunked(text, splits, WordState::default(), word_partial(seg), word_full(seg)),
        whole(text, WordState::default(), word_full(seg)),
        "words, splits {splits:?}"
    );
    assert_eq!(
        chunked(text, splits, SentenceState::default(), sentence_partial(seg), sentence_full(seg)),
        whole(text, SentenceState::default(), sentence_full(seg)),
        "sentences, splits {splits:?}"
    );
    assert_eq!(
        chunked(text, splits, StepState::default(), step_partial(seg), step_full(seg)),
        whole(text, StepState::default(), step_full(seg)),
        "steps, splits {splits:?}"
    );
}

#[test]
fn every_single_split_point() {
    let text = concat!(
        "Mr. O'Neil's \u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} paid 3.50\u{20AC}. ",
        "\u{1F1E9}\u{1F1EA}\u{1F1E9}\r\nनमस्ते! Really?",
    );
    let bytes = text.as_bytes();
    for split in 0..=bytes.len() {
        check_all_engines(bytes, &[split]);
    }
}

#[test]
fn byte_at_a_time() {
    let text = "e\u{0301}a.b 1,2 \u{05D0}\u{05F4}\u{05D1} x\u{200D}\u{2764}\u{FE0F}";
    let bytes = text.as_bytes();
    let splits: Vec<usize> = (1..bytes.len()).collect();
    check_all_engines(bytes, &splits);
}

#[test]
fn truncated_sequences_wait_for_more() {
    let seg = Segmenter::default();
    let smile = "\u{1F600}".as_bytes();
    assert!(seg.next_grapheme_partial(&smile[..2], GraphemeState::default()).is_none());
    let step = seg.next_grapheme(&smile[..2], GraphemeState::default());
    assert_eq!(step.cluster, &smile[..2]);
    assert_eq!(step.width, 1);
}

#[test]
fn empty_chunk_needs_more() {
    let seg = Segmenter::default();
    assert!(seg.next_grapheme_partial("", GraphemeState::default()).is_none());
    assert!(seg.next_word_partial("", WordState::default()).is_none());
    assert!(seg.next_sentence_partial("", SentenceState::default()).is_none());
    assert!(seg.step_partial("", StepState::default()).is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    // Chunking valid text anywhere never changes the segmentation.
    #[test]
    fn chunked_text_matches_whole(
        text in text_strategy(24),
        raw in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let splits = normalize_splits(&raw, text.len());
        check_all_engines(text.as_bytes(), &splits);
    }

    // Malformed input chunks just as deterministically.
    #[test]
    fn chunked_bytes_match_whole(
        bytes in prop::collection::vec(any::<u8>(), 0..48),
        raw in prop::collection::vec(any::<usize>(), 0..6),
    ) {
        let splits = normalize_splits(&raw, bytes.len());
        check_all_engines(&bytes, &splits);
    }
}
