#![allow(dead_code)] // Shared across integration tests; each test binary uses a subset of helpers.

use proptest::prelude::*;
use segmint::{Boundaries, GraphemeState, Segmenter, SentenceState, StepState, WordState, WordKind};

/// Fragments that exercise every rule family: joiners, modifiers, flags,
/// conjuncts, Hangul jamo, terminators, separators and quotes.
pub const PIECES: &[&str] = &[
    "a", "Z", "Mr", "x", " ", "  ", "\t", "\r", "\n", "\r\n", "\u{85}", "\u{2029}", ".", "?", "!",
    "'", "\"", ",", ":", "_", "(", ")", "1", "9", "é", "e\u{0301}", "\u{0301}", "\u{200D}",
    "\u{FE0F}", "\u{FE0E}", "\u{00AD}", "\u{1F468}", "\u{1F469}", "\u{2764}", "\u{1F3FD}",
    "\u{1F1E9}", "\u{1F1EA}",
    "क", "\u{094D}", "ष", "\u{0924}", "\u{1100}", "\u{1161}", "\u{11A8}", "가", "世", "ア", "ー", "א",
    "\u{05F4}", "\u{00BF}", "\u{2E3A}", "\u{FF21}",
];

pub fn text_strategy(max_pieces: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PIECES), 0..max_pieces)
        .prop_map(|pieces| pieces.concat())
}

/// Sorted, deduplicated split offsets within `0..=len`.
pub fn normalize_splits(raw: &[usize], len: usize) -> Vec<usize> {
    let mut splits: Vec<usize> = raw.iter().map(|s| s % (len + 1)).collect();
    splits.sort_unstable();
    splits.dedup();
    splits
}

/// Segment `text` whole with a final-mode step function that returns the
/// consumed length, the new state and per-segment data.
pub fn whole<S: Copy, T>(
    text: &[u8],
    init: S,
    full: impl Fn(&[u8], S) -> (usize, S, T),
) -> Vec<(Vec<u8>, T)> {
    let mut out = Vec::new();
    let mut at = 0;
    let mut state = init;
    while at < text.len() {
        let (len, next, data) = full(&text[at..], state);
        out.push((text[at..at + len].to_vec(), data));
        state = next;
        at += len;
    }
    out
}

/// Feed `text` in chunks split at `splits`, retrying partial steps with the
/// unconsumed data plus the next chunk, then flush in final mode.
pub fn chunked<S: Copy, T>(
    text: &[u8],
    splits: &[usize],
    init: S,
    partial: impl Fn(&[u8], S) -> Option<(usize, S, T)>,
    full: impl Fn(&[u8], S) -> (usize, S, T),
) -> Vec<(Vec<u8>, T)> {
    let mut out = Vec::new();
    let mut pending: Vec<u8> = Vec::new();
    let mut state = init;
    let mut prev = 0;
    for end in splits.iter().copied().chain(std::iter::once(text.len())) {
        pending.extend_from_slice(&text[prev..end]);
        prev = end;
        while let Some((len, next, data)) = partial(&pending[..], state) {
            assert!(len > 0, "partial step must consume input");
            out.push((pending[..len].to_vec(), data));
            pending.drain(..len);
            state = next;
        }
    }
    out.extend(whole(&pending, state, full));
    out
}

pub fn grapheme_partial(
    seg: Segmenter,
) -> impl Fn(&[u8], GraphemeState) -> Option<(usize, GraphemeState, u16)> {
    move |chunk: &[u8], state: GraphemeState| {
        seg.next_grapheme_partial(chunk, state)
            .map(|s| (s.cluster.len(), s.state, s.width))
    }
}

pub fn grapheme_full(
    seg: Segmenter,
) -> impl Fn(&[u8], GraphemeState) -> (usize, GraphemeState, u16) {
    move |input: &[u8], state: GraphemeState| {
        let s = seg.next_grapheme(input, state);
        (s.cluster.len(), s.state, s.width)
    }
}

pub fn word_partial(
    seg: Segmenter,
) -> impl Fn(&[u8], WordState) -> Option<(usize, WordState, WordKind)> {
    move |chunk: &[u8], state: WordState| {
        seg.next_word_partial(chunk, state)
            .map(|s| (s.word.len(), s.state, s.kind))
    }
}

pub fn word_full(seg: Segmenter) -> impl Fn(&[u8], WordState) -> (usize, WordState, WordKind) {
    move |input: &[u8], state: WordState| {
        let s = seg.next_word(input, state);
        (s.word.len(), s.state, s.kind)
    }
}

pub fn sentence_partial(
    seg: Segmenter,
) -> impl Fn(&[u8], SentenceState) -> Option<(usize, SentenceState, ())> {
    move |chunk: &[u8], state: SentenceState| {
        seg.next_sentence_partial(chunk, state)
            .map(|s| (s.sentence.len(), s.state, ()))
    }
}

pub fn sentence_full(
    seg: Segmenter,
) -> impl Fn(&[u8], SentenceState) -> (usize, SentenceState, ()) {
    move |input: &[u8], state: SentenceState| {
        let s = seg.next_sentence(input, state);
        (s.sentence.len(), s.state, ())
    }
}

pub fn step_partial(
    seg: Segmenter,
) -> impl Fn(&[u8], StepState) -> Option<(usize, StepState, Boundaries)> {
    move |chunk: &[u8], state: StepState| {
        seg.step_partial(chunk, state)
            .map(|s| (s.cluster.len(), s.state, s.boundaries))
    }
}

pub fn step_full(seg: Segmenter) -> impl Fn(&[u8], StepState) -> (usize, StepState, Boundaries) {
    move |input: &[u8], state: StepState| {
        let s = seg.step(input, state);
        (s.cluster.len(), s.state, s.boundaries)
    }
}
