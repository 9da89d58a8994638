//! Property-based invariants shared by all engines.

mod common;

use common::text_strategy;
use proptest::prelude::*;
use segmint::{Input, Segmenter};

fn grapheme_texts<I: Input>(input: I) -> Vec<I> {
    Segmenter::default().graphemes(input).map(|g| g.text).collect()
}

proptest! {
    // Concatenating the segments of every engine reproduces the input.
    #[test]
    fn segments_round_trip(text in any::<String>()) {
        let seg = Segmenter::default();
        let graphemes: String = seg.graphemes(text.as_str()).map(|g| g.text).collect();
        let words: String = seg.words(text.as_str()).map(|w| w.text).collect();
        let sentences: String = seg.sentences(text.as_str()).map(|s| s.text).collect();
        prop_assert_eq!(&graphemes, &text);
        prop_assert_eq!(&words, &text);
        prop_assert_eq!(&sentences, &text);
    }

    // Malformed byte input is covered exactly once, in order.
    #[test]
    fn bytes_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let seg = Segmenter::default();
        let mut joined = Vec::new();
        for g in seg.graphemes(&bytes[..]) {
            prop_assert!(!g.text.is_empty());
            prop_assert_eq!(g.start, joined.len());
            joined.extend_from_slice(g.text);
        }
        prop_assert_eq!(joined, bytes);
    }

    // Unpaired surrogates are isolated without losing code units.
    #[test]
    fn utf16_round_trip(units in prop::collection::vec(any::<u16>(), 0..48)) {
        let joined: Vec<u16> = Segmenter::default()
            .words(&units[..])
            .flat_map(|w| w.text.iter().copied())
            .collect();
        prop_assert_eq!(joined, units);
    }

    // count <= codepoints <= bytes
    #[test]
    fn counts_are_monotone(text in any::<String>()) {
        let chars = text.chars().count();
        prop_assert!(segmint::grapheme_count(text.as_str()) <= chars);
        prop_assert!(segmint::word_count(text.as_str()) <= chars);
        prop_assert!(segmint::sentence_count(text.as_str()) <= chars);
        prop_assert!(chars <= text.len());
    }

    #[test]
    fn ascii_width_is_length(text in "[ -~]{0,64}") {
        prop_assert_eq!(segmint::width(text.as_str()), text.len());
    }

    // Every encoding of the same text segments into the same clusters.
    #[test]
    fn encodings_agree(text in text_strategy(32)) {
        let from_str: Vec<String> = grapheme_texts(text.as_str())
            .into_iter()
            .map(str::to_string)
            .collect();
        let chars: Vec<char> = text.chars().collect();
        let from_chars: Vec<String> = grapheme_texts(&chars[..])
            .into_iter()
            .map(|c| c.iter().collect())
            .collect();
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let from_utf16: Vec<String> = grapheme_texts(&utf16[..])
            .into_iter()
            .map(|u| String::from_utf16_lossy(u))
            .collect();
        prop_assert_eq!(&from_str, &from_chars);
        prop_assert_eq!(&from_str, &from_utf16);
        prop_assert_eq!(
            segmint::word_count(text.as_str()),
            segmint::word_count(&chars[..])
        );
        prop_assert_eq!(
            segmint::sentence_count(text.as_str()),
            segmint::sentence_count(&utf16[..])
        );
    }

    // Width of a string is the sum of its cluster widths, and the combined
    // step agrees with the grapheme iterator.
    #[test]
    fn step_matches_graphemes(text in text_strategy(32)) {
        let seg = Segmenter::default();
        let expected: Vec<(&str, u16)> = seg
            .graphemes(text.as_str())
            .map(|g| (g.text, g.width))
            .collect();
        let mut got = Vec::new();
        let mut rest = text.as_str();
        let mut state = segmint::StepState::default();
        while !rest.is_empty() {
            let out = seg.step(rest, state);
            got.push((out.cluster, out.width));
            rest = out.remainder;
            state = out.state;
        }
        prop_assert_eq!(&got, &expected);
        let sum: usize = expected.iter().map(|(_, w)| usize::from(*w)).sum();
        prop_assert_eq!(segmint::width(text.as_str()), sum);
    }

    // Boundary flags from the combined step line up with the word and
    // sentence ends that fall between clusters.
    #[test]
    fn step_flags_match_word_and_sentence_ends(text in text_strategy(32)) {
        let seg = Segmenter::default();
        let cluster_ends: Vec<usize> = seg
            .graphemes(text.as_str())
            .map(|g| g.start + g.text.len())
            .collect();
        let mut word_ends = Vec::new();
        let mut sentence_ends = Vec::new();
        let mut rest = text.as_str();
        let mut state = segmint::StepState::default();
        let mut at = 0;
        while !rest.is_empty() {
            let out = seg.step(rest, state);
            at += out.cluster.len();
            if out.boundaries.contains(segmint::Boundaries::WORD) {
                word_ends.push(at);
            }
            if out.boundaries.contains(segmint::Boundaries::SENTENCE) {
                sentence_ends.push(at);
            }
            rest = out.remainder;
            state = out.state;
        }
        let words: Vec<usize> = seg
            .words(text.as_str())
            .map(|w| w.start + w.text.len())
            .filter(|end| cluster_ends.contains(end))
            .collect();
        let sentences: Vec<usize> = seg
            .sentences(text.as_str())
            .map(|s| s.start + s.text.len())
            .filter(|end| cluster_ends.contains(end))
            .collect();
        prop_assert_eq!(word_ends, words);
        prop_assert_eq!(sentence_ends, sentences);
    }
}
