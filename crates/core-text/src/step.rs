//! Combined stepping: one grapheme cluster per call, with flags telling
//! whether a word and/or sentence boundary follows it.
//!
//! The word and sentence engines are driven over the cluster's units and then
//! asked about the first unit of the remainder. Only boundaries at cluster
//! ends are reported: a sentence boundary the rules place inside a cluster,
//! such as before a skin tone modifier that follows `". "`, is dropped.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::StateError;
use crate::grapheme::{self, GraphemeState};
use crate::input::{Input, Mode, NeedMore, unit_at};
use crate::options::Options;
use crate::sentence::SentenceState;
use crate::word::WordState;

bitflags! {
    /// Boundaries that follow a cluster.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Boundaries: u8 {
        const WORD = 0b01;
        const SENTENCE = 0b10;
    }
}

/// Continuation state of all three engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StepState {
    pub grapheme: GraphemeState,
    pub word: WordState,
    pub sentence: SentenceState,
}

const WORD_SHIFT: u32 = GraphemeState::BITS;
const SENTENCE_SHIFT: u32 = WORD_SHIFT + WordState::BITS;

impl StepState {
    pub const BITS: u32 = SENTENCE_SHIFT + SentenceState::BITS;

    pub fn to_bits(self) -> u32 {
        self.grapheme.to_bits()
            | self.word.to_bits() << WORD_SHIFT
            | self.sentence.to_bits() << SENTENCE_SHIFT
    }

    pub fn from_bits(bits: u32) -> Result<Self, StateError> {
        if bits >> Self::BITS != 0 {
            return Err(StateError::InvalidBits { engine: "step", bits });
        }
        let mask = |width: u32| (1u32 << width) - 1;
        Ok(Self {
            grapheme: GraphemeState::from_bits(bits & mask(GraphemeState::BITS))?,
            word: WordState::from_bits((bits >> WORD_SHIFT) & mask(WordState::BITS))?,
            sentence: SentenceState::from_bits(
                (bits >> SENTENCE_SHIFT) & mask(SentenceState::BITS),
            )?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutput<I> {
    pub cluster: I,
    pub remainder: I,
    pub width: u16,
    pub boundaries: Boundaries,
    pub state: StepState,
}

pub(crate) fn scan<I: Input>(
    input: I,
    state: StepState,
    options: Options,
    mode: Mode,
) -> Result<StepOutput<I>, NeedMore> {
    let step = grapheme::scan(input, state.grapheme, options.ambiguous, mode)?;
    let mut word = state.word;
    let mut sentence = state.sentence;
    let end = step.cluster.unit_len();
    let mut at = 0;
    while at < end {
        let decoded = unit_at(input, at, mode)?;
        word = word.advance(decoded.unit, input, at + decoded.len, mode)?.0;
        sentence = sentence
            .advance(decoded.unit, input, at, mode, options.abbreviations)?
            .0;
        at += decoded.len;
    }

    let boundaries = if end == 0 {
        Boundaries::empty()
    } else if end == input.unit_len() {
        match mode {
            Mode::Final => Boundaries::all(),
            Mode::Partial if word.breaks_after() && sentence.breaks_after() => Boundaries::all(),
            Mode::Partial => {
                trace!(target: "text.sentence", units = end, "step reaches end of chunk");
                return Err(NeedMore);
            }
        }
    } else {
        let decoded = unit_at(input, end, mode)?;
        let mut flags = Boundaries::empty();
        if word.advance(decoded.unit, input, end + decoded.len, mode)?.1 {
            flags |= Boundaries::WORD;
        }
        if sentence.advance(decoded.unit, input, end, mode, options.abbreviations)?.1 {
            flags |= Boundaries::SENTENCE;
        }
        flags
    };

    Ok(StepOutput {
        cluster: step.cluster,
        remainder: step.remainder,
        width: step.width,
        boundaries,
        state: StepState {
            grapheme: step.state,
            word,
            sentence,
        },
    })
}

pub(crate) fn next<I: Input>(input: I, state: StepState, options: Options) -> StepOutput<I> {
    match scan(input, state, options, Mode::Final) {
        Ok(step) => step,
        Err(NeedMore) => {
            let (cluster, remainder) = input.split_at(input.unit_len());
            StepOutput {
                cluster,
                remainder,
                width: 0,
                boundaries: Boundaries::all(),
                state,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn walk(s: &str) -> Vec<(&str, Boundaries)> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = StepState::default();
        while !rest.is_empty() {
            let step = next(rest, state, Options::default());
            out.push((step.cluster, step.boundaries));
            rest = step.remainder;
            state = step.state;
        }
        out
    }

    #[test]
    fn flags_follow_words_and_sentences() {
        let none = Boundaries::empty();
        let word = Boundaries::WORD;
        let both = Boundaries::all();
        assert_eq!(
            walk("Hi. Yo"),
            vec![
                ("H", none),
                ("i", word),
                (".", word),
                (" ", both),
                ("Y", none),
                ("o", both),
            ]
        );
    }

    #[test]
    fn boundary_inside_cluster_is_not_reported() {
        let text = "Hi. \u{1F3FD}Yo";
        let whole = crate::sentence::next(text, SentenceState::default(), true);
        assert_eq!(whole.sentence, "Hi. ");
        let word = Boundaries::WORD;
        let both = Boundaries::all();
        assert_eq!(
            walk(text)[2..],
            [(".", word), (" \u{1F3FD}", word), ("Y", Boundaries::empty()), ("o", both)]
        );
    }

    #[test]
    fn clusters_carry_width() {
        let mut rest = "a世👍🏽";
        let mut state = StepState::default();
        let mut widths = Vec::new();
        while !rest.is_empty() {
            let step = next(rest, state, Options::default());
            widths.push(step.width);
            rest = step.remainder;
            state = step.state;
        }
        assert_eq!(widths, vec![1, 2, 2]);
    }

    #[test]
    fn empty_input_has_no_boundaries() {
        let step = next("", StepState::default(), Options::default());
        assert_eq!(step.cluster, "");
        assert_eq!(step.boundaries, Boundaries::empty());
    }

    #[test]
    fn partial_step_waits_at_chunk_end() {
        let state = StepState::default();
        assert!(scan("ab", state, Options::default(), Mode::Partial).is_ok());
        assert!(scan("a", state, Options::default(), Mode::Partial).is_err());
        let nl = scan("\n", state, Options::default(), Mode::Partial).map(|s| s.boundaries);
        assert_eq!(nl, Ok(Boundaries::all()));
    }

    #[test]
    fn bits_round_trip() {
        let mut rest = "Mr. O'Neil, 3.5 🇩🇪!";
        let mut state = StepState::default();
        while !rest.is_empty() {
            let step = next(rest, state, Options::default());
            assert_eq!(StepState::from_bits(step.state.to_bits()), Ok(step.state));
            rest = step.remainder;
            state = step.state;
        }
        assert!(StepState::from_bits(u32::MAX).is_err());
    }
}
