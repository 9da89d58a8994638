//! Unicode text segmentation: grapheme clusters, words and sentences (UAX #29)
//! plus terminal display width.
//!
//! Every engine is a pure step function: given an input and a continuation
//! state it returns the next segment, the remainder and the state to pass to
//! the following call. Start with `Default::default()` states and loop until
//! the remainder is empty. Segments are sub-slices of the caller's input, so
//! concatenating them reproduces it exactly.
//!
//! The `*_partial` variants accept a chunk of a longer stream. They return
//! `None` when the segment's end cannot be decided inside the chunk; append
//! more data to the unconsumed chunk and call again with the same state.

pub mod error;
pub mod grapheme;
pub mod input;
pub mod iter;
pub mod options;
pub mod segment;
pub mod sentence;
pub mod step;
pub mod width;
pub mod word;

pub use core_props::UNICODE_VERSION;
pub use error::StateError;
pub use grapheme::{GraphemeState, GraphemeStep};
pub use input::{Decoded, Input, Unit};
pub use iter::{Grapheme, Graphemes, Sentence, Sentences, Word, Words};
pub use options::{AmbiguousWidth, Options};
pub use segment::{Segment, normalize_and_segment};
pub use sentence::{SentenceState, SentenceStep};
pub use step::{Boundaries, StepOutput, StepState};
pub use width::cluster_width;
pub use word::{WordKind, WordState, WordStep};

use input::Mode;

/// Entry point holding the segmentation options. Cheap to copy and share
/// between threads; all state is passed explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segmenter {
    options: Options,
}

impl Segmenter {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Next extended grapheme cluster and its display width.
    pub fn next_grapheme<I: Input>(&self, input: I, state: GraphemeState) -> GraphemeStep<I> {
        grapheme::next(input, state, self.options.ambiguous)
    }

    pub fn next_grapheme_partial<I: Input>(
        &self,
        chunk: I,
        state: GraphemeState,
    ) -> Option<GraphemeStep<I>> {
        grapheme::scan(chunk, state, self.options.ambiguous, Mode::Partial).ok()
    }

    /// Next word segment. Whitespace and punctuation runs are segments too;
    /// see [`WordStep::kind`].
    pub fn next_word<I: Input>(&self, input: I, state: WordState) -> WordStep<I> {
        word::next(input, state)
    }

    pub fn next_word_partial<I: Input>(&self, chunk: I, state: WordState) -> Option<WordStep<I>> {
        word::scan(chunk, state, Mode::Partial).ok()
    }

    /// Next sentence, including its trailing spaces and paragraph separator.
    pub fn next_sentence<I: Input>(&self, input: I, state: SentenceState) -> SentenceStep<I> {
        sentence::next(input, state, self.options.abbreviations)
    }

    pub fn next_sentence_partial<I: Input>(
        &self,
        chunk: I,
        state: SentenceState,
    ) -> Option<SentenceStep<I>> {
        sentence::scan(chunk, state, self.options.abbreviations, Mode::Partial).ok()
    }

    /// Next grapheme cluster together with the word and sentence boundaries
    /// that follow it.
    pub fn step<I: Input>(&self, input: I, state: StepState) -> StepOutput<I> {
        step::next(input, state, self.options)
    }

    pub fn step_partial<I: Input>(&self, chunk: I, state: StepState) -> Option<StepOutput<I>> {
        step::scan(chunk, state, self.options, Mode::Partial).ok()
    }

    pub fn graphemes<I: Input>(&self, input: I) -> Graphemes<I> {
        Graphemes::new(input, self.options)
    }

    pub fn words<I: Input>(&self, input: I) -> Words<I> {
        Words::new(input)
    }

    pub fn sentences<I: Input>(&self, input: I) -> Sentences<I> {
        Sentences::new(input, self.options)
    }

    pub fn grapheme_count<I: Input>(&self, input: I) -> usize {
        self.graphemes(input).count()
    }

    /// Number of word segments, counting whitespace and punctuation runs.
    pub fn word_count<I: Input>(&self, input: I) -> usize {
        self.words(input).count()
    }

    pub fn sentence_count<I: Input>(&self, input: I) -> usize {
        self.sentences(input).count()
    }

    /// Display width in terminal columns: the sum of the cluster widths.
    pub fn width<I: Input>(&self, input: I) -> usize {
        self.graphemes(input).map(|g| usize::from(g.width)).sum()
    }

    /// Reverse the order of grapheme clusters, keeping each cluster intact.
    pub fn reverse_graphemes(&self, input: &str) -> String {
        let clusters: Vec<&str> = self.graphemes(input).map(|g| g.text).collect();
        let mut out = String::with_capacity(input.len());
        for cluster in clusters.iter().rev() {
            out.push_str(cluster);
        }
        out
    }
}

pub fn next_grapheme<I: Input>(input: I, state: GraphemeState) -> GraphemeStep<I> {
    Segmenter::default().next_grapheme(input, state)
}

pub fn next_word<I: Input>(input: I, state: WordState) -> WordStep<I> {
    Segmenter::default().next_word(input, state)
}

pub fn next_sentence<I: Input>(input: I, state: SentenceState) -> SentenceStep<I> {
    Segmenter::default().next_sentence(input, state)
}

pub fn step<I: Input>(input: I, state: StepState) -> StepOutput<I> {
    Segmenter::default().step(input, state)
}

pub fn grapheme_count<I: Input>(input: I) -> usize {
    Segmenter::default().grapheme_count(input)
}

pub fn word_count<I: Input>(input: I) -> usize {
    Segmenter::default().word_count(input)
}

pub fn sentence_count<I: Input>(input: I) -> usize {
    Segmenter::default().sentence_count(input)
}

/// Display width with narrow ambiguous characters.
pub fn width<I: Input>(input: I) -> usize {
    Segmenter::default().width(input)
}

pub fn reverse_graphemes(input: &str) -> String {
    Segmenter::default().reverse_graphemes(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_and_width() {
        assert_eq!(grapheme_count("Hello"), 5);
        assert_eq!(width("Hello"), 5);
        assert_eq!(grapheme_count("🇩🇪"), 1);
        assert_eq!(width("🇩🇪"), 2);
        assert_eq!(width("世界"), 4);
        assert_eq!(grapheme_count("a\u{0327}"), 1);
        assert_eq!(width("a\u{0327}"), 1);
    }

    #[test]
    fn empty_everything_is_zero() {
        assert_eq!(grapheme_count(""), 0);
        assert_eq!(word_count(""), 0);
        assert_eq!(sentence_count(""), 0);
        assert_eq!(width(""), 0);
    }

    #[test]
    fn ambiguous_option_changes_width() {
        let wide = Segmenter::new(Options::default().with_ambiguous(AmbiguousWidth::Wide));
        assert_eq!(width("±1"), 2);
        assert_eq!(wide.width("±1"), 3);
    }

    #[test]
    fn reverse_keeps_clusters() {
        assert_eq!(reverse_graphemes("ae\u{0301}🇩🇪"), "🇩🇪e\u{0301}a");
    }

    #[test]
    fn partial_returns_none_until_decidable() {
        let seg = Segmenter::default();
        assert!(seg.next_grapheme_partial("e", GraphemeState::default()).is_none());
        let step = seg.next_grapheme_partial("e\u{0301}x", GraphemeState::default());
        assert_eq!(step.map(|s| s.cluster), Some("e\u{0301}"));
        assert!(seg.next_word_partial("can", WordState::default()).is_none());
        assert!(seg.next_sentence_partial("Hi.", SentenceState::default()).is_none());
    }

    #[test]
    fn segmenter_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Segmenter>();
        assert_send_sync::<StepState>();
    }
}
