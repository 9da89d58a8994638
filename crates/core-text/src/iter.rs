//! Iterators over whole inputs, built by repeated final-mode steps.

use crate::grapheme::{self, GraphemeState};
use crate::input::Input;
use crate::options::Options;
use crate::sentence::{self, SentenceState};
use crate::word::{self, WordKind, WordState};

/// A grapheme cluster and its offset in code units from the start of the
/// iterated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grapheme<I> {
    pub text: I,
    pub start: usize,
    pub width: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<I> {
    pub text: I,
    pub start: usize,
    pub kind: WordKind,
}

impl<I> Word<I> {
    /// Whether the segment holds a letter, digit or ideograph.
    pub fn is_word(&self) -> bool {
        self.kind.is_word()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<I> {
    pub text: I,
    pub start: usize,
}

/// Iterator over grapheme clusters. See [`crate::Segmenter::graphemes`].
#[derive(Debug, Clone)]
pub struct Graphemes<I> {
    rest: I,
    offset: usize,
    state: GraphemeState,
    options: Options,
}

impl<I: Input> Graphemes<I> {
    pub(crate) fn new(input: I, options: Options) -> Self {
        Self {
            rest: input,
            offset: 0,
            state: GraphemeState::default(),
            options,
        }
    }
}

impl<I: Input> Iterator for Graphemes<I> {
    type Item = Grapheme<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let step = grapheme::next(self.rest, self.state, self.options.ambiguous);
        let item = Grapheme {
            text: step.cluster,
            start: self.offset,
            width: step.width,
        };
        self.offset += step.cluster.unit_len();
        self.rest = step.remainder;
        self.state = step.state;
        Some(item)
    }
}

/// Iterator over word segments, including whitespace and punctuation runs.
#[derive(Debug, Clone)]
pub struct Words<I> {
    rest: I,
    offset: usize,
    state: WordState,
}

impl<I: Input> Words<I> {
    pub(crate) fn new(input: I) -> Self {
        Self {
            rest: input,
            offset: 0,
            state: WordState::default(),
        }
    }
}

impl<I: Input> Iterator for Words<I> {
    type Item = Word<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let step = word::next(self.rest, self.state);
        let item = Word {
            text: step.word,
            start: self.offset,
            kind: step.kind,
        };
        self.offset += step.word.unit_len();
        self.rest = step.remainder;
        self.state = step.state;
        Some(item)
    }
}

/// Iterator over sentences.
#[derive(Debug, Clone)]
pub struct Sentences<I> {
    rest: I,
    offset: usize,
    state: SentenceState,
    abbreviations: bool,
}

impl<I: Input> Sentences<I> {
    pub(crate) fn new(input: I, options: Options) -> Self {
        Self {
            rest: input,
            offset: 0,
            state: SentenceState::default(),
            abbreviations: options.abbreviations,
        }
    }
}

impl<I: Input> Iterator for Sentences<I> {
    type Item = Sentence<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let step = sentence::next(self.rest, self.state, self.abbreviations);
        let item = Sentence {
            text: step.sentence,
            start: self.offset,
        };
        self.offset += step.sentence.unit_len();
        self.rest = step.remainder;
        self.state = step.state;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grapheme_offsets_are_byte_offsets() {
        let got: Vec<(usize, &str, u16)> = Graphemes::new("é世!", Options::default())
            .map(|g| (g.start, g.text, g.width))
            .collect();
        assert_eq!(got, vec![(0, "é", 1), (2, "世", 2), (5, "!", 1)]);
    }

    #[test]
    fn word_filter_keeps_words() {
        let got: Vec<&str> = Words::new("Hello, wide world!")
            .filter(Word::is_word)
            .map(|w| w.text)
            .collect();
        assert_eq!(got, vec!["Hello", "wide", "world"]);
    }

    #[test]
    fn sentences_report_offsets() {
        let got: Vec<usize> = Sentences::new("One. Two. Three.", Options::default())
            .map(|s| s.start)
            .collect();
        assert_eq!(got, vec![0, 5, 10]);
    }

    #[test]
    fn utf16_offsets_count_code_units() {
        let text: Vec<u16> = "😀a".encode_utf16().collect();
        let got: Vec<usize> = Graphemes::new(&text[..], Options::default())
            .map(|g| g.start)
            .collect();
        assert_eq!(got, vec![0, 2]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(Graphemes::new("", Options::default()).count(), 0);
        assert_eq!(Words::new("").count(), 0);
        assert_eq!(Sentences::new("", Options::default()).count(), 0);
    }
}
