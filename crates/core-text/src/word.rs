//! Word boundaries (UAX #29 rules WB3–WB999).
//!
//! Like the grapheme engine, the word engine threads a left context between
//! units. Three rule pairs (WB6/7, WB7b/c, WB11/12) need one character of
//! lookahead past the candidate boundary; when the lookahead runs into the end
//! of a partial chunk the step is deferred instead of guessed.

use core_props::{SentenceBreak, WordBreak, is_extended_pictographic, sentence_break, word_break};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::StateError;
use crate::input::{Input, Mode, NeedMore, Unit, first_unskipped, unit_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
enum Context {
    #[default]
    Sot,
    Other,
    Cr,
    /// LF, CR LF or Newline.
    Newline,
    /// A WSegSpace with nothing ignorable after it.
    WSegSpace,
    ALetter,
    HebrewLetter,
    Numeric,
    Katakana,
    ExtendNumLet,
    RiOdd,
    /// AHLetter (MidLetter | MidNumLetQ), confirmed by lookahead (WB6).
    MidLetterJoin,
    /// Numeric (MidNum | MidNumLetQ), confirmed by lookahead (WB12).
    MidNumJoin,
    /// Hebrew_Letter Double_Quote, confirmed by lookahead (WB7b).
    HebrewQuoteJoin,
    Malformed,
}

const CONTEXTS: [Context; 15] = [
    Context::Sot,
    Context::Other,
    Context::Cr,
    Context::Newline,
    Context::WSegSpace,
    Context::ALetter,
    Context::HebrewLetter,
    Context::Numeric,
    Context::Katakana,
    Context::ExtendNumLet,
    Context::RiOdd,
    Context::MidLetterJoin,
    Context::MidNumJoin,
    Context::HebrewQuoteJoin,
    Context::Malformed,
];

fn entered(class: WordBreak) -> Context {
    match class {
        WordBreak::Cr => Context::Cr,
        WordBreak::Lf | WordBreak::Newline => Context::Newline,
        WordBreak::WSegSpace => Context::WSegSpace,
        WordBreak::ALetter => Context::ALetter,
        WordBreak::HebrewLetter => Context::HebrewLetter,
        WordBreak::Numeric => Context::Numeric,
        WordBreak::Katakana => Context::Katakana,
        WordBreak::ExtendNumLet => Context::ExtendNumLet,
        WordBreak::RegionalIndicator => Context::RiOdd,
        _ => Context::Other,
    }
}

/// Continuation state of the word engine. `Default` is start of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WordState {
    context: Context,
    /// The previous unit was a ZWJ (WB3c looks at raw adjacency).
    zwj: bool,
}

/// Next non-ignorable class after `at`, skipping Extend, Format and ZWJ.
fn lookahead<I: Input>(input: I, at: usize, mode: Mode) -> Result<Option<WordBreak>, NeedMore> {
    let next = first_unskipped(input, at, mode, |unit| match unit {
        Unit::Char(c) => word_break(c).is_ignorable(),
        _ => false,
    });
    if next.is_err() {
        trace!(target: "text.word", at, "lookahead reaches end of chunk");
    }
    Ok(next?.map(|unit| match unit {
        Unit::Char(c) => word_break(c),
        _ => WordBreak::Other,
    }))
}

impl WordState {
    pub(crate) const BITS: u32 = 5;

    /// Apply `unit`, which ends at `next_at` in `input`. Returns the new state
    /// and whether a boundary precedes the unit.
    pub(crate) fn advance<I: Input>(
        self,
        unit: Unit,
        input: I,
        next_at: usize,
        mode: Mode,
    ) -> Result<(WordState, bool), NeedMore> {
        use Context as C;
        use WordBreak as W;

        let Unit::Char(c) = unit else {
            let isolated = WordState {
                context: C::Malformed,
                zwj: false,
            };
            return Ok((isolated, true));
        };
        let class = word_break(c);
        let zwj = class == W::Zwj;
        let enter = |context| WordState { context, zwj };
        let ctx = self.context;

        if ctx == C::Sot {
            return Ok((enter(entered(class)), true));
        }
        // WB3
        if ctx == C::Cr && class == W::Lf {
            return Ok((enter(C::Newline), false));
        }
        // WB3a, and malformed units stand alone
        if matches!(ctx, C::Cr | C::Newline | C::Malformed) {
            return Ok((enter(entered(class)), true));
        }
        // WB3b
        if matches!(class, W::Cr | W::Lf | W::Newline) {
            return Ok((enter(entered(class)), true));
        }
        // WB3c
        if self.zwj && is_extended_pictographic(c) {
            return Ok((enter(entered(class)), false));
        }
        // WB3d
        if ctx == C::WSegSpace && class == W::WSegSpace {
            return Ok((enter(C::WSegSpace), false));
        }
        // WB4
        if class.is_ignorable() {
            let context = if ctx == C::WSegSpace { C::Other } else { ctx };
            return Ok((enter(context), false));
        }

        let (context, boundary) = match (ctx, class) {
            // WB5
            (C::ALetter | C::HebrewLetter, W::ALetter | W::HebrewLetter) => (entered(class), false),
            (C::ALetter | C::HebrewLetter, W::MidLetter | W::MidNumLet | W::SingleQuote) => {
                let after = lookahead(input, next_at, mode)?;
                if after.is_some_and(WordBreak::is_ah_letter) {
                    // WB6
                    (C::MidLetterJoin, false)
                } else if ctx == C::HebrewLetter && class == W::SingleQuote {
                    // WB7a
                    (C::Other, false)
                } else {
                    (entered(class), true)
                }
            }
            // WB7
            (C::MidLetterJoin, W::ALetter | W::HebrewLetter) => (entered(class), false),
            (C::HebrewLetter, W::DoubleQuote) => {
                if lookahead(input, next_at, mode)? == Some(W::HebrewLetter) {
                    // WB7b
                    (C::HebrewQuoteJoin, false)
                } else {
                    (entered(class), true)
                }
            }
            // WB7c
            (C::HebrewQuoteJoin, W::HebrewLetter) => (entered(class), false),
            // WB8, WB10
            (C::Numeric, W::Numeric | W::ALetter | W::HebrewLetter) => (entered(class), false),
            // WB9
            (C::ALetter | C::HebrewLetter, W::Numeric) => (entered(class), false),
            // WB11
            (C::MidNumJoin, W::Numeric) => (entered(class), false),
            (C::Numeric, W::MidNum | W::MidNumLet | W::SingleQuote) => {
                if lookahead(input, next_at, mode)? == Some(W::Numeric) {
                    // WB12
                    (C::MidNumJoin, false)
                } else {
                    (entered(class), true)
                }
            }
            // WB13
            (C::Katakana, W::Katakana) => (entered(class), false),
            // WB13a
            (
                C::ALetter | C::HebrewLetter | C::Numeric | C::Katakana | C::ExtendNumLet,
                W::ExtendNumLet,
            ) => (entered(class), false),
            // WB13b
            (C::ExtendNumLet, W::ALetter | W::HebrewLetter | W::Numeric | W::Katakana) => {
                (entered(class), false)
            }
            // WB15, WB16
            (C::RiOdd, W::RegionalIndicator) => (C::Other, false),
            // WB999
            _ => (entered(class), true),
        };
        Ok((enter(context), boundary))
    }

    /// Whether a boundary follows regardless of the next unit.
    pub(crate) fn breaks_after(self) -> bool {
        matches!(self.context, Context::Newline | Context::Malformed)
    }

    /// Pack into the low [`Self::BITS`] bits of a `u32`.
    pub fn to_bits(self) -> u32 {
        self.context as u32 | u32::from(self.zwj) << 4
    }

    /// Inverse of [`to_bits`](Self::to_bits).
    pub fn from_bits(bits: u32) -> Result<Self, StateError> {
        let invalid = StateError::InvalidBits { engine: "word", bits };
        if bits >> Self::BITS != 0 {
            return Err(invalid);
        }
        let context = CONTEXTS.get((bits & 0xF) as usize).copied().ok_or(invalid)?;
        Ok(Self {
            context,
            zwj: bits & 0x10 != 0,
        })
    }
}

/// Coarse label of a word segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordKind {
    /// Contains a letter, digit or ideograph.
    Word,
    /// Only whitespace, including line breaks.
    Whitespace,
    /// Anything else: punctuation, symbols, emoji, malformed data.
    Punctuation,
}

impl WordKind {
    pub fn is_word(&self) -> bool {
        *self == WordKind::Word
    }
}

#[derive(Debug, Clone, Copy)]
struct KindTracker {
    alphanumeric: bool,
    whitespace: bool,
}

impl KindTracker {
    fn new() -> Self {
        Self {
            alphanumeric: false,
            whitespace: true,
        }
    }

    fn push(&mut self, unit: Unit) {
        match unit {
            Unit::Char(c) => {
                let class = sentence_break(c);
                self.alphanumeric |= matches!(
                    class,
                    SentenceBreak::Upper
                        | SentenceBreak::Lower
                        | SentenceBreak::OLetter
                        | SentenceBreak::Numeric
                );
                // Sp, Sep, CR and LF together are exactly White_Space.
                self.whitespace &= matches!(
                    class,
                    SentenceBreak::Sp | SentenceBreak::Sep | SentenceBreak::Cr | SentenceBreak::Lf
                );
            }
            _ => self.whitespace = false,
        }
    }

    fn finish(self) -> WordKind {
        if self.alphanumeric {
            WordKind::Word
        } else if self.whitespace {
            WordKind::Whitespace
        } else {
            WordKind::Punctuation
        }
    }
}

/// Result of one word step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordStep<I> {
    pub word: I,
    pub remainder: I,
    pub kind: WordKind,
    pub state: WordState,
}

pub(crate) fn scan<I: Input>(
    input: I,
    state: WordState,
    mode: Mode,
) -> Result<WordStep<I>, NeedMore> {
    let mut current = state;
    let mut kind = KindTracker::new();
    let mut at = 0;
    while at < input.unit_len() {
        let decoded = unit_at(input, at, mode)?;
        let (next, boundary) = current.advance(decoded.unit, input, at + decoded.len, mode)?;
        if boundary && at > 0 {
            break;
        }
        kind.push(decoded.unit);
        current = next;
        at += decoded.len;
    }
    if mode == Mode::Partial && at == input.unit_len() && (at == 0 || !current.breaks_after()) {
        trace!(target: "text.word", units = at, "word reaches end of chunk");
        return Err(NeedMore);
    }
    let (word, remainder) = input.split_at(at);
    Ok(WordStep {
        word,
        remainder,
        kind: kind.finish(),
        state: current,
    })
}

/// Final-mode step: the end of `input` is the end of the text.
pub(crate) fn next<I: Input>(input: I, state: WordState) -> WordStep<I> {
    match scan(input, state, Mode::Final) {
        Ok(step) => step,
        Err(NeedMore) => {
            let (word, remainder) = input.split_at(input.unit_len());
            WordStep {
                word,
                remainder,
                kind: WordKind::Punctuation,
                state,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(s: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = WordState::default();
        while !rest.is_empty() {
            let step = next(rest, state);
            out.push(step.word);
            rest = step.remainder;
            state = step.state;
        }
        out
    }

    #[test]
    fn simple_sentence() {
        assert_eq!(words("Hello, world!"), vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn numbers_with_separators() {
        assert_eq!(words("3.14 1,000"), vec!["3.14", " ", "1,000"]);
        assert_eq!(words("Test 123. More"), vec!["Test", " ", "123", ".", " ", "More"]);
    }

    #[test]
    fn mid_letter_needs_letter_after() {
        assert_eq!(words("can't"), vec!["can't"]);
        assert_eq!(words("e.g."), vec!["e.g", "."]);
        assert_eq!(words("U.S.A."), vec!["U.S.A", "."]);
        assert_eq!(words("a.1"), vec!["a", ".", "1"]);
        assert_eq!(words("a:"), vec!["a", ":"]);
    }

    #[test]
    fn hyphen_and_at_sign_split() {
        assert_eq!(words("word-with"), vec!["word", "-", "with"]);
        assert_eq!(words("user@example.com"), vec!["user", "@", "example.com"]);
    }

    #[test]
    fn whitespace_runs_and_newlines() {
        assert_eq!(words("   "), vec!["   "]);
        assert_eq!(words("Hello\nWorld"), vec!["Hello", "\n", "World"]);
        assert_eq!(words("a\r\n\r\nb"), vec!["a", "\r\n", "\r\n", "b"]);
    }

    #[test]
    fn extend_and_format_are_ignored() {
        assert_eq!(words("cafe\u{0301} x"), vec!["cafe\u{0301}", " ", "x"]);
        assert_eq!(words("a\u{00AD}b"), vec!["a\u{00AD}b"]);
        // A mark after whitespace stops further space joining.
        assert_eq!(words(" \u{0301} "), vec![" \u{0301}", " "]);
    }

    #[test]
    fn ideographs_split_per_char() {
        assert_eq!(words("世界"), vec!["世", "界"]);
        assert_eq!(words("カタカナ"), vec!["カタカナ"]);
    }

    #[test]
    fn hebrew_quotes() {
        assert_eq!(words("א\"ב"), vec!["א\"ב"]);
        assert_eq!(words("א'"), vec!["א'"]);
        assert_eq!(words("א\""), vec!["א", "\""]);
    }

    #[test]
    fn extend_num_let_joins() {
        assert_eq!(words("foo_bar 1_000"), vec!["foo_bar", " ", "1_000"]);
    }

    #[test]
    fn emoji_zwj_and_flags() {
        assert_eq!(words("👩\u{200D}👩"), vec!["👩\u{200D}👩"]);
        assert_eq!(words("🇩🇪🇫🇷"), vec!["🇩🇪", "🇫🇷"]);
    }

    #[test]
    fn kinds() {
        let mut rest = "Hi, 42 !";
        let mut state = WordState::default();
        let mut kinds = Vec::new();
        while !rest.is_empty() {
            let step = next(rest, state);
            kinds.push(step.kind);
            rest = step.remainder;
            state = step.state;
        }
        assert_eq!(
            kinds,
            vec![
                WordKind::Word,
                WordKind::Punctuation,
                WordKind::Whitespace,
                WordKind::Word,
                WordKind::Whitespace,
                WordKind::Punctuation,
            ]
        );
    }

    #[test]
    fn kinds_beyond_ascii() {
        let kind = |s: &str| next(s, WordState::default()).kind;
        assert_eq!(kind("\u{65E5}"), WordKind::Word);
        assert_eq!(kind("\u{3072}"), WordKind::Word);
        assert_eq!(kind("\u{0661}\u{0662}"), WordKind::Word);
        assert_eq!(kind("\u{3000}"), WordKind::Whitespace);
        assert_eq!(kind("\u{2029}"), WordKind::Whitespace);
        assert_eq!(kind("\u{200B}"), WordKind::Punctuation);
        assert_eq!(kind("\u{105C0}"), WordKind::Punctuation);
    }

    #[test]
    fn partial_defers_on_lookahead() {
        let state = WordState::default();
        // "a." could still become "a.b".
        assert!(scan("a.", state, Mode::Partial).is_err());
        assert_eq!(scan("a. ", state, Mode::Partial).map(|s| s.word), Ok("a"));
        assert!(scan("ab", state, Mode::Partial).is_err());
        assert_eq!(scan("ab ", state, Mode::Partial).map(|s| s.word), Ok("ab"));
        assert_eq!(scan("\n", state, Mode::Partial).map(|s| s.word), Ok("\n"));
    }

    #[test]
    fn bits_round_trip() {
        for bits in 0..(1u32 << WordState::BITS) {
            if let Ok(state) = WordState::from_bits(bits) {
                assert_eq!(state.to_bits(), bits);
            }
        }
        assert!(WordState::from_bits(0xF).is_err());
        assert!(WordState::from_bits(1 << 5).is_err());
    }
}
