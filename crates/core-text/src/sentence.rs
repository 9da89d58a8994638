//! Sentence boundaries (UAX #29 rules SB3–SB998).
//!
//! Sentence breaks only ever happen after a paragraph separator (SB4) or after
//! a terminator run `SATerm Close* Sp* ParaSep?` (SB11), so the left context
//! mostly tracks where the scan sits inside such a run. SB8 needs an unbounded
//! lookahead for a lowercase letter; it stops at the first letter, separator
//! or terminator.
//!
//! On top of the standard rules a small abbreviation heuristic keeps `Mr.`,
//! `Dr.`, `St.` or an initial like `J.` from ending a sentence when an
//! uppercase letter follows. A token qualifies when it is a single letter, or
//! an uppercase letter followed by one or two lowercase letters with no vowel.

use core_props::{SentenceBreak, sentence_break};
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
    /// After LF, CR LF or Sep.
    ParaSep,
    Upper,
    Lower,
    ATerm,
    /// (Upper | Lower) ATerm, for SB7.
    LetterATerm,
    ATermClose,
    ATermSp,
    STerm,
    STermClose,
    STermSp,
}

const CONTEXTS: [Context; 13] = [
    Context::Sot,
    Context::Other,
    Context::Cr,
    Context::ParaSep,
    Context::Upper,
    Context::Lower,
    Context::ATerm,
    Context::LetterATerm,
    Context::ATermClose,
    Context::ATermSp,
    Context::STerm,
    Context::STermClose,
    Context::STermSp,
];

impl Context {
    fn is_aterm_run(self) -> bool {
        matches!(
            self,
            Context::ATerm | Context::LetterATerm | Context::ATermClose | Context::ATermSp
        )
    }

    fn is_sterm_run(self) -> bool {
        matches!(self, Context::STerm | Context::STermClose | Context::STermSp)
    }

    /// `SATerm Close*`, where SB9 still applies.
    fn before_spaces(self) -> bool {
        matches!(
            self,
            Context::ATerm
                | Context::LetterATerm
                | Context::ATermClose
                | Context::STerm
                | Context::STermClose
        )
    }

    /// Context after `class`, outside any rule that carries the run along.
    fn entered(self, class: SentenceBreak) -> Context {
        match class {
            SentenceBreak::Cr => Context::Cr,
            SentenceBreak::Lf | SentenceBreak::Sep => Context::ParaSep,
            SentenceBreak::ATerm if matches!(self, Context::Upper | Context::Lower) => {
                Context::LetterATerm
            }
            SentenceBreak::ATerm => Context::ATerm,
            SentenceBreak::STerm => Context::STerm,
            SentenceBreak::Upper => Context::Upper,
            SentenceBreak::Lower => Context::Lower,
            _ => Context::Other,
        }
    }
}

/// The letters immediately before the current position, for the
/// abbreviation heuristic. Lengths saturate at 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
struct Token {
    len: u8,
    capital: bool,
    lower_tail: bool,
    vowel: bool,
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

impl Token {
    fn push(self, c: char, class: SentenceBreak) -> Token {
        let upper = class == SentenceBreak::Upper;
        match class {
            SentenceBreak::Upper | SentenceBreak::Lower if self.len == 0 => Token {
                len: 1,
                capital: upper,
                lower_tail: true,
                vowel: is_vowel(c),
            },
            SentenceBreak::Upper | SentenceBreak::Lower => Token {
                len: (self.len + 1).min(4),
                capital: self.capital,
                lower_tail: self.lower_tail && !upper,
                vowel: self.vowel || is_vowel(c),
            },
            _ => Token::default(),
        }
    }

    fn is_abbreviation(self) -> bool {
        self.len == 1
            || (self.capital && self.lower_tail && (2..=3).contains(&self.len) && !self.vowel)
    }

    fn to_bits(self) -> u32 {
        u32::from(self.len)
            | u32::from(self.capital) << 3
            | u32::from(self.lower_tail) << 4
            | u32::from(self.vowel) << 5
    }

    fn from_bits(bits: u32) -> Option<Token> {
        let len = (bits & 0x7) as u8;
        (len <= 4).then_some(Token {
            len,
            capital: bits & 0x8 != 0,
            lower_tail: bits & 0x10 != 0,
            vowel: bits & 0x20 != 0,
        })
    }
}

/// Continuation state of the sentence engine. `Default` is start of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SentenceState {
    context: Context,
    token: Token,
    /// The terminator run started with an abbreviation's full stop.
    abbreviation: bool,
    /// SB8 already failed inside the current ATerm run. The lookahead stops
    /// at the same unit from anywhere in the run, so it is not repeated.
    no_lower: bool,
}

/// SB8: does a Lower come before any OLetter, Upper, ParaSep or SATerm,
/// starting at `at`?
fn lower_follows<I: Input>(input: I, at: usize, mode: Mode) -> Result<bool, NeedMore> {
    let stop = first_unskipped(input, at, mode, |unit| match unit {
        Unit::Char(c) => !matches!(
            sentence_break(c),
            SentenceBreak::OLetter
                | SentenceBreak::Upper
                | SentenceBreak::Lower
                | SentenceBreak::Sep
                | SentenceBreak::Cr
                | SentenceBreak::Lf
                | SentenceBreak::ATerm
                | SentenceBreak::STerm
        ),
        _ => true,
    });
    match stop {
        Ok(found) => {
            let lower =
                matches!(found, Some(Unit::Char(c)) if sentence_break(c) == SentenceBreak::Lower);
            trace!(target: "text.sentence", at, lower, "lowercase lookahead");
            Ok(lower)
        }
        Err(NeedMore) => {
            trace!(target: "text.sentence", at, "lowercase lookahead reaches end of chunk");
            Err(NeedMore)
        }
    }
}

impl SentenceState {
    pub(crate) const BITS: u32 = 12;

    /// Apply `unit`, which starts at `at` in `input`. Returns the new state
    /// and whether a boundary precedes the unit.
    pub(crate) fn advance<I: Input>(
        self,
        unit: Unit,
        input: I,
        at: usize,
        mode: Mode,
        abbreviations: bool,
    ) -> Result<(SentenceState, bool), NeedMore> {
        use Context as C;
        use SentenceBreak as S;

        let (c, class) = match unit {
            Unit::Char(c) => (c, sentence_break(c)),
            // Malformed data reads as an unknown symbol.
            _ => ('\u{FFFD}', S::Other),
        };
        let ctx = self.context;
        let token = self.token.push(c, class);
        let plain = |context: Context| SentenceState {
            context,
            token,
            abbreviation: false,
            no_lower: false,
        };

        // SB1
        if ctx == C::Sot {
            return Ok((self.enter(class, token, abbreviations), true));
        }
        // SB3
        if ctx == C::Cr && class == S::Lf {
            return Ok((plain(C::ParaSep), false));
        }
        // SB4
        if matches!(ctx, C::Cr | C::ParaSep) {
            return Ok((self.enter(class, token, abbreviations), true));
        }
        // SB5
        if class.is_ignorable() {
            return Ok((self, false));
        }
        let aterm = ctx.is_aterm_run();
        if !aterm && !ctx.is_sterm_run() {
            // SB998
            return Ok((self.enter(class, token, abbreviations), false));
        }
        let run = |context: Context| SentenceState {
            context,
            token,
            abbreviation: self.abbreviation,
            no_lower: aterm,
        };

        // SB6
        if matches!(ctx, C::ATerm | C::LetterATerm) && class == S::Numeric {
            return Ok((plain(C::Other), false));
        }
        // SB7
        if ctx == C::LetterATerm && class == S::Upper {
            return Ok((plain(C::Upper), false));
        }
        // SB8
        if aterm && !self.no_lower && lower_follows(input, at, mode)? {
            return Ok((plain(ctx.entered(class)), false));
        }
        // SB8a
        if matches!(class, S::SContinue | S::ATerm | S::STerm) {
            return Ok((plain(ctx.entered(class)), false));
        }
        // SB9
        if ctx.before_spaces() && class == S::Close {
            let context = if aterm { C::ATermClose } else { C::STermClose };
            return Ok((run(context), false));
        }
        // SB9, SB10
        if class == S::Sp {
            let context = if aterm { C::ATermSp } else { C::STermSp };
            return Ok((run(context), false));
        }
        if class.is_para_sep() {
            return Ok((plain(ctx.entered(class)), false));
        }
        if aterm && self.abbreviation && class == S::Upper {
            trace!(target: "text.sentence", at, "abbreviation keeps sentence open");
            return Ok((plain(C::Upper), false));
        }
        // SB11
        Ok((self.enter(class, token, abbreviations), true))
    }

    fn enter(self, class: SentenceBreak, token: Token, abbreviations: bool) -> SentenceState {
        let context = self.context.entered(class);
        SentenceState {
            context,
            token,
            abbreviation: abbreviations
                && matches!(context, Context::ATerm | Context::LetterATerm)
                && self.token.is_abbreviation(),
            no_lower: false,
        }
    }

    /// Whether a boundary follows regardless of the next unit.
    pub(crate) fn breaks_after(self) -> bool {
        self.context == Context::ParaSep
    }

    /// Pack into the low [`Self::BITS`] bits of a `u32`.
    pub fn to_bits(self) -> u32 {
        self.context as u32
            | self.token.to_bits() << 4
            | u32::from(self.abbreviation) << 10
            | u32::from(self.no_lower) << 11
    }

    /// Inverse of [`to_bits`](Self::to_bits).
    pub fn from_bits(bits: u32) -> Result<Self, StateError> {
        let invalid = StateError::InvalidBits {
            engine: "sentence",
            bits,
        };
        if bits >> Self::BITS != 0 {
            return Err(invalid);
        }
        let context = CONTEXTS.get((bits & 0xF) as usize).copied().ok_or(invalid)?;
        let token = Token::from_bits((bits >> 4) & 0x3F).ok_or(invalid)?;
        Ok(Self {
            context,
            token,
            abbreviation: bits & (1 << 10) != 0,
            no_lower: bits & (1 << 11) != 0,
        })
    }
}

/// Result of one sentence step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceStep<I> {
    pub sentence: I,
    pub remainder: I,
    pub state: SentenceState,
}

pub(crate) fn scan<I: Input>(
    input: I,
    state: SentenceState,
    abbreviations: bool,
    mode: Mode,
) -> Result<SentenceStep<I>, NeedMore> {
    let mut current = state;
    let mut at = 0;
    while at < input.unit_len() {
        let decoded = unit_at(input, at, mode)?;
        let (next, boundary) = current.advance(decoded.unit, input, at, mode, abbreviations)?;
        if boundary && at > 0 {
            break;
        }
        current = next;
        at += decoded.len;
    }
    if mode == Mode::Partial && at == input.unit_len() && (at == 0 || !current.breaks_after()) {
        trace!(target: "text.sentence", units = at, "sentence reaches end of chunk");
        return Err(NeedMore);
    }
    let (sentence, remainder) = input.split_at(at);
    Ok(SentenceStep {
        sentence,
        remainder,
        state: current,
    })
}

/// Final-mode step: the end of `input` is the end of the text.
pub(crate) fn next<I: Input>(
    input: I,
    state: SentenceState,
    abbreviations: bool,
) -> SentenceStep<I> {
    match scan(input, state, abbreviations, Mode::Final) {
        Ok(step) => step,
        Err(NeedMore) => {
            let (sentence, remainder) = input.split_at(input.unit_len());
            SentenceStep {
                sentence,
                remainder,
                state,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sentences_with(s: &str, abbreviations: bool) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = SentenceState::default();
        while !rest.is_empty() {
            let step = next(rest, state, abbreviations);
            out.push(step.sentence);
            rest = step.remainder;
            state = step.state;
        }
        out
    }

    fn sentences(s: &str) -> Vec<&str> {
        sentences_with(s, true)
    }

    #[test]
    fn empty_is_no_sentence() {
        assert!(sentences("").is_empty());
    }

    #[test]
    fn terminators_absorb_spaces() {
        assert_eq!(
            sentences("Hello! How are you? I'm fine."),
            vec!["Hello! ", "How are you? ", "I'm fine."]
        );
    }

    #[test]
    fn multiple_terminators_are_one_boundary() {
        assert_eq!(
            sentences("What?! No way... Really?"),
            vec!["What?! ", "No way... ", "Really?"]
        );
    }

    #[test]
    fn decimal_number_does_not_break() {
        assert_eq!(
            sentences("This is sentence 1.0. And this is sentence two."),
            vec!["This is sentence 1.0. ", "And this is sentence two."]
        );
    }

    #[test]
    fn lowercase_continuation() {
        assert_eq!(sentences("E.g. this is an example."), vec!["E.g. this is an example."]);
        assert_eq!(
            sentences("Multiple...   spaces!    After   punctuation."),
            vec!["Multiple...   spaces!    ", "After   punctuation."]
        );
    }

    #[test]
    fn abbreviations() {
        assert_eq!(
            sentences("Mr. Smith went to the U.S.A. yesterday."),
            vec!["Mr. Smith went to the U.S.A. yesterday."]
        );
        assert_eq!(sentences("Dr. Jones vs. Dr. Smith."), vec!["Dr. Jones vs. ", "Dr. Smith."]);
        assert_eq!(sentences("I met J. Doe."), vec!["I met J. Doe."]);
        // Ordinary words still end sentences.
        assert_eq!(sentences("See you. Bye."), vec!["See you. ", "Bye."]);
    }

    #[test]
    fn abbreviations_can_be_disabled() {
        assert_eq!(
            sentences_with("Mr. Smith left.", false),
            vec!["Mr. ", "Smith left."]
        );
    }

    #[test]
    fn closing_punctuation_stays_with_sentence() {
        assert_eq!(
            sentences("Test (with parentheses). Next sentence."),
            vec!["Test (with parentheses). ", "Next sentence."]
        );
        assert_eq!(sentences("He said \"Go.\" Then left."), vec!["He said \"Go.\" ", "Then left."]);
    }

    #[test]
    fn paragraph_separators() {
        assert_eq!(
            sentences("End.\n\nNew paragraph."),
            vec!["End.\n", "\n", "New paragraph."]
        );
        assert_eq!(sentences("a\r\nb"), vec!["a\r\n", "b"]);
        assert_eq!(sentences("No punctuation here"), vec!["No punctuation here"]);
    }

    #[test]
    fn partial_defers_until_decided() {
        let state = SentenceState::default();
        assert!(scan("Hi. ", state, true, Mode::Partial).is_err());
        assert_eq!(scan("Hi. Yo", state, true, Mode::Partial).map(|s| s.sentence), Ok("Hi. "));
        assert_eq!(scan("a\n", state, true, Mode::Partial).map(|s| s.sentence), Ok("a\n"));
    }

    #[test]
    fn long_closer_run_scans_once() {
        let text = format!("Hi.{} Yo", ")".repeat(20_000));
        assert_eq!(sentences(&text), vec![&text[..text.len() - 2], "Yo"]);
        let lower = format!("Hi.{} yo", ")".repeat(20_000));
        assert_eq!(sentences(&lower), vec![lower.as_str()]);
    }

    #[test]
    fn closer_run_fed_by_character() {
        let text = "etc.))) Next";
        let mut got = Vec::new();
        let mut state = SentenceState::default();
        let mut pending = String::new();
        for c in text.chars() {
            pending.push(c);
            while let Ok(step) = scan(pending.as_str(), state, true, Mode::Partial) {
                got.push(step.sentence.to_string());
                state = step.state;
                pending = step.remainder.to_string();
            }
        }
        got.push(next(pending.as_str(), state, true).sentence.to_string());
        assert_eq!(got, vec!["etc.))) ", "Next"]);
        assert_eq!(got, sentences(text));
    }

    #[test]
    fn bits_round_trip() {
        let text = "Mr. Smith said \"Hi.\" Then? No";
        let mut state = SentenceState::default();
        let mut at = 0;
        while at < text.len() {
            let d = text.decode_at(at);
            state = state.advance(d.unit, text, at, Mode::Final, true).map(|(s, _)| s).unwrap();
            assert_eq!(SentenceState::from_bits(state.to_bits()), Ok(state));
            at += d.len;
        }
        assert!(SentenceState::from_bits(1 << 12).is_err());
        assert!(SentenceState::from_bits(0xF).is_err());
    }
}
