//! Sentence_Break classes.

use crate::tables;

/// Sentence_Break property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SentenceBreak {
    #[default]
    Other,
    Cr,
    Lf,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    STerm,
    Close,
    SContinue,
}

impl SentenceBreak {
    /// Sep, CR or LF (`ParaSep` in UAX #29).
    #[inline]
    pub fn is_para_sep(self) -> bool {
        matches!(self, SentenceBreak::Sep | SentenceBreak::Cr | SentenceBreak::Lf)
    }

    /// ATerm or STerm (`SATerm` in UAX #29).
    #[inline]
    pub fn is_terminator(self) -> bool {
        matches!(self, SentenceBreak::ATerm | SentenceBreak::STerm)
    }

    /// Classes skipped by SB5.
    #[inline]
    pub fn is_ignorable(self) -> bool {
        matches!(self, SentenceBreak::Extend | SentenceBreak::Format)
    }
}

/// Look up the sentence break class of `c`.
pub fn sentence_break(c: char) -> SentenceBreak {
    match c {
        '\r' => SentenceBreak::Cr,
        '\n' => SentenceBreak::Lf,
        '\t' | '\u{0B}' | '\u{0C}' | ' ' => SentenceBreak::Sp,
        '.' => SentenceBreak::ATerm,
        '!' | '?' => SentenceBreak::STerm,
        '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}' => SentenceBreak::Close,
        ',' | '-' | ':' => SentenceBreak::SContinue,
        'A'..='Z' => SentenceBreak::Upper,
        'a'..='z' => SentenceBreak::Lower,
        '0'..='9' => SentenceBreak::Numeric,
        '\0'..='\u{7F}' => SentenceBreak::Other,
        _ => lookup(c),
    }
}

fn lookup(c: char) -> SentenceBreak {
    tables::class_of(tables::SENTENCE_BREAK, c).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_classes() {
        assert_eq!(sentence_break('.'), SentenceBreak::ATerm);
        assert_eq!(sentence_break('?'), SentenceBreak::STerm);
        assert_eq!(sentence_break(')'), SentenceBreak::Close);
        assert_eq!(sentence_break(' '), SentenceBreak::Sp);
        assert_eq!(sentence_break(','), SentenceBreak::SContinue);
        assert_eq!(sentence_break('M'), SentenceBreak::Upper);
        assert_eq!(sentence_break('r'), SentenceBreak::Lower);
        assert_eq!(sentence_break('4'), SentenceBreak::Numeric);
        assert_eq!(sentence_break('#'), SentenceBreak::Other);
    }

    #[test]
    fn non_ascii_classes() {
        assert_eq!(sentence_break('É'), SentenceBreak::Upper);
        assert_eq!(sentence_break('ß'), SentenceBreak::Lower);
        assert_eq!(sentence_break('\u{01C5}'), SentenceBreak::Upper);
        assert_eq!(sentence_break('世'), SentenceBreak::OLetter);
        assert_eq!(sentence_break('。'), SentenceBreak::STerm);
        assert_eq!(sentence_break('\u{201D}'), SentenceBreak::Close);
        assert_eq!(sentence_break('\u{00A0}'), SentenceBreak::Sp);
        assert_eq!(sentence_break('\u{2029}'), SentenceBreak::Sep);
        assert_eq!(sentence_break('\u{0301}'), SentenceBreak::Extend);
        assert_eq!(sentence_break('\u{00AD}'), SentenceBreak::Format);
    }

    #[test]
    fn modifier_letters_are_other() {
        assert_eq!(sentence_break('\u{02C2}'), SentenceBreak::Other);
        assert_eq!(sentence_break('\u{055A}'), SentenceBreak::Other);
        assert_eq!(sentence_break('\u{3005}'), SentenceBreak::OLetter);
    }

    #[test]
    fn unassigned_in_15_1_is_other() {
        assert_eq!(sentence_break('\u{13460}'), SentenceBreak::Other);
        assert_eq!(sentence_break('\u{16100}'), SentenceBreak::Other);
        assert_eq!(sentence_break('\u{18CFF}'), SentenceBreak::Other);
    }

    #[test]
    fn helpers() {
        assert!(SentenceBreak::Lf.is_para_sep());
        assert!(SentenceBreak::ATerm.is_terminator());
        assert!(!SentenceBreak::Close.is_terminator());
        assert!(SentenceBreak::Format.is_ignorable());
    }
}
