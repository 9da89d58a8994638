//! Word_Break classes.

use crate::tables;

/// Word_Break property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordBreak {
    #[default]
    Other,
    Cr,
    Lf,
    Newline,
    Extend,
    Zwj,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
}

impl WordBreak {
    /// Classes skipped by WB4 once a non-break character has been seen.
    #[inline]
    pub fn is_ignorable(self) -> bool {
        matches!(self, WordBreak::Extend | WordBreak::Format | WordBreak::Zwj)
    }

    /// ALetter or Hebrew_Letter (the `AHLetter` macro of UAX #29).
    #[inline]
    pub fn is_ah_letter(self) -> bool {
        matches!(self, WordBreak::ALetter | WordBreak::HebrewLetter)
    }
}

/// Look up the word break class of `c`.
pub fn word_break(c: char) -> WordBreak {
    match c {
        '\r' => WordBreak::Cr,
        '\n' => WordBreak::Lf,
        '\u{0B}' | '\u{0C}' => WordBreak::Newline,
        ' ' => WordBreak::WSegSpace,
        '\'' => WordBreak::SingleQuote,
        '"' => WordBreak::DoubleQuote,
        '.' => WordBreak::MidNumLet,
        ':' => WordBreak::MidLetter,
        ',' | ';' => WordBreak::MidNum,
        '_' => WordBreak::ExtendNumLet,
        '0'..='9' => WordBreak::Numeric,
        'a'..='z' | 'A'..='Z' => WordBreak::ALetter,
        '\0'..='\u{7F}' => WordBreak::Other,
        '\u{200D}' => WordBreak::Zwj,
        _ => lookup(c),
    }
}

fn lookup(c: char) -> WordBreak {
    tables::class_of(tables::WORD_BREAK, c).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_classes() {
        assert_eq!(word_break('a'), WordBreak::ALetter);
        assert_eq!(word_break('Z'), WordBreak::ALetter);
        assert_eq!(word_break('7'), WordBreak::Numeric);
        assert_eq!(word_break('.'), WordBreak::MidNumLet);
        assert_eq!(word_break('\''), WordBreak::SingleQuote);
        assert_eq!(word_break(','), WordBreak::MidNum);
        assert_eq!(word_break('_'), WordBreak::ExtendNumLet);
        assert_eq!(word_break(' '), WordBreak::WSegSpace);
        assert_eq!(word_break('\t'), WordBreak::Other);
        assert_eq!(word_break('-'), WordBreak::Other);
    }

    #[test]
    fn letters_beyond_ascii() {
        assert_eq!(word_break('é'), WordBreak::ALetter);
        assert_eq!(word_break('ж'), WordBreak::ALetter);
        assert_eq!(word_break('한'), WordBreak::ALetter);
        assert_eq!(word_break('א'), WordBreak::HebrewLetter);
        assert_eq!(word_break('カ'), WordBreak::Katakana);
        assert_eq!(word_break('ー'), WordBreak::Katakana);
    }

    #[test]
    fn ideographs_and_complex_scripts_are_other() {
        assert_eq!(word_break('世'), WordBreak::Other);
        assert_eq!(word_break('ひ'), WordBreak::Other);
        assert_eq!(word_break('ก'), WordBreak::Other);
    }

    #[test]
    fn ignorables() {
        assert_eq!(word_break('\u{0301}'), WordBreak::Extend);
        assert_eq!(word_break('\u{00AD}'), WordBreak::Format);
        assert_eq!(word_break('\u{200D}'), WordBreak::Zwj);
        assert!(word_break('\u{FE0F}').is_ignorable());
        assert!(!word_break('a').is_ignorable());
    }

    #[test]
    fn myanmar_vowel_signs_extend() {
        assert_eq!(word_break('\u{102B}'), WordBreak::Extend);
        assert_eq!(word_break('\u{1038}'), WordBreak::Extend);
        assert_eq!(word_break('\u{1083}'), WordBreak::Extend);
        assert_eq!(word_break('\u{0E33}'), WordBreak::Other);
    }

    #[test]
    fn iteration_marks_are_letters() {
        assert_eq!(word_break('\u{3005}'), WordBreak::ALetter);
        assert_eq!(word_break('\u{303B}'), WordBreak::ALetter);
    }

    #[test]
    fn prepended_number_signs_are_numeric() {
        assert_eq!(word_break('\u{0600}'), WordBreak::Numeric);
        assert_eq!(word_break('\u{06DD}'), WordBreak::Numeric);
        assert_eq!(word_break('\u{110BD}'), WordBreak::Numeric);
    }

    #[test]
    fn unassigned_in_15_1_is_other() {
        assert_eq!(word_break('\u{105C0}'), WordBreak::Other);
        assert_eq!(word_break('\u{13460}'), WordBreak::Other);
        assert_eq!(word_break('\u{0378}'), WordBreak::Other);
    }

    #[test]
    fn non_ascii_punctuation() {
        assert_eq!(word_break('\u{2019}'), WordBreak::MidNumLet);
        assert_eq!(word_break('\u{00B7}'), WordBreak::MidLetter);
        assert_eq!(word_break('\u{3000}'), WordBreak::WSegSpace);
        assert_eq!(word_break('\u{2028}'), WordBreak::Newline);
        assert_eq!(word_break('\u{0661}'), WordBreak::Numeric);
        assert_eq!(word_break('\u{1F1FA}'), WordBreak::RegionalIndicator);
    }
}
