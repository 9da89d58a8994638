//! East_Asian_Width classes.
//!
//! Fullwidth, Halfwidth, Narrow and Ambiguous come from explicit tables. Wide
//! is taken from `unicode-width`: a character two columns wide outside CJK
//! mode is W.

use unicode_width::UnicodeWidthChar;

use crate::tables::{self, contains};

/// East_Asian_Width property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EastAsianWidth {
    #[default]
    Neutral,
    Narrow,
    Halfwidth,
    Ambiguous,
    Wide,
    Fullwidth,
}

impl EastAsianWidth {
    /// W or F.
    #[inline]
    pub fn is_wide(self) -> bool {
        matches!(self, EastAsianWidth::Wide | EastAsianWidth::Fullwidth)
    }
}

/// Look up the East Asian Width class of `c`.
pub fn east_asian_width(c: char) -> EastAsianWidth {
    match c {
        ' '..='~' => EastAsianWidth::Narrow,
        '\0'..='\u{7F}' => EastAsianWidth::Neutral,
        _ => lookup(c),
    }
}

fn lookup(c: char) -> EastAsianWidth {
    if contains(tables::EAW_FULLWIDTH, c) {
        return EastAsianWidth::Fullwidth;
    }
    if contains(tables::EAW_HALFWIDTH, c) {
        return EastAsianWidth::Halfwidth;
    }
    if contains(tables::EAW_NARROW, c) {
        return EastAsianWidth::Narrow;
    }
    if c.width() == Some(2) {
        return EastAsianWidth::Wide;
    }
    if contains(tables::EAW_AMBIGUOUS, c) {
        EastAsianWidth::Ambiguous
    } else {
        EastAsianWidth::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii() {
        assert_eq!(east_asian_width('a'), EastAsianWidth::Narrow);
        assert_eq!(east_asian_width('\n'), EastAsianWidth::Neutral);
    }

    #[test]
    fn cjk_and_fullwidth() {
        assert_eq!(east_asian_width('世'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('가'), EastAsianWidth::Wide);
        assert_eq!(east_asian_width('Ａ'), EastAsianWidth::Fullwidth);
        assert_eq!(east_asian_width('\u{3000}'), EastAsianWidth::Fullwidth);
        assert_eq!(east_asian_width('ｶ'), EastAsianWidth::Halfwidth);
        assert!(east_asian_width('😀').is_wide());
    }

    #[test]
    fn ambiguous_symbols() {
        assert_eq!(east_asian_width('¿'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('±'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('\u{2018}'), EastAsianWidth::Ambiguous);
        assert_eq!(east_asian_width('\u{FFFD}'), EastAsianWidth::Ambiguous);
    }

    #[test]
    fn ambiguous_letters() {
        for c in ['é', 'ü', 'ā', 'Æ', 'α', 'Ω', 'ж', 'Я', 'ё'] {
            assert_eq!(east_asian_width(c), EastAsianWidth::Ambiguous, "{c}");
        }
    }

    #[test]
    fn neutral_default() {
        assert_eq!(east_asian_width('ç'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('ع'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('ћ'), EastAsianWidth::Neutral);
        assert_eq!(east_asian_width('\u{0378}'), EastAsianWidth::Neutral);
    }
}
