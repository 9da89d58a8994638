//! Grapheme_Cluster_Break classes plus the Extended_Pictographic and
//! Indic_Conjunct_Break auxiliaries consumed by GB9c and GB11.

use crate::tables::{self, contains};

const HANGUL_SYLLABLE_FIRST: u32 = 0xAC00;
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;
const HANGUL_T_COUNT: u32 = 28;

/// Grapheme_Cluster_Break property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphemeBreak {
    #[default]
    Other,
    Cr,
    Lf,
    Control,
    Extend,
    Zwj,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    Lv,
    Lvt,
    /// Not a Grapheme_Cluster_Break value; folded in because GB11 needs it
    /// and the two sets never overlap.
    ExtendedPictographic,
}

/// Indic_Conjunct_Break property value (absent means `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicConjunctBreak {
    Consonant,
    Linker,
    Extend,
}

/// Look up the grapheme break class of `c`.
pub fn grapheme_break(c: char) -> GraphemeBreak {
    match c {
        '\r' => GraphemeBreak::Cr,
        '\n' => GraphemeBreak::Lf,
        '\u{200D}' => GraphemeBreak::Zwj,
        '\0'..='\u{1F}' => GraphemeBreak::Control,
        ' '..='\u{7E}' => GraphemeBreak::Other,
        _ => lookup(c),
    }
}

fn lookup(c: char) -> GraphemeBreak {
    let cp = c as u32;
    if (HANGUL_SYLLABLE_FIRST..=HANGUL_SYLLABLE_LAST).contains(&cp) {
        return if (cp - HANGUL_SYLLABLE_FIRST) % HANGUL_T_COUNT == 0 {
            GraphemeBreak::Lv
        } else {
            GraphemeBreak::Lvt
        };
    }
    if is_regional_indicator(c) {
        return GraphemeBreak::RegionalIndicator;
    }
    if contains(tables::GCB_CONTROL, c) {
        GraphemeBreak::Control
    } else if contains(tables::GCB_EXTEND, c) {
        GraphemeBreak::Extend
    } else if contains(tables::GCB_SPACING_MARK, c) {
        GraphemeBreak::SpacingMark
    } else if contains(tables::GCB_PREPEND, c) {
        GraphemeBreak::Prepend
    } else if contains(tables::GCB_L, c) {
        GraphemeBreak::L
    } else if contains(tables::GCB_V, c) {
        GraphemeBreak::V
    } else if contains(tables::GCB_T, c) {
        GraphemeBreak::T
    } else if contains(tables::EXTENDED_PICTOGRAPHIC, c) {
        GraphemeBreak::ExtendedPictographic
    } else {
        GraphemeBreak::Other
    }
}

#[inline]
fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

/// Extended_Pictographic membership.
pub fn is_extended_pictographic(c: char) -> bool {
    !c.is_ascii() && contains(tables::EXTENDED_PICTOGRAPHIC, c)
}

/// Fitzpatrick skin tone modifiers (Emoji_Modifier).
pub fn is_emoji_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

/// Look up the Indic_Conjunct_Break value of `c`.
pub fn indic_conjunct_break(c: char) -> Option<IndicConjunctBreak> {
    if c.is_ascii() {
        None
    } else if contains(tables::INCB_LINKER, c) {
        Some(IndicConjunctBreak::Linker)
    } else if contains(tables::INCB_CONSONANT, c) {
        Some(IndicConjunctBreak::Consonant)
    } else if contains(tables::INCB_EXTEND, c) {
        Some(IndicConjunctBreak::Extend)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_fast_path() {
        assert_eq!(grapheme_break('a'), GraphemeBreak::Other);
        assert_eq!(grapheme_break(' '), GraphemeBreak::Other);
        assert_eq!(grapheme_break('\r'), GraphemeBreak::Cr);
        assert_eq!(grapheme_break('\n'), GraphemeBreak::Lf);
        assert_eq!(grapheme_break('\t'), GraphemeBreak::Control);
        assert_eq!(grapheme_break('\u{7F}'), GraphemeBreak::Control);
    }

    #[test]
    fn marks_and_joiners() {
        assert_eq!(grapheme_break('\u{0301}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{0327}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{FE0F}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{1F3FB}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{200C}'), GraphemeBreak::Extend);
        assert_eq!(grapheme_break('\u{200D}'), GraphemeBreak::Zwj);
        assert_eq!(grapheme_break('\u{093F}'), GraphemeBreak::SpacingMark);
        assert_eq!(grapheme_break('\u{0600}'), GraphemeBreak::Prepend);
    }

    #[test]
    fn hangul_syllable_types() {
        assert_eq!(grapheme_break('\u{1100}'), GraphemeBreak::L);
        assert_eq!(grapheme_break('\u{1161}'), GraphemeBreak::V);
        assert_eq!(grapheme_break('\u{11A8}'), GraphemeBreak::T);
        assert_eq!(grapheme_break('가'), GraphemeBreak::Lv);
        assert_eq!(grapheme_break('각'), GraphemeBreak::Lvt);
        assert_eq!(grapheme_break('\u{D7A3}'), GraphemeBreak::Lvt);
    }

    #[test]
    fn pictographs_and_flags() {
        assert_eq!(grapheme_break('😀'), GraphemeBreak::ExtendedPictographic);
        assert_eq!(grapheme_break('❤'), GraphemeBreak::ExtendedPictographic);
        assert_eq!(grapheme_break('\u{1F1E9}'), GraphemeBreak::RegionalIndicator);
        assert!(is_extended_pictographic('©'));
        assert!(!is_extended_pictographic('#'));
        assert!(is_emoji_modifier('\u{1F3FD}'));
    }

    #[test]
    fn unassigned_defaults_to_other() {
        assert_eq!(grapheme_break('\u{0378}'), GraphemeBreak::Other);
        assert_eq!(grapheme_break('\u{10FFFF}'), GraphemeBreak::Other);
    }

    #[test]
    fn indic_conjunct_classes() {
        assert_eq!(indic_conjunct_break('क'), Some(IndicConjunctBreak::Consonant));
        assert_eq!(indic_conjunct_break('\u{094D}'), Some(IndicConjunctBreak::Linker));
        assert_eq!(indic_conjunct_break('\u{093C}'), Some(IndicConjunctBreak::Extend));
        assert_eq!(indic_conjunct_break('\u{200D}'), Some(IndicConjunctBreak::Extend));
        assert_eq!(indic_conjunct_break('a'), None);
        assert_eq!(indic_conjunct_break('\u{093F}'), None);
    }
}
