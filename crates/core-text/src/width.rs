//! Grapheme cluster display width.
//!
//! A cluster occupies the width of its visible base; marks, joiners,
//! variation selectors and modifiers add nothing on top. The base decides:
//!
//! 1. Control, CR, LF, ZWJ and combining (Extend) bases take no columns;
//!    a lone skin tone modifier still renders as a swatch and takes two.
//! 2. U+2E3A TWO-EM DASH takes 3, U+2E3B THREE-EM DASH takes 4.
//! 3. Regional indicators (a flag pair or a lone letter) take 2.
//! 4. Extended_Pictographic bases take 2 when joined by ZWJ to another
//!    pictograph or followed by VS16, 1 when followed by VS15, and their East
//!    Asian Width otherwise.
//! 5. Keycap sequences (`0-9 # *` with VS16 and/or U+20E3) take 2; so does
//!    any other base followed by VS16.
//! 6. East Asian Wide/Fullwidth take 2, Ambiguous takes the configured
//!    [`AmbiguousWidth`], zero-width characters take 0, everything else 1.
//!
//! A malformed unit takes 1, the width of the U+FFFD it renders as.
//!
//! Invariants:
//! - The width of a string is the sum of its cluster widths.
//! - ASCII printable text is exactly one column per byte.

use core_props::{EastAsianWidth, GraphemeBreak};
use unicode_width::UnicodeWidthChar;

use crate::input::{Input, Unit};
use crate::options::AmbiguousWidth;

const ZWJ: char = '\u{200D}';
const VS15: char = '\u{FE0E}';
const VS16: char = '\u{FE0F}';
const KEYCAP_COMBINING: char = '\u{20E3}';
const TWO_EM_DASH: char = '\u{2E3A}';
const THREE_EM_DASH: char = '\u{2E3B}';

/// Semantic classification of a single grapheme cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EgcKind {
    Empty,
    ZeroWidth,
    Malformed,
    Narrow,
    Ambiguous,
    Wide,
    EmojiText,  // Pictograph forced to text presentation (VS15)
    Emoji,      // Emoji presentation: default, VS16 or modifier
    EmojiZwj,   // ZWJ sequence joining two or more pictographs
    EmojiKeycap, // Keycap base + VS16 and/or U+20E3
    EmojiFlag,  // Regional indicator, paired or lone
    Dash(u16),  // Two- and three-em dashes
}

fn is_keycap_base(c: char) -> bool {
    c.is_ascii_digit() || c == '#' || c == '*'
}

/// Structural facts about a cluster, collected unit by unit while the
/// grapheme engine scans it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ClusterShape {
    base: Option<Unit>,
    vs15: bool,
    vs16: bool,
    keycap: bool,
    after_zwj: bool,
    zwj_pictographic: bool,
}

impl ClusterShape {
    pub(crate) fn push(&mut self, unit: Unit) {
        if self.base.is_none() {
            self.base = Some(unit);
            return;
        }
        let Unit::Char(c) = unit else {
            self.after_zwj = false;
            return;
        };
        match c {
            VS15 => self.vs15 = true,
            VS16 => self.vs16 = true,
            KEYCAP_COMBINING => self.keycap = true,
            _ if self.after_zwj && core_props::is_extended_pictographic(c) => {
                self.zwj_pictographic = true;
            }
            _ => {}
        }
        self.after_zwj = c == ZWJ;
    }

    fn classify(&self) -> EgcKind {
        let c = match self.base {
            None => return EgcKind::Empty,
            Some(Unit::Char(c)) => c,
            Some(_) => return EgcKind::Malformed,
        };
        match c {
            TWO_EM_DASH => return EgcKind::Dash(3),
            THREE_EM_DASH => return EgcKind::Dash(4),
            _ => {}
        }
        match core_props::grapheme_break(c) {
            GraphemeBreak::Control | GraphemeBreak::Cr | GraphemeBreak::Lf | GraphemeBreak::Zwj => {
                return EgcKind::ZeroWidth;
            }
            GraphemeBreak::Extend if core_props::is_emoji_modifier(c) => return EgcKind::Emoji,
            GraphemeBreak::Extend => return EgcKind::ZeroWidth,
            GraphemeBreak::RegionalIndicator => return EgcKind::EmojiFlag,
            GraphemeBreak::ExtendedPictographic => {
                if self.zwj_pictographic {
                    return EgcKind::EmojiZwj;
                }
                if self.vs15 {
                    return EgcKind::EmojiText;
                }
                if self.vs16 {
                    return EgcKind::Emoji;
                }
            }
            _ => {
                if is_keycap_base(c) && (self.keycap || self.vs16) {
                    return EgcKind::EmojiKeycap;
                }
                if self.vs16 {
                    return EgcKind::Emoji;
                }
            }
        }
        match core_props::east_asian_width(c) {
            EastAsianWidth::Wide | EastAsianWidth::Fullwidth => EgcKind::Wide,
            EastAsianWidth::Ambiguous => EgcKind::Ambiguous,
            _ if c.width() == Some(0) => EgcKind::ZeroWidth,
            _ => EgcKind::Narrow,
        }
    }

    pub(crate) fn width(&self, ambiguous: AmbiguousWidth) -> u16 {
        width_for_kind(self.classify(), ambiguous)
    }
}

#[inline]
fn width_for_kind(kind: EgcKind, ambiguous: AmbiguousWidth) -> u16 {
    match kind {
        EgcKind::Empty | EgcKind::ZeroWidth => 0,
        EgcKind::Malformed | EgcKind::Narrow | EgcKind::EmojiText => 1,
        EgcKind::Ambiguous => ambiguous.columns(),
        EgcKind::Wide
        | EgcKind::Emoji
        | EgcKind::EmojiZwj
        | EgcKind::EmojiKeycap
        | EgcKind::EmojiFlag => 2,
        EgcKind::Dash(w) => w,
    }
}

/// Width of a slice known to hold exactly one grapheme cluster.
///
/// The slice is not re-segmented; passing several clusters measures only the
/// first base.
pub fn cluster_width<I: Input>(cluster: I, ambiguous: AmbiguousWidth) -> u16 {
    let mut shape = ClusterShape::default();
    let mut at = 0;
    while at < cluster.unit_len() {
        let decoded = cluster.decode_at(at);
        shape.push(decoded.unit);
        at += decoded.len;
    }
    shape.width(ambiguous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> u16 {
        cluster_width(s, AmbiguousWidth::Narrow)
    }

    #[test]
    fn ascii() {
        assert_eq!(w("a"), 1);
        assert_eq!(w(""), 0);
    }

    #[test]
    fn wide_cjk() {
        assert_eq!(w("界"), 2);
        assert_eq!(w("Ａ"), 2);
        assert_eq!(w("가"), 2);
    }

    #[test]
    fn emoji_basic() {
        assert_eq!(w("😀"), 2);
    }

    #[test]
    fn combining_acute() {
        assert_eq!(w("e\u{0301}"), 1);
        assert_eq!(w("a\u{0327}"), 1);
    }

    #[test]
    fn lone_combining_mark_is_zero() {
        assert_eq!(w("\u{0301}"), 0);
        assert_eq!(w("\u{FE0F}"), 0);
    }

    #[test]
    fn controls_are_zero() {
        assert_eq!(w("\t"), 0);
        assert_eq!(w("\n"), 0);
        assert_eq!(w("\r\n"), 0);
        assert_eq!(w("\u{200D}"), 0);
        assert_eq!(w("\u{00AD}"), 0);
    }

    #[test]
    fn emoji_flag() {
        assert_eq!(w("🇺🇸"), 2);
        assert_eq!(w("🇺"), 2);
    }

    #[test]
    fn emoji_keycap() {
        assert_eq!(w("1\u{FE0F}\u{20E3}"), 2);
        assert_eq!(w("2\u{20E3}"), 2);
        assert_eq!(w("#\u{FE0F}"), 2);
    }

    #[test]
    fn emoji_zwj_family() {
        assert_eq!(w("👨‍👩‍👧‍👦"), 2);
        assert_eq!(w("🏳\u{FE0F}\u{200D}🌈"), 2);
    }

    #[test]
    fn emoji_skin_tone() {
        assert_eq!(w("👍🏻"), 2);
        assert_eq!(w("\u{1F3FB}"), 2);
    }

    #[test]
    fn presentation_selectors() {
        assert_eq!(w("❤"), 1);
        assert_eq!(w("❤\u{FE0F}"), 2);
        assert_eq!(w("😀\u{FE0E}"), 1);
        assert_eq!(w("✈\u{FE0F}"), 2);
    }

    #[test]
    fn em_dashes() {
        assert_eq!(w("\u{2E3A}"), 3);
        assert_eq!(w("\u{2E3B}"), 4);
    }

    #[test]
    fn ambiguous_follows_option() {
        assert_eq!(cluster_width("¿", AmbiguousWidth::Narrow), 1);
        assert_eq!(cluster_width("¿", AmbiguousWidth::Wide), 2);
        assert_eq!(cluster_width("世", AmbiguousWidth::Wide), 2);
        assert_eq!(cluster_width("a", AmbiguousWidth::Wide), 1);
        assert_eq!(cluster_width("α", AmbiguousWidth::Wide), 2);
        assert_eq!(cluster_width("Я", AmbiguousWidth::Wide), 2);
        assert_eq!(cluster_width("e\u{0301}", AmbiguousWidth::Wide), 1);
    }

    #[test]
    fn wide_base_with_combining_mark() {
        assert_eq!(w("界\u{0301}"), 2);
    }

    #[test]
    fn malformed_unit_is_one_column() {
        assert_eq!(cluster_width(&b"\xFF"[..], AmbiguousWidth::Narrow), 1);
        assert_eq!(cluster_width(&[0xDC00u16][..], AmbiguousWidth::Narrow), 1);
    }
}
