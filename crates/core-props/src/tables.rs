//! Static codepoint range tables.
//!
//! Every table is a sorted, non-overlapping list of inclusive `(first, last)`
//! codepoint ranges, optionally tagged with a property value. Lookups go
//! through [`contains`] or [`class_of`], a binary search over the slice. The
//! data is Unicode 15.1; characters outside every table fall back to the
//! default class of the property that queries them. ASCII is left out of the
//! tagged tables since every lookup answers it with a fast path first.

use core::cmp::Ordering;

use crate::sentence::SentenceBreak;
use crate::word::WordBreak;

/// Inclusive codepoint range.
pub(crate) type Range = (u32, u32);

/// Inclusive codepoint range carrying a property value.
pub(crate) type ClassRange<T> = (u32, u32, T);

#[inline]
fn compare(lo: u32, hi: u32, cp: u32) -> Ordering {
    if hi < cp {
        Ordering::Less
    } else if lo > cp {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Binary search `table` for the range holding `c`.
#[inline]
pub(crate) fn contains(table: &[Range], c: char) -> bool {
    let cp = c as u32;
    table.binary_search_by(|&(lo, hi)| compare(lo, hi, cp)).is_ok()
}

/// Value of the range holding `c`, if any.
#[inline]
pub(crate) fn class_of<T: Copy>(table: &[ClassRange<T>], c: char) -> Option<T> {
    let cp = c as u32;
    table
        .binary_search_by(|&(lo, hi, _)| compare(lo, hi, cp))
        .ok()
        .map(|idx| table[idx].2)
}

// -------- Grapheme_Cluster_Break ----------------------------------------------

pub(crate) static GCB_CONTROL: &[Range] = &[
    (0x0000, 0x0009),
    (0x000B, 0x000C),
    (0x000E, 0x001F),
    (0x007F, 0x009F),
    (0x00AD, 0x00AD),
    (0x061C, 0x061C),
    (0x180E, 0x180E),
    (0x200B, 0x200B),
    (0x200E, 0x200F),
    (0x2028, 0x202E),
    (0x2060, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF0, 0xFFFB),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0000, 0xE001F),
    (0xE0080, 0xE00FF),
    (0xE01F0, 0xE0FFF),
];

pub(crate) static GCB_PREPEND: &[Range] = &[
    (0x0600, 0x0605),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x0D4E, 0x0D4E),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x111C2, 0x111C3),
    (0x1193F, 0x1193F),
    (0x11941, 0x11941),
    (0x11A3A, 0x11A3A),
    (0x11A84, 0x11A89),
    (0x11D46, 0x11D46),
    (0x11F02, 0x11F02),
];

pub(crate) static GCB_EXTEND: &[Range] = &[
    (0x0300, 0x036F),
    (0x0483, 0x0489),
    (0x0591, 0x05BD),
    (0x05BF, 0x05BF),
    (0x05C1, 0x05C2),
    (0x05C4, 0x05C5),
    (0x05C7, 0x05C7),
    (0x0610, 0x061A),
    (0x064B, 0x065F),
    (0x0670, 0x0670),
    (0x06D6, 0x06DC),
    (0x06DF, 0x06E4),
    (0x06E7, 0x06E8),
    (0x06EA, 0x06ED),
    (0x0711, 0x0711),
    (0x0730, 0x074A),
    (0x07A6, 0x07B0),
    (0x07EB, 0x07F3),
    (0x07FD, 0x07FD),
    (0x0816, 0x0819),
    (0x081B, 0x0823),
    (0x0825, 0x0827),
    (0x0829, 0x082D),
    (0x0859, 0x085B),
    (0x0898, 0x089F),
    (0x08CA, 0x08E1),
    (0x08E3, 0x0902),
    (0x093A, 0x093A),
    (0x093C, 0x093C),
    (0x0941, 0x0948),
    (0x094D, 0x094D),
    (0x0951, 0x0957),
    (0x0962, 0x0963),
    (0x0981, 0x0981),
    (0x09BC, 0x09BC),
    (0x09BE, 0x09BE),
    (0x09C1, 0x09C4),
    (0x09CD, 0x09CD),
    (0x09D7, 0x09D7),
    (0x09E2, 0x09E3),
    (0x09FE, 0x09FE),
    (0x0A01, 0x0A02),
    (0x0A3C, 0x0A3C),
    (0x0A41, 0x0A42),
    (0x0A47, 0x0A48),
    (0x0A4B, 0x0A4D),
    (0x0A51, 0x0A51),
    (0x0A70, 0x0A71),
    (0x0A75, 0x0A75),
    (0x0A81, 0x0A82),
    (0x0ABC, 0x0ABC),
    (0x0AC1, 0x0AC5),
    (0x0AC7, 0x0AC8),
    (0x0ACD, 0x0ACD),
    (0x0AE2, 0x0AE3),
    (0x0AFA, 0x0AFF),
    (0x0B01, 0x0B01),
    (0x0B3C, 0x0B3C),
    (0x0B3E, 0x0B3F),
    (0x0B41, 0x0B44),
    (0x0B4D, 0x0B4D),
    (0x0B55, 0x0B57),
    (0x0B62, 0x0B63),
    (0x0B82, 0x0B82),
    (0x0BBE, 0x0BBE),
    (0x0BC0, 0x0BC0),
    (0x0BCD, 0x0BCD),
    (0x0BD7, 0x0BD7),
    (0x0C00, 0x0C00),
    (0x0C04, 0x0C04),
    (0x0C3C, 0x0C3C),
    (0x0C3E, 0x0C40),
    (0x0C46, 0x0C48),
    (0x0C4A, 0x0C4D),
    (0x0C55, 0x0C56),
    (0x0C62, 0x0C63),
    (0x0C81, 0x0C81),
    (0x0CBC, 0x0CBC),
    (0x0CBF, 0x0CBF),
    (0x0CC2, 0x0CC2),
    (0x0CC6, 0x0CC6),
    (0x0CCC, 0x0CCD),
    (0x0CD5, 0x0CD6),
    (0x0CE2, 0x0CE3),
    (0x0D00, 0x0D01),
    (0x0D3B, 0x0D3C),
    (0x0D3E, 0x0D3E),
    (0x0D41, 0x0D44),
    (0x0D4D, 0x0D4D),
    (0x0D57, 0x0D57),
    (0x0D62, 0x0D63),
    (0x0D81, 0x0D81),
    (0x0DCA, 0x0DCA),
    (0x0DCF, 0x0DCF),
    (0x0DD2, 0x0DD4),
    (0x0DD6, 0x0DD6),
    (0x0DDF, 0x0DDF),
    (0x0E31, 0x0E31),
    (0x0E34, 0x0E3A),
    (0x0E47, 0x0E4E),
    (0x0EB1, 0x0EB1),
    (0x0EB4, 0x0EBC),
    (0x0EC8, 0x0ECE),
    (0x0F18, 0x0F19),
    (0x0F35, 0x0F35),
    (0x0F37, 0x0F37),
    (0x0F39, 0x0F39),
    (0x0F71, 0x0F7E),
    (0x0F80, 0x0F84),
    (0x0F86, 0x0F87),
    (0x0F8D, 0x0F97),
    (0x0F99, 0x0FBC),
    (0x0FC6, 0x0FC6),
    (0x102D, 0x1030),
    (0x1032, 0x1037),
    (0x1039, 0x103A),
    (0x103D, 0x103E),
    (0x1058, 0x1059),
    (0x105E, 0x1060),
    (0x1071, 0x1074),
    (0x1082, 0x1082),
    (0x1085, 0x1086),
    (0x108D, 0x108D),
    (0x109D, 0x109D),
    (0x135D, 0x135F),
    (0x1712, 0x1714),
    (0x1732, 0x1733),
    (0x1752, 0x1753),
    (0x1772, 0x1773),
    (0x17B4, 0x17B5),
    (0x17B7, 0x17BD),
    (0x17C6, 0x17C6),
    (0x17C9, 0x17D3),
    (0x17DD, 0x17DD),
    (0x180B, 0x180D),
    (0x180F, 0x180F),
    (0x1885, 0x1886),
    (0x18A9, 0x18A9),
    (0x1920, 0x1922),
    (0x1927, 0x1928),
    (0x1932, 0x1932),
    (0x1939, 0x193B),
    (0x1A17, 0x1A18),
    (0x1A1B, 0x1A1B),
    (0x1A56, 0x1A56),
    (0x1A58, 0x1A5E),
    (0x1A60, 0x1A60),
    (0x1A62, 0x1A62),
    (0x1A65, 0x1A6C),
    (0x1A73, 0x1A7C),
    (0x1A7F, 0x1A7F),
    (0x1AB0, 0x1ACE),
    (0x1B00, 0x1B03),
    (0x1B34, 0x1B3A),
    (0x1B3C, 0x1B3C),
    (0x1B42, 0x1B42),
    (0x1B6B, 0x1B73),
    (0x1B80, 0x1B81),
    (0x1BA2, 0x1BA5),
    (0x1BA8, 0x1BA9),
    (0x1BAB, 0x1BAD),
    (0x1BE6, 0x1BE6),
    (0x1BE8, 0x1BE9),
    (0x1BED, 0x1BED),
    (0x1BEF, 0x1BF1),
    (0x1C2C, 0x1C33),
    (0x1C36, 0x1C37),
    (0x1CD0, 0x1CD2),
    (0x1CD4, 0x1CE0),
    (0x1CE2, 0x1CE8),
    (0x1CED, 0x1CED),
    (0x1CF4, 0x1CF4),
    (0x1CF8, 0x1CF9),
    (0x1DC0, 0x1DFF),
    (0x200C, 0x200C),
    (0x20D0, 0x20F0),
    (0x2CEF, 0x2CF1),
    (0x2D7F, 0x2D7F),
    (0x2DE0, 0x2DFF),
    (0x302A, 0x302F),
    (0x3099, 0x309A),
    (0xA66F, 0xA672),
    (0xA674, 0xA67D),
    (0xA69E, 0xA69F),
    (0xA6F0, 0xA6F1),
    (0xA802, 0xA802),
    (0xA806, 0xA806),
    (0xA80B, 0xA80B),
    (0xA825, 0xA826),
    (0xA82C, 0xA82C),
    (0xA8C4, 0xA8C5),
    (0xA8E0, 0xA8F1),
    (0xA8FF, 0xA8FF),
    (0xA926, 0xA92D),
    (0xA947, 0xA951),
    (0xA980, 0xA982),
    (0xA9B3, 0xA9B3),
    (0xA9B6, 0xA9B9),
    (0xA9BC, 0xA9BD),
    (0xA9E5, 0xA9E5),
    (0xAA29, 0xAA2E),
    (0xAA31, 0xAA32),
    (0xAA35, 0xAA36),
    (0xAA43, 0xAA43),
    (0xAA4C, 0xAA4C),
    (0xAA7C, 0xAA7C),
    (0xAAB0, 0xAAB0),
    (0xAAB2, 0xAAB4),
    (0xAAB7, 0xAAB8),
    (0xAABE, 0xAABF),
    (0xAAC1, 0xAAC1),
    (0xAAEC, 0xAAED),
    (0xAAF6, 0xAAF6),
    (0xABE5, 0xABE5),
    (0xABE8, 0xABE8),
    (0xABED, 0xABED),
    (0xFB1E, 0xFB1E),
    (0xFE00, 0xFE0F),
    (0xFE20, 0xFE2F),
    (0xFF9E, 0xFF9F),
    (0x101FD, 0x101FD),
    (0x102E0, 0x102E0),
    (0x10376, 0x1037A),
    (0x10A01, 0x10A03),
    (0x10A05, 0x10A06),
    (0x10A0C, 0x10A0F),
    (0x10A38, 0x10A3A),
    (0x10A3F, 0x10A3F),
    (0x10AE5, 0x10AE6),
    (0x10D24, 0x10D27),
    (0x10EAB, 0x10EAC),
    (0x10EFD, 0x10EFF),
    (0x10F46, 0x10F50),
    (0x10F82, 0x10F85),
    (0x11001, 0x11001),
    (0x11038, 0x11046),
    (0x11070, 0x11070),
    (0x11073, 0x11074),
    (0x1107F, 0x11081),
    (0x110B3, 0x110B6),
    (0x110B9, 0x110BA),
    (0x110C2, 0x110C2),
    (0x11100, 0x11102),
    (0x11127, 0x1112B),
    (0x1112D, 0x11134),
    (0x11173, 0x11173),
    (0x11180, 0x11181),
    (0x111B6, 0x111BE),
    (0x111C9, 0x111CC),
    (0x111CF, 0x111CF),
    (0x1122F, 0x11231),
    (0x11234, 0x11234),
    (0x11236, 0x11237),
    (0x1123E, 0x1123E),
    (0x11241, 0x11241),
    (0x112DF, 0x112DF),
    (0x112E3, 0x112EA),
    (0x11300, 0x11301),
    (0x1133B, 0x1133C),
    (0x1133E, 0x1133E),
    (0x11340, 0x11340),
    (0x11357, 0x11357),
    (0x11366, 0x1136C),
    (0x11370, 0x11374),
    (0x11438, 0x1143F),
    (0x11442, 0x11444),
    (0x11446, 0x11446),
    (0x1145E, 0x1145E),
    (0x114B0, 0x114B0),
    (0x114B3, 0x114B8),
    (0x114BA, 0x114BA),
    (0x114BD, 0x114BD),
    (0x114BF, 0x114C0),
    (0x114C2, 0x114C3),
    (0x115AF, 0x115AF),
    (0x115B2, 0x115B5),
    (0x115BC, 0x115BD),
    (0x115BF, 0x115C0),
    (0x115DC, 0x115DD),
    (0x11633, 0x1163A),
    (0x1163D, 0x1163D),
    (0x1163F, 0x11640),
    (0x116AB, 0x116AB),
    (0x116AD, 0x116AD),
    (0x116B0, 0x116B5),
    (0x116B7, 0x116B7),
    (0x1171D, 0x1171F),
    (0x11722, 0x11725),
    (0x11727, 0x1172B),
    (0x1182F, 0x11837),
    (0x11839, 0x1183A),
    (0x11930, 0x11930),
    (0x1193B, 0x1193C),
    (0x1193E, 0x1193E),
    (0x11943, 0x11943),
    (0x119D4, 0x119D7),
    (0x119DA, 0x119DB),
    (0x119E0, 0x119E0),
    (0x11A01, 0x11A0A),
    (0x11A33, 0x11A38),
    (0x11A3B, 0x11A3E),
    (0x11A47, 0x11A47),
    (0x11A51, 0x11A56),
    (0x11A59, 0x11A5B),
    (0x11A8A, 0x11A96),
    (0x11A98, 0x11A99),
    (0x11C30, 0x11C36),
    (0x11C38, 0x11C3D),
    (0x11C3F, 0x11C3F),
    (0x11C92, 0x11CA7),
    (0x11CAA, 0x11CB0),
    (0x11CB2, 0x11CB3),
    (0x11CB5, 0x11CB6),
    (0x11D31, 0x11D36),
    (0x11D3A, 0x11D3A),
    (0x11D3C, 0x11D3D),
    (0x11D3F, 0x11D45),
    (0x11D47, 0x11D47),
    (0x11D90, 0x11D91),
    (0x11D95, 0x11D95),
    (0x11D97, 0x11D97),
    (0x11EF3, 0x11EF4),
    (0x11F00, 0x11F01),
    (0x11F36, 0x11F3A),
    (0x11F40, 0x11F40),
    (0x11F42, 0x11F42),
    (0x13440, 0x13440),
    (0x13447, 0x13455),
    (0x16AF0, 0x16AF4),
    (0x16B30, 0x16B36),
    (0x16F4F, 0x16F4F),
    (0x16F8F, 0x16F92),
    (0x16FE4, 0x16FE4),
    (0x1BC9D, 0x1BC9E),
    (0x1CF00, 0x1CF2D),
    (0x1CF30, 0x1CF46),
    (0x1D165, 0x1D165),
    (0x1D167, 0x1D169),
    (0x1D16E, 0x1D172),
    (0x1D17B, 0x1D182),
    (0x1D185, 0x1D18B),
    (0x1D1AA, 0x1D1AD),
    (0x1D242, 0x1D244),
    (0x1DA00, 0x1DA36),
    (0x1DA3B, 0x1DA6C),
    (0x1DA75, 0x1DA75),
    (0x1DA84, 0x1DA84),
    (0x1DA9B, 0x1DA9F),
    (0x1DAA1, 0x1DAAF),
    (0x1E000, 0x1E006),
    (0x1E008, 0x1E018),
    (0x1E01B, 0x1E021),
    (0x1E023, 0x1E024),
    (0x1E026, 0x1E02A),
    (0x1E08F, 0x1E08F),
    (0x1E130, 0x1E136),
    (0x1E2AE, 0x1E2AE),
    (0x1E2EC, 0x1E2EF),
    (0x1E4EC, 0x1E4EF),
    (0x1E8D0, 0x1E8D6),
    (0x1E944, 0x1E94A),
    (0x1F3FB, 0x1F3FF),
    (0xE0020, 0xE007F),
    (0xE0100, 0xE01EF),
];

pub(crate) static GCB_SPACING_MARK: &[Range] = &[
    (0x0903, 0x0903),
    (0x093B, 0x093B),
    (0x093E, 0x0940),
    (0x0949, 0x094C),
    (0x094E, 0x094F),
    (0x0982, 0x0983),
    (0x09BF, 0x09C0),
    (0x09C7, 0x09C8),
    (0x09CB, 0x09CC),
    (0x0A03, 0x0A03),
    (0x0A3E, 0x0A40),
    (0x0A83, 0x0A83),
    (0x0ABE, 0x0AC0),
    (0x0AC9, 0x0AC9),
    (0x0ACB, 0x0ACC),
    (0x0B02, 0x0B03),
    (0x0B40, 0x0B40),
    (0x0B47, 0x0B48),
    (0x0B4B, 0x0B4C),
    (0x0BBF, 0x0BBF),
    (0x0BC1, 0x0BC2),
    (0x0BC6, 0x0BC8),
    (0x0BCA, 0x0BCC),
    (0x0C01, 0x0C03),
    (0x0C41, 0x0C44),
    (0x0C82, 0x0C83),
    (0x0CBE, 0x0CBE),
    (0x0CC0, 0x0CC1),
    (0x0CC3, 0x0CC4),
    (0x0CC7, 0x0CC8),
    (0x0CCA, 0x0CCB),
    (0x0CF3, 0x0CF3),
    (0x0D02, 0x0D03),
    (0x0D3F, 0x0D40),
    (0x0D46, 0x0D48),
    (0x0D4A, 0x0D4C),
    (0x0D82, 0x0D83),
    (0x0DD0, 0x0DD1),
    (0x0DD8, 0x0DDE),
    (0x0DF2, 0x0DF3),
    (0x0E33, 0x0E33),
    (0x0EB3, 0x0EB3),
    (0x0F3E, 0x0F3F),
    (0x0F7F, 0x0F7F),
    (0x1031, 0x1031),
    (0x103B, 0x103C),
    (0x1056, 0x1057),
    (0x1084, 0x1084),
    (0x1715, 0x1715),
    (0x1734, 0x1734),
    (0x17B6, 0x17B6),
    (0x17BE, 0x17C5),
    (0x17C7, 0x17C8),
    (0x1923, 0x1926),
    (0x1929, 0x192B),
    (0x1930, 0x1931),
    (0x1933, 0x1938),
    (0x1A19, 0x1A1A),
    (0x1A55, 0x1A55),
    (0x1A57, 0x1A57),
    (0x1A6D, 0x1A72),
    (0x1B04, 0x1B04),
    (0x1B3B, 0x1B3B),
    (0x1B3D, 0x1B41),
    (0x1B43, 0x1B44),
    (0x1B82, 0x1B82),
    (0x1BA1, 0x1BA1),
    (0x1BA6, 0x1BA7),
    (0x1BAA, 0x1BAA),
    (0x1BE7, 0x1BE7),
    (0x1BEA, 0x1BEC),
    (0x1BEE, 0x1BEE),
    (0x1BF2, 0x1BF3),
    (0x1C24, 0x1C2B),
    (0x1C34, 0x1C35),
    (0x1CE1, 0x1CE1),
    (0x1CF7, 0x1CF7),
    (0xA823, 0xA824),
    (0xA827, 0xA827),
    (0xA880, 0xA881),
    (0xA8B4, 0xA8C3),
    (0xA952, 0xA953),
    (0xA983, 0xA983),
    (0xA9B4, 0xA9B5),
    (0xA9BA, 0xA9BB),
    (0xA9BE, 0xA9C0),
    (0xAA2F, 0xAA30),
    (0xAA33, 0xAA34),
    (0xAA4D, 0xAA4D),
    (0xAAEB, 0xAAEB),
    (0xAAEE, 0xAAEF),
    (0xAAF5, 0xAAF5),
    (0xABE3, 0xABE4),
    (0xABE6, 0xABE7),
    (0xABE9, 0xABEA),
    (0xABEC, 0xABEC),
    (0x11000, 0x11000),
    (0x11002, 0x11002),
    (0x11082, 0x11082),
    (0x110B0, 0x110B2),
    (0x110B7, 0x110B8),
    (0x1112C, 0x1112C),
    (0x11145, 0x11146),
    (0x11182, 0x11182),
    (0x111B3, 0x111B5),
    (0x111BF, 0x111C0),
    (0x111CE, 0x111CE),
    (0x1122C, 0x1122E),
    (0x11232, 0x11233),
    (0x11235, 0x11235),
    (0x112E0, 0x112E2),
    (0x11302, 0x11303),
    (0x1133F, 0x1133F),
    (0x11341, 0x11344),
    (0x11347, 0x11348),
    (0x1134B, 0x1134D),
    (0x11362, 0x11363),
    (0x11435, 0x11437),
    (0x11440, 0x11441),
    (0x11445, 0x11445),
    (0x114B1, 0x114B2),
    (0x114B9, 0x114B9),
    (0x114BB, 0x114BC),
    (0x114BE, 0x114BE),
    (0x114C1, 0x114C1),
    (0x115B0, 0x115B1),
    (0x115B8, 0x115BB),
    (0x115BE, 0x115BE),
    (0x11630, 0x11632),
    (0x1163B, 0x1163C),
    (0x1163E, 0x1163E),
    (0x116AC, 0x116AC),
    (0x116AE, 0x116AF),
    (0x116B6, 0x116B6),
    (0x11726, 0x11726),
    (0x1182C, 0x1182E),
    (0x11838, 0x11838),
    (0x11931, 0x11935),
    (0x11937, 0x11938),
    (0x1193D, 0x1193D),
    (0x11940, 0x11940),
    (0x11942, 0x11942),
    (0x119D1, 0x119D3),
    (0x119DC, 0x119DF),
    (0x119E4, 0x119E4),
    (0x11A39, 0x11A39),
    (0x11A57, 0x11A58),
    (0x11A97, 0x11A97),
    (0x11C2F, 0x11C2F),
    (0x11C3E, 0x11C3E),
    (0x11CA9, 0x11CA9),
    (0x11CB1, 0x11CB1),
    (0x11CB4, 0x11CB4),
    (0x11D8A, 0x11D8E),
    (0x11D93, 0x11D94),
    (0x11D96, 0x11D96),
    (0x11EF5, 0x11EF6),
    (0x11F03, 0x11F03),
    (0x11F34, 0x11F35),
    (0x11F3E, 0x11F3F),
    (0x11F41, 0x11F41),
    (0x16F51, 0x16F87),
    (0x16FF0, 0x16FF1),
    (0x1D166, 0x1D166),
    (0x1D16D, 0x1D16D),
];

pub(crate) static GCB_L: &[Range] = &[(0x1100, 0x115F), (0xA960, 0xA97C)];
pub(crate) static GCB_V: &[Range] = &[(0x1160, 0x11A7), (0xD7B0, 0xD7C6)];
pub(crate) static GCB_T: &[Range] = &[(0x11A8, 0x11FF), (0xD7CB, 0xD7FB)];

pub(crate) static EXTENDED_PICTOGRAPHIC: &[Range] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605),
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA),
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

pub(crate) static INCB_CONSONANT: &[Range] = &[
    (0x0915, 0x0939),
    (0x0958, 0x095F),
    (0x0978, 0x097F),
    (0x0995, 0x09A8),
    (0x09AA, 0x09B0),
    (0x09B2, 0x09B2),
    (0x09B6, 0x09B9),
    (0x09DC, 0x09DD),
    (0x09DF, 0x09DF),
    (0x09F0, 0x09F1),
    (0x0A95, 0x0AA8),
    (0x0AAA, 0x0AB0),
    (0x0AB2, 0x0AB3),
    (0x0AB5, 0x0AB9),
    (0x0AF9, 0x0AF9),
    (0x0B15, 0x0B28),
    (0x0B2A, 0x0B30),
    (0x0B32, 0x0B33),
    (0x0B35, 0x0B39),
    (0x0B5C, 0x0B5D),
    (0x0B5F, 0x0B5F),
    (0x0B71, 0x0B71),
    (0x0C15, 0x0C28),
    (0x0C2A, 0x0C39),
    (0x0C58, 0x0C5A),
    (0x0D15, 0x0D3A),
];

pub(crate) static INCB_LINKER: &[Range] = &[
    (0x094D, 0x094D),
    (0x09CD, 0x09CD),
    (0x0ACD, 0x0ACD),
    (0x0B4D, 0x0B4D),
    (0x0C4D, 0x0C4D),
    (0x0D4D, 0x0D4D),
];

pub(crate) static INCB_EXTEND: &[Range] = &[
    (0x0300, 0x036F),
    (0x093C, 0x093C),
    (0x0951, 0x0954),
    (0x09BC, 0x09BC),
    (0x09FE, 0x09FE),
    (0x0ABC, 0x0ABC),
    (0x0B3C, 0x0B3C),
    (0x0C3C, 0x0C3C),
    (0x0C55, 0x0C56),
    (0x0D3B, 0x0D3C),
    (0x1AB0, 0x1ACE),
    (0x1DC0, 0x1DFF),
    (0x200D, 0x200D),
    (0x20D0, 0x20F0),
    (0xFE20, 0xFE2F),
];

// -------- Word_Break ------------------------------------------------------------

/// Word_Break values for every non-ASCII codepoint that is not `Other`.
pub(crate) static WORD_BREAK: &[ClassRange<WordBreak>] = &[
    (0x0085, 0x0085, WordBreak::Newline),
    (0x00AA, 0x00AA, WordBreak::ALetter),
    (0x00AD, 0x00AD, WordBreak::Format),
    (0x00B5, 0x00B5, WordBreak::ALetter),
    (0x00B7, 0x00B7, WordBreak::MidLetter),
    (0x00BA, 0x00BA, WordBreak::ALetter),
    (0x00C0, 0x00D6, WordBreak::ALetter),
    (0x00D8, 0x00F6, WordBreak::ALetter),
    (0x00F8, 0x02D7, WordBreak::ALetter),
    (0x02DE, 0x02FF, WordBreak::ALetter),
    (0x0300, 0x036F, WordBreak::Extend),
    (0x0370, 0x0374, WordBreak::ALetter),
    (0x0376, 0x0377, WordBreak::ALetter),
    (0x037A, 0x037D, WordBreak::ALetter),
    (0x037E, 0x037E, WordBreak::MidNum),
    (0x037F, 0x037F, WordBreak::ALetter),
    (0x0386, 0x0386, WordBreak::ALetter),
    (0x0387, 0x0387, WordBreak::MidLetter),
    (0x0388, 0x038A, WordBreak::ALetter),
    (0x038C, 0x038C, WordBreak::ALetter),
    (0x038E, 0x03A1, WordBreak::ALetter),
    (0x03A3, 0x03F5, WordBreak::ALetter),
    (0x03F7, 0x0481, WordBreak::ALetter),
    (0x0483, 0x0489, WordBreak::Extend),
    (0x048A, 0x052F, WordBreak::ALetter),
    (0x0531, 0x0556, WordBreak::ALetter),
    (0x0559, 0x055C, WordBreak::ALetter),
    (0x055E, 0x055E, WordBreak::ALetter),
    (0x055F, 0x055F, WordBreak::MidLetter),
    (0x0560, 0x0588, WordBreak::ALetter),
    (0x0589, 0x0589, WordBreak::MidNum),
    (0x058A, 0x058A, WordBreak::ALetter),
    (0x0591, 0x05BD, WordBreak::Extend),
    (0x05BF, 0x05BF, WordBreak::Extend),
    (0x05C1, 0x05C2, WordBreak::Extend),
    (0x05C4, 0x05C5, WordBreak::Extend),
    (0x05C7, 0x05C7, WordBreak::Extend),
    (0x05D0, 0x05EA, WordBreak::HebrewLetter),
    (0x05EF, 0x05F2, WordBreak::HebrewLetter),
    (0x05F3, 0x05F3, WordBreak::ALetter),
    (0x05F4, 0x05F4, WordBreak::MidLetter),
    (0x0600, 0x0605, WordBreak::Numeric),
    (0x060C, 0x060D, WordBreak::MidNum),
    (0x0610, 0x061A, WordBreak::Extend),
    (0x061C, 0x061C, WordBreak::Format),
    (0x0620, 0x064A, WordBreak::ALetter),
    (0x064B, 0x065F, WordBreak::Extend),
    (0x0660, 0x0669, WordBreak::Numeric),
    (0x066B, 0x066B, WordBreak::Numeric),
    (0x066C, 0x066C, WordBreak::MidNum),
    (0x066E, 0x066F, WordBreak::ALetter),
    (0x0670, 0x0670, WordBreak::Extend),
    (0x0671, 0x06D3, WordBreak::ALetter),
    (0x06D5, 0x06D5, WordBreak::ALetter),
    (0x06D6, 0x06DC, WordBreak::Extend),
    (0x06DD, 0x06DD, WordBreak::Numeric),
    (0x06DF, 0x06E4, WordBreak::Extend),
    (0x06E5, 0x06E6, WordBreak::ALetter),
    (0x06E7, 0x06E8, WordBreak::Extend),
    (0x06EA, 0x06ED, WordBreak::Extend),
    (0x06EE, 0x06EF, WordBreak::ALetter),
    (0x06F0, 0x06F9, WordBreak::Numeric),
    (0x06FA, 0x06FC, WordBreak::ALetter),
    (0x06FF, 0x06FF, WordBreak::ALetter),
    (0x070F, 0x0710, WordBreak::ALetter),
    (0x0711, 0x0711, WordBreak::Extend),
    (0x0712, 0x072F, WordBreak::ALetter),
    (0x0730, 0x074A, WordBreak::Extend),
    (0x074D, 0x07A5, WordBreak::ALetter),
    (0x07A6, 0x07B0, WordBreak::Extend),
    (0x07B1, 0x07B1, WordBreak::ALetter),
    (0x07C0, 0x07C9, WordBreak::Numeric),
    (0x07CA, 0x07EA, WordBreak::ALetter),
    (0x07EB, 0x07F3, WordBreak::Extend),
    (0x07F4, 0x07F5, WordBreak::ALetter),
    (0x07F8, 0x07F8, WordBreak::MidNum),
    (0x07FA, 0x07FA, WordBreak::ALetter),
    (0x07FD, 0x07FD, WordBreak::Extend),
    (0x0800, 0x0815, WordBreak::ALetter),
    (0x0816, 0x0819, WordBreak::Extend),
    (0x081A, 0x081A, WordBreak::ALetter),
    (0x081B, 0x0823, WordBreak::Extend),
    (0x0824, 0x0824, WordBreak::ALetter),
    (0x0825, 0x0827, WordBreak::Extend),
    (0x0828, 0x0828, WordBreak::ALetter),
    (0x0829, 0x082D, WordBreak::Extend),
    (0x0840, 0x0858, WordBreak::ALetter),
    (0x0859, 0x085B, WordBreak::Extend),
    (0x0860, 0x086A, WordBreak::ALetter),
    (0x0870, 0x0887, WordBreak::ALetter),
    (0x0889, 0x088E, WordBreak::ALetter),
    (0x0890, 0x0891, WordBreak::Numeric),
    (0x0898, 0x089F, WordBreak::Extend),
    (0x08A0, 0x08C9, WordBreak::ALetter),
    (0x08CA, 0x08E1, WordBreak::Extend),
    (0x08E2, 0x08E2, WordBreak::Numeric),
    (0x08E3, 0x0903, WordBreak::Extend),
    (0x0904, 0x0939, WordBreak::ALetter),
    (0x093A, 0x093C, WordBreak::Extend),
    (0x093D, 0x093D, WordBreak::ALetter),
    (0x093E, 0x094F, WordBreak::Extend),
    (0x0950, 0x0950, WordBreak::ALetter),
    (0x0951, 0x0957, WordBreak::Extend),
    (0x0958, 0x0961, WordBreak::ALetter),
    (0x0962, 0x0963, WordBreak::Extend),
    (0x0966, 0x096F, WordBreak::Numeric),
    (0x0971, 0x0980, WordBreak::ALetter),
    (0x0981, 0x0983, WordBreak::Extend),
    (0x0985, 0x098C, WordBreak::ALetter),
    (0x098F, 0x0990, WordBreak::ALetter),
    (0x0993, 0x09A8, WordBreak::ALetter),
    (0x09AA, 0x09B0, WordBreak::ALetter),
    (0x09B2, 0x09B2, WordBreak::ALetter),
    (0x09B6, 0x09B9, WordBreak::ALetter),
    (0x09BC, 0x09BC, WordBreak::Extend),
    (0x09BD, 0x09BD, WordBreak::ALetter),
    (0x09BE, 0x09C4, WordBreak::Extend),
    (0x09C7, 0x09C8, WordBreak::Extend),
    (0x09CB, 0x09CD, WordBreak::Extend),
    (0x09CE, 0x09CE, WordBreak::ALetter),
    (0x09D7, 0x09D7, WordBreak::Extend),
    (0x09DC, 0x09DD, WordBreak::ALetter),
    (0x09DF, 0x09E1, WordBreak::ALetter),
    (0x09E2, 0x09E3, WordBreak::Extend),
    (0x09E6, 0x09EF, WordBreak::Numeric),
    (0x09F0, 0x09F1, WordBreak::ALetter),
    (0x09FC, 0x09FC, WordBreak::ALetter),
    (0x09FE, 0x09FE, WordBreak::Extend),
    (0x0A01, 0x0A03, WordBreak::Extend),
    (0x0A05, 0x0A0A, WordBreak::ALetter),
    (0x0A0F, 0x0A10, WordBreak::ALetter),
    (0x0A13, 0x0A28, WordBreak::ALetter),
    (0x0A2A, 0x0A30, WordBreak::ALetter),
    (0x0A32, 0x0A33, WordBreak::ALetter),
    (0x0A35, 0x0A36, WordBreak::ALetter),
    (0x0A38, 0x0A39, WordBreak::ALetter),
    (0x0A3C, 0x0A3C, WordBreak::Extend),
    (0x0A3E, 0x0A42, WordBreak::Extend),
    (0x0A47, 0x0A48, WordBreak::Extend),
    (0x0A4B, 0x0A4D, WordBreak::Extend),
    (0x0A51, 0x0A51, WordBreak::Extend),
    (0x0A59, 0x0A5C, WordBreak::ALetter),
    (0x0A5E, 0x0A5E, WordBreak::ALetter),
    (0x0A66, 0x0A6F, WordBreak::Numeric),
    (0x0A70, 0x0A71, WordBreak::Extend),
    (0x0A72, 0x0A74, WordBreak::ALetter),
    (0x0A75, 0x0A75, WordBreak::Extend),
    (0x0A81, 0x0A83, WordBreak::Extend),
    (0x0A85, 0x0A8D, WordBreak::ALetter),
    (0x0A8F, 0x0A91, WordBreak::ALetter),
    (0x0A93, 0x0AA8, WordBreak::ALetter),
    (0x0AAA, 0x0AB0, WordBreak::ALetter),
    (0x0AB2, 0x0AB3, WordBreak::ALetter),
    (0x0AB5, 0x0AB9, WordBreak::ALetter),
    (0x0ABC, 0x0ABC, WordBreak::Extend),
    (0x0ABD, 0x0ABD, WordBreak::ALetter),
    (0x0ABE, 0x0AC5, WordBreak::Extend),
    (0x0AC7, 0x0AC9, WordBreak::Extend),
    (0x0ACB, 0x0ACD, WordBreak::Extend),
    (0x0AD0, 0x0AD0, WordBreak::ALetter),
    (0x0AE0, 0x0AE1, WordBreak::ALetter),
    (0x0AE2, 0x0AE3, WordBreak::Extend),
    (0x0AE6, 0x0AEF, WordBreak::Numeric),
    (0x0AF9, 0x0AF9, WordBreak::ALetter),
    (0x0AFA, 0x0AFF, WordBreak::Extend),
    (0x0B01, 0x0B03, WordBreak::Extend),
    (0x0B05, 0x0B0C, WordBreak::ALetter),
    (0x0B0F, 0x0B10, WordBreak::ALetter),
    (0x0B13, 0x0B28, WordBreak::ALetter),
    (0x0B2A, 0x0B30, WordBreak::ALetter),
    (0x0B32, 0x0B33, WordBreak::ALetter),
    (0x0B35, 0x0B39, WordBreak::ALetter),
    (0x0B3C, 0x0B3C, WordBreak::Extend),
    (0x0B3D, 0x0B3D, WordBreak::ALetter),
    (0x0B3E, 0x0B44, WordBreak::Extend),
    (0x0B47, 0x0B48, WordBreak::Extend),
    (0x0B4B, 0x0B4D, WordBreak::Extend),
    (0x0B55, 0x0B57, WordBreak::Extend),
    (0x0B5C, 0x0B5D, WordBreak::ALetter),
    (0x0B5F, 0x0B61, WordBreak::ALetter),
    (0x0B62, 0x0B63, WordBreak::Extend),
    (0x0B66, 0x0B6F, WordBreak::Numeric),
    (0x0B71, 0x0B71, WordBreak::ALetter),
    (0x0B82, 0x0B82, WordBreak::Extend),
    (0x0B83, 0x0B83, WordBreak::ALetter),
    (0x0B85, 0x0B8A, WordBreak::ALetter),
    (0x0B8E, 0x0B90, WordBreak::ALetter),
    (0x0B92, 0x0B95, WordBreak::ALetter),
    (0x0B99, 0x0B9A, WordBreak::ALetter),
    (0x0B9C, 0x0B9C, WordBreak::ALetter),
    (0x0B9E, 0x0B9F, WordBreak::ALetter),
    (0x0BA3, 0x0BA4, WordBreak::ALetter),
    (0x0BA8, 0x0BAA, WordBreak::ALetter),
    (0x0BAE, 0x0BB9, WordBreak::ALetter),
    (0x0BBE, 0x0BC2, WordBreak::Extend),
    (0x0BC6, 0x0BC8, WordBreak::Extend),
    (0x0BCA, 0x0BCD, WordBreak::Extend),
    (0x0BD0, 0x0BD0, WordBreak::ALetter),
    (0x0BD7, 0x0BD7, WordBreak::Extend),
    (0x0BE6, 0x0BEF, WordBreak::Numeric),
    (0x0C00, 0x0C04, WordBreak::Extend),
    (0x0C05, 0x0C0C, WordBreak::ALetter),
    (0x0C0E, 0x0C10, WordBreak::ALetter),
    (0x0C12, 0x0C28, WordBreak::ALetter),
    (0x0C2A, 0x0C39, WordBreak::ALetter),
    (0x0C3C, 0x0C3C, WordBreak::Extend),
    (0x0C3D, 0x0C3D, WordBreak::ALetter),
    (0x0C3E, 0x0C44, WordBreak::Extend),
    (0x0C46, 0x0C48, WordBreak::Extend),
    (0x0C4A, 0x0C4D, WordBreak::Extend),
    (0x0C55, 0x0C56, WordBreak::Extend),
    (0x0C58, 0x0C5A, WordBreak::ALetter),
    (0x0C5D, 0x0C5D, WordBreak::ALetter),
    (0x0C60, 0x0C61, WordBreak::ALetter),
    (0x0C62, 0x0C63, WordBreak::Extend),
    (0x0C66, 0x0C6F, WordBreak::Numeric),
    (0x0C80, 0x0C80, WordBreak::ALetter),
    (0x0C81, 0x0C83, WordBreak::Extend),
    (0x0C85, 0x0C8C, WordBreak::ALetter),
    (0x0C8E, 0x0C90, WordBreak::ALetter),
    (0x0C92, 0x0CA8, WordBreak::ALetter),
    (0x0CAA, 0x0CB3, WordBreak::ALetter),
    (0x0CB5, 0x0CB9, WordBreak::ALetter),
    (0x0CBC, 0x0CBC, WordBreak::Extend),
    (0x0CBD, 0x0CBD, WordBreak::ALetter),
    (0x0CBE, 0x0CC4, WordBreak::Extend),
    (0x0CC6, 0x0CC8, WordBreak::Extend),
    (0x0CCA, 0x0CCD, WordBreak::Extend),
    (0x0CD5, 0x0CD6, WordBreak::Extend),
    (0x0CDD, 0x0CDE, WordBreak::ALetter),
    (0x0CE0, 0x0CE1, WordBreak::ALetter),
    (0x0CE2, 0x0CE3, WordBreak::Extend),
    (0x0CE6, 0x0CEF, WordBreak::Numeric),
    (0x0CF1, 0x0CF2, WordBreak::ALetter),
    (0x0CF3, 0x0CF3, WordBreak::Extend),
    (0x0D00, 0x0D03, WordBreak::Extend),
    (0x0D04, 0x0D0C, WordBreak::ALetter),
    (0x0D0E, 0x0D10, WordBreak::ALetter),
    (0x0D12, 0x0D3A, WordBreak::ALetter),
    (0x0D3B, 0x0D3C, WordBreak::Extend),
    (0x0D3D, 0x0D3D, WordBreak::ALetter),
    (0x0D3E, 0x0D44, WordBreak::Extend),
    (0x0D46, 0x0D48, WordBreak::Extend),
    (0x0D4A, 0x0D4D, WordBreak::Extend),
    (0x0D4E, 0x0D4E, WordBreak::ALetter),
    (0x0D54, 0x0D56, WordBreak::ALetter),
    (0x0D57, 0x0D57, WordBreak::Extend),
    (0x0D5F, 0x0D61, WordBreak::ALetter),
    (0x0D62, 0x0D63, WordBreak::Extend),
    (0x0D66, 0x0D6F, WordBreak::Numeric),
    (0x0D7A, 0x0D7F, WordBreak::ALetter),
    (0x0D81, 0x0D83, WordBreak::Extend),
    (0x0D85, 0x0D96, WordBreak::ALetter),
    (0x0D9A, 0x0DB1, WordBreak::ALetter),
    (0x0DB3, 0x0DBB, WordBreak::ALetter),
    (0x0DBD, 0x0DBD, WordBreak::ALetter),
    (0x0DC0, 0x0DC6, WordBreak::ALetter),
    (0x0DCA, 0x0DCA, WordBreak::Extend),
    (0x0DCF, 0x0DD4, WordBreak::Extend),
    (0x0DD6, 0x0DD6, WordBreak::Extend),
    (0x0DD8, 0x0DDF, WordBreak::Extend),
    (0x0DE6, 0x0DEF, WordBreak::Numeric),
    (0x0DF2, 0x0DF3, WordBreak::Extend),
    (0x0E31, 0x0E31, WordBreak::Extend),
    (0x0E34, 0x0E3A, WordBreak::Extend),
    (0x0E47, 0x0E4E, WordBreak::Extend),
    (0x0E50, 0x0E59, WordBreak::Numeric),
    (0x0EB1, 0x0EB1, WordBreak::Extend),
    (0x0EB4, 0x0EBC, WordBreak::Extend),
    (0x0EC8, 0x0ECE, WordBreak::Extend),
    (0x0ED0, 0x0ED9, WordBreak::Numeric),
    (0x0F00, 0x0F00, WordBreak::ALetter),
    (0x0F18, 0x0F19, WordBreak::Extend),
    (0x0F20, 0x0F29, WordBreak::Numeric),
    (0x0F35, 0x0F35, WordBreak::Extend),
    (0x0F37, 0x0F37, WordBreak::Extend),
    (0x0F39, 0x0F39, WordBreak::Extend),
    (0x0F3E, 0x0F3F, WordBreak::Extend),
    (0x0F40, 0x0F47, WordBreak::ALetter),
    (0x0F49, 0x0F6C, WordBreak::ALetter),
    (0x0F71, 0x0F84, WordBreak::Extend),
    (0x0F86, 0x0F87, WordBreak::Extend),
    (0x0F88, 0x0F8C, WordBreak::ALetter),
    (0x0F8D, 0x0F97, WordBreak::Extend),
    (0x0F99, 0x0FBC, WordBreak::Extend),
    (0x0FC6, 0x0FC6, WordBreak::Extend),
    (0x102B, 0x103E, WordBreak::Extend),
    (0x1040, 0x1049, WordBreak::Numeric),
    (0x1056, 0x1059, WordBreak::Extend),
    (0x105E, 0x1060, WordBreak::Extend),
    (0x1062, 0x1064, WordBreak::Extend),
    (0x1067, 0x106D, WordBreak::Extend),
    (0x1071, 0x1074, WordBreak::Extend),
    (0x1082, 0x108D, WordBreak::Extend),
    (0x108F, 0x108F, WordBreak::Extend),
    (0x1090, 0x1099, WordBreak::Numeric),
    (0x109A, 0x109D, WordBreak::Extend),
    (0x10A0, 0x10C5, WordBreak::ALetter),
    (0x10C7, 0x10C7, WordBreak::ALetter),
    (0x10CD, 0x10CD, WordBreak::ALetter),
    (0x10D0, 0x10FA, WordBreak::ALetter),
    (0x10FC, 0x1248, WordBreak::ALetter),
    (0x124A, 0x124D, WordBreak::ALetter),
    (0x1250, 0x1256, WordBreak::ALetter),
    (0x1258, 0x1258, WordBreak::ALetter),
    (0x125A, 0x125D, WordBreak::ALetter),
    (0x1260, 0x1288, WordBreak::ALetter),
    (0x128A, 0x128D, WordBreak::ALetter),
    (0x1290, 0x12B0, WordBreak::ALetter),
    (0x12B2, 0x12B5, WordBreak::ALetter),
    (0x12B8, 0x12BE, WordBreak::ALetter),
    (0x12C0, 0x12C0, WordBreak::ALetter),
    (0x12C2, 0x12C5, WordBreak::ALetter),
    (0x12C8, 0x12D6, WordBreak::ALetter),
    (0x12D8, 0x1310, WordBreak::ALetter),
    (0x1312, 0x1315, WordBreak::ALetter),
    (0x1318, 0x135A, WordBreak::ALetter),
    (0x135D, 0x135F, WordBreak::Extend),
    (0x1380, 0x138F, WordBreak::ALetter),
    (0x13A0, 0x13F5, WordBreak::ALetter),
    (0x13F8, 0x13FD, WordBreak::ALetter),
    (0x1401, 0x166C, WordBreak::ALetter),
    (0x166F, 0x167F, WordBreak::ALetter),
    (0x1680, 0x1680, WordBreak::WSegSpace),
    (0x1681, 0x169A, WordBreak::ALetter),
    (0x16A0, 0x16EA, WordBreak::ALetter),
    (0x16EE, 0x16F8, WordBreak::ALetter),
    (0x1700, 0x1711, WordBreak::ALetter),
    (0x1712, 0x1715, WordBreak::Extend),
    (0x171F, 0x1731, WordBreak::ALetter),
    (0x1732, 0x1734, WordBreak::Extend),
    (0x1740, 0x1751, WordBreak::ALetter),
    (0x1752, 0x1753, WordBreak::Extend),
    (0x1760, 0x176C, WordBreak::ALetter),
    (0x176E, 0x1770, WordBreak::ALetter),
    (0x1772, 0x1773, WordBreak::Extend),
    (0x17B4, 0x17D3, WordBreak::Extend),
    (0x17DD, 0x17DD, WordBreak::Extend),
    (0x17E0, 0x17E9, WordBreak::Numeric),
    (0x180B, 0x180D, WordBreak::Extend),
    (0x180E, 0x180E, WordBreak::Format),
    (0x180F, 0x180F, WordBreak::Extend),
    (0x1810, 0x1819, WordBreak::Numeric),
    (0x1820, 0x1878, WordBreak::ALetter),
    (0x1880, 0x1884, WordBreak::ALetter),
    (0x1885, 0x1886, WordBreak::Extend),
    (0x1887, 0x18A8, WordBreak::ALetter),
    (0x18A9, 0x18A9, WordBreak::Extend),
    (0x18AA, 0x18AA, WordBreak::ALetter),
    (0x18B0, 0x18F5, WordBreak::ALetter),
    (0x1900, 0x191E, WordBreak::ALetter),
    (0x1920, 0x192B, WordBreak::Extend),
    (0x1930, 0x193B, WordBreak::Extend),
    (0x1946, 0x194F, WordBreak::Numeric),
    (0x19D0, 0x19D9, WordBreak::Numeric),
    (0x1A00, 0x1A16, WordBreak::ALetter),
    (0x1A17, 0x1A1B, WordBreak::Extend),
    (0x1A55, 0x1A5E, WordBreak::Extend),
    (0x1A60, 0x1A7C, WordBreak::Extend),
    (0x1A7F, 0x1A7F, WordBreak::Extend),
    (0x1A80, 0x1A89, WordBreak::Numeric),
    (0x1A90, 0x1A99, WordBreak::Numeric),
    (0x1AB0, 0x1ACE, WordBreak::Extend),
    (0x1B00, 0x1B04, WordBreak::Extend),
    (0x1B05, 0x1B33, WordBreak::ALetter),
    (0x1B34, 0x1B44, WordBreak::Extend),
    (0x1B45, 0x1B4C, WordBreak::ALetter),
    (0x1B50, 0x1B59, WordBreak::Numeric),
    (0x1B6B, 0x1B73, WordBreak::Extend),
    (0x1B80, 0x1B82, WordBreak::Extend),
    (0x1B83, 0x1BA0, WordBreak::ALetter),
    (0x1BA1, 0x1BAD, WordBreak::Extend),
    (0x1BAE, 0x1BAF, WordBreak::ALetter),
    (0x1BB0, 0x1BB9, WordBreak::Numeric),
    (0x1BBA, 0x1BE5, WordBreak::ALetter),
    (0x1BE6, 0x1BF3, WordBreak::Extend),
    (0x1C00, 0x1C23, WordBreak::ALetter),
    (0x1C24, 0x1C37, WordBreak::Extend),
    (0x1C40, 0x1C49, WordBreak::Numeric),
    (0x1C4D, 0x1C4F, WordBreak::ALetter),
    (0x1C50, 0x1C59, WordBreak::Numeric),
    (0x1C5A, 0x1C7D, WordBreak::ALetter),
    (0x1C80, 0x1C88, WordBreak::ALetter),
    (0x1C90, 0x1CBA, WordBreak::ALetter),
    (0x1CBD, 0x1CBF, WordBreak::ALetter),
    (0x1CD0, 0x1CD2, WordBreak::Extend),
    (0x1CD4, 0x1CE8, WordBreak::Extend),
    (0x1CE9, 0x1CEC, WordBreak::ALetter),
    (0x1CED, 0x1CED, WordBreak::Extend),
    (0x1CEE, 0x1CF3, WordBreak::ALetter),
    (0x1CF4, 0x1CF4, WordBreak::Extend),
    (0x1CF5, 0x1CF6, WordBreak::ALetter),
    (0x1CF7, 0x1CF9, WordBreak::Extend),
    (0x1CFA, 0x1CFA, WordBreak::ALetter),
    (0x1D00, 0x1DBF, WordBreak::ALetter),
    (0x1DC0, 0x1DFF, WordBreak::Extend),
    (0x1E00, 0x1F15, WordBreak::ALetter),
    (0x1F18, 0x1F1D, WordBreak::ALetter),
    (0x1F20, 0x1F45, WordBreak::ALetter),
    (0x1F48, 0x1F4D, WordBreak::ALetter),
    (0x1F50, 0x1F57, WordBreak::ALetter),
    (0x1F59, 0x1F59, WordBreak::ALetter),
    (0x1F5B, 0x1F5B, WordBreak::ALetter),
    (0x1F5D, 0x1F5D, WordBreak::ALetter),
    (0x1F5F, 0x1F7D, WordBreak::ALetter),
    (0x1F80, 0x1FB4, WordBreak::ALetter),
    (0x1FB6, 0x1FBC, WordBreak::ALetter),
    (0x1FBE, 0x1FBE, WordBreak::ALetter),
    (0x1FC2, 0x1FC4, WordBreak::ALetter),
    (0x1FC6, 0x1FCC, WordBreak::ALetter),
    (0x1FD0, 0x1FD3, WordBreak::ALetter),
    (0x1FD6, 0x1FDB, WordBreak::ALetter),
    (0x1FE0, 0x1FEC, WordBreak::ALetter),
    (0x1FF2, 0x1FF4, WordBreak::ALetter),
    (0x1FF6, 0x1FFC, WordBreak::ALetter),
    (0x2000, 0x2006, WordBreak::WSegSpace),
    (0x2008, 0x200A, WordBreak::WSegSpace),
    (0x200C, 0x200C, WordBreak::Extend),
    (0x200D, 0x200D, WordBreak::Zwj),
    (0x200E, 0x200F, WordBreak::Format),
    (0x2018, 0x2019, WordBreak::MidNumLet),
    (0x2024, 0x2024, WordBreak::MidNumLet),
    (0x2027, 0x2027, WordBreak::MidLetter),
    (0x2028, 0x2029, WordBreak::Newline),
    (0x202A, 0x202E, WordBreak::Format),
    (0x202F, 0x202F, WordBreak::ExtendNumLet),
    (0x203F, 0x2040, WordBreak::ExtendNumLet),
    (0x2044, 0x2044, WordBreak::MidNum),
    (0x2054, 0x2054, WordBreak::ExtendNumLet),
    (0x205F, 0x205F, WordBreak::WSegSpace),
    (0x2060, 0x2064, WordBreak::Format),
    (0x2066, 0x206F, WordBreak::Format),
    (0x2071, 0x2071, WordBreak::ALetter),
    (0x207F, 0x207F, WordBreak::ALetter),
    (0x2090, 0x209C, WordBreak::ALetter),
    (0x20D0, 0x20F0, WordBreak::Extend),
    (0x2102, 0x2102, WordBreak::ALetter),
    (0x2107, 0x2107, WordBreak::ALetter),
    (0x210A, 0x2113, WordBreak::ALetter),
    (0x2115, 0x2115, WordBreak::ALetter),
    (0x2119, 0x211D, WordBreak::ALetter),
    (0x2124, 0x2124, WordBreak::ALetter),
    (0x2126, 0x2126, WordBreak::ALetter),
    (0x2128, 0x2128, WordBreak::ALetter),
    (0x212A, 0x212D, WordBreak::ALetter),
    (0x212F, 0x2139, WordBreak::ALetter),
    (0x213C, 0x213F, WordBreak::ALetter),
    (0x2145, 0x2149, WordBreak::ALetter),
    (0x214E, 0x214E, WordBreak::ALetter),
    (0x2160, 0x2188, WordBreak::ALetter),
    (0x24B6, 0x24E9, WordBreak::ALetter),
    (0x2C00, 0x2CE4, WordBreak::ALetter),
    (0x2CEB, 0x2CEE, WordBreak::ALetter),
    (0x2CEF, 0x2CF1, WordBreak::Extend),
    (0x2CF2, 0x2CF3, WordBreak::ALetter),
    (0x2D00, 0x2D25, WordBreak::ALetter),
    (0x2D27, 0x2D27, WordBreak::ALetter),
    (0x2D2D, 0x2D2D, WordBreak::ALetter),
    (0x2D30, 0x2D67, WordBreak::ALetter),
    (0x2D6F, 0x2D6F, WordBreak::ALetter),
    (0x2D7F, 0x2D7F, WordBreak::Extend),
    (0x2D80, 0x2D96, WordBreak::ALetter),
    (0x2DA0, 0x2DA6, WordBreak::ALetter),
    (0x2DA8, 0x2DAE, WordBreak::ALetter),
    (0x2DB0, 0x2DB6, WordBreak::ALetter),
    (0x2DB8, 0x2DBE, WordBreak::ALetter),
    (0x2DC0, 0x2DC6, WordBreak::ALetter),
    (0x2DC8, 0x2DCE, WordBreak::ALetter),
    (0x2DD0, 0x2DD6, WordBreak::ALetter),
    (0x2DD8, 0x2DDE, WordBreak::ALetter),
    (0x2DE0, 0x2DFF, WordBreak::Extend),
    (0x2E2F, 0x2E2F, WordBreak::ALetter),
    (0x3000, 0x3000, WordBreak::WSegSpace),
    (0x3005, 0x3005, WordBreak::ALetter),
    (0x302A, 0x302F, WordBreak::Extend),
    (0x3031, 0x3035, WordBreak::Katakana),
    (0x303B, 0x303C, WordBreak::ALetter),
    (0x3099, 0x309A, WordBreak::Extend),
    (0x309B, 0x309C, WordBreak::Katakana),
    (0x30A0, 0x30FA, WordBreak::Katakana),
    (0x30FC, 0x30FF, WordBreak::Katakana),
    (0x3105, 0x312F, WordBreak::ALetter),
    (0x3131, 0x318E, WordBreak::ALetter),
    (0x31A0, 0x31BF, WordBreak::ALetter),
    (0x31F0, 0x31FF, WordBreak::Katakana),
    (0x32D0, 0x32FE, WordBreak::Katakana),
    (0x3300, 0x3357, WordBreak::Katakana),
    (0xA000, 0xA48C, WordBreak::ALetter),
    (0xA4D0, 0xA4FD, WordBreak::ALetter),
    (0xA500, 0xA60C, WordBreak::ALetter),
    (0xA610, 0xA61F, WordBreak::ALetter),
    (0xA620, 0xA629, WordBreak::Numeric),
    (0xA62A, 0xA62B, WordBreak::ALetter),
    (0xA640, 0xA66E, WordBreak::ALetter),
    (0xA66F, 0xA672, WordBreak::Extend),
    (0xA674, 0xA67D, WordBreak::Extend),
    (0xA67F, 0xA69D, WordBreak::ALetter),
    (0xA69E, 0xA69F, WordBreak::Extend),
    (0xA6A0, 0xA6EF, WordBreak::ALetter),
    (0xA6F0, 0xA6F1, WordBreak::Extend),
    (0xA708, 0xA7CA, WordBreak::ALetter),
    (0xA7D0, 0xA7D1, WordBreak::ALetter),
    (0xA7D3, 0xA7D3, WordBreak::ALetter),
    (0xA7D5, 0xA7D9, WordBreak::ALetter),
    (0xA7F2, 0xA801, WordBreak::ALetter),
    (0xA802, 0xA802, WordBreak::Extend),
    (0xA803, 0xA805, WordBreak::ALetter),
    (0xA806, 0xA806, WordBreak::Extend),
    (0xA807, 0xA80A, WordBreak::ALetter),
    (0xA80B, 0xA80B, WordBreak::Extend),
    (0xA80C, 0xA822, WordBreak::ALetter),
    (0xA823, 0xA827, WordBreak::Extend),
    (0xA82C, 0xA82C, WordBreak::Extend),
    (0xA840, 0xA873, WordBreak::ALetter),
    (0xA880, 0xA881, WordBreak::Extend),
    (0xA882, 0xA8B3, WordBreak::ALetter),
    (0xA8B4, 0xA8C5, WordBreak::Extend),
    (0xA8D0, 0xA8D9, WordBreak::Numeric),
    (0xA8E0, 0xA8F1, WordBreak::Extend),
    (0xA8F2, 0xA8F7, WordBreak::ALetter),
    (0xA8FB, 0xA8FB, WordBreak::ALetter),
    (0xA8FD, 0xA8FE, WordBreak::ALetter),
    (0xA8FF, 0xA8FF, WordBreak::Extend),
    (0xA900, 0xA909, WordBreak::Numeric),
    (0xA90A, 0xA925, WordBreak::ALetter),
    (0xA926, 0xA92D, WordBreak::Extend),
    (0xA930, 0xA946, WordBreak::ALetter),
    (0xA947, 0xA953, WordBreak::Extend),
    (0xA960, 0xA97C, WordBreak::ALetter),
    (0xA980, 0xA983, WordBreak::Extend),
    (0xA984, 0xA9B2, WordBreak::ALetter),
    (0xA9B3, 0xA9C0, WordBreak::Extend),
    (0xA9CF, 0xA9CF, WordBreak::ALetter),
    (0xA9D0, 0xA9D9, WordBreak::Numeric),
    (0xA9E5, 0xA9E5, WordBreak::Extend),
    (0xA9F0, 0xA9F9, WordBreak::Numeric),
    (0xAA00, 0xAA28, WordBreak::ALetter),
    (0xAA29, 0xAA36, WordBreak::Extend),
    (0xAA40, 0xAA42, WordBreak::ALetter),
    (0xAA43, 0xAA43, WordBreak::Extend),
    (0xAA44, 0xAA4B, WordBreak::ALetter),
    (0xAA4C, 0xAA4D, WordBreak::Extend),
    (0xAA50, 0xAA59, WordBreak::Numeric),
    (0xAA7B, 0xAA7D, WordBreak::Extend),
    (0xAAB0, 0xAAB0, WordBreak::Extend),
    (0xAAB2, 0xAAB4, WordBreak::Extend),
    (0xAAB7, 0xAAB8, WordBreak::Extend),
    (0xAABE, 0xAABF, WordBreak::Extend),
    (0xAAC1, 0xAAC1, WordBreak::Extend),
    (0xAAE0, 0xAAEA, WordBreak::ALetter),
    (0xAAEB, 0xAAEF, WordBreak::Extend),
    (0xAAF2, 0xAAF4, WordBreak::ALetter),
    (0xAAF5, 0xAAF6, WordBreak::Extend),
    (0xAB01, 0xAB06, WordBreak::ALetter),
    (0xAB09, 0xAB0E, WordBreak::ALetter),
    (0xAB11, 0xAB16, WordBreak::ALetter),
    (0xAB20, 0xAB26, WordBreak::ALetter),
    (0xAB28, 0xAB2E, WordBreak::ALetter),
    (0xAB30, 0xAB69, WordBreak::ALetter),
    (0xAB70, 0xABE2, WordBreak::ALetter),
    (0xABE3, 0xABEA, WordBreak::Extend),
    (0xABEC, 0xABED, WordBreak::Extend),
    (0xABF0, 0xABF9, WordBreak::Numeric),
    (0xAC00, 0xD7A3, WordBreak::ALetter),
    (0xD7B0, 0xD7C6, WordBreak::ALetter),
    (0xD7CB, 0xD7FB, WordBreak::ALetter),
    (0xFB00, 0xFB06, WordBreak::ALetter),
    (0xFB13, 0xFB17, WordBreak::ALetter),
    (0xFB1D, 0xFB1D, WordBreak::HebrewLetter),
    (0xFB1E, 0xFB1E, WordBreak::Extend),
    (0xFB1F, 0xFB28, WordBreak::HebrewLetter),
    (0xFB2A, 0xFB36, WordBreak::HebrewLetter),
    (0xFB38, 0xFB3C, WordBreak::HebrewLetter),
    (0xFB3E, 0xFB3E, WordBreak::HebrewLetter),
    (0xFB40, 0xFB41, WordBreak::HebrewLetter),
    (0xFB43, 0xFB44, WordBreak::HebrewLetter),
    (0xFB46, 0xFB4F, WordBreak::HebrewLetter),
    (0xFB50, 0xFBB1, WordBreak::ALetter),
    (0xFBD3, 0xFD3D, WordBreak::ALetter),
    (0xFD50, 0xFD8F, WordBreak::ALetter),
    (0xFD92, 0xFDC7, WordBreak::ALetter),
    (0xFDF0, 0xFDFB, WordBreak::ALetter),
    (0xFE00, 0xFE0F, WordBreak::Extend),
    (0xFE10, 0xFE10, WordBreak::MidNum),
    (0xFE13, 0xFE13, WordBreak::MidLetter),
    (0xFE14, 0xFE14, WordBreak::MidNum),
    (0xFE20, 0xFE2F, WordBreak::Extend),
    (0xFE33, 0xFE34, WordBreak::ExtendNumLet),
    (0xFE4D, 0xFE4F, WordBreak::ExtendNumLet),
    (0xFE50, 0xFE50, WordBreak::MidNum),
    (0xFE52, 0xFE52, WordBreak::MidNumLet),
    (0xFE54, 0xFE54, WordBreak::MidNum),
    (0xFE55, 0xFE55, WordBreak::MidLetter),
    (0xFE70, 0xFE74, WordBreak::ALetter),
    (0xFE76, 0xFEFC, WordBreak::ALetter),
    (0xFEFF, 0xFEFF, WordBreak::Format),
    (0xFF07, 0xFF07, WordBreak::MidNumLet),
    (0xFF0C, 0xFF0C, WordBreak::MidNum),
    (0xFF0E, 0xFF0E, WordBreak::MidNumLet),
    (0xFF10, 0xFF19, WordBreak::Numeric),
    (0xFF1A, 0xFF1A, WordBreak::MidLetter),
    (0xFF1B, 0xFF1B, WordBreak::MidNum),
    (0xFF21, 0xFF3A, WordBreak::ALetter),
    (0xFF3F, 0xFF3F, WordBreak::ExtendNumLet),
    (0xFF41, 0xFF5A, WordBreak::ALetter),
    (0xFF66, 0xFF9D, WordBreak::Katakana),
    (0xFF9E, 0xFF9F, WordBreak::Extend),
    (0xFFA0, 0xFFBE, WordBreak::ALetter),
    (0xFFC2, 0xFFC7, WordBreak::ALetter),
    (0xFFCA, 0xFFCF, WordBreak::ALetter),
    (0xFFD2, 0xFFD7, WordBreak::ALetter),
    (0xFFDA, 0xFFDC, WordBreak::ALetter),
    (0xFFF9, 0xFFFB, WordBreak::Format),
    (0x10000, 0x1000B, WordBreak::ALetter),
    (0x1000D, 0x10026, WordBreak::ALetter),
    (0x10028, 0x1003A, WordBreak::ALetter),
    (0x1003C, 0x1003D, WordBreak::ALetter),
    (0x1003F, 0x1004D, WordBreak::ALetter),
    (0x10050, 0x1005D, WordBreak::ALetter),
    (0x10080, 0x100FA, WordBreak::ALetter),
    (0x10140, 0x10174, WordBreak::ALetter),
    (0x101FD, 0x101FD, WordBreak::Extend),
    (0x10280, 0x1029C, WordBreak::ALetter),
    (0x102A0, 0x102D0, WordBreak::ALetter),
    (0x102E0, 0x102E0, WordBreak::Extend),
    (0x10300, 0x1031F, WordBreak::ALetter),
    (0x1032D, 0x1034A, WordBreak::ALetter),
    (0x10350, 0x10375, WordBreak::ALetter),
    (0x10376, 0x1037A, WordBreak::Extend),
    (0x10380, 0x1039D, WordBreak::ALetter),
    (0x103A0, 0x103C3, WordBreak::ALetter),
    (0x103C8, 0x103CF, WordBreak::ALetter),
    (0x103D1, 0x103D5, WordBreak::ALetter),
    (0x10400, 0x1049D, WordBreak::ALetter),
    (0x104A0, 0x104A9, WordBreak::Numeric),
    (0x104B0, 0x104D3, WordBreak::ALetter),
    (0x104D8, 0x104FB, WordBreak::ALetter),
    (0x10500, 0x10527, WordBreak::ALetter),
    (0x10530, 0x10563, WordBreak::ALetter),
    (0x10570, 0x1057A, WordBreak::ALetter),
    (0x1057C, 0x1058A, WordBreak::ALetter),
    (0x1058C, 0x10592, WordBreak::ALetter),
    (0x10594, 0x10595, WordBreak::ALetter),
    (0x10597, 0x105A1, WordBreak::ALetter),
    (0x105A3, 0x105B1, WordBreak::ALetter),
    (0x105B3, 0x105B9, WordBreak::ALetter),
    (0x105BB, 0x105BC, WordBreak::ALetter),
    (0x10600, 0x10736, WordBreak::ALetter),
    (0x10740, 0x10755, WordBreak::ALetter),
    (0x10760, 0x10767, WordBreak::ALetter),
    (0x10780, 0x10785, WordBreak::ALetter),
    (0x10787, 0x107B0, WordBreak::ALetter),
    (0x107B2, 0x107BA, WordBreak::ALetter),
    (0x10800, 0x10805, WordBreak::ALetter),
    (0x10808, 0x10808, WordBreak::ALetter),
    (0x1080A, 0x10835, WordBreak::ALetter),
    (0x10837, 0x10838, WordBreak::ALetter),
    (0x1083C, 0x1083C, WordBreak::ALetter),
    (0x1083F, 0x10855, WordBreak::ALetter),
    (0x10860, 0x10876, WordBreak::ALetter),
    (0x10880, 0x1089E, WordBreak::ALetter),
    (0x108E0, 0x108F2, WordBreak::ALetter),
    (0x108F4, 0x108F5, WordBreak::ALetter),
    (0x10900, 0x10915, WordBreak::ALetter),
    (0x10920, 0x10939, WordBreak::ALetter),
    (0x10980, 0x109B7, WordBreak::ALetter),
    (0x109BE, 0x109BF, WordBreak::ALetter),
    (0x10A00, 0x10A00, WordBreak::ALetter),
    (0x10A01, 0x10A03, WordBreak::Extend),
    (0x10A05, 0x10A06, WordBreak::Extend),
    (0x10A0C, 0x10A0F, WordBreak::Extend),
    (0x10A10, 0x10A13, WordBreak::ALetter),
    (0x10A15, 0x10A17, WordBreak::ALetter),
    (0x10A19, 0x10A35, WordBreak::ALetter),
    (0x10A38, 0x10A3A, WordBreak::Extend),
    (0x10A3F, 0x10A3F, WordBreak::Extend),
    (0x10A60, 0x10A7C, WordBreak::ALetter),
    (0x10A80, 0x10A9C, WordBreak::ALetter),
    (0x10AC0, 0x10AC7, WordBreak::ALetter),
    (0x10AC9, 0x10AE4, WordBreak::ALetter),
    (0x10AE5, 0x10AE6, WordBreak::Extend),
    (0x10B00, 0x10B35, WordBreak::ALetter),
    (0x10B40, 0x10B55, WordBreak::ALetter),
    (0x10B60, 0x10B72, WordBreak::ALetter),
    (0x10B80, 0x10B91, WordBreak::ALetter),
    (0x10C00, 0x10C48, WordBreak::ALetter),
    (0x10C80, 0x10CB2, WordBreak::ALetter),
    (0x10CC0, 0x10CF2, WordBreak::ALetter),
    (0x10D00, 0x10D23, WordBreak::ALetter),
    (0x10D24, 0x10D27, WordBreak::Extend),
    (0x10D30, 0x10D39, WordBreak::Numeric),
    (0x10E80, 0x10EA9, WordBreak::ALetter),
    (0x10EAB, 0x10EAC, WordBreak::Extend),
    (0x10EB0, 0x10EB1, WordBreak::ALetter),
    (0x10EFD, 0x10EFF, WordBreak::Extend),
    (0x10F00, 0x10F1C, WordBreak::ALetter),
    (0x10F27, 0x10F27, WordBreak::ALetter),
    (0x10F30, 0x10F45, WordBreak::ALetter),
    (0x10F46, 0x10F50, WordBreak::Extend),
    (0x10F70, 0x10F81, WordBreak::ALetter),
    (0x10F82, 0x10F85, WordBreak::Extend),
    (0x10FB0, 0x10FC4, WordBreak::ALetter),
    (0x10FE0, 0x10FF6, WordBreak::ALetter),
    (0x11000, 0x11002, WordBreak::Extend),
    (0x11003, 0x11037, WordBreak::ALetter),
    (0x11038, 0x11046, WordBreak::Extend),
    (0x11066, 0x1106F, WordBreak::Numeric),
    (0x11070, 0x11070, WordBreak::Extend),
    (0x11071, 0x11072, WordBreak::ALetter),
    (0x11073, 0x11074, WordBreak::Extend),
    (0x11075, 0x11075, WordBreak::ALetter),
    (0x1107F, 0x11082, WordBreak::Extend),
    (0x11083, 0x110AF, WordBreak::ALetter),
    (0x110B0, 0x110BA, WordBreak::Extend),
    (0x110BD, 0x110BD, WordBreak::Numeric),
    (0x110C2, 0x110C2, WordBreak::Extend),
    (0x110CD, 0x110CD, WordBreak::Numeric),
    (0x110D0, 0x110E8, WordBreak::ALetter),
    (0x110F0, 0x110F9, WordBreak::Numeric),
    (0x11100, 0x11102, WordBreak::Extend),
    (0x11103, 0x11126, WordBreak::ALetter),
    (0x11127, 0x11134, WordBreak::Extend),
    (0x11136, 0x1113F, WordBreak::Numeric),
    (0x11144, 0x11144, WordBreak::ALetter),
    (0x11145, 0x11146, WordBreak::Extend),
    (0x11147, 0x11147, WordBreak::ALetter),
    (0x11150, 0x11172, WordBreak::ALetter),
    (0x11173, 0x11173, WordBreak::Extend),
    (0x11176, 0x11176, WordBreak::ALetter),
    (0x11180, 0x11182, WordBreak::Extend),
    (0x11183, 0x111B2, WordBreak::ALetter),
    (0x111B3, 0x111C0, WordBreak::Extend),
    (0x111C1, 0x111C4, WordBreak::ALetter),
    (0x111C9, 0x111CC, WordBreak::Extend),
    (0x111CE, 0x111CF, WordBreak::Extend),
    (0x111D0, 0x111D9, WordBreak::Numeric),
    (0x111DA, 0x111DA, WordBreak::ALetter),
    (0x111DC, 0x111DC, WordBreak::ALetter),
    (0x11200, 0x11211, WordBreak::ALetter),
    (0x11213, 0x1122B, WordBreak::ALetter),
    (0x1122C, 0x11237, WordBreak::Extend),
    (0x1123E, 0x1123E, WordBreak::Extend),
    (0x1123F, 0x11240, WordBreak::ALetter),
    (0x11241, 0x11241, WordBreak::Extend),
    (0x11280, 0x11286, WordBreak::ALetter),
    (0x11288, 0x11288, WordBreak::ALetter),
    (0x1128A, 0x1128D, WordBreak::ALetter),
    (0x1128F, 0x1129D, WordBreak::ALetter),
    (0x1129F, 0x112A8, WordBreak::ALetter),
    (0x112B0, 0x112DE, WordBreak::ALetter),
    (0x112DF, 0x112EA, WordBreak::Extend),
    (0x112F0, 0x112F9, WordBreak::Numeric),
    (0x11300, 0x11303, WordBreak::Extend),
    (0x11305, 0x1130C, WordBreak::ALetter),
    (0x1130F, 0x11310, WordBreak::ALetter),
    (0x11313, 0x11328, WordBreak::ALetter),
    (0x1132A, 0x11330, WordBreak::ALetter),
    (0x11332, 0x11333, WordBreak::ALetter),
    (0x11335, 0x11339, WordBreak::ALetter),
    (0x1133B, 0x1133C, WordBreak::Extend),
    (0x1133D, 0x1133D, WordBreak::ALetter),
    (0x1133E, 0x11344, WordBreak::Extend),
    (0x11347, 0x11348, WordBreak::Extend),
    (0x1134B, 0x1134D, WordBreak::Extend),
    (0x11350, 0x11350, WordBreak::ALetter),
    (0x11357, 0x11357, WordBreak::Extend),
    (0x1135D, 0x11361, WordBreak::ALetter),
    (0x11362, 0x11363, WordBreak::Extend),
    (0x11366, 0x1136C, WordBreak::Extend),
    (0x11370, 0x11374, WordBreak::Extend),
    (0x11400, 0x11434, WordBreak::ALetter),
    (0x11435, 0x11446, WordBreak::Extend),
    (0x11447, 0x1144A, WordBreak::ALetter),
    (0x11450, 0x11459, WordBreak::Numeric),
    (0x1145E, 0x1145E, WordBreak::Extend),
    (0x1145F, 0x11461, WordBreak::ALetter),
    (0x11480, 0x114AF, WordBreak::ALetter),
    (0x114B0, 0x114C3, WordBreak::Extend),
    (0x114C4, 0x114C5, WordBreak::ALetter),
    (0x114C7, 0x114C7, WordBreak::ALetter),
    (0x114D0, 0x114D9, WordBreak::Numeric),
    (0x11580, 0x115AE, WordBreak::ALetter),
    (0x115AF, 0x115B5, WordBreak::Extend),
    (0x115B8, 0x115C0, WordBreak::Extend),
    (0x115D8, 0x115DB, WordBreak::ALetter),
    (0x115DC, 0x115DD, WordBreak::Extend),
    (0x11600, 0x1162F, WordBreak::ALetter),
    (0x11630, 0x11640, WordBreak::Extend),
    (0x11644, 0x11644, WordBreak::ALetter),
    (0x11650, 0x11659, WordBreak::Numeric),
    (0x11680, 0x116AA, WordBreak::ALetter),
    (0x116AB, 0x116B7, WordBreak::Extend),
    (0x116B8, 0x116B8, WordBreak::ALetter),
    (0x116C0, 0x116C9, WordBreak::Numeric),
    (0x1171D, 0x1172B, WordBreak::Extend),
    (0x11730, 0x11739, WordBreak::Numeric),
    (0x11800, 0x1182B, WordBreak::ALetter),
    (0x1182C, 0x1183A, WordBreak::Extend),
    (0x118A0, 0x118DF, WordBreak::ALetter),
    (0x118E0, 0x118E9, WordBreak::Numeric),
    (0x118FF, 0x11906, WordBreak::ALetter),
    (0x11909, 0x11909, WordBreak::ALetter),
    (0x1190C, 0x11913, WordBreak::ALetter),
    (0x11915, 0x11916, WordBreak::ALetter),
    (0x11918, 0x1192F, WordBreak::ALetter),
    (0x11930, 0x11935, WordBreak::Extend),
    (0x11937, 0x11938, WordBreak::Extend),
    (0x1193B, 0x1193E, WordBreak::Extend),
    (0x1193F, 0x1193F, WordBreak::ALetter),
    (0x11940, 0x11940, WordBreak::Extend),
    (0x11941, 0x11941, WordBreak::ALetter),
    (0x11942, 0x11943, WordBreak::Extend),
    (0x11950, 0x11959, WordBreak::Numeric),
    (0x119A0, 0x119A7, WordBreak::ALetter),
    (0x119AA, 0x119D0, WordBreak::ALetter),
    (0x119D1, 0x119D7, WordBreak::Extend),
    (0x119DA, 0x119E0, WordBreak::Extend),
    (0x119E1, 0x119E1, WordBreak::ALetter),
    (0x119E3, 0x119E3, WordBreak::ALetter),
    (0x119E4, 0x119E4, WordBreak::Extend),
    (0x11A00, 0x11A00, WordBreak::ALetter),
    (0x11A01, 0x11A0A, WordBreak::Extend),
    (0x11A0B, 0x11A32, WordBreak::ALetter),
    (0x11A33, 0x11A39, WordBreak::Extend),
    (0x11A3A, 0x11A3A, WordBreak::ALetter),
    (0x11A3B, 0x11A3E, WordBreak::Extend),
    (0x11A47, 0x11A47, WordBreak::Extend),
    (0x11A50, 0x11A50, WordBreak::ALetter),
    (0x11A51, 0x11A5B, WordBreak::Extend),
    (0x11A5C, 0x11A89, WordBreak::ALetter),
    (0x11A8A, 0x11A99, WordBreak::Extend),
    (0x11A9D, 0x11A9D, WordBreak::ALetter),
    (0x11AB0, 0x11AF8, WordBreak::ALetter),
    (0x11C00, 0x11C08, WordBreak::ALetter),
    (0x11C0A, 0x11C2E, WordBreak::ALetter),
    (0x11C2F, 0x11C36, WordBreak::Extend),
    (0x11C38, 0x11C3F, WordBreak::Extend),
    (0x11C40, 0x11C40, WordBreak::ALetter),
    (0x11C50, 0x11C59, WordBreak::Numeric),
    (0x11C72, 0x11C8F, WordBreak::ALetter),
    (0x11C92, 0x11CA7, WordBreak::Extend),
    (0x11CA9, 0x11CB6, WordBreak::Extend),
    (0x11D00, 0x11D06, WordBreak::ALetter),
    (0x11D08, 0x11D09, WordBreak::ALetter),
    (0x11D0B, 0x11D30, WordBreak::ALetter),
    (0x11D31, 0x11D36, WordBreak::Extend),
    (0x11D3A, 0x11D3A, WordBreak::Extend),
    (0x11D3C, 0x11D3D, WordBreak::Extend),
    (0x11D3F, 0x11D45, WordBreak::Extend),
    (0x11D46, 0x11D46, WordBreak::ALetter),
    (0x11D47, 0x11D47, WordBreak::Extend),
    (0x11D50, 0x11D59, WordBreak::Numeric),
    (0x11D60, 0x11D65, WordBreak::ALetter),
    (0x11D67, 0x11D68, WordBreak::ALetter),
    (0x11D6A, 0x11D89, WordBreak::ALetter),
    (0x11D8A, 0x11D8E, WordBreak::Extend),
    (0x11D90, 0x11D91, WordBreak::Extend),
    (0x11D93, 0x11D97, WordBreak::Extend),
    (0x11D98, 0x11D98, WordBreak::ALetter),
    (0x11DA0, 0x11DA9, WordBreak::Numeric),
    (0x11EE0, 0x11EF2, WordBreak::ALetter),
    (0x11EF3, 0x11EF6, WordBreak::Extend),
    (0x11F00, 0x11F01, WordBreak::Extend),
    (0x11F02, 0x11F02, WordBreak::ALetter),
    (0x11F03, 0x11F03, WordBreak::Extend),
    (0x11F04, 0x11F10, WordBreak::ALetter),
    (0x11F12, 0x11F33, WordBreak::ALetter),
    (0x11F34, 0x11F3A, WordBreak::Extend),
    (0x11F3E, 0x11F42, WordBreak::Extend),
    (0x11F50, 0x11F59, WordBreak::Numeric),
    (0x11FB0, 0x11FB0, WordBreak::ALetter),
    (0x12000, 0x12399, WordBreak::ALetter),
    (0x12400, 0x1246E, WordBreak::ALetter),
    (0x12480, 0x12543, WordBreak::ALetter),
    (0x12F90, 0x12FF0, WordBreak::ALetter),
    (0x13000, 0x1342F, WordBreak::ALetter),
    (0x13430, 0x1343F, WordBreak::Format),
    (0x13440, 0x13440, WordBreak::Extend),
    (0x13441, 0x13446, WordBreak::ALetter),
    (0x13447, 0x13455, WordBreak::Extend),
    (0x14400, 0x14646, WordBreak::ALetter),
    (0x16800, 0x16A38, WordBreak::ALetter),
    (0x16A40, 0x16A5E, WordBreak::ALetter),
    (0x16A60, 0x16A69, WordBreak::Numeric),
    (0x16A70, 0x16ABE, WordBreak::ALetter),
    (0x16AC0, 0x16AC9, WordBreak::Numeric),
    (0x16AD0, 0x16AED, WordBreak::ALetter),
    (0x16AF0, 0x16AF4, WordBreak::Extend),
    (0x16B00, 0x16B2F, WordBreak::ALetter),
    (0x16B30, 0x16B36, WordBreak::Extend),
    (0x16B40, 0x16B43, WordBreak::ALetter),
    (0x16B50, 0x16B59, WordBreak::Numeric),
    (0x16B63, 0x16B77, WordBreak::ALetter),
    (0x16B7D, 0x16B8F, WordBreak::ALetter),
    (0x16E40, 0x16E7F, WordBreak::ALetter),
    (0x16F00, 0x16F4A, WordBreak::ALetter),
    (0x16F4F, 0x16F4F, WordBreak::Extend),
    (0x16F50, 0x16F50, WordBreak::ALetter),
    (0x16F51, 0x16F87, WordBreak::Extend),
    (0x16F8F, 0x16F92, WordBreak::Extend),
    (0x16F93, 0x16F9F, WordBreak::ALetter),
    (0x16FE0, 0x16FE1, WordBreak::ALetter),
    (0x16FE3, 0x16FE3, WordBreak::ALetter),
    (0x16FE4, 0x16FE4, WordBreak::Extend),
    (0x16FF0, 0x16FF1, WordBreak::Extend),
    (0x1AFF0, 0x1AFF3, WordBreak::Katakana),
    (0x1AFF5, 0x1AFFB, WordBreak::Katakana),
    (0x1AFFD, 0x1AFFE, WordBreak::Katakana),
    (0x1B000, 0x1B000, WordBreak::Katakana),
    (0x1B120, 0x1B122, WordBreak::Katakana),
    (0x1B155, 0x1B155, WordBreak::Katakana),
    (0x1B164, 0x1B167, WordBreak::Katakana),
    (0x1BC00, 0x1BC6A, WordBreak::ALetter),
    (0x1BC70, 0x1BC7C, WordBreak::ALetter),
    (0x1BC80, 0x1BC88, WordBreak::ALetter),
    (0x1BC90, 0x1BC99, WordBreak::ALetter),
    (0x1BC9D, 0x1BC9E, WordBreak::Extend),
    (0x1BCA0, 0x1BCA3, WordBreak::Format),
    (0x1CF00, 0x1CF2D, WordBreak::Extend),
    (0x1CF30, 0x1CF46, WordBreak::Extend),
    (0x1D165, 0x1D169, WordBreak::Extend),
    (0x1D16D, 0x1D172, WordBreak::Extend),
    (0x1D173, 0x1D17A, WordBreak::Format),
    (0x1D17B, 0x1D182, WordBreak::Extend),
    (0x1D185, 0x1D18B, WordBreak::Extend),
    (0x1D1AA, 0x1D1AD, WordBreak::Extend),
    (0x1D242, 0x1D244, WordBreak::Extend),
    (0x1D400, 0x1D454, WordBreak::ALetter),
    (0x1D456, 0x1D49C, WordBreak::ALetter),
    (0x1D49E, 0x1D49F, WordBreak::ALetter),
    (0x1D4A2, 0x1D4A2, WordBreak::ALetter),
    (0x1D4A5, 0x1D4A6, WordBreak::ALetter),
    (0x1D4A9, 0x1D4AC, WordBreak::ALetter),
    (0x1D4AE, 0x1D4B9, WordBreak::ALetter),
    (0x1D4BB, 0x1D4BB, WordBreak::ALetter),
    (0x1D4BD, 0x1D4C3, WordBreak::ALetter),
    (0x1D4C5, 0x1D505, WordBreak::ALetter),
    (0x1D507, 0x1D50A, WordBreak::ALetter),
    (0x1D50D, 0x1D514, WordBreak::ALetter),
    (0x1D516, 0x1D51C, WordBreak::ALetter),
    (0x1D51E, 0x1D539, WordBreak::ALetter),
    (0x1D53B, 0x1D53E, WordBreak::ALetter),
    (0x1D540, 0x1D544, WordBreak::ALetter),
    (0x1D546, 0x1D546, WordBreak::ALetter),
    (0x1D54A, 0x1D550, WordBreak::ALetter),
    (0x1D552, 0x1D6A5, WordBreak::ALetter),
    (0x1D6A8, 0x1D6C0, WordBreak::ALetter),
    (0x1D6C2, 0x1D6DA, WordBreak::ALetter),
    (0x1D6DC, 0x1D6FA, WordBreak::ALetter),
    (0x1D6FC, 0x1D714, WordBreak::ALetter),
    (0x1D716, 0x1D734, WordBreak::ALetter),
    (0x1D736, 0x1D74E, WordBreak::ALetter),
    (0x1D750, 0x1D76E, WordBreak::ALetter),
    (0x1D770, 0x1D788, WordBreak::ALetter),
    (0x1D78A, 0x1D7A8, WordBreak::ALetter),
    (0x1D7AA, 0x1D7C2, WordBreak::ALetter),
    (0x1D7C4, 0x1D7CB, WordBreak::ALetter),
    (0x1D7CE, 0x1D7FF, WordBreak::Numeric),
    (0x1DA00, 0x1DA36, WordBreak::Extend),
    (0x1DA3B, 0x1DA6C, WordBreak::Extend),
    (0x1DA75, 0x1DA75, WordBreak::Extend),
    (0x1DA84, 0x1DA84, WordBreak::Extend),
    (0x1DA9B, 0x1DA9F, WordBreak::Extend),
    (0x1DAA1, 0x1DAAF, WordBreak::Extend),
    (0x1DF00, 0x1DF1E, WordBreak::ALetter),
    (0x1DF25, 0x1DF2A, WordBreak::ALetter),
    (0x1E000, 0x1E006, WordBreak::Extend),
    (0x1E008, 0x1E018, WordBreak::Extend),
    (0x1E01B, 0x1E021, WordBreak::Extend),
    (0x1E023, 0x1E024, WordBreak::Extend),
    (0x1E026, 0x1E02A, WordBreak::Extend),
    (0x1E030, 0x1E06D, WordBreak::ALetter),
    (0x1E08F, 0x1E08F, WordBreak::Extend),
    (0x1E100, 0x1E12C, WordBreak::ALetter),
    (0x1E130, 0x1E136, WordBreak::Extend),
    (0x1E137, 0x1E13D, WordBreak::ALetter),
    (0x1E140, 0x1E149, WordBreak::Numeric),
    (0x1E14E, 0x1E14E, WordBreak::ALetter),
    (0x1E290, 0x1E2AD, WordBreak::ALetter),
    (0x1E2AE, 0x1E2AE, WordBreak::Extend),
    (0x1E2C0, 0x1E2EB, WordBreak::ALetter),
    (0x1E2EC, 0x1E2EF, WordBreak::Extend),
    (0x1E2F0, 0x1E2F9, WordBreak::Numeric),
    (0x1E4D0, 0x1E4EB, WordBreak::ALetter),
    (0x1E4EC, 0x1E4EF, WordBreak::Extend),
    (0x1E4F0, 0x1E4F9, WordBreak::Numeric),
    (0x1E7E0, 0x1E7E6, WordBreak::ALetter),
    (0x1E7E8, 0x1E7EB, WordBreak::ALetter),
    (0x1E7ED, 0x1E7EE, WordBreak::ALetter),
    (0x1E7F0, 0x1E7FE, WordBreak::ALetter),
    (0x1E800, 0x1E8C4, WordBreak::ALetter),
    (0x1E8D0, 0x1E8D6, WordBreak::Extend),
    (0x1E900, 0x1E943, WordBreak::ALetter),
    (0x1E944, 0x1E94A, WordBreak::Extend),
    (0x1E94B, 0x1E94B, WordBreak::ALetter),
    (0x1E950, 0x1E959, WordBreak::Numeric),
    (0x1EE00, 0x1EE03, WordBreak::ALetter),
    (0x1EE05, 0x1EE1F, WordBreak::ALetter),
    (0x1EE21, 0x1EE22, WordBreak::ALetter),
    (0x1EE24, 0x1EE24, WordBreak::ALetter),
    (0x1EE27, 0x1EE27, WordBreak::ALetter),
    (0x1EE29, 0x1EE32, WordBreak::ALetter),
    (0x1EE34, 0x1EE37, WordBreak::ALetter),
    (0x1EE39, 0x1EE39, WordBreak::ALetter),
    (0x1EE3B, 0x1EE3B, WordBreak::ALetter),
    (0x1EE42, 0x1EE42, WordBreak::ALetter),
    (0x1EE47, 0x1EE47, WordBreak::ALetter),
    (0x1EE49, 0x1EE49, WordBreak::ALetter),
    (0x1EE4B, 0x1EE4B, WordBreak::ALetter),
    (0x1EE4D, 0x1EE4F, WordBreak::ALetter),
    (0x1EE51, 0x1EE52, WordBreak::ALetter),
    (0x1EE54, 0x1EE54, WordBreak::ALetter),
    (0x1EE57, 0x1EE57, WordBreak::ALetter),
    (0x1EE59, 0x1EE59, WordBreak::ALetter),
    (0x1EE5B, 0x1EE5B, WordBreak::ALetter),
    (0x1EE5D, 0x1EE5D, WordBreak::ALetter),
    (0x1EE5F, 0x1EE5F, WordBreak::ALetter),
    (0x1EE61, 0x1EE62, WordBreak::ALetter),
    (0x1EE64, 0x1EE64, WordBreak::ALetter),
    (0x1EE67, 0x1EE6A, WordBreak::ALetter),
    (0x1EE6C, 0x1EE72, WordBreak::ALetter),
    (0x1EE74, 0x1EE77, WordBreak::ALetter),
    (0x1EE79, 0x1EE7C, WordBreak::ALetter),
    (0x1EE7E, 0x1EE7E, WordBreak::ALetter),
    (0x1EE80, 0x1EE89, WordBreak::ALetter),
    (0x1EE8B, 0x1EE9B, WordBreak::ALetter),
    (0x1EEA1, 0x1EEA3, WordBreak::ALetter),
    (0x1EEA5, 0x1EEA9, WordBreak::ALetter),
    (0x1EEAB, 0x1EEBB, WordBreak::ALetter),
    (0x1F130, 0x1F149, WordBreak::ALetter),
    (0x1F150, 0x1F169, WordBreak::ALetter),
    (0x1F170, 0x1F189, WordBreak::ALetter),
    (0x1F1E6, 0x1F1FF, WordBreak::RegionalIndicator),
    (0x1F3FB, 0x1F3FF, WordBreak::Extend),
    (0x1FBF0, 0x1FBF9, WordBreak::Numeric),
    (0xE0001, 0xE0001, WordBreak::Format),
    (0xE0020, 0xE007F, WordBreak::Extend),
    (0xE0100, 0xE01EF, WordBreak::Extend),
];

// -------- Sentence_Break --------------------------------------------------------

/// Sentence_Break values for every non-ASCII codepoint that is not `Other`.
pub(crate) static SENTENCE_BREAK: &[ClassRange<SentenceBreak>] = &[
    (0x0085, 0x0085, SentenceBreak::Sep),
    (0x00A0, 0x00A0, SentenceBreak::Sp),
    (0x00AA, 0x00AA, SentenceBreak::Lower),
    (0x00AB, 0x00AB, SentenceBreak::Close),
    (0x00AD, 0x00AD, SentenceBreak::Format),
    (0x00B5, 0x00B5, SentenceBreak::Lower),
    (0x00BA, 0x00BA, SentenceBreak::Lower),
    (0x00BB, 0x00BB, SentenceBreak::Close),
    (0x00C0, 0x00D6, SentenceBreak::Upper),
    (0x00D8, 0x00DE, SentenceBreak::Upper),
    (0x00DF, 0x00F6, SentenceBreak::Lower),
    (0x00F8, 0x00FF, SentenceBreak::Lower),
    (0x0100, 0x0100, SentenceBreak::Upper),
    (0x0101, 0x0101, SentenceBreak::Lower),
    (0x0102, 0x0102, SentenceBreak::Upper),
    (0x0103, 0x0103, SentenceBreak::Lower),
    (0x0104, 0x0104, SentenceBreak::Upper),
    (0x0105, 0x0105, SentenceBreak::Lower),
    (0x0106, 0x0106, SentenceBreak::Upper),
    (0x0107, 0x0107, SentenceBreak::Lower),
    (0x0108, 0x0108, SentenceBreak::Upper),
    (0x0109, 0x0109, SentenceBreak::Lower),
    (0x010A, 0x010A, SentenceBreak::Upper),
    (0x010B, 0x010B, SentenceBreak::Lower),
    (0x010C, 0x010C, SentenceBreak::Upper),
    (0x010D, 0x010D, SentenceBreak::Lower),
    (0x010E, 0x010E, SentenceBreak::Upper),
    (0x010F, 0x010F, SentenceBreak::Lower),
    (0x0110, 0x0110, SentenceBreak::Upper),
    (0x0111, 0x0111, SentenceBreak::Lower),
    (0x0112, 0x0112, SentenceBreak::Upper),
    (0x0113, 0x0113, SentenceBreak::Lower),
    (0x0114, 0x0114, SentenceBreak::Upper),
    (0x0115, 0x0115, SentenceBreak::Lower),
    (0x0116, 0x0116, SentenceBreak::Upper),
    (0x0117, 0x0117, SentenceBreak::Lower),
    (0x0118, 0x0118, SentenceBreak::Upper),
    (0x0119, 0x0119, SentenceBreak::Lower),
    (0x011A, 0x011A, SentenceBreak::Upper),
    (0x011B, 0x011B, SentenceBreak::Lower),
    (0x011C, 0x011C, SentenceBreak::Upper),
    (0x011D, 0x011D, SentenceBreak::Lower),
    (0x011E, 0x011E, SentenceBreak::Upper),
    (0x011F, 0x011F, SentenceBreak::Lower),
    (0x0120, 0x0120, SentenceBreak::Upper),
    (0x0121, 0x0121, SentenceBreak::Lower),
    (0x0122, 0x0122, SentenceBreak::Upper),
    (0x0123, 0x0123, SentenceBreak::Lower),
    (0x0124, 0x0124, SentenceBreak::Upper),
    (0x0125, 0x0125, SentenceBreak::Lower),
    (0x0126, 0x0126, SentenceBreak::Upper),
    (0x0127, 0x0127, SentenceBreak::Lower),
    (0x0128, 0x0128, SentenceBreak::Upper),
    (0x0129, 0x0129, SentenceBreak::Lower),
    (0x012A, 0x012A, SentenceBreak::Upper),
    (0x012B, 0x012B, SentenceBreak::Lower),
    (0x012C, 0x012C, SentenceBreak::Upper),
    (0x012D, 0x012D, SentenceBreak::Lower),
    (0x012E, 0x012E, SentenceBreak::Upper),
    (0x012F, 0x012F, SentenceBreak::Lower),
    (0x0130, 0x0130, SentenceBreak::Upper),
    (0x0131, 0x0131, SentenceBreak::Lower),
    (0x0132, 0x0132, SentenceBreak::Upper),
    (0x0133, 0x0133, SentenceBreak::Lower),
    (0x0134, 0x0134, SentenceBreak::Upper),
    (0x0135, 0x0135, SentenceBreak::Lower),
    (0x0136, 0x0136, SentenceBreak::Upper),
    (0x0137, 0x0138, SentenceBreak::Lower),
    (0x0139, 0x0139, SentenceBreak::Upper),
    (0x013A, 0x013A, SentenceBreak::Lower),
    (0x013B, 0x013B, SentenceBreak::Upper),
    (0x013C, 0x013C, SentenceBreak::Lower),
    (0x013D, 0x013D, SentenceBreak::Upper),
    (0x013E, 0x013E, SentenceBreak::Lower),
    (0x013F, 0x013F, SentenceBreak::Upper),
    (0x0140, 0x0140, SentenceBreak::Lower),
    (0x0141, 0x0141, SentenceBreak::Upper),
    (0x0142, 0x0142, SentenceBreak::Lower),
    (0x0143, 0x0143, SentenceBreak::Upper),
    (0x0144, 0x0144, SentenceBreak::Lower),
    (0x0145, 0x0145, SentenceBreak::Upper),
    (0x0146, 0x0146, SentenceBreak::Lower),
    (0x0147, 0x0147, SentenceBreak::Upper),
    (0x0148, 0x0149, SentenceBreak::Lower),
    (0x014A, 0x014A, SentenceBreak::Upper),
    (0x014B, 0x014B, SentenceBreak::Lower),
    (0x014C, 0x014C, SentenceBreak::Upper),
    (0x014D, 0x014D, SentenceBreak::Lower),
    (0x014E, 0x014E, SentenceBreak::Upper),
    (0x014F, 0x014F, SentenceBreak::Lower),
    (0x0150, 0x0150, SentenceBreak::Upper),
    (0x0151, 0x0151, SentenceBreak::Lower),
    (0x0152, 0x0152, SentenceBreak::Upper),
    (0x0153, 0x0153, SentenceBreak::Lower),
    (0x0154, 0x0154, SentenceBreak::Upper),
    (0x0155, 0x0155, SentenceBreak::Lower),
    (0x0156, 0x0156, SentenceBreak::Upper),
    (0x0157, 0x0157, SentenceBreak::Lower),
    (0x0158, 0x0158, SentenceBreak::Upper),
    (0x0159, 0x0159, SentenceBreak::Lower),
    (0x015A, 0x015A, SentenceBreak::Upper),
    (0x015B, 0x015B, SentenceBreak::Lower),
    (0x015C, 0x015C, SentenceBreak::Upper),
    (0x015D, 0x015D, SentenceBreak::Lower),
    (0x015E, 0x015E, SentenceBreak::Upper),
    (0x015F, 0x015F, SentenceBreak::Lower),
    (0x0160, 0x0160, SentenceBreak::Upper),
    (0x0161, 0x0161, SentenceBreak::Lower),
    (0x0162, 0x0162, SentenceBreak::Upper),
    (0x0163, 0x0163, SentenceBreak::Lower),
    (0x0164, 0x0164, SentenceBreak::Upper),
    (0x0165, 0x0165, SentenceBreak::Lower),
    (0x0166, 0x0166, SentenceBreak::Upper),
    (0x0167, 0x0167, SentenceBreak::Lower),
    (0x0168, 0x0168, SentenceBreak::Upper),
    (0x0169, 0x0169, SentenceBreak::Lower),
    (0x016A, 0x016A, SentenceBreak::Upper),
    (0x016B, 0x016B, SentenceBreak::Lower),
    (0x016C, 0x016C, SentenceBreak::Upper),
    (0x016D, 0x016D, SentenceBreak::Lower),
    (0x016E, 0x016E, SentenceBreak::Upper),
    (0x016F, 0x016F, SentenceBreak::Lower),
    (0x0170, 0x0170, SentenceBreak::Upper),
    (0x0171, 0x0171, SentenceBreak::Lower),
    (0x0172, 0x0172, SentenceBreak::Upper),
    (0x0173, 0x0173, SentenceBreak::Lower),
    (0x0174, 0x0174, SentenceBreak::Upper),
    (0x0175, 0x0175, SentenceBreak::Lower),
    (0x0176, 0x0176, SentenceBreak::Upper),
    (0x0177, 0x0177, SentenceBreak::Lower),
    (0x0178, 0x0179, SentenceBreak::Upper),
    (0x017A, 0x017A, SentenceBreak::Lower),
    (0x017B, 0x017B, SentenceBreak::Upper),
    (0x017C, 0x017C, SentenceBreak::Lower),
    (0x017D, 0x017D, SentenceBreak::Upper),
    (0x017E, 0x0180, SentenceBreak::Lower),
    (0x0181, 0x0182, SentenceBreak::Upper),
    (0x0183, 0x0183, SentenceBreak::Lower),
    (0x0184, 0x0184, SentenceBreak::Upper),
    (0x0185, 0x0185, SentenceBreak::Lower),
    (0x0186, 0x0187, SentenceBreak::Upper),
    (0x0188, 0x0188, SentenceBreak::Lower),
    (0x0189, 0x018B, SentenceBreak::Upper),
    (0x018C, 0x018D, SentenceBreak::Lower),
    (0x018E, 0x0191, SentenceBreak::Upper),
    (0x0192, 0x0192, SentenceBreak::Lower),
    (0x0193, 0x0194, SentenceBreak::Upper),
    (0x0195, 0x0195, SentenceBreak::Lower),
    (0x0196, 0x0198, SentenceBreak::Upper),
    (0x0199, 0x019B, SentenceBreak::Lower),
    (0x019C, 0x019D, SentenceBreak::Upper),
    (0x019E, 0x019E, SentenceBreak::Lower),
    (0x019F, 0x01A0, SentenceBreak::Upper),
    (0x01A1, 0x01A1, SentenceBreak::Lower),
    (0x01A2, 0x01A2, SentenceBreak::Upper),
    (0x01A3, 0x01A3, SentenceBreak::Lower),
    (0x01A4, 0x01A4, SentenceBreak::Upper),
    (0x01A5, 0x01A5, SentenceBreak::Lower),
    (0x01A6, 0x01A7, SentenceBreak::Upper),
    (0x01A8, 0x01A8, SentenceBreak::Lower),
    (0x01A9, 0x01A9, SentenceBreak::Upper),
    (0x01AA, 0x01AB, SentenceBreak::Lower),
    (0x01AC, 0x01AC, SentenceBreak::Upper),
    (0x01AD, 0x01AD, SentenceBreak::Lower),
    (0x01AE, 0x01AF, SentenceBreak::Upper),
    (0x01B0, 0x01B0, SentenceBreak::Lower),
    (0x01B1, 0x01B3, SentenceBreak::Upper),
    (0x01B4, 0x01B4, SentenceBreak::Lower),
    (0x01B5, 0x01B5, SentenceBreak::Upper),
    (0x01B6, 0x01B6, SentenceBreak::Lower),
    (0x01B7, 0x01B8, SentenceBreak::Upper),
    (0x01B9, 0x01BA, SentenceBreak::Lower),
    (0x01BB, 0x01BB, SentenceBreak::OLetter),
    (0x01BC, 0x01BC, SentenceBreak::Upper),
    (0x01BD, 0x01BF, SentenceBreak::Lower),
    (0x01C0, 0x01C3, SentenceBreak::OLetter),
    (0x01C4, 0x01C5, SentenceBreak::Upper),
    (0x01C6, 0x01C6, SentenceBreak::Lower),
    (0x01C7, 0x01C8, SentenceBreak::Upper),
    (0x01C9, 0x01C9, SentenceBreak::Lower),
    (0x01CA, 0x01CB, SentenceBreak::Upper),
    (0x01CC, 0x01CC, SentenceBreak::Lower),
    (0x01CD, 0x01CD, SentenceBreak::Upper),
    (0x01CE, 0x01CE, SentenceBreak::Lower),
    (0x01CF, 0x01CF, SentenceBreak::Upper),
    (0x01D0, 0x01D0, SentenceBreak::Lower),
    (0x01D1, 0x01D1, SentenceBreak::Upper),
    (0x01D2, 0x01D2, SentenceBreak::Lower),
    (0x01D3, 0x01D3, SentenceBreak::Upper),
    (0x01D4, 0x01D4, SentenceBreak::Lower),
    (0x01D5, 0x01D5, SentenceBreak::Upper),
    (0x01D6, 0x01D6, SentenceBreak::Lower),
    (0x01D7, 0x01D7, SentenceBreak::Upper),
    (0x01D8, 0x01D8, SentenceBreak::Lower),
    (0x01D9, 0x01D9, SentenceBreak::Upper),
    (0x01DA, 0x01DA, SentenceBreak::Lower),
    (0x01DB, 0x01DB, SentenceBreak::Upper),
    (0x01DC, 0x01DD, SentenceBreak::Lower),
    (0x01DE, 0x01DE, SentenceBreak::Upper),
    (0x01DF, 0x01DF, SentenceBreak::Lower),
    (0x01E0, 0x01E0, SentenceBreak::Upper),
    (0x01E1, 0x01E1, SentenceBreak::Lower),
    (0x01E2, 0x01E2, SentenceBreak::Upper),
    (0x01E3, 0x01E3, SentenceBreak::Lower),
    (0x01E4, 0x01E4, SentenceBreak::Upper),
    (0x01E5, 0x01E5, SentenceBreak::Lower),
    (0x01E6, 0x01E6, SentenceBreak::Upper),
    (0x01E7, 0x01E7, SentenceBreak::Lower),
    (0x01E8, 0x01E8, SentenceBreak::Upper),
    (0x01E9, 0x01E9, SentenceBreak::Lower),
    (0x01EA, 0x01EA, SentenceBreak::Upper),
    (0x01EB, 0x01EB, SentenceBreak::Lower),
    (0x01EC, 0x01EC, SentenceBreak::Upper),
    (0x01ED, 0x01ED, SentenceBreak::Lower),
    (0x01EE, 0x01EE, SentenceBreak::Upper),
    (0x01EF, 0x01F0, SentenceBreak::Lower),
    (0x01F1, 0x01F2, SentenceBreak::Upper),
    (0x01F3, 0x01F3, SentenceBreak::Lower),
    (0x01F4, 0x01F4, SentenceBreak::Upper),
    (0x01F5, 0x01F5, SentenceBreak::Lower),
    (0x01F6, 0x01F8, SentenceBreak::Upper),
    (0x01F9, 0x01F9, SentenceBreak::Lower),
    (0x01FA, 0x01FA, SentenceBreak::Upper),
    (0x01FB, 0x01FB, SentenceBreak::Lower),
    (0x01FC, 0x01FC, SentenceBreak::Upper),
    (0x01FD, 0x01FD, SentenceBreak::Lower),
    (0x01FE, 0x01FE, SentenceBreak::Upper),
    (0x01FF, 0x01FF, SentenceBreak::Lower),
    (0x0200, 0x0200, SentenceBreak::Upper),
    (0x0201, 0x0201, SentenceBreak::Lower),
    (0x0202, 0x0202, SentenceBreak::Upper),
    (0x0203, 0x0203, SentenceBreak::Lower),
    (0x0204, 0x0204, SentenceBreak::Upper),
    (0x0205, 0x0205, SentenceBreak::Lower),
    (0x0206, 0x0206, SentenceBreak::Upper),
    (0x0207, 0x0207, SentenceBreak::Lower),
    (0x0208, 0x0208, SentenceBreak::Upper),
    (0x0209, 0x0209, SentenceBreak::Lower),
    (0x020A, 0x020A, SentenceBreak::Upper),
    (0x020B, 0x020B, SentenceBreak::Lower),
    (0x020C, 0x020C, SentenceBreak::Upper),
    (0x020D, 0x020D, SentenceBreak::Lower),
    (0x020E, 0x020E, SentenceBreak::Upper),
    (0x020F, 0x020F, SentenceBreak::Lower),
    (0x0210, 0x0210, SentenceBreak::Upper),
    (0x0211, 0x0211, SentenceBreak::Lower),
    (0x0212, 0x0212, SentenceBreak::Upper),
    (0x0213, 0x0213, SentenceBreak::Lower),
    (0x0214, 0x0214, SentenceBreak::Upper),
    (0x0215, 0x0215, SentenceBreak::Lower),
    (0x0216, 0x0216, SentenceBreak::Upper),
    (0x0217, 0x0217, SentenceBreak::Lower),
    (0x0218, 0x0218, SentenceBreak::Upper),
    (0x0219, 0x0219, SentenceBreak::Lower),
    (0x021A, 0x021A, SentenceBreak::Upper),
    (0x021B, 0x021B, SentenceBreak::Lower),
    (0x021C, 0x021C, SentenceBreak::Upper),
    (0x021D, 0x021D, SentenceBreak::Lower),
    (0x021E, 0x021E, SentenceBreak::Upper),
    (0x021F, 0x021F, SentenceBreak::Lower),
    (0x0220, 0x0220, SentenceBreak::Upper),
    (0x0221, 0x0221, SentenceBreak::Lower),
    (0x0222, 0x0222, SentenceBreak::Upper),
    (0x0223, 0x0223, SentenceBreak::Lower),
    (0x0224, 0x0224, SentenceBreak::Upper),
    (0x0225, 0x0225, SentenceBreak::Lower),
    (0x0226, 0x0226, SentenceBreak::Upper),
    (0x0227, 0x0227, SentenceBreak::Lower),
    (0x0228, 0x0228, SentenceBreak::Upper),
    (0x0229, 0x0229, SentenceBreak::Lower),
    (0x022A, 0x022A, SentenceBreak::Upper),
    (0x022B, 0x022B, SentenceBreak::Lower),
    (0x022C, 0x022C, SentenceBreak::Upper),
    (0x022D, 0x022D, SentenceBreak::Lower),
    (0x022E, 0x022E, SentenceBreak::Upper),
    (0x022F, 0x022F, SentenceBreak::Lower),
    (0x0230, 0x0230, SentenceBreak::Upper),
    (0x0231, 0x0231, SentenceBreak::Lower),
    (0x0232, 0x0232, SentenceBreak::Upper),
    (0x0233, 0x0239, SentenceBreak::Lower),
    (0x023A, 0x023B, SentenceBreak::Upper),
    (0x023C, 0x023C, SentenceBreak::Lower),
    (0x023D, 0x023E, SentenceBreak::Upper),
    (0x023F, 0x0240, SentenceBreak::Lower),
    (0x0241, 0x0241, SentenceBreak::Upper),
    (0x0242, 0x0242, SentenceBreak::Lower),
    (0x0243, 0x0246, SentenceBreak::Upper),
    (0x0247, 0x0247, SentenceBreak::Lower),
    (0x0248, 0x0248, SentenceBreak::Upper),
    (0x0249, 0x0249, SentenceBreak::Lower),
    (0x024A, 0x024A, SentenceBreak::Upper),
    (0x024B, 0x024B, SentenceBreak::Lower),
    (0x024C, 0x024C, SentenceBreak::Upper),
    (0x024D, 0x024D, SentenceBreak::Lower),
    (0x024E, 0x024E, SentenceBreak::Upper),
    (0x024F, 0x0293, SentenceBreak::Lower),
    (0x0294, 0x0294, SentenceBreak::OLetter),
    (0x0295, 0x02B8, SentenceBreak::Lower),
    (0x02B9, 0x02BF, SentenceBreak::OLetter),
    (0x02C0, 0x02C1, SentenceBreak::Lower),
    (0x02C6, 0x02D1, SentenceBreak::OLetter),
    (0x02E0, 0x02E4, SentenceBreak::Lower),
    (0x02EC, 0x02EC, SentenceBreak::OLetter),
    (0x02EE, 0x02EE, SentenceBreak::OLetter),
    (0x0300, 0x036F, SentenceBreak::Extend),
    (0x0370, 0x0370, SentenceBreak::Upper),
    (0x0371, 0x0371, SentenceBreak::Lower),
    (0x0372, 0x0372, SentenceBreak::Upper),
    (0x0373, 0x0373, SentenceBreak::Lower),
    (0x0374, 0x0374, SentenceBreak::OLetter),
    (0x0376, 0x0376, SentenceBreak::Upper),
    (0x0377, 0x0377, SentenceBreak::Lower),
    (0x037A, 0x037D, SentenceBreak::Lower),
    (0x037F, 0x037F, SentenceBreak::Upper),
    (0x0386, 0x0386, SentenceBreak::Upper),
    (0x0388, 0x038A, SentenceBreak::Upper),
    (0x038C, 0x038C, SentenceBreak::Upper),
    (0x038E, 0x038F, SentenceBreak::Upper),
    (0x0390, 0x0390, SentenceBreak::Lower),
    (0x0391, 0x03A1, SentenceBreak::Upper),
    (0x03A3, 0x03AB, SentenceBreak::Upper),
    (0x03AC, 0x03CE, SentenceBreak::Lower),
    (0x03CF, 0x03CF, SentenceBreak::Upper),
    (0x03D0, 0x03D1, SentenceBreak::Lower),
    (0x03D2, 0x03D4, SentenceBreak::Upper),
    (0x03D5, 0x03D7, SentenceBreak::Lower),
    (0x03D8, 0x03D8, SentenceBreak::Upper),
    (0x03D9, 0x03D9, SentenceBreak::Lower),
    (0x03DA, 0x03DA, SentenceBreak::Upper),
    (0x03DB, 0x03DB, SentenceBreak::Lower),
    (0x03DC, 0x03DC, SentenceBreak::Upper),
    (0x03DD, 0x03DD, SentenceBreak::Lower),
    (0x03DE, 0x03DE, SentenceBreak::Upper),
    (0x03DF, 0x03DF, SentenceBreak::Lower),
    (0x03E0, 0x03E0, SentenceBreak::Upper),
    (0x03E1, 0x03E1, SentenceBreak::Lower),
    (0x03E2, 0x03E2, SentenceBreak::Upper),
    (0x03E3, 0x03E3, SentenceBreak::Lower),
    (0x03E4, 0x03E4, SentenceBreak::Upper),
    (0x03E5, 0x03E5, SentenceBreak::Lower),
    (0x03E6, 0x03E6, SentenceBreak::Upper),
    (0x03E7, 0x03E7, SentenceBreak::Lower),
    (0x03E8, 0x03E8, SentenceBreak::Upper),
    (0x03E9, 0x03E9, SentenceBreak::Lower),
    (0x03EA, 0x03EA, SentenceBreak::Upper),
    (0x03EB, 0x03EB, SentenceBreak::Lower),
    (0x03EC, 0x03EC, SentenceBreak::Upper),
    (0x03ED, 0x03ED, SentenceBreak::Lower),
    (0x03EE, 0x03EE, SentenceBreak::Upper),
    (0x03EF, 0x03F3, SentenceBreak::Lower),
    (0x03F4, 0x03F4, SentenceBreak::Upper),
    (0x03F5, 0x03F5, SentenceBreak::Lower),
    (0x03F7, 0x03F7, SentenceBreak::Upper),
    (0x03F8, 0x03F8, SentenceBreak::Lower),
    (0x03F9, 0x03FA, SentenceBreak::Upper),
    (0x03FB, 0x03FC, SentenceBreak::Lower),
    (0x03FD, 0x042F, SentenceBreak::Upper),
    (0x0430, 0x045F, SentenceBreak::Lower),
    (0x0460, 0x0460, SentenceBreak::Upper),
    (0x0461, 0x0461, SentenceBreak::Lower),
    (0x0462, 0x0462, SentenceBreak::Upper),
    (0x0463, 0x0463, SentenceBreak::Lower),
    (0x0464, 0x0464, SentenceBreak::Upper),
    (0x0465, 0x0465, SentenceBreak::Lower),
    (0x0466, 0x0466, SentenceBreak::Upper),
    (0x0467, 0x0467, SentenceBreak::Lower),
    (0x0468, 0x0468, SentenceBreak::Upper),
    (0x0469, 0x0469, SentenceBreak::Lower),
    (0x046A, 0x046A, SentenceBreak::Upper),
    (0x046B, 0x046B, SentenceBreak::Lower),
    (0x046C, 0x046C, SentenceBreak::Upper),
    (0x046D, 0x046D, SentenceBreak::Lower),
    (0x046E, 0x046E, SentenceBreak::Upper),
    (0x046F, 0x046F, SentenceBreak::Lower),
    (0x0470, 0x0470, SentenceBreak::Upper),
    (0x0471, 0x0471, SentenceBreak::Lower),
    (0x0472, 0x0472, SentenceBreak::Upper),
    (0x0473, 0x0473, SentenceBreak::Lower),
    (0x0474, 0x0474, SentenceBreak::Upper),
    (0x0475, 0x0475, SentenceBreak::Lower),
    (0x0476, 0x0476, SentenceBreak::Upper),
    (0x0477, 0x0477, SentenceBreak::Lower),
    (0x0478, 0x0478, SentenceBreak::Upper),
    (0x0479, 0x0479, SentenceBreak::Lower),
    (0x047A, 0x047A, SentenceBreak::Upper),
    (0x047B, 0x047B, SentenceBreak::Lower),
    (0x047C, 0x047C, SentenceBreak::Upper),
    (0x047D, 0x047D, SentenceBreak::Lower),
    (0x047E, 0x047E, SentenceBreak::Upper),
    (0x047F, 0x047F, SentenceBreak::Lower),
    (0x0480, 0x0480, SentenceBreak::Upper),
    (0x0481, 0x0481, SentenceBreak::Lower),
    (0x0483, 0x0489, SentenceBreak::Extend),
    (0x048A, 0x048A, SentenceBreak::Upper),
    (0x048B, 0x048B, SentenceBreak::Lower),
    (0x048C, 0x048C, SentenceBreak::Upper),
    (0x048D, 0x048D, SentenceBreak::Lower),
    (0x048E, 0x048E, SentenceBreak::Upper),
    (0x048F, 0x048F, SentenceBreak::Lower),
    (0x0490, 0x0490, SentenceBreak::Upper),
    (0x0491, 0x0491, SentenceBreak::Lower),
    (0x0492, 0x0492, SentenceBreak::Upper),
    (0x0493, 0x0493, SentenceBreak::Lower),
    (0x0494, 0x0494, SentenceBreak::Upper),
    (0x0495, 0x0495, SentenceBreak::Lower),
    (0x0496, 0x0496, SentenceBreak::Upper),
    (0x0497, 0x0497, SentenceBreak::Lower),
    (0x0498, 0x0498, SentenceBreak::Upper),
    (0x0499, 0x0499, SentenceBreak::Lower),
    (0x049A, 0x049A, SentenceBreak::Upper),
    (0x049B, 0x049B, SentenceBreak::Lower),
    (0x049C, 0x049C, SentenceBreak::Upper),
    (0x049D, 0x049D, SentenceBreak::Lower),
    (0x049E, 0x049E, SentenceBreak::Upper),
    (0x049F, 0x049F, SentenceBreak::Lower),
    (0x04A0, 0x04A0, SentenceBreak::Upper),
    (0x04A1, 0x04A1, SentenceBreak::Lower),
    (0x04A2, 0x04A2, SentenceBreak::Upper),
    (0x04A3, 0x04A3, SentenceBreak::Lower),
    (0x04A4, 0x04A4, SentenceBreak::Upper),
    (0x04A5, 0x04A5, SentenceBreak::Lower),
    (0x04A6, 0x04A6, SentenceBreak::Upper),
    (0x04A7, 0x04A7, SentenceBreak::Lower),
    (0x04A8, 0x04A8, SentenceBreak::Upper),
    (0x04A9, 0x04A9, SentenceBreak::Lower),
    (0x04AA, 0x04AA, SentenceBreak::Upper),
    (0x04AB, 0x04AB, SentenceBreak::Lower),
    (0x04AC, 0x04AC, SentenceBreak::Upper),
    (0x04AD, 0x04AD, SentenceBreak::Lower),
    (0x04AE, 0x04AE, SentenceBreak::Upper),
    (0x04AF, 0x04AF, SentenceBreak::Lower),
    (0x04B0, 0x04B0, SentenceBreak::Upper),
    (0x04B1, 0x04B1, SentenceBreak::Lower),
    (0x04B2, 0x04B2, SentenceBreak::Upper),
    (0x04B3, 0x04B3, SentenceBreak::Lower),
    (0x04B4, 0x04B4, SentenceBreak::Upper),
    (0x04B5, 0x04B5, SentenceBreak::Lower),
    (0x04B6, 0x04B6, SentenceBreak::Upper),
    (0x04B7, 0x04B7, SentenceBreak::Lower),
    (0x04B8, 0x04B8, SentenceBreak::Upper),
    (0x04B9, 0x04B9, SentenceBreak::Lower),
    (0x04BA, 0x04BA, SentenceBreak::Upper),
    (0x04BB, 0x04BB, SentenceBreak::Lower),
    (0x04BC, 0x04BC, SentenceBreak::Upper),
    (0x04BD, 0x04BD, SentenceBreak::Lower),
    (0x04BE, 0x04BE, SentenceBreak::Upper),
    (0x04BF, 0x04BF, SentenceBreak::Lower),
    (0x04C0, 0x04C1, SentenceBreak::Upper),
    (0x04C2, 0x04C2, SentenceBreak::Lower),
    (0x04C3, 0x04C3, SentenceBreak::Upper),
    (0x04C4, 0x04C4, SentenceBreak::Lower),
    (0x04C5, 0x04C5, SentenceBreak::Upper),
    (0x04C6, 0x04C6, SentenceBreak::Lower),
    (0x04C7, 0x04C7, SentenceBreak::Upper),
    (0x04C8, 0x04C8, SentenceBreak::Lower),
    (0x04C9, 0x04C9, SentenceBreak::Upper),
    (0x04CA, 0x04CA, SentenceBreak::Lower),
    (0x04CB, 0x04CB, SentenceBreak::Upper),
    (0x04CC, 0x04CC, SentenceBreak::Lower),
    (0x04CD, 0x04CD, SentenceBreak::Upper),
    (0x04CE, 0x04CF, SentenceBreak::Lower),
    (0x04D0, 0x04D0, SentenceBreak::Upper),
    (0x04D1, 0x04D1, SentenceBreak::Lower),
    (0x04D2, 0x04D2, SentenceBreak::Upper),
    (0x04D3, 0x04D3, SentenceBreak::Lower),
    (0x04D4, 0x04D4, SentenceBreak::Upper),
    (0x04D5, 0x04D5, SentenceBreak::Lower),
    (0x04D6, 0x04D6, SentenceBreak::Upper),
    (0x04D7, 0x04D7, SentenceBreak::Lower),
    (0x04D8, 0x04D8, SentenceBreak::Upper),
    (0x04D9, 0x04D9, SentenceBreak::Lower),
    (0x04DA, 0x04DA, SentenceBreak::Upper),
    (0x04DB, 0x04DB, SentenceBreak::Lower),
    (0x04DC, 0x04DC, SentenceBreak::Upper),
    (0x04DD, 0x04DD, SentenceBreak::Lower),
    (0x04DE, 0x04DE, SentenceBreak::Upper),
    (0x04DF, 0x04DF, SentenceBreak::Lower),
    (0x04E0, 0x04E0, SentenceBreak::Upper),
    (0x04E1, 0x04E1, SentenceBreak::Lower),
    (0x04E2, 0x04E2, SentenceBreak::Upper),
    (0x04E3, 0x04E3, SentenceBreak::Lower),
    (0x04E4, 0x04E4, SentenceBreak::Upper),
    (0x04E5, 0x04E5, SentenceBreak::Lower),
    (0x04E6, 0x04E6, SentenceBreak::Upper),
    (0x04E7, 0x04E7, SentenceBreak::Lower),
    (0x04E8, 0x04E8, SentenceBreak::Upper),
    (0x04E9, 0x04E9, SentenceBreak::Lower),
    (0x04EA, 0x04EA, SentenceBreak::Upper),
    (0x04EB, 0x04EB, SentenceBreak::Lower),
    (0x04EC, 0x04EC, SentenceBreak::Upper),
    (0x04ED, 0x04ED, SentenceBreak::Lower),
    (0x04EE, 0x04EE, SentenceBreak::Upper),
    (0x04EF, 0x04EF, SentenceBreak::Lower),
    (0x04F0, 0x04F0, SentenceBreak::Upper),
    (0x04F1, 0x04F1, SentenceBreak::Lower),
    (0x04F2, 0x04F2, SentenceBreak::Upper),
    (0x04F3, 0x04F3, SentenceBreak::Lower),
    (0x04F4, 0x04F4, SentenceBreak::Upper),
    (0x04F5, 0x04F5, SentenceBreak::Lower),
    (0x04F6, 0x04F6, SentenceBreak::Upper),
    (0x04F7, 0x04F7, SentenceBreak::Lower),
    (0x04F8, 0x04F8, SentenceBreak::Upper),
    (0x04F9, 0x04F9, SentenceBreak::Lower),
    (0x04FA, 0x04FA, SentenceBreak::Upper),
    (0x04FB, 0x04FB, SentenceBreak::Lower),
    (0x04FC, 0x04FC, SentenceBreak::Upper),
    (0x04FD, 0x04FD, SentenceBreak::Lower),
    (0x04FE, 0x04FE, SentenceBreak::Upper),
    (0x04FF, 0x04FF, SentenceBreak::Lower),
    (0x0500, 0x0500, SentenceBreak::Upper),
    (0x0501, 0x0501, SentenceBreak::Lower),
    (0x0502, 0x0502, SentenceBreak::Upper),
    (0x0503, 0x0503, SentenceBreak::Lower),
    (0x0504, 0x0504, SentenceBreak::Upper),
    (0x0505, 0x0505, SentenceBreak::Lower),
    (0x0506, 0x0506, SentenceBreak::Upper),
    (0x0507, 0x0507, SentenceBreak::Lower),
    (0x0508, 0x0508, SentenceBreak::Upper),
    (0x0509, 0x0509, SentenceBreak::Lower),
    (0x050A, 0x050A, SentenceBreak::Upper),
    (0x050B, 0x050B, SentenceBreak::Lower),
    (0x050C, 0x050C, SentenceBreak::Upper),
    (0x050D, 0x050D, SentenceBreak::Lower),
    (0x050E, 0x050E, SentenceBreak::Upper),
    (0x050F, 0x050F, SentenceBreak::Lower),
    (0x0510, 0x0510, SentenceBreak::Upper),
    (0x0511, 0x0511, SentenceBreak::Lower),
    (0x0512, 0x0512, SentenceBreak::Upper),
    (0x0513, 0x0513, SentenceBreak::Lower),
    (0x0514, 0x0514, SentenceBreak::Upper),
    (0x0515, 0x0515, SentenceBreak::Lower),
    (0x0516, 0x0516, SentenceBreak::Upper),
    (0x0517, 0x0517, SentenceBreak::Lower),
    (0x0518, 0x0518, SentenceBreak::Upper),
    (0x0519, 0x0519, SentenceBreak::Lower),
    (0x051A, 0x051A, SentenceBreak::Upper),
    (0x051B, 0x051B, SentenceBreak::Lower),
    (0x051C, 0x051C, SentenceBreak::Upper),
    (0x051D, 0x051D, SentenceBreak::Lower),
    (0x051E, 0x051E, SentenceBreak::Upper),
    (0x051F, 0x051F, SentenceBreak::Lower),
    (0x0520, 0x0520, SentenceBreak::Upper),
    (0x0521, 0x0521, SentenceBreak::Lower),
    (0x0522, 0x0522, SentenceBreak::Upper),
    (0x0523, 0x0523, SentenceBreak::Lower),
    (0x0524, 0x0524, SentenceBreak::Upper),
    (0x0525, 0x0525, SentenceBreak::Lower),
    (0x0526, 0x0526, SentenceBreak::Upper),
    (0x0527, 0x0527, SentenceBreak::Lower),
    (0x0528, 0x0528, SentenceBreak::Upper),
    (0x0529, 0x0529, SentenceBreak::Lower),
    (0x052A, 0x052A, SentenceBreak::Upper),
    (0x052B, 0x052B, SentenceBreak::Lower),
    (0x052C, 0x052C, SentenceBreak::Upper),
    (0x052D, 0x052D, SentenceBreak::Lower),
    (0x052E, 0x052E, SentenceBreak::Upper),
    (0x052F, 0x052F, SentenceBreak::Lower),
    (0x0531, 0x0556, SentenceBreak::Upper),
    (0x0559, 0x0559, SentenceBreak::OLetter),
    (0x055D, 0x055D, SentenceBreak::SContinue),
    (0x0560, 0x0588, SentenceBreak::Lower),
    (0x0589, 0x0589, SentenceBreak::STerm),
    (0x0591, 0x05BD, SentenceBreak::Extend),
    (0x05BF, 0x05BF, SentenceBreak::Extend),
    (0x05C1, 0x05C2, SentenceBreak::Extend),
    (0x05C4, 0x05C5, SentenceBreak::Extend),
    (0x05C7, 0x05C7, SentenceBreak::Extend),
    (0x05D0, 0x05EA, SentenceBreak::OLetter),
    (0x05EF, 0x05F3, SentenceBreak::OLetter),
    (0x0600, 0x0605, SentenceBreak::Numeric),
    (0x060C, 0x060D, SentenceBreak::SContinue),
    (0x0610, 0x061A, SentenceBreak::Extend),
    (0x061C, 0x061C, SentenceBreak::Format),
    (0x061D, 0x061F, SentenceBreak::STerm),
    (0x0620, 0x064A, SentenceBreak::OLetter),
    (0x064B, 0x065F, SentenceBreak::Extend),
    (0x0660, 0x0669, SentenceBreak::Numeric),
    (0x066B, 0x066C, SentenceBreak::Numeric),
    (0x066E, 0x066F, SentenceBreak::OLetter),
    (0x0670, 0x0670, SentenceBreak::Extend),
    (0x0671, 0x06D3, SentenceBreak::OLetter),
    (0x06D4, 0x06D4, SentenceBreak::STerm),
    (0x06D5, 0x06D5, SentenceBreak::OLetter),
    (0x06D6, 0x06DC, SentenceBreak::Extend),
    (0x06DD, 0x06DD, SentenceBreak::Numeric),
    (0x06DF, 0x06E4, SentenceBreak::Extend),
    (0x06E5, 0x06E6, SentenceBreak::OLetter),
    (0x06E7, 0x06E8, SentenceBreak::Extend),
    (0x06EA, 0x06ED, SentenceBreak::Extend),
    (0x06EE, 0x06EF, SentenceBreak::OLetter),
    (0x06F0, 0x06F9, SentenceBreak::Numeric),
    (0x06FA, 0x06FC, SentenceBreak::OLetter),
    (0x06FF, 0x06FF, SentenceBreak::OLetter),
    (0x0700, 0x0702, SentenceBreak::STerm),
    (0x070F, 0x070F, SentenceBreak::Format),
    (0x0710, 0x0710, SentenceBreak::OLetter),
    (0x0711, 0x0711, SentenceBreak::Extend),
    (0x0712, 0x072F, SentenceBreak::OLetter),
    (0x0730, 0x074A, SentenceBreak::Extend),
    (0x074D, 0x07A5, SentenceBreak::OLetter),
    (0x07A6, 0x07B0, SentenceBreak::Extend),
    (0x07B1, 0x07B1, SentenceBreak::OLetter),
    (0x07C0, 0x07C9, SentenceBreak::Numeric),
    (0x07CA, 0x07EA, SentenceBreak::OLetter),
    (0x07EB, 0x07F3, SentenceBreak::Extend),
    (0x07F4, 0x07F5, SentenceBreak::OLetter),
    (0x07F8, 0x07F8, SentenceBreak::SContinue),
    (0x07F9, 0x07F9, SentenceBreak::STerm),
    (0x07FA, 0x07FA, SentenceBreak::OLetter),
    (0x07FD, 0x07FD, SentenceBreak::Extend),
    (0x0800, 0x0815, SentenceBreak::OLetter),
    (0x0816, 0x0819, SentenceBreak::Extend),
    (0x081A, 0x081A, SentenceBreak::OLetter),
    (0x081B, 0x0823, SentenceBreak::Extend),
    (0x0824, 0x0824, SentenceBreak::OLetter),
    (0x0825, 0x0827, SentenceBreak::Extend),
    (0x0828, 0x0828, SentenceBreak::OLetter),
    (0x0829, 0x082D, SentenceBreak::Extend),
    (0x0837, 0x0837, SentenceBreak::STerm),
    (0x0839, 0x0839, SentenceBreak::STerm),
    (0x083D, 0x083E, SentenceBreak::STerm),
    (0x0840, 0x0858, SentenceBreak::OLetter),
    (0x0859, 0x085B, SentenceBreak::Extend),
    (0x0860, 0x086A, SentenceBreak::OLetter),
    (0x0870, 0x0887, SentenceBreak::OLetter),
    (0x0889, 0x088E, SentenceBreak::OLetter),
    (0x0890, 0x0891, SentenceBreak::Numeric),
    (0x0898, 0x089F, SentenceBreak::Extend),
    (0x08A0, 0x08C9, SentenceBreak::OLetter),
    (0x08CA, 0x08E1, SentenceBreak::Extend),
    (0x08E2, 0x08E2, SentenceBreak::Numeric),
    (0x08E3, 0x0903, SentenceBreak::Extend),
    (0x0904, 0x0939, SentenceBreak::OLetter),
    (0x093A, 0x093C, SentenceBreak::Extend),
    (0x093D, 0x093D, SentenceBreak::OLetter),
    (0x093E, 0x094F, SentenceBreak::Extend),
    (0x0950, 0x0950, SentenceBreak::OLetter),
    (0x0951, 0x0957, SentenceBreak::Extend),
    (0x0958, 0x0961, SentenceBreak::OLetter),
    (0x0962, 0x0963, SentenceBreak::Extend),
    (0x0964, 0x0965, SentenceBreak::STerm),
    (0x0966, 0x096F, SentenceBreak::Numeric),
    (0x0971, 0x0980, SentenceBreak::OLetter),
    (0x0981, 0x0983, SentenceBreak::Extend),
    (0x0985, 0x098C, SentenceBreak::OLetter),
    (0x098F, 0x0990, SentenceBreak::OLetter),
    (0x0993, 0x09A8, SentenceBreak::OLetter),
    (0x09AA, 0x09B0, SentenceBreak::OLetter),
    (0x09B2, 0x09B2, SentenceBreak::OLetter),
    (0x09B6, 0x09B9, SentenceBreak::OLetter),
    (0x09BC, 0x09BC, SentenceBreak::Extend),
    (0x09BD, 0x09BD, SentenceBreak::OLetter),
    (0x09BE, 0x09C4, SentenceBreak::Extend),
    (0x09C7, 0x09C8, SentenceBreak::Extend),
    (0x09CB, 0x09CD, SentenceBreak::Extend),
    (0x09CE, 0x09CE, SentenceBreak::OLetter),
    (0x09D7, 0x09D7, SentenceBreak::Extend),
    (0x09DC, 0x09DD, SentenceBreak::OLetter),
    (0x09DF, 0x09E1, SentenceBreak::OLetter),
    (0x09E2, 0x09E3, SentenceBreak::Extend),
    (0x09E6, 0x09EF, SentenceBreak::Numeric),
    (0x09F0, 0x09F1, SentenceBreak::OLetter),
    (0x09FC, 0x09FC, SentenceBreak::OLetter),
    (0x09FE, 0x09FE, SentenceBreak::Extend),
    (0x0A01, 0x0A03, SentenceBreak::Extend),
    (0x0A05, 0x0A0A, SentenceBreak::OLetter),
    (0x0A0F, 0x0A10, SentenceBreak::OLetter),
    (0x0A13, 0x0A28, SentenceBreak::OLetter),
    (0x0A2A, 0x0A30, SentenceBreak::OLetter),
    (0x0A32, 0x0A33, SentenceBreak::OLetter),
    (0x0A35, 0x0A36, SentenceBreak::OLetter),
    (0x0A38, 0x0A39, SentenceBreak::OLetter),
    (0x0A3C, 0x0A3C, SentenceBreak::Extend),
    (0x0A3E, 0x0A42, SentenceBreak::Extend),
    (0x0A47, 0x0A48, SentenceBreak::Extend),
    (0x0A4B, 0x0A4D, SentenceBreak::Extend),
    (0x0A51, 0x0A51, SentenceBreak::Extend),
    (0x0A59, 0x0A5C, SentenceBreak::OLetter),
    (0x0A5E, 0x0A5E, SentenceBreak::OLetter),
    (0x0A66, 0x0A6F, SentenceBreak::Numeric),
    (0x0A70, 0x0A71, SentenceBreak::Extend),
    (0x0A72, 0x0A74, SentenceBreak::OLetter),
    (0x0A75, 0x0A75, SentenceBreak::Extend),
    (0x0A81, 0x0A83, SentenceBreak::Extend),
    (0x0A85, 0x0A8D, SentenceBreak::OLetter),
    (0x0A8F, 0x0A91, SentenceBreak::OLetter),
    (0x0A93, 0x0AA8, SentenceBreak::OLetter),
    (0x0AAA, 0x0AB0, SentenceBreak::OLetter),
    (0x0AB2, 0x0AB3, SentenceBreak::OLetter),
    (0x0AB5, 0x0AB9, SentenceBreak::OLetter),
    (0x0ABC, 0x0ABC, SentenceBreak::Extend),
    (0x0ABD, 0x0ABD, SentenceBreak::OLetter),
    (0x0ABE, 0x0AC5, SentenceBreak::Extend),
    (0x0AC7, 0x0AC9, SentenceBreak::Extend),
    (0x0ACB, 0x0ACD, SentenceBreak::Extend),
    (0x0AD0, 0x0AD0, SentenceBreak::OLetter),
    (0x0AE0, 0x0AE1, SentenceBreak::OLetter),
    (0x0AE2, 0x0AE3, SentenceBreak::Extend),
    (0x0AE6, 0x0AEF, SentenceBreak::Numeric),
    (0x0AF9, 0x0AF9, SentenceBreak::OLetter),
    (0x0AFA, 0x0AFF, SentenceBreak::Extend),
    (0x0B01, 0x0B03, SentenceBreak::Extend),
    (0x0B05, 0x0B0C, SentenceBreak::OLetter),
    (0x0B0F, 0x0B10, SentenceBreak::OLetter),
    (0x0B13, 0x0B28, SentenceBreak::OLetter),
    (0x0B2A, 0x0B30, SentenceBreak::OLetter),
    (0x0B32, 0x0B33, SentenceBreak::OLetter),
    (0x0B35, 0x0B39, SentenceBreak::OLetter),
    (0x0B3C, 0x0B3C, SentenceBreak::Extend),
    (0x0B3D, 0x0B3D, SentenceBreak::OLetter),
    (0x0B3E, 0x0B44, SentenceBreak::Extend),
    (0x0B47, 0x0B48, SentenceBreak::Extend),
    (0x0B4B, 0x0B4D, SentenceBreak::Extend),
    (0x0B55, 0x0B57, SentenceBreak::Extend),
    (0x0B5C, 0x0B5D, SentenceBreak::OLetter),
    (0x0B5F, 0x0B61, SentenceBreak::OLetter),
    (0x0B62, 0x0B63, SentenceBreak::Extend),
    (0x0B66, 0x0B6F, SentenceBreak::Numeric),
    (0x0B71, 0x0B71, SentenceBreak::OLetter),
    (0x0B82, 0x0B82, SentenceBreak::Extend),
    (0x0B83, 0x0B83, SentenceBreak::OLetter),
    (0x0B85, 0x0B8A, SentenceBreak::OLetter),
    (0x0B8E, 0x0B90, SentenceBreak::OLetter),
    (0x0B92, 0x0B95, SentenceBreak::OLetter),
    (0x0B99, 0x0B9A, SentenceBreak::OLetter),
    (0x0B9C, 0x0B9C, SentenceBreak::OLetter),
    (0x0B9E, 0x0B9F, SentenceBreak::OLetter),
    (0x0BA3, 0x0BA4, SentenceBreak::OLetter),
    (0x0BA8, 0x0BAA, SentenceBreak::OLetter),
    (0x0BAE, 0x0BB9, SentenceBreak::OLetter),
    (0x0BBE, 0x0BC2, SentenceBreak::Extend),
    (0x0BC6, 0x0BC8, SentenceBreak::Extend),
    (0x0BCA, 0x0BCD, SentenceBreak::Extend),
    (0x0BD0, 0x0BD0, SentenceBreak::OLetter),
    (0x0BD7, 0x0BD7, SentenceBreak::Extend),
    (0x0BE6, 0x0BEF, SentenceBreak::Numeric),
    (0x0C00, 0x0C04, SentenceBreak::Extend),
    (0x0C05, 0x0C0C, SentenceBreak::OLetter),
    (0x0C0E, 0x0C10, SentenceBreak::OLetter),
    (0x0C12, 0x0C28, SentenceBreak::OLetter),
    (0x0C2A, 0x0C39, SentenceBreak::OLetter),
    (0x0C3C, 0x0C3C, SentenceBreak::Extend),
    (0x0C3D, 0x0C3D, SentenceBreak::OLetter),
    (0x0C3E, 0x0C44, SentenceBreak::Extend),
    (0x0C46, 0x0C48, SentenceBreak::Extend),
    (0x0C4A, 0x0C4D, SentenceBreak::Extend),
    (0x0C55, 0x0C56, SentenceBreak::Extend),
    (0x0C58, 0x0C5A, SentenceBreak::OLetter),
    (0x0C5D, 0x0C5D, SentenceBreak::OLetter),
    (0x0C60, 0x0C61, SentenceBreak::OLetter),
    (0x0C62, 0x0C63, SentenceBreak::Extend),
    (0x0C66, 0x0C6F, SentenceBreak::Numeric),
    (0x0C80, 0x0C80, SentenceBreak::OLetter),
    (0x0C81, 0x0C83, SentenceBreak::Extend),
    (0x0C85, 0x0C8C, SentenceBreak::OLetter),
    (0x0C8E, 0x0C90, SentenceBreak::OLetter),
    (0x0C92, 0x0CA8, SentenceBreak::OLetter),
    (0x0CAA, 0x0CB3, SentenceBreak::OLetter),
    (0x0CB5, 0x0CB9, SentenceBreak::OLetter),
    (0x0CBC, 0x0CBC, SentenceBreak::Extend),
    (0x0CBD, 0x0CBD, SentenceBreak::OLetter),
    (0x0CBE, 0x0CC4, SentenceBreak::Extend),
    (0x0CC6, 0x0CC8, SentenceBreak::Extend),
    (0x0CCA, 0x0CCD, SentenceBreak::Extend),
    (0x0CD5, 0x0CD6, SentenceBreak::Extend),
    (0x0CDD, 0x0CDE, SentenceBreak::OLetter),
    (0x0CE0, 0x0CE1, SentenceBreak::OLetter),
    (0x0CE2, 0x0CE3, SentenceBreak::Extend),
    (0x0CE6, 0x0CEF, SentenceBreak::Numeric),
    (0x0CF1, 0x0CF2, SentenceBreak::OLetter),
    (0x0CF3, 0x0CF3, SentenceBreak::Extend),
    (0x0D00, 0x0D03, SentenceBreak::Extend),
    (0x0D04, 0x0D0C, SentenceBreak::OLetter),
    (0x0D0E, 0x0D10, SentenceBreak::OLetter),
    (0x0D12, 0x0D3A, SentenceBreak::OLetter),
    (0x0D3B, 0x0D3C, SentenceBreak::Extend),
    (0x0D3D, 0x0D3D, SentenceBreak::OLetter),
    (0x0D3E, 0x0D44, SentenceBreak::Extend),
    (0x0D46, 0x0D48, SentenceBreak::Extend),
    (0x0D4A, 0x0D4D, SentenceBreak::Extend),
    (0x0D4E, 0x0D4E, SentenceBreak::OLetter),
    (0x0D54, 0x0D56, SentenceBreak::OLetter),
    (0x0D57, 0x0D57, SentenceBreak::Extend),
    (0x0D5F, 0x0D61, SentenceBreak::OLetter),
    (0x0D62, 0x0D63, SentenceBreak::Extend),
    (0x0D66, 0x0D6F, SentenceBreak::Numeric),
    (0x0D7A, 0x0D7F, SentenceBreak::OLetter),
    (0x0D81, 0x0D83, SentenceBreak::Extend),
    (0x0D85, 0x0D96, SentenceBreak::OLetter),
    (0x0D9A, 0x0DB1, SentenceBreak::OLetter),
    (0x0DB3, 0x0DBB, SentenceBreak::OLetter),
    (0x0DBD, 0x0DBD, SentenceBreak::OLetter),
    (0x0DC0, 0x0DC6, SentenceBreak::OLetter),
    (0x0DCA, 0x0DCA, SentenceBreak::Extend),
    (0x0DCF, 0x0DD4, SentenceBreak::Extend),
    (0x0DD6, 0x0DD6, SentenceBreak::Extend),
    (0x0DD8, 0x0DDF, SentenceBreak::Extend),
    (0x0DE6, 0x0DEF, SentenceBreak::Numeric),
    (0x0DF2, 0x0DF3, SentenceBreak::Extend),
    (0x0E01, 0x0E30, SentenceBreak::OLetter),
    (0x0E31, 0x0E31, SentenceBreak::Extend),
    (0x0E32, 0x0E33, SentenceBreak::OLetter),
    (0x0E34, 0x0E3A, SentenceBreak::Extend),
    (0x0E40, 0x0E46, SentenceBreak::OLetter),
    (0x0E47, 0x0E4E, SentenceBreak::Extend),
    (0x0E50, 0x0E59, SentenceBreak::Numeric),
    (0x0E81, 0x0E82, SentenceBreak::OLetter),
    (0x0E84, 0x0E84, SentenceBreak::OLetter),
    (0x0E86, 0x0E8A, SentenceBreak::OLetter),
    (0x0E8C, 0x0EA3, SentenceBreak::OLetter),
    (0x0EA5, 0x0EA5, SentenceBreak::OLetter),
    (0x0EA7, 0x0EB0, SentenceBreak::OLetter),
    (0x0EB1, 0x0EB1, SentenceBreak::Extend),
    (0x0EB2, 0x0EB3, SentenceBreak::OLetter),
    (0x0EB4, 0x0EBC, SentenceBreak::Extend),
    (0x0EBD, 0x0EBD, SentenceBreak::OLetter),
    (0x0EC0, 0x0EC4, SentenceBreak::OLetter),
    (0x0EC6, 0x0EC6, SentenceBreak::OLetter),
    (0x0EC8, 0x0ECE, SentenceBreak::Extend),
    (0x0ED0, 0x0ED9, SentenceBreak::Numeric),
    (0x0EDC, 0x0EDF, SentenceBreak::OLetter),
    (0x0F00, 0x0F00, SentenceBreak::OLetter),
    (0x0F18, 0x0F19, SentenceBreak::Extend),
    (0x0F20, 0x0F29, SentenceBreak::Numeric),
    (0x0F35, 0x0F35, SentenceBreak::Extend),
    (0x0F37, 0x0F37, SentenceBreak::Extend),
    (0x0F39, 0x0F39, SentenceBreak::Extend),
    (0x0F3A, 0x0F3D, SentenceBreak::Close),
    (0x0F3E, 0x0F3F, SentenceBreak::Extend),
    (0x0F40, 0x0F47, SentenceBreak::OLetter),
    (0x0F49, 0x0F6C, SentenceBreak::OLetter),
    (0x0F71, 0x0F84, SentenceBreak::Extend),
    (0x0F86, 0x0F87, SentenceBreak::Extend),
    (0x0F88, 0x0F8C, SentenceBreak::OLetter),
    (0x0F8D, 0x0F97, SentenceBreak::Extend),
    (0x0F99, 0x0FBC, SentenceBreak::Extend),
    (0x0FC6, 0x0FC6, SentenceBreak::Extend),
    (0x1000, 0x102A, SentenceBreak::OLetter),
    (0x102B, 0x103E, SentenceBreak::Extend),
    (0x103F, 0x103F, SentenceBreak::OLetter),
    (0x1040, 0x1049, SentenceBreak::Numeric),
    (0x104A, 0x104B, SentenceBreak::STerm),
    (0x1050, 0x1055, SentenceBreak::OLetter),
    (0x1056, 0x1059, SentenceBreak::Extend),
    (0x105A, 0x105D, SentenceBreak::OLetter),
    (0x105E, 0x1060, SentenceBreak::Extend),
    (0x1061, 0x1061, SentenceBreak::OLetter),
    (0x1062, 0x1064, SentenceBreak::Extend),
    (0x1065, 0x1066, SentenceBreak::OLetter),
    (0x1067, 0x106D, SentenceBreak::Extend),
    (0x106E, 0x1070, SentenceBreak::OLetter),
    (0x1071, 0x1074, SentenceBreak::Extend),
    (0x1075, 0x1081, SentenceBreak::OLetter),
    (0x1082, 0x108D, SentenceBreak::Extend),
    (0x108E, 0x108E, SentenceBreak::OLetter),
    (0x108F, 0x108F, SentenceBreak::Extend),
    (0x1090, 0x1099, SentenceBreak::Numeric),
    (0x109A, 0x109D, SentenceBreak::Extend),
    (0x10A0, 0x10C5, SentenceBreak::Upper),
    (0x10C7, 0x10C7, SentenceBreak::Upper),
    (0x10CD, 0x10CD, SentenceBreak::Upper),
    (0x10D0, 0x10FA, SentenceBreak::OLetter),
    (0x10FC, 0x10FC, SentenceBreak::Lower),
    (0x10FD, 0x1248, SentenceBreak::OLetter),
    (0x124A, 0x124D, SentenceBreak::OLetter),
    (0x1250, 0x1256, SentenceBreak::OLetter),
    (0x1258, 0x1258, SentenceBreak::OLetter),
    (0x125A, 0x125D, SentenceBreak::OLetter),
    (0x1260, 0x1288, SentenceBreak::OLetter),
    (0x128A, 0x128D, SentenceBreak::OLetter),
    (0x1290, 0x12B0, SentenceBreak::OLetter),
    (0x12B2, 0x12B5, SentenceBreak::OLetter),
    (0x12B8, 0x12BE, SentenceBreak::OLetter),
    (0x12C0, 0x12C0, SentenceBreak::OLetter),
    (0x12C2, 0x12C5, SentenceBreak::OLetter),
    (0x12C8, 0x12D6, SentenceBreak::OLetter),
    (0x12D8, 0x1310, SentenceBreak::OLetter),
    (0x1312, 0x1315, SentenceBreak::OLetter),
    (0x1318, 0x135A, SentenceBreak::OLetter),
    (0x135D, 0x135F, SentenceBreak::Extend),
    (0x1362, 0x1362, SentenceBreak::STerm),
    (0x1367, 0x1368, SentenceBreak::STerm),
    (0x1380, 0x138F, SentenceBreak::OLetter),
    (0x13A0, 0x13F5, SentenceBreak::Upper),
    (0x13F8, 0x13FD, SentenceBreak::Lower),
    (0x1401, 0x166C, SentenceBreak::OLetter),
    (0x166E, 0x166E, SentenceBreak::STerm),
    (0x166F, 0x167F, SentenceBreak::OLetter),
    (0x1680, 0x1680, SentenceBreak::Sp),
    (0x1681, 0x169A, SentenceBreak::OLetter),
    (0x169B, 0x169C, SentenceBreak::Close),
    (0x16A0, 0x16EA, SentenceBreak::OLetter),
    (0x16EE, 0x16F8, SentenceBreak::OLetter),
    (0x1700, 0x1711, SentenceBreak::OLetter),
    (0x1712, 0x1715, SentenceBreak::Extend),
    (0x171F, 0x1731, SentenceBreak::OLetter),
    (0x1732, 0x1734, SentenceBreak::Extend),
    (0x1735, 0x1736, SentenceBreak::STerm),
    (0x1740, 0x1751, SentenceBreak::OLetter),
    (0x1752, 0x1753, SentenceBreak::Extend),
    (0x1760, 0x176C, SentenceBreak::OLetter),
    (0x176E, 0x1770, SentenceBreak::OLetter),
    (0x1772, 0x1773, SentenceBreak::Extend),
    (0x1780, 0x17B3, SentenceBreak::OLetter),
    (0x17B4, 0x17D3, SentenceBreak::Extend),
    (0x17D4, 0x17D5, SentenceBreak::STerm),
    (0x17D7, 0x17D7, SentenceBreak::OLetter),
    (0x17DC, 0x17DC, SentenceBreak::OLetter),
    (0x17DD, 0x17DD, SentenceBreak::Extend),
    (0x17E0, 0x17E9, SentenceBreak::Numeric),
    (0x1802, 0x1802, SentenceBreak::SContinue),
    (0x1803, 0x1803, SentenceBreak::STerm),
    (0x1808, 0x1808, SentenceBreak::SContinue),
    (0x1809, 0x1809, SentenceBreak::STerm),
    (0x180B, 0x180D, SentenceBreak::Extend),
    (0x180E, 0x180E, SentenceBreak::Format),
    (0x180F, 0x180F, SentenceBreak::Extend),
    (0x1810, 0x1819, SentenceBreak::Numeric),
    (0x1820, 0x1878, SentenceBreak::OLetter),
    (0x1880, 0x1884, SentenceBreak::OLetter),
    (0x1885, 0x1886, SentenceBreak::Extend),
    (0x1887, 0x18A8, SentenceBreak::OLetter),
    (0x18A9, 0x18A9, SentenceBreak::Extend),
    (0x18AA, 0x18AA, SentenceBreak::OLetter),
    (0x18B0, 0x18F5, SentenceBreak::OLetter),
    (0x1900, 0x191E, SentenceBreak::OLetter),
    (0x1920, 0x192B, SentenceBreak::Extend),
    (0x1930, 0x193B, SentenceBreak::Extend),
    (0x1944, 0x1945, SentenceBreak::STerm),
    (0x1946, 0x194F, SentenceBreak::Numeric),
    (0x1950, 0x196D, SentenceBreak::OLetter),
    (0x1970, 0x1974, SentenceBreak::OLetter),
    (0x1980, 0x19AB, SentenceBreak::OLetter),
    (0x19B0, 0x19C9, SentenceBreak::OLetter),
    (0x19D0, 0x19D9, SentenceBreak::Numeric),
    (0x1A00, 0x1A16, SentenceBreak::OLetter),
    (0x1A17, 0x1A1B, SentenceBreak::Extend),
    (0x1A20, 0x1A54, SentenceBreak::OLetter),
    (0x1A55, 0x1A5E, SentenceBreak::Extend),
    (0x1A60, 0x1A7C, SentenceBreak::Extend),
    (0x1A7F, 0x1A7F, SentenceBreak::Extend),
    (0x1A80, 0x1A89, SentenceBreak::Numeric),
    (0x1A90, 0x1A99, SentenceBreak::Numeric),
    (0x1AA7, 0x1AA7, SentenceBreak::OLetter),
    (0x1AA8, 0x1AAB, SentenceBreak::STerm),
    (0x1AB0, 0x1ACE, SentenceBreak::Extend),
    (0x1B00, 0x1B04, SentenceBreak::Extend),
    (0x1B05, 0x1B33, SentenceBreak::OLetter),
    (0x1B34, 0x1B44, SentenceBreak::Extend),
    (0x1B45, 0x1B4C, SentenceBreak::OLetter),
    (0x1B50, 0x1B59, SentenceBreak::Numeric),
    (0x1B5A, 0x1B5B, SentenceBreak::STerm),
    (0x1B5E, 0x1B5F, SentenceBreak::STerm),
    (0x1B6B, 0x1B73, SentenceBreak::Extend),
    (0x1B7D, 0x1B7E, SentenceBreak::STerm),
    (0x1B80, 0x1B82, SentenceBreak::Extend),
    (0x1B83, 0x1BA0, SentenceBreak::OLetter),
    (0x1BA1, 0x1BAD, SentenceBreak::Extend),
    (0x1BAE, 0x1BAF, SentenceBreak::OLetter),
    (0x1BB0, 0x1BB9, SentenceBreak::Numeric),
    (0x1BBA, 0x1BE5, SentenceBreak::OLetter),
    (0x1BE6, 0x1BF3, SentenceBreak::Extend),
    (0x1C00, 0x1C23, SentenceBreak::OLetter),
    (0x1C24, 0x1C37, SentenceBreak::Extend),
    (0x1C3B, 0x1C3C, SentenceBreak::STerm),
    (0x1C40, 0x1C49, SentenceBreak::Numeric),
    (0x1C4D, 0x1C4F, SentenceBreak::OLetter),
    (0x1C50, 0x1C59, SentenceBreak::Numeric),
    (0x1C5A, 0x1C7D, SentenceBreak::OLetter),
    (0x1C7E, 0x1C7F, SentenceBreak::STerm),
    (0x1C80, 0x1C88, SentenceBreak::Lower),
    (0x1C90, 0x1CBA, SentenceBreak::OLetter),
    (0x1CBD, 0x1CBF, SentenceBreak::OLetter),
    (0x1CD0, 0x1CD2, SentenceBreak::Extend),
    (0x1CD4, 0x1CE8, SentenceBreak::Extend),
    (0x1CE9, 0x1CEC, SentenceBreak::OLetter),
    (0x1CED, 0x1CED, SentenceBreak::Extend),
    (0x1CEE, 0x1CF3, SentenceBreak::OLetter),
    (0x1CF4, 0x1CF4, SentenceBreak::Extend),
    (0x1CF5, 0x1CF6, SentenceBreak::OLetter),
    (0x1CF7, 0x1CF9, SentenceBreak::Extend),
    (0x1CFA, 0x1CFA, SentenceBreak::OLetter),
    (0x1D00, 0x1DBF, SentenceBreak::Lower),
    (0x1DC0, 0x1DFF, SentenceBreak::Extend),
    (0x1E00, 0x1E00, SentenceBreak::Upper),
    (0x1E01, 0x1E01, SentenceBreak::Lower),
    (0x1E02, 0x1E02, SentenceBreak::Upper),
    (0x1E03, 0x1E03, SentenceBreak::Lower),
    (0x1E04, 0x1E04, SentenceBreak::Upper),
    (0x1E05, 0x1E05, SentenceBreak::Lower),
    (0x1E06, 0x1E06, SentenceBreak::Upper),
    (0x1E07, 0x1E07, SentenceBreak::Lower),
    (0x1E08, 0x1E08, SentenceBreak::Upper),
    (0x1E09, 0x1E09, SentenceBreak::Lower),
    (0x1E0A, 0x1E0A, SentenceBreak::Upper),
    (0x1E0B, 0x1E0B, SentenceBreak::Lower),
    (0x1E0C, 0x1E0C, SentenceBreak::Upper),
    (0x1E0D, 0x1E0D, SentenceBreak::Lower),
    (0x1E0E, 0x1E0E, SentenceBreak::Upper),
    (0x1E0F, 0x1E0F, SentenceBreak::Lower),
    (0x1E10, 0x1E10, SentenceBreak::Upper),
    (0x1E11, 0x1E11, SentenceBreak::Lower),
    (0x1E12, 0x1E12, SentenceBreak::Upper),
    (0x1E13, 0x1E13, SentenceBreak::Lower),
    (0x1E14, 0x1E14, SentenceBreak::Upper),
    (0x1E15, 0x1E15, SentenceBreak::Lower),
    (0x1E16, 0x1E16, SentenceBreak::Upper),
    (0x1E17, 0x1E17, SentenceBreak::Lower),
    (0x1E18, 0x1E18, SentenceBreak::Upper),
    (0x1E19, 0x1E19, SentenceBreak::Lower),
    (0x1E1A, 0x1E1A, SentenceBreak::Upper),
    (0x1E1B, 0x1E1B, SentenceBreak::Lower),
    (0x1E1C, 0x1E1C, SentenceBreak::Upper),
    (0x1E1D, 0x1E1D, SentenceBreak::Lower),
    (0x1E1E, 0x1E1E, SentenceBreak::Upper),
    (0x1E1F, 0x1E1F, SentenceBreak::Lower),
    (0x1E20, 0x1E20, SentenceBreak::Upper),
    (0x1E21, 0x1E21, SentenceBreak::Lower),
    (0x1E22, 0x1E22, SentenceBreak::Upper),
    (0x1E23, 0x1E23, SentenceBreak::Lower),
    (0x1E24, 0x1E24, SentenceBreak::Upper),
    (0x1E25, 0x1E25, SentenceBreak::Lower),
    (0x1E26, 0x1E26, SentenceBreak::Upper),
    (0x1E27, 0x1E27, SentenceBreak::Lower),
    (0x1E28, 0x1E28, SentenceBreak::Upper),
    (0x1E29, 0x1E29, SentenceBreak::Lower),
    (0x1E2A, 0x1E2A, SentenceBreak::Upper),
    (0x1E2B, 0x1E2B, SentenceBreak::Lower),
    (0x1E2C, 0x1E2C, SentenceBreak::Upper),
    (0x1E2D, 0x1E2D, SentenceBreak::Lower),
    (0x1E2E, 0x1E2E, SentenceBreak::Upper),
    (0x1E2F, 0x1E2F, SentenceBreak::Lower),
    (0x1E30, 0x1E30, SentenceBreak::Upper),
    (0x1E31, 0x1E31, SentenceBreak::Lower),
    (0x1E32, 0x1E32, SentenceBreak::Upper),
    (0x1E33, 0x1E33, SentenceBreak::Lower),
    (0x1E34, 0x1E34, SentenceBreak::Upper),
    (0x1E35, 0x1E35, SentenceBreak::Lower),
    (0x1E36, 0x1E36, SentenceBreak::Upper),
    (0x1E37, 0x1E37, SentenceBreak::Lower),
    (0x1E38, 0x1E38, SentenceBreak::Upper),
    (0x1E39, 0x1E39, SentenceBreak::Lower),
    (0x1E3A, 0x1E3A, SentenceBreak::Upper),
    (0x1E3B, 0x1E3B, SentenceBreak::Lower),
    (0x1E3C, 0x1E3C, SentenceBreak::Upper),
    (0x1E3D, 0x1E3D, SentenceBreak::Lower),
    (0x1E3E, 0x1E3E, SentenceBreak::Upper),
    (0x1E3F, 0x1E3F, SentenceBreak::Lower),
    (0x1E40, 0x1E40, SentenceBreak::Upper),
    (0x1E41, 0x1E41, SentenceBreak::Lower),
    (0x1E42, 0x1E42, SentenceBreak::Upper),
    (0x1E43, 0x1E43, SentenceBreak::Lower),
    (0x1E44, 0x1E44, SentenceBreak::Upper),
    (0x1E45, 0x1E45, SentenceBreak::Lower),
    (0x1E46, 0x1E46, SentenceBreak::Upper),
    (0x1E47, 0x1E47, SentenceBreak::Lower),
    (0x1E48, 0x1E48, SentenceBreak::Upper),
    (0x1E49, 0x1E49, SentenceBreak::Lower),
    (0x1E4A, 0x1E4A, SentenceBreak::Upper),
    (0x1E4B, 0x1E4B, SentenceBreak::Lower),
    (0x1E4C, 0x1E4C, SentenceBreak::Upper),
    (0x1E4D, 0x1E4D, SentenceBreak::Lower),
    (0x1E4E, 0x1E4E, SentenceBreak::Upper),
    (0x1E4F, 0x1E4F, SentenceBreak::Lower),
    (0x1E50, 0x1E50, SentenceBreak::Upper),
    (0x1E51, 0x1E51, SentenceBreak::Lower),
    (0x1E52, 0x1E52, SentenceBreak::Upper),
    (0x1E53, 0x1E53, SentenceBreak::Lower),
    (0x1E54, 0x1E54, SentenceBreak::Upper),
    (0x1E55, 0x1E55, SentenceBreak::Lower),
    (0x1E56, 0x1E56, SentenceBreak::Upper),
    (0x1E57, 0x1E57, SentenceBreak::Lower),
    (0x1E58, 0x1E58, SentenceBreak::Upper),
    (0x1E59, 0x1E59, SentenceBreak::Lower),
    (0x1E5A, 0x1E5A, SentenceBreak::Upper),
    (0x1E5B, 0x1E5B, SentenceBreak::Lower),
    (0x1E5C, 0x1E5C, SentenceBreak::Upper),
    (0x1E5D, 0x1E5D, SentenceBreak::Lower),
    (0x1E5E, 0x1E5E, SentenceBreak::Upper),
    (0x1E5F, 0x1E5F, SentenceBreak::Lower),
    (0x1E60, 0x1E60, SentenceBreak::Upper),
    (0x1E61, 0x1E61, SentenceBreak::Lower),
    (0x1E62, 0x1E62, SentenceBreak::Upper),
    (0x1E63, 0x1E63, SentenceBreak::Lower),
    (0x1E64, 0x1E64, SentenceBreak::Upper),
    (0x1E65, 0x1E65, SentenceBreak::Lower),
    (0x1E66, 0x1E66, SentenceBreak::Upper),
    (0x1E67, 0x1E67, SentenceBreak::Lower),
    (0x1E68, 0x1E68, SentenceBreak::Upper),
    (0x1E69, 0x1E69, SentenceBreak::Lower),
    (0x1E6A, 0x1E6A, SentenceBreak::Upper),
    (0x1E6B, 0x1E6B, SentenceBreak::Lower),
    (0x1E6C, 0x1E6C, SentenceBreak::Upper),
    (0x1E6D, 0x1E6D, SentenceBreak::Lower),
    (0x1E6E, 0x1E6E, SentenceBreak::Upper),
    (0x1E6F, 0x1E6F, SentenceBreak::Lower),
    (0x1E70, 0x1E70, SentenceBreak::Upper),
    (0x1E71, 0x1E71, SentenceBreak::Lower),
    (0x1E72, 0x1E72, SentenceBreak::Upper),
    (0x1E73, 0x1E73, SentenceBreak::Lower),
    (0x1E74, 0x1E74, SentenceBreak::Upper),
    (0x1E75, 0x1E75, SentenceBreak::Lower),
    (0x1E76, 0x1E76, SentenceBreak::Upper),
    (0x1E77, 0x1E77, SentenceBreak::Lower),
    (0x1E78, 0x1E78, SentenceBreak::Upper),
    (0x1E79, 0x1E79, SentenceBreak::Lower),
    (0x1E7A, 0x1E7A, SentenceBreak::Upper),
    (0x1E7B, 0x1E7B, SentenceBreak::Lower),
    (0x1E7C, 0x1E7C, SentenceBreak::Upper),
    (0x1E7D, 0x1E7D, SentenceBreak::Lower),
    (0x1E7E, 0x1E7E, SentenceBreak::Upper),
    (0x1E7F, 0x1E7F, SentenceBreak::Lower),
    (0x1E80, 0x1E80, SentenceBreak::Upper),
    (0x1E81, 0x1E81, SentenceBreak::Lower),
    (0x1E82, 0x1E82, SentenceBreak::Upper),
    (0x1E83, 0x1E83, SentenceBreak::Lower),
    (0x1E84, 0x1E84, SentenceBreak::Upper),
    (0x1E85, 0x1E85, SentenceBreak::Lower),
    (0x1E86, 0x1E86, SentenceBreak::Upper),
    (0x1E87, 0x1E87, SentenceBreak::Lower),
    (0x1E88, 0x1E88, SentenceBreak::Upper),
    (0x1E89, 0x1E89, SentenceBreak::Lower),
    (0x1E8A, 0x1E8A, SentenceBreak::Upper),
    (0x1E8B, 0x1E8B, SentenceBreak::Lower),
    (0x1E8C, 0x1E8C, SentenceBreak::Upper),
    (0x1E8D, 0x1E8D, SentenceBreak::Lower),
    (0x1E8E, 0x1E8E, SentenceBreak::Upper),
    (0x1E8F, 0x1E8F, SentenceBreak::Lower),
    (0x1E90, 0x1E90, SentenceBreak::Upper),
    (0x1E91, 0x1E91, SentenceBreak::Lower),
    (0x1E92, 0x1E92, SentenceBreak::Upper),
    (0x1E93, 0x1E93, SentenceBreak::Lower),
    (0x1E94, 0x1E94, SentenceBreak::Upper),
    (0x1E95, 0x1E9D, SentenceBreak::Lower),
    (0x1E9E, 0x1E9E, SentenceBreak::Upper),
    (0x1E9F, 0x1E9F, SentenceBreak::Lower),
    (0x1EA0, 0x1EA0, SentenceBreak::Upper),
    (0x1EA1, 0x1EA1, SentenceBreak::Lower),
    (0x1EA2, 0x1EA2, SentenceBreak::Upper),
    (0x1EA3, 0x1EA3, SentenceBreak::Lower),
    (0x1EA4, 0x1EA4, SentenceBreak::Upper),
    (0x1EA5, 0x1EA5, SentenceBreak::Lower),
    (0x1EA6, 0x1EA6, SentenceBreak::Upper),
    (0x1EA7, 0x1EA7, SentenceBreak::Lower),
    (0x1EA8, 0x1EA8, SentenceBreak::Upper),
    (0x1EA9, 0x1EA9, SentenceBreak::Lower),
    (0x1EAA, 0x1EAA, SentenceBreak::Upper),
    (0x1EAB, 0x1EAB, SentenceBreak::Lower),
    (0x1EAC, 0x1EAC, SentenceBreak::Upper),
    (0x1EAD, 0x1EAD, SentenceBreak::Lower),
    (0x1EAE, 0x1EAE, SentenceBreak::Upper),
    (0x1EAF, 0x1EAF, SentenceBreak::Lower),
    (0x1EB0, 0x1EB0, SentenceBreak::Upper),
    (0x1EB1, 0x1EB1, SentenceBreak::Lower),
    (0x1EB2, 0x1EB2, SentenceBreak::Upper),
    (0x1EB3, 0x1EB3, SentenceBreak::Lower),
    (0x1EB4, 0x1EB4, SentenceBreak::Upper),
    (0x1EB5, 0x1EB5, SentenceBreak::Lower),
    (0x1EB6, 0x1EB6, SentenceBreak::Upper),
    (0x1EB7, 0x1EB7, SentenceBreak::Lower),
    (0x1EB8, 0x1EB8, SentenceBreak::Upper),
    (0x1EB9, 0x1EB9, SentenceBreak::Lower),
    (0x1EBA, 0x1EBA, SentenceBreak::Upper),
    (0x1EBB, 0x1EBB, SentenceBreak::Lower),
    (0x1EBC, 0x1EBC, SentenceBreak::Upper),
    (0x1EBD, 0x1EBD, SentenceBreak::Lower),
    (0x1EBE, 0x1EBE, SentenceBreak::Upper),
    (0x1EBF, 0x1EBF, SentenceBreak::Lower),
    (0x1EC0, 0x1EC0, SentenceBreak::Upper),
    (0x1EC1, 0x1EC1, SentenceBreak::Lower),
    (0x1EC2, 0x1EC2, SentenceBreak::Upper),
    (0x1EC3, 0x1EC3, SentenceBreak::Lower),
    (0x1EC4, 0x1EC4, SentenceBreak::Upper),
    (0x1EC5, 0x1EC5, SentenceBreak::Lower),
    (0x1EC6, 0x1EC6, SentenceBreak::Upper),
    (0x1EC7, 0x1EC7, SentenceBreak::Lower),
    (0x1EC8, 0x1EC8, SentenceBreak::Upper),
    (0x1EC9, 0x1EC9, SentenceBreak::Lower),
    (0x1ECA, 0x1ECA, SentenceBreak::Upper),
    (0x1ECB, 0x1ECB, SentenceBreak::Lower),
    (0x1ECC, 0x1ECC, SentenceBreak::Upper),
    (0x1ECD, 0x1ECD, SentenceBreak::Lower),
    (0x1ECE, 0x1ECE, SentenceBreak::Upper),
    (0x1ECF, 0x1ECF, SentenceBreak::Lower),
    (0x1ED0, 0x1ED0, SentenceBreak::Upper),
    (0x1ED1, 0x1ED1, SentenceBreak::Lower),
    (0x1ED2, 0x1ED2, SentenceBreak::Upper),
    (0x1ED3, 0x1ED3, SentenceBreak::Lower),
    (0x1ED4, 0x1ED4, SentenceBreak::Upper),
    (0x1ED5, 0x1ED5, SentenceBreak::Lower),
    (0x1ED6, 0x1ED6, SentenceBreak::Upper),
    (0x1ED7, 0x1ED7, SentenceBreak::Lower),
    (0x1ED8, 0x1ED8, SentenceBreak::Upper),
    (0x1ED9, 0x1ED9, SentenceBreak::Lower),
    (0x1EDA, 0x1EDA, SentenceBreak::Upper),
    (0x1EDB, 0x1EDB, SentenceBreak::Lower),
    (0x1EDC, 0x1EDC, SentenceBreak::Upper),
    (0x1EDD, 0x1EDD, SentenceBreak::Lower),
    (0x1EDE, 0x1EDE, SentenceBreak::Upper),
    (0x1EDF, 0x1EDF, SentenceBreak::Lower),
    (0x1EE0, 0x1EE0, SentenceBreak::Upper),
    (0x1EE1, 0x1EE1, SentenceBreak::Lower),
    (0x1EE2, 0x1EE2, SentenceBreak::Upper),
    (0x1EE3, 0x1EE3, SentenceBreak::Lower),
    (0x1EE4, 0x1EE4, SentenceBreak::Upper),
    (0x1EE5, 0x1EE5, SentenceBreak::Lower),
    (0x1EE6, 0x1EE6, SentenceBreak::Upper),
    (0x1EE7, 0x1EE7, SentenceBreak::Lower),
    (0x1EE8, 0x1EE8, SentenceBreak::Upper),
    (0x1EE9, 0x1EE9, SentenceBreak::Lower),
    (0x1EEA, 0x1EEA, SentenceBreak::Upper),
    (0x1EEB, 0x1EEB, SentenceBreak::Lower),
    (0x1EEC, 0x1EEC, SentenceBreak::Upper),
    (0x1EED, 0x1EED, SentenceBreak::Lower),
    (0x1EEE, 0x1EEE, SentenceBreak::Upper),
    (0x1EEF, 0x1EEF, SentenceBreak::Lower),
    (0x1EF0, 0x1EF0, SentenceBreak::Upper),
    (0x1EF1, 0x1EF1, SentenceBreak::Lower),
    (0x1EF2, 0x1EF2, SentenceBreak::Upper),
    (0x1EF3, 0x1EF3, SentenceBreak::Lower),
    (0x1EF4, 0x1EF4, SentenceBreak::Upper),
    (0x1EF5, 0x1EF5, SentenceBreak::Lower),
    (0x1EF6, 0x1EF6, SentenceBreak::Upper),
    (0x1EF7, 0x1EF7, SentenceBreak::Lower),
    (0x1EF8, 0x1EF8, SentenceBreak::Upper),
    (0x1EF9, 0x1EF9, SentenceBreak::Lower),
    (0x1EFA, 0x1EFA, SentenceBreak::Upper),
    (0x1EFB, 0x1EFB, SentenceBreak::Lower),
    (0x1EFC, 0x1EFC, SentenceBreak::Upper),
    (0x1EFD, 0x1EFD, SentenceBreak::Lower),
    (0x1EFE, 0x1EFE, SentenceBreak::Upper),
    (0x1EFF, 0x1F07, SentenceBreak::Lower),
    (0x1F08, 0x1F0F, SentenceBreak::Upper),
    (0x1F10, 0x1F15, SentenceBreak::Lower),
    (0x1F18, 0x1F1D, SentenceBreak::Upper),
    (0x1F20, 0x1F27, SentenceBreak::Lower),
    (0x1F28, 0x1F2F, SentenceBreak::Upper),
    (0x1F30, 0x1F37, SentenceBreak::Lower),
    (0x1F38, 0x1F3F, SentenceBreak::Upper),
    (0x1F40, 0x1F45, SentenceBreak::Lower),
    (0x1F48, 0x1F4D, SentenceBreak::Upper),
    (0x1F50, 0x1F57, SentenceBreak::Lower),
    (0x1F59, 0x1F59, SentenceBreak::Upper),
    (0x1F5B, 0x1F5B, SentenceBreak::Upper),
    (0x1F5D, 0x1F5D, SentenceBreak::Upper),
    (0x1F5F, 0x1F5F, SentenceBreak::Upper),
    (0x1F60, 0x1F67, SentenceBreak::Lower),
    (0x1F68, 0x1F6F, SentenceBreak::Upper),
    (0x1F70, 0x1F7D, SentenceBreak::Lower),
    (0x1F80, 0x1F87, SentenceBreak::Lower),
    (0x1F88, 0x1F8F, SentenceBreak::Upper),
    (0x1F90, 0x1F97, SentenceBreak::Lower),
    (0x1F98, 0x1F9F, SentenceBreak::Upper),
    (0x1FA0, 0x1FA7, SentenceBreak::Lower),
    (0x1FA8, 0x1FAF, SentenceBreak::Upper),
    (0x1FB0, 0x1FB4, SentenceBreak::Lower),
    (0x1FB6, 0x1FB7, SentenceBreak::Lower),
    (0x1FB8, 0x1FBC, SentenceBreak::Upper),
    (0x1FBE, 0x1FBE, SentenceBreak::Lower),
    (0x1FC2, 0x1FC4, SentenceBreak::Lower),
    (0x1FC6, 0x1FC7, SentenceBreak::Lower),
    (0x1FC8, 0x1FCC, SentenceBreak::Upper),
    (0x1FD0, 0x1FD3, SentenceBreak::Lower),
    (0x1FD6, 0x1FD7, SentenceBreak::Lower),
    (0x1FD8, 0x1FDB, SentenceBreak::Upper),
    (0x1FE0, 0x1FE7, SentenceBreak::Lower),
    (0x1FE8, 0x1FEC, SentenceBreak::Upper),
    (0x1FF2, 0x1FF4, SentenceBreak::Lower),
    (0x1FF6, 0x1FF7, SentenceBreak::Lower),
    (0x1FF8, 0x1FFC, SentenceBreak::Upper),
    (0x2000, 0x200A, SentenceBreak::Sp),
    (0x200B, 0x200B, SentenceBreak::Format),
    (0x200C, 0x200D, SentenceBreak::Extend),
    (0x200E, 0x200F, SentenceBreak::Format),
    (0x2013, 0x2014, SentenceBreak::SContinue),
    (0x2018, 0x201F, SentenceBreak::Close),
    (0x2024, 0x2024, SentenceBreak::ATerm),
    (0x2028, 0x2029, SentenceBreak::Sep),
    (0x202A, 0x202E, SentenceBreak::Format),
    (0x202F, 0x202F, SentenceBreak::Sp),
    (0x2039, 0x203A, SentenceBreak::Close),
    (0x203C, 0x203D, SentenceBreak::STerm),
    (0x2045, 0x2046, SentenceBreak::Close),
    (0x2047, 0x2049, SentenceBreak::STerm),
    (0x205F, 0x205F, SentenceBreak::Sp),
    (0x2060, 0x2064, SentenceBreak::Format),
    (0x2066, 0x206F, SentenceBreak::Format),
    (0x2071, 0x2071, SentenceBreak::Lower),
    (0x207D, 0x207E, SentenceBreak::Close),
    (0x207F, 0x207F, SentenceBreak::Lower),
    (0x208D, 0x208E, SentenceBreak::Close),
    (0x2090, 0x209C, SentenceBreak::Lower),
    (0x20D0, 0x20F0, SentenceBreak::Extend),
    (0x2102, 0x2102, SentenceBreak::Upper),
    (0x2107, 0x2107, SentenceBreak::Upper),
    (0x210A, 0x210A, SentenceBreak::Lower),
    (0x210B, 0x210D, SentenceBreak::Upper),
    (0x210E, 0x210F, SentenceBreak::Lower),
    (0x2110, 0x2112, SentenceBreak::Upper),
    (0x2113, 0x2113, SentenceBreak::Lower),
    (0x2115, 0x2115, SentenceBreak::Upper),
    (0x2119, 0x211D, SentenceBreak::Upper),
    (0x2124, 0x2124, SentenceBreak::Upper),
    (0x2126, 0x2126, SentenceBreak::Upper),
    (0x2128, 0x2128, SentenceBreak::Upper),
    (0x212A, 0x212D, SentenceBreak::Upper),
    (0x212F, 0x212F, SentenceBreak::Lower),
    (0x2130, 0x2133, SentenceBreak::Upper),
    (0x2134, 0x2134, SentenceBreak::Lower),
    (0x2135, 0x2138, SentenceBreak::OLetter),
    (0x2139, 0x2139, SentenceBreak::Lower),
    (0x213C, 0x213D, SentenceBreak::Lower),
    (0x213E, 0x213F, SentenceBreak::Upper),
    (0x2145, 0x2145, SentenceBreak::Upper),
    (0x2146, 0x2149, SentenceBreak::Lower),
    (0x214E, 0x214E, SentenceBreak::Lower),
    (0x2160, 0x216F, SentenceBreak::Upper),
    (0x2170, 0x217F, SentenceBreak::Lower),
    (0x2180, 0x2182, SentenceBreak::OLetter),
    (0x2183, 0x2183, SentenceBreak::Upper),
    (0x2184, 0x2184, SentenceBreak::Lower),
    (0x2185, 0x2188, SentenceBreak::OLetter),
    (0x2308, 0x230B, SentenceBreak::Close),
    (0x2329, 0x232A, SentenceBreak::Close),
    (0x24B6, 0x24CF, SentenceBreak::Upper),
    (0x24D0, 0x24E9, SentenceBreak::Lower),
    (0x275B, 0x2760, SentenceBreak::Close),
    (0x2768, 0x2775, SentenceBreak::Close),
    (0x27C5, 0x27C6, SentenceBreak::Close),
    (0x27E6, 0x27EF, SentenceBreak::Close),
    (0x2983, 0x2998, SentenceBreak::Close),
    (0x29D8, 0x29DB, SentenceBreak::Close),
    (0x29FC, 0x29FD, SentenceBreak::Close),
    (0x2C00, 0x2C2F, SentenceBreak::Upper),
    (0x2C30, 0x2C5F, SentenceBreak::Lower),
    (0x2C60, 0x2C60, SentenceBreak::Upper),
    (0x2C61, 0x2C61, SentenceBreak::Lower),
    (0x2C62, 0x2C64, SentenceBreak::Upper),
    (0x2C65, 0x2C66, SentenceBreak::Lower),
    (0x2C67, 0x2C67, SentenceBreak::Upper),
    (0x2C68, 0x2C68, SentenceBreak::Lower),
    (0x2C69, 0x2C69, SentenceBreak::Upper),
    (0x2C6A, 0x2C6A, SentenceBreak::Lower),
    (0x2C6B, 0x2C6B, SentenceBreak::Upper),
    (0x2C6C, 0x2C6C, SentenceBreak::Lower),
    (0x2C6D, 0x2C70, SentenceBreak::Upper),
    (0x2C71, 0x2C71, SentenceBreak::Lower),
    (0x2C72, 0x2C72, SentenceBreak::Upper),
    (0x2C73, 0x2C74, SentenceBreak::Lower),
    (0x2C75, 0x2C75, SentenceBreak::Upper),
    (0x2C76, 0x2C7D, SentenceBreak::Lower),
    (0x2C7E, 0x2C80, SentenceBreak::Upper),
    (0x2C81, 0x2C81, SentenceBreak::Lower),
    (0x2C82, 0x2C82, SentenceBreak::Upper),
    (0x2C83, 0x2C83, SentenceBreak::Lower),
    (0x2C84, 0x2C84, SentenceBreak::Upper),
    (0x2C85, 0x2C85, SentenceBreak::Lower),
    (0x2C86, 0x2C86, SentenceBreak::Upper),
    (0x2C87, 0x2C87, SentenceBreak::Lower),
    (0x2C88, 0x2C88, SentenceBreak::Upper),
    (0x2C89, 0x2C89, SentenceBreak::Lower),
    (0x2C8A, 0x2C8A, SentenceBreak::Upper),
    (0x2C8B, 0x2C8B, SentenceBreak::Lower),
    (0x2C8C, 0x2C8C, SentenceBreak::Upper),
    (0x2C8D, 0x2C8D, SentenceBreak::Lower),
    (0x2C8E, 0x2C8E, SentenceBreak::Upper),
    (0x2C8F, 0x2C8F, SentenceBreak::Lower),
    (0x2C90, 0x2C90, SentenceBreak::Upper),
    (0x2C91, 0x2C91, SentenceBreak::Lower),
    (0x2C92, 0x2C92, SentenceBreak::Upper),
    (0x2C93, 0x2C93, SentenceBreak::Lower),
    (0x2C94, 0x2C94, SentenceBreak::Upper),
    (0x2C95, 0x2C95, SentenceBreak::Lower),
    (0x2C96, 0x2C96, SentenceBreak::Upper),
    (0x2C97, 0x2C97, SentenceBreak::Lower),
    (0x2C98, 0x2C98, SentenceBreak::Upper),
    (0x2C99, 0x2C99, SentenceBreak::Lower),
    (0x2C9A, 0x2C9A, SentenceBreak::Upper),
    (0x2C9B, 0x2C9B, SentenceBreak::Lower),
    (0x2C9C, 0x2C9C, SentenceBreak::Upper),
    (0x2C9D, 0x2C9D, SentenceBreak::Lower),
    (0x2C9E, 0x2C9E, SentenceBreak::Upper),
    (0x2C9F, 0x2C9F, SentenceBreak::Lower),
    (0x2CA0, 0x2CA0, SentenceBreak::Upper),
    (0x2CA1, 0x2CA1, SentenceBreak::Lower),
    (0x2CA2, 0x2CA2, SentenceBreak::Upper),
    (0x2CA3, 0x2CA3, SentenceBreak::Lower),
    (0x2CA4, 0x2CA4, SentenceBreak::Upper),
    (0x2CA5, 0x2CA5, SentenceBreak::Lower),
    (0x2CA6, 0x2CA6, SentenceBreak::Upper),
    (0x2CA7, 0x2CA7, SentenceBreak::Lower),
    (0x2CA8, 0x2CA8, SentenceBreak::Upper),
    (0x2CA9, 0x2CA9, SentenceBreak::Lower),
    (0x2CAA, 0x2CAA, SentenceBreak::Upper),
    (0x2CAB, 0x2CAB, SentenceBreak::Lower),
    (0x2CAC, 0x2CAC, SentenceBreak::Upper),
    (0x2CAD, 0x2CAD, SentenceBreak::Lower),
    (0x2CAE, 0x2CAE, SentenceBreak::Upper),
    (0x2CAF, 0x2CAF, SentenceBreak::Lower),
    (0x2CB0, 0x2CB0, SentenceBreak::Upper),
    (0x2CB1, 0x2CB1, SentenceBreak::Lower),
    (0x2CB2, 0x2CB2, SentenceBreak::Upper),
    (0x2CB3, 0x2CB3, SentenceBreak::Lower),
    (0x2CB4, 0x2CB4, SentenceBreak::Upper),
    (0x2CB5, 0x2CB5, SentenceBreak::Lower),
    (0x2CB6, 0x2CB6, SentenceBreak::Upper),
    (0x2CB7, 0x2CB7, SentenceBreak::Lower),
    (0x2CB8, 0x2CB8, SentenceBreak::Upper),
    (0x2CB9, 0x2CB9, SentenceBreak::Lower),
    (0x2CBA, 0x2CBA, SentenceBreak::Upper),
    (0x2CBB, 0x2CBB, SentenceBreak::Lower),
    (0x2CBC, 0x2CBC, SentenceBreak::Upper),
    (0x2CBD, 0x2CBD, SentenceBreak::Lower),
    (0x2CBE, 0x2CBE, SentenceBreak::Upper),
    (0x2CBF, 0x2CBF, SentenceBreak::Lower),
    (0x2CC0, 0x2CC0, SentenceBreak::Upper),
    (0x2CC1, 0x2CC1, SentenceBreak::Lower),
    (0x2CC2, 0x2CC2, SentenceBreak::Upper),
    (0x2CC3, 0x2CC3, SentenceBreak::Lower),
    (0x2CC4, 0x2CC4, SentenceBreak::Upper),
    (0x2CC5, 0x2CC5, SentenceBreak::Lower),
    (0x2CC6, 0x2CC6, SentenceBreak::Upper),
    (0x2CC7, 0x2CC7, SentenceBreak::Lower),
    (0x2CC8, 0x2CC8, SentenceBreak::Upper),
    (0x2CC9, 0x2CC9, SentenceBreak::Lower),
    (0x2CCA, 0x2CCA, SentenceBreak::Upper),
    (0x2CCB, 0x2CCB, SentenceBreak::Lower),
    (0x2CCC, 0x2CCC, SentenceBreak::Upper),
    (0x2CCD, 0x2CCD, SentenceBreak::Lower),
    (0x2CCE, 0x2CCE, SentenceBreak::Upper),
    (0x2CCF, 0x2CCF, SentenceBreak::Lower),
    (0x2CD0, 0x2CD0, SentenceBreak::Upper),
    (0x2CD1, 0x2CD1, SentenceBreak::Lower),
    (0x2CD2, 0x2CD2, SentenceBreak::Upper),
    (0x2CD3, 0x2CD3, SentenceBreak::Lower),
    (0x2CD4, 0x2CD4, SentenceBreak::Upper),
    (0x2CD5, 0x2CD5, SentenceBreak::Lower),
    (0x2CD6, 0x2CD6, SentenceBreak::Upper),
    (0x2CD7, 0x2CD7, SentenceBreak::Lower),
    (0x2CD8, 0x2CD8, SentenceBreak::Upper),
    (0x2CD9, 0x2CD9, SentenceBreak::Lower),
    (0x2CDA, 0x2CDA, SentenceBreak::Upper),
    (0x2CDB, 0x2CDB, SentenceBreak::Lower),
    (0x2CDC, 0x2CDC, SentenceBreak::Upper),
    (0x2CDD, 0x2CDD, SentenceBreak::Lower),
    (0x2CDE, 0x2CDE, SentenceBreak::Upper),
    (0x2CDF, 0x2CDF, SentenceBreak::Lower),
    (0x2CE0, 0x2CE0, SentenceBreak::Upper),
    (0x2CE1, 0x2CE1, SentenceBreak::Lower),
    (0x2CE2, 0x2CE2, SentenceBreak::Upper),
    (0x2CE3, 0x2CE4, SentenceBreak::Lower),
    (0x2CEB, 0x2CEB, SentenceBreak::Upper),
    (0x2CEC, 0x2CEC, SentenceBreak::Lower),
    (0x2CED, 0x2CED, SentenceBreak::Upper),
    (0x2CEE, 0x2CEE, SentenceBreak::Lower),
    (0x2CEF, 0x2CF1, SentenceBreak::Extend),
    (0x2CF2, 0x2CF2, SentenceBreak::Upper),
    (0x2CF3, 0x2CF3, SentenceBreak::Lower),
    (0x2D00, 0x2D25, SentenceBreak::Lower),
    (0x2D27, 0x2D27, SentenceBreak::Lower),
    (0x2D2D, 0x2D2D, SentenceBreak::Lower),
    (0x2D30, 0x2D67, SentenceBreak::OLetter),
    (0x2D6F, 0x2D6F, SentenceBreak::OLetter),
    (0x2D7F, 0x2D7F, SentenceBreak::Extend),
    (0x2D80, 0x2D96, SentenceBreak::OLetter),
    (0x2DA0, 0x2DA6, SentenceBreak::OLetter),
    (0x2DA8, 0x2DAE, SentenceBreak::OLetter),
    (0x2DB0, 0x2DB6, SentenceBreak::OLetter),
    (0x2DB8, 0x2DBE, SentenceBreak::OLetter),
    (0x2DC0, 0x2DC6, SentenceBreak::OLetter),
    (0x2DC8, 0x2DCE, SentenceBreak::OLetter),
    (0x2DD0, 0x2DD6, SentenceBreak::OLetter),
    (0x2DD8, 0x2DDE, SentenceBreak::OLetter),
    (0x2DE0, 0x2DFF, SentenceBreak::Extend),
    (0x2E00, 0x2E0D, SentenceBreak::Close),
    (0x2E1C, 0x2E1D, SentenceBreak::Close),
    (0x2E20, 0x2E29, SentenceBreak::Close),
    (0x2E2E, 0x2E2E, SentenceBreak::STerm),
    (0x2E2F, 0x2E2F, SentenceBreak::OLetter),
    (0x2E3C, 0x2E3C, SentenceBreak::STerm),
    (0x2E42, 0x2E42, SentenceBreak::Close),
    (0x2E53, 0x2E54, SentenceBreak::STerm),
    (0x2E55, 0x2E5C, SentenceBreak::Close),
    (0x3000, 0x3000, SentenceBreak::Sp),
    (0x3001, 0x3001, SentenceBreak::SContinue),
    (0x3002, 0x3002, SentenceBreak::STerm),
    (0x3005, 0x3007, SentenceBreak::OLetter),
    (0x3008, 0x3011, SentenceBreak::Close),
    (0x3014, 0x301B, SentenceBreak::Close),
    (0x301D, 0x301F, SentenceBreak::Close),
    (0x3021, 0x3029, SentenceBreak::OLetter),
    (0x302A, 0x302F, SentenceBreak::Extend),
    (0x3031, 0x3035, SentenceBreak::OLetter),
    (0x3038, 0x303C, SentenceBreak::OLetter),
    (0x3041, 0x3096, SentenceBreak::OLetter),
    (0x3099, 0x309A, SentenceBreak::Extend),
    (0x309D, 0x309F, SentenceBreak::OLetter),
    (0x30A1, 0x30FA, SentenceBreak::OLetter),
    (0x30FC, 0x30FF, SentenceBreak::OLetter),
    (0x3105, 0x312F, SentenceBreak::OLetter),
    (0x3131, 0x318E, SentenceBreak::OLetter),
    (0x31A0, 0x31BF, SentenceBreak::OLetter),
    (0x31F0, 0x31FF, SentenceBreak::OLetter),
    (0x3400, 0x4DBF, SentenceBreak::OLetter),
    (0x4E00, 0xA48C, SentenceBreak::OLetter),
    (0xA4D0, 0xA4FD, SentenceBreak::OLetter),
    (0xA4FF, 0xA4FF, SentenceBreak::STerm),
    (0xA500, 0xA60C, SentenceBreak::OLetter),
    (0xA60E, 0xA60F, SentenceBreak::STerm),
    (0xA610, 0xA61F, SentenceBreak::OLetter),
    (0xA620, 0xA629, SentenceBreak::Numeric),
    (0xA62A, 0xA62B, SentenceBreak::OLetter),
    (0xA640, 0xA640, SentenceBreak::Upper),
    (0xA641, 0xA641, SentenceBreak::Lower),
    (0xA642, 0xA642, SentenceBreak::Upper),
    (0xA643, 0xA643, SentenceBreak::Lower),
    (0xA644, 0xA644, SentenceBreak::Upper),
    (0xA645, 0xA645, SentenceBreak::Lower),
    (0xA646, 0xA646, SentenceBreak::Upper),
    (0xA647, 0xA647, SentenceBreak::Lower),
    (0xA648, 0xA648, SentenceBreak::Upper),
    (0xA649, 0xA649, SentenceBreak::Lower),
    (0xA64A, 0xA64A, SentenceBreak::Upper),
    (0xA64B, 0xA64B, SentenceBreak::Lower),
    (0xA64C, 0xA64C, SentenceBreak::Upper),
    (0xA64D, 0xA64D, SentenceBreak::Lower),
    (0xA64E, 0xA64E, SentenceBreak::Upper),
    (0xA64F, 0xA64F, SentenceBreak::Lower),
    (0xA650, 0xA650, SentenceBreak::Upper),
    (0xA651, 0xA651, SentenceBreak::Lower),
    (0xA652, 0xA652, SentenceBreak::Upper),
    (0xA653, 0xA653, SentenceBreak::Lower),
    (0xA654, 0xA654, SentenceBreak::Upper),
    (0xA655, 0xA655, SentenceBreak::Lower),
    (0xA656, 0xA656, SentenceBreak::Upper),
    (0xA657, 0xA657, SentenceBreak::Lower),
    (0xA658, 0xA658, SentenceBreak::Upper),
    (0xA659, 0xA659, SentenceBreak::Lower),
    (0xA65A, 0xA65A, SentenceBreak::Upper),
    (0xA65B, 0xA65B, SentenceBreak::Lower),
    (0xA65C, 0xA65C, SentenceBreak::Upper),
    (0xA65D, 0xA65D, SentenceBreak::Lower),
    (0xA65E, 0xA65E, SentenceBreak::Upper),
    (0xA65F, 0xA65F, SentenceBreak::Lower),
    (0xA660, 0xA660, SentenceBreak::Upper),
    (0xA661, 0xA661, SentenceBreak::Lower),
    (0xA662, 0xA662, SentenceBreak::Upper),
    (0xA663, 0xA663, SentenceBreak::Lower),
    (0xA664, 0xA664, SentenceBreak::Upper),
    (0xA665, 0xA665, SentenceBreak::Lower),
    (0xA666, 0xA666, SentenceBreak::Upper),
    (0xA667, 0xA667, SentenceBreak::Lower),
    (0xA668, 0xA668, SentenceBreak::Upper),
    (0xA669, 0xA669, SentenceBreak::Lower),
    (0xA66A, 0xA66A, SentenceBreak::Upper),
    (0xA66B, 0xA66B, SentenceBreak::Lower),
    (0xA66C, 0xA66C, SentenceBreak::Upper),
    (0xA66D, 0xA66D, SentenceBreak::Lower),
    (0xA66E, 0xA66E, SentenceBreak::OLetter),
    (0xA66F, 0xA672, SentenceBreak::Extend),
    (0xA674, 0xA67D, SentenceBreak::Extend),
    (0xA67F, 0xA67F, SentenceBreak::OLetter),
    (0xA680, 0xA680, SentenceBreak::Upper),
    (0xA681, 0xA681, SentenceBreak::Lower),
    (0xA682, 0xA682, SentenceBreak::Upper),
    (0xA683, 0xA683, SentenceBreak::Lower),
    (0xA684, 0xA684, SentenceBreak::Upper),
    (0xA685, 0xA685, SentenceBreak::Lower),
    (0xA686, 0xA686, SentenceBreak::Upper),
    (0xA687, 0xA687, SentenceBreak::Lower),
    (0xA688, 0xA688, SentenceBreak::Upper),
    (0xA689, 0xA689, SentenceBreak::Lower),
    (0xA68A, 0xA68A, SentenceBreak::Upper),
    (0xA68B, 0xA68B, SentenceBreak::Lower),
    (0xA68C, 0xA68C, SentenceBreak::Upper),
    (0xA68D, 0xA68D, SentenceBreak::Lower),
    (0xA68E, 0xA68E, SentenceBreak::Upper),
    (0xA68F, 0xA68F, SentenceBreak::Lower),
    (0xA690, 0xA690, SentenceBreak::Upper),
    (0xA691, 0xA691, SentenceBreak::Lower),
    (0xA692, 0xA692, SentenceBreak::Upper),
    (0xA693, 0xA693, SentenceBreak::Lower),
    (0xA694, 0xA694, SentenceBreak::Upper),
    (0xA695, 0xA695, SentenceBreak::Lower),
    (0xA696, 0xA696, SentenceBreak::Upper),
    (0xA697, 0xA697, SentenceBreak::Lower),
    (0xA698, 0xA698, SentenceBreak::Upper),
    (0xA699, 0xA699, SentenceBreak::Lower),
    (0xA69A, 0xA69A, SentenceBreak::Upper),
    (0xA69B, 0xA69D, SentenceBreak::Lower),
    (0xA69E, 0xA69F, SentenceBreak::Extend),
    (0xA6A0, 0xA6EF, SentenceBreak::OLetter),
    (0xA6F0, 0xA6F1, SentenceBreak::Extend),
    (0xA6F3, 0xA6F3, SentenceBreak::STerm),
    (0xA6F7, 0xA6F7, SentenceBreak::STerm),
    (0xA717, 0xA71F, SentenceBreak::OLetter),
    (0xA722, 0xA722, SentenceBreak::Upper),
    (0xA723, 0xA723, SentenceBreak::Lower),
    (0xA724, 0xA724, SentenceBreak::Upper),
    (0xA725, 0xA725, SentenceBreak::Lower),
    (0xA726, 0xA726, SentenceBreak::Upper),
    (0xA727, 0xA727, SentenceBreak::Lower),
    (0xA728, 0xA728, SentenceBreak::Upper),
    (0xA729, 0xA729, SentenceBreak::Lower),
    (0xA72A, 0xA72A, SentenceBreak::Upper),
    (0xA72B, 0xA72B, SentenceBreak::Lower),
    (0xA72C, 0xA72C, SentenceBreak::Upper),
    (0xA72D, 0xA72D, SentenceBreak::Lower),
    (0xA72E, 0xA72E, SentenceBreak::Upper),
    (0xA72F, 0xA731, SentenceBreak::Lower),
    (0xA732, 0xA732, SentenceBreak::Upper),
    (0xA733, 0xA733, SentenceBreak::Lower),
    (0xA734, 0xA734, SentenceBreak::Upper),
    (0xA735, 0xA735, SentenceBreak::Lower),
    (0xA736, 0xA736, SentenceBreak::Upper),
    (0xA737, 0xA737, SentenceBreak::Lower),
    (0xA738, 0xA738, SentenceBreak::Upper),
    (0xA739, 0xA739, SentenceBreak::Lower),
    (0xA73A, 0xA73A, SentenceBreak::Upper),
    (0xA73B, 0xA73B, SentenceBreak::Lower),
    (0xA73C, 0xA73C, SentenceBreak::Upper),
    (0xA73D, 0xA73D, SentenceBreak::Lower),
    (0xA73E, 0xA73E, SentenceBreak::Upper),
    (0xA73F, 0xA73F, SentenceBreak::Lower),
    (0xA740, 0xA740, SentenceBreak::Upper),
    (0xA741, 0xA741, SentenceBreak::Lower),
    (0xA742, 0xA742, SentenceBreak::Upper),
    (0xA743, 0xA743, SentenceBreak::Lower),
    (0xA744, 0xA744, SentenceBreak::Upper),
    (0xA745, 0xA745, SentenceBreak::Lower),
    (0xA746, 0xA746, SentenceBreak::Upper),
    (0xA747, 0xA747, SentenceBreak::Lower),
    (0xA748, 0xA748, SentenceBreak::Upper),
    (0xA749, 0xA749, SentenceBreak::Lower),
    (0xA74A, 0xA74A, SentenceBreak::Upper),
    (0xA74B, 0xA74B, SentenceBreak::Lower),
    (0xA74C, 0xA74C, SentenceBreak::Upper),
    (0xA74D, 0xA74D, SentenceBreak::Lower),
    (0xA74E, 0xA74E, SentenceBreak::Upper),
    (0xA74F, 0xA74F, SentenceBreak::Lower),
    (0xA750, 0xA750, SentenceBreak::Upper),
    (0xA751, 0xA751, SentenceBreak::Lower),
    (0xA752, 0xA752, SentenceBreak::Upper),
    (0xA753, 0xA753, SentenceBreak::Lower),
    (0xA754, 0xA754, SentenceBreak::Upper),
    (0xA755, 0xA755, SentenceBreak::Lower),
    (0xA756, 0xA756, SentenceBreak::Upper),
    (0xA757, 0xA757, SentenceBreak::Lower),
    (0xA758, 0xA758, SentenceBreak::Upper),
    (0xA759, 0xA759, SentenceBreak::Lower),
    (0xA75A, 0xA75A, SentenceBreak::Upper),
    (0xA75B, 0xA75B, SentenceBreak::Lower),
    (0xA75C, 0xA75C, SentenceBreak::Upper),
    (0xA75D, 0xA75D, SentenceBreak::Lower),
    (0xA75E, 0xA75E, SentenceBreak::Upper),
    (0xA75F, 0xA75F, SentenceBreak::Lower),
    (0xA760, 0xA760, SentenceBreak::Upper),
    (0xA761, 0xA761, SentenceBreak::Lower),
    (0xA762, 0xA762, SentenceBreak::Upper),
    (0xA763, 0xA763, SentenceBreak::Lower),
    (0xA764, 0xA764, SentenceBreak::Upper),
    (0xA765, 0xA765, SentenceBreak::Lower),
    (0xA766, 0xA766, SentenceBreak::Upper),
    (0xA767, 0xA767, SentenceBreak::Lower),
    (0xA768, 0xA768, SentenceBreak::Upper),
    (0xA769, 0xA769, SentenceBreak::Lower),
    (0xA76A, 0xA76A, SentenceBreak::Upper),
    (0xA76B, 0xA76B, SentenceBreak::Lower),
    (0xA76C, 0xA76C, SentenceBreak::Upper),
    (0xA76D, 0xA76D, SentenceBreak::Lower),
    (0xA76E, 0xA76E, SentenceBreak::Upper),
    (0xA76F, 0xA778, SentenceBreak::Lower),
    (0xA779, 0xA779, SentenceBreak::Upper),
    (0xA77A, 0xA77A, SentenceBreak::Lower),
    (0xA77B, 0xA77B, SentenceBreak::Upper),
    (0xA77C, 0xA77C, SentenceBreak::Lower),
    (0xA77D, 0xA77E, SentenceBreak::Upper),
    (0xA77F, 0xA77F, SentenceBreak::Lower),
    (0xA780, 0xA780, SentenceBreak::Upper),
    (0xA781, 0xA781, SentenceBreak::Lower),
    (0xA782, 0xA782, SentenceBreak::Upper),
    (0xA783, 0xA783, SentenceBreak::Lower),
    (0xA784, 0xA784, SentenceBreak::Upper),
    (0xA785, 0xA785, SentenceBreak::Lower),
    (0xA786, 0xA786, SentenceBreak::Upper),
    (0xA787, 0xA787, SentenceBreak::Lower),
    (0xA788, 0xA788, SentenceBreak::OLetter),
    (0xA78B, 0xA78B, SentenceBreak::Upper),
    (0xA78C, 0xA78C, SentenceBreak::Lower),
    (0xA78D, 0xA78D, SentenceBreak::Upper),
    (0xA78E, 0xA78E, SentenceBreak::Lower),
    (0xA78F, 0xA78F, SentenceBreak::OLetter),
    (0xA790, 0xA790, SentenceBreak::Upper),
    (0xA791, 0xA791, SentenceBreak::Lower),
    (0xA792, 0xA792, SentenceBreak::Upper),
    (0xA793, 0xA795, SentenceBreak::Lower),
    (0xA796, 0xA796, SentenceBreak::Upper),
    (0xA797, 0xA797, SentenceBreak::Lower),
    (0xA798, 0xA798, SentenceBreak::Upper),
    (0xA799, 0xA799, SentenceBreak::Lower),
    (0xA79A, 0xA79A, SentenceBreak::Upper),
    (0xA79B, 0xA79B, SentenceBreak::Lower),
    (0xA79C, 0xA79C, SentenceBreak::Upper),
    (0xA79D, 0xA79D, SentenceBreak::Lower),
    (0xA79E, 0xA79E, SentenceBreak::Upper),
    (0xA79F, 0xA79F, SentenceBreak::Lower),
    (0xA7A0, 0xA7A0, SentenceBreak::Upper),
    (0xA7A1, 0xA7A1, SentenceBreak::Lower),
    (0xA7A2, 0xA7A2, SentenceBreak::Upper),
    (0xA7A3, 0xA7A3, SentenceBreak::Lower),
    (0xA7A4, 0xA7A4, SentenceBreak::Upper),
    (0xA7A5, 0xA7A5, SentenceBreak::Lower),
    (0xA7A6, 0xA7A6, SentenceBreak::Upper),
    (0xA7A7, 0xA7A7, SentenceBreak::Lower),
    (0xA7A8, 0xA7A8, SentenceBreak::Upper),
    (0xA7A9, 0xA7A9, SentenceBreak::Lower),
    (0xA7AA, 0xA7AE, SentenceBreak::Upper),
    (0xA7AF, 0xA7AF, SentenceBreak::Lower),
    (0xA7B0, 0xA7B4, SentenceBreak::Upper),
    (0xA7B5, 0xA7B5, SentenceBreak::Lower),
    (0xA7B6, 0xA7B6, SentenceBreak::Upper),
    (0xA7B7, 0xA7B7, SentenceBreak::Lower),
    (0xA7B8, 0xA7B8, SentenceBreak::Upper),
    (0xA7B9, 0xA7B9, SentenceBreak::Lower),
    (0xA7BA, 0xA7BA, SentenceBreak::Upper),
    (0xA7BB, 0xA7BB, SentenceBreak::Lower),
    (0xA7BC, 0xA7BC, SentenceBreak::Upper),
    (0xA7BD, 0xA7BD, SentenceBreak::Lower),
    (0xA7BE, 0xA7BE, SentenceBreak::Upper),
    (0xA7BF, 0xA7BF, SentenceBreak::Lower),
    (0xA7C0, 0xA7C0, SentenceBreak::Upper),
    (0xA7C1, 0xA7C1, SentenceBreak::Lower),
    (0xA7C2, 0xA7C2, SentenceBreak::Upper),
    (0xA7C3, 0xA7C3, SentenceBreak::Lower),
    (0xA7C4, 0xA7C7, SentenceBreak::Upper),
    (0xA7C8, 0xA7C8, SentenceBreak::Lower),
    (0xA7C9, 0xA7C9, SentenceBreak::Upper),
    (0xA7CA, 0xA7CA, SentenceBreak::Lower),
    (0xA7D0, 0xA7D0, SentenceBreak::Upper),
    (0xA7D1, 0xA7D1, SentenceBreak::Lower),
    (0xA7D3, 0xA7D3, SentenceBreak::Lower),
    (0xA7D5, 0xA7D5, SentenceBreak::Lower),
    (0xA7D6, 0xA7D6, SentenceBreak::Upper),
    (0xA7D7, 0xA7D7, SentenceBreak::Lower),
    (0xA7D8, 0xA7D8, SentenceBreak::Upper),
    (0xA7D9, 0xA7D9, SentenceBreak::Lower),
    (0xA7F2, 0xA7F4, SentenceBreak::Lower),
    (0xA7F5, 0xA7F5, SentenceBreak::Upper),
    (0xA7F6, 0xA7F6, SentenceBreak::Lower),
    (0xA7F7, 0xA7F7, SentenceBreak::OLetter),
    (0xA7F8, 0xA7FA, SentenceBreak::Lower),
    (0xA7FB, 0xA801, SentenceBreak::OLetter),
    (0xA802, 0xA802, SentenceBreak::Extend),
    (0xA803, 0xA805, SentenceBreak::OLetter),
    (0xA806, 0xA806, SentenceBreak::Extend),
    (0xA807, 0xA80A, SentenceBreak::OLetter),
    (0xA80B, 0xA80B, SentenceBreak::Extend),
    (0xA80C, 0xA822, SentenceBreak::OLetter),
    (0xA823, 0xA827, SentenceBreak::Extend),
    (0xA82C, 0xA82C, SentenceBreak::Extend),
    (0xA840, 0xA873, SentenceBreak::OLetter),
    (0xA876, 0xA877, SentenceBreak::STerm),
    (0xA880, 0xA881, SentenceBreak::Extend),
    (0xA882, 0xA8B3, SentenceBreak::OLetter),
    (0xA8B4, 0xA8C5, SentenceBreak::Extend),
    (0xA8CE, 0xA8CF, SentenceBreak::STerm),
    (0xA8D0, 0xA8D9, SentenceBreak::Numeric),
    (0xA8E0, 0xA8F1, SentenceBreak::Extend),
    (0xA8F2, 0xA8F7, SentenceBreak::OLetter),
    (0xA8FB, 0xA8FB, SentenceBreak::OLetter),
    (0xA8FD, 0xA8FE, SentenceBreak::OLetter),
    (0xA8FF, 0xA8FF, SentenceBreak::Extend),
    (0xA900, 0xA909, SentenceBreak::Numeric),
    (0xA90A, 0xA925, SentenceBreak::OLetter),
    (0xA926, 0xA92D, SentenceBreak::Extend),
    (0xA92F, 0xA92F, SentenceBreak::STerm),
    (0xA930, 0xA946, SentenceBreak::OLetter),
    (0xA947, 0xA953, SentenceBreak::Extend),
    (0xA960, 0xA97C, SentenceBreak::OLetter),
    (0xA980, 0xA983, SentenceBreak::Extend),
    (0xA984, 0xA9B2, SentenceBreak::OLetter),
    (0xA9B3, 0xA9C0, SentenceBreak::Extend),
    (0xA9C8, 0xA9C9, SentenceBreak::STerm),
    (0xA9CF, 0xA9CF, SentenceBreak::OLetter),
    (0xA9D0, 0xA9D9, SentenceBreak::Numeric),
    (0xA9E0, 0xA9E4, SentenceBreak::OLetter),
    (0xA9E5, 0xA9E5, SentenceBreak::Extend),
    (0xA9E6, 0xA9EF, SentenceBreak::OLetter),
    (0xA9F0, 0xA9F9, SentenceBreak::Numeric),
    (0xA9FA, 0xA9FE, SentenceBreak::OLetter),
    (0xAA00, 0xAA28, SentenceBreak::OLetter),
    (0xAA29, 0xAA36, SentenceBreak::Extend),
    (0xAA40, 0xAA42, SentenceBreak::OLetter),
    (0xAA43, 0xAA43, SentenceBreak::Extend),
    (0xAA44, 0xAA4B, SentenceBreak::OLetter),
    (0xAA4C, 0xAA4D, SentenceBreak::Extend),
    (0xAA50, 0xAA59, SentenceBreak::Numeric),
    (0xAA5D, 0xAA5F, SentenceBreak::STerm),
    (0xAA60, 0xAA76, SentenceBreak::OLetter),
    (0xAA7A, 0xAA7A, SentenceBreak::OLetter),
    (0xAA7B, 0xAA7D, SentenceBreak::Extend),
    (0xAA7E, 0xAAAF, SentenceBreak::OLetter),
    (0xAAB0, 0xAAB0, SentenceBreak::Extend),
    (0xAAB1, 0xAAB1, SentenceBreak::OLetter),
    (0xAAB2, 0xAAB4, SentenceBreak::Extend),
    (0xAAB5, 0xAAB6, SentenceBreak::OLetter),
    (0xAAB7, 0xAAB8, SentenceBreak::Extend),
    (0xAAB9, 0xAABD, SentenceBreak::OLetter),
    (0xAABE, 0xAABF, SentenceBreak::Extend),
    (0xAAC0, 0xAAC0, SentenceBreak::OLetter),
    (0xAAC1, 0xAAC1, SentenceBreak::Extend),
    (0xAAC2, 0xAAC2, SentenceBreak::OLetter),
    (0xAADB, 0xAADD, SentenceBreak::OLetter),
    (0xAAE0, 0xAAEA, SentenceBreak::OLetter),
    (0xAAEB, 0xAAEF, SentenceBreak::Extend),
    (0xAAF0, 0xAAF1, SentenceBreak::STerm),
    (0xAAF2, 0xAAF4, SentenceBreak::OLetter),
    (0xAAF5, 0xAAF6, SentenceBreak::Extend),
    (0xAB01, 0xAB06, SentenceBreak::OLetter),
    (0xAB09, 0xAB0E, SentenceBreak::OLetter),
    (0xAB11, 0xAB16, SentenceBreak::OLetter),
    (0xAB20, 0xAB26, SentenceBreak::OLetter),
    (0xAB28, 0xAB2E, SentenceBreak::OLetter),
    (0xAB30, 0xAB5A, SentenceBreak::Lower),
    (0xAB5C, 0xAB69, SentenceBreak::Lower),
    (0xAB70, 0xABBF, SentenceBreak::Lower),
    (0xABC0, 0xABE2, SentenceBreak::OLetter),
    (0xABE3, 0xABEA, SentenceBreak::Extend),
    (0xABEB, 0xABEB, SentenceBreak::STerm),
    (0xABEC, 0xABED, SentenceBreak::Extend),
    (0xABF0, 0xABF9, SentenceBreak::Numeric),
    (0xAC00, 0xD7A3, SentenceBreak::OLetter),
    (0xD7B0, 0xD7C6, SentenceBreak::OLetter),
    (0xD7CB, 0xD7FB, SentenceBreak::OLetter),
    (0xF900, 0xFA6D, SentenceBreak::OLetter),
    (0xFA70, 0xFAD9, SentenceBreak::OLetter),
    (0xFB00, 0xFB06, SentenceBreak::Lower),
    (0xFB13, 0xFB17, SentenceBreak::Lower),
    (0xFB1D, 0xFB1D, SentenceBreak::OLetter),
    (0xFB1E, 0xFB1E, SentenceBreak::Extend),
    (0xFB1F, 0xFB28, SentenceBreak::OLetter),
    (0xFB2A, 0xFB36, SentenceBreak::OLetter),
    (0xFB38, 0xFB3C, SentenceBreak::OLetter),
    (0xFB3E, 0xFB3E, SentenceBreak::OLetter),
    (0xFB40, 0xFB41, SentenceBreak::OLetter),
    (0xFB43, 0xFB44, SentenceBreak::OLetter),
    (0xFB46, 0xFBB1, SentenceBreak::OLetter),
    (0xFBD3, 0xFD3D, SentenceBreak::OLetter),
    (0xFD3E, 0xFD3F, SentenceBreak::Close),
    (0xFD50, 0xFD8F, SentenceBreak::OLetter),
    (0xFD92, 0xFDC7, SentenceBreak::OLetter),
    (0xFDF0, 0xFDFB, SentenceBreak::OLetter),
    (0xFE00, 0xFE0F, SentenceBreak::Extend),
    (0xFE10, 0xFE11, SentenceBreak::SContinue),
    (0xFE13, 0xFE13, SentenceBreak::SContinue),
    (0xFE17, 0xFE18, SentenceBreak::Close),
    (0xFE20, 0xFE2F, SentenceBreak::Extend),
    (0xFE31, 0xFE32, SentenceBreak::SContinue),
    (0xFE35, 0xFE44, SentenceBreak::Close),
    (0xFE47, 0xFE48, SentenceBreak::Close),
    (0xFE50, 0xFE51, SentenceBreak::SContinue),
    (0xFE52, 0xFE52, SentenceBreak::ATerm),
    (0xFE55, 0xFE55, SentenceBreak::SContinue),
    (0xFE56, 0xFE57, SentenceBreak::STerm),
    (0xFE58, 0xFE58, SentenceBreak::SContinue),
    (0xFE59, 0xFE5E, SentenceBreak::Close),
    (0xFE63, 0xFE63, SentenceBreak::SContinue),
    (0xFE70, 0xFE74, SentenceBreak::OLetter),
    (0xFE76, 0xFEFC, SentenceBreak::OLetter),
    (0xFEFF, 0xFEFF, SentenceBreak::Format),
    (0xFF01, 0xFF01, SentenceBreak::STerm),
    (0xFF08, 0xFF09, SentenceBreak::Close),
    (0xFF0C, 0xFF0D, SentenceBreak::SContinue),
    (0xFF0E, 0xFF0E, SentenceBreak::ATerm),
    (0xFF10, 0xFF19, SentenceBreak::Numeric),
    (0xFF1A, 0xFF1A, SentenceBreak::SContinue),
    (0xFF1F, 0xFF1F, SentenceBreak::STerm),
    (0xFF21, 0xFF3A, SentenceBreak::Upper),
    (0xFF3B, 0xFF3B, SentenceBreak::Close),
    (0xFF3D, 0xFF3D, SentenceBreak::Close),
    (0xFF41, 0xFF5A, SentenceBreak::Lower),
    (0xFF5B, 0xFF5B, SentenceBreak::Close),
    (0xFF5D, 0xFF5D, SentenceBreak::Close),
    (0xFF5F, 0xFF60, SentenceBreak::Close),
    (0xFF61, 0xFF61, SentenceBreak::STerm),
    (0xFF62, 0xFF63, SentenceBreak::Close),
    (0xFF64, 0xFF64, SentenceBreak::SContinue),
    (0xFF66, 0xFF9D, SentenceBreak::OLetter),
    (0xFF9E, 0xFF9F, SentenceBreak::Extend),
    (0xFFA0, 0xFFBE, SentenceBreak::OLetter),
    (0xFFC2, 0xFFC7, SentenceBreak::OLetter),
    (0xFFCA, 0xFFCF, SentenceBreak::OLetter),
    (0xFFD2, 0xFFD7, SentenceBreak::OLetter),
    (0xFFDA, 0xFFDC, SentenceBreak::OLetter),
    (0xFFF9, 0xFFFB, SentenceBreak::Format),
    (0x10000, 0x1000B, SentenceBreak::OLetter),
    (0x1000D, 0x10026, SentenceBreak::OLetter),
    (0x10028, 0x1003A, SentenceBreak::OLetter),
    (0x1003C, 0x1003D, SentenceBreak::OLetter),
    (0x1003F, 0x1004D, SentenceBreak::OLetter),
    (0x10050, 0x1005D, SentenceBreak::OLetter),
    (0x10080, 0x100FA, SentenceBreak::OLetter),
    (0x10140, 0x10174, SentenceBreak::OLetter),
    (0x101FD, 0x101FD, SentenceBreak::Extend),
    (0x10280, 0x1029C, SentenceBreak::OLetter),
    (0x102A0, 0x102D0, SentenceBreak::OLetter),
    (0x102E0, 0x102E0, SentenceBreak::Extend),
    (0x10300, 0x1031F, SentenceBreak::OLetter),
    (0x1032D, 0x1034A, SentenceBreak::OLetter),
    (0x10350, 0x10375, SentenceBreak::OLetter),
    (0x10376, 0x1037A, SentenceBreak::Extend),
    (0x10380, 0x1039D, SentenceBreak::OLetter),
    (0x103A0, 0x103C3, SentenceBreak::OLetter),
    (0x103C8, 0x103CF, SentenceBreak::OLetter),
    (0x103D1, 0x103D5, SentenceBreak::OLetter),
    (0x10400, 0x10427, SentenceBreak::Upper),
    (0x10428, 0x1044F, SentenceBreak::Lower),
    (0x10450, 0x1049D, SentenceBreak::OLetter),
    (0x104A0, 0x104A9, SentenceBreak::Numeric),
    (0x104B0, 0x104D3, SentenceBreak::Upper),
    (0x104D8, 0x104FB, SentenceBreak::Lower),
    (0x10500, 0x10527, SentenceBreak::OLetter),
    (0x10530, 0x10563, SentenceBreak::OLetter),
    (0x10570, 0x1057A, SentenceBreak::Upper),
    (0x1057C, 0x1058A, SentenceBreak::Upper),
    (0x1058C, 0x10592, SentenceBreak::Upper),
    (0x10594, 0x10595, SentenceBreak::Upper),
    (0x10597, 0x105A1, SentenceBreak::Lower),
    (0x105A3, 0x105B1, SentenceBreak::Lower),
    (0x105B3, 0x105B9, SentenceBreak::Lower),
    (0x105BB, 0x105BC, SentenceBreak::Lower),
    (0x10600, 0x10736, SentenceBreak::OLetter),
    (0x10740, 0x10755, SentenceBreak::OLetter),
    (0x10760, 0x10767, SentenceBreak::OLetter),
    (0x10780, 0x10780, SentenceBreak::Lower),
    (0x10781, 0x10782, SentenceBreak::OLetter),
    (0x10783, 0x10785, SentenceBreak::Lower),
    (0x10787, 0x107B0, SentenceBreak::Lower),
    (0x107B2, 0x107BA, SentenceBreak::Lower),
    (0x10800, 0x10805, SentenceBreak::OLetter),
    (0x10808, 0x10808, SentenceBreak::OLetter),
    (0x1080A, 0x10835, SentenceBreak::OLetter),
    (0x10837, 0x10838, SentenceBreak::OLetter),
    (0x1083C, 0x1083C, SentenceBreak::OLetter),
    (0x1083F, 0x10855, SentenceBreak::OLetter),
    (0x10860, 0x10876, SentenceBreak::OLetter),
    (0x10880, 0x1089E, SentenceBreak::OLetter),
    (0x108E0, 0x108F2, SentenceBreak::OLetter),
    (0x108F4, 0x108F5, SentenceBreak::OLetter),
    (0x10900, 0x10915, SentenceBreak::OLetter),
    (0x10920, 0x10939, SentenceBreak::OLetter),
    (0x10980, 0x109B7, SentenceBreak::OLetter),
    (0x109BE, 0x109BF, SentenceBreak::OLetter),
    (0x10A00, 0x10A00, SentenceBreak::OLetter),
    (0x10A01, 0x10A03, SentenceBreak::Extend),
    (0x10A05, 0x10A06, SentenceBreak::Extend),
    (0x10A0C, 0x10A0F, SentenceBreak::Extend),
    (0x10A10, 0x10A13, SentenceBreak::OLetter),
    (0x10A15, 0x10A17, SentenceBreak::OLetter),
    (0x10A19, 0x10A35, SentenceBreak::OLetter),
    (0x10A38, 0x10A3A, SentenceBreak::Extend),
    (0x10A3F, 0x10A3F, SentenceBreak::Extend),
    (0x10A56, 0x10A57, SentenceBreak::STerm),
    (0x10A60, 0x10A7C, SentenceBreak::OLetter),
    (0x10A80, 0x10A9C, SentenceBreak::OLetter),
    (0x10AC0, 0x10AC7, SentenceBreak::OLetter),
    (0x10AC9, 0x10AE4, SentenceBreak::OLetter),
    (0x10AE5, 0x10AE6, SentenceBreak::Extend),
    (0x10B00, 0x10B35, SentenceBreak::OLetter),
    (0x10B40, 0x10B55, SentenceBreak::OLetter),
    (0x10B60, 0x10B72, SentenceBreak::OLetter),
    (0x10B80, 0x10B91, SentenceBreak::OLetter),
    (0x10C00, 0x10C48, SentenceBreak::OLetter),
    (0x10C80, 0x10CB2, SentenceBreak::Upper),
    (0x10CC0, 0x10CF2, SentenceBreak::Lower),
    (0x10D00, 0x10D23, SentenceBreak::OLetter),
    (0x10D24, 0x10D27, SentenceBreak::Extend),
    (0x10D30, 0x10D39, SentenceBreak::Numeric),
    (0x10E80, 0x10EA9, SentenceBreak::OLetter),
    (0x10EAB, 0x10EAC, SentenceBreak::Extend),
    (0x10EB0, 0x10EB1, SentenceBreak::OLetter),
    (0x10EFD, 0x10EFF, SentenceBreak::Extend),
    (0x10F00, 0x10F1C, SentenceBreak::OLetter),
    (0x10F27, 0x10F27, SentenceBreak::OLetter),
    (0x10F30, 0x10F45, SentenceBreak::OLetter),
    (0x10F46, 0x10F50, SentenceBreak::Extend),
    (0x10F55, 0x10F59, SentenceBreak::STerm),
    (0x10F70, 0x10F81, SentenceBreak::OLetter),
    (0x10F82, 0x10F85, SentenceBreak::Extend),
    (0x10F86, 0x10F89, SentenceBreak::STerm),
    (0x10FB0, 0x10FC4, SentenceBreak::OLetter),
    (0x10FE0, 0x10FF6, SentenceBreak::OLetter),
    (0x11000, 0x11002, SentenceBreak::Extend),
    (0x11003, 0x11037, SentenceBreak::OLetter),
    (0x11038, 0x11046, SentenceBreak::Extend),
    (0x11047, 0x11048, SentenceBreak::STerm),
    (0x11066, 0x1106F, SentenceBreak::Numeric),
    (0x11070, 0x11070, SentenceBreak::Extend),
    (0x11071, 0x11072, SentenceBreak::OLetter),
    (0x11073, 0x11074, SentenceBreak::Extend),
    (0x11075, 0x11075, SentenceBreak::OLetter),
    (0x1107F, 0x11082, SentenceBreak::Extend),
    (0x11083, 0x110AF, SentenceBreak::OLetter),
    (0x110B0, 0x110BA, SentenceBreak::Extend),
    (0x110BD, 0x110BD, SentenceBreak::Numeric),
    (0x110BE, 0x110C1, SentenceBreak::STerm),
    (0x110C2, 0x110C2, SentenceBreak::Extend),
    (0x110CD, 0x110CD, SentenceBreak::Numeric),
    (0x110D0, 0x110E8, SentenceBreak::OLetter),
    (0x110F0, 0x110F9, SentenceBreak::Numeric),
    (0x11100, 0x11102, SentenceBreak::Extend),
    (0x11103, 0x11126, SentenceBreak::OLetter),
    (0x11127, 0x11134, SentenceBreak::Extend),
    (0x11136, 0x1113F, SentenceBreak::Numeric),
    (0x11141, 0x11143, SentenceBreak::STerm),
    (0x11144, 0x11144, SentenceBreak::OLetter),
    (0x11145, 0x11146, SentenceBreak::Extend),
    (0x11147, 0x11147, SentenceBreak::OLetter),
    (0x11150, 0x11172, SentenceBreak::OLetter),
    (0x11173, 0x11173, SentenceBreak::Extend),
    (0x11176, 0x11176, SentenceBreak::OLetter),
    (0x11180, 0x11182, SentenceBreak::Extend),
    (0x11183, 0x111B2, SentenceBreak::OLetter),
    (0x111B3, 0x111C0, SentenceBreak::Extend),
    (0x111C1, 0x111C4, SentenceBreak::OLetter),
    (0x111C5, 0x111C6, SentenceBreak::STerm),
    (0x111C9, 0x111CC, SentenceBreak::Extend),
    (0x111CD, 0x111CD, SentenceBreak::STerm),
    (0x111CE, 0x111CF, SentenceBreak::Extend),
    (0x111D0, 0x111D9, SentenceBreak::Numeric),
    (0x111DA, 0x111DA, SentenceBreak::OLetter),
    (0x111DC, 0x111DC, SentenceBreak::OLetter),
    (0x111DE, 0x111DF, SentenceBreak::STerm),
    (0x11200, 0x11211, SentenceBreak::OLetter),
    (0x11213, 0x1122B, SentenceBreak::OLetter),
    (0x1122C, 0x11237, SentenceBreak::Extend),
    (0x11238, 0x11239, SentenceBreak::STerm),
    (0x1123B, 0x1123C, SentenceBreak::STerm),
    (0x1123E, 0x1123E, SentenceBreak::Extend),
    (0x1123F, 0x11240, SentenceBreak::OLetter),
    (0x11241, 0x11241, SentenceBreak::Extend),
    (0x11280, 0x11286, SentenceBreak::OLetter),
    (0x11288, 0x11288, SentenceBreak::OLetter),
    (0x1128A, 0x1128D, SentenceBreak::OLetter),
    (0x1128F, 0x1129D, SentenceBreak::OLetter),
    (0x1129F, 0x112A8, SentenceBreak::OLetter),
    (0x112A9, 0x112A9, SentenceBreak::STerm),
    (0x112B0, 0x112DE, SentenceBreak::OLetter),
    (0x112DF, 0x112EA, SentenceBreak::Extend),
    (0x112F0, 0x112F9, SentenceBreak::Numeric),
    (0x11300, 0x11303, SentenceBreak::Extend),
    (0x11305, 0x1130C, SentenceBreak::OLetter),
    (0x1130F, 0x11310, SentenceBreak::OLetter),
    (0x11313, 0x11328, SentenceBreak::OLetter),
    (0x1132A, 0x11330, SentenceBreak::OLetter),
    (0x11332, 0x11333, SentenceBreak::OLetter),
    (0x11335, 0x11339, SentenceBreak::OLetter),
    (0x1133B, 0x1133C, SentenceBreak::Extend),
    (0x1133D, 0x1133D, SentenceBreak::OLetter),
    (0x1133E, 0x11344, SentenceBreak::Extend),
    (0x11347, 0x11348, SentenceBreak::Extend),
    (0x1134B, 0x1134D, SentenceBreak::Extend),
    (0x11350, 0x11350, SentenceBreak::OLetter),
    (0x11357, 0x11357, SentenceBreak::Extend),
    (0x1135D, 0x11361, SentenceBreak::OLetter),
    (0x11362, 0x11363, SentenceBreak::Extend),
    (0x11366, 0x1136C, SentenceBreak::Extend),
    (0x11370, 0x11374, SentenceBreak::Extend),
    (0x11400, 0x11434, SentenceBreak::OLetter),
    (0x11435, 0x11446, SentenceBreak::Extend),
    (0x11447, 0x1144A, SentenceBreak::OLetter),
    (0x1144B, 0x1144C, SentenceBreak::STerm),
    (0x11450, 0x11459, SentenceBreak::Numeric),
    (0x1145E, 0x1145E, SentenceBreak::Extend),
    (0x1145F, 0x11461, SentenceBreak::OLetter),
    (0x11480, 0x114AF, SentenceBreak::OLetter),
    (0x114B0, 0x114C3, SentenceBreak::Extend),
    (0x114C4, 0x114C5, SentenceBreak::OLetter),
    (0x114C7, 0x114C7, SentenceBreak::OLetter),
    (0x114D0, 0x114D9, SentenceBreak::Numeric),
    (0x11580, 0x115AE, SentenceBreak::OLetter),
    (0x115AF, 0x115B5, SentenceBreak::Extend),
    (0x115B8, 0x115C0, SentenceBreak::Extend),
    (0x115C2, 0x115C3, SentenceBreak::STerm),
    (0x115C9, 0x115D7, SentenceBreak::STerm),
    (0x115D8, 0x115DB, SentenceBreak::OLetter),
    (0x115DC, 0x115DD, SentenceBreak::Extend),
    (0x11600, 0x1162F, SentenceBreak::OLetter),
    (0x11630, 0x11640, SentenceBreak::Extend),
    (0x11641, 0x11642, SentenceBreak::STerm),
    (0x11644, 0x11644, SentenceBreak::OLetter),
    (0x11650, 0x11659, SentenceBreak::Numeric),
    (0x11680, 0x116AA, SentenceBreak::OLetter),
    (0x116AB, 0x116B7, SentenceBreak::Extend),
    (0x116B8, 0x116B8, SentenceBreak::OLetter),
    (0x116C0, 0x116C9, SentenceBreak::Numeric),
    (0x11700, 0x1171A, SentenceBreak::OLetter),
    (0x1171D, 0x1172B, SentenceBreak::Extend),
    (0x11730, 0x11739, SentenceBreak::Numeric),
    (0x1173C, 0x1173E, SentenceBreak::STerm),
    (0x11740, 0x11746, SentenceBreak::OLetter),
    (0x11800, 0x1182B, SentenceBreak::OLetter),
    (0x1182C, 0x1183A, SentenceBreak::Extend),
    (0x118A0, 0x118BF, SentenceBreak::Upper),
    (0x118C0, 0x118DF, SentenceBreak::Lower),
    (0x118E0, 0x118E9, SentenceBreak::Numeric),
    (0x118FF, 0x11906, SentenceBreak::OLetter),
    (0x11909, 0x11909, SentenceBreak::OLetter),
    (0x1190C, 0x11913, SentenceBreak::OLetter),
    (0x11915, 0x11916, SentenceBreak::OLetter),
    (0x11918, 0x1192F, SentenceBreak::OLetter),
    (0x11930, 0x11935, SentenceBreak::Extend),
    (0x11937, 0x11938, SentenceBreak::Extend),
    (0x1193B, 0x1193E, SentenceBreak::Extend),
    (0x1193F, 0x1193F, SentenceBreak::OLetter),
    (0x11940, 0x11940, SentenceBreak::Extend),
    (0x11941, 0x11941, SentenceBreak::OLetter),
    (0x11942, 0x11943, SentenceBreak::Extend),
    (0x11944, 0x11944, SentenceBreak::STerm),
    (0x11946, 0x11946, SentenceBreak::STerm),
    (0x11950, 0x11959, SentenceBreak::Numeric),
    (0x119A0, 0x119A7, SentenceBreak::OLetter),
    (0x119AA, 0x119D0, SentenceBreak::OLetter),
    (0x119D1, 0x119D7, SentenceBreak::Extend),
    (0x119DA, 0x119E0, SentenceBreak::Extend),
    (0x119E1, 0x119E1, SentenceBreak::OLetter),
    (0x119E3, 0x119E3, SentenceBreak::OLetter),
    (0x119E4, 0x119E4, SentenceBreak::Extend),
    (0x11A00, 0x11A00, SentenceBreak::OLetter),
    (0x11A01, 0x11A0A, SentenceBreak::Extend),
    (0x11A0B, 0x11A32, SentenceBreak::OLetter),
    (0x11A33, 0x11A39, SentenceBreak::Extend),
    (0x11A3A, 0x11A3A, SentenceBreak::OLetter),
    (0x11A3B, 0x11A3E, SentenceBreak::Extend),
    (0x11A42, 0x11A43, SentenceBreak::STerm),
    (0x11A47, 0x11A47, SentenceBreak::Extend),
    (0x11A50, 0x11A50, SentenceBreak::OLetter),
    (0x11A51, 0x11A5B, SentenceBreak::Extend),
    (0x11A5C, 0x11A89, SentenceBreak::OLetter),
    (0x11A8A, 0x11A99, SentenceBreak::Extend),
    (0x11A9B, 0x11A9C, SentenceBreak::STerm),
    (0x11A9D, 0x11A9D, SentenceBreak::OLetter),
    (0x11AB0, 0x11AF8, SentenceBreak::OLetter),
    (0x11C00, 0x11C08, SentenceBreak::OLetter),
    (0x11C0A, 0x11C2E, SentenceBreak::OLetter),
    (0x11C2F, 0x11C36, SentenceBreak::Extend),
    (0x11C38, 0x11C3F, SentenceBreak::Extend),
    (0x11C40, 0x11C40, SentenceBreak::OLetter),
    (0x11C41, 0x11C42, SentenceBreak::STerm),
    (0x11C50, 0x11C59, SentenceBreak::Numeric),
    (0x11C72, 0x11C8F, SentenceBreak::OLetter),
    (0x11C92, 0x11CA7, SentenceBreak::Extend),
    (0x11CA9, 0x11CB6, SentenceBreak::Extend),
    (0x11D00, 0x11D06, SentenceBreak::OLetter),
    (0x11D08, 0x11D09, SentenceBreak::OLetter),
    (0x11D0B, 0x11D30, SentenceBreak::OLetter),
    (0x11D31, 0x11D36, SentenceBreak::Extend),
    (0x11D3A, 0x11D3A, SentenceBreak::Extend),
    (0x11D3C, 0x11D3D, SentenceBreak::Extend),
    (0x11D3F, 0x11D45, SentenceBreak::Extend),
    (0x11D46, 0x11D46, SentenceBreak::OLetter),
    (0x11D47, 0x11D47, SentenceBreak::Extend),
    (0x11D50, 0x11D59, SentenceBreak::Numeric),
    (0x11D60, 0x11D65, SentenceBreak::OLetter),
    (0x11D67, 0x11D68, SentenceBreak::OLetter),
    (0x11D6A, 0x11D89, SentenceBreak::OLetter),
    (0x11D8A, 0x11D8E, SentenceBreak::Extend),
    (0x11D90, 0x11D91, SentenceBreak::Extend),
    (0x11D93, 0x11D97, SentenceBreak::Extend),
    (0x11D98, 0x11D98, SentenceBreak::OLetter),
    (0x11DA0, 0x11DA9, SentenceBreak::Numeric),
    (0x11EE0, 0x11EF2, SentenceBreak::OLetter),
    (0x11EF3, 0x11EF6, SentenceBreak::Extend),
    (0x11EF7, 0x11EF8, SentenceBreak::STerm),
    (0x11F00, 0x11F01, SentenceBreak::Extend),
    (0x11F02, 0x11F02, SentenceBreak::OLetter),
    (0x11F03, 0x11F03, SentenceBreak::Extend),
    (0x11F04, 0x11F10, SentenceBreak::OLetter),
    (0x11F12, 0x11F33, SentenceBreak::OLetter),
    (0x11F34, 0x11F3A, SentenceBreak::Extend),
    (0x11F3E, 0x11F42, SentenceBreak::Extend),
    (0x11F43, 0x11F44, SentenceBreak::STerm),
    (0x11F50, 0x11F59, SentenceBreak::Numeric),
    (0x11FB0, 0x11FB0, SentenceBreak::OLetter),
    (0x12000, 0x12399, SentenceBreak::OLetter),
    (0x12400, 0x1246E, SentenceBreak::OLetter),
    (0x12480, 0x12543, SentenceBreak::OLetter),
    (0x12F90, 0x12FF0, SentenceBreak::OLetter),
    (0x13000, 0x1342F, SentenceBreak::OLetter),
    (0x13430, 0x1343F, SentenceBreak::Format),
    (0x13440, 0x13440, SentenceBreak::Extend),
    (0x13441, 0x13446, SentenceBreak::OLetter),
    (0x13447, 0x13455, SentenceBreak::Extend),
    (0x14400, 0x14646, SentenceBreak::OLetter),
    (0x16800, 0x16A38, SentenceBreak::OLetter),
    (0x16A40, 0x16A5E, SentenceBreak::OLetter),
    (0x16A60, 0x16A69, SentenceBreak::Numeric),
    (0x16A6E, 0x16A6F, SentenceBreak::STerm),
    (0x16A70, 0x16ABE, SentenceBreak::OLetter),
    (0x16AC0, 0x16AC9, SentenceBreak::Numeric),
    (0x16AD0, 0x16AED, SentenceBreak::OLetter),
    (0x16AF0, 0x16AF4, SentenceBreak::Extend),
    (0x16AF5, 0x16AF5, SentenceBreak::STerm),
    (0x16B00, 0x16B2F, SentenceBreak::OLetter),
    (0x16B30, 0x16B36, SentenceBreak::Extend),
    (0x16B37, 0x16B38, SentenceBreak::STerm),
    (0x16B40, 0x16B43, SentenceBreak::OLetter),
    (0x16B44, 0x16B44, SentenceBreak::STerm),
    (0x16B50, 0x16B59, SentenceBreak::Numeric),
    (0x16B63, 0x16B77, SentenceBreak::OLetter),
    (0x16B7D, 0x16B8F, SentenceBreak::OLetter),
    (0x16E40, 0x16E5F, SentenceBreak::Upper),
    (0x16E60, 0x16E7F, SentenceBreak::Lower),
    (0x16E98, 0x16E98, SentenceBreak::STerm),
    (0x16F00, 0x16F4A, SentenceBreak::OLetter),
    (0x16F4F, 0x16F4F, SentenceBreak::Extend),
    (0x16F50, 0x16F50, SentenceBreak::OLetter),
    (0x16F51, 0x16F87, SentenceBreak::Extend),
    (0x16F8F, 0x16F92, SentenceBreak::Extend),
    (0x16F93, 0x16F9F, SentenceBreak::OLetter),
    (0x16FE0, 0x16FE1, SentenceBreak::OLetter),
    (0x16FE3, 0x16FE3, SentenceBreak::OLetter),
    (0x16FE4, 0x16FE4, SentenceBreak::Extend),
    (0x16FF0, 0x16FF1, SentenceBreak::Extend),
    (0x17000, 0x187F7, SentenceBreak::OLetter),
    (0x18800, 0x18CD5, SentenceBreak::OLetter),
    (0x18D00, 0x18D08, SentenceBreak::OLetter),
    (0x1AFF0, 0x1AFF3, SentenceBreak::OLetter),
    (0x1AFF5, 0x1AFFB, SentenceBreak::OLetter),
    (0x1AFFD, 0x1AFFE, SentenceBreak::OLetter),
    (0x1B000, 0x1B122, SentenceBreak::OLetter),
    (0x1B132, 0x1B132, SentenceBreak::OLetter),
    (0x1B150, 0x1B152, SentenceBreak::OLetter),
    (0x1B155, 0x1B155, SentenceBreak::OLetter),
    (0x1B164, 0x1B167, SentenceBreak::OLetter),
    (0x1B170, 0x1B2FB, SentenceBreak::OLetter),
    (0x1BC00, 0x1BC6A, SentenceBreak::OLetter),
    (0x1BC70, 0x1BC7C, SentenceBreak::OLetter),
    (0x1BC80, 0x1BC88, SentenceBreak::OLetter),
    (0x1BC90, 0x1BC99, SentenceBreak::OLetter),
    (0x1BC9D, 0x1BC9E, SentenceBreak::Extend),
    (0x1BC9F, 0x1BC9F, SentenceBreak::STerm),
    (0x1BCA0, 0x1BCA3, SentenceBreak::Format),
    (0x1CF00, 0x1CF2D, SentenceBreak::Extend),
    (0x1CF30, 0x1CF46, SentenceBreak::Extend),
    (0x1D165, 0x1D169, SentenceBreak::Extend),
    (0x1D16D, 0x1D172, SentenceBreak::Extend),
    (0x1D173, 0x1D17A, SentenceBreak::Format),
    (0x1D17B, 0x1D182, SentenceBreak::Extend),
    (0x1D185, 0x1D18B, SentenceBreak::Extend),
    (0x1D1AA, 0x1D1AD, SentenceBreak::Extend),
    (0x1D242, 0x1D244, SentenceBreak::Extend),
    (0x1D400, 0x1D419, SentenceBreak::Upper),
    (0x1D41A, 0x1D433, SentenceBreak::Lower),
    (0x1D434, 0x1D44D, SentenceBreak::Upper),
    (0x1D44E, 0x1D454, SentenceBreak::Lower),
    (0x1D456, 0x1D467, SentenceBreak::Lower),
    (0x1D468, 0x1D481, SentenceBreak::Upper),
    (0x1D482, 0x1D49B, SentenceBreak::Lower),
    (0x1D49C, 0x1D49C, SentenceBreak::Upper),
    (0x1D49E, 0x1D49F, SentenceBreak::Upper),
    (0x1D4A2, 0x1D4A2, SentenceBreak::Upper),
    (0x1D4A5, 0x1D4A6, SentenceBreak::Upper),
    (0x1D4A9, 0x1D4AC, SentenceBreak::Upper),
    (0x1D4AE, 0x1D4B5, SentenceBreak::Upper),
    (0x1D4B6, 0x1D4B9, SentenceBreak::Lower),
    (0x1D4BB, 0x1D4BB, SentenceBreak::Lower),
    (0x1D4BD, 0x1D4C3, SentenceBreak::Lower),
    (0x1D4C5, 0x1D4CF, SentenceBreak::Lower),
    (0x1D4D0, 0x1D4E9, SentenceBreak::Upper),
    (0x1D4EA, 0x1D503, SentenceBreak::Lower),
    (0x1D504, 0x1D505, SentenceBreak::Upper),
    (0x1D507, 0x1D50A, SentenceBreak::Upper),
    (0x1D50D, 0x1D514, SentenceBreak::Upper),
    (0x1D516, 0x1D51C, SentenceBreak::Upper),
    (0x1D51E, 0x1D537, SentenceBreak::Lower),
    (0x1D538, 0x1D539, SentenceBreak::Upper),
    (0x1D53B, 0x1D53E, SentenceBreak::Upper),
    (0x1D540, 0x1D544, SentenceBreak::Upper),
    (0x1D546, 0x1D546, SentenceBreak::Upper),
    (0x1D54A, 0x1D550, SentenceBreak::Upper),
    (0x1D552, 0x1D56B, SentenceBreak::Lower),
    (0x1D56C, 0x1D585, SentenceBreak::Upper),
    (0x1D586, 0x1D59F, SentenceBreak::Lower),
    (0x1D5A0, 0x1D5B9, SentenceBreak::Upper),
    (0x1D5BA, 0x1D5D3, SentenceBreak::Lower),
    (0x1D5D4, 0x1D5ED, SentenceBreak::Upper),
    (0x1D5EE, 0x1D607, SentenceBreak::Lower),
    (0x1D608, 0x1D621, SentenceBreak::Upper),
    (0x1D622, 0x1D63B, SentenceBreak::Lower),
    (0x1D63C, 0x1D655, SentenceBreak::Upper),
    (0x1D656, 0x1D66F, SentenceBreak::Lower),
    (0x1D670, 0x1D689, SentenceBreak::Upper),
    (0x1D68A, 0x1D6A5, SentenceBreak::Lower),
    (0x1D6A8, 0x1D6C0, SentenceBreak::Upper),
    (0x1D6C2, 0x1D6DA, SentenceBreak::Lower),
    (0x1D6DC, 0x1D6E1, SentenceBreak::Lower),
    (0x1D6E2, 0x1D6FA, SentenceBreak::Upper),
    (0x1D6FC, 0x1D714, SentenceBreak::Lower),
    (0x1D716, 0x1D71B, SentenceBreak::Lower),
    (0x1D71C, 0x1D734, SentenceBreak::Upper),
    (0x1D736, 0x1D74E, SentenceBreak::Lower),
    (0x1D750, 0x1D755, SentenceBreak::Lower),
    (0x1D756, 0x1D76E, SentenceBreak::Upper),
    (0x1D770, 0x1D788, SentenceBreak::Lower),
    (0x1D78A, 0x1D78F, SentenceBreak::Lower),
    (0x1D790, 0x1D7A8, SentenceBreak::Upper),
    (0x1D7AA, 0x1D7C2, SentenceBreak::Lower),
    (0x1D7C4, 0x1D7C9, SentenceBreak::Lower),
    (0x1D7CA, 0x1D7CA, SentenceBreak::Upper),
    (0x1D7CB, 0x1D7CB, SentenceBreak::Lower),
    (0x1D7CE, 0x1D7FF, SentenceBreak::Numeric),
    (0x1DA00, 0x1DA36, SentenceBreak::Extend),
    (0x1DA3B, 0x1DA6C, SentenceBreak::Extend),
    (0x1DA75, 0x1DA75, SentenceBreak::Extend),
    (0x1DA84, 0x1DA84, SentenceBreak::Extend),
    (0x1DA88, 0x1DA88, SentenceBreak::STerm),
    (0x1DA9B, 0x1DA9F, SentenceBreak::Extend),
    (0x1DAA1, 0x1DAAF, SentenceBreak::Extend),
    (0x1DF00, 0x1DF09, SentenceBreak::Lower),
    (0x1DF0A, 0x1DF0A, SentenceBreak::OLetter),
    (0x1DF0B, 0x1DF1E, SentenceBreak::Lower),
    (0x1DF25, 0x1DF2A, SentenceBreak::Lower),
    (0x1E000, 0x1E006, SentenceBreak::Extend),
    (0x1E008, 0x1E018, SentenceBreak::Extend),
    (0x1E01B, 0x1E021, SentenceBreak::Extend),
    (0x1E023, 0x1E024, SentenceBreak::Extend),
    (0x1E026, 0x1E02A, SentenceBreak::Extend),
    (0x1E030, 0x1E06D, SentenceBreak::Lower),
    (0x1E08F, 0x1E08F, SentenceBreak::Extend),
    (0x1E100, 0x1E12C, SentenceBreak::OLetter),
    (0x1E130, 0x1E136, SentenceBreak::Extend),
    (0x1E137, 0x1E13D, SentenceBreak::OLetter),
    (0x1E140, 0x1E149, SentenceBreak::Numeric),
    (0x1E14E, 0x1E14E, SentenceBreak::OLetter),
    (0x1E290, 0x1E2AD, SentenceBreak::OLetter),
    (0x1E2AE, 0x1E2AE, SentenceBreak::Extend),
    (0x1E2C0, 0x1E2EB, SentenceBreak::OLetter),
    (0x1E2EC, 0x1E2EF, SentenceBreak::Extend),
    (0x1E2F0, 0x1E2F9, SentenceBreak::Numeric),
    (0x1E4D0, 0x1E4EB, SentenceBreak::OLetter),
    (0x1E4EC, 0x1E4EF, SentenceBreak::Extend),
    (0x1E4F0, 0x1E4F9, SentenceBreak::Numeric),
    (0x1E7E0, 0x1E7E6, SentenceBreak::OLetter),
    (0x1E7E8, 0x1E7EB, SentenceBreak::OLetter),
    (0x1E7ED, 0x1E7EE, SentenceBreak::OLetter),
    (0x1E7F0, 0x1E7FE, SentenceBreak::OLetter),
    (0x1E800, 0x1E8C4, SentenceBreak::OLetter),
    (0x1E8D0, 0x1E8D6, SentenceBreak::Extend),
    (0x1E900, 0x1E921, SentenceBreak::Upper),
    (0x1E922, 0x1E943, SentenceBreak::Lower),
    (0x1E944, 0x1E94A, SentenceBreak::Extend),
    (0x1E94B, 0x1E94B, SentenceBreak::OLetter),
    (0x1E950, 0x1E959, SentenceBreak::Numeric),
    (0x1EE00, 0x1EE03, SentenceBreak::OLetter),
    (0x1EE05, 0x1EE1F, SentenceBreak::OLetter),
    (0x1EE21, 0x1EE22, SentenceBreak::OLetter),
    (0x1EE24, 0x1EE24, SentenceBreak::OLetter),
    (0x1EE27, 0x1EE27, SentenceBreak::OLetter),
    (0x1EE29, 0x1EE32, SentenceBreak::OLetter),
    (0x1EE34, 0x1EE37, SentenceBreak::OLetter),
    (0x1EE39, 0x1EE39, SentenceBreak::OLetter),
    (0x1EE3B, 0x1EE3B, SentenceBreak::OLetter),
    (0x1EE42, 0x1EE42, SentenceBreak::OLetter),
    (0x1EE47, 0x1EE47, SentenceBreak::OLetter),
    (0x1EE49, 0x1EE49, SentenceBreak::OLetter),
    (0x1EE4B, 0x1EE4B, SentenceBreak::OLetter),
    (0x1EE4D, 0x1EE4F, SentenceBreak::OLetter),
    (0x1EE51, 0x1EE52, SentenceBreak::OLetter),
    (0x1EE54, 0x1EE54, SentenceBreak::OLetter),
    (0x1EE57, 0x1EE57, SentenceBreak::OLetter),
    (0x1EE59, 0x1EE59, SentenceBreak::OLetter),
    (0x1EE5B, 0x1EE5B, SentenceBreak::OLetter),
    (0x1EE5D, 0x1EE5D, SentenceBreak::OLetter),
    (0x1EE5F, 0x1EE5F, SentenceBreak::OLetter),
    (0x1EE61, 0x1EE62, SentenceBreak::OLetter),
    (0x1EE64, 0x1EE64, SentenceBreak::OLetter),
    (0x1EE67, 0x1EE6A, SentenceBreak::OLetter),
    (0x1EE6C, 0x1EE72, SentenceBreak::OLetter),
    (0x1EE74, 0x1EE77, SentenceBreak::OLetter),
    (0x1EE79, 0x1EE7C, SentenceBreak::OLetter),
    (0x1EE7E, 0x1EE7E, SentenceBreak::OLetter),
    (0x1EE80, 0x1EE89, SentenceBreak::OLetter),
    (0x1EE8B, 0x1EE9B, SentenceBreak::OLetter),
    (0x1EEA1, 0x1EEA3, SentenceBreak::OLetter),
    (0x1EEA5, 0x1EEA9, SentenceBreak::OLetter),
    (0x1EEAB, 0x1EEBB, SentenceBreak::OLetter),
    (0x1F130, 0x1F149, SentenceBreak::Upper),
    (0x1F150, 0x1F169, SentenceBreak::Upper),
    (0x1F170, 0x1F189, SentenceBreak::Upper),
    (0x1F676, 0x1F678, SentenceBreak::Close),
    (0x1FBF0, 0x1FBF9, SentenceBreak::Numeric),
    (0x20000, 0x2A6DF, SentenceBreak::OLetter),
    (0x2A700, 0x2B739, SentenceBreak::OLetter),
    (0x2B740, 0x2B81D, SentenceBreak::OLetter),
    (0x2B820, 0x2CEA1, SentenceBreak::OLetter),
    (0x2CEB0, 0x2EBE0, SentenceBreak::OLetter),
    (0x2EBF0, 0x2EE5D, SentenceBreak::OLetter),
    (0x2F800, 0x2FA1D, SentenceBreak::OLetter),
    (0x30000, 0x3134A, SentenceBreak::OLetter),
    (0x31350, 0x323AF, SentenceBreak::OLetter),
    (0xE0001, 0xE0001, SentenceBreak::Format),
    (0xE0020, 0xE007F, SentenceBreak::Extend),
    (0xE0100, 0xE01EF, SentenceBreak::Extend),
];

// -------- East_Asian_Width ------------------------------------------------------

pub(crate) static EAW_FULLWIDTH: &[Range] = &[(0x3000, 0x3000), (0xFF01, 0xFF60), (0xFFE0, 0xFFE6)];

pub(crate) static EAW_HALFWIDTH: &[Range] = &[
    (0x20A9, 0x20A9),
    (0xFF61, 0xFFBE),
    (0xFFC2, 0xFFC7),
    (0xFFCA, 0xFFCF),
    (0xFFD2, 0xFFD7),
    (0xFFDA, 0xFFDC),
    (0xFFE8, 0xFFEE),
];

pub(crate) static EAW_NARROW: &[Range] = &[
    (0x0020, 0x007E),
    (0x00A2, 0x00A3),
    (0x00A5, 0x00A6),
    (0x00AC, 0x00AC),
    (0x00AF, 0x00AF),
    (0x27E6, 0x27ED),
    (0x2985, 0x2986),
];

pub(crate) static EAW_AMBIGUOUS: &[Range] = &[
    (0x00A1, 0x00A1),
    (0x00A4, 0x00A4),
    (0x00A7, 0x00A8),
    (0x00AA, 0x00AA),
    (0x00AD, 0x00AE),
    (0x00B0, 0x00B4),
    (0x00B6, 0x00BA),
    (0x00BC, 0x00BF),
    (0x00C6, 0x00C6),
    (0x00D0, 0x00D0),
    (0x00D7, 0x00D8),
    (0x00DE, 0x00E1),
    (0x00E6, 0x00E6),
    (0x00E8, 0x00EA),
    (0x00EC, 0x00ED),
    (0x00F0, 0x00F0),
    (0x00F2, 0x00F3),
    (0x00F7, 0x00FA),
    (0x00FC, 0x00FC),
    (0x00FE, 0x00FE),
    (0x0101, 0x0101),
    (0x0111, 0x0111),
    (0x0113, 0x0113),
    (0x011B, 0x011B),
    (0x0126, 0x0127),
    (0x012B, 0x012B),
    (0x0131, 0x0133),
    (0x0138, 0x0138),
    (0x013F, 0x0142),
    (0x0144, 0x0144),
    (0x0148, 0x014B),
    (0x014D, 0x014D),
    (0x0152, 0x0153),
    (0x0166, 0x0167),
    (0x016B, 0x016B),
    (0x01CE, 0x01CE),
    (0x01D0, 0x01D0),
    (0x01D2, 0x01D2),
    (0x01D4, 0x01D4),
    (0x01D6, 0x01D6),
    (0x01D8, 0x01D8),
    (0x01DA, 0x01DA),
    (0x01DC, 0x01DC),
    (0x0251, 0x0251),
    (0x0261, 0x0261),
    (0x02C4, 0x02C4),
    (0x02C7, 0x02C7),
    (0x02C9, 0x02CB),
    (0x02CD, 0x02CD),
    (0x02D0, 0x02D0),
    (0x02D8, 0x02DB),
    (0x02DD, 0x02DD),
    (0x02DF, 0x02DF),
    (0x0300, 0x036F),
    (0x0391, 0x03A1),
    (0x03A3, 0x03A9),
    (0x03B1, 0x03C1),
    (0x03C3, 0x03C9),
    (0x0401, 0x0401),
    (0x0410, 0x044F),
    (0x0451, 0x0451),
    (0x2010, 0x2010),
    (0x2013, 0x2016),
    (0x2018, 0x2019),
    (0x201C, 0x201D),
    (0x2020, 0x2022),
    (0x2024, 0x2027),
    (0x2030, 0x2030),
    (0x2032, 0x2033),
    (0x2035, 0x2035),
    (0x203B, 0x203B),
    (0x203E, 0x203E),
    (0x2074, 0x2074),
    (0x207F, 0x207F),
    (0x2081, 0x2084),
    (0x20AC, 0x20AC),
    (0x2103, 0x2103),
    (0x2105, 0x2105),
    (0x2109, 0x2109),
    (0x2113, 0x2113),
    (0x2116, 0x2116),
    (0x2121, 0x2122),
    (0x2126, 0x2126),
    (0x212B, 0x212B),
    (0x2153, 0x2154),
    (0x215B, 0x215E),
    (0x2160, 0x216B),
    (0x2170, 0x2179),
    (0x2189, 0x2189),
    (0x2190, 0x2199),
    (0x21B8, 0x21B9),
    (0x21D2, 0x21D2),
    (0x21D4, 0x21D4),
    (0x21E7, 0x21E7),
    (0x2200, 0x2200),
    (0x2202, 0x2203),
    (0x2207, 0x2208),
    (0x220B, 0x220B),
    (0x220F, 0x220F),
    (0x2211, 0x2211),
    (0x2215, 0x2215),
    (0x221A, 0x221A),
    (0x221D, 0x2220),
    (0x2223, 0x2223),
    (0x2225, 0x2225),
    (0x2227, 0x222C),
    (0x222E, 0x222E),
    (0x2234, 0x2237),
    (0x223C, 0x223D),
    (0x2248, 0x2248),
    (0x224C, 0x224C),
    (0x2252, 0x2252),
    (0x2260, 0x2261),
    (0x2264, 0x2267),
    (0x226A, 0x226B),
    (0x226E, 0x226F),
    (0x2282, 0x2283),
    (0x2286, 0x2287),
    (0x2295, 0x2295),
    (0x2299, 0x2299),
    (0x22A5, 0x22A5),
    (0x22BF, 0x22BF),
    (0x2312, 0x2312),
    (0x2460, 0x24E9),
    (0x24EB, 0x254B),
    (0x2550, 0x2573),
    (0x2580, 0x258F),
    (0x2592, 0x2595),
    (0x25A0, 0x25A1),
    (0x25A3, 0x25A9),
    (0x25B2, 0x25B3),
    (0x25B6, 0x25B7),
    (0x25BC, 0x25BD),
    (0x25C0, 0x25C1),
    (0x25C6, 0x25C8),
    (0x25CB, 0x25CB),
    (0x25CE, 0x25D1),
    (0x25E2, 0x25E5),
    (0x25EF, 0x25EF),
    (0x2605, 0x2606),
    (0x2609, 0x2609),
    (0x260E, 0x260F),
    (0x261C, 0x261C),
    (0x261E, 0x261E),
    (0x2640, 0x2640),
    (0x2642, 0x2642),
    (0x2660, 0x2661),
    (0x2663, 0x2665),
    (0x2667, 0x266A),
    (0x266C, 0x266D),
    (0x266F, 0x266F),
    (0x269E, 0x269F),
    (0x26BF, 0x26BF),
    (0x26C6, 0x26CD),
    (0x26CF, 0x26D3),
    (0x26D5, 0x26E1),
    (0x26E3, 0x26E3),
    (0x26E8, 0x26E9),
    (0x26EB, 0x26F1),
    (0x26F4, 0x26F4),
    (0x26F6, 0x26F9),
    (0x26FB, 0x26FC),
    (0x26FE, 0x26FF),
    (0x273D, 0x273D),
    (0x2776, 0x277F),
    (0x2B56, 0x2B59),
    (0x3248, 0x324F),
    (0xE000, 0xF8FF),
    (0xFE00, 0xFE0F),
    (0xFFFD, 0xFFFD),
    (0x1F100, 0x1F10A),
    (0x1F110, 0x1F12D),
    (0x1F130, 0x1F169),
    (0x1F170, 0x1F18D),
    (0x1F18F, 0x1F190),
    (0x1F19B, 0x1F1AC),
    (0xE0100, 0xE01EF),
    (0xF0000, 0xFFFFD),
    (0x100000, 0x10FFFD),
];

#[cfg(test)]
pub(crate) static ALL: &[(&str, &[Range])] = &[
    ("gcb_control", GCB_CONTROL),
    ("gcb_prepend", GCB_PREPEND),
    ("gcb_extend", GCB_EXTEND),
    ("gcb_spacing_mark", GCB_SPACING_MARK),
    ("gcb_l", GCB_L),
    ("gcb_v", GCB_V),
    ("gcb_t", GCB_T),
    ("extended_pictographic", EXTENDED_PICTOGRAPHIC),
    ("incb_consonant", INCB_CONSONANT),
    ("incb_linker", INCB_LINKER),
    ("incb_extend", INCB_EXTEND),
    ("eaw_fullwidth", EAW_FULLWIDTH),
    ("eaw_halfwidth", EAW_HALFWIDTH),
    ("eaw_narrow", EAW_NARROW),
    ("eaw_ambiguous", EAW_AMBIGUOUS),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_sorted_and_disjoint() {
        for (name, table) in ALL {
            assert!(!table.is_empty(), "{name} is empty");
            for &(lo, hi) in table.iter() {
                assert!(lo <= hi, "{name}: inverted range {lo:#X}..{hi:#X}");
                assert!(char::from_u32(lo).is_some(), "{name}: {lo:#X} is not a scalar");
                assert!(char::from_u32(hi).is_some(), "{name}: {hi:#X} is not a scalar");
            }
            for pair in table.windows(2) {
                assert!(
                    pair[0].1 < pair[1].0,
                    "{name}: {:#X}..{:#X} overlaps or precedes {:#X}..{:#X}",
                    pair[0].0,
                    pair[0].1,
                    pair[1].0,
                    pair[1].1
                );
            }
        }
    }

    fn assert_tagged<T: Copy>(name: &str, table: &[ClassRange<T>]) {
        let plain: Vec<Range> = table.iter().map(|&(lo, hi, _)| (lo, hi)).collect();
        assert!(plain[0].0 >= 0x80, "{name} repeats the ASCII fast path");
        for pair in plain.windows(2) {
            assert!(pair[0].1 < pair[1].0, "{name}: {:#X} overlaps {:#X}", pair[0].1, pair[1].0);
        }
        assert!(char::from_u32(plain[plain.len() - 1].1).is_some(), "{name} ends past a scalar");
    }

    #[test]
    fn tagged_tables_sorted_and_disjoint() {
        assert_tagged("word_break", WORD_BREAK);
        assert_tagged("sentence_break", SENTENCE_BREAK);
    }

    #[test]
    fn east_asian_width_tables_disjoint() {
        let tables = [EAW_FULLWIDTH, EAW_HALFWIDTH, EAW_NARROW, EAW_AMBIGUOUS];
        for (i, a) in tables.iter().enumerate() {
            for b in &tables[i + 1..] {
                for &(lo, hi) in a.iter() {
                    for cp in [lo, hi] {
                        let c = char::from_u32(cp).unwrap();
                        assert!(!contains(b, c), "{cp:#X} has two widths");
                    }
                }
            }
        }
    }

    #[test]
    fn class_of_hits_edges() {
        assert_eq!(class_of(WORD_BREAK, '\u{3005}'), Some(WordBreak::ALetter));
        assert_eq!(class_of(WORD_BREAK, '\u{0600}'), Some(WordBreak::Numeric));
        assert_eq!(class_of(WORD_BREAK, '\u{4E00}'), None);
        assert_eq!(class_of(SENTENCE_BREAK, '\u{02C2}'), None);
        assert_eq!(class_of(SENTENCE_BREAK, '\u{10FFFF}'), None);
    }

    #[test]
    fn extend_and_spacing_mark_disjoint() {
        for &(lo, hi) in GCB_SPACING_MARK {
            for cp in lo..=hi {
                let c = char::from_u32(cp).unwrap();
                assert!(!contains(GCB_EXTEND, c), "{cp:#X} in both Extend and SpacingMark");
            }
        }
    }

    #[test]
    fn contains_hits_edges() {
        assert!(contains(GCB_EXTEND, '\u{0300}'));
        assert!(contains(GCB_EXTEND, '\u{036F}'));
        assert!(!contains(GCB_EXTEND, '\u{0370}'));
        assert!(contains(EXTENDED_PICTOGRAPHIC, '\u{1FFFD}'));
        assert!(!contains(EXTENDED_PICTOGRAPHIC, 'a'));
    }
}
