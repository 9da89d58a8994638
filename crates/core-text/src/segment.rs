//! Opt-in normalization before segmentation.
//!
//! The engines never normalize: canonically equivalent strings may segment
//! into different code units (though the same number of clusters). Callers
//! that want stable cluster text, e.g. for comparison or caching, run the
//! input through NFC here first.

use unicode_normalization::UnicodeNormalization;

use crate::options::Options;
use crate::Segmenter;

/// A grapheme cluster of the normalized string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub cluster: String,
    pub start: usize, // byte offset in normalized string (inclusive)
    pub end: usize,   // byte offset in normalized string (exclusive)
    pub width: u16,
}

/// Normalize to NFC and segment into grapheme clusters with widths and byte
/// ranges.
pub fn normalize_and_segment(input: &str, options: Options) -> (String, Vec<Segment>) {
    let normalized: String = input.nfc().collect();
    let segments = Segmenter::new(options)
        .graphemes(normalized.as_str())
        .map(|g| Segment {
            cluster: g.text.to_string(),
            start: g.start,
            end: g.start + g.text.len(),
            width: g.width,
        })
        .collect();
    (normalized, segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nfc_equivalence_and_segmentation_single_cluster() {
        let decomposed = "e\u{0301}";
        let composed = "\u{00E9}";
        let (n1, s1) = normalize_and_segment(decomposed, Options::default());
        let (n2, s2) = normalize_and_segment(composed, Options::default());
        assert_eq!(n1, n2);
        assert_eq!(s1, s2);
        assert_eq!(s1.len(), 1);
        assert_eq!(s1[0].cluster, "é");
        assert_eq!(s1[0].width, 1);
    }

    #[test]
    fn ranges_tile_the_normalized_string() {
        let s = "漢😀\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}a";
        let (normalized, segs) = normalize_and_segment(s, Options::default());
        assert_eq!(segs.len(), 4);
        let mut prev_end = 0usize;
        let mut join = String::new();
        for seg in &segs {
            assert_eq!(seg.start, prev_end);
            assert_eq!(&normalized[seg.start..seg.end], seg.cluster);
            prev_end = seg.end;
            join.push_str(&seg.cluster);
        }
        assert_eq!(join, normalized);
        let widths: Vec<u16> = segs.iter().map(|s| s.width).collect();
        assert_eq!(widths, vec![2, 2, 2, 1]);
    }

    #[test]
    fn hangul_jamo_compose() {
        let (normalized, segs) =
            normalize_and_segment("\u{1100}\u{1161}\u{11A8}", Options::default());
        assert_eq!(normalized, "\u{AC01}");
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].width, 2);
    }

    #[test]
    fn gear_vs16_is_emoji_width() {
        let (_n, segs) = normalize_and_segment("a\u{2699}\u{FE0F}b", Options::default());
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[1].cluster, "\u{2699}\u{FE0F}");
        assert_eq!(segs[1].width, 2);
    }
}
