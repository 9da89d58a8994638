//! Segmentation does not depend on the normalization form of its input.

use segmint::{Options, Segmenter};
use unicode_normalization::UnicodeNormalization;

const SAMPLES: &[&str] = &[
    "caf\u{00E9} na\u{00EF}ve r\u{00E9}sum\u{00E9}",
    "\u{1E69}\u{0323}",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{AC01}",
    "A\u{030A}ngstr\u{00F6}m. \u{00C5}ngstr\u{00F6}m!",
    "\u{0958}\u{0959} \u{0915}\u{094D}\u{0937}",
];

#[test]
fn nfc_and_nfd_segment_alike() {
    for sample in SAMPLES {
        let nfc: String = sample.nfc().collect();
        let nfd: String = sample.nfd().collect();
        let (nfc, nfd) = (nfc.as_str(), nfd.as_str());
        assert_eq!(segmint::grapheme_count(nfc), segmint::grapheme_count(nfd), "{sample:?}");
        assert_eq!(segmint::word_count(nfc), segmint::word_count(nfd), "{sample:?}");
        assert_eq!(segmint::sentence_count(nfc), segmint::sentence_count(nfd), "{sample:?}");
        assert_eq!(segmint::width(nfc), segmint::width(nfd), "{sample:?}");
    }
}

#[test]
fn input_is_not_normalized() {
    let nfd = "e\u{0301}";
    let clusters: Vec<&str> = Segmenter::default().graphemes(nfd).map(|g| g.text).collect();
    assert_eq!(clusters, vec!["e\u{0301}"]);
}

#[test]
fn normalize_and_segment_is_opt_in() {
    let (normalized, segments) = segmint::normalize_and_segment("A\u{030A}b", Options::default());
    assert_eq!(normalized, "\u{00C5}b");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].cluster, "\u{00C5}");
    assert_eq!((segments[1].start, segments[1].end), (2, 3));
}
