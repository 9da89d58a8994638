//! Cross-check against the `unicode-segmentation` crate, pinned to the same
//! Unicode version, on curated strings and on every codepoint placed between
//! a few fixed neighbours.

use pretty_assertions::assert_eq;
use segmint::{Options, Segmenter};
use unicode_segmentation::UnicodeSegmentation;

const CURATED: &[&str] = &[
    "Hello, world!",
    "The quick (\"brown\") fox can't jump 32.3 feet, right?",
    "e\u{0301}t\u{00E9} na\u{0308}ive",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1E9}\u{1F1EA}\u{1F1EB}\u{1F1F7}\u{1F1EE}",
    "\u{1F44D}\u{1F3FD} \u{2764}\u{FE0F} 1\u{FE0F}\u{20E3}",
    "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{11A8} \u{D55C}\u{AD6D}\u{C5B4}",
    "\r\n\n\r \t\u{0085}",
    "\u{05D0}\u{05F4}\u{05D1} \u{05D0}'",
    "\u{30A2}\u{30FC}\u{30C6}\u{30A3}\u{30B9}\u{30C8} foo_bar 3_000",
    "a\u{00AD}b \u{200B}c",
    "user@example.com http://x.y/z?q=1&r=2",
    "  multiple   spaces\u{3000}ideographic",
];

#[test]
fn graphemes_agree() {
    let seg = Segmenter::default();
    for text in CURATED {
        let ours: Vec<&str> = seg.graphemes(*text).map(|g| g.text).collect();
        let theirs: Vec<&str> = text.graphemes(true).collect();
        assert_eq!(ours, theirs, "{text:?}");
    }
}

#[test]
fn word_bounds_agree() {
    let seg = Segmenter::default();
    for text in CURATED {
        let ours: Vec<&str> = seg.words(*text).map(|w| w.text).collect();
        let theirs: Vec<&str> = text.split_word_bounds().collect();
        assert_eq!(ours, theirs, "{text:?}");
    }
}

#[test]
fn unicode_words_agree() {
    let seg = Segmenter::default();
    for text in CURATED {
        let ours: Vec<&str> = seg.words(*text).filter(|w| w.is_word()).map(|w| w.text).collect();
        let theirs: Vec<&str> = text.unicode_words().collect();
        assert_eq!(ours, theirs, "{text:?}");
    }
}

#[test]
fn sentence_bounds_agree_without_abbreviations() {
    let seg = Segmenter::new(Options::default().with_abbreviations(false));
    let texts = [
        "Hello! How are you? I'm fine.",
        "This is sentence 1.0. And this is sentence two.",
        "He said \"Stop.\" Then he left.\n\nNew paragraph.",
        "What?! No way... Really? e.g. this.",
        "Mr. Smith went home.",
    ];
    for text in texts {
        let ours: Vec<&str> = seg.sentences(text).map(|s| s.text).collect();
        let theirs: Vec<&str> = text.split_sentence_bounds().collect();
        assert_eq!(ours, theirs, "{text:?}");
    }
}

/// Scalars through plane 3 plus the variation selector supplement. Later
/// planes hold only private use and unassigned codepoints.
fn swept_chars() -> impl Iterator<Item = char> {
    ('\0'..='\u{3FFFF}').chain('\u{E0000}'..='\u{E01EF}')
}

/// Run every swept character through `templates` (with `*` standing for the
/// character) and compare segment lengths.
fn sweep(templates: &[&str], ours: fn(&str) -> Vec<usize>, theirs: fn(&str) -> Vec<usize>) {
    let mut mismatches = Vec::new();
    let mut buf = [0u8; 4];
    for c in swept_chars() {
        let ch: &str = c.encode_utf8(&mut buf);
        for template in templates {
            let text = template.replace('*', ch);
            let (a, b) = (ours(&text), theirs(&text));
            if a != b {
                mismatches.push((c as u32, text, a, b));
            }
        }
    }
    assert!(
        mismatches.is_empty(),
        "{} mismatches, first: {:#X?}",
        mismatches.len(),
        &mismatches[..mismatches.len().min(8)]
    );
}

fn our_words(text: &str) -> Vec<usize> {
    Segmenter::default().words(text).map(|w| w.text.len()).collect()
}

fn their_words(text: &str) -> Vec<usize> {
    text.split_word_bounds().map(str::len).collect()
}

fn our_sentences(text: &str) -> Vec<usize> {
    Segmenter::new(Options::default().with_abbreviations(false))
        .sentences(text)
        .map(|s| s.text.len())
        .collect()
}

fn their_sentences(text: &str) -> Vec<usize> {
    text.split_sentence_bounds().map(str::len).collect()
}

#[test]
fn word_classes_agree_for_every_codepoint() {
    sweep(&["a*b", "1*2", "x**y"], our_words, their_words);
}

#[test]
fn sentence_classes_agree_for_every_codepoint() {
    sweep(&["a. *b", "A*.B", "a.*"], our_sentences, their_sentences);
}

#[test]
fn words_agree_on_reported_cases() {
    for text in ["\u{1000}\u{102C}\u{1001}", "x\u{3005}y", "Price \u{0600}12 ok"] {
        assert_eq!(our_words(text), their_words(text), "{text:?}");
    }
    let seg = Segmenter::default();
    let words: Vec<&str> = seg.words("Price \u{0600}12 ok").map(|w| w.text).collect();
    assert_eq!(words, vec!["Price", " ", "\u{0600}12", " ", "ok"]);
}
