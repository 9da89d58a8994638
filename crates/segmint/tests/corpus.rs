//! Reference corpus: grapheme counts, widths, word and sentence segmentation
//! for a fixed set of mixed-script inputs.

use pretty_assertions::assert_eq;
use segmint::Segmenter;

fn counts(cases: &[&str], f: impl Fn(&str) -> usize) -> Vec<usize> {
    cases.iter().map(|&s| f(s)).collect()
}

#[test]
fn grapheme_counts() {
    let cases = [
        "Hello",
        "\u{1F1E9}\u{1F1EA}\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
        "नमस्ते",
        "\u{1F9D1}\u{200D}\u{1F4BB}",
        "a\u{0327}",
        "",
        "\u{1F3F4}\u{200D}\u{2620}\u{FE0F}",
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
        "e\u{030A}\u{0307}",
        "\u{AC01}",
        "\u{1100}\u{1161}\u{11A8}",
    ];
    assert_eq!(
        counts(&cases, |s| segmint::grapheme_count(s)),
        vec![5, 2, 3, 1, 1, 0, 1, 1, 1, 1, 1]
    );
}

#[test]
fn devanagari_conjuncts_join() {
    let clusters: Vec<&str> = Segmenter::default().graphemes("नमस्ते").map(|g| g.text).collect();
    assert_eq!(clusters, vec!["न", "म", "स्ते"]);
}

#[test]
fn string_widths() {
    let cases = [
        "Hello",
        "世界",
        "Hello, 世界",
        "\u{1F1E9}\u{1F1EA}",
        "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
        "",
        "a\u{0327}",
        "\u{1F468}\u{200D}\u{1F4BB}",
        "\u{00BF}\u{00A1}",
        "\u{FF21}\u{FF41}",
        "\t\n",
        "\u{2E3A}\u{2E3B}",
    ];
    assert_eq!(
        counts(&cases, |s| segmint::width(s)),
        vec![5, 4, 11, 2, 2, 0, 1, 2, 2, 4, 0, 7]
    );
}

#[test]
fn complex_emoji_are_single_wide_clusters() {
    let cases = [
        "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}",
        "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
        "\u{1F3F3}\u{FE0F}\u{200D}\u{26A7}\u{FE0F}",
        "\u{1F468}\u{1F3FD}\u{200D}\u{1F4BB}",
        "\u{1F9D1}\u{200D}\u{1F393}",
        "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F469}",
        "\u{1F43B}\u{200D}\u{2744}\u{FE0F}",
        "\u{1F62E}\u{200D}\u{1F4A8}",
        "\u{2764}\u{FE0F}\u{200D}\u{1F525}",
        "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}",
        "\u{1F3F4}\u{200D}\u{2620}\u{FE0F}",
        "\u{1F9D1}\u{1F3FB}\u{200D}\u{1F9B0}",
        "\u{1F469}\u{1F3FE}\u{200D}\u{1F680}",
        "\u{1F935}\u{1F3FF}\u{200D}\u{2640}\u{FE0F}",
        "\u{1F9D1}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}",
        "\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F466}\u{200D}\u{1F466}",
    ];
    for case in cases {
        assert_eq!(segmint::grapheme_count(case), 1, "{case:?}");
        assert_eq!(segmint::width(case), 2, "{case:?}");
    }
}

#[test]
fn word_segment_counts() {
    let cases = [
        "Hello, world!",
        "Test 123. More text!",
        "こんにちは世界",
        "Hello\nWorld",
        "word-with-hyphens",
        "CamelCaseWord",
        "user@example.com",
        "U.S.A.",
        "",
        "   ",
        "a",
        "café naïve résumé",
    ];
    assert_eq!(
        counts(&cases, |s| segmint::word_count(s)),
        vec![5, 9, 7, 3, 5, 1, 3, 2, 0, 1, 1, 5]
    );
}

#[test]
fn word_segments() {
    fn words(s: &str) -> Vec<&str> {
        Segmenter::default().words(s).map(|w| w.text).collect()
    }
    assert_eq!(words("user@example.com"), vec!["user", "@", "example.com"]);
    assert_eq!(words("U.S.A."), vec!["U.S.A", "."]);
    assert_eq!(
        words("word-with-hyphens"),
        vec!["word", "-", "with", "-", "hyphens"]
    );
    assert_eq!(words("Test 123. More"), vec!["Test", " ", "123", ".", " ", "More"]);
}

#[test]
fn sentence_counts() {
    let cases = [
        "This is sentence 1.0. And this is sentence two.",
        "Hello! How are you? I'm fine.",
        "Mr. Smith went to the U.S.A. yesterday.",
        "What?! No way... Really?",
        "End.\n\nNew paragraph.",
        "",
        "No punctuation here",
        "Multiple...   spaces!    After   punctuation.",
        "E.g. this is an example.",
        "Test (with parentheses). Next sentence.",
        "Question mark? Answer! Exclamation.",
        "Dr. Jones vs. Dr. Smith.",
    ];
    assert_eq!(
        counts(&cases, |s| segmint::sentence_count(s)),
        vec![2, 3, 1, 3, 3, 0, 1, 2, 1, 2, 3, 2]
    );
}
