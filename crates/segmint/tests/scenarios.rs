//! Concrete segmentation scenarios: counts, widths and segment lists for
//! well-known inputs.

use pretty_assertions::assert_eq;
use segmint::{AmbiguousWidth, Options, Segmenter, WordKind};

const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
const RAINBOW_FLAG: &str = "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}";
const KISS_WOMEN: &str = "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F469}";
const FLAG_DE: &str = "\u{1F1E9}\u{1F1EA}";

fn words(s: &str) -> Vec<&str> {
    segmint::Segmenter::default().words(s).map(|w| w.text).collect()
}

fn sentences(s: &str) -> Vec<&str> {
    segmint::Segmenter::default().sentences(s).map(|s| s.text).collect()
}

#[test]
fn hello_is_five_clusters_five_columns() {
    assert_eq!(segmint::grapheme_count("Hello"), 5);
    assert_eq!(segmint::width("Hello"), 5);
}

#[test]
fn flag_is_one_wide_cluster() {
    assert_eq!(segmint::grapheme_count(FLAG_DE), 1);
    assert_eq!(segmint::width(FLAG_DE), 2);
}

#[test]
fn zwj_sequences_are_single_clusters() {
    assert_eq!(segmint::grapheme_count(KISS_WOMEN), 1);
    assert_eq!(segmint::grapheme_count(FAMILY), 1);
    assert_eq!(segmint::width(FAMILY), 2);
}

#[test]
fn combining_cedilla() {
    assert_eq!(segmint::grapheme_count("a\u{0327}"), 1);
    assert_eq!(segmint::width("a\u{0327}"), 1);
}

#[test]
fn cjk_is_double_width() {
    assert_eq!(segmint::width("世界"), 4);
    assert_eq!(segmint::width("Hello, 世界"), 11);
}

#[test]
fn empty_string_is_zero_everywhere() {
    assert_eq!(segmint::grapheme_count(""), 0);
    assert_eq!(segmint::word_count(""), 0);
    assert_eq!(segmint::sentence_count(""), 0);
    assert_eq!(segmint::width(""), 0);
    let step = segmint::next_grapheme("", segmint::GraphemeState::default());
    assert_eq!(step.cluster, "");
    assert_eq!(step.remainder, "");
}

#[test]
fn abbreviations_do_not_end_sentences() {
    assert_eq!(segmint::sentence_count("Mr. Smith went to the U.S.A. yesterday."), 1);
}

#[test]
fn terminator_runs_are_absorbed() {
    assert_eq!(
        sentences("What?! No way... Really?"),
        vec!["What?! ", "No way... ", "Really?"]
    );
}

#[test]
fn stepping_threads_state() {
    let text = format!("a{FAMILY}{FLAG_DE}{FLAG_DE}e\u{0301}");
    let mut rest = text.as_str();
    let mut state = segmint::GraphemeState::default();
    let mut clusters = Vec::new();
    while !rest.is_empty() {
        let step = segmint::next_grapheme(rest, state);
        clusters.push((step.cluster, step.width));
        rest = step.remainder;
        state = step.state;
    }
    assert_eq!(
        clusters,
        vec![("a", 1), (FAMILY, 2), (FLAG_DE, 2), (FLAG_DE, 2), ("e\u{0301}", 1)]
    );
}

#[test]
fn word_kinds() {
    let kinds: Vec<(&str, WordKind)> = Segmenter::default()
        .words("Hi, 42 \u{1F600}")
        .map(|w| (w.text, w.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("Hi", WordKind::Word),
            (",", WordKind::Punctuation),
            (" ", WordKind::Whitespace),
            ("42", WordKind::Word),
            (" ", WordKind::Whitespace),
            ("\u{1F600}", WordKind::Punctuation),
        ]
    );
}

#[test]
fn contractions_and_numbers_stay_whole() {
    assert_eq!(
        words("can't pay $1,234.50"),
        vec!["can't", " ", "pay", " ", "$", "1,234.50"]
    );
}

#[test]
fn ambiguous_width_is_configurable() {
    let wide = Segmenter::new(Options::default().with_ambiguous(AmbiguousWidth::Wide));
    assert_eq!(segmint::width("\u{00BF}\u{00A1}"), 2);
    assert_eq!(wide.width("\u{00BF}\u{00A1}"), 4);
    assert_eq!(wide.width("abc"), 3);
}

#[test]
fn wide_ambiguous_covers_greek_and_cyrillic_letters() {
    let wide = Segmenter::new(Options::default().with_ambiguous(AmbiguousWidth::Wide));
    for text in ["\u{0436}", "\u{042F}", "\u{03B1}", "\u{00E9}"] {
        assert_eq!(segmint::width(text), 1, "{text}");
        assert_eq!(wide.width(text), 2, "{text}");
    }
    assert_eq!(wide.width("\u{0436}\u{0435}\u{043D}\u{0430}"), 8);
    assert_eq!(wide.width("\u{0639}"), 1);
}

#[test]
fn reverse_keeps_clusters_intact() {
    let text = format!("x{FAMILY}e\u{0301}");
    assert_eq!(segmint::reverse_graphemes(&text), format!("e\u{0301}{FAMILY}x"));
}

#[test]
fn unicode_version_is_fifteen_one() {
    assert_eq!(segmint::UNICODE_VERSION, (15, 1, 0));
}
