//! Unicode text segmentation for terminals and editors.
//!
//! ```
//! let text = "Mr. Smith bought 🇩🇪 flags. Really?";
//! assert_eq!(segmint::sentence_count(text), 2);
//! assert_eq!(segmint::grapheme_count("👨\u{200D}👩\u{200D}👧"), 1);
//! assert_eq!(segmint::width("世界"), 4);
//! ```
//!
//! Property lookups live in [`props`]; the engines, iterators and options are
//! re-exported from the text layer, and [`config`] loads options from
//! `segmint.toml`.

pub use core_config as config;
pub use core_props as props;

pub use core_text::{
    AmbiguousWidth, Boundaries, Decoded, Grapheme, GraphemeState, GraphemeStep, Graphemes, Input,
    Options, Segment, Segmenter, Sentence, SentenceState, SentenceStep, Sentences, StateError,
    StepOutput, StepState, UNICODE_VERSION, Unit, Word, WordKind, WordState, WordStep, Words,
    cluster_width, grapheme_count, next_grapheme, next_sentence, next_word, normalize_and_segment,
    reverse_graphemes, sentence_count, step, width, word_count,
};

/// Segmenter configured from the discovered `segmint.toml`, or the defaults
/// when there is none.
pub fn configured() -> anyhow::Result<Segmenter> {
    let config = core_config::load_from(None)?;
    Ok(Segmenter::new(config.options()))
}
