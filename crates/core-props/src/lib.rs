//! Codepoint property tables for text segmentation and display width.
//!
//! Each property is a total function from `char` to a small enum: characters
//! missing from every table fall back to the property's default class
//! (`Other` for the break properties, `Neutral` for East Asian Width). Data is
//! embedded as static sorted range slices (see `tables`) and looked up with a
//! binary search, with an ASCII fast path in front of every lookup.
//!
//! The classes mirror UAX #29 (Grapheme_Cluster_Break, Word_Break,
//! Sentence_Break), the Extended_Pictographic and Indic_Conjunct_Break
//! auxiliaries from UTS #51 / UAX #44, and UAX #11 (East_Asian_Width).

mod tables;

pub mod grapheme;
pub mod sentence;
pub mod width;
pub mod word;

pub use grapheme::{
    GraphemeBreak, IndicConjunctBreak, grapheme_break, indic_conjunct_break, is_emoji_modifier,
    is_extended_pictographic,
};
pub use sentence::{SentenceBreak, sentence_break};
pub use width::{EastAsianWidth, east_asian_width};
pub use word::{WordBreak, word_break};

/// Unicode version the embedded tables target, as `(major, minor, update)`.
pub const UNICODE_VERSION: (u8, u8, u8) = (15, 1, 0);
