//! Extended grapheme cluster boundaries (UAX #29 rules GB3–GB999).
//!
//! The engine keeps only the left context of the scan: the rule-relevant
//! summary of everything consumed since the last hard boundary. A boundary
//! before a unit is decided by `GraphemeState::transition`, a flat match whose
//! arm order is the rule precedence. Returned states hold the context *after*
//! the cluster's last unit; the next call re-applies the transition to its
//! first unit, which is how chunked scans resume across splits.

use core_props::{GraphemeBreak, IndicConjunctBreak};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::StateError;
use crate::input::{Input, Mode, NeedMore, Unit, unit_at};
use crate::options::AmbiguousWidth;
use crate::width::ClusterShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
enum Context {
    #[default]
    Sot,
    Any,
    Cr,
    /// LF or Control.
    Control,
    L,
    /// LV or V.
    LvV,
    /// LVT or T.
    LvtT,
    Prepend,
    /// Extended_Pictographic Extend*.
    ExtPict,
    /// Extended_Pictographic Extend* ZWJ.
    ExtPictZwj,
    /// Odd number of regional indicators since the last non-RI.
    RiOdd,
    Malformed,
}

const CONTEXTS: [Context; 12] = [
    Context::Sot,
    Context::Any,
    Context::Cr,
    Context::Control,
    Context::L,
    Context::LvV,
    Context::LvtT,
    Context::Prepend,
    Context::ExtPict,
    Context::ExtPictZwj,
    Context::RiOdd,
    Context::Malformed,
];

/// GB9c progress: `Consonant [Extend Linker]* Linker [Extend Linker]*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
enum Conjunct {
    #[default]
    None,
    Consonant,
    Linked,
}

const CONJUNCTS: [Conjunct; 3] = [Conjunct::None, Conjunct::Consonant, Conjunct::Linked];

/// Continuation state of the grapheme engine. `Default` is start of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GraphemeState {
    context: Context,
    conjunct: Conjunct,
}

/// Properties of one unit as the grapheme rules see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Class {
    /// `None` for a malformed unit.
    gcb: Option<GraphemeBreak>,
    incb: Option<IndicConjunctBreak>,
}

pub(crate) fn classify(unit: Unit) -> Class {
    match unit {
        Unit::Char(c) => Class {
            gcb: Some(core_props::grapheme_break(c)),
            incb: core_props::indic_conjunct_break(c),
        },
        _ => Class {
            gcb: None,
            incb: None,
        },
    }
}

impl GraphemeState {
    pub(crate) const BITS: u32 = 6;

    /// Apply one unit; returns the new state and whether a boundary precedes
    /// the unit.
    pub(crate) fn transition(self, class: Class) -> (GraphemeState, bool) {
        use GraphemeBreak as G;

        let Some(gcb) = class.gcb else {
            let isolated = GraphemeState {
                context: Context::Malformed,
                conjunct: Conjunct::None,
            };
            return (isolated, true);
        };
        let ctx = self.context;
        let boundary = match (ctx, gcb) {
            (Context::Sot, _) => true,
            // GB3
            (Context::Cr, G::Lf) => false,
            // GB4
            (Context::Cr | Context::Control | Context::Malformed, _) => true,
            // GB5
            (_, G::Cr | G::Lf | G::Control) => true,
            // GB6
            (Context::L, G::L | G::V | G::Lv | G::Lvt) => false,
            // GB7
            (Context::LvV, G::V | G::T) => false,
            // GB8
            (Context::LvtT, G::T) => false,
            // GB9, GB9a
            (_, G::Extend | G::Zwj | G::SpacingMark) => false,
            // GB9b
            (Context::Prepend, _) => false,
            // GB9c
            _ if self.conjunct == Conjunct::Linked
                && class.incb == Some(IndicConjunctBreak::Consonant) =>
            {
                false
            }
            // GB11
            (Context::ExtPictZwj, G::ExtendedPictographic) => false,
            // GB12, GB13
            (Context::RiOdd, G::RegionalIndicator) => false,
            // GB999
            _ => true,
        };

        let joined = !boundary;
        let context = match gcb {
            G::Cr => Context::Cr,
            G::Lf | G::Control => Context::Control,
            G::L => Context::L,
            G::V | G::Lv => Context::LvV,
            G::T | G::Lvt => Context::LvtT,
            G::Prepend => Context::Prepend,
            G::ExtendedPictographic => Context::ExtPict,
            G::RegionalIndicator if joined && ctx == Context::RiOdd => Context::Any,
            G::RegionalIndicator => Context::RiOdd,
            G::Extend if joined && ctx == Context::ExtPict => Context::ExtPict,
            G::Zwj if joined && ctx == Context::ExtPict => Context::ExtPictZwj,
            _ => Context::Any,
        };
        let conjunct = match class.incb {
            Some(IndicConjunctBreak::Consonant) => Conjunct::Consonant,
            Some(IndicConjunctBreak::Linker) if joined && self.conjunct != Conjunct::None => {
                Conjunct::Linked
            }
            Some(IndicConjunctBreak::Extend) if joined => self.conjunct,
            _ => Conjunct::None,
        };
        (GraphemeState { context, conjunct }, boundary)
    }

    /// Whether a boundary follows regardless of the next unit.
    pub(crate) fn breaks_after(self) -> bool {
        matches!(self.context, Context::Control | Context::Malformed)
    }

    /// Pack into the low [`Self::BITS`] bits of a `u32`.
    pub fn to_bits(self) -> u32 {
        self.context as u32 | (self.conjunct as u32) << 4
    }

    /// Inverse of [`to_bits`](Self::to_bits).
    pub fn from_bits(bits: u32) -> Result<Self, StateError> {
        let invalid = StateError::InvalidBits {
            engine: "grapheme",
            bits,
        };
        if bits >> Self::BITS != 0 {
            return Err(invalid);
        }
        let context = CONTEXTS.get((bits & 0xF) as usize).copied().ok_or(invalid)?;
        let conjunct = CONJUNCTS.get((bits >> 4) as usize).copied().ok_or(invalid)?;
        Ok(Self { context, conjunct })
    }
}

/// Result of one grapheme step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphemeStep<I> {
    pub cluster: I,
    pub remainder: I,
    /// Display width of `cluster`.
    pub width: u16,
    pub state: GraphemeState,
}

pub(crate) fn scan<I: Input>(
    input: I,
    state: GraphemeState,
    ambiguous: AmbiguousWidth,
    mode: Mode,
) -> Result<GraphemeStep<I>, NeedMore> {
    let mut current = state;
    let mut shape = ClusterShape::default();
    let mut at = 0;
    while at < input.unit_len() {
        let decoded = unit_at(input, at, mode)?;
        let (next, boundary) = current.transition(classify(decoded.unit));
        if boundary && at > 0 {
            break;
        }
        shape.push(decoded.unit);
        current = next;
        at += decoded.len;
    }
    if mode == Mode::Partial && at == input.unit_len() && (at == 0 || !current.breaks_after()) {
        trace!(target: "text.grapheme", units = at, "cluster reaches end of chunk");
        return Err(NeedMore);
    }
    let (cluster, remainder) = input.split_at(at);
    Ok(GraphemeStep {
        cluster,
        remainder,
        width: shape.width(ambiguous),
        state: current,
    })
}

/// Final-mode step: the end of `input` is the end of the text.
pub(crate) fn next<I: Input>(
    input: I,
    state: GraphemeState,
    ambiguous: AmbiguousWidth,
) -> GraphemeStep<I> {
    match scan(input, state, ambiguous, Mode::Final) {
        Ok(step) => step,
        // Final mode never defers; keep the input whole rather than panic.
        Err(NeedMore) => {
            let (cluster, remainder) = input.split_at(input.unit_len());
            GraphemeStep {
                cluster,
                remainder,
                width: crate::width::cluster_width(cluster, ambiguous),
                state,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clusters(s: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = s;
        let mut state = GraphemeState::default();
        while !rest.is_empty() {
            let step = next(rest, state, AmbiguousWidth::Narrow);
            out.push(step.cluster);
            rest = step.remainder;
            state = step.state;
        }
        out
    }

    #[test]
    fn empty_input_keeps_state() {
        let state = GraphemeState::default();
        let step = next("", state, AmbiguousWidth::Narrow);
        assert_eq!(step.cluster, "");
        assert_eq!(step.remainder, "");
        assert_eq!(step.width, 0);
        assert_eq!(step.state, state);
    }

    #[test]
    fn ascii_one_per_char() {
        assert_eq!(clusters("Hello"), vec!["H", "e", "l", "l", "o"]);
    }

    #[test]
    fn crlf_and_controls() {
        assert_eq!(clusters("a\r\nb"), vec!["a", "\r\n", "b"]);
        assert_eq!(clusters("\n\r"), vec!["\n", "\r"]);
        assert_eq!(clusters("\t\u{0301}"), vec!["\t", "\u{0301}"]);
    }

    #[test]
    fn combining_marks_attach() {
        assert_eq!(clusters("a\u{0327}b"), vec!["a\u{0327}", "b"]);
        assert_eq!(clusters("e\u{030A}\u{0307}"), vec!["e\u{030A}\u{0307}"]);
    }

    #[test]
    fn hangul_syllables() {
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}"), vec!["\u{1100}\u{1161}\u{11A8}"]);
        assert_eq!(clusters("가\u{11A8}"), vec!["가\u{11A8}"]);
        assert_eq!(clusters("각\u{1161}"), vec!["각", "\u{1161}"]);
    }

    #[test]
    fn regional_indicators_pair_up() {
        assert_eq!(clusters("🇩🇪"), vec!["🇩🇪"]);
        assert_eq!(clusters("🇩🇪🇫"), vec!["🇩🇪", "🇫"]);
        assert_eq!(clusters("🇩🇪🇫🇷"), vec!["🇩🇪", "🇫🇷"]);
    }

    #[test]
    fn emoji_zwj_sequences() {
        assert_eq!(clusters("👩‍❤️‍👩"), vec!["👩‍❤️‍👩"]);
        assert_eq!(clusters("👨🏽‍💻"), vec!["👨🏽‍💻"]);
        assert_eq!(clusters("🏳️‍🌈"), vec!["🏳️‍🌈"]);
    }

    #[test]
    fn zwj_before_non_pictograph_does_not_join() {
        assert_eq!(clusters("a\u{200D}b"), vec!["a\u{200D}", "b"]);
        assert_eq!(clusters("😀\u{200D}a"), vec!["😀\u{200D}", "a"]);
    }

    #[test]
    fn prepend_and_spacing_mark() {
        assert_eq!(clusters("\u{0600}1"), vec!["\u{0600}1"]);
        assert_eq!(clusters("कि"), vec!["कि"]);
        assert_eq!(clusters("नमस्ते"), vec!["न", "म", "स्ते"]);
    }

    #[test]
    fn indic_conjuncts() {
        assert_eq!(clusters("क्ष"), vec!["क्ष"]);
        assert_eq!(clusters("क\u{094D}\u{200D}ष"), vec!["क\u{094D}\u{200D}ष"]);
        // A vowel sign ends the conjunct chain.
        assert_eq!(clusters("कु\u{094D}ष"), vec!["कु\u{094D}", "ष"]);
    }

    #[test]
    fn malformed_units_are_isolated() {
        let bytes = &b"a\xFF\xCC\x81b"[..];
        let mut rest = bytes;
        let mut state = GraphemeState::default();
        let mut got = Vec::new();
        while !rest.is_empty() {
            let step = next(rest, state, AmbiguousWidth::Narrow);
            got.push(step.cluster.to_vec());
            rest = step.remainder;
            state = step.state;
        }
        assert_eq!(got, vec![b"a".to_vec(), b"\xFF".to_vec(), b"\xCC\x81".to_vec(), b"b".to_vec()]);
    }

    #[test]
    fn partial_defers_at_chunk_end() {
        let state = GraphemeState::default();
        let first = scan("ab", state, AmbiguousWidth::Narrow, Mode::Partial).map(|s| s.cluster);
        assert_eq!(first, Ok("a"));
        assert!(scan("a", state, AmbiguousWidth::Narrow, Mode::Partial).is_err());
        assert!(scan("a\r", state, AmbiguousWidth::Narrow, Mode::Partial).is_ok());
        // CR may still be followed by LF.
        let cr = scan("\r", state, AmbiguousWidth::Narrow, Mode::Partial);
        assert!(cr.is_err());
        // A control always ends its cluster.
        let tab = scan("\t", state, AmbiguousWidth::Narrow, Mode::Partial);
        assert_eq!(tab.map(|s| s.cluster), Ok("\t"));
    }

    #[test]
    fn state_resumes_across_split() {
        let first = next("👩\u{200D}", GraphemeState::default(), AmbiguousWidth::Narrow);
        assert_eq!(first.cluster, "👩\u{200D}");
        // The continuation joins the pictograph onto the previous cluster.
        let (_, boundary) = first.state.transition(classify(Unit::Char('❤')));
        assert!(!boundary);
    }

    #[test]
    fn bits_round_trip() {
        for bits in 0..(1u32 << GraphemeState::BITS) {
            if let Ok(state) = GraphemeState::from_bits(bits) {
                assert_eq!(state.to_bits(), bits);
            }
        }
        assert!(GraphemeState::from_bits(0xF).is_err());
        assert!(GraphemeState::from_bits(1 << 6).is_err());
        assert_eq!(GraphemeState::from_bits(0), Ok(GraphemeState::default()));
    }
}
