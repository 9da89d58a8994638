//! Input abstraction shared by every engine.
//!
//! Engines never assume a particular encoding: they walk an [`Input`] unit by
//! unit and only ever split it at offsets returned by [`Input::decode_at`].
//! Segments and remainders are therefore the same type as the caller's input,
//! and concatenating them reproduces it exactly.
//!
//! Malformed data (invalid UTF-8, unpaired surrogates) decodes to
//! [`Unit::Malformed`]; engines isolate such units instead of failing. A
//! multi-unit sequence cut off at the end of the input is reported as
//! [`Unit::Truncated`] so the partial (chunked) entry points can ask for more
//! data before deciding anything.

/// One decoded step of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Char(char),
    Malformed,
    /// Valid prefix of a sequence that runs past the end of the input.
    Truncated,
}

/// A decoded unit and the number of code units it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub unit: Unit,
    pub len: usize,
}

impl Decoded {
    fn char(c: char, len: usize) -> Self {
        Self {
            unit: Unit::Char(c),
            len,
        }
    }

    fn malformed(len: usize) -> Self {
        Self {
            unit: Unit::Malformed,
            len,
        }
    }
}

/// Text the engines can segment.
pub trait Input: Copy {
    /// Length in code units (bytes, UTF-16 units or chars).
    fn unit_len(self) -> usize;

    /// Decode the unit starting at code unit `at` (`at < unit_len()`, and `at`
    /// is an offset previously produced by decoding from 0).
    fn decode_at(self, at: usize) -> Decoded;

    /// Split at a code unit offset produced by decoding.
    fn split_at(self, at: usize) -> (Self, Self);

    #[inline]
    fn is_empty(self) -> bool {
        self.unit_len() == 0
    }
}

impl Input for &str {
    #[inline]
    fn unit_len(self) -> usize {
        self.len()
    }

    #[inline]
    fn decode_at(self, at: usize) -> Decoded {
        match self.get(at..).and_then(|rest| rest.chars().next()) {
            Some(c) => Decoded::char(c, c.len_utf8()),
            None => Decoded::malformed(1),
        }
    }

    #[inline]
    fn split_at(self, at: usize) -> (Self, Self) {
        str::split_at(self, at)
    }
}

impl Input for &[u8] {
    #[inline]
    fn unit_len(self) -> usize {
        self.len()
    }

    fn decode_at(self, at: usize) -> Decoded {
        let end = self.len().min(at + 4);
        let window = &self[at..end];
        let valid = match std::str::from_utf8(window) {
            Ok(s) => s,
            Err(e) if e.valid_up_to() > 0 => match std::str::from_utf8(&window[..e.valid_up_to()]) {
                Ok(s) => s,
                Err(_) => return Decoded::malformed(1),
            },
            Err(e) => {
                return match e.error_len() {
                    Some(len) => Decoded::malformed(len),
                    // The window only ends early at the end of the input.
                    None => Decoded {
                        unit: Unit::Truncated,
                        len: window.len(),
                    },
                };
            }
        };
        match valid.chars().next() {
            Some(c) => Decoded::char(c, c.len_utf8()),
            None => Decoded::malformed(1),
        }
    }

    #[inline]
    fn split_at(self, at: usize) -> (Self, Self) {
        <[u8]>::split_at(self, at)
    }
}

impl Input for &[u16] {
    #[inline]
    fn unit_len(self) -> usize {
        self.len()
    }

    fn decode_at(self, at: usize) -> Decoded {
        let rest = &self[at..];
        match char::decode_utf16(rest.iter().copied()).next() {
            Some(Ok(c)) => Decoded::char(c, c.len_utf16()),
            Some(Err(e))
                if rest.len() == 1 && (0xD800..=0xDBFF).contains(&e.unpaired_surrogate()) =>
            {
                Decoded {
                    unit: Unit::Truncated,
                    len: 1,
                }
            }
            _ => Decoded::malformed(1),
        }
    }

    #[inline]
    fn split_at(self, at: usize) -> (Self, Self) {
        <[u16]>::split_at(self, at)
    }
}

impl Input for &[char] {
    #[inline]
    fn unit_len(self) -> usize {
        self.len()
    }

    #[inline]
    fn decode_at(self, at: usize) -> Decoded {
        Decoded::char(self[at], 1)
    }

    #[inline]
    fn split_at(self, at: usize) -> (Self, Self) {
        <[char]>::split_at(self, at)
    }
}

/// Whether the end of the input is the end of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// End of input is end of text.
    Final,
    /// More text may follow; undecidable boundaries report [`NeedMore`].
    Partial,
}

/// A decision needed code units past the end of a partial chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NeedMore;

/// Decode at `at`, resolving truncation according to `mode`.
#[inline]
pub(crate) fn unit_at<I: Input>(input: I, at: usize, mode: Mode) -> Result<Decoded, NeedMore> {
    let decoded = input.decode_at(at);
    match (decoded.unit, mode) {
        (Unit::Truncated, Mode::Partial) => Err(NeedMore),
        (Unit::Truncated, Mode::Final) => Ok(Decoded::malformed(decoded.len)),
        _ => Ok(decoded),
    }
}

/// Walk forward from `at`, skipping units for which `skip` returns true, and
/// return the first remaining unit. `Ok(None)` means the text ended.
pub(crate) fn first_unskipped<I: Input>(
    input: I,
    mut at: usize,
    mode: Mode,
    mut skip: impl FnMut(Unit) -> bool,
) -> Result<Option<Unit>, NeedMore> {
    while at < input.unit_len() {
        let decoded = unit_at(input, at, mode)?;
        if !skip(decoded.unit) {
            return Ok(Some(decoded.unit));
        }
        at += decoded.len;
    }
    match mode {
        Mode::Final => Ok(None),
        Mode::Partial => Err(NeedMore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units<I: Input>(input: I) -> Vec<Decoded> {
        let mut out = Vec::new();
        let mut at = 0;
        while at < input.unit_len() {
            let d = input.decode_at(at);
            at += d.len;
            out.push(d);
        }
        out
    }

    #[test]
    fn str_decodes_chars() {
        let got = units("aé😀");
        assert_eq!(
            got,
            vec![
                Decoded::char('a', 1),
                Decoded::char('é', 2),
                Decoded::char('😀', 4)
            ]
        );
    }

    #[test]
    fn bytes_isolate_invalid_sequences() {
        let got = units(&b"a\xFFb\xE2\x82"[..]);
        assert_eq!(got[0], Decoded::char('a', 1));
        assert_eq!(got[1], Decoded::malformed(1));
        assert_eq!(got[2], Decoded::char('b', 1));
        assert_eq!(
            got[3],
            Decoded {
                unit: Unit::Truncated,
                len: 2
            }
        );
    }

    #[test]
    fn bytes_invalid_continuation_is_malformed() {
        // E2 82 followed by an ASCII byte is not a truncated tail.
        let got = units(&b"\xE2\x82a"[..]);
        assert_eq!(got[0], Decoded::malformed(2));
        assert_eq!(got[1], Decoded::char('a', 1));
    }

    #[test]
    fn utf16_pairs_and_lone_surrogates() {
        let pair: Vec<u16> = "😀".encode_utf16().collect();
        assert_eq!(units(&pair[..]), vec![Decoded::char('😀', 2)]);

        let lone = [0xDC00u16, 0x0061];
        assert_eq!(units(&lone[..]), vec![Decoded::malformed(1), Decoded::char('a', 1)]);

        let tail = [0x0061u16, 0xD83D];
        assert_eq!(units(&tail[..])[1].unit, Unit::Truncated);
    }

    #[test]
    fn truncation_depends_on_mode() {
        let bytes = &b"\xF0\x9F"[..];
        assert_eq!(unit_at(bytes, 0, Mode::Partial), Err(NeedMore));
        assert_eq!(unit_at(bytes, 0, Mode::Final), Ok(Decoded::malformed(2)));
    }

    #[test]
    fn lookahead_skips_and_reports_end() {
        let skip_space = |u: Unit| u == Unit::Char(' ');
        assert_eq!(first_unskipped("  x", 0, Mode::Final, skip_space), Ok(Some(Unit::Char('x'))));
        assert_eq!(first_unskipped("  ", 0, Mode::Final, skip_space), Ok(None));
        assert_eq!(first_unskipped("  ", 0, Mode::Partial, skip_space), Err(NeedMore));
    }
}
