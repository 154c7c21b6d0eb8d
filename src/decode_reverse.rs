//! Reverse decoders: the mirror of [`crate::decode`], producing the code
//! point immediately *before* a given position. Only meaningful for
//! slice-backed sources — see [`crate::cursor::SliceCursor`] — since those
//! are the only sources in this crate capable of genuine backward movement.
//!
//! Every function here takes the full remaining (front..back) window and the
//! current back boundary `p` (`0 < p <= units.len()`), and returns a
//! [`Decoded`] whose `consumed` field is how many units to retreat `p` by.

use crate::decode::{decode_utf32, decode_utf8, Decoded, NextUnit};
use crate::error::ErrorKind;
use crate::predicates::*;

/// A one-shot, bounded re-run of the forward decoder over an already-known
/// span, used by [`decode_utf8_reverse`] once it has located a candidate
/// lead byte.
struct Span<'a, U> { units: &'a [U], pos: usize }

impl<'a, U> crate::decode::private::Sealed for Span<'a, U> {}

impl<'a, U: Copy> NextUnit<U> for Span<'a, U> {
    fn pull(&mut self) -> Option<U> {
        let u = *self.units.get(self.pos)?;
        self.pos += 1;
        Some(u)
    }
    fn unpull(&mut self, _unit: U) { self.pos -= 1; }
}

pub(crate) fn decode_utf8_reverse(units: &[u8], p: usize) -> Decoded {
    debug_assert!(p > 0 && p <= units.len());

    let max_steps = core::cmp::min(4, p);
    let mut found_at = None;
    for i in 1..=max_steps {
        if !is_continuation(units[p - i]) { found_at = Some(i); break; }
    }

    let i = match found_at {
        Some(i) => i,
        // Stepped the maximum (or ran out of buffer) and every byte examined
        // was still a continuation byte.
        None => return Decoded::reverse_err(ErrorKind::UnexpectedContinuation, 1),
    };

    let lead = units[p - i];
    let stepped_over = i - 1; // continuation bytes found strictly between `lead` and `p`

    if is_ascii(lead) || is_lead(lead) {
        let expected = expected_len(lead) as usize;
        if i > expected {
            return Decoded::reverse_err(ErrorKind::UnexpectedContinuation, 1);
        }

        let mut span = Span { units: &units[p - i..p], pos: 0 };
        let d = decode_utf8(&mut span).expect("span starts with an ascii or lead byte");

        match d.outcome {
            Ok(()) | Err(ErrorKind::Truncated) => Decoded { scalar: d.scalar, consumed: i as u8, outcome: d.outcome },
            Err(kind) => {
                if stepped_over == 1 { Decoded::reverse_err(kind, 1) }
                else { Decoded::reverse_err(ErrorKind::UnexpectedContinuation, 1) }
            }
        }
    } else {
        // `lead` is 0xC0, 0xC1, or in 0xF5..=0xFF: can never lead or continue a sequence.
        if stepped_over == 0 { Decoded::reverse_err(ErrorKind::InvalidLeading, 1) }
        else { Decoded::reverse_err(ErrorKind::UnexpectedContinuation, 1) }
    }
}

pub(crate) fn decode_utf16_reverse(units: &[u16], p: usize) -> Decoded {
    debug_assert!(p > 0 && p <= units.len());

    let u = units[p - 1];

    if is_high_surrogate(u) {
        return Decoded::reverse_err(ErrorKind::UnpairedHighSurrogate, 1);
    }

    if is_low_surrogate(u) {
        if p >= 2 && is_high_surrogate(units[p - 2]) {
            let hi = units[p - 2];
            let cp = 0x10000u32 + (((hi as u32) - 0xD800) << 10) + ((u as u32) - 0xDC00);
            let scalar = char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER);
            return Decoded { scalar, consumed: 2, outcome: Ok(()) };
        }
        return Decoded::reverse_err(ErrorKind::UnpairedLowSurrogate, 1);
    }

    Decoded { scalar: char::from_u32(u as u32).unwrap_or(char::REPLACEMENT_CHARACTER), consumed: 1, outcome: Ok(()) }
}

pub(crate) fn decode_utf32_reverse(units: &[u32], p: usize) -> Decoded {
    debug_assert!(p > 0 && p <= units.len());
    let mut span = Span { units: &units[p - 1..p], pos: 0 };
    decode_utf32(&mut span).expect("span of length 1")
}

pub(crate) fn decode_char_reverse(units: &[char], p: usize) -> Decoded {
    debug_assert!(p > 0 && p <= units.len());
    Decoded { scalar: units[p - 1], consumed: 1, outcome: Ok(()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_reverse() {
        let units = b"hiA";
        let d = decode_utf8_reverse(units, units.len());
        assert_eq!(d.scalar, 'A');
        assert_eq!(d.consumed, 1);
        assert_eq!(d.outcome, Ok(()));
    }

    #[test]
    fn two_byte_reverse() {
        let units = [b'x', 0xC2, 0xA9];
        let d = decode_utf8_reverse(&units, units.len());
        assert_eq!(d.scalar, '\u{A9}');
        assert_eq!(d.consumed, 2);
    }

    #[test]
    fn four_byte_reverse() {
        let units = [0xF0, 0x9F, 0x92, 0xA9];
        let d = decode_utf8_reverse(&units, units.len());
        assert_eq!(d.scalar, '\u{1F4A9}');
        assert_eq!(d.consumed, 4);
    }

    #[test]
    fn truncated_lead_only_reverse() {
        let units = [0xC2u8];
        let d = decode_utf8_reverse(&units, units.len());
        assert_eq!(d.outcome, Err(ErrorKind::Truncated));
        assert_eq!(d.consumed, 1);
    }

    #[test]
    fn lone_continuation_reverse() {
        let units = [0x80u8];
        let d = decode_utf8_reverse(&units, units.len());
        assert_eq!(d.outcome, Err(ErrorKind::UnexpectedContinuation));
        assert_eq!(d.consumed, 1);
    }

    #[test]
    fn invalid_leading_reverse() {
        let units = [0xC0u8];
        let d = decode_utf8_reverse(&units, units.len());
        assert_eq!(d.outcome, Err(ErrorKind::InvalidLeading));
        assert_eq!(d.consumed, 1);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn forward_then_reverse_is_identity_on_valid_data() {
        use crate::decode::decode_utf8;
        let units: &[u8] = "héllo\u{1F574}".as_bytes();
        let mut pos_fwd = 0usize;
        let mut boundaries = alloc::vec![0usize];
        loop {
            let mut span = Span { units: &units[pos_fwd..], pos: 0 };
            match decode_utf8(&mut span) {
                Some(d) => { pos_fwd += d.consumed as usize; boundaries.push(pos_fwd); }
                None => break,
            }
        }
        assert_eq!(pos_fwd, units.len());
        // Walking backwards from the end must retrace the same boundaries.
        let mut pos_rev = units.len();
        let mut rev_boundaries = alloc::vec![pos_rev];
        while pos_rev > 0 {
            let d = decode_utf8_reverse(units, pos_rev);
            assert_eq!(d.outcome, Ok(()));
            pos_rev -= d.consumed as usize;
            rev_boundaries.push(pos_rev);
        }
        rev_boundaries.reverse();
        assert_eq!(boundaries, rev_boundaries);
    }

    #[test]
    fn utf16_surrogate_pair_reverse() {
        let units = [0xD834u16, 0xDF60];
        let d = decode_utf16_reverse(&units, units.len());
        assert_eq!(d.scalar, '\u{1D360}');
        assert_eq!(d.consumed, 2);
    }

    #[test]
    fn utf16_unpaired_low_reverse() {
        let units = [0xDC00u16];
        let d = decode_utf16_reverse(&units, units.len());
        assert_eq!(d.outcome, Err(ErrorKind::UnpairedLowSurrogate));
        assert_eq!(d.consumed, 1);
    }
}
