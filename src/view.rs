//! The six view factories: [`to_utf8`], [`to_utf16`], [`to_utf32`] and their
//! `_or_error` counterparts, built on the shared [`to_utf`]/[`to_utf_or_error`]
//! dispatch and the [`IntoSource`] trait that performs the bounded-array
//! trailing-NUL stripping of §4.6.

use crate::cursor::{InChar, InUtf16, InUtf32, InUtf8, IterCursor, SliceCursor, SourceEncoding, Utf, UtfOrError};
use crate::decode::NextUnit;
use crate::encode::{TargetEncoding, Utf16, Utf32, Utf8};
use crate::unit::CodeUnit;

/// Converts a source into the (encoding, cursor) pair [`to_utf`] needs.
///
/// Implemented for borrowed slices and bounded (fixed-size) arrays of each
/// of the four code-unit shapes this crate understands (`u8`, `u16`, `u32`,
/// `char`), and — via the `From*Iter` wrapper types — for any single-pass
/// `Iterator` over one of those. A bounded array whose last element is the
/// zero unit has that trailing element stripped before adapting, so that
/// string-literal-shaped arrays (which carry a trailing NUL) round-trip to
/// themselves rather than emitting a trailing `U+0000`.
pub trait IntoSource {
    /// The code-unit width of the source.
    #[doc(hidden)] type Unit : CodeUnit;
    /// Which of the three input encodings this source is interpreted as.
    #[doc(hidden)] type Encoding : SourceEncoding<Unit = Self::Unit>;
    /// The concrete cursor kind backing the source: [`SliceCursor`] for
    /// slices/arrays (bidirectional), [`IterCursor`] for wrapped iterators
    /// (forward-only).
    #[doc(hidden)] type Cursor : NextUnit<Self::Unit>;

    #[doc(hidden)] fn into_source(self) -> Self::Cursor;
}

fn strip_trailing_nul<U: CodeUnit>(units: &[U]) -> &[U] {
    match units.split_last() {
        Some((last, rest)) if *last == U::NUL => rest,
        _ => units,
    }
}

macro_rules! slice_into_source {
    ($unit:ty, $enc:ty) => {
        impl<'a> IntoSource for &'a [$unit] {
            type Unit = $unit;
            type Encoding = $enc;
            type Cursor = SliceCursor<'a, $unit>;
            fn into_source(self) -> Self::Cursor { SliceCursor::new(self) }
        }

        impl<'a, const N: usize> IntoSource for &'a [$unit; N] {
            type Unit = $unit;
            type Encoding = $enc;
            type Cursor = SliceCursor<'a, $unit>;
            fn into_source(self) -> Self::Cursor {
                let s: &'a [$unit] = self;
                SliceCursor::new(strip_trailing_nul(s))
            }
        }
    };
}

slice_into_source!(u8, InUtf8);
slice_into_source!(u16, InUtf16);
slice_into_source!(u32, InUtf32);
slice_into_source!(char, InChar);

/// Wraps an `Iterator<Item = u8>` as a single-pass UTF-8 source.
///
/// A standalone wrapper type rather than a blanket `impl<I: Iterator<Item =
/// u8>> IntoSource for I` — Rust's coherence checker cannot see that
/// `Iterator<Item = u8>` and `Iterator<Item = u16>` are mutually exclusive
/// bounds on the same generic parameter, so four overlapping blanket impls
/// would conflict. Four marker wrappers sidestep that entirely.
pub struct FromUtf8Iter<I>(pub I);
/// As [`FromUtf8Iter`], for `Iterator<Item = u16>`.
pub struct FromUtf16Iter<I>(pub I);
/// As [`FromUtf8Iter`], for `Iterator<Item = u32>`.
pub struct FromUtf32Iter<I>(pub I);
/// As [`FromUtf8Iter`], for `Iterator<Item = char>`.
pub struct FromCharIter<I>(pub I);

macro_rules! iter_into_source {
    ($wrapper:ident, $unit:ty, $enc:ty) => {
        impl<I: Iterator<Item = $unit>> IntoSource for $wrapper<I> {
            type Unit = $unit;
            type Encoding = $enc;
            type Cursor = IterCursor<I>;
            fn into_source(self) -> Self::Cursor { IterCursor::new(self.0) }
        }
    };
}

iter_into_source!(FromUtf8Iter, u8, InUtf8);
iter_into_source!(FromUtf16Iter, u16, InUtf16);
iter_into_source!(FromUtf32Iter, u32, InUtf32);
iter_into_source!(FromCharIter, char, InChar);

/// Transcode `source` to the target encoding `T`, substituting
/// [`char::REPLACEMENT_CHARACTER`] for any ill-formed input.
///
/// This is the shared dispatch [`to_utf8`], [`to_utf16`], and [`to_utf32`]
/// are defined in terms of; most callers want one of those three directly.
pub fn to_utf<T: TargetEncoding, S: IntoSource>(source: S) -> Utf<S::Encoding, T, S::Cursor> {
    Utf::new(source.into_source())
}

/// As [`to_utf`], exposing the specific [`crate::ErrorKind`] of each
/// ill-formed code point instead of silently repairing it.
pub fn to_utf_or_error<T: TargetEncoding, S: IntoSource>(source: S) -> UtfOrError<S::Encoding, T, S::Cursor> {
    UtfOrError::new(source.into_source())
}

/// Lazily transcode `source` to UTF-8, substituting `U+FFFD` for ill-formed
/// input.
pub fn to_utf8<S: IntoSource>(source: S) -> Utf<S::Encoding, Utf8, S::Cursor> { to_utf::<Utf8, S>(source) }

/// Lazily transcode `source` to UTF-16, substituting `U+FFFD` for ill-formed
/// input.
pub fn to_utf16<S: IntoSource>(source: S) -> Utf<S::Encoding, Utf16, S::Cursor> { to_utf::<Utf16, S>(source) }

/// Lazily transcode `source` to UTF-32 (`char`), substituting `U+FFFD` for
/// ill-formed input.
pub fn to_utf32<S: IntoSource>(source: S) -> Utf<S::Encoding, Utf32, S::Cursor> { to_utf::<Utf32, S>(source) }

/// As [`to_utf8`], in error-reporting mode.
pub fn to_utf8_or_error<S: IntoSource>(source: S) -> UtfOrError<S::Encoding, Utf8, S::Cursor> { to_utf_or_error::<Utf8, S>(source) }

/// As [`to_utf16`], in error-reporting mode.
pub fn to_utf16_or_error<S: IntoSource>(source: S) -> UtfOrError<S::Encoding, Utf16, S::Cursor> { to_utf_or_error::<Utf16, S>(source) }

/// As [`to_utf32`], in error-reporting mode.
pub fn to_utf32_or_error<S: IntoSource>(source: S) -> UtfOrError<S::Encoding, Utf32, S::Cursor> { to_utf_or_error::<Utf32, S>(source) }

/// Build the `&[U]` slice up to (but not including) the first zero code
/// unit reachable from `ptr` — the Rust analog of spec §6's "pointer + null
/// sentinel" adaptor, grounded on `abistr::pointers::CStrPtr::to_units`'s
/// strlen-then-slice pattern. The resulting slice can be fed directly into
/// [`to_utf8`]/[`to_utf16`]/[`to_utf32`] and their `_or_error` counterparts.
///
/// ### Safety
/// * `ptr` must be non-null.
/// * `ptr` must point to a contiguous run of valid `U` values that reaches a
///   `U::NUL` value within the lifetime `'a`.
pub unsafe fn null_terminated<'a, U: CodeUnit>(ptr: *const U) -> &'a [U] {
    let len = unsafe { crate::unit::strlen(ptr) };
    unsafe { core::slice::from_raw_parts(ptr, len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "alloc")] use alloc::vec::Vec;
    #[cfg(feature = "alloc")] use alloc::string::String;

    #[test]
    #[cfg(feature = "alloc")]
    fn empty_source_yields_empty_view() {
        let empty: &[u8] = &[];
        let out: Vec<u8> = to_utf8(empty).collect();
        assert!(out.is_empty());
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn bounded_array_trailing_nul_is_stripped() {
        let lit: &[u8; 6] = b"hello\0";
        let out: String = to_utf8(lit).map(|b| b as char).collect();
        assert_eq!(out, "hello");
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn bounded_array_without_trailing_nul_is_untouched() {
        let lit: &[u8; 5] = b"hello";
        let out: String = to_utf8(lit).map(|b| b as char).collect();
        assert_eq!(out, "hello");
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn utf16_to_utf8_surrogate_pairs() {
        let units: &[u16] = &[0xD834, 0xDF60, 0xD834, 0xDF61];
        let out: Vec<u8> = to_utf8(units).collect();
        assert_eq!(out, alloc::vec![0xF0, 0x9D, 0x8D, 0xA0, 0xF0, 0x9D, 0x8D, 0xA1]);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn iterator_source_forward_only() {
        let v = alloc::vec![b'h', b'i'];
        let out: Vec<u8> = to_utf8(FromUtf8Iter(v.into_iter())).collect();
        assert_eq!(out, b"hi");
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn round_trip_across_the_triangle() {
        let original: &str = "héllo, wörld \u{1F574} \u{10FFFF}";
        let utf8: &[u8] = original.as_bytes();
        let utf16: Vec<u16> = to_utf16(utf8).collect();
        let utf32: Vec<char> = to_utf32(utf16.as_slice()).collect();
        let back_to_utf8: Vec<u8> = to_utf8(utf32.as_slice()).collect();
        assert_eq!(back_to_utf8, utf8);

        // And the other direction: UTF-8 -> UTF-32 -> UTF-16 -> UTF-8.
        let via_utf32_first: Vec<char> = to_utf32(utf8).collect();
        let via_utf16_second: Vec<u16> = to_utf16(via_utf32_first.as_slice()).collect();
        let round_tripped: Vec<u8> = to_utf8(via_utf16_second.as_slice()).collect();
        assert_eq!(round_tripped, utf8);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn or_error_mode_reports_kind_once_per_codepoint() {
        let bad: &[u8] = &[0xC2]; // truncated
        let out: Vec<_> = to_utf8_or_error(bad).collect();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], Err(crate::ErrorKind::Truncated));
    }

    #[test]
    fn null_terminated_matches_bounded_prefix() {
        let buf: &[u8; 6] = b"hello\0";
        let s = unsafe { null_terminated(buf.as_ptr()) };
        assert_eq!(s, b"hello");
    }

    // End-to-end scenarios, one per seed case in `SPEC_FULL.md` §8.

    #[test]
    #[cfg(feature = "alloc")]
    fn scenario_eye_dropper_then_literal_replacement_char() {
        // A valid 4-byte code point followed by bytes that happen to spell
        // out a *well-formed* encoding of U+FFFD — not an error, just data.
        let bytes: &[u8] = &[0xF0, 0x9F, 0x95, 0xB4, 0xEF, 0xBF, 0xBD];
        let out: Vec<char> = to_utf32(bytes).collect();
        assert_eq!(out, alloc::vec!['\u{1F574}', '\u{FFFD}']);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn scenario_truncated_two_byte_lead() {
        let bytes: &[u8] = &[0xC2];
        let silent: Vec<char> = to_utf32(bytes).collect();
        assert_eq!(silent, alloc::vec!['\u{FFFD}']);

        let reported: Vec<_> = to_utf32_or_error(bytes).collect();
        assert_eq!(reported, alloc::vec![Err(crate::ErrorKind::Truncated)]);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn scenario_unpaired_high_surrogate() {
        let units: &[u16] = &[0xD800];
        let silent: Vec<char> = to_utf32(units).collect();
        assert_eq!(silent, alloc::vec!['\u{FFFD}']);

        let reported: Vec<_> = to_utf32_or_error(units).collect();
        assert_eq!(reported, alloc::vec![Err(crate::ErrorKind::UnpairedHighSurrogate)]);
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn scenario_utf32_encoded_surrogate_and_out_of_range() {
        let surrogate: &[u32] = &[0x0000_D800];
        assert_eq!(to_utf32(surrogate).collect::<Vec<char>>(), alloc::vec!['\u{FFFD}']);
        assert_eq!(
            to_utf32_or_error(surrogate).collect::<Vec<_>>(),
            alloc::vec![Err(crate::ErrorKind::EncodedSurrogate)],
        );

        let too_big: &[u32] = &[0x0011_0000];
        assert_eq!(to_utf32(too_big).collect::<Vec<char>>(), alloc::vec!['\u{FFFD}']);
        assert_eq!(
            to_utf32_or_error(too_big).collect::<Vec<_>>(),
            alloc::vec![Err(crate::ErrorKind::OutOfRange)],
        );
    }

    #[test]
    #[cfg(feature = "alloc")]
    fn scenario_unicode_table_3_8_fixture() {
        // Unicode 15.0 Table 3-8 "Irregular UTF-8 Sequences" combined into
        // one run, terminated by an unambiguous ASCII byte.
        let bytes: &[u8] = &[0xC0, 0xAF, 0xE0, 0x80, 0xBF, 0xF0, 0x81, 0x82, b'A'];
        let reported: Vec<_> = to_utf8_or_error(bytes).collect();
        use crate::ErrorKind::*;
        assert_eq!(
            reported,
            alloc::vec![
                Err(InvalidLeading),
                Err(UnexpectedContinuation),
                Err(Overlong),
                Err(UnexpectedContinuation),
                Err(UnexpectedContinuation),
                Err(Overlong),
                Err(UnexpectedContinuation),
                Err(UnexpectedContinuation),
                Ok(b'A'),
            ],
        );
    }
}
