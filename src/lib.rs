//! # Lazy, pull-based Unicode transcoding
//!
//! This crate views a UTF-8, UTF-16, or UTF-32 buffer as an [`Iterator`] of a
//! *different* encoding's code units, decoding and re-encoding one code point
//! at a time as the iterator is driven. No intermediate [`String`]/`Vec` is
//! allocated; nothing is decoded before it's asked for.
//!
//! ```
//! # use utf_view::*;
//! let utf16: &[u16] = &[0x0048, 0x0069, 0xD83D, 0xDE00]; // "Hi😀"
//! let utf8: Vec<u8> = to_utf8(utf16).collect();
//! assert_eq!(utf8, "Hi😀".as_bytes());
//! ```
//!
//! | Source        | View constructor                                    | Yields                          |
//! | ------------- | ---------------------------------------------------- | -------------------------------- |
//! | `&[u8]`       | [`to_utf8`] / [`to_utf16`] / [`to_utf32`]             | `u8` / `u16` / [`char`]           |
//! | `&[u16]`      | [`to_utf8`] / [`to_utf16`] / [`to_utf32`]             | `u8` / `u16` / [`char`]           |
//! | `&[u32]`      | [`to_utf8`] / [`to_utf16`] / [`to_utf32`]             | `u8` / `u16` / [`char`]           |
//! | `&[char]`     | [`to_utf8`] / [`to_utf16`] / [`to_utf32`]             | `u8` / `u16` / [`char`]           |
//!
//! Every view above substitutes [`char::REPLACEMENT_CHARACTER`] for
//! ill-formed input, matching how [`String::from_utf8_lossy`] behaves. The
//! [`to_utf8_or_error`], [`to_utf16_or_error`], and [`to_utf32_or_error`]
//! counterparts instead yield `Result<Unit, ErrorKind>`, reporting exactly
//! which [`ErrorKind`] was encountered (and collapsing what would otherwise
//! be several replacement-character code units into a single `Err`).
//!
//! Sources backed by a slice ([`&[u8]`], [`&[u16]`], [`&[u32]`], [`&[char]`])
//! produce a [`DoubleEndedIterator`], so the view can also be driven from the
//! back — useful for e.g. finding a file extension without decoding the
//! whole path. Sources backed by an arbitrary [`Iterator`] (see
//! [`view::FromUtf8Iter`] and its siblings) are forward-only.
//!
//! # Error recovery
//!
//! Decoding follows the Unicode "maximal subpart" rule: an ill-formed
//! sequence is replaced by the *longest* initial subsequence that could
//! still be the start of a valid sequence, and decoding resumes immediately
//! after it. This matches the behavior of `String::from_utf8_lossy` and of
//! ICU's default error handler.
//!
//! # Crate features
//!
//! * `std` (default) — pulls in [`std`] and its `Error` trait impl for
//!   [`ErrorKind`]; implies `alloc`.
//! * `alloc` — pulls in [`alloc`] for doc examples and test helpers; this
//!   crate's core decoding/encoding logic itself never allocates.
//! * `widestring` — adds [`IntoSource`](view::IntoSource) impls for
//!   [`widestring::U16Str`]/[`widestring::U16CStr`]/[`widestring::U32Str`]/
//!   [`widestring::U32CStr`], see [`widestring_support`].
//!
//! Disabling all default features leaves a `#![no_std]`, non-allocating
//! core: decoding, encoding, and the cursor/view machinery all work directly
//! over borrowed slices without a global allocator.

#![no_std]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(feature = "alloc")] extern crate alloc;
#[cfg(feature = "std")] extern crate std;

#[cfg(doc)] #[cfg(feature = "alloc")] use alloc::string::String;

mod predicates;
mod decode;
mod decode_reverse;
mod encode;
mod cursor;
mod error;
mod fmt;
mod unit;
pub mod view;
#[cfg(feature = "widestring")] pub mod widestring_support;

pub use cursor::{IterCursor, SliceCursor, SourceEncoding, SourceEncodingRev, Utf, UtfOrError};
#[doc(hidden)] pub use cursor::{InChar, InUtf16, InUtf32, InUtf8};
#[doc(hidden)] pub use decode::NextUnit;
pub use encode::{TargetEncoding, Utf16, Utf32, Utf8};
pub use error::ErrorKind;
pub use unit::CodeUnit;
pub use view::{
    to_utf, to_utf16, to_utf16_or_error, to_utf32, to_utf32_or_error, to_utf8, to_utf8_or_error,
    to_utf_or_error, IntoSource,
};
#[doc(inline)] pub use view::{null_terminated, FromCharIter, FromUtf16Iter, FromUtf32Iter, FromUtf8Iter};
