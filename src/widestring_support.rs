//! [`IntoSource`] impls bridging the `widestring` crate's owned/borrowed wide
//! string types into this crate's views, so callers already holding a
//! [`widestring::U16Str`]/[`widestring::U16CStr`] (or the 32-bit analogs)
//! don't have to peel off `.as_slice()` themselves first.
//!
//! Grounded on `abistr::pointers`'s `to_u16str`/`to_u16cstr` conversions,
//! which establish that this crate's "wide string" notion and
//! `widestring`'s are the same shape: a `&[u16]`/`&[u32]` plus, for the
//! `CStr` variants, a trailing NUL already known to be present.

use crate::cursor::{InUtf16, InUtf32, SliceCursor};
use crate::view::IntoSource;
use widestring::{U16CStr, U16Str, U32CStr, U32Str};

impl<'a> IntoSource for &'a U16Str {
    type Unit = u16;
    type Encoding = InUtf16;
    type Cursor = SliceCursor<'a, u16>;
    fn into_source(self) -> Self::Cursor { SliceCursor::new(self.as_slice()) }
}

impl<'a> IntoSource for &'a U16CStr {
    type Unit = u16;
    type Encoding = InUtf16;
    type Cursor = SliceCursor<'a, u16>;
    fn into_source(self) -> Self::Cursor { SliceCursor::new(self.as_slice()) }
}

impl<'a> IntoSource for &'a U32Str {
    type Unit = u32;
    type Encoding = InUtf32;
    type Cursor = SliceCursor<'a, u32>;
    fn into_source(self) -> Self::Cursor { SliceCursor::new(self.as_slice()) }
}

impl<'a> IntoSource for &'a U32CStr {
    type Unit = u32;
    type Encoding = InUtf32;
    type Cursor = SliceCursor<'a, u32>;
    fn into_source(self) -> Self::Cursor { SliceCursor::new(self.as_slice()) }
}
