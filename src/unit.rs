//! The sealed [`CodeUnit`] trait describing the three Unicode code-unit
//! widths (plus [`char`], for already-validated UTF-32 input).

use core::fmt::{self, Debug, Formatter};



/// A code unit of one of the three Unicode encoding forms: [`u8`] (UTF-8),
/// [`u16`] (UTF-16), or [`u32`]/[`char`] (UTF-32).
pub trait CodeUnit : private::Sealed + Copy + PartialEq + Debug + 'static {
    /// The zero unit for this type, used by the null-terminated source adaptor.
    const NUL : Self;

    /// Debug-format a run of these units, escaping control and non-ASCII values.
    fn debug_fmt(units: &[Self], fmt: &mut Formatter) -> fmt::Result;
}

impl CodeUnit for u8 {
    const NUL : Self = 0;
    fn debug_fmt(units: &[u8], fmt: &mut Formatter) -> fmt::Result { crate::fmt::u8_units(units, fmt) }
}

impl CodeUnit for u16 {
    const NUL : Self = 0;
    fn debug_fmt(units: &[u16], fmt: &mut Formatter) -> fmt::Result { crate::fmt::u16_units(units, fmt) }
}

impl CodeUnit for u32 {
    const NUL : Self = 0;
    fn debug_fmt(units: &[u32], fmt: &mut Formatter) -> fmt::Result { crate::fmt::u32_units(units, fmt) }
}

impl CodeUnit for char {
    const NUL : Self = '\0';
    fn debug_fmt(units: &[char], fmt: &mut Formatter) -> fmt::Result { crate::fmt::char_units(units, fmt) }
}

mod private {
    pub trait Sealed {}
    impl Sealed for u8   {}
    impl Sealed for u16  {}
    impl Sealed for u32  {}
    impl Sealed for char {}
}

/// Count code units up to (not including) the first `U::NUL`.
///
/// ### Safety
/// `ptr` must be non-null and point to a contiguous run of valid `U` values
/// that eventually reaches a `U::NUL` value.
pub(crate) unsafe fn strlen<U: CodeUnit>(mut ptr: *const U) -> usize {
    let mut n = 0;
    loop {
        if unsafe { *ptr } == U::NUL { return n; }
        n += 1;
        ptr = unsafe { ptr.add(1) };
    }
}
