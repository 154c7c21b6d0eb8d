#[cfg(feature = "std")] use std::error::Error;

use core::fmt::{self, Display, Formatter};



/// The specific way a decode attempt failed, identifying the exact
/// ill-formedness class per the Unicode standard's classification of
/// malformed sequences.
///
/// Decoding never stops at an [`ErrorKind`]: the cursor substitutes
/// [`char::REPLACEMENT_CHARACTER`] and keeps going, recording the kind here
/// so that error-reporting views ([`crate::to_utf8_or_error`] and friends)
/// can expose it without aborting iteration.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A lead unit announced more code units than were available before the
    /// end of input.
    Truncated,

    /// A UTF-16 high surrogate was not followed by a low surrogate.
    UnpairedHighSurrogate,

    /// A UTF-16 low surrogate was not preceded by a high surrogate.
    UnpairedLowSurrogate,

    /// A UTF-8 continuation byte appeared where a lead byte was expected.
    UnexpectedContinuation,

    /// A UTF-8 sequence used more bytes than necessary to encode its scalar
    /// value.
    Overlong,

    /// A surrogate value was encoded in UTF-8, or present as a bare UTF-32
    /// code unit.
    EncodedSurrogate,

    /// A scalar value exceeded `U+10FFFF`.
    OutOfRange,

    /// A byte can never begin a UTF-8 sequence and is not a continuation
    /// byte either (`0xC0`, `0xC1`, or `0xF5..=0xFF`).
    InvalidLeading,
}

impl ErrorKind {
    /// A short, stable, one-line description of this error kind.
    pub const fn message(self) -> &'static str {
        match self {
            ErrorKind::Truncated              => "truncated sequence at end of input",
            ErrorKind::UnpairedHighSurrogate  => "unpaired UTF-16 high surrogate",
            ErrorKind::UnpairedLowSurrogate   => "unpaired UTF-16 low surrogate",
            ErrorKind::UnexpectedContinuation => "unexpected UTF-8 continuation byte",
            ErrorKind::Overlong               => "overlong UTF-8 sequence",
            ErrorKind::EncodedSurrogate       => "surrogate value encoded outside UTF-16",
            ErrorKind::OutOfRange             => "scalar value exceeds U+10FFFF",
            ErrorKind::InvalidLeading         => "byte cannot lead or continue a UTF-8 sequence",
        }
    }
}

impl core::fmt::Debug for ErrorKind {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let name = match self {
            ErrorKind::Truncated              => "Truncated",
            ErrorKind::UnpairedHighSurrogate  => "UnpairedHighSurrogate",
            ErrorKind::UnpairedLowSurrogate   => "UnpairedLowSurrogate",
            ErrorKind::UnexpectedContinuation => "UnexpectedContinuation",
            ErrorKind::Overlong               => "Overlong",
            ErrorKind::EncodedSurrogate       => "EncodedSurrogate",
            ErrorKind::OutOfRange             => "OutOfRange",
            ErrorKind::InvalidLeading         => "InvalidLeading",
        };
        fmt.write_str(name)
    }
}

impl Display for ErrorKind {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result { fmt.write_str(self.message()) }
}

#[cfg(feature = "std")]
impl Error for ErrorKind {
    fn description(&self) -> &str { self.message() }
}
