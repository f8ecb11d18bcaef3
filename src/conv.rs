use core::fmt;

pub(crate) mod private {
    use super::{Buffer, Fmt};

    pub trait Sealed {
        fn write(self, buf: &mut Buffer, fmt: Fmt) -> &str;
    }
}
use private::Sealed;

/// A floating point decimal number.
///
/// This trait is sealed. It is implemented by the BID types
/// ([`Bid32`][crate::Bid32], etc.) and the DPD types
/// ([`Dpd32`][crate::Dpd32], etc.).
pub trait Decimal: Sealed + Copy {
    /// The number of base 10 significant digits.
    const PRECISION: u32;
    /// The maximum adjusted exponent.
    const EMAX: i32;
    /// The minimum adjusted exponent for a normal value.
    const EMIN: i32;
    /// The storage width in bits.
    const BITS: u32;
}

/// A buffer for converting floating point decimals to text.
///
/// ```
/// use decimal754::{d64, Buffer, Fmt};
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.format(d64::new(-125, -2), Fmt::Default), "-1.25");
/// assert_eq!(buf.format(d64::new(-125, -2), Fmt::LowerExp), "-1.25e+0");
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Buffer {
    pub(crate) buf: [u8; Self::MAX_STR_LEN],
    pub(crate) len: usize,
}

impl Buffer {
    /// The longest string any supported format prints, which
    /// is a full-length decimal128 in plain notation with the
    /// largest leading zero run.
    pub(crate) const MAX_STR_LEN: usize = "-0.000000".len() + 34;

    /// Creates a `Buffer`.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; Self::MAX_STR_LEN],
            len: 0,
        }
    }

    /// Prints the decimal to the buffer.
    pub fn format<D: Decimal>(&mut self, d: D, fmt: Fmt) -> &str {
        d.write(self, fmt)
    }

    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends `s`. Bytes past the end of the buffer are
    /// dropped.
    pub(crate) fn extend(&mut self, s: &[u8]) {
        for &b in s {
            if let Some(v) = self.buf.get_mut(self.len) {
                *v = b;
                self.len += 1;
            }
        }
    }

    pub(crate) fn push(&mut self, b: u8) {
        self.extend(&[b]);
    }

    pub(crate) fn as_str(&self) -> &str {
        let s = self.buf.get(..self.len).unwrap_or_default();
        core::str::from_utf8(s).unwrap_or("")
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Controls how decimals are printed to [`Buffer`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Fmt {
    /// Use the IEEE 754 "to-scientific-string" format.
    ///
    /// Numbers with a small enough exponent are printed
    /// without one.
    #[default]
    Default,
    /// Use scientific notation with an uppercase `E`.
    UpperExp,
    /// Use scientific notation with a lowercase `e`.
    LowerExp,
}

/// An error returned when parsing a decimal from a string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    kind: ErrorKind,
}

impl ParseError {
    pub(crate) const fn empty() -> Self {
        Self {
            kind: ErrorKind::Empty,
        }
    }

    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self {
            kind: ErrorKind::Invalid(reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum ErrorKind {
    Empty,
    Invalid(&'static str),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse decimal from empty string"),
            Self::Invalid(reason) => write!(f, "invalid decimal literal: {reason}"),
        }
    }
}
