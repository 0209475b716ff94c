// SPDX-License-Identifier: CC0-1.0

//! Error code for the address module.

use core::convert::Infallible;
use core::fmt;

use num_bigint::BigInt;

use super::big_int::{max_address, min_address};
use crate::constants::{ADDRESS_LENGTH, SHORT_TEXT_LENGTH, TEXT_LENGTH};

/// Error while parsing a hexadecimal literal into an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// The text does not start with `"0x"`.
    MissingPrefix(MissingPrefixError),
    /// The text is neither 42 nor 41 bytes long.
    InvalidLength(InvalidLengthError),
    /// A digit after the prefix is not hexadecimal.
    InvalidChar(InvalidCharError),
}

impl From<Infallible> for ParseError {
    fn from(never: Infallible) -> Self { match never {} }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseError::*;

        match *self {
            MissingPrefix(ref e) => fmt::Display::fmt(e, f),
            InvalidLength(ref e) => fmt::Display::fmt(e, f),
            InvalidChar(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use ParseError::*;

        match *self {
            MissingPrefix(ref e) => Some(e),
            InvalidLength(ref e) => Some(e),
            InvalidChar(ref e) => Some(e),
        }
    }
}

impl From<MissingPrefixError> for ParseError {
    fn from(e: MissingPrefixError) -> Self { Self::MissingPrefix(e) }
}

impl From<InvalidLengthError> for ParseError {
    fn from(e: InvalidLengthError) -> Self { Self::InvalidLength(e) }
}

impl From<InvalidCharError> for ParseError {
    fn from(e: InvalidCharError) -> Self { Self::InvalidChar(e) }
}

/// The hexadecimal literal is missing its `"0x"` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPrefixError;

impl fmt::Display for MissingPrefixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("missing prefix for hexadecimal-literal (i.e., \"0x\")")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MissingPrefixError {}

/// The hexadecimal literal has the wrong length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidLengthError {
    /// Length of the whole text, prefix included.
    pub(crate) actual: usize,
}

impl InvalidLengthError {
    /// Returns the length of the rejected text, `"0x"` prefix included.
    pub fn invalid_length(&self) -> usize { self.actual }
}

impl fmt::Display for InvalidLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "the eth-address is expected to be {} or {} bytes long, but was actually {} bytes long",
            TEXT_LENGTH, SHORT_TEXT_LENGTH, self.actual
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidLengthError {}

/// A byte of the hexadecimal literal is not a hexadecimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCharError {
    /// Zero-based index counted from the first byte after `"0x"`.
    pub(crate) pos: usize,
    pub(crate) invalid: u8,
}

impl InvalidCharError {
    /// Returns the position of the offending byte, counted from just after the `"0x"` prefix.
    pub fn pos(&self) -> usize { self.pos }

    /// Returns the offending byte.
    pub fn invalid_char(&self) -> u8 { self.invalid }
}

impl fmt::Display for InvalidCharError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "byte number-{} (after \"0x\" prefix) of hexadecimal literal ({}) ('{}') is not a valid hexadecimal symbol",
            self.pos,
            self.invalid,
            char::from(self.invalid).escape_debug()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCharError {}

/// Binary data is not exactly [`ADDRESS_LENGTH`] bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryLengthError {
    pub(crate) actual: usize,
}

impl BinaryLengthError {
    /// Returns the length of the rejected data.
    pub fn invalid_length(&self) -> usize { self.actual }
}

impl fmt::Display for BinaryLengthError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "the actual length of the data parameter ({}) is not what was expected ({})",
            self.actual, ADDRESS_LENGTH
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BinaryLengthError {}

/// A marshalling operation was attempted on an address that holds nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NothingError;

impl fmt::Display for NothingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str("nothing") }
}

#[cfg(feature = "std")]
impl std::error::Error for NothingError {}

/// Error converting an integer into an address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BigIntError {
    /// No integer was supplied.
    Nil,
    /// The integer is negative.
    Underflow(BigInt),
    /// The integer does not fit in 160 bits.
    Overflow(BigInt),
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BigIntError::*;

        match *self {
            Nil => f.write_str("nil big-int"),
            Underflow(ref n) => write!(
                f,
                "address underflow: expected numerical value for address to be between {} and {} but actually was {}",
                min_address(),
                max_address(),
                n
            ),
            Overflow(ref n) => write!(
                f,
                "address overflow: expected numerical value for address to be between {} and {} but actually was {}",
                min_address(),
                max_address(),
                n
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BigIntError {}
