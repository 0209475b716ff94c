// SPDX-License-Identifier: CC0-1.0

//! Ethereum addresses.
//!
//! This module defines the [`Address`] type, an optional 20-byte value, along with its binary,
//! textual and numeric conversions.

pub mod error;

mod big_int;
mod parse;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::checksum;
use crate::constants::ADDRESS_LENGTH;

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    big_int::{max_address, min_address},
    error::{
        BigIntError, BinaryLengthError, InvalidCharError, InvalidLengthError, MissingPrefixError,
        NothingError, ParseError,
    },
};

/// An Ethereum address.
///
/// An `Address` either holds nothing or holds exactly 20 bytes. Holding nothing is NOT the same
/// thing as holding the zero address `0x0000000000000000000000000000000000000000`; the two never
/// compare equal.
///
/// Text is accepted in any letter case and always produced in the EIP-55 checksummed form.
///
/// # Examples
///
/// ```
/// use ethaddr::Address;
///
/// let address: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
/// assert_eq!(address.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
///
/// assert_ne!(Address::nothing(), Address::something([0; 20]));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(Option<[u8; ADDRESS_LENGTH]>);

impl Address {
    /// The address that holds nothing.
    pub const NOTHING: Self = Self(None);

    /// The zero address, `0x0000000000000000000000000000000000000000`.
    pub const ZERO: Self = Self(Some([0; ADDRESS_LENGTH]));

    /// Returns an address that holds nothing.
    pub const fn nothing() -> Self { Self::NOTHING }

    /// Returns an address holding `bytes`.
    pub const fn something(bytes: [u8; ADDRESS_LENGTH]) -> Self { Self(Some(bytes)) }

    /// Parses a `"0x"` prefixed hexadecimal literal.
    ///
    /// The literal must have 40 hexadecimal digits, or 39 in which case the first digit fills
    /// the high nibble of the first byte on its own. Letter case is ignored.
    ///
    /// # Errors
    ///
    /// - [`ParseError::MissingPrefix`] if `text` does not start with `"0x"`.
    /// - [`ParseError::InvalidLength`] if `text` is neither 42 nor 41 bytes long.
    /// - [`ParseError::InvalidChar`] for the first byte after the prefix that is not a
    ///   hexadecimal digit.
    pub fn parse(text: &[u8]) -> Result<Self, ParseError> {
        parse::decode_hex_literal(text).map(Self::something)
    }

    /// Constructs an address from exactly 20 bytes of binary data.
    ///
    /// # Errors
    ///
    /// If `data` is not exactly 20 bytes long.
    pub fn from_binary(data: &[u8]) -> Result<Self, BinaryLengthError> {
        let bytes = <[u8; ADDRESS_LENGTH]>::try_from(data)
            .map_err(|_| BinaryLengthError { actual: data.len() })?;
        Ok(Self::something(bytes))
    }

    /// Returns the 20 bytes, or `None` if the address holds nothing.
    pub fn get(&self) -> Option<[u8; ADDRESS_LENGTH]> { self.0 }

    /// Returns the 20 bytes, or `default` if the address holds nothing.
    pub fn get_or(&self, default: [u8; ADDRESS_LENGTH]) -> [u8; ADDRESS_LENGTH] {
        self.0.unwrap_or(default)
    }

    /// Returns a reference to the 20 bytes, or `None` if the address holds nothing.
    ///
    /// These are the decoded bytes, not the ASCII of the hexadecimal literal.
    pub fn as_byte_array(&self) -> Option<&[u8; ADDRESS_LENGTH]> { self.0.as_ref() }

    /// Returns true if the address holds nothing.
    pub fn is_nothing(&self) -> bool { self.0.is_none() }

    /// Returns true if the address holds 20 bytes.
    pub fn is_something(&self) -> bool { self.0.is_some() }

    /// Returns the binary form of the address.
    ///
    /// # Errors
    ///
    /// [`NothingError`] if the address holds nothing; absence has no binary encoding.
    pub fn to_binary(&self) -> Result<[u8; ADDRESS_LENGTH], NothingError> {
        self.0.ok_or(NothingError)
    }

    /// Returns the EIP-55 checksummed hexadecimal literal.
    ///
    /// # Errors
    ///
    /// [`NothingError`] if the address holds nothing.
    pub fn to_text(&self) -> Result<String, NothingError> {
        self.to_checksum_string().ok_or(NothingError)
    }

    /// Returns the EIP-55 checksummed hexadecimal literal, or `None` if the address holds
    /// nothing.
    ///
    /// EIP-55 may upper-case any of the letters `a` to `f`:
    ///
    /// ```text
    /// 0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed
    /// 0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed
    ///     ^      ^ ^  ^   ^           ^ ^  ^ ^
    /// ```
    pub fn to_checksum_string(&self) -> Option<String> { self.0.as_ref().map(checksum::encode) }

    /// Replaces `self` with the address held in `data`.
    ///
    /// On error `self` is left unchanged.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), BinaryLengthError> {
        *self = Self::from_binary(data)?;
        Ok(())
    }

    /// Replaces `self` with the address spelled out by the hexadecimal literal `text`.
    ///
    /// On error `self` is left unchanged and the parser's error is returned as is.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), ParseError> {
        *self = Self::parse(text)?;
        Ok(())
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self { Self::something(bytes) }
}

impl TryFrom<&[u8]> for Address {
    type Error = BinaryLengthError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> { Self::from_binary(data) }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> { Self::parse(s.as_bytes()) }
}

/// Writes the EIP-55 checksummed literal; an address holding nothing writes nothing.
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(ref bytes) => f.write_str(&checksum::encode(bytes)),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(ref bytes) => write!(f, "Address({})", checksum::encode(bytes)),
            None => f.write_str("Address::Nothing"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let bytes = self.to_binary().map_err(serde::ser::Error::custom)?;
        if serializer.is_human_readable() {
            serializer.serialize_str(&checksum::encode(&bytes))
        } else {
            serializer.serialize_bytes(&bytes)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        struct Visitor;
        impl serde::de::Visitor<'_> for Visitor {
            type Value = Address;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an Ethereum address")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse::<Address>().map_err(E::custom)
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Address::from_binary(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(Visitor)
        } else {
            deserializer.deserialize_bytes(Visitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;

    use super::*;

    const EXAMPLE: [u8; ADDRESS_LENGTH] = [
        0x5a, 0xae, 0xb6, 0x05, 0x3f, 0x3e, 0x94, 0xc9, 0xb9, 0xa0, 0x9f, 0x33, 0x66, 0x94, 0x35,
        0xe7, 0xef, 0x1b, 0xea, 0xed,
    ];
    const EXAMPLE_TEXT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    #[test]
    fn nothing_is_not_zero() {
        assert_ne!(Address::nothing(), Address::ZERO);
        assert!(Address::nothing().is_nothing());
        assert!(!Address::nothing().is_something());
        assert!(Address::ZERO.is_something());
        assert_eq!(Address::default(), Address::NOTHING);
    }

    #[test]
    fn equality_is_bytewise() {
        assert_eq!(Address::something(EXAMPLE), Address::from(EXAMPLE));
        let mut other = EXAMPLE;
        other[19] ^= 1;
        assert_ne!(Address::something(EXAMPLE), Address::something(other));
        assert_eq!(Address::nothing(), Address::nothing());
    }

    #[test]
    fn get_and_get_or() {
        let fallback = [0xee; ADDRESS_LENGTH];
        assert_eq!(Address::nothing().get(), None);
        assert_eq!(Address::nothing().get_or(fallback), fallback);
        assert_eq!(Address::something(EXAMPLE).get(), Some(EXAMPLE));
        assert_eq!(Address::something(EXAMPLE).get_or(fallback), EXAMPLE);
        assert_eq!(Address::something(EXAMPLE).as_byte_array(), Some(&EXAMPLE));
        assert_eq!(Address::nothing().as_byte_array(), None);
    }

    #[test]
    fn binary() {
        assert_eq!(Address::something(EXAMPLE).to_binary(), Ok(EXAMPLE));
        assert_eq!(Address::nothing().to_binary(), Err(NothingError));
        assert_eq!(Address::from_binary(&EXAMPLE), Ok(Address::something(EXAMPLE)));
        assert_eq!(Address::try_from(&EXAMPLE[..]), Ok(Address::something(EXAMPLE)));
    }

    #[test]
    fn binary_wrong_length() {
        assert_eq!(Address::from_binary(&EXAMPLE[..19]), Err(BinaryLengthError { actual: 19 }));
        assert_eq!(Address::from_binary(&[0; 21]), Err(BinaryLengthError { actual: 21 }));
        assert_eq!(Address::from_binary(&[]), Err(BinaryLengthError { actual: 0 }));
    }

    #[test]
    fn unmarshal_binary_replaces_whole_value() {
        let mut address = Address::nothing();
        address.unmarshal_binary(&EXAMPLE).unwrap();
        assert_eq!(address, Address::something(EXAMPLE));

        assert!(address.unmarshal_binary(&EXAMPLE[1..]).is_err());
        assert_eq!(address, Address::something(EXAMPLE));
    }

    #[test]
    fn text() {
        assert_eq!(Address::something(EXAMPLE).to_text().unwrap(), EXAMPLE_TEXT);
        assert_eq!(Address::nothing().to_text(), Err(NothingError));
        assert_eq!(Address::something(EXAMPLE).to_checksum_string().unwrap(), EXAMPLE_TEXT);
        assert_eq!(Address::nothing().to_checksum_string(), None);
    }

    #[test]
    fn unmarshal_text_leaves_value_on_error() {
        let mut address = Address::ZERO;
        let err = address.unmarshal_text(b"0x5aAeb605").unwrap_err();
        assert_eq!(err, ParseError::InvalidLength(InvalidLengthError { actual: 10 }));
        assert_eq!(address, Address::ZERO);

        address.unmarshal_text(EXAMPLE_TEXT.as_bytes()).unwrap();
        assert_eq!(address, Address::something(EXAMPLE));
    }

    #[test]
    fn display_and_debug() {
        let address = Address::something(EXAMPLE);
        assert_eq!(address.to_string(), EXAMPLE_TEXT);
        assert_eq!(format!("{:?}", address), format!("Address({})", EXAMPLE_TEXT));
        assert_eq!(Address::nothing().to_string(), "");
        assert_eq!(format!("{:?}", Address::nothing()), "Address::Nothing");
    }

    #[test]
    fn from_str_is_case_insensitive() {
        let lower: Address = EXAMPLE_TEXT.to_ascii_lowercase().parse().unwrap();
        let upper: Address = format!("0x{}", EXAMPLE_TEXT[2..].to_ascii_uppercase()).parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.to_string(), EXAMPLE_TEXT);
    }

    #[test]
    fn ordering_puts_nothing_first() {
        assert!(Address::nothing() < Address::ZERO);
        assert!(Address::ZERO < Address::something(EXAMPLE));
    }
}
