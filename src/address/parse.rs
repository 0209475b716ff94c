// SPDX-License-Identifier: CC0-1.0

//! Decoding of `"0x"` prefixed hexadecimal literals.
//!
//! The literal is either 40 digits long or one digit short (39). In the short form the first
//! digit alone fills the high nibble of the first byte. Digits are decoded left to right and the
//! first invalid one aborts the decode; its position is reported relative to the first byte after
//! the prefix.

use super::error::{InvalidCharError, InvalidLengthError, MissingPrefixError, ParseError};
use crate::constants::{ADDRESS_LENGTH, HEX_DIGITS, HEX_LITERAL_PREFIX};
use crate::nibble::decode_nibble;

/// Digits that always come in pairs, one pair per byte after the first.
const PAIRED_DIGITS: usize = HEX_DIGITS - 2;

/// Decodes a hexadecimal literal such as `0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed`.
///
/// The letter case of the digits is not checked against the EIP-55 checksum.
pub(crate) fn decode_hex_literal(text: &[u8]) -> Result<[u8; ADDRESS_LENGTH], ParseError> {
    let digits = text.strip_prefix(HEX_LITERAL_PREFIX).ok_or(MissingPrefixError)?;

    if digits.len() != HEX_DIGITS && digits.len() != HEX_DIGITS - 1 {
        return Err(InvalidLengthError { actual: text.len() }.into());
    }

    let (head, tail) = digits.split_at(digits.len() - PAIRED_DIGITS);
    let mut bytes = [0u8; ADDRESS_LENGTH];

    bytes[0] = match *head {
        [hi, lo] => decode_at(0, hi)? << 4 | decode_at(1, lo)?,
        [hi] => decode_at(0, hi)? << 4,
        _ => unreachable!("length checked above"),
    };

    for (i, pair) in tail.chunks_exact(2).enumerate() {
        let pos = head.len() + i * 2;
        bytes[1 + i] = decode_at(pos, pair[0])? << 4 | decode_at(pos + 1, pair[1])?;
    }

    Ok(bytes)
}

fn decode_at(pos: usize, c: u8) -> Result<u8, InvalidCharError> {
    decode_nibble(c).ok_or(InvalidCharError { pos, invalid: c })
}
