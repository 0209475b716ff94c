// SPDX-License-Identifier: CC0-1.0

//! EIP-55 mixed-case checksum encoding.
//!
//! The checksum lives in the letter case of the hexadecimal digits. The lowercase hex spelling of
//! the address (no prefix) is hashed with Keccak-256; a letter at digit `i` is upper-cased when
//! nibble `i` of the digest is 8 or more. Decimal digits are never touched.
//!
//! ref: <https://eips.ethereum.org/EIPS/eip-55>

use alloc::string::String;

use hex::DisplayHex;
use tiny_keccak::{Hasher, Keccak};

use crate::constants::{ADDRESS_LENGTH, TEXT_LENGTH};

/// Computes the Keccak-256 digest of `data`.
///
/// This is the original Keccak padding used by Ethereum, not the standardized SHA3-256.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut keccak = Keccak::v256();
    let mut digest = [0u8; 32];
    keccak.update(data);
    keccak.finalize(&mut digest);
    digest
}

/// Encodes `bytes` as a `"0x"` prefixed, EIP-55 checksummed hexadecimal literal.
///
/// # Examples
///
/// ```
/// let bytes = [
///     0x5a, 0xae, 0xb6, 0x05, 0x3f, 0x3e, 0x94, 0xc9, 0xb9, 0xa0,
///     0x9f, 0x33, 0x66, 0x94, 0x35, 0xe7, 0xef, 0x1b, 0xea, 0xed,
/// ];
/// assert_eq!(ethaddr::checksum::encode(&bytes), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
/// ```
pub fn encode(bytes: &[u8; ADDRESS_LENGTH]) -> String {
    let lower = bytes.as_slice().to_lower_hex_string();
    let digest = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(TEXT_LENGTH);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        if digest_nibble(&digest, i) >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Returns nibble `i` of `digest`, high nibble of each byte first.
fn digest_nibble(digest: &[u8; 32], i: usize) -> u8 {
    let byte = digest[i / 2];
    if i % 2 == 0 {
        byte >> 4
    } else {
        byte & 0x0f
    }
}
