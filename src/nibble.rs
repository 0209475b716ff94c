// SPDX-License-Identifier: CC0-1.0

//! Single hexadecimal digit decoding.

/// Decodes one ASCII hexadecimal digit into its 4-bit value.
///
/// Accepts `0-9`, `a-f` and `A-F`. Returns `None` for any other byte.
///
/// # Examples
///
/// ```
/// use ethaddr::nibble::decode_nibble;
///
/// assert_eq!(decode_nibble(b'7'), Some(7));
/// assert_eq!(decode_nibble(b'c'), Some(12));
/// assert_eq!(decode_nibble(b'C'), Some(12));
/// assert_eq!(decode_nibble(b'x'), None);
/// ```
#[inline]
pub const fn decode_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
