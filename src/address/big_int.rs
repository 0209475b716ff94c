// SPDX-License-Identifier: CC0-1.0

//! Conversions between addresses and arbitrary-precision integers.
//!
//! An address read as a big-endian unsigned integer lies in `[0, 2^160 - 1]`. Integers outside
//! that range are rejected, never truncated.

use num_bigint::{BigInt, Sign};

use super::error::BigIntError;
use super::Address;
use crate::constants::ADDRESS_LENGTH;

/// The smallest integer an address can hold (zero).
pub fn min_address() -> BigInt { BigInt::from(0u8) }

/// The largest integer an address can hold (`2^160 - 1`).
pub fn max_address() -> BigInt { BigInt::from_bytes_be(Sign::Plus, &[0xff; ADDRESS_LENGTH]) }

/// Writes `n` big-endian into a 20-byte buffer, left-padded with zeros.
pub(crate) fn to_byte_array(n: &BigInt) -> Result<[u8; ADDRESS_LENGTH], BigIntError> {
    if *n < min_address() {
        return Err(BigIntError::Underflow(n.clone()));
    }
    if *n > max_address() {
        return Err(BigIntError::Overflow(n.clone()));
    }

    // At most 20 bytes once the range checks pass.
    let (_, magnitude) = n.to_bytes_be();
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - magnitude.len()..].copy_from_slice(&magnitude);
    Ok(bytes)
}

pub(crate) fn from_byte_array(bytes: &[u8; ADDRESS_LENGTH]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

impl Address {
    /// Constructs an address from the integer `n`.
    ///
    /// # Errors
    ///
    /// [`BigIntError::Underflow`] if `n` is negative, [`BigIntError::Overflow`] if `n` needs more
    /// than 160 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use ethaddr::{Address, BigInt};
    ///
    /// let address = Address::from_big_int(&BigInt::from(0xffu8)).unwrap();
    /// assert_eq!(address.to_string(), "0x00000000000000000000000000000000000000ff");
    /// ```
    pub fn from_big_int(n: &BigInt) -> Result<Self, BigIntError> {
        to_byte_array(n).map(Self::something)
    }

    /// Returns the address read as a big-endian unsigned integer, or `None` if it holds nothing.
    pub fn to_big_int(&self) -> Option<BigInt> { self.as_byte_array().map(from_byte_array) }
}

impl TryFrom<&BigInt> for Address {
    type Error = BigIntError;

    fn try_from(n: &BigInt) -> Result<Self, Self::Error> { Self::from_big_int(n) }
}

/// `None` is rejected with [`BigIntError::Nil`], so this undoes [`Address::to_big_int`] exactly
/// for addresses that hold something.
impl TryFrom<Option<BigInt>> for Address {
    type Error = BigIntError;

    fn try_from(n: Option<BigInt>) -> Result<Self, Self::Error> {
        match n {
            Some(ref n) => Self::from_big_int(n),
            None => Err(BigIntError::Nil),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pow_160() -> BigInt { BigInt::from(1u8) << 160u32 }

    #[test]
    fn bounds() {
        assert_eq!(max_address() + BigInt::from(1u8), two_pow_160());
        assert_eq!(min_address(), BigInt::from(0u8));
    }

    #[test]
    fn zero_is_the_zero_address() {
        let address = Address::from_big_int(&BigInt::from(0u8)).unwrap();
        assert_eq!(address, Address::something([0; 20]));
        assert!(address.is_something());
    }

    #[test]
    fn max_is_all_ones() {
        let address = Address::from_big_int(&max_address()).unwrap();
        assert_eq!(address.get(), Some([0xff; 20]));
    }

    #[test]
    fn small_values_are_left_padded() {
        let address = Address::from_big_int(&BigInt::from(0x0102_0304u32)).unwrap();
        let mut want = [0u8; 20];
        want[16..].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        assert_eq!(address.get(), Some(want));
    }

    #[test]
    fn overflow() {
        let n = two_pow_160();
        assert_eq!(Address::from_big_int(&n), Err(BigIntError::Overflow(n.clone())));
    }

    #[test]
    fn underflow() {
        let n = BigInt::from(-1i8);
        assert_eq!(Address::from_big_int(&n), Err(BigIntError::Underflow(n.clone())));
    }

    #[test]
    fn nil() {
        assert_eq!(Address::try_from(None::<BigInt>), Err(BigIntError::Nil));
    }

    #[test]
    fn to_big_int_of_nothing_is_none() {
        assert_eq!(Address::nothing().to_big_int(), None);
    }

    #[test]
    fn round_trip_through_integer() {
        let address = Address::something([
            0x5a, 0xae, 0xb6, 0x05, 0x3f, 0x3e, 0x94, 0xc9, 0xb9, 0xa0, 0x9f, 0x33, 0x66, 0x94,
            0x35, 0xe7, 0xef, 0x1b, 0xea, 0xed,
        ]);
        let n = address.to_big_int();
        assert!(n.as_ref().is_some_and(|n| n.sign() == Sign::Plus));
        assert_eq!(Address::try_from(n), Ok(address));
    }

    #[test]
    fn leading_zero_bytes_survive() {
        let mut bytes = [0u8; 20];
        bytes[19] = 1;
        let n = Address::something(bytes).to_big_int().unwrap();
        assert_eq!(n, BigInt::from(1u8));
        assert_eq!(Address::try_from(&n).unwrap().get(), Some(bytes));
    }
}
