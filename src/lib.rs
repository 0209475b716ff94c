// SPDX-License-Identifier: CC0-1.0

//! Ethereum Addresses
//!
//! An Ethereum address is a 160-bit account identifier. This crate models it as an optional
//! 20-byte value, [`Address`], and converts between its three representations:
//!
//! - the binary form, exactly 20 raw bytes,
//! - the `"0x"` prefixed hexadecimal literal accepted on input (any letter case), and
//! - the EIP-55 mixed-case checksummed literal produced on output.
//!
//! Addresses can also be converted to and from arbitrary-precision integers in the range
//! `[0, 2^160 - 1]`.
//!
//! This crate can be used in a no-std environment but requires an allocator.
//!
//! ref: <https://eips.ethereum.org/EIPS/eip-55>

#![cfg_attr(not(feature = "std"), no_std)]
// Experimental features we need.
#![doc(test(attr(warn(unused))))]
// Coding conventions.
#![warn(deprecated_in_future)]
#![warn(missing_docs)]
// Exclude lints we don't think are valuable.
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.
#![allow(clippy::uninlined_format_args)] // Allow `format!("{}", x)` instead of enforcing `format!("{x}")`

extern crate alloc;

/// Address-related constants.
pub mod constants {
    /// The length of an address, in bytes.
    pub const ADDRESS_LENGTH: usize = 20;
    /// The marker every hexadecimal literal starts with.
    pub const HEX_LITERAL_PREFIX: &[u8; 2] = b"0x";
    /// Number of hexadecimal digits needed to spell out every byte of an address.
    pub const HEX_DIGITS: usize = ADDRESS_LENGTH * 2;
    /// Length of a full hexadecimal literal, prefix included (42).
    pub const TEXT_LENGTH: usize = HEX_LITERAL_PREFIX.len() + HEX_DIGITS;
    /// Length of a hexadecimal literal written one digit short (41).
    pub const SHORT_TEXT_LENGTH: usize = TEXT_LENGTH - 1;
}

pub mod address;
pub mod checksum;
pub mod nibble;

#[doc(no_inline)]
pub use num_bigint::BigInt;

#[doc(inline)]
pub use address::error::*;
#[doc(inline)]
pub use address::Address;
