//! Decoding of arbitrary-base integer strings.
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::errors::Error;

/// The smallest supported radix.
pub const MIN_RADIX: u32 = 2;
/// The largest supported radix (digits `0-9` followed by letters `a-z`).
pub const MAX_RADIX: u32 = 36;

/// Decodes a string of digits written in the given radix into an exact
/// integer.
///
/// Letters are case-insensitive. Signs, separators and whitespace are not
/// digits and are rejected.
pub fn decode(digits: &str, radix: u32) -> Result<BigInt, Error> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(Error::InvalidRadix(radix));
    }
    if digits.is_empty() {
        return Err(Error::EmptyValue);
    }

    let mut value = BigUint::zero();
    for (position, digit) in digits.chars().enumerate() {
        let d = digit.to_digit(radix).ok_or(Error::InvalidDigit {
            digit,
            position,
            radix,
        })?;
        value = value * radix + d;
    }

    Ok(BigInt::from(value))
}
