//! Decoding of share values from an arbitrary radix into exact integers.

use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Smallest radix a share value may be encoded in.
pub const MIN_BASE: u32 = 2;
/// Largest radix a share value may be encoded in ('0'-'9' then 'a'-'z').
pub const MAX_BASE: u32 = 36;

/// Decode `value` as an unsigned integer written in `base`.
///
/// Digits are case-insensitive: '0'-'9' map to 0-9 and 'a'-'z' to 10-35.
/// A digit must be strictly below the stated base, so `decode("7", 2)`
/// fails just like `decode("G", 10)` does. Accumulation runs over
/// [`BigUint`], so arbitrarily long values decode without overflow.
pub fn decode(value: &str, base: u32) -> Result<BigUint> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(Error::InvalidBase(base));
    }
    if value.is_empty() {
        return Err(Error::MalformedInput("empty share value".into()));
    }
    let mut acc = BigUint::zero();
    for ch in value.chars() {
        let digit = match ch.to_digit(MAX_BASE) {
            Some(d) if d < base => d,
            _ => return Err(Error::InvalidDigit { ch, base }),
        };
        acc = acc * base + digit;
    }
    Ok(acc)
}
