//! Conversion between counters and integers.
//!
//! Decoding always accumulates into a [`BigUint`], so counters of any length
//! convert without silent overflow. Native integer widths are only produced
//! through the fallible [`to_u64`] and [`to_u128`] accessors.

use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};

use crate::alphabet::{self, BASE};
use crate::error::{CounterError, Result};

/// Decode a counter into its numeric value.
///
/// Leading zero symbols do not affect the value and the empty counter is
/// zero.
///
/// # Examples
///
/// ```
/// use alphacounter::{to_number, BigUint};
///
/// assert_eq!(to_number("10").unwrap(), BigUint::from(62u32));
/// assert_eq!(to_number("00z").unwrap(), BigUint::from(61u32));
/// assert_eq!(to_number("").unwrap(), BigUint::from(0u32));
/// ```
pub fn to_number(counter: &str) -> Result<BigUint> {
    Ok(decode(alphabet::symbols(counter)?))
}

/// Decode already validated symbols, most significant first.
pub(crate) fn decode(symbols: &[u8]) -> BigUint {
    symbols
        .iter()
        .filter_map(|&b| alphabet::position(b))
        .fold(BigUint::zero(), |acc, digit| acc * BASE + digit)
}

/// Decode a counter into a `u64`, failing if the value needs more bits.
pub fn to_u64(counter: &str) -> Result<u64> {
    to_number(counter)?
        .to_u64()
        .ok_or(CounterError::Overflow { bits: u64::BITS })
}

/// Decode a counter into a `u128`, failing if the value needs more bits.
pub fn to_u128(counter: &str) -> Result<u128> {
    to_number(counter)?
        .to_u128()
        .ok_or(CounterError::Overflow { bits: u128::BITS })
}

/// Encode a non-negative integer as a counter, left-padded to `pad`.
///
/// Accepts any type convertible into a [`BigInt`]: native signed and
/// unsigned integers as well as `BigInt` and `BigUint`. Negative values
/// fail with [`CounterError::NegativeValue`].
///
/// # Examples
///
/// ```
/// use alphacounter::from_number;
///
/// assert_eq!(from_number(0u32, 0).unwrap(), "0");
/// assert_eq!(from_number(61u32, 0).unwrap(), "z");
/// assert_eq!(from_number(62u32, 0).unwrap(), "10");
/// assert_eq!(from_number(62u32, 3).unwrap(), "010");
/// assert!(from_number(-1i64, 0).is_err());
/// ```
pub fn from_number(value: impl Into<BigInt>, pad: usize) -> Result<String> {
    let value = value.into();
    let magnitude = value
        .to_biguint()
        .ok_or_else(|| CounterError::NegativeValue(value.to_string()))?;
    Ok(from_biguint(&magnitude, pad))
}

/// Encode an unsigned arbitrary precision integer as a counter.
pub fn from_biguint(value: &BigUint, pad: usize) -> String {
    // Most significant digit first; zero yields a single 0 digit.
    let mut digits = value.to_radix_be(BASE);
    for digit in &mut digits {
        *digit = alphabet::symbol(*digit);
    }
    alphabet::padded(&digits, pad)
}

/// Encode a hexadecimal string as a counter.
///
/// Both cases of hex digits are accepted, as is an optional `0x` prefix.
/// This is convenient for turning hashes or UUIDs into sortable counters.
///
/// # Examples
///
/// ```
/// use alphacounter::from_hex;
///
/// assert_eq!(from_hex("ff", 0).unwrap(), "47");
/// assert_eq!(from_hex("0x3D", 0).unwrap(), "z");
/// ```
pub fn from_hex(hex: &str, pad: usize) -> Result<String> {
    let digits = strip_hex_prefix(hex);
    if !is_hex(digits) {
        return Err(CounterError::InvalidNumber(hex.to_string()));
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| CounterError::InvalidNumber(hex.to_string()))?;
    Ok(from_biguint(&value, pad))
}

/// Encode textual numeric input as a counter, detecting its format.
///
/// - Text made only of hex digits (optionally `0x`-prefixed) is parsed as
///   base 16. Note that this includes plain decimal digits: `"10"` is
///   sixteen, not ten.
/// - `-` followed by decimal digits is a negative value and is rejected
///   with [`CounterError::NegativeValue`].
/// - Anything else is [`CounterError::InvalidNumber`].
///
/// # Examples
///
/// ```
/// use alphacounter::{from_text, CounterError};
///
/// assert_eq!(from_text("3d", 0).unwrap(), "z");
/// assert_eq!(from_text("10", 0).unwrap(), "G");
/// assert!(matches!(from_text("-7", 0), Err(CounterError::NegativeValue(_))));
/// assert!(matches!(from_text("xyz", 0), Err(CounterError::InvalidNumber(_))));
/// ```
pub fn from_text(text: &str, pad: usize) -> Result<String> {
    if is_hex(strip_hex_prefix(text)) {
        return from_hex(text, pad);
    }

    match text.strip_prefix('-') {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            let value: BigInt = text
                .parse()
                .map_err(|_| CounterError::InvalidNumber(text.to_string()))?;
            from_number(value, pad)
        }
        _ => Err(CounterError::InvalidNumber(text.to_string())),
    }
}

fn strip_hex_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

fn is_hex(digits: &str) -> bool {
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}
