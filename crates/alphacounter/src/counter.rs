//! Owned, validated counter type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};

use crate::alphabet::{self, trim_leading_zeros};
use crate::compare::compare;
use crate::convert::{decode, from_biguint};
use crate::error::{CounterError, Result};
use crate::invert::complement;
use crate::step::{predecessor, successor};

/// A counter string known to contain only alphabet symbols.
///
/// Equality, hashing and ordering are by magnitude, so `"0A"` and `"A"` are
/// the same counter even though they are spelled differently. Use
/// [`Counter::as_str`] when the exact spelling matters.
///
/// # Examples
///
/// ```
/// use alphacounter::Counter;
///
/// let first = Counter::new().increment(4);
/// assert_eq!(first.as_str(), "0000");
///
/// let later: Counter = "00zz".parse().unwrap();
/// assert!(first < later);
/// assert_eq!(later.increment(4).as_str(), "0100");
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Counter(String);

impl Counter {
    /// The empty counter, which represents zero.
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Encode a non-negative integer, left-padded to `pad`.
    pub fn from_number(value: impl Into<BigInt>, pad: usize) -> Result<Self> {
        crate::convert::from_number(value, pad).map(Self)
    }

    /// Encode a hexadecimal string, left-padded to `pad`.
    pub fn from_hex(hex: &str, pad: usize) -> Result<Self> {
        crate::convert::from_hex(hex, pad).map(Self)
    }

    /// The counter exactly as spelled.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols, including leading zeros.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the empty counter.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` if the counter's value is zero, however it is spelled.
    pub fn is_zero(&self) -> bool {
        trim_leading_zeros(&self.0).is_empty()
    }

    /// The next counter, left-padded to `pad`.
    pub fn increment(&self, pad: usize) -> Self {
        Self(successor(self.0.as_bytes(), pad))
    }

    /// The previous counter, left-padded to `pad`.
    pub fn decrement(&self, pad: usize) -> Result<Self> {
        predecessor(self.0.as_bytes(), pad)
            .map(Self)
            .ok_or(CounterError::Underflow)
    }

    /// The inverted counter for descending sort keys.
    pub fn invert(&self, pad: usize) -> Self {
        Self(complement(self.0.as_bytes(), pad))
    }

    /// The same value left-padded to `pad`.
    pub fn pad(&self, pad: usize) -> Self {
        Self(alphabet::padded(self.0.as_bytes(), pad))
    }

    /// Decode into an arbitrary precision integer.
    pub fn to_number(&self) -> BigUint {
        decode(self.0.as_bytes())
    }

    /// Decode into a `u64`, failing if the value needs more bits.
    pub fn to_u64(&self) -> Result<u64> {
        crate::convert::to_u64(&self.0)
    }

    /// Iterate over the counters following this one, each left-padded to
    /// `pad`. The iterator never ends.
    ///
    /// ```
    /// use alphacounter::Counter;
    ///
    /// let next: Vec<String> = Counter::new()
    ///     .successors(2)
    ///     .take(3)
    ///     .map(String::from)
    ///     .collect();
    /// assert_eq!(next, ["00", "01", "02"]);
    /// ```
    pub fn successors(&self, pad: usize) -> impl Iterator<Item = Counter> {
        std::iter::successors(Some(self.increment(pad)), move |c| Some(c.increment(pad)))
    }
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Counter").field(&self.0).finish()
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Counter {
    type Err = CounterError;

    fn from_str(s: &str) -> Result<Self> {
        alphabet::symbols(s)?;
        Ok(Self(s.to_owned()))
    }
}

impl TryFrom<&str> for Counter {
    type Error = CounterError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Counter {
    type Error = CounterError;

    fn try_from(s: String) -> Result<Self> {
        alphabet::symbols(&s)?;
        Ok(Self(s))
    }
}

impl From<u64> for Counter {
    fn from(value: u64) -> Self {
        Self(from_biguint(&BigUint::from(value), 0))
    }
}

impl From<u128> for Counter {
    fn from(value: u128) -> Self {
        Self(from_biguint(&BigUint::from(value), 0))
    }
}

impl From<&BigUint> for Counter {
    fn from(value: &BigUint) -> Self {
        Self(from_biguint(value, 0))
    }
}

impl From<Counter> for String {
    fn from(counter: Counter) -> Self {
        counter.0
    }
}

impl AsRef<str> for Counter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counter {}

impl PartialOrd for Counter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counter {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
    }
}

impl Hash for Counter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with Eq, which ignores leading zeros.
        trim_leading_zeros(&self.0).hash(state);
    }
}
