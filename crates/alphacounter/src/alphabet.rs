//! The 62-symbol alphabet and padding helpers shared by every operation.
//!
//! Symbols are ordered `0-9`, `A-Z`, `a-z`. That order is both the radix
//! order used for numeric conversion and the ASCII byte order, so plain
//! string comparison of two equal-length counters agrees with numeric
//! comparison.

use crate::error::{CounterError, Result};

/// Number of symbols in the alphabet.
pub const BASE: u32 = 62;

/// The alphabet in ascending order.
pub const ALPHABET: &[u8; BASE as usize] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// The lowest symbol, used for padding and as the value zero.
pub const ZERO: u8 = ALPHABET[0];

/// The second symbol, written in front of a carried counter.
pub const ONE: u8 = ALPHABET[1];

/// The highest symbol.
pub const MAX: u8 = ALPHABET[BASE as usize - 1];

const NOT_A_SYMBOL: u8 = u8::MAX;

/// Byte to alphabet position, `NOT_A_SYMBOL` for anything else.
const POSITIONS: [u8; 256] = build_positions();

const fn build_positions() -> [u8; 256] {
    let mut table = [NOT_A_SYMBOL; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Position of a symbol in the alphabet, or `None` if it is not a symbol.
///
/// # Examples
///
/// ```
/// use alphacounter::alphabet::position;
///
/// assert_eq!(position(b'0'), Some(0));
/// assert_eq!(position(b'A'), Some(10));
/// assert_eq!(position(b'z'), Some(61));
/// assert_eq!(position(b'-'), None);
/// ```
#[inline]
pub const fn position(symbol: u8) -> Option<u8> {
    match POSITIONS[symbol as usize] {
        NOT_A_SYMBOL => None,
        pos => Some(pos),
    }
}

/// Symbol at a given alphabet position.
///
/// # Panics
///
/// Panics if `position >= 62`.
#[inline]
pub const fn symbol(position: u8) -> u8 {
    ALPHABET[position as usize]
}

/// Next symbol in alphabet order, `None` for [`MAX`].
#[inline]
pub(crate) fn successor(symbol: u8) -> Option<u8> {
    position(symbol)
        .filter(|&pos| (pos as u32) < BASE - 1)
        .map(|pos| ALPHABET[pos as usize + 1])
}

/// Previous symbol in alphabet order, `None` for [`ZERO`].
#[inline]
pub(crate) fn predecessor(symbol: u8) -> Option<u8> {
    position(symbol)
        .filter(|&pos| pos > 0)
        .map(|pos| ALPHABET[pos as usize - 1])
}

/// Mirror image of a symbol: position `i` maps to position `61 - i`.
#[inline]
pub(crate) fn complement(symbol: u8) -> Option<u8> {
    position(symbol).map(|pos| ALPHABET[(BASE - 1) as usize - pos as usize])
}

/// Check whether every character of `counter` belongs to the alphabet.
///
/// The empty string is a valid counter (it represents zero).
pub fn is_valid(counter: &str) -> bool {
    counter.bytes().all(|b| position(b).is_some())
}

/// Validate `counter` and return its symbols as bytes.
///
/// Valid symbols are all ASCII, so on success the byte view and the
/// character view of the string coincide.
pub(crate) fn symbols(counter: &str) -> Result<&[u8]> {
    let invalid = counter
        .chars()
        .enumerate()
        .find(|&(_, c)| !c.is_ascii() || position(c as u8).is_none());

    match invalid {
        None => Ok(counter.as_bytes()),
        Some((position, symbol)) => Err(CounterError::InvalidSymbol { symbol, position }),
    }
}

/// Minimum output length for a requested padding. Zero means "no padding",
/// which still yields at least one symbol.
#[inline]
pub(crate) const fn width(pad: usize) -> usize {
    if pad == 0 {
        1
    } else {
        pad
    }
}

/// Build a counter string from symbols, left-filling with [`ZERO`] up to
/// `pad` characters. Never truncates.
pub(crate) fn padded(symbols: &[u8], pad: usize) -> String {
    let width = width(pad);
    let fill = width.saturating_sub(symbols.len());
    let mut out = String::with_capacity(fill + symbols.len());
    out.extend(std::iter::repeat(ZERO as char).take(fill));
    out.extend(symbols.iter().map(|&b| char::from(b)));
    out
}

/// Left-pad a counter with [`ZERO`] to at least `pad` characters.
///
/// # Examples
///
/// ```
/// use alphacounter::pad;
///
/// assert_eq!(pad("z", 3).unwrap(), "00z");
/// assert_eq!(pad("12345", 3).unwrap(), "12345");
/// assert_eq!(pad("", 0).unwrap(), "0");
/// ```
pub fn pad(counter: &str, pad: usize) -> Result<String> {
    Ok(padded(symbols(counter)?, pad))
}

/// Strip leading [`ZERO`] symbols. Zero in any spelling becomes `""`.
#[inline]
pub(crate) fn trim_leading_zeros(counter: &str) -> &str {
    counter.trim_start_matches(ZERO as char)
}
