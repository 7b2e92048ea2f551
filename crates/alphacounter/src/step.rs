//! Increment and decrement.
//!
//! Both operations work symbol by symbol from the right, like carrying and
//! borrowing in decimal arithmetic, so they never decode the counter into
//! an integer and work for counters of any length.

use smallvec::SmallVec;

use crate::alphabet::{self, MAX, ONE, ZERO};
use crate::error::{CounterError, Result};

/// Symbol buffer; counters longer than this spill to the heap.
type Symbols = SmallVec<[u8; 32]>;

/// Produce the counter that follows `counter`, left-padded to `pad`.
///
/// The empty counter increments to `"0"`. When every symbol is already the
/// highest symbol the counter grows by one, exactly like `99 + 1 = 100`.
///
/// # Examples
///
/// ```
/// use alphacounter::increment;
///
/// assert_eq!(increment("", 0).unwrap(), "0");
/// assert_eq!(increment("9", 0).unwrap(), "A");
/// assert_eq!(increment("Z", 0).unwrap(), "a");
/// assert_eq!(increment("z", 0).unwrap(), "10");
/// assert_eq!(increment("P3", 5).unwrap(), "000P4");
/// ```
pub fn increment(counter: &str, pad: usize) -> Result<String> {
    Ok(successor(alphabet::symbols(counter)?, pad))
}

/// Increment already validated symbols.
pub(crate) fn successor(symbols: &[u8], pad: usize) -> String {
    let mut next = Symbols::from_slice(symbols);

    for i in (0..next.len()).rev() {
        match alphabet::successor(next[i]) {
            Some(symbol) => {
                next[i] = symbol;
                return alphabet::padded(&next, pad);
            }
            None => next[i] = ZERO,
        }
    }

    // Empty input also lands here and becomes "0" after padding.
    if !next.is_empty() {
        next.insert(0, ONE);
    }
    alphabet::padded(&next, pad)
}

/// Produce the counter that precedes `counter`, left-padded to `pad`.
///
/// This undoes [`increment`]: when the borrow consumes a leading `'1'` the
/// counter shrinks by one symbol, mirroring the carry. Decrementing zero
/// fails with [`CounterError::Underflow`].
///
/// # Examples
///
/// ```
/// use alphacounter::{decrement, CounterError};
///
/// assert_eq!(decrement("A", 0).unwrap(), "9");
/// assert_eq!(decrement("10", 0).unwrap(), "z");
/// assert_eq!(decrement("10", 2).unwrap(), "0z");
/// assert_eq!(decrement("000", 0), Err(CounterError::Underflow));
/// ```
pub fn decrement(counter: &str, pad: usize) -> Result<String> {
    predecessor(alphabet::symbols(counter)?, pad).ok_or(CounterError::Underflow)
}

/// Decrement already validated symbols, `None` if they spell zero.
pub(crate) fn predecessor(symbols: &[u8], pad: usize) -> Option<String> {
    let mut prev = Symbols::from_slice(symbols);

    for i in (0..prev.len()).rev() {
        match alphabet::predecessor(prev[i]) {
            Some(symbol) => {
                prev[i] = symbol;
                let shrink = i == 0 && symbol == ZERO && prev.len() > 1;
                let start = usize::from(shrink);
                return Some(alphabet::padded(&prev[start..], pad));
            }
            None => prev[i] = MAX,
        }
    }

    None
}
