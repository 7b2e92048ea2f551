//! Error types for counter arithmetic and conversion.
//!
//! Every operation in this crate is pure, so every failure is reported
//! immediately to the caller. Nothing is retried and nothing is logged.

use thiserror::Error;

/// Convenience type alias for Results using [`CounterError`].
pub type Result<T, E = CounterError> = std::result::Result<T, E>;

/// Errors produced by counter operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CounterError {
    /// The input contains a character outside the 62-symbol alphabet.
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character index of the offending symbol in the input.
        position: usize,
    },

    /// A negative integer was given where only non-negative values are valid.
    #[error("negative value: {0}")]
    NegativeValue(String),

    /// Attempted to decrement a counter whose value is zero.
    #[error("cannot decrement a zero counter")]
    Underflow,

    /// Text input was neither a hexadecimal string nor a signed decimal.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A decoded value does not fit the requested native integer width.
    #[error("counter value does not fit in {bits} bits")]
    Overflow {
        /// Width of the requested integer type.
        bits: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CounterError::InvalidSymbol {
            symbol: '-',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid symbol '-' at position 3");

        assert_eq!(
            CounterError::NegativeValue("-5".into()).to_string(),
            "negative value: -5"
        );
        assert_eq!(
            CounterError::Underflow.to_string(),
            "cannot decrement a zero counter"
        );
        assert_eq!(
            CounterError::Overflow { bits: 64 }.to_string(),
            "counter value does not fit in 64 bits"
        );
    }
}
