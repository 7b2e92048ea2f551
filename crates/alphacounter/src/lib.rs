//! # alphacounter
//!
//! Compact, incrementable identifiers whose string order matches their
//! numeric order.
//!
//! Counters are strings over a 62-symbol alphabet (`0-9`, `A-Z`, `a-z`, in
//! that order). Because the alphabet is in ASCII order, counters of the same
//! length sort as plain strings exactly as their values sort, which makes
//! them useful as sort keys, revision markers and database index keys.
//!
//! ## Features
//!
//! - Increment and decrement without decoding, for counters of any length
//! - Conversion to and from integers of arbitrary size, and from hex strings
//! - Fixed-width padding so that plain string sorting stays correct
//! - Inversion for descending-order keys
//! - Magnitude comparison that ignores leading zeros
//! - Optional `serde` support for the owned [`Counter`] type
//!
//! The empty string is a valid counter and represents zero.

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Generating Keys
//!
//! ```rust
//! use alphacounter::{increment, from_number, to_u64};
//!
//! let first = increment("", 4).unwrap();
//! assert_eq!(first, "0000");
//!
//! let next = increment(&first, 4).unwrap();
//! assert_eq!(next, "0001");
//! assert!(first < next);
//!
//! assert_eq!(from_number(62u32, 4).unwrap(), "0010");
//! assert_eq!(to_u64("0010").unwrap(), 62);
//! ```
//!
//! ### Descending Order
//!
//! ```rust
//! use alphacounter::invert;
//!
//! let newer = invert("0002", 4).unwrap();
//! let older = invert("0001", 4).unwrap();
//! assert!(newer < older);
//! ```
//!
//! ### Comparing Counters of Different Widths
//!
//! ```rust
//! use alphacounter::is;
//!
//! assert!(is("z").lt("10"));
//! assert!(is("00A").eq("A"));
//! ```
//!
//! ## Conventions
//!
//! - A padding of `0` means "no padding"; every output still has at least
//!   one symbol.
//! - Incrementing an all-`z` counter carries: `"z"` becomes `"10"`.
//! - Decrementing zero fails with [`CounterError::Underflow`].

pub mod alphabet;
pub mod compare;
pub mod convert;
pub mod counter;
pub mod error;
pub mod invert;
pub mod step;

pub use self::alphabet::{is_valid, pad, ALPHABET, BASE};
pub use self::compare::{compare, equal, greater_than, is, less_than, Comparison};
pub use self::convert::{
    from_biguint, from_hex, from_number, from_text, to_number, to_u128, to_u64,
};
pub use self::counter::Counter;
pub use self::error::{CounterError, Result};
pub use self::invert::invert;
pub use self::step::{decrement, increment};

pub use num_bigint::{BigInt, BigUint};
