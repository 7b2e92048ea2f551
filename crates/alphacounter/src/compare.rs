//! Ordering of counters without decoding them.
//!
//! Leading zero symbols are stripped before comparing, so comparison is by
//! magnitude: `""`, `"0"` and `"000"` are all equal, and `"0A"` equals
//! `"A"`. After stripping, a longer counter is always greater and counters
//! of equal length compare as plain strings.
//!
//! Comparison does not validate its inputs. Characters outside the alphabet
//! are ordered by their byte value.

use std::cmp::Ordering;

use crate::alphabet::trim_leading_zeros;

/// Three-way comparison of two counters by magnitude.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use alphacounter::compare;
///
/// assert_eq!(compare("a", "b"), Ordering::Less);
/// assert_eq!(compare("10", "z"), Ordering::Greater);
/// assert_eq!(compare("0A", "A"), Ordering::Equal);
/// assert_eq!(compare("", "0"), Ordering::Equal);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    let a = trim_leading_zeros(a);
    let b = trim_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// `true` if `a` is numerically less than `b`.
#[inline]
pub fn less_than(a: &str, b: &str) -> bool {
    compare(a, b) == Ordering::Less
}

/// `true` if `a` is numerically greater than `b`.
#[inline]
pub fn greater_than(a: &str, b: &str) -> bool {
    compare(a, b) == Ordering::Greater
}

/// `true` if `a` and `b` have the same magnitude.
#[inline]
pub fn equal(a: &str, b: &str) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Start a comparison against `counter`.
///
/// # Examples
///
/// ```
/// use alphacounter::is;
///
/// assert!(is("a").lt("b"));
/// assert!(is("F9").gt("00A"));
/// assert!(is("F9").eq("000F9"));
/// ```
pub fn is(counter: &str) -> Comparison<'_> {
    Comparison { counter }
}

/// A counter bound as the left-hand side of a comparison.
///
/// Created by [`is`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison<'a> {
    counter: &'a str,
}

impl<'a> Comparison<'a> {
    /// The bound counter, as given to [`is`].
    ///
    /// ```
    /// use alphacounter::is;
    ///
    /// let cmp = is("00A");
    /// assert_eq!(cmp.counter(), "00A");
    /// assert!(cmp.eq("A"));
    /// ```
    pub fn counter(&self) -> &'a str {
        self.counter
    }

    /// `true` if the bound counter is less than `other`.
    pub fn lt(&self, other: &str) -> bool {
        less_than(self.counter, other)
    }

    /// `true` if the bound counter is greater than `other`.
    pub fn gt(&self, other: &str) -> bool {
        greater_than(self.counter, other)
    }

    /// `true` if the bound counter has the same magnitude as `other`.
    #[allow(clippy::should_implement_trait)]
    pub fn eq(&self, other: &str) -> bool {
        equal(self.counter, other)
    }

    /// Full three-way ordering against `other`.
    pub fn ordering(&self, other: &str) -> Ordering {
        compare(self.counter, other)
    }
}
