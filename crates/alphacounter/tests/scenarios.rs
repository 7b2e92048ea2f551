//! Integration tests covering the public counter API end to end.

use alphacounter::{
    compare, decrement, from_biguint, from_hex, from_number, increment, invert, is, pad,
    to_number, to_u64, BigUint, Counter,
};
use std::cmp::Ordering;

// =============================================================================
// INCREMENT
// =============================================================================

#[test]
fn test_starts_at_zero() {
    assert_eq!(increment("", 0).unwrap(), "0");
    assert_eq!(increment("", 1).unwrap(), "0");
}

#[test]
fn test_increments_past_symbol_class_boundaries() {
    assert_eq!(increment("0", 0).unwrap(), "1");
    assert_eq!(increment("9", 0).unwrap(), "A");
    assert_eq!(increment("Z", 0).unwrap(), "a");
}

#[test]
fn test_carry_grows_counter() {
    assert_eq!(increment("z", 0).unwrap(), "10");
    assert_eq!(increment("00", 0).unwrap(), "01");
    assert_eq!(increment("0zzzz", 0).unwrap(), "10000");
    assert_eq!(increment("zzzzz", 0).unwrap(), "100000");
    assert_eq!(increment("10000z", 0).unwrap(), "100010");
}

#[test]
fn test_padding() {
    assert_eq!(increment("", 5).unwrap(), "00000");
    assert_eq!(increment("P3", 5).unwrap(), "000P4");
    assert_eq!(increment("0z", 2).unwrap(), "10");
    assert_eq!(increment("12345678", 5).unwrap(), "12345679");
}

// =============================================================================
// DECREMENT
// =============================================================================

#[test]
fn test_decrement_walks_back_to_zero() {
    let mut counter = from_number(500u32, 0).unwrap();
    for expected in (0u64..500).rev() {
        counter = decrement(&counter, 0).unwrap();
        assert_eq!(to_u64(&counter).unwrap(), expected);
    }
    assert_eq!(counter, "0");
    assert!(decrement(&counter, 0).is_err());
}

// =============================================================================
// NUMERIC CONVERSION
// =============================================================================

#[test]
fn test_from_number() {
    assert_eq!(from_number(0u32, 0).unwrap(), "0");
    assert_eq!(from_number(61u32, 0).unwrap(), "z");
    assert_eq!(from_number(62u32, 0).unwrap(), "10");
    assert_eq!(from_number(0u32, 3).unwrap(), "000");
    assert_eq!(from_number(61u32, 3).unwrap(), "00z");
    assert_eq!(from_number(62u32, 3).unwrap(), "010");
}

#[test]
fn test_to_number() {
    assert_eq!(to_u64("0").unwrap(), 0);
    assert_eq!(to_u64("z").unwrap(), 61);
    assert_eq!(to_u64("00").unwrap(), 0);
    assert_eq!(to_u64("10").unwrap(), 62);
    assert_eq!(to_u64("000").unwrap(), 0);
    assert_eq!(to_u64("00z").unwrap(), 61);
    assert_eq!(to_u64("010").unwrap(), 62);
}

#[test]
fn test_incremented_counters_decode_in_sequence() {
    let mut plain = String::new();
    let mut padded = String::new();
    for i in 0u64..10_000 {
        plain = increment(&plain, 0).unwrap();
        padded = increment(&padded, 4).unwrap();
        assert_eq!(to_u64(&plain).unwrap(), i);
        assert_eq!(to_u64(&padded).unwrap(), i);
    }
}

#[test]
fn test_uuid_sized_hex() {
    let hex = "0f1e2d3c4b5a69788796a5b4c3d2e1f0";
    let counter = from_hex(hex, 22).unwrap();
    assert_eq!(counter.len(), 22);
    assert_eq!(
        to_number(&counter).unwrap(),
        BigUint::parse_bytes(hex.as_bytes(), 16).unwrap()
    );
}

// =============================================================================
// INVERSION
// =============================================================================

#[test]
fn test_invert() {
    assert_eq!(invert("0", 0).unwrap(), "z");
    assert_eq!(invert("z", 0).unwrap(), "0");
    assert_eq!(invert("00", 0).unwrap(), "zz");
    assert_eq!(invert("0", 3).unwrap(), "zzz");
    assert_eq!(invert("0z0", 3).unwrap(), "z0z");
}

#[test]
fn test_inverted_keys_sort_newest_first() {
    let mut keys: Vec<(String, u32)> = (0u32..200)
        .map(|i| (invert(&from_number(i, 3).unwrap(), 3).unwrap(), i))
        .collect();
    keys.sort();
    let order: Vec<u32> = keys.iter().map(|(_, i)| *i).collect();
    let expected: Vec<u32> = (0u32..200).rev().collect();
    assert_eq!(order, expected);
}

// =============================================================================
// COMPARISON
// =============================================================================

#[test]
fn test_compare_two_strings() {
    assert!(is("a").lt("b"));
    assert!(!is("a").gt("b"));
    assert!(!is("a").eq("b"));
}

#[test]
fn test_compare_empty_values() {
    assert!(is("").lt("b"));
    assert!(!is("b").lt(""));
    assert!(is("").eq(""));
    assert!(is("").eq("0"));
}

#[test]
fn test_compare_different_sizes() {
    assert!(is("0000").lt("b"));
    assert!(!is("A").lt("0A"));
    assert!(is("A").eq("0A"));
}

#[test]
fn test_compare_incremented_counter() {
    let counter = increment("F8", 0).unwrap();
    assert!(is(&counter).gt("A"));
    assert!(is(&counter).gt("00A"));
    assert!(is(&counter).eq("000F9"));
    assert_eq!(compare(&counter, "F9"), Ordering::Equal);
}

#[test]
fn test_padded_counters_sort_as_strings() {
    let counters: Vec<String> = (0u32..5000)
        .step_by(7)
        .map(|i| from_number(i, 3).unwrap())
        .collect();
    assert!(counters.windows(2).all(|w| w[0] < w[1]));
    assert!(counters.windows(2).all(|w| is(&w[0]).lt(&w[1])));
}

// =============================================================================
// COUNTER TYPE
// =============================================================================

#[test]
fn test_counter_sequence_matches_free_functions() {
    let mut expected = String::new();
    for counter in Counter::new().successors(2).take(300) {
        expected = increment(&expected, 2).unwrap();
        assert_eq!(counter.as_str(), expected);
    }
}

// =============================================================================
// ARITHMETIC LAWS
// =============================================================================

#[test]
fn test_laws_hold_for_edge_counters() {
    let counters = ["", "0", "0z", "zz", "0zzzzzzz", "10", "A", "000"];
    for counter in counters {
        for p in [0, 1, 3, 8] {
            let next = increment(counter, p).unwrap();
            if counter.is_empty() {
                // The first counter of a sequence is zero, like the empty one.
                assert!(is(&next).eq(counter), "{counter:?} pad {p}");
                assert!(decrement(&next, p).is_err(), "{counter:?} pad {p}");
            } else {
                assert!(is(&next).gt(counter), "{counter:?} pad {p}");
                let back = decrement(&next, p).unwrap();
                assert!(is(&back).eq(counter), "{counter:?} pad {p}");
            }

            let inverted = invert(counter, p).unwrap();
            assert_eq!(invert(&inverted, p).unwrap(), pad(counter, p).unwrap());

            let value = to_number(counter).unwrap();
            assert!(is(&from_biguint(&value, p)).eq(counter));
        }
    }
}
