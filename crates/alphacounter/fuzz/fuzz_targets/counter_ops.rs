//! Fuzz target for counter operations
//!
//! Feeds arbitrary text to every operation and checks that none of them
//! panic, and that the arithmetic laws hold whenever the input is a valid
//! counter.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = str::from_utf8(data) else {
        return;
    };
    // Long inputs only slow the fuzzer down; the code paths are the same.
    if input.len() > 256 {
        return;
    }

    let pad = input.len() % 8;

    let _ = alphacounter::from_text(input, pad);
    let _ = alphacounter::compare(input, "0");

    let Ok(next) = alphacounter::increment(input, pad) else {
        assert!(!alphacounter::is_valid(input));
        return;
    };

    if input.is_empty() {
        // The empty counter starts the sequence at zero.
        assert!(alphacounter::is(&next).eq("0"));
        assert!(alphacounter::decrement(&next, pad).is_err());
    } else {
        assert!(alphacounter::is(&next).gt(input));
        let back = alphacounter::decrement(&next, pad).expect("successor is non-zero");
        assert!(alphacounter::is(&back).eq(input));
    }

    let inverted = alphacounter::invert(input, pad).expect("valid counter inverts");
    let restored = alphacounter::invert(&inverted, pad).expect("inverted counter is valid");
    assert_eq!(restored, alphacounter::pad(input, pad).expect("valid counter pads"));

    let value = alphacounter::to_number(input).expect("valid counter decodes");
    assert!(alphacounter::is(&alphacounter::from_biguint(&value, pad)).eq(input));
});
