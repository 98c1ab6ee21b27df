// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests use property-based testing to verify that conversion and validation
//! behave consistently across arbitrary inputs.

#![cfg(feature = "memory")]

use proptest::prelude::*;
use typedcfg::prelude::*;

// Narrowing succeeds exactly when the value fits in 32 bits
proptest! {
    #[test]
    fn test_require_int_matches_try_from(value in any::<i64>()) {
        match (require_int("k", value), i32::try_from(value)) {
            (Ok(narrowed), Ok(expected)) => prop_assert_eq!(narrowed, expected),
            (Err(err), Err(_)) => {
                let prefix = format!("k = {}", value);
                prop_assert!(err.is_validation());
                prop_assert!(err.to_string().starts_with(&prefix));
            }
            (got, expected) => prop_assert!(false, "got {:?}, expected {:?}", got, expected),
        }
    }
}

// Size suffixes are powers of 1024 and the original text is kept
proptest! {
    #[test]
    fn test_size_suffix_multiplies(base in 0i64..1024, index in 0usize..4, lower in any::<bool>()) {
        let suffix = ["k", "m", "g", "t"][index];
        let suffix = if lower { suffix.to_string() } else { suffix.to_uppercase() };
        let text = format!("{}{}b", base, suffix);

        let size = SizeInBytes::parse(&text).unwrap();
        prop_assert_eq!(size.size(), base << (10 * (index as u32 + 1)));
        prop_assert_eq!(size.input(), text.as_str());
    }
}

// Plain numbers parse as bytes
proptest! {
    #[test]
    fn test_size_plain_number(n in any::<i64>()) {
        let size = SizeInBytes::parse(&n.to_string()).unwrap();
        prop_assert_eq!(size.size(), n);
        prop_assert_eq!(size.is_negative(), n < 0);
    }
}

// min accepts exactly the values that are not below it
proptest! {
    #[test]
    fn test_require_min_boundary(min in any::<i32>(), value in any::<i32>()) {
        let result = require_min(min)("k", &value);
        prop_assert_eq!(result.is_ok(), value >= min);
    }
}

// The first failing assertion decides the error
proptest! {
    #[test]
    fn test_first_failure_reported(value in any::<i64>(), min in any::<i64>(), max in any::<i64>()) {
        let store = MemoryStore::new();
        set_long(&store, "k", value, &[]).unwrap();

        let result = get_long(&store, "k", 0, &[&require_min(min), &require_max(max)]);
        if value < min {
            let message = result.unwrap_err().to_string();
            prop_assert!(message.contains("< min"), "{}", message);
        } else if value > max {
            let message = result.unwrap_err().to_string();
            prop_assert!(message.contains("> max"), "{}", message);
        } else {
            prop_assert_eq!(result.unwrap(), value);
        }
    }
}

// Whatever a setter stores, the matching getter reads back
proptest! {
    #[test]
    fn test_memory_store_long_round_trip(value in any::<i64>(), default in any::<i64>()) {
        let store = MemoryStore::new();
        set_long(&store, "raft.snapshot.index", value, &[]).unwrap();
        prop_assert_eq!(get_long(&store, "raft.snapshot.index", default, &[]).unwrap(), value);
    }
}

// Durations with a unit symbol keep their number and unit
proptest! {
    #[test]
    fn test_duration_parse_with_symbol(n in 0i64..1_000_000, index in 0usize..7) {
        let unit = TimeUnit::ALL[index];
        let text = format!("{}{}", n, unit.abbreviation());

        let duration = TimeDuration::parse(&text, TimeUnit::Milliseconds).unwrap();
        prop_assert_eq!(duration.duration(), n);
        prop_assert_eq!(duration.unit(), unit);
        prop_assert_eq!(duration.to_string(), text);
    }
}

// Negative durations never pass the duration getter
proptest! {
    #[test]
    fn test_negative_duration_rejected(n in 1i64..1_000_000) {
        let store = MemoryStore::new();
        store.set_raw_text("raft.rpc.timeout", format!("-{}ms", n)).unwrap();

        let result = get_time_duration(
            &store,
            "raft.rpc.timeout",
            TimeDuration::new(1, TimeUnit::Seconds),
            &[],
        );
        prop_assert!(result.unwrap_err().is_validation());
    }
}
