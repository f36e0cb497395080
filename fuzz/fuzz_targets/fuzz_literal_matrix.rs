//! Fuzz target for the literal matrix.
//!
//! Arbitrary input either is rejected without touching the matrix, or round
//! trips through set, contains and unset under both deletion policies.

#![no_main]

use libfuzzer_sys::fuzz_target;
use posmatrix_core::{DeletionPolicy, LiteralMatrix};

const MAX_LEN: usize = 255;

fuzz_target!(|input: &str| {
    let key: Vec<char> = input.chars().collect();

    for policy in [DeletionPolicy::OccupancyCount, DeletionPolicy::RowEmptiness] {
        let mut matrix = LiteralMatrix::with_policy(MAX_LEN, policy);

        if matrix.set(&key).is_err() {
            assert!(matrix.is_empty());
            assert!(!matrix.contains(&key));
            continue;
        }

        assert!(matrix.contains(&key));
        matrix.unset(&key).expect("validated key");
        assert!(!matrix.contains(&key));
        assert!(matrix.is_empty());
    }
});
