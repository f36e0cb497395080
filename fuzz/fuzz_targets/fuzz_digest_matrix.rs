//! Fuzz target for the digest matrices.
//!
//! Any string must survive set, contains and unset on a fresh matrix, and a
//! lone key must leave both backings empty once removed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use posmatrix_core::{HashMatrix, PackedHashMatrix};

fuzz_target!(|input: &str| {
    let mut dense = HashMatrix::new();
    let mut packed = PackedHashMatrix::new();

    dense.set(input).expect("set never fails");
    packed.set(input).expect("set never fails");

    let expected = !input.is_empty();
    assert_eq!(dense.contains(input), expected);
    assert_eq!(packed.contains(input), expected);

    dense.unset(input).expect("unset never fails");
    packed.unset(input).expect("unset never fails");

    assert!(!dense.contains(input));
    assert!(!packed.contains(input));
    assert!(dense.is_empty());
    assert!(packed.is_empty());
});
