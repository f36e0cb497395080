//! Random key generation shared by the matrix tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// DNS-subdomain characters plus `/` as the namespace separator.
pub(crate) const NAME_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-', '.',
    '/',
];

pub(crate) fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(crate) fn random_chars(rng: &mut StdRng, len: usize) -> Vec<char> {
    (0..len)
        .map(|_| NAME_CHARS[rng.gen_range(0..NAME_CHARS.len())])
        .collect()
}

pub(crate) fn random_name(rng: &mut StdRng, len: usize) -> String {
    random_chars(rng, len).into_iter().collect()
}
