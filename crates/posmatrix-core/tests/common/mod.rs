//! Common test utilities for posmatrix-core integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// DNS subdomain characters with `/` as the namespace separator.
pub const KUBERNETES_NAME_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789-./";

/// Deterministic RNG for reproducible runs.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Random string of `len` characters drawn from `chars`.
pub fn random_string(rng: &mut StdRng, len: usize, chars: &str) -> String {
    let pool: Vec<char> = chars.chars().collect();
    (0..len).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

/// `count` random names with lengths in `1..=max_len`.
pub fn random_names(rng: &mut StdRng, count: usize, max_len: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            random_string(rng, len, KUBERNETES_NAME_CHARS)
        })
        .collect()
}
