//! Digest encoder: reduces a string to at most 16 lowercase hex digits.
//!
//! The digest stores never see the input string itself. Each input is hashed
//! to a `u64` by a [`StringHasher`] and the value is rendered as the minimal
//! lowercase hexadecimal numeral (`0` renders as `"0"`), which becomes the
//! row key sequence.
//!
//! # Example
//!
//! ```rust
//! use posmatrix_core::digest::HexDigest;
//!
//! assert_eq!(HexDigest::from_u64(0xbeef).as_str(), "beef");
//! assert_eq!(HexDigest::from_u64(0).as_str(), "0");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Maximum number of hex digits in a rendered `u64`.
pub const DIGEST_WIDTH: usize = 16;

/// A `u64` rendered as lowercase hex digits, stored inline.
///
/// Holds between 1 and [`DIGEST_WIDTH`] digits, or none for the digest of
/// the empty string.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HexDigest {
    digits: [u8; DIGEST_WIDTH],
    len: u8,
}

impl HexDigest {
    /// The digest of the empty string: no rows at all.
    pub const EMPTY: Self = Self {
        digits: [0; DIGEST_WIDTH],
        len: 0,
    };

    /// Renders `value` as its minimal lowercase hex numeral.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        let significant_bits = u64::BITS - value.leading_zeros();
        let len = (significant_bits as usize).div_ceil(4).max(1);

        let mut digits = [0u8; DIGEST_WIDTH];
        let mut rest = value;
        for slot in digits[..len].iter_mut().rev() {
            let nibble = (rest & 0xf) as u8;
            *slot = if nibble < 10 {
                b'0' + nibble
            } else {
                b'a' + (nibble - 10)
            };
            rest >>= 4;
        }

        Self {
            digits,
            len: len as u8,
        }
    }

    /// Number of digits (rows touched by this key).
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    /// True only for the digest of the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digits as ASCII bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.digits[..self.len()]
    }

    /// The digits as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Digits are always ASCII.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Iterates the digits as characters, row 0 first.
    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.as_bytes().iter().map(|&b| char::from(b))
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HexDigest").field(&self.as_str()).finish()
    }
}

/// 64-bit string hashing primitive consumed by the digest stores.
///
/// Only determinism and a good spread are required. Swapping the hasher
/// changes false-positive rates, never the structure's behaviour.
pub trait StringHasher {
    /// Hashes `s` to 64 bits.
    fn hash64(&self, s: &str) -> u64;
}

/// XXH64 over the UTF-8 bytes of the input.
///
/// With the default seed of 0 this matches the reference XXH64 digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh64Hasher {
    seed: u64,
}

impl Xxh64Hasher {
    /// Creates a hasher with an explicit seed.
    #[must_use]
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl StringHasher for Xxh64Hasher {
    #[inline]
    fn hash64(&self, s: &str) -> u64 {
        xxhash_rust::xxh64::xxh64(s.as_bytes(), self.seed)
    }
}

/// `FxHasher` from rustc-hash. Faster, weaker spread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FxStringHasher;

impl StringHasher for FxStringHasher {
    #[inline]
    fn hash64(&self, s: &str) -> u64 {
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        hasher.finish()
    }
}

/// Adapts any `Fn(&str) -> u64` into a [`StringHasher`].
///
/// ```rust
/// use posmatrix_core::digest::{HashFn, StringHasher};
///
/// let by_length = HashFn(|s: &str| s.len() as u64);
/// assert_eq!(by_length.hash64("abc"), 3);
/// ```
#[derive(Clone, Copy)]
pub struct HashFn<F>(pub F);

impl<F: Fn(&str) -> u64> StringHasher for HashFn<F> {
    #[inline]
    fn hash64(&self, s: &str) -> u64 {
        (self.0)(s)
    }
}

impl<F> fmt::Debug for HashFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashFn(..)")
    }
}

/// Turns strings into row key sequences.
#[derive(Debug, Clone, Default)]
pub struct DigestEncoder<H = Xxh64Hasher> {
    hasher: H,
}

impl<H: StringHasher> DigestEncoder<H> {
    /// Creates an encoder around `hasher`.
    #[must_use]
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Returns the underlying hasher.
    #[must_use]
    pub const fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Encodes `s`; the empty string encodes to [`HexDigest::EMPTY`].
    #[must_use]
    pub fn encode(&self, s: &str) -> HexDigest {
        if s.is_empty() {
            return HexDigest::EMPTY;
        }
        HexDigest::from_u64(self.hasher.hash64(s))
    }
}
