//! # `posmatrix` Core
//!
//! Positional matrices: compact membership sets for short name-like strings.
//!
//! A positional matrix never stores keys. It records, for every position of an
//! encoded key, which alphabet symbol occurs there, one flag per
//! `(position, symbol)` cell. Three stores share that model:
//!
//! - [`HashMatrix`]: XXH64 digest rendered as up to 16 hex digits, one `bool`
//!   per cell. Constant size, lossy.
//! - [`PackedHashMatrix`]: the same grid packed one bit per cell.
//! - [`LiteralMatrix`]: the key's own characters, one layer per key length,
//!   for keys over `-./0-9a-z` up to a configured length.
//!
//! ## Quick Start
//!
//! ```rust
//! use posmatrix_core::{HashMatrix, LiteralMatrix};
//!
//! let mut hashed = HashMatrix::new();
//! hashed.set("kube-system/coredns")?;
//! assert!(hashed.contains("kube-system/coredns"));
//!
//! let mut literal = LiteralMatrix::new(253);
//! let key: Vec<char> = "default/nginx".chars().collect();
//! literal.set(&key)?;
//! assert!(literal.contains(&key));
//! literal.unset(&key)?;
//! assert!(!literal.contains(&key));
//! # Ok::<(), posmatrix_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
// Cell offsets are bounded by the grid shape.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod alphabet;
pub mod config;
pub mod digest;
pub mod error;
pub mod matrix;

pub use alphabet::Alphabet;
pub use config::{ConfigError, MatrixConfig};
pub use digest::{DigestEncoder, HexDigest, StringHasher, Xxh64Hasher};
pub use error::{Error, Result};
pub use matrix::{
    BitGrid, DeletionPolicy, DigestMatrix, HashMatrix, LiteralMatrix, MembershipSet,
    PackedHashMatrix,
};
