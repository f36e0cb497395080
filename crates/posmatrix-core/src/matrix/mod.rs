//! Positional membership matrices.
//!
//! A positional matrix records which symbol occurs at which position of an
//! encoded key, one flag per `(position, symbol)` cell, without storing the
//! keys themselves:
//!
//! - [`DigestMatrix`]: keys are reduced to an XXH64 digest rendered as hex, so
//!   the grid has a constant 16 rows regardless of input length. Lossy.
//! - [`LiteralMatrix`]: keys are encoded character by character, one layer per
//!   key length up to a configured maximum.
//!
//! # Thread-Safety
//!
//! None of the stores synchronize internally. Mutation needs `&mut self`;
//! callers sharing a store across threads must guard the whole store with a
//! single lock, since removal reads and writes several rows at once.

pub mod grid;
pub mod hashed;
pub mod literal;
pub mod pretty;
#[cfg(test)]
mod pretty_tests;
#[cfg(test)]
mod test_support;

pub use grid::{BitGrid, BoolGrid, PackedGrid};
pub use hashed::{DigestMatrix, HashMatrix, PackedHashMatrix};
pub use literal::{DeletionPolicy, LiteralMatrix};
pub use pretty::{GridView, LayerView};

use crate::error::Result;

/// Insert, query and remove keys of one store.
///
/// `contains` never fails: any key that cannot be encoded is simply not a
/// member.
pub trait MembershipSet {
    /// Key type accepted by the store (`str` or `[char]`).
    type Key: ?Sized;

    /// Records `key`.
    ///
    /// # Errors
    ///
    /// Returns an input error if the store cannot encode `key`.
    fn set(&mut self, key: &Self::Key) -> Result<()>;

    /// Returns true if every cell required by `key` is set.
    fn contains(&self, key: &Self::Key) -> bool;

    /// Removes `key`.
    ///
    /// # Errors
    ///
    /// Returns an input error if the store cannot encode `key`.
    fn unset(&mut self, key: &Self::Key) -> Result<()>;
}
