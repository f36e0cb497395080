//! `posmatrix` Configuration Module
//!
//! Provides configuration file support via `posmatrix.toml`, environment
//! variables, and builders for the stores it describes.
//!
//! # Priority (highest to lowest)
//!
//! 1. Environment variables (`POSMATRIX_*`, `__` separates sections)
//! 2. Configuration file (`posmatrix.toml`)
//! 3. Default values
//!
//! ```toml
//! [literal]
//! max_str_len = 253
//! deletion = "row_emptiness"
//!
//! [digest]
//! backing = "packed"
//! hasher = "xxh64"
//! seed = 0
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::digest::{FxStringHasher, Xxh64Hasher};
use crate::matrix::{
    BoolGrid, DeletionPolicy, DigestMatrix, LiteralMatrix, MembershipSet, PackedGrid,
};

pub use crate::matrix::literal::MAX_LITERAL_DEPTH;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Configuration key that failed validation.
        key: String,
        /// Validation error message.
        message: String,
    },

    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),
}

/// Backing storage of the digest store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridBacking {
    /// One `bool` per cell.
    #[default]
    Bool,
    /// One bit per cell.
    Packed,
}

/// 64-bit hasher of the digest store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HasherKind {
    /// XXH64 with the configured seed.
    #[default]
    Xxh64,
    /// rustc-hash `FxHasher` (seed ignored).
    Fx,
}

/// Literal store configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiteralConfig {
    /// Longest key accepted, i.e. number of length layers.
    pub max_str_len: usize,
    /// Deletion policy.
    pub deletion: DeletionPolicy,
}

impl Default for LiteralConfig {
    fn default() -> Self {
        Self {
            // Fits a DNS subdomain name (253 characters) with two to spare.
            max_str_len: 255,
            deletion: DeletionPolicy::OccupancyCount,
        }
    }
}

/// Digest store configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Grid backing.
    pub backing: GridBacking,
    /// Hash function.
    pub hasher: HasherKind,
    /// XXH64 seed.
    pub seed: u64,
}

/// Main `posmatrix` configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatrixConfig {
    /// Literal store configuration.
    pub literal: LiteralConfig,
    /// Digest store configuration.
    pub digest: DigestConfig,
}

impl MatrixConfig {
    /// Loads configuration from default sources.
    ///
    /// Priority: defaults < file < environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path("posmatrix.toml")
    }

    /// Loads configuration from a specific file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration parsing fails.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("POSMATRIX_").split("__"));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        tracing::debug!(path = %path.as_ref().display(), ?config, "Loaded configuration");
        Ok(config)
    }

    /// Loads configuration from a file that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::FileNotFound`] if `path` does not exist, or a
    /// parse error.
    pub fn load_required<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        Self::load_from_path(path)
    }

    /// Creates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml_str));

        figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let depth = self.literal.max_str_len;
        if !(1..=MAX_LITERAL_DEPTH).contains(&depth) {
            return Err(ConfigError::InvalidValue {
                key: "literal.max_str_len".to_string(),
                message: format!("value {depth} is out of range [1, {MAX_LITERAL_DEPTH}]"),
            });
        }

        if self.digest.hasher == HasherKind::Fx && self.digest.seed != 0 {
            return Err(ConfigError::InvalidValue {
                key: "digest.seed".to_string(),
                message: "seed is only supported by the xxh64 hasher".to_string(),
            });
        }

        Ok(())
    }

    /// Builds an empty literal store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build_literal(&self) -> Result<LiteralMatrix, ConfigError> {
        self.validate()?;
        Ok(LiteralMatrix::with_policy(
            self.literal.max_str_len,
            self.literal.deletion,
        ))
    }

    /// Builds an empty digest store with the configured backing and hasher.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build_digest(&self) -> Result<Box<dyn MembershipSet<Key = str>>, ConfigError> {
        self.validate()?;

        let xxh64 = Xxh64Hasher::with_seed(self.digest.seed);
        let store: Box<dyn MembershipSet<Key = str>> = match (self.digest.backing, self.digest.hasher)
        {
            (GridBacking::Bool, HasherKind::Xxh64) => {
                Box::new(DigestMatrix::<BoolGrid, _>::with_hasher(xxh64))
            }
            (GridBacking::Packed, HasherKind::Xxh64) => {
                Box::new(DigestMatrix::<PackedGrid, _>::with_hasher(xxh64))
            }
            (GridBacking::Bool, HasherKind::Fx) => {
                Box::new(DigestMatrix::<BoolGrid, _>::with_hasher(FxStringHasher))
            }
            (GridBacking::Packed, HasherKind::Fx) => {
                Box::new(DigestMatrix::<PackedGrid, _>::with_hasher(FxStringHasher))
            }
        };

        Ok(store)
    }

    /// Serializes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
