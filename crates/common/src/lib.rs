
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacity a fresh hash table starts with.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// `len / capacity` ratio above which a hash table doubles.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Canonical error type shared across the catalog crates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("record {0} is already indexed")]
    DuplicateId(u32),
    #[error("catalog lock poisoned")]
    LockPoisoned,
}

/// Result alias that carries a `CatalogError`.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Sizing knobs for the hash tables backing the catalog.
///
/// # Example
/// ```
/// use common::Config;
///
/// let config = Config::builder()
///     .initial_capacity(64)
///     .load_factor(0.5)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, bon::Builder)]
pub struct Config {
    /// Number of buckets allocated up front.
    #[builder(default = DEFAULT_INITIAL_CAPACITY)]
    pub initial_capacity: usize,
    /// Threshold that triggers doubling; must lie in `(0, 1]`.
    #[builder(default = DEFAULT_LOAD_FACTOR)]
    pub load_factor: f64,
}

impl Config {
    /// Reject configurations a hash table cannot run with.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.initial_capacity == 0 {
            return Err(CatalogError::InvalidArgument(
                "initial capacity must be at least 1".into(),
            ));
        }
        if !(self.load_factor > 0.0 && self.load_factor <= 1.0) {
            return Err(CatalogError::InvalidArgument(format!(
                "load factor must be in (0, 1], got {}",
                self.load_factor
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

/// Convenient re-exports for downstream crates.
pub mod prelude {
    pub use crate::{CatalogError, CatalogResult, Config};
    pub use types::{Record, RecordId, ResourceType};
}
