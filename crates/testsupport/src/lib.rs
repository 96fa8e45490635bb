//! Test support utilities for the catalog workspace.
//!
//! This crate provides:
//! - Record fixtures with known titles, authors, genres and years
//! - Property-based test generators for records
//! - Assertion helpers for comparing query results
//!
//! # Example Usage
//!
//! ```
//! use testsupport::prelude::*;
//!
//! let records = sample_catalog_records();
//! assert_eq!(record_ids(&records).len(), records.len());
//! ```

pub mod assertions;
pub mod fixtures;
pub mod proptest_generators;

/// Convenient re-exports for common testing patterns.
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fixtures::*;
}
