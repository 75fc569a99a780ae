//! Executor module for materializing cursor rows into records.
//!
//! [`RowReader`] drives a [`Cursor`](crate::storage::Cursor) through the
//! binder and coercion engine and appends finished records to a
//! destination. Each call consumes its cursor:
//!
//! ```text
//! Idle -> Reading -> Done
//!            |
//!            +-----> Failed
//! ```

mod reader;

pub use reader::{read_value, RowReader};

use serde::{Deserialize, Serialize};

/// Maximum number of rows to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Limit {
    /// Read until the cursor is exhausted.
    #[default]
    Unbounded,
    /// Stop after this many rows.
    Rows(usize),
}

impl Limit {
    /// Returns true once `count` rows satisfy the limit.
    #[must_use]
    pub fn reached(self, count: usize) -> bool {
        match self {
            Limit::Unbounded => false,
            Limit::Rows(max) => count >= max,
        }
    }
}

/// Configuration for the row reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Map `0000-00-00 00:00:00` to the minimum timestamp (default: true).
    pub remap_zero_date: bool,
    /// Fail binding when the result lacks a schema column (default: false).
    pub require_all_columns: bool,
    /// Row limit for `read_all` (default: unbounded).
    pub limit: Limit,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            remap_zero_date: true,
            require_all_columns: false,
            limit: Limit::Unbounded,
        }
    }
}

impl ReaderConfig {
    /// Creates a new reader configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the zero-date sentinel is remapped.
    #[must_use]
    pub fn with_remap_zero_date(mut self, remap: bool) -> Self {
        self.remap_zero_date = remap;
        self
    }

    /// Sets whether every schema column must be present in the result.
    #[must_use]
    pub fn with_require_all_columns(mut self, require: bool) -> Self {
        self.require_all_columns = require;
        self
    }

    /// Sets the default row limit.
    #[must_use]
    pub fn with_limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }
}
