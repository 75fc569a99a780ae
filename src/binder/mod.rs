//! Binder module for aligning query results with record schemas.
//!
//! The binder resolves each actual result column against a
//! [`RecordSchema`](crate::catalog::RecordSchema), producing a per-position
//! [`ColumnBinding`] used by the row reader.

mod binding;

pub use binding::{Bound, ColumnBinding};
