//! rowbind - typed records from tabular query results.
//!
//! Maps rows of nullable text cells, identified by column name, onto
//! statically shaped record types.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowbind::{record, MemoryCursor, RowReader, Timestamp};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct User {
//!         pub id: i64 => "id",
//!         pub name: Option<String> => "name",
//!         pub created_at: Timestamp => "created_at",
//!     }
//! }
//!
//! let cursor = MemoryCursor::new(["created_at", "id"])
//!     .with_row([Some("0000-00-00 00:00:00"), Some("7")]);
//!
//! let reader = RowReader::<User>::new()?;
//! let mut users = Vec::new();
//! reader.read_all(cursor, &mut users)?;
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! Record shape ──► catalog (RecordSchema, cached per type)
//!                     │
//! Cursor columns ──► binder (ColumnBinding, per query)
//!                     │
//! Cursor rows ─────► coerce (cell text -> Value) ──► executor (RowReader)
//!                                                         │
//!                                                  Vec<R> / slot
//! ```

pub mod binder;
pub mod catalog;
pub mod coerce;
pub mod error;
pub mod executor;
pub mod storage;
pub mod types;

mod macros;

pub use binder::{Bound, ColumnBinding};
pub use catalog::{Catalog, FieldDef, Record, RecordSchema};
pub use coerce::{coerce, coerce_with};
pub use error::{Result, RowBindError};
pub use executor::{read_value, Limit, ReaderConfig, RowReader};
pub use storage::{Cell, Cursor, CsvCursor, CsvCursorConfig, MemoryCursor};
pub use types::{DataType, FieldValue, Timestamp, TypeTag, Value};
