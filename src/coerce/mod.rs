//! Field coercion: nullable cell text to native values.
//!
//! Rules are applied in order:
//!
//! 1. An absent cell (SQL NULL) yields [`Value::Null`] for every type; the
//!    caller leaves the field untouched.
//! 2. Optional tags coerce exactly like the wrapped type.
//! 3. `TIMESTAMP` uses the fixed `YYYY-MM-DD HH:MM:SS` layout in UTC, with
//!    the zero-date sentinel mapped to the minimum instant.
//! 4. `BOOL` is false for `"0"` and `""`, true for anything else.
//! 5. `INT64` and `UINT64` parse base-10 64-bit integers.
//! 6. `STRING` is copied verbatim.
//! 7. Any other type is a schema error.

mod datetime;

pub use datetime::{parse_timestamp, ZERO_DATE_SENTINEL};

use crate::error::{Result, RowBindError};
use crate::executor::ReaderConfig;
use crate::types::{DataType, TypeTag, Value};

/// Coerces one cell using the default [`ReaderConfig`].
///
/// # Errors
///
/// Returns a coercion error for malformed numeric or timestamp text, and a
/// schema error if `tag` names an unsupported type.
pub fn coerce(cell: Option<&str>, tag: TypeTag) -> Result<Value> {
    coerce_with(cell, tag, &ReaderConfig::default())
}

/// Coerces one cell under the given configuration.
///
/// # Errors
///
/// See [`coerce`].
pub fn coerce_with(cell: Option<&str>, tag: TypeTag, config: &ReaderConfig) -> Result<Value> {
    let Some(text) = cell else {
        return Ok(Value::Null);
    };

    match tag.data_type {
        DataType::Timestamp => {
            parse_timestamp(text, config.remap_zero_date).map(Value::Timestamp)
        }
        DataType::Bool => Ok(Value::Bool(parse_bool(text))),
        DataType::Int64 => parse_int64(text).map(Value::Int64),
        DataType::UInt64 => parse_uint64(text).map(Value::UInt64),
        DataType::String => Ok(Value::String(text.to_string())),
        DataType::Unsupported(name) => Err(RowBindError::SchemaError(format!(
            "Unsupported field type {name}"
        ))),
    }
}

/// Lenient truthiness: only `"0"` and the empty string are false.
#[must_use]
pub fn parse_bool(text: &str) -> bool {
    !(text.is_empty() || text == "0")
}

/// Parses a base-10 signed 64-bit integer; leading zeros are accepted.
///
/// # Errors
///
/// Returns a coercion error on empty or non-numeric text, or overflow.
pub fn parse_int64(text: &str) -> Result<i64> {
    text.parse::<i64>()
        .map_err(|e| RowBindError::coercion(text, "INT64", e))
}

/// Parses a base-10 unsigned 64-bit integer.
///
/// # Errors
///
/// Returns a coercion error on empty, negative, or non-numeric text, or overflow.
pub fn parse_uint64(text: &str) -> Result<u64> {
    if text.starts_with('+') {
        return Err(RowBindError::coercion(text, "UINT64", "invalid digit found in string"));
    }
    text.parse::<u64>()
        .map_err(|e| RowBindError::coercion(text, "UINT64", e))
}
