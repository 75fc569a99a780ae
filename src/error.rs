//! Error types for rowbind operations.

use thiserror::Error;

/// Result type alias using [`RowBindError`].
pub type Result<T> = std::result::Result<T, RowBindError>;

/// Boxed error raised by a [`Cursor`](crate::storage::Cursor) implementation.
pub type CursorSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error types for record mapping operations.
#[derive(Debug, Error)]
pub enum RowBindError {
    /// Destination is not a usable record shape.
    #[error("Shape error: {0}")]
    ShapeError(String),

    /// Record schema is invalid (missing column name, unsupported type, duplicate column).
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Result columns cannot be bound to the schema.
    #[error("Bind error: {0}")]
    BindError(String),

    /// Cell text could not be converted to the field's type.
    #[error("Coercion error: cannot convert {input:?} to {target}: {reason}")]
    CoercionError {
        input: String,
        target: &'static str,
        reason: String,
    },

    /// Failure surfaced by the underlying cursor, carried verbatim.
    #[error("Cursor error: {0}")]
    CursorError(#[source] CursorSource),

    /// Configuration rejected by `validate()`.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl RowBindError {
    /// Wraps an error raised by a cursor.
    pub fn cursor<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        RowBindError::CursorError(Box::new(err))
    }

    /// Builds a coercion error for the given input and target type name.
    pub(crate) fn coercion(input: &str, target: &'static str, reason: impl ToString) -> Self {
        RowBindError::CoercionError {
            input: input.to_string(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Returns true for errors caused by the data rather than the record definition.
    #[must_use]
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            RowBindError::CoercionError { .. } | RowBindError::CursorError(_)
        )
    }
}
