//! Row materialization.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::binder::ColumnBinding;
use crate::catalog::{Catalog, Record, RecordSchema};
use crate::coerce::coerce_with;
use crate::error::{Result, RowBindError};
use crate::executor::{Limit, ReaderConfig};
use crate::storage::{Cell, Cursor, CursorGuard};
use crate::types::{FieldValue, Value};

/// Reads cursor rows into records of type `R`.
///
/// Holds the schema of `R` (built once per process through
/// [`Catalog::global`]) and the reader configuration. The column binding is
/// rebuilt for every cursor.
pub struct RowReader<R: Record> {
    schema: Arc<RecordSchema>,
    config: ReaderConfig,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RowReader<R> {
    /// Creates a reader with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns a shape or schema error if `R` is not a valid record shape.
    pub fn new() -> Result<Self> {
        Self::with_config(ReaderConfig::default())
    }

    /// Creates a reader with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a shape or schema error if `R` is not a valid record shape.
    pub fn with_config(config: ReaderConfig) -> Result<Self> {
        Self::with_catalog(Catalog::global(), config)
    }

    /// Creates a reader whose schema is resolved through `catalog`.
    ///
    /// # Errors
    ///
    /// Returns a shape or schema error if `R` is not a valid record shape.
    pub fn with_catalog(catalog: &Catalog, config: ReaderConfig) -> Result<Self> {
        Ok(RowReader {
            schema: catalog.schema_of::<R>()?,
            config,
            _record: PhantomData,
        })
    }

    /// Returns the record schema.
    #[must_use]
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Returns the reader configuration.
    #[must_use]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Replaces the contents of `dest` with the cursor's rows, up to the
    /// configured limit.
    ///
    /// # Errors
    ///
    /// Returns a bind, coercion, or cursor error. On error `dest` is left
    /// empty and the cursor is closed.
    pub fn read_all<C: Cursor>(&self, cursor: C, dest: &mut Vec<R>) -> Result<()> {
        self.read_limited(cursor, dest, self.config.limit)
    }

    /// Replaces the contents of `dest` with at most `limit` rows.
    ///
    /// # Errors
    ///
    /// See [`RowReader::read_all`].
    pub fn read_limited<C: Cursor>(&self, cursor: C, dest: &mut Vec<R>, limit: Limit) -> Result<()> {
        dest.clear();
        let result = self.fill(CursorGuard::new(cursor), dest, limit);
        if result.is_err() {
            dest.clear();
        }
        result
    }

    /// Reads all rows into a new vector.
    ///
    /// # Errors
    ///
    /// See [`RowReader::read_all`].
    pub fn fetch_all<C: Cursor>(&self, cursor: C) -> Result<Vec<R>> {
        let mut rows = Vec::new();
        self.read_all(cursor, &mut rows)?;
        Ok(rows)
    }

    /// Reads the first row into `slot`.
    ///
    /// Returns `true` if a row was found. With no rows, returns `false` and
    /// leaves `slot` untouched.
    ///
    /// # Errors
    ///
    /// Returns a bind, coercion, or cursor error; `slot` is untouched.
    pub fn read_one<C: Cursor>(&self, cursor: C, slot: &mut R) -> Result<bool> {
        let mut staging = Vec::with_capacity(1);
        self.read_limited(cursor, &mut staging, Limit::Rows(1))?;
        match staging.pop() {
            Some(record) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn fill<C: Cursor>(&self, mut guard: CursorGuard<C>, dest: &mut Vec<R>, limit: Limit) -> Result<()> {
        let columns = guard.columns()?;
        let binding = ColumnBinding::bind(&self.schema, &columns[..])?;
        if self.config.require_all_columns {
            binding.ensure_complete(&self.schema)?;
        }

        let mut cells: Vec<Cell> = vec![None; binding.len()];
        while !limit.reached(dest.len()) && guard.advance()? {
            guard.scan(&mut cells)?;
            dest.push(self.materialize(&binding, &cells)?);
            log::trace!("materialized row {} of {}", dest.len(), self.schema.type_name());
        }

        guard.close()?;
        log::debug!("read {} rows into {}", dest.len(), self.schema.type_name());
        Ok(())
    }

    /// Builds one record from a scanned row. NULL cells and unmapped columns are skipped.
    fn materialize(&self, binding: &ColumnBinding, cells: &[Cell]) -> Result<R> {
        let mut record = R::default();

        for ((bound, cell), column) in binding.iter().zip(cells).zip(binding.columns()) {
            let (Some(index), Some(text)) = (bound.field_index(), cell.as_deref()) else {
                continue;
            };
            let field = self.schema.field(index).ok_or_else(|| {
                RowBindError::ShapeError(format!(
                    "Binding refers to field {index} of {}",
                    self.schema.type_name()
                ))
            })?;

            let value = coerce_with(Some(text), field.tag, &self.config).map_err(|e| {
                log::debug!("column '{column}' -> field '{}' failed: {e}", field.name);
                e
            })?;
            record.assign(index, value)?;
        }

        Ok(record)
    }
}

/// Reads the first cell of the first row as a single value.
///
/// Returns `None` if the cursor has no rows. A NULL cell is not an error,
/// even for a `String` target: it yields the zero value of `T` (or `None`
/// inside it, for an optional `T`). Read into `Option<T>` to tell NULL
/// apart from a stored zero value.
///
/// # Errors
///
/// Returns a bind error if the query has no columns, or a coercion or
/// cursor error.
pub fn read_value<T: FieldValue, C: Cursor>(cursor: C, config: &ReaderConfig) -> Result<Option<T>> {
    let mut guard = CursorGuard::new(cursor);
    let columns = guard.columns()?;
    if columns.is_empty() {
        return Err(RowBindError::BindError(
            "Query returned no columns".into(),
        ));
    }

    if !guard.advance()? {
        guard.close()?;
        return Ok(None);
    }

    let mut cells: Vec<Cell> = vec![None; columns.len()];
    guard.scan(&mut cells)?;
    let value = match coerce_with(cells[0].as_deref(), T::TYPE, config)? {
        Value::Null => T::default(),
        present => T::from_value(present)?,
    };

    guard.close()?;
    Ok(Some(value))
}
