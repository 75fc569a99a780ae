//! Per-query alignment of result columns to record fields.

use crate::catalog::RecordSchema;
use crate::error::{Result, RowBindError};

/// Target of one result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// Column is written to the field at this index.
    Field(usize),
    /// Column has no field in the record and is ignored.
    Unmapped,
}

impl Bound {
    /// Returns the field index, or None if unmapped.
    #[must_use]
    pub fn field_index(self) -> Option<usize> {
        match self {
            Bound::Field(index) => Some(index),
            Bound::Unmapped => None,
        }
    }
}

/// Binding of one executed query's columns to a record schema.
///
/// Holds one entry per actual result column, in result order. Rebuilt for
/// every execution since column order and presence may change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding {
    columns: Vec<String>,
    slots: Vec<Bound>,
}

impl ColumnBinding {
    /// Binds the actual column list of a query against `schema`.
    ///
    /// Columns unknown to the schema become [`Bound::Unmapped`]; schema
    /// fields absent from the result are simply never written.
    ///
    /// # Errors
    ///
    /// Returns a bind error if `columns` is empty.
    pub fn bind<S: AsRef<str>>(schema: &RecordSchema, columns: &[S]) -> Result<Self> {
        if columns.is_empty() {
            return Err(RowBindError::BindError(
                "Query returned no columns".into(),
            ));
        }

        let slots: Vec<Bound> = columns
            .iter()
            .map(|name| {
                schema
                    .field_index(name.as_ref())
                    .map_or(Bound::Unmapped, Bound::Field)
            })
            .collect();

        let binding = ColumnBinding {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            slots,
        };
        log::debug!(
            "bound {} columns to {} ({} unmapped)",
            binding.len(),
            schema.type_name(),
            binding.len() - binding.mapped_count()
        );
        Ok(binding)
    }

    /// Checks that every schema field has a column in this binding.
    ///
    /// # Errors
    ///
    /// Returns a bind error listing the columns the result is missing.
    pub fn ensure_complete(&self, schema: &RecordSchema) -> Result<()> {
        let missing: Vec<&str> = schema
            .fields()
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.slots.contains(&Bound::Field(*index)))
            .map(|(_, field)| field.column)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(RowBindError::BindError(format!(
                "Result is missing columns required by {}: {}",
                schema.type_name(),
                missing.join(", ")
            )))
        }
    }

    /// Gets the binding of the column at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Bound> {
        self.slots.get(position).copied()
    }

    /// Returns the actual column names, in result order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns an iterator over the bindings, in result order.
    pub fn iter(&self) -> impl Iterator<Item = Bound> + '_ {
        self.slots.iter().copied()
    }

    /// Returns the number of columns written to a field.
    #[must_use]
    pub fn mapped_count(&self) -> usize {
        self.slots.iter().filter(|b| matches!(b, Bound::Field(_))).count()
    }

    /// Returns the names of columns ignored by this binding.
    #[must_use]
    pub fn unmapped_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .zip(&self.slots)
            .filter(|(_, bound)| **bound == Bound::Unmapped)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Returns the number of result columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the binding has no columns (never true for a bound query).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
