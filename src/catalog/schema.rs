//! Record shapes and the schemas derived from them.

use std::collections::HashMap;

use crate::error::{Result, RowBindError};
use crate::types::{TypeTag, Value};

/// A statically shaped record that query rows can be materialized into.
///
/// Usually generated by the [`record!`](crate::record) macro. Manual
/// implementations must keep `fields()` and `assign()` in agreement: index
/// `i` passed to `assign` refers to the `i`-th entry of `fields()`.
pub trait Record: Default + 'static {
    /// Returns the ordered field descriptors of this shape.
    fn fields() -> Vec<FieldDef>;

    /// Stores a coerced value into the field at `index`.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `index` is not a field of this record, or
    /// the error produced while converting `value` into the field type.
    fn assign(&mut self, index: usize, value: Value) -> Result<()>;
}

/// Definition of a single record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Rust field name.
    pub name: &'static str,
    /// Column name the field is read from.
    pub column: &'static str,
    /// Declared field type.
    pub tag: TypeTag,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub const fn new(name: &'static str, column: &'static str, tag: TypeTag) -> Self {
        FieldDef { name, column, tag }
    }
}

/// Validated column mapping for one record shape.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// Rust type name of the record.
    type_name: &'static str,
    /// Ordered field definitions.
    fields: Vec<FieldDef>,
    /// Column name -> field index.
    columns: HashMap<&'static str, usize>,
}

impl RecordSchema {
    /// Builds a schema from a shape's field list.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the shape declares no fields, and a schema
    /// error if a field has an empty column name, a duplicate column name,
    /// or a type with no coercion rule.
    pub fn new(type_name: &'static str, fields: Vec<FieldDef>) -> Result<Self> {
        if fields.is_empty() {
            return Err(RowBindError::ShapeError(format!(
                "Record '{type_name}' declares no fields"
            )));
        }

        let mut columns = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if field.column.is_empty() {
                return Err(RowBindError::SchemaError(format!(
                    "Field '{}' of '{type_name}' has no column name",
                    field.name
                )));
            }
            if !field.tag.data_type.is_supported() {
                return Err(RowBindError::SchemaError(format!(
                    "Field '{}' of '{type_name}' has unsupported type {}",
                    field.name,
                    field.tag.data_type.name()
                )));
            }
            if let Some(previous) = columns.insert(field.column, index) {
                return Err(RowBindError::SchemaError(format!(
                    "Duplicate column name '{}' on fields '{}' and '{}' of '{type_name}'",
                    field.column, fields[previous].name, field.name
                )));
            }
        }

        Ok(RecordSchema {
            type_name,
            fields,
            columns,
        })
    }

    /// Builds the schema of record type `R` without consulting the cache.
    ///
    /// # Errors
    ///
    /// See [`RecordSchema::new`].
    pub fn build<R: Record>() -> Result<Self> {
        Self::new(std::any::type_name::<R>(), R::fields())
    }

    /// Returns the Rust type name of the record.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the ordered field definitions.
    #[must_use]
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Gets a field definition by index.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }

    /// Finds the index of the field read from `column`.
    #[must_use]
    pub fn field_index(&self, column: &str) -> Option<usize> {
        self.columns.get(column).copied()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields (never true for a built schema).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
