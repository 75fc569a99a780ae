//! Value and `DataType` definitions for rowbind.

use crate::types::Timestamp;

/// Semantic type of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Lenient boolean ("0" and "" are false).
    Bool,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit unsigned integer.
    UInt64,
    /// UTF-8 string, copied verbatim.
    String,
    /// `YYYY-MM-DD HH:MM:SS` timestamp in UTC.
    Timestamp,
    /// A type with no coercion rule, named by its Rust type.
    Unsupported(&'static str),
}

impl DataType {
    /// Returns the name of the data type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Bool => "BOOL",
            DataType::Int64 => "INT64",
            DataType::UInt64 => "UINT64",
            DataType::String => "STRING",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Unsupported(name) => name,
        }
    }

    /// Returns whether the coercion engine has a rule for this type.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, DataType::Unsupported(_))
    }
}

/// Declared type of a field: a data type plus the optional-wrapper flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeTag {
    /// Underlying data type.
    pub data_type: DataType,
    /// Whether the field distinguishes NULL from the zero value.
    pub optional: bool,
}

impl TypeTag {
    /// Creates a tag for a non-optional field.
    #[must_use]
    pub const fn required(data_type: DataType) -> Self {
        TypeTag {
            data_type,
            optional: false,
        }
    }

    /// Returns this tag wrapped as optional.
    #[must_use]
    pub const fn optional(self) -> Self {
        TypeTag {
            data_type: self.data_type,
            optional: true,
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.optional {
            write!(f, "OPTIONAL {}", self.data_type.name())
        } else {
            f.write_str(self.data_type.name())
        }
    }
}

/// Native value produced by coercing one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer value.
    Int64(i64),
    /// 64-bit unsigned integer value.
    UInt64(u64),
    /// String value.
    String(String),
    /// Timestamp value.
    Timestamp(Timestamp),
    /// Null value (the cell was absent).
    Null,
}

impl Value {
    /// Returns true if this value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the data type of this value, or None for Null.
    #[must_use]
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Bool(_) => Some(DataType::Bool),
            Value::Int64(_) => Some(DataType::Int64),
            Value::UInt64(_) => Some(DataType::UInt64),
            Value::String(_) => Some(DataType::String),
            Value::Timestamp(_) => Some(DataType::Timestamp),
            Value::Null => None,
        }
    }

    /// Returns the type name used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.data_type().map_or("NULL", |t| t.name())
    }

    /// Attempts to extract a bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an i64 value.
    #[must_use]
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to extract a u64 value.
    #[must_use]
    pub fn as_uint64(&self) -> Option<u64> {
        match self {
            Value::UInt64(u) => Some(*u),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to extract a timestamp value.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            Value::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}
