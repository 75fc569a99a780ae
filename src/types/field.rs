//! Rust field types that a record can declare.

use crate::error::{Result, RowBindError};
use crate::types::{DataType, Timestamp, TypeTag, Value};

/// A Rust type that can hold a coerced cell.
///
/// `TYPE` tells the coercion engine which rule to apply; `from_value`
/// moves the coerced value into the field. `Default` supplies the zero
/// value left behind by NULL cells and unbound columns.
///
/// Implement this for a newtype to give it a column mapping:
///
/// ```ignore
/// #[derive(Default)]
/// struct UserId(i64);
///
/// impl FieldValue for UserId {
///     const TYPE: TypeTag = TypeTag::required(DataType::Int64);
///
///     fn from_value(value: Value) -> Result<Self> {
///         i64::from_value(value).map(UserId)
///     }
/// }
/// ```
pub trait FieldValue: Default + Sized {
    /// Declared type of fields of this Rust type.
    const TYPE: TypeTag;

    /// Converts a coerced value into this type.
    ///
    /// # Errors
    ///
    /// Returns a schema error if the value's type does not match `TYPE`,
    /// or a coercion error if it is out of range for a narrower integer.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch(expected: &str, value: &Value) -> RowBindError {
    RowBindError::SchemaError(format!(
        "Field of type {expected} cannot hold a {} value",
        value.type_name()
    ))
}

impl FieldValue for bool {
    const TYPE: TypeTag = TypeTag::required(DataType::Bool);

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("BOOL", &other)),
        }
    }
}

impl FieldValue for String {
    const TYPE: TypeTag = TypeTag::required(DataType::String);

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(mismatch("STRING", &other)),
        }
    }
}

impl FieldValue for Timestamp {
    const TYPE: TypeTag = TypeTag::required(DataType::Timestamp);

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(t) => Ok(t),
            other => Err(mismatch("TIMESTAMP", &other)),
        }
    }
}

macro_rules! integer_field {
    ($variant:ident, $data_type:ident: $($ty:ty),+) => {
        $(
            impl FieldValue for $ty {
                const TYPE: TypeTag = TypeTag::required(DataType::$data_type);

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(n) => <$ty>::try_from(n).map_err(|e| {
                            RowBindError::coercion(&n.to_string(), stringify!($ty), e)
                        }),
                        other => Err(mismatch(DataType::$data_type.name(), &other)),
                    }
                }
            }
        )+
    };
}

integer_field!(Int64, Int64: i64, i32, i16, i8);
integer_field!(UInt64, UInt64: u64, u32, u16, u8);

impl<T: FieldValue> FieldValue for Option<T> {
    const TYPE: TypeTag = T::TYPE.optional();

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            present => T::from_value(present).map(Some),
        }
    }
}
