//! Field types, declared type tags, and coerced values.

mod field;
mod timestamp;
mod value;

pub use field::FieldValue;
pub use timestamp::Timestamp;
pub use value::{DataType, TypeTag, Value};
