//! # Record Declaration Macro
//!
//! ## record!
//!
//! Declares a struct and implements [`Record`](crate::Record) for it, mapping
//! each field to a result column.
//!
//! ### Usage
//!
//! ```ignore
//! use rowbind::{record, Timestamp};
//!
//! record! {
//!     #[derive(Debug, Default, Clone)]
//!     pub struct User {
//!         pub id: u64 => "user_id",
//!         pub name: String => "user_name",
//!         pub email: Option<String> => "user_email",
//!         pub created_at: Timestamp => "created_at",
//!     }
//! }
//! ```
//!
//! The struct must implement `Default`; that value is what NULL cells and
//! columns missing from a result leave behind. Every field type must
//! implement [`FieldValue`](crate::FieldValue).

/// Declares a record struct with a column name for every field.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty => $column:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            fn fields() -> ::std::vec::Vec<$crate::FieldDef> {
                ::std::vec![
                    $(
                        $crate::FieldDef::new(
                            ::std::stringify!($field),
                            $column,
                            <$ty as $crate::FieldValue>::TYPE,
                        ),
                    )*
                ]
            }

            #[allow(unused_assignments, unused_mut, unused_variables)]
            fn assign(&mut self, index: usize, value: $crate::Value) -> $crate::Result<()> {
                let mut position = 0usize;
                $(
                    if index == position {
                        self.$field = <$ty as $crate::FieldValue>::from_value(value)?;
                        return ::std::result::Result::Ok(());
                    }
                    position += 1;
                )*
                ::std::result::Result::Err($crate::RowBindError::ShapeError(::std::format!(
                    "{} has no field at index {}",
                    ::std::stringify!($name),
                    index
                )))
            }
        }
    };
}
