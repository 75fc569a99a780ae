//! Catalog of record schemas.
//!
//! A record shape never changes after definition, so its schema is built
//! once and shared. [`Catalog::global`] holds the process-wide cache used by
//! [`RowReader`](crate::executor::RowReader); separate catalogs can be
//! created for isolation.

mod schema;

pub use schema::{FieldDef, Record, RecordSchema};

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::error::Result;

/// Registry of built schemas keyed by record type.
#[derive(Debug, Default)]
pub struct Catalog {
    schemas: RwLock<HashMap<TypeId, Arc<RecordSchema>>>,
}

impl Catalog {
    /// Creates a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Catalog {
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide catalog.
    pub fn global() -> &'static Catalog {
        static GLOBAL: OnceLock<Catalog> = OnceLock::new();
        GLOBAL.get_or_init(Catalog::new)
    }

    /// Returns the schema of `R`, building and registering it on first use.
    ///
    /// Builders racing on the same type produce identical schemas; the first
    /// one registered is kept. Failed builds are not cached.
    ///
    /// # Errors
    ///
    /// Returns the shape or schema error raised while building.
    pub fn schema_of<R: Record>(&self) -> Result<Arc<RecordSchema>> {
        let key = TypeId::of::<R>();
        if let Some(schema) = self.schemas.read().get(&key) {
            return Ok(Arc::clone(schema));
        }

        let built = Arc::new(RecordSchema::build::<R>()?);
        log::debug!(
            "built schema for {} ({} fields)",
            built.type_name(),
            built.len()
        );
        let mut schemas = self.schemas.write();
        Ok(Arc::clone(schemas.entry(key).or_insert(built)))
    }

    /// Checks if the schema of `R` has been registered.
    #[must_use]
    pub fn contains<R: Record>(&self) -> bool {
        self.schemas.read().contains_key(&TypeId::of::<R>())
    }

    /// Returns the number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns true if no schema has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FieldValue, Value};

    #[derive(Default)]
    struct Point {
        x: i64,
        y: i64,
    }

    impl Record for Point {
        fn fields() -> Vec<FieldDef> {
            vec![
                FieldDef::new("x", "x", i64::TYPE),
                FieldDef::new("y", "y", i64::TYPE),
            ]
        }

        fn assign(&mut self, index: usize, value: Value) -> Result<()> {
            match index {
                0 => self.x = i64::from_value(value)?,
                1 => self.y = i64::from_value(value)?,
                _ => unreachable!(),
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct Nothing;

    impl Record for Nothing {
        fn fields() -> Vec<FieldDef> {
            vec![]
        }

        fn assign(&mut self, _index: usize, _value: Value) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_schema_is_memoized() {
        let catalog = Catalog::new();
        assert!(!catalog.contains::<Point>());

        let first = catalog.schema_of::<Point>().unwrap();
        let second = catalog.schema_of::<Point>().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(catalog.len(), 1);
        assert_eq!(first.field_index("y"), Some(1));
    }

    #[test]
    fn test_failed_build_not_cached() {
        let catalog = Catalog::new();
        assert!(catalog.schema_of::<Nothing>().is_err());
        assert!(catalog.is_empty());
    }
}
