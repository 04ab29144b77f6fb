use crate::Versioned;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use strata_types::schema::TypeSchema;
use strata_types::StrataResult;
use tracing::debug;


type SchemaSlot = Box<dyn Any + Send + Sync>;

/// Resolved schemas, keyed by the type they describe.
///
/// Only a cache: schemas are deterministic, so one resolved twice is the same schema.
/// Once inserted, a schema is never replaced.
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: RwLock<HashMap<TypeId, SchemaSlot>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::new)
    }

    pub fn get_or_resolve<T: Versioned>(&self) -> StrataResult<Arc<TypeSchema<T>>> {
        self.get_or_resolve_with(T::resolve_schema)
    }

    pub fn get_or_resolve_with<T: 'static>(
        &self,
        resolve: impl FnOnce() -> StrataResult<TypeSchema<T>>,
    ) -> StrataResult<Arc<TypeSchema<T>>> {
        if let Some(schema) = self.get::<T>() {
            return Ok(schema);
        }

        // Resolved outside the lock. A concurrent resolution of the same type loses the race
        // below, and its (identical) schema is dropped.
        let schema = Arc::new(resolve()?);

        let mut schemas = self.schemas.write().unwrap_or_else(PoisonError::into_inner);
        let slot = schemas.entry(TypeId::of::<T>()).or_insert_with(|| {
            debug!(
                owner = schema.owner(),
                current_version = %schema.current_version(),
                fields_count = schema.fields().len(),
                "resolved schema"
            );
            let slot: SchemaSlot = Box::new(Arc::clone(&schema));
            slot
        });
        let schema = slot
            .downcast_ref::<Arc<TypeSchema<T>>>()
            .map(Arc::clone)
            .unwrap_or(schema);
        Ok(schema)
    }

    pub fn get<T: 'static>(&self) -> Option<Arc<TypeSchema<T>>> {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref::<Arc<TypeSchema<T>>>())
            .map(Arc::clone)
    }

    pub fn contains<T: 'static>(&self) -> bool {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("len", &self.len())
            .finish()
    }
}
