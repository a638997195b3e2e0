//! Per-type descriptor cache using DashMap

use std::any::Any;
use std::any::TypeId;
use std::sync::Arc;

use dashmap::DashMap;
use log::debug;
use log::trace;

use super::Directives;
use super::Schema;
use super::discover;
use crate::error::IntrospectError;
use crate::model::BeanRecord;

type SchemaKey = (TypeId, Directives);

/// A shared cache of discovered schemas, keyed by record type and
/// directives.
///
/// Discovery runs at most once per key in the common case. Two bindings
/// racing on an unseen key may both discover; the last insert wins and both
/// schemas are equivalent.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use beantable_lib::introspect::{DescriptorRegistry, Directives};
///
/// let registry = Arc::new(DescriptorRegistry::new());
/// let schema = registry.schema::<Server>(&Directives::parse("name", ""))?;
/// ```
#[derive(Default)]
pub struct DescriptorRegistry {
    store: DashMap<SchemaKey, Arc<dyn Any + Send + Sync>>,
}

impl DescriptorRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }

    /// Returns the cached schema for `R`, discovering it on first use.
    pub fn schema<R: BeanRecord>(
        &self,
        directives: &Directives,
    ) -> Result<Arc<Schema<R>>, IntrospectError> {
        let key = (TypeId::of::<R>(), directives.clone());

        if let Some(entry) = self.store.get(&key)
            && let Ok(schema) = Arc::clone(entry.value()).downcast::<Schema<R>>()
        {
            trace!("descriptor cache hit for {}", R::type_name());
            return Ok(schema);
        }

        debug!("introspecting {}", R::type_name());
        let schema = Arc::new(discover::<R>(directives)?);
        self.store.insert(key, Arc::clone(&schema) as Arc<dyn Any + Send + Sync>);
        Ok(schema)
    }

    /// Number of cached schemas.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if nothing has been discovered yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drops every cached schema.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for DescriptorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescriptorRegistry")
            .field("len", &self.store.len())
            .finish()
    }
}
