//! Table-backed method resolver.

use invoq_core::{BoxError, MethodHandle, MethodId, MethodResolver, ResolutionError};
use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// A [`MethodResolver`] backed by a registration table.
///
/// Built once per endpoint at deployment time, then shared read-only by every
/// dispatch.
pub struct MethodTable {
    methods: HashMap<MethodId, MethodHandle>,
}

impl MethodTable {
    /// Start building a table.
    pub fn builder() -> MethodTableBuilder {
        MethodTableBuilder {
            methods: HashMap::new(),
        }
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether the table has no registrations.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Whether `method` is registered.
    pub fn contains(&self, method: &MethodId) -> bool {
        self.methods.contains_key(method)
    }
}

impl MethodResolver for MethodTable {
    fn resolve(&self, method: &MethodId) -> Result<MethodHandle, ResolutionError> {
        self.methods
            .get(method)
            .cloned()
            .ok_or_else(|| ResolutionError::NotFound(method.clone()))
    }
}

/// Builder for constructing a [`MethodTable`].
pub struct MethodTableBuilder {
    methods: HashMap<MethodId, MethodHandle>,
}

impl MethodTableBuilder {
    /// Register a method over a concrete target type.
    ///
    /// Registering the same identifier again replaces the earlier handle.
    pub fn method<T, F, Fut>(self, name: impl Into<MethodId>, call: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Arc<T>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        self.handle(name, MethodHandle::of::<T, _, _>(call))
    }

    /// Register an already-built handle.
    pub fn handle(mut self, name: impl Into<MethodId>, handle: MethodHandle) -> Self {
        self.methods.insert(name.into(), handle);
        self
    }

    /// Build the table.
    pub fn build(self) -> MethodTable {
        MethodTable {
            methods: self.methods,
        }
    }
}
