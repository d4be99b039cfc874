//! Call-scoped context values.
//!
//! A context value is an opaque object made visible to code executing within
//! the current call (and to child units that explicitly inherit it). The core
//! only defines the value representation and the request attachment that
//! carries it; the registry that keys values by execution unit lives in the
//! standard implementations crate.

use std::any::Any;
use std::sync::Arc;

/// An opaque, shareable context value.
pub type ContextValue = Arc<dyn Any + Send + Sync>;

/// Request attachment carrying the call-scoped context object.
///
/// A caller (or an upstream protocol layer) attaches one of these to an
/// [`InvocationRequest`](crate::InvocationRequest); a context-binding variant
/// publishes it for the duration of the call and withdraws it afterwards.
#[derive(Clone)]
pub struct CallContext(ContextValue);

impl CallContext {
    /// Wrap a value as the call's context object.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        CallContext(Arc::new(value))
    }

    /// Wrap an already-shared value.
    pub fn from_value(value: ContextValue) -> Self {
        CallContext(value)
    }

    /// The wrapped value.
    pub fn value(&self) -> ContextValue {
        Arc::clone(&self.0)
    }

    /// Downcast the wrapped value to a concrete type.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.0).downcast::<T>().ok()
    }
}
