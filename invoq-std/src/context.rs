//! Execution-unit keyed context registry.
//!
//! The registry is the one piece of shared, mutated state in an invocation's
//! lifecycle beyond the initialization flag. It associates a context value
//! with one [`UnitId`]; a binding set by one concurrent call is never
//! observable from another call's unit unless explicitly inherited into a
//! child unit. Bindings live exactly as long as one invocation: bound in the
//! before-invoke hook, cleared in the after-invoke hook.

use invoq_core::{ContextValue, UnitId};
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-wide association from execution units to context values.
///
/// All operations are in-memory and non-blocking in the scheduling sense
/// (lock hold times are a map access). Reads of an unbound unit return
/// `None` rather than failing.
#[derive(Default)]
pub struct ContextRegistry {
    slots: RwLock<HashMap<UnitId, ContextValue>>,
}

impl ContextRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<UnitId, ContextValue>> {
        self.slots.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<UnitId, ContextValue>> {
        self.slots.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Associate `value` with `unit`, replacing any previous binding.
    pub fn bind(&self, unit: UnitId, value: ContextValue) {
        self.write().insert(unit, value);
    }

    /// Wrap `value` and associate it with `unit`.
    pub fn bind_value<T: Any + Send + Sync>(&self, unit: UnitId, value: T) {
        self.bind(unit, Arc::new(value));
    }

    /// The value bound to `unit`, or `None` if nothing is bound.
    pub fn get(&self, unit: UnitId) -> Option<ContextValue> {
        self.read().get(&unit).cloned()
    }

    /// The value bound to `unit`, downcast to `T`.
    pub fn get_as<T: Any + Send + Sync>(&self, unit: UnitId) -> Option<Arc<T>> {
        self.get(unit).and_then(|value| value.downcast::<T>().ok())
    }

    /// Remove the binding for `unit`. Equivalent to binding the absent value.
    pub fn clear(&self, unit: UnitId) {
        self.write().remove(&unit);
    }

    /// Copy the parent's binding to `child`.
    ///
    /// A child unit created while the parent's binding is live observes the
    /// parent's value; inheriting from an unbound parent clears the child.
    pub fn inherit(&self, parent: UnitId, child: UnitId) {
        let mut slots = self.write();
        match slots.get(&parent).cloned() {
            Some(value) => {
                slots.insert(child, value);
            }
            None => {
                slots.remove(&child);
            }
        }
    }

    /// Whether `unit` currently has a binding.
    pub fn is_bound(&self, unit: UnitId) -> bool {
        self.read().contains_key(&unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_unit_reads_none() {
        let registry = ContextRegistry::new();
        assert!(registry.get(UnitId::fresh()).is_none());
    }

    #[test]
    fn bindings_are_isolated_per_unit() {
        let registry = ContextRegistry::new();
        let a = UnitId::fresh();
        let b = UnitId::fresh();

        registry.bind_value(a, "alpha".to_string());
        registry.bind_value(b, "beta".to_string());

        assert_eq!(*registry.get_as::<String>(a).unwrap(), "alpha");
        assert_eq!(*registry.get_as::<String>(b).unwrap(), "beta");

        registry.clear(a);
        assert!(registry.get(a).is_none());
        assert_eq!(*registry.get_as::<String>(b).unwrap(), "beta");
    }

    #[test]
    fn child_inherits_the_live_binding() {
        let registry = ContextRegistry::new();
        let parent = UnitId::fresh();
        let child = UnitId::fresh();

        registry.bind_value(parent, 7u64);
        registry.inherit(parent, child);
        assert_eq!(*registry.get_as::<u64>(child).unwrap(), 7);

        // Clearing the parent does not revoke what the child already holds.
        registry.clear(parent);
        assert_eq!(*registry.get_as::<u64>(child).unwrap(), 7);
    }

    #[test]
    fn inheriting_from_an_unbound_parent_clears_the_child() {
        let registry = ContextRegistry::new();
        let parent = UnitId::fresh();
        let child = UnitId::fresh();

        registry.bind_value(child, 1u64);
        registry.inherit(parent, child);
        assert!(registry.get(child).is_none());
    }

    #[test]
    fn spawned_thread_observes_an_inherited_binding() {
        let registry = Arc::new(ContextRegistry::new());
        let parent = UnitId::fresh();
        let child = UnitId::fresh();

        registry.bind_value(parent, "carried".to_string());
        registry.inherit(parent, child);

        let seen = {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.get_as::<String>(child).map(|s| (*s).clone()))
                .join()
                .unwrap()
        };
        assert_eq!(seen.as_deref(), Some("carried"));
    }
}
