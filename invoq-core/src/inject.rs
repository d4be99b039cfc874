//! Provisioning collaborators.
//!
//! Dependency injection, naming lookup, and teardown registration are
//! external concerns consumed through narrow seams. The core defines the
//! contracts and the small data carriers they exchange; implementations live
//! with the hosting container.

use crate::error::{BoxError, NamingError};
use crate::request::TargetRef;
use serde_json::Value;
use std::collections::HashMap;

/// One resource a target wants injected: a resource name on the target, and
/// the naming path the value is bound under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InjectionEntry {
    /// Name of the resource slot on the target.
    pub resource: String,
    /// Naming path the value is looked up at.
    pub path: String,
}

impl InjectionEntry {
    /// Create an entry.
    pub fn new(resource: impl Into<String>, path: impl Into<String>) -> Self {
        InjectionEntry {
            resource: resource.into(),
            path: path.into(),
        }
    }
}

/// Declarative list of resources to inject into an endpoint target.
///
/// Attached to an [`Endpoint`](crate::Endpoint) at deployment time; a
/// provisioning variant skips injection entirely when no spec is attached.
#[derive(Clone, Debug, Default)]
pub struct InjectionSpec {
    entries: Vec<InjectionEntry>,
}

impl InjectionSpec {
    /// Create a spec from its entries.
    pub fn new(entries: Vec<InjectionEntry>) -> Self {
        InjectionSpec { entries }
    }

    /// The resource entries.
    pub fn entries(&self) -> &[InjectionEntry] {
        &self.entries
    }

    /// Whether the spec names no resources.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<InjectionEntry> for InjectionSpec {
    fn from_iter<I: IntoIterator<Item = InjectionEntry>>(iter: I) -> Self {
        InjectionSpec {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read-only bindings produced by a naming lookup.
#[derive(Clone, Debug, Default)]
pub struct NamingContext {
    bindings: HashMap<String, Value>,
}

impl NamingContext {
    /// Create a context from its bindings.
    pub fn new(bindings: HashMap<String, Value>) -> Self {
        NamingContext { bindings }
    }

    /// The value bound under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the context has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(String, Value)> for NamingContext {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        NamingContext {
            bindings: iter.into_iter().collect(),
        }
    }
}

/// Directory lookup collaborator.
pub trait NamingLookup: Send + Sync {
    /// Resolve the context bound at `path`.
    fn lookup(&self, path: &str) -> Result<NamingContext, NamingError>;
}

/// Resource injection collaborator.
pub trait InjectionProvider: Send + Sync {
    /// Inject the resources named by `spec` into `target`, resolving values
    /// through `naming`.
    fn inject_resources(
        &self,
        target: &TargetRef,
        spec: &InjectionSpec,
        naming: &NamingContext,
    ) -> Result<(), BoxError>;

    /// Run the target's post-construct step.
    fn call_post_construct(&self, target: &TargetRef) -> Result<(), BoxError>;
}

/// Teardown registration collaborator.
///
/// Registration only; the registered teardown is driven later by the hosting
/// container, outside this core's control.
pub trait TeardownRegistry: Send + Sync {
    /// Register `target` for the teardown phase.
    fn register_for_teardown(&self, target: TargetRef);
}
