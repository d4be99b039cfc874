//! Testing utilities for Invoq.
//!
//! This module provides doubles for the lifecycle extension point and the
//! provisioning collaborators, so dispatch behavior can be asserted without a
//! real container.
//!
//! # Features
//!
//! - [`RecordingVariant`]: a variant that journals every hook call and can be
//!   told to fail at a chosen hook
//! - [`RecordingInjector`]: an [`InjectionProvider`] that counts its calls
//! - [`RecordingTeardown`]: a [`TeardownRegistry`] that counts registrations
//! - [`StaticNaming`]: a [`NamingLookup`] over a fixed set of paths

use invoq_core::{
    BoxError, Endpoint, InjectionProvider, InjectionSpec, InvocationRequest, NamingContext,
    NamingError, NamingLookup, TargetRef, TeardownRegistry, Variant,
};
use std::collections::HashMap;
use std::io;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Variant
// ============================================================================

/// One step of the invocation lifecycle, as seen from a journal.
///
/// `Invoke` is never recorded by the variant itself; a test's method body can
/// push it through [`RecordingVariant::record`] to assert ordering around the
/// actual call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    /// The one-time setup hook.
    Initialize,
    /// The per-call before-invoke hook.
    BeforeInvoke,
    /// The target method call itself.
    Invoke,
    /// The per-call after-invoke hook.
    AfterInvoke,
}

/// A variant that journals every hook call.
///
/// # Example
///
/// ```rust,ignore
/// let variant = RecordingVariant::new();
/// let dispatcher = InvocationDispatcher::new(endpoint, resolver, variant.clone());
///
/// dispatcher.dispatch(&mut request).await;
///
/// assert_eq!(variant.count(HookKind::AfterInvoke), 1);
/// ```
pub struct RecordingVariant {
    calls: Arc<Mutex<Vec<HookKind>>>,
    fail_on: Option<HookKind>,
}

impl RecordingVariant {
    /// Create a variant whose hooks all succeed.
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: None,
        }
    }

    /// Create a variant that fails every time the given hook runs.
    pub fn failing(kind: HookKind) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on: Some(kind),
        }
    }

    /// Append an entry to the journal.
    pub fn record(&self, kind: HookKind) {
        self.calls.lock().unwrap().push(kind);
    }

    /// Snapshot of the journal.
    pub fn calls(&self) -> Vec<HookKind> {
        self.calls.lock().unwrap().clone()
    }

    /// How many times `kind` was journaled.
    pub fn count(&self, kind: HookKind) -> usize {
        self.calls.lock().unwrap().iter().filter(|k| **k == kind).count()
    }

    /// Clear the journal.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn run(&self, kind: HookKind) -> Result<(), BoxError> {
        self.record(kind);
        if self.fail_on == Some(kind) {
            return Err(Box::new(io::Error::other(format!(
                "forced {kind:?} failure"
            ))));
        }
        Ok(())
    }
}

impl Default for RecordingVariant {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingVariant {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            fail_on: self.fail_on,
        }
    }
}

impl Variant for RecordingVariant {
    async fn on_initialize(
        &self,
        _endpoint: &Endpoint,
        _request: &InvocationRequest,
    ) -> Result<(), BoxError> {
        self.run(HookKind::Initialize)
    }

    async fn on_before_invoke(&self, _request: &InvocationRequest) -> Result<(), BoxError> {
        self.run(HookKind::BeforeInvoke)
    }

    async fn on_after_invoke(&self, _request: &InvocationRequest) -> Result<(), BoxError> {
        self.run(HookKind::AfterInvoke)
    }
}

// ============================================================================
// Recording Injector
// ============================================================================

/// An [`InjectionProvider`] that counts its calls.
pub struct RecordingInjector {
    injects: Arc<AtomicUsize>,
    post_constructs: Arc<AtomicUsize>,
    fail_injection: bool,
}

impl RecordingInjector {
    /// Create an injector whose operations succeed.
    pub fn new() -> Self {
        Self {
            injects: Arc::new(AtomicUsize::new(0)),
            post_constructs: Arc::new(AtomicUsize::new(0)),
            fail_injection: false,
        }
    }

    /// Create an injector whose `inject_resources` always fails.
    pub fn failing() -> Self {
        Self {
            fail_injection: true,
            ..Self::new()
        }
    }

    /// How many times resources were injected.
    pub fn inject_count(&self) -> usize {
        self.injects.load(Ordering::SeqCst)
    }

    /// How many times post-construct ran.
    pub fn post_construct_count(&self) -> usize {
        self.post_constructs.load(Ordering::SeqCst)
    }
}

impl Default for RecordingInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingInjector {
    fn clone(&self) -> Self {
        Self {
            injects: self.injects.clone(),
            post_constructs: self.post_constructs.clone(),
            fail_injection: self.fail_injection,
        }
    }
}

impl InjectionProvider for RecordingInjector {
    fn inject_resources(
        &self,
        _target: &TargetRef,
        _spec: &InjectionSpec,
        _naming: &NamingContext,
    ) -> Result<(), BoxError> {
        self.injects.fetch_add(1, Ordering::SeqCst);
        if self.fail_injection {
            return Err(Box::new(io::Error::other("forced injection failure")));
        }
        Ok(())
    }

    fn call_post_construct(&self, _target: &TargetRef) -> Result<(), BoxError> {
        self.post_constructs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Recording Teardown
// ============================================================================

/// A [`TeardownRegistry`] that counts registrations.
pub struct RecordingTeardown {
    registered: Arc<AtomicUsize>,
}

impl RecordingTeardown {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            registered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// How many targets have been registered.
    pub fn registered_count(&self) -> usize {
        self.registered.load(Ordering::SeqCst)
    }
}

impl Default for RecordingTeardown {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingTeardown {
    fn clone(&self) -> Self {
        Self {
            registered: self.registered.clone(),
        }
    }
}

impl TeardownRegistry for RecordingTeardown {
    fn register_for_teardown(&self, _target: TargetRef) {
        self.registered.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Static Naming
// ============================================================================

/// A [`NamingLookup`] over a fixed set of paths.
#[derive(Default)]
pub struct StaticNaming {
    contexts: HashMap<String, NamingContext>,
}

impl StaticNaming {
    /// Create an empty lookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `context` at `path`.
    pub fn bind(mut self, path: impl Into<String>, context: NamingContext) -> Self {
        self.contexts.insert(path.into(), context);
        self
    }
}

impl NamingLookup for StaticNaming {
    fn lookup(&self, path: &str) -> Result<NamingContext, NamingError> {
        self.contexts
            .get(path)
            .cloned()
            .ok_or_else(|| NamingError::Unbound(path.to_string()))
    }
}
