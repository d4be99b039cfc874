//! The invocation dispatcher.

use crate::lazy::LazyInit;
use invoq_core::{
    DispatchError, Endpoint, InvocationRequest, MethodResolver, NamingError, ResolutionError,
    Variant,
};
use serde_json::Value;
use std::sync::Arc;

/// Routes one decoded call through the hooked invocation lifecycle.
///
/// A dispatcher is long-lived and bound to one [`Endpoint`]; many concurrent
/// calls may dispatch through the same instance. Per call it:
///
/// 1. runs the variant's one-time setup (at most once over the dispatcher's
///    lifetime, guarded by [`LazyInit`]),
/// 2. runs the variant's before-invoke hook,
/// 3. resolves the implementation method and invokes it,
/// 4. runs the variant's after-invoke hook unconditionally, exactly once,
///    on every exit path.
///
/// The outcome lands in the request's result slot; `dispatch` itself never
/// fails. Callers inspect [`InvocationRequest::outcome`] rather than catching
/// an error. Only the lazy-initialization slow path takes a lock; everything
/// else runs without shared-state synchronization, and the dispatcher imposes
/// no timeout or retry on the target call.
///
/// The before-invoke hook runs *before* method resolution, so a resolver
/// miss still sees the full before/after hook pair; the after-invoke hook
/// can rely on its counterpart having run on every path that got past
/// initialization.
pub struct InvocationDispatcher<V> {
    endpoint: Arc<Endpoint>,
    resolver: Arc<dyn MethodResolver>,
    variant: V,
    init: LazyInit,
}

impl<V: Variant> InvocationDispatcher<V> {
    /// Create a dispatcher for `endpoint`, resolving methods through
    /// `resolver` and specializing the lifecycle with `variant`.
    pub fn new(endpoint: Arc<Endpoint>, resolver: Arc<dyn MethodResolver>, variant: V) -> Self {
        InvocationDispatcher {
            endpoint,
            resolver,
            variant,
            init: LazyInit::new(),
        }
    }

    /// The endpoint this dispatcher serves.
    pub fn endpoint(&self) -> &Arc<Endpoint> {
        &self.endpoint
    }

    /// Whether the one-time setup has completed.
    pub fn is_initialized(&self) -> bool {
        self.init.is_initialized()
    }

    /// Dispatch `request`, recording its outcome in the result slot.
    pub async fn dispatch(&self, request: &mut InvocationRequest) {
        match self.drive(request).await {
            Ok(value) => request.complete(value),
            Err(error) => {
                tracing::debug!(method = %request.method(), error = %error, "invocation failed");
                request.fail(error);
            }
        }

        // Always runs, after the outcome is recorded. Its own failure is
        // reported here and must not mask the captured outcome.
        if let Err(error) = self.variant.on_after_invoke(request).await {
            tracing::warn!(method = %request.method(), error = %error, "after-invoke hook failed");
        }
    }

    /// Steps 1–3 of the lifecycle; any `Err` short-circuits to the
    /// after-invoke hook in [`dispatch`](Self::dispatch).
    async fn drive(&self, request: &InvocationRequest) -> Result<Value, DispatchError> {
        // A setup failure caused by the naming collaborator keeps its own
        // classification; everything else from setup is an initialization
        // failure.
        self.init
            .ensure(|| self.variant.on_initialize(&self.endpoint, request))
            .await
            .map_err(|error| match error.downcast::<NamingError>() {
                Ok(naming) => DispatchError::Naming(*naming),
                Err(other) => DispatchError::Initialization(other),
            })?;

        self.variant
            .on_before_invoke(request)
            .await
            .map_err(DispatchError::BeforeInvoke)?;

        let handle = self.resolver.resolve(request.method())?;
        handle
            .invoke(request.target().clone(), request.args().to_vec())
            .await
            .map_err(|error| match error.downcast::<ResolutionError>() {
                Ok(resolution) => DispatchError::Resolution(*resolution),
                Err(other) => DispatchError::Invocation(other),
            })
    }
}
