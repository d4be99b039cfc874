//! Managed-endpoint variant.

use crate::context::ContextRegistry;
use invoq_core::{
    BoxError, CallContext, Endpoint, InjectionProvider, InjectionSpec, InvocationRequest,
    NamingLookup, TeardownRegistry, Variant,
};
use std::sync::Arc;

/// Variant for managed endpoints.
///
/// On first use it provisions the target: resources named by the endpoint's
/// [`InjectionSpec`] attachment are resolved through the naming collaborator
/// and injected, the target's post-construct step runs, and the target is
/// registered for teardown. Around every invocation it publishes the
/// request's [`CallContext`] attachment in the context registry under the
/// request's unit, and withdraws it afterwards.
///
/// Endpoints without an injection spec skip injection but still get
/// post-construct and teardown registration.
pub struct InjectingVariant {
    injector: Arc<dyn InjectionProvider>,
    naming: Arc<dyn NamingLookup>,
    teardown: Arc<dyn TeardownRegistry>,
    contexts: Arc<ContextRegistry>,
}

impl InjectingVariant {
    /// Create a variant from its collaborators.
    pub fn new(
        injector: Arc<dyn InjectionProvider>,
        naming: Arc<dyn NamingLookup>,
        teardown: Arc<dyn TeardownRegistry>,
        contexts: Arc<ContextRegistry>,
    ) -> Self {
        InjectingVariant {
            injector,
            naming,
            teardown,
            contexts,
        }
    }

    /// The registry calls publish their context values through.
    pub fn contexts(&self) -> &Arc<ContextRegistry> {
        &self.contexts
    }
}

impl Variant for InjectingVariant {
    async fn on_initialize(
        &self,
        endpoint: &Endpoint,
        request: &InvocationRequest,
    ) -> Result<(), BoxError> {
        if let Some(spec) = endpoint.attachments().get::<InjectionSpec>() {
            let naming = self.naming.lookup(endpoint.naming_path())?;
            tracing::debug!(
                path = %endpoint.naming_path(),
                resources = spec.entries().len(),
                "injecting resources into endpoint target"
            );
            self.injector
                .inject_resources(request.target(), spec, &naming)?;
        }

        tracing::debug!("calling post-construct on endpoint target");
        self.injector.call_post_construct(request.target())?;

        self.teardown.register_for_teardown(request.target().clone());
        Ok(())
    }

    async fn on_before_invoke(&self, request: &InvocationRequest) -> Result<(), BoxError> {
        // An absent attachment publishes the absent value, not a stale one.
        match request.attachments().get::<CallContext>() {
            Some(context) => self.contexts.bind(request.unit(), context.value()),
            None => self.contexts.clear(request.unit()),
        }
        Ok(())
    }

    async fn on_after_invoke(&self, request: &InvocationRequest) -> Result<(), BoxError> {
        self.contexts.clear(request.unit());
        Ok(())
    }
}
