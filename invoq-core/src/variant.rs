//! # Lifecycle Extension Point (Variant)
//!
//! A Variant is a fixed bundle of three lifecycle hook bodies plugged into a
//! dispatcher, specializing the generic invocation lifecycle for one endpoint
//! style. The dispatcher owns the call protocol (one-time initialization,
//! before-invoke, invocation, after-invoke-always) and guarantees how often
//! each hook runs; the variant supplies what the hooks do.
//!
//! # Design Philosophy
//!
//! - **Composition over subclassing**: a variant is a value composed into a
//!   dispatcher, not a base class to extend
//! - **Defaults are no-ops**: a variant overrides only the hooks it needs
//! - **Count is the dispatcher's contract**: hook bodies may assume they run
//!   at most once per call, and `on_initialize` at most once per dispatcher
//!
//! # Static vs Dynamic Dispatch
//!
//! This trait uses native `async fn`-style futures for zero-cost static
//! dispatch; the dispatcher is generic over its variant.

use crate::endpoint::Endpoint;
use crate::error::BoxError;
use crate::request::InvocationRequest;
use std::future::Future;

/// A pluggable bundle of lifecycle hook bodies.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a dispatcher variant",
    label = "missing `Variant` implementation",
    note = "Implement `Variant` (all hooks default to no-ops) to plug `{Self}` into a dispatcher."
)]
pub trait Variant: Send + Sync + 'static {
    /// One-time endpoint setup, run before the first invocation proceeds.
    ///
    /// Typical duties: inject resources into the target, register it for
    /// teardown. On failure the dispatch fails and a later call may retry.
    fn on_initialize(
        &self,
        endpoint: &Endpoint,
        request: &InvocationRequest,
    ) -> impl Future<Output = Result<(), BoxError>> + Send {
        let _ = (endpoint, request);
        async { Ok(()) }
    }

    /// Runs before every invocation (e.g. publish the call context).
    ///
    /// Failure aborts the invocation; the after-invoke hook still runs.
    fn on_before_invoke(
        &self,
        request: &InvocationRequest,
    ) -> impl Future<Output = Result<(), BoxError>> + Send {
        let _ = request;
        async { Ok(()) }
    }

    /// Runs after every invocation, exactly once per dispatched call,
    /// regardless of what failed earlier (e.g. withdraw the call context).
    ///
    /// Expected to be side-effect-only; a failure here is reported out of
    /// band and never masks the call's recorded outcome.
    fn on_after_invoke(
        &self,
        request: &InvocationRequest,
    ) -> impl Future<Output = Result<(), BoxError>> + Send {
        let _ = request;
        async { Ok(()) }
    }
}
