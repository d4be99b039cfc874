//! # invoq-core
//!
//! Core traits and value types for the Invoq endpoint invocation dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! collaborator implementations (resolvers, injection providers, naming
//! adapters) that don't need the full `invoq-std` implementations.
//!
//! # Invocation Lifecycle
//!
//! A dispatcher routes one already-decoded call (target instance, requested
//! [`MethodId`], argument sequence) through a fixed lifecycle:
//!
//! 1. **Initialize-once**: the variant's `on_initialize` runs at most once
//!    over the dispatcher's lifetime, before any invocation proceeds.
//! 2. **Before-invoke**: the variant's `on_before_invoke` runs for every call
//!    (e.g. publishing a call-scoped context value).
//! 3. **Invoke**: the implementation method is resolved through a
//!    [`MethodResolver`] and called against the target.
//! 4. **After-invoke**: the variant's `on_after_invoke` runs exactly once per
//!    call on every exit path, success or failure.
//!
//! The outcome (success value or classified [`DispatchError`]) is recorded
//! in the request's result slot; nothing is thrown across the dispatch
//! boundary.
//!
//! # Layers
//!
//! - [`InvocationRequest`] / [`Endpoint`] / [`Attachments`] - the data model
//! - [`Variant`] - the lifecycle extension point
//! - [`MethodResolver`] / [`InjectionProvider`] / [`NamingLookup`] /
//!   [`TeardownRegistry`] - narrow collaborator seams
//! - [`UnitId`] / [`CallContext`] - execution-unit identity and the
//!   call-scoped context value it keys

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod attachments;
mod context;
mod endpoint;
mod error;
mod inject;
mod request;
mod resolver;
mod unit;
mod variant;

// Re-exports
pub use attachments::Attachments;
pub use context::{CallContext, ContextValue};
pub use endpoint::{DEFAULT_NAMING_PATH, Endpoint, EndpointBuilder};
pub use error::{BoxError, DispatchError, NamingError, ResolutionError};
pub use inject::{
    InjectionEntry, InjectionProvider, InjectionSpec, NamingContext, NamingLookup,
    TeardownRegistry,
};
pub use request::{InvocationRequest, MethodId, TargetRef};
pub use resolver::{MethodFuture, MethodHandle, MethodResolver};
pub use unit::UnitId;
pub use variant::Variant;
