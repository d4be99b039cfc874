//! # invoq - Endpoint Invocation Dispatcher
//!
//! `invoq` routes an already-decoded service call (a target instance, a
//! method identifier, an argument sequence) to a dynamically-resolved
//! implementation method, surrounding the call with a fixed, overridable
//! lifecycle of hooks and making a per-call context value visible to the
//! executing call (and to child units that inherit it) without leaking
//! across unrelated concurrent calls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use invoq::{Endpoint, InvocationDispatcher, InvocationRequest, MethodTable, NullVariant};
//!
//! let table = MethodTable::builder()
//!     .method::<EchoService, _, _>("echo", |_svc, mut args| async move {
//!         Ok(args.remove(0))
//!     })
//!     .build();
//!
//! let dispatcher = InvocationDispatcher::new(
//!     Arc::new(Endpoint::builder().build()),
//!     Arc::new(table),
//!     NullVariant,
//! );
//!
//! let mut request = InvocationRequest::new(target, "echo", vec![json!("hi")]);
//! dispatcher.dispatch(&mut request).await;
//! assert!(matches!(request.outcome(), Some(Ok(_))));
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use invoq_core::{
    // Data model
    Attachments,
    // Errors
    BoxError,
    // Context values
    CallContext,
    ContextValue,
    DEFAULT_NAMING_PATH,
    DispatchError,
    Endpoint,
    EndpointBuilder,
    // Collaborator seams
    InjectionEntry,
    InjectionProvider,
    InjectionSpec,
    InvocationRequest,
    MethodFuture,
    MethodHandle,
    MethodId,
    MethodResolver,
    NamingContext,
    NamingError,
    NamingLookup,
    ResolutionError,
    TargetRef,
    TeardownRegistry,
    // Execution units
    UnitId,
    // Extension point
    Variant,
};

pub use invoq_std::{ContextRegistry, MethodTable, MethodTableBuilder};

/// Standard variant implementations.
pub mod variants {
    pub use invoq_std::variants::{InjectingVariant, NullVariant};
}

pub use invoq_std::variants::{InjectingVariant, NullVariant};

mod dispatcher;
mod lazy;

pub use dispatcher::InvocationDispatcher;
pub use lazy::LazyInit;

/// Testing utilities.
pub mod testing {
    pub use invoq_std::testing::{
        HookKind, RecordingInjector, RecordingTeardown, RecordingVariant, StaticNaming,
    };
}

/// Prelude module - common imports for Invoq.
///
/// # Usage
///
/// ```rust,ignore
/// use invoq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, CallContext, ContextRegistry, DispatchError, Endpoint, InvocationDispatcher,
        InvocationRequest, MethodHandle, MethodId, MethodResolver, MethodTable, TargetRef, UnitId,
        Variant,
    };
}
