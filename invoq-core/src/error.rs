//! Error types for Invoq.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`DispatchError`] - Per-call failure recorded in a request's result slot
//! - [`ResolutionError`] - Errors locating an implementation method
//! - [`NamingError`] - Errors from the naming collaborator

use crate::request::MethodId;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The terminal failure of one dispatched call.
///
/// A dispatcher never throws across the dispatch boundary: exactly one
/// `DispatchError` (or a success value) ends up in the request's result slot,
/// classified by the lifecycle step that produced it.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The one-time endpoint setup hook failed.
    #[error("endpoint initialization failed: {0}")]
    Initialization(#[source] BoxError),

    /// The before-invoke hook failed; the target method was never called.
    #[error("before-invoke hook failed: {0}")]
    BeforeInvoke(#[source] BoxError),

    /// No implementation method matched the requested identifier.
    #[error("method resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    /// The target method itself returned an error.
    #[error("target method failed: {0}")]
    Invocation(#[source] BoxError),

    /// A naming lookup performed on behalf of the call failed.
    #[error("naming lookup failed: {0}")]
    Naming(#[from] NamingError),
}

/// Errors locating an implementation method for a request.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The resolver has no entry for the requested method identifier.
    #[error("no implementation method matches `{0}`")]
    NotFound(MethodId),

    /// A handle was found but was registered against a different target type.
    #[error("registered handle expects target type `{expected}`")]
    TargetMismatch {
        /// Type name the handle was registered for.
        expected: &'static str,
    },
}

/// Errors from the naming collaborator.
#[derive(Error, Debug)]
pub enum NamingError {
    /// The requested path has no binding.
    #[error("naming path `{0}` is unbound")]
    Unbound(String),
}
