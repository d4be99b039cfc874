//! # invoq-std
//!
//! Standard implementations for the Invoq endpoint invocation dispatcher.
//!
//! This crate provides:
//! - **Context registry**: [`ContextRegistry`], the execution-unit keyed
//!   store for call-scoped context values
//! - **Method table**: [`MethodTable`], a registration-table resolver
//! - **Standard variants**: [`variants::InjectingVariant`],
//!   [`variants::NullVariant`]
//! - **Testing doubles**: recording variant, injector, teardown registry and
//!   a static naming lookup

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use invoq_core;

// Modules
mod context;
mod resolver;
pub mod testing;
pub mod variants;

pub use context::ContextRegistry;
pub use resolver::{MethodTable, MethodTableBuilder};
