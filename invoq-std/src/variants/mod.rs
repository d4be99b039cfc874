//! Standard dispatcher variants.
//!
//! A variant specializes the generic invocation lifecycle for one endpoint
//! style. Two styles ship here:
//!
//! - [`NullVariant`] - plain endpoints with no lifecycle behavior
//! - [`InjectingVariant`] - managed endpoints: one-time resource injection
//!   plus call-context publication around every invocation

mod injecting;
mod null;

pub use injecting::InjectingVariant;
pub use null::NullVariant;
