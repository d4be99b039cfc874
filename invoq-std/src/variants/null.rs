//! The do-nothing variant.

use invoq_core::Variant;

/// A variant with no lifecycle behavior: every hook is the default no-op.
///
/// Suitable for plain endpoints whose targets need no provisioning and whose
/// calls carry no context value.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullVariant;

impl Variant for NullVariant {}
