//! Per-call invocation request.
//!
//! An [`InvocationRequest`] is the unit of work handed to a dispatcher: the
//! target instance, the requested method identifier, the argument sequence,
//! and a result slot the dispatcher writes exactly once. Ownership is
//! exclusive to the one call that created it; requests are never shared
//! between concurrent calls.

use crate::attachments::Attachments;
use crate::error::DispatchError;
use crate::unit::UnitId;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Shared reference to a target instance of erased concrete type.
pub type TargetRef = Arc<dyn Any + Send + Sync>;

/// Identifier of a requested operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodId(String);

impl MethodId {
    /// Create a method identifier.
    pub fn new(name: impl Into<String>) -> Self {
        MethodId(name.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MethodId {
    fn from(name: &str) -> Self {
        MethodId::new(name)
    }
}

impl From<String> for MethodId {
    fn from(name: String) -> Self {
        MethodId(name)
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One in-flight service call.
///
/// Created by the caller before dispatch. The dispatcher writes the result
/// slot exactly once; the caller inspects [`outcome`](Self::outcome) after
/// `dispatch` returns instead of catching an error. A finished request is
/// spent; it must not be dispatched again.
pub struct InvocationRequest {
    target: TargetRef,
    method: MethodId,
    args: Vec<Value>,
    unit: UnitId,
    attachments: Attachments,
    outcome: Option<Result<Value, DispatchError>>,
}

impl InvocationRequest {
    /// Create a request against `target` for `method` with `args`.
    ///
    /// The request is stamped with the calling thread's [`UnitId`]; use
    /// [`with_unit`](Self::with_unit) to override it (e.g. when the request
    /// was decoded on a different thread than the one that will observe the
    /// call context).
    pub fn new(target: TargetRef, method: impl Into<MethodId>, args: Vec<Value>) -> Self {
        InvocationRequest {
            target,
            method: method.into(),
            args,
            unit: UnitId::current(),
            attachments: Attachments::new(),
            outcome: None,
        }
    }

    /// Override the execution unit the call is attributed to.
    pub fn with_unit(mut self, unit: UnitId) -> Self {
        self.unit = unit;
        self
    }

    /// The target instance.
    pub fn target(&self) -> &TargetRef {
        &self.target
    }

    /// The requested method identifier.
    pub fn method(&self) -> &MethodId {
        &self.method
    }

    /// The argument sequence.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// The execution unit this call is attributed to.
    pub fn unit(&self) -> UnitId {
        self.unit
    }

    /// Collaborator-supplied context objects for this call.
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }

    /// Mutable access to the attachment map (caller-side setup).
    pub fn attachments_mut(&mut self) -> &mut Attachments {
        &mut self.attachments
    }

    /// Record a success value. Written by the dispatcher.
    pub fn complete(&mut self, value: Value) {
        debug_assert!(self.outcome.is_none(), "result slot already written");
        self.outcome = Some(Ok(value));
    }

    /// Record a failure. Written by the dispatcher.
    pub fn fail(&mut self, error: DispatchError) {
        debug_assert!(self.outcome.is_none(), "result slot already written");
        self.outcome = Some(Err(error));
    }

    /// The recorded outcome, if the request has been dispatched.
    pub fn outcome(&self) -> Option<&Result<Value, DispatchError>> {
        self.outcome.as_ref()
    }

    /// Take the recorded outcome out of the request.
    pub fn take_outcome(&mut self) -> Option<Result<Value, DispatchError>> {
        self.outcome.take()
    }

    /// Whether a terminal outcome has been recorded.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}

impl fmt::Debug for InvocationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationRequest")
            .field("method", &self.method)
            .field("unit", &self.unit)
            .field("args", &self.args.len())
            .field("finished", &self.outcome.is_some())
            .finish()
    }
}
