//! Method resolution.
//!
//! A [`MethodResolver`] maps a requested [`MethodId`] to a [`MethodHandle`]
//! bound to the target's concrete type. Resolution is a narrow collaborator
//! seam: the dispatcher only asks for a handle and calls it; how the mapping
//! is built (a registration table, generated glue, reflection over a schema)
//! is the resolver's business.

use crate::error::{BoxError, ResolutionError};
use crate::request::{MethodId, TargetRef};
use serde_json::Value;
use std::any::{Any, type_name};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by a method handle.
pub type MethodFuture = Pin<Box<dyn Future<Output = Result<Value, BoxError>> + Send>>;

type MethodFn = dyn Fn(TargetRef, Vec<Value>) -> MethodFuture + Send + Sync;

/// A callable implementation method, bound to a concrete target type.
///
/// Handles are cheap to clone and safe to call concurrently; each call
/// receives the target reference and an owned argument sequence.
#[derive(Clone)]
pub struct MethodHandle {
    call: Arc<MethodFn>,
}

impl MethodHandle {
    /// Create a handle from a type-erased callable.
    pub fn new(
        call: impl Fn(TargetRef, Vec<Value>) -> MethodFuture + Send + Sync + 'static,
    ) -> Self {
        MethodHandle {
            call: Arc::new(call),
        }
    }

    /// Create a handle from a callable over a concrete target type.
    ///
    /// The target is downcast on every call; invoking the handle against a
    /// target of another type fails with [`ResolutionError::TargetMismatch`].
    pub fn of<T, F, Fut>(call: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(Arc<T>, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
    {
        MethodHandle::new(move |target, args| -> MethodFuture {
            match target.downcast::<T>() {
                Ok(target) => Box::pin(call(target, args)),
                Err(_) => Box::pin(async {
                    Err(Box::new(ResolutionError::TargetMismatch {
                        expected: type_name::<T>(),
                    }) as BoxError)
                }),
            }
        })
    }

    /// Invoke the method against `target` with `args`.
    pub async fn invoke(&self, target: TargetRef, args: Vec<Value>) -> Result<Value, BoxError> {
        (self.call)(target, args).await
    }
}

impl fmt::Debug for MethodHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MethodHandle(..)")
    }
}

/// Resolves a requested method identifier to an implementation method.
pub trait MethodResolver: Send + Sync {
    /// Look up the handle for `method`.
    fn resolve(&self, method: &MethodId) -> Result<MethodHandle, ResolutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Doubler;

    #[tokio::test]
    async fn typed_handle_invokes_the_target() {
        let handle = MethodHandle::of::<Doubler, _, _>(|_target, mut args| async move {
            let n = args.remove(0).as_i64().unwrap();
            Ok(json!(n * 2))
        });
        let target: TargetRef = Arc::new(Doubler);
        let out = handle.invoke(target, vec![json!(21)]).await.unwrap();
        assert_eq!(out, json!(42));
    }

    #[tokio::test]
    async fn typed_handle_rejects_a_foreign_target() {
        let handle = MethodHandle::of::<Doubler, _, _>(|_target, _args| async { Ok(json!(0)) });
        let target: TargetRef = Arc::new("not a doubler");
        let err = handle.invoke(target, vec![]).await.unwrap_err();
        let resolution = err.downcast::<ResolutionError>().unwrap();
        assert!(matches!(
            *resolution,
            ResolutionError::TargetMismatch { .. }
        ));
    }
}
