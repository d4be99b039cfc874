use invoq::{BoxError, Endpoint, InvocationRequest, MethodTable, TargetRef, Variant};
use std::io;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Test Target
// ============================================================================

pub struct EchoService;

pub fn service() -> TargetRef {
    Arc::new(EchoService)
}

pub fn plain_endpoint() -> Arc<Endpoint> {
    Arc::new(Endpoint::builder().build())
}

/// A table with a single pass-through `echo` method.
pub fn echo_table() -> Arc<MethodTable> {
    Arc::new(
        MethodTable::builder()
            .method::<EchoService, _, _>("echo", |_svc, mut args| async move {
                Ok(args.remove(0))
            })
            .build(),
    )
}

// ============================================================================
// Test Variants
// ============================================================================

/// Variant whose one-time setup fails a fixed number of times before
/// succeeding.
pub struct FlakyInitVariant {
    pub attempts: Arc<AtomicUsize>,
    pub failures: usize,
}

impl Variant for FlakyInitVariant {
    async fn on_initialize(
        &self,
        _endpoint: &Endpoint,
        _request: &InvocationRequest,
    ) -> Result<(), BoxError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            Err(Box::new(io::Error::other("init refused")))
        } else {
            Ok(())
        }
    }
}
