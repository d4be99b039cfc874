//! Per-call lifecycle tests: hook ordering, failure capture, and the
//! after-invoke-always guarantee.

use invoq::testing::{HookKind, RecordingVariant};
use invoq::{
    BoxError, DispatchError, InvocationDispatcher, InvocationRequest, MethodTable, NullVariant,
};
use serde_json::json;
use std::io;
use std::sync::Arc;

mod common;
use common::{EchoService, plain_endpoint, service};

/// Echo and a failing method, both journaling the actual call through the
/// shared variant.
fn lifecycle_table(variant: &RecordingVariant) -> Arc<MethodTable> {
    let journal = variant.clone();
    Arc::new(
        MethodTable::builder()
            .method::<EchoService, _, _>("echo", move |_svc, mut args| {
                let journal = journal.clone();
                async move {
                    journal.record(HookKind::Invoke);
                    Ok(args.remove(0))
                }
            })
            .method::<EchoService, _, _>("explode", |_svc, _args| async {
                Err(Box::new(io::Error::other("boom")) as BoxError)
            })
            .build(),
    )
}

#[tokio::test]
async fn echo_round_trip_runs_hooks_in_order() {
    let variant = RecordingVariant::new();
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    let mut request = InvocationRequest::new(service(), "echo", vec![json!("hi")]);
    dispatcher.dispatch(&mut request).await;

    assert!(matches!(request.outcome(), Some(Ok(v)) if *v == json!("hi")));
    assert_eq!(
        variant.calls(),
        vec![
            HookKind::Initialize,
            HookKind::BeforeInvoke,
            HookKind::Invoke,
            HookKind::AfterInvoke,
        ]
    );
}

#[tokio::test]
async fn a_plain_endpoint_dispatches_with_no_lifecycle_behavior() {
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), common::echo_table(), NullVariant);

    let mut request = InvocationRequest::new(service(), "echo", vec![json!("plain")]);
    dispatcher.dispatch(&mut request).await;

    assert!(matches!(request.outcome(), Some(Ok(v)) if *v == json!("plain")));
    assert!(dispatcher.is_initialized());
}

#[tokio::test]
async fn target_error_is_captured_and_after_hook_still_runs() {
    let variant = RecordingVariant::new();
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    let mut request = InvocationRequest::new(service(), "explode", vec![]);
    dispatcher.dispatch(&mut request).await;

    match request.take_outcome() {
        Some(Err(DispatchError::Invocation(error))) => {
            assert_eq!(error.to_string(), "boom");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(variant.count(HookKind::AfterInvoke), 1);
}

#[tokio::test]
async fn resolver_miss_still_runs_both_hooks() {
    let variant = RecordingVariant::new();
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    let mut request = InvocationRequest::new(service(), "no_such_method", vec![]);
    dispatcher.dispatch(&mut request).await;

    assert!(matches!(
        request.outcome(),
        Some(Err(DispatchError::Resolution(_)))
    ));
    assert_eq!(
        variant.calls(),
        vec![
            HookKind::Initialize,
            HookKind::BeforeInvoke,
            HookKind::AfterInvoke,
        ]
    );
}

#[tokio::test]
async fn before_invoke_failure_skips_the_call_but_not_the_after_hook() {
    let variant = RecordingVariant::failing(HookKind::BeforeInvoke);
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    let mut request = InvocationRequest::new(service(), "echo", vec![json!("hi")]);
    dispatcher.dispatch(&mut request).await;

    assert!(matches!(
        request.outcome(),
        Some(Err(DispatchError::BeforeInvoke(_)))
    ));
    assert_eq!(variant.count(HookKind::Invoke), 0);
    assert_eq!(variant.count(HookKind::AfterInvoke), 1);
}

#[tokio::test]
async fn initialization_failure_skips_everything_but_the_after_hook() {
    let variant = RecordingVariant::failing(HookKind::Initialize);
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    let mut request = InvocationRequest::new(service(), "echo", vec![json!("hi")]);
    dispatcher.dispatch(&mut request).await;

    assert!(matches!(
        request.outcome(),
        Some(Err(DispatchError::Initialization(_)))
    ));
    assert_eq!(
        variant.calls(),
        vec![HookKind::Initialize, HookKind::AfterInvoke]
    );
}

#[tokio::test]
async fn after_invoke_failure_does_not_mask_the_recorded_outcome() {
    let variant = RecordingVariant::failing(HookKind::AfterInvoke);
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    let mut request = InvocationRequest::new(service(), "echo", vec![json!("hi")]);
    dispatcher.dispatch(&mut request).await;

    assert!(matches!(request.outcome(), Some(Ok(v)) if *v == json!("hi")));
    assert_eq!(variant.count(HookKind::AfterInvoke), 1);
}

#[tokio::test]
async fn a_second_dispatch_does_not_reinitialize() {
    let variant = RecordingVariant::new();
    let dispatcher =
        InvocationDispatcher::new(plain_endpoint(), lifecycle_table(&variant), variant.clone());

    for round in 0..2 {
        let mut request = InvocationRequest::new(service(), "echo", vec![json!(round)]);
        dispatcher.dispatch(&mut request).await;
        assert!(matches!(request.outcome(), Some(Ok(_))));
    }

    assert_eq!(variant.count(HookKind::Initialize), 1);
    assert_eq!(variant.count(HookKind::AfterInvoke), 2);
}
