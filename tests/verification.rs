//! End-to-end tests for the carrier entitlement SDK.
//!
//! These tests exercise the full wiring: composition root → use case →
//! capability, plus the verification flow on top, using the crate's own
//! testing doubles (no platform subsystem required).

#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::time::Duration;

use carrier_entitlement::prelude::*;
use test_case::test_case;

/// Installs a subscriber so check-path events show up under `--nocapture`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

#[test_case(true; "granted forwarded intact")]
#[test_case(false; "not granted forwarded intact")]
fn end_to_end_stub_verdict_is_forwarded(granted: bool) {
    init_tracing();
    let sdk = Sdk::builder()
        .checker(Arc::new(StubChecker::granted(granted)))
        .build();

    let result = sdk.check_entitlement().execute();
    assert_eq!(result.ok(), Some(granted));
}

#[test]
fn end_to_end_stub_failure_is_forwarded_unchanged() {
    let stub = StubChecker::failing(Error::check_failed(std::io::Error::other(
        "telephony subsystem unavailable",
    )));
    let sdk = Sdk::builder().checker(Arc::new(stub)).build();

    let err = sdk
        .check_entitlement()
        .execute()
        .expect_err("stub is configured to fail");
    assert_eq!(err.kind(), ErrorKind::CheckFailed);
    assert!(err.to_string().contains("telephony subsystem unavailable"));
}

#[test]
fn end_to_end_absent_subsystem_is_not_granted() {
    // Default wiring has no telephony subsystem: deterministically Ok(false),
    // never an error.
    let sdk = Sdk::builder().build();
    let result = sdk.check_entitlement().execute();
    assert_eq!(result.ok(), Some(false));
}

#[test]
fn end_to_end_bridged_token_source_is_granted() {
    let sdk = Sdk::builder()
        .token_source(Arc::new(StaticTokenSource::present("opaque-token")))
        .build();
    assert_eq!(sdk.check_entitlement().execute().ok(), Some(true));
}

#[test]
fn end_to_end_checks_are_idempotent() {
    let sdk = Sdk::builder()
        .token_source(Arc::new(StaticTokenSource::present("opaque-token")))
        .build();

    let check = sdk.check_entitlement();
    let first = check.execute().expect("check succeeds");
    let second = check.execute().expect("check succeeds");
    assert_eq!(first, second);
}

#[tokio::test(start_paused = true)]
async fn end_to_end_flow_transitions_once_after_delay() {
    init_tracing();
    let stub = StubChecker::granted(true);
    let sdk = Sdk::builder()
        .checker(Arc::new(stub.clone()))
        .check_delay(Duration::from_millis(500))
        .build();

    let mut screen = sdk.verification(VerificationOptions::new().header_text("My App"));
    assert!(screen.state().is_loading());

    let started = tokio::time::Instant::now();
    screen.run().await;

    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(screen.state().is_granted());
    assert_eq!(stub.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn end_to_end_flow_renders_missing_entitlement() {
    let sdk = Sdk::builder()
        .checker(Arc::new(StubChecker::granted(false)))
        .check_delay(Duration::from_millis(1))
        .build();

    let mut screen = sdk.verification(VerificationOptions::new());
    screen.run().await;

    let err = screen.state().error().expect("absence renders as an error");
    assert_eq!(err.kind(), ErrorKind::EntitlementMissing);
    assert!(screen.status_text().contains("missing"));
}
