//! Channel bridge tests.
//!
//! These tests verify:
//! 1. Blocking triggers round-trip through the mpsc/oneshot pair
//! 2. Notifications never block and never fail the caller
//! 3. A dead presentation task surfaces as an error, not a hang

use beegate::{
    ChannelTriggerHandler, RequestMetadata, Trigger, TriggerHandler, TriggerResponse,
};
use serde_json::json;

/// Test: a blocking trigger reaches the presentation task and the reply
/// comes back
#[tokio::test]
async fn blocking_trigger_round_trip() {
    let (handler, mut rx) = ChannelTriggerHandler::new(8);

    let presentation = tokio::spawn(async move {
        let envelope = rx.recv().await.expect("envelope");
        assert_eq!(envelope.metadata, RequestMetadata::new(json!({ "session": "s-1" })));
        match envelope.trigger {
            Trigger::PinRequest => {}
            other => panic!("wrong trigger: {:?}", other),
        }
        envelope
            .respond_to
            .expect("blocking trigger carries a reply slot")
            .send(TriggerResponse::PinEntered {
                accepted: true,
                pin: Some("1234".into()),
            })
            .expect("reply");
    });

    let metadata = RequestMetadata::new(json!({ "session": "s-1" }));
    let response = handler
        .trigger(Trigger::PinRequest, &metadata)
        .await
        .expect("response");
    assert!(response.accepted());
    presentation.await.expect("presentation task");
}

/// Test: notifications carry no reply slot
#[tokio::test]
async fn notification_has_no_reply_slot() {
    let (handler, mut rx) = ChannelTriggerHandler::new(8);
    handler.notify(Trigger::LoadingStarted, &RequestMetadata::default());

    let envelope = rx.recv().await.expect("envelope");
    assert_eq!(envelope.trigger, Trigger::LoadingStarted);
    assert!(envelope.respond_to.is_none());
}

/// Test: a full or closed channel drops notifications silently
#[tokio::test]
async fn notification_is_lossy_under_pressure() {
    let (handler, rx) = ChannelTriggerHandler::new(1);
    let metadata = RequestMetadata::default();

    // Fill the only slot, then overflow it. Neither call may block or panic.
    handler.notify(Trigger::LoadingStarted, &metadata);
    handler.notify(Trigger::LoadingFinished, &metadata);

    // Same once the presentation side is gone entirely.
    drop(rx);
    handler.notify(Trigger::LoadingFinished, &metadata);
}

/// Test: a presentation task that drops the prompt yields an error
#[tokio::test]
async fn dropped_prompt_is_an_error() {
    let (handler, mut rx) = ChannelTriggerHandler::new(8);

    tokio::spawn(async move {
        let envelope = rx.recv().await.expect("envelope");
        drop(envelope.respond_to);
    });

    let err = handler
        .trigger(Trigger::PinRequest, &RequestMetadata::default())
        .await
        .expect_err("dropped");
    assert!(err.to_string().contains("dropped"));
}

/// Test: a closed channel fails the blocking trigger immediately
#[tokio::test]
async fn closed_channel_fails_blocking_trigger() {
    let (handler, rx) = ChannelTriggerHandler::new(8);
    drop(rx);

    let err = handler
        .trigger(Trigger::PinRequest, &RequestMetadata::default())
        .await
        .expect_err("closed");
    assert!(err.to_string().contains("gone"));
}
