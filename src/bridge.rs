//! Channel bridge to a presentation layer running on its own task.
//!
//! `ChannelTriggerHandler` is a stock [`TriggerHandler`] for hosts whose UI
//! lives elsewhere (another task, a webview, an FFI boundary). Blocking
//! triggers travel over an mpsc channel with a oneshot reply slot;
//! notifications are a lossy `try_send`, so a slow or dead presentation task
//! can never stall or fail a handler.

use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use crate::trigger::{RequestMetadata, Trigger, TriggerHandler, TriggerResponse};

/// One trigger as delivered to the presentation task. `respond_to` is `None`
/// for fire-and-forget notifications.
#[derive(Debug)]
pub struct TriggerEnvelope {
    pub trigger: Trigger,
    pub metadata: RequestMetadata,
    pub respond_to: Option<oneshot::Sender<TriggerResponse>>,
}

pub struct ChannelTriggerHandler {
    tx: mpsc::Sender<TriggerEnvelope>,
}

impl ChannelTriggerHandler {
    /// Build the handler plus the receiving end for the presentation task.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<TriggerEnvelope>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl TriggerHandler for ChannelTriggerHandler {
    async fn trigger(
        &self,
        trigger: Trigger,
        metadata: &RequestMetadata,
    ) -> anyhow::Result<TriggerResponse> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(TriggerEnvelope {
                trigger,
                metadata: metadata.clone(),
                respond_to: Some(reply_tx),
            })
            .await
            .map_err(|_| anyhow::anyhow!("presentation layer is gone"))?;
        reply_rx
            .await
            .map_err(|_| anyhow::anyhow!("presentation layer dropped the prompt"))
    }

    fn notify(&self, trigger: Trigger, metadata: &RequestMetadata) {
        let envelope = TriggerEnvelope {
            trigger,
            metadata: metadata.clone(),
            respond_to: None,
        };
        if let Err(e) = self.tx.try_send(envelope) {
            debug!("dropping loading notification: {e}");
        }
    }
}
