//! Trigger handshake - the only seam between handlers and the presentation
//! layer.
//!
//! A handler never talks to any UI directly. It emits [`Trigger`]s through an
//! injected [`TriggerHandler`] and reads back [`TriggerResponse`]s. Two
//! disciplines:
//!
//! - **Blocking** (`trigger`): confirmations and the PIN prompt. The handler
//!   awaits the response and aborts with `PromptRejected` unless it comes
//!   back accepted.
//! - **Fire-and-forget** (`notify`): loading notifications. Called
//!   synchronously, never awaited, failures invisible to the handler.
//!
//! Ordering rule for every multi-step handler: action confirmation, then PIN,
//! then the wallet-engine call, then loading-finished.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{AddressInfo, CreateTokenParams, TokenBalance, UtxoDetails};
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::SendNanoContractTxParams;

/// Opaque caller-supplied context (session id, origin, ...). Threaded
/// unchanged through every trigger call; the protocol never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMetadata(pub Value);

impl RequestMetadata {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

/// One unit of required external interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Show a derived address for approval.
    AddressConfirmation { address: AddressInfo },
    /// Show the full fetched balance list for approval.
    BalanceConfirmation { balances: Vec<TokenBalance> },
    /// Show the fetched UTXO details for approval.
    UtxoConfirmation { details: UtxoDetails },
    /// Show the address and the message about to be signed.
    SignMessageConfirmation { address: AddressInfo, message: String },
    /// Show the oracle id and payload about to be signed.
    SignOracleDataConfirmation { oracle: String, data: String },
    /// Show the full token-creation parameter set.
    CreateTokenConfirmation { params: CreateTokenParams },
    /// Show the full contract call. The accepted response supplies the
    /// authoritative caller address and possibly edited actions/args.
    SendNanoContractTxConfirmation { call: SendNanoContractTxParams },
    /// Collect the operator's PIN. No payload.
    PinRequest,
    /// Fire-and-forget: a wallet-engine call is about to start.
    LoadingStarted,
    /// Fire-and-forget: the wallet-engine call finished (either way).
    LoadingFinished,
}

/// Operator-edited contract-call data carried by an accepted confirmation.
/// Supersedes the inbound request's values for the actual engine call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NanoContractApproval {
    pub caller: String,
    #[serde(default)]
    pub actions: Option<Vec<Value>>,
    #[serde(default)]
    pub args: Option<Vec<Value>>,
}

/// The presentation layer's answer to a blocking [`Trigger`]. Anything other
/// than `accepted == true` (including a wrong-variant answer) means abort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerResponse {
    /// Answer to any plain confirmation prompt.
    Confirmed { accepted: bool },
    /// Answer to [`Trigger::PinRequest`].
    PinEntered {
        accepted: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pin: Option<String>,
    },
    /// Answer to [`Trigger::SendNanoContractTxConfirmation`].
    NanoContractConfirmed {
        accepted: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<NanoContractApproval>,
    },
}

impl TriggerResponse {
    pub fn accepted(&self) -> bool {
        match self {
            TriggerResponse::Confirmed { accepted } => *accepted,
            TriggerResponse::PinEntered { accepted, .. } => *accepted,
            TriggerResponse::NanoContractConfirmed { accepted, .. } => *accepted,
        }
    }
}

/// The single injected capability handlers use to reach the presentation
/// layer. See the module docs for the two disciplines.
#[async_trait]
pub trait TriggerHandler: Send + Sync {
    /// Render the trigger, collect operator input, reply.
    async fn trigger(
        &self,
        trigger: Trigger,
        metadata: &RequestMetadata,
    ) -> anyhow::Result<TriggerResponse>;

    /// Dispatch a loading notification. Must not block and must not fail
    /// into the caller.
    fn notify(&self, trigger: Trigger, metadata: &RequestMetadata);
}

/// Emit a blocking confirmation and abort unless it comes back accepted.
pub(crate) async fn confirm(
    handler: &dyn TriggerHandler,
    trigger: Trigger,
    metadata: &RequestMetadata,
) -> RpcResult<TriggerResponse> {
    let response = handler
        .trigger(trigger, metadata)
        .await
        .map_err(RpcError::Prompt)?;
    if !response.accepted() {
        return Err(RpcError::PromptRejected);
    }
    Ok(response)
}

/// Emit the PIN prompt and return the entered PIN. An accepted answer with no
/// PIN attached counts as a rejection.
pub(crate) async fn request_pin(
    handler: &dyn TriggerHandler,
    metadata: &RequestMetadata,
) -> RpcResult<String> {
    match confirm(handler, Trigger::PinRequest, metadata).await? {
        TriggerResponse::PinEntered { pin: Some(pin), .. } => Ok(pin),
        _ => Err(RpcError::PromptRejected),
    }
}
