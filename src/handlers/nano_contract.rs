//! send_nano_contract_tx - build (and optionally push) a nano contract call.
//!
//! The accepted confirmation response is authoritative: it supplies the
//! caller address, and the operator may have edited the action/argument
//! lists. Those values supersede the inbound request's for the engine call.

use tracing::warn;

use crate::engine::{NanoContractCall, WalletEngine};
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::SendNanoContractTxParams;
use crate::rpc::responses::RpcResponse;
use crate::trigger::{
    confirm, request_pin, RequestMetadata, Trigger, TriggerHandler, TriggerResponse,
};
use crate::validation::validate_network;

pub(crate) async fn send_nano_contract_tx(
    params: SendNanoContractTxParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    if params.blueprint_id.is_none() && params.nc_id.is_none() {
        return Err(RpcError::SendNanoContractTx {
            message: "either a blueprint id or a contract id is required".to_string(),
        });
    }

    let response = confirm(
        triggers,
        Trigger::SendNanoContractTxConfirmation {
            call: params.clone(),
        },
        metadata,
    )
    .await?;

    // An accepted answer without the approval payload has no caller address
    // to act on, so it is treated as a rejection.
    let approval = match response {
        TriggerResponse::NanoContractConfirmed {
            payload: Some(approval),
            ..
        } => approval,
        _ => return Err(RpcError::PromptRejected),
    };

    let pin = request_pin(triggers, metadata).await?;

    let call = NanoContractCall {
        method: params.method,
        blueprint_id: params.blueprint_id,
        nc_id: params.nc_id,
        caller: approval.caller,
        actions: approval.actions.unwrap_or(params.actions),
        args: approval.args.unwrap_or(params.args),
    };

    triggers.notify(Trigger::LoadingStarted, metadata);
    let result = wallet.send_nano_contract(&call, &pin, params.push_tx).await;
    triggers.notify(Trigger::LoadingFinished, metadata);

    let tx = result.map_err(|e| {
        warn!(method = %call.method, "nano contract tx failed: {e:#}");
        RpcError::SendNanoContractTx {
            message: e.to_string(),
        }
    })?;

    Ok(RpcResponse::SendNanoContractTx(tx))
}
