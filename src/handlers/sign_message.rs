//! sign_with_address - confirm, collect PIN, then sign.
//!
//! The signature is computed only after both the action confirmation and the
//! PIN prompt were accepted; rejecting either one means `sign_message` is
//! never invoked.

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::SignWithAddressParams;
use crate::rpc::responses::{RpcResponse, SignedMessage};
use crate::trigger::{confirm, request_pin, RequestMetadata, Trigger, TriggerHandler};
use crate::validation::validate_network;

pub(crate) async fn sign_with_address(
    params: SignWithAddressParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    let info = wallet
        .address_at_index(params.address_index)
        .await
        .map_err(RpcError::Wallet)?;

    confirm(
        triggers,
        Trigger::SignMessageConfirmation {
            address: info.clone(),
            message: params.message.clone(),
        },
        metadata,
    )
    .await?;

    let pin = request_pin(triggers, metadata).await?;

    let signature = wallet
        .sign_message(&params.message, params.address_index, &pin)
        .await
        .map_err(|e| RpcError::SignMessage {
            message: e.to_string(),
        })?;

    Ok(RpcResponse::SignWithAddress(SignedMessage {
        message: params.message,
        signature,
        address: info,
    }))
}
