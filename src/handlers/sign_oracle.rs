//! sign_oracle_data - confirm the oracle payload, collect PIN, sign.
//!
//! The PIN is passed to the engine call explicitly; there is no side channel
//! on the wallet handle.

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::SignOracleDataParams;
use crate::rpc::responses::{OracleSignature, RpcResponse};
use crate::trigger::{confirm, request_pin, RequestMetadata, Trigger, TriggerHandler};
use crate::validation::validate_network;

pub(crate) async fn sign_oracle_data(
    params: SignOracleDataParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    confirm(
        triggers,
        Trigger::SignOracleDataConfirmation {
            oracle: params.oracle.clone(),
            data: params.data.clone(),
        },
        metadata,
    )
    .await?;

    let pin = request_pin(triggers, metadata).await?;

    let signature = wallet
        .sign_oracle_data(&params.oracle, &params.data, &pin)
        .await
        .map_err(RpcError::Wallet)?;

    Ok(RpcResponse::SignOracleData(OracleSignature {
        oracle: params.oracle,
        data: params.data,
        signature,
    }))
}
