//! get_utxos - query unspent outputs and present them for approval.

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::GetUtxosParams;
use crate::rpc::responses::RpcResponse;
use crate::trigger::{confirm, RequestMetadata, Trigger, TriggerHandler};
use crate::validation::validate_network;

pub(crate) async fn get_utxos(
    params: GetUtxosParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    let details = wallet.utxos(&params.query).await.map_err(RpcError::Wallet)?;

    // An empty result set is still shown; the operator decides what an empty
    // answer means to the caller.
    confirm(
        triggers,
        Trigger::UtxoConfirmation {
            details: details.clone(),
        },
        metadata,
    )
    .await?;

    Ok(RpcResponse::GetUtxos(details))
}
