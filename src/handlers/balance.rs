//! get_balance - fetch balances, then show the real numbers for approval.

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::GetBalanceParams;
use crate::rpc::responses::RpcResponse;
use crate::trigger::{confirm, RequestMetadata, Trigger, TriggerHandler};
use crate::validation::validate_network;

pub(crate) async fn get_balance(
    params: GetBalanceParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    // Fail fast, before any fetch.
    if params.address_indexes.is_some() {
        return Err(RpcError::NotImplemented("per-address balance breakdown"));
    }

    let mut balances = Vec::with_capacity(params.tokens.len());
    for token in &params.tokens {
        balances.push(wallet.balance(token).await.map_err(RpcError::Wallet)?);
    }

    // The data is already fetched at this point; a rejection aborts before it
    // is returned, never before it is gathered.
    confirm(
        triggers,
        Trigger::BalanceConfirmation {
            balances: balances.clone(),
        },
        metadata,
    )
    .await?;

    Ok(RpcResponse::GetBalance(balances))
}
