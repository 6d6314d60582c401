//! create_token - the first of the two multi-step state-changing handlers.
//!
//! Sequence: network gate, change-address ownership check, full-parameter
//! confirmation, PIN, loading-started (fire-and-forget), engine call,
//! loading-finished. Engine failures are wrapped as `CreateToken`; the
//! loading-finished notification still fires on a wrapped failure, but never
//! after an earlier rejection.

use tracing::warn;

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::CreateTokenRequestParams;
use crate::rpc::responses::RpcResponse;
use crate::trigger::{confirm, request_pin, RequestMetadata, Trigger, TriggerHandler};
use crate::validation::validate_network;

pub(crate) async fn create_token(
    params: CreateTokenRequestParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    // Change must land in this wallet; anything else is a caller bug.
    if let Some(change_address) = &params.token.change_address {
        let owned = wallet
            .index_of_address(change_address)
            .await
            .map_err(RpcError::Wallet)?
            .is_some();
        if !owned {
            return Err(RpcError::AddressNotOwned {
                address: change_address.clone(),
            });
        }
    }

    confirm(
        triggers,
        Trigger::CreateTokenConfirmation {
            params: params.token.clone(),
        },
        metadata,
    )
    .await?;

    let pin = request_pin(triggers, metadata).await?;

    triggers.notify(Trigger::LoadingStarted, metadata);
    let result = wallet.create_token(&params.token, &pin).await;
    triggers.notify(Trigger::LoadingFinished, metadata);

    let tx = result.map_err(|e| {
        warn!(token = %params.token.symbol, "create token failed: {e:#}");
        RpcError::CreateToken {
            message: e.to_string(),
        }
    })?;

    Ok(RpcResponse::CreateToken(tx))
}
