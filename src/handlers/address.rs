//! get_address - derive an address and have the operator approve it.

use tracing::debug;

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::rpc::requests::{AddressStrategy, GetAddressParams};
use crate::rpc::responses::{AddressResponse, RpcResponse};
use crate::trigger::{confirm, RequestMetadata, Trigger, TriggerHandler};
use crate::validation::validate_network;

pub(crate) async fn get_address(
    params: GetAddressParams,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    validate_network(wallet, &params.network)?;

    let info = match params.strategy {
        // The operator already picked this address interactively, so there is
        // nothing left to confirm.
        AddressStrategy::Client { address } => {
            debug!("returning caller-supplied address without confirmation");
            return Ok(RpcResponse::GetAddress(AddressResponse {
                address,
                index: None,
                path: None,
            }));
        }
        AddressStrategy::FullPath { .. } => {
            return Err(RpcError::NotImplemented("full-path address derivation"))
        }
        AddressStrategy::FirstEmpty => wallet
            .first_empty_address()
            .await
            .map_err(RpcError::Wallet)?,
        AddressStrategy::Index { index } => wallet
            .address_at_index(index)
            .await
            .map_err(RpcError::Wallet)?,
    };

    confirm(
        triggers,
        Trigger::AddressConfirmation {
            address: info.clone(),
        },
        metadata,
    )
    .await?;

    Ok(RpcResponse::GetAddress(info.into()))
}
