//! Request/response types and the dispatcher.
//!
//! The dispatcher is pure routing: it matches the method discriminant and
//! hands everything to the per-operation handler. It holds no state, catches
//! no handler errors, and is safe to call concurrently for independent
//! requests (each call gets its own wallet handle, metadata, and trigger
//! handler).

pub mod requests;
pub mod responses;

use serde_json::Value;
use tracing::debug;

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};
use crate::handlers;
use crate::trigger::{RequestMetadata, TriggerHandler};

pub use requests::RpcRequest;
pub use responses::RpcResponse;

/// Route a typed request to its handler. Exhaustive by construction; an
/// unknown method can only exist at the JSON boundary ([`handle_value`]).
pub async fn handle(
    request: RpcRequest,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    debug!(method = request.method(), "dispatching rpc request");
    match request {
        RpcRequest::GetAddress(params) => {
            handlers::address::get_address(params, wallet, metadata, triggers).await
        }
        RpcRequest::GetBalance(params) => {
            handlers::balance::get_balance(params, wallet, metadata, triggers).await
        }
        RpcRequest::GetUtxos(params) => {
            handlers::utxos::get_utxos(params, wallet, metadata, triggers).await
        }
        RpcRequest::GetConnectedNetwork => handlers::network::get_connected_network(wallet).await,
        RpcRequest::SignWithAddress(params) => {
            handlers::sign_message::sign_with_address(params, wallet, metadata, triggers).await
        }
        RpcRequest::SignOracleData(params) => {
            handlers::sign_oracle::sign_oracle_data(params, wallet, metadata, triggers).await
        }
        RpcRequest::CreateToken(params) => {
            handlers::create_token::create_token(params, wallet, metadata, triggers).await
        }
        RpcRequest::SendNanoContractTx(params) => {
            handlers::nano_contract::send_nano_contract_tx(params, wallet, metadata, triggers)
                .await
        }
    }
}

/// JSON entry point for callers that receive requests over some transport.
/// An unrecognized method fails with `InvalidRpcMethod` before any handler
/// runs; malformed params for a known method fail with `InvalidRequest`.
pub async fn handle_value(
    request: Value,
    wallet: &dyn WalletEngine,
    metadata: &RequestMetadata,
    triggers: &dyn TriggerHandler,
) -> RpcResult<RpcResponse> {
    let method = request
        .get("method")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    if !requests::METHODS.contains(&method.as_str()) {
        return Err(RpcError::InvalidRpcMethod(method));
    }
    let request: RpcRequest = serde_json::from_value(request)
        .map_err(|e| RpcError::InvalidRequest(e.to_string()))?;
    handle(request, wallet, metadata, triggers).await
}
