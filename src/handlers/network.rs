//! get_connected_network - pure read, no trigger at all.

use crate::engine::WalletEngine;
use crate::errors::RpcResult;
use crate::rpc::responses::{NetworkInfo, RpcResponse};

pub(crate) async fn get_connected_network(wallet: &dyn WalletEngine) -> RpcResult<RpcResponse> {
    Ok(RpcResponse::GetConnectedNetwork(NetworkInfo {
        network: wallet.network(),
        genesis_hash: String::new(),
    }))
}
