//! Stateless precondition checks, run before any trigger fires.

use crate::engine::WalletEngine;
use crate::errors::{RpcError, RpcResult};

/// A mismatched network is a caller configuration bug, not a transient
/// condition: fail immediately, no retries, no prompt.
pub fn validate_network(wallet: &dyn WalletEngine, requested: &str) -> RpcResult<()> {
    let connected = wallet.network();
    if connected != requested {
        return Err(RpcError::DifferentNetwork {
            connected,
            requested: requested.to_string(),
        });
    }
    Ok(())
}
