//! Successful operation responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{AddressInfo, TokenBalance, UtxoDetails};

/// Address payload. Derivation index/path are absent when the caller
/// supplied the address itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressResponse {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<AddressInfo> for AddressResponse {
    fn from(info: AddressInfo) -> Self {
        Self {
            address: info.address,
            index: Some(info.index),
            path: info.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    pub network: String,
    /// Currently always empty; reserved for chains that expose it.
    #[serde(default)]
    pub genesis_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedMessage {
    pub message: String,
    pub signature: String,
    pub address: AddressInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OracleSignature {
    pub oracle: String,
    pub data: String,
    pub signature: String,
}

/// One successful operation result, keyed by a response-kind discriminant.
/// Failures are never encoded here; they surface as
/// [`RpcError`](crate::errors::RpcError).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "response", rename_all = "snake_case")]
pub enum RpcResponse {
    GetAddress(AddressResponse),
    GetBalance(Vec<TokenBalance>),
    GetUtxos(UtxoDetails),
    GetConnectedNetwork(NetworkInfo),
    SignWithAddress(SignedMessage),
    SignOracleData(OracleSignature),
    /// Engine result of the create-token call, unchanged.
    CreateToken(Value),
    /// Engine result of the contract call (built or pushed tx), unchanged.
    SendNanoContractTx(Value),
}
