//! Inbound operation requests.
//!
//! A request is a tagged union keyed by its method discriminant, immutable
//! once dispatched and consumed by exactly one handler. Every method except
//! `get_connected_network` carries the caller-declared network, which is
//! checked against the engine before any trigger fires.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{CreateTokenParams, UtxoQuery};

/// How `get_address` should obtain the address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AddressStrategy {
    /// First address with no transaction history.
    FirstEmpty,
    /// Explicit derivation path. Recognized but unsupported.
    FullPath { path: String },
    /// Address at a derivation index.
    Index { index: u32 },
    /// Caller supplies an address the operator already picked interactively;
    /// the post-hoc confirmation prompt is skipped.
    Client { address: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAddressParams {
    pub network: String,
    #[serde(flatten)]
    pub strategy: AddressStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBalanceParams {
    pub network: String,
    pub tokens: Vec<String>,
    /// Per-address-index breakdown. Recognized but unsupported; presence
    /// fails fast before any balance is fetched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_indexes: Option<Vec<u32>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUtxosParams {
    pub network: String,
    #[serde(flatten)]
    pub query: UtxoQuery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignWithAddressParams {
    pub network: String,
    pub message: String,
    pub address_index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignOracleDataParams {
    pub network: String,
    pub oracle: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenRequestParams {
    pub network: String,
    #[serde(flatten)]
    pub token: CreateTokenParams,
}

fn default_push_tx() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendNanoContractTxParams {
    pub network: String,
    pub method: String,
    /// Required for calls that instantiate a blueprint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
    /// Required for calls against an existing contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nc_id: Option<String>,
    #[serde(default)]
    pub actions: Vec<Value>,
    #[serde(default)]
    pub args: Vec<Value>,
    /// Push the built transaction to the network, or only build it.
    #[serde(default = "default_push_tx")]
    pub push_tx: bool,
}

/// One inbound operation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum RpcRequest {
    GetAddress(GetAddressParams),
    GetBalance(GetBalanceParams),
    GetUtxos(GetUtxosParams),
    GetConnectedNetwork,
    SignWithAddress(SignWithAddressParams),
    SignOracleData(SignOracleDataParams),
    CreateToken(CreateTokenRequestParams),
    SendNanoContractTx(SendNanoContractTxParams),
}

impl RpcRequest {
    /// Method discriminant as it appears on the wire.
    pub fn method(&self) -> &'static str {
        match self {
            RpcRequest::GetAddress(_) => "get_address",
            RpcRequest::GetBalance(_) => "get_balance",
            RpcRequest::GetUtxos(_) => "get_utxos",
            RpcRequest::GetConnectedNetwork => "get_connected_network",
            RpcRequest::SignWithAddress(_) => "sign_with_address",
            RpcRequest::SignOracleData(_) => "sign_oracle_data",
            RpcRequest::CreateToken(_) => "create_token",
            RpcRequest::SendNanoContractTx(_) => "send_nano_contract_tx",
        }
    }
}

/// Every method discriminant this dispatcher recognizes.
pub(crate) const METHODS: &[&str] = &[
    "get_address",
    "get_balance",
    "get_utxos",
    "get_connected_network",
    "sign_with_address",
    "sign_oracle_data",
    "create_token",
    "send_nano_contract_tx",
];
