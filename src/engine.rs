//! Wallet engine boundary.
//!
//! The engine performs the actual key derivation, signing, balance/UTXO
//! lookup, and transaction building/submission. This crate never does any of
//! that itself; handlers call the minimal trait below and wrap its failures
//! into the [`RpcError`](crate::errors::RpcError) taxonomy.
//!
//! PIN-gated methods take the PIN as an explicit parameter. Engines that
//! internally want the PIN stashed on the handle must do that adaptation on
//! their side of this boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One derived wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address: String,
    pub index: u32,
    /// Derivation path, when the engine exposes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Balance of a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    pub token: String,
    pub unlocked: u64,
    pub locked: u64,
}

/// Filters for a UTXO query. All fields optional except the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoQuery {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_utxos: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_smaller_than: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_bigger_than: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<u64>,
    #[serde(default)]
    pub only_available_utxos: bool,
}

/// A single unspent output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    pub tx_id: String,
    pub index: u32,
    pub address: String,
    pub amount: u64,
    #[serde(default)]
    pub locked: bool,
}

/// Aggregate result of a UTXO query, presented to the operator as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtxoDetails {
    pub total_amount_available: u64,
    pub total_utxos_available: u64,
    pub total_amount_locked: u64,
    pub total_utxos_locked: u64,
    pub utxos: Vec<Utxo>,
}

/// Full parameter set for token creation. The whole record is shown to the
/// operator before any PIN is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenParams {
    pub name: String,
    pub symbol: String,
    pub amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    #[serde(default)]
    pub create_mint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_authority_address: Option<String>,
    #[serde(default)]
    pub allow_external_mint_authority_address: bool,
    #[serde(default)]
    pub create_melt: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub melt_authority_address: Option<String>,
    #[serde(default)]
    pub allow_external_melt_authority_address: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

/// A nano contract call as handed to the engine. `caller` and `actions` come
/// from the *accepted confirmation response*, not from the inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NanoContractCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nc_id: Option<String>,
    pub caller: String,
    #[serde(default)]
    pub actions: Vec<Value>,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Minimal wallet engine surface the handlers need. One implementation per
/// wallet backend; handlers hold it behind `Arc<dyn WalletEngine>`.
#[async_trait]
pub trait WalletEngine: Send + Sync {
    /// Configured network identifier ("mainnet", "testnet", ...).
    fn network(&self) -> String;

    /// First address with no transaction history.
    async fn first_empty_address(&self) -> anyhow::Result<AddressInfo>;

    /// Address at a specific derivation index.
    async fn address_at_index(&self, index: u32) -> anyhow::Result<AddressInfo>;

    /// Derivation index of `address`, or `None` if the wallet does not own it.
    async fn index_of_address(&self, address: &str) -> anyhow::Result<Option<u32>>;

    /// Balance of one token.
    async fn balance(&self, token: &str) -> anyhow::Result<TokenBalance>;

    /// UTXOs matching the query.
    async fn utxos(&self, query: &UtxoQuery) -> anyhow::Result<UtxoDetails>;

    /// Sign an arbitrary message with the key at `index`.
    async fn sign_message(&self, message: &str, index: u32, pin: &str) -> anyhow::Result<String>;

    /// Sign oracle payload bytes (hex-encoded result).
    async fn sign_oracle_data(&self, oracle: &str, data: &str, pin: &str)
        -> anyhow::Result<String>;

    /// Build and push a create-token transaction. Result is returned to the
    /// caller unchanged.
    async fn create_token(&self, params: &CreateTokenParams, pin: &str) -> anyhow::Result<Value>;

    /// Build a nano contract transaction; push it to the network when `push`
    /// is set, otherwise return the built transaction.
    async fn send_nano_contract(
        &self,
        call: &NanoContractCall,
        pin: &str,
        push: bool,
    ) -> anyhow::Result<Value>;
}
