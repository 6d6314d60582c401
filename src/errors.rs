//! Protocol error taxonomy.
//!
//! Every failure a handler can produce is one of these named kinds. Wallet
//! engine failures are wrapped at the handler boundary (`CreateToken`,
//! `SendNanoContractTx`, `SignMessage`, or the generic `Wallet`); nothing is
//! swallowed and the dispatcher never translates.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    /// Operator declined a confirmation or PIN step. Never retried here;
    /// retrying means dispatching a fresh request.
    #[error("prompt rejected by operator")]
    PromptRejected,

    /// Caller-declared network does not match the wallet engine's configured
    /// network. Raised before any trigger is emitted.
    #[error("wallet is connected to '{connected}' but the request targets '{requested}'")]
    DifferentNetwork { connected: String, requested: String },

    /// Recognized but intentionally unsupported variant or strategy.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The request's method discriminant is unrecognized.
    #[error("invalid rpc method: {0}")]
    InvalidRpcMethod(String),

    /// Known method, malformed parameter payload.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Wallet engine failure while creating a token. Only possible after the
    /// confirmation and PIN steps were accepted.
    #[error("create token failed: {message}")]
    CreateToken { message: String },

    /// Missing blueprint/contract id, or a wallet engine failure while
    /// building or pushing a nano contract transaction.
    #[error("send nano contract tx failed: {message}")]
    SendNanoContractTx { message: String },

    /// Reserved: a UTXO query matched nothing where the operation needs one.
    #[error("no utxos available")]
    NoUtxosAvailable,

    /// Wallet engine failure while signing a message.
    #[error("sign message failed: {message}")]
    SignMessage { message: String },

    /// An address the request relies on (e.g. a token-creation change
    /// address) is not owned by this wallet.
    #[error("address '{address}' is not owned by this wallet")]
    AddressNotOwned { address: String },

    /// The presentation layer itself failed on a blocking trigger. Distinct
    /// from the operator rejecting it.
    #[error("trigger handler failed: {0:#}")]
    Prompt(anyhow::Error),

    /// Uncategorized wallet engine failure (lookups, derivation).
    #[error("wallet engine error: {0:#}")]
    Wallet(anyhow::Error),
}

pub type RpcResult<T> = Result<T, RpcError>;
