//! Beegate: operator-confirmed wallet RPC. Nothing state-changing happens
//! without a human saying yes first.
//!
//! # Architecture
//!
//! ```text
//! caller ──► rpc::handle (dispatcher)
//!               │
//!               ├── validation (network gate, before any prompt)
//!               │
//!               ├── handlers::* (one per method)
//!               │      │
//!               │      ├── TriggerHandler ⇄ presentation layer
//!               │      │     confirmations + PIN: blocking
//!               │      │     loading start/finish: fire-and-forget
//!               │      │
//!               │      └── WalletEngine (derivation, signing, balances,
//!               │            token creation, contract calls)
//!               │
//!               └── RpcResponse | RpcError (exactly one, per request)
//! ```
//!
//! # Methods
//!
//! | Method | Confirmation | PIN | State-changing |
//! |--------|--------------|-----|----------------|
//! | `get_address` | derived address (skipped for caller-supplied) | no | no |
//! | `get_balance` | fetched balance list | no | no |
//! | `get_utxos` | fetched UTXO details | no | no |
//! | `get_connected_network` | none | no | no |
//! | `sign_with_address` | address + message | yes | no |
//! | `sign_oracle_data` | oracle + data | yes | no |
//! | `create_token` | full parameter set | yes | yes |
//! | `send_nano_contract_tx` | full call (operator may edit) | yes | yes |
//!
//! Every blocking prompt that does not come back accepted aborts the whole
//! request at that exact point with `RpcError::PromptRejected`: no later
//! trigger fires and the wallet-engine method is never invoked.
//!
//! This crate does no cryptography, no transport, and no persistence. The
//! wallet engine and the presentation layer are injected capabilities; see
//! [`engine::WalletEngine`] and [`trigger::TriggerHandler`].

pub mod bridge;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod rpc;
pub mod trigger;
pub mod validation;

mod handlers;

pub use bridge::{ChannelTriggerHandler, TriggerEnvelope};
pub use engine::{
    AddressInfo, CreateTokenParams, NanoContractCall, TokenBalance, Utxo, UtxoDetails, UtxoQuery,
    WalletEngine,
};
pub use errors::{RpcError, RpcResult};
pub use rpc::{handle, handle_value, RpcRequest, RpcResponse};
pub use trigger::{
    NanoContractApproval, RequestMetadata, Trigger, TriggerHandler, TriggerResponse,
};
