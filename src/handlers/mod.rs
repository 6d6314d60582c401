//! Per-operation handlers.
//!
//! Every handler has the same shape: network gate, then any precondition
//! gathers (data is fetched *before* it is presented, so the operator reviews
//! real values), then the ordered trigger sequence, then the wallet-engine
//! call, then response assembly. A rejection at any blocking step aborts at
//! exactly that point: no later trigger fires and the engine method for the
//! operation is never invoked.

pub(crate) mod address;
pub(crate) mod balance;
pub(crate) mod create_token;
pub(crate) mod nano_contract;
pub(crate) mod network;
pub(crate) mod sign_message;
pub(crate) mod sign_oracle;
pub(crate) mod utxos;
