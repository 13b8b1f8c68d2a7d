//! Error types for the coin bridge
//!
//! Gating failures, VM failures and balance invariance violations all travel
//! through the same `BridgeError` channel; the enclosing state transition is
//! rejected either way.

use cosmwasm_std::{StdError, Uint256};
use thiserror::Error;

use crate::vm::VmError;

#[derive(Error, Debug, PartialEq)]
pub enum BridgeError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Gating Errors
    // ========================================================================

    #[error("Module disabled: erc20 bridging is currently disabled by governance")]
    ModuleDisabled,

    #[error("Token pair not found: token '{token}' is not registered")]
    TokenPairNotFound { token: String },

    #[error("Token pair disabled: minting token '{token}' is not enabled by governance")]
    PairDisabled { token: String },

    #[error("Unauthorized: {address} is not allowed to receive transactions")]
    Unauthorized { address: String },

    #[error("Send disabled: transferring '{denom}' coins to an external address is currently disabled")]
    SendDisabled { denom: String },

    // ========================================================================
    // Input Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Address conversion failed for {address}: {reason}")]
    AddressConversion { address: String, reason: String },

    // ========================================================================
    // Virtual Machine Errors
    // ========================================================================

    #[error("Bridge call '{entry_point}' on {contract} failed: {source}")]
    BridgeCallFailed {
        entry_point: String,
        contract: String,
        #[source]
        source: VmError,
    },

    #[error("Balance query for {account} on {contract} failed: {source}")]
    BalanceQueryFailed {
        account: String,
        contract: String,
        #[source]
        source: VmError,
    },

    #[error("Balance invariance: invalid token balance for {account} - expected: {expected}, actual: {actual}")]
    BalanceInvariance {
        account: String,
        expected: String,
        actual: Uint256,
    },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Token pair already registered: {token}")]
    TokenPairAlreadyRegistered { token: String },
}
