//! Request messages and their input parsing
//!
//! Requests arrive with string fields; they are parsed into typed values
//! before reaching the keeper.

use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint256};

use common::{decode_bech32_with_prefix, VmAddress};

use crate::error::BridgeError;

pub const ACTION_MINT: &str = "mint";
pub const ACTION_TRANSFER: &str = "transfer";
pub const ACTION_WITHDRAW: &str = "withdraw";

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint bridged tokens to a VM account.
    Mint {
        /// Native bech32 signer
        creator: String,
        /// VM hex address receiving the tokens
        account: String,
        denom: String,
        /// Base-10 integer
        amount: String,
    },

    /// Move bridged tokens between two VM accounts.
    ///
    /// `creator` is validated as a native address but not compared to `from`.
    Transfer {
        creator: String,
        from: String,
        to: String,
        denom: String,
        amount: String,
    },

    /// Burn bridged tokens held by a VM account.
    Withdraw {
        creator: String,
        account: String,
        denom: String,
        amount: String,
    },
}

impl ExecuteMsg {
    pub fn action(&self) -> &'static str {
        match self {
            ExecuteMsg::Mint { .. } => ACTION_MINT,
            ExecuteMsg::Transfer { .. } => ACTION_TRANSFER,
            ExecuteMsg::Withdraw { .. } => ACTION_WITHDRAW,
        }
    }

    pub fn amount(&self) -> &str {
        match self {
            ExecuteMsg::Mint { amount, .. }
            | ExecuteMsg::Transfer { amount, .. }
            | ExecuteMsg::Withdraw { amount, .. } => amount,
        }
    }
}

/// Parse a base-10 amount. Signs, decimals and whitespace are rejected.
pub fn parse_amount(amount: &str) -> Result<Uint256, BridgeError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BridgeError::InvalidAmount {
            reason: format!("expected a base-10 integer, got {:?}", amount),
        });
    }
    Uint256::from_str(amount).map_err(|e| BridgeError::InvalidAmount {
        reason: format!("{}: {:?}", e, amount),
    })
}

/// Parse a native signer address carrying `prefix`
pub fn parse_creator(creator: &str, prefix: &str) -> Result<Addr, BridgeError> {
    decode_bech32_with_prefix(creator, prefix).map_err(|e| BridgeError::InvalidAddress {
        reason: format!("creator {:?}: {}", creator, e),
    })?;
    Ok(Addr::unchecked(creator.to_ascii_lowercase()))
}

/// Parse a VM account given as 40 hex chars, `0x` optional
pub fn parse_vm_account(account: &str) -> Result<VmAddress, BridgeError> {
    VmAddress::from_hex(account).map_err(|e| BridgeError::InvalidAddress {
        reason: format!("account {:?}: {}", account, e),
    })
}
