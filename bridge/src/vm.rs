//! Virtual machine bridge
//!
//! The keeper reaches the token contract only through
//! [`VirtualMachineBridge`]: one synchronous call per state change, plus
//! balance reads before and after it. Step limits and rollback belong to the
//! implementation and its host.

use cosmwasm_std::{Binary, Uint256};
use thiserror::Error;

use common::VmAddress;

/// Entry point names of the minter/burner token contract
pub const ENTRY_POINT_MINT: &str = "mint";
pub const ENTRY_POINT_BURN_COINS: &str = "burnCoins";
pub const ENTRY_POINT_TRANSFER: &str = "transfer";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VmError {
    #[error("execution reverted: {reason}")]
    Reverted { reason: String },

    #[error("execution error: {reason}")]
    Execution { reason: String },

    #[error("contract {address} is unreachable")]
    ContractNotFound { address: String },
}

/// A state-changing call against a token contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenCall {
    /// Privileged: create `amount` for `to`
    Mint { to: VmAddress, amount: Uint256 },
    /// Privileged: destroy `amount` held by `from`
    BurnCoins { from: VmAddress, amount: Uint256 },
    /// Move `amount` from the caller to `to`
    Transfer { to: VmAddress, amount: Uint256 },
}

impl TokenCall {
    pub fn entry_point(&self) -> &'static str {
        match self {
            TokenCall::Mint { .. } => ENTRY_POINT_MINT,
            TokenCall::BurnCoins { .. } => ENTRY_POINT_BURN_COINS,
            TokenCall::Transfer { .. } => ENTRY_POINT_TRANSFER,
        }
    }
}

pub trait VirtualMachineBridge {
    /// Execute `call` against `contract` with `caller` as the message sender.
    ///
    /// Returns the call's result data. An `Err` means the call had no effect.
    fn call(
        &mut self,
        caller: &VmAddress,
        contract: &VmAddress,
        call: &TokenCall,
    ) -> Result<Binary, VmError>;

    /// Token balance of `account` in `contract`
    fn balance_of(&self, contract: &VmAddress, account: &VmAddress) -> Result<Uint256, VmError>;
}

impl<T: VirtualMachineBridge + ?Sized> VirtualMachineBridge for &mut T {
    fn call(
        &mut self,
        caller: &VmAddress,
        contract: &VmAddress,
        call: &TokenCall,
    ) -> Result<Binary, VmError> {
        (**self).call(caller, contract, call)
    }

    fn balance_of(&self, contract: &VmAddress, account: &VmAddress) -> Result<Uint256, VmError> {
        (**self).balance_of(contract, account)
    }
}
