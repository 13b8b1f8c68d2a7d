//! Bridged Token - VM-hosted counterpart of a native coin denom
//!
//! A minimal minter/burner token. The bridge module is the minter: it is the
//! only account allowed to create supply (`Mint`) or destroy it from an
//! arbitrary holder (`BurnCoins`). Holders move balances with `Transfer`.
//!
//! Accounts are 20-byte VM addresses; the message sender is interpreted as
//! a hex VM address.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
