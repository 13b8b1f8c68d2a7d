use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;
use cw_storage_plus::{Item, Map};

use common::VmAddress;

pub const CONTRACT_NAME: &str = "crates.io:bridged-token";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Highest supported decimals, matching the native coin metadata limit
pub const MAX_DECIMALS: u8 = 18;

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint256,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");

/// Only account allowed to mint and to burn from arbitrary holders
pub const MINTER: Item<VmAddress> = Item::new("minter");

/// holder (20 raw bytes) => balance
pub const BALANCES: Map<&[u8], Uint256> = Map::new("balances");
