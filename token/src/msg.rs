use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint256;

use common::VmAddress;

#[cw_serde]
pub struct InitialBalance {
    pub address: VmAddress,
    pub amount: Uint256,
}

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Privileged account (the bridge module authority)
    pub minter: VmAddress,
    pub initial_balances: Vec<InitialBalance>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Minter only: create `amount` new tokens for `recipient`
    Mint { recipient: VmAddress, amount: Uint256 },
    /// Minter only: destroy `amount` tokens held by `account`
    BurnCoins { account: VmAddress, amount: Uint256 },
    /// Move `amount` from the sender to `recipient`
    Transfer { recipient: VmAddress, amount: Uint256 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Current balance of `address` (zero if it never held tokens)
    #[returns(BalanceResponse)]
    Balance { address: VmAddress },
    #[returns(TokenInfoResponse)]
    TokenInfo {},
    #[returns(MinterResponse)]
    Minter {},
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint256,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint256,
}

#[cw_serde]
pub struct MinterResponse {
    pub minter: VmAddress,
}
