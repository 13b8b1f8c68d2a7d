//! State definitions for the token pair registry
//!
//! A pair is stored once under its id, with two secondary indexes so it can
//! be resolved from either side of the bridge.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult};
use cw_storage_plus::Map;

use common::{compute_token_pair_id, VmAddress};

/// Deterministic identifier of a pairing, see [`compute_token_pair_id`]
pub type TokenPairId = [u8; 32];

/// Who controls the VM contract of a pair
#[cw_serde]
pub enum Owner {
    /// Contract deployed and administered by the bridge module
    Module,
    /// Pre-existing contract registered by governance
    External,
}

/// Registered association between a native denom and a VM token contract
#[cw_serde]
pub struct TokenPair {
    /// keccak256(contract || denom), fixed at registration
    pub id: TokenPairId,
    /// Native coin denomination
    pub denom: String,
    /// Token contract inside the virtual machine
    pub contract_address: VmAddress,
    /// Whether bridging this pair is enabled by governance
    pub enabled: bool,
    pub owner: Owner,
}

impl TokenPair {
    /// New enabled pair with its id derived from the pairing
    pub fn new(denom: impl Into<String>, contract_address: VmAddress, owner: Owner) -> Self {
        let denom = denom.into();
        Self {
            id: compute_token_pair_id(&contract_address, &denom),
            denom,
            contract_address,
            enabled: true,
            owner,
        }
    }

    pub fn is_native_coin(&self) -> bool {
        self.owner == Owner::Module
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Key: pair id, Value: TokenPair
pub const TOKEN_PAIRS: Map<&[u8], TokenPair> = Map::new("token_pairs");

/// Key: native denom, Value: pair id
pub const TOKEN_PAIR_ID_BY_DENOM: Map<&str, TokenPairId> = Map::new("token_pair_id_by_denom");

/// Key: 20-byte contract address, Value: pair id
pub const TOKEN_PAIR_ID_BY_CONTRACT: Map<&[u8], TokenPairId> =
    Map::new("token_pair_id_by_contract");

// ============================================================================
// Validation
// ============================================================================

/// Check a native denom: 3-128 chars, leading letter, then `[a-zA-Z0-9/:._-]`.
///
/// A denom that also parses as a VM hex address is rejected: token lookups
/// route such identifiers to the contract index.
pub fn validate_denom(denom: &str) -> StdResult<()> {
    let valid_len = (3..=128).contains(&denom.len());
    let mut chars = denom.chars();
    let valid_head = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid_tail =
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'));

    if !(valid_len && valid_head && valid_tail) {
        return Err(StdError::generic_err(format!("invalid denom: {:?}", denom)));
    }
    if VmAddress::from_hex(denom).is_ok() {
        return Err(StdError::generic_err(format!(
            "invalid denom: {:?} is indistinguishable from a contract address",
            denom
        )));
    }
    Ok(())
}
