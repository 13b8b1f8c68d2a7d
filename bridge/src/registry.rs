//! Token pair registry
//!
//! The bridge only reads the registry, through [`TokenPairRegistry`].
//! Registration and toggling are governance actions and live in the free
//! functions below; the keeper never calls them.

use cosmwasm_std::{Order, StdResult, Storage};

use common::VmAddress;

use crate::error::BridgeError;
use crate::state::{
    validate_denom, TokenPair, TokenPairId, TOKEN_PAIRS, TOKEN_PAIR_ID_BY_CONTRACT,
    TOKEN_PAIR_ID_BY_DENOM,
};

/// Read-only view of registered token pairs
pub trait TokenPairRegistry {
    /// Resolve a token identifier (native denom or VM hex contract address)
    fn token_pair_id(&self, token: &str) -> StdResult<Option<TokenPairId>>;

    fn token_pair(&self, id: &TokenPairId) -> StdResult<Option<TokenPair>>;
}

impl<T: TokenPairRegistry + ?Sized> TokenPairRegistry for &T {
    fn token_pair_id(&self, token: &str) -> StdResult<Option<TokenPairId>> {
        (**self).token_pair_id(token)
    }

    fn token_pair(&self, id: &TokenPairId) -> StdResult<Option<TokenPair>> {
        (**self).token_pair(id)
    }
}

/// Registry backed by contract storage
pub struct StoreRegistry<'a> {
    storage: &'a dyn Storage,
}

impl<'a> StoreRegistry<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }
}

impl TokenPairRegistry for StoreRegistry<'_> {
    fn token_pair_id(&self, token: &str) -> StdResult<Option<TokenPairId>> {
        match VmAddress::from_hex(token) {
            Ok(contract) => TOKEN_PAIR_ID_BY_CONTRACT.may_load(self.storage, contract.as_slice()),
            Err(_) => TOKEN_PAIR_ID_BY_DENOM.may_load(self.storage, token),
        }
    }

    fn token_pair(&self, id: &TokenPairId) -> StdResult<Option<TokenPair>> {
        TOKEN_PAIRS.may_load(self.storage, id)
    }
}

// ============================================================================
// Governance
// ============================================================================

/// Store a new pair and both of its indexes.
///
/// Fails if either the denom or the contract is already paired.
pub fn register_token_pair(storage: &mut dyn Storage, pair: &TokenPair) -> Result<(), BridgeError> {
    validate_denom(&pair.denom)?;

    if TOKEN_PAIR_ID_BY_DENOM.has(storage, &pair.denom) {
        return Err(BridgeError::TokenPairAlreadyRegistered {
            token: pair.denom.clone(),
        });
    }
    if TOKEN_PAIR_ID_BY_CONTRACT.has(storage, pair.contract_address.as_slice()) {
        return Err(BridgeError::TokenPairAlreadyRegistered {
            token: pair.contract_address.to_hex(),
        });
    }

    TOKEN_PAIRS.save(storage, &pair.id, pair)?;
    TOKEN_PAIR_ID_BY_DENOM.save(storage, &pair.denom, &pair.id)?;
    TOKEN_PAIR_ID_BY_CONTRACT.save(storage, pair.contract_address.as_slice(), &pair.id)?;
    Ok(())
}

/// Flip the `enabled` flag of a pair and return the updated pair
pub fn toggle_conversion(storage: &mut dyn Storage, token: &str) -> Result<TokenPair, BridgeError> {
    let registry = StoreRegistry::new(storage);
    let id = registry
        .token_pair_id(token)?
        .ok_or_else(|| BridgeError::TokenPairNotFound {
            token: token.to_string(),
        })?;
    let mut pair = registry
        .token_pair(&id)?
        .ok_or_else(|| BridgeError::TokenPairNotFound {
            token: token.to_string(),
        })?;

    pair.enabled = !pair.enabled;
    TOKEN_PAIRS.save(storage, &id, &pair)?;
    Ok(pair)
}

/// All registered pairs, ordered by id
pub fn token_pairs(storage: &dyn Storage) -> StdResult<Vec<TokenPair>> {
    TOKEN_PAIRS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, pair)| pair))
        .collect()
}
