//! Eligibility gating
//!
//! Read-only checks run before any bridge operation touches the VM. The
//! first failing check wins; nothing is written either way.

use cosmwasm_std::Addr;

use crate::error::BridgeError;
use crate::ledger::NativeLedger;
use crate::params::Params;
use crate::registry::TokenPairRegistry;
use crate::state::TokenPair;

/// Which gate an operation passes through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Mint and burn: additionally requires the pair to be enabled
    Supply,
    Transfer,
}

/// Run the ordered eligibility checks and return the resolved pair.
///
/// 1. module enabled
/// 2. token resolves to a pair id
/// 3. the id resolves to a pair
/// 4. pair enabled (supply gate only)
/// 5. receiver not blocked
/// 6. denom send-enabled, unless sender and receiver are the same account
pub fn check_eligibility<R, L>(
    params: &Params,
    registry: &R,
    ledger: &L,
    sender: &Addr,
    receiver: &Addr,
    token: &str,
    gate: Gate,
) -> Result<TokenPair, BridgeError>
where
    R: TokenPairRegistry + ?Sized,
    L: NativeLedger + ?Sized,
{
    if !params.enable_erc20 {
        return Err(BridgeError::ModuleDisabled);
    }

    let not_found = || BridgeError::TokenPairNotFound {
        token: token.to_string(),
    };
    let id = registry.token_pair_id(token)?.ok_or_else(not_found)?;
    let pair = registry.token_pair(&id)?.ok_or_else(not_found)?;

    if gate == Gate::Supply && !pair.enabled {
        return Err(BridgeError::PairDisabled {
            token: token.to_string(),
        });
    }

    if ledger.is_blocked_addr(receiver) {
        return Err(BridgeError::Unauthorized {
            address: receiver.to_string(),
        });
    }

    if sender != receiver && !ledger.is_send_enabled(&pair.denom) {
        return Err(BridgeError::SendDisabled {
            denom: pair.denom.clone(),
        });
    }

    Ok(pair)
}
