//! Balance invariance check
//!
//! A successful VM call is not proof that the right amount moved: fee-on-
//! transfer, rebasing or reentrant contracts can report success with a
//! different delta. Every operation therefore compares the observed
//! post-balance with `pre ± amount`, exactly.

use cosmwasm_std::Uint256;
use tracing::warn;

use crate::error::BridgeError;

/// Direction of the expected balance change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delta {
    Credit,
    Debit,
    /// Net zero, e.g. a self-transfer
    Unchanged,
}

/// Expected post-balance, or `None` if it is not representable
/// (a debit below zero or a credit past `Uint256::MAX`).
pub fn expected_balance(pre: Uint256, amount: Uint256, delta: Delta) -> Option<Uint256> {
    match delta {
        Delta::Credit => pre.checked_add(amount).ok(),
        Delta::Debit => pre.checked_sub(amount).ok(),
        Delta::Unchanged => Some(pre),
    }
}

/// Require `observed == pre ± amount` bit for bit
pub fn check_balance(
    account: &str,
    pre: Uint256,
    amount: Uint256,
    delta: Delta,
    observed: Uint256,
) -> Result<(), BridgeError> {
    let expected = expected_balance(pre, amount, delta);
    if expected == Some(observed) {
        return Ok(());
    }

    let expected = match expected {
        Some(value) => value.to_string(),
        None => match delta {
            Delta::Debit => format!("negative ({} - {})", pre, amount),
            _ => format!("overflow ({} + {})", pre, amount),
        },
    };

    warn!(
        account = account,
        pre = %pre,
        amount = %amount,
        expected = %expected,
        actual = %observed,
        "Balance invariance violated"
    );

    Err(BridgeError::BalanceInvariance {
        account: account.to_string(),
        expected,
        actual: observed,
    })
}
