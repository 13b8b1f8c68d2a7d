//! Bridge keeper
//!
//! Mint, burn and transfer of bridged tokens. Every operation walks the same
//! stages: gate, snapshot balances, call the token contract, snapshot again,
//! verify the exact delta, emit one event.
//!
//! The keeper holds no state of its own. A failed operation returns early
//! and relies on the enclosing transition to discard any VM writes; events
//! are only emitted once verification has passed.

use cosmwasm_std::{Addr, Uint256};
use tracing::{debug, info, warn};

use common::VmAddress;

use crate::error::BridgeError;
use crate::events::{BridgeOperationRecord, EventEmitter, OperationKind};
use crate::gating::{check_eligibility, Gate};
use crate::invariance::{check_balance, Delta};
use crate::ledger::NativeLedger;
use crate::params::Params;
use crate::registry::TokenPairRegistry;
use crate::state::TokenPair;
use crate::vm::{TokenCall, VirtualMachineBridge};

/// Per-transition inputs of a bridge operation
pub struct Context<'a> {
    pub params: &'a Params,
    pub events: &'a mut dyn EventEmitter,
}

impl<'a> Context<'a> {
    pub fn new(params: &'a Params, events: &'a mut dyn EventEmitter) -> Self {
        Self { params, events }
    }
}

pub struct BridgeKeeper<R, V, L> {
    registry: R,
    vm: V,
    ledger: L,
    /// Authority privileged mint/burn calls are signed with
    module_address: VmAddress,
}

impl<R, V, L> BridgeKeeper<R, V, L>
where
    R: TokenPairRegistry,
    V: VirtualMachineBridge,
    L: NativeLedger,
{
    pub fn new(registry: R, vm: V, ledger: L, module_address: VmAddress) -> Self {
        Self {
            registry,
            vm,
            ledger,
            module_address,
        }
    }

    pub fn vm(&self) -> &V {
        &self.vm
    }

    // ========================================================================
    // Gating
    // ========================================================================

    /// Supply gate shared by mint and burn
    pub fn minting_enabled(
        &self,
        params: &Params,
        sender: &Addr,
        receiver: &Addr,
        token: &str,
    ) -> Result<TokenPair, BridgeError> {
        check_eligibility(
            params,
            &self.registry,
            &self.ledger,
            sender,
            receiver,
            token,
            Gate::Supply,
        )
    }

    pub fn transfer_enabled(
        &self,
        params: &Params,
        sender: &Addr,
        receiver: &Addr,
        token: &str,
    ) -> Result<TokenPair, BridgeError> {
        check_eligibility(
            params,
            &self.registry,
            &self.ledger,
            sender,
            receiver,
            token,
            Gate::Transfer,
        )
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Mint `amount` of the pair's token to `receiver`, signed by the module.
    pub fn mint(
        &mut self,
        ctx: &mut Context<'_>,
        sender: &Addr,
        receiver: &VmAddress,
        denom: &str,
        amount: Uint256,
    ) -> Result<(), BridgeError> {
        ensure_nonzero(amount)?;
        let native_receiver = to_native(receiver, &ctx.params.bech32_prefix)?;

        let pair = self.minting_enabled(ctx.params, sender, &native_receiver, denom)?;
        let contract = pair.contract_address;
        debug!(denom = %pair.denom, contract = %contract, receiver = %receiver, amount = %amount, "Mint gated");

        let pre = self.balance_of(&contract, receiver)?;

        let authority = self.module_address;
        self.execute(
            &authority,
            &contract,
            TokenCall::Mint {
                to: *receiver,
                amount,
            },
        )?;

        let post = self.balance_of(&contract, receiver)?;
        check_balance(&receiver.to_hex(), pre, amount, Delta::Credit, post)?;

        info!(denom = %pair.denom, contract = %contract, receiver = %receiver, amount = %amount, "Minted bridged tokens");
        ctx.events.emit(BridgeOperationRecord {
            kind: OperationKind::Mint,
            sender: sender.to_string(),
            receiver: receiver.to_hex(),
            amount,
            denom: pair.denom,
            contract_address: contract,
        });
        Ok(())
    }

    /// Burn `amount` of the pair's token held by `burnee`, signed by the module.
    pub fn burn(
        &mut self,
        ctx: &mut Context<'_>,
        burner: &Addr,
        burnee: &VmAddress,
        denom: &str,
        amount: Uint256,
    ) -> Result<(), BridgeError> {
        ensure_nonzero(amount)?;
        let native_burnee = to_native(burnee, &ctx.params.bech32_prefix)?;

        let pair = self.minting_enabled(ctx.params, burner, &native_burnee, denom)?;
        let contract = pair.contract_address;
        debug!(denom = %pair.denom, contract = %contract, burnee = %burnee, amount = %amount, "Burn gated");

        let pre = self.balance_of(&contract, burnee)?;
        if pre < amount {
            // nothing the contract does can produce a valid post-balance
            check_balance(&burnee.to_hex(), pre, amount, Delta::Debit, pre)?;
        }

        let authority = self.module_address;
        self.execute(
            &authority,
            &contract,
            TokenCall::BurnCoins {
                from: *burnee,
                amount,
            },
        )?;

        let post = self.balance_of(&contract, burnee)?;
        check_balance(&burnee.to_hex(), pre, amount, Delta::Debit, post)?;

        info!(denom = %pair.denom, contract = %contract, burnee = %burnee, amount = %amount, "Burned bridged tokens");
        ctx.events.emit(BridgeOperationRecord {
            kind: OperationKind::Burn,
            sender: burner.to_string(),
            receiver: burnee.to_hex(),
            amount,
            denom: pair.denom,
            contract_address: contract,
        });
        Ok(())
    }

    /// Transfer `amount` from `sender` to `receiver`, signed by the sender.
    pub fn transfer(
        &mut self,
        ctx: &mut Context<'_>,
        sender: &VmAddress,
        receiver: &VmAddress,
        denom: &str,
        amount: Uint256,
    ) -> Result<(), BridgeError> {
        ensure_nonzero(amount)?;
        let native_sender = to_native(sender, &ctx.params.bech32_prefix)?;
        let native_receiver = to_native(receiver, &ctx.params.bech32_prefix)?;

        let pair = self.transfer_enabled(ctx.params, &native_sender, &native_receiver, denom)?;
        let contract = pair.contract_address;
        debug!(denom = %pair.denom, contract = %contract, sender = %sender, receiver = %receiver, amount = %amount, "Transfer gated");

        let sender_pre = self.balance_of(&contract, sender)?;
        let receiver_pre = self.balance_of(&contract, receiver)?;

        self.execute(
            sender,
            &contract,
            TokenCall::Transfer {
                to: *receiver,
                amount,
            },
        )?;

        let sender_post = self.balance_of(&contract, sender)?;
        let receiver_post = self.balance_of(&contract, receiver)?;

        if sender == receiver {
            check_balance(&sender.to_hex(), sender_pre, amount, Delta::Unchanged, sender_post)?;
        } else {
            check_balance(&sender.to_hex(), sender_pre, amount, Delta::Debit, sender_post)?;
            check_balance(&receiver.to_hex(), receiver_pre, amount, Delta::Credit, receiver_post)?;
        }

        info!(denom = %pair.denom, contract = %contract, sender = %sender, receiver = %receiver, amount = %amount, "Transferred bridged tokens");
        ctx.events.emit(BridgeOperationRecord {
            kind: OperationKind::Transfer,
            sender: sender.to_hex(),
            receiver: receiver.to_hex(),
            amount,
            denom: pair.denom,
            contract_address: contract,
        });
        Ok(())
    }

    // ========================================================================
    // VM access
    // ========================================================================

    /// Token balance of `account` in `contract`
    pub fn balance_of(
        &self,
        contract: &VmAddress,
        account: &VmAddress,
    ) -> Result<Uint256, BridgeError> {
        self.vm.balance_of(contract, account).map_err(|source| {
            warn!(contract = %contract, account = %account, error = %source, "Balance query failed");
            BridgeError::BalanceQueryFailed {
                account: account.to_hex(),
                contract: contract.to_hex(),
                source,
            }
        })
    }

    fn execute(
        &mut self,
        caller: &VmAddress,
        contract: &VmAddress,
        call: TokenCall,
    ) -> Result<(), BridgeError> {
        let entry_point = call.entry_point();
        debug!(entry_point, caller = %caller, contract = %contract, "Calling token contract");

        self.vm
            .call(caller, contract, &call)
            .map(|_| ())
            .map_err(|source| {
                warn!(entry_point, contract = %contract, error = %source, "Token contract call failed");
                BridgeError::BridgeCallFailed {
                    entry_point: entry_point.to_string(),
                    contract: contract.to_hex(),
                    source,
                }
            })
    }
}

fn ensure_nonzero(amount: Uint256) -> Result<(), BridgeError> {
    if amount.is_zero() {
        return Err(BridgeError::InvalidAmount {
            reason: "amount must be positive".to_string(),
        });
    }
    Ok(())
}

fn to_native(account: &VmAddress, prefix: &str) -> Result<Addr, BridgeError> {
    account
        .to_native(prefix)
        .map_err(|e| BridgeError::AddressConversion {
            address: account.to_hex(),
            reason: e.to_string(),
        })
}
