//! Request dispatch
//!
//! Resolves an [`ExecuteMsg`] once into a typed keeper operation and wraps
//! the emitted events into a `Response`.

use cosmwasm_std::Response;
use tracing::debug;

use crate::error::BridgeError;
use crate::events::EventLog;
use crate::keeper::{BridgeKeeper, Context};
use crate::ledger::NativeLedger;
use crate::msg::{parse_amount, parse_creator, parse_vm_account, ExecuteMsg};
use crate::params::Params;
use crate::registry::TokenPairRegistry;
use crate::vm::VirtualMachineBridge;

pub fn execute<R, V, L>(
    keeper: &mut BridgeKeeper<R, V, L>,
    params: &Params,
    msg: ExecuteMsg,
) -> Result<Response, BridgeError>
where
    R: TokenPairRegistry,
    V: VirtualMachineBridge,
    L: NativeLedger,
{
    let action = msg.action();
    // Amount first: a malformed amount fails before any other check
    let amount = parse_amount(msg.amount())?;

    let mut events = EventLog::new();
    let mut ctx = Context::new(params, &mut events);

    match msg {
        ExecuteMsg::Mint {
            creator,
            account,
            denom,
            ..
        } => {
            let sender = parse_creator(&creator, &params.bech32_prefix)?;
            let receiver = parse_vm_account(&account)?;
            keeper.mint(&mut ctx, &sender, &receiver, &denom, amount)?;
        }
        ExecuteMsg::Transfer {
            creator,
            from,
            to,
            denom,
            ..
        } => {
            // TODO: decide whether `creator` must control `from`; relayed
            // transfers currently go through unchecked
            parse_creator(&creator, &params.bech32_prefix)?;
            let sender = parse_vm_account(&from)?;
            let receiver = parse_vm_account(&to)?;
            keeper.transfer(&mut ctx, &sender, &receiver, &denom, amount)?;
        }
        ExecuteMsg::Withdraw {
            creator,
            account,
            denom,
            ..
        } => {
            let burner = parse_creator(&creator, &params.bech32_prefix)?;
            let burnee = parse_vm_account(&account)?;
            keeper.burn(&mut ctx, &burner, &burnee, &denom, amount)?;
        }
    }

    debug!(action, events = events.len(), "Bridge request handled");

    Ok(Response::new()
        .add_attribute("action", action)
        .add_attribute("amount", amount.to_string())
        .add_events(events.into_events()))
}
