use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Storage, Uint256,
};
use cw2::set_contract_version;

use common::VmAddress;

use crate::error::ContractError;
use crate::msg::{
    BalanceResponse, ExecuteMsg, InstantiateMsg, MinterResponse, QueryMsg, TokenInfoResponse,
};
use crate::state::{
    TokenInfo, BALANCES, CONTRACT_NAME, CONTRACT_VERSION, MAX_DECIMALS, MINTER, TOKEN_INFO,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.name.trim().is_empty() || msg.symbol.trim().is_empty() {
        return Err(ContractError::InvalidTokenInfo {
            reason: "name and symbol must not be empty".to_string(),
        });
    }
    if msg.decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidTokenInfo {
            reason: format!("decimals must be at most {}", MAX_DECIMALS),
        });
    }

    let mut total_supply = Uint256::zero();
    for initial in &msg.initial_balances {
        credit(deps.storage, &initial.address, initial.amount)?;
        total_supply = total_supply.checked_add(initial.amount)?;
    }

    MINTER.save(deps.storage, &msg.minter)?;
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name,
            symbol: msg.symbol.clone(),
            decimals: msg.decimals,
            total_supply,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("symbol", msg.symbol)
        .add_attribute("minter", msg.minter.to_hex())
        .add_attribute("total_supply", total_supply.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let sender = VmAddress::from_hex(info.sender.as_str()).map_err(|_| {
        ContractError::InvalidSender {
            sender: info.sender.to_string(),
        }
    })?;

    match msg {
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, sender, recipient, amount),
        ExecuteMsg::BurnCoins { account, amount } => {
            execute_burn_coins(deps, sender, account, amount)
        }
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, sender, recipient, amount)
        }
    }
}

fn execute_mint(
    deps: DepsMut,
    sender: VmAddress,
    recipient: VmAddress,
    amount: Uint256,
) -> Result<Response, ContractError> {
    ensure_minter(deps.storage, &sender)?;

    let mut info = TOKEN_INFO.load(deps.storage)?;
    info.total_supply = info.total_supply.checked_add(amount)?;
    TOKEN_INFO.save(deps.storage, &info)?;

    credit(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("to", recipient.to_hex())
        .add_attribute("amount", amount.to_string()))
}

fn execute_burn_coins(
    deps: DepsMut,
    sender: VmAddress,
    account: VmAddress,
    amount: Uint256,
) -> Result<Response, ContractError> {
    ensure_minter(deps.storage, &sender)?;

    debit(deps.storage, &account, amount)?;

    let mut info = TOKEN_INFO.load(deps.storage)?;
    info.total_supply = info.total_supply.checked_sub(amount)?;
    TOKEN_INFO.save(deps.storage, &info)?;

    Ok(Response::new()
        .add_attribute("action", "burn_coins")
        .add_attribute("from", account.to_hex())
        .add_attribute("amount", amount.to_string()))
}

fn execute_transfer(
    deps: DepsMut,
    sender: VmAddress,
    recipient: VmAddress,
    amount: Uint256,
) -> Result<Response, ContractError> {
    debit(deps.storage, &sender, amount)?;
    credit(deps.storage, &recipient, amount)?;

    Ok(Response::new()
        .set_data(to_json_binary(&true)?)
        .add_attribute("action", "transfer")
        .add_attribute("from", sender.to_hex())
        .add_attribute("to", recipient.to_hex())
        .add_attribute("amount", amount.to_string()))
}

fn ensure_minter(storage: &dyn Storage, sender: &VmAddress) -> Result<(), ContractError> {
    if MINTER.load(storage)? != *sender {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn credit(
    storage: &mut dyn Storage,
    account: &VmAddress,
    amount: Uint256,
) -> Result<(), ContractError> {
    let balance = load_balance(storage, account)?;
    BALANCES.save(storage, account.as_slice(), &balance.checked_add(amount)?)?;
    Ok(())
}

fn debit(
    storage: &mut dyn Storage,
    account: &VmAddress,
    amount: Uint256,
) -> Result<(), ContractError> {
    let balance = load_balance(storage, account)?;
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            balance,
            required: amount,
        });
    }
    BALANCES.save(storage, account.as_slice(), &(balance - amount))?;
    Ok(())
}

fn load_balance(storage: &dyn Storage, account: &VmAddress) -> StdResult<Uint256> {
    Ok(BALANCES
        .may_load(storage, account.as_slice())?
        .unwrap_or_else(Uint256::zero))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Minter {} => to_json_binary(&query_minter(deps)?),
    }
}

fn query_balance(deps: Deps, address: VmAddress) -> StdResult<BalanceResponse> {
    Ok(BalanceResponse {
        balance: load_balance(deps.storage, &address)?,
    })
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let info = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: info.name,
        symbol: info.symbol,
        decimals: info.decimals,
        total_supply: info.total_supply,
    })
}

fn query_minter(deps: Deps) -> StdResult<MinterResponse> {
    Ok(MinterResponse {
        minter: MINTER.load(deps.storage)?,
    })
}
