use cosmwasm_std::{from_json, Addr, DepsMut, Env, Event, Response, Storage};
use cw721::Cw721ReceiveMsg;
use range_types::{
    position_manager::PositionManager,
    staker::{Deposit, ReceiveNftMsg},
};

use crate::{
    error::{ContractError, ContractResult},
    stake,
    state::{CONFIG, DEPOSITS},
};

pub(crate) fn load_deposit(storage: &dyn Storage, token_id: &str) -> ContractResult<Deposit> {
    DEPOSITS
        .may_load(storage, token_id)?
        .ok_or_else(|| ContractError::precondition(format!("token {token_id} is not deposited")))
}

/// Takes custody of a position sent by the position manager, optionally staking it right away.
pub fn receive_nft(
    mut deps: DepsMut,
    env: &Env,
    sender: &Addr,
    receive_msg: Cw721ReceiveMsg,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.position_manager {
        return Err(ContractError::Unauthorized {});
    }

    let Cw721ReceiveMsg {
        sender: owner,
        token_id,
        msg,
    } = receive_msg;

    let hook: ReceiveNftMsg = if msg.is_empty() {
        ReceiveNftMsg::Deposit {}
    } else {
        from_json(&msg)?
    };

    let owner = deps.api.addr_validate(&owner)?;

    if DEPOSITS.has(deps.storage, &token_id) {
        return Err(ContractError::precondition(format!("token {token_id} is already deposited")));
    }

    let position = PositionManager::new(config.position_manager)
        .query_position(&deps.querier, &token_id)?;

    DEPOSITS.save(
        deps.storage,
        &token_id,
        &Deposit {
            owner: owner.clone(),
            number_of_stakes: 0,
            tick_lower: position.tick_lower,
            tick_upper: position.tick_upper,
        },
    )?;

    let mut response = Response::new().add_attribute("action", "deposit").add_event(
        Event::new("range-staker/deposit")
            .add_attribute("token_id", &token_id)
            .add_attribute("owner", owner.as_str()),
    );

    if let ReceiveNftMsg::DepositAndStake {
        keys,
    } = hook
    {
        for key in keys {
            let event = stake::stake(deps.branch(), env, &token_id, key)?;
            response = response.add_event(event);
        }
    }

    Ok(response)
}

pub fn withdraw_token(
    deps: DepsMut,
    env: &Env,
    sender: &Addr,
    token_id: String,
    to: String,
) -> ContractResult<Response> {
    let to = deps.api.addr_validate(&to)?;
    if to == env.contract.address {
        return Err(ContractError::precondition("invalid recipient"));
    }

    let deposit = load_deposit(deps.storage, &token_id)?;
    if deposit.number_of_stakes > 0 {
        return Err(ContractError::precondition("cannot withdraw token while staked"));
    }
    if deposit.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }

    let config = CONFIG.load(deps.storage)?;
    let transfer_msg =
        PositionManager::new(config.position_manager).transfer_nft_msg(&to, &token_id)?;

    DEPOSITS.remove(deps.storage, &token_id);

    let event = Event::new("range-staker/withdraw_token")
        .add_attribute("token_id", &token_id)
        .add_attribute("owner", deposit.owner.as_str())
        .add_attribute("to", to.as_str());

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "withdraw_token")
        .add_event(event))
}

/// Hands custody of an unstaked deposit to `to` without moving the position itself.
pub fn transfer_deposit(
    deps: DepsMut,
    sender: &Addr,
    token_id: String,
    to: String,
) -> ContractResult<Response> {
    let to = deps.api.addr_validate(&to)?;

    let mut deposit = load_deposit(deps.storage, &token_id)?;
    if deposit.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }
    if deposit.number_of_stakes > 0 {
        return Err(ContractError::precondition("cannot transfer deposit while staked"));
    }

    let old_owner = deposit.owner;
    deposit.owner = to.clone();
    DEPOSITS.save(deps.storage, &token_id, &deposit)?;

    let event = Event::new("range-staker/transfer_deposit")
        .add_attribute("token_id", &token_id)
        .add_attribute("old_owner", old_owner.as_str())
        .add_attribute("new_owner", to.as_str());

    Ok(Response::new().add_attribute("action", "transfer_deposit").add_event(event))
}
