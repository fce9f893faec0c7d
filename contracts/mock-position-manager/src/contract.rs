#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw721::{Cw721ReceiveMsg, OwnerOfResponse};
use range_types::position_manager::{PositionResponse, QueryMsg};

use crate::{
    msg::ExecuteMsg,
    state::{Position, NEXT_TOKEN_ID, POSITIONS},
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    NEXT_TOKEN_ID.save(deps.storage, &1)?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::Mint {
            owner,
            pool,
            tick_lower,
            tick_upper,
            liquidity,
        } => mint(deps, owner, pool, tick_lower, tick_upper, liquidity),
        ExecuteMsg::SetLiquidity {
            token_id,
            liquidity,
        } => set_liquidity(deps, token_id, liquidity),
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => transfer_nft(deps, info, recipient, token_id),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => send_nft(deps, info, contract, token_id, msg),
    }
}

fn mint(
    deps: DepsMut,
    owner: String,
    pool: String,
    tick_lower: i32,
    tick_upper: i32,
    liquidity: Uint128,
) -> StdResult<Response> {
    let id = NEXT_TOKEN_ID.load(deps.storage)?;
    NEXT_TOKEN_ID.save(deps.storage, &(id + 1))?;

    let token_id = id.to_string();
    POSITIONS.save(
        deps.storage,
        &token_id,
        &Position {
            owner: deps.api.addr_validate(&owner)?,
            pool,
            tick_lower,
            tick_upper,
            liquidity,
        },
    )?;

    Ok(Response::new().add_attribute("action", "mint").add_attribute("token_id", token_id))
}

fn set_liquidity(deps: DepsMut, token_id: String, liquidity: Uint128) -> StdResult<Response> {
    POSITIONS.update(deps.storage, &token_id, |position| {
        let mut position =
            position.ok_or_else(|| StdError::not_found(format!("position {token_id}")))?;
        position.liquidity = liquidity;
        Ok::<_, StdError>(position)
    })?;
    Ok(Response::new())
}

fn change_owner(
    deps: DepsMut,
    info: &MessageInfo,
    recipient: &str,
    token_id: &str,
) -> StdResult<()> {
    let mut position = POSITIONS.load(deps.storage, token_id)?;
    if position.owner != info.sender {
        return Err(StdError::generic_err("caller is not the token owner"));
    }
    position.owner = deps.api.addr_validate(recipient)?;
    POSITIONS.save(deps.storage, token_id, &position)
}

fn transfer_nft(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    token_id: String,
) -> StdResult<Response> {
    change_owner(deps, &info, &recipient, &token_id)?;
    Ok(Response::new().add_attribute("action", "transfer_nft"))
}

fn send_nft(
    deps: DepsMut,
    info: MessageInfo,
    contract: String,
    token_id: String,
    msg: Binary,
) -> StdResult<Response> {
    change_owner(deps, &info, &contract, &token_id)?;

    let receive_msg: CosmosMsg = Cw721ReceiveMsg {
        sender: info.sender.to_string(),
        token_id,
        msg,
    }
    .into_cosmos_msg(contract)?;

    Ok(Response::new().add_attribute("action", "send_nft").add_message(receive_msg))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Position {
            token_id,
        } => to_json_binary(&query_position(deps, &token_id)?),
        QueryMsg::OwnerOf {
            token_id,
            ..
        } => to_json_binary(&query_owner_of(deps, &token_id)?),
    }
}

fn query_position(deps: Deps, token_id: &str) -> StdResult<PositionResponse> {
    let position = POSITIONS.load(deps.storage, token_id)?;
    Ok(PositionResponse {
        pool: position.pool,
        tick_lower: position.tick_lower,
        tick_upper: position.tick_upper,
        liquidity: position.liquidity,
    })
}

fn query_owner_of(deps: Deps, token_id: &str) -> StdResult<OwnerOfResponse> {
    let position = POSITIONS.load(deps.storage, token_id)?;
    Ok(OwnerOfResponse {
        owner: position.owner.into(),
        approvals: vec![],
    })
}
