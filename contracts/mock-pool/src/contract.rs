#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint256,
};
use range_types::pool::{QueryMsg, SnapshotCumulativesInsideResponse};

use crate::{msg::ExecuteMsg, state::SECONDS_PER_LIQUIDITY_INSIDE};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ExecuteMsg::SetSecondsPerLiquidityInside {
            tick_lower,
            tick_upper,
            value,
        } => set_seconds_per_liquidity_inside(deps, tick_lower, tick_upper, value),
    }
}

fn set_seconds_per_liquidity_inside(
    deps: DepsMut,
    tick_lower: i32,
    tick_upper: i32,
    value: Uint256,
) -> StdResult<Response> {
    if tick_lower >= tick_upper {
        return Err(StdError::generic_err("tick_lower must be below tick_upper"));
    }
    SECONDS_PER_LIQUIDITY_INSIDE.save(deps.storage, (tick_lower, tick_upper), &value)?;
    Ok(Response::new())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::SnapshotCumulativesInside {
            tick_lower,
            tick_upper,
        } => to_json_binary(&query_snapshot(deps, tick_lower, tick_upper)?),
    }
}

fn query_snapshot(
    deps: Deps,
    tick_lower: i32,
    tick_upper: i32,
) -> StdResult<SnapshotCumulativesInsideResponse> {
    let value = SECONDS_PER_LIQUIDITY_INSIDE
        .may_load(deps.storage, (tick_lower, tick_upper))?
        .unwrap_or_default();
    Ok(SnapshotCumulativesInsideResponse {
        seconds_per_liquidity_inside_x128: value,
    })
}
