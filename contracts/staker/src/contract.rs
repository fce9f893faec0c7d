#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Coins, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use range_types::staker::{Config, ExecuteMsg, InstantiateMsg, QueryMsg};
use range_utils::helpers::integer_param_gt_zero;

use crate::{
    claim, deposit,
    error::{ContractError, ContractResult},
    incentive, query, stake,
    state::CONFIG,
};

pub const CONTRACT_NAME: &str = "crates.io:range-staker";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    integer_param_gt_zero(msg.max_incentive_start_lead_time, "max_incentive_start_lead_time")?;
    integer_param_gt_zero(msg.max_incentive_duration, "max_incentive_duration")?;

    let config = Config {
        position_manager: deps.api.addr_validate(&msg.position_manager)?,
        max_incentive_start_lead_time: msg.max_incentive_start_lead_time,
        max_incentive_duration: msg.max_incentive_duration,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("position_manager", config.position_manager))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    let mut funds = Coins::try_from(info.funds).map_err(|err| ContractError::TransferFailed {
        reason: err.to_string(),
    })?;

    let response = match msg {
        ExecuteMsg::Multicall {
            msgs,
        } => multicall(deps.branch(), &env, &info.sender, &mut funds, msgs)?,
        msg => dispatch(deps.branch(), &env, &info.sender, &mut funds, msg)?,
    };

    if !funds.is_empty() {
        return Err(ContractError::TransferFailed {
            reason: format!("unused funds: {funds}"),
        });
    }

    Ok(response)
}

/// Runs every message in order as `sender`, merging their responses. Any failure reverts the
/// whole batch.
fn multicall(
    mut deps: DepsMut,
    env: &Env,
    sender: &Addr,
    funds: &mut Coins,
    msgs: Vec<ExecuteMsg>,
) -> ContractResult<Response> {
    let mut response = Response::new();
    for msg in msgs {
        let res = dispatch(deps.branch(), env, sender, funds, msg)?;
        response = response
            .add_submessages(res.messages)
            .add_attributes(res.attributes)
            .add_events(res.events);
    }
    Ok(response)
}

/// Executes a single message. `funds` is the pool of coins attached to the outer call that has
/// not been consumed yet.
fn dispatch(
    deps: DepsMut,
    env: &Env,
    sender: &Addr,
    funds: &mut Coins,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    match msg {
        ExecuteMsg::ReceiveNft(receive_msg) => deposit::receive_nft(deps, env, sender, receive_msg),
        ExecuteMsg::CreateIncentive {
            key,
            reward,
        } => incentive::create_incentive(deps, env, funds, key, reward),
        ExecuteMsg::EndIncentive {
            key,
        } => incentive::end_incentive(deps, env, key),
        ExecuteMsg::StakeToken {
            key,
            token_id,
        } => stake::stake_token(deps, env, sender, key, token_id),
        ExecuteMsg::UnstakeToken {
            key,
            token_id,
        } => stake::unstake_token(deps, env, sender, key, token_id),
        ExecuteMsg::WithdrawToken {
            token_id,
            to,
        } => deposit::withdraw_token(deps, env, sender, token_id, to),
        ExecuteMsg::TransferDeposit {
            token_id,
            to,
        } => deposit::transfer_deposit(deps, sender, token_id, to),
        ExecuteMsg::ClaimReward {
            reward_token,
            to,
            amount_requested,
        } => claim::claim_reward(deps, sender, reward_token, to, amount_requested),
        ExecuteMsg::Multicall {
            ..
        } => Err(ContractError::NestedMulticall {}),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    let res: StdResult<Binary> = match msg {
        QueryMsg::Config {} => to_json_binary(&query::query_config(deps)?),
        QueryMsg::IncentiveId {
            key,
        } => to_json_binary(&key.id().to_hex()),
        QueryMsg::Incentive {
            key,
        } => to_json_binary(&query::query_incentive(deps, &key)?),
        QueryMsg::Deposit {
            token_id,
        } => to_json_binary(&query::query_deposit(deps, token_id)?),
        QueryMsg::Stake {
            token_id,
            incentive_id,
        } => to_json_binary(&query::query_stake(deps, token_id, incentive_id)?),
        QueryMsg::Stakes {
            token_id,
            start_after,
            limit,
        } => to_json_binary(&query::query_stakes(deps, token_id, start_after, limit)?),
        QueryMsg::Rewards {
            reward_token,
            owner,
        } => to_json_binary(&query::query_rewards(deps, &reward_token, &owner)?),
        QueryMsg::RewardInfo {
            key,
            token_id,
        } => to_json_binary(&query::query_reward_info(deps, &env, &key, &token_id)?),
    };
    res.map_err(Into::into)
}
