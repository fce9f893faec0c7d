use cosmwasm_std::{Deps, Env, HexBinary, StdResult, Uint128};
use range_types::{
    keys::{IncentiveId, IncentiveKey},
    pool::Pool,
    staker::{Config, DepositResponse, IncentiveResponse, RewardInfoResponse, StakeResponse},
};

use crate::{
    deposit::load_deposit,
    error::{ContractError, ContractResult},
    reward_math::compute_reward_amount,
    state::{paginate_stakes, CONFIG, DEPOSITS, INCENTIVES, REWARDS, STAKES},
};

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}

pub fn query_incentive(deps: Deps, key: &IncentiveKey) -> StdResult<IncentiveResponse> {
    let incentive_id = key.id();
    let incentive = INCENTIVES.may_load(deps.storage, incentive_id.as_slice())?.unwrap_or_default();
    Ok(IncentiveResponse::from(incentive_id.to_hex(), incentive))
}

pub fn query_deposit(deps: Deps, token_id: String) -> StdResult<DepositResponse> {
    let res = match DEPOSITS.may_load(deps.storage, &token_id)? {
        Some(deposit) => DepositResponse {
            token_id,
            owner: Some(deposit.owner),
            number_of_stakes: deposit.number_of_stakes,
            tick_lower: deposit.tick_lower,
            tick_upper: deposit.tick_upper,
        },
        None => DepositResponse {
            token_id,
            owner: None,
            number_of_stakes: 0,
            tick_lower: 0,
            tick_upper: 0,
        },
    };
    Ok(res)
}

pub fn query_stake(
    deps: Deps,
    token_id: String,
    incentive_id: HexBinary,
) -> StdResult<StakeResponse> {
    let id = IncentiveId::try_from(&incentive_id)?;
    let stake = STAKES.may_load(deps.storage, (token_id.as_str(), id.as_slice()))?;
    Ok(match stake {
        Some(stake) => StakeResponse {
            token_id,
            incentive_id,
            liquidity: stake.liquidity,
            seconds_per_liquidity_inside_initial_x128: stake
                .seconds_per_liquidity_inside_initial_x128,
        },
        None => StakeResponse {
            token_id,
            incentive_id,
            liquidity: Uint128::zero(),
            seconds_per_liquidity_inside_initial_x128: Default::default(),
        },
    })
}

pub fn query_stakes(
    deps: Deps,
    token_id: String,
    start_after: Option<HexBinary>,
    limit: Option<u32>,
) -> StdResult<Vec<StakeResponse>> {
    Ok(paginate_stakes(deps.storage, &token_id, start_after, limit)?
        .into_iter()
        .map(|(incentive_id, stake)| StakeResponse {
            token_id: token_id.clone(),
            incentive_id: incentive_id.into(),
            liquidity: stake.liquidity,
            seconds_per_liquidity_inside_initial_x128: stake
                .seconds_per_liquidity_inside_initial_x128,
        })
        .collect())
}

pub fn query_rewards(deps: Deps, reward_token: &str, owner: &str) -> StdResult<Uint128> {
    let owner = deps.api.addr_validate(owner)?;
    Ok(REWARDS.may_load(deps.storage, (reward_token, &owner))?.unwrap_or_default())
}

/// What `UnstakeToken` would credit if executed in the current block
pub fn query_reward_info(
    deps: Deps,
    env: &Env,
    key: &IncentiveKey,
    token_id: &str,
) -> ContractResult<RewardInfoResponse> {
    let incentive_id = key.id();
    let stake = STAKES
        .may_load(deps.storage, (token_id, incentive_id.as_slice()))?
        .ok_or_else(|| ContractError::precondition("stake does not exist"))?;
    let incentive = INCENTIVES.load(deps.storage, incentive_id.as_slice())?;
    if incentive.total_reward_unclaimed.is_zero() {
        return Ok(RewardInfoResponse::default());
    }

    let deposit = load_deposit(deps.storage, token_id)?;
    let snapshot = Pool::new(deps.api.addr_validate(&key.pool)?).snapshot_cumulatives_inside(
        &deps.querier,
        deposit.tick_lower,
        deposit.tick_upper,
    )?;

    compute_reward_amount(
        &incentive,
        key,
        &stake,
        snapshot.seconds_per_liquidity_inside_x128,
        env.block.time.seconds(),
    )
}
