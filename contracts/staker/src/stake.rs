use cosmwasm_std::{Addr, DepsMut, Env, Event, Response, Uint128};
use range_types::{
    keys::IncentiveKey, pool::Pool, position_manager::PositionManager, staker::Stake,
};

use crate::{
    deposit::load_deposit,
    error::{ContractError, ContractResult},
    reward_math::compute_reward_amount,
    state::{decrement, increase_rewards, increment, CONFIG, DEPOSITS, INCENTIVES, STAKES},
};

pub fn stake_token(
    deps: DepsMut,
    env: &Env,
    sender: &Addr,
    key: IncentiveKey,
    token_id: String,
) -> ContractResult<Response> {
    let deposit = load_deposit(deps.storage, &token_id)?;
    if deposit.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }

    let event = stake(deps, env, &token_id, key)?;

    Ok(Response::new().add_attribute("action", "stake_token").add_event(event))
}

/// Stakes a deposited position in an incentive. The caller is responsible for authorizing the
/// deposit owner.
pub(crate) fn stake(
    deps: DepsMut,
    env: &Env,
    token_id: &str,
    key: IncentiveKey,
) -> ContractResult<Event> {
    let now = env.block.time.seconds();
    if now < key.start_time {
        return Err(ContractError::NotYetEligible {
            reason: "incentive not started".to_string(),
        });
    }
    if now >= key.end_time {
        return Err(ContractError::NoLongerEligible {
            reason: "incentive ended".to_string(),
        });
    }

    let incentive_id = key.id();
    let mut incentive = INCENTIVES
        .may_load(deps.storage, incentive_id.as_slice())?
        .filter(|incentive| !incentive.total_reward_unclaimed.is_zero())
        .ok_or_else(|| ContractError::precondition("non-existent incentive"))?;

    if STAKES.has(deps.storage, (token_id, incentive_id.as_slice())) {
        return Err(ContractError::precondition("token already staked"));
    }

    let config = CONFIG.load(deps.storage)?;
    let position = PositionManager::new(config.position_manager)
        .query_position(&deps.querier, token_id)?;
    if position.pool != key.pool {
        return Err(ContractError::precondition("token pool is not the incentive pool"));
    }
    if position.liquidity.is_zero() {
        return Err(ContractError::precondition("cannot stake token with 0 liquidity"));
    }

    let mut deposit = load_deposit(deps.storage, token_id)?;
    let snapshot = Pool::new(deps.api.addr_validate(&key.pool)?).snapshot_cumulatives_inside(
        &deps.querier,
        deposit.tick_lower,
        deposit.tick_upper,
    )?;

    deposit.number_of_stakes = increment(deposit.number_of_stakes)?;
    incentive.number_of_stakes = increment(incentive.number_of_stakes)?;

    DEPOSITS.save(deps.storage, token_id, &deposit)?;
    INCENTIVES.save(deps.storage, incentive_id.as_slice(), &incentive)?;
    STAKES.save(
        deps.storage,
        (token_id, incentive_id.as_slice()),
        &Stake {
            liquidity: position.liquidity,
            seconds_per_liquidity_inside_initial_x128: snapshot.seconds_per_liquidity_inside_x128,
        },
    )?;

    Ok(Event::new("range-staker/stake_token")
        .add_attribute("token_id", token_id)
        .add_attribute("incentive_id", incentive_id.to_string())
        .add_attribute("liquidity", position.liquidity))
}

/// Ends a stake and credits whatever it earned to the deposit owner. Only the deposit owner may
/// unstake before the incentive ends, anyone may afterwards.
pub fn unstake_token(
    deps: DepsMut,
    env: &Env,
    sender: &Addr,
    key: IncentiveKey,
    token_id: String,
) -> ContractResult<Response> {
    let now = env.block.time.seconds();

    let mut deposit = load_deposit(deps.storage, &token_id)?;
    if now < key.end_time && deposit.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }

    let incentive_id = key.id();
    let stake = STAKES
        .may_load(deps.storage, (token_id.as_str(), incentive_id.as_slice()))?
        .ok_or_else(|| ContractError::precondition("stake does not exist"))?;
    let mut incentive = INCENTIVES.load(deps.storage, incentive_id.as_slice())?;

    deposit.number_of_stakes = decrement(deposit.number_of_stakes)?;
    incentive.number_of_stakes = decrement(incentive.number_of_stakes)?;

    let mut reward = Uint128::zero();
    if !incentive.total_reward_unclaimed.is_zero() {
        let snapshot = Pool::new(deps.api.addr_validate(&key.pool)?).snapshot_cumulatives_inside(
            &deps.querier,
            deposit.tick_lower,
            deposit.tick_upper,
        )?;
        let computed = compute_reward_amount(
            &incentive,
            &key,
            &stake,
            snapshot.seconds_per_liquidity_inside_x128,
            now,
        )?;

        incentive.total_seconds_claimed_x128 =
            incentive.total_seconds_claimed_x128.checked_add(computed.seconds_inside_x128)?;
        incentive.total_reward_unclaimed =
            incentive.total_reward_unclaimed.checked_sub(computed.reward)?;
        reward = computed.reward;
    }

    DEPOSITS.save(deps.storage, &token_id, &deposit)?;
    INCENTIVES.save(deps.storage, incentive_id.as_slice(), &incentive)?;
    STAKES.remove(deps.storage, (token_id.as_str(), incentive_id.as_slice()));
    if !reward.is_zero() {
        increase_rewards(deps.storage, &key.reward_token, &deposit.owner, reward)?;
    }

    let event = Event::new("range-staker/unstake_token")
        .add_attribute("token_id", &token_id)
        .add_attribute("incentive_id", incentive_id.to_string())
        .add_attribute("owner", deposit.owner.as_str())
        .add_attribute("reward", reward);

    Ok(Response::new().add_attribute("action", "unstake_token").add_event(event))
}
