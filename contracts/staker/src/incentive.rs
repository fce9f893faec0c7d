use cosmwasm_std::{coin, Coins, DepsMut, Env, Event, Response, Uint128, Uint256};
use range_types::{keys::IncentiveKey, staker::Incentive};
use range_utils::helpers::{build_send_msg, validate_native_denom};

use crate::{
    error::{ContractError, ContractResult},
    state::{CONFIG, INCENTIVES},
};

pub fn create_incentive(
    deps: DepsMut,
    env: &Env,
    funds: &mut Coins,
    key: IncentiveKey,
    reward: Uint128,
) -> ContractResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time.seconds();

    if reward.is_zero() {
        return Err(ContractError::invalid_key("reward must be positive"));
    }
    validate_native_denom(&key.reward_token)
        .map_err(|err| ContractError::invalid_key(err.to_string()))?;
    deps.api
        .addr_validate(&key.pool)
        .map_err(|_| ContractError::invalid_key(format!("invalid pool address: {}", key.pool)))?;
    deps.api.addr_validate(&key.refundee).map_err(|_| {
        ContractError::invalid_key(format!("invalid refundee address: {}", key.refundee))
    })?;

    if key.start_time < now {
        return Err(ContractError::invalid_key("start time must be now or in the future"));
    }
    if key.start_time - now > config.max_incentive_start_lead_time {
        return Err(ContractError::invalid_key("start time too far into future"));
    }
    if key.start_time >= key.end_time {
        return Err(ContractError::invalid_key("start time must be before end time"));
    }
    if key.end_time - key.start_time > config.max_incentive_duration {
        return Err(ContractError::invalid_key("incentive duration is too long"));
    }

    let incentive_id = key.id();
    let existing = INCENTIVES.may_load(deps.storage, incentive_id.as_slice())?;
    if existing.is_some_and(|incentive| {
        !incentive.total_reward_unclaimed.is_zero() || incentive.number_of_stakes > 0
    }) {
        return Err(ContractError::AlreadyExists {
            id: incentive_id.to_string(),
        });
    }

    funds.sub(coin(reward.u128(), &key.reward_token)).map_err(|_| {
        ContractError::TransferFailed {
            reason: format!("reward of {reward}{} not covered by sent funds", key.reward_token),
        }
    })?;

    INCENTIVES.save(
        deps.storage,
        incentive_id.as_slice(),
        &Incentive {
            total_reward_unclaimed: reward,
            total_seconds_claimed_x128: Uint256::zero(),
            number_of_stakes: 0,
        },
    )?;

    let event = Event::new("range-staker/create_incentive")
        .add_attribute("incentive_id", incentive_id.to_string())
        .add_attribute("reward_token", &key.reward_token)
        .add_attribute("pool", &key.pool)
        .add_attribute("start_time", key.start_time.to_string())
        .add_attribute("end_time", key.end_time.to_string())
        .add_attribute("refundee", &key.refundee)
        .add_attribute("reward", reward);

    Ok(Response::new().add_attribute("action", "create_incentive").add_event(event))
}

pub fn end_incentive(deps: DepsMut, env: &Env, key: IncentiveKey) -> ContractResult<Response> {
    if env.block.time.seconds() < key.end_time {
        return Err(ContractError::NotYetEligible {
            reason: "cannot end incentive before end time".to_string(),
        });
    }

    let incentive_id = key.id();
    let mut incentive = INCENTIVES
        .may_load(deps.storage, incentive_id.as_slice())?
        .ok_or_else(|| ContractError::precondition("non-existent incentive"))?;

    let refund = incentive.total_reward_unclaimed;
    if refund.is_zero() {
        return Err(ContractError::precondition("no refund available"));
    }
    if incentive.number_of_stakes > 0 {
        return Err(ContractError::precondition("cannot end incentive while deposits are staked"));
    }

    let refundee = deps.api.addr_validate(&key.refundee)?;

    incentive.total_reward_unclaimed = Uint128::zero();
    INCENTIVES.save(deps.storage, incentive_id.as_slice(), &incentive)?;

    let event = Event::new("range-staker/end_incentive")
        .add_attribute("incentive_id", incentive_id.to_string())
        .add_attribute("refundee", refundee.as_str())
        .add_attribute("refund", refund);

    Ok(Response::new()
        .add_message(build_send_msg(&refundee, &key.reward_token, refund))
        .add_attribute("action", "end_incentive")
        .add_event(event))
}
