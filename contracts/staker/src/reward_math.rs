use std::cmp::max;

use cosmwasm_std::{OverflowError, OverflowOperation, Uint128, Uint256};
use range_types::{
    keys::IncentiveKey,
    staker::{Incentive, RewardInfoResponse, Stake},
};
use range_utils::math::{checked_mul_div, seconds_to_x128};

use crate::error::ContractResult;

/// Computes the reward a stake has earned and the liquidity-weighted seconds it accounts for.
///
/// The stake's share of the unclaimed rewards equals its share of the unclaimed
/// liquidity-seconds of the window, where the window is stretched to `current_time` once the end
/// time has passed so late unstakers split what is left:
///
/// ```text
/// seconds_inside = liquidity * (acc_now - acc_at_stake)
/// unclaimed      = ((max(end, now) - start) << 128) - total_seconds_claimed
/// reward         = total_reward_unclaimed * seconds_inside / max(unclaimed, seconds_inside)
/// ```
///
/// Flooring the denominator at `seconds_inside` keeps the ratio at most one when the claimed
/// total has drifted past the nominal window, and the result is clamped to the unclaimed rewards.
pub fn compute_reward_amount(
    incentive: &Incentive,
    key: &IncentiveKey,
    stake: &Stake,
    seconds_per_liquidity_inside_x128: Uint256,
    current_time: u64,
) -> ContractResult<RewardInfoResponse> {
    let seconds_inside_x128 = seconds_per_liquidity_inside_x128
        .checked_sub(stake.seconds_per_liquidity_inside_initial_x128)?
        .checked_mul(Uint256::from(stake.liquidity))?;

    if seconds_inside_x128.is_zero() {
        return Ok(RewardInfoResponse::default());
    }

    let window_end = max(key.end_time, current_time);
    let window_seconds = window_end.checked_sub(key.start_time).ok_or_else(|| {
        OverflowError::new(OverflowOperation::Sub, window_end, key.start_time)
    })?;
    let total_seconds_unclaimed_x128 =
        seconds_to_x128(window_seconds)?.saturating_sub(incentive.total_seconds_claimed_x128);

    let reward = checked_mul_div(
        Uint256::from(incentive.total_reward_unclaimed),
        seconds_inside_x128,
        max(total_seconds_unclaimed_x128, seconds_inside_x128),
    )?;
    let reward = Uint128::try_from(reward)?.min(incentive.total_reward_unclaimed);

    Ok(RewardInfoResponse {
        reward,
        seconds_inside_x128,
    })
}
