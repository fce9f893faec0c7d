#![allow(dead_code)]

use cosmwasm_std::{coin, Addr, Uint256};
use range_testing::integration::mock_env::{MockEnv, MockEnvBuilder};
use range_types::keys::IncentiveKey;
use range_utils::math::seconds_to_x128;

pub const REWARD_DENOM: &str = "ureward";
pub const TICK_LOWER: i32 = -600;
pub const TICK_UPPER: i32 = 600;
pub const START_IN: u64 = 100;
pub const DURATION: u64 = 1000;

pub fn setup() -> MockEnv {
    MockEnvBuilder::new(Addr::unchecked("deployer")).build()
}

/// An incentive on the mock pool funded by `funder`, who is also the refundee
pub fn create_funded_incentive(
    mock_env: &mut MockEnv,
    funder: &Addr,
    reward: u128,
) -> IncentiveKey {
    let key = mock_env.incentive_key(REWARD_DENOM, START_IN, DURATION, funder);
    mock_env.fund_account(funder, &[coin(reward, REWARD_DENOM)]);
    let staker = mock_env.staker.clone();
    staker.create_incentive(mock_env, funder, &key, reward).unwrap();
    key
}

/// Accumulator value after `seconds` of the pool's active range holding `total_liquidity`
pub fn accumulator(seconds: u64, total_liquidity: u128) -> Uint256 {
    seconds_to_x128(seconds).unwrap() / Uint256::from(total_liquidity)
}

pub fn set_accumulator(mock_env: &mut MockEnv, value: Uint256) {
    let pool = mock_env.pool.clone();
    pool.set_seconds_per_liquidity_inside(mock_env, TICK_LOWER, TICK_UPPER, value);
}
