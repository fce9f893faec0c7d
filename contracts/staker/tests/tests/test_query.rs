use cosmwasm_std::{HexBinary, StdError, Uint128, Uint256};
use range_staker::{contract::query, ContractError};
use range_testing::mock_env_at_block_time;
use range_types::{
    keys::IncentiveKey,
    staker::{DepositResponse, IncentiveResponse, QueryMsg, RewardInfoResponse, StakeResponse},
};
use range_utils::math::seconds_to_x128;

use super::helpers::{
    th_acc, th_create_incentive, th_deposit, th_key, th_query, th_query_with_env, th_set_acc,
    th_setup, th_stake, th_unstake, DURATION, END, START,
};

#[test]
fn incentive_id_matches_the_key_hash() {
    let deps = th_setup();
    let key = th_key();

    let id: HexBinary = th_query(
        deps.as_ref(),
        QueryMsg::IncentiveId {
            key: key.clone(),
        },
    );
    assert_eq!(id, key.id().to_hex());
    assert_eq!(id.len(), 32);
}

#[test]
fn missing_records_are_zeroed() {
    let deps = th_setup();
    let key = th_key();

    let incentive: IncentiveResponse = th_query(
        deps.as_ref(),
        QueryMsg::Incentive {
            key: key.clone(),
        },
    );
    assert_eq!(
        incentive,
        IncentiveResponse {
            incentive_id: key.id().to_hex(),
            total_reward_unclaimed: Uint128::zero(),
            total_seconds_claimed_x128: Uint256::zero(),
            number_of_stakes: 0,
        }
    );

    let deposit: DepositResponse = th_query(
        deps.as_ref(),
        QueryMsg::Deposit {
            token_id: "1".to_string(),
        },
    );
    assert_eq!(
        deposit,
        DepositResponse {
            token_id: "1".to_string(),
            owner: None,
            number_of_stakes: 0,
            tick_lower: 0,
            tick_upper: 0,
        }
    );

    let stake: StakeResponse = th_query(
        deps.as_ref(),
        QueryMsg::Stake {
            token_id: "1".to_string(),
            incentive_id: key.id().to_hex(),
        },
    );
    assert_eq!(stake.liquidity, Uint128::zero());
    assert_eq!(stake.seconds_per_liquidity_inside_initial_x128, Uint256::zero());

    let rewards: Uint128 = th_query(
        deps.as_ref(),
        QueryMsg::Rewards {
            reward_token: "ureward".to_string(),
            owner: "alice".to_string(),
        },
    );
    assert_eq!(rewards, Uint128::zero());
}

#[test]
fn stakes_of_a_position_are_paginated() {
    let mut deps = th_setup();
    th_deposit(&mut deps, "alice", "1", 100);

    let mut keys: Vec<IncentiveKey> = (0..4)
        .map(|i| IncentiveKey {
            end_time: END + i,
            ..th_key()
        })
        .collect();
    for key in &keys {
        th_create_incentive(deps.as_mut(), key, 1_000);
        th_stake(deps.as_mut(), START, "alice", key, "1").unwrap();
    }
    keys.sort_by_key(|key| key.id());

    let all: Vec<StakeResponse> = th_query(
        deps.as_ref(),
        QueryMsg::Stakes {
            token_id: "1".to_string(),
            start_after: None,
            limit: None,
        },
    );
    assert_eq!(
        all.iter().map(|stake| stake.incentive_id.clone()).collect::<Vec<_>>(),
        keys.iter().map(|key| key.id().to_hex()).collect::<Vec<_>>()
    );
    assert!(all.iter().all(|stake| stake.liquidity == Uint128::new(100)));

    let page: Vec<StakeResponse> = th_query(
        deps.as_ref(),
        QueryMsg::Stakes {
            token_id: "1".to_string(),
            start_after: Some(keys[1].id().to_hex()),
            limit: Some(1),
        },
    );
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].incentive_id, keys[2].id().to_hex());

    let none: Vec<StakeResponse> = th_query(
        deps.as_ref(),
        QueryMsg::Stakes {
            token_id: "2".to_string(),
            start_after: None,
            limit: None,
        },
    );
    assert!(none.is_empty());
}

#[test]
fn reward_info_projects_what_unstake_credits() {
    let mut deps = th_setup();
    let key = th_key();
    th_create_incentive(deps.as_mut(), &key, 1_000);
    th_deposit(&mut deps, "alice", "1", 5);
    th_stake(deps.as_mut(), START, "alice", &key, "1").unwrap();
    th_set_acc(&mut deps, th_acc(DURATION / 4, 5));

    let info: RewardInfoResponse = th_query_with_env(
        deps.as_ref(),
        mock_env_at_block_time(START + DURATION / 4),
        QueryMsg::RewardInfo {
            key: key.clone(),
            token_id: "1".to_string(),
        },
    );
    assert_eq!(
        info,
        RewardInfoResponse {
            reward: Uint128::new(250),
            seconds_inside_x128: seconds_to_x128(DURATION / 4).unwrap(),
        }
    );

    // querying does not change anything
    let incentive: IncentiveResponse = th_query(
        deps.as_ref(),
        QueryMsg::Incentive {
            key: key.clone(),
        },
    );
    assert_eq!(incentive.total_reward_unclaimed, Uint128::new(1_000));

    th_unstake(deps.as_mut(), START + DURATION / 4, "alice", &key, "1").unwrap();
    let rewards: Uint128 = th_query(
        deps.as_ref(),
        QueryMsg::Rewards {
            reward_token: "ureward".to_string(),
            owner: "alice".to_string(),
        },
    );
    assert_eq!(rewards, info.reward);
}

#[test]
fn reward_info_without_stake() {
    let deps = th_setup();

    let err = query(
        deps.as_ref(),
        mock_env_at_block_time(START),
        QueryMsg::RewardInfo {
            key: th_key(),
            token_id: "1".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::precondition("stake does not exist"));
}

#[test]
fn stake_query_rejects_malformed_incentive_id() {
    let deps = th_setup();

    let err = query(
        deps.as_ref(),
        mock_env_at_block_time(START),
        QueryMsg::Stake {
            token_id: "1".to_string(),
            incentive_id: HexBinary::from([0xab; 20].as_slice()),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::Std(StdError::invalid_data_size(32, 20)));
}
