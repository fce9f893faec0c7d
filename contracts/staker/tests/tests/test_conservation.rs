use cosmwasm_std::{Uint128, Uint256};
use proptest::{collection::vec, prelude::*};
use range_types::staker::{ExecuteMsg, IncentiveResponse, QueryMsg};
use range_utils::math::seconds_to_x128;

use super::helpers::{
    th_create_incentive, th_deposit, th_event_attr, th_execute, th_key, th_query, th_rewards,
    th_set_acc, th_setup, th_stake, th_unstake, DURATION, END, START,
};

const REWARD: u128 = 1_000_000;

/// (liquidity, stake delay after start, time staked) per position
fn positions() -> impl Strategy<Value = Vec<(u128, u64, u64)>> {
    vec((1u128..1_000_000_000_000, 0..DURATION, 1..2 * DURATION), 1..6)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rewards_never_exceed_the_funded_amount(positions in positions()) {
        let mut deps = th_setup();
        let key = th_key();
        th_create_incentive(deps.as_mut(), &key, REWARD);

        // every position sits in the same range for the whole test, staked or not
        let total_liquidity: u128 = positions.iter().map(|(liquidity, _, _)| liquidity).sum();
        let acc_at = |time: u64| {
            seconds_to_x128(time - START).unwrap() / Uint256::from(total_liquidity)
        };

        // (time, is_unstake, position index), stakes sorted before unstakes at the same time
        let mut actions = vec![];
        for (i, (liquidity, delay, staked_for)) in positions.iter().enumerate() {
            th_deposit(&mut deps, "alice", &i.to_string(), *liquidity);
            actions.push((START + delay, false, i));
            actions.push((START + delay + staked_for, true, i));
        }
        actions.sort();

        let mut paid = Uint128::zero();
        for (time, is_unstake, i) in actions {
            th_set_acc(&mut deps, acc_at(time));
            if is_unstake {
                let res = th_unstake(deps.as_mut(), time, "alice", &key, &i.to_string()).unwrap();
                let reward: u128 =
                    th_event_attr(&res, "range-staker/unstake_token", "reward").parse().unwrap();
                paid += Uint128::new(reward);
            } else {
                th_stake(deps.as_mut(), time, "alice", &key, &i.to_string()).unwrap();
            }
        }

        let incentive: IncentiveResponse = th_query(
            deps.as_ref(),
            QueryMsg::Incentive {
                key: key.clone(),
            },
        );
        prop_assert_eq!(incentive.number_of_stakes, 0);
        prop_assert!(paid <= Uint128::new(REWARD));
        prop_assert_eq!(paid + incentive.total_reward_unclaimed, Uint128::new(REWARD));
        prop_assert_eq!(th_rewards(deps.as_ref(), "alice"), paid);

        if !incentive.total_reward_unclaimed.is_zero() {
            let res = th_execute(
                deps.as_mut(),
                END + 2 * DURATION,
                "anyone",
                ExecuteMsg::EndIncentive {
                    key,
                },
            )
            .unwrap();
            let refund: u128 =
                th_event_attr(&res, "range-staker/end_incentive", "refund").parse().unwrap();
            prop_assert_eq!(paid.u128() + refund, REWARD);
        }
    }
}
