use cosmwasm_std::{coins, BankMsg, CosmosMsg, SubMsg, Uint128};
use range_types::staker::ExecuteMsg;
use test_case::test_case;

use super::helpers::{
    th_acc, th_create_incentive, th_deposit, th_event_attr, th_execute, th_key, th_rewards,
    th_set_acc, th_setup, th_stake, th_unstake, MockDeps, DURATION, END, REWARD_DENOM, START,
};

/// alice has 1000 claimable
fn setup_rewards() -> MockDeps {
    let mut deps = th_setup();
    th_create_incentive(deps.as_mut(), &th_key(), 1_000);
    th_deposit(&mut deps, "alice", "1", 5);
    th_stake(deps.as_mut(), START, "alice", &th_key(), "1").unwrap();
    th_set_acc(&mut deps, th_acc(DURATION, 5));
    th_unstake(deps.as_mut(), END, "alice", &th_key(), "1").unwrap();
    deps
}

fn claim(to: &str, amount_requested: Option<u128>) -> ExecuteMsg {
    ExecuteMsg::ClaimReward {
        reward_token: REWARD_DENOM.to_string(),
        to: to.to_string(),
        amount_requested: amount_requested.map(Uint128::new),
    }
}

fn send(to: &str, amount: u128) -> SubMsg {
    SubMsg::new(CosmosMsg::Bank(BankMsg::Send {
        to_address: to.to_string(),
        amount: coins(amount, REWARD_DENOM),
    }))
}

#[test_case(None; "nothing requested")]
#[test_case(Some(0); "zero requested")]
#[test_case(Some(1_000); "exact balance requested")]
#[test_case(Some(5_000); "more than the balance requested")]
fn claim_everything(amount_requested: Option<u128>) {
    let mut deps = setup_rewards();

    let res = th_execute(deps.as_mut(), END, "alice", claim("carol", amount_requested)).unwrap();
    assert_eq!(res.messages, vec![send("carol", 1_000)]);
    assert_eq!(th_event_attr(&res, "range-staker/claim_reward", "amount"), "1000");
    assert_eq!(th_event_attr(&res, "range-staker/claim_reward", "to"), "carol");
    assert_eq!(th_rewards(deps.as_ref(), "alice"), Uint128::zero());
}

#[test]
fn partial_claim_leaves_the_rest() {
    let mut deps = setup_rewards();

    let res = th_execute(deps.as_mut(), END, "alice", claim("alice", Some(300))).unwrap();
    assert_eq!(res.messages, vec![send("alice", 300)]);
    assert_eq!(th_rewards(deps.as_ref(), "alice"), Uint128::new(700));

    let res = th_execute(deps.as_mut(), END, "alice", claim("alice", None)).unwrap();
    assert_eq!(res.messages, vec![send("alice", 700)]);
    assert_eq!(th_rewards(deps.as_ref(), "alice"), Uint128::zero());
}

#[test]
fn claim_with_nothing_accrued_is_a_no_op() {
    let mut deps = setup_rewards();

    let res = th_execute(deps.as_mut(), END, "bob", claim("bob", None)).unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(th_event_attr(&res, "range-staker/claim_reward", "amount"), "0");
    assert_eq!(th_rewards(deps.as_ref(), "alice"), Uint128::new(1_000));
}

#[test]
fn claims_are_per_reward_token() {
    let mut deps = setup_rewards();

    let res = th_execute(
        deps.as_mut(),
        END,
        "alice",
        ExecuteMsg::ClaimReward {
            reward_token: "uother".to_string(),
            to: "alice".to_string(),
            amount_requested: None,
        },
    )
    .unwrap();
    assert!(res.messages.is_empty());
    assert_eq!(th_rewards(deps.as_ref(), "alice"), Uint128::new(1_000));
}
