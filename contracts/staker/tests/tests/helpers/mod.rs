#![allow(dead_code)]

use cosmwasm_schema::serde;
use cosmwasm_std::{
    coin, from_json,
    testing::{MockApi, MockStorage},
    to_json_binary, Addr, Deps, DepsMut, Env, OwnedDeps, Response, Uint128, Uint256,
};
use cw721::Cw721ReceiveMsg;
use range_staker::{
    contract::{execute, instantiate, query},
    ContractResult,
};
use range_testing::{
    mock_dependencies, mock_env_at_block_time, mock_info, mock_info_with_funds, RangeMockQuerier,
};
use range_types::{
    keys::IncentiveKey,
    staker::{ExecuteMsg, InstantiateMsg, QueryMsg, ReceiveNftMsg},
};
use range_utils::math::seconds_to_x128;

pub type MockDeps = OwnedDeps<MockStorage, MockApi, RangeMockQuerier>;

pub const POSITION_MANAGER: &str = "position_manager";
pub const POOL: &str = "pool";
pub const REWARD_DENOM: &str = "ureward";
pub const REFUNDEE: &str = "refundee";

pub const TICK_LOWER: i32 = -600;
pub const TICK_UPPER: i32 = 600;

/// Block time at instantiation and incentive creation
pub const NOW: u64 = 1_700_000_000;
pub const START: u64 = NOW + 100;
pub const DURATION: u64 = 1_000;
pub const END: u64 = START + DURATION;

pub const MAX_LEAD_TIME: u64 = 30 * 24 * 3600;
pub const MAX_DURATION: u64 = 365 * 24 * 3600;

pub fn th_setup() -> MockDeps {
    let mut deps = mock_dependencies(&[]);
    deps.querier.set_position_manager(POSITION_MANAGER);

    let msg = InstantiateMsg {
        position_manager: POSITION_MANAGER.to_string(),
        max_incentive_start_lead_time: MAX_LEAD_TIME,
        max_incentive_duration: MAX_DURATION,
    };
    instantiate(deps.as_mut(), mock_env_at_block_time(NOW), mock_info("deployer"), msg).unwrap();

    deps
}

pub fn th_key() -> IncentiveKey {
    IncentiveKey {
        reward_token: REWARD_DENOM.to_string(),
        pool: POOL.to_string(),
        start_time: START,
        end_time: END,
        refundee: REFUNDEE.to_string(),
    }
}

/// Accumulator value once `seconds` have passed with `liquidity` active in the range
pub fn th_acc(seconds: u64, liquidity: u128) -> Uint256 {
    seconds_to_x128(seconds).unwrap() / Uint256::from(liquidity)
}

pub fn th_execute(
    deps: DepsMut,
    time: u64,
    sender: &str,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    execute(deps, mock_env_at_block_time(time), mock_info(sender), msg)
}

pub fn th_create_incentive(deps: DepsMut, key: &IncentiveKey, reward: u128) -> Response {
    execute(
        deps,
        mock_env_at_block_time(NOW),
        mock_info_with_funds("funder", &[coin(reward, &key.reward_token)]),
        ExecuteMsg::CreateIncentive {
            key: key.clone(),
            reward: Uint128::new(reward),
        },
    )
    .unwrap()
}

pub fn th_receive_nft(
    deps: DepsMut,
    time: u64,
    owner: &str,
    token_id: &str,
    hook: Option<ReceiveNftMsg>,
) -> ContractResult<Response> {
    let msg = match hook {
        Some(hook) => to_json_binary(&hook).unwrap(),
        None => Default::default(),
    };
    th_execute(
        deps,
        time,
        POSITION_MANAGER,
        ExecuteMsg::ReceiveNft(Cw721ReceiveMsg {
            sender: owner.to_string(),
            token_id: token_id.to_string(),
            msg,
        }),
    )
}

/// Registers a position in the default range of the pool and deposits it
pub fn th_deposit(deps: &mut MockDeps, owner: &str, token_id: &str, liquidity: u128) {
    deps.querier.set_position(token_id, POOL, TICK_LOWER, TICK_UPPER, liquidity);
    th_receive_nft(deps.as_mut(), NOW, owner, token_id, None).unwrap();
}

pub fn th_set_acc(deps: &mut MockDeps, value: Uint256) {
    deps.querier.set_seconds_per_liquidity_inside(POOL, TICK_LOWER, TICK_UPPER, value);
}

pub fn th_stake(
    deps: DepsMut,
    time: u64,
    owner: &str,
    key: &IncentiveKey,
    token_id: &str,
) -> ContractResult<Response> {
    th_execute(
        deps,
        time,
        owner,
        ExecuteMsg::StakeToken {
            key: key.clone(),
            token_id: token_id.to_string(),
        },
    )
}

pub fn th_unstake(
    deps: DepsMut,
    time: u64,
    sender: &str,
    key: &IncentiveKey,
    token_id: &str,
) -> ContractResult<Response> {
    th_execute(
        deps,
        time,
        sender,
        ExecuteMsg::UnstakeToken {
            key: key.clone(),
            token_id: token_id.to_string(),
        },
    )
}

pub fn th_query<T: serde::de::DeserializeOwned>(deps: Deps, msg: QueryMsg) -> T {
    th_query_with_env(deps, mock_env_at_block_time(NOW), msg)
}

pub fn th_query_with_env<T: serde::de::DeserializeOwned>(deps: Deps, env: Env, msg: QueryMsg) -> T {
    from_json(query(deps, env, msg).unwrap()).unwrap()
}

pub fn th_rewards(deps: Deps, owner: &str) -> Uint128 {
    th_query(
        deps,
        QueryMsg::Rewards {
            reward_token: REWARD_DENOM.to_string(),
            owner: owner.to_string(),
        },
    )
}

/// Value of an attribute of the first event of type `ty`
pub fn th_event_attr(res: &Response, ty: &str, key: &str) -> String {
    res.events
        .iter()
        .find(|event| event.ty == ty)
        .and_then(|event| event.attributes.iter().find(|attr| attr.key == key))
        .map(|attr| attr.value.clone())
        .unwrap()
}

pub fn th_addr(addr: &str) -> Addr {
    Addr::unchecked(addr)
}
