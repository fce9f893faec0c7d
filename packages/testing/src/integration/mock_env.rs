#![allow(dead_code)]

use std::mem::take;

use anyhow::Result as AnyResult;
use cosmwasm_std::{coin, to_json_binary, Addr, Coin, Empty, HexBinary, Uint128, Uint256};
use cw721::OwnerOfResponse;
use cw_multi_test::{App, AppResponse, BankSudo, BasicApp, Executor, SudoMsg};
use range_types::{
    keys::IncentiveKey,
    position_manager,
    staker::{
        self, Config, DepositResponse, IncentiveResponse, ReceiveNftMsg, RewardInfoResponse,
        StakeResponse,
    },
};

use crate::integration::mock_contracts::{
    mock_pool_contract, mock_position_manager_contract, mock_staker_contract,
};

pub struct MockEnv {
    pub app: BasicApp,
    pub deployer: Addr,
    pub staker: Staker,
    pub position_manager: PositionManager,
    pub pool: Pool,
}

#[derive(Clone)]
pub struct Staker {
    pub contract_addr: Addr,
}

#[derive(Clone)]
pub struct PositionManager {
    pub contract_addr: Addr,
}

#[derive(Clone)]
pub struct Pool {
    pub contract_addr: Addr,
}

impl MockEnv {
    pub fn current_time(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn increment_by_time(&mut self, seconds: u64) {
        self.app.update_block(|block| {
            block.height += seconds / 6;
            // assume block time = 6 sec
            block.time = block.time.plus_seconds(seconds);
        })
    }

    pub fn set_block_time(&mut self, seconds: u64) {
        let now = self.current_time();
        assert!(seconds >= now, "[mock]: time can not go backwards");
        self.increment_by_time(seconds - now);
    }

    pub fn fund_account(&mut self, addr: &Addr, coins: &[Coin]) {
        self.app
            .sudo(SudoMsg::Bank(BankSudo::Mint {
                to_address: addr.to_string(),
                amount: coins.to_vec(),
            }))
            .unwrap();
    }

    pub fn query_balance(&self, addr: &Addr, denom: &str) -> Uint128 {
        self.app.wrap().query_balance(addr, denom).unwrap().amount
    }

    /// An incentive on the mock pool starting `start_in` seconds from now and lasting `duration`
    pub fn incentive_key(
        &self,
        reward_token: &str,
        start_in: u64,
        duration: u64,
        refundee: &Addr,
    ) -> IncentiveKey {
        let start_time = self.current_time() + start_in;
        IncentiveKey {
            reward_token: reward_token.to_string(),
            pool: self.pool.contract_addr.to_string(),
            start_time,
            end_time: start_time + duration,
            refundee: refundee.to_string(),
        }
    }
}

impl Staker {
    pub fn execute(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        msg: &staker::ExecuteMsg,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        env.app.execute_contract(sender.clone(), self.contract_addr.clone(), msg, funds)
    }

    pub fn create_incentive(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        key: &IncentiveKey,
        reward: u128,
    ) -> AnyResult<AppResponse> {
        self.create_incentive_with_funds(
            env,
            sender,
            key,
            reward,
            &[coin(reward, &key.reward_token)],
        )
    }

    pub fn create_incentive_with_funds(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        key: &IncentiveKey,
        reward: u128,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::CreateIncentive {
                key: key.clone(),
                reward: Uint128::new(reward),
            },
            funds,
        )
    }

    pub fn end_incentive(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        key: &IncentiveKey,
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::EndIncentive {
                key: key.clone(),
            },
            &[],
        )
    }

    pub fn stake_token(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        key: &IncentiveKey,
        token_id: &str,
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::StakeToken {
                key: key.clone(),
                token_id: token_id.to_string(),
            },
            &[],
        )
    }

    pub fn unstake_token(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        key: &IncentiveKey,
        token_id: &str,
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::UnstakeToken {
                key: key.clone(),
                token_id: token_id.to_string(),
            },
            &[],
        )
    }

    pub fn withdraw_token(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        token_id: &str,
        to: &Addr,
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::WithdrawToken {
                token_id: token_id.to_string(),
                to: to.to_string(),
            },
            &[],
        )
    }

    pub fn transfer_deposit(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        token_id: &str,
        to: &Addr,
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::TransferDeposit {
                token_id: token_id.to_string(),
                to: to.to_string(),
            },
            &[],
        )
    }

    pub fn claim_reward(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        reward_token: &str,
        to: &Addr,
        amount_requested: Option<u128>,
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::ClaimReward {
                reward_token: reward_token.to_string(),
                to: to.to_string(),
                amount_requested: amount_requested.map(Uint128::new),
            },
            &[],
        )
    }

    pub fn multicall(
        &self,
        env: &mut MockEnv,
        sender: &Addr,
        msgs: Vec<staker::ExecuteMsg>,
        funds: &[Coin],
    ) -> AnyResult<AppResponse> {
        self.execute(
            env,
            sender,
            &staker::ExecuteMsg::Multicall {
                msgs,
            },
            funds,
        )
    }

    pub fn query_config(&self, env: &MockEnv) -> Config {
        env.app
            .wrap()
            .query_wasm_smart(self.contract_addr.clone(), &staker::QueryMsg::Config {})
            .unwrap()
    }

    pub fn query_incentive_id(&self, env: &MockEnv, key: &IncentiveKey) -> HexBinary {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::IncentiveId {
                    key: key.clone(),
                },
            )
            .unwrap()
    }

    pub fn query_incentive(&self, env: &MockEnv, key: &IncentiveKey) -> IncentiveResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::Incentive {
                    key: key.clone(),
                },
            )
            .unwrap()
    }

    pub fn query_deposit(&self, env: &MockEnv, token_id: &str) -> DepositResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::Deposit {
                    token_id: token_id.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_stake(&self, env: &MockEnv, key: &IncentiveKey, token_id: &str) -> StakeResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::Stake {
                    token_id: token_id.to_string(),
                    incentive_id: key.id().to_hex(),
                },
            )
            .unwrap()
    }

    pub fn query_stakes(&self, env: &MockEnv, token_id: &str) -> Vec<StakeResponse> {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::Stakes {
                    token_id: token_id.to_string(),
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap()
    }

    pub fn query_rewards(&self, env: &MockEnv, reward_token: &str, owner: &Addr) -> Uint128 {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::Rewards {
                    reward_token: reward_token.to_string(),
                    owner: owner.to_string(),
                },
            )
            .unwrap()
    }

    pub fn query_reward_info(
        &self,
        env: &MockEnv,
        key: &IncentiveKey,
        token_id: &str,
    ) -> RewardInfoResponse {
        env.app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &staker::QueryMsg::RewardInfo {
                    key: key.clone(),
                    token_id: token_id.to_string(),
                },
            )
            .unwrap()
    }
}

impl PositionManager {
    /// Mints a position over the mock pool and returns its token id
    pub fn mint(
        &self,
        env: &mut MockEnv,
        owner: &Addr,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> String {
        let pool = env.pool.contract_addr.to_string();
        self.mint_in_pool(env, owner, &pool, tick_lower, tick_upper, liquidity)
    }

    pub fn mint_in_pool(
        &self,
        env: &mut MockEnv,
        owner: &Addr,
        pool: &str,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) -> String {
        let res = env
            .app
            .execute_contract(
                env.deployer.clone(),
                self.contract_addr.clone(),
                &range_mock_position_manager::msg::ExecuteMsg::Mint {
                    owner: owner.to_string(),
                    pool: pool.to_string(),
                    tick_lower,
                    tick_upper,
                    liquidity: Uint128::new(liquidity),
                },
                &[],
            )
            .unwrap();
        res.events
            .iter()
            .flat_map(|event| event.attributes.iter())
            .find(|attr| attr.key == "token_id")
            .map(|attr| attr.value.clone())
            .unwrap()
    }

    pub fn set_liquidity(&self, env: &mut MockEnv, token_id: &str, liquidity: u128) {
        env.app
            .execute_contract(
                env.deployer.clone(),
                self.contract_addr.clone(),
                &range_mock_position_manager::msg::ExecuteMsg::SetLiquidity {
                    token_id: token_id.to_string(),
                    liquidity: Uint128::new(liquidity),
                },
                &[],
            )
            .unwrap();
    }

    /// Sends the position to the staker, which takes custody of it
    pub fn deposit(
        &self,
        env: &mut MockEnv,
        owner: &Addr,
        token_id: &str,
        hook: Option<ReceiveNftMsg>,
    ) -> AnyResult<AppResponse> {
        let msg = match hook {
            Some(hook) => to_json_binary(&hook)?,
            None => Default::default(),
        };
        env.app.execute_contract(
            owner.clone(),
            self.contract_addr.clone(),
            &range_mock_position_manager::msg::ExecuteMsg::SendNft {
                contract: env.staker.contract_addr.to_string(),
                token_id: token_id.to_string(),
                msg,
            },
            &[],
        )
    }

    pub fn query_owner_of(&self, env: &MockEnv, token_id: &str) -> Addr {
        let res: OwnerOfResponse = env
            .app
            .wrap()
            .query_wasm_smart(
                self.contract_addr.clone(),
                &position_manager::QueryMsg::OwnerOf {
                    token_id: token_id.to_string(),
                    include_expired: None,
                },
            )
            .unwrap();
        Addr::unchecked(res.owner)
    }
}

impl Pool {
    pub fn set_seconds_per_liquidity_inside(
        &self,
        env: &mut MockEnv,
        tick_lower: i32,
        tick_upper: i32,
        value: Uint256,
    ) {
        env.app
            .execute_contract(
                env.deployer.clone(),
                self.contract_addr.clone(),
                &range_mock_pool::msg::ExecuteMsg::SetSecondsPerLiquidityInside {
                    tick_lower,
                    tick_upper,
                    value,
                },
                &[],
            )
            .unwrap();
    }
}

pub struct MockEnvBuilder {
    app: BasicApp,
    deployer: Addr,
    max_incentive_start_lead_time: u64,
    max_incentive_duration: u64,
}

impl MockEnvBuilder {
    pub fn new(deployer: Addr) -> Self {
        Self {
            app: App::default(),
            deployer,
            max_incentive_start_lead_time: 30 * 24 * 3600,
            max_incentive_duration: 365 * 24 * 3600,
        }
    }

    pub fn max_incentive_start_lead_time(&mut self, seconds: u64) -> &mut Self {
        self.max_incentive_start_lead_time = seconds;
        self
    }

    pub fn max_incentive_duration(&mut self, seconds: u64) -> &mut Self {
        self.max_incentive_duration = seconds;
        self
    }

    pub fn build(&mut self) -> MockEnv {
        let position_manager_addr = self.deploy_position_manager();
        let pool_addr = self.deploy_pool();
        let staker_addr = self.deploy_staker(&position_manager_addr);

        MockEnv {
            app: take(&mut self.app),
            deployer: self.deployer.clone(),
            staker: Staker {
                contract_addr: staker_addr,
            },
            position_manager: PositionManager {
                contract_addr: position_manager_addr,
            },
            pool: Pool {
                contract_addr: pool_addr,
            },
        }
    }

    fn deploy_position_manager(&mut self) -> Addr {
        let code_id = self.app.store_code(mock_position_manager_contract());

        self.app
            .instantiate_contract(
                code_id,
                self.deployer.clone(),
                &Empty {},
                &[],
                "mock-position-manager",
                None,
            )
            .unwrap()
    }

    fn deploy_pool(&mut self) -> Addr {
        let code_id = self.app.store_code(mock_pool_contract());

        self.app
            .instantiate_contract(code_id, self.deployer.clone(), &Empty {}, &[], "mock-pool", None)
            .unwrap()
    }

    fn deploy_staker(&mut self, position_manager_addr: &Addr) -> Addr {
        let code_id = self.app.store_code(mock_staker_contract());

        self.app
            .instantiate_contract(
                code_id,
                self.deployer.clone(),
                &staker::InstantiateMsg {
                    position_manager: position_manager_addr.to_string(),
                    max_incentive_start_lead_time: self.max_incentive_start_lead_time,
                    max_incentive_duration: self.max_incentive_duration,
                },
                &[],
                "range-staker",
                None,
            )
            .unwrap()
    }
}
