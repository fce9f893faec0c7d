use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128, Uint256};
use cw721::Cw721ReceiveMsg;

use crate::keys::IncentiveKey;

/// Global configuration, fixed at instantiation
#[cw_serde]
pub struct Config {
    /// The only registry whose positions can be deposited
    pub position_manager: Addr,
    /// How far into the future an incentive may start, in seconds
    pub max_incentive_start_lead_time: u64,
    /// Longest allowed reward window, in seconds
    pub max_incentive_duration: u64,
}

/// Accounting state of a single incentive
#[cw_serde]
#[derive(Default)]
pub struct Incentive {
    /// Rewards neither credited to a staker nor refunded yet
    pub total_reward_unclaimed: Uint128,
    /// Liquidity-weighted seconds already paid out, scaled by 2^128
    pub total_seconds_claimed_x128: Uint256,
    /// Number of live stakes referencing the incentive
    pub number_of_stakes: u64,
}

/// A position held in custody by the staker
#[cw_serde]
pub struct Deposit {
    /// Who may stake, unstake, transfer and withdraw the position
    pub owner: Addr,
    /// Number of incentives the position is currently staked in
    pub number_of_stakes: u64,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

/// Snapshot taken when a position is staked in an incentive
#[cw_serde]
pub struct Stake {
    /// Position liquidity at stake time. Later liquidity changes on the position are ignored.
    pub liquidity: Uint128,
    /// The range's seconds-per-liquidity accumulator at stake time
    pub seconds_per_liquidity_inside_initial_x128: Uint256,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Position manager contract whose NFTs can be deposited
    pub position_manager: String,
    /// How far into the future an incentive may start, in seconds
    pub max_incentive_start_lead_time: u64,
    /// Longest allowed reward window, in seconds
    pub max_incentive_duration: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// cw721 hand-off: the position manager sends a position to the staker. The inner message is
    /// a `ReceiveNftMsg`; an empty message is a plain deposit.
    ReceiveNft(Cw721ReceiveMsg),

    /// Create a new incentive. The reward must be sent along as funds in `key.reward_token`.
    CreateIncentive {
        key: IncentiveKey,
        reward: Uint128,
    },

    /// Refund the unclaimed rewards of an incentive to its refundee. Only possible after the end
    /// time, once no stakes remain.
    EndIncentive {
        key: IncentiveKey,
    },

    /// Stake a deposited position in an incentive (deposit owner only)
    StakeToken {
        key: IncentiveKey,
        token_id: String,
    },

    /// Unstake a position from an incentive, crediting its reward to the deposit owner.
    /// Before the end time only the deposit owner may unstake; afterwards anyone can.
    UnstakeToken {
        key: IncentiveKey,
        token_id: String,
    },

    /// Return a position that is no longer staked anywhere to `to`
    WithdrawToken {
        token_id: String,
        to: String,
    },

    /// Hand custody of a deposit that is not staked anywhere to another address
    TransferDeposit {
        token_id: String,
        to: String,
    },

    /// Send accrued rewards of the caller to `to`. Everything is sent if `amount_requested` is
    /// missing, zero, or larger than the balance.
    ClaimReward {
        reward_token: String,
        to: String,
        amount_requested: Option<Uint128>,
    },

    /// Execute several messages in order, as the same caller. Funds sent along are shared by the
    /// whole batch and must be used up exactly.
    Multicall {
        msgs: Vec<ExecuteMsg>,
    },
}

/// Message carried inside `Cw721ReceiveMsg::msg`
#[cw_serde]
pub enum ReceiveNftMsg {
    /// Only take custody of the position
    Deposit {},
    /// Take custody and stake in every incentive listed, in order
    DepositAndStake {
        keys: Vec<IncentiveKey>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},

    /// Compute the id of an incentive key
    #[returns(HexBinary)]
    IncentiveId {
        key: IncentiveKey,
    },

    #[returns(IncentiveResponse)]
    Incentive {
        key: IncentiveKey,
    },

    #[returns(DepositResponse)]
    Deposit {
        token_id: String,
    },

    #[returns(StakeResponse)]
    Stake {
        token_id: String,
        incentive_id: HexBinary,
    },

    /// Enumerate the live stakes of a position, ordered by incentive id
    #[returns(Vec<StakeResponse>)]
    Stakes {
        token_id: String,
        start_after: Option<HexBinary>,
        limit: Option<u32>,
    },

    /// Claimable reward balance of an owner
    #[returns(Uint128)]
    Rewards {
        reward_token: String,
        owner: String,
    },

    /// What unstaking the position right now would credit
    #[returns(RewardInfoResponse)]
    RewardInfo {
        key: IncentiveKey,
        token_id: String,
    },
}

#[cw_serde]
pub struct IncentiveResponse {
    pub incentive_id: HexBinary,
    pub total_reward_unclaimed: Uint128,
    pub total_seconds_claimed_x128: Uint256,
    pub number_of_stakes: u64,
}

impl IncentiveResponse {
    pub fn from(incentive_id: HexBinary, incentive: Incentive) -> Self {
        Self {
            incentive_id,
            total_reward_unclaimed: incentive.total_reward_unclaimed,
            total_seconds_claimed_x128: incentive.total_seconds_claimed_x128,
            number_of_stakes: incentive.number_of_stakes,
        }
    }
}

#[cw_serde]
pub struct DepositResponse {
    pub token_id: String,
    /// None when the position is not deposited
    pub owner: Option<Addr>,
    pub number_of_stakes: u64,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

#[cw_serde]
pub struct StakeResponse {
    pub token_id: String,
    pub incentive_id: HexBinary,
    /// Zero when the position is not staked in the incentive
    pub liquidity: Uint128,
    pub seconds_per_liquidity_inside_initial_x128: Uint256,
}

#[cw_serde]
#[derive(Default)]
pub struct RewardInfoResponse {
    pub reward: Uint128,
    pub seconds_inside_x128: Uint256,
}
