use cosmwasm_std::{
    Addr, HexBinary, Order, OverflowError, OverflowOperation, StdResult, Storage, Uint128,
};
use cw_storage_plus::{Bound, Item, Map};
use range_types::staker::{Config, Deposit, Incentive, Stake};

/// The configuration of the contract
pub const CONFIG: Item<Config> = Item::new("config");

/// Incentive accounting, keyed by incentive id bytes
pub const INCENTIVES: Map<&[u8], Incentive> = Map::new("incentives");

/// Positions held in custody, keyed by token id
pub const DEPOSITS: Map<&str, Deposit> = Map::new("deposits");

/// Live stakes. The key is (token id, incentive id bytes).
pub const STAKES: Map<(&str, &[u8]), Stake> = Map::new("stakes");

/// Claimable rewards. The key is (reward denom, owner).
pub const REWARDS: Map<(&str, &Addr), Uint128> = Map::new("rewards");

/// The default limit for pagination over stakes of a position
pub const DEFAULT_LIMIT: u32 = 10;

/// The maximum limit for pagination over stakes of a position
pub const MAX_LIMIT: u32 = 30;

pub fn increment(counter: u64) -> Result<u64, OverflowError> {
    counter.checked_add(1).ok_or_else(|| OverflowError::new(OverflowOperation::Add, counter, 1))
}

pub fn decrement(counter: u64) -> Result<u64, OverflowError> {
    counter.checked_sub(1).ok_or_else(|| OverflowError::new(OverflowOperation::Sub, counter, 1))
}

/// Adds `amount` to the claimable balance of `owner`
pub fn increase_rewards(
    storage: &mut dyn Storage,
    reward_token: &str,
    owner: &Addr,
    amount: Uint128,
) -> StdResult<Uint128> {
    REWARDS.update(storage, (reward_token, owner), |balance| {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })
}

/// Returns the stakes of a position ordered by incentive id, with optional pagination
pub fn paginate_stakes(
    storage: &dyn Storage,
    token_id: &str,
    start_after: Option<HexBinary>,
    limit: Option<u32>,
) -> StdResult<Vec<(Vec<u8>, Stake)>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|id| Bound::ExclusiveRaw(id.to_vec()));
    STAKES
        .prefix(token_id)
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .collect()
}
