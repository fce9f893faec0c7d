use cosmwasm_std::Uint256;
use cw_storage_plus::Map;

/// Accumulator per (tick lower, tick upper)
pub const SECONDS_PER_LIQUIDITY_INSIDE: Map<(i32, i32), Uint256> =
    Map::new("seconds_per_liquidity_inside");
