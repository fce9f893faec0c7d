use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Position {
    pub owner: Addr,
    pub pool: String,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: Uint128,
}

pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");
pub const POSITIONS: Map<&str, Position> = Map::new("positions");
