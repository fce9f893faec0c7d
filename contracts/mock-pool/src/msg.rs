use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

#[cw_serde]
pub enum ExecuteMsg {
    // Meant to simulate time passing with liquidity in range. Not available in prod.
    SetSecondsPerLiquidityInside {
        tick_lower: i32,
        tick_upper: i32,
        value: Uint256,
    },
}
