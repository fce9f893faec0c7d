use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128};

#[cw_serde]
pub enum ExecuteMsg {
    // Test helpers. Not available in prod.
    Mint {
        owner: String,
        pool: String,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: Uint128,
    },
    SetLiquidity {
        token_id: String,
        liquidity: Uint128,
    },

    // Same wire shape as the cw721 messages
    TransferNft {
        recipient: String,
        token_id: String,
    },
    SendNft {
        contract: String,
        token_id: String,
        msg: Binary,
    },
}
