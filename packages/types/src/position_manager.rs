use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg};
use cw721::{Cw721ExecuteMsg, OwnerOfResponse};

/// Queries the staker relies on. Any registry answering these, and accepting cw721
/// `TransferNft`/`SendNft`, can be used as position manager.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Pool, range and liquidity of a position
    #[returns(PositionResponse)]
    Position {
        token_id: String,
    },

    /// cw721 ownership
    #[returns(OwnerOfResponse)]
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
}

#[cw_serde]
pub struct PositionResponse {
    /// Pool the position provides liquidity to
    pub pool: String,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: Uint128,
}

#[cw_serde]
pub struct PositionManager(pub Addr);

impl PositionManager {
    pub fn new(addr: Addr) -> Self {
        Self(addr)
    }

    pub fn query_position(
        &self,
        querier: &QuerierWrapper,
        token_id: &str,
    ) -> StdResult<PositionResponse> {
        querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::Position {
                token_id: token_id.to_string(),
            },
        )
    }

    pub fn transfer_nft_msg(&self, recipient: &Addr, token_id: &str) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: self.0.to_string(),
            msg: to_json_binary(&Cw721ExecuteMsg::TransferNft {
                recipient: recipient.to_string(),
                token_id: token_id.to_string(),
            })?,
            funds: vec![],
        }))
    }
}
