use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint256};

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Snapshot of the accumulators for a tick range. Only comparable with other snapshots of the
    /// same range taken while a position existed over it.
    #[returns(SnapshotCumulativesInsideResponse)]
    SnapshotCumulativesInside {
        tick_lower: i32,
        tick_upper: i32,
    },
}

#[cw_serde]
pub struct SnapshotCumulativesInsideResponse {
    /// Seconds per unit of liquidity spent inside the range, scaled by 2^128. Never decreases.
    pub seconds_per_liquidity_inside_x128: Uint256,
}

#[cw_serde]
pub struct Pool(pub Addr);

impl Pool {
    pub fn new(addr: Addr) -> Self {
        Self(addr)
    }

    pub fn snapshot_cumulatives_inside(
        &self,
        querier: &QuerierWrapper,
        tick_lower: i32,
        tick_upper: i32,
    ) -> StdResult<SnapshotCumulativesInsideResponse> {
        querier.query_wasm_smart(
            self.0.to_string(),
            &QueryMsg::SnapshotCumulativesInside {
                tick_lower,
                tick_upper,
            },
        )
    }
}
