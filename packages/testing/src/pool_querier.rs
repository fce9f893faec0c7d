use std::collections::HashMap;

use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult, QuerierResult, Uint256};
use range_types::pool::{QueryMsg, SnapshotCumulativesInsideResponse};

/// Accumulators per (pool, tick lower, tick upper). Unset ranges read as zero.
#[derive(Default)]
pub struct PoolQuerier {
    pub seconds_per_liquidity_inside: HashMap<(Addr, i32, i32), Uint256>,
}

impl PoolQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        let ret: ContractResult<Binary> = match query {
            QueryMsg::SnapshotCumulativesInside {
                tick_lower,
                tick_upper,
            } => {
                let value = self
                    .seconds_per_liquidity_inside
                    .get(&(contract_addr.clone(), tick_lower, tick_upper))
                    .copied()
                    .unwrap_or_default();
                to_json_binary(&SnapshotCumulativesInsideResponse {
                    seconds_per_liquidity_inside_x128: value,
                })
                .into()
            }
        };

        Ok(ret).into()
    }
}
