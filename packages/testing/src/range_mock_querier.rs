use cosmwasm_std::{
    from_json, testing::MockQuerier, Addr, Empty, Querier, QuerierResult, QueryRequest,
    SystemError, SystemResult, Uint128, Uint256, WasmQuery,
};
use range_types::{pool, position_manager};

use crate::{pool_querier::PoolQuerier, position_manager_querier::PositionManagerQuerier};

pub struct RangeMockQuerier {
    base: MockQuerier<Empty>,
    position_manager_querier: PositionManagerQuerier,
    pool_querier: PoolQuerier,
}

impl Querier for RangeMockQuerier {
    fn raw_query(&self, bin_request: &[u8]) -> QuerierResult {
        let request: QueryRequest<Empty> = match from_json(bin_request) {
            Ok(v) => v,
            Err(e) => {
                return SystemResult::Err(SystemError::InvalidRequest {
                    error: format!("Parsing query request: {e}"),
                    request: bin_request.into(),
                })
            }
        };

        self.handle_query(&request)
    }
}

impl RangeMockQuerier {
    pub fn new(base: MockQuerier<Empty>) -> Self {
        RangeMockQuerier {
            base,
            position_manager_querier: PositionManagerQuerier::default(),
            pool_querier: PoolQuerier::default(),
        }
    }

    /// Set new balances for contract address
    pub fn set_position_manager(&mut self, contract_addr: &str) {
        self.position_manager_querier.contract_addr = Addr::unchecked(contract_addr);
    }

    pub fn set_position(
        &mut self,
        token_id: &str,
        pool: &str,
        tick_lower: i32,
        tick_upper: i32,
        liquidity: u128,
    ) {
        self.position_manager_querier.positions.insert(
            token_id.to_string(),
            position_manager::PositionResponse {
                pool: pool.to_string(),
                tick_lower,
                tick_upper,
                liquidity: Uint128::new(liquidity),
            },
        );
    }

    pub fn set_seconds_per_liquidity_inside(
        &mut self,
        pool: &str,
        tick_lower: i32,
        tick_upper: i32,
        value: Uint256,
    ) {
        self.pool_querier
            .seconds_per_liquidity_inside
            .insert((Addr::unchecked(pool), tick_lower, tick_upper), value);
    }

    pub fn handle_query(&self, request: &QueryRequest<Empty>) -> QuerierResult {
        match &request {
            QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr,
                msg,
            }) => {
                let contract_addr = Addr::unchecked(contract_addr);

                // Position manager queries
                if let Ok(query) = from_json::<position_manager::QueryMsg>(msg) {
                    return self.position_manager_querier.handle_query(&contract_addr, query);
                }

                // Pool queries
                if let Ok(query) = from_json::<pool::QueryMsg>(msg) {
                    return self.pool_querier.handle_query(&contract_addr, query);
                }

                panic!("[mock]: Unsupported wasm query: {msg:?}");
            }

            _ => self.base.handle_query(request),
        }
    }
}
