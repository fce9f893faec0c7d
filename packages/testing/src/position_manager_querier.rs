use std::collections::HashMap;

use cosmwasm_std::{to_json_binary, Addr, Binary, ContractResult, QuerierResult};
use range_types::position_manager::{PositionResponse, QueryMsg};

pub struct PositionManagerQuerier {
    pub contract_addr: Addr,
    pub positions: HashMap<String, PositionResponse>,
}

impl Default for PositionManagerQuerier {
    fn default() -> Self {
        Self {
            contract_addr: Addr::unchecked("position_manager"),
            positions: HashMap::new(),
        }
    }
}

impl PositionManagerQuerier {
    pub fn handle_query(&self, contract_addr: &Addr, query: QueryMsg) -> QuerierResult {
        if *contract_addr != self.contract_addr {
            panic!(
                "[mock]: Position manager request made to {contract_addr} should be {}",
                self.contract_addr
            );
        }

        let ret: ContractResult<Binary> = match query {
            QueryMsg::Position {
                token_id,
            } => match self.positions.get(&token_id) {
                Some(position) => to_json_binary(position).into(),
                None => Err(format!("[mock]: position {token_id} not found")).into(),
            },
            QueryMsg::OwnerOf {
                ..
            } => Err("[mock]: Unsupported position manager query").into(),
        };

        Ok(ret).into()
    }
}
