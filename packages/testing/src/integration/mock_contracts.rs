use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn mock_staker_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        range_staker::contract::execute,
        range_staker::contract::instantiate,
        range_staker::contract::query,
    );
    Box::new(contract)
}

pub fn mock_position_manager_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        range_mock_position_manager::contract::execute,
        range_mock_position_manager::contract::instantiate,
        range_mock_position_manager::contract::query,
    );
    Box::new(contract)
}

pub fn mock_pool_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        range_mock_pool::contract::execute,
        range_mock_pool::contract::instantiate,
        range_mock_pool::contract::query,
    );
    Box::new(contract)
}
