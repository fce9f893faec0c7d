#![cfg(not(target_arch = "wasm32"))]

/// cosmwasm_std::testing overrides and custom test helpers
pub mod integration;
mod mocks;
mod pool_querier;
mod position_manager_querier;
mod range_mock_querier;

pub use mocks::*;
pub use range_mock_querier::RangeMockQuerier;
