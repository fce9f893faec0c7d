pub mod claim;
pub mod contract;
pub mod deposit;
pub mod error;
pub mod incentive;
pub mod query;
pub mod reward_math;
pub mod stake;
pub mod state;

pub use error::{ContractError, ContractResult};
