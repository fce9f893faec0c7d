pub mod contract;
pub mod msg;
mod state;
