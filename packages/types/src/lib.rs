pub mod keys;
pub mod pool;
pub mod position_manager;
pub mod staker;
