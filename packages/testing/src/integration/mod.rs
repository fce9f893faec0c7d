pub mod mock_contracts;
pub mod mock_env;
