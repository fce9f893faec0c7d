use cosmwasm_std::{ConversionOverflowError, OverflowError, StdError};
use range_utils::error::{MathError, ValidationError};
use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("{0}")]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid incentive key: {reason}")]
    InvalidKey {
        reason: String,
    },

    #[error("Incentive {id} already exists")]
    AlreadyExists {
        id: String,
    },

    #[error("Not yet eligible: {reason}")]
    NotYetEligible {
        reason: String,
    },

    #[error("No longer eligible: {reason}")]
    NoLongerEligible {
        reason: String,
    },

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Precondition failed: {reason}")]
    PreconditionFailed {
        reason: String,
    },

    #[error("Transfer failed: {reason}")]
    TransferFailed {
        reason: String,
    },

    #[error("Multicall cannot be nested")]
    NestedMulticall {},
}

impl ContractError {
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    pub fn precondition(reason: impl Into<String>) -> Self {
        Self::PreconditionFailed {
            reason: reason.into(),
        }
    }
}
