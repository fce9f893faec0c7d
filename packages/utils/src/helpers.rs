use cosmwasm_std::{coins, Addr, BankMsg, CosmosMsg, Uint128};

use crate::error::ValidationError;

/// Characters allowed after the leading letter of a native denom.
const DENOM_SEPARATORS: [char; 5] = ['/', ':', '.', '_', '-'];

/// Bank send of a single native coin. Callers are expected to skip zero amounts, the bank module
/// rejects them.
pub fn build_send_msg(recipient: &Addr, denom: &str, amount: Uint128) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: coins(amount.u128(), denom),
    })
}

pub fn integer_param_gt_zero(param_value: u64, param_name: &str) -> Result<(), ValidationError> {
    if param_value == 0 {
        return Err(ValidationError::InvalidParam {
            param_name: param_name.to_string(),
            invalid_value: param_value.to_string(),
            predicate: "> 0".to_string(),
        });
    }
    Ok(())
}

/// Cosmos SDK denom rules: 3 - 128 characters, a leading letter, then letters, digits or one of
/// `/ : . _ -`.
pub fn validate_native_denom(denom: &str) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidDenom {
        reason: reason.to_string(),
    };

    if !(3..=128).contains(&denom.len()) {
        return Err(invalid("Invalid denom length"));
    }

    let mut chars = denom.chars();
    if !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
        return Err(invalid("First character is not ASCII alphabetic"));
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || DENOM_SEPARATORS.contains(&c)) {
        return Err(invalid("Not all characters are ASCII alphanumeric or one of:  /  :  .  _  -"));
    }

    Ok(())
}
