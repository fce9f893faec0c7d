use cosmwasm_std::{Addr, DepsMut, Event, Response, Uint128};
use range_utils::helpers::build_send_msg;

use crate::{error::ContractResult, state::REWARDS};

/// Pays out accrued rewards of `sender`. A missing or zero `amount_requested`, or one above the
/// balance, claims everything.
pub fn claim_reward(
    deps: DepsMut,
    sender: &Addr,
    reward_token: String,
    to: String,
    amount_requested: Option<Uint128>,
) -> ContractResult<Response> {
    let to = deps.api.addr_validate(&to)?;

    let key = (reward_token.as_str(), sender);
    let balance = REWARDS.may_load(deps.storage, key)?.unwrap_or_default();
    let amount = match amount_requested {
        Some(requested) if !requested.is_zero() && requested < balance => requested,
        _ => balance,
    };

    let remaining = balance.checked_sub(amount)?;
    if remaining.is_zero() {
        REWARDS.remove(deps.storage, key);
    } else {
        REWARDS.save(deps.storage, key, &remaining)?;
    }

    let event = Event::new("range-staker/claim_reward")
        .add_attribute("reward_token", &reward_token)
        .add_attribute("owner", sender.as_str())
        .add_attribute("to", to.as_str())
        .add_attribute("amount", amount);

    let mut response = Response::new().add_attribute("action", "claim_reward").add_event(event);
    if !amount.is_zero() {
        response = response.add_message(build_send_msg(&to, &reward_token, amount));
    }

    Ok(response)
}
