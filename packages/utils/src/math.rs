use std::convert::TryInto;

use cosmwasm_std::{Uint256, Uint512};

use crate::error::MathError;

/// Number of fractional bits in the X128 fixed-point values reported by pools.
pub const RESOLUTION_X128: u32 = 128;

/// Computes `a * b / denominator`, truncating.
///
/// The product is taken in 512 bits, so the result is exact whenever it fits in a `Uint256`, even
/// if `a * b` itself does not. Errors on a zero denominator or a result wider than 256 bits.
pub fn checked_mul_div(
    a: Uint256,
    b: Uint256,
    denominator: Uint256,
) -> Result<Uint256, MathError> {
    let product = a.full_mul(b);
    let quotient = product.checked_div(Uint512::from(denominator))?;
    Ok(quotient.try_into()?)
}

/// Converts whole seconds to the X128 fixed-point scale, i.e. `seconds << 128`.
pub fn seconds_to_x128(seconds: u64) -> Result<Uint256, MathError> {
    Ok(Uint256::from(seconds).checked_shl(RESOLUTION_X128)?)
}
