use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, StdError, StdResult};
use sha2::{Digest, Sha256};

/// The immutable parameters of an incentive. Every field goes into the incentive id, so two keys
/// that differ in any field describe two independent incentives.
#[cw_serde]
pub struct IncentiveKey {
    /// Native denom the rewards are paid in
    pub reward_token: String,
    /// Address of the pool whose positions may stake in the incentive
    pub pool: String,
    /// Start of the reward window, in seconds since the UNIX epoch
    pub start_time: u64,
    /// End of the reward window (exclusive for staking), in seconds since the UNIX epoch
    pub end_time: u64,
    /// Address receiving whatever is left of the rewards once the incentive is ended
    pub refundee: String,
}

impl IncentiveKey {
    /// SHA-256 over a canonical encoding of the key: strings are prefixed with their big-endian
    /// u32 byte length, times are 8 bytes big-endian, in declaration order.
    pub fn id(&self) -> IncentiveId {
        let mut hasher = Sha256::new();
        update_with_str(&mut hasher, &self.reward_token);
        update_with_str(&mut hasher, &self.pool);
        hasher.update(self.start_time.to_be_bytes());
        hasher.update(self.end_time.to_be_bytes());
        update_with_str(&mut hasher, &self.refundee);
        IncentiveId(hasher.finalize().into())
    }
}

fn update_with_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u32).to_be_bytes());
    hasher.update(value.as_bytes());
}

/// 32-byte identifier of an incentive. Stored as raw bytes, carried over the wire as hex.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IncentiveId([u8; 32]);

impl IncentiveId {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> HexBinary {
        HexBinary::from(self.0.as_slice())
    }
}

impl TryFrom<&HexBinary> for IncentiveId {
    type Error = StdError;

    fn try_from(hex: &HexBinary) -> StdResult<Self> {
        Ok(Self(hex.to_array()?))
    }
}

impl fmt::Display for IncentiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex().to_hex())
    }
}

impl fmt::Debug for IncentiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IncentiveId({self})")
    }
}
