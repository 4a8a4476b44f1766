use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};
use sp_runtime::RuntimeDebug;

/// Identifier of a deployed policy service.
pub type ServiceId = u32;

/// Which parties of a transfer the whitelist rule checks.
#[derive(
    Clone,
    Copy,
    Encode,
    Decode,
    DecodeWithMemTracking,
    Eq,
    PartialEq,
    RuntimeDebug,
    TypeInfo,
    MaxEncodedLen,
    Serialize,
    Deserialize,
    Default,
)]
pub enum ServicePolicy {
    /// Only the receiver must be whitelisted.
    #[default]
    Standard,
    /// Sender and receiver must both be whitelisted.
    Strict,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ServiceInfo<AccountId> {
    pub policy: ServicePolicy,
    /// `None` for services deployed at genesis.
    pub deployer: Option<AccountId>,
}
