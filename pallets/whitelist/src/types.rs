use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::Get, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// What a whitelist holds.
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
)]
pub enum WhitelistKind {
    /// Individual investor accounts.
    Investor,
    /// Whole tokens; an account is cleared when it issues one of them.
    Token,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[scale_info(skip_type_params(MaxTypeLen))]
#[codec(mel_bound(AccountId: MaxEncodedLen))]
pub struct WhitelistInfo<AccountId, MaxTypeLen: Get<u32>> {
    /// Creator. Manages the agent, the type tag and the pause switch.
    pub owner: AccountId,
    /// Manages the qualifiers.
    pub agent: AccountId,
    pub kind: WhitelistKind,
    /// Free-form classification such as `RegS` or `QIB`.
    pub whitelist_type: BoundedVec<u8, MaxTypeLen>,
    pub paused: bool,
}
