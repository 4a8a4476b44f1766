use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{traits::Get, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[scale_info(skip_type_params(MaxNameLen, MaxSymbolLen))]
#[codec(mel_bound(AccountId: MaxEncodedLen))]
pub struct TokenDetails<AccountId, MaxNameLen: Get<u32>, MaxSymbolLen: Get<u32>> {
    /// Mints, closes minting and links the arbitrator.
    pub owner: AccountId,
    pub name: BoundedVec<u8, MaxNameLen>,
    pub symbol: BoundedVec<u8, MaxSymbolLen>,
    pub decimals: u8,
    pub total_supply: u128,
    pub minting_finished: bool,
    /// Only account allowed to force transfers. Set at most once.
    pub arbitrator: Option<AccountId>,
}
