use codec::{Decode, Encode, MaxEncodedLen};
use frame_support::{traits::Get, BoundedVec};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

pub type WalletId = u32;
pub type TransactionId = u32;

/// What happens to a transaction whose dispatch failed.
#[derive(Clone, Copy, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum RetryPolicy {
    /// It stays pending; any later confirmation or explicit execution tries again.
    Retry,
    /// It is dead after the first failure.
    SingleAttempt,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[scale_info(skip_type_params(MaxOwners))]
#[codec(mel_bound(AccountId: MaxEncodedLen))]
pub struct Wallet<AccountId, MaxOwners: Get<u32>> {
    /// Ordered, no duplicates, never empty.
    pub owners: BoundedVec<AccountId, MaxOwners>,
    /// Confirmations needed. Always within `1..=owners.len()`.
    pub required: u32,
}

#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
#[scale_info(skip_type_params(MaxOwners, MaxCallSize))]
#[codec(mel_bound(AccountId: MaxEncodedLen))]
pub struct Transaction<AccountId, MaxOwners: Get<u32>, MaxCallSize: Get<u32>> {
    pub submitter: AccountId,
    /// SCALE-encoded runtime call.
    pub call: BoundedVec<u8, MaxCallSize>,
    pub executed: bool,
    /// Owners who confirmed, in confirmation order. May include accounts that have
    /// since stopped being owners; they are pruned on the next confirmation.
    pub confirmations: BoundedVec<AccountId, MaxOwners>,
    pub failed_attempts: u32,
}
