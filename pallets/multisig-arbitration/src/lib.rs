#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is kept until the runtime moves to the new event bound.
#![allow(deprecated)]

//! # Multisig Arbitration pallet
//!
//! An N-of-M transaction queue. Owners of a wallet submit runtime calls, confirm them,
//! and once enough current owners have confirmed the call is dispatched from the
//! wallet's own account.
//!
//! The wallet account is what a regulated token links as its arbitrator, so forced
//! recovery transfers go through this queue. The same queue governs the wallet
//! itself: [`Pallet::add_owner`], [`Pallet::remove_owner`], [`Pallet::replace_owner`]
//! and [`Pallet::change_requirement`] only accept the wallet account as origin, which
//! means an owner can only reach them by submitting them as transactions.
//!
//! ## Execution
//!
//! - A transaction is confirmed when confirmations from *current* owners reach the
//!   *current* requirement. Owner and requirement changes apply to pending
//!   transactions immediately.
//! - `executed` is written before the call is dispatched, so the call cannot confirm
//!   or execute its own transaction again.
//! - A failing call does not fail the confirmation that triggered it. Its changes are
//!   discarded, the transaction goes back to pending with `failed_attempts` bumped,
//!   and [`Event::ExecutionFailure`] is emitted. [`Config::RetryPolicy`] decides
//!   whether it may be attempted again.
//! - Whoever completes the confirmations pays for the call. Confirming and executing
//!   take a `max_weight` that must cover the stored call's declared weight, and the
//!   fee is corrected to what the call actually used.
//! - Transactions are never deleted and their ids are never reused.

use codec::{Decode, DecodeLimit, Encode};
use frame_support::{
    dispatch::{extract_actual_weight, GetDispatchInfo, PostDispatchInfo},
    ensure,
    pallet_prelude::*,
    traits::{IsSubType, StorageVersion},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*, RawOrigin};
use regsec_primitives::is_null;
use sp_runtime::traits::{BlakeTwo256, Dispatchable, Hash, TrailingZeroInput};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::multisig-arbitration";

/// Nesting limit when decoding a stored call.
const MAX_CALL_DEPTH: u32 = 64;

pub type WalletOf<T> = Wallet<<T as frame_system::Config>::AccountId, <T as Config>::MaxOwners>;

pub type TransactionOf<T> = Transaction<
    <T as frame_system::Config>::AccountId,
    <T as Config>::MaxOwners,
    <T as Config>::MaxCallSize,
>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Calls a wallet can dispatch.
        type RuntimeCall: Parameter
            + Dispatchable<RuntimeOrigin = Self::RuntimeOrigin, PostInfo = PostDispatchInfo>
            + GetDispatchInfo
            + From<frame_system::Call<Self>>
            + IsSubType<Call<Self>>
            + IsType<<Self as frame_system::Config>::RuntimeCall>;

        /// Seeds the wallet accounts.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        #[pallet::constant]
        type MaxOwners: Get<u32>;

        /// Largest encoded call a transaction may carry.
        #[pallet::constant]
        type MaxCallSize: Get<u32>;

        type RetryPolicy: Get<RetryPolicy>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type NextWalletId<T> = StorageValue<_, WalletId, ValueQuery>;

    #[pallet::storage]
    pub type Wallets<T: Config> = StorageMap<_, Twox64Concat, WalletId, WalletOf<T>>;

    /// Transactions submitted so far per wallet; also the next transaction id.
    #[pallet::storage]
    pub type TransactionCount<T> = StorageMap<_, Twox64Concat, WalletId, TransactionId, ValueQuery>;

    #[pallet::storage]
    pub type Transactions<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WalletId, Twox64Concat, TransactionId, TransactionOf<T>>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        WalletCreated { wallet: WalletId, account: T::AccountId, required: u32 },
        Submission { wallet: WalletId, transaction: TransactionId },
        Confirmation { wallet: WalletId, transaction: TransactionId, owner: T::AccountId },
        Revocation { wallet: WalletId, transaction: TransactionId, owner: T::AccountId },
        Execution { wallet: WalletId, transaction: TransactionId },
        ExecutionFailure { wallet: WalletId, transaction: TransactionId, error: DispatchError },
        OwnerAdded { wallet: WalletId, owner: T::AccountId },
        OwnerRemoved { wallet: WalletId, owner: T::AccountId },
        RequirementChanged { wallet: WalletId, required: u32 },
    }

    #[pallet::error]
    pub enum Error<T> {
        UnknownWallet,
        UnknownTransaction,
        /// Caller is not an owner, or not the wallet account for a self-amendment.
        Unauthorized,
        /// The null identity cannot be an owner.
        InvalidAddress,
        AlreadyOwner,
        NotOwner,
        /// The owner set would be empty or the requirement outside `1..=owners`.
        InvariantViolation,
        TooManyOwners,
        AlreadyExecuted,
        AlreadyConfirmed,
        NotConfirmed,
        /// Not enough confirmations from current owners.
        NotExecutable,
        /// The transaction failed once and the retry policy forbids another attempt.
        RetryDisallowed,
        CallTooLarge,
        UndecodableCall,
        /// `max_weight` is below the stored call's declared weight.
        MaxWeightTooLow,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Open a wallet. Any signed account may do so; it need not be an owner.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create_wallet(owners.len() as u32))]
        pub fn create_wallet(
            origin: OriginFor<T>,
            owners: Vec<T::AccountId>,
            required: u32,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            Self::do_create_wallet(owners, required)?;
            Ok(())
        }

        /// Queue `call` for `wallet`, confirm it as the caller, and dispatch it if that
        /// is already enough.
        ///
        /// Self-amendments targeting `wallet` are checked against its current state
        /// here and again when they run.
        #[pallet::call_index(1)]
        #[pallet::weight({
            let info = call.get_dispatch_info();
            T::WeightInfo::submit_transaction().saturating_add(info.call_weight)
        })]
        pub fn submit_transaction(
            origin: OriginFor<T>,
            wallet: WalletId,
            call: Box<<T as Config>::RuntimeCall>,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let state = Wallets::<T>::get(wallet).ok_or(Error::<T>::UnknownWallet)?;
            ensure!(state.owners.contains(&who), Error::<T>::Unauthorized);
            Self::validate_amendment(wallet, &state, &call)?;
            let call_weight = call.get_dispatch_info().call_weight;

            let encoded: BoundedVec<u8, T::MaxCallSize> =
                call.encode().try_into().map_err(|_| Error::<T>::CallTooLarge)?;
            let transaction = TransactionCount::<T>::get(wallet);
            TransactionCount::<T>::insert(
                wallet,
                transaction.checked_add(1).ok_or(Error::<T>::Overflow)?,
            );

            let mut confirmations = BoundedVec::<T::AccountId, T::MaxOwners>::default();
            confirmations.try_push(who.clone()).map_err(|_| Error::<T>::TooManyOwners)?;
            Transactions::<T>::insert(
                wallet,
                transaction,
                Transaction {
                    submitter: who.clone(),
                    call: encoded,
                    executed: false,
                    confirmations,
                    failed_attempts: 0,
                },
            );
            Self::deposit_event(Event::Submission { wallet, transaction });
            Self::deposit_event(Event::Confirmation { wallet, transaction, owner: who });

            let used = Self::try_execute(wallet, transaction, call_weight)?;
            Ok(Some(T::WeightInfo::submit_transaction().saturating_add(used)).into())
        }

        /// Add the caller's confirmation and dispatch the call if that completes it.
        ///
        /// `max_weight` must cover the stored call when this confirmation completes it.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::confirm_transaction().saturating_add(*max_weight))]
        pub fn confirm_transaction(
            origin: OriginFor<T>,
            wallet: WalletId,
            transaction: TransactionId,
            max_weight: Weight,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let state = Wallets::<T>::get(wallet).ok_or(Error::<T>::UnknownWallet)?;
            ensure!(state.owners.contains(&who), Error::<T>::Unauthorized);

            Transactions::<T>::try_mutate(wallet, transaction, |maybe_tx| -> DispatchResult {
                let tx = maybe_tx.as_mut().ok_or(Error::<T>::UnknownTransaction)?;
                Self::ensure_attemptable(tx)?;
                ensure!(!tx.confirmations.contains(&who), Error::<T>::AlreadyConfirmed);
                tx.confirmations.retain(|owner| state.owners.contains(owner));
                tx.confirmations.try_push(who.clone()).map_err(|_| Error::<T>::TooManyOwners)?;
                Ok(())
            })?;
            Self::deposit_event(Event::Confirmation { wallet, transaction, owner: who });

            let used = Self::try_execute(wallet, transaction, max_weight)?;
            Ok(Some(T::WeightInfo::confirm_transaction().saturating_add(used)).into())
        }

        /// Withdraw the caller's confirmation from a pending transaction.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::revoke_confirmation())]
        pub fn revoke_confirmation(
            origin: OriginFor<T>,
            wallet: WalletId,
            transaction: TransactionId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let state = Wallets::<T>::get(wallet).ok_or(Error::<T>::UnknownWallet)?;
            ensure!(state.owners.contains(&who), Error::<T>::Unauthorized);

            Transactions::<T>::try_mutate(wallet, transaction, |maybe_tx| -> DispatchResult {
                let tx = maybe_tx.as_mut().ok_or(Error::<T>::UnknownTransaction)?;
                ensure!(!tx.executed, Error::<T>::AlreadyExecuted);
                let position = tx
                    .confirmations
                    .iter()
                    .position(|owner| *owner == who)
                    .ok_or(Error::<T>::NotConfirmed)?;
                tx.confirmations.remove(position);
                Ok(())
            })?;
            Self::deposit_event(Event::Revocation { wallet, transaction, owner: who });
            Ok(())
        }

        /// Dispatch a confirmed transaction that is still pending, e.g. after a failed
        /// attempt or after the requirement was lowered. Only an owner who confirmed it.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::execute_transaction().saturating_add(*max_weight))]
        pub fn execute_transaction(
            origin: OriginFor<T>,
            wallet: WalletId,
            transaction: TransactionId,
            max_weight: Weight,
        ) -> DispatchResultWithPostInfo {
            let who = ensure_signed(origin)?;
            let state = Wallets::<T>::get(wallet).ok_or(Error::<T>::UnknownWallet)?;
            ensure!(state.owners.contains(&who), Error::<T>::Unauthorized);

            let tx = Transactions::<T>::get(wallet, transaction)
                .ok_or(Error::<T>::UnknownTransaction)?;
            Self::ensure_attemptable(&tx)?;
            ensure!(tx.confirmations.contains(&who), Error::<T>::NotConfirmed);
            ensure!(Self::is_confirmed_by(&state, &tx), Error::<T>::NotExecutable);

            let used = Self::try_execute(wallet, transaction, max_weight)?;
            Ok(Some(T::WeightInfo::execute_transaction().saturating_add(used)).into())
        }

        /// Self-amendment: wallet account only.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_owner())]
        pub fn add_owner(
            origin: OriginFor<T>,
            wallet: WalletId,
            owner: T::AccountId,
        ) -> DispatchResult {
            let mut state = Self::ensure_wallet_origin(origin, wallet)?;
            Self::ensure_can_add(&state, &owner)?;
            state.owners.try_push(owner.clone()).map_err(|_| Error::<T>::TooManyOwners)?;
            Wallets::<T>::insert(wallet, state);
            Self::deposit_event(Event::OwnerAdded { wallet, owner });
            Ok(())
        }

        /// Self-amendment: wallet account only. Lowers the requirement to the new owner
        /// count when it would exceed it.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_owner())]
        pub fn remove_owner(
            origin: OriginFor<T>,
            wallet: WalletId,
            owner: T::AccountId,
        ) -> DispatchResult {
            let mut state = Self::ensure_wallet_origin(origin, wallet)?;
            Self::ensure_can_remove(&state, &owner)?;
            state.owners.retain(|o| *o != owner);

            let remaining = state.owners.len() as u32;
            let lowered = state.required > remaining;
            if lowered {
                state.required = remaining;
            }
            Wallets::<T>::insert(wallet, state);

            Self::deposit_event(Event::OwnerRemoved { wallet, owner });
            if lowered {
                Self::deposit_event(Event::RequirementChanged { wallet, required: remaining });
            }
            Ok(())
        }

        /// Self-amendment: wallet account only. `new_owner` takes `owner`'s position.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::replace_owner())]
        pub fn replace_owner(
            origin: OriginFor<T>,
            wallet: WalletId,
            owner: T::AccountId,
            new_owner: T::AccountId,
        ) -> DispatchResult {
            let mut state = Self::ensure_wallet_origin(origin, wallet)?;
            Self::ensure_can_replace(&state, &owner, &new_owner)?;
            if let Some(slot) = state.owners.iter_mut().find(|o| **o == owner) {
                *slot = new_owner.clone();
            }
            Wallets::<T>::insert(wallet, state);

            Self::deposit_event(Event::OwnerRemoved { wallet, owner });
            Self::deposit_event(Event::OwnerAdded { wallet, owner: new_owner });
            Ok(())
        }

        /// Self-amendment: wallet account only.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::change_requirement())]
        pub fn change_requirement(
            origin: OriginFor<T>,
            wallet: WalletId,
            required: u32,
        ) -> DispatchResult {
            let mut state = Self::ensure_wallet_origin(origin, wallet)?;
            Self::ensure_valid_requirement(state.owners.len(), required)?;
            state.required = required;
            Wallets::<T>::insert(wallet, state);
            Self::deposit_event(Event::RequirementChanged { wallet, required });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Wallets to open at genesis: (owners, required). Ids are assigned in order.
        pub wallets: Vec<(Vec<T::AccountId>, u32)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (owners, required) in &self.wallets {
                Pallet::<T>::do_create_wallet(owners.clone(), *required)
                    .expect("genesis wallets must have valid owners and requirement");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The account a wallet dispatches from and holds funds in.
    pub fn wallet_account(wallet: WalletId) -> T::AccountId {
        let entropy = BlakeTwo256::hash_of(&(T::PalletId::get(), wallet));
        Decode::decode(&mut TrailingZeroInput::new(entropy.as_ref()))
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn wallet(wallet: WalletId) -> Option<WalletOf<T>> {
        Wallets::<T>::get(wallet)
    }

    pub fn owners(wallet: WalletId) -> Vec<T::AccountId> {
        Wallets::<T>::get(wallet).map(|state| state.owners.into_inner()).unwrap_or_default()
    }

    pub fn transaction(wallet: WalletId, transaction: TransactionId) -> Option<TransactionOf<T>> {
        Transactions::<T>::get(wallet, transaction)
    }

    /// Confirmations of `transaction` that still come from owners.
    pub fn confirmations(wallet: WalletId, transaction: TransactionId) -> Vec<T::AccountId> {
        let owners = Self::owners(wallet);
        Transactions::<T>::get(wallet, transaction)
            .map(|tx| tx.confirmations.into_iter().filter(|c| owners.contains(c)).collect())
            .unwrap_or_default()
    }

    pub fn is_confirmed(wallet: WalletId, transaction: TransactionId) -> bool {
        match (Wallets::<T>::get(wallet), Transactions::<T>::get(wallet, transaction)) {
            (Some(state), Some(tx)) => Self::is_confirmed_by(&state, &tx),
            _ => false,
        }
    }

    /// Ids in `from..to` filtered by status.
    pub fn transaction_ids(
        wallet: WalletId,
        from: TransactionId,
        to: TransactionId,
        pending: bool,
        executed: bool,
    ) -> Vec<TransactionId> {
        let to = to.min(TransactionCount::<T>::get(wallet));
        (from..to)
            .filter(|id| {
                Transactions::<T>::get(wallet, id)
                    .map_or(false, |tx| (pending && !tx.executed) || (executed && tx.executed))
            })
            .collect()
    }

    /// Number of transactions with the selected statuses.
    pub fn transaction_count(wallet: WalletId, pending: bool, executed: bool) -> u32 {
        Self::transaction_ids(wallet, 0, TransactionId::MAX, pending, executed).len() as u32
    }

    fn do_create_wallet(owners: Vec<T::AccountId>, required: u32) -> Result<WalletId, DispatchError> {
        for (i, owner) in owners.iter().enumerate() {
            ensure!(!is_null(owner), Error::<T>::InvalidAddress);
            ensure!(!owners[..i].contains(owner), Error::<T>::AlreadyOwner);
        }
        Self::ensure_valid_requirement(owners.len(), required)?;
        let owners: BoundedVec<T::AccountId, T::MaxOwners> =
            owners.try_into().map_err(|_| Error::<T>::TooManyOwners)?;

        let wallet = NextWalletId::<T>::get();
        NextWalletId::<T>::put(wallet.checked_add(1).ok_or(Error::<T>::Overflow)?);
        Wallets::<T>::insert(wallet, Wallet { owners, required });

        let account = Self::wallet_account(wallet);
        log::debug!(target: LOG_TARGET, "wallet {wallet} opened as {account:?}, {required} required");
        Self::deposit_event(Event::WalletCreated { wallet, account, required });
        Ok(wallet)
    }

    fn ensure_wallet_origin(
        origin: OriginFor<T>,
        wallet: WalletId,
    ) -> Result<WalletOf<T>, DispatchError> {
        let who = ensure_signed(origin)?;
        let state = Wallets::<T>::get(wallet).ok_or(Error::<T>::UnknownWallet)?;
        ensure!(who == Self::wallet_account(wallet), Error::<T>::Unauthorized);
        Ok(state)
    }

    fn ensure_can_add(state: &WalletOf<T>, owner: &T::AccountId) -> DispatchResult {
        ensure!(!is_null(owner), Error::<T>::InvalidAddress);
        ensure!(!state.owners.contains(owner), Error::<T>::AlreadyOwner);
        ensure!((state.owners.len() as u32) < T::MaxOwners::get(), Error::<T>::TooManyOwners);
        Ok(())
    }

    fn ensure_can_remove(state: &WalletOf<T>, owner: &T::AccountId) -> DispatchResult {
        ensure!(state.owners.contains(owner), Error::<T>::NotOwner);
        ensure!(state.owners.len() > 1, Error::<T>::InvariantViolation);
        Ok(())
    }

    fn ensure_can_replace(
        state: &WalletOf<T>,
        owner: &T::AccountId,
        new_owner: &T::AccountId,
    ) -> DispatchResult {
        ensure!(state.owners.contains(owner), Error::<T>::NotOwner);
        ensure!(!is_null(new_owner), Error::<T>::InvalidAddress);
        ensure!(!state.owners.contains(new_owner), Error::<T>::AlreadyOwner);
        Ok(())
    }

    fn ensure_valid_requirement(owner_count: usize, required: u32) -> DispatchResult {
        ensure!(required >= 1 && required as usize <= owner_count, Error::<T>::InvariantViolation);
        Ok(())
    }

    /// Checks a self-amendment of `wallet` against its current state.
    fn validate_amendment(
        wallet: WalletId,
        state: &WalletOf<T>,
        call: &<T as Config>::RuntimeCall,
    ) -> DispatchResult {
        match call.is_sub_type() {
            Some(Call::add_owner { wallet: target, owner }) if *target == wallet =>
                Self::ensure_can_add(state, owner),
            Some(Call::remove_owner { wallet: target, owner }) if *target == wallet =>
                Self::ensure_can_remove(state, owner),
            Some(Call::replace_owner { wallet: target, owner, new_owner }) if *target == wallet =>
                Self::ensure_can_replace(state, owner, new_owner),
            Some(Call::change_requirement { wallet: target, required }) if *target == wallet =>
                Self::ensure_valid_requirement(state.owners.len(), *required),
            _ => Ok(()),
        }
    }

    fn is_confirmed_by(state: &WalletOf<T>, tx: &TransactionOf<T>) -> bool {
        let count = tx.confirmations.iter().filter(|c| state.owners.contains(c)).count();
        count as u32 >= state.required
    }

    /// Fails for executed transactions and for failed ones the retry policy gave up on.
    fn ensure_attemptable(tx: &TransactionOf<T>) -> DispatchResult {
        ensure!(!tx.executed, Error::<T>::AlreadyExecuted);
        ensure!(
            tx.failed_attempts == 0 || T::RetryPolicy::get() == RetryPolicy::Retry,
            Error::<T>::RetryDisallowed
        );
        Ok(())
    }

    /// Dispatches `transaction` if it is pending and confirmed; does nothing otherwise.
    /// Returns the weight the dispatched call used.
    ///
    /// Fails with [`Error::MaxWeightTooLow`] when `max_weight` does not cover the call.
    /// A failing dispatch is reported through [`Event::ExecutionFailure`] and does not
    /// fail the caller.
    fn try_execute(
        wallet: WalletId,
        transaction: TransactionId,
        max_weight: Weight,
    ) -> Result<Weight, DispatchError> {
        let state = Wallets::<T>::get(wallet).ok_or(Error::<T>::UnknownWallet)?;
        let mut tx =
            Transactions::<T>::get(wallet, transaction).ok_or(Error::<T>::UnknownTransaction)?;
        if tx.executed || !Self::is_confirmed_by(&state, &tx) {
            return Ok(Weight::zero());
        }

        let call = match <T as Config>::RuntimeCall::decode_all_with_depth_limit(
            MAX_CALL_DEPTH,
            &mut &tx.call[..],
        ) {
            Ok(call) => call,
            Err(_) => {
                Self::record_failure(wallet, transaction, Error::<T>::UndecodableCall.into());
                return Ok(Weight::zero());
            },
        };
        let info = call.get_dispatch_info();
        ensure!(info.call_weight.all_lte(max_weight), Error::<T>::MaxWeightTooLow);

        tx.executed = true;
        Transactions::<T>::insert(wallet, transaction, &tx);

        let origin: T::RuntimeOrigin = RawOrigin::Signed(Self::wallet_account(wallet)).into();
        let result = call.dispatch(origin);
        let used = extract_actual_weight(&result, &info);
        match result {
            Ok(_) => {
                log::debug!(target: LOG_TARGET, "wallet {wallet}: transaction {transaction} executed");
                Self::deposit_event(Event::Execution { wallet, transaction });
            },
            Err(failure) => Self::record_failure(wallet, transaction, failure.error),
        }
        Ok(used)
    }

    /// Puts `transaction` back to pending and counts the failed attempt.
    fn record_failure(wallet: WalletId, transaction: TransactionId, error: DispatchError) {
        Transactions::<T>::mutate(wallet, transaction, |maybe_tx| {
            if let Some(tx) = maybe_tx {
                tx.executed = false;
                tx.failed_attempts = tx.failed_attempts.saturating_add(1);
            }
        });
        log::warn!(target: LOG_TARGET, "wallet {wallet}: transaction {transaction} failed: {error:?}");
        Self::deposit_event(Event::ExecutionFailure { wallet, transaction, error });
    }
}
