#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is kept until the runtime moves to the new event bound.
#![allow(deprecated)]

//! # Regulated Token pallet
//!
//! Fungible security tokens whose every transfer is authorized by the regulator.
//!
//! ## Overview
//!
//! Any account can create a token under a fresh id and becomes its owner. The owner
//! mints until it calls [`Pallet::finish_minting`]. Balances then move with
//! [`Pallet::transfer`] or, through an allowance, [`Pallet::transfer_from`]. Both ask
//! [`Config::Regulator`] first and fail with [`Error::PolicyDenied`] carrying the
//! reason when it refuses; nothing is written in that case.
//!
//! The owner may link one arbitrator account (usually a multisig wallet) before
//! minting finishes. The arbitrator alone can call [`Pallet::arbitrage`], a forced
//! transfer that skips the regulator, to recover funds from lost accounts.
//!
//! Minting is not checked against the regulator.

use frame_support::{ensure, pallet_prelude::*, traits::StorageVersion};
use frame_system::{ensure_signed, pallet_prelude::*};
use regsec_primitives::{is_null, DenialReason, TransferContext, TransferRestriction};
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(feature = "runtime-benchmarks")]
pub use benchmarking::BenchmarkHelper;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::regulated-token";

pub type TokenDetailsOf<T> = TokenDetails<
    <T as frame_system::Config>::AccountId,
    <T as Config>::MaxNameLen,
    <T as Config>::MaxSymbolLen,
>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type TokenId: Member + Parameter + MaxEncodedLen + Copy + MaybeSerializeDeserialize;

        /// Decides whether a regulated transfer may go ahead.
        type Regulator: TransferRestriction<Self::TokenId, Self::AccountId>;

        #[pallet::constant]
        type MaxNameLen: Get<u32>;

        #[pallet::constant]
        type MaxSymbolLen: Get<u32>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::TokenId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type Tokens<T: Config> = StorageMap<_, Blake2_128Concat, T::TokenId, TokenDetailsOf<T>>;

    #[pallet::storage]
    pub type Balances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::TokenId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Amount `spender` may move out of `owner`'s balance.
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageNMap<
        _,
        (
            NMapKey<Blake2_128Concat, T::TokenId>,
            NMapKey<Blake2_128Concat, T::AccountId>, // owner
            NMapKey<Blake2_128Concat, T::AccountId>, // spender
        ),
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        Created { token: T::TokenId, owner: T::AccountId },
        Minted { token: T::TokenId, to: T::AccountId, amount: u128 },
        MintFinished { token: T::TokenId },
        Transferred { token: T::TokenId, from: T::AccountId, to: T::AccountId, amount: u128 },
        Approved { token: T::TokenId, owner: T::AccountId, spender: T::AccountId, amount: u128 },
        ArbitratorSet { token: T::TokenId, arbitrator: T::AccountId },
        /// A forced transfer by the arbitrator.
        Arbitraged { token: T::TokenId, from: T::AccountId, to: T::AccountId, amount: u128 },
        OwnershipTransferred { token: T::TokenId, old: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        UnknownToken,
        /// A token with this id already exists.
        AlreadyExists,
        Unauthorized,
        /// The null identity cannot hold, receive or arbitrate.
        InvalidAddress,
        /// The regulator refused the transfer.
        PolicyDenied(DenialReason),
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
        MintingFinished,
        ArbitratorAlreadySet,
        NameTooLong,
        SymbolTooLong,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create token `token` owned by the caller, with no supply.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create())]
        pub fn create(
            origin: OriginFor<T>,
            token: T::TokenId,
            name: Vec<u8>,
            symbol: Vec<u8>,
            decimals: u8,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_create(token, who, name, symbol, decimals)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(
            origin: OriginFor<T>,
            token: T::TokenId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!is_null(&to), Error::<T>::InvalidAddress);
            Tokens::<T>::try_mutate(token, |maybe_details| -> DispatchResult {
                let details = maybe_details.as_mut().ok_or(Error::<T>::UnknownToken)?;
                ensure!(details.owner == who, Error::<T>::Unauthorized);
                ensure!(!details.minting_finished, Error::<T>::MintingFinished);
                details.total_supply =
                    details.total_supply.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Ok(())
            })?;
            Balances::<T>::try_mutate(token, &to, |balance| -> DispatchResult {
                *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Ok(())
            })?;
            Self::deposit_event(Event::Minted { token, to, amount });
            Ok(())
        }

        /// Close minting for good.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::finish_minting())]
        pub fn finish_minting(origin: OriginFor<T>, token: T::TokenId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Tokens::<T>::try_mutate(token, |maybe_details| -> DispatchResult {
                let details = maybe_details.as_mut().ok_or(Error::<T>::UnknownToken)?;
                ensure!(details.owner == who, Error::<T>::Unauthorized);
                ensure!(!details.minting_finished, Error::<T>::MintingFinished);
                details.minting_finished = true;
                Ok(())
            })?;
            Self::deposit_event(Event::MintFinished { token });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer().saturating_add(T::Regulator::check_weight()))]
        pub fn transfer(
            origin: OriginFor<T>,
            token: T::TokenId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::regulated_transfer(token, from, to, amount)
        }

        /// Let `spender` move up to `amount` of the caller's balance. Replaces any
        /// previous allowance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            token: T::TokenId,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(Tokens::<T>::contains_key(token), Error::<T>::UnknownToken);
            Allowances::<T>::insert((token, &owner, &spender), amount);
            Self::deposit_event(Event::Approved { token, owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(
            T::WeightInfo::transfer_from().saturating_add(T::Regulator::check_weight())
        )]
        pub fn transfer_from(
            origin: OriginFor<T>,
            token: T::TokenId,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::regulated_transfer(token, from.clone(), to, amount)?;
            Allowances::<T>::try_mutate((token, &from, &spender), |allowance| -> DispatchResult {
                *allowance =
                    allowance.checked_sub(amount).ok_or(Error::<T>::InsufficientAllowance)?;
                Ok(())
            })
        }

        /// Link the account allowed to call [`Pallet::arbitrage`].
        ///
        /// Owner only, once, and only while minting is open.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_multisig_arbitrator())]
        pub fn set_multisig_arbitrator(
            origin: OriginFor<T>,
            token: T::TokenId,
            arbitrator: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!is_null(&arbitrator), Error::<T>::InvalidAddress);
            Tokens::<T>::try_mutate(token, |maybe_details| -> DispatchResult {
                let details = maybe_details.as_mut().ok_or(Error::<T>::UnknownToken)?;
                ensure!(details.owner == who, Error::<T>::Unauthorized);
                ensure!(!details.minting_finished, Error::<T>::MintingFinished);
                ensure!(details.arbitrator.is_none(), Error::<T>::ArbitratorAlreadySet);
                details.arbitrator = Some(arbitrator.clone());
                Ok(())
            })?;
            log::info!(target: LOG_TARGET, "token {token:?}: arbitrator {arbitrator:?}");
            Self::deposit_event(Event::ArbitratorSet { token, arbitrator });
            Ok(())
        }

        /// Move `amount` from `from` to `to` without asking the regulator.
        ///
        /// Only the linked arbitrator may call this.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::arbitrage())]
        pub fn arbitrage(
            origin: OriginFor<T>,
            token: T::TokenId,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let details = Tokens::<T>::get(token).ok_or(Error::<T>::UnknownToken)?;
            ensure!(details.arbitrator.as_ref() == Some(&who), Error::<T>::Unauthorized);
            ensure!(!is_null(&from), Error::<T>::InvalidAddress);
            ensure!(!is_null(&to), Error::<T>::InvalidAddress);

            Self::move_balance(token, &from, &to, amount)?;
            log::info!(
                target: LOG_TARGET,
                "token {token:?}: arbitrator moved {amount} from {from:?} to {to:?}"
            );
            Self::deposit_event(Event::Arbitraged { token, from, to, amount });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(
            origin: OriginFor<T>,
            token: T::TokenId,
            new_owner: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!is_null(&new_owner), Error::<T>::InvalidAddress);
            Tokens::<T>::try_mutate(token, |maybe_details| -> DispatchResult {
                let details = maybe_details.as_mut().ok_or(Error::<T>::UnknownToken)?;
                ensure!(details.owner == who, Error::<T>::Unauthorized);
                details.owner = new_owner.clone();
                Ok(())
            })?;
            Self::deposit_event(Event::OwnershipTransferred { token, old: who, new: new_owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// (id, owner, name, symbol, decimals)
        pub tokens: Vec<(T::TokenId, T::AccountId, Vec<u8>, Vec<u8>, u8)>,
        /// (id, holder, balance). Counted into the token's supply.
        pub balances: Vec<(T::TokenId, T::AccountId, u128)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (token, owner, name, symbol, decimals) in &self.tokens {
                Pallet::<T>::do_create(*token, owner.clone(), name.clone(), symbol.clone(), *decimals)
                    .expect("genesis tokens must have unique ids and bounded metadata");
            }
            for (token, holder, amount) in &self.balances {
                Tokens::<T>::mutate(token, |details| {
                    let details = details.as_mut().expect("genesis balance of unknown token");
                    details.total_supply = details.total_supply.saturating_add(*amount);
                });
                Balances::<T>::mutate(token, holder, |balance| {
                    *balance = balance.saturating_add(*amount)
                });
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn balance_of(token: T::TokenId, who: &T::AccountId) -> u128 {
        Balances::<T>::get(token, who)
    }

    pub fn allowance(token: T::TokenId, owner: &T::AccountId, spender: &T::AccountId) -> u128 {
        Allowances::<T>::get((token, owner, spender))
    }

    pub fn total_supply(token: T::TokenId) -> u128 {
        Tokens::<T>::get(token).map(|details| details.total_supply).unwrap_or_default()
    }

    pub fn details(token: T::TokenId) -> Option<TokenDetailsOf<T>> {
        Tokens::<T>::get(token)
    }

    /// What the regulator would answer for this transfer right now.
    pub fn detect_transfer_restriction(
        token: T::TokenId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> Result<(), DenialReason> {
        let context = TransferContext {
            token,
            from: from.clone(),
            to: to.clone(),
            amount,
            from_balance: Balances::<T>::get(token, from),
            to_balance: Balances::<T>::get(token, to),
        };
        T::Regulator::check(&context)
    }

    fn do_create(
        token: T::TokenId,
        owner: T::AccountId,
        name: Vec<u8>,
        symbol: Vec<u8>,
        decimals: u8,
    ) -> DispatchResult {
        ensure!(!Tokens::<T>::contains_key(token), Error::<T>::AlreadyExists);
        let name: BoundedVec<u8, T::MaxNameLen> =
            name.try_into().map_err(|_| Error::<T>::NameTooLong)?;
        let symbol: BoundedVec<u8, T::MaxSymbolLen> =
            symbol.try_into().map_err(|_| Error::<T>::SymbolTooLong)?;

        Tokens::<T>::insert(
            token,
            TokenDetails {
                owner: owner.clone(),
                name,
                symbol,
                decimals,
                total_supply: 0,
                minting_finished: false,
                arbitrator: None,
            },
        );
        Self::deposit_event(Event::Created { token, owner });
        Ok(())
    }

    /// Regulator first, then balances.
    fn regulated_transfer(
        token: T::TokenId,
        from: T::AccountId,
        to: T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(Tokens::<T>::contains_key(token), Error::<T>::UnknownToken);
        ensure!(!is_null(&to), Error::<T>::InvalidAddress);
        Self::detect_transfer_restriction(token, &from, &to, amount)
            .map_err(Error::<T>::PolicyDenied)?;

        Self::move_balance(token, &from, &to, amount)?;
        Self::deposit_event(Event::Transferred { token, from, to, amount });
        Ok(())
    }

    fn move_balance(
        token: T::TokenId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let remaining = Balances::<T>::get(token, from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;
        Balances::<T>::insert(token, from, remaining);
        Balances::<T>::try_mutate(token, to, |balance| -> DispatchResult {
            *balance = balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }
}
