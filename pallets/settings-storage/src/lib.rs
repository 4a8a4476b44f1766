#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is kept until the runtime moves to the new event bound.
#![allow(deprecated)]

//! # Settings Storage pallet
//!
//! Holds the regulatory settings of every token and the list of whitelists the
//! regulator consults.
//!
//! ## Roles
//!
//! - **Owner**: a single account set at genesis. Appoints officers, may hand out the
//!   first issuer of a token and may register whitelists.
//! - **Officers**: may register and unregister whitelists.
//! - **Issuer**: one per token. The only account allowed to change that token's
//!   settings, to pass the role on, or to give it up.
//!
//! Settings carry no range validation. The regulator reads them through
//! [`SettingsInspect`] on every transfer.

use frame_support::{ensure, pallet_prelude::*, traits::StorageVersion};
use frame_system::{ensure_signed, pallet_prelude::*};
use regsec_primitives::{
    in_slot_order, is_null, IssuerInspect, SettingsInspect, SlotCursor, SlotError, TokenSettings,
    WhitelistId, WhitelistInspect,
};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(feature = "runtime-benchmarks")]
pub use benchmarking::BenchmarkHelper;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::settings-storage";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type TokenId: Member + Parameter + MaxEncodedLen + Copy + MaybeSerializeDeserialize;

        /// Used to reject registration of whitelists that do not exist.
        type Whitelists: WhitelistInspect<Self::AccountId>;

        /// Whitelists registered at the same time. The regulator consults all of them.
        #[pallet::constant]
        type MaxWhitelists: Get<u32>;

        #[pallet::constant]
        type MaxMessagingAddressLen: Get<u32>;

        type WeightInfo: WeightInfo;

        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::TokenId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId>;

    #[pallet::storage]
    pub type Officers<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    #[pallet::storage]
    pub type Settings<T: Config> =
        StorageMap<_, Blake2_128Concat, T::TokenId, TokenSettings<T::AccountId>, ValueQuery>;

    /// Where the issuer publishes notices for holders of a token.
    #[pallet::storage]
    pub type MessagingAddresses<T: Config> = StorageMap<
        _,
        Blake2_128Concat,
        T::TokenId,
        BoundedVec<u8, T::MaxMessagingAddressLen>,
        ValueQuery,
    >;

    /// Registered whitelists by registry slot. Removal leaves the slot empty.
    #[pallet::storage]
    pub type Whitelists<T> = StorageMap<_, Twox64Concat, u32, WhitelistId>;

    #[pallet::storage]
    pub type WhitelistSlot<T> = StorageMap<_, Twox64Concat, WhitelistId, u32>;

    #[pallet::storage]
    pub type WhitelistCursor<T> = StorageValue<_, SlotCursor, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        IssuerSet { token: T::TokenId, issuer: T::AccountId },
        IssuerRemoved { token: T::TokenId, issuer: T::AccountId },
        LockSet { token: T::TokenId, locked: bool },
        InitialOfferEndDateSet { token: T::TokenId, date: u64 },
        NewShareholdersAllowance { token: T::TokenId, allowed: bool },
        MessagingAddressSet { token: T::TokenId, address: Vec<u8> },
        PartialTransfersSet { token: T::TokenId, allowed: bool },
        WhitelistAdded { whitelist: WhitelistId },
        WhitelistRemoved { whitelist: WhitelistId },
        OfficerAdded { officer: T::AccountId },
        OfficerRemoved { officer: T::AccountId },
        OwnershipTransferred { old: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        Unauthorized,
        /// Null identity or a whitelist that was never created.
        InvalidAddress,
        AlreadyRegistered,
        NotRegistered,
        TooManyWhitelists,
        MessagingAddressTooLong,
        /// Registry slot indices are used up.
        Overflow,
        /// The token has no issuer to remove.
        NoIssuer,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Appoint the issuer of `token`.
        ///
        /// The owner appoints the first issuer; afterwards only the current issuer
        /// can pass the role on.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_issuer())]
        pub fn set_issuer(
            origin: OriginFor<T>,
            token: T::TokenId,
            issuer: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!is_null(&issuer), Error::<T>::InvalidAddress);

            Settings::<T>::try_mutate(token, |settings| -> DispatchResult {
                let allowed = match &settings.issuer {
                    Some(current) => *current == who,
                    None => Self::is_owner(&who),
                };
                ensure!(allowed, Error::<T>::Unauthorized);
                settings.issuer = Some(issuer.clone());
                Ok(())
            })?;

            log::debug!(target: LOG_TARGET, "token {token:?}: issuer {issuer:?}");
            Self::deposit_event(Event::IssuerSet { token, issuer });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::remove_issuer())]
        pub fn remove_issuer(origin: OriginFor<T>, token: T::TokenId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Settings::<T>::try_mutate(token, |settings| -> DispatchResult {
                let current = settings.issuer.as_ref().ok_or(Error::<T>::NoIssuer)?;
                ensure!(*current == who, Error::<T>::Unauthorized);
                settings.issuer = None;
                Ok(())
            })?;
            Self::deposit_event(Event::IssuerRemoved { token, issuer: who });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_flag())]
        pub fn set_locked(origin: OriginFor<T>, token: T::TokenId, locked: bool) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::mutate_as_issuer(&who, token, |settings| settings.locked = locked)?;
            Self::deposit_event(Event::LockSet { token, locked });
            Ok(())
        }

        /// Unix timestamp in seconds. Until then only the issuer may send.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_flag())]
        pub fn set_initial_offer_end_date(
            origin: OriginFor<T>,
            token: T::TokenId,
            date: u64,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::mutate_as_issuer(&who, token, |settings| settings.initial_offer_end = date)?;
            Self::deposit_event(Event::InitialOfferEndDateSet { token, date });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_flag())]
        pub fn allow_new_shareholders(
            origin: OriginFor<T>,
            token: T::TokenId,
            allowed: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::mutate_as_issuer(&who, token, |settings| {
                settings.new_shareholders_allowed = allowed
            })?;
            Self::deposit_event(Event::NewShareholdersAllowance { token, allowed });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_messaging_address())]
        pub fn set_messaging_address(
            origin: OriginFor<T>,
            token: T::TokenId,
            address: Vec<u8>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_issuer(&token, &who), Error::<T>::Unauthorized);
            let bounded: BoundedVec<u8, T::MaxMessagingAddressLen> =
                address.clone().try_into().map_err(|_| Error::<T>::MessagingAddressTooLong)?;
            MessagingAddresses::<T>::insert(token, bounded);
            Self::deposit_event(Event::MessagingAddressSet { token, address });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::set_flag())]
        pub fn set_partial_transfers(
            origin: OriginFor<T>,
            token: T::TokenId,
            allowed: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::mutate_as_issuer(&who, token, |settings| {
                settings.partial_transfers_allowed = allowed
            })?;
            Self::deposit_event(Event::PartialTransfersSet { token, allowed });
            Ok(())
        }

        /// Register a whitelist with the regulator. Owner or officer.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::add_whitelist())]
        pub fn add_whitelist(origin: OriginFor<T>, whitelist: WhitelistId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_owner_or_officer(&who), Error::<T>::Unauthorized);
            Self::register(whitelist)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::remove_whitelist())]
        pub fn remove_whitelist(origin: OriginFor<T>, whitelist: WhitelistId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_owner_or_officer(&who), Error::<T>::Unauthorized);

            let slot = WhitelistSlot::<T>::take(whitelist).ok_or(Error::<T>::NotRegistered)?;
            Whitelists::<T>::remove(slot);
            WhitelistCursor::<T>::mutate(SlotCursor::release);
            log::debug!(target: LOG_TARGET, "whitelist {whitelist} unregistered from slot {slot}");
            Self::deposit_event(Event::WhitelistRemoved { whitelist });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::add_officer())]
        pub fn add_officer(origin: OriginFor<T>, officer: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
            ensure!(!is_null(&officer), Error::<T>::InvalidAddress);
            ensure!(!Officers::<T>::contains_key(&officer), Error::<T>::AlreadyRegistered);
            Officers::<T>::insert(&officer, ());
            Self::deposit_event(Event::OfficerAdded { officer });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::remove_officer())]
        pub fn remove_officer(origin: OriginFor<T>, officer: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
            ensure!(Officers::<T>::take(&officer).is_some(), Error::<T>::NotRegistered);
            Self::deposit_event(Event::OfficerRemoved { officer });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
            ensure!(!is_null(&new_owner), Error::<T>::InvalidAddress);
            Owner::<T>::put(&new_owner);
            Self::deposit_event(Event::OwnershipTransferred { old: who, new: new_owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        pub owner: Option<T::AccountId>,
        pub officers: Vec<T::AccountId>,
        /// Whitelists to register, in order. They must already exist.
        pub whitelists: Vec<WhitelistId>,
        /// Initial issuer of each token.
        pub issuers: Vec<(T::TokenId, T::AccountId)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(owner) = &self.owner {
                Owner::<T>::put(owner);
            }
            for officer in &self.officers {
                Officers::<T>::insert(officer, ());
            }
            for whitelist in &self.whitelists {
                Pallet::<T>::register(*whitelist)
                    .expect("genesis whitelists must exist, be unique and fit MaxWhitelists");
            }
            for (token, issuer) in &self.issuers {
                Settings::<T>::mutate(token, |settings| settings.issuer = Some(issuer.clone()));
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn settings(token: &T::TokenId) -> TokenSettings<T::AccountId> {
        Settings::<T>::get(token)
    }

    pub fn issuer(token: &T::TokenId) -> Option<T::AccountId> {
        Settings::<T>::get(token).issuer
    }

    pub fn messaging_address(token: &T::TokenId) -> Vec<u8> {
        MessagingAddresses::<T>::get(token).into_inner()
    }

    /// Registry slots, tombstones included.
    pub fn whitelist_slots() -> Vec<Option<WhitelistId>> {
        WhitelistCursor::<T>::get().expand(Whitelists::<T>::iter())
    }

    pub fn is_officer(who: &T::AccountId) -> bool {
        Officers::<T>::contains_key(who)
    }

    pub fn owner() -> Option<T::AccountId> {
        Owner::<T>::get()
    }

    fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    fn is_owner_or_officer(who: &T::AccountId) -> bool {
        Self::is_owner(who) || Self::is_officer(who)
    }

    fn mutate_as_issuer(
        who: &T::AccountId,
        token: T::TokenId,
        f: impl FnOnce(&mut TokenSettings<T::AccountId>),
    ) -> DispatchResult {
        Settings::<T>::try_mutate(token, |settings| -> DispatchResult {
            ensure!(settings.is_issuer(who), Error::<T>::Unauthorized);
            f(settings);
            Ok(())
        })
    }

    fn register(whitelist: WhitelistId) -> DispatchResult {
        ensure!(T::Whitelists::exists(whitelist), Error::<T>::InvalidAddress);
        ensure!(!WhitelistSlot::<T>::contains_key(whitelist), Error::<T>::AlreadyRegistered);

        let slot = WhitelistCursor::<T>::try_mutate(|cursor| cursor.claim(T::MaxWhitelists::get()))
            .map_err(|e| match e {
                SlotError::Full => Error::<T>::TooManyWhitelists,
                SlotError::Exhausted => Error::<T>::Overflow,
            })?;
        Whitelists::<T>::insert(slot, whitelist);
        WhitelistSlot::<T>::insert(whitelist, slot);
        Self::deposit_event(Event::WhitelistAdded { whitelist });
        Ok(())
    }
}

impl<T: Config> SettingsInspect<T::TokenId, T::AccountId> for Pallet<T> {
    fn settings(token: &T::TokenId) -> TokenSettings<T::AccountId> {
        Settings::<T>::get(token)
    }

    fn whitelists() -> Vec<WhitelistId> {
        in_slot_order(Whitelists::<T>::iter())
    }

    fn max_whitelists() -> u32 {
        T::MaxWhitelists::get()
    }
}

impl<T: Config> IssuerInspect<T::TokenId, T::AccountId> for Pallet<T> {
    fn is_issuer(token: &T::TokenId, who: &T::AccountId) -> bool {
        Settings::<T>::get(token).is_issuer(who)
    }
}
