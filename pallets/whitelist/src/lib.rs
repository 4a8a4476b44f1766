#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is kept until the runtime moves to the new event bound.
#![allow(deprecated)]

//! # Whitelist pallet
//!
//! Membership oracles answering "is this account cleared to hold the asset".
//!
//! Any signed account can open a whitelist and becomes its owner, agent and first
//! qualifier. The agent curates the qualifiers; qualifiers curate the verified set.
//! An [`WhitelistKind::Investor`] whitelist verifies accounts directly, a
//! [`WhitelistKind::Token`] whitelist verifies tokens and clears whoever issues one
//! of them.
//!
//! Verified sets and qualifier lists are tombstoned slot maps: removal blanks the
//! slot and keeps every other position, so enumerations stay stable. Capacities
//! bound the live entries only; a slot freed by removal never comes back, but it
//! no longer counts against the limit.
//!
//! Pausing a whitelist freezes its mutations only; [`Pallet::verify`] keeps answering.

use frame_support::{ensure, pallet_prelude::*, traits::StorageVersion};
use frame_system::{ensure_signed, pallet_prelude::*};
use regsec_primitives::{
    is_null, IssuerInspect, SlotCursor, SlotError, WhitelistId, WhitelistInspect,
};
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

const LOG_TARGET: &str = "runtime::whitelist";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Identifier of tokens listed by token whitelists.
        type TokenId: Member + Parameter + MaxEncodedLen + Copy;

        /// Resolves token issuers for token whitelists.
        type Issuers: IssuerInspect<Self::TokenId, Self::AccountId>;

        /// Live qualifiers per whitelist.
        #[pallet::constant]
        type MaxQualifiers: Get<u32>;

        /// Live verified investors per whitelist.
        #[pallet::constant]
        type MaxEntries: Get<u32>;

        /// Live verified tokens per token whitelist. `verify` walks all of them.
        #[pallet::constant]
        type MaxTokens: Get<u32>;

        #[pallet::constant]
        type MaxTypeLen: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type NextWhitelistId<T> = StorageValue<_, WhitelistId, ValueQuery>;

    #[pallet::storage]
    pub type Whitelists<T: Config> =
        StorageMap<_, Twox64Concat, WhitelistId, WhitelistInfo<T::AccountId, T::MaxTypeLen>>;

    /// Qualifier slots per whitelist. A slot below the cursor with no entry is a tombstone.
    #[pallet::storage]
    pub type Qualifiers<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WhitelistId, Twox64Concat, u32, T::AccountId>;

    #[pallet::storage]
    pub type QualifierSlot<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WhitelistId, Blake2_128Concat, T::AccountId, u32>;

    #[pallet::storage]
    pub type QualifierCursor<T> = StorageMap<_, Twox64Concat, WhitelistId, SlotCursor, ValueQuery>;

    /// Verified investor slots per whitelist.
    #[pallet::storage]
    pub type Investors<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WhitelistId, Twox64Concat, u32, T::AccountId>;

    #[pallet::storage]
    pub type InvestorSlot<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WhitelistId, Blake2_128Concat, T::AccountId, u32>;

    #[pallet::storage]
    pub type InvestorCursor<T> = StorageMap<_, Twox64Concat, WhitelistId, SlotCursor, ValueQuery>;

    /// Verified token slots per whitelist.
    #[pallet::storage]
    pub type Tokens<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WhitelistId, Twox64Concat, u32, T::TokenId>;

    #[pallet::storage]
    pub type TokenSlot<T: Config> =
        StorageDoubleMap<_, Twox64Concat, WhitelistId, Blake2_128Concat, T::TokenId, u32>;

    #[pallet::storage]
    pub type TokenCursor<T> = StorageMap<_, Twox64Concat, WhitelistId, SlotCursor, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        Created { whitelist: WhitelistId, owner: T::AccountId, kind: WhitelistKind },
        AgentSet { whitelist: WhitelistId, agent: T::AccountId },
        QualifierAdded { whitelist: WhitelistId, qualifier: T::AccountId },
        QualifierRemoved { whitelist: WhitelistId, qualifier: T::AccountId },
        InvestorAdded { whitelist: WhitelistId, investor: T::AccountId },
        InvestorRemoved { whitelist: WhitelistId, investor: T::AccountId },
        TokenAdded { whitelist: WhitelistId, token: T::TokenId },
        TokenRemoved { whitelist: WhitelistId, token: T::TokenId },
        WhitelistTypeSet { whitelist: WhitelistId, whitelist_type: Vec<u8> },
        Paused { whitelist: WhitelistId },
        Unpaused { whitelist: WhitelistId },
    }

    #[pallet::error]
    pub enum Error<T> {
        UnknownWhitelist,
        /// Caller lacks the owner, agent or qualifier role required.
        Unauthorized,
        /// The null identity cannot be listed.
        InvalidAddress,
        Paused,
        AlreadyListed,
        NotListed,
        /// The operation does not apply to this kind of whitelist.
        WrongKind,
        TooManyEntries,
        TooManyQualifiers,
        TooManyTokens,
        TypeTooLong,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Open a new whitelist owned by the caller.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::create())]
        pub fn create(origin: OriginFor<T>, kind: WhitelistKind) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::open(who, kind)?;
            Ok(())
        }

        /// Hand the qualifier-management role to `agent`. Owner only.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::set_agent())]
        pub fn set_agent(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            agent: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!is_null(&agent), Error::<T>::InvalidAddress);
            Whitelists::<T>::try_mutate(whitelist, |maybe_info| -> DispatchResult {
                let info = maybe_info.as_mut().ok_or(Error::<T>::UnknownWhitelist)?;
                ensure!(!info.paused, Error::<T>::Paused);
                ensure!(info.owner == who, Error::<T>::Unauthorized);
                info.agent = agent.clone();
                Ok(())
            })?;
            Self::deposit_event(Event::AgentSet { whitelist, agent });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::add_qualifier())]
        pub fn add_qualifier(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            qualifier: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let info = Self::active(whitelist)?;
            ensure!(info.agent == who, Error::<T>::Unauthorized);
            Self::insert_qualifier(whitelist, qualifier)
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::remove_qualifier())]
        pub fn remove_qualifier(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            qualifier: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let info = Self::active(whitelist)?;
            ensure!(info.agent == who, Error::<T>::Unauthorized);

            let slot =
                QualifierSlot::<T>::take(whitelist, &qualifier).ok_or(Error::<T>::NotListed)?;
            Qualifiers::<T>::remove(whitelist, slot);
            QualifierCursor::<T>::mutate(whitelist, SlotCursor::release);
            Self::deposit_event(Event::QualifierRemoved { whitelist, qualifier });
            Ok(())
        }

        /// Verify `investor`. Qualifiers only.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::add())]
        pub fn add(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            investor: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let info = Self::active(whitelist)?;
            Self::ensure_qualifier(whitelist, &who)?;
            ensure!(info.kind == WhitelistKind::Investor, Error::<T>::WrongKind);
            Self::insert_investor(whitelist, investor)
        }

        /// Tombstone the slot of `investor`. Qualifiers only.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::remove())]
        pub fn remove(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            investor: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let info = Self::active(whitelist)?;
            Self::ensure_qualifier(whitelist, &who)?;
            ensure!(info.kind == WhitelistKind::Investor, Error::<T>::WrongKind);

            let slot =
                InvestorSlot::<T>::take(whitelist, &investor).ok_or(Error::<T>::NotListed)?;
            Investors::<T>::remove(whitelist, slot);
            InvestorCursor::<T>::mutate(whitelist, SlotCursor::release);
            log::debug!(target: LOG_TARGET, "whitelist {whitelist}: investor {investor:?} removed");
            Self::deposit_event(Event::InvestorRemoved { whitelist, investor });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::add_token())]
        pub fn add_token(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            token: T::TokenId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let info = Self::active(whitelist)?;
            Self::ensure_qualifier(whitelist, &who)?;
            ensure!(info.kind == WhitelistKind::Token, Error::<T>::WrongKind);
            ensure!(!TokenSlot::<T>::contains_key(whitelist, token), Error::<T>::AlreadyListed);

            let slot = TokenCursor::<T>::try_mutate(whitelist, |cursor| {
                cursor.claim(T::MaxTokens::get())
            })
            .map_err(|e| Self::slot_error(e, Error::<T>::TooManyTokens))?;
            Tokens::<T>::insert(whitelist, slot, token);
            TokenSlot::<T>::insert(whitelist, token, slot);
            Self::deposit_event(Event::TokenAdded { whitelist, token });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::remove_token())]
        pub fn remove_token(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            token: T::TokenId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let info = Self::active(whitelist)?;
            Self::ensure_qualifier(whitelist, &who)?;
            ensure!(info.kind == WhitelistKind::Token, Error::<T>::WrongKind);

            let slot = TokenSlot::<T>::take(whitelist, token).ok_or(Error::<T>::NotListed)?;
            Tokens::<T>::remove(whitelist, slot);
            TokenCursor::<T>::mutate(whitelist, SlotCursor::release);
            Self::deposit_event(Event::TokenRemoved { whitelist, token });
            Ok(())
        }

        /// Tag the whitelist with a classification. Metadata only. Owner only.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_whitelist_type())]
        pub fn set_whitelist_type(
            origin: OriginFor<T>,
            whitelist: WhitelistId,
            whitelist_type: Vec<u8>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let bounded: BoundedVec<u8, T::MaxTypeLen> =
                whitelist_type.clone().try_into().map_err(|_| Error::<T>::TypeTooLong)?;
            Whitelists::<T>::try_mutate(whitelist, |maybe_info| -> DispatchResult {
                let info = maybe_info.as_mut().ok_or(Error::<T>::UnknownWhitelist)?;
                ensure!(!info.paused, Error::<T>::Paused);
                ensure!(info.owner == who, Error::<T>::Unauthorized);
                info.whitelist_type = bounded;
                Ok(())
            })?;
            Self::deposit_event(Event::WhitelistTypeSet { whitelist, whitelist_type });
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>, whitelist: WhitelistId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::set_paused(who, whitelist, true)?;
            Self::deposit_event(Event::Paused { whitelist });
            Ok(())
        }

        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>, whitelist: WhitelistId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::set_paused(who, whitelist, false)?;
            Self::deposit_event(Event::Unpaused { whitelist });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Investor whitelists to open at genesis: (owner, verified investors).
        pub investor_whitelists: Vec<(T::AccountId, Vec<T::AccountId>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (owner, investors) in &self.investor_whitelists {
                let whitelist = Pallet::<T>::open(owner.clone(), WhitelistKind::Investor)
                    .expect("genesis whitelist ids fit in u32");
                for investor in investors {
                    Pallet::<T>::insert_investor(whitelist, investor.clone())
                        .expect("genesis investors must be unique, non-null and within MaxEntries");
                }
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Whether `whitelist` clears `who`. Never true for the null identity.
    pub fn verify(whitelist: WhitelistId, who: &T::AccountId) -> bool {
        if is_null(who) {
            return false;
        }
        match Whitelists::<T>::get(whitelist).map(|info| info.kind) {
            Some(WhitelistKind::Investor) => InvestorSlot::<T>::contains_key(whitelist, who),
            Some(WhitelistKind::Token) => Tokens::<T>::iter_prefix_values(whitelist)
                .any(|token| T::Issuers::is_issuer(&token, who)),
            None => false,
        }
    }

    /// Qualifier slots, tombstones included.
    pub fn qualifiers(whitelist: WhitelistId) -> Vec<Option<T::AccountId>> {
        QualifierCursor::<T>::get(whitelist).expand(Qualifiers::<T>::iter_prefix(whitelist))
    }

    /// Verified investor slots, tombstones included.
    pub fn verified_investors(whitelist: WhitelistId) -> Vec<Option<T::AccountId>> {
        InvestorCursor::<T>::get(whitelist).expand(Investors::<T>::iter_prefix(whitelist))
    }

    /// Verified token slots, tombstones included.
    pub fn verified_tokens(whitelist: WhitelistId) -> Vec<Option<T::TokenId>> {
        TokenCursor::<T>::get(whitelist).expand(Tokens::<T>::iter_prefix(whitelist))
    }

    pub fn is_qualifier(whitelist: WhitelistId, who: &T::AccountId) -> bool {
        QualifierSlot::<T>::contains_key(whitelist, who)
    }

    pub fn info(whitelist: WhitelistId) -> Option<WhitelistInfo<T::AccountId, T::MaxTypeLen>> {
        Whitelists::<T>::get(whitelist)
    }

    pub(crate) fn open(owner: T::AccountId, kind: WhitelistKind) -> Result<WhitelistId, DispatchError> {
        let whitelist = NextWhitelistId::<T>::get();
        NextWhitelistId::<T>::put(whitelist.checked_add(1).ok_or(Error::<T>::Overflow)?);

        Whitelists::<T>::insert(
            whitelist,
            WhitelistInfo {
                owner: owner.clone(),
                agent: owner.clone(),
                kind,
                whitelist_type: BoundedVec::default(),
                paused: false,
            },
        );
        Self::deposit_event(Event::Created { whitelist, owner: owner.clone(), kind });
        Self::insert_qualifier(whitelist, owner)?;
        Ok(whitelist)
    }

    pub(crate) fn insert_investor(whitelist: WhitelistId, investor: T::AccountId) -> DispatchResult {
        ensure!(!is_null(&investor), Error::<T>::InvalidAddress);
        ensure!(!InvestorSlot::<T>::contains_key(whitelist, &investor), Error::<T>::AlreadyListed);

        let slot = InvestorCursor::<T>::try_mutate(whitelist, |cursor| {
            cursor.claim(T::MaxEntries::get())
        })
        .map_err(|e| Self::slot_error(e, Error::<T>::TooManyEntries))?;
        Investors::<T>::insert(whitelist, slot, &investor);
        InvestorSlot::<T>::insert(whitelist, &investor, slot);
        log::debug!(target: LOG_TARGET, "whitelist {whitelist}: investor {investor:?} in slot {slot}");
        Self::deposit_event(Event::InvestorAdded { whitelist, investor });
        Ok(())
    }

    fn insert_qualifier(whitelist: WhitelistId, qualifier: T::AccountId) -> DispatchResult {
        ensure!(!is_null(&qualifier), Error::<T>::InvalidAddress);
        ensure!(
            !QualifierSlot::<T>::contains_key(whitelist, &qualifier),
            Error::<T>::AlreadyListed
        );

        let slot = QualifierCursor::<T>::try_mutate(whitelist, |cursor| {
            cursor.claim(T::MaxQualifiers::get())
        })
        .map_err(|e| Self::slot_error(e, Error::<T>::TooManyQualifiers))?;
        Qualifiers::<T>::insert(whitelist, slot, &qualifier);
        QualifierSlot::<T>::insert(whitelist, &qualifier, slot);
        Self::deposit_event(Event::QualifierAdded { whitelist, qualifier });
        Ok(())
    }

    /// Loads a whitelist that accepts mutations.
    fn active(
        whitelist: WhitelistId,
    ) -> Result<WhitelistInfo<T::AccountId, T::MaxTypeLen>, DispatchError> {
        let info = Whitelists::<T>::get(whitelist).ok_or(Error::<T>::UnknownWhitelist)?;
        ensure!(!info.paused, Error::<T>::Paused);
        Ok(info)
    }

    fn ensure_qualifier(whitelist: WhitelistId, who: &T::AccountId) -> DispatchResult {
        ensure!(Self::is_qualifier(whitelist, who), Error::<T>::Unauthorized);
        Ok(())
    }

    fn slot_error(error: SlotError, full: Error<T>) -> Error<T> {
        match error {
            SlotError::Full => full,
            SlotError::Exhausted => Error::<T>::Overflow,
        }
    }

    fn set_paused(who: T::AccountId, whitelist: WhitelistId, paused: bool) -> DispatchResult {
        Whitelists::<T>::try_mutate(whitelist, |maybe_info| -> DispatchResult {
            let info = maybe_info.as_mut().ok_or(Error::<T>::UnknownWhitelist)?;
            ensure!(info.owner == who, Error::<T>::Unauthorized);
            info.paused = paused;
            Ok(())
        })
    }
}

impl<T: Config> WhitelistInspect<T::AccountId> for Pallet<T> {
    fn exists(whitelist: WhitelistId) -> bool {
        Whitelists::<T>::contains_key(whitelist)
    }

    fn verify(whitelist: WhitelistId, who: &T::AccountId) -> bool {
        Pallet::<T>::verify(whitelist, who)
    }

    fn verify_weight() -> Weight {
        T::WeightInfo::verify(T::MaxTokens::get())
    }
}
