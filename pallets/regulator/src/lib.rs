#![cfg_attr(not(feature = "std"), no_std)]
// `RuntimeEvent` on `Config` is kept until the runtime moves to the new event bound.
#![allow(deprecated)]

//! # Regulator pallet
//!
//! A registry of policy services and the decision they make on every regulated
//! transfer.
//!
//! Anyone may deploy a service. Exactly one of them is active at a time and only
//! the registry owner can swap it. The token consults the active service through
//! [`TransferRestriction`]; when none is active every transfer is refused with
//! [`DenialReason::ServiceUnavailable`].
//!
//! The decision itself lives in [`policy`].

use frame_support::{
    ensure,
    pallet_prelude::*,
    traits::{StorageVersion, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use regsec_primitives::{
    is_null, DenialReason, SettingsInspect, TransferContext, TransferRestriction, WhitelistInspect,
};

pub use pallet::*;
pub use types::*;
pub use weights::WeightInfo;

pub mod policy;
mod types;
pub mod weights;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::regulator";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type TokenId: Member + Parameter + MaxEncodedLen + Copy;

        /// Per-token settings and the registered whitelists.
        type Settings: SettingsInspect<Self::TokenId, Self::AccountId>;

        type Whitelists: WhitelistInspect<Self::AccountId>;

        /// Clock for the initial offer window.
        type Time: UnixTime;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId>;

    #[pallet::storage]
    pub type NextServiceId<T> = StorageValue<_, ServiceId, ValueQuery>;

    #[pallet::storage]
    pub type Services<T: Config> =
        StorageMap<_, Twox64Concat, ServiceId, ServiceInfo<T::AccountId>>;

    #[pallet::storage]
    pub type ActiveService<T> = StorageValue<_, ServiceId>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        ServiceDeployed { service: ServiceId, policy: ServicePolicy },
        ReplaceService { old: Option<ServiceId>, new: ServiceId },
        OwnershipTransferred { old: T::AccountId, new: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        Unauthorized,
        /// Null identity or a service that was never deployed.
        InvalidAddress,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Deploy a policy service. It stays inactive until the owner selects it.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::deploy_service())]
        pub fn deploy_service(origin: OriginFor<T>, policy: ServicePolicy) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::deploy(Some(who), policy)?;
            Ok(())
        }

        /// Make `service` the active one. Owner only.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::replace_service())]
        pub fn replace_service(origin: OriginFor<T>, service: ServiceId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Self::is_owner(&who), Error::<T>::Unauthorized);
            ensure!(Services::<T>::contains_key(service), Error::<T>::InvalidAddress);

            let old = ActiveService::<T>::get();
            ActiveService::<T>::put(service);
            log::info!(target: LOG_TARGET, "active service {old:?} -> {service}");
            Self::deposit_event(Event::ReplaceService { old, new: service });
            Ok(())
        }

        #[pallet::call_index(2)]
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
        /// Deployed and activated at genesis.
        pub initial_service: Option<ServicePolicy>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(owner) = &self.owner {
                Owner::<T>::put(owner);
            }
            if let Some(policy) = self.initial_service {
                let service =
                    Pallet::<T>::deploy(None, policy).expect("first service id is free");
                ActiveService::<T>::put(service);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn owner() -> Option<T::AccountId> {
        Owner::<T>::get()
    }

    pub fn active_service() -> Option<ServiceId> {
        ActiveService::<T>::get()
    }

    pub fn service(service: ServiceId) -> Option<ServiceInfo<T::AccountId>> {
        Services::<T>::get(service)
    }

    /// Ask the active service whether the transfer described by `context` may go ahead.
    pub fn check(
        context: &TransferContext<T::TokenId, T::AccountId>,
    ) -> Result<(), DenialReason> {
        let service = ActiveService::<T>::get()
            .and_then(|service| Services::<T>::get(service))
            .ok_or(DenialReason::ServiceUnavailable)?;

        let snapshot = policy::PolicySnapshot::<T> {
            context,
            settings: T::Settings::settings(&context.token),
            policy: service.policy,
            now: T::Time::now().as_secs(),
        };
        let decision = policy::evaluate(&snapshot);
        if let Err(reason) = decision {
            log::debug!(
                target: LOG_TARGET,
                "token {:?}: {:?} -> {:?} of {} denied: {reason:?}",
                context.token,
                context.from,
                context.to,
                context.amount,
            );
        }
        decision
    }

    fn is_owner(who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    fn deploy(
        deployer: Option<T::AccountId>,
        policy: ServicePolicy,
    ) -> Result<ServiceId, DispatchError> {
        let service = NextServiceId::<T>::get();
        NextServiceId::<T>::put(service.checked_add(1).ok_or(Error::<T>::Overflow)?);
        Services::<T>::insert(service, ServiceInfo { policy, deployer });
        Self::deposit_event(Event::ServiceDeployed { service, policy });
        Ok(service)
    }
}

impl<T: Config> TransferRestriction<T::TokenId, T::AccountId> for Pallet<T> {
    fn check(context: &TransferContext<T::TokenId, T::AccountId>) -> Result<(), DenialReason> {
        Pallet::<T>::check(context)
    }

    fn check_weight() -> Weight {
        let registered = T::Settings::max_whitelists();
        // A strict service verifies both parties against every registered whitelist.
        let lookups = 2u64.saturating_mul(registered.into());
        T::WeightInfo::check(registered)
            .saturating_add(T::Whitelists::verify_weight().saturating_mul(lookups))
    }
}
