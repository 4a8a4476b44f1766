//! Benchmarking setup for pallet-settings-storage

use super::*;

#[allow(unused)]
use crate::Pallet as SettingsStorage;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Supplies ids the benchmarks cannot invent on their own.
pub trait BenchmarkHelper<TokenId> {
    fn token_id(seed: u32) -> TokenId;

    /// A whitelist that `Config::Whitelists` reports as existing.
    fn existing_whitelist() -> WhitelistId;
}

impl<TokenId: From<u32>> BenchmarkHelper<TokenId> for () {
    fn token_id(seed: u32) -> TokenId {
        seed.into()
    }

    fn existing_whitelist() -> WhitelistId {
        0
    }
}

fn make_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    owner
}

/// A token issued by `issuer`.
fn issued_token<T: Config>(issuer: &T::AccountId) -> T::TokenId {
    let token = T::BenchmarkHelper::token_id(1_000);
    Settings::<T>::mutate(token, |settings| settings.issuer = Some(issuer.clone()));
    token
}

/// Unregisters the helper's whitelist so it can be registered again.
fn clear_registry<T: Config>() -> WhitelistId {
    let whitelist = T::BenchmarkHelper::existing_whitelist();
    if let Some(slot) = WhitelistSlot::<T>::take(whitelist) {
        Whitelists::<T>::remove(slot);
        WhitelistCursor::<T>::mutate(SlotCursor::release);
    }
    whitelist
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_issuer() {
        let caller = make_owner::<T>();
        let issuer: T::AccountId = account("issuer", 0, 0);
        let token = T::BenchmarkHelper::token_id(1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token, issuer.clone());

        assert_eq!(Settings::<T>::get(token).issuer, Some(issuer));
    }

    #[benchmark]
    fn remove_issuer() {
        let caller: T::AccountId = whitelisted_caller();
        let token = issued_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token);

        assert_eq!(Settings::<T>::get(token).issuer, None);
    }

    #[benchmark]
    fn set_flag() {
        let caller: T::AccountId = whitelisted_caller();
        let token = issued_token::<T>(&caller);

        #[extrinsic_call]
        set_locked(RawOrigin::Signed(caller), token, true);

        assert!(Settings::<T>::get(token).locked);
    }

    #[benchmark]
    fn set_messaging_address() {
        let caller: T::AccountId = whitelisted_caller();
        let token = issued_token::<T>(&caller);
        let address = sp_std::vec![b'm'; T::MaxMessagingAddressLen::get() as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token, address.clone());

        assert_eq!(MessagingAddresses::<T>::get(token).into_inner(), address);
    }

    #[benchmark]
    fn add_whitelist() {
        let caller = make_owner::<T>();
        let whitelist = clear_registry::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist);

        assert!(WhitelistSlot::<T>::contains_key(whitelist));
    }

    #[benchmark]
    fn remove_whitelist() -> Result<(), BenchmarkError> {
        let caller = make_owner::<T>();
        let whitelist = clear_registry::<T>();
        Pallet::<T>::register(whitelist)?;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist);

        assert!(!WhitelistSlot::<T>::contains_key(whitelist));
        Ok(())
    }

    #[benchmark]
    fn add_officer() {
        let caller = make_owner::<T>();
        let officer: T::AccountId = account("officer", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), officer.clone());

        assert!(Officers::<T>::contains_key(&officer));
    }

    #[benchmark]
    fn remove_officer() {
        let caller = make_owner::<T>();
        let officer: T::AccountId = account("officer", 0, 0);
        Officers::<T>::insert(&officer, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), officer.clone());

        assert!(!Officers::<T>::contains_key(&officer));
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller = make_owner::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    impl_benchmark_test_suite!(SettingsStorage, crate::mock::new_test_ext(), crate::mock::Test);
}
