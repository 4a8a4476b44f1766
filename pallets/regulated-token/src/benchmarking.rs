//! Benchmarking setup for pallet-regulated-token

use super::*;

#[allow(unused)]
use crate::Pallet as RegulatedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Builds token ids for the benchmarks.
pub trait BenchmarkHelper<TokenId> {
    fn token_id(seed: u32) -> TokenId;
}

impl<TokenId: From<u32>> BenchmarkHelper<TokenId> for () {
    fn token_id(seed: u32) -> TokenId {
        seed.into()
    }
}

/// A fresh token owned by `owner` with metadata at the length limits.
fn create_token<T: Config>(owner: &T::AccountId) -> T::TokenId {
    let token = T::BenchmarkHelper::token_id(1_000);
    Pallet::<T>::do_create(
        token,
        owner.clone(),
        sp_std::vec![b'n'; T::MaxNameLen::get() as usize],
        sp_std::vec![b's'; T::MaxSymbolLen::get() as usize],
        18,
    )
    .expect("benchmark token id is free");
    token
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create() {
        let caller: T::AccountId = whitelisted_caller();
        let token = T::BenchmarkHelper::token_id(1_000);
        let name = sp_std::vec![b'n'; T::MaxNameLen::get() as usize];
        let symbol = sp_std::vec![b's'; T::MaxSymbolLen::get() as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), token, name, symbol, 18);

        assert_eq!(Tokens::<T>::get(token).map(|d| d.owner), Some(caller));
    }

    #[benchmark]
    fn mint() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let token = create_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token, holder.clone(), 1_000);

        assert_eq!(Balances::<T>::get(token, &holder), 1_000);
    }

    #[benchmark]
    fn finish_minting() {
        let caller: T::AccountId = whitelisted_caller();
        let token = create_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token);

        assert_eq!(Tokens::<T>::get(token).map(|d| d.minting_finished), Some(true));
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let token = create_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), token, spender.clone(), 500);

        assert_eq!(Allowances::<T>::get((token, &caller, &spender)), 500);
    }

    #[benchmark]
    fn set_multisig_arbitrator() {
        let caller: T::AccountId = whitelisted_caller();
        let arbitrator: T::AccountId = account("arbitrator", 0, 0);
        let token = create_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token, arbitrator.clone());

        assert_eq!(Tokens::<T>::get(token).and_then(|d| d.arbitrator), Some(arbitrator));
    }

    #[benchmark]
    fn arbitrage() {
        let owner: T::AccountId = account("owner", 0, 0);
        let arbitrator: T::AccountId = whitelisted_caller();
        let lost: T::AccountId = account("lost", 0, 0);
        let token = create_token::<T>(&owner);
        Tokens::<T>::mutate(token, |details| {
            if let Some(details) = details {
                details.arbitrator = Some(arbitrator.clone());
            }
        });
        Balances::<T>::insert(token, &lost, 1_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(arbitrator), token, lost.clone(), owner.clone(), 1_000);

        assert_eq!(Balances::<T>::get(token, &owner), 1_000);
        assert_eq!(Balances::<T>::get(token, &lost), 0);
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        let token = create_token::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), token, new_owner.clone());

        assert_eq!(Tokens::<T>::get(token).map(|d| d.owner), Some(new_owner));
    }

    impl_benchmark_test_suite!(RegulatedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
