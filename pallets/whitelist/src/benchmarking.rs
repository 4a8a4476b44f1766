//! Benchmarking setup for pallet-whitelist

use super::*;

#[allow(unused)]
use crate::Pallet as Whitelist;
use codec::{Decode, Encode};
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_runtime::traits::TrailingZeroInput;

fn token_id<T: Config>(seed: u32) -> T::TokenId {
    T::TokenId::decode(&mut TrailingZeroInput::new(&seed.encode()))
        .expect("zero-padded input decodes")
}

/// Opens an investor whitelist owned by `owner` with one free entry left.
fn crowded_whitelist<T: Config>(owner: &T::AccountId) -> WhitelistId {
    let whitelist = Pallet::<T>::open(owner.clone(), WhitelistKind::Investor)
        .expect("fresh whitelist id");
    for i in 0..T::MaxEntries::get().saturating_sub(1) {
        Pallet::<T>::insert_investor(whitelist, account("investor", i, 0))
            .expect("below MaxEntries");
    }
    whitelist
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create() {
        let caller: T::AccountId = whitelisted_caller();
        let next = NextWhitelistId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), WhitelistKind::Investor);

        assert_eq!(Whitelists::<T>::get(next).map(|info| info.owner), Some(caller));
    }

    #[benchmark]
    fn set_agent() {
        let caller: T::AccountId = whitelisted_caller();
        let agent: T::AccountId = account("agent", 0, 0);
        let whitelist = Pallet::<T>::open(caller.clone(), WhitelistKind::Investor)
            .expect("fresh whitelist id");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, agent.clone());

        assert_eq!(Whitelists::<T>::get(whitelist).map(|info| info.agent), Some(agent));
    }

    #[benchmark]
    fn add_qualifier() {
        let caller: T::AccountId = whitelisted_caller();
        let qualifier: T::AccountId = account("qualifier", 0, 0);
        let whitelist = Pallet::<T>::open(caller.clone(), WhitelistKind::Investor)
            .expect("fresh whitelist id");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, qualifier.clone());

        assert!(Pallet::<T>::is_qualifier(whitelist, &qualifier));
    }

    #[benchmark]
    fn remove_qualifier() {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = Pallet::<T>::open(caller.clone(), WhitelistKind::Investor)
            .expect("fresh whitelist id");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), whitelist, caller.clone());

        assert!(!Pallet::<T>::is_qualifier(whitelist, &caller));
    }

    #[benchmark]
    fn add() {
        let caller: T::AccountId = whitelisted_caller();
        let investor: T::AccountId = account("newcomer", 0, 0);
        let whitelist = crowded_whitelist::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, investor.clone());

        assert!(Pallet::<T>::verify(whitelist, &investor));
    }

    #[benchmark]
    fn remove() {
        let caller: T::AccountId = whitelisted_caller();
        let investor: T::AccountId = account("investor", 0, 0);
        let whitelist = crowded_whitelist::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, investor.clone());

        assert!(!Pallet::<T>::verify(whitelist, &investor));
    }

    #[benchmark]
    fn set_whitelist_type() {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = Pallet::<T>::open(caller.clone(), WhitelistKind::Investor)
            .expect("fresh whitelist id");
        let whitelist_type = sp_std::vec![b'x'; T::MaxTypeLen::get() as usize];

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist, whitelist_type.clone());

        assert_eq!(
            Whitelists::<T>::get(whitelist).map(|info| info.whitelist_type.into_inner()),
            Some(whitelist_type)
        );
    }

    #[benchmark]
    fn pause() {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = Pallet::<T>::open(caller.clone(), WhitelistKind::Investor)
            .expect("fresh whitelist id");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist);

        assert_eq!(Whitelists::<T>::get(whitelist).map(|info| info.paused), Some(true));
    }

    #[benchmark]
    fn unpause() {
        let caller: T::AccountId = whitelisted_caller();
        let whitelist = Pallet::<T>::open(caller.clone(), WhitelistKind::Investor)
            .expect("fresh whitelist id");
        Whitelists::<T>::mutate(whitelist, |info| {
            if let Some(info) = info {
                info.paused = true;
            }
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), whitelist);

        assert_eq!(Whitelists::<T>::get(whitelist).map(|info| info.paused), Some(false));
    }

    #[benchmark]
    fn verify(t: Linear<0, { T::MaxTokens::get() }>) {
        let owner: T::AccountId = whitelisted_caller();
        let outsider: T::AccountId = account("outsider", 0, 0);
        let whitelist =
            Pallet::<T>::open(owner, WhitelistKind::Token).expect("fresh whitelist id");
        for seed in 0..t {
            let token = token_id::<T>(seed);
            let slot = TokenCursor::<T>::mutate(whitelist, |cursor| {
                cursor.claim(T::MaxTokens::get())
            })
            .expect("below MaxTokens");
            Tokens::<T>::insert(whitelist, slot, token);
            TokenSlot::<T>::insert(whitelist, token, slot);
        }
        let verified;

        // Nobody issues the listed tokens, so every one of them is checked.
        #[block]
        {
            verified = Pallet::<T>::verify(whitelist, &outsider);
        }

        assert!(!verified);
    }

    impl_benchmark_test_suite!(Whitelist, crate::mock::new_test_ext(), crate::mock::Test);
}
