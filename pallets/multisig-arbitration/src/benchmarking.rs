//! Benchmarking setup for pallet-multisig-arbitration

use super::*;

#[allow(unused)]
use crate::Pallet as MultisigArbitration;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn owners<T: Config>(n: u32) -> Vec<T::AccountId> {
    (0..n).map(|i| account("owner", i, 0)).collect()
}

/// `caller` plus `others` more owners, all of them required.
fn wallet_with<T: Config>(caller: &T::AccountId, others: u32) -> WalletId {
    let mut all = sp_std::vec![caller.clone()];
    all.extend(owners::<T>(others));
    let required = all.len() as u32;
    Pallet::<T>::do_create_wallet(all, required).expect("benchmark owners are valid")
}

fn remark_call<T: Config>() -> Box<<T as Config>::RuntimeCall> {
    Box::new(frame_system::Call::<T>::remark { remark: sp_std::vec![0u8; 32] }.into())
}

fn remark_weight<T: Config>() -> Weight {
    remark_call::<T>().get_dispatch_info().call_weight
}

fn wallet_origin<T: Config>(wallet: WalletId) -> RawOrigin<T::AccountId> {
    RawOrigin::Signed(Pallet::<T>::wallet_account(wallet))
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn create_wallet(n: Linear<1, { T::MaxOwners::get() }>) {
        let caller: T::AccountId = whitelisted_caller();
        let all = owners::<T>(n);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), all, n);

        let created = NextWalletId::<T>::get().saturating_sub(1);
        assert_eq!(Wallets::<T>::get(created).map(|w| w.required), Some(n));
    }

    #[benchmark]
    fn submit_transaction() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), wallet, remark_call::<T>());

        assert_eq!(TransactionCount::<T>::get(wallet), 1);
    }

    #[benchmark]
    fn confirm_transaction() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, 1);
        let submitter: T::AccountId = account("owner", 0, 0);
        Pallet::<T>::submit_transaction(
            RawOrigin::Signed(submitter).into(),
            wallet,
            remark_call::<T>(),
        )
        .expect("submitter is an owner");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), wallet, 0, remark_weight::<T>());

        assert!(Transactions::<T>::get(wallet, 0).map_or(false, |tx| tx.executed));
    }

    #[benchmark]
    fn revoke_confirmation() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, 1);
        Pallet::<T>::submit_transaction(
            RawOrigin::Signed(caller.clone()).into(),
            wallet,
            remark_call::<T>(),
        )
        .expect("caller is an owner");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), wallet, 0);

        assert!(Transactions::<T>::get(wallet, 0).map_or(false, |tx| tx.confirmations.is_empty()));
    }

    #[benchmark]
    fn execute_transaction() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, 1);
        Pallet::<T>::submit_transaction(
            RawOrigin::Signed(caller.clone()).into(),
            wallet,
            remark_call::<T>(),
        )
        .expect("caller is an owner");
        Wallets::<T>::mutate(wallet, |state| {
            if let Some(state) = state {
                state.required = 1;
            }
        });

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), wallet, 0, remark_weight::<T>());

        assert!(Transactions::<T>::get(wallet, 0).map_or(false, |tx| tx.executed));
    }

    #[benchmark]
    fn add_owner() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, T::MaxOwners::get().saturating_sub(2));
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(wallet_origin::<T>(wallet), wallet, new_owner.clone());

        assert!(Pallet::<T>::owners(wallet).contains(&new_owner));
    }

    #[benchmark]
    fn remove_owner() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, T::MaxOwners::get().saturating_sub(1));

        #[extrinsic_call]
        _(wallet_origin::<T>(wallet), wallet, caller.clone());

        assert!(!Pallet::<T>::owners(wallet).contains(&caller));
    }

    #[benchmark]
    fn replace_owner() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, T::MaxOwners::get().saturating_sub(1));
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(wallet_origin::<T>(wallet), wallet, caller, new_owner.clone());

        assert!(Pallet::<T>::owners(wallet).contains(&new_owner));
    }

    #[benchmark]
    fn change_requirement() {
        let caller: T::AccountId = whitelisted_caller();
        let wallet = wallet_with::<T>(&caller, 1);

        #[extrinsic_call]
        _(wallet_origin::<T>(wallet), wallet, 1);

        assert_eq!(Wallets::<T>::get(wallet).map(|w| w.required), Some(1));
    }

    impl_benchmark_test_suite!(MultisigArbitration, crate::mock::new_test_ext(), crate::mock::Test);
}
