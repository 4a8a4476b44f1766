//! Benchmarking setup for pallet-regulator

use super::*;

#[allow(unused)]
use crate::Pallet as Regulator;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn deploy_service() {
        let caller: T::AccountId = whitelisted_caller();
        let next = NextServiceId::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), ServicePolicy::Strict);

        assert_eq!(Services::<T>::get(next).map(|info| info.policy), Some(ServicePolicy::Strict));
    }

    #[benchmark]
    fn replace_service() {
        let caller: T::AccountId = whitelisted_caller();
        Owner::<T>::put(&caller);
        let service = Pallet::<T>::deploy(None, ServicePolicy::Strict).expect("free service id");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), service);

        assert_eq!(ActiveService::<T>::get(), Some(service));
    }

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("owner", 0, 0);
        Owner::<T>::put(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    impl_benchmark_test_suite!(Regulator, crate::mock::new_test_ext(), crate::mock::Test);
}
