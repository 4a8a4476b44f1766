//! Weights for pallet-multisig-arbitration.
//!
//! Placeholder values until `benchmarking.rs` is run against reference hardware
//! with `frame-benchmarking-cli`. Storage accesses are counted by hand. Submission,
//! confirmation and execution exclude the dispatched call itself.

#![allow(unused_parens, unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn create_wallet(n: u32) -> Weight;
    fn submit_transaction() -> Weight;
    fn confirm_transaction() -> Weight;
    fn revoke_confirmation() -> Weight;
    fn execute_transaction() -> Weight;
    fn add_owner() -> Weight;
    fn remove_owner() -> Weight;
    fn replace_owner() -> Weight;
    fn change_requirement() -> Weight;
}

/// Weights scaled by the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create_wallet(n: u32) -> Weight {
        Weight::from_parts(20_000_000, 2_000)
            .saturating_add(Weight::from_parts(500_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads_writes(1, 2))
    }
    fn submit_transaction() -> Weight {
        Weight::from_parts(35_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn confirm_transaction() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn revoke_confirmation() -> Weight {
        Weight::from_parts(20_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn execute_transaction() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn add_owner() -> Weight {
        Weight::from_parts(18_000_000, 3_000)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn remove_owner() -> Weight {
        Weight::from_parts(18_000_000, 3_000)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn replace_owner() -> Weight {
        Weight::from_parts(18_000_000, 3_000)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn change_requirement() -> Weight {
        Weight::from_parts(15_000_000, 3_000)
            .saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

impl WeightInfo for () {
    fn create_wallet(n: u32) -> Weight {
        Weight::from_parts(20_000_000, 2_000)
            .saturating_add(Weight::from_parts(500_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads_writes(1, 2))
    }
    fn submit_transaction() -> Weight {
        Weight::from_parts(35_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn confirm_transaction() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn revoke_confirmation() -> Weight {
        Weight::from_parts(20_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn execute_transaction() -> Weight {
        Weight::from_parts(30_000_000, 6_000)
            .saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn add_owner() -> Weight {
        Weight::from_parts(18_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn remove_owner() -> Weight {
        Weight::from_parts(18_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn replace_owner() -> Weight {
        Weight::from_parts(18_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn change_requirement() -> Weight {
        Weight::from_parts(15_000_000, 3_000)
            .saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
