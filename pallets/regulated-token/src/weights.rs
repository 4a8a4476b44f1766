//! Weights for pallet-regulated-token.
//!
//! Placeholder values until `benchmarking.rs` is run against reference hardware
//! with `frame-benchmarking-cli`. `transfer` and `transfer_from` are counted by
//! hand: their cost is dominated by the regulator, which this pallet cannot set up
//! on its own. They assume a registry of a handful of whitelists.

#![allow(unused_parens, unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn create() -> Weight;
    fn mint() -> Weight;
    fn finish_minting() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn set_multisig_arbitrator() -> Weight;
    fn arbitrage() -> Weight;
    fn transfer_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create() -> Weight {
        Weight::from_parts(18_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    fn finish_minting() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn transfer() -> Weight {
        Weight::from_parts(45_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(8, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(16_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(50_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(9, 3))
    }
    fn set_multisig_arbitrator() -> Weight {
        Weight::from_parts(15_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn arbitrage() -> Weight {
        Weight::from_parts(25_000_000, 6_200).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

impl WeightInfo for () {
    fn create() -> Weight {
        Weight::from_parts(18_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(22_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn finish_minting() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn transfer() -> Weight {
        Weight::from_parts(45_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(8, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(16_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(50_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(9, 3))
    }
    fn set_multisig_arbitrator() -> Weight {
        Weight::from_parts(15_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn arbitrage() -> Weight {
        Weight::from_parts(25_000_000, 6_200).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
