//! Weights for pallet-regulator.
//!
//! Placeholder values until `benchmarking.rs` is run against reference hardware
//! with `frame-benchmarking-cli`. `check` runs inside token transfers rather than
//! as a call of its own, so its storage accesses are counted by hand.

#![allow(unused_parens, unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn deploy_service() -> Weight;
    fn replace_service() -> Weight;
    fn transfer_ownership() -> Weight;
    fn check(w: u32) -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn deploy_service() -> Weight {
        Weight::from_parts(14_000_000, 1_600).saturating_add(T::DbWeight::get().reads_writes(1, 2))
    }
    fn replace_service() -> Weight {
        Weight::from_parts(13_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// `w`: registered whitelists. Whitelist lookups are charged by the whitelist pallet.
    fn check(w: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_600)
            .saturating_add(Weight::from_parts(1_500_000, 1_500).saturating_mul(w.into()))
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().reads(w.into()))
    }
}

impl WeightInfo for () {
    fn deploy_service() -> Weight {
        Weight::from_parts(14_000_000, 1_600).saturating_add(RocksDbWeight::get().reads_writes(1, 2))
    }
    fn replace_service() -> Weight {
        Weight::from_parts(13_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    /// `w`: registered whitelists. Whitelist lookups are charged by the whitelist pallet.
    fn check(w: u32) -> Weight {
        Weight::from_parts(9_000_000, 3_600)
            .saturating_add(Weight::from_parts(1_500_000, 1_500).saturating_mul(w.into()))
            .saturating_add(RocksDbWeight::get().reads(4))
            .saturating_add(RocksDbWeight::get().reads(w.into()))
    }
}
