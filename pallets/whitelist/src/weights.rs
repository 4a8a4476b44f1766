//! Weights for pallet-whitelist.
//!
//! Placeholder values until `benchmarking.rs` is run against reference hardware
//! with `frame-benchmarking-cli`. Storage accesses are counted by hand.

#![allow(unused_parens, unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn create() -> Weight;
    fn set_agent() -> Weight;
    fn add_qualifier() -> Weight;
    fn remove_qualifier() -> Weight;
    fn add() -> Weight;
    fn remove() -> Weight;
    fn add_token() -> Weight;
    fn remove_token() -> Weight;
    fn set_whitelist_type() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn verify(t: u32) -> Weight;
}

/// Weights scaled by the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn create() -> Weight {
        Weight::from_parts(25_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 6))
    }
    fn set_agent() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn add_qualifier() -> Weight {
        Weight::from_parts(20_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn remove_qualifier() -> Weight {
        Weight::from_parts(20_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 3))
    }
    fn add() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(4, 3))
    }
    fn remove() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn add_token() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(4, 3))
    }
    fn remove_token() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 3))
    }
    fn set_whitelist_type() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// `t`: live tokens on a token whitelist. Investor whitelists cost `verify(0)`.
    fn verify(t: u32) -> Weight {
        Weight::from_parts(6_000_000, 3_500)
            .saturating_add(Weight::from_parts(4_000_000, 2_600).saturating_mul(t.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().reads((2_u64).saturating_mul(t.into())))
    }
}

impl WeightInfo for () {
    fn create() -> Weight {
        Weight::from_parts(25_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 6))
    }
    fn set_agent() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn add_qualifier() -> Weight {
        Weight::from_parts(20_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn remove_qualifier() -> Weight {
        Weight::from_parts(20_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 3))
    }
    fn add() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(4, 3))
    }
    fn remove() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn add_token() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(4, 3))
    }
    fn remove_token() -> Weight {
        Weight::from_parts(22_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 3))
    }
    fn set_whitelist_type() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn pause() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn unpause() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    /// `t`: live tokens on a token whitelist. Investor whitelists cost `verify(0)`.
    fn verify(t: u32) -> Weight {
        Weight::from_parts(6_000_000, 3_500)
            .saturating_add(Weight::from_parts(4_000_000, 2_600).saturating_mul(t.into()))
            .saturating_add(RocksDbWeight::get().reads(2))
            .saturating_add(RocksDbWeight::get().reads((2_u64).saturating_mul(t.into())))
    }
}
