//! Hand-counted weights for pallet-settings-storage.

#![allow(unused_parens, unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn set_issuer() -> Weight;
    fn remove_issuer() -> Weight;
    /// Any of the single-field issuer setters.
    fn set_flag() -> Weight;
    fn set_messaging_address() -> Weight;
    fn add_whitelist() -> Weight;
    fn remove_whitelist() -> Weight;
    fn add_officer() -> Weight;
    fn remove_officer() -> Weight;
    fn transfer_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    fn set_issuer() -> Weight {
        Weight::from_parts(16_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn remove_issuer() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_flag() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn set_messaging_address() -> Weight {
        Weight::from_parts(16_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    fn add_whitelist() -> Weight {
        Weight::from_parts(20_000_000, 4_000).saturating_add(T::DbWeight::get().reads_writes(5, 2))
    }
    fn remove_whitelist() -> Weight {
        Weight::from_parts(18_000_000, 4_000).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    fn add_officer() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn remove_officer() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
}

impl WeightInfo for () {
    fn set_issuer() -> Weight {
        Weight::from_parts(16_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn remove_issuer() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn set_flag() -> Weight {
        Weight::from_parts(14_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn set_messaging_address() -> Weight {
        Weight::from_parts(16_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn add_whitelist() -> Weight {
        Weight::from_parts(20_000_000, 4_000).saturating_add(RocksDbWeight::get().reads_writes(5, 2))
    }
    fn remove_whitelist() -> Weight {
        Weight::from_parts(18_000_000, 4_000).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn add_officer() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn remove_officer() -> Weight {
        Weight::from_parts(12_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(10_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
}
