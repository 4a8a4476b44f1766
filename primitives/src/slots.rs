//! Slot bookkeeping for tombstoned sets kept in storage maps.
//!
//! A set lives in a `slot -> value` map next to a `value -> slot` index and a
//! [`SlotCursor`]. Every insertion takes a fresh slot; removal deletes the map
//! entry, which reads back as a `None` tombstone, so the position of every other
//! value stays stable for callers enumerating the whole list. Only live entries
//! count against the set's capacity.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;
use sp_std::prelude::*;

#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub enum SlotError {
    /// `live` already equals the capacity.
    Full,
    /// Slot indices ran past `u32::MAX`.
    Exhausted,
}

#[derive(
    Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct SlotCursor {
    /// Slot handed out by the next insertion. Every slot below it was used once.
    pub next: u32,
    /// Slots currently holding a value.
    pub live: u32,
}

impl SlotCursor {
    /// Takes the next slot, refusing when `capacity` values are already live.
    pub fn claim(&mut self, capacity: u32) -> Result<u32, SlotError> {
        if self.live >= capacity {
            return Err(SlotError::Full);
        }
        let slot = self.next;
        self.next = slot.checked_add(1).ok_or(SlotError::Exhausted)?;
        self.live += 1;
        Ok(slot)
    }

    /// Records that one live slot was tombstoned.
    pub fn release(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    /// Expands live `(slot, value)` pairs into the full slot list, tombstones as `None`.
    pub fn expand<V>(&self, live: impl IntoIterator<Item = (u32, V)>) -> Vec<Option<V>> {
        let mut slots: Vec<Option<V>> = (0..self.next).map(|_| None).collect();
        for (slot, value) in live {
            if let Some(entry) = slots.get_mut(slot as usize) {
                *entry = Some(value);
            }
        }
        slots
    }
}

/// Live values in slot order. Storage maps iterate in hash order.
pub fn in_slot_order<V>(live: impl IntoIterator<Item = (u32, V)>) -> Vec<V> {
    let mut pairs: Vec<(u32, V)> = live.into_iter().collect();
    pairs.sort_by_key(|(slot, _)| *slot);
    pairs.into_iter().map(|(_, value)| value).collect()
}
