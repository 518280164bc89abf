//! The fixed pool of berths (§4.1).
//!
//! `Inventory` only tracks occupancy; it never decides who gets a berth or
//! in what order passengers are considered. Callers (the Allocator) own that
//! policy and call `take_first_free` / `take_side_lower_slot` once they've
//! already picked a passenger.

use crate::config::CapacityConfig;
use coach_core::{Berth, BerthId, BerthType, PassengerId};
use std::collections::HashMap;

/// All berths, partitioned by category.
pub struct Inventory {
    berths: HashMap<BerthType, Vec<Berth>>,
}

impl Inventory {
    /// Build an empty pool sized per `config`.
    pub fn new(config: &CapacityConfig) -> Self {
        let mut berths = HashMap::new();
        for berth_type in BerthType::ALL {
            let count = match berth_type {
                BerthType::Lower => config.lower,
                BerthType::Middle => config.middle,
                BerthType::Upper => config.upper,
                BerthType::SideLower => config.side_lower,
            };
            let pool = (0..count)
                .map(|index| Berth::new(BerthId::new(berth_type, index)))
                .collect();
            berths.insert(berth_type, pool);
        }
        Self { berths }
    }

    fn pool(&self, berth_type: BerthType) -> &[Berth] {
        self.berths.get(&berth_type).map(Vec::as_slice).unwrap_or(&[])
    }

    fn pool_mut(&mut self, berth_type: BerthType) -> &mut Vec<Berth> {
        self.berths.entry(berth_type).or_default()
    }

    /// Number of berths in `berth_type` with at least one free slot.
    pub fn count_free(&self, berth_type: BerthType) -> usize {
        self.pool(berth_type).iter().filter(|b| b.is_free()).count()
    }

    /// Lowest-index berth in `berth_type` with a free slot, if any.
    pub fn take_first_free(&self, berth_type: BerthType) -> Option<BerthId> {
        self.pool(berth_type).iter().find(|b| b.is_free()).map(|b| b.id)
    }

    /// Seat `passenger` on `berth`. Caller must have just obtained `berth`
    /// from `take_first_free` / `take_side_lower_slot` without an
    /// intervening mutation.
    pub fn occupy(&mut self, berth: BerthId, passenger: PassengerId) {
        let pool = self.pool_mut(berth.berth_type);
        if let Some(b) = pool.get_mut(berth.index as usize) {
            b.occupy(passenger);
        }
    }

    /// Release `passenger` from `berth`. Returns `false` if the passenger
    /// was not seated there (§7, Internal error — callers should treat this
    /// as a broken invariant, not a user-facing failure).
    pub fn release(&mut self, berth: BerthId, passenger: PassengerId) -> bool {
        let pool = self.pool_mut(berth.berth_type);
        match pool.get_mut(berth.index as usize) {
            Some(b) => b.release(passenger),
            None => false,
        }
    }

    /// Total free RAC slots across the Side-Lower pool (sum of `2 -
    /// occupants` per berth).
    pub fn side_lower_free_slots(&self) -> usize {
        self.pool(BerthType::SideLower).iter().map(Berth::free_slots).sum()
    }

    /// Pick a Side-Lower slot for a new RAC passenger.
    ///
    /// Prefers a berth that already has one occupant over a fully empty
    /// one, so RAC passengers pack densely into half-full berths before a
    /// new berth is opened; within a tier, lowest index first.
    pub fn take_side_lower_slot(&self) -> Option<BerthId> {
        let pool = self.pool(BerthType::SideLower);
        pool.iter()
            .filter(|b| b.is_free() && !b.is_empty())
            .min_by_key(|b| b.id.index)
            .or_else(|| pool.iter().filter(|b| b.is_free()).min_by_key(|b| b.id.index))
            .map(|b| b.id)
    }

    #[cfg(test)]
    pub(crate) fn occupants_of(&self, berth: BerthId) -> &[PassengerId] {
        self.pool(berth.berth_type)[berth.index as usize].occupants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> CapacityConfig {
        CapacityConfig {
            lower: 2,
            middle: 2,
            upper: 2,
            side_lower: 2,
        }
    }

    #[test]
    fn take_first_free_is_lowest_index() {
        let mut inv = Inventory::new(&cfg());
        let b0 = inv.take_first_free(BerthType::Lower).unwrap();
        assert_eq!(b0.index, 0);
        inv.occupy(b0, PassengerId::new(1));
        let b1 = inv.take_first_free(BerthType::Lower).unwrap();
        assert_eq!(b1.index, 1);
    }

    #[test]
    fn count_free_decreases_as_berths_fill() {
        let mut inv = Inventory::new(&cfg());
        assert_eq!(inv.count_free(BerthType::Lower), 2);
        let b0 = inv.take_first_free(BerthType::Lower).unwrap();
        inv.occupy(b0, PassengerId::new(1));
        assert_eq!(inv.count_free(BerthType::Lower), 1);
    }

    #[test]
    fn side_lower_prefers_half_full_berth_over_empty() {
        let mut inv = Inventory::new(&cfg());
        let first = inv.take_side_lower_slot().unwrap();
        assert_eq!(first.index, 0);
        inv.occupy(first, PassengerId::new(1));

        // Berth 0 now has one occupant; the next slot should fill it before
        // opening berth 1.
        let second = inv.take_side_lower_slot().unwrap();
        assert_eq!(second.index, 0);
        inv.occupy(second, PassengerId::new(2));

        let third = inv.take_side_lower_slot().unwrap();
        assert_eq!(third.index, 1);
    }

    #[test]
    fn side_lower_free_slots_counts_individual_seats() {
        let mut inv = Inventory::new(&cfg());
        assert_eq!(inv.side_lower_free_slots(), 4);
        let b = inv.take_side_lower_slot().unwrap();
        inv.occupy(b, PassengerId::new(1));
        assert_eq!(inv.side_lower_free_slots(), 3);
    }

    #[test]
    fn release_frees_the_slot_for_reuse() {
        let mut inv = Inventory::new(&cfg());
        let b0 = inv.take_first_free(BerthType::Upper).unwrap();
        inv.occupy(b0, PassengerId::new(7));
        assert!(inv.release(b0, PassengerId::new(7)));
        assert_eq!(inv.count_free(BerthType::Upper), 2);
    }

    #[test]
    fn release_of_absent_passenger_fails() {
        let mut inv = Inventory::new(&cfg());
        let b0 = inv.take_first_free(BerthType::Lower).unwrap();
        inv.occupy(b0, PassengerId::new(7));
        assert!(!inv.release(b0, PassengerId::new(99)));
    }
}
