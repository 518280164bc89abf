//! The booking algorithm (§4.3): Confirmed → RAC → Waiting → reject.

use crate::error::{EngineError, Result};
use coach_core::{BerthId, BerthType, PassengerId};
use coach_inventory::Inventory;

/// Take the highest-preference free berth: lowest-index Lower, else
/// lowest-index Middle, else lowest-index Upper. Used both for the bulk
/// Confirmed path and for promoting a single RAC passenger.
pub fn take_confirmed_berth(inventory: &Inventory) -> Option<BerthId> {
    inventory
        .take_first_free(BerthType::Lower)
        .or_else(|| inventory.take_first_free(BerthType::Middle))
        .or_else(|| inventory.take_first_free(BerthType::Upper))
}

/// Attempt to seat every passenger in `ranked` (already priority-ordered) on
/// a confirmed berth. All-or-nothing: if a berth can't be found for some
/// passenger despite the caller's upfront capacity check, every berth
/// assigned so far in this call is released and `Internal` is returned —
/// this should be unreachable given a correct capacity precheck.
pub fn assign_confirmed(
    inventory: &mut Inventory,
    ranked: &[PassengerId],
) -> Result<Vec<(PassengerId, BerthId)>> {
    let mut assigned = Vec::with_capacity(ranked.len());
    for pid in ranked {
        match take_confirmed_berth(inventory) {
            Some(berth) => {
                inventory.occupy(berth, *pid);
                assigned.push((*pid, berth));
            }
            None => {
                for (p, b) in assigned.drain(..) {
                    inventory.release(b, p);
                }
                return Err(EngineError::Internal(
                    "confirmed allocation could not complete despite capacity check".into(),
                ));
            }
        }
    }
    Ok(assigned)
}

/// Take `count` Side-Lower slots for RAC, packing rule of §4.1. All-or-
/// nothing, mirroring `assign_confirmed`.
pub fn assign_rac_slots(
    inventory: &mut Inventory,
    ranked: &[PassengerId],
) -> Result<Vec<(PassengerId, BerthId)>> {
    let mut assigned = Vec::with_capacity(ranked.len());
    for pid in ranked {
        match inventory.take_side_lower_slot() {
            Some(berth) => {
                inventory.occupy(berth, *pid);
                assigned.push((*pid, berth));
            }
            None => {
                for (p, b) in assigned.drain(..) {
                    inventory.release(b, p);
                }
                return Err(EngineError::Internal(
                    "RAC allocation could not complete despite capacity check".into(),
                ));
            }
        }
    }
    Ok(assigned)
}
