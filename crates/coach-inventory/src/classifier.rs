//! Priority ordering for a single booking group (§4.2).
//!
//! Classification itself lives on [`coach_core::Passenger::priority_class`];
//! this module only orders a group for the Allocator's Lower-berth pass.

use coach_core::{Passenger, PassengerId, PriorityClass};

/// Adult passengers of `group`, ordered Senior first, then LadyWithChild,
/// then Normal. Within a class, original group order is preserved (stable
/// sort) so FIFO-adjacent passengers of equal priority keep their relative
/// order. Children are excluded — they never receive their own berth (I4).
pub fn classify_group(group: &[Passenger]) -> Vec<(PassengerId, PriorityClass)> {
    let mut ranked: Vec<(PassengerId, PriorityClass)> = group
        .iter()
        .filter(|p| !p.is_child())
        .map(|p| (p.id, p.priority_class(group)))
        .collect();
    ranked.sort_by_key(|(_, class)| *class);
    ranked
}
