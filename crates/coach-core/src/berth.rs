//! Berth identity and occupancy.
//!
//! The coach has four berth categories, each a fixed-size pool created once
//! at startup: 21 Lower, 21 Middle, 21 Upper, 9 Side-Lower. Lower/Middle/Upper
//! hold at most one occupant; Side-Lower holds at most two (it backs the RAC
//! queue, two RAC passengers sharing one physical berth).

use crate::ids::PassengerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four berth categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BerthType {
    Lower,
    Middle,
    Upper,
    SideLower,
}

impl BerthType {
    /// Maximum simultaneous occupants for this category (I1).
    pub fn capacity(&self) -> usize {
        match self {
            BerthType::SideLower => 2,
            _ => 1,
        }
    }

    pub const ALL: [BerthType; 4] = [
        BerthType::Lower,
        BerthType::Middle,
        BerthType::Upper,
        BerthType::SideLower,
    ];
}

impl fmt::Display for BerthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BerthType::Lower => write!(f, "lower"),
            BerthType::Middle => write!(f, "middle"),
            BerthType::Upper => write!(f, "upper"),
            BerthType::SideLower => write!(f, "side_lower"),
        }
    }
}

/// Identifies a single physical berth: its category and its 0-based index
/// within that category's pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BerthId {
    pub berth_type: BerthType,
    pub index: u32,
}

impl BerthId {
    pub fn new(berth_type: BerthType, index: u32) -> Self {
        Self { berth_type, index }
    }
}

impl fmt::Display for BerthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.berth_type, self.index)
    }
}

/// A physical berth and its current occupants.
///
/// `occupants` is ordered by arrival (oldest first); for Side-Lower berths
/// index 0 is the first RAC passenger seated there and index 1 the second.
#[derive(Debug, Clone)]
pub struct Berth {
    pub id: BerthId,
    occupants: Vec<PassengerId>,
}

impl Berth {
    pub fn new(id: BerthId) -> Self {
        Self {
            occupants: Vec::with_capacity(id.berth_type.capacity()),
            id,
        }
    }

    pub fn occupants(&self) -> &[PassengerId] {
        &self.occupants
    }

    pub fn is_free(&self) -> bool {
        self.occupants.len() < self.id.berth_type.capacity()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn free_slots(&self) -> usize {
        self.id.berth_type.capacity() - self.occupants.len()
    }

    /// Seat a passenger. Caller must have already checked `is_free()`.
    pub fn occupy(&mut self, passenger: PassengerId) {
        debug_assert!(self.occupants.len() < self.id.berth_type.capacity());
        self.occupants.push(passenger);
    }

    /// Remove a passenger from this berth.
    ///
    /// Returns `false` if the passenger was not seated here; the caller
    /// treats that as a broken invariant (§7, Internal error).
    pub fn release(&mut self, passenger: PassengerId) -> bool {
        if let Some(pos) = self.occupants.iter().position(|p| *p == passenger) {
            self.occupants.remove(pos);
            true
        } else {
            false
        }
    }
}
