//! Passenger records and priority classification.

use crate::berth::BerthId;
use crate::ids::PassengerId;
use serde::{Deserialize, Serialize};

/// Passenger gender, as declared on the booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Priority bucket used only for Lower-berth preference during Confirmed
/// allocation (§4.2). Never affects RAC/Waiting queue order — those are
/// strict FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriorityClass {
    /// age >= 60.
    Senior,
    /// female, and either `is_parent` or travelling with a child sharing her
    /// `parent_identifier`.
    LadyWithChild,
    Normal,
}

/// A passenger within one booking group.
///
/// Attributes other than `berth_assignment` are immutable after creation;
/// `berth_assignment` is updated by the Allocator and, later, by the
/// promotion cascade.
#[derive(Debug, Clone)]
pub struct Passenger {
    pub id: PassengerId,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub is_parent: bool,
    pub parent_identifier: Option<String>,
    pub berth_assignment: Option<BerthId>,
}

impl Passenger {
    pub fn new(
        id: PassengerId,
        name: String,
        age: i32,
        gender: Gender,
        is_parent: bool,
        parent_identifier: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            age,
            gender,
            is_parent,
            parent_identifier,
            berth_assignment: None,
        }
    }

    /// I4: children never own a berth.
    pub fn is_child(&self) -> bool {
        self.age < 5
    }

    pub fn is_senior(&self) -> bool {
        self.age >= 60
    }

    /// Classify this passenger for Lower-berth preference, given the rest of
    /// the booking group it arrived with (§4.2). Children are never
    /// classified for berth allocation — callers must filter them out first.
    pub fn priority_class(&self, group: &[Passenger]) -> PriorityClass {
        if self.is_senior() {
            return PriorityClass::Senior;
        }
        if self.gender == Gender::Female {
            let travelling_with_child = self.is_parent
                || self
                    .parent_identifier
                    .as_deref()
                    .filter(|pid| !pid.is_empty())
                    .is_some_and(|pid| {
                        group
                            .iter()
                            .any(|p| p.is_child() && p.parent_identifier.as_deref() == Some(pid))
                    });
            if travelling_with_child {
                return PriorityClass::LadyWithChild;
            }
        }
        PriorityClass::Normal
    }
}
