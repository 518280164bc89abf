//! Unvalidated booking input, as decoded from the wire (§4.3, §7).

use coach_core::Gender;

/// One passenger as supplied in a booking request, before an id is
/// assigned and before validation.
#[derive(Debug, Clone)]
pub struct PassengerInput {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub is_parent: bool,
    pub parent_identifier: Option<String>,
}

impl PassengerInput {
    pub fn is_child(&self) -> bool {
        self.age < 5
    }
}
