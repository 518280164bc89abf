//! Group validation (§4.3 validation failures, §7 Validation errors).

use crate::error::{EngineError, Result};
use crate::request::PassengerInput;

pub const MAX_GROUP_SIZE: usize = 6;

/// Validate a booking group before any allocation is attempted. Returns the
/// count of non-child passengers (N) on success.
pub fn validate_group(group: &[PassengerInput]) -> Result<usize> {
    if group.is_empty() {
        return Err(EngineError::Validation("booking group must not be empty".into()));
    }

    for p in group {
        if p.name.trim().is_empty() {
            return Err(EngineError::Validation("passenger name must not be empty".into()));
        }
        if p.age < 0 {
            return Err(EngineError::Validation("passenger age must not be negative".into()));
        }
    }

    for p in group.iter().filter(|p| p.is_child()) {
        let has_matching_parent = p
            .parent_identifier
            .as_deref()
            .filter(|pid| !pid.is_empty())
            .is_some_and(|pid| {
                group
                    .iter()
                    .any(|other| !other.is_child() && other.parent_identifier.as_deref() == Some(pid))
            });
        if !has_matching_parent {
            return Err(EngineError::Validation(format!(
                "child passenger '{}' has no matching parent_identifier in the group",
                p.name
            )));
        }
    }

    let non_child_count = group.iter().filter(|p| !p.is_child()).count();
    if non_child_count == 0 || non_child_count > MAX_GROUP_SIZE {
        return Err(EngineError::Validation(format!(
            "group must contain between 1 and {MAX_GROUP_SIZE} non-child passengers, got {non_child_count}"
        )));
    }

    Ok(non_child_count)
}
