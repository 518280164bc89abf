//! Tickets: the booking record produced by one request.

use crate::ids::{PassengerId, TicketId};
use serde::{Deserialize, Serialize};

/// Ticket lifecycle state (§3, §4.4 state machine).
///
/// Ordered `Confirmed > Rac > Waiting` so the weakest-status rule can be
/// expressed with a plain comparison when recomputing a mixed ticket's
/// status during promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Waiting,
    Rac,
    Confirmed,
    Cancelled,
}

/// A booking's outcome: the passengers it covers and where each one of them
/// landed (confirmed berth, RAC slot, or waiting-list position).
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: TicketId,
    pub status: TicketStatus,
    /// Monotonic booking sequence number, assigned under the coordinator's
    /// lock; defines deterministic FIFO ordering for the queues (§5).
    pub booking_time: u64,
    pub passenger_ids: Vec<PassengerId>,
}

impl Ticket {
    pub fn new(id: TicketId, booking_time: u64, passenger_ids: Vec<PassengerId>, status: TicketStatus) -> Self {
        Self {
            id,
            status,
            booking_time,
            passenger_ids,
        }
    }

    /// Recompute status from per-passenger states during promotion (§4.4
    /// step 3/4): weakest status among the ticket's passengers, where
    /// Confirmed > Rac > Waiting. Does not apply to a freshly booked ticket,
    /// whose status is determined by which Allocator path accepted it.
    pub fn weakest_of(statuses: impl IntoIterator<Item = TicketStatus>) -> TicketStatus {
        statuses
            .into_iter()
            .min()
            .unwrap_or(TicketStatus::Confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weakest_status_prefers_waiting_over_rac_and_confirmed() {
        let statuses = [
            TicketStatus::Confirmed,
            TicketStatus::Rac,
            TicketStatus::Confirmed,
        ];
        assert_eq!(Ticket::weakest_of(statuses), TicketStatus::Rac);
    }

    #[test]
    fn weakest_status_all_confirmed() {
        let statuses = [TicketStatus::Confirmed, TicketStatus::Confirmed];
        assert_eq!(Ticket::weakest_of(statuses), TicketStatus::Confirmed);
    }
}
