//! A single queue slot.

use coach_core::{PassengerId, TicketId};

/// One passenger's place in the RAC or Waiting queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub ticket_id: TicketId,
    pub passenger_id: PassengerId,
}

impl QueueEntry {
    pub fn new(ticket_id: TicketId, passenger_id: PassengerId) -> Self {
        Self { ticket_id, passenger_id }
    }
}
