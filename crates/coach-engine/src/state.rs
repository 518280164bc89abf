//! The reservation state: Inventory, both queues, and the ticket/passenger
//! tables, all owned by one struct (§4.5). `Coordinator` wraps this behind
//! a single `parking_lot::Mutex`; nothing outside this crate touches it
//! unlocked.

use coach_core::{BerthType, Passenger, PassengerId, Ticket, TicketId, TicketStatus};
use coach_inventory::{CapacityConfig, Inventory};
use coach_queue::PositionQueue;
use std::collections::HashMap;

/// Configured sizes for the two overflow queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    pub rac_capacity: usize,
    pub waiting_capacity: usize,
}

impl QueueConfig {
    pub fn from_capacity(capacity: &CapacityConfig, waiting_capacity: usize) -> Self {
        Self {
            rac_capacity: capacity.rac_capacity() as usize,
            waiting_capacity,
        }
    }
}

pub struct ReservationState {
    pub inventory: Inventory,
    pub rac_queue: PositionQueue,
    pub waiting_queue: PositionQueue,
    pub tickets: HashMap<TicketId, Ticket>,
    pub passengers: HashMap<PassengerId, Passenger>,
    next_passenger_id: u64,
    next_ticket_id: u64,
    next_booking_time: u64,
}

impl ReservationState {
    pub fn new(capacity: &CapacityConfig, queues: QueueConfig) -> Self {
        Self {
            inventory: Inventory::new(capacity),
            rac_queue: PositionQueue::new(queues.rac_capacity),
            waiting_queue: PositionQueue::new(queues.waiting_capacity),
            tickets: HashMap::new(),
            passengers: HashMap::new(),
            next_passenger_id: 1,
            next_ticket_id: 1,
            next_booking_time: 1,
        }
    }

    pub fn next_passenger_id(&mut self) -> PassengerId {
        let id = PassengerId::new(self.next_passenger_id);
        self.next_passenger_id += 1;
        id
    }

    pub fn next_ticket_id(&mut self) -> TicketId {
        let id = TicketId::new(self.next_ticket_id);
        self.next_ticket_id += 1;
        id
    }

    pub fn next_booking_time(&mut self) -> u64 {
        let t = self.next_booking_time;
        self.next_booking_time += 1;
        t
    }

    pub fn confirmed_available(&self) -> usize {
        [BerthType::Lower, BerthType::Middle, BerthType::Upper]
            .iter()
            .map(|t| self.inventory.count_free(*t))
            .sum()
    }

    pub fn rac_available(&self) -> usize {
        self.rac_queue.remaining_capacity()
    }

    pub fn waiting_available(&self) -> usize {
        self.waiting_queue.remaining_capacity()
    }

    /// Recompute a ticket's status from its passengers' current placement
    /// (§3 rule: weakest of Confirmed/RAC/Waiting; a passenger with no berth
    /// and no queue entry, i.e. a child, contributes nothing).
    pub fn recompute_ticket_status(&mut self, ticket_id: TicketId) {
        let passenger_ids = match self.tickets.get(&ticket_id) {
            Some(t) if t.status != TicketStatus::Cancelled => t.passenger_ids.clone(),
            _ => return,
        };

        let mut statuses = Vec::new();
        for pid in &passenger_ids {
            let Some(passenger) = self.passengers.get(pid) else { continue };
            if passenger.is_child() {
                continue;
            }
            match passenger.berth_assignment {
                Some(b) if b.berth_type == BerthType::SideLower => statuses.push(TicketStatus::Rac),
                Some(_) => statuses.push(TicketStatus::Confirmed),
                None => statuses.push(TicketStatus::Waiting),
            }
        }

        if let Some(ticket) = self.tickets.get_mut(&ticket_id) {
            ticket.status = Ticket::weakest_of(statuses);
        }
    }
}
