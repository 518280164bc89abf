//! The single-lock entry point (§4.5): every mutating operation runs to
//! completion inside one `parking_lot::Mutex` acquisition. No I/O, no
//! `.await`, happens while the lock is held.

use crate::allocator::{assign_confirmed, assign_rac_slots};
use crate::canceller;
use crate::error::{EngineError, Result};
use crate::request::PassengerInput;
use crate::state::{QueueConfig, ReservationState};
use crate::validation::validate_group;
use crate::views::{AvailableBerths, AvailableView, BookedSummary, BookedView, PassengerView, TicketView};
use coach_core::{BerthId, BerthType, Passenger, PassengerId, Ticket, TicketId, TicketStatus};
use coach_inventory::CapacityConfig;
use coach_queue::QueueEntry;
use parking_lot::Mutex;
use tracing::{info, warn};

pub struct Coordinator {
    state: Mutex<ReservationState>,
}

impl Coordinator {
    pub fn new(capacity: CapacityConfig, waiting_capacity: usize) -> Self {
        let queues = QueueConfig::from_capacity(&capacity, waiting_capacity);
        Self {
            state: Mutex::new(ReservationState::new(&capacity, queues)),
        }
    }

    /// Book a group of passengers. Tries Confirmed, then RAC, then Waiting,
    /// in that order; fails with `NoAvailability` only if all three reject.
    /// All state mutation for a rejected path is rolled back before this
    /// returns `Err` (§7 propagation policy).
    pub fn book(&self, group: Vec<PassengerInput>) -> Result<TicketView> {
        let non_child_count = validate_group(&group)?;
        let mut state = self.state.lock();

        let mut passengers: Vec<Passenger> = group
            .into_iter()
            .map(|input| {
                let id = state.next_passenger_id();
                Passenger::new(id, input.name, input.age, input.gender, input.is_parent, input.parent_identifier)
            })
            .collect();

        let ranked = coach_inventory::classify_group(&passengers);
        let ranked_ids: Vec<PassengerId> = ranked.iter().map(|(id, _)| *id).collect();

        enum Path {
            Confirmed(Vec<(PassengerId, BerthId)>),
            Rac(Vec<(PassengerId, BerthId)>),
            Waiting,
        }

        let path = if state.confirmed_available() >= non_child_count {
            Path::Confirmed(assign_confirmed(&mut state.inventory, &ranked_ids)?)
        } else if state.inventory.side_lower_free_slots() >= non_child_count {
            Path::Rac(assign_rac_slots(&mut state.inventory, &ranked_ids)?)
        } else if state.waiting_queue.remaining_capacity() >= non_child_count {
            Path::Waiting
        } else {
            warn!(group_size = non_child_count, "booking rejected: no availability");
            return Err(EngineError::NoAvailability);
        };

        let ticket_id = state.next_ticket_id();
        let booking_time = state.next_booking_time();
        let status;

        match &path {
            Path::Confirmed(assigned) => {
                status = TicketStatus::Confirmed;
                apply_assignments(&mut passengers, assigned);
            }
            Path::Rac(assigned) => {
                status = TicketStatus::Rac;
                apply_assignments(&mut passengers, assigned);
                for pid in &ranked_ids {
                    state.rac_queue.push_back(QueueEntry::new(ticket_id, *pid));
                }
            }
            Path::Waiting => {
                status = TicketStatus::Waiting;
                for pid in &ranked_ids {
                    state.waiting_queue.push_back(QueueEntry::new(ticket_id, *pid));
                }
            }
        }

        let passenger_ids: Vec<PassengerId> = passengers.iter().map(|p| p.id).collect();
        for p in passengers {
            state.passengers.insert(p.id, p);
        }
        let ticket = Ticket::new(ticket_id, booking_time, passenger_ids, status);
        state.tickets.insert(ticket_id, ticket);

        info!(ticket_id = ticket_id.get(), status = ?status, "booking accepted");
        Ok(self.render_ticket(&state, ticket_id).expect("ticket was just inserted"))
    }

    pub fn cancel(&self, ticket_id: TicketId) -> Result<()> {
        let mut state = self.state.lock();
        canceller::cancel(&mut state, ticket_id)
    }

    pub fn available(&self) -> AvailableView {
        let state = self.state.lock();
        AvailableView {
            confirmed_available: state.confirmed_available(),
            rac_available: state.rac_available(),
            waiting_list_available: state.waiting_available(),
            available_berths: AvailableBerths {
                lower: state.inventory.count_free(BerthType::Lower),
                middle: state.inventory.count_free(BerthType::Middle),
                upper: state.inventory.count_free(BerthType::Upper),
                side_lower: state.inventory.count_free(BerthType::SideLower),
            },
        }
    }

    pub fn booked(&self) -> BookedView {
        let state = self.state.lock();
        let mut view = BookedView::default();
        let mut ticket_ids: Vec<TicketId> = state.tickets.keys().copied().collect();
        ticket_ids.sort();
        for ticket_id in ticket_ids {
            let Some(ticket) = state.tickets.get(&ticket_id) else { continue };
            match ticket.status {
                TicketStatus::Confirmed => {
                    view.summary.confirmed_count += 1;
                    view.confirmed.push(self.render_ticket(&state, ticket_id).unwrap());
                }
                TicketStatus::Rac => {
                    view.summary.rac_count += 1;
                    view.rac.push(self.render_ticket(&state, ticket_id).unwrap());
                }
                TicketStatus::Waiting => {
                    view.summary.waiting_count += 1;
                    view.waiting.push(self.render_ticket(&state, ticket_id).unwrap());
                }
                TicketStatus::Cancelled => {}
            }
        }
        view
    }

    fn render_ticket(&self, state: &ReservationState, ticket_id: TicketId) -> Option<TicketView> {
        let ticket = state.tickets.get(&ticket_id)?;
        let passengers = ticket
            .passenger_ids
            .iter()
            .filter_map(|pid| state.passengers.get(pid))
            .map(|p| PassengerView {
                id: p.id,
                name: p.name.clone(),
                age: p.age,
                gender: p.gender,
                berth: p.berth_assignment,
                rac_position: state.rac_queue.position_of(p.id),
                waiting_position: state.waiting_queue.position_of(p.id),
            })
            .collect();
        Some(TicketView {
            id: ticket.id,
            status: ticket.status,
            booking_time: ticket.booking_time,
            passengers,
        })
    }
}

fn apply_assignments(passengers: &mut [Passenger], assigned: &[(PassengerId, BerthId)]) {
    for (pid, berth) in assigned {
        if let Some(p) = passengers.iter_mut().find(|p| p.id == *pid) {
            p.berth_assignment = Some(*berth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::Gender;

    fn passenger(name: &str, age: i32, gender: Gender) -> PassengerInput {
        PassengerInput {
            name: name.to_string(),
            age,
            gender,
            is_parent: false,
            parent_identifier: None,
        }
    }

    fn small_coordinator() -> Coordinator {
        let capacity = CapacityConfig {
            lower: 1,
            middle: 0,
            upper: 0,
            side_lower: 1,
        };
        Coordinator::new(capacity, 1)
    }

    #[test]
    fn senior_gets_lower_berth() {
        let c = Coordinator::new(CapacityConfig::default(), 10);
        let ticket = c.book(vec![passenger("Alice", 65, Gender::Female)]).unwrap();
        assert_eq!(ticket.status, TicketStatus::Confirmed);
        let p = &ticket.passengers[0];
        assert_eq!(p.berth.unwrap().berth_type, BerthType::Lower);
        assert_eq!(p.berth.unwrap().index, 0);
    }

    #[test]
    fn lady_with_child_consumes_one_berth() {
        let c = Coordinator::new(CapacityConfig::default(), 10);
        let mut mary = passenger("Mary", 32, Gender::Female);
        mary.is_parent = true;
        mary.parent_identifier = Some("family2".to_string());
        let mut kid = passenger("Kid", 4, Gender::Male);
        kid.parent_identifier = Some("family2".to_string());

        let ticket = c.book(vec![mary, kid]).unwrap();
        assert_eq!(ticket.status, TicketStatus::Confirmed);
        assert_eq!(ticket.passengers.len(), 2);
        let mary_view = ticket.passengers.iter().find(|p| p.name == "Mary").unwrap();
        let kid_view = ticket.passengers.iter().find(|p| p.name == "Kid").unwrap();
        assert!(mary_view.berth.is_some());
        assert!(kid_view.berth.is_none());
        assert_eq!(c.available().confirmed_available, 62);
    }

    #[test]
    fn lower_exhaustion_falls_back_to_middle_without_reshuffle() {
        let capacity = CapacityConfig {
            lower: 1,
            middle: 1,
            upper: 1,
            side_lower: 1,
        };
        let c = Coordinator::new(capacity, 1);
        let first = c.book(vec![passenger("Normal", 30, Gender::Male)]).unwrap();
        assert_eq!(first.passengers[0].berth.unwrap().berth_type, BerthType::Lower);

        let senior = c.book(vec![passenger("Senior", 70, Gender::Male)]).unwrap();
        assert_eq!(senior.status, TicketStatus::Confirmed);
        assert_eq!(senior.passengers[0].berth.unwrap().berth_type, BerthType::Middle);
    }

    #[test]
    fn rac_fallback_when_confirmed_berths_are_full() {
        let capacity = CapacityConfig {
            lower: 1,
            middle: 0,
            upper: 0,
            side_lower: 1,
        };
        let c = Coordinator::new(capacity, 1);
        c.book(vec![passenger("First", 30, Gender::Male)]).unwrap();
        let ticket = c.book(vec![passenger("Second", 30, Gender::Male)]).unwrap();
        assert_eq!(ticket.status, TicketStatus::Rac);
        let p = &ticket.passengers[0];
        assert_eq!(p.berth.unwrap().berth_type, BerthType::SideLower);
        assert_eq!(p.rac_position, Some(1));
    }

    #[test]
    fn waiting_fallback_when_rac_is_full() {
        let c = small_coordinator();
        c.book(vec![passenger("Lower", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Rac1", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Rac2", 30, Gender::Male)]).unwrap();
        let ticket = c.book(vec![passenger("Waiter", 30, Gender::Male)]).unwrap();
        assert_eq!(ticket.status, TicketStatus::Waiting);
        assert_eq!(ticket.passengers[0].waiting_position, Some(1));
    }

    #[test]
    fn no_availability_when_all_three_paths_are_full() {
        let c = small_coordinator();
        c.book(vec![passenger("Lower", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Rac1", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Rac2", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Waiter", 30, Gender::Male)]).unwrap();
        let err = c.book(vec![passenger("Rejected", 30, Gender::Male)]).unwrap_err();
        assert_eq!(err, EngineError::NoAvailability);
    }

    #[test]
    fn cancellation_promotes_rac_head_to_confirmed_and_waiting_head_to_rac() {
        let c = small_coordinator();
        let lower_ticket = c.book(vec![passenger("Lower", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Rac1", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Rac2", 30, Gender::Male)]).unwrap();
        c.book(vec![passenger("Waiter", 30, Gender::Male)]).unwrap();

        c.cancel(lower_ticket.id).unwrap();

        let booked = c.booked();
        assert_eq!(booked.summary.confirmed_count, 1);
        assert_eq!(booked.summary.rac_count, 2);
        assert_eq!(booked.summary.waiting_count, 0);

        let confirmed_names: Vec<&str> = booked.confirmed[0].passengers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(confirmed_names, vec!["Rac1"]);

        let mut rac_by_position: Vec<(&str, Option<u32>)> = booked
            .rac
            .iter()
            .map(|t| (t.passengers[0].name.as_str(), t.passengers[0].rac_position))
            .collect();
        rac_by_position.sort_by_key(|(_, pos)| *pos);
        assert_eq!(rac_by_position, vec![("Rac2", Some(1)), ("Waiter", Some(2))]);
    }

    #[test]
    fn cancelling_already_cancelled_ticket_is_rejected() {
        let c = Coordinator::new(CapacityConfig::default(), 10);
        let ticket = c.book(vec![passenger("Alice", 40, Gender::Male)]).unwrap();
        c.cancel(ticket.id).unwrap();
        assert_eq!(c.cancel(ticket.id).unwrap_err(), EngineError::AlreadyCancelled);
    }

    #[test]
    fn cancelling_unknown_ticket_is_not_found() {
        let c = Coordinator::new(CapacityConfig::default(), 10);
        assert_eq!(c.cancel(TicketId::new(999)).unwrap_err(), EngineError::NotFound);
    }

    #[test]
    fn child_never_holds_a_berth() {
        let c = Coordinator::new(CapacityConfig::default(), 10);
        let mut parent = passenger("Parent", 30, Gender::Female);
        parent.parent_identifier = Some("fam".to_string());
        let mut child = passenger("Child", 2, Gender::Male);
        child.parent_identifier = Some("fam".to_string());
        let ticket = c.book(vec![parent, child]).unwrap();
        let child_view = ticket.passengers.iter().find(|p| p.name == "Child").unwrap();
        assert!(child_view.berth.is_none());
    }

    #[test]
    fn rejects_invalid_group() {
        let c = Coordinator::new(CapacityConfig::default(), 10);
        let err = c.book(vec![]).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }
}
