//! Cancellation and the RAC/Waiting promotion cascade (§4.4).

use crate::allocator::take_confirmed_berth;
use crate::error::{EngineError, Result};
use crate::state::ReservationState;
use coach_core::{BerthType, TicketId, TicketStatus};
use coach_queue::QueueEntry;
use tracing::{info, warn};

/// Cancel `ticket_id`: release every berth/queue slot its passengers hold,
/// then run the promotion cascade until both queues are stable again.
pub fn cancel(state: &mut ReservationState, ticket_id: TicketId) -> Result<()> {
    let ticket = match state.tickets.get(&ticket_id) {
        Some(t) => t.clone(),
        None => {
            warn!(ticket_id = ticket_id.get(), "cancel: ticket not found");
            return Err(EngineError::NotFound);
        }
    };
    if ticket.status == TicketStatus::Cancelled {
        warn!(ticket_id = ticket_id.get(), "cancel: already cancelled");
        return Err(EngineError::AlreadyCancelled);
    }

    let mut confirmed_released = 0usize;

    for pid in &ticket.passenger_ids {
        let Some(passenger) = state.passengers.get_mut(pid) else { continue };
        if passenger.is_child() {
            continue;
        }
        if let Some(berth) = passenger.berth_assignment.take() {
            if !state.inventory.release(berth, *pid) {
                return Err(EngineError::Internal(format!(
                    "passenger {pid} was recorded on berth {berth} but the berth did not hold them"
                )));
            }
            if berth.berth_type == BerthType::SideLower {
                state.rac_queue.remove_passenger(*pid);
            } else {
                confirmed_released += 1;
            }
        } else {
            state.waiting_queue.remove_passenger(*pid);
        }
    }

    if let Some(t) = state.tickets.get_mut(&ticket_id) {
        t.status = TicketStatus::Cancelled;
    }

    promote(state, confirmed_released);

    info!(ticket_id = ticket_id.get(), "cancelled, promotion cascade complete");
    Ok(())
}

/// Steps 3-4 of §4.4: RAC → Confirmed while confirmed slots just opened,
/// then Waiting → RAC while Side-Lower slots are free. Runs strictly in
/// queue order; priority never re-enters here.
fn promote(state: &mut ReservationState, mut confirmed_slots: usize) {
    while confirmed_slots > 0 {
        let Some(QueueEntry { ticket_id, passenger_id }) = state.rac_queue.pop_front() else {
            break;
        };
        let Some(passenger) = state.passengers.get(&passenger_id) else {
            continue;
        };
        let old_berth = passenger.berth_assignment;
        if let Some(b) = old_berth {
            state.inventory.release(b, passenger_id);
        }

        match take_confirmed_berth(&state.inventory) {
            Some(new_berth) => {
                state.inventory.occupy(new_berth, passenger_id);
                if let Some(p) = state.passengers.get_mut(&passenger_id) {
                    p.berth_assignment = Some(new_berth);
                }
                confirmed_slots -= 1;
                state.recompute_ticket_status(ticket_id);
            }
            None => {
                // No confirmed berth actually available: put the slot back
                // and stop promoting (should not happen if confirmed_slots
                // accounting is correct, but never leave the passenger
                // without their original seat).
                if let Some(b) = old_berth {
                    state.inventory.occupy(b, passenger_id);
                }
                state.rac_queue.push_back(QueueEntry::new(ticket_id, passenger_id));
                break;
            }
        }
    }

    while state.inventory.side_lower_free_slots() > 0 {
        let Some(QueueEntry { ticket_id, passenger_id }) = state.waiting_queue.pop_front() else {
            break;
        };
        match state.inventory.take_side_lower_slot() {
            Some(berth) => {
                state.inventory.occupy(berth, passenger_id);
                if let Some(p) = state.passengers.get_mut(&passenger_id) {
                    p.berth_assignment = Some(berth);
                }
                state.rac_queue.push_back(QueueEntry::new(ticket_id, passenger_id));
                state.recompute_ticket_status(ticket_id);
            }
            None => {
                state.waiting_queue.push_back(QueueEntry::new(ticket_id, passenger_id));
                break;
            }
        }
    }
}
