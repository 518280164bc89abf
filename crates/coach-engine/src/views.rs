//! Read-only projections of the reservation state, used by both the
//! `Coordinator`'s query methods and (indirectly) the HTTP layer's JSON
//! responses.

use coach_core::{BerthId, Gender, PassengerId, TicketId, TicketStatus};

#[derive(Debug, Clone)]
pub struct PassengerView {
    pub id: PassengerId,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub berth: Option<BerthId>,
    pub rac_position: Option<u32>,
    pub waiting_position: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct TicketView {
    pub id: TicketId,
    pub status: TicketStatus,
    pub booking_time: u64,
    pub passengers: Vec<PassengerView>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AvailableBerths {
    pub lower: usize,
    pub middle: usize,
    pub upper: usize,
    pub side_lower: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AvailableView {
    pub confirmed_available: usize,
    pub rac_available: usize,
    pub waiting_list_available: usize,
    pub available_berths: AvailableBerths,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BookedSummary {
    pub confirmed_count: usize,
    pub rac_count: usize,
    pub waiting_count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BookedView {
    pub confirmed: Vec<TicketView>,
    pub rac: Vec<TicketView>,
    pub waiting: Vec<TicketView>,
    pub summary: BookedSummary,
}
