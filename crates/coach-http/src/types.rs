//! JSON request/response shapes for the five operations of §6.

use coach_core::{BerthType, Gender, TicketStatus};
use coach_engine::{AvailableView, BookedView, PassengerInput, PassengerView, TicketView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend_ok: bool,
}

#[derive(Debug, Deserialize)]
pub struct PassengerRequest {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    #[serde(default)]
    pub is_parent: bool,
    #[serde(default)]
    pub parent_identifier: Option<String>,
}

impl From<PassengerRequest> for PassengerInput {
    fn from(p: PassengerRequest) -> Self {
        PassengerInput {
            name: p.name,
            age: p.age,
            gender: p.gender,
            is_parent: p.is_parent,
            parent_identifier: p.parent_identifier,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub passengers: Vec<PassengerRequest>,
}

#[derive(Debug, Serialize)]
pub struct PassengerResponse {
    pub id: u64,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
    pub berth: Option<BerthResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rac_position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waiting_position: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct BerthResponse {
    pub berth_type: BerthType,
    pub index: u32,
}

impl From<&PassengerView> for PassengerResponse {
    fn from(p: &PassengerView) -> Self {
        Self {
            id: p.id.get(),
            name: p.name.clone(),
            age: p.age,
            gender: p.gender,
            berth: p.berth.map(|b| BerthResponse {
                berth_type: b.berth_type,
                index: b.index,
            }),
            rac_position: p.rac_position,
            waiting_position: p.waiting_position,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub ticket_id: u64,
    pub status: TicketStatus,
    pub booking_time: u64,
    pub passengers: Vec<PassengerResponse>,
}

impl From<&TicketView> for TicketResponse {
    fn from(t: &TicketView) -> Self {
        Self {
            ticket_id: t.id.get(),
            status: t.status,
            booking_time: t.booking_time,
            passengers: t.passengers.iter().map(PassengerResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AvailableBerthsResponse {
    pub lower: usize,
    pub middle: usize,
    pub upper: usize,
    pub side_lower: usize,
}

#[derive(Debug, Serialize)]
pub struct AvailableResponse {
    pub confirmed_available: usize,
    pub rac_available: usize,
    pub waiting_list_available: usize,
    pub available_berths: AvailableBerthsResponse,
}

impl From<AvailableView> for AvailableResponse {
    fn from(v: AvailableView) -> Self {
        Self {
            confirmed_available: v.confirmed_available,
            rac_available: v.rac_available,
            waiting_list_available: v.waiting_list_available,
            available_berths: AvailableBerthsResponse {
                lower: v.available_berths.lower,
                middle: v.available_berths.middle,
                upper: v.available_berths.upper,
                side_lower: v.available_berths.side_lower,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookedSummaryResponse {
    pub confirmed_count: usize,
    pub rac_count: usize,
    pub waiting_count: usize,
}

#[derive(Debug, Serialize)]
pub struct BookedResponse {
    pub confirmed: Vec<TicketResponse>,
    pub rac: Vec<TicketResponse>,
    pub waiting: Vec<TicketResponse>,
    pub summary: BookedSummaryResponse,
}

impl From<BookedView> for BookedResponse {
    fn from(v: BookedView) -> Self {
        Self {
            confirmed: v.confirmed.iter().map(TicketResponse::from).collect(),
            rac: v.rac.iter().map(TicketResponse::from).collect(),
            waiting: v.waiting.iter().map(TicketResponse::from).collect(),
            summary: BookedSummaryResponse {
                confirmed_count: v.summary.confirmed_count,
                rac_count: v.summary.rac_count,
                waiting_count: v.summary.waiting_count,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}
