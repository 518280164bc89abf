//! Core domain types for the single-coach reservation engine.
//!
//! This crate provides the fundamental types shared across the reservation
//! system:
//! - [`Passenger`], [`Gender`], [`PriorityClass`]: passenger records and their
//!   classification for berth preference.
//! - [`Berth`], [`BerthType`], [`BerthId`]: the fixed inventory of sleeping
//!   positions.
//! - [`Ticket`], [`TicketStatus`]: the booking record and its lifecycle.
//! - [`PassengerId`], [`TicketId`]: monotonic identifiers for the two entity
//!   tables.

pub mod berth;
pub mod ids;
pub mod passenger;
pub mod ticket;

pub use berth::{Berth, BerthId, BerthType};
pub use ids::{PassengerId, TicketId};
pub use passenger::{Gender, Passenger, PriorityClass};
pub use ticket::{Ticket, TicketStatus};
