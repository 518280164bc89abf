//! Allocation, cancellation and the single-lock reservation coordinator.
//!
//! - [`Coordinator`]: the only entry point for booking, cancellation, and
//!   status queries; owns the [`ReservationState`] behind a
//!   `parking_lot::Mutex`.
//! - [`EngineError`]: the error taxonomy surfaced at this boundary.
//! - [`PassengerInput`]: unvalidated booking request input.
//! - the `views` module: read-only projections rendered by `available`/
//!   `booked`/`book`.

pub mod allocator;
pub mod canceller;
pub mod coordinator;
pub mod error;
pub mod request;
pub mod state;
pub mod validation;
pub mod views;

pub use coordinator::Coordinator;
pub use error::{EngineError, Result};
pub use request::PassengerInput;
pub use state::{QueueConfig, ReservationState};
pub use views::{AvailableBerths, AvailableView, BookedSummary, BookedView, PassengerView, TicketView};
