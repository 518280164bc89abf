//! HTTP+JSON surface for the reservation engine (§4.6, §6).
//!
//! Translates the five operations — health, available, booked, book,
//! cancel — into axum routes over a shared [`coach_engine::Coordinator`].
//! Owns no reservation state of its own.

pub mod config;
pub mod error;
pub mod extract;
pub mod server;
pub mod state;
pub mod types;

pub use config::HttpConfig;
pub use error::HttpError;
pub use extract::ValidatedJson;
pub use server::{create_router, run_server};
pub use state::AppState;
