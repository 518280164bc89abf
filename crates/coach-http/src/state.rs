//! Shared application state for axum handlers.

use coach_engine::Coordinator;
use std::sync::Arc;

/// Cheap to clone: holds only an `Arc` to the coordinator, which owns the
/// reservation lock itself. Handlers never see the lock directly.
#[derive(Clone)]
pub struct AppState {
    coordinator: Arc<Coordinator>,
}

impl AppState {
    pub fn new(coordinator: Arc<Coordinator>) -> Self {
        Self { coordinator }
    }

    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }
}
