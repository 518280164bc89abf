//! Wires configuration into a running HTTP server over a shared
//! [`coach_engine::Coordinator`].

use crate::config::AppConfig;
use crate::error::AppResult;
use coach_engine::Coordinator;
use std::sync::Arc;
use tracing::info;

pub struct Application {
    config: AppConfig,
    coordinator: Arc<Coordinator>,
}

impl Application {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let coordinator = Arc::new(Coordinator::new(config.capacity, config.waiting_capacity));
        Ok(Self { config, coordinator })
    }

    pub async fn run(self) -> AppResult<()> {
        let bind_addr = self.config.http.socket_addr();
        info!(bind_addr = %bind_addr, "starting reservation engine");
        coach_http::run_server(self.coordinator, &bind_addr)
            .await
            .map_err(|e| crate::error::AppError::Config(e.to_string()))
    }
}
