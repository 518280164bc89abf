//! Server bootstrap for the single-coach reservation engine: loads
//! configuration, initializes structured logging, constructs the shared
//! reservation state, and starts the HTTP listener.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
