pub mod config;
pub mod error;
pub mod middleware;
pub mod server;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use error::{ApiError, ErrorResponse, HttpError};
pub use server::{build_app, serve, write_openapi};
pub use telemetry::init_tracing;
