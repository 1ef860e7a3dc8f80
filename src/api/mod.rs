//! HTTP API module for the maternity calculation engine.
//!
//! This module provides the REST endpoint for running a calculation against
//! the process-wide policy registry.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::ApiError;
pub use state::AppState;
