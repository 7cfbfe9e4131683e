//! HTTP API module for the attrition engine.
//!
//! Serves filter options and filtered metrics for a roster loaded at startup.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::MetricsRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
