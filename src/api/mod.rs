//! HTTP front door.
//!
//! # Endpoints
//!
//! - `GET /languages` - Supported language codes; issues the `display_user_id` cookie
//! - `GET /display/{lang_code}?text=...&punctuation=...` - ITN, optionally followed by punctuation
//! - `GET /health` - Liveness check

pub mod tracking;
mod error;
mod handlers;
mod server;
mod types;

pub use error::{ApiError, ErrorResponse};
pub use server::{cors_layer, create_router, serve};
pub use types::{parse_flag, ApiState, DisplayQuery, HealthResponse};
