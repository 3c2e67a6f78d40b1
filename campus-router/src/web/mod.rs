//! Web layer for the campus router.
//!
//! Provides HTTP endpoints for listing landmarks and planning routes.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
