//! Web layer for the restaurant finder.
//!
//! Provides JSON endpoints for proximity, marker sizing, the reservation
//! calendar and place search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
