//! Restaurant finder and reservation server.
//!
//! Answers two questions for a corkage-friendly restaurant page: "how far
//! is this place and how long to get there?" and "which days can I book?"

pub mod calendar;
pub mod config;
pub mod domain;
pub mod holidays;
pub mod logging;
pub mod proximity;
pub mod reservation;
pub mod search;
pub mod web;
