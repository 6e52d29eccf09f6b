//! Application state for the web layer.

use std::sync::Arc;

use crate::calendar::AvailabilityCalendar;
use crate::search::{PlaceSearch, SessionRegistry};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Reservation calendar
    pub calendar: AvailabilityCalendar,

    /// Place search provider; `None` disables place search
    pub places: Option<Arc<dyn PlaceSearch>>,

    /// Map search sessions, one per map view
    pub sessions: SessionRegistry,
}

impl AppState {
    /// Create a new app state without place search.
    pub fn new(calendar: AvailabilityCalendar) -> Self {
        Self {
            calendar,
            places: None,
            sessions: SessionRegistry::default(),
        }
    }

    /// Enable place search through `provider`.
    pub fn with_places(mut self, provider: Arc<dyn PlaceSearch>) -> Self {
        self.places = Some(provider);
        self
    }
}
