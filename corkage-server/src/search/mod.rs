//! Restaurant search: provider clients, result summaries and the map session.

mod error;
mod kakao;
mod link;
mod place;
mod session;
mod sessions;

use async_trait::async_trait;

pub use error::{PlaceSearchError, SearchError};
pub use kakao::{KakaoConfig, KakaoPlacesClient, PlaceDocument};
pub use link::{details_link, kakao_map_search_link};
pub use place::{
    DEFAULT_PLACE_IMAGE, Place, PlaceSummary, SELECTED_MARKER_ICON, UNKNOWN_TRAVEL_TIME,
    category_icon, summarize,
};
pub use session::{MapSearchSession, Marker, SearchOutcome};
pub use sessions::{
    ANONYMOUS_SESSION, DEFAULT_ZOOM_LEVEL, SessionRegistry, SessionRegistryConfig,
};

/// Keyword search over some place provider.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<Place>, PlaceSearchError>;
}
