//! Map search session.
//!
//! Owns everything the map view tracks between events: the markers of the
//! latest results, which marker is selected, the user's position, the zoom
//! level, and the search currently in flight. Only one search runs at a
//! time; starting a new one aborts the stale one instead of waiting for it.

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, Abortable};
use tracing::debug;

use crate::domain::{GeoBounds, GeoPoint};
use crate::proximity::{MarkerSize, marker_size};

use super::PlaceSearch;
use super::error::SearchError;
use super::place::{Place, PlaceSummary, SELECTED_MARKER_ICON, category_icon, summarize};

/// Scale applied to the selected marker.
const SELECTED_SCALE: f64 = 1.2;

/// A result marker on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub place_id: String,
    pub position: GeoPoint,
    /// Category icon, restored when the marker is deselected
    pub icon: &'static str,
    /// Image currently shown
    pub image: &'static str,
    pub size: MarkerSize,
}

impl Marker {
    fn new(place: &Place, zoom_level: i32) -> Self {
        let icon = category_icon(&place.category_name);
        Self {
            place_id: place.id.clone(),
            position: place.position,
            icon,
            image: icon,
            size: marker_size(zoom_level, 1.0),
        }
    }

    fn show_default(&mut self, zoom_level: i32) {
        self.image = self.icon;
        self.size = marker_size(zoom_level, 1.0);
    }

    fn show_selected(&mut self, zoom_level: i32) {
        self.image = SELECTED_MARKER_ICON;
        self.size = marker_size(zoom_level, SELECTED_SCALE);
    }
}

/// Results of a completed search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub places: Vec<PlaceSummary>,
    /// Area that fits every result and the user, if there is anything to fit
    pub bounds: Option<GeoBounds>,
}

#[derive(Debug)]
struct SessionState {
    markers: Vec<Marker>,
    selected: Option<usize>,
    user_position: Option<GeoPoint>,
    zoom_level: i32,
    in_flight: Option<AbortHandle>,
    generation: u64,
}

/// Clears the in-flight marker when a search ends, including when its
/// future is dropped before completing.
struct InFlight<'a> {
    session: &'a MapSearchSession,
    generation: u64,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut state = self.session.lock();
        if state.generation == self.generation {
            state.in_flight = None;
        }
    }
}

/// State of one map view.
#[derive(Debug)]
pub struct MapSearchSession {
    state: Mutex<SessionState>,
}

impl MapSearchSession {
    /// Start a session at the given zoom level.
    pub fn new(zoom_level: i32) -> Self {
        Self {
            state: Mutex::new(SessionState {
                markers: Vec::new(),
                selected: None,
                user_position: None,
                zoom_level,
                in_flight: None,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_user_position(&self, position: GeoPoint) {
        self.lock().user_position = Some(position);
    }

    pub fn user_position(&self) -> Option<GeoPoint> {
        self.lock().user_position
    }

    pub fn is_searching(&self) -> bool {
        self.lock().in_flight.is_some()
    }

    /// Search for `keyword` and replace the markers with the results.
    ///
    /// A search started while this one is in flight supersedes it; this call
    /// then returns [`SearchError::Superseded`] and leaves the markers alone.
    pub async fn search(
        &self,
        keyword: &str,
        provider: &dyn PlaceSearch,
    ) -> Result<SearchOutcome, SearchError> {
        let (handle, registration) = AbortHandle::new_pair();
        let generation = {
            let mut state = self.lock();
            if let Some(stale) = state.in_flight.replace(handle) {
                debug!(keyword, "superseding in-flight search");
                stale.abort();
            }
            state.generation += 1;
            state.generation
        };
        let in_flight = InFlight {
            session: self,
            generation,
        };

        let outcome = Abortable::new(provider.search(keyword), registration).await;
        drop(in_flight);

        let mut state = self.lock();
        if state.generation != generation {
            return Err(SearchError::Superseded);
        }

        let places = outcome.map_err(|_| SearchError::Superseded)??;
        debug!(keyword, count = places.len(), "search finished");

        let zoom = state.zoom_level;
        state.markers = places.iter().map(|p| Marker::new(p, zoom)).collect();
        state.selected = None;

        let user = state.user_position;
        let bounds = GeoBounds::from_points(places.iter().map(|p| p.position).chain(user));

        Ok(SearchOutcome {
            places: summarize(places, user),
            bounds,
        })
    }

    /// Select the marker at `index`.
    ///
    /// The previously selected marker goes back to its category icon. Returns
    /// the indices whose appearance changed, or `None` for an unknown index.
    pub fn select_marker(&self, index: usize) -> Option<Vec<usize>> {
        let mut state = self.lock();
        if index >= state.markers.len() {
            return None;
        }

        let zoom = state.zoom_level;
        let mut changed = Vec::with_capacity(2);
        if let Some(previous) = state.selected.take()
            && previous != index
        {
            state.markers[previous].show_default(zoom);
            changed.push(previous);
        }
        state.markers[index].show_selected(zoom);
        state.selected = Some(index);
        changed.push(index);
        Some(changed)
    }

    pub fn selected_marker(&self) -> Option<Marker> {
        let state = self.lock();
        state.selected.map(|i| state.markers[i].clone())
    }

    /// Resize every marker for a new zoom level.
    pub fn set_zoom_level(&self, zoom_level: i32) {
        let mut state = self.lock();
        state.zoom_level = zoom_level;
        let selected = state.selected;
        for (i, marker) in state.markers.iter_mut().enumerate() {
            if selected == Some(i) {
                marker.show_selected(zoom_level);
            } else {
                marker.show_default(zoom_level);
            }
        }
    }

    /// Snapshot of the current markers.
    pub fn markers(&self) -> Vec<Marker> {
        self.lock().markers.clone()
    }

    /// Remove all markers and the selection.
    pub fn clear_markers(&self) {
        let mut state = self.lock();
        state.markers.clear();
        state.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::error::PlaceSearchError;
    use crate::search::place::tests::place;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::oneshot;

    /// Provider answering from a fixed table.
    struct FixedProvider(HashMap<&'static str, Vec<Place>>);

    #[async_trait]
    impl PlaceSearch for FixedProvider {
        async fn search(&self, keyword: &str) -> Result<Vec<Place>, PlaceSearchError> {
            self.0
                .get(keyword)
                .cloned()
                .ok_or_else(|| PlaceSearchError::Api {
                    status: 400,
                    message: format!("unknown keyword {keyword}"),
                })
        }
    }

    /// Provider whose answers are released by the test.
    struct GatedProvider {
        gates: Mutex<HashMap<String, oneshot::Receiver<Vec<Place>>>>,
    }

    #[async_trait]
    impl PlaceSearch for GatedProvider {
        async fn search(&self, keyword: &str) -> Result<Vec<Place>, PlaceSearchError> {
            let gate = self.gates.lock().unwrap().remove(keyword);
            match gate {
                Some(rx) => Ok(rx.await.unwrap_or_default()),
                None => Ok(Vec::new()),
            }
        }
    }

    fn fixed() -> FixedProvider {
        let mut table = HashMap::new();
        table.insert(
            "돈까스",
            vec![
                place("a", "음식점 > 일식 > 돈까스", 37.60, 127.02),
                place("b", "음식점 > 한식", 37.61, 127.03),
                place("c", "음식점 > 중식", 37.59, 127.01),
            ],
        );
        table.insert("빈", Vec::new());
        FixedProvider(table)
    }

    #[tokio::test]
    async fn search_populates_markers() {
        let session = MapSearchSession::new(10);
        let outcome = session.search("돈까스", &fixed()).await.unwrap();

        assert_eq!(outcome.places.len(), 3);
        let markers = session.markers();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[1].icon, "/static/img/kor_food.png");
        assert_eq!(markers[1].size, marker_size(10, 1.0));
        assert!(!session.is_searching());
    }

    #[tokio::test]
    async fn bounds_include_user_position() {
        let session = MapSearchSession::new(10);
        let user = GeoPoint::new(37.50, 127.10).unwrap();
        session.set_user_position(user);

        let outcome = session.search("돈까스", &fixed()).await.unwrap();
        let bounds = outcome.bounds.unwrap();
        assert!(bounds.contains(user));
        assert_eq!(bounds.south_west.latitude(), 37.50);
        assert_eq!(bounds.north_east.latitude(), 37.61);
        assert_ne!(outcome.places[0].walking_time, "알 수 없음");
    }

    #[tokio::test]
    async fn empty_results_have_no_bounds() {
        let session = MapSearchSession::new(10);
        let outcome = session.search("빈", &fixed()).await.unwrap();
        assert!(outcome.places.is_empty());
        assert!(outcome.bounds.is_none());
    }

    #[tokio::test]
    async fn new_search_replaces_markers_and_selection() {
        let session = MapSearchSession::new(10);
        session.search("돈까스", &fixed()).await.unwrap();
        session.select_marker(0).unwrap();

        session.search("빈", &fixed()).await.unwrap();
        assert!(session.markers().is_empty());
        assert!(session.selected_marker().is_none());
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let session = MapSearchSession::new(10);
        let err = session.search("없는 키워드", &fixed()).await.unwrap_err();
        assert!(matches!(err, SearchError::Provider(PlaceSearchError::Api { .. })));
        assert!(!session.is_searching());
    }

    #[tokio::test]
    async fn newer_search_supersedes_stale_one() {
        let (tx_old, rx_old) = oneshot::channel();
        let (tx_new, rx_new) = oneshot::channel();
        let provider = GatedProvider {
            gates: Mutex::new(HashMap::from([
                ("old".to_string(), rx_old),
                ("new".to_string(), rx_new),
            ])),
        };
        let session = MapSearchSession::new(10);

        let mut stale = Box::pin(session.search("old", &provider));
        assert!(futures::poll!(stale.as_mut()).is_pending());
        assert!(session.is_searching());

        tx_new
            .send(vec![place("fresh", "음식점 > 양식", 37.6, 127.0)])
            .unwrap();
        let fresh = session.search("new", &provider).await.unwrap();
        assert_eq!(fresh.places[0].place.id, "fresh");

        let _ = tx_old.send(vec![place("stale", "", 37.6, 127.0)]);
        let err = stale.await.unwrap_err();
        assert!(matches!(err, SearchError::Superseded));

        let markers = session.markers();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].place_id, "fresh");
    }

    #[tokio::test]
    async fn dropped_search_is_no_longer_in_flight() {
        let (_tx, rx) = oneshot::channel();
        let provider = GatedProvider {
            gates: Mutex::new(HashMap::from([("slow".to_string(), rx)])),
        };
        let session = MapSearchSession::new(10);

        let mut pending = Box::pin(session.search("slow", &provider));
        assert!(futures::poll!(pending.as_mut()).is_pending());
        assert!(session.is_searching());

        drop(pending);
        assert!(!session.is_searching());
    }

    #[tokio::test]
    async fn select_marker_swaps_images() {
        let session = MapSearchSession::new(10);
        session.search("돈까스", &fixed()).await.unwrap();

        assert_eq!(session.select_marker(0), Some(vec![0]));
        let selected = session.selected_marker().unwrap();
        assert_eq!(selected.image, SELECTED_MARKER_ICON);
        assert_eq!(selected.size, marker_size(10, 1.2));

        assert_eq!(session.select_marker(1), Some(vec![0, 1]));
        let markers = session.markers();
        assert_eq!(markers[0].image, markers[0].icon);
        assert_eq!(markers[0].size, marker_size(10, 1.0));
        assert_eq!(markers[1].image, SELECTED_MARKER_ICON);
    }

    #[tokio::test]
    async fn select_unknown_marker() {
        let session = MapSearchSession::new(10);
        session.search("돈까스", &fixed()).await.unwrap();
        assert_eq!(session.select_marker(3), None);
        assert!(session.selected_marker().is_none());
    }

    #[tokio::test]
    async fn zoom_resizes_markers_and_keeps_selection() {
        let session = MapSearchSession::new(10);
        session.search("돈까스", &fixed()).await.unwrap();
        session.select_marker(2).unwrap();

        session.set_zoom_level(3);
        let markers = session.markers();
        assert_eq!(markers[0].size, marker_size(3, 1.0));
        assert_eq!(markers[2].size, marker_size(3, 1.2));
        assert_eq!(markers[2].image, SELECTED_MARKER_ICON);
    }

    #[tokio::test]
    async fn clear_markers() {
        let session = MapSearchSession::new(10);
        session.search("돈까스", &fixed()).await.unwrap();
        session.select_marker(0).unwrap();
        session.clear_markers();
        assert!(session.markers().is_empty());
        assert!(session.selected_marker().is_none());
    }
}
