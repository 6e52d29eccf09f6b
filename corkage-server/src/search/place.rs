//! Places returned by a search and their list summaries.

use serde::Serialize;

use crate::domain::GeoPoint;
use crate::proximity::{
    DRIVING_SPEED_KMH, DurationLocale, WALKING_SPEED_KMH, distance_km, format_duration,
    travel_minutes,
};

/// Shown instead of a travel time when the user's position is unknown.
pub const UNKNOWN_TRAVEL_TIME: &str = "알 수 없음";

/// Image shown for places without their own photo.
pub const DEFAULT_PLACE_IMAGE: &str = "/static/img/res_sample_img.jpg";

/// Marker image for the selected place.
pub const SELECTED_MARKER_ICON: &str = "/static/img/click_mark.jpg";

/// A place found by a keyword search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Provider category path, e.g. "음식점 > 일식 > 돈까스,우동"
    pub category_name: String,
    pub position: GeoPoint,
    pub image_url: Option<String>,
}

/// Marker/list icon for a provider category path.
///
/// # Examples
///
/// ```
/// use corkage_server::search::category_icon;
///
/// assert_eq!(category_icon("음식점 > 한식 > 육류,고기"), "/static/img/kor_food.png");
/// assert_eq!(category_icon("음식점 > 카페"), "/static/img/cork_restaurant.jpg");
/// ```
pub fn category_icon(category_name: &str) -> &'static str {
    if category_name.contains("한식") {
        "/static/img/kor_food.png"
    } else if category_name.contains('회') || category_name.contains("돈까스") {
        "/static/img/cutlet_sashimi.png"
    } else if category_name.contains("중식") {
        "/static/img/ch_food.png"
    } else if category_name.contains("양식") {
        "/static/img/fast_food.png"
    } else {
        "/static/img/cork_restaurant.jpg"
    }
}

/// A place with distance and travel times from the user, for the result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceSummary {
    pub place: Place,
    pub icon: &'static str,
    pub image_url: String,
    /// Kilometres from the user; 0 when the user position is unknown
    pub distance_km: f64,
    pub walking_time: String,
    pub driving_time: String,
}

impl PlaceSummary {
    pub fn new(place: Place, user: Option<GeoPoint>) -> Self {
        let (distance, walking_time, driving_time) = match user {
            Some(user) => {
                let km = distance_km(user, place.position);
                (km, travel_label(km, WALKING_SPEED_KMH), travel_label(km, DRIVING_SPEED_KMH))
            }
            None => (
                0.0,
                UNKNOWN_TRAVEL_TIME.to_string(),
                UNKNOWN_TRAVEL_TIME.to_string(),
            ),
        };

        Self {
            icon: category_icon(&place.category_name),
            image_url: place
                .image_url
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACE_IMAGE.to_string()),
            distance_km: distance,
            walking_time,
            driving_time,
            place,
        }
    }

    /// Distance rounded to two decimals, as shown in the list.
    pub fn distance_label(&self) -> String {
        format!("{:.2}", self.distance_km)
    }
}

fn travel_label(km: f64, speed_kmh: f64) -> String {
    travel_minutes(km, speed_kmh)
        .map(|m| format_duration(m, DurationLocale::Korean))
        .unwrap_or_else(|_| UNKNOWN_TRAVEL_TIME.to_string())
}

/// Summaries for a batch of search results.
pub fn summarize(places: Vec<Place>, user: Option<GeoPoint>) -> Vec<PlaceSummary> {
    places
        .into_iter()
        .map(|p| PlaceSummary::new(p, user))
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn place(name: &str, category: &str, lat: f64, lon: f64) -> Place {
        Place {
            id: name.to_string(),
            name: name.to_string(),
            address: "서울 성북구".to_string(),
            phone: "02-000-0000".to_string(),
            category_name: category.to_string(),
            position: GeoPoint::new(lat, lon).unwrap(),
            image_url: None,
        }
    }

    #[test]
    fn icons_by_category() {
        assert_eq!(category_icon("음식점 > 한식"), "/static/img/kor_food.png");
        assert_eq!(category_icon("음식점 > 일식 > 회"), "/static/img/cutlet_sashimi.png");
        assert_eq!(category_icon("음식점 > 일식 > 돈까스,우동"), "/static/img/cutlet_sashimi.png");
        assert_eq!(category_icon("음식점 > 중식"), "/static/img/ch_food.png");
        assert_eq!(category_icon("음식점 > 양식"), "/static/img/fast_food.png");
        assert_eq!(category_icon(""), "/static/img/cork_restaurant.jpg");
    }

    #[test]
    fn korean_wins_over_later_rules() {
        // First matching rule applies
        assert_eq!(category_icon("한식 > 회"), "/static/img/kor_food.png");
    }

    #[test]
    fn summary_without_user() {
        let s = PlaceSummary::new(place("a", "음식점 > 중식", 37.6, 127.0), None);
        assert_eq!(s.distance_km, 0.0);
        assert_eq!(s.distance_label(), "0.00");
        assert_eq!(s.walking_time, UNKNOWN_TRAVEL_TIME);
        assert_eq!(s.driving_time, UNKNOWN_TRAVEL_TIME);
        assert_eq!(s.image_url, DEFAULT_PLACE_IMAGE);
        assert_eq!(s.icon, "/static/img/ch_food.png");
    }

    #[test]
    fn summary_with_user() {
        // 0.01 degree of latitude is about 1.11 km
        let user = GeoPoint::new(37.60, 127.0).unwrap();
        let s = PlaceSummary::new(place("a", "", 37.61, 127.0), Some(user));
        assert_eq!(s.distance_label(), "1.11");
        assert_eq!(s.walking_time, "17분");
        assert_eq!(s.driving_time, "2분");
    }

    #[test]
    fn summary_keeps_own_image() {
        let mut p = place("a", "", 37.6, 127.0);
        p.image_url = Some("/img/a.jpg".into());
        assert_eq!(PlaceSummary::new(p, None).image_url, "/img/a.jpg");
    }
}
