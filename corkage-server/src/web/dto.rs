//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{GridCell, MonthAvailability};
use crate::domain::{CalendarMonth, GeoBounds};
use crate::holidays::HolidayEntry;
use crate::proximity::{DurationLocale, MarkerSize, TravelEstimate, format_duration};
use crate::search::{PlaceSummary, details_link, kakao_map_search_link};

/// Request for the distance between two points.
#[derive(Debug, Deserialize)]
pub struct ProximityRequest {
    pub from_lat: f64,
    pub from_lon: f64,
    pub to_lat: f64,
    pub to_lon: f64,
}

/// Distance and travel times between two points.
#[derive(Debug, Serialize)]
pub struct ProximityResponse {
    pub distance_km: f64,

    /// Distance rounded to two decimals, e.g. "1.11"
    pub distance: String,

    pub walking_minutes: u32,
    pub driving_minutes: u32,

    /// Formatted walking time, e.g. "17분"
    pub walking_time: String,
    pub driving_time: String,
}

impl ProximityResponse {
    pub fn new(distance_km: f64, estimate: TravelEstimate) -> Self {
        Self {
            distance_km,
            distance: format!("{distance_km:.2}"),
            walking_minutes: estimate.walking_minutes,
            driving_minutes: estimate.driving_minutes,
            walking_time: format_duration(estimate.walking_minutes.into(), DurationLocale::Korean),
            driving_time: format_duration(estimate.driving_minutes.into(), DurationLocale::Korean),
        }
    }
}

/// Request for a marker size.
#[derive(Debug, Deserialize)]
pub struct MarkerSizeRequest {
    pub zoom: i32,

    /// Defaults to 1
    pub scale: Option<f64>,
}

/// Marker dimensions in pixels, with the bottom-centre anchor.
#[derive(Debug, Serialize)]
pub struct MarkerSizeResponse {
    pub width: f64,
    pub height: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl From<MarkerSize> for MarkerSizeResponse {
    fn from(size: MarkerSize) -> Self {
        let (anchor_x, anchor_y) = size.anchor();
        Self {
            width: size.width,
            height: size.height,
            anchor_x,
            anchor_y,
        }
    }
}

/// Request for a calendar month. Missing fields default to the current month.
#[derive(Debug, Default, Deserialize)]
pub struct CalendarRequest {
    pub year: Option<i32>,

    /// 0-based month
    pub month: Option<u32>,

    /// Date the user has picked
    pub selected: Option<NaiveDate>,
}

/// Reference to a neighbouring month for the prev/next buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl From<CalendarMonth> for MonthRef {
    fn from(month: CalendarMonth) -> Self {
        Self {
            year: month.year(),
            month: month.month0(),
        }
    }
}

/// A laid-out calendar month.
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,

    /// e.g. "2024년 10월"
    pub title: String,

    pub rows: Vec<Vec<GridCell>>,
    pub unavailable: Vec<NaiveDate>,
    pub holidays: Vec<HolidayEntry>,

    /// True when the holiday service failed and holidays are missing
    pub holidays_degraded: bool,

    pub selected: Option<NaiveDate>,
    pub previous: Option<MonthRef>,
    pub next: Option<MonthRef>,
}

impl CalendarResponse {
    /// Build from a month's availability and the user's pick.
    ///
    /// A pick that cannot be booked is dropped.
    pub fn new(availability: MonthAvailability, selected: Option<NaiveDate>) -> Self {
        let selected = selected.filter(|d| availability.is_available(*d));
        let month = availability.month;
        let grid = availability.grid.with_selection(selected);

        Self {
            year: month.year(),
            month: month.month0(),
            title: month.title(),
            rows: grid.rows,
            unavailable: availability.unavailable.into_iter().collect(),
            holidays: availability.holidays,
            holidays_degraded: availability.holidays_degraded,
            selected,
            previous: month.previous().map(MonthRef::from),
            next: month.next().map(MonthRef::from),
        }
    }
}

/// Request to search places by keyword.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchRequest {
    pub q: String,

    /// User latitude; travel times are unknown without it
    pub lat: Option<f64>,
    pub lon: Option<f64>,

    /// Map view id. A newer search from the same view supersedes this one.
    pub session: Option<String>,
}

/// A place in search results.
#[derive(Debug, Serialize)]
pub struct PlaceResult {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub category_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub icon: &'static str,
    pub image_url: String,

    /// Kilometres from the user, two decimals
    pub distance: String,

    pub walking_time: String,
    pub driving_time: String,

    /// Link to the detail page
    pub details_url: String,

    /// Link to Kakao Map for the address
    pub map_url: String,
}

impl From<PlaceSummary> for PlaceResult {
    fn from(summary: PlaceSummary) -> Self {
        let details_url = details_link(&summary);
        let distance = summary.distance_label();
        let place = summary.place;

        Self {
            map_url: kakao_map_search_link(&place.address),
            latitude: place.position.latitude(),
            longitude: place.position.longitude(),
            id: place.id,
            name: place.name,
            address: place.address,
            phone: place.phone,
            category_name: place.category_name,
            icon: summary.icon,
            image_url: summary.image_url,
            distance,
            walking_time: summary.walking_time,
            driving_time: summary.driving_time,
            details_url,
        }
    }
}

/// Response for place search.
#[derive(Debug, Serialize)]
pub struct PlaceSearchResponse {
    pub places: Vec<PlaceResult>,

    /// Area fitting every result and the user
    pub bounds: Option<GeoBounds>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayLookup;
    use crate::domain::GeoPoint;
    use crate::proximity::marker_size;
    use crate::search::Place;

    fn october() -> CalendarMonth {
        CalendarMonth::new(2024, 9).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn availability() -> MonthAvailability {
        MonthAvailability::new(
            october(),
            HolidayLookup {
                entries: vec![HolidayEntry {
                    date: date(2024, 10, 3),
                    local_name: "개천절".into(),
                    name: Some("National Foundation Day".into()),
                }],
                degraded: false,
            },
        )
    }

    #[test]
    fn proximity_response_formats() {
        let response = ProximityResponse::new(
            1.1119,
            TravelEstimate {
                walking_minutes: 17,
                driving_minutes: 2,
            },
        );
        assert_eq!(response.distance, "1.11");
        assert_eq!(response.walking_time, "17분");
        assert_eq!(response.driving_time, "2분");
    }

    #[test]
    fn marker_size_response_has_anchor() {
        let response = MarkerSizeResponse::from(marker_size(10, 1.0));
        assert_eq!(response.anchor_x, response.width / 2.0);
        assert_eq!(response.anchor_y, response.height);
    }

    #[test]
    fn calendar_response() {
        let response = CalendarResponse::new(availability(), Some(date(2024, 10, 10)));

        assert_eq!(response.title, "2024년 10월");
        assert_eq!(response.month, 9);
        assert_eq!(response.selected, Some(date(2024, 10, 10)));
        assert_eq!(response.previous, Some(MonthRef { year: 2024, month: 8 }));
        assert_eq!(response.next, Some(MonthRef { year: 2024, month: 10 }));
        assert_eq!(
            response.unavailable,
            vec![
                date(2024, 10, 3),
                date(2024, 10, 7),
                date(2024, 10, 14),
                date(2024, 10, 21),
                date(2024, 10, 28),
            ]
        );
        assert!(!response.holidays_degraded);
        assert_eq!(response.rows.len(), 5);
    }

    #[test]
    fn calendar_response_drops_unavailable_selection() {
        let response = CalendarResponse::new(availability(), Some(date(2024, 10, 7)));
        assert_eq!(response.selected, None);

        let response = CalendarResponse::new(availability(), Some(date(2024, 11, 5)));
        assert_eq!(response.selected, None);
    }

    #[test]
    fn calendar_json_shape() {
        let response = CalendarResponse::new(availability(), None);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["rows"][0][0]["kind"], "blank");
        assert_eq!(json["rows"][0][2]["kind"], "day");
        assert_eq!(json["rows"][0][2]["day"], 1);
        assert_eq!(json["rows"][0][4]["holiday"], "개천절");
        assert_eq!(json["rows"][0][4]["state"], "disabled");
        assert_eq!(json["holidays"][0]["localName"], "개천절");
    }

    #[test]
    fn place_result_links() {
        let place = Place {
            id: "1".into(),
            name: "스시 하루".into(),
            address: "서울 성북구 안암로 1".into(),
            phone: String::new(),
            category_name: "음식점 > 일식 > 회".into(),
            position: GeoPoint::new(37.61, 127.0).unwrap(),
            image_url: None,
        };
        let user = GeoPoint::new(37.60, 127.0).unwrap();
        let result = PlaceResult::from(PlaceSummary::new(place, Some(user)));

        assert_eq!(result.distance, "1.11");
        assert_eq!(result.icon, "/static/img/cutlet_sashimi.png");
        assert!(result.details_url.starts_with("/details?place_name="));
        assert!(
            result
                .map_url
                .starts_with("https://map.kakao.com/link/search/%EC%84%9C%EC%9A%B8%20")
        );
    }
}
