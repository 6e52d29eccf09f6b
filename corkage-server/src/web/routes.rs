//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{Datelike, Local};
use tracing::{error, info, warn};

use crate::domain::{CalendarMonth, DomainError, GeoPoint};
use crate::proximity::{TravelEstimate, distance_km, marker_size};
use crate::reservation::{Reservation, ReservationDraft, ReservationError};
use crate::search::{PlaceSearchError, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/proximity", get(proximity))
        .route("/api/marker-size", get(marker_size_for_zoom))
        .route("/api/calendar", get(calendar))
        .route("/api/reservations", post(create_reservation))
        .route("/api/places/search", get(search_places))
        .fallback(not_found)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound {
        message: format!("No route for {uri}"),
    }
}

/// Distance and travel times between two points.
async fn proximity(Query(req): Query<ProximityRequest>) -> Result<Json<ProximityResponse>, AppError> {
    let from = GeoPoint::new(req.from_lat, req.from_lon)?;
    let to = GeoPoint::new(req.to_lat, req.to_lon)?;

    Ok(Json(ProximityResponse::new(
        distance_km(from, to),
        TravelEstimate::between(from, to),
    )))
}

/// Marker size for a map zoom level.
async fn marker_size_for_zoom(
    Query(req): Query<MarkerSizeRequest>,
) -> Result<Json<MarkerSizeResponse>, AppError> {
    let scale = req.scale.unwrap_or(1.0);
    if !scale.is_finite() {
        return Err(AppError::BadRequest {
            message: format!("Invalid marker scale: {scale}"),
        });
    }
    Ok(Json(marker_size(req.zoom, scale).into()))
}

/// Month grid with closures and holidays.
async fn calendar(
    State(state): State<AppState>,
    Query(req): Query<CalendarRequest>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = Local::now().date_naive();
    let month = CalendarMonth::new(
        req.year.unwrap_or_else(|| today.year()),
        req.month.unwrap_or_else(|| today.month0()),
    )?;

    let availability = state.calendar.month(month).await;
    Ok(Json(CalendarResponse::new(availability, req.selected)))
}

/// Validate a reservation against the month's availability.
async fn create_reservation(
    State(state): State<AppState>,
    Json(draft): Json<ReservationDraft>,
) -> Result<(StatusCode, Json<Reservation>), AppError> {
    let unavailable = match draft.date.get() {
        Some(&date) => {
            state
                .calendar
                .month(CalendarMonth::of(date))
                .await
                .unavailable
        }
        None => Default::default(),
    };

    let reservation = draft.validate(&unavailable)?;
    info!(
        date = %reservation.reservation_date,
        time = %reservation.reservation_time,
        people = reservation.people_count,
        "reservation accepted"
    );

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Search restaurants by keyword within a map view's session.
async fn search_places(
    State(state): State<AppState>,
    Query(req): Query<PlaceSearchRequest>,
) -> Result<Json<PlaceSearchResponse>, AppError> {
    let provider = state.places.as_ref().ok_or_else(|| AppError::ServiceUnavailable {
        message: "Place search is not configured".to_string(),
    })?;

    let keyword = req.q.trim();
    if keyword.is_empty() {
        return Err(AppError::BadRequest {
            message: "Search keyword is empty".to_string(),
        });
    }

    let user = match (req.lat, req.lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)?),
        (None, None) => None,
        _ => {
            return Err(AppError::BadRequest {
                message: "lat and lon must be given together".to_string(),
            });
        }
    };

    let session = state
        .sessions
        .session(req.session.as_deref().unwrap_or_default())
        .await;
    if let Some(user) = user {
        session.set_user_position(user);
    }

    let outcome = session.search(keyword, provider.as_ref()).await?;
    let places = outcome.places.into_iter().map(PlaceResult::from).collect();

    Ok(Json(PlaceSearchResponse {
        places,
        bounds: outcome.bounds,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    ServiceUnavailable { message: String },
    Internal { message: String },
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<ReservationError> for AppError {
    fn from(e: ReservationError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<PlaceSearchError> for AppError {
    fn from(e: PlaceSearchError) -> Self {
        match e {
            PlaceSearchError::Unauthorized | PlaceSearchError::NotConfigured(_) => {
                AppError::ServiceUnavailable {
                    message: e.to_string(),
                }
            }
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Superseded => AppError::Conflict {
                message: e.to_string(),
            },
            SearchError::Provider(e) => e.into(),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::ServiceUnavailable { message }
            | AppError::Internal { message } => message,
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
