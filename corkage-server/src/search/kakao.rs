//! Kakao Local keyword search client.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::GeoPoint;

use super::PlaceSearch;
use super::error::PlaceSearchError;
use super::place::Place;

/// Default base URL for the Kakao Local API.
const DEFAULT_BASE_URL: &str = "https://dapi.kakao.com";

/// Page size the API allows at most.
const MAX_PAGE_SIZE: u8 = 15;

/// Keyword search response.
#[derive(Debug, Deserialize)]
struct KeywordSearchResponse {
    documents: Vec<PlaceDocument>,
}

/// One place in the response. Coordinates arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub phone: String,
    /// Longitude
    pub x: String,
    /// Latitude
    pub y: String,
}

impl PlaceDocument {
    /// Convert to a domain place, or `None` if the coordinates are unusable.
    pub fn into_place(self) -> Option<Place> {
        let lon: f64 = self.x.trim().parse().ok()?;
        let lat: f64 = self.y.trim().parse().ok()?;
        let position = GeoPoint::new(lat, lon).ok()?;

        Some(Place {
            id: self.id,
            name: self.place_name,
            address: self.address_name,
            phone: self.phone,
            category_name: self.category_name,
            position,
            image_url: None,
        })
    }
}

/// Configuration for the Kakao Local client.
#[derive(Debug, Clone)]
pub struct KakaoConfig {
    /// REST API key
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl KakaoConfig {
    /// Create a new config with the given REST API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Client for Kakao Local keyword search.
#[derive(Debug, Clone)]
pub struct KakaoPlacesClient {
    http: reqwest::Client,
    base_url: String,
}

impl KakaoPlacesClient {
    /// Create a new client.
    pub fn new(config: KakaoConfig) -> Result<Self, PlaceSearchError> {
        let mut headers = HeaderMap::new();

        let auth = HeaderValue::from_str(&format!("KakaoAK {}", config.api_key))
            .map_err(|_| PlaceSearchError::NotConfigured("invalid API key format".to_string()))?;
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search places matching `keyword`.
    pub async fn keyword_search(&self, keyword: &str) -> Result<Vec<Place>, PlaceSearchError> {
        let url = format!("{}/v2/local/search/keyword.json", self.base_url);
        let size = MAX_PAGE_SIZE.to_string();
        debug!(keyword, "searching places");

        let response = self
            .http
            .get(&url)
            .query(&[("query", keyword), ("size", size.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(PlaceSearchError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaceSearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_places(&body)
    }
}

#[async_trait]
impl PlaceSearch for KakaoPlacesClient {
    async fn search(&self, keyword: &str) -> Result<Vec<Place>, PlaceSearchError> {
        self.keyword_search(keyword).await
    }
}

/// Parse a keyword search response, skipping documents with bad coordinates.
fn parse_places(body: &str) -> Result<Vec<Place>, PlaceSearchError> {
    let response: KeywordSearchResponse =
        serde_json::from_str(body).map_err(|e| PlaceSearchError::Json {
            message: e.to_string(),
        })?;

    Ok(response
        .documents
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            let place = doc.into_place();
            if place.is_none() {
                warn!(%id, "skipping place with invalid coordinates");
            }
            place
        })
        .collect())
}
