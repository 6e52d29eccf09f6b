//! Public holiday API client (Nager.Date).

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::HolidaySource;
use super::error::HolidayError;

/// Default base URL for the public holiday API.
const DEFAULT_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Country whose holidays close the calendar.
const DEFAULT_COUNTRY_CODE: &str = "KR";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// A public holiday as returned by the API.
///
/// Only the fields the calendar uses are kept; the rest are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntry {
    pub date: NaiveDate,
    pub local_name: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Configuration for the holiday API client.
#[derive(Debug, Clone)]
pub struct HolidayClientConfig {
    /// Base URL for the API
    pub base_url: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl HolidayClientConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the country whose holidays are fetched.
    pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = code.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for HolidayClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Client for the public holiday API.
#[derive(Debug, Clone)]
pub struct HolidayClient {
    http: reqwest::Client,
    base_url: String,
    country_code: String,
}

impl HolidayClient {
    /// Create a new holiday API client.
    pub fn new(config: HolidayClientConfig) -> Result<Self, HolidayError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_code: config.country_code,
        })
    }

    /// URL of the holiday list for a year.
    fn year_url(&self, year: i32) -> String {
        format!(
            "{}/PublicHolidays/{}/{}",
            self.base_url, year, self.country_code
        )
    }

    /// Fetch every public holiday of a year.
    pub async fn fetch_year(&self, year: i32) -> Result<Vec<HolidayEntry>, HolidayError> {
        let url = self.year_url(year);
        debug!(%url, "fetching public holidays");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HolidayError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| HolidayError::Json {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl HolidaySource for HolidayClient {
    async fn public_holidays(&self, year: i32) -> Result<Vec<HolidayEntry>, HolidayError> {
        self.fetch_year(year).await
    }
}
