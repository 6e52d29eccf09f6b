//! File-backed holiday source for running without network access.
//!
//! Loads a JSON array in the same shape the holiday API returns and serves
//! it for every year it covers.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Datelike;

use super::HolidaySource;
use super::client::HolidayEntry;
use super::error::HolidayError;

/// Holiday source that serves a fixed list loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    entries: Arc<Vec<HolidayEntry>>,
}

impl StaticHolidays {
    /// Serve the given entries.
    pub fn new(entries: Vec<HolidayEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Load entries from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, HolidayError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| HolidayError::Data {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let entries: Vec<HolidayEntry> =
            serde_json::from_str(&json).map_err(|e| HolidayError::Data {
                message: format!("failed to parse {}: {}", path.display(), e),
            })?;

        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl HolidaySource for StaticHolidays {
    async fn public_holidays(&self, year: i32) -> Result<Vec<HolidayEntry>, HolidayError> {
        Ok(self
            .entries
            .iter()
            .filter(|h| h.date.year() == year)
            .cloned()
            .collect())
    }
}
