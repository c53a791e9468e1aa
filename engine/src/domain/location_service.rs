//! Reverse-geocoding lookup for the decorative location label.
//!
//! Fully isolated from the expense data model: failures here degrade to an
//! "unavailable" display state and never gate a submit, summary, or bucket
//! operation.

use log::info;
use serde::Deserialize;
use shared::{LocationInfo, LocationState};
use std::time::Duration;

/// Base URL for the reverse-geocoding API.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Reverse geocoding endpoint path.
const REVERSE_PATH: &str = "/reverse";

/// Zoom level for city-granularity results.
const REVERSE_ZOOM: &str = "10";

/// How long a lookup may run before it is abandoned.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Placeholder when the response names no usable locality or country.
const UNKNOWN_PLACE: &str = "Unknown";

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("location service returned status {0}")]
    Unavailable(reqwest::StatusCode),
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    hamlet: Option<String>,
    country: Option<String>,
}

/// One-shot reverse-geocoding client.
#[derive(Debug, Clone)]
pub struct LocationService {
    http: reqwest::Client,
    base_url: String,
}

impl LocationService {
    pub fn new() -> Result<Self, LocationError> {
        let http = reqwest::Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (useful for testing with a mock server).
    pub fn with_base_url<T: Into<String>>(mut self, url: T) -> Self {
        self.base_url = url.into();
        self
    }

    /// Resolve coordinates to a city/country pair.
    ///
    /// Falls back through town, village, and hamlet when the response has no
    /// city, and to "Unknown" when nothing usable remains.
    pub async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationInfo, LocationError> {
        let url = format!("{}{}", self.base_url, REVERSE_PATH);
        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("zoom", REVERSE_ZOOM)])
            .query(&[("lat", latitude), ("lon", longitude)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LocationError::Unavailable(response.status()));
        }

        let body: ReverseGeocodeResponse = response.json().await?;
        let address = body.address;
        let city = address
            .city
            .or(address.town)
            .or(address.village)
            .or(address.hamlet)
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string());
        let country = address.country.unwrap_or_else(|| UNKNOWN_PLACE.to_string());

        info!("📍 LOCATION: Resolved ({}, {}) to {}, {}", latitude, longitude, city, country);

        Ok(LocationInfo {
            city,
            country,
            latitude,
            longitude,
        })
    }

    /// Fire-and-forget lookup whose outcome is only a display state.
    ///
    /// No automatic retry on failure; the caller re-invokes this on a manual
    /// refresh.
    pub fn spawn_reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> tokio::task::JoinHandle<LocationState> {
        let service = self.clone();
        tokio::spawn(async move {
            match service.reverse_geocode(latitude, longitude).await {
                Ok(location) => LocationState::Ready(location),
                Err(err) => LocationState::Unavailable(err.to_string()),
            }
        })
    }
}
