use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Coordinate, GeocodeResponse, PersonRecord, PersonsResponse};
use reqwest::Client;
use std::time::Duration;

/// Zoom level 18 asks the geocoder for building-level detail.
const REVERSE_ZOOM: &str = "18";

fn build_client(config: &Config) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to create HTTP client: {}", e)))
}

/// Client for the reverse geocoding API (Nominatim-compatible).
#[derive(Clone)]
pub struct GeocodingService {
    client: Client,
    base_url: String,
}

impl GeocodingService {
    /// Creates a new `GeocodingService`.
    ///
    /// Every request carries the configured `User-Agent`; the public Nominatim
    /// instance rejects anonymous clients.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.geocoder_base_url.clone(),
        })
    }

    /// Reverse geocodes a single coordinate.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - The point to look up.
    ///
    /// # Returns
    ///
    /// * `Result<GeocodeResponse, AppError>` - The decoded response, which may
    ///   have no `address` block for unmapped points.
    pub async fn reverse(&self, coordinate: Coordinate) -> Result<GeocodeResponse, AppError> {
        let lat = coordinate.lat.to_string();
        let lon = coordinate.lng.to_string();
        let url = reqwest::Url::parse_with_params(
            &format!("{}/reverse", self.base_url),
            &[
                ("format", "json"),
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("zoom", REVERSE_ZOOM),
                ("addressdetails", "1"),
            ],
        )
        .map_err(|e| AppError::ExternalApiError(format!("Failed to build URL: {}", e)))?;

        tracing::debug!("Reverse geocoding {}, {}", lat, lon);

        let response =
            self.client.get(url).send().await.map_err(|e| {
                AppError::ExternalApiError(format!("Geocoder request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Geocoder returned {}: {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse geocoder response: {}", e))
        })
    }
}

/// Client for the random person data API.
#[derive(Clone)]
pub struct PersonService {
    client: Client,
    base_url: String,
}

impl PersonService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.person_api_base_url.clone(),
        })
    }

    /// Fetches one random U.S. person record, if the service returned any.
    pub async fn fetch_person(&self) -> Result<Option<PersonRecord>, AppError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/api/v1/persons", self.base_url),
            &[("_quantity", "1"), ("_locale", "en_US")],
        )
        .map_err(|e| AppError::ExternalApiError(format!("Failed to build URL: {}", e)))?;

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::ExternalApiError(format!("Person API request failed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApiError(format!(
                "Person API returned status {}",
                response.status()
            )));
        }

        let body: PersonsResponse = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse Person API response: {}", e))
        })?;

        Ok(body.data.into_iter().next())
    }
}
