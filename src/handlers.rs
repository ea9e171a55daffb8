use crate::address::AddressResolver;
use crate::config::Config;
use crate::errors::AppError;
use crate::page;
use crate::persona::PersonaResolver;
use crate::phone;
use crate::regions::Region;
use crate::services::{GeocodingService, PersonService};
use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Random address lookup against the reverse geocoder.
    pub addresses: AddressResolver,
    /// Name/gender lookup with local fallback.
    pub personas: PersonaResolver,
}

impl AppState {
    /// Builds the outbound clients from configuration.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let addresses = AddressResolver::new(GeocodingService::new(&config)?);
        let personas = PersonaResolver::new(PersonService::new(&config)?);
        Ok(Self {
            config,
            addresses,
            personas,
        })
    }
}

/// First `state` value of the raw query string, if any.
///
/// Repeated or malformed parameters never reject the request; the first
/// `state` pair wins and everything else is ignored.
pub fn state_param(query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == "state")
        .map(|(_, value)| value.into_owned())
}

/// Builds the router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(generate_address_page))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

/// Health check endpoint.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "address-generator",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /?state=XX
///
/// Resolves an address in the requested (or a random) region, then a persona
/// and a phone number, and renders the page. When no address can be found
/// the response is a plain-text 500 and the persona service is not called.
pub async fn generate_address_page(
    State(state): State<Arc<AppState>>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    let requested = state_param(query.as_deref());
    let region = Region::from_param_or_random(requested.as_deref(), &mut rand::thread_rng());
    tracing::info!(
        "GET / - requested: {:?}, using region {}",
        requested,
        region.code
    );

    let address = state.addresses.resolve(region).await?;
    let persona = state.personas.resolve().await;
    let phone = phone::generate(address.country, region.code, &mut rand::thread_rng());

    let html = page::render(
        &persona,
        &phone,
        &address,
        region,
        &state.config.map_embed_base_url,
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html;charset=UTF-8")],
        html,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_param_first_value_wins() {
        assert_eq!(state_param(Some("state=TX&state=CA")), Some("TX".to_string()));
        assert_eq!(state_param(Some("foo=1&state=qc")), Some("qc".to_string()));
    }

    #[test]
    fn test_state_param_absent_or_malformed() {
        assert_eq!(state_param(None), None);
        assert_eq!(state_param(Some("")), None);
        assert_eq!(state_param(Some("stat=TX")), None);
        assert_eq!(state_param(Some("%%%&&==")), None);
        assert_eq!(state_param(Some("state")), Some(String::new()));
    }
}
