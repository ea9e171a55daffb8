//! Address resolution: sample a point, reverse geocode it, keep it if it is
//! detailed enough.
//!
//! The loop is strictly sequential: one geocoding call in flight at a time,
//! and the first accepted result wins.

use crate::errors::AppError;
use crate::models::{Country, GeocodeAddress, ResolvedAddress};
use crate::regions::{abbreviation_for, Region};
use crate::services::GeocodingService;

/// Upper bound on geocoding calls for a single request.
pub const MAX_GEOCODE_ATTEMPTS: usize = 20;

#[derive(Clone)]
pub struct AddressResolver {
    geocoder: GeocodingService,
    max_attempts: usize,
}

impl AddressResolver {
    pub fn new(geocoder: GeocodingService) -> Self {
        Self {
            geocoder,
            max_attempts: MAX_GEOCODE_ATTEMPTS,
        }
    }

    /// Finds a random, sufficiently detailed address inside `region`.
    ///
    /// Failed or malformed geocoder calls count as rejected attempts and the
    /// loop moves on immediately. Returns `AppError::ResolutionExhausted` once
    /// the attempt bound is used up.
    pub async fn resolve(&self, region: &Region) -> Result<ResolvedAddress, AppError> {
        for attempt in 1..=self.max_attempts {
            let coordinate = region.sample_coordinate(&mut rand::thread_rng());
            tracing::debug!(
                "Attempt {}/{} for {}: ({}, {})",
                attempt,
                self.max_attempts,
                region.code,
                coordinate.lat,
                coordinate.lng
            );

            let response = match self.geocoder.reverse(coordinate).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!(
                        "Geocoding attempt {} for {} failed: {}",
                        attempt,
                        region.code,
                        e
                    );
                    continue;
                }
            };

            let Some(address) = response.address else {
                tracing::debug!(
                    "No address block for {} ({})",
                    region.code,
                    response.error.as_deref().unwrap_or("no error given")
                );
                continue;
            };

            if let Some(resolved) = accept(region, &address) {
                tracing::info!(
                    "Resolved address for {} on attempt {}: {}",
                    region.code,
                    attempt,
                    resolved.formatted
                );
                return Ok(resolved);
            }
        }

        Err(AppError::ResolutionExhausted {
            region: region.code.to_string(),
            attempts: self.max_attempts,
        })
    }
}

/// Applies the acceptance policy to one geocoder address block.
///
/// - U.S.: house number, road and city are all required.
/// - Canada, remote region: city-level detail is enough.
/// - Canada, any other region: same as the U.S.
/// - Any other country: rejected.
pub fn accept(region: &Region, address: &GeocodeAddress) -> Option<ResolvedAddress> {
    let country = address
        .country_code
        .as_deref()
        .and_then(Country::from_country_code)?;

    let accepted = match country {
        Country::UnitedStates => address.has_street_detail(),
        Country::Canada if region.is_remote() => address.city().is_some(),
        Country::Canada => address.has_street_detail(),
    };

    accepted.then(|| ResolvedAddress {
        formatted: format_address(address, region.code, country),
        country,
        region: region.code.to_string(),
    })
}

/// Formats an accepted address.
///
/// The region abbreviation comes from the geocoder's full `state` name; when
/// that name is missing or unknown the requested code is used as-is.
pub fn format_address(address: &GeocodeAddress, requested_code: &str, country: Country) -> String {
    let abbreviation = address
        .state
        .as_deref()
        .and_then(abbreviation_for)
        .unwrap_or(requested_code);
    let locality = match address.postcode() {
        Some(postcode) => format!("{} {}", abbreviation, postcode),
        None => abbreviation.to_string(),
    };

    match (address.house_number(), address.road(), address.city()) {
        (Some(house_number), Some(road), Some(city)) => format!(
            "{} {}, {}, {}, {}",
            house_number, road, city, locality, country
        ),
        (_, _, city) => format!("{}, {}, {}", city.unwrap_or_default(), locality, country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str) -> &'static Region {
        Region::from_code(code).unwrap()
    }

    fn full_address(state: &str, country_code: &str) -> GeocodeAddress {
        GeocodeAddress {
            house_number: Some("1600".to_string()),
            road: Some("Amphitheatre Parkway".to_string()),
            city: Some("Mountain View".to_string()),
            postcode: Some("94043".to_string()),
            state: Some(state.to_string()),
            country_code: Some(country_code.to_string()),
        }
    }

    fn city_only(state: &str) -> GeocodeAddress {
        GeocodeAddress {
            city: Some("Whitehorse".to_string()),
            postcode: Some("Y1A 1A1".to_string()),
            state: Some(state.to_string()),
            country_code: Some("ca".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_us_full_address_accepted() {
        let resolved = accept(region("CA"), &full_address("California", "us")).unwrap();
        assert_eq!(
            resolved.formatted,
            "1600 Amphitheatre Parkway, Mountain View, CA 94043, United States"
        );
        assert_eq!(resolved.country, Country::UnitedStates);
        assert_eq!(resolved.region, "CA");
    }

    #[test]
    fn test_us_missing_house_number_rejected() {
        let mut address = full_address("Texas", "us");
        address.house_number = None;
        assert!(accept(region("TX"), &address).is_none());
    }

    #[test]
    fn test_us_missing_city_rejected() {
        let mut address = full_address("Texas", "us");
        address.city = None;
        assert!(accept(region("TX"), &address).is_none());
    }

    #[test]
    fn test_remote_region_accepts_city_only() {
        let resolved = accept(region("YT"), &city_only("Yukon")).unwrap();
        assert_eq!(resolved.formatted, "Whitehorse, YT Y1A 1A1, Canada");
        assert_eq!(resolved.country, Country::Canada);
    }

    #[test]
    fn test_us_empty_fields_rejected() {
        let mut address = full_address("Texas", "us");
        address.house_number = Some(String::new());
        assert!(accept(region("TX"), &address).is_none());

        let mut address = full_address("Texas", "us");
        address.road = Some(String::new());
        assert!(accept(region("TX"), &address).is_none());

        let mut address = full_address("Texas", "us");
        address.city = Some(String::new());
        assert!(accept(region("TX"), &address).is_none());
    }

    #[test]
    fn test_non_remote_canada_empty_road_rejected() {
        let mut address = full_address("Ontario", "ca");
        address.road = Some(String::new());
        assert!(accept(region("ON"), &address).is_none());
    }

    #[test]
    fn test_remote_region_empty_city_rejected() {
        let mut address = city_only("Yukon");
        address.city = Some(String::new());
        assert!(accept(region("YT"), &address).is_none());
    }

    #[test]
    fn test_remote_region_empty_road_uses_city_format() {
        let mut address = full_address("Nunavut", "ca");
        address.road = Some(String::new());
        let resolved = accept(region("NU"), &address).unwrap();
        assert_eq!(resolved.formatted, "Mountain View, NU 94043, Canada");
    }

    #[test]
    fn test_empty_postcode_is_omitted() {
        let mut address = city_only("Yukon");
        address.postcode = Some(String::new());
        assert_eq!(
            format_address(&address, "YT", Country::Canada),
            "Whitehorse, YT, Canada"
        );
    }

    #[test]
    fn test_remote_region_without_city_rejected() {
        let mut address = city_only("Nunavut");
        address.city = None;
        assert!(accept(region("NU"), &address).is_none());
    }

    #[test]
    fn test_remote_region_full_address_uses_street_format() {
        let resolved = accept(
            region("NL"),
            &full_address("Newfoundland and Labrador", "ca"),
        )
        .unwrap();
        assert_eq!(
            resolved.formatted,
            "1600 Amphitheatre Parkway, Mountain View, NL 94043, Canada"
        );
    }

    #[test]
    fn test_non_remote_canada_missing_road_rejected() {
        let mut address = full_address("Ontario", "ca");
        address.road = None;
        assert!(accept(region("ON"), &address).is_none());
    }

    #[test]
    fn test_non_remote_canada_full_address_accepted() {
        let resolved = accept(region("QC"), &full_address("Quebec", "ca")).unwrap();
        assert!(resolved.formatted.ends_with(", QC 94043, Canada"));
    }

    #[test]
    fn test_other_country_rejected() {
        assert!(accept(region("TX"), &full_address("Chihuahua", "mx")).is_none());
    }

    #[test]
    fn test_missing_country_code_rejected() {
        let mut address = full_address("Texas", "us");
        address.country_code = None;
        assert!(accept(region("TX"), &address).is_none());
    }

    #[test]
    fn test_unknown_state_name_falls_back_to_requested_code() {
        // Geocoder placed the point across the border in a state that is
        // not in the table; the requested code is kept even though it is wrong.
        let resolved = accept(region("WA"), &full_address("District of Columbia", "us")).unwrap();
        assert!(resolved.formatted.contains(", WA 94043, "));
    }

    #[test]
    fn test_known_state_name_overrides_requested_code() {
        let resolved = accept(region("NB"), &full_address("Maine", "us")).unwrap();
        assert!(resolved.formatted.contains(", ME 94043, United States"));
        assert_eq!(resolved.region, "NB");
    }

    #[test]
    fn test_missing_postcode_is_omitted() {
        let mut address = city_only("Northwest Territories");
        address.postcode = None;
        assert_eq!(
            format_address(&address, "NT", Country::Canada),
            "Whitehorse, NT, Canada"
        );
    }
}
