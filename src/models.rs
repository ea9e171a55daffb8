use serde::{Deserialize, Serialize};
use std::fmt;

// ============ Domain Models ============

/// Country a region belongs to, or that the geocoder resolved a point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    UnitedStates,
    Canada,
}

impl Country {
    /// Maps the geocoder's lowercase ISO country code (`us`, `ca`) to a `Country`.
    pub fn from_country_code(code: &str) -> Option<Self> {
        match code {
            "us" => Some(Country::UnitedStates),
            "ca" => Some(Country::Canada),
            _ => None,
        }
    }

    /// Name used as the last component of a formatted address.
    pub fn display_name(self) -> &'static str {
        match self {
            Country::UnitedStates => "United States",
            Country::Canada => "Canada",
        }
    }

    /// Short label used in the region selector.
    pub fn short_label(self) -> &'static str {
        match self {
            Country::UnitedStates => "USA",
            Country::Canada => "Canada",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An address that passed the acceptance policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedAddress {
    /// Postal address line, e.g. `"12 Main St, Springfield, IL 62701, United States"`.
    pub formatted: String,
    /// Country the geocoder placed the address in.
    pub country: Country,
    /// Region code the address was requested for.
    pub region: String,
}

/// Display name and gender for the generated persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Persona {
    pub name: String,
    pub gender: String,
}

/// North American phone number split into its three parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    pub area_code: String,
    pub exchange: String,
    pub line: String,
}

impl PhoneNumber {
    /// Digits only, used as the click-to-copy value.
    pub fn digits(&self) -> String {
        format!("{}{}{}", self.area_code, self.exchange, self.line)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}-{}", self.area_code, self.exchange, self.line)
    }
}

// ============ Reverse Geocoding API Models ============

/// Response of the reverse geocoding endpoint (`/reverse?format=json`).
///
/// Points in the ocean or outside any mapped area come back with an `error`
/// field and no `address` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub address: Option<GeocodeAddress>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The `address` block of a reverse geocoding response. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeocodeAddress {
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub country_code: Option<String>,
}

impl GeocodeAddress {
    pub fn house_number(&self) -> Option<&str> {
        non_empty(&self.house_number)
    }

    pub fn road(&self) -> Option<&str> {
        non_empty(&self.road)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    pub fn postcode(&self) -> Option<&str> {
        non_empty(&self.postcode)
    }

    /// True when house number, road and city are all present and non-empty.
    pub fn has_street_detail(&self) -> bool {
        self.house_number().is_some() && self.road().is_some() && self.city().is_some()
    }
}

/// The geocoder sometimes sends empty strings; those count as missing.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// ============ Person API Models ============

/// Envelope returned by the persons endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonsResponse {
    #[serde(default)]
    pub data: Vec<PersonRecord>,
}

/// One person record. All three fields are required; a record missing any
/// of them fails to decode and the caller falls back to local names.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub firstname: String,
    pub lastname: String,
    pub gender: String,
}
