use crate::models::{Country, PhoneNumber};
use crate::regions::{area_codes_for, SENTINEL_AREA_CODE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Synthesizes a phone number for the region an address was resolved in.
///
/// The area code is drawn uniformly from the region's list (or is the
/// sentinel `000` when the country/region pair has none). The exchange is
/// uniform in 200..=899 and the line number in 1000..=9999.
pub fn generate(country: Country, region_code: &str, rng: &mut impl Rng) -> PhoneNumber {
    let area_code = area_codes_for(country, region_code)
        .choose(rng)
        .copied()
        .unwrap_or(SENTINEL_AREA_CODE);
    let exchange: u16 = rng.gen_range(200..=899);
    let line: u16 = rng.gen_range(1000..=9999);

    PhoneNumber {
        area_code: area_code.to_string(),
        exchange: format!("{:03}", exchange),
        line: format!("{:04}", line),
    }
}
