/// Property-based tests using proptest
/// Tests invariants of the static tables, sampling and phone synthesis
use address_generator::address::{accept, format_address};
use address_generator::models::{Country, GeocodeAddress};
use address_generator::phone;
use address_generator::regions::{area_codes_for, Region, REGIONS, SENTINEL_AREA_CODE};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

fn any_region() -> impl Strategy<Value = &'static Region> {
    prop::sample::select(REGIONS.iter().collect::<Vec<_>>())
}

fn any_country() -> impl Strategy<Value = Country> {
    prop_oneof![Just(Country::UnitedStates), Just(Country::Canada)]
}

// Property: phone numbers always match (DDD) DDD-DDDD with a configured area code
proptest! {
    #[test]
    fn phone_matches_format_for_every_region(region in any_region(), seed in any::<u64>()) {
        let pattern = Regex::new(r"^\(\d{3}\) [2-8]\d{2}-[1-9]\d{3}$").unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let number = phone::generate(region.country, region.code, &mut rng);

        prop_assert!(pattern.is_match(&number.to_string()), "bad format: {}", number);
        prop_assert!(region.area_codes.contains(&number.area_code.as_str()));
    }

    #[test]
    fn phone_area_code_comes_from_table_or_sentinel(
        region in any_region(),
        country in any_country(),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let number = phone::generate(country, region.code, &mut rng);
        let expected = area_codes_for(country, region.code);

        prop_assert!(expected.contains(&number.area_code.as_str()));
        if country != region.country {
            prop_assert_eq!(number.area_code.as_str(), SENTINEL_AREA_CODE);
        }
    }

    #[test]
    fn unknown_region_codes_get_sentinel(code in "[a-z0-9]{2}", country in any_country()) {
        let mut rng = StdRng::seed_from_u64(0);
        let number = phone::generate(country, &code, &mut rng);
        prop_assert_eq!(number.area_code.as_str(), SENTINEL_AREA_CODE);
    }
}

// Property: sampled coordinates stay within ±0.05° of one of the region's anchors
proptest! {
    #[test]
    fn sampled_coordinates_stay_near_anchor(region in any_region(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let point = region.sample_coordinate(&mut rng);
        let near_anchor = region.anchors.iter().any(|a| {
            (point.lat - a.lat).abs() <= 0.05 && (point.lng - a.lng).abs() <= 0.05
        });
        prop_assert!(near_anchor);
    }
}

// Property: acceptance policy
proptest! {
    #[test]
    fn us_requires_street_detail(
        region in any_region(),
        house in proptest::option::of("[1-9][0-9]{0,4}"),
        road in proptest::option::of("[A-Z][a-z]{2,10} Street"),
        city in proptest::option::of("[A-Z][a-z]{2,10}"),
    ) {
        let address = GeocodeAddress {
            house_number: house.clone(),
            road: road.clone(),
            city: city.clone(),
            postcode: Some("12345".to_string()),
            state: None,
            country_code: Some("us".to_string()),
        };
        let complete = house.is_some() && road.is_some() && city.is_some();
        prop_assert_eq!(accept(region, &address).is_some(), complete);
    }

    #[test]
    fn canada_partial_only_in_remote_regions(
        region in any_region(),
        city in "[A-Z][a-z]{2,10}",
    ) {
        let address = GeocodeAddress {
            city: Some(city.clone()),
            postcode: Some("X0A 0H0".to_string()),
            country_code: Some("ca".to_string()),
            ..Default::default()
        };
        let resolved = accept(region, &address);
        prop_assert_eq!(resolved.is_some(), region.is_remote());
        if let Some(resolved) = resolved {
            prop_assert_eq!(
                resolved.formatted,
                format!("{}, {} X0A 0H0, Canada", city, region.code)
            );
        }
    }

    #[test]
    fn unmapped_state_name_keeps_requested_code(
        region in any_region(),
        state in "[A-Z][a-z]{3,12} Territory",
    ) {
        let address = GeocodeAddress {
            house_number: Some("1".to_string()),
            road: Some("Main Street".to_string()),
            city: Some("Springfield".to_string()),
            postcode: Some("00001".to_string()),
            state: Some(state),
            country_code: Some("us".to_string()),
        };
        let formatted = format_address(&address, region.code, Country::UnitedStates);
        prop_assert_eq!(
            formatted,
            format!("1 Main Street, Springfield, {} 00001, United States", region.code)
        );
    }

    #[test]
    fn foreign_countries_always_rejected(
        region in any_region(),
        country_code in "[a-z]{2}".prop_filter("not us/ca", |c| c != "us" && c != "ca"),
    ) {
        let address = GeocodeAddress {
            house_number: Some("1".to_string()),
            road: Some("Main Street".to_string()),
            city: Some("Springfield".to_string()),
            postcode: Some("00001".to_string()),
            state: None,
            country_code: Some(country_code),
        };
        prop_assert!(accept(region, &address).is_none());
    }
}
