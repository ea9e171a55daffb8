//! Static table of supported U.S. states and Canadian provinces/territories.
//!
//! Each entry carries two reference coordinates used as sampling anchors and
//! the area codes used when synthesizing phone numbers. The table is read-only
//! and lives for the whole process.

use crate::models::{Country, Coordinate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Area code used when a (country, region) pair has no entry in the table.
pub const SENTINEL_AREA_CODE: &str = "000";

/// Maximum perturbation, in degrees, applied to an anchor on each axis.
pub const MAX_ANCHOR_OFFSET: f64 = 0.05;

/// Sparsely mapped regions where a city-level geocode is good enough.
pub const REMOTE_REGIONS: &[&str] = &["NL", "NT", "NU", "YT"];

/// A supported state, province or territory.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Two-letter postal abbreviation.
    pub code: &'static str,
    /// Full name as returned by the geocoder's `state` field.
    pub name: &'static str,
    pub country: Country,
    /// Reference points inside the region. Not a boundary, just places
    /// where residential addresses are dense enough to sample from.
    pub anchors: [Coordinate; 2],
    pub area_codes: &'static [&'static str],
}

impl Region {
    /// Looks up a region by its two-letter code (exact, upper-case match).
    pub fn from_code(code: &str) -> Option<&'static Region> {
        REGIONS.iter().find(|r| r.code == code)
    }

    /// Looks up a region by the full name the geocoder reports.
    pub fn from_name(name: &str) -> Option<&'static Region> {
        REGIONS.iter().find(|r| r.name == name)
    }

    /// Uniformly random region from the full table.
    pub fn random(rng: &mut impl Rng) -> &'static Region {
        REGIONS.choose(rng).unwrap_or(&REGIONS[0])
    }

    /// Parses the inbound `state` parameter, falling back to a random region
    /// when it is absent or unknown.
    pub fn from_param_or_random(param: Option<&str>, rng: &mut impl Rng) -> &'static Region {
        param
            .map(|p| p.trim().to_ascii_uppercase())
            .and_then(|code| Region::from_code(&code))
            .unwrap_or_else(|| Region::random(rng))
    }

    pub fn is_remote(&self) -> bool {
        REMOTE_REGIONS.contains(&self.code)
    }

    /// Picks one of the anchors and nudges it by up to ±0.05° on each axis so
    /// repeated attempts don't hit the same point.
    pub fn sample_coordinate(&self, rng: &mut impl Rng) -> Coordinate {
        let anchor = self.anchors.choose(rng).unwrap_or(&self.anchors[0]);
        let lat = anchor.lat + (rng.gen::<f64>() - 0.5) * (2.0 * MAX_ANCHOR_OFFSET);
        let lng = anchor.lng + (rng.gen::<f64>() - 0.5) * (2.0 * MAX_ANCHOR_OFFSET);
        Coordinate::new(lat, lng)
    }
}

/// Maps a full region name to its abbreviation.
pub fn abbreviation_for(name: &str) -> Option<&'static str> {
    Region::from_name(name).map(|r| r.code)
}

/// Area codes for a region, keyed by the country the address resolved in.
///
/// A region only has codes under its own country, so a Canadian code looked up
/// under the U.S. (or the reverse) yields the sentinel.
pub fn area_codes_for(country: Country, code: &str) -> &'static [&'static str] {
    REGIONS
        .iter()
        .find(|r| r.country == country && r.code == code)
        .map(|r| r.area_codes)
        .filter(|codes| !codes.is_empty())
        .unwrap_or(&[SENTINEL_AREA_CODE])
}

pub static REGIONS: &[Region] = &[
    // US States
    Region {
        code: "AL",
        name: "Alabama",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(32.377716, -86.300568),
            Coordinate::new(33.520661, -86.802490),
        ],
        area_codes: &["205", "251", "256", "334", "938"],
    },
    Region {
        code: "AK",
        name: "Alaska",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(61.216583, -149.899597),
            Coordinate::new(58.301598, -134.419998),
        ],
        area_codes: &["907"],
    },
    Region {
        code: "AZ",
        name: "Arizona",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(33.448376, -112.074036),
            Coordinate::new(34.048927, -111.093735),
        ],
        area_codes: &["480", "520", "602", "623", "928"],
    },
    Region {
        code: "AR",
        name: "Arkansas",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(34.746483, -92.289597),
            Coordinate::new(36.082157, -94.171852),
        ],
        area_codes: &["479", "501", "870"],
    },
    Region {
        code: "CA",
        name: "California",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(36.778259, -119.417931),
            Coordinate::new(34.052235, -118.243683),
        ],
        area_codes: &[
            "209", "213", "310", "323", "408", "415", "424", "510", "530", "559", "562", "619",
            "626", "650", "661", "707", "714", "760", "805", "818", "831", "858", "909", "916",
            "925", "949",
        ],
    },
    Region {
        code: "CO",
        name: "Colorado",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(39.739235, -104.990250),
            Coordinate::new(38.833881, -104.821365),
        ],
        area_codes: &["303", "719", "720", "970"],
    },
    Region {
        code: "CT",
        name: "Connecticut",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(41.763710, -72.685097),
            Coordinate::new(41.308273, -72.927887),
        ],
        area_codes: &["203", "475", "860", "959"],
    },
    Region {
        code: "DE",
        name: "Delaware",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(39.739072, -75.539787),
            Coordinate::new(38.774055, -75.139351),
        ],
        area_codes: &["302"],
    },
    Region {
        code: "FL",
        name: "Florida",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(30.332184, -81.655647),
            Coordinate::new(25.761681, -80.191788),
        ],
        area_codes: &[
            "239", "305", "321", "352", "386", "407", "561", "727", "754", "772", "786", "813",
            "850", "863", "904", "941", "954",
        ],
    },
    Region {
        code: "GA",
        name: "Georgia",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(33.749001, -84.387985),
            Coordinate::new(32.083541, -81.099831),
        ],
        area_codes: &["229", "404", "470", "478", "678", "706", "762", "770", "912"],
    },
    Region {
        code: "HI",
        name: "Hawaii",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(21.306944, -157.858337),
            Coordinate::new(19.896767, -155.582779),
        ],
        area_codes: &["808"],
    },
    Region {
        code: "ID",
        name: "Idaho",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(43.615021, -116.202316),
            Coordinate::new(47.677683, -116.780466),
        ],
        area_codes: &["208", "986"],
    },
    Region {
        code: "IL",
        name: "Illinois",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(41.878113, -87.629799),
            Coordinate::new(40.633125, -89.398529),
        ],
        area_codes: &[
            "217", "224", "309", "312", "331", "618", "630", "708", "773", "779", "815", "847",
            "872",
        ],
    },
    Region {
        code: "IN",
        name: "Indiana",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(39.768402, -86.158066),
            Coordinate::new(41.593369, -87.346427),
        ],
        area_codes: &["219", "260", "317", "463", "574", "765", "812", "930"],
    },
    Region {
        code: "IA",
        name: "Iowa",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(41.586834, -93.625000),
            Coordinate::new(42.500000, -94.166672),
        ],
        area_codes: &["319", "515", "563", "641", "712"],
    },
    Region {
        code: "KS",
        name: "Kansas",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(39.099728, -94.578568),
            Coordinate::new(37.687176, -97.330055),
        ],
        area_codes: &["316", "620", "785", "913"],
    },
    Region {
        code: "KY",
        name: "Kentucky",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(38.252666, -85.758453),
            Coordinate::new(37.839333, -84.270020),
        ],
        area_codes: &["270", "364", "502", "606", "859"],
    },
    Region {
        code: "LA",
        name: "Louisiana",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(30.695366, -91.187393),
            Coordinate::new(29.951065, -90.071533),
        ],
        area_codes: &["225", "318", "337", "504", "985"],
    },
    Region {
        code: "ME",
        name: "Maine",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(44.310623, -69.779490),
            Coordinate::new(43.661471, -70.255325),
        ],
        area_codes: &["207"],
    },
    Region {
        code: "MD",
        name: "Maryland",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(38.978447, -76.492180),
            Coordinate::new(39.290386, -76.612190),
        ],
        area_codes: &["240", "301", "410", "443", "667"],
    },
    Region {
        code: "MA",
        name: "Massachusetts",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(42.360081, -71.058884),
            Coordinate::new(42.313373, -71.057083),
        ],
        area_codes: &["339", "351", "413", "508", "617", "774", "781", "857", "978"],
    },
    Region {
        code: "MI",
        name: "Michigan",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(42.732536, -84.555534),
            Coordinate::new(42.331429, -83.045753),
        ],
        area_codes: &[
            "231", "248", "269", "313", "517", "586", "616", "734", "810", "906", "947", "989",
        ],
    },
    Region {
        code: "MN",
        name: "Minnesota",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(44.953703, -93.089958),
            Coordinate::new(44.977753, -93.265015),
        ],
        area_codes: &["218", "320", "507", "612", "651", "763", "952"],
    },
    Region {
        code: "MS",
        name: "Mississippi",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(32.298756, -90.184807),
            Coordinate::new(32.366806, -88.703705),
        ],
        area_codes: &["228", "601", "662", "769"],
    },
    Region {
        code: "MO",
        name: "Missouri",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(38.576702, -92.173516),
            Coordinate::new(38.627003, -90.199402),
        ],
        area_codes: &["314", "417", "573", "636", "660", "816", "975"],
    },
    Region {
        code: "MT",
        name: "Montana",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(46.878717, -113.996586),
            Coordinate::new(45.783287, -108.500690),
        ],
        area_codes: &["406"],
    },
    Region {
        code: "NE",
        name: "Nebraska",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(41.256538, -95.934502),
            Coordinate::new(40.813618, -96.702595),
        ],
        area_codes: &["308", "402", "531"],
    },
    Region {
        code: "NV",
        name: "Nevada",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(39.163914, -119.767403),
            Coordinate::new(36.114647, -115.172813),
        ],
        area_codes: &["702", "725", "775"],
    },
    Region {
        code: "NH",
        name: "New Hampshire",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(43.208137, -71.538063),
            Coordinate::new(42.995640, -71.454789),
        ],
        area_codes: &["603"],
    },
    Region {
        code: "NJ",
        name: "New Jersey",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(40.058323, -74.405663),
            Coordinate::new(39.364285, -74.422928),
        ],
        area_codes: &["201", "551", "609", "732", "848", "856", "862", "908", "973"],
    },
    Region {
        code: "NM",
        name: "New Mexico",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(35.084385, -106.650421),
            Coordinate::new(32.319939, -106.763653),
        ],
        area_codes: &["505", "575"],
    },
    Region {
        code: "NY",
        name: "New York",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(40.712776, -74.005974),
            Coordinate::new(43.299427, -74.217933),
        ],
        area_codes: &[
            "212", "315", "332", "347", "516", "518", "585", "607", "631", "646", "680", "716",
            "718", "838", "845", "914", "917", "929", "934",
        ],
    },
    Region {
        code: "NC",
        name: "North Carolina",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(35.779591, -78.638176),
            Coordinate::new(35.227085, -80.843124),
        ],
        area_codes: &["252", "336", "704", "743", "828", "910", "919", "980", "984"],
    },
    Region {
        code: "ND",
        name: "North Dakota",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(46.825905, -100.778275),
            Coordinate::new(46.877186, -96.789803),
        ],
        area_codes: &["701"],
    },
    Region {
        code: "OH",
        name: "Ohio",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(39.961178, -82.998795),
            Coordinate::new(41.499321, -81.694359),
        ],
        area_codes: &[
            "216", "234", "283", "330", "380", "419", "440", "513", "567", "614", "740", "937",
        ],
    },
    Region {
        code: "OK",
        name: "Oklahoma",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(35.467560, -97.516426),
            Coordinate::new(36.153980, -95.992775),
        ],
        area_codes: &["405", "539", "580", "918"],
    },
    Region {
        code: "OR",
        name: "Oregon",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(44.046236, -123.022029),
            Coordinate::new(45.505917, -122.675049),
        ],
        area_codes: &["458", "503", "541", "971"],
    },
    Region {
        code: "PA",
        name: "Pennsylvania",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(40.273191, -76.886701),
            Coordinate::new(39.952583, -75.165222),
        ],
        area_codes: &[
            "215", "267", "272", "412", "484", "570", "610", "717", "724", "814", "835", "878",
        ],
    },
    Region {
        code: "RI",
        name: "Rhode Island",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(41.824009, -71.412834),
            Coordinate::new(41.580095, -71.477429),
        ],
        area_codes: &["401"],
    },
    Region {
        code: "SC",
        name: "South Carolina",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(34.000710, -81.034814),
            Coordinate::new(32.776474, -79.931051),
        ],
        area_codes: &["803", "839", "843", "854", "864"],
    },
    Region {
        code: "SD",
        name: "South Dakota",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(44.366787, -100.353760),
            Coordinate::new(43.544595, -96.731103),
        ],
        area_codes: &["605"],
    },
    Region {
        code: "TN",
        name: "Tennessee",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(36.162663, -86.781601),
            Coordinate::new(35.149532, -90.048981),
        ],
        area_codes: &["423", "615", "629", "731", "865", "901", "931"],
    },
    Region {
        code: "TX",
        name: "Texas",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(30.267153, -97.743057),
            Coordinate::new(29.760427, -95.369804),
        ],
        area_codes: &[
            "210", "214", "254", "281", "325", "346", "409", "430", "432", "469", "512", "682",
            "713", "737", "806", "817", "830", "832", "903", "915", "936", "940", "956", "972",
            "979",
        ],
    },
    Region {
        code: "UT",
        name: "Utah",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(40.760780, -111.891045),
            Coordinate::new(37.774929, -111.920414),
        ],
        area_codes: &["385", "435", "801"],
    },
    Region {
        code: "VT",
        name: "Vermont",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(44.260059, -72.575386),
            Coordinate::new(44.475883, -73.212074),
        ],
        area_codes: &["802"],
    },
    Region {
        code: "VA",
        name: "Virginia",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(37.540726, -77.436050),
            Coordinate::new(36.852924, -75.977982),
        ],
        area_codes: &["276", "434", "540", "571", "703", "757", "804"],
    },
    Region {
        code: "WA",
        name: "Washington",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(47.606209, -122.332069),
            Coordinate::new(47.252876, -122.444290),
        ],
        area_codes: &["206", "253", "360", "425", "509"],
    },
    Region {
        code: "WV",
        name: "West Virginia",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(38.349820, -81.632622),
            Coordinate::new(39.629527, -79.955896),
        ],
        area_codes: &["304", "681"],
    },
    Region {
        code: "WI",
        name: "Wisconsin",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(43.073051, -89.401230),
            Coordinate::new(43.038902, -87.906471),
        ],
        area_codes: &["262", "414", "534", "608", "715", "920"],
    },
    Region {
        code: "WY",
        name: "Wyoming",
        country: Country::UnitedStates,
        anchors: [
            Coordinate::new(41.140259, -104.820236),
            Coordinate::new(44.276569, -105.507391),
        ],
        area_codes: &["307"],
    },
    // Canadian Provinces and Territories
    Region {
        code: "AB",
        name: "Alberta",
        country: Country::Canada,
        anchors: [
            Coordinate::new(51.044733, -114.071883),
            Coordinate::new(53.546124, -113.493823),
        ],
        area_codes: &["403", "587", "825"],
    },
    Region {
        code: "BC",
        name: "British Columbia",
        country: Country::Canada,
        anchors: [
            Coordinate::new(49.282729, -123.120738),
            Coordinate::new(48.428421, -123.365644),
        ],
        area_codes: &["236", "250", "604", "672", "778"],
    },
    Region {
        code: "MB",
        name: "Manitoba",
        country: Country::Canada,
        anchors: [
            Coordinate::new(49.895137, -97.138374),
            Coordinate::new(50.445211, -96.823611),
        ],
        area_codes: &["204", "431"],
    },
    Region {
        code: "NB",
        name: "New Brunswick",
        country: Country::Canada,
        anchors: [
            Coordinate::new(45.963589, -66.643115),
            Coordinate::new(46.510712, -67.255044),
        ],
        area_codes: &["506"],
    },
    Region {
        code: "NL",
        name: "Newfoundland and Labrador",
        country: Country::Canada,
        anchors: [
            Coordinate::new(53.135509, -57.660435),
            Coordinate::new(50.445211, -57.100000),
        ],
        area_codes: &["709"],
    },
    Region {
        code: "NS",
        name: "Nova Scotia",
        country: Country::Canada,
        anchors: [
            Coordinate::new(44.648862, -63.575320),
            Coordinate::new(45.010474, -63.416817),
        ],
        area_codes: &["782", "902"],
    },
    Region {
        code: "ON",
        name: "Ontario",
        country: Country::Canada,
        anchors: [
            Coordinate::new(51.253775, -85.323214),
            Coordinate::new(43.653225, -79.383186),
        ],
        area_codes: &[
            "226", "249", "289", "343", "365", "416", "437", "519", "548", "613", "639", "647",
            "705", "807", "905",
        ],
    },
    Region {
        code: "PE",
        name: "Prince Edward Island",
        country: Country::Canada,
        anchors: [
            Coordinate::new(46.238240, -63.131074),
            Coordinate::new(46.492424, -63.793013),
        ],
        area_codes: &["902"],
    },
    Region {
        code: "QC",
        name: "Quebec",
        country: Country::Canada,
        anchors: [
            Coordinate::new(46.813878, -71.207980),
            Coordinate::new(45.501689, -73.567256),
        ],
        area_codes: &["418", "438", "450", "514", "579", "581", "819", "873"],
    },
    Region {
        code: "SK",
        name: "Saskatchewan",
        country: Country::Canada,
        anchors: [
            Coordinate::new(52.939915, -106.450863),
            Coordinate::new(50.445211, -104.618896),
        ],
        area_codes: &["306", "639"],
    },
    Region {
        code: "NT",
        name: "Northwest Territories",
        country: Country::Canada,
        anchors: [
            Coordinate::new(64.825544, -115.825340),
            Coordinate::new(61.251955, -114.352482),
        ],
        area_codes: &["867"],
    },
    Region {
        code: "NU",
        name: "Nunavut",
        country: Country::Canada,
        anchors: [
            Coordinate::new(64.282327, -76.614813),
            Coordinate::new(70.299598, -83.107562),
        ],
        area_codes: &["867"],
    },
    Region {
        code: "YT",
        name: "Yukon",
        country: Country::Canada,
        anchors: [
            Coordinate::new(64.282327, -135.000000),
            Coordinate::new(64.000000, -138.000000),
        ],
        area_codes: &["867"],
    },
];
