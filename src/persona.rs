use crate::models::{Persona, PersonRecord};
use crate::services::PersonService;
use rand::seq::SliceRandom;
use rand::Rng;

const FALLBACK_FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Emily", "Chris", "Katie", "Mike", "Laura", "David", "Sarah",
];

const FALLBACK_LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Brown",
    "Williams",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

/// Gender reported for personas built from the fallback lists.
pub const UNKNOWN_GENDER: &str = "Unknown";

/// Produces the name/gender shown next to the address.
///
/// The person service is best-effort: any failure falls back to the local
/// name lists, so `resolve` never returns an error.
#[derive(Clone)]
pub struct PersonaResolver {
    persons: PersonService,
}

impl PersonaResolver {
    pub fn new(persons: PersonService) -> Self {
        Self { persons }
    }

    pub async fn resolve(&self) -> Persona {
        match self.persons.fetch_person().await {
            Ok(Some(record)) if is_usable(&record) => persona_from_record(record),
            Ok(Some(_)) => {
                tracing::info!("Person API returned an incomplete record, using fallback names");
                fallback_persona(&mut rand::thread_rng())
            }
            Ok(None) => {
                tracing::info!("Person API returned no records, using fallback names");
                fallback_persona(&mut rand::thread_rng())
            }
            Err(e) => {
                tracing::warn!("Person API unavailable, using fallback names: {}", e);
                fallback_persona(&mut rand::thread_rng())
            }
        }
    }
}

fn is_usable(record: &PersonRecord) -> bool {
    [&record.firstname, &record.lastname, &record.gender]
        .iter()
        .all(|field| !field.trim().is_empty())
}

fn persona_from_record(record: PersonRecord) -> Persona {
    Persona {
        name: format!("{} {}", record.firstname, record.lastname),
        gender: capitalize_first(&record.gender),
    }
}

/// Random first/last name pair from the built-in lists, gender unknown.
pub fn fallback_persona(rng: &mut impl Rng) -> Persona {
    let first = FALLBACK_FIRST_NAMES.choose(rng).copied().unwrap_or("John");
    let last = FALLBACK_LAST_NAMES.choose(rng).copied().unwrap_or("Smith");
    Persona {
        name: format!("{} {}", first, last),
        gender: UNKNOWN_GENDER.to_string(),
    }
}

pub fn is_fallback_name(name: &str) -> bool {
    name.split_once(' ').is_some_and(|(first, last)| {
        FALLBACK_FIRST_NAMES.contains(&first) && FALLBACK_LAST_NAMES.contains(&last)
    })
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_record_mapping() {
        let persona = persona_from_record(PersonRecord {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            gender: "female".to_string(),
        });
        assert_eq!(persona.name, "Ada Lovelace");
        assert_eq!(persona.gender, "Female");
    }

    #[test]
    fn test_blank_fields_are_not_usable() {
        let record = |gender: &str| PersonRecord {
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            gender: gender.to_string(),
        };
        assert!(is_usable(&record("female")));
        assert!(!is_usable(&record("")));
        assert!(!is_usable(&record("  ")));
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("male"), "Male");
        assert_eq!(capitalize_first("Male"), "Male");
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("éva"), "Éva");
    }

    #[test]
    fn test_fallback_persona() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let persona = fallback_persona(&mut rng);
            assert!(is_fallback_name(&persona.name), "{}", persona.name);
            assert_eq!(persona.gender, UNKNOWN_GENDER);
        }
    }

    #[test]
    fn test_is_fallback_name() {
        assert!(is_fallback_name("Katie Garcia"));
        assert!(!is_fallback_name("Ada Lovelace"));
        assert!(!is_fallback_name("Katie"));
    }
}
