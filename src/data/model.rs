use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Laureate – one person or organization from the laureates file
// ---------------------------------------------------------------------------

/// A prize recipient. Organizations carry their name in `firstname` and
/// have no `surname`; either, both, or neither country code may be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laureate {
    /// Stable identifier, unique across the collection (numeric-as-text).
    pub id: String,
    pub firstname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(rename = "bornCountry", default, skip_serializing_if = "Option::is_none")]
    pub born_country: Option<String>,
    #[serde(rename = "bornCountryCode", default, skip_serializing_if = "Option::is_none")]
    pub born_country_code: Option<String>,
    #[serde(rename = "diedCountry", default, skip_serializing_if = "Option::is_none")]
    pub died_country: Option<String>,
    #[serde(rename = "diedCountryCode", default, skip_serializing_if = "Option::is_none")]
    pub died_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Which country a laureate is attributed to when grouping or matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Attribution {
    /// Always the birth country.
    #[default]
    Born,
    /// The death country when known, falling back to the birth country.
    /// There is no symmetric born-with-death-fallback mode.
    Died,
}

impl Laureate {
    /// The country code this laureate counts toward under the given mode,
    /// or `None` when the mode resolves to a missing code.
    pub fn attributed_country(&self, attribution: Attribution) -> Option<&str> {
        match attribution {
            Attribution::Died if self.died_country_code.is_some() => {
                self.died_country_code.as_deref()
            }
            _ => self.born_country_code.as_deref(),
        }
    }

    /// Display name: "Firstname Surname", or just the organization name.
    pub fn full_name(&self) -> String {
        match &self.surname {
            Some(surname) => format!("{} {}", self.firstname, surname),
            None => self.firstname.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Prize – one award instance from the prizes file
// ---------------------------------------------------------------------------

/// A laureate reference on a prize. `id` points into the laureate
/// collection; resolving it may fail and callers must treat that as a
/// skip, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrizeLaureate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
}

/// A single award: one year, one category, shared by 1..N laureates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prize {
    /// Award year, kept as text like the source data; parsed only when a
    /// series needs a numeric axis.
    pub year: String,
    pub category: String,
    #[serde(rename = "overallMotivation", default, skip_serializing_if = "Option::is_none")]
    pub overall_motivation: Option<String>,
    #[serde(default)]
    pub laureates: Vec<PrizeLaureate>,
}

// ---------------------------------------------------------------------------
// AwardDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Both source collections plus a laureate id index built once at load.
/// Immutable for the session; every query recomputes from these.
#[derive(Debug, Clone)]
pub struct AwardDataset {
    pub laureates: Vec<Laureate>,
    pub prizes: Vec<Prize>,
    /// laureate id → position in `laureates`. First record wins for a
    /// duplicated id, matching a first-match linear scan.
    id_index: HashMap<String, usize>,
}

impl AwardDataset {
    /// Build the id index from the loaded collections.
    pub fn from_records(laureates: Vec<Laureate>, prizes: Vec<Prize>) -> Self {
        let mut id_index = HashMap::with_capacity(laureates.len());
        for (i, laureate) in laureates.iter().enumerate() {
            id_index.entry(laureate.id.clone()).or_insert(i);
        }
        AwardDataset {
            laureates,
            prizes,
            id_index,
        }
    }

    /// Resolve a prize's laureate reference. `None` for unknown ids.
    pub fn laureate_by_id(&self, id: &str) -> Option<&Laureate> {
        self.id_index.get(id).map(|&i| &self.laureates[i])
    }

    /// Number of laureate records.
    pub fn len(&self) -> usize {
        self.laureates.len()
    }

    /// Whether the dataset holds no laureates.
    pub fn is_empty(&self) -> bool {
        self.laureates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laureate(id: &str, born: Option<&str>, died: Option<&str>) -> Laureate {
        Laureate {
            id: id.to_string(),
            firstname: "Test".to_string(),
            surname: None,
            born_country: None,
            born_country_code: born.map(str::to_string),
            died_country: None,
            died_country_code: died.map(str::to_string),
            gender: None,
        }
    }

    #[test]
    fn died_mode_falls_back_to_born_country() {
        let l = laureate("1", Some("FR"), None);
        assert_eq!(l.attributed_country(Attribution::Born), Some("FR"));
        assert_eq!(l.attributed_country(Attribution::Died), Some("FR"));
    }

    #[test]
    fn died_mode_prefers_death_country() {
        let l = laureate("1", Some("US"), Some("GB"));
        assert_eq!(l.attributed_country(Attribution::Born), Some("US"));
        assert_eq!(l.attributed_country(Attribution::Died), Some("GB"));
    }

    #[test]
    fn no_codes_resolve_to_none_in_both_modes() {
        let l = laureate("1", None, None);
        assert_eq!(l.attributed_country(Attribution::Born), None);
        assert_eq!(l.attributed_country(Attribution::Died), None);
    }

    #[test]
    fn duplicate_id_keeps_first_record() {
        let ds = AwardDataset::from_records(
            vec![
                laureate("7", Some("SE"), None),
                laureate("7", Some("NO"), None),
            ],
            Vec::new(),
        );
        let found = ds.laureate_by_id("7").unwrap();
        assert_eq!(found.born_country_code.as_deref(), Some("SE"));
        assert!(ds.laureate_by_id("8").is_none());
    }
}
