use crate::data::model::Attribution;
use crate::data::query::QueryFilter;

// ---------------------------------------------------------------------------
// Selection state owned by the presentation layer
// ---------------------------------------------------------------------------

/// Country sentinel meaning "no country selected".
pub const WORLD: &str = "World";
/// Year/category sentinel meaning "no value selected".
pub const ALL: &str = "All";

/// The active filter selection, owned by whoever drives the engine (the
/// CLI here; map/chart/table components in a full UI). Components mutate
/// their own copy and pass an immutable [`QueryFilter`] snapshot into
/// every query call; the engine itself never sees this state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected country code, `None` for the whole world.
    pub country: Option<String>,
    /// Which country a laureate is attributed to.
    pub attribution: Attribution,
    /// Selected award year, `None` for all years.
    pub year: Option<String>,
    /// Selected category, `None` for all categories. Carried for
    /// presentation collaborators (titles, the detail table); no core
    /// aggregate consumes it.
    pub category: Option<String>,
}

/// Decode a selection value that may be a sentinel. `"World"`, `"All"`,
/// and the empty string all mean "no filter"; an absent value does too,
/// so both representations land on `None`.
fn decode(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == WORLD || trimmed == ALL {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl Selection {
    /// Select a country by code, or clear it with `"World"`.
    pub fn select_country(&mut self, raw: &str) {
        self.country = decode(raw);
    }

    /// Select an award year, or clear it with `"All"`.
    pub fn select_year(&mut self, raw: &str) {
        self.year = decode(raw);
    }

    /// Select a category, or clear it with `"All"`.
    pub fn select_category(&mut self, raw: &str) {
        self.category = decode(raw);
    }

    /// Switch between birth- and death-country attribution.
    pub fn set_attribution(&mut self, attribution: Attribution) {
        self.attribution = attribution;
    }

    /// Reset to the unfiltered view.
    pub fn clear(&mut self) {
        *self = Selection {
            attribution: self.attribution,
            ..Selection::default()
        };
    }

    /// The immutable snapshot handed to the engine.
    pub fn query_filter(&self) -> QueryFilter {
        QueryFilter {
            country: self.country.clone(),
            attribution: self.attribution,
            year: self.year.clone(),
        }
    }

    /// Country label for titles: the code, or the world sentinel.
    pub fn country_label(&self) -> &str {
        self.country.as_deref().unwrap_or(WORLD)
    }

    /// Year label for titles: the year, or the all-years sentinel.
    pub fn year_label(&self) -> &str {
        self.year.as_deref().unwrap_or(ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_clear_the_selection() {
        let mut selection = Selection::default();
        selection.select_country("FR");
        selection.select_year("1905");
        assert_eq!(selection.country.as_deref(), Some("FR"));

        selection.select_country(WORLD);
        selection.select_year(ALL);
        assert_eq!(selection.country, None);
        assert_eq!(selection.year, None);
    }

    #[test]
    fn empty_string_means_no_filter() {
        let mut selection = Selection::default();
        selection.select_country("");
        selection.select_category("  ");
        assert_eq!(selection.country, None);
        assert_eq!(selection.category, None);
    }

    #[test]
    fn clear_keeps_the_attribution_mode() {
        let mut selection = Selection::default();
        selection.set_attribution(Attribution::Died);
        selection.select_country("DE");
        selection.clear();
        assert_eq!(selection.country, None);
        assert_eq!(selection.attribution, Attribution::Died);
    }

    #[test]
    fn snapshot_carries_the_selection() {
        let mut selection = Selection::default();
        selection.select_country("SE");
        selection.select_year("1901");
        let filter = selection.query_filter();
        assert_eq!(filter.country.as_deref(), Some("SE"));
        assert_eq!(filter.year.as_deref(), Some("1901"));
    }
}
